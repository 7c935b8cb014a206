//! Step validation rules.
//!
//! Each rule set maps a draft to an [`ErrorMap`]. An empty map means the step
//! may proceed; failures are data, never `Err`.

use activity_domain::{ActivityDraft, ActivityField, LocationDraft, LocationField};

use crate::error_map::ErrorMap;
use crate::masks::{digit_count, CONTACT_NUMBER_DIGITS};

/// Cross-field key for the member-count rules. Not attached to either input.
pub const MEMBERS_KEY: &str = "members";

pub const MSG_ACTIVITY_NAME_REQUIRED: &str = "Activity name is required";
pub const MSG_CATEGORY_REQUIRED: &str = "Please select a category";
pub const MSG_OTHER_CATEGORY_REQUIRED: &str = "Please specify the category";
pub const MSG_ABOUT_REQUIRED: &str = "Activity description is required";
pub const MSG_ACTIVITY_TYPE_REQUIRED: &str = "Please select an activity type";
pub const MSG_LOCATION_TYPE_REQUIRED: &str = "Please select a location type";
pub const MSG_MEMBERS_ORDER: &str = "Minimum members must be less than or equal to maximum members";
pub const MSG_MEMBERS_NOT_WHOLE: &str = "Member counts must be whole numbers of zero or more";

pub const MSG_ADDRESS_REQUIRED: &str = "Address line 1 is required";
pub const MSG_ZIP_REQUIRED: &str = "ZIP code is required";
pub const MSG_CITY_REQUIRED: &str = "City is required";
pub const MSG_STATE_REQUIRED: &str = "State is required";
pub const MSG_CONTACT_REQUIRED: &str = "Contact number is required";
pub const MSG_CONTACT_DIGITS: &str = "Contact number must be exactly 10 digits";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A non-empty member count as typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemberBound<'a> {
    /// Digits with leading zeros stripped; any length.
    Whole(&'a str),
    NotWhole,
}

impl<'a> MemberBound<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if !trimmed.chars().all(|ch| ch.is_ascii_digit()) {
            return Some(MemberBound::NotWhole);
        }
        Some(MemberBound::Whole(trimmed.trim_start_matches('0')))
    }
}

/// Numeric comparison of normalized digit strings without a width limit.
fn exceeds(min: &str, max: &str) -> bool {
    min.len()
        .cmp(&max.len())
        .then_with(|| min.cmp(max))
        .is_gt()
}

pub fn validate_activity(draft: &ActivityDraft) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if is_blank(&draft.activity_name) {
        errors.insert(ActivityField::ActivityName.key(), MSG_ACTIVITY_NAME_REQUIRED);
    }
    if draft.category.is_none() {
        errors.insert(ActivityField::Category.key(), MSG_CATEGORY_REQUIRED);
    }
    if draft.wants_other_category() && is_blank(&draft.other_category) {
        errors.insert(ActivityField::Category.key(), MSG_OTHER_CATEGORY_REQUIRED);
    }
    if is_blank(&draft.about_activity) {
        errors.insert(ActivityField::AboutActivity.key(), MSG_ABOUT_REQUIRED);
    }
    if draft.activity_type.is_none() {
        errors.insert(ActivityField::ActivityType.key(), MSG_ACTIVITY_TYPE_REQUIRED);
    }
    if draft.location_type.is_none() {
        errors.insert(ActivityField::LocationType.key(), MSG_LOCATION_TYPE_REQUIRED);
    }

    match (
        MemberBound::parse(&draft.min_members),
        MemberBound::parse(&draft.max_members),
    ) {
        (Some(MemberBound::NotWhole), _) | (_, Some(MemberBound::NotWhole)) => {
            errors.insert(MEMBERS_KEY, MSG_MEMBERS_NOT_WHOLE);
        }
        (Some(MemberBound::Whole(min)), Some(MemberBound::Whole(max))) if exceeds(min, max) => {
            errors.insert(MEMBERS_KEY, MSG_MEMBERS_ORDER);
        }
        _ => {}
    }

    errors
}

pub fn validate_location(draft: &LocationDraft) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if is_blank(&draft.address_line1) {
        errors.insert(LocationField::AddressLine1.key(), MSG_ADDRESS_REQUIRED);
    }
    if is_blank(&draft.zip_code) {
        errors.insert(LocationField::ZipCode.key(), MSG_ZIP_REQUIRED);
    }
    if is_blank(&draft.city) {
        errors.insert(LocationField::City.key(), MSG_CITY_REQUIRED);
    }
    if draft.state.is_none() {
        errors.insert(LocationField::State.key(), MSG_STATE_REQUIRED);
    }
    if is_blank(&draft.contact_number) {
        errors.insert(LocationField::ContactNumber.key(), MSG_CONTACT_REQUIRED);
    } else if digit_count(&draft.contact_number) != CONTACT_NUMBER_DIGITS {
        errors.insert(LocationField::ContactNumber.key(), MSG_CONTACT_DIGITS);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use activity_domain::{ActivityType, Category, LocationType};

    fn valid_activity() -> ActivityDraft {
        ActivityDraft {
            activity_name: "Board Game Night".into(),
            category: Some(Category::SportsAndFitness),
            other_category: String::new(),
            about_activity: "Weekly meetup".into(),
            activity_type: Some(ActivityType::Indoor),
            location_type: Some(LocationType::Provider),
            min_members: "2".into(),
            max_members: "10".into(),
        }
    }

    fn valid_location() -> LocationDraft {
        LocationDraft {
            address_line1: "12 MG Road".into(),
            zip_code: "560001".into(),
            city: "Bengaluru".into(),
            state: Some("Karnataka".into()),
            contact_number: "9876543210".into(),
            ..LocationDraft::default()
        }
    }

    #[test]
    fn complete_activity_has_no_errors() {
        assert!(validate_activity(&valid_activity()).is_empty());
    }

    #[test]
    fn each_missing_required_activity_field_reports_only_its_key() {
        let cases: [(fn(&mut ActivityDraft), &str); 5] = [
            (|d| d.activity_name = "   ".into(), "activityName"),
            (|d| d.category = None, "category"),
            (|d| d.about_activity = String::new(), "aboutActivity"),
            (|d| d.activity_type = None, "activityType"),
            (|d| d.location_type = None, "locationType"),
        ];
        for (mutate, key) in cases {
            let mut draft = valid_activity();
            mutate(&mut draft);
            let errors = validate_activity(&draft);
            assert_eq!(errors.keys().collect::<Vec<_>>(), vec![key]);
        }
    }

    #[test]
    fn inverted_member_bounds_use_the_cross_field_key() {
        let mut draft = valid_activity();
        draft.min_members = "10".into();
        draft.max_members = "2".into();
        assert_eq!(
            validate_activity(&draft),
            ErrorMap::from([(MEMBERS_KEY, MSG_MEMBERS_ORDER)])
        );
    }

    #[test]
    fn member_bounds_compare_numerically_not_lexically() {
        let mut draft = valid_activity();
        draft.min_members = "9".into();
        draft.max_members = "10".into();
        assert!(validate_activity(&draft).is_empty());
    }

    #[test]
    fn member_bounds_beyond_machine_integers_still_compare() {
        let mut draft = valid_activity();
        draft.min_members = "1".into();
        draft.max_members = "100000000000000000000".into();
        assert!(validate_activity(&draft).is_empty());

        draft.min_members = "200000000000000000000".into();
        assert_eq!(
            validate_activity(&draft),
            ErrorMap::from([(MEMBERS_KEY, MSG_MEMBERS_ORDER)])
        );
    }

    #[test]
    fn leading_zeros_do_not_change_the_comparison() {
        let mut draft = valid_activity();
        draft.min_members = "0009".into();
        draft.max_members = "10".into();
        assert!(validate_activity(&draft).is_empty());

        draft.min_members = "0".into();
        draft.max_members = "000".into();
        assert!(validate_activity(&draft).is_empty());
    }

    #[test]
    fn a_single_member_bound_is_never_an_error() {
        let mut draft = valid_activity();
        draft.min_members = "50".into();
        draft.max_members = String::new();
        assert!(validate_activity(&draft).is_empty());

        draft.min_members = String::new();
        draft.max_members = "0".into();
        assert!(validate_activity(&draft).is_empty());
    }

    #[test]
    fn negative_or_fractional_members_fail_validation_even_without_the_mask() {
        let mut draft = valid_activity();
        draft.min_members = "-1".into();
        assert_eq!(
            validate_activity(&draft).get(MEMBERS_KEY),
            Some(MSG_MEMBERS_NOT_WHOLE)
        );

        draft.min_members = String::new();
        draft.max_members = "2.5".into();
        assert_eq!(
            validate_activity(&draft).get(MEMBERS_KEY),
            Some(MSG_MEMBERS_NOT_WHOLE)
        );
        assert!(!validate_activity(&draft).contains("maxMembers"));
    }

    #[test]
    fn other_category_requires_free_text() {
        let mut draft = valid_activity();
        draft.category = Some(Category::Other);
        draft.other_category = "  ".into();
        assert_eq!(
            validate_activity(&draft),
            ErrorMap::from([("category", MSG_OTHER_CATEGORY_REQUIRED)])
        );

        draft.other_category = "Book club".into();
        assert!(validate_activity(&draft).is_empty());
    }

    #[test]
    fn free_text_is_ignored_unless_other_is_selected() {
        let mut draft = valid_activity();
        draft.other_category = String::new();
        draft.category = Some(Category::Volunteering);
        assert!(validate_activity(&draft).is_empty());
    }

    #[test]
    fn validation_is_idempotent() {
        let mut draft = valid_activity();
        draft.activity_name.clear();
        draft.min_members = "7".into();
        draft.max_members = "3".into();
        assert_eq!(validate_activity(&draft), validate_activity(&draft));
        assert_eq!(validate_activity(&draft).len(), 2);
    }

    #[test]
    fn empty_activity_reports_every_required_field() {
        let errors = validate_activity(&ActivityDraft::default());
        assert_eq!(
            errors.keys().collect::<Vec<_>>(),
            vec![
                "aboutActivity",
                "activityName",
                "activityType",
                "category",
                "locationType"
            ]
        );
    }

    #[test]
    fn complete_location_has_no_errors() {
        assert!(validate_location(&valid_location()).is_empty());
    }

    #[test]
    fn short_contact_number_reports_digit_rule() {
        let mut draft = valid_location();
        draft.contact_number = "555-123".into();
        assert_eq!(
            validate_location(&draft),
            ErrorMap::from([("contactNumber", MSG_CONTACT_DIGITS)])
        );
    }

    #[test]
    fn formatted_ten_digit_number_passes() {
        let mut draft = valid_location();
        draft.contact_number = "(987) 654-3210".into();
        assert!(validate_location(&draft).is_empty());
    }

    #[test]
    fn blank_contact_number_short_circuits_the_digit_rule() {
        let mut draft = valid_location();
        draft.contact_number = "   ".into();
        assert_eq!(
            validate_location(&draft).get("contactNumber"),
            Some(MSG_CONTACT_REQUIRED)
        );
    }

    #[test]
    fn optional_location_fields_never_error() {
        let mut draft = valid_location();
        draft.address_line2 = String::new();
        draft.contact_name = String::new();
        draft.country_code = String::new();
        assert!(validate_location(&draft).is_empty());
    }

    #[test]
    fn empty_location_reports_every_required_field() {
        let errors = validate_location(&LocationDraft::default());
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("state"), Some(MSG_STATE_REQUIRED));
        assert_eq!(errors.get("zipCode"), Some(MSG_ZIP_REQUIRED));
    }
}
