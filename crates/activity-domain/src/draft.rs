//! In-progress data for each wizard step plus the identifiers of their fields.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::choices::{ActivityType, Category, Choice, LocationType, ParseChoiceError};
use crate::reference::{ReferenceData, DEFAULT_COUNTRY_CODE};

/// How a field collects its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    Text,
    LongText,
    /// Single selection from a fixed list.
    Choice,
    /// Non-negative whole number typed as digits.
    Count,
    /// Digits-only phone number.
    Phone,
}

/// Fields of the activity details step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActivityField {
    ActivityName,
    Category,
    OtherCategory,
    AboutActivity,
    ActivityType,
    LocationType,
    MinMembers,
    MaxMembers,
}

impl ActivityField {
    pub const ALL: [ActivityField; 8] = [
        ActivityField::ActivityName,
        ActivityField::Category,
        ActivityField::OtherCategory,
        ActivityField::AboutActivity,
        ActivityField::ActivityType,
        ActivityField::LocationType,
        ActivityField::MinMembers,
        ActivityField::MaxMembers,
    ];

    /// Stable key used by error maps and the submission record.
    pub fn key(self) -> &'static str {
        match self {
            ActivityField::ActivityName => "activityName",
            ActivityField::Category => "category",
            ActivityField::OtherCategory => "otherCategory",
            ActivityField::AboutActivity => "aboutActivity",
            ActivityField::ActivityType => "activityType",
            ActivityField::LocationType => "locationType",
            ActivityField::MinMembers => "minMembers",
            ActivityField::MaxMembers => "maxMembers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityField::ActivityName => "Activity Name",
            ActivityField::Category => "Category",
            ActivityField::OtherCategory => "Specify the category",
            ActivityField::AboutActivity => "About the Activity",
            ActivityField::ActivityType => "Activity Type",
            ActivityField::LocationType => "Location Type",
            ActivityField::MinMembers => "Minimum Members",
            ActivityField::MaxMembers => "Maximum Members",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ActivityField::ActivityName => "Eg: cooking food",
            ActivityField::Category => "Select the best category to describe your activity",
            ActivityField::OtherCategory => "Specify the category",
            ActivityField::AboutActivity => "Activity Description",
            ActivityField::ActivityType => "Please select the activity type",
            ActivityField::LocationType => "Please select the type of location",
            ActivityField::MinMembers | ActivityField::MaxMembers => {
                "How many members can take part in the activity?"
            }
        }
    }

    /// Whether the field carries a required marker.
    pub fn required(self) -> bool {
        !matches!(
            self,
            ActivityField::MinMembers | ActivityField::MaxMembers | ActivityField::OtherCategory
        )
    }

    pub fn input(self) -> FieldInput {
        match self {
            ActivityField::ActivityName | ActivityField::OtherCategory => FieldInput::Text,
            ActivityField::AboutActivity => FieldInput::LongText,
            ActivityField::Category | ActivityField::ActivityType | ActivityField::LocationType => {
                FieldInput::Choice
            }
            ActivityField::MinMembers | ActivityField::MaxMembers => FieldInput::Count,
        }
    }

    /// Option labels for choice fields, empty otherwise.
    pub fn options(self) -> Vec<&'static str> {
        match self {
            ActivityField::Category => Category::labels(),
            ActivityField::ActivityType => ActivityType::labels(),
            ActivityField::LocationType => LocationType::labels(),
            _ => Vec::new(),
        }
    }
}

impl FromStr for ActivityField {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = normalize_key(s);
        ActivityField::ALL
            .into_iter()
            .find(|field| normalize_key(field.key()) == needle)
            .ok_or_else(|| ParseChoiceError::new("activity field", s))
    }
}

/// Fields of the location details step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LocationField {
    AddressLine1,
    AddressLine2,
    ZipCode,
    City,
    State,
    CountryCode,
    ContactNumber,
    ContactName,
}

impl LocationField {
    pub const ALL: [LocationField; 8] = [
        LocationField::AddressLine1,
        LocationField::AddressLine2,
        LocationField::ZipCode,
        LocationField::City,
        LocationField::State,
        LocationField::CountryCode,
        LocationField::ContactNumber,
        LocationField::ContactName,
    ];

    pub fn key(self) -> &'static str {
        match self {
            LocationField::AddressLine1 => "addressLine1",
            LocationField::AddressLine2 => "addressLine2",
            LocationField::ZipCode => "zipCode",
            LocationField::City => "city",
            LocationField::State => "state",
            LocationField::CountryCode => "countryCode",
            LocationField::ContactNumber => "contactNumber",
            LocationField::ContactName => "contactName",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LocationField::AddressLine1 => "Address Line 1",
            LocationField::AddressLine2 => "Address Line 2",
            LocationField::ZipCode => "ZIP Code",
            LocationField::City => "City",
            LocationField::State => "State",
            LocationField::CountryCode => "Country Code",
            LocationField::ContactNumber => "Contact Number",
            LocationField::ContactName => "Contact Name",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            LocationField::AddressLine1 => "House number and street name",
            LocationField::AddressLine2 => {
                "Other information, e.g., building name, landmark, etc."
            }
            LocationField::ZipCode => "eg: 123 467",
            LocationField::City => "Your City",
            LocationField::State => "Your State",
            LocationField::CountryCode => "Dialing code for the contact number",
            LocationField::ContactNumber => "Contact Number",
            LocationField::ContactName => "Contact Name",
        }
    }

    pub fn required(self) -> bool {
        !matches!(
            self,
            LocationField::AddressLine2 | LocationField::ContactName | LocationField::CountryCode
        )
    }

    pub fn input(self) -> FieldInput {
        match self {
            LocationField::State | LocationField::CountryCode => FieldInput::Choice,
            LocationField::ContactNumber => FieldInput::Phone,
            _ => FieldInput::Text,
        }
    }

    pub fn options(self, reference: &ReferenceData) -> Vec<String> {
        match self {
            LocationField::State => reference
                .subdivisions
                .iter()
                .map(|name| name.to_string())
                .collect(),
            LocationField::CountryCode => reference
                .country_codes
                .iter()
                .map(|entry| entry.display_label())
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl FromStr for LocationField {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = normalize_key(s);
        LocationField::ALL
            .into_iter()
            .find(|field| normalize_key(field.key()) == needle)
            .ok_or_else(|| ParseChoiceError::new("location field", s))
    }
}

fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|ch| !matches!(ch, '_' | '-'))
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

fn parse_optional<T: FromStr<Err = ParseChoiceError>>(
    value: &str,
) -> Result<Option<T>, ParseChoiceError> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// Unvalidated activity details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDraft {
    pub activity_name: String,
    pub category: Option<Category>,
    pub other_category: String,
    pub about_activity: String,
    pub activity_type: Option<ActivityType>,
    pub location_type: Option<LocationType>,
    pub min_members: String,
    pub max_members: String,
}

impl ActivityDraft {
    /// Stores a single field. Choice fields accept their labels; blank unsets them.
    pub fn set(&mut self, field: ActivityField, value: &str) -> Result<(), ParseChoiceError> {
        match field {
            ActivityField::ActivityName => self.activity_name = value.to_string(),
            ActivityField::Category => self.category = parse_optional(value)?,
            ActivityField::OtherCategory => self.other_category = value.to_string(),
            ActivityField::AboutActivity => self.about_activity = value.to_string(),
            ActivityField::ActivityType => self.activity_type = parse_optional(value)?,
            ActivityField::LocationType => self.location_type = parse_optional(value)?,
            ActivityField::MinMembers => self.min_members = value.to_string(),
            ActivityField::MaxMembers => self.max_members = value.to_string(),
        }
        Ok(())
    }

    /// Current value as displayed text; unset choices read as empty.
    pub fn value(&self, field: ActivityField) -> String {
        match field {
            ActivityField::ActivityName => self.activity_name.clone(),
            ActivityField::Category => choice_text(self.category),
            ActivityField::OtherCategory => self.other_category.clone(),
            ActivityField::AboutActivity => self.about_activity.clone(),
            ActivityField::ActivityType => choice_text(self.activity_type),
            ActivityField::LocationType => choice_text(self.location_type),
            ActivityField::MinMembers => self.min_members.clone(),
            ActivityField::MaxMembers => self.max_members.clone(),
        }
    }

    /// The free-text override only applies while `Other` is selected.
    pub fn wants_other_category(&self) -> bool {
        self.category == Some(Category::Other)
    }
}

fn choice_text<T: Choice>(value: Option<T>) -> String {
    value.map(|choice| choice.label().to_string()).unwrap_or_default()
}

/// Unvalidated location and contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDraft {
    pub address_line1: String,
    pub address_line2: String,
    pub zip_code: String,
    pub city: String,
    pub state: Option<String>,
    pub contact_number: String,
    pub contact_name: String,
    pub country_code: String,
}

impl Default for LocationDraft {
    fn default() -> Self {
        Self::with_country_code(DEFAULT_COUNTRY_CODE)
    }
}

impl LocationDraft {
    pub fn with_country_code(code: impl Into<String>) -> Self {
        Self {
            address_line1: String::new(),
            address_line2: String::new(),
            zip_code: String::new(),
            city: String::new(),
            state: None,
            contact_number: String::new(),
            contact_name: String::new(),
            country_code: code.into(),
        }
    }

    /// Stores a single field. `state` and `countryCode` must name listed entries;
    /// a blank country code falls back to the default.
    pub fn set(
        &mut self,
        field: LocationField,
        value: &str,
        reference: &ReferenceData,
    ) -> Result<(), ParseChoiceError> {
        match field {
            LocationField::AddressLine1 => self.address_line1 = value.to_string(),
            LocationField::AddressLine2 => self.address_line2 = value.to_string(),
            LocationField::ZipCode => self.zip_code = value.to_string(),
            LocationField::City => self.city = value.to_string(),
            LocationField::State => {
                self.state = if value.trim().is_empty() {
                    None
                } else {
                    let name = reference
                        .subdivision(value)
                        .ok_or_else(|| ParseChoiceError::new("state", value))?;
                    Some(name.to_string())
                };
            }
            LocationField::CountryCode => {
                self.country_code = if value.trim().is_empty() {
                    DEFAULT_COUNTRY_CODE.to_string()
                } else {
                    reference
                        .country(value)
                        .map(|entry| entry.code.to_string())
                        .ok_or_else(|| ParseChoiceError::new("country code", value))?
                };
            }
            LocationField::ContactNumber => self.contact_number = value.to_string(),
            LocationField::ContactName => self.contact_name = value.to_string(),
        }
        Ok(())
    }

    pub fn value(&self, field: LocationField) -> String {
        match field {
            LocationField::AddressLine1 => self.address_line1.clone(),
            LocationField::AddressLine2 => self.address_line2.clone(),
            LocationField::ZipCode => self.zip_code.clone(),
            LocationField::City => self.city.clone(),
            LocationField::State => self.state.clone().unwrap_or_default(),
            LocationField::CountryCode => self.country_code.clone(),
            LocationField::ContactNumber => self.contact_number.clone(),
            LocationField::ContactName => self.contact_name.clone(),
        }
    }
}
