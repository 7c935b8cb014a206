use activity_form::cli::style::UiStyle;
use activity_form::cli::views::{render, render_step, render_success};
use activity_form::wizard::{MemorySink, SubmissionAck, Wizard};
use activity_form::domain::{ActivityField, LocationField};
use chrono::{TimeZone, Utc};
use insta::assert_snapshot;
use uuid::Uuid;

fn filled_activity(wizard: &mut Wizard) {
    let entries = [
        (ActivityField::ActivityName, "Board Game Night"),
        (ActivityField::Category, "Sports and Fitness"),
        (ActivityField::AboutActivity, "Weekly meetup"),
        (ActivityField::ActivityType, "Indoor"),
        (ActivityField::LocationType, "Provider Location"),
        (ActivityField::MinMembers, "2"),
        (ActivityField::MaxMembers, "10"),
    ];
    for (field, value) in entries {
        wizard.edit_activity(field, value).unwrap();
    }
}

#[test]
fn fresh_wizard_shows_placeholders() {
    let wizard = Wizard::new();
    assert_snapshot!(render(&wizard, &UiStyle::plain()), @r###"
    > Create new Activity
      > 1. Activity Details
        2. Location Details

    > Activity Details
      Activity Name *: (Eg: cooking food)
      Category *: (Select the best category to describe your activity)
      About the Activity *: (Activity Description)
      Activity Type *: (Please select the activity type)
      Location Type *: (Please select the type of location)
      Minimum Members: (How many members can take part in the activity?)
      Maximum Members: (How many members can take part in the activity?)
    "###);
}

#[test]
fn blocked_activity_step_lists_errors_under_their_fields() {
    let mut wizard = Wizard::new();
    wizard.advance().unwrap();
    assert_snapshot!(render_step(wizard.view(), &UiStyle::plain()), @r###"
    > Activity Details
      Activity Name *: (Eg: cooking food)
        ! Activity name is required
      Category *: (Select the best category to describe your activity)
        ! Please select a category
      About the Activity *: (Activity Description)
        ! Activity description is required
      Activity Type *: (Please select the activity type)
        ! Please select an activity type
      Location Type *: (Please select the type of location)
        ! Please select a location type
      Minimum Members: (How many members can take part in the activity?)
      Maximum Members: (How many members can take part in the activity?)
    "###);
}

#[test]
fn other_category_and_member_errors_render_in_place() {
    let mut wizard = Wizard::new();
    filled_activity(&mut wizard);
    wizard.edit_activity(ActivityField::Category, "Other").unwrap();
    wizard.edit_activity(ActivityField::MinMembers, "10").unwrap();
    wizard.edit_activity(ActivityField::MaxMembers, "2").unwrap();
    wizard.advance().unwrap();

    assert_snapshot!(render_step(wizard.view(), &UiStyle::plain()), @r###"
    > Activity Details
      Activity Name *: Board Game Night
      Category *: Other
      Specify the category: (Specify the category)
        ! Please specify the category
      About the Activity *: Weekly meetup
      Activity Type *: Indoor
      Location Type *: Provider Location
      Minimum Members: 10
      Maximum Members: 2
        ! Minimum members must be less than or equal to maximum members
    "###);
}

#[test]
fn location_step_groups_address_and_contact_details() {
    let mut wizard = Wizard::new();
    filled_activity(&mut wizard);
    wizard.advance().unwrap();
    let entries = [
        (LocationField::AddressLine1, "12 MG Road"),
        (LocationField::ZipCode, "560001"),
        (LocationField::City, "Bengaluru"),
        (LocationField::State, "Karnataka"),
        (LocationField::ContactNumber, "555-123"),
    ];
    for (field, value) in entries {
        wizard.edit_location(field, value).unwrap();
    }
    wizard.submit(&mut MemorySink::new()).unwrap();

    assert_snapshot!(render_step(wizard.view(), &UiStyle::plain()), @r###"
    > Location Details
      Please specify the address for where the activity takes place.
      Address Line 1 *: 12 MG Road
      Address Line 2: (Other information, e.g., building name, landmark, etc.)
      ZIP Code *: 560001
      City *: Bengaluru
      State *: Karnataka

    > Contact details
      Please provide contact information for this activity.
      Country Code: IN India (+91)
      Contact Number *: 555-123
        ! Contact number must be exactly 10 digits
      Contact Name: (Contact Name)
    "###);
}

#[test]
fn success_overlay_shows_the_receipt() {
    let ack = SubmissionAck {
        id: Uuid::nil(),
        received_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    };
    assert_snapshot!(render_success(&ack, &UiStyle::plain()), @r###"
    > Form Submitted
      Your activity form has been successfully submitted.
      Submission id: 00000000
      Type `dismiss` to create another activity.
    "###);
}

#[test]
fn completed_wizard_has_no_active_step() {
    let mut wizard = Wizard::new();
    filled_activity(&mut wizard);
    wizard.advance().unwrap();
    for (field, value) in [
        (LocationField::AddressLine1, "1 Main St"),
        (LocationField::ZipCode, "400001"),
        (LocationField::City, "Mumbai"),
        (LocationField::State, "Maharashtra"),
        (LocationField::ContactNumber, "9999999999"),
    ] {
        wizard.edit_location(field, value).unwrap();
    }
    wizard.submit(&mut MemorySink::new()).unwrap();

    let rendered = render(&wizard, &UiStyle::plain());
    assert!(rendered.starts_with(
        "> Create new Activity\n    1. Activity Details\n    2. Location Details\n\n> Form Submitted"
    ));
}
