mod common;

use assert_fs::TempDir;
use predicates::prelude::*;
use predicates::str::contains;
use regex::Regex;

use common::{cli, script, ACTIVITY_LINES, LOCATION_LINES};

#[test]
fn script_mode_submits_a_complete_activity() {
    let home = TempDir::new().unwrap();
    let input = script(&[&ACTIVITY_LINES, &["next"], &LOCATION_LINES, &["submit", "exit"]]);

    let output = cli(&home).write_stdin(input).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Activity details saved."));
    assert!(stdout.contains("Please specify the address for where the activity takes place."));
    assert!(stdout.contains("Form Submitted"));
    assert!(stdout.contains("Your activity form has been successfully submitted."));
    let accepted = Regex::new(r"Submission [0-9a-f]{8} accepted\.").unwrap();
    assert!(accepted.is_match(&stdout), "stdout was:\n{stdout}");
}

#[test]
fn inverted_member_counts_block_the_first_step() {
    let home = TempDir::new().unwrap();
    let input = script(&[
        &ACTIVITY_LINES,
        &["set minMembers 10", "set maxMembers 2", "next", "errors"],
    ]);

    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Please fix 1 field before continuing."))
        .stdout(contains(
            "members: Minimum members must be less than or equal to maximum members",
        ));
}

#[test]
fn short_contact_number_blocks_submission() {
    let home = TempDir::new().unwrap();
    let input = script(&[
        &ACTIVITY_LINES,
        &["next"],
        &LOCATION_LINES,
        &["set contactNumber 555-123", "submit"],
    ]);

    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Contact number must be exactly 10 digits"))
        .stdout(contains("Form Submitted").not());
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("sumbit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `sumbit`"))
        .stdout(contains("Suggestion: `submit`?"));
}

#[test]
fn actions_from_the_wrong_step_are_reported() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("submit\nset city Pune\ndismiss\n")
        .assert()
        .success()
        .stdout(contains("Cannot submit while on Activity Details"))
        .stdout(contains("Cannot edit location details while on Activity Details"))
        .stdout(contains("Fill in the activity details, then type `next`."));
}

#[test]
fn contact_number_mask_refuses_an_eleventh_digit() {
    let home = TempDir::new().unwrap();
    let input = script(&[&ACTIVITY_LINES, &["next", "set contactNumber 555-123-45678"]]);

    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Contact Number accepts at most 10 digits"));
}

#[test]
fn dismiss_starts_over_with_empty_fields() {
    let home = TempDir::new().unwrap();
    let input = script(&[
        &ACTIVITY_LINES,
        &["next"],
        &LOCATION_LINES,
        &["submit", "dismiss"],
    ]);

    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Starting a new activity."))
        .stdout(contains("Activity Name *: (Eg: cooking food)"));
}

#[test]
fn stdout_sink_prints_the_submitted_record() {
    let home = TempDir::new().unwrap();
    let input = script(&[
        &["config set sink stdout"],
        &ACTIVITY_LINES,
        &["next"],
        &LOCATION_LINES,
        &["submit"],
    ]);

    let output = cli(&home).write_stdin(input).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"activityName\": \"Board Game Night\""));
    assert!(stdout.contains("\"countryCode\": \"+91\""));
    let id = Regex::new(r#""id": "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}""#)
        .unwrap();
    assert!(id.is_match(&stdout), "stdout was:\n{stdout}");
}

#[test]
fn guided_mode_reads_scripted_answers() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .env(
            "ACTIVITY_FORM_TEST_INPUTS",
            "Board Game Night|Sports and Fitness|Weekly meetup|Indoor|Provider Location|2|10",
        )
        .write_stdin("guided\n")
        .assert()
        .success()
        .stdout(contains("Activity details saved."))
        .stdout(contains("Contact details"));
}

#[test]
fn guided_mode_needs_a_terminal_in_scripts() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("guided\n")
        .assert()
        .success()
        .stdout(contains("`guided` needs an interactive terminal"));
}

#[test]
fn version_reports_the_package_version() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("version\n")
        .assert()
        .success()
        .stdout(contains(format!(
            "Activity Form {}",
            env!("CARGO_PKG_VERSION")
        )));
}
