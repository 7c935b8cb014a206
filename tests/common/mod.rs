#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;

/// Activity details that pass validation.
pub const ACTIVITY_LINES: [&str; 7] = [
    "set activityName \"Board Game Night\"",
    "set category \"Sports and Fitness\"",
    "set aboutActivity \"Weekly meetup\"",
    "set activityType Indoor",
    "set locationType \"Provider Location\"",
    "set minMembers 2",
    "set maxMembers 10",
];

/// Location details that pass validation.
pub const LOCATION_LINES: [&str; 5] = [
    "set addressLine1 \"12 MG Road\"",
    "set zipCode 560001",
    "set city Bengaluru",
    "set state Karnataka",
    "set contactNumber 9876543210",
];

/// Joins script lines into stdin for the shell.
pub fn script(groups: &[&[&str]]) -> String {
    let mut input = String::new();
    for line in groups.iter().flat_map(|group| group.iter()) {
        input.push_str(line);
        input.push('\n');
    }
    input
}

/// The shell in script mode with an isolated home and no colour.
pub fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("activity_form_cli").expect("binary builds");
    cmd.env("ACTIVITY_FORM_CLI_SCRIPT", "1")
        .env("ACTIVITY_FORM_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("ACTIVITY_FORM_TEST_INPUTS")
        .env_remove("RUST_LOG");
    cmd
}
