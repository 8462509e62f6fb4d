//! Spawns the real binary with scripted prompt queues, exercising the whole
//! wizard without a terminal.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TEXT_INPUTS_VAR: &str = "INQUIRY_TEST_TEXT_INPUTS";
const MENU_SELECTIONS_VAR: &str = "INQUIRY_TEST_MENU_SELECTIONS";
const SERVICE_SELECTIONS_VAR: &str = "INQUIRY_TEST_SERVICE_SELECTIONS";

fn cli(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("inquiry_cli").expect("binary builds");
    cmd.env("XDG_CONFIG_HOME", config_dir.path())
        .env("HOME", config_dir.path())
        .arg("--plain");
    cmd
}

#[test]
fn help_prints_usage() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"))
        .stdout(predicate::str::contains("--event"));
}

#[test]
fn misspelled_event_flag_suggests_the_closest_label() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["--event", "Weding"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown event type"))
        .stderr(predicate::str::contains("Wedding"));
}

#[test]
fn escaping_the_welcome_menu_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .env(MENU_SELECTIONS_VAR, "ESC")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aperture Stories"));
}

#[test]
fn family_portrait_inquiry_runs_start_to_finish() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["--event", "Family Portrait"])
        .env(
            TEXT_INPUTS_VAR,
            // Step 1: family name, session date, family size, children's
            // ages, location, personality, style. Step 2: name, email, phone.
            "The Sharma Family|2026-09-12|4|5, 9|Riverside Park|\
             Playful and energetic|Natural and candid|\
             Meera Sharma|meera@example.com|<BLANK>",
        )
        // Session duration, preferred contact, review submit, then exit.
        .env(MENU_SELECTIONS_VAR, "2|1|0|1")
        .env(SERVICE_SELECTIONS_VAR, "0,2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 of 3"))
        .stdout(predicate::str::contains("Event Type: Family Portrait"))
        .stdout(predicate::str::contains("Event Date: 2026-09-12"))
        .stdout(predicate::str::contains(
            "Candid Photography, Traditional Photography",
        ))
        .stdout(predicate::str::contains("Name: Meera Sharma"))
        .stdout(predicate::str::contains("Email: meera@example.com"))
        .stdout(predicate::str::contains("Preferred Contact: email"))
        .stdout(predicate::str::contains("Inquiry Received"))
        .stdout(predicate::str::contains("Reference: "));
}

#[test]
fn blank_required_fields_block_until_filled() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["--event", "Family Portrait"])
        .env(
            TEXT_INPUTS_VAR,
            // First pass leaves the family name blank and gets blocked; the
            // second pass fills it and keeps the session date already typed.
            "<BLANK>|2026-09-12|<BLANK>|<BLANK>|<BLANK>|<BLANK>|<BLANK>|\
             The Sharma Family|<KEEP>|<BLANK>|<BLANK>|<BLANK>|<BLANK>|<BLANK>|\
             Meera|meera@example.com|<BLANK>",
        )
        .env(MENU_SELECTIONS_VAR, "0|0|0|0|1")
        .env(SERVICE_SELECTIONS_VAR, "NONE")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please fill in all required fields before continuing.",
        ))
        .stdout(predicate::str::contains("- Family name"))
        .stdout(predicate::str::contains("Inquiry Received"));
}

#[test]
fn wedding_flow_collects_timeline_rows() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["--event", "Wedding"])
        .env(
            TEXT_INPUTS_VAR,
            // Step 1 fields, first timeline row, added second row, contacts.
            "Asha|Ravi|2026-01-10|Garden Hall|We met at a concert|<BLANK>|<BLANK>|<BLANK>|\
             Ceremony|100|2|\
             Reception|150|4|\
             Asha|asha@example.com|<BLANK>",
        )
        // Timeline: add one event, then continue; preferred contact, review
        // submit, exit.
        .env(MENU_SELECTIONS_VAR, "1|0|0|0|1")
        .env(SERVICE_SELECTIONS_VAR, "0,1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wedding Events Timeline"))
        .stdout(predicate::str::contains("Couple: Asha & Ravi"))
        .stdout(predicate::str::contains("Wedding Date: 2026-01-10"))
        .stdout(predicate::str::contains("Venue: Garden Hall"))
        .stdout(predicate::str::contains("Candid Photography, Wedding Film"));
}
