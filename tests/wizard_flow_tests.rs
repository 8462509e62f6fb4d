//! End-to-end wizard passes driven through the public library API, with
//! inputs built from the same templates the CLI renders.

use inquiry_core::domain::EventType;
use inquiry_core::templates::{self, FieldKind, StepTemplate};
use inquiry_core::wizard::{FieldInput, Phase, StepId, StepOutcome, SubmitOutcome, WizardState};

/// Builds text inputs for every non-checkbox field of a template, taking
/// values from `values` and leaving unlisted fields blank.
fn filled_inputs(template: &StepTemplate, values: &[(&str, &str)]) -> Vec<FieldInput> {
    template
        .fields
        .iter()
        .filter(|field| field.kind != FieldKind::Checkbox)
        .map(|field| {
            let value = values
                .iter()
                .find(|(key, _)| *key == field.key)
                .map(|(_, value)| *value)
                .unwrap_or("");
            FieldInput::text(&field.key, &field.label, field.required, value)
        })
        .collect()
}

fn checkbox_inputs(template: &StepTemplate, checked: &[&str]) -> Vec<FieldInput> {
    template
        .fields
        .iter()
        .filter(|field| field.kind == FieldKind::Checkbox)
        .map(|field| {
            FieldInput::checkbox(&field.key, &field.label, checked.contains(&field.key.as_str()))
        })
        .collect()
}

#[test]
fn corporate_event_inquiry_reaches_confirmation() {
    let mut state = WizardState::new();
    assert!(state.select_event_type(EventType::CorporateEvent));

    let details = state.current_template().unwrap();
    let outcome = state.next(&filled_inputs(
        &details,
        &[
            ("companyName", "Acme Corp"),
            ("eventType", "product-launch"),
            ("eventDate", "2026-11-03"),
            ("eventVenue", "Hotel Meridian"),
            ("attendeeCount", "250"),
        ],
    ));
    assert_eq!(outcome, StepOutcome::Advanced);

    let services = state.current_template().unwrap();
    let mut inputs = checkbox_inputs(&services, &["video", "candid"]);
    inputs.extend(filled_inputs(
        &services,
        &[
            ("contactName", "Priya Nair"),
            ("contactEmail", "priya@acme.example"),
            ("preferredContact", "email"),
        ],
    ));
    assert_eq!(state.next(&inputs), StepOutcome::Advanced);
    assert_eq!(state.phase(), Phase::Step(StepId::Review));

    let SubmitOutcome::Confirmed(summary) = state.submit(&[]) else {
        panic!("submission should confirm");
    };
    let rendered = summary.render();
    assert!(rendered.contains("Event Type: Corporate Event"));
    assert!(rendered.contains("Event Date: 2026-11-03"));
    assert!(rendered.contains("Venue: Hotel Meridian"));
    assert!(rendered.contains("Candid Photography, Traditional Video"));
    assert!(rendered.contains("Name: Priya Nair"));
    assert!(rendered.contains("Preferred Contact: email"));
    assert_eq!(state.phase(), Phase::Confirmation);
}

#[test]
fn blocked_step_reports_template_labels_in_order() {
    let mut state = WizardState::new();
    state.select_event_type(EventType::Wedding);

    let details = state.current_template().unwrap();
    let outcome = state.next(&filled_inputs(&details, &[("brideName", "Asha")]));
    let StepOutcome::Blocked { missing } = outcome else {
        panic!("blank required fields must block");
    };
    assert_eq!(
        missing,
        vec![
            "Groom's name",
            "Wedding date",
            "Wedding venue",
            "How did you meet?",
        ]
    );
    assert_eq!(state.phase(), Phase::Step(StepId::EventDetails));
}

#[test]
fn wedding_timeline_rows_survive_the_full_pass() {
    let mut state = WizardState::new();
    state.select_event_type(EventType::Wedding);
    assert_eq!(state.add_timeline_row(), 2);
    assert_eq!(state.add_timeline_row(), 3);
    assert!(state.remove_timeline_row(2));
    assert_eq!(state.timeline().rows(), &[1, 3]);

    let details = state.current_template().unwrap();
    let mut inputs = filled_inputs(
        &details,
        &[
            ("brideName", "Asha"),
            ("groomName", "Ravi"),
            ("weddingDate", "2026-01-10"),
            ("weddingVenue", "Garden Hall"),
            ("loveStory", "We met at a concert."),
        ],
    );
    for number in state.timeline().rows().to_vec() {
        for field in templates::timeline_row_fields(number) {
            let value = if field.key.starts_with("eventName") {
                "Ceremony".to_string()
            } else {
                "2".to_string()
            };
            inputs.push(FieldInput::text(&field.key, &field.label, field.required, value));
        }
    }
    assert_eq!(state.next(&inputs), StepOutcome::Advanced);
    assert_eq!(state.form().get("eventName_1"), Some("Ceremony"));
    assert_eq!(state.form().get("eventName_3"), Some("Ceremony"));
    // Row 2 was removed before collection, so its fields were never captured.
    assert_eq!(state.form().get("eventName_2"), None);
}

#[test]
fn starting_over_drops_data_from_the_abandoned_inquiry() {
    let mut state = WizardState::new();
    state.select_event_type(EventType::Wedding);
    let details = state.current_template().unwrap();
    state.next(&filled_inputs(
        &details,
        &[
            ("brideName", "Asha"),
            ("groomName", "Ravi"),
            ("weddingDate", "2026-01-10"),
            ("weddingVenue", "Garden Hall"),
            ("loveStory", "We met at a concert."),
            ("eventName_1", "Ceremony"),
        ],
    ));

    state.reset();
    assert!(state.select_event_type(EventType::Concert));
    assert!(state.form().is_empty());
    let template = state.current_template().unwrap();
    assert_eq!(template.required_keys(), ["artistName", "concertDate", "venue"]);
}
