//! The inquiry wizard state machine.
//!
//! Transitions are pure with respect to the terminal: callers collect field
//! inputs however they like (interactive prompts, scripted tests) and hand
//! them to [`WizardState`], which validates, saves, and moves between phases.
//! A blocked transition is an ordinary outcome, not an error.

use tracing::info;

use crate::domain::{EventType, FormData, Timeline};
use crate::summary::{summarize, InquirySummary};
use crate::templates;

mod step;

pub use step::StepId;

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Event-type selection screen; no form is active yet.
    Welcome,
    /// One of the three form steps.
    Step(StepId),
    /// Terminal phase after a successful submission.
    Confirmation,
}

/// A single captured control value, as collected by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValue {
    Text(String),
    Checkbox { checked: bool },
}

/// One field's captured input, paired with enough of its spec to validate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    pub key: String,
    pub label: String,
    pub required: bool,
    pub value: InputValue,
}

impl FieldInput {
    pub fn text(
        key: impl Into<String>,
        label: impl Into<String>,
        required: bool,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            required,
            value: InputValue::Text(value.into()),
        }
    }

    pub fn checkbox(key: impl Into<String>, label: impl Into<String>, checked: bool) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            required: false,
            value: InputValue::Checkbox { checked },
        }
    }
}

/// Result of attempting to advance past a form step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced,
    /// Required fields were blank; labels listed in template order. No data
    /// was saved and the phase did not change.
    Blocked { missing: Vec<String> },
    /// The wizard was not in a phase where this transition applies.
    Ignored,
}

/// Result of attempting to submit from the review step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Confirmed(Box<InquirySummary>),
    Blocked { missing: Vec<String> },
    Ignored,
}

/// Full wizard state: current phase, chosen event type, captured form data,
/// and the wedding timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    phase: Phase,
    event_type: Option<EventType>,
    form: FormData,
    timeline: Timeline,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Welcome,
            event_type: None,
            form: FormData::new(),
            timeline: Timeline::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn event_type(&self) -> Option<EventType> {
        self.event_type
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Picks an event type from the welcome screen and enters the first step.
    /// Returns false (and changes nothing) outside the welcome phase.
    pub fn select_event_type(&mut self, event_type: EventType) -> bool {
        if self.phase != Phase::Welcome {
            return false;
        }
        info!(event_type = %event_type, "starting inquiry");
        self.event_type = Some(event_type);
        self.phase = Phase::Step(StepId::EventDetails);
        true
    }

    /// Validates and saves the current step's inputs, then advances.
    ///
    /// Only meaningful on the first two steps; the review step advances via
    /// [`WizardState::submit`].
    pub fn next(&mut self, inputs: &[FieldInput]) -> StepOutcome {
        let step = match self.phase {
            Phase::Step(step) if step != StepId::Review => step,
            _ => return StepOutcome::Ignored,
        };
        let missing = validate(inputs);
        if !missing.is_empty() {
            info!(step = step.number(), missing = missing.len(), "step blocked");
            return StepOutcome::Blocked { missing };
        }
        self.save_step_data(inputs);
        let next = step.next().unwrap_or(StepId::Review);
        info!(from = step.number(), to = next.number(), "step advanced");
        self.phase = Phase::Step(next);
        StepOutcome::Advanced
    }

    /// Moves back one step without validating or discarding anything.
    /// Returns false on the first step and outside the step phases.
    pub fn prev(&mut self) -> bool {
        let Phase::Step(step) = self.phase else {
            return false;
        };
        match step.previous() {
            Some(previous) => {
                self.phase = Phase::Step(previous);
                true
            }
            None => false,
        }
    }

    /// Final submission from the review step.
    pub fn submit(&mut self, inputs: &[FieldInput]) -> SubmitOutcome {
        let Some(event_type) = self.event_type else {
            return SubmitOutcome::Ignored;
        };
        if self.phase != Phase::Step(StepId::Review) {
            return SubmitOutcome::Ignored;
        }
        let missing = validate(inputs);
        if !missing.is_empty() {
            return SubmitOutcome::Blocked { missing };
        }
        self.save_step_data(inputs);
        let summary = summarize(event_type, &self.form);
        info!(event_type = %event_type, services = self.form.service_count(), "inquiry submitted");
        self.phase = Phase::Confirmation;
        SubmitOutcome::Confirmed(Box::new(summary))
    }

    /// Drops everything and returns to the welcome screen. Valid from any
    /// phase, including mid-form.
    pub fn reset(&mut self) {
        info!("wizard reset");
        self.phase = Phase::Welcome;
        self.event_type = None;
        self.form.clear();
        self.timeline.reset();
    }

    /// Current step template, when a form step is active.
    pub fn current_template(&self) -> Option<templates::StepTemplate> {
        let Phase::Step(step) = self.phase else {
            return None;
        };
        match step {
            StepId::EventDetails => self.event_type.map(templates::event_details),
            StepId::ServicesContact => Some(templates::services_contact()),
            StepId::Review => Some(templates::review()),
        }
    }

    pub fn add_timeline_row(&mut self) -> u32 {
        self.timeline.add_row()
    }

    pub fn remove_timeline_row(&mut self, number: u32) -> bool {
        self.timeline.remove_row(number)
    }

    /// Positional removal, for callers listing rows whose numbers may repeat.
    pub fn remove_timeline_row_at(&mut self, position: usize) -> bool {
        self.timeline.remove_at(position)
    }

    fn save_step_data(&mut self, inputs: &[FieldInput]) {
        for input in inputs {
            match &input.value {
                InputValue::Text(text) => self.form.set(&input.key, text.clone()),
                InputValue::Checkbox { checked: true } => self.form.add_service(&input.key),
                InputValue::Checkbox { checked: false } => self.form.remove_service(&input.key),
            }
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects the labels of every required field whose trimmed text is empty.
/// All fields are checked; the first failure does not short-circuit.
fn validate(inputs: &[FieldInput]) -> Vec<String> {
    inputs
        .iter()
        .filter(|input| {
            input.required
                && matches!(&input.value, InputValue::Text(text) if text.trim().is_empty())
        })
        .map(|input| input.label.clone())
        .collect()
}
