use std::collections::BTreeMap;

use chrono::Local;
use tracing::info;
use uuid::Uuid;

use crate::cli::output::{self, OutputPreferences};
use crate::cli::ui::formatting::Formatter;
use crate::cli::ui::prompts::{self, MenuPromptResult, TextPromptResult};
use crate::config::{Config, ConfigManager};
use crate::domain::EventType;
use crate::errors::InquiryError;
use crate::summary::{summarize, InquirySummary};
use crate::templates::{self, FieldKind, FieldSpec, StepTemplate};
use crate::wizard::{FieldInput, Phase, StepId, StepOutcome, SubmitOutcome, WizardState};

const USAGE: &str = "\
inquiry_cli - interactive photography inquiry wizard

USAGE:
    inquiry_cli [OPTIONS]

OPTIONS:
    --event <name>    Skip the welcome menu and start with the given event type
    --plain           Disable colors and decorative output
    --quiet           Suppress separators and filler lines
    -h, --help        Print this help text

During text prompts, type :back to revisit the previous field, :help for a
hint, :clear to blank the field, :home to restart, or :cancel to quit.
";

#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    pub plain: bool,
    pub quiet: bool,
    pub preselected: Option<EventType>,
}

impl CliOptions {
    /// Parses command-line arguments. Returns None after printing usage.
    pub fn from_args(args: &[String]) -> Result<Option<CliOptions>, InquiryError> {
        let mut options = CliOptions::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--plain" => options.plain = true,
                "--quiet" => options.quiet = true,
                "--event" => {
                    let value = iter.next().ok_or_else(|| {
                        InquiryError::InvalidArgument("--event requires a value".into())
                    })?;
                    options.preselected = Some(parse_event_type(value)?);
                }
                "-h" | "--help" => {
                    println!("{USAGE}");
                    return Ok(None);
                }
                other => {
                    return Err(InquiryError::InvalidArgument(format!(
                        "unrecognized argument `{other}` (try --help)"
                    )));
                }
            }
        }
        Ok(Some(options))
    }
}

fn parse_event_type(value: &str) -> Result<EventType, InquiryError> {
    EventType::from_label(value).ok_or_else(|| {
        let mut message = format!("unknown event type `{value}`");
        if let Some(suggestion) = EventType::closest_label(value) {
            message.push_str(&format!(", did you mean `{suggestion}`?"));
        }
        InquiryError::InvalidArgument(message)
    })
}

/// CLI entry point: parses arguments and drives the wizard loop.
pub fn run(args: &[String]) -> Result<(), InquiryError> {
    let Some(options) = CliOptions::from_args(args)? else {
        return Ok(());
    };
    run_wizard(options)
}

fn run_wizard(options: CliOptions) -> Result<(), InquiryError> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load()?;
    output::set_preferences(OutputPreferences {
        plain_mode: options.plain || config.plain_output,
        quiet_mode: options.quiet,
    });
    let formatter = Formatter::new();
    let mut state = WizardState::new();
    let mut preselected = options.preselected;

    loop {
        match state.phase() {
            Phase::Welcome => {
                let Some(event_type) = pick_event_type(&formatter, &config, preselected.take())?
                else {
                    break;
                };
                state.select_event_type(event_type);
                config.last_event_type = Some(event_type.label().to_string());
            }
            Phase::Step(StepId::Review) => match review_screen(&formatter, &config, &mut state)? {
                ReviewAction::Continue => {}
                ReviewAction::Home => state.reset(),
                ReviewAction::Exit => break,
            },
            Phase::Step(step) => match run_form_step(&formatter, &mut state, step)? {
                FlowSignal::Continue => {}
                FlowSignal::Home => state.reset(),
                FlowSignal::Exit => break,
            },
            // The review screen handles post-submission navigation itself.
            Phase::Confirmation => break,
        }
    }

    manager.save(&config)?;
    Ok(())
}

fn pick_event_type(
    formatter: &Formatter,
    config: &Config,
    preselected: Option<EventType>,
) -> Result<Option<EventType>, InquiryError> {
    if let Some(event_type) = preselected {
        info!(event_type = %event_type, "event type preselected from arguments");
        return Ok(Some(event_type));
    }

    formatter.print_header(&config.studio_name);
    formatter.print_detail(&config.tagline);
    output::blank_line();

    let mut items: Vec<String> = EventType::all()
        .iter()
        .map(|ty| format!("{} - {}", ty.label(), ty.blurb()))
        .collect();
    items.push("Exit".into());

    let default = config
        .last_event_type
        .as_deref()
        .and_then(EventType::from_label)
        .and_then(|ty| EventType::all().iter().position(|candidate| *candidate == ty))
        .unwrap_or(0);

    match prompts::select_menu("What are we celebrating?", &items, default)? {
        MenuPromptResult::Choice(index) if index < EventType::all().len() => {
            Ok(Some(EventType::all()[index]))
        }
        _ => Ok(None),
    }
}

enum FlowSignal {
    Continue,
    Home,
    Exit,
}

enum Collected {
    Inputs(Vec<FieldInput>),
    Back,
    Home,
    Exit,
}

enum FieldAction {
    Captured(String),
    Back,
    Home,
    Exit,
}

fn run_form_step(
    formatter: &Formatter,
    state: &mut WizardState,
    step: StepId,
) -> Result<FlowSignal, InquiryError> {
    let Some(template) = state.current_template() else {
        return Ok(FlowSignal::Home);
    };
    // Values entered this visit, kept across validation retries.
    let mut pending: BTreeMap<String, String> = BTreeMap::new();

    loop {
        formatter.print_header(format!(
            "Step {} of {}: {}",
            step.number(),
            StepId::TOTAL,
            template.title
        ));
        if let Some(intro) = &template.intro {
            formatter.print_detail(intro);
        }
        formatter.print_navigation_hint();

        match collect_step_inputs(formatter, state, &template, &mut pending)? {
            Collected::Inputs(inputs) => match state.next(&inputs) {
                StepOutcome::Advanced => return Ok(FlowSignal::Continue),
                StepOutcome::Blocked { missing } => {
                    formatter
                        .print_warning("Please fill in all required fields before continuing.");
                    for label in missing {
                        formatter.print_detail(format!("  - {label}"));
                    }
                }
                StepOutcome::Ignored => return Ok(FlowSignal::Continue),
            },
            Collected::Back => {
                // prev() floors at the first step; staying put is fine there.
                state.prev();
                return Ok(FlowSignal::Continue);
            }
            Collected::Home => return Ok(FlowSignal::Home),
            Collected::Exit => return Ok(FlowSignal::Exit),
        }
    }
}

fn collect_step_inputs(
    formatter: &Formatter,
    state: &mut WizardState,
    template: &StepTemplate,
    pending: &mut BTreeMap<String, String>,
) -> Result<Collected, InquiryError> {
    let mut inputs = Vec::new();

    let checkboxes: Vec<&FieldSpec> = template
        .fields
        .iter()
        .filter(|field| field.kind == FieldKind::Checkbox)
        .collect();
    if !checkboxes.is_empty() {
        let items: Vec<String> = checkboxes.iter().map(|field| field.label.clone()).collect();
        let checked: Vec<bool> = checkboxes
            .iter()
            .map(|field| state.form().has_service(&field.key))
            .collect();
        let Some(selected) =
            prompts::multi_select("Which services are you interested in?", &items, &checked)?
        else {
            return Ok(Collected::Back);
        };
        for (index, field) in checkboxes.iter().enumerate() {
            inputs.push(FieldInput::checkbox(
                &field.key,
                &field.label,
                selected.contains(&index),
            ));
        }
    }

    let scalars: Vec<&FieldSpec> = template
        .fields
        .iter()
        .filter(|field| field.kind != FieldKind::Checkbox)
        .collect();
    let mut index = 0;
    while index < scalars.len() {
        let field = scalars[index];
        match prompt_field(formatter, state, field, pending)? {
            FieldAction::Captured(value) => {
                pending.insert(field.key.clone(), value);
                index += 1;
            }
            FieldAction::Back => {
                if index == 0 {
                    return Ok(Collected::Back);
                }
                index -= 1;
            }
            FieldAction::Home => return Ok(Collected::Home),
            FieldAction::Exit => return Ok(Collected::Exit),
        }
    }
    for field in &scalars {
        let value = pending.get(&field.key).cloned().unwrap_or_default();
        inputs.push(FieldInput::text(
            &field.key,
            &field.label,
            field.required,
            value,
        ));
    }

    if template.timeline {
        match collect_timeline(formatter, state, pending)? {
            TimelineCollected::Inputs(rows) => inputs.extend(rows),
            TimelineCollected::Home => return Ok(Collected::Home),
            TimelineCollected::Exit => return Ok(Collected::Exit),
        }
    }

    Ok(Collected::Inputs(inputs))
}

fn prompt_field(
    formatter: &Formatter,
    state: &WizardState,
    field: &FieldSpec,
    pending: &BTreeMap<String, String>,
) -> Result<FieldAction, InquiryError> {
    let existing: Option<String> = pending
        .get(&field.key)
        .cloned()
        .or_else(|| state.form().get(&field.key).map(str::to_string))
        .filter(|value| !value.is_empty());

    if let FieldKind::Select(choices) = &field.kind {
        let items: Vec<String> = choices.iter().map(|choice| choice.label.to_string()).collect();
        let default = existing
            .as_deref()
            .and_then(|value| choices.iter().position(|choice| choice.value == value))
            .unwrap_or(0);
        return Ok(
            match prompts::select_menu(&field_label(field, existing.as_deref()), &items, default)? {
                MenuPromptResult::Choice(index) => {
                    FieldAction::Captured(choices[index].value.to_string())
                }
                MenuPromptResult::Cancel => FieldAction::Back,
            },
        );
    }

    loop {
        formatter.print_detail(field_label(field, existing.as_deref()));
        match prompts::text_input(&field.label, existing.as_deref())? {
            TextPromptResult::Value(value) => return Ok(FieldAction::Captured(value)),
            TextPromptResult::Keep => {
                return Ok(FieldAction::Captured(existing.clone().unwrap_or_default()))
            }
            TextPromptResult::Back => return Ok(FieldAction::Back),
            TextPromptResult::Help => match &field.hint {
                Some(hint) => formatter.print_detail(format!("Hint: {hint}")),
                None => formatter.print_detail("No hints for this field."),
            },
            TextPromptResult::Home => return Ok(FieldAction::Home),
            TextPromptResult::Cancel => return Ok(FieldAction::Exit),
        }
    }
}

fn field_label(field: &FieldSpec, existing: Option<&str>) -> String {
    let mut text = field.label.clone();
    if field.required {
        text.push_str(" *");
    }
    if let Some(current) = existing {
        text.push_str(&format!(" [{current}]"));
    }
    text
}

enum TimelineCollected {
    Inputs(Vec<FieldInput>),
    Home,
    Exit,
}

fn collect_timeline(
    formatter: &Formatter,
    state: &mut WizardState,
    pending: &mut BTreeMap<String, String>,
) -> Result<TimelineCollected, InquiryError> {
    formatter.print_header("Wedding Events Timeline");
    formatter.print_detail("Tell us about each event we should cover.");

    let initial_rows: Vec<u32> = state.timeline().rows().to_vec();
    for number in initial_rows {
        match prompt_timeline_row(formatter, state, number, pending)? {
            FieldAction::Captured(_) => {}
            FieldAction::Home => return Ok(TimelineCollected::Home),
            FieldAction::Exit => return Ok(TimelineCollected::Exit),
            FieldAction::Back => {}
        }
    }

    loop {
        let items: Vec<String> = vec![
            "Continue".into(),
            "Add another event".into(),
            "Remove an event".into(),
        ];
        match prompts::select_menu("Timeline", &items, 0)? {
            MenuPromptResult::Choice(1) => {
                let number = state.add_timeline_row();
                match prompt_timeline_row(formatter, state, number, pending)? {
                    FieldAction::Captured(_) | FieldAction::Back => {}
                    FieldAction::Home => return Ok(TimelineCollected::Home),
                    FieldAction::Exit => return Ok(TimelineCollected::Exit),
                }
            }
            MenuPromptResult::Choice(2) => {
                if state.timeline().len() <= 1 {
                    formatter.print_warning("At least one timeline event is required.");
                    continue;
                }
                let rows: Vec<u32> = state.timeline().rows().to_vec();
                // Numbers can repeat after a gap-removal, so label and remove
                // by position.
                let mut labels: Vec<String> = rows
                    .iter()
                    .enumerate()
                    .map(|(position, number)| format!("Row {}: Event {number}", position + 1))
                    .collect();
                labels.push("Back".into());
                if let MenuPromptResult::Choice(index) =
                    prompts::select_menu("Remove which event?", &labels, 0)?
                {
                    if index < rows.len() {
                        state.remove_timeline_row_at(index);
                    }
                }
            }
            // Continue, or ESC treated the same.
            _ => break,
        }
    }

    let mut inputs = Vec::new();
    for number in state.timeline().rows() {
        for field in templates::timeline_row_fields(*number) {
            let value = pending.get(&field.key).cloned().unwrap_or_default();
            inputs.push(FieldInput::text(
                &field.key,
                &field.label,
                field.required,
                value,
            ));
        }
    }
    Ok(TimelineCollected::Inputs(inputs))
}

/// Prompts the three fields of one timeline row. Back floors at the first
/// field of the row.
fn prompt_timeline_row(
    formatter: &Formatter,
    state: &WizardState,
    number: u32,
    pending: &mut BTreeMap<String, String>,
) -> Result<FieldAction, InquiryError> {
    let fields = templates::timeline_row_fields(number);
    let mut index = 0;
    while index < fields.len() {
        let field = &fields[index];
        match prompt_field(formatter, state, field, pending)? {
            FieldAction::Captured(value) => {
                pending.insert(field.key.clone(), value);
                index += 1;
            }
            FieldAction::Back => index = index.saturating_sub(1),
            FieldAction::Home => return Ok(FieldAction::Home),
            FieldAction::Exit => return Ok(FieldAction::Exit),
        }
    }
    Ok(FieldAction::Captured(String::new()))
}

enum ReviewAction {
    Continue,
    Home,
    Exit,
}

fn review_screen(
    formatter: &Formatter,
    config: &Config,
    state: &mut WizardState,
) -> Result<ReviewAction, InquiryError> {
    let template = templates::review();
    formatter.print_header(format!(
        "Step {} of {}: {}",
        StepId::Review.number(),
        StepId::TOTAL,
        template.title
    ));
    if let Some(intro) = &template.intro {
        formatter.print_detail(intro);
    }
    output::blank_line();

    let Some(event_type) = state.event_type() else {
        return Ok(ReviewAction::Home);
    };
    let preview = summarize(event_type, state.form());
    for line in preview.render().lines() {
        formatter.print_detail(line);
    }

    let items: Vec<String> = vec![
        "Submit inquiry".into(),
        "Back".into(),
        "Start over".into(),
        "Exit".into(),
    ];
    match prompts::select_menu("Ready to send?", &items, 0)? {
        MenuPromptResult::Choice(0) => match state.submit(&[]) {
            SubmitOutcome::Confirmed(summary) => {
                confirmation_screen(formatter, config, &summary);
                post_confirmation(state)
            }
            SubmitOutcome::Blocked { missing } => {
                formatter.print_warning("Please fill in all required fields before continuing.");
                for label in missing {
                    formatter.print_detail(format!("  - {label}"));
                }
                Ok(ReviewAction::Continue)
            }
            SubmitOutcome::Ignored => Ok(ReviewAction::Continue),
        },
        MenuPromptResult::Choice(1) => {
            state.prev();
            Ok(ReviewAction::Continue)
        }
        MenuPromptResult::Choice(2) => Ok(ReviewAction::Home),
        _ => Ok(ReviewAction::Exit),
    }
}

fn confirmation_screen(formatter: &Formatter, config: &Config, summary: &InquirySummary) {
    let reference = Uuid::new_v4();
    let received = Local::now().format("%Y-%m-%d %H:%M");

    formatter.print_header("Inquiry Received");
    formatter.print_success(format!(
        "Thank you! {} will be in touch shortly.",
        config.studio_name
    ));
    formatter.print_detail(format!("Reference: {reference}"));
    formatter.print_detail(format!("Received: {received}"));
    output::separator();
    for line in summary.render().lines() {
        formatter.print_detail(line);
    }
}

fn post_confirmation(state: &mut WizardState) -> Result<ReviewAction, InquiryError> {
    let items: Vec<String> = vec!["Start another inquiry".into(), "Exit".into()];
    match prompts::select_menu("What next?", &items, 0)? {
        MenuPromptResult::Choice(0) => {
            state.reset();
            Ok(ReviewAction::Continue)
        }
        _ => Ok(ReviewAction::Exit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn flags_parse_into_options() {
        let options = CliOptions::from_args(&args(&["--plain", "--quiet"]))
            .unwrap()
            .unwrap();
        assert!(options.plain);
        assert!(options.quiet);
        assert_eq!(options.preselected, None);
    }

    #[test]
    fn event_flag_accepts_any_label_case() {
        let options = CliOptions::from_args(&args(&["--event", "family portrait"]))
            .unwrap()
            .unwrap();
        assert_eq!(options.preselected, Some(EventType::FamilyPortrait));
    }

    #[test]
    fn misspelled_event_gets_a_suggestion() {
        let error = CliOptions::from_args(&args(&["--event", "Weding"])).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("unknown event type"));
        assert!(message.contains("Wedding"));
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(CliOptions::from_args(&args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn help_short_circuits() {
        assert!(CliOptions::from_args(&args(&["--help"])).unwrap().is_none());
    }
}
