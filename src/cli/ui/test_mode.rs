//! Scripted input queues for driving the wizard without a terminal.
//!
//! Integration tests set environment variables before spawning the binary;
//! unit tests install queues directly. When a queue is enabled, the prompt
//! helpers consume from it instead of reading the terminal, and exhausting a
//! queue is a hard failure so a miscounted script fails loudly.

use once_cell::sync::Lazy;
use std::{collections::VecDeque, env, sync::Mutex};

pub const TEXT_INPUTS_VAR: &str = "INQUIRY_TEST_TEXT_INPUTS";
pub const MENU_SELECTIONS_VAR: &str = "INQUIRY_TEST_MENU_SELECTIONS";
pub const SERVICE_SELECTIONS_VAR: &str = "INQUIRY_TEST_SERVICE_SELECTIONS";

/// One scripted answer to a text prompt.
#[derive(Debug, Clone)]
pub enum TextTestInput {
    Value(String),
    Keep,
    Back,
    Help,
    Home,
    Escape,
}

/// One scripted answer to a single-choice menu.
#[derive(Debug, Clone, Copy)]
pub enum MenuTestSelection {
    Index(usize),
    Escape,
}

struct TextQueue {
    enabled: bool,
    inputs: VecDeque<TextTestInput>,
}

impl TextQueue {
    fn from_env() -> Self {
        match env::var(TEXT_INPUTS_VAR) {
            Ok(raw) => Self {
                enabled: true,
                inputs: parse_text_inputs(&raw),
            },
            Err(_) => Self {
                enabled: false,
                inputs: VecDeque::new(),
            },
        }
    }
}

struct MenuQueue {
    enabled: bool,
    selections: VecDeque<MenuTestSelection>,
}

impl MenuQueue {
    fn from_env() -> Self {
        match env::var(MENU_SELECTIONS_VAR) {
            Ok(raw) => Self {
                enabled: true,
                selections: parse_menu_selections(&raw),
            },
            Err(_) => Self {
                enabled: false,
                selections: VecDeque::new(),
            },
        }
    }
}

struct ServiceQueue {
    enabled: bool,
    selections: VecDeque<Vec<usize>>,
}

impl ServiceQueue {
    fn from_env() -> Self {
        match env::var(SERVICE_SELECTIONS_VAR) {
            Ok(raw) => Self {
                enabled: true,
                selections: parse_service_selections(&raw),
            },
            Err(_) => Self {
                enabled: false,
                selections: VecDeque::new(),
            },
        }
    }
}

static TEXT_INPUTS: Lazy<Mutex<TextQueue>> = Lazy::new(|| Mutex::new(TextQueue::from_env()));

static MENU_SELECTIONS: Lazy<Mutex<MenuQueue>> = Lazy::new(|| Mutex::new(MenuQueue::from_env()));

static SERVICE_SELECTIONS: Lazy<Mutex<ServiceQueue>> =
    Lazy::new(|| Mutex::new(ServiceQueue::from_env()));

pub fn is_enabled() -> bool {
    TEXT_INPUTS
        .lock()
        .expect("text input queue poisoned")
        .enabled
        || MENU_SELECTIONS
            .lock()
            .expect("menu selection queue poisoned")
            .enabled
        || SERVICE_SELECTIONS
            .lock()
            .expect("service selection queue poisoned")
            .enabled
}

pub fn next_text_input(label: &str) -> Option<TextTestInput> {
    let mut guard = TEXT_INPUTS.lock().expect("text input queue poisoned");
    if !guard.enabled {
        return None;
    }
    Some(
        guard
            .inputs
            .pop_front()
            .unwrap_or_else(|| panic!("Text inputs exhausted before prompt `{label}`")),
    )
}

pub fn next_menu_selection(label: &str) -> Option<MenuTestSelection> {
    let mut guard = MENU_SELECTIONS.lock().expect("menu selection queue poisoned");
    if !guard.enabled {
        return None;
    }
    Some(
        guard
            .selections
            .pop_front()
            .unwrap_or_else(|| panic!("Menu selections exhausted before `{label}` menu rendered")),
    )
}

pub fn next_service_selection(label: &str) -> Option<Vec<usize>> {
    let mut guard = SERVICE_SELECTIONS
        .lock()
        .expect("service selection queue poisoned");
    if !guard.enabled {
        return None;
    }
    Some(guard.selections.pop_front().unwrap_or_else(|| {
        panic!("Service selections exhausted before `{label}` selector rendered")
    }))
}

fn parse_text_input(token: &str) -> TextTestInput {
    match token.to_ascii_uppercase().as_str() {
        "<ESC>" | "ESC" => TextTestInput::Escape,
        "<BACK>" => TextTestInput::Back,
        "<HELP>" => TextTestInput::Help,
        "<HOME>" => TextTestInput::Home,
        "<KEEP>" => TextTestInput::Keep,
        "<BLANK>" | "<EMPTY>" => TextTestInput::Value(String::new()),
        _ => TextTestInput::Value(token.to_string()),
    }
}

fn parse_text_inputs(raw: &str) -> VecDeque<TextTestInput> {
    raw.split('|')
        .filter_map(|segment| {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(parse_text_input(trimmed))
            }
        })
        .collect()
}

fn parse_menu_selections(raw: &str) -> VecDeque<MenuTestSelection> {
    raw.split('|')
        .filter_map(|segment| {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                return None;
            }
            if trimmed.eq_ignore_ascii_case("ESC") || trimmed.eq_ignore_ascii_case("ESCAPE") {
                return Some(MenuTestSelection::Escape);
            }
            trimmed.parse::<usize>().ok().map(MenuTestSelection::Index)
        })
        .collect()
}

/// Segments split on `|`; each is a comma-separated index list, or `NONE` for
/// an empty selection.
fn parse_service_selections(raw: &str) -> VecDeque<Vec<usize>> {
    raw.split('|')
        .filter_map(|segment| {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                return None;
            }
            if trimmed.eq_ignore_ascii_case("NONE") {
                return Some(Vec::new());
            }
            Some(
                trimmed
                    .split(',')
                    .filter_map(|token| token.trim().parse::<usize>().ok())
                    .collect(),
            )
        })
        .collect()
}

pub fn install_text_inputs(inputs: Vec<TextTestInput>) {
    let mut guard = TEXT_INPUTS.lock().expect("text input queue poisoned");
    guard.enabled = true;
    guard.inputs = inputs.into();
}

pub fn reset_text_inputs() {
    let mut guard = TEXT_INPUTS.lock().expect("text input queue poisoned");
    guard.enabled = false;
    guard.inputs.clear();
}

pub fn install_menu_selections(selections: Vec<MenuTestSelection>) {
    let mut guard = MENU_SELECTIONS.lock().expect("menu selection queue poisoned");
    guard.enabled = true;
    guard.selections = selections.into();
}

pub fn reset_menu_selections() {
    let mut guard = MENU_SELECTIONS.lock().expect("menu selection queue poisoned");
    guard.enabled = false;
    guard.selections.clear();
}

pub fn install_service_selections(selections: Vec<Vec<usize>>) {
    let mut guard = SERVICE_SELECTIONS
        .lock()
        .expect("service selection queue poisoned");
    guard.enabled = true;
    guard.selections = selections.into();
}

pub fn reset_service_selections() {
    let mut guard = SERVICE_SELECTIONS
        .lock()
        .expect("service selection queue poisoned");
    guard.enabled = false;
    guard.selections.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_tokens_parse_into_controls() {
        let inputs = parse_text_inputs("Asha|<KEEP>|<BACK>|<BLANK>|<HOME>");
        assert_eq!(inputs.len(), 5);
        assert!(matches!(&inputs[0], TextTestInput::Value(v) if v == "Asha"));
        assert!(matches!(inputs[1], TextTestInput::Keep));
        assert!(matches!(inputs[2], TextTestInput::Back));
        assert!(matches!(&inputs[3], TextTestInput::Value(v) if v.is_empty()));
        assert!(matches!(inputs[4], TextTestInput::Home));
    }

    #[test]
    fn menu_tokens_parse_indices_and_escape() {
        let selections = parse_menu_selections("0|10|ESC");
        assert_eq!(selections.len(), 3);
        assert!(matches!(selections[0], MenuTestSelection::Index(0)));
        assert!(matches!(selections[1], MenuTestSelection::Index(10)));
        assert!(matches!(selections[2], MenuTestSelection::Escape));
    }

    #[test]
    fn service_tokens_parse_index_lists() {
        let selections = parse_service_selections("0,2|NONE|4");
        assert_eq!(selections.len(), 3);
        assert_eq!(selections[0], vec![0, 2]);
        assert!(selections[1].is_empty());
        assert_eq!(selections[2], vec![4]);
    }
}
