use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{self, ClearType},
    ExecutableCommand,
};
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};

use crate::cli::ui::test_mode::{self, MenuTestSelection, TextTestInput};

pub enum TextPromptResult {
    Value(String),
    /// Blank entry while a previous value exists; the caller keeps it.
    Keep,
    Back,
    Help,
    Home,
    Cancel,
}

pub enum MenuPromptResult {
    Choice(usize),
    Cancel,
}

/// Reads one line of text in raw mode. Control tokens (`:back`, `:help`,
/// `:home`, `:cancel`, `:clear`) are interpreted on Enter; ESC and Ctrl+C
/// cancel immediately. Scripted test input short-circuits the terminal.
pub fn text_input(label: &str, default: Option<&str>) -> io::Result<TextPromptResult> {
    if let Some(scripted) = test_mode::next_text_input(label) {
        return Ok(match scripted {
            TextTestInput::Value(value) => TextPromptResult::Value(value),
            TextTestInput::Keep => TextPromptResult::Keep,
            TextTestInput::Back => TextPromptResult::Back,
            TextTestInput::Help => TextPromptResult::Help,
            TextTestInput::Home => TextPromptResult::Home,
            TextTestInput::Escape => TextPromptResult::Cancel,
        });
    }

    let mut guard = RawModeGuard::activate()?;
    let mut stdout = io::stdout();
    redraw_input(&mut stdout, "")?;
    let mut buffer = String::new();

    loop {
        let event = event::read()?;
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match key.code {
                        KeyCode::Char('c') | KeyCode::Char('C') => {
                            guard.deactivate();
                            println!();
                            return Ok(TextPromptResult::Cancel);
                        }
                        KeyCode::Char('u') | KeyCode::Char('U') => {
                            buffer.clear();
                            redraw_input(&mut stdout, &buffer)?;
                            continue;
                        }
                        _ => {}
                    }
                }

                match key.code {
                    KeyCode::Esc => {
                        guard.deactivate();
                        println!();
                        return Ok(TextPromptResult::Cancel);
                    }
                    KeyCode::Enter => {
                        guard.deactivate();
                        println!();
                        return Ok(interpret_buffer(&buffer, default));
                    }
                    KeyCode::Backspace => {
                        buffer.pop();
                        redraw_input(&mut stdout, &buffer)?;
                    }
                    KeyCode::Char(ch) => {
                        buffer.push(ch);
                        redraw_input(&mut stdout, &buffer)?;
                    }
                    KeyCode::Delete => {
                        buffer.clear();
                        redraw_input(&mut stdout, &buffer)?;
                    }
                    _ => {}
                }
            }
            _ => continue,
        }
    }
}

/// Single-choice arrow-key menu. ESC cancels.
pub fn select_menu(prompt: &str, items: &[String], default: usize) -> io::Result<MenuPromptResult> {
    if let Some(scripted) = test_mode::next_menu_selection(prompt) {
        return Ok(match scripted {
            MenuTestSelection::Index(index) if index < items.len() => {
                MenuPromptResult::Choice(index)
            }
            MenuTestSelection::Index(index) => {
                panic!("Scripted selection {index} out of range for `{prompt}`")
            }
            MenuTestSelection::Escape => MenuPromptResult::Cancel,
        });
    }

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(default.min(items.len().saturating_sub(1)))
        .interact_opt()
        .map_err(io::Error::other)?;
    Ok(match selection {
        Some(index) => MenuPromptResult::Choice(index),
        None => MenuPromptResult::Cancel,
    })
}

/// Multi-choice checkbox selector. Returns the checked indices, or None when
/// the user escapes.
pub fn multi_select(
    prompt: &str,
    items: &[String],
    checked: &[bool],
) -> io::Result<Option<Vec<usize>>> {
    if let Some(scripted) = test_mode::next_service_selection(prompt) {
        for index in &scripted {
            assert!(
                *index < items.len(),
                "Scripted selection {index} out of range for `{prompt}`"
            );
        }
        return Ok(Some(scripted));
    }

    let defaults: Vec<bool> = (0..items.len())
        .map(|index| checked.get(index).copied().unwrap_or(false))
        .collect();
    MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .defaults(&defaults)
        .interact_opt()
        .map_err(io::Error::other)
}

fn redraw_input(stdout: &mut Stdout, buffer: &str) -> io::Result<()> {
    stdout.execute(cursor::MoveToColumn(0))?;
    stdout.execute(terminal::Clear(ClearType::CurrentLine))?;
    write!(stdout, "> {}", buffer)?;
    stdout.flush()
}

fn interpret_buffer(buffer: &str, default: Option<&str>) -> TextPromptResult {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return if default.is_some() {
            TextPromptResult::Keep
        } else {
            TextPromptResult::Value(String::new())
        };
    }

    match trimmed.to_ascii_lowercase().as_str() {
        ":cancel" => TextPromptResult::Cancel,
        ":back" => TextPromptResult::Back,
        ":help" => TextPromptResult::Help,
        ":home" => TextPromptResult::Home,
        ":clear" => TextPromptResult::Value(String::new()),
        _ => TextPromptResult::Value(buffer.to_string()),
    }
}

struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    fn activate() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { active: true })
    }

    fn deactivate(&mut self) {
        if self.active {
            let _ = terminal::disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.deactivate();
    }
}
