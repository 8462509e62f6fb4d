use std::fmt;

use colored::Colorize;

use crate::cli::output::{current_preferences, OutputPreferences};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Detail,
    Success,
    Warning,
}

/// Styled printing for wizard screens, snapshotting the output preferences
/// at construction.
pub struct Formatter {
    prefs: OutputPreferences,
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            prefs: current_preferences(),
        }
    }

    pub fn print_header(&self, title: impl fmt::Display) {
        println!("\n{}", self.header_text(title));
    }

    pub fn header_text(&self, title: impl fmt::Display) -> String {
        let text = format!("=== {} ===", title);
        self.colorize(text, Style::Header)
    }

    pub fn print_detail(&self, message: impl fmt::Display) {
        println!("{}", message);
    }

    pub fn print_success(&self, message: impl fmt::Display) {
        self.print_line(Style::Success, message);
    }

    pub fn print_warning(&self, message: impl fmt::Display) {
        self.print_line(Style::Warning, message);
    }

    fn print_line(&self, style: Style, message: impl fmt::Display) {
        println!("{}", self.decorate(style, message));
    }

    fn decorate(&self, style: Style, message: impl fmt::Display) -> String {
        let (icon, plain_label) = match style {
            Style::Success => ("✔", "OK:"),
            Style::Warning => ("⚠", "WARNING:"),
            Style::Header | Style::Detail => ("", ""),
        };
        if self.prefs.plain_mode {
            format!("{plain_label} {}", message)
        } else {
            self.colorize(format!("{icon} {}", message), style)
        }
    }

    fn colorize(&self, text: String, style: Style) -> String {
        if self.prefs.plain_mode {
            return text;
        }
        match style {
            Style::Success => text.green().to_string(),
            Style::Warning => text.yellow().to_string(),
            Style::Header => text.bold().to_string(),
            Style::Detail => text,
        }
    }

    pub fn print_navigation_hint(&self) {
        self.print_detail(
            "(Type :back for the previous field, :help for hints, :home to start over)",
        );
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_formatter() -> Formatter {
        Formatter {
            prefs: OutputPreferences {
                plain_mode: true,
                quiet_mode: false,
            },
        }
    }

    #[test]
    fn plain_mode_headers_carry_no_escape_codes() {
        assert_eq!(plain_formatter().header_text("Review"), "=== Review ===");
    }

    #[test]
    fn plain_mode_status_lines_use_text_labels() {
        let formatter = plain_formatter();
        assert_eq!(
            formatter.decorate(Style::Warning, "missing fields"),
            "WARNING: missing fields"
        );
        assert_eq!(formatter.decorate(Style::Success, "sent"), "OK: sent");
    }
}
