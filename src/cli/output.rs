use std::sync::{OnceLock, RwLock};

/// Global output preferences, set once by the runner from config and flags.
/// Styled printing lives in [`crate::cli::ui::formatting::Formatter`], which
/// snapshots these at construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    /// Suppress colors and decorative glyphs.
    pub plain_mode: bool,
    /// Drop separators and blank filler lines.
    pub quiet_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

pub fn separator() {
    if current_preferences().quiet_mode {
        return;
    }
    println!("\n----------------------------------------");
}

pub fn blank_line() {
    if !current_preferences().quiet_mode {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_round_trip_through_the_global_lock() {
        set_preferences(OutputPreferences {
            plain_mode: true,
            quiet_mode: false,
        });
        let prefs = current_preferences();
        assert!(prefs.plain_mode);
        assert!(!prefs.quiet_mode);
    }
}
