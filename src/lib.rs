#![doc(test(attr(deny(warnings))))]

//! Inquiry Core implements the multi-step photography inquiry wizard: a
//! terminal-free state machine with per-event-type form templates, plus the
//! interactive CLI that drives it.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod summary;
pub mod templates;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Inquiry Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
