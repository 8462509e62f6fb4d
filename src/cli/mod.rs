pub mod output;
pub mod ui;

mod runner;

pub use runner::{run, CliOptions};
