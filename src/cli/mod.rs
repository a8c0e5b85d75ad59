//! Command-line interface for the view helpers.

mod commands;

pub use commands::{is_verbose, run};
