//! Shared utility functions.
//!
//! This module contains reusable utilities used across the helpers:
//! - `html`: HTML escaping and the pre-escaped `SafeHtml` wrapper
//! - `format`: Human-readable formatting (sizes, durations)

mod format;
mod html;

pub use format::{human_readable_size, humanize_time};
pub use html::{html_escape, SafeHtml};
