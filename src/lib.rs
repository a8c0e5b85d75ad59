//! pkgview - view helpers for package-browsing pages.
//!
//! Pure formatting and predicate functions used when rendering package
//! listings, file views and revision diffs of a build service web UI.
//! Callers pass plain data (names, sizes, diff states) and embed the
//! returned strings or [`SafeHtml`] values in their markup.

// `DiffState::from_str` is an infallible lenient parse returning Self,
// not the Result that std::str::FromStr requires.
#![allow(clippy::should_implement_trait)]

pub mod config;
pub mod error;
pub mod helpers;
pub mod utils;

pub use config::ViewConfig;
pub use error::{Error, Result};
pub use helpers::breadcrumb::{package_bread_crumb, render_bread_crumb, Crumb};
pub use helpers::diff::{
    badge_for_diff_state, calculate_revision_on_state, expand_diff, DiffState,
};
pub use helpers::package::{
    file_url, removable_file, repo_type_and_priority, title_or_name, uploadable,
};
pub use helpers::syntax::classify_syntax;
pub use helpers::text::{nbsp, nbsp_with_width};
pub use utils::{html_escape, human_readable_size, humanize_time, SafeHtml};
