//! Package view helpers.
//!
//! Each submodule groups the helpers used by one part of the package
//! pages:
//! - `syntax`: highlighting class for the file viewer
//! - `text`: non-breaking file name display
//! - `diff`: revision diff rows and badges
//! - `package`: file listing, titles, repositories and URLs
//! - `breadcrumb`: navigation trail above package pages

pub mod breadcrumb;
pub mod diff;
pub mod package;
pub mod syntax;
pub mod text;
