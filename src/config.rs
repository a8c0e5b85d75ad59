//! View configuration for the package helpers.
//!
//! Loaded from an optional TOML file, then overridden from the
//! environment:
//!
//! ```toml
//! wrap_width = 50
//! source_prefix = "/source"
//! ```

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default run length after which long names get `<wbr>` break points.
pub const DEFAULT_WRAP_WIDTH: usize = 50;

/// Default path prefix for source file URLs.
pub const DEFAULT_SOURCE_PREFIX: &str = "/source";

/// Environment variable overriding [`ViewConfig::wrap_width`].
pub const WRAP_WIDTH_ENV: &str = "PKGVIEW_WRAP_WIDTH";

/// Environment variable overriding [`ViewConfig::source_prefix`].
pub const SOURCE_PREFIX_ENV: &str = "PKGVIEW_SOURCE_PREFIX";

/// Settings that shape helper output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Character count at which `nbsp` output is chunked with `<wbr>`.
    /// Zero disables chunking.
    pub wrap_width: usize,
    /// Prefix prepended to source file URLs, without trailing slash.
    pub source_prefix: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            source_prefix: DEFAULT_SOURCE_PREFIX.to_string(),
        }
    }
}

impl ViewConfig {
    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        tracing::debug!("Loaded view config from {}", path.display());
        Ok(config)
    }

    /// Load from an optional file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_overrides(|var| env::var(var).ok())
    }

    /// Apply overrides from a variable lookup. Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        if let Some(value) = get(WRAP_WIDTH_ENV) {
            self.wrap_width = value.trim().parse().map_err(|_| Error::InvalidEnv {
                var: WRAP_WIDTH_ENV,
                value: value.clone(),
            })?;
        }

        if let Some(value) = get(SOURCE_PREFIX_ENV) {
            self.source_prefix = value;
        }

        self.source_prefix = normalize_prefix(&self.source_prefix);
        if self.wrap_width == 0 {
            tracing::warn!("wrap_width is 0, long names will not get break points");
        }

        Ok(self)
    }
}

/// Strip trailing slashes; an empty prefix means URLs start at the root.
fn normalize_prefix(prefix: &str) -> String {
    prefix.trim().trim_end_matches('/').to_string()
}
