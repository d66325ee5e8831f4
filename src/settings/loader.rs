//! Settings loader
//!
//! Builds a [`config::Config`] snapshot from settings files and explicit
//! overrides. Later sources win.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::common::{ConfError, Result};

/// Fluent builder for a settings snapshot
#[derive(Debug, Default)]
pub struct SettingsLoader {
    files: Vec<PathBuf>,
    overrides: Vec<(String, String)>,
}

impl SettingsLoader {
    /// Create an empty loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a settings file (TOML or JSON, by extension)
    ///
    /// A missing file is skipped with a warning when the snapshot is loaded.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        debug!("Adding settings file source: {}", path.display());
        self.files.push(path.to_path_buf());
        self
    }

    /// Add a single override
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Add an override given as `KEY=VALUE`
    pub fn with_assignment(self, assignment: &str) -> Result<Self> {
        match assignment.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok(self.with_override(key.trim(), value.trim()))
            }
            _ => Err(ConfError::InvalidSetting {
                key: assignment.to_string(),
                message: "expected KEY=VALUE".to_string(),
            }),
        }
    }

    /// Build the settings snapshot
    pub fn load(self) -> Result<config::Config> {
        let mut builder = config::Config::builder();

        for path in &self.files {
            if !path.exists() {
                warn!("Settings file not found: {}", path.display());
                continue;
            }
            debug!("Loading settings from {}", path.display());
            builder = builder.add_source(config::File::from(path.as_path()).required(true));
        }

        for (key, value) in self.overrides {
            debug!("Applying settings override {}={}", key, value);
            builder = builder.set_override(key, value)?;
        }

        Ok(builder.build()?)
    }
}
