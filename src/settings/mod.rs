//! Application settings
//!
//! Resolution reads a handful of application settings through the
//! [`SettingsProvider`] trait, which is passed in explicitly rather than looked
//! up from global state. [`config::Config`] implements it, and
//! [`SettingsLoader`] builds one from files and overrides.

mod loader;

pub use self::loader::SettingsLoader;

use crate::common::{ConfError, Result};

/// Whether computation runs in-process instead of on a cluster
pub const LOCAL_COMPUTATION_KEY: &str = "model.local-computation";

/// Deprecated spelling of [`LOCAL_COMPUTATION_KEY`]; overrides it when present
pub const LOCAL_COMPUTATION_DEPRECATED_KEY: &str = "model.local";

/// Read-only access to a settings snapshot
#[cfg_attr(test, mockall::automock)]
pub trait SettingsProvider {
    /// Look up a boolean setting
    ///
    /// Returns `Ok(None)` when the path is absent and an error when it is
    /// present but not a boolean.
    fn get_bool(&self, path: &str) -> Result<Option<bool>>;
}

impl SettingsProvider for config::Config {
    fn get_bool(&self, path: &str) -> Result<Option<bool>> {
        match config::Config::get_bool(self, path) {
            Ok(value) => Ok(Some(value)),
            Err(config::ConfigError::NotFound(_)) => Ok(None),
            Err(e) => Err(ConfError::InvalidSetting {
                key: path.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_provider_present_absent_invalid() {
        let settings = config::Config::builder()
            .set_override(LOCAL_COMPUTATION_KEY, true)
            .unwrap()
            .set_override("model.name", "als")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            SettingsProvider::get_bool(&settings, LOCAL_COMPUTATION_KEY).unwrap(),
            Some(true)
        );
        assert_eq!(
            SettingsProvider::get_bool(&settings, LOCAL_COMPUTATION_DEPRECATED_KEY).unwrap(),
            None
        );
        assert!(matches!(
            SettingsProvider::get_bool(&settings, "model.name"),
            Err(ConfError::InvalidSetting { ref key, .. }) if key == "model.name"
        ));
    }

    #[test]
    fn test_config_provider_string_booleans() {
        let settings = config::Config::builder()
            .set_override(LOCAL_COMPUTATION_KEY, "false")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            SettingsProvider::get_bool(&settings, LOCAL_COMPUTATION_KEY).unwrap(),
            Some(false)
        );
    }
}
