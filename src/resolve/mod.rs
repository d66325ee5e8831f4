//! Configuration resolution
//!
//! Produces a [`Configuration`] for the current execution mode. In
//! distributed mode the pipeline is:
//!
//! 1. locate the cluster conf directory
//! 2. overlay the site files found there
//! 3. reconcile `fs.defaultFS` with the legacy `fs.default.name`
//! 4. strip LZO codecs from `io.compression.codecs`
//!
//! In local mode the base configuration is returned untouched and the
//! filesystem is never consulted.
//!
//! # Example
//!
//! ```no_run
//! use cluster_conf::resolve;
//! use cluster_conf::settings::SettingsLoader;
//!
//! # fn main() -> cluster_conf::Result<()> {
//! let settings = SettingsLoader::new()
//!     .with_override("model.local-computation", "false")
//!     .load()?;
//! let conf = resolve::resolve(&settings)?;
//! println!("{:?}", conf.get("fs.defaultFS"));
//! # Ok(())
//! # }
//! ```

pub mod locator;
pub mod mode;
pub mod overlay;
pub mod patch;

use std::path::PathBuf;

use log::debug;

use crate::common::fs::check_dir_exists;
use crate::common::Result;
use crate::conf::Configuration;
use crate::settings::SettingsProvider;

pub use self::locator::{locate_conf_dir, DEFAULT_HADOOP_CONF_DIR, HADOOP_CONF_DIR_ENV};
pub use self::mode::is_local;
pub use self::overlay::{load_resources, SITE_FILES};
pub use self::patch::{reconcile_default_fs, sanitize_codecs};

/// Resolve a fresh configuration built from the runtime defaults
pub fn resolve(settings: &dyn SettingsProvider) -> Result<Configuration> {
    ConfResolver::new(settings).resolve()
}

/// Resolve an independent copy of `base`; `base` itself is never modified
pub fn resolve_from(settings: &dyn SettingsProvider, base: &Configuration) -> Result<Configuration> {
    ConfResolver::new(settings).resolve_from(base)
}

/// Resolution pipeline with an optional fixed conf directory
pub struct ConfResolver<'a> {
    settings: &'a dyn SettingsProvider,
    conf_dir: Option<PathBuf>,
}

impl<'a> ConfResolver<'a> {
    /// Create a resolver that discovers the conf directory from the environment
    pub fn new(settings: &'a dyn SettingsProvider) -> Self {
        Self {
            settings,
            conf_dir: None,
        }
    }

    /// Use `dir` instead of `HADOOP_CONF_DIR` or the default location
    pub fn with_conf_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.conf_dir = Some(dir.into());
        self
    }

    /// Resolve a fresh configuration built from the runtime defaults
    pub fn resolve(&self) -> Result<Configuration> {
        let mut conf = Configuration::new();
        self.configure(&mut conf)?;
        Ok(conf)
    }

    /// Resolve an independent copy of `base`
    pub fn resolve_from(&self, base: &Configuration) -> Result<Configuration> {
        let mut conf = base.clone();
        self.configure(&mut conf)?;
        Ok(conf)
    }

    fn configure(&self, conf: &mut Configuration) -> Result<()> {
        if is_local(self.settings)? {
            debug!("Local computation; skipping cluster configuration");
            return Ok(());
        }

        let conf_dir = match &self.conf_dir {
            Some(dir) => {
                check_dir_exists(dir)?;
                dir.clone()
            }
            None => locate_conf_dir()?,
        };

        let loaded = load_resources(&conf_dir, conf)?;
        debug!("Loaded {} site files from {}", loaded.len(), conf_dir.display());

        reconcile_default_fs(conf);
        sanitize_codecs(conf);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfError;
    use crate::conf::{FS_DEFAULT_NAME_DEFAULT, FS_DEFAULT_NAME_KEY};
    use crate::settings::LOCAL_COMPUTATION_KEY;

    fn settings(local: bool) -> config::Config {
        config::Config::builder()
            .set_override(LOCAL_COMPUTATION_KEY, local)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_local_mode_skips_missing_conf_dir() {
        let dir = tempfile::tempdir().unwrap();
        let conf = ConfResolver::new(&settings(true))
            .with_conf_dir(dir.path().join("missing"))
            .resolve()
            .unwrap();
        assert_eq!(conf, Configuration::new());
    }

    #[test]
    fn test_distributed_mode_requires_conf_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        match ConfResolver::new(&settings(false))
            .with_conf_dir(&missing)
            .resolve()
        {
            Err(ConfError::NotADirectory(p)) => assert_eq!(p, missing),
            other => panic!("Expected NotADirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_distributed_mode_with_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let conf = ConfResolver::new(&settings(false))
            .with_conf_dir(dir.path())
            .resolve()
            .unwrap();
        assert_eq!(conf.get(FS_DEFAULT_NAME_KEY), Some(FS_DEFAULT_NAME_DEFAULT));
        assert!(conf.resources().is_empty());
    }
}
