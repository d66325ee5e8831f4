//! Cluster Conf: client configuration for Hadoop-style clusters
//!
//! This library resolves the configuration a cluster client should run with.
//! It starts from built-in runtime defaults (or a caller's base
//! configuration), decides from application settings whether computation is
//! local or distributed, and in distributed mode overlays the site files from
//! the cluster conf directory before applying corrective patches.
//!
//! # Main Features
//!
//! - Layered [`Configuration`] with per-key provenance
//! - `core-site.xml`, `hdfs-site.xml`, `mapred-site.xml`, `yarn-site.xml` overlays
//! - `fs.defaultFS` reconciliation with the legacy `fs.default.name`
//! - Removal of LZO codecs that break eager codec loading
//!
//! # Example
//!
//! ```no_run
//! use cluster_conf::{resolve_from, Configuration, Result, SettingsLoader};
//!
//! fn main() -> Result<()> {
//!     let settings = SettingsLoader::new().with_file("app.toml").load()?;
//!
//!     let mut base = Configuration::new();
//!     base.set("mapreduce.job.queuename", "analytics");
//!
//!     let conf = resolve_from(&settings, &base)?;
//!     println!("default fs: {}", conf.get_or("fs.defaultFS", "file:///"));
//!     Ok(())
//! }
//! ```

// Public modules
pub mod common;
pub mod conf;
pub mod resolve;
pub mod settings;

// Re-export commonly used structures and functions for convenience
pub use common::{ConfError, Result};
pub use conf::{Configuration, PropertySource};
pub use resolve::{resolve, resolve_from, ConfResolver};
pub use settings::{SettingsLoader, SettingsProvider};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
