//! Conf directory discovery

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use log::debug;

use crate::common::fs::check_dir_exists;
use crate::common::Result;

/// Environment variable naming the cluster conf directory
pub const HADOOP_CONF_DIR_ENV: &str = "HADOOP_CONF_DIR";

/// Conf directory used when [`HADOOP_CONF_DIR_ENV`] is unset or empty
pub const DEFAULT_HADOOP_CONF_DIR: &str = "/etc/hadoop/conf";

/// Locate the cluster conf directory
///
/// Fails with [`ConfError::NotADirectory`](crate::common::ConfError::NotADirectory)
/// if the resolved path is missing or is not a directory.
pub fn locate_conf_dir() -> Result<PathBuf> {
    conf_dir_from(env::var_os(HADOOP_CONF_DIR_ENV))
}

fn conf_dir_from(value: Option<OsString>) -> Result<PathBuf> {
    let conf_dir = match value {
        Some(v) if !v.is_empty() => PathBuf::from(v),
        _ => PathBuf::from(DEFAULT_HADOOP_CONF_DIR),
    };

    debug!("Using cluster conf directory {}", conf_dir.display());
    check_dir_exists(&conf_dir)?;
    Ok(conf_dir)
}
