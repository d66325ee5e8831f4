//! Default configuration values
//!
//! Single source of truth for the well-known property names this crate reads
//! or writes, and for the runtime's built-in defaults layer.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

/// Canonical default-filesystem key
pub const FS_DEFAULT_NAME_KEY: &str = "fs.defaultFS";

/// Value of [`FS_DEFAULT_NAME_KEY`] when nothing has configured it
pub const FS_DEFAULT_NAME_DEFAULT: &str = "file:///";

/// Legacy spelling of the default-filesystem key, still written by some
/// configuration generators
pub const FS_DEFAULT_NAME_LEGACY_KEY: &str = "fs.default.name";

/// Comma-separated list of compression codec class names
pub const IO_COMPRESSION_CODECS_KEY: &str = "io.compression.codecs";

pub const IO_FILE_BUFFER_SIZE_KEY: &str = "io.file.buffer.size";
pub const IO_FILE_BUFFER_SIZE_DEFAULT: &str = "4096";

pub const IO_BYTES_PER_CHECKSUM_KEY: &str = "io.bytes.per.checksum";
pub const IO_BYTES_PER_CHECKSUM_DEFAULT: &str = "512";

pub const HADOOP_SECURITY_AUTHENTICATION_KEY: &str = "hadoop.security.authentication";
pub const HADOOP_SECURITY_AUTHENTICATION_DEFAULT: &str = "simple";

/// Built-in defaults, loaded under every [`Configuration::new`](super::Configuration::new)
pub static RUNTIME_DEFAULTS: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        (FS_DEFAULT_NAME_KEY, FS_DEFAULT_NAME_DEFAULT),
        (IO_FILE_BUFFER_SIZE_KEY, IO_FILE_BUFFER_SIZE_DEFAULT),
        (IO_BYTES_PER_CHECKSUM_KEY, IO_BYTES_PER_CHECKSUM_DEFAULT),
        (
            HADOOP_SECURITY_AUTHENTICATION_KEY,
            HADOOP_SECURITY_AUTHENTICATION_DEFAULT,
        ),
    ])
});
