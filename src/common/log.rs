//! Logging helpers
//!
//! The library only emits through the `log` facade; binaries call
//! [`init_logger`] once at startup.

/// Initialise the global logger
///
/// `RUST_LOG` wins over `level` when it is set.
///
/// # Parameters
///
/// * `level` - default filter, e.g. `info` or `cluster_conf=debug`
pub fn init_logger(level: &str) {
    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A second call (tests, embedding binaries) must not abort the process
    let _ = env_logger::Builder::from_env(env).try_init();
}
