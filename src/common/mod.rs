//! Common module
//!
//! This module contains shared errors and utility functions used throughout the crate.

pub mod error;
pub mod fs;
pub mod log;

// Re-export commonly used types and functions
pub use error::{ConfError, Result};
pub use log::init_logger;
