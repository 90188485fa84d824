//! Error types for cpboard.

use std::io;
use thiserror::Error;

/// Result type for cpboard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cpboard operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (spawning the registry tool, reading sysfs).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The OS serial port enumeration failed.
    #[cfg(feature = "native")]
    #[error("Serial port enumeration failed: {0}")]
    Serial(#[from] serialport::Error),

    /// The corrected USB registry enumeration failed.
    #[error("USB registry error: {0}")]
    Registry(String),

    /// Unsupported platform or build configuration.
    #[error("Unsupported: {0}")]
    Unsupported(String),
}
