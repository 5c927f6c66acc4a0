//! Errors raised by the Thermo RAW scan source.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while opening or reading a Thermo RAW file.
#[derive(Error, Debug)]
pub enum ThermoError {
    /// The RAW reader rejected the file
    #[error("Failed to open RAW file {path}: {message}")]
    OpenError {
        /// File that failed to open
        path: PathBuf,
        /// Message from the RAW reader
        message: String,
    },

    /// Nothing exists at the given path
    #[error("RAW file does not exist: {0}")]
    MissingFile(PathBuf),

    /// The path does not carry a `.raw` extension
    #[error("Expected a .raw file: {0}")]
    NotRawFile(PathBuf),

    /// The host architecture cannot load Thermo's reader library
    #[error("Thermo RAW reading requires an x86/x86_64 host, found {0}")]
    PlatformNotSupported(&'static str),
}
