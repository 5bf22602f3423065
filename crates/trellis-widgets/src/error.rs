use std::{io::Error as IoError, result::Result as StdResult};

use thiserror::Error;

/// Errors emitted by trellis-widgets helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// Font parsing failed.
    #[error("font loading failed: {0}")]
    FontLoad(&'static str),
    /// No registered family matched and no fallback is configured.
    #[error("unknown font family: {0}")]
    UnknownFamily(String),
    /// Image decoding failed.
    #[error("image loading failed: {0}")]
    Image(String),
    /// I/O error while reading font or image bytes.
    #[error("I/O failed: {0}")]
    Io(#[from] IoError),
}

/// Result type for trellis-widgets helpers.
pub type Result<T> = StdResult<T, Error>;

impl From<Error> for trellis::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Image(_) => Self::Invalid(e.to_string()),
            _ => Self::Font(e.to_string()),
        }
    }
}
