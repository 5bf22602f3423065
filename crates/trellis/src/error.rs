use std::result::Result as StdResult;

use thiserror::Error;

use crate::id::WindowId;

/// Result type for trellis operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// The window id does not refer to a live window.
    #[error("window not found: {0:?}")]
    WindowNotFound(WindowId),

    /// Attaching the child would make it its own ancestor.
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    WouldCreateCycle {
        /// Intended parent.
        parent: WindowId,
        /// Child being attached.
        child: WindowId,
    },

    /// A structural operation that is never valid, such as removing the root.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Invalid input error.
    #[error("invalid: {0}")]
    Invalid(String),

    /// Window configuration could not be parsed.
    #[error("config: {0}")]
    Config(String),

    /// Font loading or text rendering failure.
    #[error("font: {0}")]
    Font(String),

    /// A window failed during the draw pass. The frame was abandoned.
    #[error("couldn't draw {window}: {reason}")]
    Draw {
        /// Class name of the failing window.
        window: String,
        /// The underlying failure.
        reason: String,
    },
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
