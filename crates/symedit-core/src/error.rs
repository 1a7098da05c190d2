//! Error handling for SymEdit
//!
//! Provides the error types shared by all editor layers:
//! - Undo stack errors (group discipline, empty history)
//! - Invariant violations (core bugs that are rejected instead of tolerated)
//! - Domain errors raised by the symbol model
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Undo stack error type
///
/// Represents violations of the linear undo/redo discipline.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoError {
    /// A command group was opened while another one is still open
    #[error("Another command group is already open")]
    GroupAlreadyOpen,

    /// A command was appended but no group is open
    #[error("No command group is open")]
    NoOpenGroup,

    /// Undo, redo or execute was requested while a group is open
    #[error("A command group is currently active")]
    GroupActive,

    /// Undo requested with an empty undo history
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Redo requested with an empty redo history
    #[error("Nothing to redo")]
    NothingToRedo,
}

/// Main error type for SymEdit
///
/// A unified error type used by commands and the undo framework.
#[derive(Error, Debug)]
pub enum Error {
    /// Undo stack error
    #[error(transparent)]
    Undo(#[from] UndoError),

    /// Internal invariant violated; indicates a bug, never a user condition
    #[error("Invariant violated: {message}")]
    Invariant {
        /// Description of the violated invariant.
        message: String,
    },

    /// Error raised by a domain model crate
    #[error(transparent)]
    Domain(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create an invariant violation error
    pub fn invariant(msg: impl Into<String>) -> Self {
        let message = msg.into();
        tracing::error!("invariant violated: {}", message);
        Error::Invariant { message }
    }

    /// Wrap a domain error
    pub fn domain<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Domain(Box::new(err))
    }

    /// Check if this is an invariant violation
    pub fn is_invariant(&self) -> bool {
        matches!(self, Error::Invariant { .. })
    }

    /// Check if this is an undo stack error
    pub fn is_undo_error(&self) -> bool {
        matches!(self, Error::Undo(_))
    }

    /// Returns the wrapped domain error if it has type `E`
    pub fn downcast_domain<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Error::Domain(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Message suitable for display to the user
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
