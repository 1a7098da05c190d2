//! Error types for the library crate.
//!
//! Invalid attribute values are recoverable domain errors. The remaining
//! variants report broken model/visual bookkeeping and indicate a bug in the
//! caller; they are rejected before any mutation takes place.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the symbol model and its visual side-table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// A pin attribute is invalid.
    #[error("Invalid pin: {reason}")]
    InvalidPin { reason: String },

    /// A pin with this UUID is already part of the symbol.
    #[error("Pin {0} already exists in the symbol")]
    DuplicatePin(Uuid),

    /// No pin with this UUID is part of the symbol.
    #[error("Pin {0} not found in the symbol")]
    PinNotFound(Uuid),

    /// A visual item is already registered for this pin.
    #[error("Graphics item for pin {0} is already registered")]
    GraphicsItemExists(Uuid),

    /// No visual item is registered for this pin.
    #[error("No graphics item registered for pin {0}")]
    GraphicsItemMissing(Uuid),
}

impl LibraryError {
    /// Bookkeeping violations that can only stem from a programming error.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            LibraryError::GraphicsItemExists(_) | LibraryError::GraphicsItemMissing(_)
        )
    }
}

impl From<LibraryError> for symedit_core::Error {
    fn from(err: LibraryError) -> Self {
        if err.is_invariant_violation() {
            tracing::error!("{}", err);
        }
        symedit_core::Error::domain(err)
    }
}

/// Result type alias for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;
