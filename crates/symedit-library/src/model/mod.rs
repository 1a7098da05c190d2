//! Library element domain model.

mod pin;
mod symbol;

pub use pin::{Pin, DEFAULT_PIN_LENGTH, DEFAULT_PIN_NAME};
pub use symbol::Symbol;
