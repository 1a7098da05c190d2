//! Visual representation of a symbol.
//!
//! [`SymbolGraphicsItem`] maps pin UUIDs to [`PinGraphicsItem`]s, answers
//! hit-tests and keeps the selection state. Pin geometry is always derived
//! from the live [`Pin`](crate::model::Pin), so edits need no synchronization.

mod pin_graphics_item;
mod shape;
mod symbol_graphics_item;

pub use pin_graphics_item::{PinGraphicsItem, PinLabel};
pub use shape::{PinShape, PIN_CIRCLE_RADIUS, PIN_LINE_WIDTH, PIN_TEXT_OFFSET};
pub use symbol_graphics_item::SymbolGraphicsItem;
