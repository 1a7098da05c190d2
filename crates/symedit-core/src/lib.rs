//! # SymEdit Core
//!
//! Core types and utilities shared by the SymEdit crates.
//! Provides the integer geometry value types used by the symbol model,
//! the generic undo/redo framework, editor messages and the error types.

pub mod constants;
pub mod error;
pub mod message;
pub mod undo;
pub mod units;

pub use error::{Error, Result, UndoError};
pub use message::{EditorMessage, MessageLevel};
pub use undo::{UndoCommand, UndoCommandGroup, UndoStack};
pub use units::{Angle, Length, Point, Rect};
