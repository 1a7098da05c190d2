//! # SymEdit Library
//!
//! Library elements edited by the symbol editor and the undoable commands
//! that mutate them.
//!
//! ## Architecture
//!
//! ```text
//! SymbolDocument
//!   ├── Symbol               (domain model, UUID-keyed ordered pins)
//!   └── SymbolGraphicsItem   (side-table: pin UUID -> PinGraphicsItem)
//!
//! Commands (UndoCommand<SymbolDocument>)
//!   ├── CmdPinAdd     owns the detached pin until executed
//!   ├── CmdPinEdit    position / rotation / name / length
//!   └── CmdPinRemove  owns the removed pin while executed
//! ```
//!
//! Every change to the symbol goes through [`SymbolDocument`], which keeps
//! exactly one visual item per live pin and schedules repaints.

pub mod cmd;
pub mod document;
pub mod error;
pub mod graphics;
pub mod model;

pub use cmd::{CmdPinAdd, CmdPinEdit, CmdPinRemove};
pub use document::{DetachedPin, SymbolDocument};
pub use error::{LibraryError, LibraryResult};
pub use graphics::{PinGraphicsItem, PinShape, SymbolGraphicsItem};
pub use model::{Pin, Symbol, DEFAULT_PIN_LENGTH, DEFAULT_PIN_NAME};

pub use uuid::Uuid;
