//! Editing states and the state machine driving them.

mod add_pins;
mod controller;
mod select;
mod state;

pub use add_pins::AddPinsState;
pub use controller::{StateKind, SymbolEditorFsm};
pub use select::{SelectState, SelectSubState};
pub use state::SymbolEditorState;
