//! Undoable commands on a [`SymbolDocument`](crate::SymbolDocument).
//!
//! Detached pins are owned by the command that detached them: a pending
//! [`CmdPinAdd`] or an executed [`CmdPinRemove`]. Live pins are owned by the
//! symbol.

mod pin_add;
mod pin_edit;
mod pin_remove;

pub use pin_add::CmdPinAdd;
pub use pin_edit::CmdPinEdit;
pub use pin_remove::CmdPinRemove;
