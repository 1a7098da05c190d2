//! Commands acting on the current selection.
//!
//! Each one bundles per-pin commands into a single undo step.

mod move_selected;
mod remove_selected;
mod rotate_selected;

pub use move_selected::CmdMoveSelectedPins;
pub use remove_selected::CmdRemoveSelectedPins;
pub use rotate_selected::CmdRotateSelectedPins;
