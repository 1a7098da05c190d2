//! Undo/redo framework.
//!
//! Commands are reversible mutations of some target `T` (for the symbol
//! editor, the symbol document). The [`UndoStack`] records executed commands
//! linearly; [`UndoCommandGroup`] bundles several commands into one undo step.
//!
//! ```text
//! UndoStack
//!   ├── committed entries   [0 .. current_index)   applied
//!   ├── redo entries        [current_index .. len)  undone
//!   └── open group          children applied immediately, not yet recorded
//! ```

mod command;
mod group;
mod stack;

pub use command::UndoCommand;
pub use group::UndoCommandGroup;
pub use stack::UndoStack;
