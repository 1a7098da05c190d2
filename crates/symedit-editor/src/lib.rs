//! # SymEdit Editor
//!
//! Pointer-driven editing of a symbol. Raw scene events enter the
//! [`SymbolEditorFsm`], which forwards them to the active state; states
//! mutate the [`SymbolDocument`](symedit_library::SymbolDocument) only
//! through undoable commands held by the context's undo stack.
//!
//! ```text
//! events -> SymbolEditorFsm -> SelectState | AddPinsState
//!                                   |
//!                       SymbolEditorContext
//!          (document, undo stack, scene, grid, messages)
//! ```

pub mod cmd;
pub mod context;
pub mod event;
pub mod fsm;
pub mod grid;
pub mod scene;

pub use cmd::{CmdMoveSelectedPins, CmdRemoveSelectedPins, CmdRotateSelectedPins};
pub use context::{PinDefaults, SymbolEditorContext};
pub use event::{Modifiers, SceneMouseEvent};
pub use fsm::{AddPinsState, SelectState, SelectSubState, StateKind, SymbolEditorFsm, SymbolEditorState};
pub use grid::GridProperties;
pub use scene::GraphicsScene;
