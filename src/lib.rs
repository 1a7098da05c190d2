//! # SymEdit
//!
//! Interactive editing core for schematic symbols:
//! - Pins with integer nanometer geometry and deci-degree rotations
//! - Undoable pin commands and command groups
//! - Scene-graph adapter with precise hit-testing
//! - Pointer-driven editing states (Select, AddPins) behind a state machine
//!
//! ## Architecture
//!
//! SymEdit is organized as a workspace with multiple crates:
//!
//! 1. **symedit-core** - Geometry value types, undo framework, errors, messages
//! 2. **symedit-library** - Pins, symbols, visual items and pin commands
//! 3. **symedit-editor** - Editor context, selection commands, states and FSM
//! 4. **symedit-settings** - Editor configuration (TOML / JSON)
//! 5. **symedit** - This crate: re-exports, logging setup and a headless
//!    session replayer

pub mod session;

pub use symedit_core::{
    Angle, EditorMessage, Error, Length, MessageLevel, Point, Rect, Result, UndoCommand,
    UndoCommandGroup, UndoError, UndoStack,
};

pub use symedit_library::{
    CmdPinAdd, CmdPinEdit, CmdPinRemove, LibraryError, Pin, PinGraphicsItem, PinShape, Symbol,
    SymbolDocument, SymbolGraphicsItem, Uuid,
};

pub use symedit_editor::{
    CmdMoveSelectedPins, CmdRemoveSelectedPins, CmdRotateSelectedPins, GraphicsScene,
    GridProperties, Modifiers, SceneMouseEvent, SelectSubState, StateKind, SymbolEditorContext,
    SymbolEditorFsm,
};

pub use symedit_settings::{EditorSettings, SettingsError};

pub use session::{replay, ScriptStep};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr with targets and line numbers
/// - RUST_LOG environment variable support (INFO by default)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}
