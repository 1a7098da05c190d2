//! Shared substrate of all editing states.

use crate::grid::GridProperties;
use crate::scene::GraphicsScene;
use symedit_core::{EditorMessage, Error, Length, UndoStack};
use symedit_library::{SymbolDocument, DEFAULT_PIN_LENGTH, DEFAULT_PIN_NAME};
use symedit_settings::EditorSettings;

/// Attributes given to pins placed by the AddPins tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinDefaults {
    pub name: String,
    pub length: Length,
}

impl Default for PinDefaults {
    fn default() -> Self {
        Self {
            name: DEFAULT_PIN_NAME.to_string(),
            length: DEFAULT_PIN_LENGTH,
        }
    }
}

/// Everything the editing states operate on.
///
/// Only the active state mutates the context, and only from the single
/// event-processing path.
pub struct SymbolEditorContext {
    pub document: SymbolDocument,
    pub undo_stack: UndoStack<SymbolDocument>,
    pub scene: GraphicsScene,
    pub grid: GridProperties,
    pub pin_defaults: PinDefaults,
    messages: Vec<EditorMessage>,
}

impl SymbolEditorContext {
    pub fn new(document: SymbolDocument) -> Self {
        Self {
            document,
            undo_stack: UndoStack::new(),
            scene: GraphicsScene::new(),
            grid: GridProperties::default(),
            pin_defaults: PinDefaults::default(),
            messages: Vec::new(),
        }
    }

    pub fn from_settings(document: SymbolDocument, settings: &EditorSettings) -> Self {
        Self {
            undo_stack: UndoStack::with_limit(settings.undo.limit),
            grid: GridProperties::new(settings.grid_interval()),
            pin_defaults: PinDefaults {
                name: settings.pin.default_name.clone(),
                length: settings.default_pin_length(),
            },
            ..Self::new(document)
        }
    }

    /// Logs a failed operation and queues it for the user.
    pub fn report_error(&mut self, context: &str, err: &Error) {
        tracing::warn!("{}: {}", context, err);
        self.messages
            .push(EditorMessage::error(format!("{}: {}", context, err.user_message())));
    }

    pub fn report(&mut self, message: EditorMessage) {
        tracing::info!("{}", message);
        self.messages.push(message);
    }

    /// Pending messages for the host, oldest first.
    pub fn messages(&self) -> &[EditorMessage] {
        &self.messages
    }

    pub fn take_messages(&mut self) -> Vec<EditorMessage> {
        std::mem::take(&mut self.messages)
    }
}
