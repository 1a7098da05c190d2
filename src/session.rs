//! Headless replay of editor input.
//!
//! A script is a list of host events fed to a [`SymbolEditorFsm`] in order,
//! the way the editor widget would deliver them.

use symedit_core::Point;
use symedit_editor::{Modifiers, SceneMouseEvent, SymbolEditorFsm};

/// One host event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    StartSelecting,
    StartAddingPins,
    Move(Point),
    Press(Point, Modifiers),
    Release(Point),
    /// Press and release at the same place.
    Click(Point, Modifiers),
    RotateCw,
    RotateCcw,
    Remove,
    Abort,
    Undo,
    Redo,
}

impl ScriptStep {
    fn apply(self, fsm: &mut SymbolEditorFsm) -> bool {
        match self {
            ScriptStep::StartSelecting => fsm.process_start_selecting(),
            ScriptStep::StartAddingPins => fsm.process_start_adding_pins(),
            ScriptStep::Move(pos) => fsm.process_mouse_moved(&SceneMouseEvent::new(pos)),
            ScriptStep::Press(pos, modifiers) => {
                fsm.process_left_button_pressed(&SceneMouseEvent::with_modifiers(pos, modifiers))
            }
            ScriptStep::Release(pos) => fsm.process_left_button_released(&SceneMouseEvent::new(pos)),
            ScriptStep::Click(pos, modifiers) => {
                let e = SceneMouseEvent::with_modifiers(pos, modifiers);
                let pressed = fsm.process_left_button_pressed(&e);
                let released = fsm.process_left_button_released(&e);
                pressed || released
            }
            ScriptStep::RotateCw => fsm.process_rotate_cw(),
            ScriptStep::RotateCcw => fsm.process_rotate_ccw(),
            ScriptStep::Remove => fsm.process_remove(),
            ScriptStep::Abort => fsm.process_abort_command(),
            ScriptStep::Undo => fsm.undo(),
            ScriptStep::Redo => fsm.redo(),
        }
    }
}

/// Feeds `steps` to the state machine, returning how many were handled.
pub fn replay(fsm: &mut SymbolEditorFsm, steps: &[ScriptStep]) -> usize {
    steps
        .iter()
        .filter(|step| {
            let handled = step.apply(fsm);
            if !handled {
                tracing::debug!("step {:?} not handled", step);
            }
            handled
        })
        .count()
}
