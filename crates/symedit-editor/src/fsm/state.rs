use crate::context::SymbolEditorContext;
use crate::event::SceneMouseEvent;

/// Lifecycle and event hooks of an editing state.
///
/// Every handler returns whether the event was consumed. Defaults decline
/// the event so that states only implement what they react to.
pub trait SymbolEditorState {
    /// Called when the state becomes active. `false` refuses activation.
    fn entry(&mut self, _ctx: &mut SymbolEditorContext) -> bool {
        true
    }

    /// Called before another state becomes active. `false` keeps this state.
    fn exit(&mut self, _ctx: &mut SymbolEditorContext) -> bool {
        true
    }

    fn process_mouse_moved(&mut self, _ctx: &mut SymbolEditorContext, _e: &SceneMouseEvent) -> bool {
        false
    }

    fn process_left_button_pressed(
        &mut self,
        _ctx: &mut SymbolEditorContext,
        _e: &SceneMouseEvent,
    ) -> bool {
        false
    }

    fn process_left_button_released(
        &mut self,
        _ctx: &mut SymbolEditorContext,
        _e: &SceneMouseEvent,
    ) -> bool {
        false
    }

    fn process_rotate_cw(&mut self, _ctx: &mut SymbolEditorContext) -> bool {
        false
    }

    fn process_rotate_ccw(&mut self, _ctx: &mut SymbolEditorContext) -> bool {
        false
    }

    fn process_remove(&mut self, _ctx: &mut SymbolEditorContext) -> bool {
        false
    }

    fn process_abort_command(&mut self, _ctx: &mut SymbolEditorContext) -> bool {
        false
    }

    /// True while a gesture is half done and history must not be touched.
    fn is_busy(&self) -> bool {
        false
    }
}
