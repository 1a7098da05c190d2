use super::state::SymbolEditorState;
use crate::cmd::{CmdMoveSelectedPins, CmdRemoveSelectedPins, CmdRotateSelectedPins};
use crate::context::SymbolEditorContext;
use crate::event::SceneMouseEvent;
use symedit_core::{Angle, EditorMessage, Error, Point, Rect};
use uuid::Uuid;

/// Observable phase of the Select state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectSubState {
    Idle,
    Selecting,
    Moving,
}

enum SubState {
    Idle,
    /// Rubber-band selection from `anchor`; `base` is kept selected
    /// in additive mode.
    Selecting { anchor: Point, base: Vec<Uuid> },
    /// Dragging the selection. The command is created on the first move.
    Moving {
        start: Point,
        cmd: Option<CmdMoveSelectedPins>,
    },
}

/// Default tool: click/rubber-band selection, dragging, rotating and
/// deleting the selected pins.
pub struct SelectState {
    sub_state: SubState,
}

impl SelectState {
    pub fn new() -> Self {
        Self {
            sub_state: SubState::Idle,
        }
    }

    pub fn sub_state(&self) -> SelectSubState {
        match self.sub_state {
            SubState::Idle => SelectSubState::Idle,
            SubState::Selecting { .. } => SelectSubState::Selecting,
            SubState::Moving { .. } => SelectSubState::Moving,
        }
    }

    fn rotate_selected(&mut self, ctx: &mut SymbolEditorContext, angle: Angle) -> bool {
        let cmd = match CmdRotateSelectedPins::new(&mut ctx.document, angle, ctx.grid.interval()) {
            Ok(cmd) => cmd,
            Err(e) => {
                ctx.report_error("Could not rotate pins", &e);
                return true;
            }
        };
        if cmd.is_empty() {
            tracing::debug!("rotate: nothing selected");
            return false;
        }
        if let Err(e) = ctx.undo_stack.execute(cmd, &mut ctx.document) {
            ctx.report_error("Could not rotate pins", &e);
        }
        true
    }

    fn remove_selected(&mut self, ctx: &mut SymbolEditorContext) -> bool {
        let cmd = CmdRemoveSelectedPins::new(&ctx.document);
        if cmd.is_empty() {
            ctx.report(EditorMessage::info("Nothing selected to remove"));
            return false;
        }
        if let Err(e) = ctx.undo_stack.execute(cmd, &mut ctx.document) {
            ctx.report_error("Could not remove pins", &e);
        }
        true
    }
}

impl Default for SelectState {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolEditorState for SelectState {
    fn entry(&mut self, _ctx: &mut SymbolEditorContext) -> bool {
        self.sub_state = SubState::Idle;
        true
    }

    fn exit(&mut self, ctx: &mut SymbolEditorContext) -> bool {
        if let SubState::Moving { cmd: Some(cmd), .. } =
            std::mem::replace(&mut self.sub_state, SubState::Idle)
        {
            if let Err(e) = cmd.discard(&mut ctx.document) {
                ctx.report_error("Could not cancel move", &e);
            }
        }
        ctx.scene.clear_selection_rect();
        true
    }

    fn process_mouse_moved(&mut self, ctx: &mut SymbolEditorContext, e: &SceneMouseEvent) -> bool {
        match &mut self.sub_state {
            SubState::Selecting { anchor, base } => {
                let anchor = *anchor;
                ctx.scene.set_selection_rect(anchor, e.scene_pos);
                let rect = Rect::from_corners(anchor, e.scene_pos);
                let mut selection = base.clone();
                for uuid in ctx.document.items_intersecting(&rect) {
                    if !selection.contains(&uuid) {
                        selection.push(uuid);
                    }
                }
                ctx.document.graphics_mut().select_only(&selection);
                true
            }
            SubState::Moving { start, cmd } => {
                let cmd = cmd.get_or_insert_with(|| {
                    CmdMoveSelectedPins::new(&ctx.document, *start, ctx.grid.interval())
                });
                if let Err(err) = cmd.set_current_position(&mut ctx.document, e.scene_pos) {
                    ctx.report_error("Could not move pins", &err);
                }
                true
            }
            SubState::Idle => false,
        }
    }

    fn process_left_button_pressed(
        &mut self,
        ctx: &mut SymbolEditorContext,
        e: &SceneMouseEvent,
    ) -> bool {
        if !matches!(self.sub_state, SubState::Idle) {
            return false;
        }
        let additive = e.modifiers.is_additive();
        let hits = ctx.document.items_at(e.scene_pos);
        match hits.first() {
            None => {
                ctx.scene.clear_selection_rect();
                let base = if additive {
                    ctx.document.selected_pins()
                } else {
                    ctx.document.clear_selection();
                    Vec::new()
                };
                self.sub_state = SubState::Selecting {
                    anchor: e.scene_pos,
                    base,
                };
            }
            Some(top) => {
                if !ctx.document.graphics().is_selected(top) && !additive {
                    ctx.document.clear_selection();
                }
                if let Err(err) = ctx.document.set_selected(top, true) {
                    ctx.report_error("Could not select pin", &Error::from(err));
                    return true;
                }
                self.sub_state = SubState::Moving {
                    start: e.scene_pos,
                    cmd: None,
                };
            }
        }
        true
    }

    fn process_left_button_released(
        &mut self,
        ctx: &mut SymbolEditorContext,
        _e: &SceneMouseEvent,
    ) -> bool {
        match std::mem::replace(&mut self.sub_state, SubState::Idle) {
            SubState::Selecting { .. } => {
                ctx.scene.clear_selection_rect();
                true
            }
            SubState::Moving { cmd, .. } => {
                if let Some(cmd) = cmd {
                    if let Err(e) = ctx.undo_stack.execute(cmd, &mut ctx.document) {
                        ctx.report_error("Could not move pins", &e);
                    }
                }
                true
            }
            SubState::Idle => false,
        }
    }

    fn process_rotate_cw(&mut self, ctx: &mut SymbolEditorContext) -> bool {
        match self.sub_state {
            SubState::Idle => self.rotate_selected(ctx, -Angle::deg90()),
            _ => false,
        }
    }

    fn process_rotate_ccw(&mut self, ctx: &mut SymbolEditorContext) -> bool {
        match self.sub_state {
            SubState::Idle => self.rotate_selected(ctx, Angle::deg90()),
            _ => false,
        }
    }

    fn process_remove(&mut self, ctx: &mut SymbolEditorContext) -> bool {
        match self.sub_state {
            SubState::Idle => self.remove_selected(ctx),
            _ => false,
        }
    }

    fn is_busy(&self) -> bool {
        !matches!(self.sub_state, SubState::Idle)
    }
}
