use super::state::SymbolEditorState;
use crate::context::SymbolEditorContext;
use crate::event::SceneMouseEvent;
use symedit_core::{Angle, Error, Point, Result};
use symedit_library::{CmdPinAdd, CmdPinEdit, Pin};
use uuid::Uuid;

/// Undo text of one placed pin.
pub const ADD_PIN_GROUP_NAME: &str = "Add symbol pin";

/// The pin following the cursor, not yet committed.
struct Placement {
    pin: Uuid,
    edit: CmdPinEdit,
}

/// Tool placing a chain of new pins.
///
/// While active, an undo group holding the new pin is always open; a click
/// commits it and immediately starts the next pin at the same place.
pub struct AddPinsState {
    current: Option<Placement>,
}

impl AddPinsState {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// UUID of the pin currently being placed.
    pub fn current_pin(&self) -> Option<Uuid> {
        self.current.as_ref().map(|p| p.pin)
    }

    pub fn is_placing(&self) -> bool {
        self.current.is_some()
    }

    /// Opens a group, adds a pin at `position` and selects it.
    ///
    /// On failure everything done so far is rolled back.
    fn start_placement(&mut self, ctx: &mut SymbolEditorContext, position: Point, rotation: Angle) -> bool {
        if let Err(e) = ctx.undo_stack.begin_group(ADD_PIN_GROUP_NAME) {
            ctx.report_error("Could not add pin", &e);
            return false;
        }
        match Self::place_new_pin(ctx, position, rotation) {
            Ok(placement) => {
                tracing::debug!("placing pin {}", placement.pin);
                self.current = Some(placement);
                true
            }
            Err(e) => {
                if let Err(abort_err) = ctx.undo_stack.abort_group(&mut ctx.document) {
                    ctx.report_error("Could not roll back pin placement", &abort_err);
                }
                ctx.report_error("Could not add pin", &e);
                false
            }
        }
    }

    fn place_new_pin(ctx: &mut SymbolEditorContext, position: Point, rotation: Angle) -> Result<Placement> {
        let pin = Pin::new(
            Uuid::new_v4(),
            ctx.pin_defaults.name.clone(),
            position,
            ctx.pin_defaults.length,
            rotation,
        )?;
        let uuid = pin.uuid();
        ctx.undo_stack.append_to_group(CmdPinAdd::new(pin), &mut ctx.document)?;
        let live = ctx
            .document
            .pin(&uuid)
            .ok_or_else(|| Error::invariant(format!("added pin {} is not in the symbol", uuid)))?;
        let edit = CmdPinEdit::new(live);
        ctx.document.set_selected(&uuid, true)?;
        Ok(Placement { pin: uuid, edit })
    }

    /// Commits the current pin at `position`, returning its final placement.
    fn commit_placement(
        ctx: &mut SymbolEditorContext,
        placement: Placement,
        position: Point,
    ) -> Result<(Point, Angle)> {
        let Placement { pin, mut edit } = placement;
        edit.set_position(&mut ctx.document, position, true)?;
        let rotation = edit.new_rotation();
        ctx.document.set_selected(&pin, false)?;
        ctx.undo_stack.append_to_group(edit, &mut ctx.document)?;
        ctx.undo_stack.commit_group()?;
        tracing::debug!("pin {} committed at {}", pin, position);
        Ok((position, rotation))
    }

    fn rotate_current(&mut self, ctx: &mut SymbolEditorContext, angle: Angle) -> bool {
        let Some(placement) = self.current.as_mut() else {
            return false;
        };
        let center = placement.edit.new_position();
        if let Err(e) = placement.edit.rotate(&mut ctx.document, angle, center, true) {
            ctx.report_error("Could not rotate pin", &e);
        }
        true
    }
}

impl Default for AddPinsState {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolEditorState for AddPinsState {
    fn entry(&mut self, ctx: &mut SymbolEditorContext) -> bool {
        ctx.document.clear_selection();
        self.start_placement(ctx, Point::origin(), Angle::deg0())
    }

    fn exit(&mut self, ctx: &mut SymbolEditorContext) -> bool {
        if let Some(placement) = self.current.take() {
            if let Err(e) = placement.edit.discard(&mut ctx.document) {
                ctx.report_error("Could not discard pin edit", &e);
            }
        }
        if ctx.undo_stack.is_command_group_active() {
            if let Err(e) = ctx.undo_stack.abort_group(&mut ctx.document) {
                ctx.report_error("Could not cancel pin placement", &e);
                return false;
            }
        }
        true
    }

    fn process_mouse_moved(&mut self, ctx: &mut SymbolEditorContext, e: &SceneMouseEvent) -> bool {
        let Some(placement) = self.current.as_mut() else {
            return false;
        };
        let position = ctx.grid.snap(e.scene_pos);
        if let Err(err) = placement.edit.set_position(&mut ctx.document, position, true) {
            ctx.report_error("Could not move pin", &err);
        }
        true
    }

    fn process_left_button_pressed(
        &mut self,
        ctx: &mut SymbolEditorContext,
        e: &SceneMouseEvent,
    ) -> bool {
        let Some(placement) = self.current.take() else {
            return false;
        };
        let position = ctx.grid.snap(e.scene_pos);
        match Self::commit_placement(ctx, placement, position) {
            Ok((position, rotation)) => {
                self.start_placement(ctx, position, rotation);
            }
            Err(err) => {
                ctx.report_error("Could not add pin", &err);
                if ctx.undo_stack.is_command_group_active() {
                    if let Err(abort_err) = ctx.undo_stack.abort_group(&mut ctx.document) {
                        ctx.report_error("Could not roll back pin placement", &abort_err);
                    }
                }
            }
        }
        true
    }

    fn process_rotate_cw(&mut self, ctx: &mut SymbolEditorContext) -> bool {
        self.rotate_current(ctx, -Angle::deg90())
    }

    fn process_rotate_ccw(&mut self, ctx: &mut SymbolEditorContext) -> bool {
        self.rotate_current(ctx, Angle::deg90())
    }

    fn is_busy(&self) -> bool {
        self.current.is_some()
    }
}
