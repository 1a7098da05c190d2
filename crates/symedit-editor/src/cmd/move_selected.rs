use symedit_core::{Error, Length, Point, Result, UndoCommand, UndoCommandGroup};
use symedit_library::{CmdPinEdit, SymbolDocument};

/// Drags the selected pins by a grid-snapped offset.
///
/// While the drag is in progress the offset is previewed on the live pins.
/// Executing with a zero offset discards the command (nothing is recorded).
pub struct CmdMoveSelectedPins {
    start_pos: Point,
    grid_interval: Length,
    delta: Point,
    edits: Vec<CmdPinEdit>,
    group: Option<UndoCommandGroup<SymbolDocument>>,
}

impl CmdMoveSelectedPins {
    pub const NAME: &'static str = "Move Symbol Elements";

    /// Captures the currently selected pins.
    pub fn new(doc: &SymbolDocument, start_pos: Point, grid_interval: Length) -> Self {
        let edits = doc
            .selected_pins()
            .iter()
            .filter_map(|uuid| doc.pin(uuid))
            .map(CmdPinEdit::new)
            .collect();
        Self {
            start_pos,
            grid_interval,
            delta: Point::origin(),
            edits,
            group: None,
        }
    }

    pub fn pin_count(&self) -> usize {
        self.edits.len()
    }

    pub fn delta(&self) -> Point {
        self.delta
    }

    /// Updates the preview for the pointer at `pos`.
    pub fn set_current_position(&mut self, doc: &mut SymbolDocument, pos: Point) -> Result<()> {
        let delta = (pos - self.start_pos).mapped_to_grid(self.grid_interval);
        if delta == self.delta {
            return Ok(());
        }
        for edit in &mut self.edits {
            edit.set_delta_from_start(doc, delta, true)?;
        }
        self.delta = delta;
        Ok(())
    }

    /// Drops the move, reverting the preview.
    pub fn discard(self, doc: &mut SymbolDocument) -> Result<()> {
        for edit in self.edits {
            edit.discard(doc)?;
        }
        Ok(())
    }

    fn group_mut(&mut self) -> Result<&mut UndoCommandGroup<SymbolDocument>> {
        self.group
            .as_mut()
            .ok_or_else(|| Error::invariant("move command used before execution"))
    }
}

impl UndoCommand<SymbolDocument> for CmdMoveSelectedPins {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn execute(&mut self, doc: &mut SymbolDocument) -> Result<bool> {
        if self.group.is_some() {
            return Err(Error::invariant("move command executed twice"));
        }
        if self.delta.is_origin() {
            for edit in self.edits.drain(..) {
                edit.discard(doc)?;
            }
            return Ok(false);
        }
        let mut group = UndoCommandGroup::new(Self::NAME);
        for edit in self.edits.drain(..) {
            group.append_child(edit);
        }
        let modified = group.execute(doc)?;
        self.group = Some(group);
        Ok(modified)
    }

    fn undo(&mut self, doc: &mut SymbolDocument) -> Result<()> {
        self.group_mut()?.undo(doc)
    }

    fn redo(&mut self, doc: &mut SymbolDocument) -> Result<()> {
        self.group_mut()?.redo(doc)
    }
}
