use symedit_core::{Angle, Length, Point, Result, UndoCommand, UndoCommandGroup};
use symedit_library::{CmdPinEdit, SymbolDocument};

/// Rotates the selected pins about their grid-snapped centroid.
pub struct CmdRotateSelectedPins {
    center: Point,
    group: UndoCommandGroup<SymbolDocument>,
}

impl CmdRotateSelectedPins {
    pub const NAME: &'static str = "Rotate Symbol Elements";

    pub fn new(doc: &mut SymbolDocument, angle: Angle, grid_interval: Length) -> Result<Self> {
        let pins = doc.selected_pins();
        let mut group = UndoCommandGroup::new(Self::NAME);
        let center = match Self::centroid(doc, &pins) {
            Some(center) => center.mapped_to_grid(grid_interval),
            None => return Ok(Self { center: Point::origin(), group }),
        };
        for uuid in &pins {
            if let Some(pin) = doc.pin(uuid) {
                let mut edit = CmdPinEdit::new(pin);
                edit.rotate(doc, angle, center, false)?;
                group.append_child(edit);
            }
        }
        Ok(Self { center, group })
    }

    fn centroid(doc: &SymbolDocument, pins: &[symedit_library::Uuid]) -> Option<Point> {
        let positions: Vec<Point> = pins
            .iter()
            .filter_map(|uuid| doc.pin(uuid))
            .map(|pin| pin.position())
            .collect();
        if positions.is_empty() {
            return None;
        }
        let sum = positions.iter().fold(Point::origin(), |acc, p| acc + *p);
        Some(sum / positions.len() as i64)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// True if no pin is selected.
    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
    }
}

impl UndoCommand<SymbolDocument> for CmdRotateSelectedPins {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn execute(&mut self, doc: &mut SymbolDocument) -> Result<bool> {
        self.group.execute(doc)
    }

    fn undo(&mut self, doc: &mut SymbolDocument) -> Result<()> {
        self.group.undo(doc)
    }

    fn redo(&mut self, doc: &mut SymbolDocument) -> Result<()> {
        self.group.redo(doc)
    }
}
