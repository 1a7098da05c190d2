use symedit_core::{Result, UndoCommand, UndoCommandGroup};
use symedit_library::{CmdPinRemove, SymbolDocument};

/// Removes all selected pins as one undo step.
pub struct CmdRemoveSelectedPins {
    group: UndoCommandGroup<SymbolDocument>,
}

impl CmdRemoveSelectedPins {
    pub const NAME: &'static str = "Remove Symbol Elements";

    pub fn new(doc: &SymbolDocument) -> Self {
        let mut group = UndoCommandGroup::new(Self::NAME);
        for uuid in doc.selected_pins() {
            group.append_child(CmdPinRemove::new(uuid));
        }
        Self { group }
    }

    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
    }
}

impl UndoCommand<SymbolDocument> for CmdRemoveSelectedPins {
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
