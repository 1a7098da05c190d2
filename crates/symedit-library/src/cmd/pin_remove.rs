use crate::document::{DetachedPin, SymbolDocument};
use crate::model::Pin;
use symedit_core::{Error, Result, UndoCommand};
use uuid::Uuid;

/// Removes a pin from the symbol.
///
/// While executed the command owns the removed pin; undo puts it back at its
/// former index with its former visual item.
#[derive(Debug)]
pub struct CmdPinRemove {
    uuid: Uuid,
    removed: Option<DetachedPin>,
}

impl CmdPinRemove {
    pub fn new(uuid: Uuid) -> Self {
        Self {
            uuid,
            removed: None,
        }
    }

    pub fn pin_uuid(&self) -> Uuid {
        self.uuid
    }

    /// The pin while it is detached from the symbol.
    pub fn removed_pin(&self) -> Option<&Pin> {
        self.removed.as_ref().map(DetachedPin::pin)
    }
}

impl UndoCommand<SymbolDocument> for CmdPinRemove {
    fn name(&self) -> &str {
        "Remove pin"
    }

    fn execute(&mut self, doc: &mut SymbolDocument) -> Result<bool> {
        self.redo(doc)?;
        Ok(true)
    }

    fn undo(&mut self, doc: &mut SymbolDocument) -> Result<()> {
        match &self.removed {
            Some(detached) => doc.check_can_restore(detached)?,
            None => {
                return Err(Error::invariant(format!(
                    "pin {} was not removed by this command",
                    self.uuid
                )))
            }
        }
        if let Some(detached) = self.removed.take() {
            doc.restore_pin(detached)?;
        }
        Ok(())
    }

    fn redo(&mut self, doc: &mut SymbolDocument) -> Result<()> {
        if self.removed.is_some() {
            return Err(Error::invariant(format!("pin {} is already removed", self.uuid)));
        }
        self.removed = Some(doc.remove_pin(&self.uuid)?);
        Ok(())
    }
}
