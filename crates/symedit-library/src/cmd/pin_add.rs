use crate::document::{DetachedPin, SymbolDocument};
use crate::model::Pin;
use symedit_core::{Error, Result, UndoCommand};
use uuid::Uuid;

/// The pin held by a [`CmdPinAdd`] while it is not part of the symbol.
#[derive(Debug)]
enum Slot {
    /// Never inserted yet.
    New(Pin),
    /// Taken out again by undo.
    Detached(DetachedPin),
}

/// Adds a pin to the symbol.
///
/// Before execution and after undo the command owns the pin; while executed
/// the symbol owns it. Undo followed by redo restores it at the same index.
#[derive(Debug)]
pub struct CmdPinAdd {
    uuid: Uuid,
    pending: Option<Slot>,
}

impl CmdPinAdd {
    pub fn new(pin: Pin) -> Self {
        Self {
            uuid: pin.uuid(),
            pending: Some(Slot::New(pin)),
        }
    }

    /// Adds a new pin with default attributes at the origin.
    pub fn with_defaults() -> Self {
        Self::new(Pin::with_defaults())
    }

    pub fn pin_uuid(&self) -> Uuid {
        self.uuid
    }

    /// The pin while it is not part of the symbol.
    pub fn pending_pin(&self) -> Option<&Pin> {
        self.pending.as_ref().map(|slot| match slot {
            Slot::New(pin) => pin,
            Slot::Detached(detached) => detached.pin(),
        })
    }
}

impl UndoCommand<SymbolDocument> for CmdPinAdd {
    fn name(&self) -> &str {
        "Add pin"
    }

    fn execute(&mut self, doc: &mut SymbolDocument) -> Result<bool> {
        self.redo(doc)?;
        Ok(true)
    }

    fn undo(&mut self, doc: &mut SymbolDocument) -> Result<()> {
        if self.pending.is_some() {
            return Err(Error::invariant(format!(
                "pin {} is not part of the symbol",
                self.uuid
            )));
        }
        self.pending = Some(Slot::Detached(doc.remove_pin(&self.uuid)?));
        Ok(())
    }

    fn redo(&mut self, doc: &mut SymbolDocument) -> Result<()> {
        match &self.pending {
            Some(Slot::New(pin)) => {
                doc.check_can_insert(&self.uuid)?;
                pin.validate()?;
            }
            Some(Slot::Detached(detached)) => doc.check_can_restore(detached)?,
            None => {
                return Err(Error::invariant(format!(
                    "pin {} is already part of the symbol",
                    self.uuid
                )))
            }
        }
        match self.pending.take() {
            Some(Slot::New(pin)) => doc.add_pin(pin)?,
            Some(Slot::Detached(detached)) => doc.restore_pin(detached)?,
            None => {}
        }
        Ok(())
    }
}
