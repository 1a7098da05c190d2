use crate::document::SymbolDocument;
use crate::model::Pin;
use symedit_core::{Angle, Error, Length, Point, Result, UndoCommand};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PinAttributes {
    name: String,
    position: Point,
    rotation: Angle,
    length: Length,
}

impl PinAttributes {
    fn of(pin: &Pin) -> Self {
        Self {
            name: pin.name().to_string(),
            position: pin.position(),
            rotation: pin.rotation(),
            length: pin.length(),
        }
    }

    fn apply(&self, doc: &mut SymbolDocument, uuid: &Uuid) -> Result<()> {
        doc.check_live(uuid)?;
        Pin::check_name(&self.name)?;
        Pin::check_length(self.length)?;
        doc.set_pin_name(uuid, &self.name)?;
        doc.set_pin_position(uuid, self.position)?;
        doc.set_pin_rotation(uuid, self.rotation)?;
        doc.set_pin_length(uuid, self.length)?;
        Ok(())
    }
}

/// Edits the attributes of a live pin.
///
/// Before execution the setters build up the new values. With `immediate`
/// set they also apply the value to the document for live preview; the
/// preview is reverted by [`discard`](Self::discard). Once the command has
/// been executed it can no longer be modified.
#[derive(Debug)]
pub struct CmdPinEdit {
    uuid: Uuid,
    executed: bool,
    old: PinAttributes,
    new: PinAttributes,
}

impl CmdPinEdit {
    pub fn new(pin: &Pin) -> Self {
        let attributes = PinAttributes::of(pin);
        Self {
            uuid: pin.uuid(),
            executed: false,
            old: attributes.clone(),
            new: attributes,
        }
    }

    pub fn pin_uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn old_position(&self) -> Point {
        self.old.position
    }

    pub fn new_position(&self) -> Point {
        self.new.position
    }

    pub fn new_rotation(&self) -> Angle {
        self.new.rotation
    }

    pub fn new_name(&self) -> &str {
        &self.new.name
    }

    pub fn new_length(&self) -> Length {
        self.new.length
    }

    /// True if any new value differs from the pin's original state.
    pub fn is_modified(&self) -> bool {
        self.old != self.new
    }

    pub fn set_position(
        &mut self,
        doc: &mut SymbolDocument,
        position: Point,
        immediate: bool,
    ) -> Result<()> {
        self.ensure_not_executed()?;
        self.new.position = position;
        if immediate {
            doc.set_pin_position(&self.uuid, position)?;
        }
        Ok(())
    }

    /// Sets the new position relative to the original one.
    pub fn set_delta_from_start(
        &mut self,
        doc: &mut SymbolDocument,
        delta: Point,
        immediate: bool,
    ) -> Result<()> {
        let position = self.old.position + delta;
        self.set_position(doc, position, immediate)
    }

    pub fn set_rotation(&mut self, doc: &mut SymbolDocument, rotation: Angle, immediate: bool) -> Result<()> {
        self.ensure_not_executed()?;
        self.new.rotation = rotation;
        if immediate {
            doc.set_pin_rotation(&self.uuid, rotation)?;
        }
        Ok(())
    }

    /// Rotates the pin about `center`, moving its position and turning it.
    pub fn rotate(
        &mut self,
        doc: &mut SymbolDocument,
        angle: Angle,
        center: Point,
        immediate: bool,
    ) -> Result<()> {
        self.ensure_not_executed()?;
        let position = self.new.position.rotated(angle, center);
        let rotation = self.new.rotation + angle;
        if immediate {
            doc.check_live(&self.uuid)?;
            doc.set_pin_position(&self.uuid, position)?;
            doc.set_pin_rotation(&self.uuid, rotation)?;
        }
        self.new.position = position;
        self.new.rotation = rotation;
        Ok(())
    }

    pub fn set_name(&mut self, doc: &mut SymbolDocument, name: &str, immediate: bool) -> Result<()> {
        self.ensure_not_executed()?;
        Pin::check_name(name)?;
        if immediate {
            doc.set_pin_name(&self.uuid, name)?;
        }
        self.new.name = name.to_string();
        Ok(())
    }

    pub fn set_length(&mut self, doc: &mut SymbolDocument, length: Length, immediate: bool) -> Result<()> {
        self.ensure_not_executed()?;
        Pin::check_length(length)?;
        if immediate {
            doc.set_pin_length(&self.uuid, length)?;
        }
        self.new.length = length;
        Ok(())
    }

    /// Drops a never-executed command, reverting any immediate previews.
    pub fn discard(self, doc: &mut SymbolDocument) -> Result<()> {
        if self.executed {
            return Ok(());
        }
        if doc.pin(&self.uuid).is_none() {
            // The pin went away together with its preview.
            return Ok(());
        }
        self.old.apply(doc, &self.uuid)
    }

    fn ensure_not_executed(&self) -> Result<()> {
        if self.executed {
            return Err(Error::invariant(format!(
                "edit of pin {} modified after execution",
                self.uuid
            )));
        }
        Ok(())
    }
}

impl UndoCommand<SymbolDocument> for CmdPinEdit {
    fn name(&self) -> &str {
        "Edit pin"
    }

    fn execute(&mut self, doc: &mut SymbolDocument) -> Result<bool> {
        self.ensure_not_executed()?;
        if !self.is_modified() {
            // A preview may still be applied even though the final values
            // match the original ones.
            let previewed = doc
                .pin(&self.uuid)
                .is_some_and(|pin| PinAttributes::of(pin) != self.old);
            if previewed {
                self.old.apply(doc, &self.uuid)?;
            }
            return Ok(false);
        }
        self.new.apply(doc, &self.uuid)?;
        self.executed = true;
        Ok(true)
    }

    fn undo(&mut self, doc: &mut SymbolDocument) -> Result<()> {
        self.old.apply(doc, &self.uuid)
    }

    fn redo(&mut self, doc: &mut SymbolDocument) -> Result<()> {
        self.new.apply(doc, &self.uuid)
    }
}
