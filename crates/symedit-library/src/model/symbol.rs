use super::Pin;
use crate::error::{LibraryError, LibraryResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use symedit_core::Rect;
use uuid::Uuid;

/// A schematic symbol: an ordered, UUID-keyed collection of pins.
///
/// Iteration follows insertion order. Pins removed with
/// [`remove_pin`](Self::remove_pin) report their index so that they can be
/// restored at the same place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symbol {
    uuid: Uuid,
    name: String,
    pins: IndexMap<Uuid, Pin>,
}

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            pins: IndexMap::new(),
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    pub fn contains_pin(&self, uuid: &Uuid) -> bool {
        self.pins.contains_key(uuid)
    }

    pub fn pin(&self, uuid: &Uuid) -> Option<&Pin> {
        self.pins.get(uuid)
    }

    pub(crate) fn pin_mut(&mut self, uuid: &Uuid) -> LibraryResult<&mut Pin> {
        self.pins.get_mut(uuid).ok_or(LibraryError::PinNotFound(*uuid))
    }

    /// Pins in insertion order.
    pub fn pins(&self) -> impl Iterator<Item = &Pin> {
        self.pins.values()
    }

    pub fn pin_uuids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.pins.keys().copied()
    }

    pub(crate) fn add_pin(&mut self, pin: Pin) -> LibraryResult<()> {
        let index = self.pins.len();
        self.insert_pin(index, pin)
    }

    /// Inserts `pin` at `index` (clamped to the number of pins).
    pub(crate) fn insert_pin(&mut self, index: usize, pin: Pin) -> LibraryResult<()> {
        let uuid = pin.uuid();
        if self.pins.contains_key(&uuid) {
            return Err(LibraryError::DuplicatePin(uuid));
        }
        let index = index.min(self.pins.len());
        self.pins.shift_insert(index, uuid, pin);
        Ok(())
    }

    /// Removes a pin, returning its former index together with the pin.
    pub(crate) fn remove_pin(&mut self, uuid: &Uuid) -> LibraryResult<(usize, Pin)> {
        self.pins
            .shift_remove_full(uuid)
            .map(|(index, _, pin)| (index, pin))
            .ok_or(LibraryError::PinNotFound(*uuid))
    }

    /// Rectangle spanning the start and end points of all pins.
    pub fn bounding_rect(&self) -> Option<Rect> {
        self.pins
            .values()
            .map(|pin| Rect::from_corners(pin.position(), pin.end_point()))
            .reduce(|acc, rect| acc.united(&rect))
    }

    /// Checks every pin and rejects duplicate map keys.
    pub fn validate(&self) -> LibraryResult<()> {
        for (uuid, pin) in &self.pins {
            if *uuid != pin.uuid() {
                return Err(LibraryError::InvalidPin {
                    reason: format!("pin {} stored under key {}", pin.uuid(), uuid),
                });
            }
            pin.validate()?;
        }
        Ok(())
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
