//! The editable symbol together with its visual items.

use crate::error::{LibraryError, LibraryResult};
use crate::graphics::{PinGraphicsItem, SymbolGraphicsItem};
use crate::model::{Pin, Symbol};
use symedit_core::{Angle, Length, Point, Rect};
use uuid::Uuid;

/// A pin taken out of a [`SymbolDocument`] together with its visual item.
///
/// Restoring it puts both back where they were, keeping the stacking order
/// and selection of the item.
#[derive(Debug)]
pub struct DetachedPin {
    index: usize,
    pin: Pin,
    item_index: usize,
    item: PinGraphicsItem,
}

impl DetachedPin {
    /// Former index in the symbol's pin list.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pin(&self) -> &Pin {
        &self.pin
    }
}

/// A symbol under edit and the graphics side-table mirroring its pins.
///
/// This is the target of all pin commands. Each mutation validates first and
/// then updates model and view together, so a pin is live in the symbol if
/// and only if it has a visual item.
#[derive(Debug)]
pub struct SymbolDocument {
    symbol: Symbol,
    graphics: SymbolGraphicsItem,
}

impl SymbolDocument {
    pub fn new(symbol: Symbol) -> LibraryResult<Self> {
        symbol.validate()?;
        let graphics = SymbolGraphicsItem::for_symbol(&symbol);
        Ok(Self { symbol, graphics })
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn graphics(&self) -> &SymbolGraphicsItem {
        &self.graphics
    }

    pub fn graphics_mut(&mut self) -> &mut SymbolGraphicsItem {
        &mut self.graphics
    }

    pub fn pin(&self, uuid: &Uuid) -> Option<&Pin> {
        self.symbol.pin(uuid)
    }

    /// Fails if `uuid` cannot be inserted as a new pin.
    pub fn check_can_insert(&self, uuid: &Uuid) -> LibraryResult<()> {
        if self.symbol.contains_pin(uuid) {
            return Err(LibraryError::DuplicatePin(*uuid));
        }
        if self.graphics.contains(uuid) {
            return Err(LibraryError::GraphicsItemExists(*uuid));
        }
        Ok(())
    }

    /// Fails if `uuid` is not a live pin with a visual item.
    pub fn check_live(&self, uuid: &Uuid) -> LibraryResult<()> {
        if !self.symbol.contains_pin(uuid) {
            return Err(LibraryError::PinNotFound(*uuid));
        }
        if !self.graphics.contains(uuid) {
            return Err(LibraryError::GraphicsItemMissing(*uuid));
        }
        Ok(())
    }

    /// Appends a pin and registers its visual item.
    pub fn add_pin(&mut self, pin: Pin) -> LibraryResult<()> {
        let index = self.symbol.pin_count();
        self.insert_pin(index, pin)
    }

    /// Inserts a pin at `index` and registers its visual item.
    pub fn insert_pin(&mut self, index: usize, pin: Pin) -> LibraryResult<()> {
        let uuid = pin.uuid();
        self.check_can_insert(&uuid)?;
        pin.validate()?;
        self.symbol.insert_pin(index, pin)?;
        self.graphics.add_pin(uuid)?;
        tracing::trace!("pin {} added at index {}", uuid, index);
        Ok(())
    }

    /// Removes a pin and its visual item.
    pub fn remove_pin(&mut self, uuid: &Uuid) -> LibraryResult<DetachedPin> {
        self.check_live(uuid)?;
        let (item_index, item) = self.graphics.remove_pin(uuid)?;
        let (index, pin) = self.symbol.remove_pin(uuid)?;
        tracing::trace!("pin {} removed from index {}", uuid, index);
        Ok(DetachedPin {
            index,
            pin,
            item_index,
            item,
        })
    }

    /// Fails if `detached` cannot be put back.
    pub fn check_can_restore(&self, detached: &DetachedPin) -> LibraryResult<()> {
        self.check_can_insert(&detached.pin.uuid())?;
        detached.pin.validate()
    }

    /// Re-inserts a pin removed by [`remove_pin`](Self::remove_pin) at its
    /// former index, with its former visual item.
    pub fn restore_pin(&mut self, detached: DetachedPin) -> LibraryResult<()> {
        self.check_can_restore(&detached)?;
        let DetachedPin {
            index,
            pin,
            item_index,
            item,
        } = detached;
        let uuid = pin.uuid();
        self.symbol.insert_pin(index, pin)?;
        self.graphics.restore_item(item_index, item)?;
        tracing::trace!("pin {} restored at index {}", uuid, index);
        Ok(())
    }

    pub fn set_pin_position(&mut self, uuid: &Uuid, position: Point) -> LibraryResult<()> {
        self.check_live(uuid)?;
        self.symbol.pin_mut(uuid)?.set_position(position);
        self.graphics.schedule_update(*uuid);
        Ok(())
    }

    pub fn set_pin_rotation(&mut self, uuid: &Uuid, rotation: Angle) -> LibraryResult<()> {
        self.check_live(uuid)?;
        self.symbol.pin_mut(uuid)?.set_rotation(rotation);
        self.graphics.schedule_update(*uuid);
        Ok(())
    }

    pub fn set_pin_name(&mut self, uuid: &Uuid, name: &str) -> LibraryResult<()> {
        self.check_live(uuid)?;
        self.symbol.pin_mut(uuid)?.set_name(name)?;
        self.graphics.schedule_update(*uuid);
        Ok(())
    }

    pub fn set_pin_length(&mut self, uuid: &Uuid, length: Length) -> LibraryResult<()> {
        self.check_live(uuid)?;
        self.symbol.pin_mut(uuid)?.set_length(length)?;
        self.graphics.schedule_update(*uuid);
        Ok(())
    }

    /// Pins under `pos`, topmost first.
    pub fn items_at(&self, pos: Point) -> Vec<Uuid> {
        self.graphics.items_at(&self.symbol, pos)
    }

    /// Pins whose shape overlaps `rect`.
    pub fn items_intersecting(&self, rect: &Rect) -> Vec<Uuid> {
        self.graphics.items_intersecting(&self.symbol, rect)
    }

    pub fn selected_pins(&self) -> Vec<Uuid> {
        self.graphics.selected_pins()
    }

    pub fn set_selected(&mut self, uuid: &Uuid, selected: bool) -> LibraryResult<()> {
        self.graphics.set_selected(uuid, selected)
    }

    pub fn clear_selection(&mut self) {
        self.graphics.clear_selection();
    }

    /// Selects exactly the pins whose shape overlaps `rect`.
    pub fn select_in_rect(&mut self, rect: &Rect) -> Vec<Uuid> {
        let hits = self.items_intersecting(rect);
        self.graphics.select_only(&hits);
        hits
    }
}

impl Default for SymbolDocument {
    fn default() -> Self {
        Self {
            symbol: Symbol::default(),
            graphics: SymbolGraphicsItem::new(),
        }
    }
}
