use super::PinGraphicsItem;
use crate::error::{LibraryError, LibraryResult};
use crate::model::Symbol;
use indexmap::{IndexMap, IndexSet};
use symedit_core::{Point, Rect};
use uuid::Uuid;

/// Side-table of pin visual items, keyed by pin UUID.
///
/// Registering a pin twice or removing an unregistered one is rejected
/// without touching the table. Every change marks the affected pin dirty;
/// the view drains the dirty set with [`take_dirty`](Self::take_dirty).
#[derive(Debug, Default)]
pub struct SymbolGraphicsItem {
    pins: IndexMap<Uuid, PinGraphicsItem>,
    next_z: u64,
    dirty: IndexSet<Uuid>,
}

impl SymbolGraphicsItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates one item per pin of `symbol`.
    pub fn for_symbol(symbol: &Symbol) -> Self {
        let mut graphics = Self::new();
        for uuid in symbol.pin_uuids() {
            graphics.insert_item(uuid);
        }
        graphics
    }

    pub fn item_count(&self) -> usize {
        self.pins.len()
    }

    pub fn contains(&self, pin: &Uuid) -> bool {
        self.pins.contains_key(pin)
    }

    pub fn pin_item(&self, pin: &Uuid) -> LibraryResult<&PinGraphicsItem> {
        self.pins.get(pin).ok_or(LibraryError::GraphicsItemMissing(*pin))
    }

    pub(crate) fn add_pin(&mut self, pin: Uuid) -> LibraryResult<()> {
        if self.pins.contains_key(&pin) {
            return Err(LibraryError::GraphicsItemExists(pin));
        }
        self.insert_item(pin);
        Ok(())
    }

    /// Unregisters a pin's item, returning it with its position in the table.
    pub(crate) fn remove_pin(&mut self, pin: &Uuid) -> LibraryResult<(usize, PinGraphicsItem)> {
        let (index, _, item) = self
            .pins
            .shift_remove_full(pin)
            .ok_or(LibraryError::GraphicsItemMissing(*pin))?;
        self.dirty.insert(*pin);
        Ok((index, item))
    }

    /// Puts back an item taken out by [`remove_pin`](Self::remove_pin),
    /// keeping its z value and table position.
    pub(crate) fn restore_item(&mut self, index: usize, item: PinGraphicsItem) -> LibraryResult<()> {
        let pin = item.pin_uuid();
        if self.pins.contains_key(&pin) {
            return Err(LibraryError::GraphicsItemExists(pin));
        }
        let index = index.min(self.pins.len());
        self.pins.shift_insert(index, pin, item);
        self.dirty.insert(pin);
        Ok(())
    }

    fn insert_item(&mut self, pin: Uuid) {
        self.pins.insert(pin, PinGraphicsItem::new(pin, self.next_z));
        self.next_z += 1;
        self.dirty.insert(pin);
    }

    /// Pins whose shape contains `pos`, topmost first.
    pub fn items_at(&self, symbol: &Symbol, pos: Point) -> Vec<Uuid> {
        let mut hits: Vec<&PinGraphicsItem> = self
            .pins
            .values()
            .filter(|item| {
                symbol
                    .pin(&item.pin_uuid())
                    .is_some_and(|pin| item.shape(pin).contains(pos))
            })
            .collect();
        hits.sort_by(|a, b| b.z_value().cmp(&a.z_value()));
        hits.into_iter().map(PinGraphicsItem::pin_uuid).collect()
    }

    /// Pins whose shape overlaps `rect`, in stacking order.
    pub fn items_intersecting(&self, symbol: &Symbol, rect: &Rect) -> Vec<Uuid> {
        self.pins
            .values()
            .filter(|item| {
                symbol
                    .pin(&item.pin_uuid())
                    .is_some_and(|pin| item.shape(pin).intersects(rect))
            })
            .map(PinGraphicsItem::pin_uuid)
            .collect()
    }

    /// Selected pins in stacking order.
    pub fn selected_pins(&self) -> Vec<Uuid> {
        self.pins
            .values()
            .filter(|item| item.is_selected())
            .map(PinGraphicsItem::pin_uuid)
            .collect()
    }

    pub fn is_selected(&self, pin: &Uuid) -> bool {
        self.pins.get(pin).is_some_and(PinGraphicsItem::is_selected)
    }

    pub fn set_selected(&mut self, pin: &Uuid, selected: bool) -> LibraryResult<()> {
        let item = self
            .pins
            .get_mut(pin)
            .ok_or(LibraryError::GraphicsItemMissing(*pin))?;
        if item.is_selected() != selected {
            item.set_selected(selected);
            self.dirty.insert(*pin);
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        for (uuid, item) in self.pins.iter_mut() {
            if item.is_selected() {
                item.set_selected(false);
                self.dirty.insert(*uuid);
            }
        }
    }

    /// Makes exactly the pins in `pins` selected.
    pub fn select_only(&mut self, pins: &[Uuid]) {
        for (uuid, item) in self.pins.iter_mut() {
            let selected = pins.contains(uuid);
            if item.is_selected() != selected {
                item.set_selected(selected);
                self.dirty.insert(*uuid);
            }
        }
    }

    /// Requests a repaint of the given pin.
    pub fn schedule_update(&mut self, pin: Uuid) {
        self.dirty.insert(pin);
    }

    pub fn has_pending_updates(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Returns and clears the pins waiting for a repaint.
    pub fn take_dirty(&mut self) -> Vec<Uuid> {
        self.dirty.drain(..).collect()
    }
}
