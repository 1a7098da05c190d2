use super::shape::{PinShape, PIN_TEXT_OFFSET};
use crate::model::Pin;
use symedit_core::{Angle, Length, Point};
use uuid::Uuid;

/// Placement of a pin's name label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinLabel {
    pub text: String,
    pub anchor: Point,
    pub rotation: Angle,
}

/// Visual item of one pin: selection flag and stacking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinGraphicsItem {
    pin: Uuid,
    selected: bool,
    z_value: u64,
}

impl PinGraphicsItem {
    pub(crate) fn new(pin: Uuid, z_value: u64) -> Self {
        Self {
            pin,
            selected: false,
            z_value,
        }
    }

    pub fn pin_uuid(&self) -> Uuid {
        self.pin
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Stacking order; items added later are drawn on top.
    pub fn z_value(&self) -> u64 {
        self.z_value
    }

    pub fn shape(&self, pin: &Pin) -> PinShape {
        PinShape::of_pin(pin)
    }

    /// The name label sits past the end of the pin line, along its direction.
    pub fn label(&self, pin: &Pin) -> PinLabel {
        let offset = pin.length() + PIN_TEXT_OFFSET;
        let anchor = (pin.position() + Point::new(offset, Length::ZERO))
            .rotated(pin.rotation(), pin.position());
        PinLabel {
            text: pin.name().to_string(),
            anchor,
            rotation: pin.rotation(),
        }
    }
}
