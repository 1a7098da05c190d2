use crate::error::{LibraryError, LibraryResult};
use serde::{Deserialize, Serialize};
use symedit_core::{Angle, Length, Point};
use uuid::Uuid;

/// Name given to newly placed pins.
pub const DEFAULT_PIN_NAME: &str = "Pin";

/// Length given to newly placed pins (2.54 mm).
pub const DEFAULT_PIN_LENGTH: Length = Length::from_nm(2_540_000);

/// A connection point of a symbol.
///
/// The pin starts at `position` (where wires attach) and extends by `length`
/// in the direction given by `rotation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    uuid: Uuid,
    name: String,
    position: Point,
    length: Length,
    rotation: Angle,
}

impl Pin {
    /// Creates a pin, rejecting an empty name or a negative length.
    pub fn new(
        uuid: Uuid,
        name: impl Into<String>,
        position: Point,
        length: Length,
        rotation: Angle,
    ) -> LibraryResult<Self> {
        let name = name.into();
        Self::check_name(&name)?;
        Self::check_length(length)?;
        Ok(Self {
            uuid,
            name,
            position,
            length,
            rotation,
        })
    }

    /// A fresh pin with default name and length at the origin.
    pub fn with_defaults() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: DEFAULT_PIN_NAME.to_string(),
            position: Point::origin(),
            length: DEFAULT_PIN_LENGTH,
            rotation: Angle::deg0(),
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    /// The free end of the pin, opposite to `position`.
    pub fn end_point(&self) -> Point {
        let tip = self.position + Point::new(self.length, Length::ZERO);
        tip.rotated(self.rotation, self.position)
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Angle) {
        self.rotation = rotation;
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> LibraryResult<()> {
        let name = name.into();
        Self::check_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_length(&mut self, length: Length) -> LibraryResult<()> {
        Self::check_length(length)?;
        self.length = length;
        Ok(())
    }

    /// Re-checks all attributes, e.g. after deserialization.
    pub fn validate(&self) -> LibraryResult<()> {
        Self::check_name(&self.name)?;
        Self::check_length(self.length)
    }

    pub(crate) fn check_name(name: &str) -> LibraryResult<()> {
        if name.is_empty() {
            return Err(LibraryError::InvalidPin {
                reason: "name must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_length(length: Length) -> LibraryResult<()> {
        if length < Length::ZERO {
            return Err(LibraryError::InvalidPin {
                reason: format!("length must not be negative, got {}", length),
            });
        }
        Ok(())
    }
}
