use crate::constants::DECI_DEG_FULL_TURN;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// An angle in deci-degrees, counter-clockwise positive.
///
/// The stored value is always normalized to `[0, 3600)`, so equality
/// compares wrapped values: `-90°` equals `270°`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct Angle(i32);

impl Angle {
    pub const fn from_deci_deg(deci: i32) -> Self {
        Self(deci.rem_euclid(DECI_DEG_FULL_TURN))
    }

    /// Rounds to the nearest deci-degree.
    pub fn from_deg(deg: f64) -> Self {
        Self::from_deci_deg((deg * 10.0).round() as i32)
    }

    pub const fn deg0() -> Self {
        Self(0)
    }

    pub const fn deg45() -> Self {
        Self(450)
    }

    pub const fn deg90() -> Self {
        Self(900)
    }

    pub const fn deg180() -> Self {
        Self(1800)
    }

    pub const fn deg270() -> Self {
        Self(2700)
    }

    /// Normalized value in `[0, 3600)`.
    pub const fn to_deci_deg(self) -> i32 {
        self.0
    }

    pub fn to_deg(self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Value mapped to `(-180°, 180°]`.
    pub fn to_signed_deg(self) -> f64 {
        if self.0 > DECI_DEG_FULL_TURN / 2 {
            f64::from(self.0 - DECI_DEG_FULL_TURN) / 10.0
        } else {
            self.to_deg()
        }
    }

    pub fn to_rad(self) -> f64 {
        self.to_deg().to_radians()
    }

    /// Number of counter-clockwise quarter turns, if this is a multiple of 90°.
    pub fn quarter_turns(self) -> Option<u8> {
        if self.0 % 900 == 0 {
            Some((self.0 / 900) as u8)
        } else {
            None
        }
    }
}

impl From<i32> for Angle {
    fn from(deci: i32) -> Self {
        Self::from_deci_deg(deci)
    }
}

impl From<Angle> for i32 {
    fn from(angle: Angle) -> Self {
        angle.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.to_deg())
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::from_deci_deg(self.0 + rhs.0)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        *self = *self + rhs;
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_deci_deg(self.0 - rhs.0)
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Angle) {
        *self = *self - rhs;
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::from_deci_deg(-self.0)
    }
}
