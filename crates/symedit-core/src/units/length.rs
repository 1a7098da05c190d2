use crate::constants::NM_PER_MM;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A signed length in nanometers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length(i64);

impl Length {
    pub const ZERO: Length = Length(0);

    pub const fn from_nm(nm: i64) -> Self {
        Self(nm)
    }

    /// Converts millimeters to the nearest nanometer.
    pub fn from_mm(mm: f64) -> Self {
        Self((mm * NM_PER_MM as f64).round() as i64)
    }

    pub const fn to_nm(self) -> i64 {
        self.0
    }

    pub fn to_mm(self) -> f64 {
        self.0 as f64 / NM_PER_MM as f64
    }

    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Rounds to the nearest multiple of `interval`, halves away from zero.
    ///
    /// A non-positive interval leaves the value unchanged.
    pub fn mapped_to_grid(self, interval: Length) -> Self {
        let grid = interval.0.abs();
        if grid == 0 {
            return self;
        }
        let half = grid / 2;
        let magnitude = (self.0.abs() + half) / grid * grid;
        if self.0 < 0 {
            Self(-magnitude)
        } else {
            Self(magnitude)
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}mm", self.to_mm())
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl SubAssign for Length {
    fn sub_assign(&mut self, rhs: Length) {
        self.0 -= rhs.0;
    }
}

impl Neg for Length {
    type Output = Length;

    fn neg(self) -> Length {
        Length(-self.0)
    }
}

impl Mul<i64> for Length {
    type Output = Length;

    fn mul(self, rhs: i64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<i64> for Length {
    type Output = Length;

    fn div(self, rhs: i64) -> Length {
        Length(self.0 / rhs)
    }
}
