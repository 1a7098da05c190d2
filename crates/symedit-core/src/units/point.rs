use super::{Angle, Length};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Neg, Sub, SubAssign};

/// A 2D position in nanometers. The Y axis points up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: Length,
    pub y: Length,
}

impl Point {
    pub const fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    pub const fn from_nm(x: i64, y: i64) -> Self {
        Self::new(Length::from_nm(x), Length::from_nm(y))
    }

    pub fn from_mm(x: f64, y: f64) -> Self {
        Self::new(Length::from_mm(x), Length::from_mm(y))
    }

    pub const fn origin() -> Self {
        Self::from_nm(0, 0)
    }

    pub fn is_origin(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Snaps both axes to the nearest multiple of `interval`.
    pub fn mapped_to_grid(&self, interval: Length) -> Self {
        Self::new(self.x.mapped_to_grid(interval), self.y.mapped_to_grid(interval))
    }

    /// Rotates counter-clockwise by `angle` about `center`.
    ///
    /// Quarter turns are exact; other angles round to the nearest nanometer.
    pub fn rotated(&self, angle: Angle, center: Point) -> Self {
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        let (rx, ry) = match angle.quarter_turns() {
            Some(0) => (dx, dy),
            Some(1) => (-dy, dx),
            Some(2) => (-dx, -dy),
            Some(3) => (dy, -dx),
            _ => {
                let (sin, cos) = angle.to_rad().sin_cos();
                let fx = dx.to_nm() as f64;
                let fy = dy.to_nm() as f64;
                (
                    Length::from_nm((fx * cos - fy * sin).round() as i64),
                    Length::from_nm((fx * sin + fy * cos).round() as i64),
                )
            }
        };
        Self::new(center.x + rx, center.y + ry)
    }

    pub fn rotate(&mut self, angle: Angle, center: Point) {
        *self = self.rotated(angle, center);
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = (self.x - other.x).to_nm() as f64;
        let dy = (self.y - other.y).to_nm() as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Div<i64> for Point {
    type Output = Point;

    fn div(self, rhs: i64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}
