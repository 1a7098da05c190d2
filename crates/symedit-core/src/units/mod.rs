//! Geometric value types
//!
//! All coordinates are integer nanometers so that grid snapping and
//! quarter-turn rotations are exact. Angles are integer deci-degrees
//! normalized to one full turn.

mod angle;
mod length;
mod point;
mod rect;

pub use angle::Angle;
pub use length::Length;
pub use point::Point;
pub use rect::Rect;
