use symedit_core::constants::DEFAULT_GRID_INTERVAL_NM;
use symedit_core::{Length, Point};

/// Snapping grid of the editor canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridProperties {
    interval: Length,
}

impl GridProperties {
    /// Non-positive intervals fall back to the default.
    pub fn new(interval: Length) -> Self {
        let interval = if interval > Length::ZERO {
            interval
        } else {
            tracing::warn!("invalid grid interval {}, using default", interval);
            Length::from_nm(DEFAULT_GRID_INTERVAL_NM)
        };
        Self { interval }
    }

    pub fn interval(&self) -> Length {
        self.interval
    }

    pub fn snap(&self, pos: Point) -> Point {
        pos.mapped_to_grid(self.interval)
    }
}

impl Default for GridProperties {
    fn default() -> Self {
        Self::new(Length::from_nm(DEFAULT_GRID_INTERVAL_NM))
    }
}
