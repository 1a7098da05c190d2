//! Shared constants.

/// Default grid interval in nanometers (2.54 mm).
pub const DEFAULT_GRID_INTERVAL_NM: i64 = 2_540_000;

/// Default maximum number of committed undo entries.
pub const DEFAULT_UNDO_LIMIT: usize = 100;

/// Nanometers per millimeter.
pub const NM_PER_MM: i64 = 1_000_000;

/// Deci-degrees in a full turn.
pub const DECI_DEG_FULL_TURN: i32 = 3600;
