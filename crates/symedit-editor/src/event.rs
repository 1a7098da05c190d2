use symedit_core::Point;

/// Keyboard modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        control: false,
        shift: false,
    };

    pub const CONTROL: Modifiers = Modifiers {
        control: true,
        shift: false,
    };

    /// Extends the selection instead of replacing it.
    pub fn is_additive(&self) -> bool {
        self.control
    }
}

/// A pointer event in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneMouseEvent {
    pub scene_pos: Point,
    pub modifiers: Modifiers,
}

impl SceneMouseEvent {
    pub fn new(scene_pos: Point) -> Self {
        Self {
            scene_pos,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(scene_pos: Point, modifiers: Modifiers) -> Self {
        Self { scene_pos, modifiers }
    }
}
