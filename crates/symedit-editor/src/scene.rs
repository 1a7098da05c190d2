use symedit_core::{Point, Rect};

/// The rendering collaborator's scene, reduced to what the editing states
/// drive: rubber-band feedback and deferred repaint requests.
///
/// The selection rectangle is visual only; selection itself lives in the
/// symbol's graphics items.
#[derive(Debug, Default)]
pub struct GraphicsScene {
    selection_rect: Option<Rect>,
    update_requested: bool,
}

impl GraphicsScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_selection_rect(&mut self, p1: Point, p2: Point) {
        self.selection_rect = Some(Rect::from_corners(p1, p2));
        self.request_update();
    }

    pub fn clear_selection_rect(&mut self) {
        if self.selection_rect.take().is_some() {
            self.request_update();
        }
    }

    pub fn selection_rect(&self) -> Option<Rect> {
        self.selection_rect
    }

    /// Schedules a repaint; nothing is drawn synchronously.
    pub fn request_update(&mut self) {
        self.update_requested = true;
    }

    /// Returns whether a repaint was requested and resets the flag.
    pub fn take_update_request(&mut self) -> bool {
        std::mem::take(&mut self.update_requested)
    }
}
