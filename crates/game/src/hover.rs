//! Pointer hover over the regions of the current view.

use engine_core::Vec2;
use renderer::{Cursor, Surface};

use crate::region::{last_containing, Hover, Region};

/// Remembers which region the pointer is over so enter/exit fire once per crossing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: Option<usize>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Test `point` against `regions` and update the interaction layer on a change.
    pub fn pointer_moved<R: Region>(&mut self, point: Vec2, regions: &[R], overlay: &mut dyn Surface) -> Option<Hover> {
        let now = last_containing(regions, point);
        if now == self.hovered {
            return None;
        }
        if let Some(region) = self.hovered.and_then(|i| regions.get(i)) {
            region.handle_hover(Hover::Exit, overlay);
        }
        self.hovered = now;
        match now.and_then(|i| regions.get(i)) {
            Some(region) => {
                region.handle_hover(Hover::Enter, overlay);
                Some(Hover::Enter)
            }
            None => Some(Hover::Exit),
        }
    }

    /// Forget the hovered region and wipe the overlay. Call when the view's regions are replaced.
    pub fn reset(&mut self, overlay: &mut dyn Surface) {
        self.hovered = None;
        overlay.clear();
        overlay.set_cursor(Cursor::Default);
    }
}
