// Pan gesture tracking shared by mouse and touch input
use crate::model::Point;

use super::ViewportController;

#[derive(Default, Debug, Clone)]
pub struct PanGesture {
    last: Option<Point>,
}

impl PanGesture {
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    pub fn begin(&mut self, vp: &mut ViewportController, at: Point) {
        self.last = Some(at);
        vp.set_is_dragging(true);
    }

    /// Returns false (and touches nothing) when no pan is in progress.
    pub fn move_to(&mut self, vp: &mut ViewportController, at: Point) -> bool {
        let Some(prev) = self.last else {
            return false;
        };
        vp.apply_pan(prev, at);
        self.last = Some(at);
        true
    }

    pub fn end(&mut self, vp: &mut ViewportController) {
        self.last = None;
        vp.set_is_dragging(false);
    }
}
