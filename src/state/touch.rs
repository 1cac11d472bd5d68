// Two-finger pinch zoom state
use crate::model::Point;

use super::ViewportController;

fn distance(a: Point, b: Point) -> f64 {
    let d = b.sub(a);
    (d.x * d.x + d.y * d.y).sqrt()
}

fn midpoint(a: Point, b: Point) -> Point {
    a.add(b).scale(0.5)
}

#[derive(Default, Debug, Clone)]
pub struct PinchGesture {
    start_dist: f64,
    start_zoom: f64,
    active: bool,
}

impl PinchGesture {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Coincident fingers can't define a scale, so no pinch starts.
    pub fn begin(&mut self, vp: &ViewportController, a: Point, b: Point) -> bool {
        let dist = distance(a, b);
        if dist <= f64::EPSILON {
            return false;
        }
        self.start_dist = dist;
        self.start_zoom = vp.zoom();
        self.active = true;
        true
    }

    /// Zooms around the current midpoint of the two touches, proportional
    /// to how far they spread since the pinch began.
    pub fn update(&mut self, vp: &mut ViewportController, a: Point, b: Point) -> bool {
        if !self.active {
            return false;
        }
        let dist = distance(a, b);
        if dist <= f64::EPSILON {
            return false;
        }
        vp.zoom_to_point(midpoint(a, b), self.start_zoom * dist / self.start_dist);
        true
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MAX_ZOOM;
    use crate::util::approx_eq;

    #[test]
    fn spread_doubles_zoom_around_midpoint() {
        let mut vp = ViewportController::default();
        vp.set_viewport_offset(10.0, 20.0);
        let mut pinch = PinchGesture::default();
        let (a, b) = (Point::new(100.0, 100.0), Point::new(200.0, 100.0));
        assert!(pinch.begin(&vp, a, b));
        let mid = Point::new(150.0, 100.0);
        let anchor = vp.screen_to_scene(mid);
        assert!(pinch.update(&mut vp, Point::new(50.0, 100.0), Point::new(250.0, 100.0)));
        assert!(approx_eq(vp.zoom(), 2.0));
        let after = vp.scene_to_screen(anchor);
        assert!(approx_eq(after.x, mid.x) && approx_eq(after.y, mid.y));
    }

    #[test]
    fn pinch_respects_zoom_bounds() {
        let mut vp = ViewportController::default();
        let mut pinch = PinchGesture::default();
        pinch.begin(&vp, Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        pinch.update(&mut vp, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(vp.zoom(), MAX_ZOOM);
    }

    #[test]
    fn inactive_or_degenerate_is_noop() {
        let mut vp = ViewportController::default();
        let mut pinch = PinchGesture::default();
        let p = Point::new(5.0, 5.0);
        assert!(!pinch.update(&mut vp, p, Point::new(50.0, 5.0)));
        assert!(!pinch.begin(&vp, p, p));
        assert!(!pinch.is_active());
        pinch.begin(&vp, p, Point::new(15.0, 5.0));
        assert!(!pinch.update(&mut vp, p, p));
        pinch.end();
        assert!(!pinch.update(&mut vp, p, Point::new(50.0, 5.0)));
        assert_eq!(vp.zoom(), 1.0);
    }
}
