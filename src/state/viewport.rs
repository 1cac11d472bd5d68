// Viewport state: zoom, scroll and the page <-> scene mapping.
//
// Three coordinate spaces are in play:
// - page space: pointer coordinates as the browser reports them (client coords)
// - viewport-local space: page space minus `viewport_offset`
// - scene space: where image placement lives, independent of zoom/scroll
use crate::model::{Dimension, MAX_ZOOM, MIN_ZOOM, Point, Rect};

pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return MIN_ZOOM;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Single owner of the zoom/scroll mapping. Renderer and input handlers
/// share one instance per session and never apply zoom or scroll themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    dimension: Dimension,
    zoom: f64,
    scroll: Point,
    is_dragging: bool,
    viewport_offset: Point,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self {
            dimension: Dimension::default(),
            zoom: 1.0,
            scroll: Point::default(),
            is_dragging: false,
            viewport_offset: Point::default(),
        }
    }
}

/// 2d canvas transform mapping scene space to viewport-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ViewportController {
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn scroll(&self) -> Point {
        self.scroll
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn viewport_offset(&self) -> Point {
        self.viewport_offset
    }

    /// No auto-refit: zoom and scroll are left alone.
    pub fn set_dimension(&mut self, width: f64, height: f64) {
        self.dimension = Dimension::new(width, height);
    }

    pub fn set_viewport_offset(&mut self, x: f64, y: f64) {
        self.viewport_offset = Point::new(x, y);
    }

    /// Plain replacement, no anchoring. See [`Self::zoom_to_point`].
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = clamp_zoom(zoom);
    }

    /// Panning is unbounded.
    pub fn set_scroll(&mut self, x: f64, y: f64) {
        self.scroll = Point::new(x, y);
    }

    pub fn set_is_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    pub fn screen_to_scene(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.viewport_offset.x) / self.zoom + self.scroll.x,
            (screen.y - self.viewport_offset.y) / self.zoom + self.scroll.y,
        )
    }

    pub fn scene_to_screen(&self, scene: Point) -> Point {
        Point::new(
            (scene.x - self.scroll.x) * self.zoom + self.viewport_offset.x,
            (scene.y - self.scroll.y) * self.zoom + self.viewport_offset.y,
        )
    }

    /// Viewport-local pixels to scene space.
    pub fn local_to_scene(&self, local: Point) -> Point {
        self.screen_to_scene(local.add(self.viewport_offset))
    }

    /// Page-space position of the viewport centre.
    pub fn viewport_center(&self) -> Point {
        self.viewport_offset
            .add(Point::new(self.dimension.width * 0.5, self.dimension.height * 0.5))
    }

    /// Zooms so that the scene point under `point` (page space) stays under
    /// it. Zoom and scroll are committed together.
    pub fn zoom_to_point(&mut self, point: Point, new_zoom: f64) {
        let anchor = self.screen_to_scene(point);
        let zoom = clamp_zoom(new_zoom);
        let local = point.sub(self.viewport_offset);
        let scroll = anchor.sub(local.scale(1.0 / zoom));
        self.zoom = zoom;
        self.scroll = scroll;
    }

    /// Wheel handler: `delta_y > 0` zooms out by `step`, anything else zooms in.
    pub fn wheel_zoom(&mut self, point: Point, delta_y: f64, step: f64) {
        let sign = if delta_y > 0.0 { -1.0 } else { 1.0 };
        self.zoom_to_point(point, self.zoom + sign * step);
    }

    pub fn zoom_in(&mut self, step: f64) {
        self.zoom_to_point(self.viewport_center(), self.zoom + step);
    }

    pub fn zoom_out(&mut self, step: f64) {
        self.zoom_to_point(self.viewport_center(), self.zoom - step);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > MIN_ZOOM
    }

    pub fn reset_zoom(&mut self) {
        self.set_zoom(1.0);
        self.set_scroll(0.0, 0.0);
    }

    /// Fits `bounds` (scene space) into the viewport without magnifying past
    /// 100% and centres it. Returns false when nothing could be fitted.
    pub fn fit_to_bounds(&mut self, bounds: Rect) -> bool {
        if self.dimension.is_empty() || !(bounds.width > 0.0 && bounds.height > 0.0) {
            return false;
        }
        let zoom = clamp_zoom(
            (self.dimension.width / bounds.width)
                .min(self.dimension.height / bounds.height)
                .min(1.0),
        );
        let half_view = Point::new(self.dimension.width * 0.5, self.dimension.height * 0.5);
        let scroll = bounds.center().sub(half_view.scale(1.0 / zoom));
        self.zoom = zoom;
        self.scroll = scroll;
        true
    }

    /// Applies one step of a pan gesture. The content follows the pointer,
    /// so scroll moves the opposite way, measured in scene units.
    pub fn apply_pan(&mut self, prev_screen: Point, curr_screen: Point) {
        let delta = curr_screen.sub(prev_screen).scale(1.0 / self.zoom);
        self.scroll = self.scroll.sub(delta);
    }

    pub fn canvas_transform(&self) -> CanvasTransform {
        CanvasTransform {
            scale: self.zoom,
            translate_x: -self.scroll.x * self.zoom,
            translate_y: -self.scroll.y * self.zoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::approx_eq;

    fn assert_point(actual: Point, expected: Point) {
        assert!(
            approx_eq(actual.x, expected.x) && approx_eq(actual.y, expected.y),
            "{actual:?} != {expected:?}"
        );
    }

    fn sample_states() -> Vec<ViewportController> {
        let mut out = Vec::new();
        for &zoom in &[0.1, 0.37, 1.0, 2.5, 5.0] {
            for &(sx, sy) in &[(0.0, 0.0), (-310.5, 42.25), (1e4, -7e3)] {
                for &(ox, oy) in &[(0.0, 0.0), (17.0, 64.5)] {
                    let mut vp = ViewportController::default();
                    vp.set_dimension(800.0, 600.0);
                    vp.set_zoom(zoom);
                    vp.set_scroll(sx, sy);
                    vp.set_viewport_offset(ox, oy);
                    out.push(vp);
                }
            }
        }
        out
    }

    const PROBES: [Point; 4] = [
        Point::new(0.0, 0.0),
        Point::new(400.0, 300.0),
        Point::new(-55.5, 1234.0),
        Point::new(799.0, 1.0),
    ];

    #[test]
    fn defaults() {
        let vp = ViewportController::default();
        assert_eq!(vp.zoom(), 1.0);
        assert_eq!(vp.scroll(), Point::default());
        assert!(!vp.is_dragging());
        assert!(vp.dimension().is_empty());
    }

    #[test]
    fn screen_scene_roundtrip() {
        for vp in sample_states() {
            for p in PROBES {
                assert_point(vp.scene_to_screen(vp.screen_to_scene(p)), p);
                assert_point(vp.screen_to_scene(vp.scene_to_screen(p)), p);
            }
        }
    }

    #[test]
    fn conversions_use_offset() {
        let mut vp = ViewportController::default();
        vp.set_zoom(2.0);
        vp.set_scroll(10.0, 20.0);
        vp.set_viewport_offset(100.0, 50.0);
        assert_point(vp.screen_to_scene(Point::new(100.0, 50.0)), Point::new(10.0, 20.0));
        assert_point(vp.screen_to_scene(Point::new(140.0, 70.0)), Point::new(30.0, 30.0));
        assert_point(vp.local_to_scene(Point::new(40.0, 20.0)), Point::new(30.0, 30.0));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut vp = ViewportController::default();
        vp.set_zoom(-1.0);
        assert_eq!(vp.zoom(), MIN_ZOOM);
        vp.set_zoom(100.0);
        assert_eq!(vp.zoom(), MAX_ZOOM);
        vp.set_zoom(f64::NAN);
        assert_eq!(vp.zoom(), MIN_ZOOM);
        vp.set_zoom(1.7);
        assert_eq!(vp.zoom(), 1.7);
        for z in [-3.0, 0.0, 0.05, 0.1, 4.99, 5.0, 5.01, f64::INFINITY] {
            vp.zoom_to_point(Point::new(10.0, 10.0), z);
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&vp.zoom()));
        }
    }

    #[test]
    fn set_dimension_does_not_refit() {
        let mut vp = ViewportController::default();
        vp.set_zoom(3.0);
        vp.set_scroll(5.0, 6.0);
        vp.set_dimension(1024.0, 768.0);
        assert_eq!(vp.zoom(), 3.0);
        assert_eq!(vp.scroll(), Point::new(5.0, 6.0));
    }

    #[test]
    fn zoom_to_point_keeps_anchor() {
        for mut vp in sample_states() {
            for p in PROBES {
                for z in [0.1, 0.8, 1.0, 3.3, 5.0, 9.0] {
                    let before = vp.screen_to_scene(p);
                    vp.zoom_to_point(p, z);
                    assert_point(vp.scene_to_screen(before), p);
                    assert_point(vp.screen_to_scene(p), before);
                }
            }
        }
    }

    #[test]
    fn zoom_to_point_example() {
        let mut vp = ViewportController::default();
        vp.zoom_to_point(Point::new(400.0, 300.0), 2.0);
        assert_eq!(vp.zoom(), 2.0);
        assert_point(vp.scroll(), Point::new(200.0, 150.0));
    }

    #[test]
    fn zoom_to_point_clamped_target_still_anchors() {
        let mut vp = ViewportController::default();
        vp.set_viewport_offset(30.0, 40.0);
        let p = Point::new(230.0, 140.0);
        let before = vp.screen_to_scene(p);
        vp.zoom_to_point(p, 50.0);
        assert_eq!(vp.zoom(), MAX_ZOOM);
        assert_point(vp.scene_to_screen(before), p);
    }

    #[test]
    fn pan_moves_scroll_against_pointer() {
        for mut vp in sample_states() {
            let start = vp.scroll();
            let a = Point::new(120.0, 80.0);
            let b = Point::new(180.0, 20.0);
            vp.apply_pan(a, b);
            let zoom = vp.zoom();
            assert_point(
                vp.scroll(),
                Point::new(start.x - (b.x - a.x) / zoom, start.y - (b.y - a.y) / zoom),
            );
        }
    }

    #[test]
    fn pan_keeps_grabbed_scene_point_under_pointer() {
        let mut vp = ViewportController::default();
        vp.set_zoom(2.0);
        vp.set_viewport_offset(10.0, 10.0);
        let a = Point::new(200.0, 200.0);
        let grabbed = vp.screen_to_scene(a);
        let b = Point::new(260.0, 150.0);
        vp.apply_pan(a, b);
        assert_point(vp.scene_to_screen(grabbed), b);
    }

    #[test]
    fn scroll_is_unbounded() {
        let mut vp = ViewportController::default();
        vp.set_scroll(-1e9, 1e9);
        assert_eq!(vp.scroll(), Point::new(-1e9, 1e9));
    }

    #[test]
    fn wheel_direction_and_step() {
        let mut vp = ViewportController::default();
        let p = Point::new(50.0, 50.0);
        vp.wheel_zoom(p, 120.0, 0.1);
        assert!(approx_eq(vp.zoom(), 0.9));
        vp.wheel_zoom(p, -3.0, 0.1);
        vp.wheel_zoom(p, 0.0, 0.1);
        assert!(approx_eq(vp.zoom(), 1.1));
        for _ in 0..100 {
            vp.wheel_zoom(p, 1.0, 0.1);
        }
        assert_eq!(vp.zoom(), MIN_ZOOM);
        assert!(!vp.can_zoom_out());
    }

    #[test]
    fn buttons_anchor_at_viewport_center() {
        let mut vp = ViewportController::default();
        vp.set_dimension(800.0, 600.0);
        vp.set_viewport_offset(100.0, 20.0);
        vp.set_scroll(33.0, -12.0);
        let center = vp.viewport_center();
        assert_eq!(center, Point::new(500.0, 320.0));
        let before = vp.screen_to_scene(center);
        vp.zoom_in(0.2);
        assert!(approx_eq(vp.zoom(), 1.2));
        assert_point(vp.scene_to_screen(before), center);
        vp.zoom_out(0.2);
        vp.zoom_out(0.2);
        assert!(approx_eq(vp.zoom(), 0.8));
        assert_point(vp.scene_to_screen(before), center);
    }

    #[test]
    fn zoom_in_stops_at_max() {
        let mut vp = ViewportController::default();
        vp.set_dimension(100.0, 100.0);
        for _ in 0..40 {
            vp.zoom_in(0.2);
        }
        assert_eq!(vp.zoom(), MAX_ZOOM);
        assert!(!vp.can_zoom_in());
        assert!(vp.can_zoom_out());
    }

    #[test]
    fn reset_zoom_restores_identity() {
        let mut vp = ViewportController::default();
        vp.set_zoom(3.0);
        vp.set_scroll(9.0, 9.0);
        vp.reset_zoom();
        assert_eq!(vp.zoom(), 1.0);
        assert_eq!(vp.scroll(), Point::default());
    }

    #[test]
    fn fit_to_bounds_centres_and_caps_at_one() {
        let mut vp = ViewportController::default();
        vp.set_dimension(800.0, 600.0);
        vp.set_viewport_offset(50.0, 50.0);
        let big = Rect { x: 100.0, y: 100.0, width: 1600.0, height: 600.0 };
        assert!(vp.fit_to_bounds(big));
        assert!(approx_eq(vp.zoom(), 0.5));
        assert_point(vp.scene_to_screen(big.center()), vp.viewport_center());

        let small = Rect { x: -10.0, y: -10.0, width: 20.0, height: 20.0 };
        assert!(vp.fit_to_bounds(small));
        assert_eq!(vp.zoom(), 1.0);
        assert_point(vp.scene_to_screen(small.center()), vp.viewport_center());
    }

    #[test]
    fn fit_to_bounds_ignores_degenerate_input() {
        let mut vp = ViewportController::default();
        let r = Rect { x: 0.0, y: 0.0, width: 10.0, height: 10.0 };
        assert!(!vp.fit_to_bounds(r));
        vp.set_dimension(800.0, 600.0);
        assert!(!vp.fit_to_bounds(Rect { width: 0.0, ..r }));
        assert_eq!(vp.zoom(), 1.0);
    }

    #[test]
    fn canvas_transform_matches_scene_to_screen() {
        for vp in sample_states() {
            let t = vp.canvas_transform();
            for p in PROBES {
                let local = Point::new(p.x * t.scale + t.translate_x, p.y * t.scale + t.translate_y);
                assert_point(local.add(vp.viewport_offset()), vp.scene_to_screen(p));
            }
        }
    }
}
