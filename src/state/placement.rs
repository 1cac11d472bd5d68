//! Image placement in scene space and the gestures that change it.
//!
//! The stored [`ImagePlacement`] only changes when a gesture ends. While a
//! gesture runs, the renderer shows the transient [`NodeTransform`], whose
//! scale multiplier is folded into the placement on release so repeated
//! resizes compound from the right baseline.

use crate::model::{
    BoundingBox, Dimension, FIT_FRACTION, ImagePlacement, MIN_BOX_SIZE, NodeTransform, Point,
    Rect,
};

use super::{Selection, ViewportController};

/// Fits the image into `FIT_FRACTION` of the viewport (never upscaling past
/// that), centred in the visible area at the current zoom/scroll.
pub fn initial_placement(image: Dimension, vp: &ViewportController) -> Option<ImagePlacement> {
    let view = vp.dimension();
    if image.is_empty() || view.is_empty() {
        return None;
    }
    let scale = (view.width / image.width)
        .min(view.height / image.height)
        .min(FIT_FRACTION);
    let local = Point::new(
        (view.width - image.width * scale) / 2.0,
        (view.height - image.height * scale) / 2.0,
    );
    Some(ImagePlacement {
        position: vp.local_to_scene(local),
        scale: Point::new(scale, scale),
        rotation: 0.0,
    })
}

/// Resize floor: a box narrower or shorter than `MIN_BOX_SIZE` is refused
/// and the previous one kept.
pub fn bound_box(old: BoundingBox, new: BoundingBox) -> BoundingBox {
    if new.width < MIN_BOX_SIZE || new.height < MIN_BOX_SIZE || new.width.is_nan() || new.height.is_nan() {
        log::debug!("resize to {:.1}x{:.1} rejected", new.width, new.height);
        return old;
    }
    new
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomRight => Corner::TopLeft,
            Corner::BottomLeft => Corner::TopRight,
        }
    }

    /// Offset from the node origin in the unrotated frame.
    fn local(self, width: f64, height: f64) -> Point {
        match self {
            Corner::TopLeft => Point::new(0.0, 0.0),
            Corner::TopRight => Point::new(width, 0.0),
            Corner::BottomRight => Point::new(width, height),
            Corner::BottomLeft => Point::new(0.0, height),
        }
    }

    /// Direction in which dragging this corner grows the box.
    fn growth(self) -> Point {
        match self {
            Corner::TopLeft => Point::new(-1.0, -1.0),
            Corner::TopRight => Point::new(1.0, -1.0),
            Corner::BottomRight => Point::new(1.0, 1.0),
            Corner::BottomLeft => Point::new(-1.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    Corner(Corner),
    Rotate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum GestureKind {
    Move,
    Resize(Corner),
    Rotate,
}

#[derive(Clone, Copy, Debug)]
struct Gesture {
    kind: GestureKind,
    start_node: NodeTransform,
    start_pointer: Point,
}

/// The single loaded image: its natural size, placement, transient node and
/// selection state.
#[derive(Clone, Debug)]
pub struct ImageLayer {
    natural: Dimension,
    placement: ImagePlacement,
    node: NodeTransform,
    manual: bool,
    selection: Selection,
    gesture: Option<Gesture>,
}

impl ImageLayer {
    pub fn new(natural: Dimension, vp: &ViewportController) -> Option<Self> {
        let placement = initial_placement(natural, vp)?;
        Some(Self {
            natural,
            placement,
            node: NodeTransform::at_rest(&placement),
            manual: false,
            selection: Selection::Idle,
            gesture: None,
        })
    }

    pub fn placement(&self) -> &ImagePlacement {
        &self.placement
    }

    pub fn node(&self) -> &NodeTransform {
        &self.node
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Re-runs the initial placement after a viewport resize, unless the
    /// user already placed the image by hand.
    pub fn refit(&mut self, vp: &ViewportController) -> bool {
        if self.manual || self.gesture.is_some() {
            return false;
        }
        match initial_placement(self.natural, vp) {
            Some(placement) => {
                self.placement = placement;
                self.node = NodeTransform::at_rest(&placement);
                true
            }
            None => false,
        }
    }

    /// Size on screen at zoom 1, including any running gesture.
    pub fn node_box(&self) -> BoundingBox {
        BoundingBox {
            x: self.node.position.x,
            y: self.node.position.y,
            width: self.natural.width * self.placement.scale.x * self.node.multiplier.x,
            height: self.natural.height * self.placement.scale.y * self.node.multiplier.y,
            rotation: self.node.rotation,
        }
    }

    fn to_scene(&self, local: Point) -> Point {
        self.node.position.add(local.rotate(self.node.rotation))
    }

    fn to_local(&self, scene: Point) -> Point {
        scene.sub(self.node.position).rotate(-self.node.rotation)
    }

    /// Corners in scene space, clockwise from top-left.
    pub fn corners(&self) -> [(Corner, Point); 4] {
        let b = self.node_box();
        Corner::ALL.map(|c| (c, self.to_scene(c.local(b.width, b.height))))
    }

    /// Rotate handle position, `offset` scene units above the top edge.
    pub fn rotate_handle(&self, offset: f64) -> Point {
        let b = self.node_box();
        self.to_scene(Point::new(b.width * 0.5, -offset))
    }

    /// Axis-aligned scene bounds of the (possibly rotated) image.
    pub fn scene_bounds(&self) -> Option<Rect> {
        Rect::enclosing(&self.corners().map(|(_, p)| p))
    }

    pub fn contains(&self, scene: Point) -> bool {
        let b = self.node_box();
        let l = self.to_local(scene);
        l.x >= 0.0 && l.y >= 0.0 && l.x <= b.width && l.y <= b.height
    }

    /// Handle under `scene`, only while selected. `radius` and
    /// `rotate_offset` are in scene units.
    pub fn handle_at(&self, scene: Point, radius: f64, rotate_offset: f64) -> Option<Handle> {
        if !self.selection.is_selected() {
            return None;
        }
        let near = |p: Point| {
            let d = p.sub(scene);
            d.x.abs() <= radius && d.y.abs() <= radius
        };
        if near(self.rotate_handle(rotate_offset)) {
            return Some(Handle::Rotate);
        }
        self.corners()
            .into_iter()
            .find(|(_, p)| near(*p))
            .map(|(c, _)| Handle::Corner(c))
    }

    pub fn select(&mut self) {
        self.selection = self.selection.select();
    }

    pub fn deselect(&mut self) {
        self.selection = self.selection.deselect();
    }

    pub fn is_transforming(&self) -> bool {
        self.gesture.is_some()
    }

    fn begin(&mut self, kind: GestureKind, at: Point) {
        self.selection = self.selection.begin_transform();
        self.gesture = Some(Gesture {
            kind,
            start_node: self.node,
            start_pointer: at,
        });
    }

    pub fn begin_move(&mut self, at: Point) {
        self.begin(GestureKind::Move, at);
    }

    pub fn begin_handle(&mut self, handle: Handle, at: Point) {
        let kind = match handle {
            Handle::Corner(c) => GestureKind::Resize(c),
            Handle::Rotate => GestureKind::Rotate,
        };
        self.begin(kind, at);
    }

    /// Feeds the current pointer (scene space) into the running gesture.
    /// Returns whether the node changed.
    pub fn update_gesture(&mut self, at: Point) -> bool {
        let Some(g) = self.gesture else {
            return false;
        };
        let start = g.start_node;
        let w0 = self.natural.width * self.placement.scale.x * start.multiplier.x;
        let h0 = self.natural.height * self.placement.scale.y * start.multiplier.y;
        match g.kind {
            GestureKind::Move => {
                self.node.position = start.position.add(at.sub(g.start_pointer));
                true
            }
            GestureKind::Resize(corner) => {
                let fixed_local = corner.opposite().local(w0, h0);
                let fixed_scene = start.position.add(fixed_local.rotate(start.rotation));
                let pointer = at.sub(start.position).rotate(-start.rotation);
                let d = pointer.sub(fixed_local);
                let grow = corner.growth();
                let (w, h) = (grow.x * d.x, grow.y * d.y);
                // aspect ratio is locked: project onto the box diagonal
                let f = (w * w0 + h * h0) / (w0 * w0 + h0 * h0);
                let new_fixed_local = corner.opposite().local(w0 * f, h0 * f);
                let proposed = NodeTransform {
                    position: fixed_scene.sub(new_fixed_local.rotate(start.rotation)),
                    multiplier: start.multiplier.scale(f),
                    rotation: start.rotation,
                };
                self.propose(proposed)
            }
            GestureKind::Rotate => {
                let center = start
                    .position
                    .add(Point::new(w0 * 0.5, h0 * 0.5).rotate(start.rotation));
                let d = at.sub(center);
                if d.x == 0.0 && d.y == 0.0 {
                    return false;
                }
                let rotation = d.y.atan2(d.x).to_degrees() + 90.0;
                self.node = NodeTransform {
                    position: center.sub(Point::new(w0 * 0.5, h0 * 0.5).rotate(rotation)),
                    multiplier: start.multiplier,
                    rotation,
                };
                true
            }
        }
    }

    /// Applies a node transform reported by a resize gesture if it passes
    /// the bound-box floor.
    pub fn propose(&mut self, proposed: NodeTransform) -> bool {
        let old = self.node_box();
        let new = BoundingBox {
            x: proposed.position.x,
            y: proposed.position.y,
            width: self.natural.width * self.placement.scale.x * proposed.multiplier.x,
            height: self.natural.height * self.placement.scale.y * proposed.multiplier.y,
            rotation: proposed.rotation,
        };
        if bound_box(old, new) == old && new != old {
            return false;
        }
        self.node = proposed;
        true
    }

    pub fn end_gesture(&mut self) {
        let Some(g) = self.gesture.take() else {
            return;
        };
        match g.kind {
            GestureKind::Move => self.drag_end(self.node.position),
            GestureKind::Resize(_) | GestureKind::Rotate => self.transform_end(self.node),
        }
        self.selection = self.selection.end_transform();
    }

    pub fn drag_end(&mut self, position: Point) {
        self.placement.position = position;
        self.node = NodeTransform::at_rest(&self.placement);
        self.manual = true;
    }

    /// Folds the node's scale multiplier into the stored scale and resets
    /// the node to rest.
    pub fn transform_end(&mut self, node: NodeTransform) {
        self.placement = ImagePlacement {
            position: node.position,
            scale: Point::new(
                self.placement.scale.x * node.multiplier.x,
                self.placement.scale.y * node.multiplier.y,
            ),
            rotation: node.rotation,
        };
        self.node = NodeTransform::at_rest(&self.placement);
        self.manual = true;
    }
}
