//! The host-item contract
//!
//! The engine never owns scene-graph nodes; it mutates them through this
//! trait. Any node that can report its pose, apply affine transforms, and
//! (for path-like items) expose its segments can be animated. `Clone` is
//! required because shape morphing works against a detached snapshot of the
//! item.

use plume_core::{Matrix, Path, Point, Rect, Segment};

/// A scene-graph node the animation engine can drive.
///
/// Segment access is optional: items without segments (groups, rasters)
/// return `None` and simply never participate in shape morphing.
pub trait Item: Clone {
    /// Current pose reference point (typically the bounds center)
    fn position(&self) -> Point;

    fn translate(&mut self, offset: Point);

    /// Rotate by `angle` radians about `pivot`, or the item position
    fn rotate(&mut self, angle: f32, pivot: Option<Point>);

    fn scale(&mut self, sx: f32, sy: f32, pivot: Option<Point>);

    fn shear(&mut self, hor: f32, ver: f32, pivot: Option<Point>);

    fn transform(&mut self, matrix: &Matrix);

    /// Fit (or, with `fill`, cover) the given rectangle
    fn fit_bounds(&mut self, rect: Rect, fill: bool);

    fn set_visible(&mut self, visible: bool);

    fn set_fully_selected(&mut self, fully_selected: bool);

    /// Segment sequence for path-like items
    fn segments(&self) -> Option<&[Segment]>;

    fn segments_mut(&mut self) -> Option<&mut [Segment]>;

    /// Number of segments; 0 for items without any
    fn segment_count(&self) -> usize {
        self.segments().map(<[Segment]>::len).unwrap_or(0)
    }
}

impl Item for Path {
    fn position(&self) -> Point {
        Path::position(self)
    }

    fn translate(&mut self, offset: Point) {
        Path::translate(self, offset);
    }

    fn rotate(&mut self, angle: f32, pivot: Option<Point>) {
        Path::rotate(self, angle, pivot);
    }

    fn scale(&mut self, sx: f32, sy: f32, pivot: Option<Point>) {
        Path::scale(self, sx, sy, pivot);
    }

    fn shear(&mut self, hor: f32, ver: f32, pivot: Option<Point>) {
        Path::shear(self, hor, ver, pivot);
    }

    fn transform(&mut self, matrix: &Matrix) {
        Path::transform(self, matrix);
    }

    fn fit_bounds(&mut self, rect: Rect, fill: bool) {
        Path::fit_bounds(self, rect, fill);
    }

    fn set_visible(&mut self, visible: bool) {
        Path::set_visible(self, visible);
    }

    fn set_fully_selected(&mut self, fully_selected: bool) {
        Path::set_fully_selected(self, fully_selected);
    }

    fn segments(&self) -> Option<&[Segment]> {
        Some(Path::segments(self))
    }

    fn segments_mut(&mut self) -> Option<&mut [Segment]> {
        Some(Path::segments_mut(self))
    }
}
