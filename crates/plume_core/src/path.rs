//! Path items
//!
//! A `Path` is an ordered sequence of segments plus the display flags the
//! animation layer toggles on detached snapshots. All transform methods
//! mutate in place. Anchors live in item coordinates; handles are relative
//! offsets, so translation leaves them untouched while linear transforms
//! (rotate, scale, shear) apply only their vector part to them.

use crate::geometry::{Matrix, Point, Rect};
use crate::segment::Segment;
use smallvec::SmallVec;

/// A path item: ordered segments plus display flags
#[derive(Clone, Debug, Default)]
pub struct Path {
    segments: SmallVec<[Segment; 8]>,
    visible: bool,
    fully_selected: bool,
}

impl Path {
    pub fn new() -> Self {
        Self {
            segments: SmallVec::new(),
            visible: true,
            fully_selected: false,
        }
    }

    pub fn with_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
            visible: true,
            fully_selected: false,
        }
    }

    /// A polygon through the given anchor points, without curve handles
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self::with_segments(points.into_iter().map(Segment::corner))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn fully_selected(&self) -> bool {
        self.fully_selected
    }

    pub fn set_fully_selected(&mut self, fully_selected: bool) {
        self.fully_selected = fully_selected;
    }

    /// Bounding box of the segment anchors, or `None` for an empty path
    pub fn bounds(&self) -> Option<Rect> {
        let mut segments = self.segments.iter();
        let first = segments.next()?.point;
        let mut rect = Rect::new(first.x, first.y, 0.0, 0.0);
        for segment in segments {
            rect = rect.include(segment.point);
        }
        Some(rect)
    }

    /// Center of the bounding box; `Point::ZERO` for an empty path
    pub fn position(&self) -> Point {
        self.bounds().map(|b| b.center()).unwrap_or(Point::ZERO)
    }

    pub fn translate(&mut self, offset: Point) {
        for segment in &mut self.segments {
            segment.point += offset;
        }
    }

    /// Rotate by `angle` radians about `pivot` (default: the path position)
    pub fn rotate(&mut self, angle: f32, pivot: Option<Point>) {
        let pivot = pivot.unwrap_or_else(|| self.position());
        self.transform(&Matrix::rotation(angle).about(pivot));
    }

    /// Scale about `pivot` (default: the path position)
    pub fn scale(&mut self, sx: f32, sy: f32, pivot: Option<Point>) {
        let pivot = pivot.unwrap_or_else(|| self.position());
        self.transform(&Matrix::scaling(sx, sy).about(pivot));
    }

    /// Shear about `pivot` (default: the path position)
    pub fn shear(&mut self, hor: f32, ver: f32, pivot: Option<Point>) {
        let pivot = pivot.unwrap_or_else(|| self.position());
        self.transform(&Matrix::shearing(hor, ver).about(pivot));
    }

    /// Apply an affine transform to every segment
    pub fn transform(&mut self, matrix: &Matrix) {
        for segment in &mut self.segments {
            segment.point = matrix.apply(segment.point);
            segment.handle_in = matrix.apply_vector(segment.handle_in);
            segment.handle_out = matrix.apply_vector(segment.handle_out);
        }
    }

    /// Scale and translate the path so its bounds fit inside `rect`
    /// (`fill = false`) or cover it (`fill = true`). Aspect ratio is kept.
    pub fn fit_bounds(&mut self, rect: Rect, fill: bool) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        if bounds.width > 0.0 && bounds.height > 0.0 {
            let sx = rect.width / bounds.width;
            let sy = rect.height / bounds.height;
            let factor = if fill { sx.max(sy) } else { sx.min(sy) };
            self.scale(factor, factor, Some(bounds.center()));
        }
        self.translate(rect.center() - self.position());
    }
}
