//! Path segments
//!
//! A segment is one vertex of a path: an anchor point plus two control
//! handles. Handles are stored as offsets relative to the anchor, so a
//! straight corner has both handles at `Point::ZERO`.
//!
//! Arithmetic treats a segment as a 3-tuple of points, each combined
//! independently; scalars broadcast to all three.

use crate::geometry::Point;
use std::ops::{Add, Div, Mul, Sub};

/// One vertex of a path: anchor + in/out control handles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment {
    /// Anchor point, in item coordinates
    pub point: Point,
    /// Control handle for the incoming curve, relative to the anchor
    pub handle_in: Point,
    /// Control handle for the outgoing curve, relative to the anchor
    pub handle_out: Point,
}

impl Segment {
    pub const fn new(point: Point, handle_in: Point, handle_out: Point) -> Self {
        Self {
            point,
            handle_in,
            handle_out,
        }
    }

    /// A corner segment with no curve handles
    pub const fn corner(point: Point) -> Self {
        Self::new(point, Point::ZERO, Point::ZERO)
    }
}

macro_rules! segment_segment_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Segment {
            type Output = Segment;
            fn $method(self, rhs: Segment) -> Segment {
                Segment::new(
                    self.point $op rhs.point,
                    self.handle_in $op rhs.handle_in,
                    self.handle_out $op rhs.handle_out,
                )
            }
        }
    };
}

macro_rules! segment_scalar_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f32> for Segment {
            type Output = Segment;
            fn $method(self, rhs: f32) -> Segment {
                Segment::new(
                    self.point $op rhs,
                    self.handle_in $op rhs,
                    self.handle_out $op rhs,
                )
            }
        }
    };
}

segment_segment_op!(Add, add, +);
segment_segment_op!(Sub, sub, -);
segment_segment_op!(Mul, mul, *);
segment_segment_op!(Div, div, /);
segment_scalar_op!(Mul, mul, *);
segment_scalar_op!(Div, div, /);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_arithmetic_is_componentwise() {
        let a = Segment::new(
            Point::new(1.0, 2.0),
            Point::new(-1.0, 0.0),
            Point::new(1.0, 0.0),
        );
        let b = Segment::new(
            Point::new(3.0, 2.0),
            Point::new(-2.0, 0.0),
            Point::new(2.0, 0.0),
        );

        let sum = a + b;
        assert_eq!(sum.point, Point::new(4.0, 4.0));
        assert_eq!(sum.handle_in, Point::new(-3.0, 0.0));
        assert_eq!(sum.handle_out, Point::new(3.0, 0.0));

        let diff = b - a;
        assert_eq!(diff.point, Point::new(2.0, 0.0));
    }

    #[test]
    fn test_scalar_broadcast_scales_all_three_points() {
        let s = Segment::new(
            Point::new(2.0, 4.0),
            Point::new(-2.0, 2.0),
            Point::new(2.0, -2.0),
        ) * 0.5;
        assert_eq!(s.point, Point::new(1.0, 2.0));
        assert_eq!(s.handle_in, Point::new(-1.0, 1.0));
        assert_eq!(s.handle_out, Point::new(1.0, -1.0));
    }
}
