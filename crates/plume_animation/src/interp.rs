//! Segment interpolation
//!
//! The morphing step is plain two-point linear interpolation applied
//! independently to a segment's anchor and both handles.

use plume_core::Segment;

/// Interpolate between two segments.
///
/// `x1`/`x2` are the time bounds of the interpolation window, `x` the
/// elapsed time within it, `y1`/`y2` the segments at each bound:
///
/// ```text
/// y = y1 + (x - x1) * (y2 - y1) / (x2 - x1)
/// ```
///
/// A zero-width window is a caller-side precondition violation; the
/// animation layer only interpolates while its remaining duration is
/// positive.
pub fn interpolate_segment(x1: f32, x2: f32, y1: Segment, y2: Segment, x: f32) -> Segment {
    debug_assert!(x2 - x1 != 0.0, "zero-width interpolation window");
    y1 + (y2 - y1) * (x - x1) / (x2 - x1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_core::Point;

    fn seg(x: f32, y: f32) -> Segment {
        Segment::new(
            Point::new(x, y),
            Point::new(-x / 2.0, 0.0),
            Point::new(x / 2.0, 0.0),
        )
    }

    #[test]
    fn test_endpoints_are_exact() {
        let (a, b) = (seg(0.0, 0.0), seg(10.0, 20.0));
        assert_eq!(interpolate_segment(0.0, 1000.0, a, b, 0.0), a);
        assert_eq!(interpolate_segment(0.0, 1000.0, a, b, 1000.0), b);
    }

    #[test]
    fn test_midpoint_interpolates_all_three_points() {
        let mid = interpolate_segment(0.0, 1000.0, seg(0.0, 0.0), seg(10.0, 20.0), 500.0);
        assert_eq!(mid.point, Point::new(5.0, 10.0));
        assert_eq!(mid.handle_in, Point::new(-2.5, 0.0));
        assert_eq!(mid.handle_out, Point::new(2.5, 0.0));
    }

    #[test]
    fn test_nonzero_window_start() {
        let mid = interpolate_segment(100.0, 300.0, seg(0.0, 0.0), seg(4.0, 0.0), 150.0);
        assert_eq!(mid.point, Point::new(1.0, 0.0));
    }
}
