//! Geometry primitives: points, rectangles, affine transforms
//!
//! `Point` arithmetic is component-wise. Scalars broadcast to both
//! components, so `p * 0.5` halves a point and `p + 3.0` shifts both axes.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 2D point (also used as a displacement vector)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length when the point is used as a vector
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rotate around `pivot` by `angle` radians
    pub fn rotated(&self, angle: f32, pivot: Point) -> Point {
        let (sin, cos) = angle.sin_cos();
        let d = *self - pivot;
        Point::new(
            pivot.x + d.x * cos - d.y * sin,
            pivot.y + d.x * sin + d.y * cos,
        )
    }
}

macro_rules! point_point_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Point {
            type Output = Point;
            fn $method(self, rhs: Point) -> Point {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

macro_rules! point_scalar_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f32> for Point {
            type Output = Point;
            fn $method(self, rhs: f32) -> Point {
                Point::new(self.x $op rhs, self.y $op rhs)
            }
        }
    };
}

point_point_op!(Add, add, +);
point_point_op!(Sub, sub, -);
point_point_op!(Mul, mul, *);
point_point_op!(Div, div, /);
point_scalar_op!(Add, add, +);
point_scalar_op!(Sub, sub, -);
point_scalar_op!(Mul, mul, *);
point_scalar_op!(Div, div, /);

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// An axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle containing both corner points
    pub fn from_points(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, a.x.max(b.x) - x, a.y.max(b.y) - y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Expand to include `point`
    pub fn include(&self, point: Point) -> Rect {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        Rect::new(
            x,
            y,
            (self.x + self.width).max(point.x) - x,
            (self.y + self.height).max(point.y) - y,
        )
    }
}

/// A 2D affine transform:
///
/// ```text
/// | a  c  tx |   | x |
/// | b  d  ty | * | y |
/// | 0  0  1  |   | 1 |
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub const fn new(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    pub fn translation(offset: Point) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, offset.x, offset.y)
    }

    pub fn scaling(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation by `angle` radians, counter-clockwise
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    pub fn shearing(hor: f32, ver: f32) -> Self {
        Self::new(1.0, ver, hor, 1.0, 0.0, 0.0)
    }

    /// Apply the transform to a point
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Apply only the linear part (no translation) — for handle offsets
    pub fn apply_vector(&self, v: Point) -> Point {
        Point::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    /// `self` after `other`: applying the result is `self.apply(other.apply(p))`
    pub fn then(&self, other: &Matrix) -> Matrix {
        Matrix::new(
            self.a * other.a + self.c * other.b,
            self.b * other.a + self.d * other.b,
            self.a * other.c + self.c * other.d,
            self.b * other.c + self.d * other.d,
            self.a * other.tx + self.c * other.ty + self.tx,
            self.b * other.tx + self.d * other.ty + self.ty,
        )
    }

    /// The transform anchored at `pivot`: translate to origin, apply, translate back
    pub fn about(&self, pivot: Point) -> Matrix {
        Matrix::translation(pivot)
            .then(self)
            .then(&Matrix::translation(-pivot))
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}
