use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Sub};

use bytemuck::{Pod, Zeroable};

use super::{Size, SizeF, hash_f32};

/// Integer point in device pixels (top-left origin).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const EMPTY: Point = Point::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Unpacks a Win32-style `DWORD` coordinate: low word is `x`, high word is
    /// `y`, both sign-extended from 16 bits.
    #[inline]
    pub const fn from_packed(dw: i32) -> Self {
        Self {
            x: dw as i16 as i32,
            y: (dw >> 16) as i16 as i32,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Translates by `(dx, dy)` in place.
    #[inline]
    pub fn offset(&mut self, dx: i32, dy: i32) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }

    #[inline]
    pub fn offset_by(&mut self, p: Point) {
        self.offset(p.x, p.y);
    }

    /// Rounds each coordinate up.
    #[inline]
    pub fn ceiling(p: PointF) -> Point {
        Point::new(p.x.ceil() as i32, p.y.ceil() as i32)
    }

    /// Rounds each coordinate to the nearest integer, ties to even.
    #[inline]
    pub fn round(p: PointF) -> Point {
        Point::new(p.x.round_ties_even() as i32, p.y.round_ties_even() as i32)
    }

    /// Drops the fractional part of each coordinate.
    #[inline]
    pub fn truncate(p: PointF) -> Point {
        Point::new(p.x as i32, p.y as i32)
    }
}

impl Add<Size> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Size) -> Point {
        Point::new(self.x.wrapping_add(rhs.width), self.y.wrapping_add(rhs.height))
    }
}

impl Sub<Size> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Size) -> Point {
        Point::new(self.x.wrapping_sub(rhs.width), self.y.wrapping_sub(rhs.height))
    }
}

impl From<Size> for Point {
    #[inline]
    fn from(s: Size) -> Point {
        Point::new(s.width, s.height)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X={},Y={}}}", self.x, self.y)
    }
}

/// Floating-point point in logical pixels.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const EMPTY: PointF = PointF::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Hash for PointF {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.x, state);
        hash_f32(self.y, state);
    }
}

impl From<Point> for PointF {
    #[inline]
    fn from(p: Point) -> PointF {
        PointF::new(p.x as f32, p.y as f32)
    }
}

impl Add<Size> for PointF {
    type Output = PointF;
    #[inline]
    fn add(self, rhs: Size) -> PointF {
        PointF::new(self.x + rhs.width as f32, self.y + rhs.height as f32)
    }
}

impl Sub<Size> for PointF {
    type Output = PointF;
    #[inline]
    fn sub(self, rhs: Size) -> PointF {
        PointF::new(self.x - rhs.width as f32, self.y - rhs.height as f32)
    }
}

impl Add<SizeF> for PointF {
    type Output = PointF;
    #[inline]
    fn add(self, rhs: SizeF) -> PointF {
        PointF::new(self.x + rhs.width, self.y + rhs.height)
    }
}

impl Sub<SizeF> for PointF {
    type Output = PointF;
    #[inline]
    fn sub(self, rhs: SizeF) -> PointF {
        PointF::new(self.x - rhs.width, self.y - rhs.height)
    }
}

impl fmt::Display for PointF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X={}, Y={}}}", self.x, self.y)
    }
}
