use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Div, Mul, Sub};

use bytemuck::{Pod, Zeroable};

use super::{Point, PointF, hash_f32};

/// Integer extent (width, height) in device pixels.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const EMPTY: Size = Size::new(0, 0);

    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 && self.height == 0
    }

    #[inline]
    pub fn ceiling(s: SizeF) -> Size {
        Size::new(s.width.ceil() as i32, s.height.ceil() as i32)
    }

    /// Ties round to even.
    #[inline]
    pub fn round(s: SizeF) -> Size {
        Size::new(s.width.round_ties_even() as i32, s.height.round_ties_even() as i32)
    }

    #[inline]
    pub fn truncate(s: SizeF) -> Size {
        Size::new(s.width as i32, s.height as i32)
    }
}

impl Add for Size {
    type Output = Size;
    #[inline]
    fn add(self, rhs: Size) -> Size {
        Size::new(self.width.wrapping_add(rhs.width), self.height.wrapping_add(rhs.height))
    }
}

impl Sub for Size {
    type Output = Size;
    #[inline]
    fn sub(self, rhs: Size) -> Size {
        Size::new(self.width.wrapping_sub(rhs.width), self.height.wrapping_sub(rhs.height))
    }
}

impl Mul<i32> for Size {
    type Output = Size;
    #[inline]
    fn mul(self, rhs: i32) -> Size {
        Size::new(self.width.wrapping_mul(rhs), self.height.wrapping_mul(rhs))
    }
}

/// Integer division; panics on a zero divisor like any `i32` division.
impl Div<i32> for Size {
    type Output = Size;
    #[inline]
    fn div(self, rhs: i32) -> Size {
        Size::new(self.width / rhs, self.height / rhs)
    }
}

impl From<Point> for Size {
    #[inline]
    fn from(p: Point) -> Size {
        Size::new(p.x, p.y)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Width={}, Height={}}}", self.width, self.height)
    }
}

/// Floating-point extent in logical pixels.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct SizeF {
    pub width: f32,
    pub height: f32,
}

impl SizeF {
    pub const EMPTY: SizeF = SizeF::new(0.0, 0.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    #[inline]
    pub fn to_point_f(self) -> PointF {
        PointF::new(self.width, self.height)
    }

    /// Truncating conversion to [`Size`].
    #[inline]
    pub fn to_size(self) -> Size {
        Size::truncate(self)
    }
}

impl Hash for SizeF {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.width, state);
        hash_f32(self.height, state);
    }
}

impl From<Size> for SizeF {
    #[inline]
    fn from(s: Size) -> SizeF {
        SizeF::new(s.width as f32, s.height as f32)
    }
}

impl From<PointF> for SizeF {
    #[inline]
    fn from(p: PointF) -> SizeF {
        SizeF::new(p.x, p.y)
    }
}

impl Add for SizeF {
    type Output = SizeF;
    #[inline]
    fn add(self, rhs: SizeF) -> SizeF {
        SizeF::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for SizeF {
    type Output = SizeF;
    #[inline]
    fn sub(self, rhs: SizeF) -> SizeF {
        SizeF::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl Mul<f32> for SizeF {
    type Output = SizeF;
    #[inline]
    fn mul(self, rhs: f32) -> SizeF {
        SizeF::new(self.width * rhs, self.height * rhs)
    }
}

impl Div<f32> for SizeF {
    type Output = SizeF;
    #[inline]
    fn div(self, rhs: f32) -> SizeF {
        SizeF::new(self.width / rhs, self.height / rhs)
    }
}

impl fmt::Display for SizeF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Width={}, Height={}}}", self.width, self.height)
    }
}
