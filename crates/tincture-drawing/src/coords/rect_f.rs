use core::fmt;
use core::hash::{Hash, Hasher};

use bytemuck::{Pod, Zeroable};

use super::{PointF, Rectangle, SizeF, hash_f32};

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Same half-open semantics as [`Rectangle`].
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct RectangleF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectangleF {
    pub const EMPTY: RectangleF = RectangleF::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn from_location_size(location: PointF, size: SizeF) -> Self {
        Self::new(location.x, location.y, size.width, size.height)
    }

    #[inline]
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    #[inline]
    pub const fn location(self) -> PointF {
        PointF::new(self.x, self.y)
    }

    #[inline]
    pub const fn size(self) -> SizeF {
        SizeF::new(self.width, self.height)
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// True when width or height is not positive.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, x: f32, y: f32) -> bool {
        self.x <= x && x < self.right() && self.y <= y && y < self.bottom()
    }

    #[inline]
    pub fn contains_point(self, p: PointF) -> bool {
        self.contains(p.x, p.y)
    }

    #[inline]
    pub fn contains_rect(self, rect: RectangleF) -> bool {
        self.x <= rect.x
            && rect.right() <= self.right()
            && self.y <= rect.y
            && rect.bottom() <= self.bottom()
    }

    #[inline]
    pub fn inflate(&mut self, x: f32, y: f32) {
        self.x -= x;
        self.y -= y;
        self.width += 2.0 * x;
        self.height += 2.0 * y;
    }

    #[inline]
    pub fn inflated(self, size: SizeF) -> RectangleF {
        let mut r = self;
        r.inflate(size.width, size.height);
        r
    }

    /// Overlap of two rectangles, [`RectangleF::EMPTY`] when disjoint.
    pub fn intersect(a: RectangleF, b: RectangleF) -> RectangleF {
        let x1 = a.x.max(b.x);
        let x2 = a.right().min(b.right());
        let y1 = a.y.max(b.y);
        let y2 = a.bottom().min(b.bottom());

        if x2 >= x1 && y2 >= y1 {
            RectangleF::new(x1, y1, x2 - x1, y2 - y1)
        } else {
            RectangleF::EMPTY
        }
    }

    #[inline]
    pub fn intersect_with(&mut self, other: RectangleF) {
        *self = RectangleF::intersect(*self, other);
    }

    #[inline]
    pub fn intersects_with(self, rect: RectangleF) -> bool {
        rect.x < self.right()
            && self.x < rect.right()
            && rect.y < self.bottom()
            && self.y < rect.bottom()
    }

    pub fn union(a: RectangleF, b: RectangleF) -> RectangleF {
        let x1 = a.x.min(b.x);
        let x2 = a.right().max(b.right());
        let y1 = a.y.min(b.y);
        let y2 = a.bottom().max(b.bottom());
        RectangleF::new(x1, y1, x2 - x1, y2 - y1)
    }

    #[inline]
    pub fn offset(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

impl Hash for RectangleF {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.x, state);
        hash_f32(self.y, state);
        hash_f32(self.width, state);
        hash_f32(self.height, state);
    }
}

impl From<Rectangle> for RectangleF {
    #[inline]
    fn from(r: Rectangle) -> RectangleF {
        RectangleF::new(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
    }
}

impl fmt::Display for RectangleF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{X={},Y={},Width={},Height={}}}",
            self.x, self.y, self.width, self.height
        )
    }
}
