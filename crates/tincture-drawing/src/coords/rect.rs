use core::fmt;
use core::hash::{Hash, Hasher};

use bytemuck::{Pod, Zeroable};

use super::{Point, RectangleF, Size};

/// Axis-aligned integer rectangle (top-left origin, +Y down).
///
/// Bounds are half-open: `[left, right) × [top, bottom)`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Pod, Zeroable)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const EMPTY: Rectangle = Rectangle::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn from_location_size(location: Point, size: Size) -> Self {
        Self::new(location.x, location.y, size.width, size.height)
    }

    /// Builds a rectangle from its edges.
    #[inline]
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right.wrapping_sub(left), bottom.wrapping_sub(top))
    }

    #[inline]
    pub const fn location(self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub const fn left(self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn top(self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn right(self) -> i32 {
        self.x.wrapping_add(self.width)
    }

    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.wrapping_add(self.height)
    }

    /// True only for the all-zero rectangle.
    ///
    /// A zero-area rectangle away from the origin is *not* empty; use
    /// [`has_area`](Self::has_area) for that question.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.x == 0 && self.y == 0 && self.width == 0 && self.height == 0
    }

    #[inline]
    pub const fn has_area(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Half-open containment: `x ∈ [left, right)` and `y ∈ [top, bottom)`.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        self.x <= x && x < self.right() && self.y <= y && y < self.bottom()
    }

    #[inline]
    pub const fn contains_point(self, p: Point) -> bool {
        self.contains(p.x, p.y)
    }

    /// True when `rect` lies entirely inside this rectangle.
    #[inline]
    pub const fn contains_rect(self, rect: Rectangle) -> bool {
        self.x <= rect.x
            && rect.right() <= self.right()
            && self.y <= rect.y
            && rect.bottom() <= self.bottom()
    }

    /// Grows the rectangle by `width` on the left and right and by `height` on
    /// the top and bottom.
    #[inline]
    pub fn inflate(&mut self, width: i32, height: i32) {
        self.x = self.x.wrapping_sub(width);
        self.y = self.y.wrapping_sub(height);
        self.width = self.width.wrapping_add(width.wrapping_mul(2));
        self.height = self.height.wrapping_add(height.wrapping_mul(2));
    }

    #[inline]
    pub fn inflated(self, size: Size) -> Rectangle {
        let mut r = self;
        r.inflate(size.width, size.height);
        r
    }

    /// Overlap of two rectangles.
    ///
    /// Returns [`Rectangle::EMPTY`] when they are disjoint. Rectangles that only
    /// share an edge produce a zero-width (or zero-height) rectangle on that edge.
    pub fn intersect(a: Rectangle, b: Rectangle) -> Rectangle {
        let x1 = a.x.max(b.x);
        let x2 = a.right().min(b.right());
        let y1 = a.y.max(b.y);
        let y2 = a.bottom().min(b.bottom());

        if x2 >= x1 && y2 >= y1 {
            Rectangle::new(x1, y1, x2.wrapping_sub(x1), y2.wrapping_sub(y1))
        } else {
            Rectangle::EMPTY
        }
    }

    /// Replaces this rectangle with its overlap with `other`.
    #[inline]
    pub fn intersect_with(&mut self, other: Rectangle) {
        *self = Rectangle::intersect(*self, other);
    }

    /// Strict overlap test; touching edges do not intersect.
    #[inline]
    pub const fn intersects_with(self, rect: Rectangle) -> bool {
        rect.x < self.right()
            && self.x < rect.right()
            && rect.y < self.bottom()
            && self.y < rect.bottom()
    }

    /// Smallest rectangle containing both inputs.
    pub fn union(a: Rectangle, b: Rectangle) -> Rectangle {
        let x1 = a.x.min(b.x);
        let x2 = a.right().max(b.right());
        let y1 = a.y.min(b.y);
        let y2 = a.bottom().max(b.bottom());
        Rectangle::new(x1, y1, x2.wrapping_sub(x1), y2.wrapping_sub(y1))
    }

    #[inline]
    pub fn offset(&mut self, dx: i32, dy: i32) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }

    #[inline]
    pub fn ceiling(r: RectangleF) -> Rectangle {
        Rectangle::new(
            r.x.ceil() as i32,
            r.y.ceil() as i32,
            r.width.ceil() as i32,
            r.height.ceil() as i32,
        )
    }

    /// Ties round to even.
    #[inline]
    pub fn round(r: RectangleF) -> Rectangle {
        Rectangle::new(
            r.x.round_ties_even() as i32,
            r.y.round_ties_even() as i32,
            r.width.round_ties_even() as i32,
            r.height.round_ties_even() as i32,
        )
    }

    #[inline]
    pub fn truncate(r: RectangleF) -> Rectangle {
        Rectangle::new(r.x as i32, r.y as i32, r.width as i32, r.height as i32)
    }
}

/// Mixes the fields with staggered rotations so `(1, 2, 0, 0)` and
/// `(2, 1, 0, 0)` land on different values.
impl Hash for Rectangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mixed = (self.x as u32)
            ^ (self.y as u32).rotate_left(13)
            ^ (self.width as u32).rotate_left(26)
            ^ (self.height as u32).rotate_left(7);
        state.write_u32(mixed);
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{X={},Y={},Width={},Height={}}}",
            self.x, self.y, self.width, self.height
        )
    }
}
