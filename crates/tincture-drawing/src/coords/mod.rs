//! Geometry value types.
//!
//! Canonical space:
//! - Origin top-left
//! - +X right, +Y down
//! - Integer types in device pixels, `F` variants in logical pixels
//!
//! All types are `#[repr(C)]` and `Pod`, so slices can be handed to
//! `bytemuck::cast_slice` for raw buffer uploads.

use core::hash::Hasher;

mod point;
mod rect;
mod rect_f;
mod size;

pub use point::{Point, PointF};
pub use rect::Rectangle;
pub use rect_f::RectangleF;
pub use size::{Size, SizeF};

/// Feeds a float's bit pattern into `state`, folding `-0.0` onto `0.0` so the
/// hash stays consistent with `==`.
#[inline]
pub(crate) fn hash_f32<H: Hasher>(v: f32, state: &mut H) {
    let bits = if v == 0.0 { 0 } else { v.to_bits() };
    state.write_u32(bits);
}
