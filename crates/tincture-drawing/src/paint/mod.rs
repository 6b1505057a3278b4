//! Color model.
//!
//! Scope:
//! - `Color`: packed straight-alpha ARGB plus provenance (empty, raw value,
//!   known table entry, or bare name)
//! - the known-color table and its system-color subset
//! - the process-wide system palette
//!
//! Geometry types remain in `coords`; string forms live in `convert`.

mod color;
mod known;
mod named;
mod system;

pub use color::Color;
pub use known::KnownColor;
pub use system::{SystemColors, SystemPalette};
