//! Tincture drawing crate.
//!
//! Geometry and color value types plus the string forms used to store them in
//! configuration and markup files.
//!
//! ```rust
//! use tincture_drawing::convert::{ColorConverter, ValueConverter};
//! use tincture_drawing::paint::Color;
//!
//! let conv = ColorConverter::invariant();
//! let red = conv.convert_from_str("#FF0000").unwrap();
//! assert_eq!(red, Color::from_rgb(255, 0, 0).unwrap());
//! assert_eq!(conv.convert_to_string(&red), "255, 0, 0");
//!
//! let named = conv.convert_from_str("red").unwrap();
//! assert_eq!(named, Color::RED);
//! assert_eq!(conv.convert_to_string(&named), "Red");
//! ```

pub mod convert;
pub mod coords;
pub mod logging;
pub mod paint;

mod error;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::ColorError;
pub use tincture_text::Culture;
