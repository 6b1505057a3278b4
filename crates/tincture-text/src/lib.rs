//! Culture data, field splitting, and number parsing for tincture's text formats.
//!
//! The value converters in `tincture-drawing` read and write component lists such
//! as `"255, 0, 0"` or `"1,5; 2,5"`. Everything locale-dependent about those
//! strings lives here so tooling can parse them without the drawing types.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`culture`] | `Culture` (list/decimal separators, signs) and environment lookup |
//! | [`error`] | `ParseError` |
//! | [`fields`] | `Fields` splitter, `split_fields` |
//! | [`number`] | `parse_i32`, `parse_f32`, `format_i32`, `format_f32` |
//!
//! # Quick start
//!
//! ```rust
//! use tincture_text::{parse_i32, split_fields, Culture};
//!
//! let culture = Culture::DE_DE;
//! let parts: Vec<i32> = split_fields("10; -20", culture.list_separator)
//!     .into_iter()
//!     .map(|f| parse_i32(f, &culture).unwrap())
//!     .collect();
//! assert_eq!(parts, vec![10, -20]);
//! ```

pub mod culture;
pub mod error;
pub mod fields;
pub mod number;

pub use culture::Culture;
pub use error::ParseError;
pub use fields::{split_fields, Fields};
pub use number::{format_f32, format_i32, parse_f32, parse_hex_u32, parse_i32, strip_hex_prefix};
