//! String converters for the value types.
//!
//! Every converter carries a [`Culture`]: components are joined with the
//! culture's list separator plus a space (`"255, 0, 0"`, `"1,5; 2"`) and numbers
//! use its decimal separator. The invariant culture is the interchange format
//! used by serde.

macro_rules! culture_converter {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            culture: tincture_text::Culture,
        }

        impl $name {
            #[inline]
            pub const fn new(culture: tincture_text::Culture) -> Self {
                Self { culture }
            }

            #[inline]
            pub const fn invariant() -> Self {
                Self::new(tincture_text::Culture::INVARIANT)
            }
        }
    };
}

mod color;
mod geometry;

use thiserror::Error;

use tincture_text::{Culture, ParseError};

use crate::error::ColorError;

pub use color::ColorConverter;
pub use geometry::{
    PointConverter, PointFConverter, RectangleConverter, RectangleFConverter, SizeConverter,
    SizeFConverter,
};

/// Failure to read a value from text. Every variant that has input keeps the
/// full input string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("{text:?} is not a valid color value")]
    InvalidColor { text: String },

    #[error("text {text:?} cannot be parsed; the expected format is \"{expected}\"")]
    InvalidFormat { text: String, expected: &'static str },

    #[error("input text is empty")]
    EmptyInput,

    #[error("{text:?} contains an invalid number: {source}")]
    Number {
        text: String,
        #[source]
        source: ParseError,
    },

    #[error("{text:?} contains an invalid color component: {source}")]
    Component {
        text: String,
        #[source]
        source: ColorError,
    },
}

/// Reads and writes one value type as culture-formatted text.
pub trait ValueConverter {
    type Value;

    fn culture(&self) -> &Culture;

    fn convert_from_str(&self, text: &str) -> Result<Self::Value, ConvertError>;

    fn convert_to_string(&self, value: &Self::Value) -> String;
}
