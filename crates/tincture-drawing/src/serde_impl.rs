//! Serde support: each value type (de)serializes as its invariant-culture
//! converter string, e.g. `"Red"`, `"128, 255, 0, 0"`, `"10, 20"`.

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};

use crate::convert::{
    ColorConverter, PointConverter, PointFConverter, RectangleConverter, RectangleFConverter,
    SizeConverter, SizeFConverter, ValueConverter,
};
use crate::coords::{Point, PointF, Rectangle, RectangleF, Size, SizeF};
use crate::paint::Color;

macro_rules! serde_via_converter {
    ($($ty:ty => $conv:ident,)*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(&$conv::invariant().convert_to_string(self))
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let text = String::deserialize(deserializer)?;
                    $conv::invariant().convert_from_str(&text).map_err(D::Error::custom)
                }
            }
        )*
    };
}

serde_via_converter! {
    Color => ColorConverter,
    Size => SizeConverter,
    SizeF => SizeFConverter,
    Point => PointConverter,
    PointF => PointFConverter,
    Rectangle => RectangleConverter,
    RectangleF => RectangleFConverter,
}
