use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::ColorError;

use super::{KnownColor, SystemPalette};

/// Where a color's value comes from.
///
/// `Known` defers to the known-color table (or the system palette) on every
/// read, so a `Color` never caches a resolved value and stays immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
enum ColorRepr {
    #[default]
    Empty,
    Argb(u32),
    Known(KnownColor),
    /// A name that matched no known color; its value is 0.
    Named(Arc<str>),
}

/// Straight-alpha ARGB color, 8 bits per channel, packed as `0xAARRGGBB`.
///
/// Equality is provenance-sensitive: `Color::RED` and
/// `Color::from_argb(255, 255, 0, 0)` share a value but are different colors,
/// because one is a named known color and the other is not. Compare
/// [`to_argb`](Self::to_argb) to ask "same pixels?".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    repr: ColorRepr,
}

const ALPHA_SHIFT: u32 = 24;
const RED_SHIFT: u32 = 16;
const GREEN_SHIFT: u32 = 8;
const BLUE_SHIFT: u32 = 0;

#[inline]
const fn make_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << ALPHA_SHIFT | (r as u32) << RED_SHIFT | (g as u32) << GREEN_SHIFT | (b as u32) << BLUE_SHIFT
}

fn check_byte(value: i32, field: &'static str) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::ComponentOutOfRange { field, value })
}

impl Color {
    /// The absence of a color. Its value is 0 and it is distinct from
    /// [`Color::TRANSPARENT`].
    pub const EMPTY: Color = Color { repr: ColorRepr::Empty };

    #[inline]
    pub(crate) const fn from_known_const(k: KnownColor) -> Color {
        Color { repr: ColorRepr::Known(k) }
    }

    // ── Factories ─────────────────────────────────────────────────────────

    /// Unpacks `0xAARRGGBB`. Every 32-bit value is a valid color.
    #[inline]
    pub const fn from_argb_packed(argb: i32) -> Color {
        Color { repr: ColorRepr::Argb(argb as u32) }
    }

    /// Infallible constructor from bytes.
    #[inline]
    pub const fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Color {
        Color { repr: ColorRepr::Argb(make_argb(a, r, g, b)) }
    }

    /// Opaque color from RGB components in `[0, 255]`.
    pub fn from_rgb(red: i32, green: i32, blue: i32) -> Result<Color, ColorError> {
        Color::from_argb(255, red, green, blue)
    }

    /// Color from ARGB components in `[0, 255]`.
    ///
    /// Components are checked in `alpha, red, green, blue` order and the first
    /// out-of-range one is reported.
    pub fn from_argb(alpha: i32, red: i32, green: i32, blue: i32) -> Result<Color, ColorError> {
        let a = check_byte(alpha, "alpha")?;
        let r = check_byte(red, "red")?;
        let g = check_byte(green, "green")?;
        let b = check_byte(blue, "blue")?;
        Ok(Color::from_argb8(a, r, g, b))
    }

    /// `base` with its alpha replaced.
    pub fn with_alpha(alpha: i32, base: &Color) -> Result<Color, ColorError> {
        let a = check_byte(alpha, "alpha")?;
        Ok(Color::from_argb8(a, base.r(), base.g(), base.b()))
    }

    #[inline]
    pub const fn from_known_color(k: KnownColor) -> Color {
        Color::from_known_const(k)
    }

    /// Resolves a known or system color by name, ignoring ASCII case.
    ///
    /// An unknown name still produces a named color (value 0) so the name
    /// survives a format round-trip.
    pub fn from_name(name: &str) -> Color {
        match KnownColor::from_name(name) {
            Some(k) => Color::from_known_const(k),
            None => Color { repr: ColorRepr::Named(Arc::from(name)) },
        }
    }

    // ── Value ─────────────────────────────────────────────────────────────

    /// Packed `0xAARRGGBB`, resolving known colors through the table.
    pub fn value(&self) -> u32 {
        match &self.repr {
            ColorRepr::Empty | ColorRepr::Named(_) => 0,
            ColorRepr::Argb(v) => *v,
            ColorRepr::Known(k) if k.is_system() => SystemPalette::current().argb(*k),
            ColorRepr::Known(k) => k.default_argb(),
        }
    }

    /// Packed value reinterpreted as signed.
    #[inline]
    pub fn to_argb(&self) -> i32 {
        self.value() as i32
    }

    #[inline]
    pub fn a(&self) -> u8 {
        (self.value() >> ALPHA_SHIFT) as u8
    }

    #[inline]
    pub fn r(&self) -> u8 {
        (self.value() >> RED_SHIFT) as u8
    }

    #[inline]
    pub fn g(&self) -> u8 {
        (self.value() >> GREEN_SHIFT) as u8
    }

    #[inline]
    pub fn b(&self) -> u8 {
        (self.value() >> BLUE_SHIFT) as u8
    }

    // ── Provenance ────────────────────────────────────────────────────────

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.repr, ColorRepr::Empty)
    }

    #[inline]
    pub fn is_known_color(&self) -> bool {
        matches!(self.repr, ColorRepr::Known(_))
    }

    /// Known colors and colors created from an unknown name.
    #[inline]
    pub fn is_named_color(&self) -> bool {
        matches!(self.repr, ColorRepr::Known(_) | ColorRepr::Named(_))
    }

    #[inline]
    pub fn is_system_color(&self) -> bool {
        matches!(self.repr, ColorRepr::Known(k) if k.is_system())
    }

    #[inline]
    pub fn to_known_color(&self) -> Option<KnownColor> {
        match self.repr {
            ColorRepr::Known(k) => Some(k),
            _ => None,
        }
    }

    /// Display name.
    ///
    /// Named colors give their name; unnamed ones give the packed value in
    /// lowercase hex without padding (`ff123456`); [`Color::EMPTY`] gives `"0"`.
    pub fn name(&self) -> Cow<'_, str> {
        match &self.repr {
            ColorRepr::Known(k) => Cow::Borrowed(k.name()),
            ColorRepr::Named(n) => Cow::Borrowed(n.as_ref()),
            ColorRepr::Argb(v) => Cow::Owned(format!("{v:x}")),
            ColorRepr::Empty => Cow::Borrowed("0"),
        }
    }

    // ── HSL ───────────────────────────────────────────────────────────────

    fn min_max(&self) -> (u8, u8) {
        let (r, g, b) = (self.r(), self.g(), self.b());
        (r.min(g).min(b), r.max(g).max(b))
    }

    #[inline]
    fn is_achromatic(&self) -> bool {
        let (r, g, b) = (self.r(), self.g(), self.b());
        r == g && g == b
    }

    /// HSL lightness in `[0, 1]`.
    pub fn brightness(&self) -> f32 {
        let (min, max) = self.min_max();
        (max as f32 + min as f32) / (255.0 * 2.0)
    }

    /// HSL saturation in `[0, 1]`; 0 for grays.
    pub fn saturation(&self) -> f32 {
        if self.is_achromatic() {
            return 0.0;
        }
        let (min, max) = self.min_max();
        let (min, max) = (i32::from(min), i32::from(max));
        let mut div = max + min;
        if div > 255 {
            div = 255 * 2 - max - min;
        }
        (max - min) as f32 / div as f32
    }

    /// HSL hue in degrees, `[0, 360)`; 0 for grays.
    pub fn hue(&self) -> f32 {
        if self.is_achromatic() {
            return 0.0;
        }
        let (r, g, b) = (self.r() as f32, self.g() as f32, self.b() as f32);
        let (min, max) = self.min_max();
        let (min, max) = (min as f32, max as f32);
        let delta = max - min;

        let mut hue = if r == max {
            (g - b) / delta
        } else if g == max {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        hue *= 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }
        if hue >= 360.0 {
            hue -= 360.0;
        }
        hue
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            ColorRepr::Empty => f.write_str("Color [Empty]"),
            ColorRepr::Known(_) | ColorRepr::Named(_) => write!(f, "Color [{}]", self.name()),
            ColorRepr::Argb(_) => write!(
                f,
                "Color [A={}, R={}, G={}, B={}]",
                self.a(),
                self.r(),
                self.g(),
                self.b()
            ),
        }
    }
}

impl From<KnownColor> for Color {
    #[inline]
    fn from(k: KnownColor) -> Color {
        Color::from_known_color(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::SystemColors;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn argb_round_trips_through_packed_value() {
        for &(a, r, g, b) in &[(0, 0, 0, 0), (255, 255, 255, 255), (128, 1, 2, 3), (7, 200, 100, 50)] {
            let c = Color::from_argb(a, r, g, b).unwrap();
            let back = Color::from_argb_packed(c.to_argb());
            assert_eq!(
                (back.a(), back.r(), back.g(), back.b()),
                (a as u8, r as u8, g as u8, b as u8)
            );
        }
    }

    #[test]
    fn out_of_range_components_are_rejected() {
        assert_eq!(
            Color::from_argb(256, 0, 0, 0),
            Err(ColorError::ComponentOutOfRange { field: "alpha", value: 256 })
        );
        assert_eq!(
            Color::from_rgb(0, -1, 0),
            Err(ColorError::ComponentOutOfRange { field: "green", value: -1 })
        );
        assert!(Color::from_argb(0, 0, 0, 1000).is_err());
    }

    #[test]
    fn alpha_is_checked_before_rgb() {
        assert_eq!(
            Color::from_argb(256, 300, 0, 0),
            Err(ColorError::ComponentOutOfRange { field: "alpha", value: 256 })
        );
        assert_eq!(
            Color::from_argb(255, 300, -5, 0),
            Err(ColorError::ComponentOutOfRange { field: "red", value: 300 })
        );
    }

    #[test]
    fn out_of_range_message_names_field_and_value() {
        let err = Color::from_rgb(300, 0, 0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("300") && msg.contains("red"), "{msg}");
    }

    #[test]
    fn from_rgb_is_opaque() {
        assert_eq!(Color::from_rgb(1, 2, 3).unwrap().a(), 255);
    }

    #[test]
    fn packed_negative_value() {
        let c = Color::from_argb_packed(-1);
        assert_eq!(c.value(), 0xFFFF_FFFF);
        assert_eq!(c.to_argb(), -1);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::with_alpha(128, &Color::RED).unwrap();
        assert_eq!(c.to_argb(), 0x80FF_0000_u32 as i32);
        assert!(!c.is_known_color());
        assert!(Color::with_alpha(-1, &Color::RED).is_err());
    }

    // ── known / named ─────────────────────────────────────────────────────

    #[test]
    fn known_color_resolves_from_table() {
        assert_eq!(Color::RED.value(), 0xFFFF_0000);
        assert_eq!(Color::TRANSPARENT.a(), 0);
        assert_eq!(Color::from_known_color(KnownColor::Navy).to_argb(), 0xFF00_0080_u32 as i32);
    }

    #[test]
    fn from_name_finds_known_colors_case_insensitively() {
        assert_eq!(Color::from_name("red"), Color::RED);
        assert_eq!(Color::from_name("Control"), SystemColors::CONTROL);
    }

    #[test]
    fn from_name_unknown_keeps_name() {
        let c = Color::from_name("Chartreuse-ish");
        assert!(c.is_named_color());
        assert!(!c.is_known_color());
        assert_eq!(c.name(), "Chartreuse-ish");
        assert_eq!(c.value(), 0);
        assert!(!c.is_empty());
    }

    #[test]
    fn provenance_flags() {
        assert!(Color::EMPTY.is_empty());
        assert!(!Color::EMPTY.is_named_color());
        assert!(Color::RED.is_known_color() && Color::RED.is_named_color());
        assert!(!Color::RED.is_system_color());
        assert!(SystemColors::WINDOW.is_system_color());
        assert_eq!(SystemColors::WINDOW.to_known_color(), Some(KnownColor::Window));
        assert_eq!(Color::from_argb8(1, 2, 3, 4).to_known_color(), None);
    }

    #[test]
    fn names() {
        assert_eq!(Color::RED.name(), "Red");
        assert_eq!(Color::from_argb8(0xFF, 0x12, 0x34, 0x56).name(), "ff123456");
        assert_eq!(Color::from_argb8(0, 0, 0x0A, 0xBC).name(), "abc");
        assert_eq!(Color::EMPTY.name(), "0");
    }

    // ── equality ──────────────────────────────────────────────────────────

    #[test]
    fn equality_is_provenance_sensitive() {
        let by_name = Color::from_name("Red");
        let by_value = Color::from_argb(255, 255, 0, 0).unwrap();
        assert_eq!(by_name.to_argb(), by_value.to_argb());
        assert_ne!(by_name, by_value);
        assert_eq!(by_name, Color::RED);
        assert_eq!(by_value, Color::from_argb_packed(0xFFFF_0000_u32 as i32));
    }

    #[test]
    fn unknown_named_colors_compare_by_name() {
        assert_eq!(Color::from_name("foo"), Color::from_name("foo"));
        assert_ne!(Color::from_name("foo"), Color::from_name("bar"));
    }

    #[test]
    fn empty_differs_from_transparent_black() {
        assert_ne!(Color::EMPTY, Color::from_argb_packed(0));
        assert_eq!(Color::default(), Color::EMPTY);
    }

    #[test]
    fn aliases_with_same_value_differ() {
        assert_eq!(Color::AQUA.value(), Color::CYAN.value());
        assert_ne!(Color::AQUA, Color::CYAN);
    }

    // ── HSL ───────────────────────────────────────────────────────────────

    #[test]
    fn hsl_pure_red() {
        let red = Color::from_rgb(255, 0, 0).unwrap();
        assert_eq!(red.hue(), 0.0);
        assert_eq!(red.saturation(), 1.0);
        assert_eq!(red.brightness(), 0.5);
    }

    #[test]
    fn hsl_primary_hues() {
        assert!(approx(Color::from_rgb(0, 255, 0).unwrap().hue(), 120.0));
        assert!(approx(Color::from_rgb(0, 0, 255).unwrap().hue(), 240.0));
        assert!(approx(Color::from_rgb(255, 0, 255).unwrap().hue(), 300.0));
    }

    #[test]
    fn hsl_negative_branch_wraps() {
        // Red is max and blue > green, so the raw hue is negative.
        let c = Color::from_rgb(255, 0, 1).unwrap();
        let h = c.hue();
        assert!(h > 359.0 && h < 360.0, "{h}");
    }

    #[test]
    fn hsl_grays_are_achromatic() {
        let gray = Color::from_rgb(128, 128, 128).unwrap();
        assert_eq!(gray.hue(), 0.0);
        assert_eq!(gray.saturation(), 0.0);
        assert!(approx(gray.brightness(), 256.0 / 510.0));
    }

    #[test]
    fn hsl_saturation_upper_half() {
        // max + min = 255 + 128 > 255, so the divisor flips to 510 - max - min.
        let c = Color::from_rgb(255, 128, 128).unwrap();
        assert!(approx(c.saturation(), 127.0 / 127.0));
        let d = Color::from_rgb(200, 100, 100).unwrap();
        assert!(approx(d.saturation(), 100.0 / 210.0));
    }

    // ── display ───────────────────────────────────────────────────────────

    #[test]
    fn display_forms() {
        assert_eq!(Color::RED.to_string(), "Color [Red]");
        assert_eq!(Color::EMPTY.to_string(), "Color [Empty]");
        assert_eq!(
            Color::from_argb8(255, 1, 2, 3).to_string(),
            "Color [A=255, R=1, G=2, B=3]"
        );
        assert_eq!(Color::from_name("foo").to_string(), "Color [foo]");
    }
}
