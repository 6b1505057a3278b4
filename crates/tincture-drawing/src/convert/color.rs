use state::InitCell;
use tincture_text::{Culture, format_i32, parse_hex_u32, parse_i32, split_fields, strip_hex_prefix};

use crate::paint::{Color, KnownColor};

use super::{ConvertError, ValueConverter};

culture_converter! {
    /// Converts [`Color`] to and from text.
    ///
    /// Accepted input, after trimming:
    /// - `""` → [`Color::EMPTY`]
    /// - a known or system color name, any case: `red`, `ControlDark`
    /// - a quoted name: `'Sunset'` → [`Color::from_name`]
    /// - a hex literal: `#RRGGBB`, `#AARRGGBB`, `0xRRGGBB`, `&hRRGGBB`, `#0xRRGGBB`
    /// - 1, 3, or 4 list-separated integers: packed ARGB, `R, G, B`, `A, R, G, B`
    ///
    /// Numeric input always yields a plain ARGB color, even when the value
    /// matches a known color: `"255, 0, 0"` equals `Color::from_rgb(255, 0, 0)`,
    /// not [`Color::RED`].
    ColorConverter
}

static STANDARD_VALUES: InitCell<Vec<Color>> = InitCell::new();

impl ColorConverter {
    /// Every known color, sorted by name, ignoring case.
    ///
    /// Built on first use and shared for the rest of the process.
    pub fn standard_values() -> &'static [Color] {
        STANDARD_VALUES.get_or_init(|| {
            let mut known: Vec<KnownColor> = KnownColor::ALL.to_vec();
            known.sort_by(|a, b| {
                let a = a.name().bytes().map(|c| c.to_ascii_lowercase());
                let b = b.name().bytes().map(|c| c.to_ascii_lowercase());
                a.cmp(b)
            });
            log::debug!("built sorted known-color list ({} entries)", known.len());
            known.into_iter().map(Color::from_known_color).collect()
        })
    }
}

/// `'Name'` or `"Name"` → `Name`.
fn unquote(text: &str) -> Option<&str> {
    let first = text.chars().next()?;
    if (first == '\'' || first == '"') && text.len() >= 2 && text.ends_with(first) {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}

/// Parses a single hex literal, or returns `None` when `text` is not one.
///
/// Alpha defaults to 255 whenever the high byte of the parsed value is zero,
/// which covers the 6-digit forms. An explicit `#00RRGGBB` is therefore read as
/// opaque too; use a component list for a fully transparent color.
fn parse_hex_literal(text: &str) -> Result<Option<Color>, ConvertError> {
    let (sharp, rest) = match text.strip_prefix('#') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (prefixed, digits) = match strip_hex_prefix(rest) {
        Some(digits) => (true, digits),
        None => (false, rest),
    };
    if !sharp && !prefixed {
        return Ok(None);
    }

    let mut argb = parse_hex_u32(digits).map_err(|source| ConvertError::Number {
        text: text.to_string(),
        source,
    })?;
    if argb >> 24 == 0 {
        argb |= 0xFF00_0000;
    }
    Ok(Some(Color::from_argb_packed(argb as i32)))
}

impl ValueConverter for ColorConverter {
    type Value = Color;

    fn culture(&self) -> &Culture {
        &self.culture
    }

    fn convert_from_str(&self, text: &str) -> Result<Color, ConvertError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Color::EMPTY);
        }
        if let Some(k) = KnownColor::from_name(text) {
            return Ok(Color::from_known_color(k));
        }

        let sep = self.culture.list_separator;
        if !text.contains(sep) {
            if let Some(name) = unquote(text) {
                return Ok(Color::from_name(name));
            }
            if let Some(color) = parse_hex_literal(text)? {
                return Ok(color);
            }
        }

        // Every field must be a number before the count is checked.
        let values = split_fields(text, sep)
            .into_iter()
            .map(|field| parse_i32(field, &self.culture))
            .collect::<Result<Vec<i32>, _>>()
            .map_err(|source| {
                log::debug!("color parse failed for {text:?}: {source}");
                ConvertError::Number { text: text.to_string(), source }
            })?;

        let component_err = |source| ConvertError::Component { text: text.to_string(), source };
        match values.as_slice() {
            [argb] => Ok(Color::from_argb_packed(*argb)),
            [r, g, b] => Color::from_rgb(*r, *g, *b).map_err(component_err),
            [a, r, g, b] => Color::from_argb(*a, *r, *g, *b).map_err(component_err),
            _ => Err(ConvertError::InvalidColor { text: text.to_string() }),
        }
    }

    fn convert_to_string(&self, color: &Color) -> String {
        if color.is_empty() {
            return String::new();
        }
        if color.is_known_color() {
            return color.name().into_owned();
        }
        if color.is_named_color() {
            return format!("'{}'", color.name());
        }

        let components = if color.a() < 255 {
            vec![color.a(), color.r(), color.g(), color.b()]
        } else {
            vec![color.r(), color.g(), color.b()]
        };
        components
            .iter()
            .map(|&c| format_i32(i32::from(c), &self.culture))
            .collect::<Vec<_>>()
            .join(&self.culture.field_joiner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::SystemColors;

    fn parse(text: &str) -> Color {
        ColorConverter::invariant().convert_from_str(text).unwrap()
    }

    fn format(color: &Color) -> String {
        ColorConverter::invariant().convert_to_string(color)
    }

    // ── names ─────────────────────────────────────────────────────────────

    #[test]
    fn known_names_any_case() {
        assert_eq!(parse("Red"), Color::RED);
        assert_eq!(parse("  cornflowerblue "), Color::CORNFLOWER_BLUE);
        assert_eq!(parse("HIGHLIGHT"), SystemColors::HIGHLIGHT);
    }

    #[test]
    fn quoted_names() {
        assert_eq!(parse("'Sunset'"), Color::from_name("Sunset"));
        assert_eq!(parse("\"Red\""), Color::RED);
        assert_eq!(parse("''"), Color::from_name(""));
    }

    #[test]
    fn empty_text_is_empty_color() {
        assert_eq!(parse(""), Color::EMPTY);
        assert_eq!(parse("   "), Color::EMPTY);
    }

    // ── component lists ───────────────────────────────────────────────────

    #[test]
    fn rgb_list_is_plain_argb() {
        let c = parse("255, 0, 0");
        assert_eq!(c, Color::from_rgb(255, 0, 0).unwrap());
        assert_eq!(c, Color::from_argb(255, 255, 0, 0).unwrap());
        assert!(!c.is_known_color());
        assert_ne!(c, Color::RED);
        assert_eq!(c.to_argb(), Color::RED.to_argb());
        assert_eq!(format(&c), "255, 0, 0");
    }

    #[test]
    fn known_value_survives_format_round_trip() {
        let conv = ColorConverter::invariant();
        for c in [Color::from_rgb(255, 0, 0).unwrap(), Color::from_argb8(0, 255, 255, 255)] {
            assert_eq!(conv.convert_from_str(&conv.convert_to_string(&c)).unwrap(), c);
        }
        assert_eq!(conv.convert_from_str(&conv.convert_to_string(&Color::RED)).unwrap(), Color::RED);
    }

    #[test]
    fn rgb_list_without_known_match() {
        let c = parse("1, 2, 3");
        assert_eq!(c, Color::from_rgb(1, 2, 3).unwrap());
    }

    #[test]
    fn argb_list() {
        let c = parse("128, 255, 0, 0");
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (128, 255, 0, 0));
        assert!(!c.is_known_color());
    }

    #[test]
    fn single_packed_integer() {
        assert_eq!(parse("-16776961"), Color::from_argb8(255, 0, 0, 255));
        assert_eq!(parse("12345").value(), 12345);
    }

    #[test]
    fn list_fields_may_be_hex() {
        assert_eq!(parse("#FF, 0x00, 0"), Color::from_rgb(255, 0, 0).unwrap());
    }

    #[test]
    fn culture_list_separator() {
        let de = ColorConverter::new(Culture::DE_DE);
        assert_eq!(de.convert_from_str("0; 0; 255").unwrap(), Color::from_rgb(0, 0, 255).unwrap());
        // A comma is not a separator in de-DE, so this is one bad number.
        assert!(de.convert_from_str("0, 0, 255").is_err());
    }

    #[test]
    fn wrong_component_count() {
        let err = ColorConverter::invariant().convert_from_str("1, 2").unwrap_err();
        assert_eq!(err, ConvertError::InvalidColor { text: "1, 2".into() });
        assert!(err.to_string().contains("1, 2"));
    }

    #[test]
    fn bad_number_reports_whole_input() {
        let err = ColorConverter::invariant().convert_from_str("1, x, 3").unwrap_err();
        match err {
            ConvertError::Number { text, .. } => assert_eq!(text, "1, x, 3"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn out_of_range_component() {
        let err = ColorConverter::invariant().convert_from_str("256, 0, 0").unwrap_err();
        assert!(matches!(err, ConvertError::Component { .. }), "{err:?}");
    }

    #[test]
    fn unknown_word_is_error() {
        assert!(ColorConverter::invariant().convert_from_str("Reddish").is_err());
    }

    // ── hex ───────────────────────────────────────────────────────────────

    #[test]
    fn hex_six_digits_is_opaque() {
        for text in ["#FF0000", "0xFF0000", "&hFF0000", "#0xFF0000"] {
            let c = parse(text);
            assert_eq!((c.a(), c.r(), c.g(), c.b()), (255, 255, 0, 0), "{text}");
        }
    }

    #[test]
    fn hex_eight_digits_keeps_alpha() {
        let c = parse("#80FF0000");
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (128, 255, 0, 0));
    }

    #[test]
    fn hex_zero_alpha_defaults_to_opaque() {
        assert_eq!(parse("#00123456").a(), 255);
    }

    #[test]
    fn hex_bad_digits() {
        assert!(ColorConverter::invariant().convert_from_str("#GG0000").is_err());
        assert!(ColorConverter::invariant().convert_from_str("#").is_err());
    }

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn format_forms() {
        assert_eq!(format(&Color::EMPTY), "");
        assert_eq!(format(&Color::RED), "Red");
        assert_eq!(format(&SystemColors::CONTROL), "Control");
        assert_eq!(format(&Color::from_name("Sunset")), "'Sunset'");
        assert_eq!(format(&Color::from_rgb(1, 2, 3).unwrap()), "1, 2, 3");
        assert_eq!(format(&Color::from_argb(10, 1, 2, 3).unwrap()), "10, 1, 2, 3");
    }

    #[test]
    fn format_uses_culture_separator() {
        let fr = ColorConverter::new(Culture::FR_FR);
        assert_eq!(fr.convert_to_string(&Color::from_argb8(0, 1, 2, 3)), "0; 1; 2; 3");
    }

    #[test]
    fn format_then_parse_preserves_color() {
        let conv = ColorConverter::new(Culture::DE_DE);
        for c in [
            Color::from_argb8(7, 8, 9, 10),
            Color::from_argb8(255, 9, 8, 7),
            Color::from_name("Sunset"),
            SystemColors::MENU_BAR,
        ] {
            assert_eq!(conv.convert_from_str(&conv.convert_to_string(&c)).unwrap(), c);
        }
    }

    // ── standard values ───────────────────────────────────────────────────

    #[test]
    fn standard_values_sorted_and_complete() {
        let values = ColorConverter::standard_values();
        assert_eq!(values.len(), KnownColor::COUNT);
        assert_eq!(values[0], Color::from_known_color(KnownColor::ActiveBorder));
        let names: Vec<String> = values.iter().map(|c| c.name().to_ascii_lowercase()).collect();
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
        // Same allocation on every call.
        assert!(std::ptr::eq(values, ColorConverter::standard_values()));
    }
}
