use crate::culture::Culture;
use crate::error::ParseError;

// ── Integers ──────────────────────────────────────────────────────────────

/// Parses a 32-bit integer field.
///
/// Accepted forms (surrounding whitespace ignored):
/// - decimal with an optional culture sign: `42`, `-7`, `+3`
/// - hex with `#`, `0x`, or `&h` prefix: `#FF`, `0x80FF0000`, `&hFF`
///
/// Hex values take up to 8 digits and reinterpret the bits, so `0xFFFFFFFF`
/// reads as `-1`.
pub fn parse_i32(text: &str, culture: &Culture) -> Result<i32, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    if let Some(rest) = text.strip_prefix('#') {
        return parse_hex_u32(rest).map(|v| v as i32);
    }
    if let Some(rest) = strip_hex_prefix(text) {
        return parse_hex_u32(rest).map(|v| v as i32);
    }
    parse_decimal_i32(text, culture)
}

/// Strips a `0x`/`0X`/`&h`/`&H` prefix.
pub fn strip_hex_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    if bytes.len() >= 2
        && ((bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X'))
            || (bytes[0] == b'&' && (bytes[1] == b'h' || bytes[1] == b'H')))
    {
        Some(&text[2..])
    } else {
        None
    }
}

/// Parses 1 to 8 hex digits (no prefix) into their raw bit pattern.
pub fn parse_hex_u32(digits: &str) -> Result<u32, ParseError> {
    let digits = digits.trim();
    let invalid = || ParseError::InvalidInteger { text: digits.to_string(), radix: 16 };
    if digits.is_empty() || digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u32::from_str_radix(digits, 16).map_err(|_| invalid())
}

fn parse_decimal_i32(text: &str, culture: &Culture) -> Result<i32, ParseError> {
    let invalid = || ParseError::InvalidInteger { text: text.to_string(), radix: 10 };

    let (negative, digits) = split_sign(text, culture);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // Parse the magnitude wide so `-2147483648` is accepted.
    let magnitude: i64 = digits.parse().map_err(|_| invalid())?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| invalid())
}

fn split_sign<'t>(text: &'t str, culture: &Culture) -> (bool, &'t str) {
    if let Some(rest) = text.strip_prefix(culture.negative_sign) {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix(culture.positive_sign) {
        (false, rest)
    } else {
        (false, text)
    }
}

/// Formats an integer for `culture`.
pub fn format_i32(value: i32, culture: &Culture) -> String {
    if value < 0 {
        let mut s = String::new();
        s.push(culture.negative_sign);
        s.push_str(&value.unsigned_abs().to_string());
        s
    } else {
        value.to_string()
    }
}

// ── Floats ────────────────────────────────────────────────────────────────

/// Parses a single-precision float field using `culture`'s decimal separator.
///
/// Grammar: `[sign] digits [sep digits] [(e|E) [sign] digits]`, where at least
/// one mantissa digit is present. The symbols written by [`format_f32`]
/// (`NaN`, `Infinity`, `-Infinity`) are accepted, ignoring ASCII case. Group
/// separators are rejected.
pub fn parse_f32(text: &str, culture: &Culture) -> Result<f32, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    let invalid = || ParseError::InvalidFloat { text: text.to_string() };

    if text.eq_ignore_ascii_case("nan") {
        return Ok(f32::NAN);
    }
    let (negative, rest) = split_sign(text, culture);
    if rest.eq_ignore_ascii_case("infinity") {
        return Ok(if negative { f32::NEG_INFINITY } else { f32::INFINITY });
    }
    let mut normalized = String::with_capacity(text.len() + 1);
    if negative {
        normalized.push('-');
    }

    let mut chars = rest.chars().peekable();
    let mut mantissa_digits = 0usize;

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            normalized.push(c);
            mantissa_digits += 1;
            chars.next();
        } else {
            break;
        }
    }
    if chars.peek() == Some(&culture.decimal_separator) {
        chars.next();
        normalized.push('.');
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                normalized.push(c);
                mantissa_digits += 1;
                chars.next();
            } else {
                break;
            }
        }
    }
    if mantissa_digits == 0 {
        return Err(invalid());
    }

    if matches!(chars.peek(), Some('e') | Some('E')) {
        chars.next();
        normalized.push('e');
        match chars.peek() {
            Some(&c) if c == culture.negative_sign => {
                normalized.push('-');
                chars.next();
            }
            Some(&c) if c == culture.positive_sign => {
                chars.next();
            }
            _ => {}
        }
        let mut exponent_digits = 0usize;
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                normalized.push(c);
                exponent_digits += 1;
                chars.next();
            } else {
                break;
            }
        }
        if exponent_digits == 0 {
            return Err(invalid());
        }
    }

    if chars.next().is_some() {
        return Err(invalid());
    }

    normalized.parse::<f32>().map_err(|_| invalid())
}

/// Formats a float in shortest round-trip form for `culture`.
pub fn format_f32(value: f32, culture: &Culture) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "Infinity".to_string()
        } else {
            let mut s = String::new();
            s.push(culture.negative_sign);
            s.push_str("Infinity");
            s
        };
    }
    format!("{value}")
        .chars()
        .map(|c| match c {
            '.' => culture.decimal_separator,
            '-' => culture.negative_sign,
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INV: Culture = Culture::INVARIANT;

    // ── parse_i32 ─────────────────────────────────────────────────────────

    #[test]
    fn decimal_with_signs() {
        assert_eq!(parse_i32("42", &INV), Ok(42));
        assert_eq!(parse_i32(" -7 ", &INV), Ok(-7));
        assert_eq!(parse_i32("+3", &INV), Ok(3));
    }

    #[test]
    fn decimal_extremes() {
        assert_eq!(parse_i32("-2147483648", &INV), Ok(i32::MIN));
        assert_eq!(parse_i32("2147483647", &INV), Ok(i32::MAX));
        assert!(parse_i32("2147483648", &INV).is_err());
    }

    #[test]
    fn hex_prefixes() {
        assert_eq!(parse_i32("#FF", &INV), Ok(255));
        assert_eq!(parse_i32("0x10", &INV), Ok(16));
        assert_eq!(parse_i32("&hff", &INV), Ok(255));
        assert_eq!(parse_i32("0XFFFFFFFF", &INV), Ok(-1));
    }

    #[test]
    fn hex_too_long() {
        assert!(parse_i32("#123456789", &INV).is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_i32("12a", &INV),
            Err(ParseError::InvalidInteger { text: "12a".into(), radix: 10 })
        );
        assert!(parse_i32("-", &INV).is_err());
        assert!(parse_i32("1.5", &INV).is_err());
    }

    #[test]
    fn empty_field() {
        assert_eq!(parse_i32("  ", &INV), Err(ParseError::Empty));
    }

    // ── parse_f32 ─────────────────────────────────────────────────────────

    #[test]
    fn float_invariant() {
        assert_eq!(parse_f32("1.5", &INV), Ok(1.5));
        assert_eq!(parse_f32("-.25", &INV), Ok(-0.25));
        assert_eq!(parse_f32("3.", &INV), Ok(3.0));
        assert_eq!(parse_f32("1e3", &INV), Ok(1000.0));
        assert_eq!(parse_f32("2.5E-1", &INV), Ok(0.25));
    }

    #[test]
    fn float_comma_culture() {
        assert_eq!(parse_f32("1,5", &Culture::DE_DE), Ok(1.5));
        assert!(parse_f32("1.5", &Culture::DE_DE).is_err());
    }

    #[test]
    fn float_rejects_garbage() {
        assert!(parse_f32("inf", &INV).is_err());
        assert!(parse_f32("-NaN", &INV).is_err());
        assert!(parse_f32(".", &INV).is_err());
        assert!(parse_f32("1e", &INV).is_err());
        assert!(parse_f32("1.5x", &INV).is_err());
    }

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn format_integers() {
        assert_eq!(format_i32(-12, &INV), "-12");
        assert_eq!(format_i32(i32::MIN, &INV), "-2147483648");
    }

    #[test]
    fn format_floats() {
        assert_eq!(format_f32(1.5, &INV), "1.5");
        assert_eq!(format_f32(2.0, &INV), "2");
        assert_eq!(format_f32(-0.25, &Culture::DE_DE), "-0,25");
        assert_eq!(format_f32(f32::NEG_INFINITY, &INV), "-Infinity");
    }

    #[test]
    fn float_symbols_parse_back() {
        for c in [Culture::INVARIANT, Culture::DE_DE] {
            for v in [f32::INFINITY, f32::NEG_INFINITY] {
                assert_eq!(parse_f32(&format_f32(v, &c), &c), Ok(v), "{v} in {c}");
            }
            let nan = parse_f32(&format_f32(f32::NAN, &c), &c).unwrap();
            assert!(nan.is_nan());
        }
        assert_eq!(parse_f32(" +infinity ", &INV), Ok(f32::INFINITY));
        assert!(parse_f32("nan", &INV).unwrap().is_nan());
    }

    #[test]
    fn float_format_parses_back() {
        for v in [0.1f32, 1.0 / 3.0, 123456.78, -9.5e-5] {
            for c in [Culture::INVARIANT, Culture::FR_FR] {
                assert_eq!(parse_f32(&format_f32(v, &c), &c), Ok(v), "{v} in {c}");
            }
        }
    }
}
