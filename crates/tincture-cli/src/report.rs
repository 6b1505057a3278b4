//! Plain-text reports printed by each subcommand.

use std::fmt::Write;

use anyhow::{Context, Result};
use tincture_drawing::Culture;
use tincture_drawing::convert::{
    ColorConverter, PointConverter, PointFConverter, RectangleConverter, SizeConverter,
    SizeFConverter, ValueConverter,
};
use tincture_drawing::paint::{Color, KnownColor};

macro_rules! field {
    ($out:expr, $label:literal, $($arg:tt)*) => {{
        // Writing into a String cannot fail.
        let _ = writeln!($out, "  {:<11}{}", concat!($label, ":"), format_args!($($arg)*));
    }};
}

pub fn color(text: &str, culture: Culture) -> Result<String> {
    let conv = ColorConverter::new(culture);
    let color = conv
        .convert_from_str(text)
        .with_context(|| format!("reading color from {text:?}"))?;

    let mut out = String::new();
    field!(out, "color", "{color}");
    if color.is_empty() {
        return Ok(out);
    }
    field!(out, "argb", "#{:08X} ({})", color.value(), color.to_argb());
    field!(out, "components", "A={} R={} G={} B={}", color.a(), color.r(), color.g(), color.b());
    field!(
        out,
        "hsl",
        "H={:.1} S={:.3} L={:.3}",
        color.hue(),
        color.saturation(),
        color.brightness()
    );
    match color.to_known_color() {
        Some(k) if k.is_system() => field!(out, "known", "{} (system)", k.name()),
        Some(k) => field!(out, "known", "{}", k.name()),
        None => field!(out, "known", "-"),
    }
    field!(out, "as text", "{}", conv.convert_to_string(&color));
    Ok(out)
}

pub fn size(text: &str, culture: Culture, float: bool) -> Result<String> {
    let mut out = String::new();
    if float {
        let conv = SizeFConverter::new(culture);
        let size = conv.convert_from_str(text).with_context(|| format!("reading size from {text:?}"))?;
        field!(out, "size", "{size}");
        field!(out, "area", "{}", size.width * size.height);
        field!(out, "as text", "{}", conv.convert_to_string(&size));
    } else {
        let conv = SizeConverter::new(culture);
        let size = conv.convert_from_str(text).with_context(|| format!("reading size from {text:?}"))?;
        field!(out, "size", "{size}");
        field!(out, "area", "{}", i64::from(size.width) * i64::from(size.height));
        field!(out, "as text", "{}", conv.convert_to_string(&size));
    }
    Ok(out)
}

pub fn point(text: &str, culture: Culture, float: bool) -> Result<String> {
    let mut out = String::new();
    if float {
        let conv = PointFConverter::new(culture);
        let point = conv.convert_from_str(text).with_context(|| format!("reading point from {text:?}"))?;
        field!(out, "point", "{point}");
        field!(out, "as text", "{}", conv.convert_to_string(&point));
    } else {
        let conv = PointConverter::new(culture);
        let point = conv.convert_from_str(text).with_context(|| format!("reading point from {text:?}"))?;
        field!(out, "point", "{point}");
        field!(out, "as text", "{}", conv.convert_to_string(&point));
    }
    Ok(out)
}

pub fn rect(text: &str, culture: Culture) -> Result<String> {
    let conv = RectangleConverter::new(culture);
    let r = conv
        .convert_from_str(text)
        .with_context(|| format!("reading rectangle from {text:?}"))?;

    let mut out = String::new();
    field!(out, "rectangle", "{r}");
    field!(out, "bounds", "left={} top={} right={} bottom={}", r.left(), r.top(), r.right(), r.bottom());
    field!(out, "area", "{}", i64::from(r.width) * i64::from(r.height));
    field!(out, "as text", "{}", conv.convert_to_string(&r));
    Ok(out)
}

/// One line per known color, in table order.
pub fn known(include_system: bool) -> String {
    let mut out = String::new();
    for &k in KnownColor::ALL {
        if k.is_system() && !include_system {
            continue;
        }
        let c = Color::from_known_color(k);
        let _ = writeln!(out, "{:>3}  {:<24}#{:08X}", k.id(), k.name(), c.value());
    }
    out
}
