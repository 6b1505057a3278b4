use tincture_text::{Culture, format_f32, format_i32, parse_f32, parse_i32, split_fields};

use crate::coords::{Point, PointF, Rectangle, RectangleF, Size, SizeF};

use super::{ConvertError, ValueConverter};

/// Splits `text` into exactly `N` fields and parses each with `parse`.
fn parse_fields<T, const N: usize>(
    text: &str,
    culture: &Culture,
    expected: &'static str,
    parse: impl Fn(&str, &Culture) -> Result<T, tincture_text::ParseError>,
) -> Result<[T; N], ConvertError>
where
    T: Copy + Default,
{
    let text = text.trim();
    if text.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    let fields = split_fields(text, culture.list_separator);
    if fields.len() != N {
        log::debug!("expected {N} fields in {text:?}, found {}", fields.len());
        return Err(ConvertError::InvalidFormat { text: text.to_string(), expected });
    }
    let mut out = [T::default(); N];
    for (slot, field) in out.iter_mut().zip(fields) {
        *slot = parse(field, culture)
            .map_err(|source| ConvertError::Number { text: text.to_string(), source })?;
    }
    Ok(out)
}

fn join_ints(values: &[i32], culture: &Culture) -> String {
    values
        .iter()
        .map(|&v| format_i32(v, culture))
        .collect::<Vec<_>>()
        .join(&culture.field_joiner())
}

fn join_floats(values: &[f32], culture: &Culture) -> String {
    values
        .iter()
        .map(|&v| format_f32(v, culture))
        .collect::<Vec<_>>()
        .join(&culture.field_joiner())
}

// ── Size ──────────────────────────────────────────────────────────────────

culture_converter! {
    /// [`Size`] as `"Width, Height"`.
    SizeConverter
}

impl ValueConverter for SizeConverter {
    type Value = Size;

    fn culture(&self) -> &Culture {
        &self.culture
    }

    fn convert_from_str(&self, text: &str) -> Result<Size, ConvertError> {
        let [w, h] = parse_fields::<i32, 2>(text, &self.culture, "Width, Height", parse_i32)?;
        Ok(Size::new(w, h))
    }

    fn convert_to_string(&self, value: &Size) -> String {
        join_ints(&[value.width, value.height], &self.culture)
    }
}

culture_converter! {
    /// [`SizeF`] as `"Width, Height"` with culture decimals.
    SizeFConverter
}

impl ValueConverter for SizeFConverter {
    type Value = SizeF;

    fn culture(&self) -> &Culture {
        &self.culture
    }

    fn convert_from_str(&self, text: &str) -> Result<SizeF, ConvertError> {
        let [w, h] = parse_fields::<f32, 2>(text, &self.culture, "Width, Height", parse_f32)?;
        Ok(SizeF::new(w, h))
    }

    fn convert_to_string(&self, value: &SizeF) -> String {
        join_floats(&[value.width, value.height], &self.culture)
    }
}

// ── Point ─────────────────────────────────────────────────────────────────

culture_converter! {
    /// [`Point`] as `"X, Y"`.
    PointConverter
}

impl ValueConverter for PointConverter {
    type Value = Point;

    fn culture(&self) -> &Culture {
        &self.culture
    }

    fn convert_from_str(&self, text: &str) -> Result<Point, ConvertError> {
        let [x, y] = parse_fields::<i32, 2>(text, &self.culture, "X, Y", parse_i32)?;
        Ok(Point::new(x, y))
    }

    fn convert_to_string(&self, value: &Point) -> String {
        join_ints(&[value.x, value.y], &self.culture)
    }
}

culture_converter! {
    /// [`PointF`] as `"X, Y"` with culture decimals.
    PointFConverter
}

impl ValueConverter for PointFConverter {
    type Value = PointF;

    fn culture(&self) -> &Culture {
        &self.culture
    }

    fn convert_from_str(&self, text: &str) -> Result<PointF, ConvertError> {
        let [x, y] = parse_fields::<f32, 2>(text, &self.culture, "X, Y", parse_f32)?;
        Ok(PointF::new(x, y))
    }

    fn convert_to_string(&self, value: &PointF) -> String {
        join_floats(&[value.x, value.y], &self.culture)
    }
}

// ── Rectangle ─────────────────────────────────────────────────────────────

culture_converter! {
    /// [`Rectangle`] as `"X, Y, Width, Height"`.
    RectangleConverter
}

impl ValueConverter for RectangleConverter {
    type Value = Rectangle;

    fn culture(&self) -> &Culture {
        &self.culture
    }

    fn convert_from_str(&self, text: &str) -> Result<Rectangle, ConvertError> {
        let [x, y, w, h] =
            parse_fields::<i32, 4>(text, &self.culture, "X, Y, Width, Height", parse_i32)?;
        Ok(Rectangle::new(x, y, w, h))
    }

    fn convert_to_string(&self, r: &Rectangle) -> String {
        join_ints(&[r.x, r.y, r.width, r.height], &self.culture)
    }
}

culture_converter! {
    /// [`RectangleF`] as `"X, Y, Width, Height"` with culture decimals.
    RectangleFConverter
}

impl ValueConverter for RectangleFConverter {
    type Value = RectangleF;

    fn culture(&self) -> &Culture {
        &self.culture
    }

    fn convert_from_str(&self, text: &str) -> Result<RectangleF, ConvertError> {
        let [x, y, w, h] =
            parse_fields::<f32, 4>(text, &self.culture, "X, Y, Width, Height", parse_f32)?;
        Ok(RectangleF::new(x, y, w, h))
    }

    fn convert_to_string(&self, r: &RectangleF) -> String {
        join_floats(&[r.x, r.y, r.width, r.height], &self.culture)
    }
}
