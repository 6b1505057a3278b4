// ── Fields ────────────────────────────────────────────────────────────────

/// Splits a delimited component list (`"255, 0, 0"`) into trimmed fields.
///
/// Empty fields are kept: `"1,,2"` yields `["1", "", "2"]`, so callers see the
/// real component count and can reject the empty one.
pub struct Fields<'s> {
    src: &'s str,
    pos: usize,
    separator: char,
    done: bool,
}

impl<'s> Fields<'s> {
    pub fn new(src: &'s str, separator: char) -> Self {
        Self { src, pos: 0, separator, done: false }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }
}

impl<'s> Iterator for Fields<'s> {
    type Item = &'s str;

    fn next(&mut self) -> Option<&'s str> {
        if self.done {
            return None;
        }
        let start = self.pos;
        loop {
            match self.advance() {
                None => {
                    self.done = true;
                    return Some(self.src[start..].trim());
                }
                Some(c) if c == self.separator => {
                    let end = self.pos - c.len_utf8();
                    return Some(self.src[start..end].trim());
                }
                Some(_) => {}
            }
        }
    }
}

/// Convenience wrapper collecting [`Fields`] into a vector.
pub fn split_fields(src: &str, separator: char) -> Vec<&str> {
    Fields::new(src, separator).collect()
}
