use std::fmt;

/// Number and list formatting data for one locale.
///
/// Only the pieces the value converters need are modelled: the list separator
/// that delimits components (`"1, 2"` vs `"1; 2"`), the decimal separator, and
/// the sign symbols.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Culture {
    pub name: &'static str,
    pub list_separator: char,
    pub decimal_separator: char,
    pub negative_sign: char,
    pub positive_sign: char,
}

impl Culture {
    const fn new(name: &'static str, list_separator: char, decimal_separator: char) -> Self {
        Self {
            name,
            list_separator,
            decimal_separator,
            negative_sign: '-',
            positive_sign: '+',
        }
    }

    /// Culture-independent formatting: `,` between fields, `.` for decimals.
    pub const INVARIANT: Culture = Culture::new("", ',', '.');

    pub const EN_US: Culture = Culture::new("en-US", ',', '.');
    pub const EN_GB: Culture = Culture::new("en-GB", ',', '.');
    pub const DE_DE: Culture = Culture::new("de-DE", ';', ',');
    pub const FR_FR: Culture = Culture::new("fr-FR", ';', ',');
    pub const IT_IT: Culture = Culture::new("it-IT", ';', ',');
    pub const ES_ES: Culture = Culture::new("es-ES", ';', ',');
    pub const NL_NL: Culture = Culture::new("nl-NL", ';', ',');
    pub const PT_BR: Culture = Culture::new("pt-BR", ';', ',');
    pub const JA_JP: Culture = Culture::new("ja-JP", ',', '.');

    /// Every named culture, invariant first.
    pub const ALL: &'static [Culture] = &[
        Culture::INVARIANT,
        Culture::EN_US,
        Culture::EN_GB,
        Culture::DE_DE,
        Culture::FR_FR,
        Culture::IT_IT,
        Culture::ES_ES,
        Culture::NL_NL,
        Culture::PT_BR,
        Culture::JA_JP,
    ];

    /// Looks up a culture by tag.
    ///
    /// Accepts BCP-47 style (`de-DE`), POSIX locale style (`de_DE.UTF-8`,
    /// `de_DE@euro`), and bare languages (`de`, resolved to the first culture with
    /// that language). `""`, `C`, `POSIX`, and `invariant` map to
    /// [`Culture::INVARIANT`].
    pub fn from_name(tag: &str) -> Option<Culture> {
        let tag = tag.trim();
        let tag = tag.split(['.', '@']).next().unwrap_or("");
        if tag.is_empty()
            || tag.eq_ignore_ascii_case("c")
            || tag.eq_ignore_ascii_case("posix")
            || tag.eq_ignore_ascii_case("invariant")
        {
            return Some(Culture::INVARIANT);
        }

        let normalized = tag.replace('_', "-");
        if let Some(c) = Culture::ALL
            .iter()
            .find(|c| !c.name.is_empty() && c.name.eq_ignore_ascii_case(&normalized))
        {
            return Some(*c);
        }

        let language = normalized.split('-').next().unwrap_or("");
        Culture::ALL
            .iter()
            .find(|c| {
                c.name
                    .split('-')
                    .next()
                    .is_some_and(|l| !l.is_empty() && l.eq_ignore_ascii_case(language))
            })
            .copied()
    }

    /// Resolves the process culture from the environment.
    ///
    /// Checked in order: `TINCTURE_CULTURE`, `LC_ALL`, `LC_NUMERIC`, `LANG`.
    /// The first variable that is set and non-empty decides; an unknown tag there
    /// falls back to [`Culture::INVARIANT`].
    pub fn current() -> Culture {
        for var in ["TINCTURE_CULTURE", "LC_ALL", "LC_NUMERIC", "LANG"] {
            if let Ok(value) = std::env::var(var) {
                if !value.trim().is_empty() {
                    return Culture::from_name(&value).unwrap_or(Culture::INVARIANT);
                }
            }
        }
        Culture::INVARIANT
    }

    /// Separator placed between formatted fields: the list separator plus a space.
    pub fn field_joiner(&self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.list_separator);
        s.push(' ');
        s
    }

    #[inline]
    pub fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }
}

impl Default for Culture {
    fn default() -> Self {
        Culture::INVARIANT
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invariant() {
            f.write_str("invariant")
        } else {
            f.write_str(self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_bcp47() {
        assert_eq!(Culture::from_name("de-DE"), Some(Culture::DE_DE));
        assert_eq!(Culture::from_name("en-us"), Some(Culture::EN_US));
    }

    #[test]
    fn from_name_posix_locale() {
        assert_eq!(Culture::from_name("fr_FR.UTF-8"), Some(Culture::FR_FR));
        assert_eq!(Culture::from_name("de_DE@euro"), Some(Culture::DE_DE));
    }

    #[test]
    fn from_name_language_only() {
        assert_eq!(Culture::from_name("nl"), Some(Culture::NL_NL));
        assert_eq!(Culture::from_name("en"), Some(Culture::EN_US));
    }

    #[test]
    fn from_name_invariant_aliases() {
        for tag in ["", "C", "POSIX", "C.UTF-8", "invariant"] {
            assert_eq!(Culture::from_name(tag), Some(Culture::INVARIANT), "{tag:?}");
        }
    }

    #[test]
    fn from_name_unknown() {
        assert_eq!(Culture::from_name("xx-YY"), None);
    }

    #[test]
    fn field_joiner_uses_list_separator() {
        assert_eq!(Culture::INVARIANT.field_joiner(), ", ");
        assert_eq!(Culture::DE_DE.field_joiner(), "; ");
    }

    #[test]
    fn display() {
        assert_eq!(Culture::INVARIANT.to_string(), "invariant");
        assert_eq!(Culture::FR_FR.to_string(), "fr-FR");
    }
}
