//! Number formatting conventions.

use std::env;

/// The separators a culture uses when writing numbers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locale {
    pub decimal_separator: char,
    /// Separates thousands in grouped numbers, and vector components (followed by a space).
    pub group_separator: char,
    pub negative_sign: char,
}

impl Default for Locale {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// Languages that write `1.234,5`.
const COMMA_DECIMAL_DOT_GROUP: &[&str] = &["de", "es", "it", "nl", "pt", "id", "tr", "da"];
/// Languages that write `1 234,5` with a no-break space.
const COMMA_DECIMAL_SPACE_GROUP: &[&str] = &["fr", "ru", "pl", "cs", "sv", "fi", "nb", "uk"];
/// Environment variables naming the numeric locale, highest precedence first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

impl Locale {
    /// Culture-independent conventions: `1,234.5` and `-1`.
    pub const INVARIANT: Self = Self {
        decimal_separator: '.',
        group_separator: ',',
        negative_sign: '-',
    };

    /// Builds a locale from its separators, with `-` as the negative sign.
    pub const fn new(decimal_separator: char, group_separator: char) -> Self {
        Self {
            decimal_separator,
            group_separator,
            negative_sign: '-',
        }
    }

    pub const fn with_negative_sign(mut self, negative_sign: char) -> Self {
        self.negative_sign = negative_sign;
        self
    }

    /// Looks up the conventions for a POSIX or BCP 47 tag such as `de_DE.UTF-8`, `fr-FR` or `C`.
    ///
    /// Only the language part of the tag is considered. Returns `None` for languages outside the
    /// built-in table.
    pub fn from_posix(tag: &str) -> Option<Self> {
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        if matches!(tag, "" | "C" | "POSIX" | "invariant") {
            return Some(Self::INVARIANT);
        }
        let language = tag
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let language = language.as_str();

        if language == "en" {
            Some(Self::INVARIANT)
        } else if COMMA_DECIMAL_DOT_GROUP.contains(&language) {
            Some(Self::new(',', '.'))
        } else if COMMA_DECIMAL_SPACE_GROUP.contains(&language) {
            Some(Self::new(',', '\u{a0}'))
        } else {
            None
        }
    }

    /// The conventions of the process locale, from `LC_ALL`, `LC_NUMERIC` or `LANG`, in that
    /// order of precedence.
    ///
    /// Falls back to [`Locale::INVARIANT`] when none is set or the language is unknown.
    pub fn current() -> Self {
        let Some((var, tag)) = LOCALE_VARS.into_iter().find_map(locale_var) else {
            tracing::debug!("no locale variable set, using invariant number formatting");
            return Self::INVARIANT;
        };

        match Self::from_posix(&tag) {
            Some(locale) => {
                tracing::trace!(var, %tag, ?locale, "resolved process locale");
                locale
            }
            None => {
                tracing::debug!(var, %tag, "unknown locale, using invariant number formatting");
                Self::INVARIANT
            }
        }
    }
}

/// The value of `var`, if set and non-empty.
fn locale_var(var: &'static str) -> Option<(&'static str, String)> {
    let tag = env::var(var).ok()?;
    (!tag.is_empty()).then_some((var, tag))
}
