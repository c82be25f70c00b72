//! Language tables and the registry that resolves locale tags to them.
//!
//! A [`Language`] holds sparse overrides on top of the built-in English
//! table: codes without an entry fall back to English, as do prefixes and
//! the position template. This keeps translated tables small and means a
//! partially translated language still renders every message.

use crate::code::MessageCode;
use crate::severity::Severity;
use crate::{en, en_gb};

/// Returns the built-in English pattern for `code`.
///
/// This is the default-language lookup used for the untranslated half of a
/// message record; it never consults the configured language.
pub fn default_string(code: MessageCode) -> &'static str {
    en::message(code)
}

/// Returns the built-in English prefix for `level`.
pub fn default_prefix(level: Severity) -> &'static str {
    en::prefix(level)
}

/// Returns the built-in English position template, `"line %d column %d - "`.
pub fn default_line_column() -> &'static str {
    en::LINE_COLUMN
}

/// A message table for one locale.
///
/// Tables are static data. Entries are sparse; lookups fall back to the
/// built-in English table for anything a language does not override.
#[derive(Debug)]
pub struct Language {
    tag: &'static str,
    messages: &'static [(MessageCode, &'static str)],
    prefixes: &'static [(Severity, &'static str)],
    line_column: Option<&'static str>,
}

impl Language {
    /// Builds a language table from static override slices.
    pub const fn new(
        tag: &'static str,
        messages: &'static [(MessageCode, &'static str)],
        prefixes: &'static [(Severity, &'static str)],
        line_column: Option<&'static str>,
    ) -> Language {
        Language {
            tag,
            messages,
            prefixes,
            line_column,
        }
    }

    /// The normalized tag for this language, e.g. `"en_gb"`.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Returns the pattern for `code`, falling back to English.
    pub fn string(&self, code: MessageCode) -> &'static str {
        self.messages
            .iter()
            .find(|(entry, _)| *entry == code)
            .map(|(_, pattern)| *pattern)
            .unwrap_or_else(|| en::message(code))
    }

    /// Returns the prefix for `level`, falling back to English.
    pub fn prefix(&self, level: Severity) -> &'static str {
        self.prefixes
            .iter()
            .find(|(entry, _)| *entry == level)
            .map(|(_, prefix)| *prefix)
            .unwrap_or_else(|| en::prefix(level))
    }

    /// Returns the position template, falling back to English.
    pub fn line_column(&self) -> &'static str {
        self.line_column.unwrap_or(en::LINE_COLUMN)
    }

    /// The message overrides this language carries.
    pub fn overrides(&self) -> &'static [(MessageCode, &'static str)] {
        self.messages
    }

    /// The built-in English table.
    pub fn english() -> &'static Language {
        &ENGLISH
    }

    /// Every built-in language table.
    pub fn all() -> &'static [&'static Language] {
        REGISTRY
    }

    /// Resolves a locale tag to a built-in table.
    ///
    /// Tags are matched case-insensitively and `-` is treated as `_`, so
    /// `"en-GB"` and `"en_gb"` name the same table. A regional tag with no
    /// table of its own falls back to its base language: `"en_au"` resolves
    /// to English. Unknown base languages are an error.
    pub fn from_tag(tag: &str) -> Result<&'static Language, LanguageError> {
        let normalized: String = tag
            .trim()
            .chars()
            .map(|c| if c == '-' { '_' } else { c.to_ascii_lowercase() })
            .collect();
        if normalized.is_empty() {
            return Err(LanguageError::UnknownTag(tag.to_string()));
        }
        if let Some(language) = lookup(&normalized) {
            return Ok(language);
        }
        let base = normalized.split('_').next().unwrap_or(&normalized);
        lookup(base).ok_or_else(|| LanguageError::UnknownTag(tag.to_string()))
    }
}

fn lookup(tag: &str) -> Option<&'static Language> {
    REGISTRY
        .iter()
        .find(|language| language.tag == tag)
        .copied()
}

/// English is the complete base table; its override slices are empty.
pub(crate) static ENGLISH: Language = Language::new("en", &[], &[], None);

static REGISTRY: &[&Language] = &[&ENGLISH, &en_gb::EN_GB];

/// Errors from resolving a locale tag.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LanguageError {
    /// The tag names no built-in language, even after base-language fallback.
    #[error("no built-in strings for language tag '{0}'")]
    UnknownTag(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_has_no_overrides() {
        assert!(Language::english().overrides().is_empty());
        assert_eq!(Language::english().tag(), "en");
    }

    #[test]
    fn string_falls_back_to_english() {
        let en_gb = Language::from_tag("en_gb").unwrap();
        // Overridden entry.
        assert_eq!(
            en_gb.string(MessageCode::UnknownElement),
            "%s is not a recognised element"
        );
        // Untranslated entry falls through to the base table.
        assert_eq!(
            en_gb.string(MessageCode::MissingEndTag),
            default_string(MessageCode::MissingEndTag)
        );
    }

    #[test]
    fn prefix_and_template_fall_back() {
        let en_gb = Language::from_tag("en_gb").unwrap();
        assert_eq!(en_gb.prefix(Severity::Warning), "Warning: ");
        assert_eq!(en_gb.line_column(), default_line_column());
    }

    #[test]
    fn from_tag_normalizes_case_and_separator() {
        let direct = Language::from_tag("en_gb").unwrap();
        assert_eq!(Language::from_tag("en-GB").unwrap().tag(), direct.tag());
        assert_eq!(Language::from_tag("EN_GB").unwrap().tag(), direct.tag());
        assert_eq!(Language::from_tag(" en_gb ").unwrap().tag(), "en_gb");
    }

    #[test]
    fn regional_tag_falls_back_to_base_language() {
        assert_eq!(Language::from_tag("en_au").unwrap().tag(), "en");
        assert_eq!(Language::from_tag("en").unwrap().tag(), "en");
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let err = Language::from_tag("xx").unwrap_err();
        assert_eq!(err, LanguageError::UnknownTag("xx".to_string()));
        assert!(Language::from_tag("").is_err());
        assert!(Language::from_tag("zz_yy").is_err());
    }

    #[test]
    fn registry_tags_are_normalized() {
        for language in Language::all() {
            let tag = language.tag();
            assert!(tag
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }
}
