//! Built-in English strings. Every code must have an entry here; other
//! languages override entries and fall back to this table.

use crate::code::MessageCode;
use crate::severity::Severity;

/// Position template prepended to console output when a location is known.
pub(crate) const LINE_COLUMN: &str = "line %d column %d - ";

pub(crate) fn message(code: MessageCode) -> &'static str {
    match code {
        MessageCode::MissingEndTag => "missing end tag for %s",
        MessageCode::MissingEndTagBefore => "missing end tag for %s before %s",
        MessageCode::DiscardingUnexpected => "discarding unexpected %s",
        MessageCode::InsertingImplicit => "inserting implicit <%s>",
        MessageCode::NonMatchingEndTag => "replacing unexpected %s with end tag for %s",
        MessageCode::TagNotAllowedIn => "%s is not allowed in <%s> elements",
        MessageCode::UnexpectedEndTag => "unexpected end tag </%s>",
        MessageCode::TooManyElements => "too many %s elements in <%s>",
        MessageCode::UnknownElement => "%s is not a recognized element",
        MessageCode::ElementNotClosed => "%s element not closed",
        MessageCode::TrimmingEmpty => "trimming empty <%s>",
        MessageCode::NestedEmphasis => "nested emphasis %s",
        MessageCode::ObsoleteElement => "replacing obsolete element <%s> with <%s>",
        MessageCode::MissingQuoteMark => "%s attribute with missing trailing quote mark",
        MessageCode::UnknownAttribute => "unknown attribute \"%s\"",
        MessageCode::MissingAttrValue => "%s attribute \"%s\" lacks value",
        MessageCode::BadAttributeValue => "%s attribute \"%s\" has invalid value \"%s\"",
        MessageCode::RepeatedAttribute => "%s dropping value \"%s\" for repeated attribute \"%s\"",
        MessageCode::InvalidColorValue => "\"%s\" is not a valid color value",
        MessageCode::UnescapedAmpersand => "unescaped & which should be written as &amp;",
        MessageCode::UnknownEntity => "unescaped & or unknown entity \"%s\"",
        MessageCode::MissingSemicolon => "entity \"%s\" does not end in ';'",
        MessageCode::InvalidCharRef => "invalid numeric character reference &#%u;",
        MessageCode::SurrogatePair => {
            "out-of-range surrogate pair U+%04X U+%04X, replaced with U+FFFD"
        }
        MessageCode::MalformedComment => "adjacent hyphens within comment",
        MessageCode::MalformedDoctype => "discarding malformed <!DOCTYPE>",
        MessageCode::DoctypeAfterTags => "<!DOCTYPE> is not allowed after elements",
        MessageCode::MissingDoctype => "no <!DOCTYPE> declaration found",
        MessageCode::EncodingMismatch => {
            "declared input encoding (%s) does not match actual encoding (%s)"
        }
    }
}

pub(crate) fn prefix(level: Severity) -> &'static str {
    match level {
        Severity::Info => "Info: ",
        Severity::Warning => "Warning: ",
        Severity::Config => "Config: ",
        Severity::Access => "Access: ",
        Severity::Error => "Error: ",
        Severity::BadDocument => "Document: ",
        Severity::Fatal => "Panic: ",
    }
}
