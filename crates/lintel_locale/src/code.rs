//! Stable identifiers for every report the engine can emit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one report kind.
///
/// Each code maps to a stable string key (for machine consumers and callback
/// hooks) and to a format pattern in every language table. The numeric value
/// is stable within a release series but the string key is the durable
/// identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u16)]
pub enum MessageCode {
    /// An element was left open at a point where it must be closed.
    MissingEndTag,
    /// An element was left open when a new block began.
    MissingEndTagBefore,
    /// A tag made no sense where it appeared and was dropped.
    DiscardingUnexpected,
    /// A required element was inserted on the document's behalf.
    InsertingImplicit,
    /// An end tag did not match the open element.
    NonMatchingEndTag,
    /// An element appeared inside a parent that cannot contain it.
    TagNotAllowedIn,
    /// An end tag appeared with no matching open element.
    UnexpectedEndTag,
    /// More instances of an element than the document type allows.
    TooManyElements,
    /// The element name is not in the dictionary.
    UnknownElement,
    /// An element was still open at the end of input.
    ElementNotClosed,
    /// An element with no content was removed.
    TrimmingEmpty,
    /// Emphasis elements nested directly inside each other.
    NestedEmphasis,
    /// A presentational element was rewritten to its modern form.
    ObsoleteElement,
    /// An attribute value was missing its closing quote.
    MissingQuoteMark,
    /// The attribute name is not in the dictionary.
    UnknownAttribute,
    /// An attribute that requires a value had none.
    MissingAttrValue,
    /// An attribute value failed validation.
    BadAttributeValue,
    /// The same attribute appeared twice on one element.
    RepeatedAttribute,
    /// A color attribute value is neither a name nor a hex triple.
    InvalidColorValue,
    /// A bare `&` that should have been escaped.
    UnescapedAmpersand,
    /// An entity reference that is not defined.
    UnknownEntity,
    /// An entity reference missing its terminating semicolon.
    MissingSemicolon,
    /// A numeric character reference outside the legal range.
    InvalidCharRef,
    /// A UTF-16 surrogate pair decoding to an illegal code point.
    SurrogatePair,
    /// Adjacent hyphens inside a comment.
    MalformedComment,
    /// A document type declaration that could not be parsed.
    MalformedDoctype,
    /// A document type declaration after content.
    DoctypeAfterTags,
    /// No document type declaration was found.
    MissingDoctype,
    /// The declared character encoding disagrees with the content.
    EncodingMismatch,
}

impl MessageCode {
    /// Every code, in declaration order.
    pub const ALL: &'static [MessageCode] = &[
        MessageCode::MissingEndTag,
        MessageCode::MissingEndTagBefore,
        MessageCode::DiscardingUnexpected,
        MessageCode::InsertingImplicit,
        MessageCode::NonMatchingEndTag,
        MessageCode::TagNotAllowedIn,
        MessageCode::UnexpectedEndTag,
        MessageCode::TooManyElements,
        MessageCode::UnknownElement,
        MessageCode::ElementNotClosed,
        MessageCode::TrimmingEmpty,
        MessageCode::NestedEmphasis,
        MessageCode::ObsoleteElement,
        MessageCode::MissingQuoteMark,
        MessageCode::UnknownAttribute,
        MessageCode::MissingAttrValue,
        MessageCode::BadAttributeValue,
        MessageCode::RepeatedAttribute,
        MessageCode::InvalidColorValue,
        MessageCode::UnescapedAmpersand,
        MessageCode::UnknownEntity,
        MessageCode::MissingSemicolon,
        MessageCode::InvalidCharRef,
        MessageCode::SurrogatePair,
        MessageCode::MalformedComment,
        MessageCode::MalformedDoctype,
        MessageCode::DoctypeAfterTags,
        MessageCode::MissingDoctype,
        MessageCode::EncodingMismatch,
    ];

    /// Returns the stable string key for this code.
    pub fn key(self) -> &'static str {
        match self {
            MessageCode::MissingEndTag => "MISSING_END_TAG",
            MessageCode::MissingEndTagBefore => "MISSING_END_TAG_BEFORE",
            MessageCode::DiscardingUnexpected => "DISCARDING_UNEXPECTED",
            MessageCode::InsertingImplicit => "INSERTING_IMPLICIT",
            MessageCode::NonMatchingEndTag => "NON_MATCHING_END_TAG",
            MessageCode::TagNotAllowedIn => "TAG_NOT_ALLOWED_IN",
            MessageCode::UnexpectedEndTag => "UNEXPECTED_END_TAG",
            MessageCode::TooManyElements => "TOO_MANY_ELEMENTS",
            MessageCode::UnknownElement => "UNKNOWN_ELEMENT",
            MessageCode::ElementNotClosed => "ELEMENT_NOT_CLOSED",
            MessageCode::TrimmingEmpty => "TRIMMING_EMPTY_ELEMENT",
            MessageCode::NestedEmphasis => "NESTED_EMPHASIS",
            MessageCode::ObsoleteElement => "OBSOLETE_ELEMENT",
            MessageCode::MissingQuoteMark => "MISSING_QUOTE_MARK",
            MessageCode::UnknownAttribute => "UNKNOWN_ATTRIBUTE",
            MessageCode::MissingAttrValue => "MISSING_ATTR_VALUE",
            MessageCode::BadAttributeValue => "BAD_ATTRIBUTE_VALUE",
            MessageCode::RepeatedAttribute => "REPEATED_ATTRIBUTE",
            MessageCode::InvalidColorValue => "INVALID_COLOR_VALUE",
            MessageCode::UnescapedAmpersand => "UNESCAPED_AMPERSAND",
            MessageCode::UnknownEntity => "UNKNOWN_ENTITY",
            MessageCode::MissingSemicolon => "MISSING_SEMICOLON",
            MessageCode::InvalidCharRef => "INVALID_CHAR_REF",
            MessageCode::SurrogatePair => "BAD_SURROGATE_PAIR",
            MessageCode::MalformedComment => "MALFORMED_COMMENT",
            MessageCode::MalformedDoctype => "MALFORMED_DOCTYPE",
            MessageCode::DoctypeAfterTags => "DOCTYPE_AFTER_TAGS",
            MessageCode::MissingDoctype => "MISSING_DOCTYPE",
            MessageCode::EncodingMismatch => "ENCODING_MISMATCH",
        }
    }

    /// Returns the numeric value of this code.
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for MessageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
