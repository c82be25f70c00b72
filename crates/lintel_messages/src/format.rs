//! Printf-style format analysis.
//!
//! [`analyze`] walks a message pattern and reports the argument kind each
//! conversion directive consumes, so callers can capture a typed argument
//! list before rendering. The walk is two passes over the raw bytes: the
//! first counts directives so the result vector is allocated once, the
//! second parses each directive fully and fails the whole analysis on the
//! first directive the renderer cannot honor.

use serde::{Deserialize, Serialize};
use std::mem;

/// The kind of argument one conversion directive consumes.
///
/// Integer kinds are selected by the length modifier (`h`, `l`, `ll`, `L`,
/// `z`), not by the conversion character: `%hu` consumes the same 16-bit
/// slot as `%hd`. Unsigned kinds arise only from pointer conversions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ArgKind {
    /// 16-bit integer (`h` modifier).
    Int16,
    /// 16-bit unsigned integer.
    UInt16,
    /// Default-width integer (no modifier).
    Int,
    /// Default-width unsigned integer.
    UInt,
    /// 32-bit integer (`l` modifier).
    Int32,
    /// 32-bit unsigned integer.
    UInt32,
    /// 64-bit integer (`ll` or `L` modifier).
    Int64,
    /// 64-bit unsigned integer.
    UInt64,
    /// Floating-point value (`e`, `f`, `g`).
    Double,
    /// Narrow string (`s`).
    Str,
    /// Wide string; the analyzer never yields this, wide forms fail as
    /// unsupported.
    WideStr,
    /// Output-length counter (`n`).
    Count,
    /// A directive the renderer does not support.
    Unknown,
}

/// Errors from [`analyze`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A `*` width or precision, which would consume an extra argument.
    #[error("runtime width or precision ('*') at byte {at} is not supported")]
    IndirectWidth {
        /// Byte offset of the `%` that opened the directive.
        at: usize,
    },
    /// A conversion character outside the supported set.
    #[error("unsupported conversion character '{conversion}' at byte {at}")]
    UnsupportedConversion {
        /// The offending conversion character.
        conversion: char,
        /// Byte offset of the `%` that opened the directive.
        at: usize,
    },
    /// The pattern ended in the middle of a directive.
    #[error("format string ends inside a directive at byte {at}")]
    TruncatedDirective {
        /// Byte offset of the `%` that opened the directive.
        at: usize,
    },
}

/// One parsed conversion directive.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Directive {
    pub star_width: bool,
    pub star_precision: bool,
    pub zero_pad: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub kind: ArgKind,
    /// The conversion byte, or 0 if the pattern ended inside the directive.
    pub conversion: u8,
}

/// Determines the argument kinds a pattern consumes, in directive order.
///
/// `%%` is a literal percent and consumes nothing. A pattern with no
/// directives yields an empty vector. Any directive the renderer cannot
/// honor fails the whole analysis, so a malformed pattern never produces
/// a partial layout.
pub fn analyze(pattern: &str) -> Result<Vec<ArgKind>, FormatError> {
    let bytes = pattern.as_bytes();

    // First pass: count directives. A lone trailing '%' still opens a
    // directive here; the second pass rejects it as truncated.
    let mut count = 0usize;
    let mut pos = 0usize;
    while pos < bytes.len() {
        if bytes[pos] != b'%' {
            pos += 1;
            continue;
        }
        if pos + 1 < bytes.len() && bytes[pos + 1] == b'%' {
            pos += 2;
            continue;
        }
        count += 1;
        pos += 2;
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    // Second pass: parse each directive and record its kind.
    let mut kinds = Vec::with_capacity(count);
    let mut pos = 0usize;
    while pos < bytes.len() {
        if bytes[pos] != b'%' {
            pos += 1;
            continue;
        }
        if pos + 1 < bytes.len() && bytes[pos + 1] == b'%' {
            pos += 2;
            continue;
        }
        let at = pos;
        let (directive, next) = parse_directive(bytes, pos + 1);
        if directive.star_width || directive.star_precision {
            return Err(FormatError::IndirectWidth { at });
        }
        if directive.kind == ArgKind::Unknown {
            if directive.conversion == 0 {
                return Err(FormatError::TruncatedDirective { at });
            }
            return Err(FormatError::UnsupportedConversion {
                conversion: directive.conversion as char,
                at,
            });
        }
        kinds.push(directive.kind);
        pos = next;
    }
    Ok(kinds)
}

/// Parses one directive starting just past its `%`. Returns the directive
/// and the position of the first byte after it.
pub(crate) fn parse_directive(bytes: &[u8], start: usize) -> (Directive, usize) {
    let mut pos = start;
    let mut directive = Directive {
        star_width: false,
        star_precision: false,
        zero_pad: false,
        width: None,
        precision: None,
        kind: ArgKind::Unknown,
        conversion: 0,
    };

    if peek(bytes, pos) == b'*' {
        directive.star_width = true;
        pos += 1;
    }
    if peek(bytes, pos) == b'0' {
        directive.zero_pad = true;
    }
    let (width, after_width) = eat_digits(bytes, pos);
    directive.width = width;
    pos = after_width;

    if peek(bytes, pos) == b'.' {
        pos += 1;
        if peek(bytes, pos) == b'*' {
            directive.star_precision = true;
            pos += 1;
        }
        let (precision, after_precision) = eat_digits(bytes, pos);
        // A bare '.' means precision zero.
        directive.precision = Some(precision.unwrap_or(0));
        pos = after_precision;
    }

    // Length modifier selects the integer kind before the conversion byte
    // is seen.
    let mut kind = ArgKind::Int;
    match peek(bytes, pos) {
        b'h' => {
            kind = ArgKind::Int16;
            pos += 1;
        }
        b'L' => {
            kind = ArgKind::Int64;
            pos += 1;
        }
        b'l' => {
            kind = ArgKind::Int32;
            pos += 1;
            if peek(bytes, pos) == b'l' {
                kind = ArgKind::Int64;
                pos += 1;
            }
        }
        b'z' => {
            kind = size_kind();
            pos += 1;
        }
        _ => {}
    }

    let conversion = peek(bytes, pos);
    if conversion != 0 {
        pos += 1;
    }
    directive.conversion = conversion;
    directive.kind = match conversion {
        b'd' | b'i' | b'o' | b'u' | b'x' | b'X' | b'c' => kind,
        b'e' | b'f' | b'g' => ArgKind::Double,
        b's' => ArgKind::Str,
        b'n' => ArgKind::Count,
        b'p' => pointer_kind(),
        _ => ArgKind::Unknown,
    };
    (directive, pos)
}

fn peek(bytes: &[u8], pos: usize) -> u8 {
    if pos < bytes.len() {
        bytes[pos]
    } else {
        0
    }
}

fn eat_digits(bytes: &[u8], start: usize) -> (Option<usize>, usize) {
    let mut pos = start;
    let mut value = 0usize;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        value = value
            .saturating_mul(10)
            .saturating_add((bytes[pos] - b'0') as usize);
        pos += 1;
    }
    if pos == start {
        (None, pos)
    } else {
        (Some(value), pos)
    }
}

fn size_kind() -> ArgKind {
    match mem::size_of::<usize>() {
        4 => ArgKind::Int32,
        8 => ArgKind::Int64,
        _ => ArgKind::Unknown,
    }
}

fn pointer_kind() -> ArgKind {
    match mem::size_of::<*const ()>() {
        4 => ArgKind::UInt32,
        8 => ArgKind::UInt64,
        _ => ArgKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_has_no_kinds() {
        assert_eq!(analyze("no directives here"), Ok(Vec::new()));
        assert_eq!(analyze(""), Ok(Vec::new()));
    }

    #[test]
    fn literal_percent_consumes_nothing() {
        assert_eq!(analyze("100%% done"), Ok(Vec::new()));
        assert_eq!(analyze("%%%d"), Ok(vec![ArgKind::Int]));
        assert_eq!(analyze("%d%%"), Ok(vec![ArgKind::Int]));
    }

    #[test]
    fn basic_conversions() {
        assert_eq!(analyze("%d"), Ok(vec![ArgKind::Int]));
        assert_eq!(analyze("%i"), Ok(vec![ArgKind::Int]));
        assert_eq!(analyze("%u"), Ok(vec![ArgKind::Int]));
        assert_eq!(analyze("%x"), Ok(vec![ArgKind::Int]));
        assert_eq!(analyze("%s"), Ok(vec![ArgKind::Str]));
        assert_eq!(analyze("%f"), Ok(vec![ArgKind::Double]));
        assert_eq!(analyze("%e"), Ok(vec![ArgKind::Double]));
        assert_eq!(analyze("%g"), Ok(vec![ArgKind::Double]));
        assert_eq!(analyze("%c"), Ok(vec![ArgKind::Int]));
        assert_eq!(analyze("%n"), Ok(vec![ArgKind::Count]));
    }

    #[test]
    fn modifiers_select_integer_width() {
        assert_eq!(analyze("%hd"), Ok(vec![ArgKind::Int16]));
        assert_eq!(analyze("%hu"), Ok(vec![ArgKind::Int16]));
        assert_eq!(analyze("%ld"), Ok(vec![ArgKind::Int32]));
        assert_eq!(analyze("%lld"), Ok(vec![ArgKind::Int64]));
        assert_eq!(analyze("%Ld"), Ok(vec![ArgKind::Int64]));
        assert_eq!(analyze("%lx"), Ok(vec![ArgKind::Int32]));
    }

    #[test]
    fn size_modifier_follows_platform_width() {
        let expected = match std::mem::size_of::<usize>() {
            4 => ArgKind::Int32,
            _ => ArgKind::Int64,
        };
        assert_eq!(analyze("%zu"), Ok(vec![expected]));
    }

    #[test]
    fn pointer_kind_is_unsigned() {
        let expected = match std::mem::size_of::<*const ()>() {
            4 => ArgKind::UInt32,
            _ => ArgKind::UInt64,
        };
        assert_eq!(analyze("%p"), Ok(vec![expected]));
    }

    #[test]
    fn width_and_precision_are_skipped() {
        assert_eq!(analyze("%10d"), Ok(vec![ArgKind::Int]));
        assert_eq!(analyze("%04X"), Ok(vec![ArgKind::Int]));
        assert_eq!(analyze("%.0s"), Ok(vec![ArgKind::Str]));
        assert_eq!(analyze("%8.3f"), Ok(vec![ArgKind::Double]));
    }

    #[test]
    fn directive_order_is_preserved() {
        assert_eq!(
            analyze("%s at line %d, %u times (%.2f%%)"),
            Ok(vec![
                ArgKind::Str,
                ArgKind::Int,
                ArgKind::Int,
                ArgKind::Double
            ])
        );
    }

    #[test]
    fn star_width_fails() {
        assert_eq!(analyze("%*d"), Err(FormatError::IndirectWidth { at: 0 }));
        assert_eq!(
            analyze("ok %.*f"),
            Err(FormatError::IndirectWidth { at: 3 })
        );
    }

    #[test]
    fn unsupported_conversion_fails() {
        assert_eq!(
            analyze("%S"),
            Err(FormatError::UnsupportedConversion {
                conversion: 'S',
                at: 0
            })
        );
        assert_eq!(
            analyze("%d %C"),
            Err(FormatError::UnsupportedConversion {
                conversion: 'C',
                at: 3
            })
        );
        assert_eq!(
            analyze("%E"),
            Err(FormatError::UnsupportedConversion {
                conversion: 'E',
                at: 0
            })
        );
        assert_eq!(
            analyze("%q"),
            Err(FormatError::UnsupportedConversion {
                conversion: 'q',
                at: 0
            })
        );
    }

    #[test]
    fn mid_pattern_percent_is_not_a_literal() {
        // "%5%" is a width followed by a '%' conversion byte, not "%%".
        assert_eq!(
            analyze("%5%d"),
            Err(FormatError::UnsupportedConversion {
                conversion: '%',
                at: 0
            })
        );
    }

    #[test]
    fn trailing_percent_fails() {
        assert_eq!(
            analyze("oops %"),
            Err(FormatError::TruncatedDirective { at: 5 })
        );
        assert_eq!(
            analyze("%0"),
            Err(FormatError::TruncatedDirective { at: 0 })
        );
        assert_eq!(
            analyze("%l"),
            Err(FormatError::TruncatedDirective { at: 0 })
        );
    }

    #[test]
    fn failure_is_total() {
        // Valid directives before the bad one do not leak out.
        assert!(analyze("%s %d %S").is_err());
    }

    #[test]
    fn error_display() {
        let err = FormatError::UnsupportedConversion {
            conversion: 'S',
            at: 7,
        };
        assert_eq!(
            err.to_string(),
            "unsupported conversion character 'S' at byte 7"
        );
    }
}
