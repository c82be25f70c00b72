//! The environment a message record is built against.
//!
//! [`ReportContext`] is the seam between this crate and the engine that
//! owns configuration and scanner state. Every method has a default, so a
//! bare `struct Ctx; impl ReportContext for Ctx {}` is a valid context
//! that renders untranslated messages with no location and no hooks.

use crate::hooks::HookChain;
use lintel_locale::Language;
use serde::{Deserialize, Serialize};

/// A line and column in the source document, both 1-based.
///
/// Zero in either field means the location is unknown. An unknown position
/// still renders (`"line 0 column 0 - "`) but is swallowed when output is
/// composed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line, 0 when unknown.
    pub line: u32,
    /// 1-based column, 0 when unknown.
    pub column: u32,
}

impl Default for Position {
    fn default() -> Position {
        Position::UNKNOWN
    }
}

impl Position {
    /// The unknown position.
    pub const UNKNOWN: Position = Position { line: 0, column: 0 };

    /// Builds a position.
    pub fn new(line: u32, column: u32) -> Position {
        Position { line, column }
    }

    /// Whether both line and column are known.
    pub fn is_known(self) -> bool {
        self.line > 0 && self.column > 0
    }
}

/// Anything that knows where it sits in the source document.
///
/// Parse-tree nodes implement this so reports can point at the node
/// rather than at wherever the scanner happens to be.
pub trait Positioned {
    /// The source position of this value.
    fn position(&self) -> Position;
}

/// The engine state consulted while building one message record.
pub trait ReportContext {
    /// The configured output language. Defaults to English.
    fn language(&self) -> &'static Language {
        Language::english()
    }

    /// Where the scanner currently is. Defaults to unknown.
    fn scan_position(&self) -> Position {
        Position::UNKNOWN
    }

    /// Whether editor-style `file:line:column:` positions are requested.
    fn editor_mode(&self) -> bool {
        false
    }

    /// The file name for editor-style positions.
    ///
    /// Editor-style output needs both [`editor_mode`](Self::editor_mode)
    /// and a file name; either one alone leaves the standard template in
    /// effect.
    fn editor_file(&self) -> Option<&str> {
        None
    }

    /// The filter chain applied to finished records. Defaults to none.
    fn hooks(&self) -> Option<&HookChain> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl ReportContext for Bare {}

    #[test]
    fn defaults_are_inert() {
        let ctx = Bare;
        assert_eq!(ctx.language().tag(), "en");
        assert_eq!(ctx.scan_position(), Position::UNKNOWN);
        assert!(!ctx.editor_mode());
        assert!(ctx.editor_file().is_none());
        assert!(ctx.hooks().is_none());
    }

    #[test]
    fn position_known() {
        assert!(Position::new(3, 1).is_known());
        assert!(!Position::new(0, 5).is_known());
        assert!(!Position::new(5, 0).is_known());
        assert!(!Position::UNKNOWN.is_known());
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&Position::new(12, 34)).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Position::new(12, 34));
    }
}
