//! Report severity levels ordered from least to most severe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of a reported message.
///
/// Ordered from least severe (`Info`) to most severe (`Fatal`), matching the
/// derived `PartialOrd`/`Ord` implementation based on declaration order. The
/// level selects the prefix text (`"Warning: "`, `"Error: "`, ...) through the
/// language tables.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    /// Informational output about actions the engine took.
    Info,
    /// A markup problem that was repaired automatically.
    Warning,
    /// A problem with the engine configuration.
    Config,
    /// An accessibility-check finding.
    Access,
    /// A markup problem that could not be repaired.
    Error,
    /// The document is too broken to process further.
    BadDocument,
    /// An internal failure; processing stops.
    Fatal,
}

impl Severity {
    /// Every severity level, in ascending order.
    pub const ALL: &'static [Severity] = &[
        Severity::Info,
        Severity::Warning,
        Severity::Config,
        Severity::Access,
        Severity::Error,
        Severity::BadDocument,
        Severity::Fatal,
    ];

    /// Returns `true` for levels at or above [`Error`](Severity::Error).
    pub fn is_error(self) -> bool {
        self >= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Config => write!(f, "config"),
            Severity::Access => write!(f, "access"),
            Severity::Error => write!(f, "error"),
            Severity::BadDocument => write!(f, "document"),
            Severity::Fatal => write!(f, "panic"),
        }
    }
}
