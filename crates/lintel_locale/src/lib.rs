//! Message codes, severities, and localized string tables for Lintel.
//!
//! This crate is pure data: the stable identifiers every report carries,
//! the printf-style patterns they render through, and the per-locale
//! override tables. Rendering itself lives in `lintel_messages`.

#![warn(missing_docs)]

pub mod code;
pub mod language;
pub mod severity;

mod en;
mod en_gb;

pub use code::MessageCode;
pub use language::{
    default_line_column, default_prefix, default_string, Language, LanguageError,
};
pub use severity::Severity;
