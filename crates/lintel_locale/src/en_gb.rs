//! British English overrides. Only entries whose spelling differs from the
//! base table appear here; everything else falls back.
//!
//! Overrides must keep the same directives in the same order as the base
//! pattern, because argument capture is driven by the base pattern alone.

use crate::code::MessageCode;
use crate::language::Language;

pub(crate) static EN_GB: Language = Language::new(
    "en_gb",
    &[
        (
            MessageCode::UnknownElement,
            "%s is not a recognised element",
        ),
        (
            MessageCode::InvalidColorValue,
            "\"%s\" is not a valid colour value",
        ),
    ],
    &[],
    None,
);
