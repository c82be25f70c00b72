//! Structured message records for Lintel.
//!
//! Reports flow through here on their way to the console or an embedding
//! application. A call site names a [`MessageCode`](lintel_locale::MessageCode),
//! a severity, and an argument list; this crate analyzes the code's format
//! pattern, captures the arguments as typed slots, renders the message in
//! the default language and the configured one, composes the console line,
//! and runs the application's veto hooks. The finished [`Message`] owns
//! everything it exposes.

#![warn(missing_docs)]

pub mod args;
pub mod context;
pub mod format;
pub mod hooks;
pub mod message;
pub mod render;

pub use args::{capture, ArgSlot, ArgsSnapshot, MessageArg, MessageArgs};
pub use context::{Position, Positioned, ReportContext};
pub use format::{analyze, ArgKind, FormatError};
pub use hooks::{HookChain, MessageCallback, ReportCallback, ReportFilter};
pub use message::Message;
pub use render::{render, MESSAGE_BUFFER_SIZE};
