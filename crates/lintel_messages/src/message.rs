//! The message record: one report, fully rendered at construction.
//!
//! A [`Message`] is built in a single pass and never mutated afterwards
//! except by the hook chain folding into its `allowed` flag. Every string
//! a consumer could want is rendered eagerly, in both the default language
//! and the configured one, so records can outlive the context and the
//! argument list they were built from.

use crate::args::{capture, ArgSlot, MessageArgs};
use crate::context::{Position, Positioned, ReportContext};
use crate::format::analyze;
use crate::msg_args;
use crate::render::render;
use lintel_locale::{default_line_column, default_prefix, default_string, MessageCode, Severity};

/// Editor-style position template. Identical in every language so that
/// editors can parse it.
const EDITOR_POSITION: &str = "%s:%d:%d: ";

/// Composition of position, prefix, and message when the position is known.
const COMPOSE_KNOWN: &str = "%s%s%s";

/// Composition when the position is unknown; the zero-precision directive
/// swallows the position string.
const COMPOSE_UNKNOWN: &str = "%.0s%s%s";

/// One finished report.
///
/// Paired fields hold the default-language (English) and configured-
/// language renderings side by side; when the configured language is
/// English the pairs are equal. `output`/`output_default` are the full
/// console lines, position and prefix included.
#[derive(Clone, Debug)]
pub struct Message {
    code: MessageCode,
    level: Severity,
    line: u32,
    column: u32,
    key: &'static str,
    arguments: Option<Vec<ArgSlot>>,
    format_default: &'static str,
    format: &'static str,
    message_default: String,
    message: String,
    position_default: String,
    position: String,
    prefix_default: &'static str,
    prefix: &'static str,
    output_default: String,
    output: String,
    pub(crate) allowed: bool,
}

impl Message {
    /// Builds a record with no position.
    pub fn new(
        ctx: &dyn ReportContext,
        code: MessageCode,
        level: Severity,
        args: &MessageArgs,
    ) -> Message {
        Message::build(ctx, Position::UNKNOWN, code, level, args)
    }

    /// Builds a record located at `node`, or at the scanner position when
    /// no node is given.
    pub fn at_node(
        ctx: &dyn ReportContext,
        node: Option<&dyn Positioned>,
        code: MessageCode,
        level: Severity,
        args: &MessageArgs,
    ) -> Message {
        let position = match node {
            Some(node) => node.position(),
            None => ctx.scan_position(),
        };
        Message::build(ctx, position, code, level, args)
    }

    /// Builds a record located wherever the scanner currently is.
    pub fn at_scan_position(
        ctx: &dyn ReportContext,
        code: MessageCode,
        level: Severity,
        args: &MessageArgs,
    ) -> Message {
        Message::build(ctx, ctx.scan_position(), code, level, args)
    }

    fn build(
        ctx: &dyn ReportContext,
        position: Position,
        code: MessageCode,
        level: Severity,
        args: &MessageArgs,
    ) -> Message {
        let language = ctx.language();

        let format_default = default_string(code);
        let format = language.string(code);

        // The default-language pattern alone decides the argument layout;
        // translations must keep the same directives in the same order.
        let layout = analyze(format_default).ok();
        let arguments = layout
            .as_ref()
            .and_then(|kinds| capture(kinds, args.snapshot()));

        let message_default = render(format_default, layout.as_deref(), args.snapshot());
        let message = render(format, layout.as_deref(), args.snapshot());

        let (position_default, position_text) = position_strings(ctx, position);

        let prefix_default = default_prefix(level);
        let prefix = language.prefix(level);

        // An unknown position is still rendered above but swallowed here.
        let compose = if position.is_known() {
            COMPOSE_KNOWN
        } else {
            COMPOSE_UNKNOWN
        };
        let compose_layout = analyze(compose).ok();
        let output_default = {
            let pieces = msg_args![
                position_default.as_str(),
                prefix_default,
                message_default.as_str()
            ];
            render(compose, compose_layout.as_deref(), pieces.snapshot())
        };
        let output = {
            let pieces = msg_args![position_text.as_str(), prefix, message.as_str()];
            render(compose, compose_layout.as_deref(), pieces.snapshot())
        };

        let mut record = Message {
            code,
            level,
            line: position.line,
            column: position.column,
            key: code.key(),
            arguments,
            format_default,
            format,
            message_default,
            message,
            position_default,
            position: position_text,
            prefix_default,
            prefix,
            output_default,
            output,
            allowed: true,
        };
        if let Some(hooks) = ctx.hooks() {
            hooks.apply(&mut record, args);
        }
        record
    }

    /// The code this record was built from.
    pub fn code(&self) -> MessageCode {
        self.code
    }

    /// The stable string key for the code.
    pub fn key(&self) -> &str {
        self.key
    }

    /// The severity level.
    pub fn level(&self) -> Severity {
        self.level
    }

    /// 1-based line, 0 when unknown.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column, 0 when unknown.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The default-language format pattern.
    pub fn format_default(&self) -> &str {
        self.format_default
    }

    /// The configured-language format pattern.
    pub fn format(&self) -> &str {
        self.format
    }

    /// The rendered default-language message body.
    pub fn message_default(&self) -> &str {
        &self.message_default
    }

    /// The rendered configured-language message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The rendered default-language position string.
    ///
    /// Always populated, even for an unknown position; whether it appears
    /// in [`output`](Self::output) is decided at composition time.
    pub fn position_default(&self) -> &str {
        &self.position_default
    }

    /// The rendered configured-language position string.
    pub fn position(&self) -> &str {
        &self.position
    }

    /// The default-language severity prefix, e.g. `"Warning: "`.
    pub fn prefix_default(&self) -> &str {
        self.prefix_default
    }

    /// The configured-language severity prefix.
    pub fn prefix(&self) -> &str {
        self.prefix
    }

    /// The full default-language console line.
    pub fn output_default(&self) -> &str {
        &self.output_default
    }

    /// The full configured-language console line.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// The captured arguments, or `None` when the pattern failed analysis
    /// or the arguments could not satisfy it. A directive-free pattern
    /// captures an empty slice.
    pub fn arguments(&self) -> Option<&[ArgSlot]> {
        self.arguments.as_deref()
    }

    /// Whether every hook agreed to report this record.
    pub fn allowed(&self) -> bool {
        self.allowed
    }
}

fn position_strings(ctx: &dyn ReportContext, position: Position) -> (String, String) {
    let Position { line, column } = position;
    if ctx.editor_mode() {
        if let Some(file) = ctx.editor_file() {
            let layout = analyze(EDITOR_POSITION).ok();
            let pieces = msg_args![file, line, column];
            let rendered = render(EDITOR_POSITION, layout.as_deref(), pieces.snapshot());
            return (rendered.clone(), rendered);
        }
    }
    let default_template = default_line_column();
    let local_template = ctx.language().line_column();
    let layout = analyze(default_template).ok();
    let pieces = msg_args![line, column];
    (
        render(default_template, layout.as_deref(), pieces.snapshot()),
        render(local_template, layout.as_deref(), pieces.snapshot()),
    )
}
