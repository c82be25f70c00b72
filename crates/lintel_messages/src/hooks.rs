//! Application-supplied veto hooks.
//!
//! Up to three hooks inspect every finished record, in a fixed order: the
//! plain-text filter, the structured callback, and the whole-record
//! callback. Each returns whether the record should be reported, and the
//! results are ANDed into the record's `allowed` flag. Every installed
//! hook runs even after an earlier veto, so hooks that count or mirror
//! messages see the full stream.

use crate::args::{ArgsSnapshot, MessageArgs};
use crate::message::Message;
use lintel_locale::Severity;
use std::fmt;

/// Sees the finished console text. Returns `false` to veto.
pub type ReportFilter = dyn Fn(Severity, u32, u32, &str) -> bool;

/// Sees the stable key and the raw argument values. Returns `false` to veto.
pub type ReportCallback = dyn Fn(Severity, u32, u32, &str, ArgsSnapshot<'_>) -> bool;

/// Sees the whole record, including the `allowed` flag accumulated from
/// earlier hooks. Returns `false` to veto.
pub type MessageCallback = dyn Fn(&Message) -> bool;

/// The ordered set of installed hooks.
#[derive(Default)]
pub struct HookChain {
    report_filter: Option<Box<ReportFilter>>,
    report_callback: Option<Box<ReportCallback>>,
    message_callback: Option<Box<MessageCallback>>,
}

impl HookChain {
    /// A chain with no hooks installed.
    pub fn new() -> HookChain {
        HookChain::default()
    }

    /// Installs the plain-text filter.
    pub fn with_report_filter(
        mut self,
        filter: impl Fn(Severity, u32, u32, &str) -> bool + 'static,
    ) -> HookChain {
        self.report_filter = Some(Box::new(filter));
        self
    }

    /// Installs the structured callback.
    pub fn with_report_callback(
        mut self,
        callback: impl Fn(Severity, u32, u32, &str, ArgsSnapshot<'_>) -> bool + 'static,
    ) -> HookChain {
        self.report_callback = Some(Box::new(callback));
        self
    }

    /// Installs the whole-record callback.
    pub fn with_message_callback(
        mut self,
        callback: impl Fn(&Message) -> bool + 'static,
    ) -> HookChain {
        self.message_callback = Some(Box::new(callback));
        self
    }

    /// Whether no hooks are installed.
    pub fn is_empty(&self) -> bool {
        self.report_filter.is_none()
            && self.report_callback.is_none()
            && self.message_callback.is_none()
    }

    /// Runs every installed hook against a finished record, folding each
    /// verdict into `message.allowed`.
    pub(crate) fn apply(&self, message: &mut Message, args: &MessageArgs) {
        if let Some(filter) = &self.report_filter {
            let keep = filter(
                message.level(),
                message.line(),
                message.column(),
                message.output(),
            );
            message.allowed &= keep;
        }
        if let Some(callback) = &self.report_callback {
            let keep = callback(
                message.level(),
                message.line(),
                message.column(),
                message.key(),
                args.snapshot(),
            );
            message.allowed &= keep;
        }
        if let Some(callback) = &self.message_callback {
            let keep = callback(message);
            message.allowed &= keep;
        }
    }
}

impl fmt::Debug for HookChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookChain")
            .field("report_filter", &self.report_filter.is_some())
            .field("report_callback", &self.report_callback.is_some())
            .field("message_callback", &self.message_callback.is_some())
            .finish()
    }
}
