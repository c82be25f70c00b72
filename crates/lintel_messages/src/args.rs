//! Message argument lists and the snapshot cursor that consumes them.
//!
//! Building one message record reads the caller's arguments several times:
//! once to capture typed slots, once per rendered language, and once more
//! if a structured callback wants the raw values. Each read goes through
//! its own [`ArgsSnapshot`], a cheap clonable cursor over the shared list,
//! so no pass disturbs another.

use crate::format::ArgKind;
use std::cell::Cell;
use std::rc::Rc;

/// One value supplied by a report call site.
///
/// Call sites usually build these through [`msg_args!`](crate::msg_args) and
/// the `From` impls rather than naming variants directly. Integers are held
/// at full width; the format pattern decides how much of the value a
/// directive actually consumes.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageArg {
    /// A signed integer of any width.
    Int(i64),
    /// An unsigned integer of any width.
    UInt(u64),
    /// A floating-point value.
    Double(f64),
    /// A string value.
    Str(String),
    /// A shared counter written by `%n` directives.
    Counter(Rc<Cell<usize>>),
}

impl MessageArg {
    fn as_int(&self) -> Option<i64> {
        match self {
            MessageArg::Int(value) => Some(*value),
            MessageArg::UInt(value) => Some(*value as i64),
            _ => None,
        }
    }

    fn as_uint(&self) -> Option<u64> {
        match self {
            MessageArg::Int(value) => Some(*value as u64),
            MessageArg::UInt(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<i16> for MessageArg {
    fn from(value: i16) -> MessageArg {
        MessageArg::Int(value as i64)
    }
}

impl From<i32> for MessageArg {
    fn from(value: i32) -> MessageArg {
        MessageArg::Int(value as i64)
    }
}

impl From<i64> for MessageArg {
    fn from(value: i64) -> MessageArg {
        MessageArg::Int(value)
    }
}

impl From<isize> for MessageArg {
    fn from(value: isize) -> MessageArg {
        MessageArg::Int(value as i64)
    }
}

impl From<u16> for MessageArg {
    fn from(value: u16) -> MessageArg {
        MessageArg::UInt(value as u64)
    }
}

impl From<u32> for MessageArg {
    fn from(value: u32) -> MessageArg {
        MessageArg::UInt(value as u64)
    }
}

impl From<u64> for MessageArg {
    fn from(value: u64) -> MessageArg {
        MessageArg::UInt(value)
    }
}

impl From<usize> for MessageArg {
    fn from(value: usize) -> MessageArg {
        MessageArg::UInt(value as u64)
    }
}

impl From<f32> for MessageArg {
    fn from(value: f32) -> MessageArg {
        MessageArg::Double(value as f64)
    }
}

impl From<f64> for MessageArg {
    fn from(value: f64) -> MessageArg {
        MessageArg::Double(value)
    }
}

impl From<char> for MessageArg {
    fn from(value: char) -> MessageArg {
        MessageArg::Int(value as i64)
    }
}

impl From<&str> for MessageArg {
    fn from(value: &str) -> MessageArg {
        MessageArg::Str(value.to_string())
    }
}

impl From<String> for MessageArg {
    fn from(value: String) -> MessageArg {
        MessageArg::Str(value)
    }
}

impl From<Rc<Cell<usize>>> for MessageArg {
    fn from(value: Rc<Cell<usize>>) -> MessageArg {
        MessageArg::Counter(value)
    }
}

/// The ordered argument list for one report call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageArgs {
    items: Vec<MessageArg>,
}

impl MessageArgs {
    /// An empty argument list.
    pub fn new() -> MessageArgs {
        MessageArgs { items: Vec::new() }
    }

    /// Appends one argument.
    pub fn push(&mut self, value: impl Into<MessageArg>) {
        self.items.push(value.into());
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Starts a fresh read of the list from the beginning.
    pub fn snapshot(&self) -> ArgsSnapshot<'_> {
        ArgsSnapshot {
            items: &self.items,
            cursor: 0,
        }
    }
}

impl From<Vec<MessageArg>> for MessageArgs {
    fn from(items: Vec<MessageArg>) -> MessageArgs {
        MessageArgs { items }
    }
}

impl FromIterator<MessageArg> for MessageArgs {
    fn from_iter<I: IntoIterator<Item = MessageArg>>(iter: I) -> MessageArgs {
        MessageArgs {
            items: iter.into_iter().collect(),
        }
    }
}

/// A read cursor over a [`MessageArgs`] list.
///
/// Cloning a snapshot clones only the cursor position; both copies walk the
/// same underlying list independently.
#[derive(Clone, Debug)]
pub struct ArgsSnapshot<'a> {
    items: &'a [MessageArg],
    cursor: usize,
}

impl<'a> ArgsSnapshot<'a> {
    /// Arguments not yet consumed by this cursor.
    pub fn remaining(&self) -> usize {
        self.items.len() - self.cursor
    }

    /// Consumes the next argument as `kind`.
    ///
    /// Integer kinds accept both signed and unsigned inputs; the value is
    /// reinterpreted at the kind's width, mirroring how a C varargs read
    /// truncates. `Double`, `Str`, and `Count` require a matching variant.
    /// Returns `None` when the list is exhausted or the value cannot
    /// satisfy the kind; the argument is consumed either way.
    pub fn take(&mut self, kind: ArgKind) -> Option<ArgSlot> {
        let arg = self.next()?;
        match kind {
            ArgKind::Int16 => Some(ArgSlot::Int16(arg.as_int()? as i32)),
            ArgKind::UInt16 => Some(ArgSlot::UInt16(arg.as_uint()? as u32)),
            ArgKind::Int => Some(ArgSlot::Int(arg.as_int()? as i32)),
            ArgKind::UInt => Some(ArgSlot::UInt(arg.as_uint()? as u32)),
            ArgKind::Int32 => Some(ArgSlot::Int32(arg.as_int()? as i32)),
            ArgKind::UInt32 => Some(ArgSlot::UInt32(arg.as_uint()? as u32)),
            ArgKind::Int64 => Some(ArgSlot::Int64(arg.as_int()?)),
            ArgKind::UInt64 => Some(ArgSlot::UInt64(arg.as_uint()?)),
            ArgKind::Double => match arg {
                MessageArg::Double(value) => Some(ArgSlot::Double(*value)),
                _ => None,
            },
            ArgKind::Str => match arg {
                MessageArg::Str(value) => Some(ArgSlot::Str(value.clone())),
                _ => None,
            },
            ArgKind::Count => match arg {
                MessageArg::Counter(cell) => Some(ArgSlot::Count(Rc::clone(cell))),
                _ => None,
            },
            ArgKind::WideStr | ArgKind::Unknown => None,
        }
    }
}

impl<'a> Iterator for ArgsSnapshot<'a> {
    type Item = &'a MessageArg;

    fn next(&mut self) -> Option<&'a MessageArg> {
        let item = self.items.get(self.cursor)?;
        self.cursor += 1;
        Some(item)
    }
}

/// One captured argument, stored at the width its directive consumes.
///
/// 16-bit kinds keep the integer-promoted value; rendering truncates to
/// 16 bits at the last moment, as a C `%hd` would.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgSlot {
    /// Captured for a 16-bit directive.
    Int16(i32),
    /// Captured for an unsigned 16-bit directive.
    UInt16(u32),
    /// Captured for a default-width directive.
    Int(i32),
    /// Captured for an unsigned default-width directive.
    UInt(u32),
    /// Captured for a 32-bit directive.
    Int32(i32),
    /// Captured for an unsigned 32-bit directive.
    UInt32(u32),
    /// Captured for a 64-bit directive.
    Int64(i64),
    /// Captured for an unsigned 64-bit directive.
    UInt64(u64),
    /// Captured for a floating-point directive.
    Double(f64),
    /// Captured for a string directive.
    Str(String),
    /// Captured for a `%n` counter directive.
    Count(Rc<Cell<usize>>),
}

impl ArgSlot {
    /// The kind this slot was captured as.
    pub fn kind(&self) -> ArgKind {
        match self {
            ArgSlot::Int16(_) => ArgKind::Int16,
            ArgSlot::UInt16(_) => ArgKind::UInt16,
            ArgSlot::Int(_) => ArgKind::Int,
            ArgSlot::UInt(_) => ArgKind::UInt,
            ArgSlot::Int32(_) => ArgKind::Int32,
            ArgSlot::UInt32(_) => ArgKind::UInt32,
            ArgSlot::Int64(_) => ArgKind::Int64,
            ArgSlot::UInt64(_) => ArgKind::UInt64,
            ArgSlot::Double(_) => ArgKind::Double,
            ArgSlot::Str(_) => ArgKind::Str,
            ArgSlot::Count(_) => ArgKind::Count,
        }
    }

    /// The string value, for string slots.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgSlot::Str(value) => Some(value),
            _ => None,
        }
    }

    /// The stored value, for signed integer slots.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArgSlot::Int16(value) | ArgSlot::Int(value) | ArgSlot::Int32(value) => {
                Some(*value as i64)
            }
            ArgSlot::Int64(value) => Some(*value),
            _ => None,
        }
    }

    /// The stored value, for unsigned integer slots.
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            ArgSlot::UInt16(value) | ArgSlot::UInt(value) | ArgSlot::UInt32(value) => {
                Some(*value as u64)
            }
            ArgSlot::UInt64(value) => Some(*value),
            _ => None,
        }
    }

    /// The floating-point value, for double slots.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            ArgSlot::Double(value) => Some(*value),
            _ => None,
        }
    }
}

/// Captures one slot per kind from a fresh snapshot.
///
/// Returns `None` if any argument is missing or cannot satisfy its kind;
/// a successful capture of an argument-free layout is `Some` of an empty
/// vector, which is distinct from failure.
pub fn capture(kinds: &[ArgKind], mut snapshot: ArgsSnapshot<'_>) -> Option<Vec<ArgSlot>> {
    let mut slots = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        slots.push(ArgsSnapshot::take(&mut snapshot, kind)?);
    }
    Some(slots)
}

/// Builds a [`MessageArgs`] list from values convertible to [`MessageArg`].
///
/// ```
/// use lintel_messages::msg_args;
///
/// let args = msg_args!["form", 12u32];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! msg_args {
    () => {
        $crate::args::MessageArgs::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::args::MessageArgs::from(vec![
            $($crate::args::MessageArg::from($value)),+
        ])
    };
}
