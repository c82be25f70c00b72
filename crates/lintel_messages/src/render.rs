//! Renders a format pattern against captured arguments.
//!
//! Rendering never fails. A pattern whose analysis failed, a slot past the
//! end of the layout, or an argument that cannot satisfy its kind all
//! degrade to an empty substitution for that directive while the rest of
//! the pattern still renders. Output is capped at [`MESSAGE_BUFFER_SIZE`]
//! bytes, truncating on a character boundary.

use crate::args::{ArgSlot, ArgsSnapshot};
use crate::format::{parse_directive, ArgKind, Directive};

/// Upper bound, in bytes, on one rendered string.
pub const MESSAGE_BUFFER_SIZE: usize = 2048;

/// Renders `pattern`, substituting arguments drawn from `args`.
///
/// `kinds` is the layout from analyzing the default-language pattern, or
/// `None` when that analysis failed; with no layout every directive
/// renders as empty and the literal text still comes through. The cursor
/// is consumed by this call, so each rendering pass gets its own snapshot.
pub fn render(pattern: &str, kinds: Option<&[ArgKind]>, mut args: ArgsSnapshot<'_>) -> String {
    let bytes = pattern.as_bytes();
    let mut out = String::new();
    let mut pos = 0usize;
    let mut literal_start = 0usize;
    let mut slot = 0usize;
    while pos < bytes.len() {
        if bytes[pos] != b'%' {
            pos += 1;
            continue;
        }
        push_bounded(&mut out, &pattern[literal_start..pos]);
        if pos + 1 < bytes.len() && bytes[pos + 1] == b'%' {
            push_bounded(&mut out, "%");
            pos += 2;
            literal_start = pos;
            continue;
        }
        let (directive, next) = parse_directive(bytes, pos + 1);
        render_directive(&mut out, &directive, kinds, slot, &mut args);
        slot += 1;
        pos = next;
        literal_start = pos;
    }
    push_bounded(&mut out, &pattern[literal_start..]);
    out
}

fn render_directive(
    out: &mut String,
    directive: &Directive,
    kinds: Option<&[ArgKind]>,
    slot: usize,
    args: &mut ArgsSnapshot<'_>,
) {
    // No layout, a directive beyond the layout, or an unsatisfiable
    // argument: substitute nothing and keep going.
    let Some(kinds) = kinds else { return };
    let Some(&kind) = kinds.get(slot) else { return };
    let Some(value) = args.take(kind) else { return };
    if directive.conversion == 0 || directive.star_width || directive.star_precision {
        return;
    }
    if let ArgSlot::Count(cell) = &value {
        cell.set(out.len());
        return;
    }
    push_bounded(out, &format_value(directive, &value));
}

fn format_value(directive: &Directive, value: &ArgSlot) -> String {
    match directive.conversion {
        b'd' | b'i' => int_string(signed(value).to_string(), directive),
        b'u' => int_string(unsigned(value).to_string(), directive),
        b'o' => int_string(format!("{:o}", unsigned(value)), directive),
        b'x' => int_string(format!("{:x}", unsigned(value)), directive),
        b'X' => int_string(format!("{:X}", unsigned(value)), directive),
        b'p' => pad_number(format!("0x{:x}", unsigned(value)), directive),
        b'e' | b'f' | b'g' => pad_number(float_string(directive, double(value)), directive),
        b'c' => pad_text(char_string(value), directive),
        b's' => pad_text(string_value(value, directive.precision), directive),
        _ => String::new(),
    }
}

/// Reads the slot as a signed value at the width its kind implies, so an
/// unsigned bit pattern prints the way C's `%d` would print it.
fn signed(value: &ArgSlot) -> i64 {
    match value {
        ArgSlot::Int16(v) => *v as i16 as i64,
        ArgSlot::UInt16(v) => *v as u16 as i16 as i64,
        ArgSlot::Int(v) | ArgSlot::Int32(v) => *v as i64,
        ArgSlot::UInt(v) | ArgSlot::UInt32(v) => *v as i32 as i64,
        ArgSlot::Int64(v) => *v,
        ArgSlot::UInt64(v) => *v as i64,
        ArgSlot::Double(v) => *v as i64,
        ArgSlot::Str(_) | ArgSlot::Count(_) => 0,
    }
}

/// Reads the slot as an unsigned value at the width its kind implies, so
/// `%x` of a negative 16-bit value prints `ffff` rather than a 64-bit
/// sign extension.
fn unsigned(value: &ArgSlot) -> u64 {
    match value {
        ArgSlot::Int16(v) => *v as i16 as u16 as u64,
        ArgSlot::UInt16(v) => *v as u16 as u64,
        ArgSlot::Int(v) | ArgSlot::Int32(v) => *v as u32 as u64,
        ArgSlot::UInt(v) | ArgSlot::UInt32(v) => *v as u64,
        ArgSlot::Int64(v) => *v as u64,
        ArgSlot::UInt64(v) => *v,
        ArgSlot::Double(v) => *v as u64,
        ArgSlot::Str(_) | ArgSlot::Count(_) => 0,
    }
}

fn double(value: &ArgSlot) -> f64 {
    match value {
        ArgSlot::Double(v) => *v,
        _ => 0.0,
    }
}

fn char_string(value: &ArgSlot) -> String {
    char::from_u32(unsigned(value) as u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
        .to_string()
}

fn string_value(value: &ArgSlot, precision: Option<usize>) -> String {
    let ArgSlot::Str(text) = value else {
        return String::new();
    };
    match precision {
        Some(limit) => text.chars().take(limit).collect(),
        None => text.clone(),
    }
}

fn float_string(directive: &Directive, value: f64) -> String {
    if !value.is_finite() {
        if value.is_nan() {
            return "nan".to_string();
        }
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    let precision = directive.precision.unwrap_or(6);
    match directive.conversion {
        b'f' => format!("{value:.precision$}"),
        b'e' => exponential(value, precision),
        _ => shortest(value, precision),
    }
}

/// `{:e}` writes a bare exponent (`1.5e2`); C wants a sign and at least
/// two digits (`1.5e+02`).
fn exponential(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
        None => formatted,
    }
}

/// The `%g` rules: `precision` significant digits, exponential form for
/// very small or very large magnitudes, trailing fraction zeros dropped.
fn shortest(value: f64, precision: usize) -> String {
    let significant = precision.max(1);
    let exponent = if value == 0.0 {
        0
    } else {
        value.abs().log10().floor() as i32
    };
    let formatted = if exponent < -4 || exponent >= significant as i32 {
        exponential(value, significant - 1)
    } else {
        let decimals = (significant as i32 - 1 - exponent).max(0) as usize;
        format!("{value:.decimals$}")
    };
    strip_fraction_zeros(&formatted)
}

fn strip_fraction_zeros(text: &str) -> String {
    fn trim(mantissa: &str) -> &str {
        if mantissa.contains('.') {
            mantissa.trim_end_matches('0').trim_end_matches('.')
        } else {
            mantissa
        }
    }
    match text.split_once('e') {
        Some((mantissa, exponent)) => format!("{}e{}", trim(mantissa), exponent),
        None => trim(text).to_string(),
    }
}

/// Applies precision (minimum digits) and width to an integer body.
fn int_string(digits: String, directive: &Directive) -> String {
    pad_number(zero_extend(digits, directive.precision), directive)
}

fn zero_extend(digits: String, precision: Option<usize>) -> String {
    let Some(minimum) = precision else {
        return digits;
    };
    let (sign, body) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.as_str()),
    };
    if body.len() >= minimum {
        return digits;
    }
    format!("{sign}{}{body}", "0".repeat(minimum - body.len()))
}

fn pad_number(body: String, directive: &Directive) -> String {
    let Some(width) = directive.width else {
        return body;
    };
    let length = body.chars().count();
    if length >= width {
        return body;
    }
    let fill = width - length;
    if directive.zero_pad {
        // Zero padding goes between the sign and the digits.
        if let Some(rest) = body.strip_prefix('-') {
            return format!("-{}{rest}", "0".repeat(fill));
        }
        return format!("{}{body}", "0".repeat(fill));
    }
    format!("{}{body}", " ".repeat(fill))
}

fn pad_text(text: String, directive: &Directive) -> String {
    let Some(width) = directive.width else {
        return text;
    };
    let length = text.chars().count();
    if length >= width {
        return text;
    }
    format!("{}{text}", " ".repeat(width - length))
}

/// Appends as much of `text` as fits under the buffer cap, never
/// splitting a character.
fn push_bounded(out: &mut String, text: &str) {
    if out.len() + text.len() <= MESSAGE_BUFFER_SIZE {
        out.push_str(text);
        return;
    }
    for ch in text.chars() {
        if out.len() + ch.len_utf8() > MESSAGE_BUFFER_SIZE {
            break;
        }
        out.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::analyze;
    use crate::msg_args;
    use std::cell::Cell;
    use std::rc::Rc;

    fn run(pattern: &str, args: &crate::args::MessageArgs) -> String {
        let kinds = analyze(pattern).expect("test pattern must analyze");
        render(pattern, Some(&kinds), args.snapshot())
    }

    #[test]
    fn literal_text_passes_through() {
        assert_eq!(run("plain text", &msg_args![]), "plain text");
        assert_eq!(run("", &msg_args![]), "");
    }

    #[test]
    fn percent_escape() {
        assert_eq!(run("100%% done", &msg_args![]), "100% done");
        assert_eq!(run("%d%%", &msg_args![50]), "50%");
    }

    #[test]
    fn signed_integers() {
        assert_eq!(run("%d", &msg_args![42]), "42");
        assert_eq!(run("%d", &msg_args![-7]), "-7");
        assert_eq!(run("%i", &msg_args![0]), "0");
    }

    #[test]
    fn unsigned_prints_the_bit_pattern() {
        assert_eq!(run("%u", &msg_args![-1]), "4294967295");
        assert_eq!(run("%x", &msg_args![255]), "ff");
        assert_eq!(run("%X", &msg_args![255]), "FF");
        assert_eq!(run("%o", &msg_args![8]), "10");
    }

    #[test]
    fn negative_through_signed_view_of_unsigned_input() {
        assert_eq!(run("%d", &msg_args![u32::MAX]), "-1");
    }

    #[test]
    fn sixteen_bit_truncation_happens_at_render() {
        // 70000 wraps to 4464 in 16 bits.
        assert_eq!(run("%hd", &msg_args![70000]), "4464");
        assert_eq!(run("%hx", &msg_args![-1]), "ffff");
    }

    #[test]
    fn sixty_four_bit_values() {
        assert_eq!(
            run("%lld", &msg_args![i64::MIN]),
            i64::MIN.to_string()
        );
        assert_eq!(run("%llx", &msg_args![-1i64]), "ffffffffffffffff");
    }

    #[test]
    fn width_and_zero_pad() {
        assert_eq!(run("%5d", &msg_args![42]), "   42");
        assert_eq!(run("%05d", &msg_args![42]), "00042");
        assert_eq!(run("%05d", &msg_args![-42]), "-0042");
        assert_eq!(run("%2d", &msg_args![12345]), "12345");
        assert_eq!(run("%04X", &msg_args![0xD800]), "D800");
        assert_eq!(run("%04X", &msg_args![0xA]), "000A");
    }

    #[test]
    fn integer_precision_sets_minimum_digits() {
        assert_eq!(run("%.3d", &msg_args![5]), "005");
        assert_eq!(run("%6.3d", &msg_args![5]), "   005");
    }

    #[test]
    fn character_conversion() {
        assert_eq!(run("%c", &msg_args!['A']), "A");
        assert_eq!(run("%c", &msg_args![0x263A]), "\u{263A}");
        // An unpaired surrogate value falls back to the replacement char.
        assert_eq!(run("%c", &msg_args![0xD800]), "\u{FFFD}");
    }

    #[test]
    fn string_conversion() {
        assert_eq!(run("<%s>", &msg_args!["table"]), "<table>");
        assert_eq!(run("%8s", &msg_args!["abc"]), "     abc");
        assert_eq!(run("%.2s", &msg_args!["abcdef"]), "ab");
        // Zero precision swallows the value entirely.
        assert_eq!(run("%.0sX", &msg_args!["abcdef"]), "X");
    }

    #[test]
    fn float_conversions() {
        assert_eq!(run("%f", &msg_args![1.5]), "1.500000");
        assert_eq!(run("%.2f", &msg_args![2.5]), "2.50");
        assert_eq!(run("%.0f", &msg_args![2.75]), "3");
        assert_eq!(run("%e", &msg_args![1500.0]), "1.500000e+03");
        assert_eq!(run("%.1e", &msg_args![0.00025]), "2.5e-04");
    }

    #[test]
    fn shortest_float_form() {
        assert_eq!(run("%g", &msg_args![1500.0]), "1500");
        assert_eq!(run("%g", &msg_args![0.0001]), "0.0001");
        assert_eq!(run("%g", &msg_args![0.00001]), "1e-05");
        assert_eq!(run("%g", &msg_args![1.5e10]), "1.5e+10");
        assert_eq!(run("%g", &msg_args![0.0]), "0");
    }

    #[test]
    fn non_finite_floats() {
        assert_eq!(run("%f", &msg_args![f64::INFINITY]), "inf");
        assert_eq!(run("%f", &msg_args![f64::NEG_INFINITY]), "-inf");
        assert_eq!(run("%f", &msg_args![f64::NAN]), "nan");
    }

    #[test]
    fn pointer_form() {
        let kinds = analyze("%p").unwrap();
        let args = msg_args![0x1000usize];
        assert_eq!(render("%p", Some(&kinds), args.snapshot()), "0x1000");
    }

    #[test]
    fn count_directive_records_output_length() {
        let counter = Rc::new(Cell::new(usize::MAX));
        let args = msg_args!["abc", Rc::clone(&counter), 7];
        let kinds = analyze("%s:%n%d").unwrap();
        assert_eq!(render("%s:%n%d", Some(&kinds), args.snapshot()), "abc:7");
        // The counter saw the length at the point of the directive.
        assert_eq!(counter.get(), 4);
    }

    #[test]
    fn missing_layout_renders_literals_only() {
        let args = msg_args!["tag"];
        assert_eq!(render("bad %s here", None, args.snapshot()), "bad  here");
        assert_eq!(render("no args %d", None, args.snapshot()), "no args ");
    }

    #[test]
    fn layout_shorter_than_pattern_degrades_per_directive() {
        // A localized pattern with an extra directive renders it empty.
        let kinds = analyze("%s").unwrap();
        let args = msg_args!["one"];
        assert_eq!(
            render("%s and %s", Some(&kinds), args.snapshot()),
            "one and "
        );
    }

    #[test]
    fn unsatisfiable_argument_renders_empty() {
        let kinds = analyze("%s%d").unwrap();
        let args = msg_args![9, 9];
        // First directive wants a string but sees an integer.
        assert_eq!(render("[%s][%d]", Some(&kinds), args.snapshot()), "[][9]");
    }

    #[test]
    fn output_is_capped_on_a_char_boundary() {
        let long = "x".repeat(MESSAGE_BUFFER_SIZE + 100);
        let args = msg_args![long.as_str()];
        let out = run("%s", &args);
        assert_eq!(out.len(), MESSAGE_BUFFER_SIZE);

        // Multibyte characters are dropped whole at the cap.
        let wide = "\u{00E9}".repeat(MESSAGE_BUFFER_SIZE);
        let args = msg_args![wide.as_str()];
        let out = run("a%s", &args);
        assert!(out.len() <= MESSAGE_BUFFER_SIZE);
        assert_eq!(out.len(), MESSAGE_BUFFER_SIZE - 1);
        assert!(out.is_char_boundary(out.len()));
    }

    #[test]
    fn literal_tail_after_cap_is_dropped() {
        let long = "y".repeat(MESSAGE_BUFFER_SIZE);
        let args = msg_args![long.as_str()];
        let out = run("%s tail", &args);
        assert_eq!(out.len(), MESSAGE_BUFFER_SIZE);
        assert!(out.ends_with('y'));
    }

    #[test]
    fn huge_width_is_capped() {
        let out = run("%3000d", &msg_args![1]);
        assert_eq!(out.len(), MESSAGE_BUFFER_SIZE);
    }
}
