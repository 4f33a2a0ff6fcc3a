//! Line rendering for the overdue log.
//!
//! The recorded value is the *negation* of the reported `overdueTime`: a
//! speaker reported as 12 seconds over is written as `-12`. Existing log
//! consumers depend on that sign, so it is reproduced exactly.

use serde_json::Number;

use crate::overdue::types::OverdueEvent;

/// Render the full, newline-terminated record for an event.
pub fn render_line(event: &OverdueEvent) -> String {
    format!(
        "{} exceeded time by {} seconds\n",
        event.name,
        negated(&event.overdue_time)
    )
}

/// Negate a JSON number and render it.
///
/// Integer literals are negated as text, so any magnitude the client sends is
/// written back digit for digit (`-0` and `0` both become `0`). Floats keep
/// their decimal point (`3.0` stays `-3.0`) and use a signed, two-digit
/// exponent in scientific form.
pub fn negated(value: &Number) -> String {
    let text = value.to_string();
    if !text.contains(['.', 'e', 'E']) {
        return negate_integer(&text);
    }
    match value.as_f64() {
        Some(f) => render_float(-f),
        None => format!("-{}", text),
    }
}

fn negate_integer(text: &str) -> String {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text),
    };
    if digits.bytes().all(|b| b == b'0') {
        "0".to_string()
    } else if negative {
        digits.to_string()
    } else {
        format!("-{}", digits)
    }
}

fn render_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Debug gives the shortest round-trip form and switches to scientific
    // notation at the same magnitudes (< 1e-4, >= 1e16).
    let repr = format!("{:?}", f);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}
