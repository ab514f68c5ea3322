//! Display formatting for operand strings.

use super::operand::parse_number;

/// Format an operand string for the primary display.
///
/// The integer part is grouped with commas every three digits and loses any
/// fractional contribution; an unparseable integer part renders as nothing.
/// Whatever follows the decimal point is reattached verbatim, so `"12."`
/// stays `"12."` while the user is still typing.
pub fn format_for_display(operand: &str) -> String {
    let (integer, fraction) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };

    let integer_display = parse_number(integer)
        .map(|value| group_thousands(value.trunc()))
        .unwrap_or_default();

    match fraction {
        Some(fraction) => format!("{integer_display}.{fraction}"),
        None => integer_display,
    }
}

/// Render a whole number with English thousands separators.
pub fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value.is_sign_negative() {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
