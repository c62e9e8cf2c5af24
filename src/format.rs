/// Renders a resistance the way it is printed on a parts list: `470Ω`, `4.7kΩ`, `1MΩ`.
///
/// Kilo and mega values keep one decimal, dropped when it is zero. Plain ohms are rounded to a
/// whole number.
/// # Examples
/// ```
///     # use divider_calc::format_resistance;
///     assert_eq!(format_resistance(999.0), "999Ω");
///     assert_eq!(format_resistance(1500.0), "1.5kΩ");
///     assert_eq!(format_resistance(2_500_000.0), "2.5MΩ");
/// ```
pub fn format_resistance(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{}MΩ", tenths(value / 1_000_000.0))
    } else if value >= 1000.0 {
        format!("{}kΩ", tenths(value / 1000.0))
    } else {
        format!("{}Ω", fixed(value, 0))
    }
}

fn tenths(value: f64) -> String {
    let val = fixed(value, 1);
    match val.strip_suffix(".0") {
        Some(whole) => whole.to_owned(),
        None => val,
    }
}

// Enough fraction digits to print any finite f64 exactly.
const EXACT_DIGITS: usize = 1100;

/// Formats `value` with `digits` decimals, rounding the exact decimal value of the double. A value
/// sitting exactly on a half rounds away from zero, so `0.25` gives `0.3` where `{:.1}` gives `0.2`.
pub(crate) fn fixed(value: f64, digits: usize) -> String {
    if value.is_finite() && is_half(value.abs(), digits) {
        let above = f64::from_bits(value.abs().to_bits() + 1);
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{:.*}", sign, digits, above);
    }
    format!("{:.*}", digits, value)
}

/// True when the fraction of `magnitude` past `digits` places is exactly one half.
fn is_half(magnitude: f64, digits: usize) -> bool {
    if digits >= EXACT_DIGITS {
        return false;
    }
    let exact = format!("{:.*}", EXACT_DIGITS, magnitude);
    match exact.split_once('.') {
        Some((_, frac)) => {
            let rest = &frac[digits..];
            rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0')
        }
        None => false,
    }
}
