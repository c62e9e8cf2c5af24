use crate::format::fixed;

/// How far above the target, in volts, the achieved output may sit and still be reported as safe.
// Product owner to confirm before changing.
pub const SAFETY_MARGIN: f64 = 0.05;

/// True when `actual_v_out` does not overshoot `target_v_out` by more than [`SAFETY_MARGIN`].
pub fn is_safe(actual_v_out: f64, target_v_out: f64) -> bool {
    actual_v_out <= target_v_out + SAFETY_MARGIN
}

/// Builds the message shown alongside a solved pair.
/// # Examples
/// ```
///     # use divider_calc::classify;
///     let msg = classify(true, "24kΩ", "9.1kΩ", 3.2990936555891235);
///     assert_eq!(msg, "Success! You are free to build. Use 24kΩ and 9.1kΩ for a hassle-free 3.30V.");
/// ```
pub fn classify(is_safe: bool, r1_formatted: &str, r2_formatted: &str, actual_v_out: f64) -> String {
    let volts = fixed(actual_v_out, 2);
    if is_safe {
        format!(
            "Success! You are free to build. Use {} and {} for a hassle-free {}V.",
            r1_formatted, r2_formatted, volts
        )
    } else {
        format!(
            "Caution: This is the best match, but it runs a bit high ({}V). Watch your pins!",
            volts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_is_inclusive() {
        assert!(is_safe(3.3, 3.3));
        assert!(is_safe(3.0, 3.3));
        assert!(is_safe(0.15, 0.1));
        assert!(!is_safe(0.10987803538072739, 0.01));
        assert!(!is_safe(3.36, 3.3));
    }

    #[test]
    fn caution_names_the_voltage() {
        assert_eq!(
            classify(false, "9.1MΩ", "1kΩ", 0.10987803538072739),
            "Caution: This is the best match, but it runs a bit high (0.11V). Watch your pins!"
        );
    }

    #[test]
    fn voltage_just_below_a_half_rounds_down() {
        assert_eq!(
            classify(true, "1kΩ", "1kΩ", 0.61 * (1000.0 / 2000.0)),
            "Success! You are free to build. Use 1kΩ and 1kΩ for a hassle-free 0.30V."
        );
    }

    #[test]
    fn success_names_both_resistors() {
        let msg = classify(true, "1kΩ", "1kΩ", 2.5);
        assert_eq!(
            msg,
            "Success! You are free to build. Use 1kΩ and 1kΩ for a hassle-free 2.50V."
        );
    }
}
