use std::fmt;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::error::DividerError;
use crate::format::{fixed, format_resistance};
use crate::safety::{classify, is_safe};
use crate::E24;

/// The outcome of a solve: either the best pair or the reason no pair was produced.
pub type CalcResult = Result<DividerPair, DividerError>;

/// Bounds on the bottom resistor R2, in ohms, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub r2_min: f64,
    pub r2_max: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            r2_min: 1_000.0,
            r2_max: 100_000.0,
        }
    }
}

/// A solved divider: the chosen resistors and the figures that follow from them.
#[derive(Debug, Clone, PartialEq)]
pub struct DividerPair {
    /// Top resistor, between Vin and the output node.
    pub r1: f64,
    /// Bottom resistor, between the output node and ground.
    pub r2: f64,
    pub r1_formatted: String,
    pub r2_formatted: String,
    pub actual_v_out: f64,
    /// Signed percentage the output misses the target by.
    pub deviation_percent: f64,
    /// Watts dissipated in R1.
    pub power_r1: f64,
    /// Watts dissipated in R2.
    pub power_r2: f64,
    /// R1 and R2 in parallel, the source impedance seen at the output node.
    pub impedance: f64,
    pub is_safe: bool,
    pub message: String,
}

fn output_voltage(v_in: f64, r1: f64, r2: f64) -> f64 {
    v_in * (r2 / (r1 + r2))
}

impl DividerPair {
    fn new(v_in: f64, target_v_out: f64, r1: f64, r2: f64) -> Self {
        let actual_v_out = output_voltage(v_in, r1, r2);
        let current = v_in / (r1 + r2);
        let r1_formatted = format_resistance(r1);
        let r2_formatted = format_resistance(r2);
        let is_safe = is_safe(actual_v_out, target_v_out);
        let message = classify(is_safe, &r1_formatted, &r2_formatted, actual_v_out);
        DividerPair {
            r1,
            r2,
            actual_v_out,
            deviation_percent: (actual_v_out - target_v_out) / target_v_out * 100.0,
            power_r1: current * current * r1,
            power_r2: current * current * r2,
            impedance: r1 * r2 / (r1 + r2),
            is_safe,
            message,
            r1_formatted,
            r2_formatted,
        }
    }
}

impl fmt::Display for DividerPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sep = if f.alternate() { "\n" } else { ", " };
        let fields = [
            format!("R1: {}", self.r1_formatted),
            format!("R2: {}", self.r2_formatted),
            format!(
                "Vout: {}V ({}%)",
                fixed(self.actual_v_out, 4),
                fixed(self.deviation_percent, 3)
            ),
            format!("P(R1): {}mW", fixed(self.power_r1 * 1e3, 3)),
            format!("P(R2): {}mW", fixed(self.power_r2 * 1e3, 3)),
            format!("Zout: {}", format_resistance(self.impedance)),
        ];
        write!(f, "{}", fields.iter().join(sep))
    }
}

/// Main solver struct. Searches the E24 series for the divider closest to a target voltage.
#[derive(Debug, Clone, Default)]
pub struct Divider {
    config: SolverConfig,
}

impl Divider {
    /// Creates a solver that draws R2 from the band in `config`.
    /// # Examples
    /// ```
    ///     # use divider_calc::*;
    ///     let divider = Divider::new(SolverConfig { r2_min: 10_000.0, r2_max: 47_000.0 });
    ///     let pair = divider.solve(5.0, 3.3).unwrap();
    ///     assert!(pair.r2 >= 10_000.0 && pair.r2 <= 47_000.0);
    /// ```
    pub fn new(config: SolverConfig) -> Self {
        Divider { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The R2 values that will be tried, ascending.
    pub fn candidates(&self) -> &'static [f64] {
        E24.within(self.config.r2_min, self.config.r2_max)
    }

    /// Number of (R1, R2) pairings examined by a single solve.
    pub fn combinations(&self) -> usize {
        self.candidates().len() * E24.len()
    }

    /// Finds the pair whose output is closest to `target_v_out` when fed from `v_in`.
    ///
    /// Every candidate R2 is paired with the E24 value nearest its ideal R1. A later pair only
    /// replaces the best so far when its error is strictly smaller, so on ties the smallest R2
    /// wins and the answer is the same on every run.
    pub fn solve(&self, v_in: f64, target_v_out: f64) -> CalcResult {
        validate(v_in, target_v_out)?;

        let mut best: Option<(f64, f64, f64)> = None;
        for &r2 in self.candidates() {
            let ideal_r1 = r2 * (v_in / target_v_out - 1.0);
            let r1 = match E24.nearest(ideal_r1) {
                Some(r1) => r1,
                None => continue,
            };
            let error = (target_v_out - output_voltage(v_in, r1, r2)).abs();
            if best.map_or(true, |(best_err, _, _)| error < best_err) {
                trace!(r1, r2, error, "new best pair");
                best = Some((error, r1, r2));
            }
        }

        let (error, r1, r2) = best.ok_or(DividerError::EmptyCandidateBand {
            min: self.config.r2_min,
            max: self.config.r2_max,
        })?;
        debug!(v_in, target_v_out, r1, r2, error, "solved divider");
        Ok(DividerPair::new(v_in, target_v_out, r1, r2))
    }
}

fn validate(v_in: f64, target_v_out: f64) -> Result<(), DividerError> {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if !positive(v_in) || !positive(target_v_out) {
        debug!(v_in, target_v_out, "rejected non-positive voltage");
        return Err(DividerError::InvalidMagnitude);
    }
    if target_v_out >= v_in {
        debug!(v_in, target_v_out, "rejected output above input");
        return Err(DividerError::InvalidRange);
    }
    Ok(())
}

/// Solves with the default R2 band of 1kΩ to 100kΩ.
/// # Examples
/// ```
///     # use divider_calc::*;
///     let err = solve(5.0, 6.0).unwrap_err();
///     assert_eq!(err.to_string(), "output voltage cannot be higher than input voltage.");
/// ```
pub fn solve(v_in: f64, target_v_out: f64) -> CalcResult {
    Divider::default().solve(v_in, target_v_out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn twelve_to_three_three() {
        let pair = solve(12.0, 3.3).unwrap();
        assert_eq!(pair.r1, 24_000.0);
        assert_eq!(pair.r2, 9_100.0);
        assert_eq!(
            pair.actual_v_out.to_bits(),
            3.2990936555891235_f64.to_bits()
        );
        assert_relative_eq!(pair.deviation_percent, -0.02746498214776777);
        assert_relative_eq!(pair.impedance, 6598.187311178248);
        assert_relative_eq!(pair.power_r1, 0.003154407133925393);
        assert_relative_eq!(pair.power_r2, 0.0011960460382800448);
        assert!(pair.is_safe);
        assert_eq!(
            pair.message,
            "Success! You are free to build. Use 24kΩ and 9.1kΩ for a hassle-free 3.30V."
        );
    }

    #[test]
    fn exact_ratio_keeps_smallest_r2() {
        // 2:1 is exact for every decade of 1k/2k, the first one found is kept
        let pair = solve(9.0, 3.0).unwrap();
        assert_eq!((pair.r1, pair.r2), (2_000.0, 1_000.0));
        assert_eq!(pair.actual_v_out, 3.0);
        assert_eq!(pair.deviation_percent, 0.0);

        let half = solve(5.0, 2.5).unwrap();
        assert_eq!((half.r1, half.r2), (1_000.0, 1_000.0));
        assert_relative_eq!(half.impedance, 500.0);
    }

    #[test]
    fn caution_when_output_runs_high() {
        let pair = solve(1000.0, 0.01).unwrap();
        assert_eq!((pair.r1, pair.r2), (9_100_000.0, 1_000.0));
        assert!(!pair.is_safe);
        assert_eq!(
            pair.message,
            "Caution: This is the best match, but it runs a bit high (0.11V). Watch your pins!"
        );
    }

    #[test]
    fn target_near_input_uses_tiny_r1() {
        let pair = solve(10.0, 9.99).unwrap();
        assert_eq!((pair.r1, pair.r2), (1.2, 1_200.0));
        assert_eq!(pair.r1_formatted, "1Ω");
    }

    #[test]
    fn rejects_bad_magnitudes_first() {
        assert_eq!(solve(0.0, 3.3), Err(DividerError::InvalidMagnitude));
        assert_eq!(solve(5.0, 0.0), Err(DividerError::InvalidMagnitude));
        assert_eq!(solve(-5.0, -6.0), Err(DividerError::InvalidMagnitude));
        assert_eq!(solve(f64::NAN, 1.0), Err(DividerError::InvalidMagnitude));
        assert_eq!(solve(f64::INFINITY, 1.0), Err(DividerError::InvalidMagnitude));
    }

    #[test]
    fn rejects_output_at_or_above_input() {
        assert_eq!(solve(5.0, 6.0), Err(DividerError::InvalidRange));
        assert_eq!(solve(5.0, 5.0), Err(DividerError::InvalidRange));
    }

    #[test]
    fn empty_band_is_reported() {
        let divider = Divider::new(SolverConfig {
            r2_min: 1_001.0,
            r2_max: 1_099.0,
        });
        assert_eq!(divider.combinations(), 0);
        assert_eq!(
            divider.solve(12.0, 3.3),
            Err(DividerError::EmptyCandidateBand {
                min: 1_001.0,
                max: 1_099.0
            })
        );
    }

    #[test]
    fn default_band_always_has_candidates() {
        assert!(!Divider::default().candidates().is_empty());
        for &(v_in, target) in &[(12.0, 3.3), (1e-9, 1e-12), (1e300, 1e-300), (5.0, 4.999_999)] {
            assert_ne!(
                solve(v_in, target).map(|_| ()),
                Err(DividerError::EmptyCandidateBand {
                    min: 1_000.0,
                    max: 100_000.0
                })
            );
        }
    }

    #[test]
    fn default_combinations() {
        assert_eq!(Divider::default().combinations(), 49 * 168);
    }

    #[test]
    fn display_lists_fields() {
        let pair = solve(12.0, 3.3).unwrap();
        assert_eq!(
            pair.to_string(),
            "R1: 24kΩ, R2: 9.1kΩ, Vout: 3.2991V (-0.027%), P(R1): 3.154mW, P(R2): 1.196mW, Zout: 6.6kΩ"
        );
        assert_eq!(format!("{:#}", pair).lines().count(), 6);
    }
}
