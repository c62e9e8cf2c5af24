//! A voltage divider helper for circuit design.
//!
//! Given an input voltage and a desired output voltage, it picks a top resistor R1 and a bottom
//! resistor R2 from the E24 standard series so that `Vin * R2 / (R1 + R2)` lands as close to the
//! target as the series allows.
//!
//! R2 is drawn from 1kΩ to 100kΩ by default, which keeps the divider stiff enough to drive an ADC
//! input without wasting much current. Every candidate R2 is paired with its nearest R1 and the
//! pair with the smallest absolute error wins.
//!
//! # Example
//! ```rust
//! extern crate divider_calc;
//!
//! use divider_calc::*;
//!
//! fn main() {
//!     let pair = solve(12.0, 3.3).expect("valid voltages");
//!
//!     assert_eq!(pair.r1_formatted, "24kΩ");
//!     assert_eq!(pair.r2_formatted, "9.1kΩ");
//!     println!("{:#}", pair);
//!     println!("{}", pair.message);
//! }
//! ```
//! Running this example produces:
//! ```text
//! R1: 24kΩ
//! R2: 9.1kΩ
//! Vout: 3.2991V (-0.027%)
//! P(R1): 3.154mW
//! P(R2): 1.196mW
//! Zout: 6.6kΩ
//! Success! You are free to build. Use 24kΩ and 9.1kΩ for a hassle-free 3.30V.
//! ```

extern crate itertools;
#[macro_use]
extern crate lazy_static;
extern crate thiserror;
extern crate tracing;

use itertools::Itertools;

mod divider;
mod error;
pub mod explain;
mod format;
mod safety;

pub use divider::{solve, CalcResult, Divider, DividerPair, SolverConfig};
pub use error::DividerError;
pub use format::format_resistance;
pub use safety::{classify, is_safe, SAFETY_MARGIN};

const POWERS: &[f64] = &[1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6];

const E24_BASE: &[f64] = &[
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1, 5.6,
    6.2, 6.8, 7.5, 8.2, 9.1,
];

lazy_static! {
    /// RSeries constant for the E24 standard series, 1Ω through 9.1MΩ.
    pub static ref E24: RSeries = RSeries::new(E24_BASE);
}

/// A series of resistor values, sorted ascending. Use the [`E24`] constant.
#[derive(Debug)]
pub struct RSeries {
    values: Box<[f64]>,
}

impl RSeries {
    fn new(series: &[f64]) -> Self {
        let mut values = series
            .iter()
            .cartesian_product(POWERS.iter())
            .map(|(val, pow)| val * pow)
            .collect::<Vec<f64>>();
        values.sort_by(f64::total_cmp);
        RSeries {
            values: values.into_boxed_slice(),
        }
    }

    /// Iterates over the series from the smallest value to the largest.
    pub fn iter(&self) -> impl Iterator<Item = &f64> + Clone {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if `r` is exactly one of the series values.
    pub fn contains(&self, r: f64) -> bool {
        self.values.binary_search_by(|v| v.total_cmp(&r)).is_ok()
    }

    /// The ascending run of values `v` with `lo <= v <= hi`.
    /// # Examples
    /// ```
    ///     # use divider_calc::E24;
    ///     let band = E24.within(1000.0, 100_000.0);
    ///     assert_eq!(band.first(), Some(&1000.0));
    ///     assert_eq!(band.last(), Some(&100_000.0));
    /// ```
    pub fn within(&self, lo: f64, hi: f64) -> &[f64] {
        let start = self.values.partition_point(|v| *v < lo);
        let end = self.values.partition_point(|v| *v <= hi);
        &self.values[start..end.max(start)]
    }

    /// Finds the series value closest to `target`. When two values are equally close the smaller
    /// one is returned.
    /// # Examples
    /// ```
    ///     # use divider_calc::E24;
    ///     assert_eq!(E24.nearest(4650.0), Some(4700.0));
    ///     assert_eq!(E24.nearest(10.5), Some(10.0));
    /// ```
    pub fn nearest(&self, target: f64) -> Option<f64> {
        // min_by keeps the first of several equal elements, and the scan is ascending.
        self.iter()
            .cloned()
            .min_by(|a, b| (a - target).abs().total_cmp(&(b - target).abs()))
    }
}
