//! Plain-language write-ups of a solved divider.
//!
//! The text itself comes from an outside service behind the [`Narrator`] trait. That service is
//! allowed to be slow, flaky or silent: [`explain`] always hands back something printable and
//! never touches the solve that produced the pair.

use std::fmt;

use tracing::warn;

use crate::divider::DividerPair;
use crate::format::fixed;

/// Shown when the narrator answers with nothing.
pub const FALLBACK_EMPTY: &str =
    "I couldn't generate an explanation right now, but your circuit looks great!";

/// Shown when the narrator fails outright.
pub const FALLBACK_UNAVAILABLE: &str =
    "The AI assistant is taking a break. Your math is still solid though!";

/// A text service that answers a prompt.
pub trait Narrator {
    type Error: fmt::Display;

    fn narrate(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// What the narrator is told about a divider.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplainRequest<'a> {
    pub v_in: f64,
    pub target_v_out: f64,
    pub r1_formatted: &'a str,
    pub r2_formatted: &'a str,
    pub actual_v_out: f64,
}

impl<'a> ExplainRequest<'a> {
    pub fn new(v_in: f64, target_v_out: f64, pair: &'a DividerPair) -> Self {
        ExplainRequest {
            v_in,
            target_v_out,
            r1_formatted: &pair.r1_formatted,
            r2_formatted: &pair.r2_formatted,
            actual_v_out: pair.actual_v_out,
        }
    }

    pub fn prompt(&self) -> String {
        format!(
            "I am building a voltage divider circuit.\n\
             Input Voltage: {}V\n\
             Desired Output: {}V\n\
             Actual Output with standard resistors: {}V\n\
             R1 (Top Resistor): {}\n\
             R2 (Bottom Resistor): {}\n\
             \n\
             Please explain to a hobbyist:\n\
             1. What this circuit does in simple terms.\n\
             2. Why these specific resistor values were chosen (briefly mention E24 series).\n\
             3. Any safety warnings (power dissipation, heat, or input impedance for microcontrollers).\n\
             4. Keep the tone friendly, encouraging, and \"free-spirited\".\n\
             Use markdown for formatting.\n",
            self.v_in,
            self.target_v_out,
            fixed(self.actual_v_out, 2),
            self.r1_formatted,
            self.r2_formatted,
        )
    }
}

/// Asks `narrator` to describe the divider, substituting a fixed message if it fails or
/// returns only whitespace.
/// # Examples
/// ```
///     # use divider_calc::solve;
///     # use divider_calc::explain::{explain, ExplainRequest, Narrator, FALLBACK_UNAVAILABLE};
///     struct Offline;
///
///     impl Narrator for Offline {
///         type Error = &'static str;
///
///         fn narrate(&self, _prompt: &str) -> Result<String, &'static str> {
///             Err("no network")
///         }
///     }
///
///     let pair = solve(12.0, 3.3).unwrap();
///     let text = explain(&Offline, &ExplainRequest::new(12.0, 3.3, &pair));
///     assert_eq!(text, FALLBACK_UNAVAILABLE);
/// ```
pub fn explain<N: Narrator>(narrator: &N, request: &ExplainRequest) -> String {
    match narrator.narrate(&request.prompt()) {
        Ok(text) if text.trim().is_empty() => {
            warn!("narrator returned no text");
            FALLBACK_EMPTY.to_owned()
        }
        Ok(text) => text,
        Err(e) => {
            warn!("narrator failed: {}", e);
            FALLBACK_UNAVAILABLE.to_owned()
        }
    }
}
