use thiserror::Error;

/// Reasons a divider could not be solved. The display text is meant to be shown to the user as is.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DividerError {
    /// One of the voltages is zero, negative, or not a finite number.
    #[error("positive voltage values required.")]
    InvalidMagnitude,

    /// The requested output is not below the input.
    #[error("output voltage cannot be higher than input voltage.")]
    InvalidRange,

    /// The configured R2 band has no E24 values in it. Never returned by [`solve`](crate::solve),
    /// whose default 1kΩ to 100kΩ band always has candidates.
    #[error("no standard values between {min}Ω and {max}Ω for R2.")]
    EmptyCandidateBand { min: f64, max: f64 },
}
