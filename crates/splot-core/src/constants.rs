//! Numerical constants for the VSWR pipeline

/// Replacement for +inf after sanitization.
pub const POS_CLAMP: f64 = f64::MAX;

/// Replacement for -inf after sanitization.
pub const NEG_CLAMP: f64 = -f64::MAX;

/// Replacement for NaN after sanitization.
pub const NAN_FILL: f64 = 0.0;

/// Number of decimals kept in emitted VSWR values.
pub const VALUE_DECIMALS: i32 = 2;

/// Magnitude (2^52) from which every f64 is already a whole number.
/// Rounding is the identity there, and skipping it keeps the scaled
/// intermediate from overflowing to infinity.
pub const ROUNDING_LIMIT: f64 = 4_503_599_627_370_496.0;
