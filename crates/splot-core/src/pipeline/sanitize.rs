//! Sanitization and display rounding of VSWR values

use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::constants::{NAN_FILL, NEG_CLAMP, POS_CLAMP, ROUNDING_LIMIT, VALUE_DECIMALS};

/// Replace NaN with 0 and +/-inf with +/-`f64::MAX`
#[inline]
pub fn sanitize_value(x: f64) -> f64 {
    if x.is_nan() {
        NAN_FILL
    } else if x == f64::INFINITY {
        POS_CLAMP
    } else if x == f64::NEG_INFINITY {
        NEG_CLAMP
    } else {
        x
    }
}

/// Element-wise [`sanitize_value`] into a new array
pub fn sanitize<S, D>(values: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    values.mapv(sanitize_value)
}

/// Round half to even at `decimals` places, like numpy's `round`
///
/// Values too large to carry a fractional part come back untouched, so the
/// result is never infinite for a finite input.
pub fn round_decimals(x: f64, decimals: i32) -> f64 {
    if !x.is_finite() || x.abs() >= ROUNDING_LIMIT {
        return x;
    }
    let scale = 10.0_f64.powi(decimals);
    (x * scale).round_ties_even() / scale
}

/// Value as emitted in a series: rounded, except the clamp sentinels
#[inline]
pub fn display_value(x: f64) -> f64 {
    if x == POS_CLAMP || x == NEG_CLAMP {
        x
    } else {
        round_decimals(x, VALUE_DECIMALS)
    }
}
