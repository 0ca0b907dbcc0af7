//! Unit conversion functions
//!
//! Conversions between decibel magnitude, linear voltage ratio and VSWR.
//! Every scalar function has an element-wise array counterpart that works
//! on arrays of any rank and returns a new array of the same shape.

use ndarray::{Array, ArrayBase, Data, Dimension};
use num_complex::Complex64;

/// Convert dB to linear voltage ratio (10^(dB/20))
pub fn db_2_mag(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert linear voltage ratio to dB (20*log10(mag))
pub fn mag_2_db(mag: f64) -> f64 {
    20.0 * mag.log10()
}

/// Convert complex number to magnitude
pub fn complex_2_magnitude(z: Complex64) -> f64 {
    z.norm()
}

/// Convert complex number to dB (20*log10(|z|))
pub fn complex_2_db(z: Complex64) -> f64 {
    mag_2_db(complex_2_magnitude(z))
}

/// VSWR of a reflection coefficient: (1 + |Γ|) / (1 - |Γ|)
///
/// No clamping is applied. |Γ| = 1 yields +inf and |Γ| > 1 yields a
/// negative ratio; NaN propagates.
pub fn complex_2_vswr(gamma: Complex64) -> f64 {
    let mag = complex_2_magnitude(gamma);
    (1.0 + mag) / (1.0 - mag)
}

/// Element-wise [`db_2_mag`]
pub fn db_2_mag_array<S, D>(db: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    db.mapv(db_2_mag)
}

/// Element-wise [`mag_2_db`]
pub fn mag_2_db_array<S, D>(mag: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    mag.mapv(mag_2_db)
}

/// Element-wise [`complex_2_magnitude`]
pub fn s_2_mag<S, D>(s: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = Complex64>,
    D: Dimension,
{
    s.mapv(complex_2_magnitude)
}

/// Element-wise [`complex_2_db`]
pub fn s_2_db<S, D>(s: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = Complex64>,
    D: Dimension,
{
    s.mapv(complex_2_db)
}

/// Element-wise [`complex_2_vswr`]
pub fn s_2_vswr<S, D>(s: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = Complex64>,
    D: Dimension,
{
    s.mapv(complex_2_vswr)
}
