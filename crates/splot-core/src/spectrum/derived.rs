//! Derived spectrum properties
//!
//! Magnitudes, dB values and VSWR computed over the full
//! [nfreq, nm, nn] sample array.

use ndarray::Array3;

use super::core::ComplexSpectrum;
use crate::math::conversions::{s_2_db, s_2_mag, s_2_vswr};

impl ComplexSpectrum {
    /// Get S-parameter magnitude in dB
    #[inline]
    pub fn s_db(&self) -> Array3<f64> {
        s_2_db(self.samples())
    }

    /// Get S-parameter magnitude (linear)
    #[inline]
    pub fn s_mag(&self) -> Array3<f64> {
        s_2_mag(self.samples())
    }

    /// Get S-parameter real part
    #[inline]
    pub fn s_re(&self) -> Array3<f64> {
        self.samples().mapv(|c| c.re)
    }

    /// Get S-parameter imaginary part
    #[inline]
    pub fn s_im(&self) -> Array3<f64> {
        self.samples().mapv(|c| c.im)
    }

    /// Get VSWR (Voltage Standing Wave Ratio)
    ///
    /// VSWR = (1 + |S|) / (1 - |S|), element-wise over every port pair.
    /// The result is unsanitized: |S| = 1 gives +inf and |S| > 1 gives a
    /// negative ratio.
    pub fn vswr(&self) -> Array3<f64> {
        s_2_vswr(self.samples())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::Array3;
    use num_complex::Complex64;

    use crate::frequency::Frequency;
    use crate::spectrum::{port_range, ComplexSpectrum, SpectrumAxes};

    fn spectrum(samples: Array3<Complex64>) -> ComplexSpectrum {
        let (nfreq, nm, nn) = samples.dim();
        let axes = SpectrumAxes::new(
            Frequency::from_hz(vec![1e9; nfreq]),
            port_range(nm),
            port_range(nn),
        );
        ComplexSpectrum::new("dut", samples, axes, Vec::new()).unwrap()
    }

    #[test]
    fn test_vswr_shape_and_values() {
        let mut s = Array3::<Complex64>::zeros((2, 2, 2));
        s[[0, 0, 0]] = Complex64::new(0.5, 0.0);
        s[[1, 1, 1]] = Complex64::new(0.0, 1.0);
        let vswr = spectrum(s).vswr();

        assert_eq!(vswr.shape(), &[2, 2, 2]);
        assert_eq!(vswr[[0, 0, 0]], 3.0);
        assert_eq!(vswr[[0, 1, 0]], 1.0);
        assert_eq!(vswr[[1, 1, 1]], f64::INFINITY);
    }

    #[test]
    fn test_s_db_and_mag() {
        let s = Array3::from_elem((1, 1, 1), Complex64::new(0.0, 0.1));
        let ntwk = spectrum(s);
        assert_relative_eq!(ntwk.s_db()[[0, 0, 0]], -20.0, epsilon = 1e-10);
        assert_relative_eq!(ntwk.s_mag()[[0, 0, 0]], 0.1, epsilon = 1e-15);
    }

    #[test]
    fn test_vswr_follows_magnitude() {
        let s = Array3::from_shape_vec(
            (2, 1, 2),
            vec![
                Complex64::new(0.5, 0.0),
                Complex64::new(-0.6, 0.0),
                Complex64::new(0.0, 0.0),
                Complex64::new(0.0, -1.0),
            ],
        )
        .unwrap();
        let ntwk = spectrum(s);
        let mag = ntwk.s_mag();

        assert_eq!(mag[[0, 0, 0]], 0.5);
        assert_eq!(mag[[0, 0, 1]], 0.6);
        assert_eq!(mag[[1, 0, 1]], 1.0);
        let expected = mag.mapv(|m| (1.0 + m) / (1.0 - m));
        assert_eq!(ntwk.vswr(), expected);
        assert_eq!(ntwk.vswr()[[1, 0, 1]], f64::INFINITY);
    }
}
