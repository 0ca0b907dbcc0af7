//! Frequency module - represents the frequency axis of a measurement
//!
//! Frequencies are stored in Hz and scaled to another unit on the way out.

/// Frequency unit enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrequencyUnit {
    #[default]
    Hz,
    KHz,
    MHz,
    GHz,
    THz,
}

impl FrequencyUnit {
    /// Get the multiplier to convert to Hz
    pub fn multiplier(&self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
            FrequencyUnit::MHz => 1e6,
            FrequencyUnit::GHz => 1e9,
            FrequencyUnit::THz => 1e12,
        }
    }
}

/// An ordered frequency axis, in Hz
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frequency {
    f: Vec<f64>,
}

impl Frequency {
    /// Create from a vector already expressed in Hz
    pub fn from_hz(f: Vec<f64>) -> Self {
        Self { f }
    }

    /// Create from a frequency vector expressed in `unit`
    ///
    /// # Example
    /// ```
    /// use splot_core::frequency::{Frequency, FrequencyUnit};
    /// let freq = Frequency::from_f(vec![1.0, 2.0], FrequencyUnit::GHz);
    /// assert_eq!(freq.f(), &[1e9, 2e9]);
    /// ```
    pub fn from_f(f: Vec<f64>, unit: FrequencyUnit) -> Self {
        let mult = unit.multiplier();
        Self::from_hz(f.iter().map(|&x| x * mult).collect())
    }

    /// Evenly spaced points between `start` and `stop` (inclusive), in `unit`
    pub fn linspace(start: f64, stop: f64, npoints: usize, unit: FrequencyUnit) -> Self {
        let f = match npoints {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (npoints - 1) as f64;
                (0..npoints).map(|i| start + i as f64 * step).collect()
            }
        };
        Self::from_f(f, unit)
    }

    /// Get frequency vector in Hz
    #[inline]
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// Get frequency vector in an arbitrary unit
    pub fn f_in(&self, unit: FrequencyUnit) -> Vec<f64> {
        let mult = unit.multiplier();
        self.f.iter().map(|&x| x / mult).collect()
    }

    /// Get the number of frequency points
    #[inline]
    pub fn npoints(&self) -> usize {
        self.f.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.f.is_empty()
    }
}
