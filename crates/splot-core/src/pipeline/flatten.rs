//! Reshaping of VSWR arrays into per-port-pair series

use ndarray::{s, Array3};

use crate::envelope::{Envelope, VswrPoint, VswrSeries};
use crate::frequency::FrequencyUnit;
use crate::pipeline::sanitize::display_value;
use crate::spectrum::{series_key, ComplexSpectrum};

/// Build the envelope of `spectrum` from its sanitized VSWR array
///
/// One series per (m, n) pair, m outer, each with one point per frequency
/// in the order of the frequency axis.
pub fn flatten(spectrum: &ComplexSpectrum, vswr: &Array3<f64>) -> Envelope {
    let freq_ghz = spectrum.frequency().f_in(FrequencyUnit::GHz);
    let mut envelope = Envelope::new(spectrum.m().to_vec(), spectrum.n().to_vec());

    for (i, m) in spectrum.m().iter().enumerate() {
        for (j, n) in spectrum.n().iter().enumerate() {
            let key = series_key(m, n);
            let data = freq_ghz
                .iter()
                .zip(vswr.slice(s![.., i, j]))
                .map(|(&frequency, &value)| VswrPoint {
                    frequency,
                    value: display_value(value),
                })
                .collect();
            let label = format!("{} {}", spectrum.name(), key);
            envelope.insert_series(key, VswrSeries::new(label, data));
        }
    }
    envelope
}
