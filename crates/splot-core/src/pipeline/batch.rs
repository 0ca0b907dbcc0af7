//! Batch conversion of split datasets into envelopes

use crate::envelope::{Envelope, EnvelopeMap};
use crate::error::{ConversionError, Result};
use crate::pipeline::flatten::flatten;
use crate::pipeline::sanitize::sanitize;
use crate::spectrum::{ComplexSpectrum, SplitDataset};

/// Convert one split dataset into its envelope
pub fn convert_dataset(dataset: &SplitDataset) -> Result<Envelope> {
    let spectrum = ComplexSpectrum::from_split(dataset)?;
    let vswr = sanitize(&spectrum.vswr());
    let envelope = flatten(&spectrum, &vswr);
    log::debug!(
        "{}: {} series over {} frequency points",
        spectrum.name(),
        envelope.series_count(),
        spectrum.nfreq()
    );
    Ok(envelope)
}

/// Convert every dataset, failing the whole batch on the first invalid one
///
/// # Example
/// ```
/// use ndarray::Array3;
/// use splot_core::frequency::Frequency;
/// use splot_core::pipeline::convert_batch;
/// use splot_core::spectrum::{port_range, ComponentArray, SpectrumAxes, SplitDataset};
///
/// let axes = SpectrumAxes::new(Frequency::from_hz(vec![1e9, 2e9]), port_range(1), port_range(1));
/// let real = ComponentArray::new(Array3::from_elem((2, 1, 1), 0.5), axes.clone(), vec![]);
/// let imag = ComponentArray::new(Array3::zeros((2, 1, 1)), axes, vec![]);
///
/// let map = convert_batch(&[SplitDataset::new("deviceA", real, imag)]).unwrap();
/// let s11 = map.get("deviceA").unwrap().series("s11").unwrap();
/// assert_eq!(s11.data[0].value, 3.0);
/// ```
pub fn convert_batch(datasets: &[SplitDataset]) -> Result<EnvelopeMap> {
    let mut map = EnvelopeMap::new();
    for dataset in datasets {
        map.insert(dataset.name.clone(), convert_dataset(dataset)?);
    }
    Ok(map)
}

/// Result of a batch that keeps going past invalid datasets
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub envelopes: EnvelopeMap,
    /// One entry per dataset that could not be converted, in input order
    pub failures: Vec<ConversionError>,
}

impl BatchOutcome {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Convert every valid dataset and collect the errors of the others
pub fn convert_batch_lenient(datasets: &[SplitDataset]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for dataset in datasets {
        match convert_dataset(dataset) {
            Ok(envelope) => outcome.envelopes.insert(dataset.name.clone(), envelope),
            Err(err) => {
                log::debug!("skipping dataset: {err}");
                outcome.failures.push(err);
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::Frequency;
    use crate::spectrum::{port_range, ComponentArray, SpectrumAxes};
    use ndarray::Array3;

    fn dataset(name: &str, real: f64, nfreq: usize) -> SplitDataset {
        let axes = SpectrumAxes::new(
            Frequency::from_hz((1..=nfreq).map(|i| i as f64 * 1e9).collect()),
            port_range(1),
            port_range(1),
        );
        SplitDataset::new(
            name,
            ComponentArray::new(Array3::from_elem((nfreq, 1, 1), real), axes.clone(), vec![]),
            ComponentArray::new(Array3::zeros((nfreq, 1, 1)), axes, vec![]),
        )
    }

    #[test]
    fn test_total_reflection_is_clamped() {
        let env = convert_dataset(&dataset("short", 1.0, 2)).unwrap();
        let s11 = env.series("s11").unwrap();
        assert!(s11.data.iter().all(|p| p.value == f64::MAX));
    }

    #[test]
    fn test_batch_fails_on_first_error() {
        let mut bad = dataset("bad", 0.5, 2);
        bad.imag.values = Array3::zeros((3, 1, 1));
        let err = convert_batch(&[dataset("good", 0.5, 2), bad]).unwrap_err();
        assert_eq!(err.file(), Some("bad"));
    }

    #[test]
    fn test_lenient_batch_keeps_siblings() {
        let mut bad = dataset("bad", 0.5, 2);
        bad.real.axes.m = port_range(2);
        let outcome =
            convert_batch_lenient(&[dataset("first", 0.5, 2), bad, dataset("last", 0.0, 1)]);

        assert!(!outcome.is_complete());
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].file(), Some("bad"));
        assert_eq!(
            outcome.envelopes.names().collect::<Vec<_>>(),
            vec!["first", "last"]
        );
    }
}
