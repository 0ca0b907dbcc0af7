//! Core spectrum structs and constructors
//!
//! A measurement arrives split into a real-only and an imaginary-only
//! array. [`ComplexSpectrum::from_split`] validates the two halves against
//! each other and joins them.

use ndarray::{Array3, Zip};
use num_complex::Complex64;

use super::port::{first_duplicate, PortIndex};
use crate::error::{ConversionError, Result};
use crate::frequency::Frequency;

/// Coordinates of a (frequency, m, n) array
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpectrumAxes {
    pub frequency: Frequency,
    pub m: Vec<PortIndex>,
    pub n: Vec<PortIndex>,
}

impl SpectrumAxes {
    pub fn new(frequency: Frequency, m: Vec<PortIndex>, n: Vec<PortIndex>) -> Self {
        Self { frequency, m, n }
    }

    /// Array shape implied by the axes
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.frequency.npoints(), self.m.len(), self.n.len())
    }
}

/// One real-valued half of a split measurement
#[derive(Debug, Clone)]
pub struct ComponentArray {
    /// Values [nfreq, nm, nn]
    pub values: Array3<f64>,
    pub axes: SpectrumAxes,
    /// Files the measurement was read from
    pub source_files: Vec<String>,
}

impl ComponentArray {
    pub fn new(values: Array3<f64>, axes: SpectrumAxes, source_files: Vec<String>) -> Self {
        Self {
            values,
            axes,
            source_files,
        }
    }
}

/// A named measurement as sent by a client: real and imaginary parts apart
#[derive(Debug, Clone)]
pub struct SplitDataset {
    pub name: String,
    pub real: ComponentArray,
    pub imag: ComponentArray,
}

impl SplitDataset {
    pub fn new(name: impl Into<String>, real: ComponentArray, imag: ComponentArray) -> Self {
        Self {
            name: name.into(),
            real,
            imag,
        }
    }
}

/// A named complex S-parameter measurement
///
/// Immutable once built; `samples` always has the shape implied by `axes`.
#[derive(Debug, Clone)]
pub struct ComplexSpectrum {
    name: String,
    /// S-parameter data [nfreq, nm, nn]
    samples: Array3<Complex64>,
    axes: SpectrumAxes,
    source_files: Vec<String>,
}

impl ComplexSpectrum {
    /// Create from complex samples, checking them against the axes
    pub fn new(
        name: impl Into<String>,
        samples: Array3<Complex64>,
        axes: SpectrumAxes,
        source_files: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        check_axes(&name, samples.dim(), &axes)?;
        Ok(Self {
            name,
            samples,
            axes,
            source_files,
        })
    }

    /// Join the halves of a split dataset into `real + i*imag`
    ///
    /// Both halves must have the same shape and the same frequency, m and n
    /// axes, and the axes must match the array dimensions.
    pub fn from_split(dataset: &SplitDataset) -> Result<Self> {
        let name = dataset.name.as_str();
        let (real, imag) = (&dataset.real, &dataset.imag);

        if real.values.shape() != imag.values.shape() {
            return Err(ConversionError::shape(
                name,
                format!(
                    "real part has shape {:?} but imaginary part has shape {:?}",
                    real.values.shape(),
                    imag.values.shape()
                ),
            ));
        }
        if real.axes.frequency.f() != imag.axes.frequency.f() {
            return Err(ConversionError::shape(
                name,
                "frequency axis differs between real and imaginary parts",
            ));
        }
        if real.axes.m != imag.axes.m {
            return Err(ConversionError::shape(
                name,
                "m axis differs between real and imaginary parts",
            ));
        }
        if real.axes.n != imag.axes.n {
            return Err(ConversionError::shape(
                name,
                "n axis differs between real and imaginary parts",
            ));
        }
        if real.source_files != imag.source_files {
            log::warn!("{name}: real and imaginary parts list different source files, keeping the imaginary part's");
        }

        let samples = Zip::from(&real.values)
            .and(&imag.values)
            .map_collect(|&re, &im| Complex64::new(re, im));

        Self::new(
            name,
            samples,
            imag.axes.clone(),
            imag.source_files.clone(),
        )
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn samples(&self) -> &Array3<Complex64> {
        &self.samples
    }

    #[inline]
    pub fn axes(&self) -> &SpectrumAxes {
        &self.axes
    }

    #[inline]
    pub fn frequency(&self) -> &Frequency {
        &self.axes.frequency
    }

    #[inline]
    pub fn m(&self) -> &[PortIndex] {
        &self.axes.m
    }

    #[inline]
    pub fn n(&self) -> &[PortIndex] {
        &self.axes.n
    }

    #[inline]
    pub fn source_files(&self) -> &[String] {
        &self.source_files
    }

    /// Get the number of frequency points
    #[inline]
    pub fn nfreq(&self) -> usize {
        self.samples.shape()[0]
    }
}

fn check_axes(name: &str, dim: (usize, usize, usize), axes: &SpectrumAxes) -> Result<()> {
    if dim != axes.shape() {
        let (nf, nm, nn) = dim;
        let (af, am, an) = axes.shape();
        return Err(ConversionError::shape(
            name,
            format!(
                "data has shape [{nf}, {nm}, {nn}] but the frequency, m and n axes have lengths [{af}, {am}, {an}]"
            ),
        ));
    }
    if let Some(port) = first_duplicate(&axes.m) {
        return Err(ConversionError::malformed(
            name,
            format!("port {port} appears more than once on the m axis"),
        ));
    }
    if let Some(port) = first_duplicate(&axes.n) {
        return Err(ConversionError::malformed(
            name,
            format!("port {port} appears more than once on the n axis"),
        ));
    }
    Ok(())
}
