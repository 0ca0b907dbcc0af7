//! Python bindings for the Spectrum class

use ndarray::Zip;
use num_complex::Complex64;
use numpy::{PyArray1, PyArray3, PyReadonlyArray1, PyReadonlyArray3, ToPyArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use splot_core::frequency::Frequency;
use splot_core::pipeline::{flatten, sanitize};
use splot_core::spectrum::{port_range, ComplexSpectrum, PortIndex, SpectrumAxes};
use splot_core::{wire, EnvelopeMap};

/// Python wrapper for ComplexSpectrum
#[pyclass(name = "Spectrum")]
pub struct PySpectrum {
    inner: ComplexSpectrum,
}

fn ports(given: Option<Vec<i64>>, len: usize) -> Vec<PortIndex> {
    match given {
        Some(ports) => ports.into_iter().map(PortIndex::Int).collect(),
        None => port_range(len),
    }
}

#[pymethods]
impl PySpectrum {
    /// Build a spectrum from split real/imaginary arrays
    ///
    /// Args:
    ///     name: File name used as label
    ///     real: Real parts [nfreq, nm, nn]
    ///     imag: Imaginary parts, same shape
    ///     frequency: Frequencies in Hz [nfreq]
    ///     m: Port numbers of the m axis (default: 1..=nm)
    ///     n: Port numbers of the n axis (default: 1..=nn)
    #[new]
    #[pyo3(signature = (name, real, imag, frequency, m=None, n=None))]
    pub fn new(
        name: &str,
        real: PyReadonlyArray3<'_, f64>,
        imag: PyReadonlyArray3<'_, f64>,
        frequency: PyReadonlyArray1<'_, f64>,
        m: Option<Vec<i64>>,
        n: Option<Vec<i64>>,
    ) -> PyResult<Self> {
        let (real, imag) = (real.as_array(), imag.as_array());
        if real.shape() != imag.shape() {
            return Err(PyValueError::new_err(format!(
                "{name}: real has shape {:?} but imag has shape {:?}",
                real.shape(),
                imag.shape()
            )));
        }
        let (_, nm, nn) = real.dim();
        let axes = SpectrumAxes::new(
            Frequency::from_hz(frequency.as_array().to_vec()),
            ports(m, nm),
            ports(n, nn),
        );
        let samples = Zip::from(&real)
            .and(&imag)
            .map_collect(|&re, &im| Complex64::new(re, im));

        ComplexSpectrum::new(name, samples, axes, Vec::new())
            .map(|inner| Self { inner })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// File name
    #[getter]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Number of frequency points
    #[getter]
    pub fn nfreq(&self) -> usize {
        self.inner.nfreq()
    }

    /// Port labels of the m axis
    #[getter]
    pub fn m(&self) -> Vec<String> {
        self.inner.m().iter().map(ToString::to_string).collect()
    }

    /// Port labels of the n axis
    #[getter]
    pub fn n(&self) -> Vec<String> {
        self.inner.n().iter().map(ToString::to_string).collect()
    }

    /// Get frequency array in Hz as numpy array
    #[getter]
    pub fn f<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.frequency().f().to_pyarray(py)
    }

    /// Get S-parameters as complex numpy array [nfreq, nm, nn]
    #[getter]
    pub fn s<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray3<Complex64>> {
        self.inner.samples().to_pyarray(py)
    }

    /// Get S-parameters linear magnitude as numpy array [nfreq, nm, nn]
    #[getter]
    pub fn s_mag<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray3<f64>> {
        self.inner.s_mag().to_pyarray(py)
    }

    /// Get S-parameters magnitude in dB as numpy array [nfreq, nm, nn]
    #[getter]
    pub fn s_db<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray3<f64>> {
        self.inner.s_db().to_pyarray(py)
    }

    /// Get unsanitized VSWR as numpy array [nfreq, nm, nn]
    #[getter]
    pub fn vswr<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray3<f64>> {
        self.inner.vswr().to_pyarray(py)
    }

    /// Envelope of this spectrum as JSON, keyed by its name
    pub fn envelope_json(&self) -> PyResult<String> {
        let envelope = flatten(&self.inner, &sanitize(&self.inner.vswr()));
        let mut map = EnvelopeMap::new();
        map.insert(self.inner.name(), envelope);
        wire::encode_response(&map).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "Spectrum(name={:?}, nfreq={}, m={}, n={})",
            self.inner.name(),
            self.inner.nfreq(),
            self.inner.m().len(),
            self.inner.n().len()
        )
    }
}
