//! Python bindings for the conversion functions

use ndarray::Zip;
use num_complex::Complex64;
use numpy::{PyArray3, PyArrayDyn, PyReadonlyArray3, PyReadonlyArrayDyn, ToPyArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use splot_core::math::{db_2_mag_array, s_2_vswr};
use splot_core::{pipeline, wire, Config};

/// Convert a JSON request body into the JSON envelope map
///
/// Args:
///     payload: Request body, a list of {file name: {real, imag}} objects
///
/// Raises:
///     ValueError: if any dataset is malformed or inconsistent
#[pyfunction]
pub fn convert_json(payload: &str) -> PyResult<String> {
    wire::convert_json(payload).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// VSWR of `real + 1j*imag` as a [nfreq, nm, nn] array
///
/// Args:
///     real: Real parts [nfreq, nm, nn]
///     imag: Imaginary parts, same shape
///     sanitized: Replace NaN/inf with 0/±max float (default: True)
#[pyfunction]
#[pyo3(signature = (real, imag, sanitized=true))]
pub fn vswr<'py>(
    py: Python<'py>,
    real: PyReadonlyArray3<'py, f64>,
    imag: PyReadonlyArray3<'py, f64>,
    sanitized: bool,
) -> PyResult<Bound<'py, PyArray3<f64>>> {
    let (real, imag) = (real.as_array(), imag.as_array());
    if real.shape() != imag.shape() {
        return Err(PyValueError::new_err(format!(
            "real has shape {:?} but imag has shape {:?}",
            real.shape(),
            imag.shape()
        )));
    }

    let s = Zip::from(&real)
        .and(&imag)
        .map_collect(|&re, &im| Complex64::new(re, im));
    let vswr = s_2_vswr(&s);
    let vswr = if sanitized {
        pipeline::sanitize(&vswr)
    } else {
        vswr
    };
    Ok(vswr.to_pyarray(py))
}

/// Replace NaN with 0 and ±inf with ±max float, any shape
#[pyfunction]
pub fn sanitize<'py>(
    py: Python<'py>,
    values: PyReadonlyArrayDyn<'py, f64>,
) -> Bound<'py, PyArrayDyn<f64>> {
    pipeline::sanitize(&values.as_array()).to_pyarray(py)
}

/// Convert dB values to linear voltage ratio, any shape
#[pyfunction]
pub fn db_2_mag<'py>(
    py: Python<'py>,
    values: PyReadonlyArrayDyn<'py, f64>,
) -> Bound<'py, PyArrayDyn<f64>> {
    db_2_mag_array(&values.as_array()).to_pyarray(py)
}

/// Repository URL, honouring SPLOT_REPO_URL
#[pyfunction]
pub fn repo_url() -> String {
    Config::from_env().repo_url
}
