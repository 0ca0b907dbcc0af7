//! Python bindings for splot-core
//!
//! This module exposes the VSWR conversion pipeline to Python via PyO3.
//!
//! ## Classes
//!
//! - `Spectrum` - Named complex S-parameter measurement
//!
//! ## Functions
//!
//! - `convert_json` - Full request conversion (JSON in, JSON out)
//! - `vswr`, `sanitize`, `db_2_mag` - Array conversions
//! - `repo_url` - Configured repository URL

use pyo3::prelude::*;

mod convert;
mod spectrum;

pub use spectrum::PySpectrum;

/// splot_python - Python bindings for the splot VSWR pipeline
///
/// Example:
///     >>> import splot_python as splot
///     >>> body = splot.convert_json(request_json)
///     >>> vswr = splot.vswr(real, imag)
#[pymodule]
fn splot_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySpectrum>()?;

    m.add_function(wrap_pyfunction!(convert::convert_json, m)?)?;
    m.add_function(wrap_pyfunction!(convert::vswr, m)?)?;
    m.add_function(wrap_pyfunction!(convert::sanitize, m)?)?;
    m.add_function(wrap_pyfunction!(convert::db_2_mag, m)?)?;
    m.add_function(wrap_pyfunction!(convert::repo_url, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
