//! Spectrum module - named complex S-parameter measurements
//!
//! Provides the split (real/imaginary) input types, the joined
//! `ComplexSpectrum` and the port identifiers that label its axes.

mod core;
mod derived;
mod port;

pub use self::core::{ComplexSpectrum, ComponentArray, SpectrumAxes, SplitDataset};
pub use port::{port_range, series_key, PortIndex};
