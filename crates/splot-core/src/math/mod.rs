//! Mathematical functions module
//!
//! Provides the unit conversions used by the VSWR pipeline.

pub mod conversions;

pub use conversions::*;
