//! splot-core: S-parameter to VSWR conversion
//!
//! Turns measured network parameters, sent as separate real and imaginary
//! arrays, into plot-ready VSWR curves.
//!
//! ## Modules
//!
//! - `math` - Unit conversions (dB, linear voltage, VSWR)
//! - `frequency` - Frequency axis representation
//! - `spectrum` - Split and complex measurement types
//! - `pipeline` - Batch conversion into envelopes
//! - `envelope` - Response structure
//! - `wire` - JSON request/response codec
//! - `config` - Repository URL lookup

pub mod config;
pub mod constants;
pub mod envelope;
pub mod error;
pub mod frequency;
pub mod math;
pub mod pipeline;
pub mod spectrum;
pub mod wire;

pub use config::Config;
pub use envelope::{Envelope, EnvelopeMap, VswrPoint, VswrSeries};
pub use error::{ConversionError, Result};
pub use frequency::Frequency;
pub use pipeline::{convert_batch, convert_batch_lenient};
pub use spectrum::{ComplexSpectrum, PortIndex, SplitDataset};
