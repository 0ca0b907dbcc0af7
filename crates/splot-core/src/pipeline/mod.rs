//! Batch conversion pipeline
//!
//! split dataset -> `ComplexSpectrum` -> VSWR -> sanitized -> envelope.

mod batch;
mod flatten;
mod sanitize;

pub use batch::{convert_batch, convert_batch_lenient, convert_dataset, BatchOutcome};
pub use flatten::flatten;
pub use sanitize::{display_value, round_decimals, sanitize, sanitize_value};
