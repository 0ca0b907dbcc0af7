//! WASM bindings for splot-core
//!
//! This module exposes the VSWR pipeline to the browser frontend.

use wasm_bindgen::prelude::*;

mod convert;

pub use convert::{convert_batch, convert_batch_lenient, vswr};

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
