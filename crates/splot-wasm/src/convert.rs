//! WASM bindings for the conversion functions

use js_sys::{Array, Float64Array, Object, Reflect};
use ndarray::Array1;
use num_complex::Complex64;
use splot_core::math::s_2_vswr;
use splot_core::{pipeline, wire};
use wasm_bindgen::prelude::*;

/// Convert a request body (JSON string) into the envelope map (JSON string)
///
/// @param payload - JSON array of {fileName: {real, imag}} objects
/// @throws if any dataset is malformed or inconsistent
#[wasm_bindgen(js_name = convertBatch)]
pub fn convert_batch(payload: &str) -> Result<String, JsValue> {
    wire::convert_json(payload).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Like `convertBatch` but skips invalid datasets
///
/// Returns `{ body: string, errors: string[] }`.
#[wasm_bindgen(js_name = convertBatchLenient)]
pub fn convert_batch_lenient(payload: &str) -> Result<JsValue, JsValue> {
    let (body, failures) =
        wire::convert_json_lenient(payload).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let errors = Array::new();
    for failure in &failures {
        errors.push(&JsValue::from_str(&failure.to_string()));
    }

    let result = Object::new();
    Reflect::set(&result, &JsValue::from_str("body"), &JsValue::from_str(&body))?;
    Reflect::set(&result, &JsValue::from_str("errors"), &errors)?;
    Ok(result.into())
}

/// Sanitized VSWR of `re + j*im`, element-wise
///
/// @param re - Real parts (any flattened shape)
/// @param im - Imaginary parts, same length
#[wasm_bindgen]
pub fn vswr(re: &Float64Array, im: &Float64Array) -> Result<Float64Array, JsValue> {
    if re.length() != im.length() {
        return Err(JsValue::from_str(&format!(
            "re has {} values but im has {}",
            re.length(),
            im.length()
        )));
    }
    let s: Array1<Complex64> = re
        .to_vec()
        .into_iter()
        .zip(im.to_vec())
        .map(|(re, im)| Complex64::new(re, im))
        .collect();
    let vswr = pipeline::sanitize(&s_2_vswr(&s)).to_vec();
    Ok(Float64Array::from(vswr.as_slice()))
}
