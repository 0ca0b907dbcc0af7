//! JSON wire format
//!
//! Request bodies are an array of single-key objects, each mapping a file
//! name to the xarray `to_dict()` dumps of its real and imaginary parts:
//!
//! ```json
//! [
//!   { "deviceA.s1p": {
//!       "real": { "dims": ["frequency", "m", "n"],
//!                 "attrs": { "filepaths": ["deviceA.s1p"] },
//!                 "data": [[[0.5]], [[0.5]]],
//!                 "coords": { "frequency": { "dims": ["frequency"], "attrs": {}, "data": [1e9, 2e9] },
//!                             "m": { "dims": ["m"], "attrs": {}, "data": [1] },
//!                             "n": { "dims": ["n"], "attrs": {}, "data": [1] } },
//!                 "name": null },
//!       "imag": { ... } } }
//! ]
//! ```
//!
//! Responses are the serialized [`EnvelopeMap`].

use ndarray::Array3;
use serde::Deserialize;
use serde_json::Value;

use crate::envelope::EnvelopeMap;
use crate::error::{ConversionError, Result};
use crate::frequency::Frequency;
use crate::pipeline::{convert_batch, convert_batch_lenient, BatchOutcome};
use crate::spectrum::{ComponentArray, PortIndex, SpectrumAxes, SplitDataset};

const FREQUENCY_DIM: &str = "frequency";
const M_DIM: &str = "m";
const N_DIM: &str = "n";

#[derive(Debug, Deserialize)]
struct WireCoord<T> {
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct WireCoords {
    frequency: WireCoord<f64>,
    m: WireCoord<PortIndex>,
    n: WireCoord<PortIndex>,
}

#[derive(Debug, Deserialize)]
struct WireAttrs {
    filepaths: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WireData {
    dims: Vec<String>,
    attrs: WireAttrs,
    data: Vec<Vec<Vec<f64>>>,
    coords: WireCoords,
}

#[derive(Debug, Deserialize)]
struct WireComplex {
    real: WireData,
    imag: WireData,
}

/// Decode a request body into split datasets, failing on the first bad one
pub fn decode_request(body: &str) -> Result<Vec<SplitDataset>> {
    decode_items(body)?.into_iter().collect()
}

/// Decode a request body, keeping a per-dataset result
///
/// Only a body that is not a JSON array fails as a whole; items that are
/// not objects or hold no dataset come back as item-level errors.
pub fn decode_request_lenient(body: &str) -> Result<Vec<Result<SplitDataset>>> {
    decode_items(body)
}

fn decode_items(body: &str) -> Result<Vec<Result<SplitDataset>>> {
    let Value::Array(items) = serde_json::from_str::<Value>(body)? else {
        return Err(ConversionError::InvalidRequest(
            "expected a JSON array of datasets".to_string(),
        ));
    };

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(i, item)| decode_item(i, item))
        .collect())
}

fn decode_item(i: usize, item: Value) -> Result<SplitDataset> {
    let Value::Object(object) = item else {
        return Err(ConversionError::InvalidRequest(format!(
            "item {i} is not an object"
        )));
    };
    let mut entries = object.into_iter();
    let (name, payload) = entries
        .next()
        .ok_or_else(|| ConversionError::InvalidRequest(format!("item {i} holds no dataset")))?;
    for (extra, _) in entries {
        log::warn!("item {i}: ignoring extra dataset `{extra}`, only `{name}` is read");
    }
    decode_dataset(name, payload)
}

fn decode_dataset(name: String, payload: Value) -> Result<SplitDataset> {
    let complex: WireComplex = serde_json::from_value(payload)
        .map_err(|e| ConversionError::malformed(&name, e.to_string()))?;
    let real = component(&name, "real", complex.real)?;
    let imag = component(&name, "imag", complex.imag)?;
    Ok(SplitDataset::new(name, real, imag))
}

/// Turn one xarray dump into a (frequency, m, n) component array
fn component(name: &str, part: &str, wire: WireData) -> Result<ComponentArray> {
    let order = axis_order(&wire.dims).ok_or_else(|| {
        ConversionError::malformed(
            name,
            format!(
                "{part}: dims must name frequency, m and n exactly once, got {:?}",
                wire.dims
            ),
        )
    })?;

    let coords = wire.coords;
    let lengths = [
        coords.frequency.data.len(),
        coords.m.data.len(),
        coords.n.data.len(),
    ];
    // shape the coordinates imply, in the order the data is nested
    let mut nested = [0; 3];
    for (axis, &pos) in order.iter().enumerate() {
        nested[pos] = lengths[axis];
    }

    let values = nested_to_array(name, part, wire.data, nested)?.permuted_axes(order);
    let axes = SpectrumAxes::new(
        Frequency::from_hz(coords.frequency.data),
        coords.m.data,
        coords.n.data,
    );
    Ok(ComponentArray::new(values, axes, wire.attrs.filepaths))
}

/// Position of frequency, m and n in `dims`
fn axis_order(dims: &[String]) -> Option<[usize; 3]> {
    if dims.len() != 3 {
        return None;
    }
    let find = |dim: &str| dims.iter().position(|d| d == dim);
    let order = [find(FREQUENCY_DIM)?, find(M_DIM)?, find(N_DIM)?];
    let distinct = order[0] != order[1] && order[1] != order[2] && order[0] != order[2];
    distinct.then_some(order)
}

/// Dense array from nested lists; `fallback` sizes axes left empty
fn nested_to_array(
    name: &str,
    part: &str,
    data: Vec<Vec<Vec<f64>>>,
    fallback: [usize; 3],
) -> Result<Array3<f64>> {
    let d0 = data.len();
    let d1 = data.first().map_or(fallback[1], Vec::len);
    let d2 = data
        .first()
        .and_then(|plane| plane.first())
        .map_or(fallback[2], Vec::len);

    let mut flat = Vec::with_capacity(d0 * d1 * d2);
    for (i, plane) in data.into_iter().enumerate() {
        if plane.len() != d1 {
            return Err(ConversionError::malformed(
                name,
                format!("{part}: ragged data, row {i} has {} entries instead of {d1}", plane.len()),
            ));
        }
        for (j, row) in plane.into_iter().enumerate() {
            if row.len() != d2 {
                return Err(ConversionError::malformed(
                    name,
                    format!(
                        "{part}: ragged data, row [{i}, {j}] has {} entries instead of {d2}",
                        row.len()
                    ),
                ));
            }
            flat.extend(row);
        }
    }

    Array3::from_shape_vec((d0, d1, d2), flat)
        .map_err(|e| ConversionError::malformed(name, format!("{part}: {e}")))
}

/// Serialize an envelope map
pub fn encode_response(envelopes: &EnvelopeMap) -> Result<String> {
    Ok(serde_json::to_string(envelopes)?)
}

/// Serialize an envelope map with indentation
pub fn encode_response_pretty(envelopes: &EnvelopeMap) -> Result<String> {
    Ok(serde_json::to_string_pretty(envelopes)?)
}

/// Decode, convert and encode a whole request
pub fn convert_json(body: &str) -> Result<String> {
    let datasets = decode_request(body)?;
    encode_response(&convert_batch(&datasets)?)
}

/// Decode and convert a request, collecting per-dataset failures
///
/// Decode failures come first in `failures`, followed by conversion
/// failures, each group in input order.
pub fn convert_request_lenient(body: &str) -> Result<BatchOutcome> {
    let mut failures = Vec::new();
    let mut datasets = Vec::new();
    for decoded in decode_request_lenient(body)? {
        match decoded {
            Ok(dataset) => datasets.push(dataset),
            Err(err) => {
                log::debug!("skipping dataset: {err}");
                failures.push(err);
            }
        }
    }

    let mut outcome = convert_batch_lenient(&datasets);
    failures.append(&mut outcome.failures);
    outcome.failures = failures;
    Ok(outcome)
}

/// Like [`convert_json`], but invalid datasets are reported instead of
/// failing the request
pub fn convert_json_lenient(body: &str) -> Result<(String, Vec<ConversionError>)> {
    let outcome = convert_request_lenient(body)?;
    Ok((encode_response(&outcome.envelopes)?, outcome.failures))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(dims: &[&str], values: Value) -> Value {
        json!({
            "dims": dims,
            "attrs": { "filepaths": ["dut.s2p"] },
            "data": values,
            "coords": {
                "frequency": { "dims": ["frequency"], "attrs": {}, "data": [1e9, 2e9] },
                "m": { "dims": ["m"], "attrs": {}, "data": [1, 2] },
                "n": { "dims": ["n"], "attrs": {}, "data": [1] }
            },
            "name": null
        })
    }

    #[test]
    fn test_axis_order() {
        let dims = |d: &[&str]| d.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(axis_order(&dims(&["frequency", "m", "n"])), Some([0, 1, 2]));
        assert_eq!(axis_order(&dims(&["m", "n", "frequency"])), Some([2, 0, 1]));
        assert_eq!(axis_order(&dims(&["frequency", "m"])), None);
        assert_eq!(axis_order(&dims(&["frequency", "m", "m"])), None);
        assert_eq!(axis_order(&dims(&["frequency", "m", "port"])), None);
    }

    #[test]
    fn test_transposed_dims_are_reordered() {
        // nested as (m, frequency, n)
        let values = json!([[[0.1], [0.2]], [[0.3], [0.4]]]);
        let wire: WireData =
            serde_json::from_value(data(&["m", "frequency", "n"], values)).unwrap();
        let array = component("dut", "real", wire).unwrap();

        assert_eq!(array.values.dim(), (2, 2, 1));
        assert_eq!(array.values[[1, 0, 0]], 0.2);
        assert_eq!(array.values[[0, 1, 0]], 0.3);
        assert_eq!(array.source_files, vec!["dut.s2p".to_string()]);
    }

    #[test]
    fn test_ragged_data_is_malformed() {
        let values = json!([[[0.1], [0.2]], [[0.3]]]);
        let wire: WireData =
            serde_json::from_value(data(&["frequency", "m", "n"], values)).unwrap();
        let err = component("dut", "imag", wire).unwrap_err();
        assert!(matches!(err, ConversionError::MalformedDataset { .. }));
        assert!(err.to_string().contains("ragged"));
    }

    #[test]
    fn test_missing_coordinate_is_malformed() {
        let mut real = data(&["frequency", "m", "n"], json!([[[0.1], [0.2]], [[0.3], [0.4]]]));
        real["coords"].as_object_mut().unwrap().remove("n");
        let body = json!([{ "dut": { "real": real.clone(), "imag": real } }]).to_string();

        let err = decode_request(&body).unwrap_err();
        assert_eq!(err.file(), Some("dut"));
        assert!(err.to_string().contains("missing field `n`"));
    }

    #[test]
    fn test_request_must_be_an_array_of_objects() {
        assert!(matches!(
            decode_request(r#"{"dut": {}}"#),
            Err(ConversionError::InvalidRequest(_))
        ));
        assert!(matches!(
            decode_request("[1]"),
            Err(ConversionError::InvalidRequest(_))
        ));
        assert!(matches!(
            decode_request("[{}]"),
            Err(ConversionError::InvalidRequest(_))
        ));
        assert!(matches!(decode_request("[{"), Err(ConversionError::Json(_))));
        assert!(decode_request("[]").unwrap().is_empty());
    }

    #[test]
    fn test_lenient_decode_reports_bad_items_individually() {
        let part = data(&["frequency", "m", "n"], json!([[[0.1], [0.2]], [[0.3], [0.4]]]));
        let body = json!([{}, { "dut": { "real": part.clone(), "imag": part } }, 1]).to_string();

        let decoded = decode_request_lenient(&body).unwrap();
        assert_eq!(decoded.len(), 3);
        assert!(matches!(decoded[0], Err(ConversionError::InvalidRequest(_))));
        assert_eq!(decoded[1].as_ref().unwrap().name, "dut");
        assert!(matches!(decoded[2], Err(ConversionError::InvalidRequest(_))));

        assert!(matches!(
            decode_request(&body),
            Err(ConversionError::InvalidRequest(_))
        ));
        assert!(matches!(
            decode_request_lenient(r#"{"dut": {}}"#),
            Err(ConversionError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_lenient_request_orders_decode_failures_first() {
        let part = data(&["frequency", "m", "n"], json!([[[0.1], [0.2]], [[0.3], [0.4]]]));
        let mut short = part.clone();
        short["coords"]["frequency"]["data"] = json!([1e9]);
        let body = json!([
            { "bad_axis": { "real": part.clone(), "imag": short } },
            { "dut": { "real": part.clone(), "imag": part } },
            {}
        ])
        .to_string();

        let outcome = convert_request_lenient(&body).unwrap();
        assert_eq!(outcome.envelopes.names().collect::<Vec<_>>(), vec!["dut"]);
        assert_eq!(outcome.failures.len(), 2);
        assert!(matches!(outcome.failures[0], ConversionError::InvalidRequest(_)));
        assert_eq!(outcome.failures[1].file(), Some("bad_axis"));
    }

    #[test]
    fn test_only_first_key_is_read() {
        let part = data(&["frequency", "m", "n"], json!([[[0.1], [0.2]], [[0.3], [0.4]]]));
        let body = json!([{
            "first": { "real": part.clone(), "imag": part.clone() },
            "second": { "real": part.clone(), "imag": part }
        }])
        .to_string();

        let datasets = decode_request(&body).unwrap();
        assert_eq!(datasets.len(), 1);
        assert_eq!(datasets[0].name, "first");
    }
}
