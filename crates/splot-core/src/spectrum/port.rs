//! Port identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one port along the m or n axis
///
/// Measurement files label ports with integers most of the time, but
/// floats and free-form labels occur too. The variant read from the wire
/// is the variant written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortIndex {
    Int(i64),
    Float(f64),
    Label(String),
}

impl fmt::Display for PortIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortIndex::Int(i) => write!(f, "{i}"),
            PortIndex::Float(x) => write_float(f, *x),
            PortIndex::Label(s) => f.write_str(s),
        }
    }
}

/// Write a float the way Python's `repr` does, so that series keys match
/// the ones the web frontend already knows (`1.0`, `1e+16`, `1e-05`)
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("nan");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "inf" } else { "-inf" });
    }

    // shortest round-trip digits, e.g. "-1.5e16"
    let sci = format!("{x:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return f.write_str(&sci);
    };
    let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
    if (-4..16).contains(&exp) {
        // Debug keeps the trailing ".0" on whole floats
        write!(f, "{x:?}")
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}

impl From<i64> for PortIndex {
    fn from(i: i64) -> Self {
        PortIndex::Int(i)
    }
}

impl From<f64> for PortIndex {
    fn from(x: f64) -> Self {
        PortIndex::Float(x)
    }
}

impl From<&str> for PortIndex {
    fn from(s: &str) -> Self {
        PortIndex::Label(s.to_string())
    }
}

impl From<String> for PortIndex {
    fn from(s: String) -> Self {
        PortIndex::Label(s)
    }
}

/// Key of the series for port pair (m, n), e.g. `s21`
pub fn series_key(m: &PortIndex, n: &PortIndex) -> String {
    format!("s{m}{n}")
}

/// Port list `1..=nports`, the usual labelling of an N-port
pub fn port_range(nports: usize) -> Vec<PortIndex> {
    (1..=nports as i64).map(PortIndex::Int).collect()
}

/// First port identifier that appears more than once
pub(crate) fn first_duplicate(ports: &[PortIndex]) -> Option<&PortIndex> {
    ports
        .iter()
        .enumerate()
        .find(|(i, p)| ports[..*i].contains(p))
        .map(|(_, p)| p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(PortIndex::Int(2).to_string(), "2");
        assert_eq!(PortIndex::Float(1.0).to_string(), "1.0");
        assert_eq!(PortIndex::Float(2.5).to_string(), "2.5");
        assert_eq!(PortIndex::from("a").to_string(), "a");
    }

    #[test]
    fn test_display_float_exponents() {
        let shown = |x: f64| PortIndex::Float(x).to_string();
        assert_eq!(shown(1e16), "1e+16");
        assert_eq!(shown(-1.5e16), "-1.5e+16");
        assert_eq!(shown(1e15), "1000000000000000.0");
        assert_eq!(shown(1e300), "1e+300");
        assert_eq!(shown(1e-5), "1e-05");
        assert_eq!(shown(2.5e-7), "2.5e-07");
        assert_eq!(shown(0.0001), "0.0001");
        assert_eq!(shown(0.0), "0.0");
        assert_eq!(shown(f64::INFINITY), "inf");
        assert_eq!(shown(f64::NAN), "nan");
        assert_eq!(series_key(&1e16.into(), &1.into()), "s1e+161");
    }

    #[test]
    fn test_series_key() {
        assert_eq!(series_key(&1.into(), &2.into()), "s12");
        assert_eq!(series_key(&"in".into(), &"out".into()), "sinout");
    }

    #[test]
    fn test_untagged_json() {
        let ports: Vec<PortIndex> = serde_json::from_str(r#"[1, 2.5, "x", -3]"#).unwrap();
        assert_eq!(
            ports,
            vec![
                PortIndex::Int(1),
                PortIndex::Float(2.5),
                PortIndex::Label("x".into()),
                PortIndex::Int(-3)
            ]
        );
        assert_eq!(serde_json::to_string(&ports).unwrap(), r#"[1,2.5,"x",-3]"#);
    }

    #[test]
    fn test_first_duplicate() {
        assert_eq!(first_duplicate(&port_range(3)), None);
        let ports = vec![PortIndex::Int(1), PortIndex::Int(2), PortIndex::Int(1)];
        assert_eq!(first_duplicate(&ports), Some(&PortIndex::Int(1)));
        // 1 and 1.0 are different identifiers
        let ports = vec![PortIndex::Int(1), PortIndex::Float(1.0)];
        assert_eq!(first_duplicate(&ports), None);
    }
}
