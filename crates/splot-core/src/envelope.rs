//! Response envelope
//!
//! The plot-ready structure handed back to clients: one [`Envelope`] per
//! file, each holding one [`VswrSeries`] per port pair.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::spectrum::PortIndex;

/// One plotted point
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct VswrPoint {
    /// Frequency in GHz
    pub frequency: f64,
    pub value: f64,
}

/// VSWR curve of one port pair of one file
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct VswrSeries {
    /// Display label, `"<file> s<m><n>"`
    pub name: String,
    pub visible: bool,
    pub data: Vec<VswrPoint>,
}

impl VswrSeries {
    pub fn new(name: impl Into<String>, data: Vec<VswrPoint>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            data,
        }
    }
}

/// Everything computed for one file
///
/// Serializes as a flat object: `m`, `n`, one `s<m><n>` entry per port pair
/// in (m, n) order, then `del`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Envelope {
    pub m: Vec<PortIndex>,
    pub n: Vec<PortIndex>,
    series: Vec<(String, VswrSeries)>,
    /// Deletion flag used by the frontend; false for fresh results
    pub del: bool,
}

impl Envelope {
    pub fn new(m: Vec<PortIndex>, n: Vec<PortIndex>) -> Self {
        Self {
            m,
            n,
            series: Vec::new(),
            del: false,
        }
    }

    /// Insert a series, replacing (in place) one with the same key
    pub fn insert_series(&mut self, key: String, series: VswrSeries) {
        match self.series.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = series,
            None => self.series.push((key, series)),
        }
    }

    pub fn series(&self, key: &str) -> Option<&VswrSeries> {
        self.series.iter().find(|(k, _)| k == key).map(|(_, s)| s)
    }

    /// Series in insertion order
    pub fn iter_series(&self) -> impl Iterator<Item = (&str, &VswrSeries)> {
        self.series.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.series.len() + 3))?;
        map.serialize_entry("m", &self.m)?;
        map.serialize_entry("n", &self.n)?;
        for (key, series) in &self.series {
            map.serialize_entry(key, series)?;
        }
        map.serialize_entry("del", &self.del)?;
        map.end()
    }
}

/// File name -> envelope, in insertion order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnvelopeMap {
    entries: Vec<(String, Envelope)>,
}

impl EnvelopeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an envelope; a repeated file name replaces the earlier entry
    /// but keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, envelope: Envelope) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = envelope,
            None => self.entries.push((name, envelope)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Envelope> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Envelope)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for EnvelopeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, envelope) in &self.entries {
            map.serialize_entry(name, envelope)?;
        }
        map.end()
    }
}
