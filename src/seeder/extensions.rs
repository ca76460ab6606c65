//! Extension attribute parsing
//!
//! Extension attributes arrive as a single flat spec string of the form
//! `name:value;name:value`. Parsing is deliberately lenient: a segment is
//! kept only when splitting it on `:` yields exactly two parts; everything
//! else is dropped without an error or a log line.

use std::collections::HashMap;

/// Attribute name/value mapping applied to every built event
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtensionMap(HashMap<String, String>);

impl ExtensionMap {
    /// Parse a raw extension spec into a map.
    ///
    /// Segments are separated by `;`, name and value by `:`. A segment with
    /// zero or more than one `:` is discarded. On duplicate names the last
    /// occurrence wins. An empty spec yields an empty map.
    pub fn parse(spec: &str) -> Self {
        let mut entries = HashMap::new();
        for segment in spec.split(';') {
            let parts: Vec<&str> = segment.split(':').collect();
            if let [name, value] = parts.as_slice() {
                entries.insert((*name).to_string(), (*value).to_string());
            }
        }
        Self(entries)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
