//! Outgoing request fields
//!
//! DirectLink requests are flat name/value forms. Field names are
//! case-sensitive on the wire; insertion order is preserved so that bodies
//! are reproducible.

use indexmap::IndexMap;

/// Ordered set of request fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFields {
    fields: IndexMap<String, String>,
}

impl RequestFields {
    pub fn new() -> Self {
        RequestFields::default()
    }

    /// Add a field unless the value is absent or blank
    ///
    /// Blank means empty or whitespace only. An existing field with the same
    /// name is overwritten in place.
    pub fn add_pair<V: AsRef<str>>(&mut self, name: &str, value: Option<V>) {
        if let Some(value) = value {
            let value = value.as_ref();
            if !value.trim().is_empty() {
                self.fields.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Set a field unconditionally, blank values included
    ///
    /// The field ends up present exactly once; overwriting keeps its
    /// original position.
    pub fn set(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Whether `name` is present with a non-blank value
    pub fn has_value(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.trim().is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
