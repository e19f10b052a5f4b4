//! Query string encoding.
//!
//! A `ParameterSet` is an insertion-ordered map from parameter name to either
//! a raw value or a presence-only flag. `encode` renders it as a `?`-prefixed
//! suffix ready to append to an endpoint path.
//!
//! Omission rules:
//! - a flag renders as `name=` when set and is never stored when unset;
//! - a value that is the empty string is dropped at encode time, so "absent"
//!   and "empty" never reach the wire as different things;
//! - if nothing survives, the suffix is `""`, never a bare `?`.

use std::fmt::Display;

/// Value side of a `ParameterSet` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A raw, unencoded value.
    Value(String),
    /// Emitted as `name=` to signal a boolean condition.
    Flag,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `name`. A replaced entry keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.put(name.into(), ParamValue::Value(value.into()));
        self
    }

    /// Insert `name` with its `Display` rendering when `value` is present.
    pub fn insert_opt<T: Display>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.put(name.to_string(), ParamValue::Value(value.to_string()));
        }
        self
    }

    /// Mark `name` as a presence-only flag when `present` is true.
    pub fn flag(&mut self, name: &str, present: bool) -> &mut Self {
        if present {
            self.put(name.to_string(), ParamValue::Flag);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn encode(&self) -> String {
        encode(self)
    }

    fn put(&mut self, name: String, value: ParamValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = ParameterSet::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Render `params` as a query suffix: `""` or `?name=value&...`.
pub fn encode(params: &ParameterSet) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(name, value)| match value {
            ParamValue::Flag => Some(format!("{name}=")),
            ParamValue::Value(v) if v.is_empty() => None,
            ParamValue::Value(v) => Some(format!("{name}={}", encode_component(v))),
        })
        .collect();

    if pairs.is_empty() {
        return String::new();
    }
    format!("?{}", pairs.join("&"))
}

/// Percent-encode a single query value or path segment.
///
/// Only `A-Z a-z 0-9 - _ . ~` pass through; every other byte of the UTF-8
/// input becomes `%XX`.
pub fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
