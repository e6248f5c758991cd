//! The ordered parameter mapping built for each request.
//!
//! Every endpoint method reduces to a fixed list of (argument, wire key,
//! transform) applications against a [`Params`] value, which the shell
//! then renders as a query string, a form-encoded body, or a JSON object.
//!
//! The inclusion rule is uniform: a wire key is present iff the caller
//! supplied a usable value for it. Unset options, empty strings, empty
//! lists and zero all count as "not supplied"; the server cannot tell an
//! explicit empty value from an omitted one, which mirrors the API being
//! wrapped. Tri-state boolean filters ([`Params::flag`]) are the one
//! exception: an explicit `false` is meaningful there and goes out as
//! `"0"`.

use serde_json::Value;

/// A single wire-level value.
///
/// Values stay typed until rendering so the same mapping can serve both
/// text encodings (query string, form body) and JSON bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(u32),
    Bool(bool),
    StrList(Vec<String>),
    IntList(Vec<u32>),
}

/// Ordered mapping from wire key to value, built fresh per call.
///
/// Keys keep insertion order through every rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether a wire key made it into the mapping.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// The value recorded for a wire key, if any.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Unconditional string entry.
    pub fn str(&mut self, key: &str, value: impl Into<String>) {
        self.entries.push((key.to_string(), ParamValue::Str(value.into())));
    }

    /// Unconditional integer entry.
    pub fn int(&mut self, key: &str, value: u32) {
        self.entries.push((key.to_string(), ParamValue::Int(value)));
    }

    /// String entry, omitted when unset or empty.
    pub fn opt_str(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            if !value.is_empty() {
                self.str(key, value);
            }
        }
    }

    /// Integer entry, omitted when unset or zero.
    ///
    /// Zero is indistinguishable from unset on the wire; the server
    /// default applies in both cases.
    pub fn opt_int(&mut self, key: &str, value: Option<u32>) {
        if let Some(value) = value {
            if value != 0 {
                self.int(key, value);
            }
        }
    }

    /// Comma-joined list entry, omitted when empty. Used for field lists.
    pub fn comma_list(&mut self, key: &str, values: &[String]) {
        if !values.is_empty() {
            self.str(key, values.join(","));
        }
    }

    /// Multi-value string entry, omitted when empty.
    ///
    /// Renders as a repeated key in text encodings and as an array in
    /// JSON bodies.
    pub fn str_list(&mut self, key: &str, values: &[String]) {
        if !values.is_empty() {
            self.entries
                .push((key.to_string(), ParamValue::StrList(values.to_vec())));
        }
    }

    /// Multi-value integer entry, omitted when empty.
    pub fn int_list(&mut self, key: &str, values: &[u32]) {
        if !values.is_empty() {
            self.entries
                .push((key.to_string(), ParamValue::IntList(values.to_vec())));
        }
    }

    /// Tri-state boolean filter: absent when unset, `"1"` for `true`,
    /// `"0"` for `false`.
    pub fn flag(&mut self, key: &str, value: Option<bool>) {
        if let Some(value) = value {
            self.str(key, if value { "1" } else { "0" });
        }
    }

    /// Boolean entry included only when the caller turned it on.
    pub fn toggle(&mut self, key: &str, value: bool) {
        if value {
            self.entries.push((key.to_string(), ParamValue::Bool(true)));
        }
    }

    /// Render as query pairs; list values expand to repeated keys.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.to_pairs()
    }

    /// Render as form fields, with the same expansion as the query string.
    pub fn to_form(&self) -> Vec<(String, String)> {
        self.to_pairs()
    }

    /// Render as a JSON object; numbers, booleans and arrays stay typed.
    pub fn to_json(&self) -> Value {
        let mut object = serde_json::Map::new();

        for (key, value) in &self.entries {
            let json = match value {
                ParamValue::Str(s) => Value::from(s.clone()),
                ParamValue::Int(n) => Value::from(*n),
                ParamValue::Bool(b) => Value::from(*b),
                ParamValue::StrList(list) => Value::from(list.clone()),
                ParamValue::IntList(list) => Value::from(list.clone()),
            };
            object.insert(key.clone(), json);
        }

        Value::Object(object)
    }

    fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        for (key, value) in &self.entries {
            match value {
                ParamValue::Str(s) => pairs.push((key.clone(), s.clone())),
                ParamValue::Int(n) => pairs.push((key.clone(), n.to_string())),
                ParamValue::Bool(b) => pairs.push((key.clone(), b.to_string())),
                ParamValue::StrList(list) => {
                    for item in list {
                        pairs.push((key.clone(), item.clone()));
                    }
                }
                ParamValue::IntList(list) => {
                    for item in list {
                        pairs.push((key.clone(), item.to_string()));
                    }
                }
            }
        }

        pairs
    }
}
