//! Form Payload
//!
//! Turns an HTML form into the JSON object the signup API expects.
//!
//! A name seen once maps to a plain string; a name seen two or more times
//! maps to an ordered list of strings. Keys keep the order in which they
//! first appeared in the form.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};

/// Value stored under one field name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Exactly one control carried this name
    Single(String),
    /// Two or more controls carried this name, in DOM order
    Multiple(Vec<String>),
}

impl FieldValue {
    /// Add another occurrence, promoting a single value to a list
    fn append(&mut self, value: String) {
        match self {
            FieldValue::Single(first) => {
                let first = std::mem::take(first);
                *self = FieldValue::Multiple(vec![first, value]);
            }
            FieldValue::Multiple(values) => values.push(value),
        }
    }

    /// All values in submission order
    pub fn values(&self) -> Vec<&str> {
        match self {
            FieldValue::Single(value) => vec![value.as_str()],
            FieldValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Single(value) => serializer.serialize_str(value),
            FieldValue::Multiple(values) => values.serialize(serializer),
        }
    }
}

/// Ordered name -> value mapping built from a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    entries: Vec<(String, FieldValue)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a payload from (name, value) pairs in order
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut payload = Self::new();
        for (name, value) in pairs {
            payload.push(name, value);
        }
        payload
    }

    /// Read the successful controls of `form` in DOM order.
    ///
    /// Uses the browser's own `FormData` algorithm, so disabled and unnamed
    /// controls, unchecked boxes and submit buttons are already left out.
    /// File entries are skipped.
    pub fn from_form(form: &web_sys::HtmlFormElement) -> Result<Self, JsValue> {
        let form_data = web_sys::FormData::new_with_form(form)?;
        let entries = js_sys::try_iter(&form_data)?
            .ok_or_else(|| JsValue::from_str("FormData is not iterable"))?;

        let mut payload = Self::new();
        for entry in entries {
            let entry: js_sys::Array = entry?.dyn_into()?;
            let Some(name) = entry.get(0).as_string() else {
                continue;
            };
            let value = entry.get(1);
            if value.is_undefined() || value.is_null() {
                payload.push(&name, None);
            } else if let Some(text) = value.as_string() {
                payload.push(&name, Some(&text));
            }
        }
        Ok(payload)
    }

    /// Record one control. A missing value is stored as an empty string.
    pub fn push(&mut self, name: &str, value: Option<&str>) {
        let value = value.unwrap_or_default().to_string();
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => existing.append(value),
            None => self.entries.push((name.to_string(), FieldValue::Single(value))),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// JSON text of the payload, as sent on the wire
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for FormPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
