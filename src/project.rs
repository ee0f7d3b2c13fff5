//! Read-only projection of dynamic API responses.
//!
//! Several v1.2 calls return loosely-shaped structs whose key casing varies
//! between endpoints. [`project`] normalizes such a response into a
//! case-insensitive view that can be walked with dot-separated paths, without
//! modifying the original value.

use std::collections::BTreeMap;

use xmlrpc::Value;

/// A projected response value.
#[derive(Debug, Clone, PartialEq)]
pub enum Projected {
    /// A struct whose keys were lower-cased for case-insensitive lookup.
    Map(ProjectedMap),
    /// An array with every element projected.
    List(Vec<Projected>),
    /// Any scalar, passed through unchanged.
    Scalar(Value),
}

/// Case-insensitive read-only view over a projected struct.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectedMap {
    entries: BTreeMap<String, Projected>,
}

/// Projects a decoded response into a case-insensitive read-only view.
///
/// Struct keys are lower-cased and their values projected recursively,
/// arrays are projected element-wise, scalars are cloned unchanged.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use chimp::{project, Value};
///
/// let value = Value::Struct(BTreeMap::from([(
///     "Contact".to_string(),
///     Value::Struct(BTreeMap::from([("Email".to_string(), Value::from("al@example.com"))])),
/// )]));
///
/// let details = project(&value);
/// assert_eq!(
///     details.at("contact.email").and_then(|v| v.as_str()),
///     Some("al@example.com")
/// );
/// ```
pub fn project(value: &Value) -> Projected {
    match value {
        Value::Struct(map) => Projected::Map(ProjectedMap {
            entries: map
                .iter()
                .map(|(key, value)| (key.to_lowercase(), project(value)))
                .collect(),
        }),
        Value::Array(items) => Projected::List(items.iter().map(project).collect()),
        scalar => Projected::Scalar(scalar.clone()),
    }
}

impl ProjectedMap {
    /// Looks up a field, ignoring the case of `key`.
    pub fn get(&self, key: &str) -> Option<&Projected> {
        self.entries.get(&key.to_lowercase())
    }

    /// The lower-cased field names, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Field name/value pairs, in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Projected)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Projected {
    /// Walks a dot-separated path of struct fields.
    ///
    /// `details.at("contact.email")` is shorthand for
    /// `details.get("contact").and_then(|c| c.get("email"))`.
    pub fn at(&self, path: &str) -> Option<&Projected> {
        path.split('.')
            .try_fold(self, |value, segment| value.get(segment))
    }

    /// Field lookup on a projected struct; `None` for lists and scalars.
    pub fn get(&self, key: &str) -> Option<&Projected> {
        match self {
            Projected::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// The underlying scalar, if this is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Projected::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(Value::as_str)
    }

    pub fn as_i32(&self) -> Option<i32> {
        self.as_value().and_then(Value::as_i32)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_value().and_then(Value::as_bool)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_value().and_then(Value::as_f64)
    }
}
