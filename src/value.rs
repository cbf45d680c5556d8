// The structured result of one generation attempt: named fields holding the
// values a text template substitutes. Insertion order is preserved so that
// regenerating with the same seed reproduces the mapping byte for byte.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::latex_set;

/// A renderable field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Text(String),
    /// A finite set of already-rendered elements, printed in LaTeX set
    /// notation.
    Set(Vec<String>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Set(elements) => write!(f, "{}", latex_set(elements)),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Value {
        Value::Int(n as i64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Int(n as i64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(elements: Vec<String>) -> Value {
        Value::Set(elements)
    }
}

/// One generated data mapping. Field names must exactly match the placeholders
/// of the templates that will render it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data {
    fields: Vec<(String, Value)>,
}

impl Data {
    pub fn new() -> Data {
        Data::default()
    }

    /// Adds or replaces a field, keeping first-insertion order.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// Builds a [`Data`] mapping from `name => value` pairs.
#[macro_export]
macro_rules! data {
    ($($name:expr => $value:expr),* $(,)?) => {{
        let mut data = $crate::value::Data::new();
        $(data.insert($name, $value);)*
        data
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_and_lookup() {
        let data = data! {
            "b" => 2,
            "a" => "one",
        };
        let names: Vec<&str> = data.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(data.get("b"), Some(&Value::Int(2)));
        assert_eq!(data.get("missing"), None);
    }

    #[test]
    fn replacement_keeps_position() {
        let mut data = data! { "x" => 1, "y" => 2 };
        data.insert("x", 10);
        let names: Vec<&str> = data.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["x", "y"]);
        assert_eq!(data.get("x"), Some(&Value::Int(10)));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Text("x^{2}".into()).to_string(), "x^{2}");
        let set = Value::Set(vec!["-3".into(), "3".into()]);
        assert_eq!(set.to_string(), "\\left\\{-3, 3\\right\\}");
        assert_eq!(Value::Set(Vec::new()).to_string(), "\\emptyset");
    }

    #[test]
    fn equality_is_structural() {
        let a = data! { "n" => 1 };
        let b = data! { "n" => 1 };
        let c = data! { "n" => 2 };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
