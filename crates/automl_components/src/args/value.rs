//! Typed argument values and their command-line string encodings.
//!
//! The external container's argument parser is a fixed, versioned binary.
//! The encodings here (verbatim strings, `true`/`false` booleans, decimal
//! numbers, JSON text for lists and mappings) are part of that wire contract
//! and must not change without a new image version.

use indexmap::IndexMap;
use serde::Serialize;

/// A single typed value destined for one `--flag=value` fragment.
///
/// No range or semantic validation happens here: out-of-range values pass
/// through unchanged for the external container to reject.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// Passed through verbatim, including the empty string.
    Str(String),
    /// Renders as `true` / `false`.
    Bool(bool),
    /// Decimal integer, e.g. `-1`.
    Int(i64),
    /// Decimal float, e.g. `-1` or `0.5`.
    Float(f64),
    /// JSON array of strings, e.g. `["a","b"]`. Empty list renders `[]`.
    StrList(Vec<String>),
    /// JSON array of numbers, e.g. `[0.25,0.5,0.75]`.
    FloatList(Vec<f64>),
    /// JSON object in caller insertion order. Empty map renders `{}`.
    StrListMap(IndexMap<String, Vec<String>>),
}

impl ArgValue {
    /// Render this value as the string half of a `--flag=value` fragment.
    pub fn render(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::StrList(list) => json_token(list),
            Self::FloatList(list) => json_token(list),
            Self::StrListMap(map) => json_token(map),
        }
    }
}

/// Encode a plain collection as compact JSON text.
///
/// Serialization of string/number collections cannot fail; the fallback
/// keeps the render path infallible.
fn json_token<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ArgValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for ArgValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_renders_verbatim() {
        assert_eq!(ArgValue::Str("regression".to_string()).render(), "regression");
        assert_eq!(ArgValue::Str(String::new()).render(), "");
    }

    #[test]
    fn bool_renders_canonical_token() {
        assert_eq!(ArgValue::Bool(true).render(), "true");
        assert_eq!(ArgValue::Bool(false).render(), "false");
    }

    #[test]
    fn numbers_render_decimal() {
        assert_eq!(ArgValue::Int(-1).render(), "-1");
        assert_eq!(ArgValue::Int(7).render(), "7");
        assert_eq!(ArgValue::Float(-1.0).render(), "-1");
        assert_eq!(ArgValue::Float(0.5).render(), "0.5");
    }

    #[test]
    fn string_list_renders_json_array() {
        let v = ArgValue::StrList(vec!["store".to_string(), "region".to_string()]);
        assert_eq!(v.render(), r#"["store","region"]"#);
        assert_eq!(ArgValue::StrList(vec![]).render(), "[]");
    }

    #[test]
    fn float_list_renders_json_array() {
        let v = ArgValue::FloatList(vec![0.25, 0.5, 0.75]);
        assert_eq!(v.render(), "[0.25,0.5,0.75]");
    }

    #[test]
    fn map_renders_json_object_in_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("timestamp".to_string(), vec!["date".to_string()]);
        map.insert("auto".to_string(), vec!["sales".to_string(), "price".to_string()]);
        let v = ArgValue::StrListMap(map);
        assert_eq!(v.render(), r#"{"timestamp":["date"],"auto":["sales","price"]}"#);
        assert_eq!(ArgValue::StrListMap(IndexMap::new()).render(), "{}");
    }

    #[test]
    fn from_conversions() {
        assert_eq!(ArgValue::from("y"), ArgValue::Str("y".to_string()));
        assert_eq!(ArgValue::from(true), ArgValue::Bool(true));
        assert_eq!(ArgValue::from(-1i64), ArgValue::Int(-1));
        assert_eq!(ArgValue::from(0.5f64), ArgValue::Float(0.5));
    }
}
