//! Statement parameter and result value model.
//!
//! Backends bind parameters through serde, so [`Value`] serializes untagged:
//! a `Value::Int(5)` looks like a plain `5` on the wire.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single column value, as bound to a statement or read from a row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Double-precision float.
    Float(f64),
    /// Character data.
    Text(String),
    /// Binary data.
    Bytes(Vec<u8>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// One result row: an ordered sequence of column values.
pub type Row = Vec<Value>;

/// An ordered sequence of result rows.
pub type Rows = Vec<Row>;

/// Parameter bindings for one statement execution.
///
/// Positional bindings map to `?` placeholders in order; named bindings map
/// to `:name` style placeholders. Which styles a backend accepts is part of
/// the backend's documented contract, not this layer's.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Parameters {
    /// Ordered bindings for positional placeholders.
    Positional(Vec<Value>),
    /// Name-keyed bindings for named placeholders.
    Named(BTreeMap<String, Value>),
}

impl Parameters {
    /// Number of bound parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Positional(values) => values.len(),
            Self::Named(values) => values.len(),
        }
    }

    /// Whether no parameters are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Value>> for Parameters {
    fn from(values: Vec<Value>) -> Self {
        Self::Positional(values)
    }
}

impl From<BTreeMap<String, Value>> for Parameters {
    fn from(values: BTreeMap<String, Value>) -> Self {
        Self::Named(values)
    }
}

impl FromIterator<Value> for Parameters {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Positional(iter.into_iter().collect())
    }
}

/// Description of one column in a result set.
///
/// The seven-item DB-API description entry as a struct. `type_code` values
/// are backend-defined; the contract fixes only the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescription {
    /// Column name.
    pub name: String,
    /// Backend-defined type code.
    pub type_code: i16,
    /// Display width, if the backend reports one.
    pub display_size: Option<usize>,
    /// Internal storage size, if the backend reports one.
    pub internal_size: Option<usize>,
    /// Numeric precision, if applicable.
    pub precision: Option<u16>,
    /// Numeric scale, if applicable.
    pub scale: Option<i16>,
    /// Whether the column admits NULL.
    pub nullable: bool,
}

impl ColumnDescription {
    /// Description with only name and type code set.
    #[must_use]
    pub const fn new(name: String, type_code: i16) -> Self {
        Self {
            name,
            type_code,
            display_size: None,
            internal_size: None,
            precision: None,
            scale: None,
            nullable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from_conversions() {
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(1.5f64), Value::Float(1.5));
        assert_eq!(Value::from("abc"), Value::Text("abc".into()));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(7i64)), Value::Int(7));
    }

    #[test]
    fn test_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Value::Int(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Value::Text("x".into())).unwrap(),
            "\"x\""
        );
    }

    #[test]
    fn test_parameters_positional() {
        let params: Parameters = vec![Value::Int(1), Value::Null].into();
        assert_eq!(params.len(), 2);
        assert!(!params.is_empty());
        assert_eq!(serde_json::to_string(&params).unwrap(), "[1,null]");
    }

    #[test]
    fn test_parameters_named() {
        let mut named = BTreeMap::new();
        named.insert("id".to_owned(), Value::Int(9));
        let params = Parameters::from(named);
        assert_eq!(params.len(), 1);
        assert_eq!(serde_json::to_string(&params).unwrap(), "{\"id\":9}");
    }

    #[test]
    fn test_column_description_new() {
        let col = ColumnDescription::new("ID".into(), 3);
        assert_eq!(col.name, "ID");
        assert_eq!(col.type_code, 3);
        assert!(col.nullable);
        assert!(col.precision.is_none());
    }
}
