//! The generic list pipeline: a filtered view over in-memory display rows,
//! then pagination. Pure state + functions; the `DataTable` component wires
//! them to signals.

pub mod date_filter;
pub mod list_state;
pub mod pagination;
pub mod search;

use serde_json::Value;

/// A display row: attribute name -> scalar value.
pub type Row = serde_json::Map<String, Value>;

/// Ordered (key, label) pair describing one presented column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

impl Column {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// String form of a scalar attribute; empty for null.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn cell_text(row: &Row, key: &str) -> String {
    row.get(key).map(value_text).unwrap_or_default()
}

/// Build a row out of a `serde_json::json!` object literal.
pub fn row_from_value(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        _ => Row::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn value_text_covers_scalars() {
        assert_eq!(value_text(&json!("hola")), "hola");
        assert_eq!(value_text(&json!(25)), "25");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&Value::Null), "");
    }

    #[test]
    fn cell_text_of_missing_key_is_empty() {
        let row = row_from_value(json!({ "name": "Ana" }));
        assert_eq!(cell_text(&row, "name"), "Ana");
        assert_eq!(cell_text(&row, "age"), "");
    }
}
