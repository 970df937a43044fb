//! Read-only data handed over by the host page at start-up.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use super::row::{parse_number, RawRow, Row};

#[derive(Debug, Error)]
pub enum HostDataError {
    #[error("host data must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("page script failed: {0}")]
    Eval(String),
}

#[derive(Clone, Debug, Default)]
pub struct HostData {
    pub card_names: Vec<String>,
    pub card_values: Vec<f64>,
    pub expense_labels: Vec<String>,
    pub expense_values: Vec<f64>,
    pub rows: Vec<RawRow>,
    pub rotating_images: Vec<String>,
}

impl HostData {
    /// Builds host data from a camelCase JSON object.
    ///
    /// Absent, null or non-array entries become empty series.
    pub fn from_value(value: Value) -> Result<Self, HostDataError> {
        let object = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => return Err(HostDataError::NotAnObject(kind(&other))),
        };

        Ok(Self {
            card_names: strings(&object, "cardNames"),
            card_values: numbers(&object, "cardValues"),
            expense_labels: strings(&object, "expenseLabels"),
            expense_values: numbers(&object, "expenseValues"),
            rows: raw_rows(&object, "collectionRows"),
            rotating_images: strings(&object, "rotatingImages"),
        })
    }

    /// Validated rows; invalid ones are logged and left out.
    pub fn table_rows(&self) -> Vec<Row> {
        self.rows
            .iter()
            .cloned()
            .filter_map(|raw| match Row::try_from(raw) {
                Ok(row) => Some(row),
                Err(err) => {
                    warn!("skipping collection row: {err}");
                    None
                }
            })
            .collect()
    }
}

fn array<'a>(object: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn strings(object: &Map<String, Value>, key: &str) -> Vec<String> {
    array(object, key)
        .iter()
        .map(|value| match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
        .collect()
}

// Unknown values chart as zero, like the server does for missing valuations.
fn numbers(object: &Map<String, Value>, key: &str) -> Vec<f64> {
    array(object, key)
        .iter()
        .map(|value| match value {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => parse_number(s).unwrap_or(0.0),
            _ => 0.0,
        })
        .collect()
}

fn raw_rows(object: &Map<String, Value>, key: &str) -> Vec<RawRow> {
    array(object, key)
        .iter()
        .filter_map(|value| match serde_json::from_value::<RawRow>(value.clone()) {
            Ok(raw) => Some(raw),
            Err(err) => {
                warn!("ignoring malformed collection row: {err}");
                None
            }
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_arrays_become_empty() {
        let data = HostData::from_value(json!({ "cardNames": null })).unwrap();
        assert!(data.card_names.is_empty());
        assert!(data.card_values.is_empty());
        assert!(data.rows.is_empty());

        let data = HostData::from_value(Value::Null).unwrap();
        assert!(data.expense_labels.is_empty());
    }

    #[test]
    fn values_are_coerced_to_numbers() {
        let data = HostData::from_value(json!({
            "cardNames": ["Luffy", 12],
            "cardValues": [4.5, "7.25", null],
            "expenseLabels": ["Sleeves"],
            "expenseValues": [3],
            "rotatingImages": ["/static/a.gif", "/static/b.gif"]
        }))
        .unwrap();
        assert_eq!(data.card_names, vec!["Luffy".to_string(), "12".to_string()]);
        assert_eq!(data.card_values, vec![4.5, 7.25, 0.0]);
        assert_eq!(data.expense_values, vec![3.0]);
        assert_eq!(data.rotating_images.len(), 2);
    }

    #[test]
    fn invalid_rows_are_skipped() {
        let data = HostData::from_value(json!({
            "collectionRows": [
                { "id": 1, "name": "Luffy", "total_sgd": 10.0 },
                { "id": 2, "name": "Broken", "original_price": "??" },
                "not a row"
            ]
        }))
        .unwrap();
        assert_eq!(data.rows.len(), 2);
        let rows = data.table_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Luffy");
    }

    #[test]
    fn non_object_payload_is_an_error() {
        let err = HostData::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, HostDataError::NotAnObject("an array")));
    }
}
