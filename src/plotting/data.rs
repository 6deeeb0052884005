//! Record model and column helpers.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::plotting::error::{PlotError, PlotResult};

/// A single field value of a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Numeric value
    Number(f64),
    /// Categorical or free-form text
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value. Text is accepted when it parses as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Display form, used for categories and list lines.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Number(v) => format_number(*v),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// One row of the input dataset, keyed by column name in source order.
///
/// Deserializing goes through [`Record::from_json`], so nulls and booleans
/// are handled the same way as in [`records_from_json`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(column.into(), value.into());
        self
    }

    /// Build a record from a JSON object. Nulls are treated as missing.
    pub fn from_json(value: &Value) -> PlotResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            PlotError::InvalidConfig(format!("expected a JSON object per record, got {}", value))
        })?;

        let mut fields = IndexMap::with_capacity(object.len());
        for (key, v) in object {
            let field = match v {
                Value::Null => continue,
                Value::Number(n) => match n.as_f64() {
                    Some(f) => FieldValue::Number(f),
                    None => FieldValue::Text(n.to_string()),
                },
                Value::String(s) => FieldValue::Text(s.clone()),
                Value::Bool(b) => FieldValue::Text(b.to_string()),
                other => FieldValue::Text(other.to_string()),
            };
            fields.insert(key.clone(), field);
        }
        Ok(Record { fields })
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields.get(column)
    }

    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(FieldValue::as_number)
    }

    pub fn text(&self, column: &str) -> Option<String> {
        self.get(column).map(FieldValue::as_text)
    }

    /// Column names in source order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Numeric value of `column`, or the error naming the offending column.
    pub(crate) fn require_number(&self, column: &str, index: usize) -> PlotResult<f64> {
        match self.get(column) {
            None => Err(PlotError::MissingColumn {
                column: column.to_string(),
                index,
            }),
            Some(value) => match value.as_number() {
                Some(v) if v.is_finite() => Ok(v),
                _ => Err(PlotError::NonNumeric {
                    column: column.to_string(),
                    index,
                    value: value.as_text(),
                }),
            },
        }
    }

    /// Categorical value of `column`, or the error naming the offending column.
    pub(crate) fn require_text(&self, column: &str, index: usize) -> PlotResult<String> {
        self.text(column).ok_or_else(|| PlotError::MissingColumn {
            column: column.to_string(),
            index,
        })
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Record::from_json(&value).map_err(serde::de::Error::custom)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse a JSON array of objects into records.
pub fn records_from_json(value: &Value) -> PlotResult<Vec<Record>> {
    let rows = value.as_array().ok_or_else(|| {
        PlotError::InvalidConfig("expected a JSON array of records".to_string())
    })?;
    rows.iter().map(Record::from_json).collect()
}

/// Minimum and maximum of the finite values, or `None` when there are none.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Format a number the way it would be typed: integers without a fraction.
pub fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
