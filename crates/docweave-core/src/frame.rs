use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

/// Column name used when an unnamed index is materialized.
pub const DEFAULT_INDEX_NAME: &str = "index";

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Missing,
}

impl CellValue {
    /// `Missing`, and floats that are NaN.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Missing => true,
            CellValue::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Missing,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => n.as_f64().map_or(CellValue::Missing, CellValue::Float),
            },
            Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellValue::Missing, Into::into)
    }
}

/// Row identifiers of a [`DataFrame`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    pub name: Option<String>,
    pub labels: Vec<CellValue>,
}

impl Index {
    /// `0..len`, unnamed.
    pub fn range(len: usize) -> Self {
        Self {
            name: None,
            labels: (0..len as i64).map(CellValue::Int).collect(),
        }
    }
}

/// Row/column tabular data with a row index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    columns: Vec<String>,
    index: Index,
    rows: Vec<Vec<CellValue>>,
}

impl DataFrame {
    /// Build a frame with a range index. Every row must have one value per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self, CoreError> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(CoreError::InvalidTable(format!(
                    "row {i} has {} values, expected {}",
                    row.len(),
                    columns.len()
                )));
            }
        }

        Ok(Self {
            index: Index::range(rows.len()),
            columns,
            rows,
        })
    }

    /// Replace the row index.
    pub fn with_index(
        mut self,
        name: Option<String>,
        labels: Vec<CellValue>,
    ) -> Result<Self, CoreError> {
        if labels.len() != self.rows.len() {
            return Err(CoreError::InvalidTable(format!(
                "index has {} labels, frame has {} rows",
                labels.len(),
                self.rows.len()
            )));
        }
        self.index = Index { name, labels };
        Ok(self)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Move the index into a leading column and give the result a fresh range index.
    pub fn reset_index(&self) -> DataFrame {
        let name = self
            .index
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_INDEX_NAME.to_string());

        let mut columns = Vec::with_capacity(self.columns.len() + 1);
        columns.push(name);
        columns.extend(self.columns.iter().cloned());

        let rows = self
            .rows
            .iter()
            .zip(&self.index.labels)
            .map(|(row, label)| {
                let mut out = Vec::with_capacity(row.len() + 1);
                out.push(label.clone());
                out.extend(row.iter().cloned());
                out
            })
            .collect();

        DataFrame {
            index: Index::range(self.rows.len()),
            columns,
            rows,
        }
    }

    /// Whether a JSON value has the shape [`DataFrame::from_json`] accepts.
    pub fn looks_like_json_table(value: &Value) -> bool {
        value
            .as_object()
            .is_some_and(|o| o.get("columns").is_some_and(Value::is_array) && o.contains_key("data"))
    }

    /// Parse `{"columns": [...], "data": [[...]], "index": [...], "index_name": "..."}`.
    ///
    /// `index` and `index_name` are optional.
    pub fn from_json(value: &Value) -> Result<Self, CoreError> {
        let obj = value
            .as_object()
            .ok_or_else(|| CoreError::InvalidTable("expected a JSON object".to_string()))?;

        let columns = obj
            .get("columns")
            .and_then(Value::as_array)
            .ok_or_else(|| CoreError::InvalidTable("missing `columns` array".to_string()))?
            .iter()
            .map(|c| match c {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();

        let rows = obj
            .get("data")
            .and_then(Value::as_array)
            .ok_or_else(|| CoreError::InvalidTable("missing `data` array".to_string()))?
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.as_array()
                    .map(|cells| cells.iter().map(CellValue::from_json).collect())
                    .ok_or_else(|| CoreError::InvalidTable(format!("row {i} is not an array")))
            })
            .collect::<Result<Vec<Vec<CellValue>>, _>>()?;

        let frame = DataFrame::new(columns, rows)?;

        match obj.get("index").and_then(Value::as_array) {
            Some(labels) => {
                let name = obj
                    .get("index_name")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                frame.with_index(name, labels.iter().map(CellValue::from_json).collect())
            }
            None => Ok(frame),
        }
    }
}
