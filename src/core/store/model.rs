use std::fmt;

use serde::{Deserialize, Serialize};

/// Content of a single table cell. Cells hold either free text or a number,
/// and nothing ties the variant to the column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// Goal progress: a percentage or a free-form label such as "3/5 chapters".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Progress {
    Number(f64),
    Text(String),
}

impl Default for Progress {
    fn default() -> Self {
        Progress::Number(0.0)
    }
}

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Progress::Number(value)
    }
}

impl From<i64> for Progress {
    fn from(value: i64) -> Self {
        Progress::Number(value as f64)
    }
}

impl From<&str> for Progress {
    fn from(value: &str) -> Self {
        Progress::Text(value.to_string())
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::Number(n) => write!(f, "{}", n),
            Progress::Text(s) => f.write_str(s),
        }
    }
}
