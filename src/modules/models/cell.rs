use std::fmt;

use serde::{Deserialize, Serialize};

use crate::modules::helpers::text::TextHelper;

/// The value of a single results cell. Purely numeric text becomes an integer,
/// everything else stays as trimmed text. A missing cell is `Text("")`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Text(String),
}

impl CellValue {
    pub fn from_text(raw: &str) -> CellValue {
        let text = raw.trim();
        if TextHelper::is_numeric(text) {
            if let Ok(number) = text.parse::<i64>() {
                return CellValue::Int(number);
            }
        }
        CellValue::Text(text.to_string())
    }

    pub fn empty() -> CellValue {
        CellValue::Text(String::new())
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(number) => Some(*number),
            CellValue::Text(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Text(text) if text.is_empty())
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::empty()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CellValue::Int(number) => write!(f, "{}", number),
            CellValue::Text(text) => write!(f, "{}", text),
        }
    }
}
