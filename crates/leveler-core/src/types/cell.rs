//! Typed cell values and the coercion from raw store values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::MAX_CELL_UNWRAP_DEPTH;

/// A cell value after coercion: either a finite number or nothing.
///
/// Raw store values never flow past the store boundary; every read goes
/// through [`CellValue::coerce`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    Number(f64),
    #[default]
    Empty,
}

impl CellValue {
    /// Coerce a raw store value.
    ///
    /// - JSON numbers become `Number` when finite.
    /// - Strings are trimmed and parsed; blank or unparsable strings are `Empty`.
    /// - Objects carrying a `value` key are unwrapped (`{"value": 12}`).
    /// - Single-element arrays are unwrapped (link/lookup columns).
    /// - Everything else, including booleans, is `Empty`.
    ///
    /// A value that fails coercion is `Empty`, never zero.
    pub fn coerce(raw: &Value) -> Self {
        Self::coerce_at(raw, 0)
    }

    fn coerce_at(raw: &Value, depth: usize) -> Self {
        if depth > MAX_CELL_UNWRAP_DEPTH {
            return Self::Empty;
        }
        match raw {
            Value::Number(n) => n.as_f64().map_or(Self::Empty, Self::from_f64),
            Value::String(s) => Self::parse(s),
            Value::Object(map) => map
                .get("value")
                .map_or(Self::Empty, |inner| Self::coerce_at(inner, depth + 1)),
            Value::Array(items) if items.len() == 1 => Self::coerce_at(&items[0], depth + 1),
            Value::Array(_) | Value::Bool(_) | Value::Null => Self::Empty,
        }
    }

    /// Parse a textual cell. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        trimmed.parse::<f64>().map_or(Self::Empty, Self::from_f64)
    }

    /// Wrap a float, mapping NaN and infinities to `Empty`.
    pub fn from_f64(n: f64) -> Self {
        if n.is_finite() {
            Self::Number(n)
        } else {
            Self::Empty
        }
    }

    pub fn as_number(self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n),
            Self::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Empty, Self::from_f64)
    }
}
