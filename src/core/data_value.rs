//! Dynamically typed cell values.
//!
//! Tabular columns hold a mix of integer, floating point, string and boolean
//! observations. `CellValue` gives them a single representation with a total
//! ordering and hash, so values can key contingency and frequency tables.
//! Missing values are a first-class variant rather than an `Option` wrapper:
//! they participate in tabulation as their own observable category and are
//! never silently dropped.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single cell of a tabular column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    /// A missing observation.
    Null,
}

impl CellValue {
    /// Check if the value is missing
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Numeric view of the value, where one exists.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    // Ordering rank of the variant: numbers, then booleans, then strings,
    // with missing values always sorting last.
    fn type_rank(&self) -> u8 {
        match self {
            CellValue::Int(_) | CellValue::Float(_) => 0,
            CellValue::Bool(_) => 1,
            CellValue::Str(_) => 2,
            CellValue::Null => 3,
        }
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.type_rank().cmp(&other.type_rank()) {
            Ordering::Equal => match (self, other) {
                // Ints and floats compare on one numeric axis, so Int(1)
                // and Float(1.0) are the same category.
                (a, b) if a.type_rank() == 0 => {
                    let x = a.as_f64().unwrap_or(f64::NAN);
                    let y = b.as_f64().unwrap_or(f64::NAN);
                    x.total_cmp(&y)
                }
                (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
                (CellValue::Str(a), CellValue::Str(b)) => a.cmp(b),
                _ => Ordering::Equal,
            },
            ord => ord,
        }
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellValue {}

impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.type_rank());
        match self {
            // Hash the promoted numeric value so Int(1) and Float(1.0)
            // collide, matching Eq.
            CellValue::Int(_) | CellValue::Float(_) => {
                state.write_u64(self.as_f64().unwrap_or(f64::NAN).to_bits());
            }
            CellValue::Bool(b) => b.hash(state),
            CellValue::Str(s) => s.hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Str(v) => write!(f, "{}", v),
            CellValue::Bool(v) => write!(f, "{}", v),
            CellValue::Null => write!(f, "NaN"),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Str(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Str(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}
