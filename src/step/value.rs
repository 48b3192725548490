use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One displayable unit held by a structure: a number, or a short label.
///
/// Numbers keep their integral form when they have one so element labels stay
/// compact. Ordering is numeric for numbers, lexicographic for text, with
/// every number sorting ahead of any text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Collapse integral floats to `Int` (how uploaded tokens are normalized).
    pub fn from_f64(v: f64) -> Self {
        if v.is_finite() && v.fract() == 0.0 && v.abs() <= i64::MAX as f64 {
            Value::Int(v as i64)
        } else {
            Value::Float(v)
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::Text(_) => None,
        }
    }

    /// Size encoding used by the array panel's bars. Text has no magnitude
    /// of its own, so its display width stands in.
    pub fn magnitude(&self) -> f64 {
        match self {
            Value::Int(n) => *n as f64,
            Value::Float(f) => *f,
            Value::Text(s) => s.chars().count() as f64,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.to_string().cmp(&other.to_string()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_floats_collapse() {
        assert_eq!(Value::from_f64(7.0), Value::Int(7));
        assert_eq!(Value::from_f64(7.5), Value::Float(7.5));
    }

    #[test]
    fn mixed_numeric_forms_compare_equal() {
        assert_eq!(Value::Int(3), Value::Float(3.0));
        assert!(Value::Int(2) < Value::Float(2.5));
    }

    #[test]
    fn numbers_sort_ahead_of_text() {
        assert!(Value::Int(999) < Value::Text("a".into()));
    }

    #[test]
    fn wire_numbers_keep_their_form() {
        let v: Value = serde_json::from_str("42").unwrap();
        assert_eq!(v, Value::Int(42));
        let v: Value = serde_json::from_str("4.25").unwrap();
        assert_eq!(v, Value::Float(4.25));
        let v: Value = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(v, Value::Text("x".into()));
    }
}
