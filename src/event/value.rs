//! Identifier and payload value types.
//!
//! Registry keys and payload values are closed unions with explicit
//! variants, so extraction is checked at compile time instead of going
//! through speculative downcasts.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Key addressing a registered element.
///
/// Application-defined strings and 128-bit UUIDs are supported uniformly
/// under equality and hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementId {
    /// Application-defined string id, e.g. `"#selectedIndex"`.
    Str(String),
    /// UUID id, e.g. a stable per-record identity.
    Uuid(Uuid),
}

impl ElementId {
    /// Reinterpret a payload value as an identifier.
    ///
    /// Only strings and UUIDs identify elements; other value shapes yield
    /// `None` and are skipped by traversal.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(Self::Str(s.clone())),
            Value::Uuid(u) => Some(Self::Uuid(*u)),
            Value::Int(_) | Value::Bool(_) => None,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Uuid(u) => write!(f, "{}", u),
        }
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Uuid> for ElementId {
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}

/// A single payload or tag value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// UTF-8 text.
    Str(String),
    /// Signed integer.
    Int(i64),
    /// 128-bit UUID.
    Uuid(Uuid),
    /// Boolean flag.
    Bool(bool),
}

impl Value {
    /// The contained string, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The contained integer, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The contained UUID, if this is a `Uuid`.
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            Self::Uuid(u) => Some(*u),
            _ => None,
        }
    }

    /// The contained flag, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<Uuid> for Value {
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Data delivered to a receiver, keyed by string. Replaced wholesale on
/// every send.
pub type Payload = HashMap<String, Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id_from_conversions() {
        assert_eq!(ElementId::from("x"), ElementId::Str("x".to_string()));
        assert_eq!(
            ElementId::from("x".to_string()),
            ElementId::Str("x".to_string())
        );
        let uuid = Uuid::new_v4();
        assert_eq!(ElementId::from(uuid), ElementId::Uuid(uuid));
    }

    #[test]
    fn test_element_id_from_value() {
        assert_eq!(
            ElementId::from_value(&Value::from("a")),
            Some(ElementId::Str("a".to_string()))
        );
        let uuid = Uuid::new_v4();
        assert_eq!(
            ElementId::from_value(&Value::from(uuid)),
            Some(ElementId::Uuid(uuid))
        );
        assert_eq!(ElementId::from_value(&Value::Int(7)), None);
        assert_eq!(ElementId::from_value(&Value::Bool(true)), None);
    }

    #[test]
    fn test_element_id_display() {
        assert_eq!(ElementId::from("#selectedIndex").to_string(), "#selectedIndex");
        let uuid: Uuid = "f3e0ee97-c3f4-4404-beb5-a2a52633b9ab".parse().unwrap();
        assert_eq!(
            ElementId::from(uuid).to_string(),
            "f3e0ee97-c3f4-4404-beb5-a2a52633b9ab"
        );
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert_eq!(Value::from("s").as_int(), None);
        assert_eq!(Value::from(42i64).as_int(), Some(42));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        let uuid = Uuid::new_v4();
        assert_eq!(Value::from(uuid).as_uuid(), Some(uuid));
        assert_eq!(Value::from(uuid).as_str(), None);
    }

    #[test]
    fn test_value_serde_round_trip() {
        let uuid = Uuid::new_v4();
        let values = vec![
            Value::from("text"),
            Value::from(-3i64),
            Value::from(uuid),
            Value::from(false),
        ];
        let json = serde_json::to_string(&values).unwrap();
        let back: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }
}
