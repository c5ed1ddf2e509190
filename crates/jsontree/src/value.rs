//! JSON value types.
//!
//! This module defines the [`Value`] enum, which represents any valid JSON
//! value, along with the typed accessors used to inspect a parsed tree.
use alloc::{collections::BTreeMap, string::String, vec::Vec};

/// Object payload: keys map to child values, iterated in ascending key
/// order. Key order is an implementation property, not a JSON guarantee.
pub type Map = BTreeMap<String, Value>;
/// Array payload: child values in source order.
pub type Array = Vec<Value>;

/// A JSON value as defined by [RFC 8259].
///
/// The `Value` enum can represent any JSON data type:
///
/// - Null
/// - Boolean
/// - Number
/// - String
/// - Array
/// - Object
///
/// A value exclusively owns its children, so trees are freely sendable
/// between threads and are compared structurally with `==`. Numbers
/// produced by [`parse`](crate::parse) are always finite.
///
/// # Examples
///
/// ```
/// use jsontree::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Array),
    Object(Map),
}

/// Discriminant of a [`Value`], for callers that dispatch on the variant
/// without needing the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns the variant tag of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Number(1.0).kind(), ValueKind::Number);
    /// assert_eq!(Value::Null.kind(), ValueKind::Null);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(..) => ValueKind::Boolean,
            Self::Number(..) => ValueKind::Number,
            Self::String(..) => ValueKind::String,
            Self::Array(..) => ValueKind::Array,
            Self::Object(..) => ValueKind::Object,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns the boolean payload, or `None` for any other variant.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number payload, or `None` for any other variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
    /// assert_eq!(Value::Null.as_number(), None);
    /// ```
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string payload, or `None` for any other variant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array elements, or `None` for any other variant.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Mutable access to the array elements.
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the object map, or `None` for any other variant. Keys are
    /// enumerated through the map, e.g. `value.as_object()?.keys()`.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Mutable access to the object map; inserting through it overwrites
    /// any existing value under the same key.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::{Map, Value};
    ///
    /// let mut v = Value::Object(Map::new());
    /// v.as_object_mut().unwrap().insert("n".into(), Value::Number(1.0));
    /// v.as_object_mut().unwrap().insert("n".into(), Value::Number(2.0));
    /// assert_eq!(v.get("n"), Some(&Value::Number(2.0)));
    /// ```
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Looks up `key` in an object value.
    ///
    /// Returns `None` when the key is absent, and also when `self` is not
    /// an object at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::parse;
    ///
    /// let v = parse(r#"{"a": 1}"#).unwrap();
    /// assert_eq!(v.get("a").and_then(|v| v.as_number()), Some(1.0));
    /// assert!(v.get("b").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }
}
