//! Script value representation
//!
//! `Value` is the tagged variant type exchanged between the embedding engine
//! and native host functions. It stands in for the engine's word-encoded
//! value representation: arguments and results cross the host boundary as
//! explicit variants rather than a C-compatible binary layout.
//!
//! The `Exception` variant is a marker, not a payload. A native function that
//! fails records the error on its [`Context`](crate::Context) and returns
//! `Value::Exception` through the normal return channel, matching how the
//! engine signals thrown errors.

use std::fmt;
use std::rc::Rc;

/// A script value as seen by native host functions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The `undefined` value. Also the defined no-op result of every
    /// default builtin.
    Undefined,
    /// The `null` value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A 32-bit signed integer.
    Int(i32),
    /// A double-precision float.
    Float(f64),
    /// An immutable string. `Rc` keeps argument slices cheap to clone.
    String(Rc<str>),
    /// Exception marker. The error itself lives on the context.
    Exception,
}

impl Value {
    /// Create a string value from anything string-like.
    #[inline]
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::String(s.into())
    }

    // Type checking

    /// Check if this is undefined
    #[inline]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if this is null
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this is nullish (null or undefined)
    #[inline]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Check if this is a boolean
    #[inline]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if this is an integer
    #[inline]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if this is a float
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Check if this is a number (integer or float)
    #[inline]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Check if this is a string
    #[inline]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if this is the exception marker
    #[inline]
    pub const fn is_exception(&self) -> bool {
        matches!(self, Value::Exception)
    }

    // Value extraction

    /// Get boolean value, returns None if not a boolean
    #[inline]
    pub const fn to_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get integer value, returns None if not an integer
    #[inline]
    pub const fn to_i32(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get numeric value, returns None if not a number
    #[inline]
    pub const fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get string contents, returns None if not a string
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Undefined
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Exception => write!(f, "[exception]"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}
