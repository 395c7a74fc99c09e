//! Primitive type tags and the primitive matcher.
use std::fmt;
use serde_json::{Number, Value};

use crate::policy::{FloatRule, Policy};

/// Atomic shapes a value can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Type {
    String,
    Integer,
    Float,
    Boolean,
    Object,
    Array,
}

impl Type {
    pub const ALL: [Type; 6] = [
        Type::String,
        Type::Integer,
        Type::Float,
        Type::Boolean,
        Type::Object,
        Type::Array,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Type::String  => "string",
            Type::Integer => "integer",
            Type::Float   => "float",
            Type::Boolean => "boolean",
            Type::Object  => "object",
            Type::Array   => "array",
        }
    }

    /// Exact runtime-kind check, no coercion. `null` matches no tag.
    pub fn matches(&self, v: &Value, policy: &Policy) -> bool {
        match self {
            Type::String  => v.is_string(),
            Type::Integer => matches!(v, Value::Number(n) if is_whole(n)),
            Type::Float   => match (v, policy.float) {
                (Value::Number(_), FloatRule::AnyNumber) => true,
                (Value::Number(n), FloatRule::Fractional) => !is_whole(n),
                _ => false,
            },
            Type::Boolean => v.is_boolean(),
            // serde_json keeps arrays and maps apart, so no extra array guard
            Type::Object  => v.is_object(),
            Type::Array   => v.is_array(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mathematically whole, regardless of how the number was written: `1` and
/// `1.0` both qualify.
pub(crate) fn is_whole(n: &Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}
