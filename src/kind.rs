//! Runtime kind of a candidate value, for diagnostics.
use std::fmt;
use serde_json::Value;

/// kind enum + detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Absent,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn of(v: Option<&Value>) -> Self {
        match v {
            None                   => Kind::Absent,
            Some(Value::Null)      => Kind::Null,
            Some(Value::Bool(_))   => Kind::Boolean,
            Some(Value::Number(_)) => Kind::Number,
            Some(Value::String(_)) => Kind::String,
            Some(Value::Array(_))  => Kind::Array,
            Some(Value::Object(_)) => Kind::Object,
        }
    }
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Absent  => "absent",
            Kind::Null    => "null",
            Kind::Boolean => "boolean",
            Kind::Number  => "number",
            Kind::String  => "string",
            Kind::Array   => "array",
            Kind::Object  => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
