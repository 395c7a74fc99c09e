use thiserror::Error;

use crate::conform::path::Path;
use crate::ir::Type;
use crate::kind::Kind;

/// The single way a candidate can fail a schema: the first mismatch found,
/// where it is and why.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: {kind}")]
pub struct ValidationMismatch {
    pub path: Path,
    pub kind: MismatchKind,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MismatchKind {
    #[error("required value is absent")]
    Missing,
    #[error("null is not absent")]
    NullNotAbsent,
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: Type, found: Kind },
    #[error("expected a tuple of {expected} elements, found {found}")]
    TupleLength { expected: usize, found: usize },
    #[error("matched none of {alternatives} alternatives{}", last_reason(.last))]
    NoAlternative {
        alternatives: usize,
        /// why the last alternative (in declaration order) was rejected
        last: Option<Box<ValidationMismatch>>,
    },
    #[error("expected one of {allowed}, found {found}")]
    NotAConstant { allowed: String, found: Kind },
    #[error("key `{key}` is not declared")]
    UnknownKey { key: String },
}

fn last_reason(last: &Option<Box<ValidationMismatch>>) -> String {
    match last {
        Some(m) => format!(" (last: {m})"),
        None => String::new(),
    }
}

impl ValidationMismatch {
    pub fn new(path: Path, kind: MismatchKind) -> Self {
        Self { path, kind }
    }
}

/// Errors from the fallible edges around the checker: text parsing, typed
/// decoding and policy loading.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Mismatch(#[from] ValidationMismatch),
    #[error("at JSON path {path} → {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid policy at {path}: {source}")]
    Policy {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
