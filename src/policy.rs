//! Checker policy knobs.
//!
//! Two behaviors are left open by the declaration grammar itself: whether a
//! mapping schema tolerates keys it does not declare, and whether `float`
//! accepts whole numbers. Both default to the permissive reading.
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Policy {
    /// what to do with candidate keys a mapping schema does not declare
    pub unknown_keys: UnknownKeys,
    /// what `Type::Float` accepts
    pub float: FloatRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownKeys {
    /// open schema: extra keys are ignored
    #[default]
    Ignore,
    /// closed schema: the first extra key is a mismatch
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatRule {
    /// any number, whole or not
    #[default]
    AnyNumber,
    /// numbers with a fractional component only
    Fractional,
}

impl Policy {
    pub const OPEN: Policy = Policy {
        unknown_keys: UnknownKeys::Ignore,
        float: FloatRule::AnyNumber,
    };
    pub const STRICT: Policy = Policy {
        unknown_keys: UnknownKeys::Reject,
        float: FloatRule::Fractional,
    };

    pub fn with_unknown_keys(mut self, unknown_keys: UnknownKeys) -> Self {
        self.unknown_keys = unknown_keys;
        self
    }

    pub fn with_float(mut self, float: FloatRule) -> Self {
        self.float = float;
        self
    }

    /// Load a policy from JSON, e.g. `{"unknown_keys": "reject"}`.
    /// Missing fields keep their defaults.
    pub fn from_json_str(src: &str) -> Result<Self> {
        let de = &mut serde_json::Deserializer::from_str(src);
        let policy: Policy = serde_path_to_error::deserialize(de).map_err(|err| {
            let path = err.path().to_string();
            Error::Policy { path, source: err.into_inner() }
        })?;
        tracing::debug!(?policy, "loaded checker policy");
        Ok(policy)
    }
}
