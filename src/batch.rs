//! Many candidates, one schema.
//!
//! The schema is shared read-only across rayon workers; results come back
//! in input order.
use rayon::prelude::*;
use serde_json::Value;

use crate::conform::Checker;
use crate::error::{Error, Result, ValidationMismatch};
use crate::ir::Schema;
use crate::policy::Policy;

pub type Outcome = std::result::Result<(), ValidationMismatch>;

pub fn check_all(schema: &Schema, policy: &Policy, values: &[Value]) -> Vec<Outcome> {
    let checker = Checker::new(*policy);
    let out: Vec<Outcome> = values
        .par_iter()
        .map(|v| checker.check(Some(v), schema))
        .collect();
    tracing::debug!(
        total = out.len(),
        failed = out.iter().filter(|r| r.is_err()).count(),
        "batch conformance finished"
    );
    out
}

/// Newline-delimited JSON. Blank lines are skipped; a line that is not
/// JSON fails the whole batch with its 1-based line number.
pub fn check_ndjson(schema: &Schema, policy: &Policy, src: &str) -> Result<Vec<Outcome>> {
    let mut values = Vec::new();
    for (ix, line) in src.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value = serde_json::from_str::<Value>(line)
            .map_err(|source| Error::Parse { line: ix + 1, source })?;
        values.push(value);
    }
    Ok(check_all(schema, policy, &values))
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub total: usize,
    pub conforming: usize,
    /// position and reason of the earliest failing candidate
    pub first_failure: Option<(usize, ValidationMismatch)>,
}

impl BatchSummary {
    pub fn all_conform(&self) -> bool { self.conforming == self.total }
}

pub fn summarize(outcomes: &[Outcome]) -> BatchSummary {
    let first_failure = outcomes
        .iter()
        .enumerate()
        .find_map(|(ix, r)| r.as_ref().err().map(|m| (ix, m.clone())));
    BatchSummary {
        total: outcomes.len(),
        conforming: outcomes.iter().filter(|r| r.is_ok()).count(),
        first_failure,
    }
}
