//! Recursive conformance checker.
//!
//! Walks the schema tree in lock-step with the candidate value and stops at
//! the first mismatch. The checker only reads both inputs, so one schema can
//! be checked from many threads at once.
pub mod path;

use serde_json::{Map, Value};

use crate::error::{MismatchKind, ValidationMismatch};
use crate::ir::{render_constants, Fields, Schema, Type};
use crate::kind::Kind;
use crate::policy::{Policy, UnknownKeys};

use path::{Path, Segment};

/// Check `value` (`None` = absent) against `schema` with the default policy.
pub fn conforms_to_type(value: Option<&Value>, schema: &Schema) -> Result<(), ValidationMismatch> {
    Checker::default().check(value, schema)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Checker {
    policy: Policy,
}

impl Checker {
    pub fn new(policy: Policy) -> Self { Self { policy } }

    pub fn policy(&self) -> &Policy { &self.policy }

    pub fn check(&self, value: Option<&Value>, schema: &Schema) -> Result<(), ValidationMismatch> {
        let mut path = Path::root();
        let result = self.walk(value, schema, &mut path);
        if let Err(mismatch) = &result {
            tracing::debug!(path = %mismatch.path, reason = %mismatch.kind, "value does not conform");
        }
        result
    }

    fn walk(&self, value: Option<&Value>, schema: &Schema, path: &mut Path) -> Result<(), ValidationMismatch> {
        match schema {
            Schema::Optional(inner) => match value {
                None => Ok(()),
                // null is never absent, whatever the inner node accepts
                Some(Value::Null) => Err(mismatch(path, MismatchKind::NullNotAbsent)),
                Some(_) => self.walk(value, inner, path),
            },
            Schema::Primitive(tag) => {
                let v = present(value, path)?;
                if tag.matches(v, &self.policy) {
                    Ok(())
                } else {
                    Err(type_mismatch(path, *tag, value))
                }
            }
            Schema::Union(alts) => self.walk_union(value, alts, path),
            Schema::Tuple(elems) => {
                let xs = array_of(value, path)?;
                if xs.len() != elems.len() {
                    return Err(mismatch(path, MismatchKind::TupleLength {
                        expected: elems.len(),
                        found: xs.len(),
                    }));
                }
                for (ix, (x, el)) in xs.iter().zip(elems).enumerate() {
                    self.walk_at(Segment::Index(ix), Some(x), el, path)?;
                }
                Ok(())
            }
            Schema::Array(item) => {
                let xs = array_of(value, path)?;
                for (ix, x) in xs.iter().enumerate() {
                    self.walk_at(Segment::Index(ix), Some(x), item, path)?;
                }
                Ok(())
            }
            Schema::Object(fields) => {
                let map = object_of(value, path)?;
                self.walk_fields(map, fields, path)
            }
            Schema::Constants(allowed) => {
                let v = present(value, path)?;
                if allowed.iter().any(|c| same_constant(c, v)) {
                    Ok(())
                } else {
                    Err(mismatch(path, MismatchKind::NotAConstant {
                        allowed: render_constants(allowed),
                        found: Kind::of(value),
                    }))
                }
            }
        }
    }

    fn walk_at(
        &self,
        segment: Segment,
        value: Option<&Value>,
        schema: &Schema,
        path: &mut Path,
    ) -> Result<(), ValidationMismatch> {
        path.push(segment);
        let result = self.walk(value, schema, path);
        path.pop();
        result
    }

    fn walk_union(&self, value: Option<&Value>, alts: &[Schema], path: &mut Path) -> Result<(), ValidationMismatch> {
        let mut last = None;
        for (ix, alt) in alts.iter().enumerate() {
            match self.walk(value, alt, path) {
                Ok(()) => return Ok(()),
                Err(rejected) => {
                    tracing::trace!(alternative = ix, %rejected, "union alternative rejected");
                    last = Some(Box::new(rejected));
                }
            }
        }
        Err(mismatch(path, MismatchKind::NoAlternative { alternatives: alts.len(), last }))
    }

    fn walk_fields(&self, map: &Map<String, Value>, fields: &Fields, path: &mut Path) -> Result<(), ValidationMismatch> {
        for (key, schema) in fields {
            // a missing key is an absent value; only Optional lets it pass
            self.walk_at(Segment::Key(key.clone()), map.get(key), schema, path)?;
        }
        if self.policy.unknown_keys == UnknownKeys::Reject {
            if let Some(key) = map.keys().find(|k| !fields.contains_key(k.as_str())) {
                path.push(Segment::Key(key.clone()));
                let err = mismatch(path, MismatchKind::UnknownKey { key: key.clone() });
                path.pop();
                return Err(err);
            }
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn mismatch(path: &Path, kind: MismatchKind) -> ValidationMismatch {
    ValidationMismatch::new(path.clone(), kind)
}

fn type_mismatch(path: &Path, expected: Type, value: Option<&Value>) -> ValidationMismatch {
    mismatch(path, MismatchKind::TypeMismatch { expected, found: Kind::of(value) })
}

fn present<'v>(value: Option<&'v Value>, path: &Path) -> Result<&'v Value, ValidationMismatch> {
    value.ok_or_else(|| mismatch(path, MismatchKind::Missing))
}

fn array_of<'v>(value: Option<&'v Value>, path: &Path) -> Result<&'v Vec<Value>, ValidationMismatch> {
    match present(value, path)? {
        Value::Array(xs) => Ok(xs),
        _ => Err(type_mismatch(path, Type::Array, value)),
    }
}

fn object_of<'v>(value: Option<&'v Value>, path: &Path) -> Result<&'v Map<String, Value>, ValidationMismatch> {
    match present(value, path)? {
        Value::Object(map) => Ok(map),
        _ => Err(type_mismatch(path, Type::Object, value)),
    }
}

/// JSON equality, except numbers compare by value (`1 == 1.0`).
fn same_constant(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => match (x.as_u64(), y.as_u64()) {
                (Some(x), Some(y)) => x == y,
                _ => x.as_f64() == y.as_f64(),
            },
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| same_constant(x, y))
        }
        (Value::Object(xm), Value::Object(ym)) => {
            xm.len() == ym.len()
                && xm.iter().all(|(k, x)| ym.get(k).is_some_and(|y| same_constant(x, y)))
        }
        _ => a == b,
    }
}
