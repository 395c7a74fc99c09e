//! Combinators for composite schema nodes.
//!
//! These are pure constructors; nothing is checked until the tree is handed
//! to [`crate::conform::Checker`].
//!
//! ```
//! use json_conform::{conforms_to_type, field::{array, tuple}, Type};
//! use serde_json::json;
//!
//! let points = array(tuple([Type::Integer, Type::Integer]));
//! assert!(conforms_to_type(Some(&json!([[10, 10], [0, 0]])), &points).is_ok());
//! assert!(conforms_to_type(Some(&json!([[10, 10], [10, "10"]])), &points).is_err());
//! ```
use serde_json::Value;

use crate::ir::{Schema, Type};
use crate::policy::Policy;

/// Primitive check on its own, with the default policy.
pub fn simple(tag: Type, value: &Value) -> bool {
    tag.matches(value, &Policy::default())
}

/// Absent is accepted and `null` is rejected, whatever `inner` is; any
/// other value goes to `inner`.
pub fn optional(inner: impl Into<Schema>) -> Schema {
    Schema::Optional(Box::new(inner.into()))
}

/// Logical OR over alternatives, tried in the given order.
///
/// Absence is not tolerated here; wrap the union in [`optional`] for that.
pub fn union_or<I>(alternatives: I) -> Schema
where
    I: IntoIterator,
    I::Item: Into<Schema>,
{
    Schema::Union(alternatives.into_iter().map(Into::into).collect())
}

/// Homogeneous array; an empty array always conforms.
pub fn array(element: impl Into<Schema>) -> Schema {
    Schema::Array(Box::new(element.into()))
}

/// Fixed-length positional array.
pub fn tuple<I>(elements: I) -> Schema
where
    I: IntoIterator,
    I::Item: Into<Schema>,
{
    Schema::Tuple(elements.into_iter().map(Into::into).collect())
}

/// One of a fixed set of JSON literals. Numbers compare by value, so `1`
/// and `1.0` are the same constant.
pub fn any_of_constants<I>(values: I) -> Schema
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Schema::Constants(values.into_iter().map(Into::into).collect())
}
