//! Structural runtime type checks for untyped JSON values.
//!
//! Build a [`Schema`] once from primitive [`Type`] tags, literal object
//! declarations ([`decl!`]) and the combinators in [`field`], then check
//! candidates against it with [`conforms_to_type`]. A check either succeeds
//! or returns the first [`ValidationMismatch`] found; values are never
//! coerced or filled in.
//!
//! ```
//! use json_conform::{conforms_to_type, decl, field::{optional, union_or}, Type};
//! use serde_json::json;
//!
//! let schema = decl! {
//!     field: Type::String,
//!     field2: optional(union_or([Type::Integer, Type::String])),
//! };
//! assert!(conforms_to_type(Some(&json!({"field": "some"})), &schema).is_ok());
//!
//! let err = conforms_to_type(Some(&json!({"field": "some", "field2": true})), &schema).unwrap_err();
//! assert_eq!(err.path.to_string(), "$.field2");
//! ```
pub mod batch;
pub mod conform;
pub mod decode;
pub mod error;
pub mod field;
pub mod ir;
pub mod kind;
pub mod policy;

pub use conform::{conforms_to_type, Checker};
pub use error::{Error, MismatchKind, Result, ValidationMismatch};
pub use ir::{Fields, Schema, Type};
pub use kind::Kind;
pub use policy::{FloatRule, Policy, UnknownKeys};
