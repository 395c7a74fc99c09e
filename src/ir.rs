// Declaration model: the schema tree callers build once and check against.
pub mod tag;

use std::fmt;
use indexmap::IndexMap;
use serde_json::Value;

pub use tag::Type;

/// Named fields of an object declaration, in declaration order.
///
/// Order only decides which failing field is reported first; matching
/// itself does not depend on it.
pub type Fields = IndexMap<String, Schema>;

#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Primitive(Type),         // single atomic shape
    Object(Fields),          // nested mapping: field name → schema
    Optional(Box<Schema>),   // absent is fine, otherwise inner decides
    Union(Vec<Schema>),      // any alternative, tried in declaration order
    Tuple(Vec<Schema>),      // exact arity, positional
    Array(Box<Schema>),      // homogeneous list
    Constants(Vec<Value>),   // one of a fixed set of JSON literals
}

impl Schema {
    pub fn object<I, K, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<Schema>,
    {
        Schema::Object(fields.into_iter().map(|(k, s)| (k.into(), s.into())).collect())
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Schema::Optional(_))
    }

    /// Check with the default policy and keep only the verdict.
    pub fn accepts(&self, value: Option<&Value>) -> bool {
        crate::conform::Checker::default().check(value, self).is_ok()
    }
}

impl From<Type> for Schema {
    fn from(t: Type) -> Self { Schema::Primitive(t) }
}

impl From<Fields> for Schema {
    fn from(fields: Fields) -> Self { Schema::Object(fields) }
}

/// Literal object declaration.
///
/// ```
/// use json_conform::{decl, field::optional, Type};
///
/// let image = decl! {
///     source: Type::String,
///     width: optional(Type::Integer),
///     height: optional(Type::Integer),
/// };
/// assert!(image.accepts(Some(&serde_json::json!({"source": "u", "width": 100}))));
/// ```
///
/// Keys must be identifiers; use [`Schema::object`] for anything else.
#[macro_export]
macro_rules! decl {
    ($($key:ident : $schema:expr),* $(,)?) => {
        $crate::Schema::Object(
            <$crate::ir::Fields as ::core::iter::FromIterator<_>>::from_iter([
                $( (::std::string::String::from(stringify!($key)), $crate::Schema::from($schema)) ),*
            ])
        )
    };
}

pub(crate) fn render_constants(values: &[Value]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" | ")
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Primitive(t) => write!(f, "{t}"),
            Schema::Object(fields) => {
                if fields.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, (name, ty)) in fields.iter().enumerate() {
                    if i > 0 { f.write_str(", ")?; }
                    match ty {
                        Schema::Optional(inner) => write!(f, "{name}?: {inner}")?,
                        _ => write!(f, "{name}: {ty}")?,
                    }
                }
                f.write_str(" }")
            }
            Schema::Optional(inner) => write!(f, "optional<{inner}>"),
            Schema::Union(alts) => {
                if alts.is_empty() {
                    return f.write_str("never");
                }
                for (i, alt) in alts.iter().enumerate() {
                    if i > 0 { f.write_str(" | ")?; }
                    write!(f, "{alt}")?;
                }
                Ok(())
            }
            Schema::Tuple(elems) => {
                f.write_str("[")?;
                for (i, el) in elems.iter().enumerate() {
                    if i > 0 { f.write_str(", ")?; }
                    write!(f, "{el}")?;
                }
                f.write_str("]")
            }
            Schema::Array(item) => write!(f, "array<{item}>"),
            Schema::Constants(values) => f.write_str(&render_constants(values)),
        }
    }
}
