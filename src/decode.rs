use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::conform::Checker;
use crate::error::{Error, Result};
use crate::ir::Schema;

/// Check `value` against `schema`, then deserialize it with JSON-path
/// context in error messages. The value is read as-is, never coerced.
pub fn decode<T: DeserializeOwned>(value: &Value, schema: &Schema) -> Result<T> {
    decode_with(&Checker::default(), value, schema)
}

pub fn decode_with<T: DeserializeOwned>(checker: &Checker, value: &Value, schema: &Schema) -> Result<T> {
    checker.check(Some(value), schema)?;
    serde_path_to_error::deserialize::<_, T>(value).map_err(|err| {
        let path = err.path().to_string();
        Error::Decode { path, source: err.into_inner() }
    })
}

pub fn from_str_with_path<T: DeserializeOwned>(src: &str, schema: &Schema) -> Result<T> {
    let value = serde_json::from_str::<Value>(src).map_err(parse_error)?;
    decode(&value, schema)
}

pub fn from_slice_with_path<T: DeserializeOwned>(bytes: &[u8], schema: &Schema) -> Result<T> {
    let value = serde_json::from_slice::<Value>(bytes).map_err(parse_error)?;
    decode(&value, schema)
}

fn parse_error(source: serde_json::Error) -> Error {
    Error::Parse { line: source.line(), source }
}
