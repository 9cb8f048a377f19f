// error taxonomy for keyed data construction
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeyedDataError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyedDataError {
    #[error("value for key `{key}` is not an object (found {found})")]
    NotAnObject { key: String, found: &'static str },

    #[error("record `{key}` has no `{field}` identifier field")]
    MissingIdentifier { key: String, field: String },

    #[error("record `{key}` carries identifier {found}, expected its own key")]
    IdentifierMismatch { key: String, found: String },

    #[error("table root is not an object of records (found {found})")]
    NotATable { found: &'static str },

    #[error("failed to serialize value for key `{key}`: {message}")]
    Serialize { key: String, message: String },

    #[error("failed to deserialize record `{key}`: {message}")]
    Deserialize { key: String, message: String },

    #[error("failed to decode TOON table: {0}")]
    Decode(String),

    #[error("failed to encode TOON table: {0}")]
    Encode(String),
}

//name of the JSON kind, used in error messages
pub(crate) fn value_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
