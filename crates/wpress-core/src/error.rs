//! Error types for wpress-core.
//!
//! Every failure surfaces to the immediate caller. Placeholder entries in a
//! JSON array and unknown keys in a JSON object are not errors.

use thiserror::Error;

use crate::timestamp::TimestampError;

/// The unified error type for record parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// `parse` was called on a model that does not provide a field mapping.
    ///
    /// This is an integration error (the wrong type was used), not a data error.
    #[error("{model}::parse is not implemented")]
    NotImplemented { model: &'static str },

    /// The input handed to `parse` was not a JSON object.
    #[error("{model} expects a JSON object, found {found}")]
    NotAnObject {
        model: &'static str,
        found: &'static str,
    },

    /// A date-like field could not be parsed as ISO-8601.
    #[error("invalid {model}.{field}: {source}")]
    InvalidTimestamp {
        model: &'static str,
        field: String,
        #[source]
        source: TimestampError,
    },
}

impl Error {
    /// The name of the model that was being parsed.
    pub fn model(&self) -> &'static str {
        match self {
            Error::NotImplemented { model }
            | Error::NotAnObject { model, .. }
            | Error::InvalidTimestamp { model, .. } => *model,
        }
    }
}

/// Returns a short name for the kind of JSON value, for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
