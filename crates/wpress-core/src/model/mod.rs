//! The record abstraction shared by every resource type.
//!
//! A [`Model`] knows how to build itself from one JSON object. Arrays are
//! handled once, generically, by [`Model::parse_list`], which collects the
//! records into a [`ResultSet`].

mod fields;
mod repr;
mod result_set;

pub(crate) use fields::Fields;
pub(crate) use repr::Repr;
pub use result_set::ResultSet;

use serde_json::Value;
use tracing::{debug, debug_span};

use crate::{Error, Result};

/// A typed record built from a JSON object returned by the API.
pub trait Model: Sized {
    /// Type name used in errors and in [`Model::debug_string`].
    const NAME: &'static str;

    /// Parse one JSON object into a record.
    ///
    /// Resource types override this with their field mapping. The default
    /// body exists only to be overridden.
    ///
    /// # Errors
    ///
    /// The default implementation always returns [`Error::NotImplemented`].
    fn parse(_json: &Value) -> Result<Self> {
        Err(Error::NotImplemented { model: Self::NAME })
    }

    /// Parse a JSON array into a [`ResultSet`], preserving element order.
    ///
    /// Placeholder entries (`null`, `false`, `0`, `""`, `[]`) are skipped.
    /// An empty object `{}` is not a placeholder and yields a record with
    /// every field unset.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`Model::parse`]; no partial collection
    /// is returned.
    fn parse_list(json_list: &[Value]) -> Result<ResultSet<Self>> {
        let _span = debug_span!("parse_list", model = Self::NAME, len = json_list.len()).entered();

        let mut results = ResultSet::with_capacity(json_list.len());

        for (index, obj) in json_list.iter().enumerate() {
            if is_placeholder(obj) {
                debug!(index, "skipping placeholder entry");
                continue;
            }
            results.push(Self::parse(obj)?);
        }

        Ok(results)
    }

    /// Render the record as `Name(field=value, ...)`.
    ///
    /// Only fields that are set are listed, in the record's fixed field
    /// order, followed by any unrecognized keys in key order.
    fn debug_string(&self) -> String;
}

/// A record that may carry a numeric identifier.
pub trait Identified {
    /// The record's `id`, if the source JSON had one.
    fn id(&self) -> Option<i64>;
}

/// Returns true for array entries that stand in for a missing record.
fn is_placeholder(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}
