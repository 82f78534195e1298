//! Field mapping from a JSON object onto a record.
//!
//! Known keys fill typed fields. A value that does not have the shape a
//! field expects is not an error: it is kept verbatim in the record's
//! overflow map, next to unknown keys, so every key in the source object
//! stays reachable.

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::json_kind;
use crate::resources::Rendered;
use crate::timestamp::{self, Timestamp};
use crate::{Error, Result};

/// Conversion from a JSON value into a typed field.
///
/// Returns `None` when the value does not have the expected shape.
pub(crate) trait FromJson: Sized {
    fn from_json(value: &Value) -> Option<Self>;
}

impl FromJson for i64 {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FromJson for bool {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromJson for String {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromJson for Vec<Value> {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_array().cloned()
    }
}

impl FromJson for Map<String, Value> {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl FromJson for Rendered {
    fn from_json(value: &Value) -> Option<Self> {
        Rendered::from_object(value.as_object()?)
    }
}

/// Writes the entries of one JSON object onto a record's fields.
pub(crate) struct Fields<'a> {
    model: &'static str,
    extra: &'a mut Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Create a mapper that keeps leftovers in `extra`.
    pub(crate) fn new(model: &'static str, extra: &'a mut Map<String, Value>) -> Self {
        Self { model, extra }
    }

    /// Borrow the input as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnObject`] for any other JSON value.
    pub(crate) fn object<'v>(model: &'static str, json: &'v Value) -> Result<&'v Map<String, Value>> {
        json.as_object().ok_or_else(|| Error::NotAnObject {
            model,
            found: json_kind(json),
        })
    }

    /// Fill `slot` from `value`, or keep the value in the overflow map if
    /// it has the wrong shape.
    pub(crate) fn set<T: FromJson>(&mut self, slot: &mut Option<T>, key: &str, value: &Value) {
        match T::from_json(value) {
            Some(parsed) => *slot = Some(parsed),
            None => {
                trace!(model = self.model, key, found = json_kind(value), "keeping mismatched value");
                self.keep(key, value);
            }
        }
    }

    /// Fill a date-like `slot` by parsing ISO-8601 text.
    ///
    /// A JSON `null` leaves the slot unset and is kept in the overflow map.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`] if the value is malformed text or
    /// not text at all.
    pub(crate) fn timestamp(
        &mut self,
        slot: &mut Option<Timestamp>,
        key: &str,
        value: &Value,
    ) -> Result<()> {
        match timestamp::from_json(value) {
            Ok(Some(parsed)) => *slot = Some(parsed),
            Ok(None) => self.keep(key, value),
            Err(source) => {
                return Err(Error::InvalidTimestamp {
                    model: self.model,
                    field: key.to_string(),
                    source,
                });
            }
        }
        Ok(())
    }

    /// Keep `value` verbatim under `key`.
    pub(crate) fn keep(&mut self, key: &str, value: &Value) {
        self.extra.insert(key.to_string(), value.clone());
    }
}
