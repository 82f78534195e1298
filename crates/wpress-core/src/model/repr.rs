//! Builder for `Name(field=value, ...)` diagnostic strings.

use serde_json::{Map, Value};

use crate::resources::Rendered;
use crate::timestamp::Timestamp;

/// How a field value is written inside a diagnostic string.
pub(crate) trait ReprValue {
    fn repr(&self) -> String;
}

impl ReprValue for i64 {
    fn repr(&self) -> String {
        self.to_string()
    }
}

impl ReprValue for bool {
    fn repr(&self) -> String {
        self.to_string()
    }
}

impl ReprValue for String {
    fn repr(&self) -> String {
        format!("{:?}", self)
    }
}

impl ReprValue for Timestamp {
    fn repr(&self) -> String {
        self.to_iso8601()
    }
}

impl ReprValue for Value {
    fn repr(&self) -> String {
        self.to_string()
    }
}

impl ReprValue for Vec<Value> {
    fn repr(&self) -> String {
        Value::Array(self.clone()).to_string()
    }
}

impl ReprValue for Map<String, Value> {
    fn repr(&self) -> String {
        Value::Object(self.clone()).to_string()
    }
}

impl ReprValue for Rendered {
    fn repr(&self) -> String {
        Value::Object(self.to_map()).to_string()
    }
}

/// Accumulates set fields into `Name(a=1, b="x")`.
pub(crate) struct Repr {
    out: String,
    empty: bool,
}

impl Repr {
    pub(crate) fn new(name: &str) -> Self {
        let mut out = String::with_capacity(64);
        out.push_str(name);
        out.push('(');
        Self { out, empty: true }
    }

    /// Append `name=value` if the field is set.
    pub(crate) fn field<T: ReprValue>(mut self, name: &str, value: &Option<T>) -> Self {
        if let Some(value) = value {
            self.push(name, &value.repr());
        }
        self
    }

    /// Append every overflow entry, in key order.
    pub(crate) fn extra(mut self, extra: &Map<String, Value>) -> Self {
        for (key, value) in extra {
            self.push(key, &value.repr());
        }
        self
    }

    pub(crate) fn finish(mut self) -> String {
        self.out.push(')');
        self.out
    }

    fn push(&mut self, name: &str, value: &str) {
        if !self.empty {
            self.out.push_str(", ");
        }
        self.out.push_str(name);
        self.out.push('=');
        self.out.push_str(value);
        self.empty = false;
    }
}
