//! The `{"rendered": ..., "raw": ...}` wrapper used by text fields.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A text field as the API wraps it.
///
/// `rendered` is the HTML shown to readers. `raw` is only present in the
/// `edit` context. `protected` appears on password-protected content and
/// excerpts. Any other sub-key is kept in `extra`, and so is a known
/// sub-key sent as `null`, so [`Rendered::to_map`] reproduces the source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Rendered {
    pub rendered: Option<String>,
    pub raw: Option<String>,
    pub protected: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Sub-keys with a typed field on [`Rendered`].
const KNOWN_KEYS: [&str; 3] = ["rendered", "raw", "protected"];

impl Rendered {
    /// Build from a JSON object, or `None` if a known sub-key has the wrong type.
    pub(crate) fn from_object(obj: &Map<String, Value>) -> Option<Self> {
        let mut rendered: Rendered = serde_json::from_value(Value::Object(obj.clone())).ok()?;
        for key in KNOWN_KEYS {
            if obj.get(key).is_some_and(Value::is_null) {
                rendered.extra.insert(key.to_string(), Value::Null);
            }
        }
        Some(rendered)
    }

    /// The rendered HTML, if present.
    pub fn as_str(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    /// Rebuild the mapping with only the sub-keys that were present.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = self.extra.clone();
        if let Some(rendered) = &self.rendered {
            map.insert("rendered".to_string(), Value::String(rendered.clone()));
        }
        if let Some(raw) = &self.raw {
            map.insert("raw".to_string(), Value::String(raw.clone()));
        }
        if let Some(protected) = self.protected {
            map.insert("protected".to_string(), Value::Bool(protected));
        }
        map
    }
}
