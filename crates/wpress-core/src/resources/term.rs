//! Taxonomy term record (`/wp/v2/categories`, `/wp/v2/tags`).

use std::fmt;

use serde_json::{Map, Value};

use crate::model::{Fields, Identified, Model, Repr};
use crate::Result;

/// A category or tag.
///
/// Both taxonomies share this shape; tags never carry `parent`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Term {
    pub id: Option<i64>,
    /// Number of published posts using the term.
    pub count: Option<i64>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    /// `category` or `post_tag`.
    pub taxonomy: Option<String>,
    pub parent: Option<i64>,
    pub meta: Option<Vec<Value>>,
    /// Unrecognized or mismatched keys, verbatim.
    pub extra: Map<String, Value>,
    json: Value,
}

impl Term {
    /// The JSON object this term was parsed from.
    ///
    /// A `Term::default()` was never parsed and returns `Value::Null`.
    pub fn json(&self) -> &Value {
        &self.json
    }
}

impl Model for Term {
    const NAME: &'static str = "Term";

    fn parse(json: &Value) -> Result<Self> {
        let obj = Fields::object(Self::NAME, json)?;

        let mut term = Term {
            json: json.clone(),
            ..Default::default()
        };
        let mut fields = Fields::new(Self::NAME, &mut term.extra);

        for (key, value) in obj {
            match key.as_str() {
                "id" => fields.set(&mut term.id, key, value),
                "count" => fields.set(&mut term.count, key, value),
                "description" => fields.set(&mut term.description, key, value),
                "link" => fields.set(&mut term.link, key, value),
                "name" => fields.set(&mut term.name, key, value),
                "slug" => fields.set(&mut term.slug, key, value),
                "taxonomy" => fields.set(&mut term.taxonomy, key, value),
                "parent" => fields.set(&mut term.parent, key, value),
                "meta" => fields.set(&mut term.meta, key, value),
                _ => fields.keep(key, value),
            }
        }

        Ok(term)
    }

    fn debug_string(&self) -> String {
        Repr::new(Self::NAME)
            .field("id", &self.id)
            .field("count", &self.count)
            .field("description", &self.description)
            .field("link", &self.link)
            .field("name", &self.name)
            .field("slug", &self.slug)
            .field("taxonomy", &self.taxonomy)
            .field("parent", &self.parent)
            .field("meta", &self.meta)
            .extra(&self.extra)
            .finish()
    }
}

impl Identified for Term {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}
