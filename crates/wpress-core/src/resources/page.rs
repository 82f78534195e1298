//! Page record (`/wp/v2/pages`).

use std::fmt;

use serde_json::{Map, Value};

use super::Rendered;
use crate::model::{Fields, Identified, Model, Repr};
use crate::timestamp::Timestamp;
use crate::Result;

/// A WordPress page.
///
/// Shares most of its shape with [`Post`](super::Post) but is hierarchical
/// (`parent`, `menu_order`) and has no format, stickiness or taxonomies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub id: Option<i64>,
    pub date: Option<Timestamp>,
    pub date_gmt: Option<Timestamp>,
    pub guid: Option<Rendered>,
    pub link: Option<String>,
    pub modified: Option<Timestamp>,
    pub modified_gmt: Option<Timestamp>,
    pub slug: Option<String>,
    pub status: Option<String>,
    pub r#type: Option<String>,
    pub password: Option<String>,
    /// ID of the parent page, `0` for top-level pages.
    pub parent: Option<i64>,
    pub title: Option<Rendered>,
    pub content: Option<Rendered>,
    pub author: Option<i64>,
    pub excerpt: Option<Rendered>,
    pub featured_media: Option<i64>,
    pub comment_status: Option<String>,
    pub ping_status: Option<String>,
    /// Position among sibling pages.
    pub menu_order: Option<i64>,
    pub meta: Option<Vec<Value>>,
    pub template: Option<String>,
    /// Unrecognized or mismatched keys, verbatim.
    pub extra: Map<String, Value>,
    json: Value,
}

impl Page {
    /// The JSON object this page was parsed from.
    ///
    /// A `Page::default()` was never parsed and returns `Value::Null`.
    pub fn json(&self) -> &Value {
        &self.json
    }
}

impl Model for Page {
    const NAME: &'static str = "Page";

    fn parse(json: &Value) -> Result<Self> {
        let obj = Fields::object(Self::NAME, json)?;

        let mut page = Page {
            json: json.clone(),
            ..Default::default()
        };
        let mut fields = Fields::new(Self::NAME, &mut page.extra);

        for (key, value) in obj {
            match key.as_str() {
                "date" => fields.timestamp(&mut page.date, key, value)?,
                "date_gmt" => fields.timestamp(&mut page.date_gmt, key, value)?,
                "modified" => fields.timestamp(&mut page.modified, key, value)?,
                "modified_gmt" => fields.timestamp(&mut page.modified_gmt, key, value)?,
                "id" => fields.set(&mut page.id, key, value),
                "guid" => fields.set(&mut page.guid, key, value),
                "link" => fields.set(&mut page.link, key, value),
                "slug" => fields.set(&mut page.slug, key, value),
                "status" => fields.set(&mut page.status, key, value),
                "type" => fields.set(&mut page.r#type, key, value),
                "password" => fields.set(&mut page.password, key, value),
                "parent" => fields.set(&mut page.parent, key, value),
                "title" => fields.set(&mut page.title, key, value),
                "content" => fields.set(&mut page.content, key, value),
                "author" => fields.set(&mut page.author, key, value),
                "excerpt" => fields.set(&mut page.excerpt, key, value),
                "featured_media" => fields.set(&mut page.featured_media, key, value),
                "comment_status" => fields.set(&mut page.comment_status, key, value),
                "ping_status" => fields.set(&mut page.ping_status, key, value),
                "menu_order" => fields.set(&mut page.menu_order, key, value),
                "meta" => fields.set(&mut page.meta, key, value),
                "template" => fields.set(&mut page.template, key, value),
                _ => fields.keep(key, value),
            }
        }

        Ok(page)
    }

    fn debug_string(&self) -> String {
        Repr::new(Self::NAME)
            .field("id", &self.id)
            .field("date", &self.date)
            .field("date_gmt", &self.date_gmt)
            .field("guid", &self.guid)
            .field("link", &self.link)
            .field("modified", &self.modified)
            .field("modified_gmt", &self.modified_gmt)
            .field("slug", &self.slug)
            .field("status", &self.status)
            .field("type", &self.r#type)
            .field("password", &self.password)
            .field("parent", &self.parent)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("author", &self.author)
            .field("excerpt", &self.excerpt)
            .field("featured_media", &self.featured_media)
            .field("comment_status", &self.comment_status)
            .field("ping_status", &self.ping_status)
            .field("menu_order", &self.menu_order)
            .field("meta", &self.meta)
            .field("template", &self.template)
            .extra(&self.extra)
            .finish()
    }
}

impl Identified for Page {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}
