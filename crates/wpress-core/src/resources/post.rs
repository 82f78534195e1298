//! Post record (`/wp/v2/posts`).

use std::fmt;

use serde_json::{Map, Value};

use super::Rendered;
use crate::model::{Fields, Identified, Model, Repr};
use crate::timestamp::Timestamp;
use crate::Result;

/// A WordPress post.
///
/// Every field mirrors the JSON key of the same name and is `None` when the
/// key was absent. Keys this type does not know, and known keys whose value
/// had an unexpected shape, are kept verbatim in [`Post::extra`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Post {
    /// Unique identifier for the post.
    pub id: Option<i64>,
    /// Publication date, in the site's time zone.
    pub date: Option<Timestamp>,
    /// Publication date, as GMT.
    pub date_gmt: Option<Timestamp>,
    /// Globally unique identifier.
    pub guid: Option<Rendered>,
    /// URL to the post.
    pub link: Option<String>,
    /// Last modification date, in the site's time zone.
    pub modified: Option<Timestamp>,
    /// Last modification date, as GMT.
    pub modified_gmt: Option<Timestamp>,
    /// Alphanumeric identifier unique to the post type.
    pub slug: Option<String>,
    /// Named status (`publish`, `draft`, ...).
    pub status: Option<String>,
    /// Post type.
    pub r#type: Option<String>,
    /// Password protecting the content and excerpt.
    pub password: Option<String>,
    pub title: Option<Rendered>,
    pub content: Option<Rendered>,
    /// ID of the author user.
    pub author: Option<i64>,
    pub excerpt: Option<Rendered>,
    /// ID of the featured media attachment.
    pub featured_media: Option<i64>,
    /// Whether comments are open (`open` or `closed`).
    pub comment_status: Option<String>,
    /// Whether the post can be pinged (`open` or `closed`).
    pub ping_status: Option<String>,
    /// Post format (`standard`, `aside`, ...).
    pub format: Option<String>,
    pub meta: Option<Vec<Value>>,
    /// Whether the post is sticky.
    pub sticky: Option<bool>,
    /// Theme file used to display the post.
    pub template: Option<String>,
    /// Terms in the `category` taxonomy.
    pub categories: Option<Vec<Value>>,
    /// Terms in the `post_tag` taxonomy.
    pub tags: Option<Vec<Value>>,
    /// Like count added by the Liveblog plugin.
    pub liveblog_likes: Option<i64>,
    /// Unrecognized or mismatched keys, verbatim.
    pub extra: Map<String, Value>,
    json: Value,
}

impl Post {
    /// The JSON object this post was parsed from.
    ///
    /// A `Post::default()` was never parsed and returns `Value::Null`.
    pub fn json(&self) -> &Value {
        &self.json
    }
}

impl Model for Post {
    const NAME: &'static str = "Post";

    fn parse(json: &Value) -> Result<Self> {
        let obj = Fields::object(Self::NAME, json)?;

        let mut post = Post {
            json: json.clone(),
            ..Default::default()
        };
        let mut fields = Fields::new(Self::NAME, &mut post.extra);

        for (key, value) in obj {
            match key.as_str() {
                "date" => fields.timestamp(&mut post.date, key, value)?,
                "date_gmt" => fields.timestamp(&mut post.date_gmt, key, value)?,
                "modified" => fields.timestamp(&mut post.modified, key, value)?,
                "modified_gmt" => fields.timestamp(&mut post.modified_gmt, key, value)?,
                "id" => fields.set(&mut post.id, key, value),
                "guid" => fields.set(&mut post.guid, key, value),
                "link" => fields.set(&mut post.link, key, value),
                "slug" => fields.set(&mut post.slug, key, value),
                "status" => fields.set(&mut post.status, key, value),
                "type" => fields.set(&mut post.r#type, key, value),
                "password" => fields.set(&mut post.password, key, value),
                "title" => fields.set(&mut post.title, key, value),
                "content" => fields.set(&mut post.content, key, value),
                "author" => fields.set(&mut post.author, key, value),
                "excerpt" => fields.set(&mut post.excerpt, key, value),
                "featured_media" => fields.set(&mut post.featured_media, key, value),
                "comment_status" => fields.set(&mut post.comment_status, key, value),
                "ping_status" => fields.set(&mut post.ping_status, key, value),
                "format" => fields.set(&mut post.format, key, value),
                "meta" => fields.set(&mut post.meta, key, value),
                "sticky" => fields.set(&mut post.sticky, key, value),
                "template" => fields.set(&mut post.template, key, value),
                "categories" => fields.set(&mut post.categories, key, value),
                "tags" => fields.set(&mut post.tags, key, value),
                "liveblog_likes" => fields.set(&mut post.liveblog_likes, key, value),
                _ => fields.keep(key, value),
            }
        }

        Ok(post)
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
            .field("title", &self.title)
            .field("content", &self.content)
            .field("author", &self.author)
            .field("excerpt", &self.excerpt)
            .field("featured_media", &self.featured_media)
            .field("comment_status", &self.comment_status)
            .field("ping_status", &self.ping_status)
            .field("format", &self.format)
            .field("meta", &self.meta)
            .field("sticky", &self.sticky)
            .field("template", &self.template)
            .field("categories", &self.categories)
            .field("tags", &self.tags)
            .field("liveblog_likes", &self.liveblog_likes)
            .extra(&self.extra)
            .finish()
    }
}

impl Identified for Post {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}
