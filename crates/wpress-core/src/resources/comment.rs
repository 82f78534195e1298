//! Comment record (`/wp/v2/comments`).

use std::fmt;

use serde_json::{Map, Value};

use super::Rendered;
use crate::model::{Fields, Identified, Model, Repr};
use crate::timestamp::Timestamp;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comment {
    pub id: Option<i64>,
    /// ID of the post the comment belongs to.
    pub post: Option<i64>,
    /// ID of the parent comment, `0` for top-level comments.
    pub parent: Option<i64>,
    /// ID of the author user, `0` for guests.
    pub author: Option<i64>,
    pub author_name: Option<String>,
    /// Only present in the `edit` context.
    pub author_email: Option<String>,
    pub author_url: Option<String>,
    pub date: Option<Timestamp>,
    pub date_gmt: Option<Timestamp>,
    pub content: Option<Rendered>,
    pub link: Option<String>,
    pub status: Option<String>,
    pub r#type: Option<String>,
    /// Avatar URLs keyed by pixel size.
    pub author_avatar_urls: Option<Map<String, Value>>,
    pub meta: Option<Vec<Value>>,
    /// Unrecognized or mismatched keys, verbatim.
    pub extra: Map<String, Value>,
    json: Value,
}

impl Comment {
    /// The JSON object this comment was parsed from.
    ///
    /// A `Comment::default()` was never parsed and returns `Value::Null`.
    pub fn json(&self) -> &Value {
        &self.json
    }
}

impl Model for Comment {
    const NAME: &'static str = "Comment";

    fn parse(json: &Value) -> Result<Self> {
        let obj = Fields::object(Self::NAME, json)?;

        let mut comment = Comment {
            json: json.clone(),
            ..Default::default()
        };
        let mut fields = Fields::new(Self::NAME, &mut comment.extra);

        for (key, value) in obj {
            match key.as_str() {
                "date" => fields.timestamp(&mut comment.date, key, value)?,
                "date_gmt" => fields.timestamp(&mut comment.date_gmt, key, value)?,
                "id" => fields.set(&mut comment.id, key, value),
                "post" => fields.set(&mut comment.post, key, value),
                "parent" => fields.set(&mut comment.parent, key, value),
                "author" => fields.set(&mut comment.author, key, value),
                "author_name" => fields.set(&mut comment.author_name, key, value),
                "author_email" => fields.set(&mut comment.author_email, key, value),
                "author_url" => fields.set(&mut comment.author_url, key, value),
                "content" => fields.set(&mut comment.content, key, value),
                "link" => fields.set(&mut comment.link, key, value),
                "status" => fields.set(&mut comment.status, key, value),
                "type" => fields.set(&mut comment.r#type, key, value),
                "author_avatar_urls" => fields.set(&mut comment.author_avatar_urls, key, value),
                "meta" => fields.set(&mut comment.meta, key, value),
                _ => fields.keep(key, value),
            }
        }

        Ok(comment)
    }

    fn debug_string(&self) -> String {
        Repr::new(Self::NAME)
            .field("id", &self.id)
            .field("post", &self.post)
            .field("parent", &self.parent)
            .field("author", &self.author)
            .field("author_name", &self.author_name)
            .field("author_email", &self.author_email)
            .field("author_url", &self.author_url)
            .field("date", &self.date)
            .field("date_gmt", &self.date_gmt)
            .field("content", &self.content)
            .field("link", &self.link)
            .field("status", &self.status)
            .field("type", &self.r#type)
            .field("author_avatar_urls", &self.author_avatar_urls)
            .field("meta", &self.meta)
            .extra(&self.extra)
            .finish()
    }
}

impl Identified for Comment {
    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    #[test]
    fn parse_guest_reply() {
        let comment = Comment::parse(&json!({
            "id": 31,
            "post": 8,
            "parent": 30,
            "author": 0,
            "author_name": "guest",
            "date": "2023-02-03T04:05:06",
            "content": {"rendered": "<p>Agreed.</p>\n"},
            "author_avatar_urls": {"24": "https://secure.gravatar.com/avatar/x?s=24"}
        }))
        .unwrap();

        assert_eq!(comment.post, Some(8));
        assert_eq!(comment.parent, Some(30));
        assert_eq!(comment.author, Some(0));
        assert_eq!(comment.content.unwrap().as_str(), Some("<p>Agreed.</p>\n"));
        assert!(comment.author_avatar_urls.unwrap().contains_key("24"));
    }

    #[test]
    fn no_modified_field() {
        // Comments have no modification date, so no parsing is attempted.
        let comment = Comment::parse(&json!({"id": 1, "modified": "not a date"})).unwrap();
        assert_eq!(comment.extra["modified"], json!("not a date"));
    }

    #[test]
    fn malformed_date_gmt_fails() {
        let err = Comment::parse(&json!({"date_gmt": 12})).unwrap_err();
        assert_eq!(err.model(), "Comment");
        assert!(matches!(err, Error::InvalidTimestamp { .. }));
    }
}
