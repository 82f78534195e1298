//! Parsing realistic `/wp/v2/posts` responses end to end.

use serde_json::{Value, json};
use wpress_core::{Error, Identified, Model, Post, ResultSet, parse_iso8601};

fn sample_post(id: i64, slug: &str) -> Value {
    json!({
        "id": id,
        "date": "2024-05-06T07:08:09",
        "date_gmt": "2024-05-06T05:08:09",
        "guid": {"rendered": format!("https://example.com/?p={id}")},
        "modified": "2024-05-07T10:00:00",
        "modified_gmt": "2024-05-07T08:00:00",
        "slug": slug,
        "status": "publish",
        "type": "post",
        "link": format!("https://example.com/{slug}/"),
        "title": {"rendered": "Release notes"},
        "content": {"rendered": "<p>Body</p>\n", "protected": false},
        "excerpt": {"rendered": "<p>Body</p>\n", "protected": false},
        "author": 2,
        "featured_media": 0,
        "comment_status": "open",
        "ping_status": "open",
        "sticky": false,
        "template": "",
        "format": "standard",
        "meta": [],
        "categories": [1, 7],
        "tags": [],
        "class_list": ["post-1", "type-post"],
        "_links": {"self": [{"href": format!("https://example.com/wp-json/wp/v2/posts/{id}")}]}
    })
}

#[test]
fn parse_full_post() {
    let post = Post::parse(&sample_post(42, "release-notes")).unwrap();

    assert_eq!(post.id, Some(42));
    assert_eq!(post.slug.as_deref(), Some("release-notes"));
    assert_eq!(post.r#type.as_deref(), Some("post"));
    assert_eq!(post.author, Some(2));
    assert_eq!(post.featured_media, Some(0));
    assert_eq!(post.sticky, Some(false));
    assert_eq!(post.template.as_deref(), Some(""));
    assert_eq!(post.categories, Some(vec![json!(1), json!(7)]));
    assert_eq!(post.tags, Some(vec![]));
    assert_eq!(post.meta, Some(vec![]));
    assert_eq!(post.content.as_ref().unwrap().protected, Some(false));
    assert_eq!(post.date_gmt, Some(parse_iso8601("2024-05-06T05:08:09").unwrap()));

    // Only the keys Post does not model end up in extra.
    let extra: Vec<&str> = post.extra.keys().map(String::as_str).collect();
    assert_eq!(extra, vec!["_links", "class_list"]);
}

#[test]
fn non_date_fields_are_copied_verbatim() {
    let json = json!({
        "id": 10,
        "slug": "plain",
        "status": "private",
        "password": "hunter2",
        "liveblog_likes": 12,
        "tags": [{"id": 3, "name": "nested"}]
    });
    let post = Post::parse(&json).unwrap();

    assert_eq!(post.id, Some(10));
    assert_eq!(post.slug.as_deref(), Some("plain"));
    assert_eq!(post.status.as_deref(), Some("private"));
    assert_eq!(post.password.as_deref(), Some("hunter2"));
    assert_eq!(post.liveblog_likes, Some(12));
    assert_eq!(post.tags, Some(vec![json!({"id": 3, "name": "nested"})]));
    assert!(post.date.is_none());
    assert!(post.extra.is_empty());
    assert_eq!(post.json(), &json);
}

#[test]
fn date_fields_roundtrip() {
    let post = Post::parse(&json!({
        "date": "2020-01-02T03:04:05",
        "date_gmt": "2020-01-02T02:04:05",
        "modified": "2020-02-03T04:05:06.500",
        "modified_gmt": "2020-02-03T03:05:06Z"
    }))
    .unwrap();

    assert_eq!(post.date.unwrap().to_iso8601(), "2020-01-02T03:04:05");
    assert_eq!(post.date_gmt.unwrap().to_iso8601(), "2020-01-02T02:04:05");
    assert_eq!(post.modified.unwrap().to_iso8601(), "2020-02-03T04:05:06.500");
    assert_eq!(post.modified_gmt.unwrap().to_iso8601(), "2020-02-03T03:05:06Z");
}

#[test]
fn parse_list_counts_non_placeholder_entries() {
    let list = vec![
        sample_post(5, "first"),
        Value::Null,
        sample_post(9, "second"),
        Value::Null,
    ];
    let posts = Post::parse_list(&list).unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts.ids(), vec![5, 9]);
    assert_eq!(posts[0].slug.as_deref(), Some("first"));
    assert_eq!(posts[1].slug.as_deref(), Some("second"));
}

#[test]
fn parse_list_of_empty_array() {
    let posts = Post::parse_list(&[]).unwrap();
    assert_eq!(posts, ResultSet::new());
}

#[test]
fn parse_list_null_empty_and_valid() {
    let posts = Post::parse_list(&[json!(null), json!({}), json!({"id": 1})]).unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].debug_string(), "Post()");
    assert_eq!(posts.ids(), vec![1]);
}

#[test]
fn ids_omit_posts_without_id() {
    let posts = Post::parse_list(&[
        json!({"id": 5}),
        json!({"id": 9}),
        json!({"content": {"rendered": "no id"}}),
    ])
    .unwrap();

    assert_eq!(posts.len(), 3);
    assert_eq!(posts.ids(), vec![5, 9]);
    assert_eq!(posts[2].id(), None);
}

#[test]
fn parse_list_stops_at_malformed_timestamp() {
    let err = Post::parse_list(&[
        json!({"id": 1, "date": "2020-01-02T03:04:05"}),
        json!({"id": 2, "date": "last tuesday"}),
    ])
    .unwrap_err();

    assert!(matches!(err, Error::InvalidTimestamp { model: "Post", .. }));
    assert!(err.to_string().contains("last tuesday"));
}

#[test]
fn result_set_iterates_in_order() {
    let posts = Post::parse_list(&[json!({"id": 3}), json!({"id": 2}), json!({"id": 1})]).unwrap();

    let collected: Vec<Option<i64>> = posts.into_iter().map(|p| p.id).collect();
    assert_eq!(collected, vec![Some(3), Some(2), Some(1)]);
}
