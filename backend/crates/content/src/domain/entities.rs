//! Post Records
//!
//! Strict projection of a parsed document. Every field the rest of the system
//! reads has an explicit default here.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::domain::frontmatter::ParsedDocument;
use crate::domain::value_objects::Locale;

pub const DEFAULT_AUTHOR: &str = "Editorial Team";
pub const DEFAULT_CATEGORY: &str = "general";

/// Raw file as read from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// File name without extension; the fallback slug
    pub stem: String,
    pub raw: String,
}

/// Post metadata without the body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub author: String,
    /// As written in the file; may be unparseable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub locale: String,
}

impl PostSummary {
    /// Project the loose metadata map, filling defaults
    pub fn from_document(doc: &ParsedDocument, stem: &str, locale: &Locale) -> Self {
        let slug = doc.get("slug").unwrap_or(stem).to_string();
        let title = doc.get("title").unwrap_or(&slug).to_string();

        Self {
            title,
            description: doc.get("description").unwrap_or_default().to_string(),
            author: doc.get("author").unwrap_or(DEFAULT_AUTHOR).to_string(),
            publish_date: doc.get("publishDate").map(str::to_string),
            category: doc.get("category").unwrap_or(DEFAULT_CATEGORY).to_string(),
            featured_image: doc.get("featuredImage").map(str::to_string),
            locale: doc.get("locale").unwrap_or(locale.as_str()).to_string(),
            slug,
        }
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.publish_date.as_deref().and_then(parse_publish_date)
    }

    /// Sort key in Unix ms; `None` (missing or unparseable date) orders
    /// below every real date, pre-1970 ones included
    pub fn sort_key_ms(&self) -> Option<i64> {
        self.published_at().map(|date| date.timestamp_millis())
    }
}

/// Full post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(flatten)]
    pub summary: PostSummary,
    /// Markdown body, verbatim
    pub content: String,
}

impl Post {
    pub fn from_document(doc: ParsedDocument, stem: &str, locale: &Locale) -> Self {
        let summary = PostSummary::from_document(&doc, stem, locale);
        Self {
            summary,
            content: doc.body,
        }
    }
}

/// Accepts `YYYY-MM-DD`, RFC 3339, and `YYYY-MM-DDTHH:MM:SS` (read as UTC)
pub fn parse_publish_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::frontmatter::parse;

    fn en() -> Locale {
        Locale::parse("en").unwrap()
    }

    #[test]
    fn test_projection_round_trip() {
        let doc = parse("---\nslug: \"my-post\"\ntitle: \"Hello\"\ncategory: guides\n---\nHi there");
        let post = Post::from_document(doc, "2024-file-name", &en());

        assert_eq!(post.summary.slug, "my-post");
        assert_eq!(post.summary.title, "Hello");
        assert_eq!(post.summary.category, "guides");
        assert_eq!(post.content, "Hi there");
    }

    #[test]
    fn test_defaults() {
        let doc = parse("no frontmatter at all");
        let summary = PostSummary::from_document(&doc, "fallback", &en());

        assert_eq!(summary.slug, "fallback");
        assert_eq!(summary.title, "fallback");
        assert_eq!(summary.description, "");
        assert_eq!(summary.author, DEFAULT_AUTHOR);
        assert_eq!(summary.category, DEFAULT_CATEGORY);
        assert_eq!(summary.publish_date, None);
        assert_eq!(summary.featured_image, None);
        assert_eq!(summary.locale, "en");
        assert_eq!(summary.sort_key_ms(), None);
    }

    #[test]
    fn test_title_defaults_to_declared_slug() {
        let doc = parse("---\nslug: declared\n---\n");
        let summary = PostSummary::from_document(&doc, "stem", &en());
        assert_eq!(summary.title, "declared");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let doc = parse("---\ntitle: T\ntags: a, b\n---\n");
        let summary = PostSummary::from_document(&doc, "stem", &en());
        assert_eq!(summary.title, "T");
    }

    #[test]
    fn test_date_formats() {
        let midnight = parse_publish_date("2024-06-01").unwrap();
        assert_eq!(midnight.to_rfc3339(), "2024-06-01T00:00:00+00:00");

        let offset = parse_publish_date("2024-06-01T12:00:00+02:00").unwrap();
        assert_eq!(offset.to_rfc3339(), "2024-06-01T10:00:00+00:00");

        let naive = parse_publish_date("2024-06-01T08:30:00").unwrap();
        assert_eq!(naive.to_rfc3339(), "2024-06-01T08:30:00+00:00");

        assert!(parse_publish_date("June 1st").is_none());
        assert!(parse_publish_date("2024-13-01").is_none());
        assert!(parse_publish_date("").is_none());
    }

    #[test]
    fn test_pre_epoch_date_outranks_missing_date() {
        let doc = parse("---\npublishDate: 1969-12-31\n---\n");
        let dated = PostSummary::from_document(&doc, "old", &en());
        let undated = PostSummary::from_document(&parse(""), "none", &en());

        assert_eq!(dated.sort_key_ms(), Some(-86_400_000));
        assert!(dated.sort_key_ms() > undated.sort_key_ms());
    }

    #[test]
    fn test_unparseable_date_kept_for_display() {
        let doc = parse("---\npublishDate: someday\n---\n");
        let summary = PostSummary::from_document(&doc, "stem", &en());
        assert_eq!(summary.publish_date.as_deref(), Some("someday"));
        assert_eq!(summary.sort_key_ms(), None);
    }

    #[test]
    fn test_serialization_is_camel_case() {
        let doc = parse("---\ntitle: T\npublishDate: 2024-01-01\nfeaturedImage: /img/a.png\n---\nBody");
        let post = Post::from_document(doc, "t", &en());
        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(json["publishDate"], "2024-01-01");
        assert_eq!(json["featuredImage"], "/img/a.png");
        assert_eq!(json["content"], "Body");
        assert_eq!(json["slug"], "t");
        assert!(json.get("summary").is_none());
    }
}
