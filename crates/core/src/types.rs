//! Core types shared across PostDeck: raw catalog records, indexed posts with
//! precomputed lowercase fields and search bitmasks, and catalog loading.

use std::collections::HashSet;

use serde::Deserialize;

use crate::filter::char_bitmask;

// ---------------------------------------------------------------------------
// Catalog records
// ---------------------------------------------------------------------------

/// A raw catalog entry as it appears in the bundled JSON. Field shapes mirror
/// the rendered post markup: every text field is optional, and `categories`
/// is a comma-separated label string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub meta: Option<String>,
    /// Comma-separated labels, e.g. "AI,Tech". Absent means no categories.
    #[serde(default)]
    pub categories: Option<String>,
}

/// An indexed post: display fields plus precomputed lowercase text and a
/// character bitmask so the filter engine can reject non-matches cheaply.
///
/// Missing record fields become empty strings; a missing `categories`
/// attribute becomes an empty list. Category order is preserved for display
/// but is irrelevant to matching.
#[derive(Debug, Clone)]
pub struct Post {
    pub title: String,
    pub description: String,
    pub meta: String,
    pub categories: Vec<String>,

    pub title_lower: String,
    pub description_lower: String,
    pub meta_lower: String,
    pub categories_lower: Vec<String>,
    /// Union bitmask over every searchable field.
    pub search_mask: u64,
}

impl Post {
    /// Build an indexed post from a raw record.
    pub fn from_record(record: PostRecord) -> Self {
        let title = record.title.unwrap_or_default();
        let description = record.description.unwrap_or_default();
        let meta = record.meta.unwrap_or_default();
        let categories = record.categories.as_deref().map(parse_categories).unwrap_or_default();

        let title_lower = title.to_lowercase();
        let description_lower = description.to_lowercase();
        let meta_lower = meta.to_lowercase();
        let categories_lower: Vec<String> =
            categories.iter().map(|c| c.to_lowercase()).collect();

        let mut search_mask = char_bitmask(&title_lower)
            | char_bitmask(&description_lower)
            | char_bitmask(&meta_lower);
        for cat in &categories_lower {
            search_mask |= char_bitmask(cat);
        }

        Post {
            title,
            description,
            meta,
            categories,
            title_lower,
            description_lower,
            meta_lower,
            categories_lower,
            search_mask,
        }
    }
}

/// Split a comma-separated category attribute into labels. Whitespace around
/// each label is trimmed and empty segments are dropped.
fn parse_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Catalog loading
// ---------------------------------------------------------------------------

/// Parse a JSON catalog into indexed posts.
pub fn load_posts(json: &str) -> Result<Vec<Post>, serde_json::Error> {
    let records: Vec<PostRecord> = serde_json::from_str(json)?;
    let posts: Vec<Post> = records.into_iter().map(Post::from_record).collect();
    tracing::debug!(posts = posts.len(), "catalog parsed");
    Ok(posts)
}

/// Unique category labels across the catalog, in first-seen display casing,
/// sorted case-insensitively. This is the tag cloud content.
pub fn tag_labels(posts: &[Post]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut labels = Vec::new();
    for post in posts {
        for (label, lower) in post.categories.iter().zip(&post.categories_lower) {
            if seen.insert(lower.clone()) {
                labels.push(label.clone());
            }
        }
    }
    labels.sort_by_key(|l| l.to_lowercase());
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_trimmed_and_empty_segments_dropped() {
        let post = Post::from_record(PostRecord {
            categories: Some(" Databases , Web Development ,".into()),
            ..Default::default()
        });
        assert_eq!(post.categories, vec!["Databases", "Web Development"]);
        assert_eq!(post.categories_lower, vec!["databases", "web development"]);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let post = Post::from_record(PostRecord::default());
        assert_eq!(post.title, "");
        assert_eq!(post.description, "");
        assert_eq!(post.meta, "");
        assert!(post.categories.is_empty());
    }

    #[test]
    fn tag_labels_are_unique_and_sorted() {
        let posts = vec![
            Post::from_record(PostRecord {
                categories: Some("Tech,AI".into()),
                ..Default::default()
            }),
            Post::from_record(PostRecord {
                categories: Some("tech,Databases".into()),
                ..Default::default()
            }),
        ];
        // "tech" dedupes against "Tech"; first-seen casing wins.
        assert_eq!(tag_labels(&posts), vec!["AI", "Databases", "Tech"]);
    }

    #[test]
    fn load_posts_parses_minimal_records() {
        let posts = load_posts(r#"[{"title": "Hello"}, {}]"#).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Hello");
        assert!(posts[1].categories.is_empty());
    }

    #[test]
    fn load_posts_rejects_malformed_json() {
        assert!(load_posts("{not json").is_err());
    }
}
