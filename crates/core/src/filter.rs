//! Post filtering: case-insensitive substring search over post text plus
//! exact-match tag selection, with a 64-bit character bitmask pre-filter for
//! O(1) rejection of posts that cannot contain the search term.
//!
//! Used by the desktop app on every debounced search and tag toggle.

use crate::types::Post;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

// ---------------------------------------------------------------------------
// Bitmask pre-filter
// ---------------------------------------------------------------------------

/// Compute a 64-bit character bitmask for O(1) rejection of non-matching
/// candidates. a-z → bits 0-25, 0-9 → bits 26-35, specials → bits 36-39.
pub fn char_bitmask(s: &str) -> u64 {
    let mut mask: u64 = 0;
    for &b in s.as_bytes() {
        let idx = match b {
            b'a'..=b'z' => (b - b'a') as u32,
            b'A'..=b'Z' => (b.to_ascii_lowercase() - b'a') as u32,
            b'0'..=b'9' => (b - b'0') as u32 + 26,
            b'_' => 36,
            b'-' => 37,
            b'.' => 38,
            b'/' => 39,
            _ => continue,
        };
        mask |= 1u64 << idx;
    }
    mask
}

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// The two inputs that drive visibility: a free-text search term and an
/// optional selected tag. Modeling the tag as an `Option` keeps "at most one
/// active tag" true by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub selected_tag: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a tag click. Clicking the already-active tag clears both the tag
    /// and the search term (show everything); clicking any other tag selects
    /// it. The search term is reset either way.
    pub fn toggle_tag(&mut self, label: &str) {
        let was_active = self.is_tag_active(label);
        self.search_term.clear();
        self.selected_tag = if was_active { None } else { Some(label.to_string()) };
    }

    /// Apply a text search: the term replaces any selected tag.
    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.selected_tag = None;
    }

    /// Whether `label` is the selected tag (case-insensitive).
    pub fn is_tag_active(&self, label: &str) -> bool {
        self.selected_tag
            .as_deref()
            .is_some_and(|t| t.to_lowercase() == label.to_lowercase())
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Outcome of one filter run over the whole catalog.
#[derive(Debug, Clone, Serialize)]
pub struct FilterResponse {
    /// Visibility per post, same order as the input slice.
    pub visible: Vec<bool>,
    #[serde(rename = "visibleCount")]
    pub visible_count: usize,
    /// True iff nothing is visible; drives the "no results" notice.
    #[serde(rename = "noResults")]
    pub no_results: bool,
    #[serde(rename = "queryTime")]
    pub query_time: f64,
    #[serde(rename = "totalPosts")]
    pub total_posts: usize,
}

/// Decide visibility for every post.
///
/// A post is shown iff the (trimmed, lowercased) search term occurs as a
/// substring of its title, description, meta, or any category, AND the
/// selected tag is exactly equal to one of its lowercased categories. An
/// empty term and an unset tag each match vacuously.
pub fn run_filter(posts: &[Post], state: &FilterState) -> FilterResponse {
    let start = Instant::now();

    let term = state.search_term.trim().to_lowercase();
    let term_mask = char_bitmask(&term);
    let tag = state.selected_tag.as_deref().map(str::to_lowercase);

    let visible: Vec<bool> = posts
        .par_iter()
        .map(|post| matches_search(post, &term, term_mask) && matches_tag(post, tag.as_deref()))
        .collect();

    let visible_count = visible.iter().filter(|v| **v).count();
    let query_time = start.elapsed().as_secs_f64() * 1000.0;

    tracing::debug!(
        term = %term,
        tag = tag.as_deref().unwrap_or(""),
        visible = visible_count,
        total = posts.len(),
        "filter run"
    );

    FilterResponse {
        no_results: visible_count == 0,
        visible_count,
        total_posts: posts.len(),
        query_time,
        visible,
    }
}

fn matches_search(post: &Post, term: &str, term_mask: u64) -> bool {
    if term.is_empty() {
        return true;
    }
    // Every character of the term must occur somewhere in the post for any
    // single field to contain it as a substring.
    if (term_mask & post.search_mask) != term_mask {
        return false;
    }
    post.title_lower.contains(term)
        || post.description_lower.contains(term)
        || post.meta_lower.contains(term)
        || post.categories_lower.iter().any(|c| c.contains(term))
}

fn matches_tag(post: &Post, tag: Option<&str>) -> bool {
    match tag {
        None => true,
        Some(t) => post.categories_lower.iter().any(|c| c == t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PostRecord;

    fn post(title: &str, description: &str, meta: &str, categories: Option<&str>) -> Post {
        Post::from_record(PostRecord {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            meta: Some(meta.to_string()),
            categories: categories.map(str::to_string),
        })
    }

    fn sample_catalog() -> Vec<Post> {
        vec![
            post(
                "The Future of Quantum Computing",
                "Error-corrected qubits and what they mean for cryptography.",
                "Aug 20, 2025",
                Some("AI,Tech"),
            ),
            post(
                "Building RESTful APIs",
                "Designing resource-oriented endpoints.",
                "Aug 18, 2025",
                Some("Web Development"),
            ),
            post("Notes From a Home Lab", "Rack, power, and regret.", "Jul 2, 2025", None),
        ]
    }

    #[test]
    fn empty_filter_shows_every_post() {
        let posts = sample_catalog();
        let response = run_filter(&posts, &FilterState::new());
        assert_eq!(response.visible, vec![true, true, true]);
        assert_eq!(response.visible_count, 3);
        assert!(!response.no_results);
    }

    #[test]
    fn unmatched_term_hides_everything() {
        let posts = sample_catalog();
        let state = FilterState { search_term: "zzzzz".into(), selected_tag: None };
        let response = run_filter(&posts, &state);
        assert_eq!(response.visible_count, 0);
        assert!(response.visible.iter().all(|v| !v));
        assert!(response.no_results);
    }

    #[test]
    fn term_matches_any_text_field_or_category() {
        let posts = sample_catalog();
        for term in ["quantum", "qubits", "aug 20", "tech"] {
            let state = FilterState { search_term: term.into(), selected_tag: None };
            let response = run_filter(&posts, &state);
            assert!(response.visible[0], "term {term:?} should match the quantum post");
        }
    }

    #[test]
    fn search_term_is_trimmed_and_case_insensitive() {
        let posts = sample_catalog();
        let state = FilterState { search_term: "  QuAntum  ".into(), selected_tag: None };
        let response = run_filter(&posts, &state);
        assert_eq!(response.visible, vec![true, false, false]);
    }

    #[test]
    fn tag_match_is_exact_not_substring() {
        let posts = sample_catalog();
        // "A" is a substring of category "AI" but must not match it.
        let state = FilterState { search_term: String::new(), selected_tag: Some("A".into()) };
        let response = run_filter(&posts, &state);
        assert_eq!(response.visible_count, 0);

        let state = FilterState { search_term: String::new(), selected_tag: Some("AI".into()) };
        let response = run_filter(&posts, &state);
        assert_eq!(response.visible, vec![true, false, false]);
    }

    #[test]
    fn tag_comparison_is_case_insensitive() {
        let posts = sample_catalog();
        let state = FilterState { search_term: String::new(), selected_tag: Some("TECH".into()) };
        let response = run_filter(&posts, &state);
        assert_eq!(response.visible, vec![true, false, false]);
    }

    #[test]
    fn post_without_categories_matches_only_unset_tag() {
        let posts = sample_catalog();
        assert!(run_filter(&posts, &FilterState::new()).visible[2]);
        let state = FilterState { search_term: String::new(), selected_tag: Some("Tech".into()) };
        assert!(!run_filter(&posts, &state).visible[2]);
    }

    #[test]
    fn search_and_tag_combine_with_and() {
        let posts = sample_catalog();
        let state = FilterState { search_term: "quantum".into(), selected_tag: Some("tech".into()) };
        assert!(run_filter(&posts, &state).visible[0]);

        let state = FilterState { search_term: "quantum".into(), selected_tag: Some("web".into()) };
        assert!(!run_filter(&posts, &state).visible[0]);
    }

    #[test]
    fn blank_record_is_visible_only_unfiltered() {
        let posts = vec![Post::from_record(PostRecord::default())];
        assert!(run_filter(&posts, &FilterState::new()).visible[0]);

        let state = FilterState { search_term: "a".into(), selected_tag: None };
        assert!(!run_filter(&posts, &state).visible[0]);
    }

    #[test]
    fn toggle_tag_round_trip() {
        let mut state = FilterState::new();
        state.search_term = "quantum".into();

        state.toggle_tag("AI");
        assert_eq!(state.selected_tag.as_deref(), Some("AI"));
        assert!(state.search_term.is_empty());

        // Second click on the same tag clears everything.
        state.toggle_tag("AI");
        assert_eq!(state.selected_tag, None);
        assert!(state.search_term.is_empty());
    }

    #[test]
    fn toggle_tag_switches_between_tags() {
        let mut state = FilterState::new();
        state.toggle_tag("AI");
        state.toggle_tag("Tech");
        assert_eq!(state.selected_tag.as_deref(), Some("Tech"));
        assert!(state.is_tag_active("tech"));
        assert!(!state.is_tag_active("AI"));
    }

    #[test]
    fn set_search_clears_selected_tag() {
        let mut state = FilterState::new();
        state.toggle_tag("AI");
        state.set_search("quantum");
        assert_eq!(state.selected_tag, None);
        assert_eq!(state.search_term, "quantum");
    }

    #[test]
    fn bitmask_prefilter_never_rejects_a_real_match() {
        let posts = sample_catalog();
        // A term whose characters span title and meta still matches nothing
        // as a substring, while a real substring always survives the mask.
        let state = FilterState { search_term: "future".into(), selected_tag: None };
        assert!(run_filter(&posts, &state).visible[0]);
        let state = FilterState { search_term: "future2025".into(), selected_tag: None };
        assert!(!run_filter(&posts, &state).visible[0]);
    }
}
