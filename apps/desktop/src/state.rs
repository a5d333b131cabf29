//! Global application state using Dioxus signals.

use dioxus::prelude::*;

use postdeck_core::{run_filter, FilterState, Post};

use crate::debounce::Debouncer;

/// Bundled sample catalog — stands in for the rendered page's post elements.
const CATALOG_JSON: &str = include_str!("../data/posts.json");

/// Immutable post catalog — parsed once before launch.
pub struct AppState {
    pub posts: Vec<Post>,
    pub tags: Vec<String>,
}

impl AppState {
    /// Parse the bundled catalog. It ships inside the binary, so a parse
    /// failure is a build defect, not a runtime condition.
    pub fn load() -> Self {
        let posts =
            postdeck_core::load_posts(CATALOG_JSON).expect("bundled catalog is valid JSON");
        let tags = postdeck_core::tag_labels(&posts);
        tracing::info!(posts = posts.len(), tags = tags.len(), "catalog loaded");
        AppState { posts, tags }
    }
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Post catalog — set once at startup
pub static CORE: GlobalSignal<Option<AppState>> = Signal::global(|| None);

/// Nav search box text
pub static NAV_QUERY: GlobalSignal<String> = Signal::global(|| String::new());

/// Sidebar search box text
pub static SIDEBAR_QUERY: GlobalSignal<String> = Signal::global(|| String::new());

/// Current filter inputs (search term + selected tag)
pub static FILTER: GlobalSignal<FilterState> = Signal::global(FilterState::new);

/// Visibility per post, parallel to the catalog
pub static VISIBLE: GlobalSignal<Vec<bool>> = Signal::global(|| vec![]);

/// Count of posts currently shown
pub static VISIBLE_COUNT: GlobalSignal<usize> = Signal::global(|| 0);

/// True when the last filter run matched nothing
pub static NO_RESULTS: GlobalSignal<bool> = Signal::global(|| false);

/// Last filter timing in ms
pub static QUERY_TIME_MS: GlobalSignal<f64> = Signal::global(|| 0.0);

/// Whether the scroll-to-top control is shown
pub static SHOW_SCROLL_TOP: GlobalSignal<bool> = Signal::global(|| false);

/// Shared debounce slot for both search boxes and the search button
pub static DEBOUNCE: GlobalSignal<Debouncer> = Signal::global(Debouncer::new);

// ---------------------------------------------------------------------------
// State transitions
// ---------------------------------------------------------------------------

/// Run the filter over the catalog and publish the outcome.
pub fn apply_filter() {
    let core = CORE.read();
    let state = match core.as_ref() {
        Some(s) => s,
        None => return,
    };

    let filter = FILTER.read().clone();
    let response = run_filter(&state.posts, &filter);

    *QUERY_TIME_MS.write() = response.query_time;
    *VISIBLE_COUNT.write() = response.visible_count;
    *NO_RESULTS.write() = response.no_results;
    *VISIBLE.write() = response.visible;
}

/// Handle a tag click: clear both search boxes, toggle the tag, re-filter.
pub fn toggle_tag(label: &str) {
    NAV_QUERY.write().clear();
    SIDEBAR_QUERY.write().clear();
    FILTER.write().toggle_tag(label);
    apply_filter();
}

/// Fire a debounced search. The nav box wins when both boxes have text.
pub fn run_search_query() {
    let term = {
        let nav = NAV_QUERY.read();
        if nav.is_empty() {
            SIDEBAR_QUERY.read().clone()
        } else {
            nav.clone()
        }
    };
    FILTER.write().set_search(&term);
    apply_filter();
}
