//! Root application component — topbar, posts column, sidebar, status bar.

use dioxus::prelude::*;

use crate::posts::PostList;
use crate::search::{SearchField, SearchSlot};
use crate::sidebar::Sidebar;
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Consume the pre-launch catalog on first render, then run an empty
    // filter so every post starts visible and the notice starts hidden.
    use_hook(|| {
        if let Some(state) = crate::INITIAL_STATE.lock().unwrap().take() {
            *CORE.write() = Some(state);
        }
        apply_filter();
    });

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            // Topbar (brand + nav search)
            header {
                class: "topbar",
                span { class: "topbar-brand", "PostDeck" }
                div {
                    class: "topbar-search",
                    SearchField { slot: SearchSlot::Nav }
                }
            }

            // Split: post list + sidebar
            div {
                class: "content-area",
                PostList {}
                Sidebar {}
            }

            StatusBar {}
        }
    }
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let core = CORE.read();
    let total = core.as_ref().map(|s| s.posts.len()).unwrap_or(0);
    let visible = *VISIBLE_COUNT.read();
    let query_time = *QUERY_TIME_MS.read();

    let filter = FILTER.read();
    let tag_label = filter.selected_tag.clone().unwrap_or_default();
    let term = filter.search_term.clone();

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-posts", "{visible} of {total} posts" }
            if !tag_label.is_empty() {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-tag", "tag: {tag_label}" }
            }
            if !term.is_empty() {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-query", "\u{201C}{term}\u{201D} in {query_time:.1}ms" }
            }
        }
    }
}
