//! Post list — scrollable column of posts with the no-results notice and the
//! scroll-to-top control.

mod scroll_top;

use std::rc::Rc;

use dioxus::html::MountedData;
use dioxus::prelude::*;

use crate::state::*;
use scroll_top::{ScrollTopButton, SCROLL_TOP_THRESHOLD};

#[component]
pub fn PostList() -> Element {
    // Mounted handle for the scroll container; the watcher and the
    // scroll-to-top button both act on it.
    let mut container: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let core = CORE.read();
    let visible = VISIBLE.read();
    let no_results = *NO_RESULTS.read();

    let posts = match core.as_ref() {
        Some(state) => &state.posts,
        None => {
            return rsx! {
                div { class: "posts-panel posts-empty", span { "Loading catalog..." } }
            };
        }
    };

    rsx! {
        div {
            class: "posts-panel",
            onmounted: move |e| container.set(Some(e.data())),
            onscroll: move |_| {
                spawn(async move {
                    let handle = container.read().clone();
                    if let Some(el) = handle {
                        if let Ok(offset) = el.get_scroll_offset().await {
                            *SHOW_SCROLL_TOP.write() = offset.y > SCROLL_TOP_THRESHOLD;
                        }
                    }
                });
            },

            for (i, post) in posts.iter().enumerate() {
                article {
                    class: if visible.get(i).copied().unwrap_or(true) { "blog-post" } else { "blog-post hidden" },
                    h4 { class: "blog-title", "{post.title}" }
                    div { class: "blog-meta", "{post.meta}" }
                    p { class: "blog-description", "{post.description}" }
                    div {
                        class: "blog-categories",
                        for cat in &post.categories {
                            span { class: "category-chip", "{cat}" }
                        }
                    }
                }
            }

            // Singleton notice: shown iff zero posts are visible.
            if no_results {
                div { class: "no-results", "No articles found. Try a different search or tag." }
            }
        }

        ScrollTopButton { container }
    }
}
