//! Featured posts panel — static three-entry list, not filterable.

use dioxus::prelude::*;

use postdeck_core::featured_posts;

#[component]
pub fn FeaturedPosts() -> Element {
    rsx! {
        div {
            class: "sidebar-section",
            div { class: "sidebar-heading", "FEATURED" }
            div {
                class: "featured-list",
                for post in featured_posts() {
                    a {
                        class: "featured-item",
                        href: "#",
                        onclick: move |e: Event<MouseData>| e.prevent_default(),
                        h6 { class: "featured-title", "{post.title}" }
                        small { class: "featured-meta", "{post.category} | {post.date}" }
                    }
                }
            }
        }
    }
}
