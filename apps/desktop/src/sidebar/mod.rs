//! Sidebar — search box, tag cloud, and featured posts.

mod featured_panel;
mod tag_cloud;

use dioxus::prelude::*;

use crate::search::{SearchField, SearchSlot};
use featured_panel::FeaturedPosts;
use tag_cloud::TagCloud;

#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside {
            class: "sidebar-panel",

            div {
                class: "sidebar-section",
                div { class: "sidebar-heading", "SEARCH" }
                SearchField { slot: SearchSlot::Sidebar }
            }

            TagCloud {}
            FeaturedPosts {}
        }
    }
}
