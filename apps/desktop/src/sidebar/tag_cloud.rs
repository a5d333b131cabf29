//! Tag cloud — exact-match filter chips. At most one tag is active; the
//! active marker derives from the filter state, so the invariant cannot be
//! broken by the view.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn TagCloud() -> Element {
    let core = CORE.read();
    let tags = core.as_ref().map(|s| s.tags.clone()).unwrap_or_default();
    let filter = FILTER.read();

    rsx! {
        div {
            class: "sidebar-section",
            div { class: "sidebar-heading", "TAGS" }
            div {
                class: "tag-list",
                for tag in tags {
                    a {
                        class: if filter.is_tag_active(&tag) { "tag-link active-tag" } else { "tag-link" },
                        href: "#",
                        onclick: {
                            let label = tag.clone();
                            move |e: Event<MouseData>| {
                                e.prevent_default();
                                toggle_tag(&label);
                            }
                        },
                        "{tag}"
                    }
                }
            }
        }
    }
}
