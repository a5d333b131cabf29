//! Search box component with debounced filtering.

use dioxus::prelude::*;

use crate::debounce::SEARCH_DEBOUNCE_MS;
use crate::state::*;

use super::SearchSlot;

#[component]
pub fn SearchField(slot: SearchSlot) -> Element {
    let value = match slot {
        SearchSlot::Nav => NAV_QUERY.read().clone(),
        SearchSlot::Sidebar => SIDEBAR_QUERY.read().clone(),
    };
    let placeholder = match slot {
        SearchSlot::Nav => "Search articles...",
        SearchSlot::Sidebar => "Filter this page...",
    };

    rsx! {
        div {
            class: "search-field",

            input {
                class: "search-input",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |e: Event<FormData>| {
                    let text = e.value();
                    match slot {
                        SearchSlot::Nav => *NAV_QUERY.write() = text,
                        SearchSlot::Sidebar => *SIDEBAR_QUERY.write() = text,
                    }
                    arm_search();
                },
            }

            // The button rides the same debounce as typing.
            if slot == SearchSlot::Nav {
                button {
                    class: "search-button",
                    onclick: move |_| arm_search(),
                    "Search"
                }
            }
        }
    }
}

/// Restart the debounce timer: increment the shared generation and spawn a
/// delayed filter run that fires only if no newer event replaced it.
fn arm_search() {
    let generation = DEBOUNCE.write().arm();

    spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(SEARCH_DEBOUNCE_MS)).await;
        if DEBOUNCE.read().is_current(generation) {
            run_search_query();
        }
    });
}
