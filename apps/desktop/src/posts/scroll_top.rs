//! Scroll-to-top control, shown once the list is scrolled past a threshold.

use std::rc::Rc;

use dioxus::html::geometry::PixelsVector2D;
use dioxus::html::{MountedData, ScrollBehavior};
use dioxus::prelude::*;

use crate::state::SHOW_SCROLL_TOP;

/// Scroll offset (px) past which the control appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 200.0;

#[component]
pub fn ScrollTopButton(container: Signal<Option<Rc<MountedData>>>) -> Element {
    if !*SHOW_SCROLL_TOP.read() {
        return rsx! {
            div { class: "scroll-top-slot" }
        };
    }

    rsx! {
        button {
            class: "scroll-top-btn",
            title: "Back to top",
            onclick: move |_| {
                spawn(async move {
                    let handle = container.read().clone();
                    if let Some(el) = handle {
                        let _ = el.scroll(PixelsVector2D::zero(), ScrollBehavior::Smooth).await;
                        *SHOW_SCROLL_TOP.write() = false;
                    }
                });
            },
            "\u{2191}"
        }
    }
}
