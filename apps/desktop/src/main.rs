//! PostDeck Desktop — Dioxus-powered blog post browser.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod debounce;
mod posts;
mod search;
mod sidebar;
mod state;

use app::App;
use state::AppState;

/// Pre-runtime storage — catalog parsed before Dioxus launches, consumed on
/// first render.
pub static INITIAL_STATE: Mutex<Option<AppState>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("postdeck=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Parse the bundled catalog (blocking) — store in Mutex, NOT in the signal
    let initial_state = AppState::load();
    *INITIAL_STATE.lock().unwrap() = Some(initial_state);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((12, 12, 14, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("PostDeck")
                            .with_inner_size(LogicalSize::new(1200.0, 820.0))
                            .with_min_inner_size(LogicalSize::new(760.0, 480.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
