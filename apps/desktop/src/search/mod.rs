//! Search components — two boxes (topbar and sidebar) sharing one debounce
//! slot, so a burst of typing anywhere coalesces into a single filter run.

mod search_input;

pub use search_input::SearchField;

/// Which search box a field instance renders.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SearchSlot {
    Nav,
    Sidebar,
}
