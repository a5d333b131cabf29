//! PostDeck core — post catalog, filter engine, and featured posts.
//!
//! Everything here is pure data and functions with no UI dependencies, so the
//! filter logic is testable without a rendering surface. The desktop app owns
//! signals and rendering; this crate owns the decisions.

pub mod featured;
pub mod filter;
pub mod types;

pub use featured::{featured_posts, FeaturedPost};
pub use filter::{run_filter, FilterResponse, FilterState};
pub use types::{load_posts, tag_labels, Post, PostRecord};
