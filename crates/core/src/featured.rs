//! Featured posts panel content. Static in this version; a later revision
//! could pull these from a feed without changing the panel contract.

use serde::Serialize;

/// A featured panel entry. The date is a display string, never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeaturedPost {
    pub title: &'static str,
    pub category: &'static str,
    pub date: &'static str,
}

const FEATURED: [FeaturedPost; 3] = [
    FeaturedPost {
        title: "The Future of Quantum Computing",
        category: "AI",
        date: "Aug 20, 2025",
    },
    FeaturedPost {
        title: "Building RESTful APIs with Node.js",
        category: "Web Development",
        date: "Aug 18, 2025",
    },
    FeaturedPost {
        title: "Understanding Blockchain Technology",
        category: "Cybersecurity",
        date: "Aug 10, 2025",
    },
];

/// The featured panel entries, in display order. Infallible and
/// deterministic: static data cannot fail to load.
pub fn featured_posts() -> &'static [FeaturedPost] {
    &FEATURED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_three_entries_in_order() {
        let posts = featured_posts();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].title, "The Future of Quantum Computing");
        assert_eq!(posts[1].title, "Building RESTful APIs with Node.js");
        assert_eq!(posts[2].title, "Understanding Blockchain Technology");
        assert_eq!(posts[0].category, "AI");
        assert_eq!(posts[2].date, "Aug 10, 2025");
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(featured_posts(), featured_posts());
    }
}
