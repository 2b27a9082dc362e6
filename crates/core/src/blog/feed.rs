use serde::{Deserialize, Serialize};

use super::post::Post;

/// Posts revealed by each "load more".
pub const POSTS_PER_LOAD: usize = 6;

/// Active blog filters. `None` / empty fields do not filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostFilter {
    pub search: String,
    pub category: Option<String>,
}

impl PostFilter {
    /// Matching posts in publication-list order.
    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        let needle = self.search.trim().to_lowercase();
        let out: Vec<&Post> = posts
            .iter()
            .filter(|p| self.category.as_ref().is_none_or(|cat| &p.category == cat))
            .filter(|p| needle.is_empty() || p.matches(&needle))
            .collect();
        tracing::trace!(matched = out.len(), total = posts.len(), "blog filtered");
        out
    }
}

/// Incrementally revealed post list. Changing the filter starts a new feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMore {
    loaded: usize,
    per_load: usize,
    total: usize,
}

impl LoadMore {
    pub fn new(total: usize) -> Self {
        Self::with_batch_size(total, POSTS_PER_LOAD)
    }

    pub fn with_batch_size(total: usize, per_load: usize) -> Self {
        let per_load = per_load.max(1);
        Self {
            loaded: per_load,
            per_load,
            total,
        }
    }

    /// Number of posts currently on screen.
    pub fn visible(&self) -> usize {
        self.loaded.min(self.total)
    }

    /// Whether the "load more" button should be shown.
    pub fn has_more(&self) -> bool {
        self.loaded < self.total
    }

    /// Reveal the next batch. Returns the index range of the new posts, which
    /// is empty once everything is shown.
    pub fn load_more(&mut self) -> std::ops::Range<usize> {
        let start = self.visible();
        if self.has_more() {
            self.loaded = self.loaded.saturating_add(self.per_load);
        }
        start..self.visible()
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible().min(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u32, category: &str, title: &str) -> Post {
        Post {
            id,
            title: title.into(),
            category: category.into(),
            ..Post::default()
        }
    }

    fn ids(posts: &[&Post]) -> Vec<u32> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn category_and_search_combine() {
        let posts = vec![
            post(1, "web-dev", "Modern React"),
            post(2, "career", "Skills for React developers"),
            post(3, "web-dev", "CSS Grid"),
        ];
        assert_eq!(ids(&PostFilter::default().apply(&posts)), vec![1, 2, 3]);
        let filter = PostFilter {
            search: " REACT ".into(),
            category: Some("web-dev".into()),
        };
        assert_eq!(ids(&filter.apply(&posts)), vec![1]);
    }

    #[test]
    fn load_more_reveals_one_batch_at_a_time() {
        let mut feed = LoadMore::new(14);
        assert_eq!(feed.visible(), 6);
        assert!(feed.has_more());
        assert_eq!(feed.load_more(), 6..12);
        assert_eq!(feed.load_more(), 12..14);
        assert!(!feed.has_more());
        assert_eq!(feed.load_more(), 14..14);
    }

    #[test]
    fn short_feed_has_nothing_more() {
        let items = [1, 2, 3];
        let feed = LoadMore::new(items.len());
        assert!(!feed.has_more());
        assert_eq!(feed.slice(&items), &[1, 2, 3]);
    }

    #[test]
    fn filter_deserializes_from_page_state() {
        let filter: PostFilter =
            serde_json::from_str(r#"{ "category": "tutorials" }"#).unwrap();
        assert_eq!(filter.category.as_deref(), Some("tutorials"));
        assert!(filter.search.is_empty());
    }
}
