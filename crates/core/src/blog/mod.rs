//! Blog listing: post filtering, incremental loading and related-post
//! lookups.

pub mod feed;
pub mod post;

use thiserror::Error;

pub use feed::{LoadMore, POSTS_PER_LOAD, PostFilter};
pub use post::{Author, Post};

#[derive(Debug, Error)]
pub enum BlogError {
    #[error("invalid blog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate post id {0}")]
    DuplicateId(u32),
}

/// Parse a JSON array of posts. Ids must be unique.
pub fn load_posts(data: &str) -> Result<Vec<Post>, BlogError> {
    let posts: Vec<Post> = serde_json::from_str(data)?;
    let mut seen = std::collections::HashSet::with_capacity(posts.len());
    for post in &posts {
        if !seen.insert(post.id) {
            return Err(BlogError::DuplicateId(post.id));
        }
    }
    tracing::debug!(posts = posts.len(), "blog loaded");
    Ok(posts)
}

/// Display name for a category slug. Unknown slugs are shown as-is.
pub fn category_label(slug: &str) -> &str {
    match slug {
        "web-dev" => "Web Development",
        "ai-ml" => "AI & ML",
        "career" => "Career Tips",
        "tutorials" => "Tutorials",
        "industry" => "Industry News",
        other => other,
    }
}

/// The first post marked as featured.
pub fn featured(posts: &[Post]) -> Option<&Post> {
    posts.iter().find(|p| p.featured)
}

/// Up to `limit` other posts in the same category or sharing a tag with
/// post `id`, in list order. Unknown ids have no related posts.
pub fn related_posts(posts: &[Post], id: u32, limit: usize) -> Vec<&Post> {
    let Some(current) = posts.iter().find(|p| p.id == id) else {
        return Vec::new();
    };
    posts
        .iter()
        .filter(|p| p.id != id)
        .filter(|p| p.category == current.category || p.shares_tag_with(current))
        .take(limit)
        .collect()
}

/// Newest `limit` posts. Posts published the same day keep list order.
pub fn popular_posts(posts: &[Post], limit: usize) -> Vec<&Post> {
    let mut out: Vec<&Post> = posts.iter().collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out.truncate(limit);
    out
}

/// Posts whose author name is exactly `name`.
pub fn posts_by_author<'a>(posts: &'a [Post], name: &str) -> Vec<&'a Post> {
    posts.iter().filter(|p| p.author.name == name).collect()
}

/// Posts with a tag containing `tag`, ignoring case.
pub fn posts_by_tag<'a>(posts: &'a [Post], tag: &str) -> Vec<&'a Post> {
    let needle = tag.to_lowercase();
    posts
        .iter()
        .filter(|p| p.tags.iter().any(|t| t.to_lowercase().contains(&needle)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_ids() {
        let data = r#"[{ "id": 4, "title": "A" }, { "id": 4, "title": "B" }]"#;
        assert!(matches!(load_posts(data), Err(BlogError::DuplicateId(4))));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(load_posts("{"), Err(BlogError::Json(_))));
    }

    #[test]
    fn labels_known_categories() {
        assert_eq!(category_label("career"), "Career Tips");
        assert_eq!(category_label("gardening"), "gardening");
    }

    #[test]
    fn unknown_post_has_no_relations() {
        let posts = load_posts(r#"[{ "id": 1, "category": "career" }]"#).unwrap();
        assert!(related_posts(&posts, 9, 3).is_empty());
        assert!(related_posts(&posts, 1, 3).is_empty());
    }

    #[test]
    fn popular_with_zero_limit_is_empty() {
        let posts = load_posts(r#"[{ "id": 1 }, { "id": 2 }]"#).unwrap();
        assert!(popular_posts(&posts, 0).is_empty());
        assert_eq!(popular_posts(&posts, 5).len(), 2);
    }
}
