//! Integration test: load the sample blog and drive the listing the blog
//! page shows: category tabs, search, "load more" and the sidebar lookups.

use campus_core::blog::{self, LoadMore, Post, PostFilter};

fn posts() -> Vec<Post> {
    blog::load_posts(include_str!("fixtures/blog-posts.json")).expect("sample blog should load")
}

fn ids(matched: &[&Post]) -> Vec<u32> {
    matched.iter().map(|p| p.id).collect()
}

#[test]
fn loads_every_post() {
    let posts = posts();
    assert_eq!(posts.len(), 7);
    assert_eq!(posts[0].author.title, "Senior Developer");
    assert_eq!(posts[0].display_date(), "January 15, 2024");
    assert_eq!(posts[2].read_time(), "12 min read");
    assert_eq!(blog::featured(&posts).map(|p| p.id), Some(1));
}

#[test]
fn category_tab_and_search() {
    let posts = posts();
    let tutorials = PostFilter {
        category: Some("tutorials".into()),
        ..PostFilter::default()
    };
    assert_eq!(ids(&tutorials.apply(&posts)), vec![3, 7]);

    let by_author = PostFilter {
        search: "SMITH".into(),
        ..PostFilter::default()
    };
    assert_eq!(ids(&by_author.apply(&posts)), vec![1, 7]);

    let by_tag = PostFilter {
        search: "react".into(),
        category: Some("web-dev".into()),
    };
    assert_eq!(ids(&by_tag.apply(&posts)), vec![1, 5]);
}

#[test]
fn load_more_reveals_the_rest() {
    let posts = posts();
    let all = PostFilter::default().apply(&posts);
    let mut feed = LoadMore::new(all.len());
    assert_eq!(feed.slice(&all).len(), 6);
    assert!(feed.has_more());
    assert_eq!(feed.load_more(), 6..7);
    assert_eq!(ids(&feed.slice(&all)[6..]), vec![7]);
    assert!(!feed.has_more());

    // A new filter starts a fresh feed.
    let narrowed = PostFilter {
        search: "tech".into(),
        ..PostFilter::default()
    }
    .apply(&posts);
    let feed = LoadMore::new(narrowed.len());
    assert!(!feed.has_more());
    assert_eq!(ids(feed.slice(&narrowed)), vec![2, 6]);
}

#[test]
fn sidebar_lookups() {
    let posts = posts();
    assert_eq!(ids(&blog::related_posts(&posts, 1, 3)), vec![5, 6]);
    assert_eq!(ids(&blog::related_posts(&posts, 7, 3)), vec![3]);
    assert!(blog::related_posts(&posts, 2, 3).is_empty());
    assert_eq!(ids(&blog::popular_posts(&posts, 3)), vec![1, 2, 3]);
    assert_eq!(ids(&blog::posts_by_author(&posts, "John Smith")), vec![1, 7]);
    assert!(blog::posts_by_author(&posts, "john smith").is_empty());
    assert_eq!(ids(&blog::posts_by_tag(&posts, "TECH")), vec![2, 6]);
}
