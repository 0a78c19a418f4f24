use std::cmp::Reverse;

use super::data::ALL_POSTS;
use super::types::BlogPost;

pub const RELATED_LIMIT: usize = 3;

/// Every post, newest first. Posts with an unparseable date sort last.
pub fn find_all() -> Vec<&'static BlogPost> {
    let mut posts: Vec<&'static BlogPost> = ALL_POSTS.iter().collect();
    posts.sort_by_key(|p| Reverse(p.published_on()));
    posts
}

pub fn find_featured() -> Vec<&'static BlogPost> {
    ALL_POSTS.iter().filter(|p| p.featured).collect()
}

/// Non-featured posts, newest first; the grid under the featured banner.
pub fn find_recent() -> Vec<&'static BlogPost> {
    find_all().into_iter().filter(|p| !p.featured).collect()
}

pub fn find_by_slug(slug: &str) -> Option<&'static BlogPost> {
    ALL_POSTS.iter().find(|p| p.slug == slug)
}

/// Other posts sharing the category or at least one tag, in catalogue order.
pub fn find_related(post: &BlogPost, limit: usize) -> Vec<&'static BlogPost> {
    ALL_POSTS
        .iter()
        .filter(|p| p.id != post.id && p.shares_topic_with(post))
        .take(limit)
        .collect()
}
