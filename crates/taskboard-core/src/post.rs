//! Posts from the remote demo API and the search filter over them.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// A single post as returned by the remote API.
///
/// Unknown fields such as `userId` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Post identifier.
    pub id: u64,

    /// Post title.
    pub title: String,

    /// Post body text.
    pub body: String,
}

impl Post {
    /// Create a new post.
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Check whether this post matches an already lowercased query.
    pub fn matches_lowercase(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query) || self.body.to_lowercase().contains(query)
    }

    /// Check whether this post contains `query` in its title or body, ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }
}

/// Decode a JSON array of posts.
pub fn decode_posts(json: &str) -> Result<Vec<Post>, FetchError> {
    Ok(serde_json::from_str(json)?)
}

/// Keep the posts whose title or body contains `query`, ignoring case.
///
/// The empty query keeps every post. Order is preserved.
pub fn filter_posts(posts: &[Post], query: &str) -> Vec<Post> {
    let query = query.to_lowercase();
    posts
        .iter()
        .filter(|post| post.matches_lowercase(&query))
        .cloned()
        .collect()
}
