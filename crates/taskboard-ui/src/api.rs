//! HTTP access to the remote posts endpoint.

use gloo_net::http::Request;
use taskboard_core::{FetchError, Post, decode_posts};

/// Fetch the full post collection from `url`.
///
/// Any non-success status is reported as [`FetchError::Status`].
pub async fn fetch_posts(url: &str) -> Result<Vec<Post>, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    decode_posts(&text)
}
