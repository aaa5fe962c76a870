// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::ApiError;

/// Path of the comments collection on the server.
pub const COMMENTS_PATH: &str = "/api/comments";

/// Where the comments API lives.
///
/// `reqwest` running on top of `fetch` only accepts absolute URLs, so the
/// widget needs to know its origin even when the API is served from the same
/// host as the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();

        while base_url.ends_with('/') {
            base_url.pop();
        }

        ApiConfig { base_url }
    }

    /// Use the origin of the page the widget is mounted in.
    pub fn from_location() -> Result<Self, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Config("no window".into()))?;

        let origin = window
            .location()
            .origin()
            .map_err(|_| ApiError::Config("page location has no origin".into()))?;

        Ok(ApiConfig::new(origin))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn comments_url(&self) -> String {
        format!("{}{COMMENTS_PATH}", self.base_url)
    }

    pub fn comment_url(&self, id: i64) -> String {
        format!("{}{COMMENTS_PATH}/{id}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls() {
        let config = ApiConfig::new("http://localhost:8989");

        assert_eq!(config.comments_url(), "http://localhost:8989/api/comments");
        assert_eq!(config.comment_url(42), "http://localhost:8989/api/comments/42");
    }

    #[test]
    fn trailing_slashes_are_dropped() {
        let config = ApiConfig::new("https://example.com//");

        assert_eq!(config.base_url(), "https://example.com");
        assert_eq!(config.comments_url(), "https://example.com/api/comments");
    }
}
