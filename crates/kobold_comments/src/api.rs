// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client side of the comments API.
//!
//! Every call is a single request/response round trip. There are no retries,
//! no timeouts beyond whatever the platform imposes, and nothing is cached.

use log::debug;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use crate::comment::{Comment, Draft};
use crate::config::ApiConfig;

/// Shown to the user when a failed response carries nothing readable.
pub const FALLBACK_MESSAGE: &str = "request failed";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Text to show the user when a submission fails.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            _ => FALLBACK_MESSAGE.to_owned(),
        }
    }
}

/// The server the widget talks to.
///
/// Futures returned here are not `Send`, everything runs on the browser's
/// main thread.
#[allow(async_fn_in_trait)]
pub trait CommentsApi {
    /// `POST /api/comments`. Any 2xx response counts as success.
    async fn submit(&self, draft: &Draft) -> Result<(), ApiError>;

    /// `GET /api/comments`. An empty or falsy body is an empty list.
    async fn list(&self) -> Result<Vec<Comment>, ApiError>;

    /// `GET /api/comments/{id}`, `None` if the server doesn't know the id.
    async fn get(&self, id: i64) -> Result<Option<Comment>, ApiError>;
}

/// [`CommentsApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        HttpApi {
            client: Client::new(),
            config,
        }
    }
}

impl CommentsApi for HttpApi {
    async fn submit(&self, draft: &Draft) -> Result<(), ApiError> {
        let url = self.config.comments_url();

        debug!("POST {url}");

        let res = self.client.post(&url).json(draft).send().await?;

        check(res).await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Comment>, ApiError> {
        let url = self.config.comments_url();

        debug!("GET {url}");

        let res = self.client.get(&url).send().await?;
        let body = check(res).await?.text().await?;

        parse_list(&body)
    }

    async fn get(&self, id: i64) -> Result<Option<Comment>, ApiError> {
        let url = self.config.comment_url(id);

        debug!("GET {url}");

        let res = self.client.get(&url).send().await?;

        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = check(res).await?.text().await?;

        Ok(Some(serde_json::from_str(&body)?))
    }
}

/// Turn a non-2xx response into [`ApiError::Status`].
async fn check(res: Response) -> Result<Response, ApiError> {
    let status = res.status();

    if status.is_success() {
        return Ok(res);
    }

    // A body we can't read is as good as an empty one
    let body = res.text().await.unwrap_or_default();

    Err(ApiError::Status {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Parse the body of a successful `GET /api/comments`.
pub fn parse_list(body: &str) -> Result<Vec<Comment>, ApiError> {
    let body = body.trim();

    if body.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(body)?;

    if is_falsy(&value) {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_value(value)?)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Extract a human readable message from the body of a failed response.
///
/// Prefers the `message` field of a JSON object. Servers that answer with
/// plain text get their text shown as is.
pub fn error_message(body: &str) -> String {
    let body = body.trim();

    let message = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(mut fields)) => match fields.remove("message") {
            Some(Value::String(message)) => message,
            _ => String::new(),
        },
        Ok(Value::String(message)) => message,
        _ => body.to_owned(),
    };

    if message.is_empty() {
        FALLBACK_MESSAGE.to_owned()
    } else {
        message
    }
}
