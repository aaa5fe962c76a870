// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// A comment as returned by the server.
///
/// Only `name` and `text` are required to render a comment. Servers built
/// on an ORM usually add an `id` and timestamps, those are picked up when
/// present and anything else in the payload is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl Comment {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Comment {
            id: None,
            name: name.into(),
            text: text.into(),
            created: None,
        }
    }
}

/// The comment currently being typed into the form.
///
/// Serializes to exactly `{"name": ..., "text": ...}`, which is the body of
/// the submit request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Draft {
    pub name: String,
    pub text: String,
}

impl Draft {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Draft {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_body_has_only_name_and_text() {
        let body = serde_json::to_value(Draft::new("Bob", "hello")).unwrap();

        assert_eq!(body, serde_json::json!({ "name": "Bob", "text": "hello" }));
    }

    #[test]
    fn comment_ignores_unknown_fields() {
        let comment: Comment = serde_json::from_str(
            r#"{"id":7,"name":"A","text":"hi","created":"2023-01-02T03:04:05Z","updated":"2023-01-02T03:04:05Z","edges":{}}"#,
        )
        .unwrap();

        assert_eq!(comment.id, Some(7));
        assert_eq!(comment.name, "A");
        assert_eq!(comment.text, "hi");
        assert_eq!(comment.created.as_deref(), Some("2023-01-02T03:04:05Z"));
    }

    #[test]
    fn comment_missing_fields_default_to_empty() {
        let comment: Comment = serde_json::from_str(r#"{"text":"anonymous"}"#).unwrap();

        assert_eq!(comment, Comment::new("", "anonymous"));
    }
}
