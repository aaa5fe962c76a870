// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Kobold Comments
//!
//! A small comment box for pages built with **Kobold**: a form to submit a
//! named comment and a list of the comments the server currently holds.
//!
//! The widget talks to two endpoints, `POST /api/comments` and
//! `GET /api/comments`. Storage, validation and ordering all belong to the
//! server, the widget only renders whatever it gets back.
//!
//! ```ignore
//! use kobold::prelude::*;
//! use kobold_comments::{ApiConfig, CommentBox, HttpApi};
//!
//! let api = HttpApi::new(ApiConfig::new("https://example.com"));
//!
//! kobold::start(view! {
//!     <CommentBox {api} />
//! });
//! ```
//!
//! The moving parts are split so they can be exercised without a browser:
//!
//! * [`State`] is the view-model: the fetched comments plus the draft.
//! * [`CommentsApi`] is the seam to the server, [`HttpApi`] implements it.
//! * [`flow`] holds the async sequences (load, submit, refresh) that connect
//!   the two, written against the [`Store`] and [`Notify`] traits.

pub mod api;
pub mod comment;
pub mod config;
pub mod flow;
pub mod state;

mod widget;

pub use api::{ApiError, CommentsApi, HttpApi};
pub use comment::{Comment, Draft};
pub use config::ApiConfig;
pub use flow::{BrowserAlert, Notify, Outcome};
pub use state::{State, Store};
pub use widget::{comment_box, CommentBox};
