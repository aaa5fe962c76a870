// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The async sequences behind the comment box.
//!
//! Each step awaits the previous one, so the list is only re-fetched after
//! the server has answered the submission.

use kobold::stateful::Then;
use log::{debug, error, warn};

use crate::api::{ApiError, CommentsApi};
use crate::state::Store;

/// Blocking notifications shown to the user.
pub trait Notify {
    fn alert(&self, message: &str);
}

/// [`Notify`] using `window.alert`, which blocks until dismissed.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl Notify for BrowserAlert {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            error!("no window to show alert: {message}");
            return;
        };

        if let Err(err) = window.alert_with_message(message) {
            error!("failed to show alert: {err:?}");
        }
    }
}

/// What happened to a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Server accepted the comment, the draft was cleared.
    Submitted,
    /// Server (or the network) said no. Carries the message shown to the user.
    Rejected(String),
    /// The widget was torn down before the submission started.
    Detached,
}

/// Fetch the comment list and put it in the state.
///
/// Failures are logged and leave the current list in place, the user is not
/// told about them.
pub async fn refresh<A, S>(api: &A, store: &S) -> Result<(), ApiError>
where
    A: CommentsApi,
    S: Store,
{
    match api.list().await {
        Ok(comments) => {
            debug!("fetched {} comments", comments.len());

            store.update(move |state| {
                state.replace_comments(comments);
                Then::Render
            });

            Ok(())
        }
        Err(err) => {
            error!("failed to fetch comments: {err}");

            Err(err)
        }
    }
}

/// Send the current draft, then either clear it and refresh the list or tell
/// the user why it was rejected.
pub async fn submit<A, S, N>(api: &A, store: &S, notify: &N) -> Outcome
where
    A: CommentsApi,
    S: Store,
    N: Notify,
{
    let Some(draft) = store.read(|state| state.draft().clone()) else {
        return Outcome::Detached;
    };

    if let Err(err) = api.submit(&draft).await {
        warn!("comment rejected: {err}");

        let message = err.user_message();

        notify.alert(&message);

        return Outcome::Rejected(message);
    }

    store.update(|state| {
        state.clear_draft();
        Then::Render
    });

    // Already logged, the stale list stays up
    let _ = refresh(api, store).await;

    Outcome::Submitted
}
