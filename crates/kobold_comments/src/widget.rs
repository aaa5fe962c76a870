// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::rc::Rc;

use kobold::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement as InputElement};

use crate::api::{CommentsApi, HttpApi};
use crate::comment::Comment;
use crate::flow::{self, BrowserAlert, Notify};
use crate::state::State;

/// The comment box: a form for the draft and the list of comments.
///
/// The list is fetched once when the box is mounted and again after every
/// accepted submission.
#[component]
pub fn CommentBox(api: HttpApi) -> impl View {
    comment_box(api, BrowserAlert)
}

/// Same as [`CommentBox`], over any server and any way of alerting the user.
pub fn comment_box<A, N>(api: A, notify: N) -> impl View
where
    A: CommentsApi + 'static,
    N: Notify + 'static,
{
    let api = Rc::new(api);
    let notify = Rc::new(notify);
    let init = api.clone();

    stateful(State::default, move |state| {
        let api = api.clone();
        let notify = notify.clone();

        let onsubmit = state.bind_async(move |signal, event: Event<HtmlFormElement>| {
            // The form must never navigate away
            event.prevent_default();

            let api = api.clone();
            let notify = notify.clone();

            async move {
                flow::submit(&*api, &signal, &*notify).await;
            }
        });

        let oninput_name = state.bind(|state, e: Event<InputElement>| {
            state.set_name(e.target().value());
        });
        let oninput_text = state.bind(|state, e: Event<InputElement>| {
            state.set_text(e.target().value());
        });

        view! {
            <div .comment-box>
                <form .comment-form {onsubmit}>
                    <input
                        .comment-name
                        type="text"
                        placeholder="Name"
                        value={state.draft.name.as_str()}
                        oninput={oninput_name}
                    />
                    <input
                        .comment-text
                        type="text"
                        placeholder="Comment"
                        value={state.draft.text.as_str()}
                        oninput={oninput_text}
                    />
                    <button type="submit">"Post"</button>
                </form>
                <ul .comment-list>
                {
                    for state.comments.iter().map(|comment| view! { <CommentItem {comment} /> })
                }
                </ul>
            </div>
        }
    })
    .once(move |signal| {
        spawn_local(async move {
            // Failures are logged, the list simply stays empty
            let _ = flow::refresh(&*init, &signal).await;
        });
    })
}

#[component]
fn CommentItem(comment: &Comment) -> impl View + '_ {
    let created = comment
        .created
        .as_deref()
        .map(|created| view! { <time .comment-created>{ created }</time> });

    view! {
        <li .comment>
            <strong .comment-author>{ comment.name.as_str() }</strong>
            { created }
            <p .comment-body>{ comment.text.as_str() }</p>
        </li>
    }
}
