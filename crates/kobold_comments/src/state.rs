// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::RefCell;

use kobold::stateful::{Signal, Then};

use crate::comment::{Comment, Draft};

/// Everything the comment box renders from.
#[derive(Debug, Default)]
pub struct State {
    pub comments: Vec<Comment>,
    pub draft: Draft,
}

impl State {
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_name(&mut self, name: String) {
        self.draft.name = name;
    }

    pub fn set_text(&mut self, text: String) {
        self.draft.text = text;
    }

    pub fn clear_draft(&mut self) {
        self.draft.name.clear();
        self.draft.text.clear();
    }

    /// Comments are never patched in place, each fetch replaces the lot.
    pub fn replace_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
    }
}

/// Handle to a [`State`] that outlives a single event.
///
/// Async flows hold one of these across `.await` points and only borrow
/// the state for the duration of `update`. Once the widget is gone the
/// handle reaches nothing and updates are dropped on the floor.
pub trait Store {
    fn update<F>(&self, mutator: F)
    where
        F: FnOnce(&mut State) -> Then;

    /// Read from the state without triggering a render. Returns `None` if
    /// the state no longer exists.
    fn read<F, R>(&self, getter: F) -> Option<R>
    where
        F: FnOnce(&State) -> R,
    {
        let mut out = None;

        self.update(|state| {
            out = Some(getter(state));

            Then::Stop
        });

        out
    }
}

impl Store for Signal<State> {
    fn update<F>(&self, mutator: F)
    where
        F: FnOnce(&mut State) -> Then,
    {
        Signal::update(self, mutator);
    }
}

/// Headless store, for driving the flows outside of a rendered widget.
impl Store for RefCell<State> {
    fn update<F>(&self, mutator: F)
    where
        F: FnOnce(&mut State) -> Then,
    {
        if let Ok(mut state) = self.try_borrow_mut() {
            mutator(&mut state);
        }
    }
}
