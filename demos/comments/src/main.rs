// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kobold::prelude::*;
use kobold_comments::{ApiConfig, CommentBox, HttpApi};
use log::error;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let config = match ApiConfig::from_location() {
        Ok(config) => config,
        Err(err) => {
            error!("can't start the comment box: {err}");
            return;
        }
    };

    let api = HttpApi::new(config);

    kobold::start(view! {
        <CommentBox {api} />
    });
}
