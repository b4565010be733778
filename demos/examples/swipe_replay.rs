// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a recorded touch script against a drawer.
//!
//! Prints every position the drawer asks the host to apply and every
//! notification it reports. Pass a script path to replay your own recording;
//! without one, the bundled `data/open_then_escape.json` is used.
//!
//! Run:
//! - `cargo run -p understory_drawer_demos --example swipe_replay`
//! - `RUST_LOG=debug cargo run -p understory_drawer_demos --example swipe_replay -- my_script.json`

use std::process::ExitCode;

use understory_drawer_demos::{PrintSurface, Script, replay};

const BUNDLED: &str = include_str!("../data/open_then_escape.json");

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let text = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                log::error!("cannot read {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => BUNDLED.to_owned(),
    };

    let script = match Script::from_json(&text) {
        Ok(script) => script,
        Err(err) => {
            log::error!("invalid script: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut surface = PrintSurface::default();
    match replay(&script, &mut surface) {
        Ok(events) => {
            println!(
                "{} notifications, {} positions applied",
                events.len(),
                surface.applied
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("invalid drawer configuration: {err}");
            ExitCode::FAILURE
        }
    }
}
