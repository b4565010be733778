// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two overlay drawers sharing one document.
//!
//! Only the first drawer to mount owns swipe-to-open, so an edge swipe opens
//! it alone. Once both are open, the same swipe closes each of them.
//!
//! Run:
//! - `cargo run -p understory_drawer_demos --example two_drawers`

use std::rc::Rc;

use kurbo::Point;
use understory_drawer::{
    ChangeReason, Drawer, DrawerConfig, PanelPosition, SwipeArbiter, TouchEvent,
};

fn swipe(drawers: &mut [(&str, Drawer)], from: f64, to: f64) {
    let mut ignore = |_: PanelPosition| {};
    for (_, d) in drawers.iter_mut() {
        d.touch_start(&TouchEvent::active(Point::new(from, 300.0)));
    }
    let step = if to > from { 15.0 } else { -15.0 };
    for x in [from + step, to] {
        for (_, d) in drawers.iter_mut() {
            d.touch_move(&TouchEvent::active(Point::new(x, 300.0)), &mut ignore);
        }
    }
    for (name, d) in drawers.iter_mut() {
        let response = d.touch_end(&TouchEvent::lifted(Point::new(to, 300.0)), &mut ignore);
        println!("  {name}: open={} event={:?}", d.is_open(), response.event);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arbiter = Rc::new(SwipeArbiter::new());
    let mut drawers = [
        ("nav", Drawer::new(DrawerConfig::overlay(), arbiter.clone()).unwrap()),
        ("filters", Drawer::new(DrawerConfig::overlay(), arbiter.clone()).unwrap()),
    ];
    for (_, d) in &mut drawers {
        d.mount();
    }
    println!("swipe-to-open owner: {:?}", arbiter.owner());

    println!("edge swipe right:");
    swipe(&mut drawers, 0.0, 240.0);

    let mut ignore = |_: PanelPosition| {};
    drawers[1].1.request_open(ChangeReason::Clickaway, &mut ignore);

    println!("swipe left with both open:");
    swipe(&mut drawers, 250.0, 10.0);
}
