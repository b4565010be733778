// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe-to-open arbitration between drawers mounted in the same document.

use std::rc::Rc;

use kurbo::Point;
use understory_drawer::{
    ChangeReason, Drawer, DrawerConfig, PanelPosition, SwipeArbiter, TouchEvent,
};

fn discard(_: PanelPosition) {}

/// Feeds the same edge swipe to every drawer, as a shared document listener would.
fn edge_swipe(drawers: &mut [&mut Drawer]) {
    for d in drawers.iter_mut() {
        d.touch_start(&TouchEvent::active(Point::new(0.0, 300.0)));
    }
    for x in [15.0, 240.0] {
        for d in drawers.iter_mut() {
            d.touch_move(&TouchEvent::active(Point::new(x, 300.0)), &mut discard);
        }
    }
    for d in drawers.iter_mut() {
        d.touch_end(&TouchEvent::lifted(Point::new(240.0, 300.0)), &mut discard);
    }
}

#[test]
fn only_first_registered_drawer_swipes_open() {
    let arbiter = Rc::new(SwipeArbiter::new());
    let mut first = Drawer::new(DrawerConfig::overlay(), arbiter.clone()).unwrap();
    let mut second = Drawer::new(DrawerConfig::overlay(), arbiter.clone()).unwrap();
    first.mount();
    second.mount();
    assert_eq!(arbiter.owner(), Some(first.id()));

    edge_swipe(&mut [&mut first, &mut second]);

    assert!(first.is_open());
    assert!(!second.is_open());
}

#[test]
fn every_open_drawer_swipes_closed() {
    let arbiter = Rc::new(SwipeArbiter::new());
    let mut first = Drawer::new(DrawerConfig::overlay(), arbiter.clone()).unwrap();
    let mut second = Drawer::new(DrawerConfig::overlay(), arbiter.clone()).unwrap();
    first.mount();
    second.mount();
    first.request_open(ChangeReason::Clickaway, &mut discard);
    second.request_open(ChangeReason::Clickaway, &mut discard);

    for d in [&mut first, &mut second] {
        d.touch_start(&TouchEvent::active(Point::new(250.0, 300.0)));
        d.touch_move(&TouchEvent::active(Point::new(230.0, 300.0)), &mut discard);
        d.touch_move(&TouchEvent::active(Point::new(20.0, 300.0)), &mut discard);
        d.touch_end(&TouchEvent::lifted(Point::new(20.0, 300.0)), &mut discard);
    }

    assert!(!first.is_open());
    assert!(!second.is_open());
}

#[test]
fn docked_owner_frees_slot_for_next_overlay_update() {
    let arbiter = Rc::new(SwipeArbiter::new());
    let mut first = Drawer::new(DrawerConfig::overlay(), arbiter.clone()).unwrap();
    let mut second = Drawer::new(DrawerConfig::overlay(), arbiter.clone()).unwrap();
    first.mount();
    second.mount();

    first
        .set_config(DrawerConfig::default(), &mut discard)
        .unwrap();
    assert_eq!(arbiter.owner(), None);

    // The next property update of the remaining overlay drawer claims the slot.
    second
        .set_config(DrawerConfig::overlay(), &mut discard)
        .unwrap();
    assert_eq!(arbiter.owner(), Some(second.id()));

    edge_swipe(&mut [&mut first, &mut second]);
    assert!(second.is_open());
}

#[test]
fn releasing_a_slot_owned_by_someone_else_is_ignored() {
    let arbiter = Rc::new(SwipeArbiter::new());
    let mut first = Drawer::new(DrawerConfig::overlay(), arbiter.clone()).unwrap();
    let mut second = Drawer::new(DrawerConfig::overlay(), arbiter.clone()).unwrap();
    first.mount();
    second.mount();

    second.unmount();
    drop(second);
    assert_eq!(arbiter.owner(), Some(first.id()));
}

#[test]
fn reset_lets_tests_start_from_an_empty_slot() {
    let arbiter = Rc::new(SwipeArbiter::new());
    let mut drawer = Drawer::new(DrawerConfig::overlay(), arbiter.clone()).unwrap();
    drawer.mount();
    arbiter.reset();

    edge_swipe(&mut [&mut drawer]);
    assert!(!drawer.is_open(), "closed drawer without the slot cannot be swiped open");
}
