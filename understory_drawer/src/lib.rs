// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawer --heading-base-level=0

//! Understory Drawer: a headless state machine for swipeable side panels.
//!
//! A drawer is a navigation panel anchored to the left or right edge. In
//! **docked** mode it is always visible and ignores touch. In **overlay** mode
//! it floats above the content with a dimming scrim, and opens or closes via
//! swipes, scrim taps, the Escape key, or its owner.
//!
//! This crate owns only the interaction logic:
//!
//! - [`gesture`]: classify the first few pixels of a touch as a horizontal
//!   swipe, a vertical scroll, or "not yet known", and track the session.
//! - [`position`]: turn touch X coordinates into a clamped panel offset and a
//!   scrim opacity ([`PanelPosition`]).
//! - [`arbiter`]: decide which of several mounted drawers may be swiped open.
//! - [`drawer`]: the [`Drawer`] controller tying these together, committing or
//!   snapping back at the end of a swipe, and reporting [`DrawerEvent`]s.
//!
//! The crate does not render anything. Hosts implement [`DrawerSurface`] to
//! apply positions, attach the document listeners reported by
//! [`Drawer::listeners`], and forward touch and key events.
//!
//! ## Swipe lifecycle
//!
//! 1) Touch-start begins a session if the drawer is open, or if it is closed,
//!    owns swipe-to-open in the [`SwipeArbiter`], and swipe-to-open is enabled.
//! 2) Once the touch travels more than the threshold (10px by default)
//!    horizontally but not vertically, it becomes a swipe. Vertical travel
//!    aborts the session so the page can scroll.
//! 3) While swiping, every move applies a [`PanelPosition`] with transitions
//!    disabled so the panel tracks the finger.
//! 4) On touch-end, a swipe that moved the panel past the midpoint commits and
//!    reports [`DrawerEvent::ChangeRequest`] with [`ChangeReason::Swipe`];
//!    otherwise the panel animates back to where it started.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use understory_drawer::{
//!     Drawer, DrawerConfig, Listeners, PanelPosition, SwipeArbiter, TouchEvent,
//! };
//!
//! let arbiter = Rc::new(SwipeArbiter::new());
//! let mut drawer = Drawer::new(DrawerConfig::overlay(), arbiter).unwrap();
//! drawer.mount();
//! assert_eq!(drawer.listeners(), Listeners::TOUCH_START);
//!
//! let mut last = None;
//! let mut surface = |p: PanelPosition| last = Some(p);
//!
//! drawer.touch_start(&TouchEvent::active(Point::new(0.0, 200.0)));
//! assert_eq!(drawer.listeners(), Listeners::TOUCH_START | Listeners::SESSION);
//!
//! // A short horizontal drag, released well before the midpoint.
//! drawer.touch_move(&TouchEvent::active(Point::new(15.0, 201.0)), &mut surface);
//! drawer.touch_move(&TouchEvent::active(Point::new(60.0, 203.0)), &mut surface);
//! let response = drawer.touch_end(&TouchEvent::lifted(Point::new(60.0, 203.0)), &mut surface);
//!
//! // Snapped back closed; nothing to report and no session listeners left.
//! assert_eq!(response.event, None);
//! assert!(!drawer.is_open());
//! assert_eq!(drawer.listeners(), Listeners::TOUCH_START);
//! assert_eq!(last.map(|p| p.overlay_opacity), Some(0.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo.
//! - `libm`: use `libm` for Kurbo's float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`DrawerConfig`] and the
//!   notification types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod arbiter;
pub mod config;
pub mod drawer;
mod error;
mod event;
pub mod gesture;
pub mod position;

pub use arbiter::{DrawerId, SwipeArbiter};
pub use config::DrawerConfig;
pub use drawer::Drawer;
pub use error::ConfigError;
pub use event::{ChangeReason, DrawerEvent, Key, TouchResponse};
pub use gesture::{Listeners, TouchEvent};
pub use position::{DrawerSurface, PanelPosition, SwipeDirection, SwipePhase, hidden_offset};
