// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawer controller: committed state, swipe sessions, and commits.
//!
//! ## Usage
//!
//! 1) Create a [`Drawer`] with a [`DrawerConfig`] and a shared [`SwipeArbiter`],
//!    then call [`Drawer::mount`].
//! 2) Keep the document listeners named by [`Drawer::listeners`] attached and
//!    forward touch events to [`Drawer::touch_start`], [`Drawer::touch_move`],
//!    [`Drawer::touch_end`] and [`Drawer::touch_cancel`].
//! 3) Forward scrim taps and key releases to [`Drawer::overlay_tap`] and
//!    [`Drawer::key_up`].
//! 4) Pass updated properties with [`Drawer::set_config`]; call
//!    [`Drawer::unmount`] (or drop the drawer) on teardown.
//!
//! ## Minimal example
//!
//! ```
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use understory_drawer::{
//!     ChangeReason, Drawer, DrawerConfig, DrawerEvent, PanelPosition, SwipeArbiter, TouchEvent,
//! };
//!
//! let arbiter = Rc::new(SwipeArbiter::new());
//! let mut drawer = Drawer::new(DrawerConfig::overlay(), arbiter).unwrap();
//! drawer.mount();
//!
//! let mut applied: Vec<PanelPosition> = Vec::new();
//! let mut surface = |p: PanelPosition| applied.push(p);
//!
//! drawer.touch_start(&TouchEvent::active(Point::new(5.0, 300.0)));
//! drawer.touch_move(&TouchEvent::active(Point::new(20.0, 302.0)), &mut surface);
//! drawer.touch_move(&TouchEvent::active(Point::new(220.0, 305.0)), &mut surface);
//! let response = drawer.touch_end(&TouchEvent::lifted(Point::new(220.0, 305.0)), &mut surface);
//!
//! assert_eq!(
//!     response.event,
//!     Some(DrawerEvent::ChangeRequest { open: true, reason: ChangeReason::Swipe })
//! );
//! assert!(drawer.is_open());
//! ```

use alloc::rc::Rc;

use smallvec::SmallVec;

use crate::arbiter::{DrawerId, SwipeArbiter};
use crate::config::DrawerConfig;
use crate::error::ConfigError;
use crate::event::{ChangeReason, DrawerEvent, Key, TouchResponse};
use crate::gesture::{Classification, GestureState, Listeners, TouchEvent, classify};
use crate::position::{DrawerSurface, PanelPosition, SwipePhase, hidden_offset};

/// Docked drawers carry no gesture session at all.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Presentation {
    Docked,
    Overlay(GestureState),
}

impl Presentation {
    fn for_config(config: &DrawerConfig) -> Self {
        if config.docked {
            Self::Docked
        } else {
            Self::Overlay(GestureState::Idle)
        }
    }
}

/// A side navigation panel driven by touch gestures, keys, and its owner.
#[derive(Debug)]
pub struct Drawer {
    id: DrawerId,
    config: DrawerConfig,
    open: bool,
    presentation: Presentation,
    mounted: bool,
    arbiter: Rc<SwipeArbiter>,
}

impl Drawer {
    /// Creates an unmounted drawer.
    ///
    /// The initial open state is the controlled value if there is one, and
    /// otherwise follows `docked`.
    pub fn new(config: DrawerConfig, arbiter: Rc<SwipeArbiter>) -> Result<Self, ConfigError> {
        config.validate()?;
        let id = arbiter.allocate_id();
        Ok(Self {
            id,
            open: config.open.unwrap_or(config.docked),
            presentation: Presentation::for_config(&config),
            config,
            mounted: false,
            arbiter,
        })
    }

    /// Returns this drawer's arbitration id.
    #[must_use]
    pub fn id(&self) -> DrawerId {
        self.id
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Returns the committed open state.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` for docked drawers.
    #[must_use]
    pub fn is_docked(&self) -> bool {
        matches!(self.presentation, Presentation::Docked)
    }

    /// Returns `true` between [`mount`](Self::mount) and [`unmount`](Self::unmount).
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns the current gesture session; docked drawers are always idle.
    #[must_use]
    pub fn gesture(&self) -> GestureState {
        match self.presentation {
            Presentation::Docked => GestureState::Idle,
            Presentation::Overlay(state) => state,
        }
    }

    /// Returns the phase of the swipe in progress, if any.
    #[must_use]
    pub fn swiping(&self) -> Option<SwipePhase> {
        self.gesture().swipe_phase()
    }

    /// Full travel between the open and closed rest positions.
    #[must_use]
    pub fn max_translate(&self) -> f64 {
        self.config.max_translate()
    }

    /// Whether the host should render the scrim.
    #[must_use]
    pub fn should_show_overlay(&self) -> bool {
        !self.is_docked() && (self.open || self.swiping().is_some())
    }

    /// Whether the scrim should receive pointer input; it lets taps through while closing.
    #[must_use]
    pub fn overlay_accepts_pointer(&self) -> bool {
        self.open
    }

    /// Whether the host should animate position changes.
    #[must_use]
    pub fn transitions_enabled(&self) -> bool {
        self.swiping().is_none()
    }

    /// Rest position for the committed state.
    #[must_use]
    pub fn resting_position(&self) -> PanelPosition {
        PanelPosition::resting(self.open, self.max_translate(), self.config.direction())
    }

    /// Position the host should currently show: the drag position while
    /// swiping, the rest position otherwise.
    #[must_use]
    pub fn current_position(&self) -> PanelPosition {
        match self.gesture() {
            GestureState::Swiping {
                phase,
                swipe_start_x,
                last_x,
            } => self.drag_position(phase, swipe_start_x, last_x),
            _ => self.resting_position(),
        }
    }

    /// Document-level touch listeners the host must keep attached right now.
    #[must_use]
    pub fn listeners(&self) -> Listeners {
        match self.presentation {
            Presentation::Overlay(state) if self.mounted => {
                if state.is_active() {
                    Listeners::TOUCH_START | Listeners::SESSION
                } else {
                    Listeners::TOUCH_START
                }
            }
            _ => Listeners::empty(),
        }
    }

    /// Starts handling touches: overlay drawers try to claim swipe-to-open.
    pub fn mount(&mut self) {
        self.mounted = true;
        self.sync_swipe_handling();
    }

    /// Stops handling touches and gives up swipe-to-open.
    pub fn unmount(&mut self) {
        self.clear_session();
        self.mounted = false;
        self.arbiter.release(self.id);
    }

    /// Applies new properties from the owner.
    ///
    /// Switching between docked and overlay resets an uncontrolled drawer to
    /// the new `docked` value, and a controlled `open` always wins. Docking
    /// aborts any gesture and releases swipe-to-open, and so does any change
    /// to the committed open state.
    pub fn set_config(
        &mut self,
        config: DrawerConfig,
        surface: &mut impl DrawerSurface,
    ) -> Result<(), ConfigError> {
        config.validate()?;
        let was_open = self.open;

        if self.config.docked != config.docked {
            self.open = config.docked;
            self.presentation = Presentation::for_config(&config);
            log::debug!("drawer {} docked = {}", self.id.get(), config.docked);
        }
        if let Some(open) = config.open {
            self.open = open;
        }
        if self.open != was_open && self.gesture().is_active() {
            log::debug!("drawer {} open state changed mid-gesture", self.id.get());
            self.clear_session();
        }
        self.config = config;

        if self.mounted {
            self.sync_swipe_handling();
        }
        if self.swiping().is_none() {
            surface.apply_position(self.resting_position());
        }
        Ok(())
    }

    /// Handles a touch-start anywhere in the document.
    ///
    /// Closed drawers only start tracking when they own swipe-to-open and it
    /// is not disabled. Open drawers always track.
    pub fn touch_start(&mut self, event: &TouchEvent) -> TouchResponse {
        if !self.mounted {
            return TouchResponse::default();
        }
        let Presentation::Overlay(state) = self.presentation else {
            return TouchResponse::default();
        };
        if state.is_active() {
            return TouchResponse::default();
        }
        let Some(start) = event.primary() else {
            return TouchResponse::default();
        };
        if !self.open && (!self.arbiter.is_owner(self.id) || self.config.disable_swipe_to_open) {
            return TouchResponse::default();
        }

        log::debug!(
            "drawer {} tracking touch at ({}, {})",
            self.id.get(),
            start.x,
            start.y
        );
        self.set_gesture(GestureState::Tracking { start });
        TouchResponse::default()
    }

    /// Handles a touch-move during a session.
    pub fn touch_move(
        &mut self,
        event: &TouchEvent,
        surface: &mut impl DrawerSurface,
    ) -> TouchResponse {
        let Some(current) = event.primary() else {
            return TouchResponse::default();
        };

        match self.gesture() {
            GestureState::Idle => TouchResponse::default(),
            GestureState::Tracking { start } => {
                match classify(start, current, self.config.swipe_threshold) {
                    Classification::Swipe => {
                        let phase = if self.open {
                            SwipePhase::Closing
                        } else {
                            SwipePhase::Opening
                        };
                        log::debug!("drawer {} swipe recognized: {phase:?}", self.id.get());
                        self.set_gesture(GestureState::Swiping {
                            phase,
                            swipe_start_x: current.x,
                            last_x: current.x,
                        });
                        surface.apply_position(self.drag_position(phase, current.x, current.x));
                    }
                    Classification::Scroll => {
                        log::debug!("drawer {} touch is a scroll, ignoring", self.id.get());
                        self.clear_session();
                    }
                    Classification::Pending => {}
                }
                TouchResponse::default()
            }
            GestureState::Swiping {
                phase,
                swipe_start_x,
                ..
            } => {
                self.set_gesture(GestureState::Swiping {
                    phase,
                    swipe_start_x,
                    last_x: current.x,
                });
                let position = self.drag_position(phase, swipe_start_x, current.x);
                log::trace!("drawer {} dragged to {}", self.id.get(), position.translate);
                surface.apply_position(position);
                TouchResponse::default_prevented()
            }
        }
    }

    /// Handles a touch-end, committing or snapping back a swipe.
    ///
    /// The session is cleared before any commit, so the resulting position
    /// is applied with transitions enabled.
    pub fn touch_end(
        &mut self,
        event: &TouchEvent,
        surface: &mut impl DrawerSurface,
    ) -> TouchResponse {
        let GestureState::Swiping {
            phase,
            swipe_start_x,
            ..
        } = self.gesture()
        else {
            self.clear_session();
            return TouchResponse::default();
        };
        self.clear_session();

        let Some(end) = event.primary_changed() else {
            log::debug!("drawer {} swipe ended without a touch point", self.id.get());
            surface.apply_position(self.resting_position());
            return TouchResponse::default();
        };

        let max = self.max_translate();
        let direction = self.config.direction();
        let offset = hidden_offset(phase, direction, swipe_start_x, end.x, max);
        let hidden_ratio = offset / max;
        log::debug!(
            "drawer {} swipe ended: {phase:?}, hidden ratio {hidden_ratio}",
            self.id.get()
        );

        // Snap-backs return to the committed rest position.
        match (phase, hidden_ratio > 0.5) {
            (SwipePhase::Opening, true) | (SwipePhase::Closing, false) => {
                surface.apply_position(self.resting_position());
                TouchResponse::default()
            }
            (SwipePhase::Opening, false) => {
                TouchResponse::with_event(self.request_open(ChangeReason::Swipe, surface))
            }
            (SwipePhase::Closing, true) => {
                TouchResponse::with_event(self.request_close(ChangeReason::Swipe, surface))
            }
        }
    }

    /// Handles a touch-cancel exactly like a touch-end.
    pub fn touch_cancel(
        &mut self,
        event: &TouchEvent,
        surface: &mut impl DrawerSurface,
    ) -> TouchResponse {
        self.touch_end(event, surface)
    }

    /// Asks to open the drawer.
    ///
    /// Uncontrolled drawers open immediately; controlled drawers only report
    /// the request.
    pub fn request_open(
        &mut self,
        reason: ChangeReason,
        surface: &mut impl DrawerSurface,
    ) -> DrawerEvent {
        self.commit(true, surface);
        DrawerEvent::ChangeRequest { open: true, reason }
    }

    /// Asks to close the drawer.
    ///
    /// Uncontrolled drawers close immediately; controlled drawers only report
    /// the request.
    pub fn request_close(
        &mut self,
        reason: ChangeReason,
        surface: &mut impl DrawerSurface,
    ) -> DrawerEvent {
        self.commit(false, surface);
        DrawerEvent::ChangeRequest {
            open: false,
            reason,
        }
    }

    /// Opens the drawer and reports [`DrawerEvent::Opened`].
    #[deprecated(note = "use `request_open` and handle `DrawerEvent::ChangeRequest`")]
    pub fn open(&mut self, surface: &mut impl DrawerSurface) -> DrawerEvent {
        log::warn!("Drawer::open is deprecated; use request_open");
        self.commit(true, surface);
        DrawerEvent::Opened
    }

    /// Closes the drawer and reports [`DrawerEvent::Closed`].
    #[deprecated(note = "use `request_close` and handle `DrawerEvent::ChangeRequest`")]
    pub fn close(&mut self, surface: &mut impl DrawerSurface) -> DrawerEvent {
        log::warn!("Drawer::close is deprecated; use request_close");
        self.commit(false, surface);
        DrawerEvent::Closed
    }

    /// Flips the drawer with the legacy notifications.
    #[deprecated(note = "use `request_open` or `request_close`")]
    #[allow(deprecated, reason = "toggle is itself part of the legacy API")]
    pub fn toggle(&mut self, surface: &mut impl DrawerSurface) -> DrawerEvent {
        if self.open {
            self.close(surface)
        } else {
            self.open(surface)
        }
    }

    /// Handles a key release; Escape closes an open overlay drawer.
    pub fn key_up(&mut self, key: Key, surface: &mut impl DrawerSurface) -> Option<DrawerEvent> {
        if key == Key::Escape && !self.is_docked() && self.open {
            Some(self.request_close(ChangeReason::Escape, surface))
        } else {
            None
        }
    }

    /// Handles a tap on the scrim of an open overlay drawer.
    pub fn overlay_tap(&mut self, surface: &mut impl DrawerSurface) -> Option<DrawerEvent> {
        if !self.is_docked() && self.open {
            Some(self.request_close(ChangeReason::Clickaway, surface))
        } else {
            None
        }
    }

    /// Handles activation of menu item `index`.
    ///
    /// Reports [`DrawerEvent::ItemSelected`] unless the item is already
    /// selected, then closes overlay drawers.
    pub fn select_item(
        &mut self,
        index: usize,
        selected_index: Option<usize>,
        surface: &mut impl DrawerSurface,
    ) -> SmallVec<[DrawerEvent; 2]> {
        let mut events = SmallVec::new();
        if selected_index != Some(index) {
            events.push(DrawerEvent::ItemSelected { index });
        }
        if !self.is_docked() {
            events.push(self.request_close(ChangeReason::Clickaway, surface));
        }
        events
    }

    fn commit(&mut self, open: bool, surface: &mut impl DrawerSurface) {
        self.clear_session();
        if !self.config.is_controlled() {
            self.open = open;
        }
        surface.apply_position(self.resting_position());
    }

    fn drag_position(&self, phase: SwipePhase, swipe_start_x: f64, x: f64) -> PanelPosition {
        let max = self.max_translate();
        let direction = self.config.direction();
        let offset = hidden_offset(phase, direction, swipe_start_x, x, max);
        PanelPosition::from_offset(offset, max, direction, false)
    }

    fn set_gesture(&mut self, state: GestureState) {
        if let Presentation::Overlay(current) = &mut self.presentation {
            *current = state;
        }
    }

    fn clear_session(&mut self) {
        self.set_gesture(GestureState::Idle);
    }

    fn sync_swipe_handling(&mut self) {
        if self.is_docked() {
            self.arbiter.release(self.id);
        } else {
            self.arbiter.claim(self.id);
        }
    }
}

impl Drop for Drawer {
    fn drop(&mut self) {
        self.arbiter.release(self.id);
    }
}
