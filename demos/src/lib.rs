// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the drawer demos: JSON touch scripts and a printing surface.

use std::rc::Rc;

use kurbo::Point;
use serde::Deserialize;
use understory_drawer::{
    ConfigError, Drawer, DrawerConfig, DrawerEvent, DrawerSurface, Key, PanelPosition,
    SwipeArbiter, TouchEvent,
};

/// One recorded input.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Finger down.
    Start { x: f64, y: f64 },
    /// Finger moved.
    Move { x: f64, y: f64 },
    /// Finger lifted.
    End { x: f64, y: f64 },
    /// The platform cancelled the touch without a final point.
    Cancel,
    /// Escape key released.
    Escape,
    /// Tap on the scrim.
    OverlayTap,
}

/// A drawer configuration plus the inputs to replay against it.
#[derive(Clone, Debug, Deserialize)]
pub struct Script {
    /// Properties passed to the drawer.
    #[serde(default)]
    pub config: DrawerConfig,
    /// Inputs in delivery order.
    pub steps: Vec<Step>,
}

impl Script {
    /// Parses a script from JSON.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Surface that prints every applied position.
#[derive(Debug, Default)]
pub struct PrintSurface {
    /// Number of positions applied so far.
    pub applied: usize,
}

impl DrawerSurface for PrintSurface {
    fn apply_position(&mut self, position: PanelPosition) {
        self.applied += 1;
        println!(
            "    panel translate {:>8.1}px  scrim {:.2}  {}",
            position.translate,
            position.overlay_opacity,
            if position.transitions { "animated" } else { "tracking" }
        );
    }
}

/// Replays `script` against a fresh mounted drawer and returns every notification.
pub fn replay(
    script: &Script,
    surface: &mut impl DrawerSurface,
) -> Result<Vec<DrawerEvent>, ConfigError> {
    let arbiter = Rc::new(SwipeArbiter::new());
    let mut drawer = Drawer::new(script.config, arbiter)?;
    drawer.mount();

    let mut events = Vec::new();
    for step in &script.steps {
        log::info!("{step:?}");
        let event = match *step {
            Step::Start { x, y } => {
                drawer
                    .touch_start(&TouchEvent::active(Point::new(x, y)))
                    .event
            }
            Step::Move { x, y } => {
                let response = drawer.touch_move(&TouchEvent::active(Point::new(x, y)), surface);
                if response.prevent_default {
                    log::debug!("scrolling suppressed");
                }
                response.event
            }
            Step::End { x, y } => {
                drawer
                    .touch_end(&TouchEvent::lifted(Point::new(x, y)), surface)
                    .event
            }
            Step::Cancel => drawer.touch_cancel(&TouchEvent::default(), surface).event,
            Step::Escape => drawer.key_up(Key::Escape, surface),
            Step::OverlayTap => drawer.overlay_tap(surface),
        };
        if let Some(event) = event {
            println!("  -> {event:?}");
            events.push(event);
        }
        println!(
            "  open={} swiping={:?} listeners={:?}",
            drawer.is_open(),
            drawer.swiping(),
            drawer.listeners()
        );
    }
    Ok(events)
}
