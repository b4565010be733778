// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture session state and swipe/scroll classification.
//!
//! A session begins on touch-start and lives until touch-end, touch-cancel, or
//! an abort. While it lives, the host keeps the [`Listeners::SESSION`]
//! listeners attached.
//!
//! ## Classification
//!
//! ```
//! use kurbo::Point;
//! use understory_drawer::gesture::{Classification, classify};
//!
//! let start = Point::new(100.0, 100.0);
//! assert_eq!(classify(start, Point::new(112.0, 104.0), 10.0), Classification::Swipe);
//! assert_eq!(classify(start, Point::new(103.0, 130.0), 10.0), Classification::Scroll);
//! assert_eq!(classify(start, Point::new(105.0, 105.0), 10.0), Classification::Pending);
//! ```

use bitflags::bitflags;
use kurbo::Point;
use smallvec::SmallVec;

use crate::position::SwipePhase;

/// Outcome of comparing the current touch point with the session start.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Horizontal travel crossed the threshold while vertical travel did not.
    Swipe,
    /// Vertical travel crossed the threshold while horizontal travel did not.
    Scroll,
    /// Not enough information yet.
    ///
    /// This includes travel past the threshold on both axes at once.
    Pending,
}

/// Classifies a touch from its absolute travel on each axis.
#[must_use]
pub fn classify(start: Point, current: Point, threshold: f64) -> Classification {
    let dx = (current.x - start.x).abs();
    let dy = (current.y - start.y).abs();
    if dx > threshold && dy <= threshold {
        Classification::Swipe
    } else if dy > threshold && dx <= threshold {
        Classification::Scroll
    } else {
        Classification::Pending
    }
}

/// Per-drawer gesture session.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum GestureState {
    /// No touch is being tracked.
    #[default]
    Idle,
    /// A touch began but has not been classified yet.
    Tracking {
        /// Initial contact point.
        start: Point,
    },
    /// The touch is dragging the panel horizontally.
    Swiping {
        /// Whether the drag began on a closed or an open panel.
        phase: SwipePhase,
        /// X coordinate at the moment the swipe was recognized.
        swipe_start_x: f64,
        /// Most recent X coordinate seen during the swipe.
        last_x: f64,
    },
}

impl GestureState {
    /// Returns `true` while a session exists.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns the swipe phase when a swipe has been recognized.
    #[must_use]
    pub fn swipe_phase(&self) -> Option<SwipePhase> {
        match self {
            Self::Swiping { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}

bitflags! {
    /// Document-level touch listeners a drawer currently needs.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// Touch-start, held for as long as the drawer is in overlay mode.
        const TOUCH_START = 1 << 0;
        /// Touch-move, held for the lifetime of a session.
        const TOUCH_MOVE = 1 << 1;
        /// Touch-end, held for the lifetime of a session.
        const TOUCH_END = 1 << 2;
        /// Touch-cancel, held for the lifetime of a session.
        const TOUCH_CANCEL = 1 << 3;
        /// Everything attached at session start and released at session end.
        const SESSION =
            Self::TOUCH_MOVE.bits() | Self::TOUCH_END.bits() | Self::TOUCH_CANCEL.bits();
    }
}

/// Touch points carried by a touch event, in page coordinates.
pub type TouchPoints = SmallVec<[Point; 2]>;

/// A touch event as seen by a drawer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchEvent {
    /// Touch points currently on the surface.
    pub touches: TouchPoints,
    /// Touch points that changed in this event; for touch-end these are the lifted ones.
    pub changed_touches: TouchPoints,
}

impl TouchEvent {
    /// An event with a single active touch, used for touch-start and touch-move.
    #[must_use]
    pub fn active(point: Point) -> Self {
        let mut touches = TouchPoints::new();
        touches.push(point);
        Self {
            touches: touches.clone(),
            changed_touches: touches,
        }
    }

    /// An event for a single lifted touch, used for touch-end and touch-cancel.
    #[must_use]
    pub fn lifted(point: Point) -> Self {
        let mut changed_touches = TouchPoints::new();
        changed_touches.push(point);
        Self {
            touches: TouchPoints::new(),
            changed_touches,
        }
    }

    /// First active touch point.
    #[must_use]
    pub fn primary(&self) -> Option<Point> {
        self.touches.first().copied()
    }

    /// First changed touch point.
    #[must_use]
    pub fn primary_changed(&self) -> Option<Point> {
        self.changed_touches.first().copied()
    }
}
