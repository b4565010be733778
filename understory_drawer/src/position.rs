// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag geometry: turn touch X coordinates into a clamped panel offset.
//!
//! The offset tracked here is the **hidden distance**: how far the panel has
//! moved from its open rest place toward its closed rest place. `0.0` is fully
//! open and `max_translate` is fully closed. The visual translation along the
//! anchored axis is `direction.sign() * offset`, and the scrim fades linearly
//! with the offset.
//!
//! ## Minimal example
//!
//! ```
//! use understory_drawer::{PanelPosition, SwipeDirection, SwipePhase, hidden_offset};
//!
//! // Left-anchored drawer, 266px of travel. The user grabbed the closed panel
//! // at x = 20 and dragged it 100px to the right.
//! let offset = hidden_offset(SwipePhase::Opening, SwipeDirection::FromLeft, 20.0, 120.0, 266.0);
//! assert_eq!(offset, 166.0);
//!
//! let position = PanelPosition::from_offset(offset, 266.0, SwipeDirection::FromLeft, false);
//! assert_eq!(position.translate, -166.0);
//! assert!(!position.transitions);
//! ```

/// The edge a drawer is anchored to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDirection {
    /// Anchored to the left edge; hiding moves the panel toward negative X.
    #[default]
    FromLeft,
    /// Anchored to the right edge; hiding moves the panel toward positive X.
    FromRight,
}

impl SwipeDirection {
    /// `-1.0` for left-anchored panels, `+1.0` for right-anchored ones.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::FromLeft => -1.0,
            Self::FromRight => 1.0,
        }
    }
}

/// Which way an in-progress swipe is heading.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipePhase {
    /// The swipe started on a closed panel.
    Opening,
    /// The swipe started on an open panel.
    Closing,
}

/// Computes the clamped hidden distance for a touch at `current_x`.
///
/// `swipe_start_x` is the X coordinate at which the gesture was recognized as a
/// horizontal swipe. The result is always within `[0, max_translate]`; a
/// negative or NaN `max_translate` counts as no travel at all.
#[must_use]
pub fn hidden_offset(
    phase: SwipePhase,
    direction: SwipeDirection,
    swipe_start_x: f64,
    current_x: f64,
    max_translate: f64,
) -> f64 {
    let max_translate = max_translate.max(0.0);
    let sign = direction.sign();
    let raw = match phase {
        SwipePhase::Closing => sign * (current_x - swipe_start_x),
        SwipePhase::Opening => max_translate - sign * (swipe_start_x - current_x),
    };
    raw.clamp(0.0, max_translate)
}

/// A visual state for the host to apply to the panel and its scrim.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelPosition {
    /// Signed translation along the X axis, in logical pixels.
    pub translate: f64,
    /// Scrim opacity in `[0, 1]`.
    pub overlay_opacity: f64,
    /// Whether the host should animate toward this position.
    ///
    /// `false` while a finger is dragging the panel so it tracks exactly.
    pub transitions: bool,
}

impl PanelPosition {
    /// Builds the position for a hidden distance of `offset`.
    #[must_use]
    pub fn from_offset(
        offset: f64,
        max_translate: f64,
        direction: SwipeDirection,
        transitions: bool,
    ) -> Self {
        Self {
            translate: direction.sign() * offset,
            overlay_opacity: 1.0 - offset / max_translate,
            transitions,
        }
    }

    /// Rest position of an open or closed panel, with transitions enabled.
    #[must_use]
    pub fn resting(open: bool, max_translate: f64, direction: SwipeDirection) -> Self {
        let offset = if open { 0.0 } else { max_translate };
        Self::from_offset(offset, max_translate, direction, true)
    }
}

/// Receives positions computed by a drawer.
///
/// Implement this on whatever owns the panel's transform and the scrim's
/// opacity, such as a DOM node or a retained scene node. Closures taking a
/// [`PanelPosition`] work too.
pub trait DrawerSurface {
    /// Applies a position to the panel and scrim.
    fn apply_position(&mut self, position: PanelPosition);
}

impl<F: FnMut(PanelPosition)> DrawerSurface for F {
    fn apply_position(&mut self, position: PanelPosition) {
        self(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: f64 = 266.0;

    #[test]
    fn closing_offset_follows_finger_toward_hidden_edge() {
        // Left drawer: dragging left hides it.
        let closing =
            |x| hidden_offset(SwipePhase::Closing, SwipeDirection::FromLeft, 200.0, x, MAX);
        assert_eq!(closing(150.0), 50.0);
        // Dragging right past the open position clamps at fully open.
        assert_eq!(closing(400.0), 0.0);
    }

    #[test]
    fn opening_offset_starts_fully_hidden() {
        let opening =
            |x| hidden_offset(SwipePhase::Opening, SwipeDirection::FromLeft, 15.0, x, MAX);
        assert_eq!(opening(15.0), MAX);
        // Dragging back toward the edge cannot exceed the closed position.
        assert_eq!(opening(-500.0), MAX);
    }

    #[test]
    fn offset_is_clamped_for_far_travel() {
        for phase in [SwipePhase::Opening, SwipePhase::Closing] {
            for direction in [SwipeDirection::FromLeft, SwipeDirection::FromRight] {
                for x in [-10_000.0, -300.0, 0.0, 133.0, 300.0, 10_000.0] {
                    let offset = hidden_offset(phase, direction, 100.0, x, MAX);
                    assert!(
                        (0.0..=MAX).contains(&offset),
                        "{phase:?} {direction:?} x={x} gave {offset}"
                    );
                }
            }
        }
    }

    #[test]
    fn degenerate_travel_yields_zero_offset() {
        for max in [-5.0, f64::NAN] {
            for phase in [SwipePhase::Opening, SwipePhase::Closing] {
                let offset = hidden_offset(phase, SwipeDirection::FromLeft, 10.0, 90.0, max);
                assert_eq!(offset, 0.0, "{phase:?} max={max}");
            }
        }
    }

    #[test]
    fn directions_mirror_each_other() {
        for phase in [SwipePhase::Opening, SwipePhase::Closing] {
            for delta in [-120.0, -30.0, 0.0, 45.0, 180.0] {
                let left =
                    hidden_offset(phase, SwipeDirection::FromLeft, 500.0, 500.0 + delta, MAX);
                let right =
                    hidden_offset(phase, SwipeDirection::FromRight, 500.0, 500.0 - delta, MAX);
                assert_eq!(left, right, "{phase:?} delta={delta}");

                let l = PanelPosition::from_offset(left, MAX, SwipeDirection::FromLeft, false);
                let r = PanelPosition::from_offset(right, MAX, SwipeDirection::FromRight, false);
                assert_eq!(l.translate, -r.translate);
                assert_eq!(l.overlay_opacity, r.overlay_opacity);
            }
        }
    }

    #[test]
    fn resting_positions() {
        let open = PanelPosition::resting(true, MAX, SwipeDirection::FromRight);
        assert_eq!(open.translate, 0.0);
        assert_eq!(open.overlay_opacity, 1.0);
        assert!(open.transitions);

        let closed = PanelPosition::resting(false, MAX, SwipeDirection::FromRight);
        assert_eq!(closed.translate, MAX);
        assert_eq!(closed.overlay_opacity, 0.0);

        let closed_left = PanelPosition::resting(false, MAX, SwipeDirection::FromLeft);
        assert_eq!(closed_left.translate, -MAX);
    }
}
