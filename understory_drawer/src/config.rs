// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer configuration: the values a host passes down on every update.
//!
//! ## Minimal example
//!
//! ```
//! use understory_drawer::{DrawerConfig, SwipeDirection};
//!
//! let config = DrawerConfig::default()
//!     .with_docked(false)
//!     .with_open_right(true)
//!     .with_width(300.0);
//!
//! assert_eq!(config.direction(), SwipeDirection::FromRight);
//! assert_eq!(config.max_translate(), 310.0);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::ConfigError;
use crate::position::SwipeDirection;

/// Default panel width in logical pixels.
pub const DEFAULT_WIDTH: f64 = 256.0;

/// Default distance a touch must travel along one axis before it is classified.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 10.0;

/// Default extra distance past the panel width so a closed panel fully clears the view.
pub const DEFAULT_OVERSHOOT: f64 = 10.0;

/// Host-provided drawer properties.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DrawerConfig {
    /// Whether the panel is permanently visible and takes layout space.
    ///
    /// Docked panels never react to touch.
    pub docked: bool,
    /// Whether the panel is anchored to the right edge.
    pub open_right: bool,
    /// Disables swipe-to-open; open panels can still be swiped closed.
    pub disable_swipe_to_open: bool,
    /// Controlled open state.
    ///
    /// When `Some`, the drawer mirrors this value and only reports change
    /// requests; the owner decides whether to apply them.
    pub open: Option<bool>,
    /// Panel width in logical pixels.
    pub width: f64,
    /// Classification threshold for telling swipes from scrolls.
    pub swipe_threshold: f64,
    /// Margin added to [`width`](Self::width) to compute the travel distance.
    pub overshoot: f64,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            docked: true,
            open_right: false,
            disable_swipe_to_open: false,
            open: None,
            width: DEFAULT_WIDTH,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            overshoot: DEFAULT_OVERSHOOT,
        }
    }
}

impl DrawerConfig {
    /// Returns an overlay (non-docked) configuration with default values otherwise.
    #[must_use]
    pub fn overlay() -> Self {
        Self {
            docked: false,
            ..Self::default()
        }
    }

    /// Sets [`docked`](Self::docked).
    #[must_use]
    pub fn with_docked(mut self, docked: bool) -> Self {
        self.docked = docked;
        self
    }

    /// Sets [`open_right`](Self::open_right).
    #[must_use]
    pub fn with_open_right(mut self, open_right: bool) -> Self {
        self.open_right = open_right;
        self
    }

    /// Sets [`disable_swipe_to_open`](Self::disable_swipe_to_open).
    #[must_use]
    pub fn with_disable_swipe_to_open(mut self, disable: bool) -> Self {
        self.disable_swipe_to_open = disable;
        self
    }

    /// Sets the controlled open value; `None` makes the drawer uncontrolled.
    #[must_use]
    pub fn with_open(mut self, open: Option<bool>) -> Self {
        self.open = open;
        self
    }

    /// Sets [`width`](Self::width).
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets [`swipe_threshold`](Self::swipe_threshold).
    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    /// Sets [`overshoot`](Self::overshoot).
    #[must_use]
    pub fn with_overshoot(mut self, overshoot: f64) -> Self {
        self.overshoot = overshoot;
        self
    }

    /// Returns `true` when an external open value is in charge.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.open.is_some()
    }

    /// Returns the edge the panel slides in from.
    #[must_use]
    pub fn direction(&self) -> SwipeDirection {
        if self.open_right {
            SwipeDirection::FromRight
        } else {
            SwipeDirection::FromLeft
        }
    }

    /// Full travel distance between the open and closed rest positions.
    #[must_use]
    pub fn max_translate(&self) -> f64 {
        self.width + self.overshoot
    }

    /// Checks that the geometry values can drive a drawer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.swipe_threshold));
        }
        if !self.overshoot.is_finite() || self.overshoot < 0.0 {
            return Err(ConfigError::InvalidOvershoot(self.overshoot));
        }
        Ok(())
    }
}
