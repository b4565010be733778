// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications a drawer reports back to its owner.

/// Why a drawer asked to change its open state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChangeReason {
    /// A tap on the scrim or a menu item activation.
    Clickaway,
    /// The Escape key.
    Escape,
    /// A committed swipe gesture.
    Swipe,
}

/// A notification produced by a [`Drawer`](crate::Drawer).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawerEvent {
    /// The drawer wants to be opened or closed.
    ///
    /// Uncontrolled drawers have already applied the change. Controlled drawers
    /// wait for the owner to pass the new value back in their configuration.
    ChangeRequest {
        /// Requested open state.
        open: bool,
        /// What triggered the request.
        reason: ChangeReason,
    },
    /// Legacy notification from [`Drawer::open`](crate::Drawer::open).
    Opened,
    /// Legacy notification from [`Drawer::close`](crate::Drawer::close).
    Closed,
    /// A menu item other than the selected one was activated.
    ItemSelected {
        /// Index of the activated item.
        index: usize,
    },
}

/// Result of feeding a touch event to a drawer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TouchResponse {
    /// The host should suppress the platform's default action (scrolling).
    pub prevent_default: bool,
    /// Notification produced by this event, if any.
    pub event: Option<DrawerEvent>,
}

impl TouchResponse {
    pub(crate) fn default_prevented() -> Self {
        Self {
            prevent_default: true,
            event: None,
        }
    }

    pub(crate) fn with_event(event: DrawerEvent) -> Self {
        Self {
            prevent_default: false,
            event: Some(event),
        }
    }
}

/// Keys a drawer reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The Escape key.
    Escape,
    /// Any other key.
    Other,
}
