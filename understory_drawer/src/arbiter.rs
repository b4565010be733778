// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe-to-open arbitration between drawers sharing one document.
//!
//! When several overlay drawers are mounted, a single touch near an edge must
//! not slide all of them open. [`SwipeArbiter`] is a single-slot registry: the
//! first overlay drawer to claim it owns swipe-to-open until it docks or is
//! torn down. Closing swipes need no arbitration.
//!
//! ## Minimal example
//!
//! ```
//! use understory_drawer::SwipeArbiter;
//!
//! let arbiter = SwipeArbiter::new();
//! let a = arbiter.allocate_id();
//! let b = arbiter.allocate_id();
//!
//! assert!(arbiter.claim(a));
//! assert!(!arbiter.claim(b));
//!
//! // Releasing a slot you do not own is a no-op.
//! assert!(!arbiter.release(b));
//! assert!(arbiter.release(a));
//! assert_eq!(arbiter.owner(), None);
//! ```

use core::cell::Cell;

/// Identifies one drawer within a [`SwipeArbiter`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawerId(u64);

impl DrawerId {
    /// Returns the raw id value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Single-owner registry deciding which drawer may be swiped open.
///
/// Share it between drawers with an `Rc`. It is not `Sync`; touch handling is
/// single-threaded.
#[derive(Debug, Default)]
pub struct SwipeArbiter {
    owner: Cell<Option<DrawerId>>,
    next_id: Cell<u64>,
}

impl SwipeArbiter {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out a fresh id, unique within this registry.
    pub fn allocate_id(&self) -> DrawerId {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        DrawerId(id)
    }

    /// Claims the slot for `id` if it is empty.
    ///
    /// Returns `true` when `id` owns the slot afterwards.
    pub fn claim(&self, id: DrawerId) -> bool {
        match self.owner.get() {
            None => {
                self.owner.set(Some(id));
                log::debug!("drawer {} claimed swipe-to-open", id.0);
                true
            }
            Some(owner) => owner == id,
        }
    }

    /// Clears the slot if `id` owns it.
    ///
    /// Returns `true` when the slot was released.
    pub fn release(&self, id: DrawerId) -> bool {
        if self.owner.get() == Some(id) {
            self.owner.set(None);
            log::debug!("drawer {} released swipe-to-open", id.0);
            true
        } else {
            false
        }
    }

    /// Returns the current owner, if any.
    #[must_use]
    pub fn owner(&self) -> Option<DrawerId> {
        self.owner.get()
    }

    /// Returns `true` if `id` owns the slot.
    #[must_use]
    pub fn is_owner(&self, id: DrawerId) -> bool {
        self.owner.get() == Some(id)
    }

    /// Empties the slot regardless of owner.
    pub fn reset(&self) {
        self.owner.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct() {
        let arbiter = SwipeArbiter::new();
        let a = arbiter.allocate_id();
        let b = arbiter.allocate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn first_claim_wins_and_reclaim_is_idempotent() {
        let arbiter = SwipeArbiter::new();
        let a = arbiter.allocate_id();
        let b = arbiter.allocate_id();

        assert!(arbiter.claim(a));
        assert!(arbiter.claim(a));
        assert!(!arbiter.claim(b));
        assert!(arbiter.is_owner(a));
        assert!(!arbiter.is_owner(b));
    }

    #[test]
    fn slot_is_reusable_after_release() {
        let arbiter = SwipeArbiter::new();
        let a = arbiter.allocate_id();
        let b = arbiter.allocate_id();

        arbiter.claim(a);
        assert!(arbiter.release(a));
        assert!(!arbiter.release(a));
        assert!(arbiter.claim(b));
        assert_eq!(arbiter.owner(), Some(b));
    }

    #[test]
    fn reset_clears_owner() {
        let arbiter = SwipeArbiter::new();
        let a = arbiter.allocate_id();
        arbiter.claim(a);
        arbiter.reset();
        assert_eq!(arbiter.owner(), None);
    }
}
