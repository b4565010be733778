// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use core::fmt;

/// Error returned when a [`DrawerConfig`](crate::DrawerConfig) cannot drive a drawer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Panel width must be finite and strictly positive.
    InvalidWidth(f64),
    /// Swipe classification threshold must be finite and non-negative.
    InvalidThreshold(f64),
    /// Overshoot margin must be finite and non-negative.
    InvalidOvershoot(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth(w) => {
                write!(f, "drawer width must be finite and positive, got {w}")
            }
            Self::InvalidThreshold(t) => {
                write!(f, "swipe threshold must be finite and non-negative, got {t}")
            }
            Self::InvalidOvershoot(o) => {
                write!(f, "overshoot must be finite and non-negative, got {o}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn display_names_the_offending_value() {
        let msg = ConfigError::InvalidWidth(-3.0).to_string();
        assert_eq!(msg, "drawer width must be finite and positive, got -3");
    }
}
