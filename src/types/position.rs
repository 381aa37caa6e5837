// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Slide position for curtains and blind tilts.

use std::fmt;

/// Slide position as a percentage (0-100).
///
/// For curtains 0 means fully open and 100 fully closed. Construction
/// clamps out-of-range input instead of failing.
///
/// # Examples
///
/// ```
/// use switchbot_lib::types::SlidePosition;
///
/// assert_eq!(SlidePosition::clamped(150).value(), 100);
/// assert_eq!(SlidePosition::clamped(-5).value(), 0);
/// assert_eq!(SlidePosition::clamped(42).value(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SlidePosition(u8);

impl SlidePosition {
    /// Fully open (0%).
    pub const MIN: Self = Self(0);

    /// Fully closed (100%).
    pub const MAX: Self = Self(100);

    /// Creates a position, clamping to 0-100.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn clamped(value: i64) -> Self {
        if value < 0 {
            Self::MIN
        } else if value > 100 {
            Self::MAX
        } else {
            // In range, so the cast is lossless.
            Self(value as u8)
        }
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for SlidePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for SlidePosition {
    fn from(value: u8) -> Self {
        Self::clamped(i64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_both_ends() {
        assert_eq!(SlidePosition::clamped(i64::MIN), SlidePosition::MIN);
        assert_eq!(SlidePosition::clamped(i64::MAX), SlidePosition::MAX);
        assert_eq!(SlidePosition::clamped(101).value(), 100);
        assert_eq!(SlidePosition::clamped(-1).value(), 0);
    }

    #[test]
    fn keeps_in_range_values() {
        for v in 0..=100 {
            assert_eq!(i64::from(SlidePosition::clamped(v).value()), v);
        }
    }

    #[test]
    fn from_u8_clamps() {
        assert_eq!(SlidePosition::from(200).value(), 100);
    }
}
