//! Generator state
//!
//! Three 64-bit words fully determine every future output:
//!
//! - `fast_loop`: rotated and advanced by [`GR`] on every step
//! - `slow_loop`: advanced by [`GR`] once each time `fast_loop` passes zero
//! - `mix`: nonlinear accumulator fed by `fast_loop` and, once per
//!   `fast_loop` cycle, by `slow_loop`
//!
//! The counter pair `(fast_loop, slow_loop)` has period 2^128.

use crate::error::SeedError;
use serde::{Deserialize, Serialize};

/// Fractional part of the golden ratio scaled to 2^64
///
/// Used both as the counter increment and as the output multiplier.
pub const GR: u64 = 0x9e37_79b9_7f4a_7c15;

/// The 192-bit generator state
///
/// A `State` is a plain value: it is `Copy`, owned by exactly one stream and
/// replaced on every step. Two streams never share one.
///
/// # Example
/// ```
/// use biski64::State;
///
/// let state = State::from_words(1, 2, 3).unwrap();
/// assert_eq!(state.fast_loop, 1);
/// assert!(State::from_words(0, 2, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    pub fast_loop: u64,
    pub slow_loop: u64,
    pub mix: u64,
}

impl State {
    /// Build a state from three words, rejecting any zero field
    ///
    /// # Errors
    /// Returns [`SeedError::InvalidSeed`] naming the first zero field.
    pub fn from_words(fast_loop: u64, slow_loop: u64, mix: u64) -> Result<Self, SeedError> {
        let state = Self::from_raw(fast_loop, slow_loop, mix);
        state.validate()?;
        Ok(state)
    }

    /// Build a state without checking for zero fields
    ///
    /// Intended for replaying recorded states and for analysis of
    /// degenerate inputs such as the all-zero vector.
    pub const fn from_raw(fast_loop: u64, slow_loop: u64, mix: u64) -> Self {
        Self {
            fast_loop,
            slow_loop,
            mix,
        }
    }

    /// True if any field is zero
    pub const fn is_degenerate(&self) -> bool {
        self.fast_loop == 0 || self.slow_loop == 0 || self.mix == 0
    }

    /// True only for the all-zero vector
    pub const fn is_zero(&self) -> bool {
        self.fast_loop == 0 && self.slow_loop == 0 && self.mix == 0
    }

    /// Check the non-degeneracy invariant
    pub fn validate(&self) -> Result<(), SeedError> {
        let zero_field = if self.fast_loop == 0 {
            Some("fast_loop")
        } else if self.slow_loop == 0 {
            Some("slow_loop")
        } else if self.mix == 0 {
            Some("mix")
        } else {
            None
        };

        match zero_field {
            Some(field) => Err(SeedError::invalid(format!("{} is zero", field))),
            None => Ok(()),
        }
    }

    /// The words as `[fast_loop, slow_loop, mix]`
    pub const fn to_words(&self) -> [u64; 3] {
        [self.fast_loop, self.slow_loop, self.mix]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_rejects_each_zero_field() {
        for (fast, slow, mix, field) in [
            (0, 1, 1, "fast_loop"),
            (1, 0, 1, "slow_loop"),
            (1, 1, 0, "mix"),
        ] {
            let err = State::from_words(fast, slow, mix).unwrap_err();
            assert_eq!(
                err,
                SeedError::InvalidSeed {
                    reason: format!("{} is zero", field)
                }
            );
        }
    }

    #[test]
    fn test_from_raw_allows_degenerate() {
        let state = State::from_raw(0, 0, 0);
        assert!(state.is_degenerate());
        assert!(state.is_zero());
        assert!(state.validate().is_err());

        let partial = State::from_raw(0, 5, 6);
        assert!(partial.is_degenerate());
        assert!(!partial.is_zero());
    }

    #[test]
    fn test_to_words_order() {
        let state = State::from_raw(7, 8, 9);
        assert_eq!(state.to_words(), [7, 8, 9]);
    }
}
