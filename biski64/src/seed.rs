//! Seeding
//!
//! Expands external entropy into a valid, non-degenerate [`State`].
//! A SplitMix64 splitter advances by [`GR`] and avalanches each word; the
//! words are assigned to `mix`, `slow_loop`, `fast_loop` in that order.
//! Zero words are rejected and redrawn.

use crate::error::SeedError;
use crate::state::{State, GR};
use log::debug;

/// SplitMix64 avalanche finalizer
#[inline]
pub const fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// SplitMix64 splitter used to expand a single seed word
///
/// # Example
/// ```
/// use biski64::SplitMix64;
///
/// let mut a = SplitMix64::new(42);
/// let mut b = SplitMix64::new(42);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GR);
        mix64(self.state)
    }

    /// Next word that is not zero
    ///
    /// The finalizer is a bijection, so at most one splitter position per
    /// cycle yields zero and a single redraw always succeeds.
    pub fn next_nonzero(&mut self) -> u64 {
        loop {
            let word = self.next_u64();
            if word != 0 {
                return word;
            }
            debug!("splitmix64 produced a zero word, redrawing");
        }
    }
}

/// Initialize a state from a single 64-bit seed
///
/// Every seed, including zero, yields a state with three non-zero fields.
///
/// # Example
/// ```
/// use biski64::init;
///
/// let state = init(12345);
/// assert!(!state.is_degenerate());
/// assert_eq!(state, init(12345));
/// ```
pub fn init(seed: u64) -> State {
    let mut splitter = SplitMix64::new(seed);

    let mix = splitter.next_nonzero();
    let slow_loop = splitter.next_nonzero();
    let fast_loop = splitter.next_nonzero();

    State::from_raw(fast_loop, slow_loop, mix)
}

/// Initialize a state directly from an external entropy source
///
/// Words are consumed in order and assigned to `mix`, `slow_loop`,
/// `fast_loop`. Zero words are skipped.
///
/// # Errors
/// Returns [`SeedError::InvalidSeed`] if the source is exhausted before it
/// yields three non-zero words (this covers an all-zero source).
///
/// # Example
/// ```
/// use biski64::init_from_entropy;
///
/// let state = init_from_entropy([0, 11, 22, 0, 33]).unwrap();
/// assert_eq!(state.to_words(), [33, 22, 11]);
///
/// assert!(init_from_entropy([0u64; 16]).is_err());
/// ```
pub fn init_from_entropy<I>(entropy: I) -> Result<State, SeedError>
where
    I: IntoIterator<Item = u64>,
{
    let mut words = entropy.into_iter().filter(|&word| word != 0);

    let mut take = |field: &str| {
        words.next().ok_or_else(|| {
            SeedError::invalid(format!(
                "entropy source exhausted before {} could be filled",
                field
            ))
        })
    };

    let mix = take("mix")?;
    let slow_loop = take("slow_loop")?;
    let fast_loop = take("fast_loop")?;

    Ok(State::from_raw(fast_loop, slow_loop, mix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splitmix_reference_values() {
        // First outputs of SplitMix64 seeded with zero.
        let mut splitter = SplitMix64::new(0);
        assert_eq!(splitter.next_u64(), 0xe220_a839_7b1d_cdaf);
        assert_eq!(splitter.next_u64(), 0x6e78_9e6a_a1b9_65f4);
        assert_eq!(splitter.next_u64(), 0x06c4_5d18_8009_454f);
    }

    #[test]
    fn test_init_assigns_mix_slow_fast_in_order() {
        let state = init(0);
        assert_eq!(state.mix, 0xe220_a839_7b1d_cdaf);
        assert_eq!(state.slow_loop, 0x6e78_9e6a_a1b9_65f4);
        assert_eq!(state.fast_loop, 0x06c4_5d18_8009_454f);
    }

    #[test]
    fn test_next_nonzero_skips_zero_word() {
        // mix64(0) == 0, so a splitter positioned one increment before zero
        // must skip that word.
        let mut splitter = SplitMix64::new(0u64.wrapping_sub(GR));
        let word = splitter.next_nonzero();
        assert_ne!(word, 0);
        assert_eq!(word, mix64(GR));
    }

    #[test]
    fn test_init_from_entropy_exhausted() {
        let err = init_from_entropy([5, 0, 6]).unwrap_err();
        assert_eq!(
            err,
            SeedError::InvalidSeed {
                reason: "entropy source exhausted before fast_loop could be filled".to_string()
            }
        );
    }

    #[test]
    fn test_init_from_entropy_empty() {
        assert!(init_from_entropy(std::iter::empty()).is_err());
    }
}
