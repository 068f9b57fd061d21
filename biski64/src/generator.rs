//! Owning generator handle
//!
//! [`Biski64`] wraps a [`State`] for callers that prefer a mutable handle
//! over threading the state value through [`next`] by hand. Both forms
//! produce the same sequence.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. A generator rebuilt from a
//! recorded [`State`] continues exactly where the original left off.

use crate::seed::init;
use crate::state::State;
use crate::step::step;
use rand_core::{impls, Error, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Advance `state` once, yielding one output word
///
/// # Example
/// ```
/// use biski64::{init, next};
///
/// let state = init(12345);
/// let (a, after) = next(state);
/// let (b, _) = next(state);
/// assert_eq!(a, b);
/// assert_ne!(after, state);
/// ```
#[inline]
pub fn next(state: State) -> (u64, State) {
    step(state)
}

/// Advance `state` `n` times, collecting every output
///
/// Identical to calling [`next`] `n` times in a loop.
///
/// # Example
/// ```
/// use biski64::{init, next, next_n};
///
/// let (outputs, end) = next_n(init(1), 3);
///
/// let (a, s) = next(init(1));
/// let (b, s) = next(s);
/// let (c, s) = next(s);
/// assert_eq!(outputs, vec![a, b, c]);
/// assert_eq!(end, s);
/// ```
pub fn next_n(mut state: State, n: usize) -> (Vec<u64>, State) {
    let mut outputs = Vec::with_capacity(n);
    for _ in 0..n {
        outputs.push(state.advance());
    }
    (outputs, state)
}

/// Deterministic random number generator using biski64
///
/// # Example
/// ```
/// use biski64::Biski64;
///
/// let mut rng = Biski64::new(12345);
/// let value = rng.next_u64();
/// let range_value = rng.range(0, 100); // [0, 100)
/// assert!((0..100).contains(&range_value));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Biski64 {
    state: State,
    /// Number of outputs drawn since construction or restore
    draws: u64,
}

impl Biski64 {
    /// Create a new generator from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        Self::from_state(init(seed))
    }

    /// Resume from an explicit state
    ///
    /// The state is taken as-is; use [`State::from_words`] to build one with
    /// the non-degeneracy check.
    pub fn from_state(state: State) -> Self {
        Self { state, draws: 0 }
    }

    pub(crate) fn with_draws(state: State, draws: u64) -> Self {
        Self { state, draws }
    }

    /// Current state (for checkpointing/replay)
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Outputs drawn so far
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Generate next random u64 value
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.wrapping_add(1);
        self.state.advance()
    }

    /// Generate `n` values; same as calling [`Biski64::next_u64`] `n` times
    pub fn next_n(&mut self, n: usize) -> Vec<u64> {
        let (outputs, state) = next_n(self.state, n);
        self.state = state;
        self.draws = self.draws.wrapping_add(n as u64);
        outputs
    }

    /// Fill `dest` with consecutive outputs
    pub fn fill(&mut self, dest: &mut [u64]) {
        for slot in dest.iter_mut() {
            *slot = self.next_u64();
        }
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next_u64();
        let range_size = max.wrapping_sub(min) as u64;
        min.wrapping_add((value % range_size) as i64)
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Uses the top 53 bits of one output.
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }
}

impl RngCore for Biski64 {
    fn next_u32(&mut self) -> u32 {
        (Biski64::next_u64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Biski64::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Biski64 {
    /// Little-endian encoding of the 64-bit seed
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
