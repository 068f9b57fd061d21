//! State transition and output function
//!
//! # Algorithm
//!
//! Evaluated in this order on every call:
//!
//! 1. `output = GR * (mix + fast_loop)` from the pre-update state
//! 2. if `fast_loop == 0`: `slow_loop += GR`, then `mix ^= slow_loop`
//! 3. `mix = rotl(mix, 59) + fast_loop`
//! 4. `fast_loop = rotl(fast_loop, 47) + GR`
//!
//! All additions and the multiplication wrap modulo 2^64.
//!
//! # Injectivity
//!
//! The construction is not proven injective everywhere: a formal search
//! found a counterexample around the `0x5050a1e1d03b6432` region. The
//! recurrence here is the published one and is not patched around it, so
//! callers needing strict bijectivity must not rely on it.

use crate::state::{State, GR};

/// Rotation applied to `mix` on every step
pub const MIX_ROTATION: u32 = 59;

/// Rotation applied to `fast_loop` on every step
pub const FAST_LOOP_ROTATION: u32 = 47;

/// 64-bit circular left rotation
///
/// Equivalent to `(x << k) | (x >> (64 - k))` for `k` in `[1, 63]`; `k` is
/// taken modulo 64.
///
/// # Example
/// ```
/// use biski64::rotate_left;
///
/// assert_eq!(rotate_left(0x8000_0000_0000_0001, 1), 0x3);
/// ```
#[inline(always)]
pub const fn rotate_left(x: u64, k: u32) -> u64 {
    x.rotate_left(k)
}

/// Advance one step, returning the output and the successor state
///
/// Pure: the same input always yields the same `(output, next_state)`.
///
/// # Example
/// ```
/// use biski64::{step, State, GR};
///
/// let state = State::from_raw(0, 1, 2);
/// let (output, next) = step(state);
///
/// assert_eq!(output, GR.wrapping_mul(2));
/// assert_eq!(next.slow_loop, 1u64.wrapping_add(GR));
/// assert_eq!(next.fast_loop, GR);
/// ```
#[inline(always)]
pub fn step(state: State) -> (u64, State) {
    let State {
        mut fast_loop,
        mut slow_loop,
        mut mix,
    } = state;

    let output = GR.wrapping_mul(mix.wrapping_add(fast_loop));

    if fast_loop == 0 {
        slow_loop = slow_loop.wrapping_add(GR);
        mix ^= slow_loop;
    }

    mix = rotate_left(mix, MIX_ROTATION).wrapping_add(fast_loop);
    fast_loop = rotate_left(fast_loop, FAST_LOOP_ROTATION).wrapping_add(GR);

    (
        output,
        State {
            fast_loop,
            slow_loop,
            mix,
        },
    )
}

impl State {
    /// Advance in place and return the output word
    #[inline(always)]
    pub fn advance(&mut self) -> u64 {
        let (output, next) = step(*self);
        *self = next;
        output
    }
}
