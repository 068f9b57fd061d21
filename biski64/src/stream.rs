//! Parallel stream partitioning
//!
//! Two ways to derive many streams from one seed:
//!
//! - [`Partition::Independent`]: every field of every stream comes from its
//!   own splitter. Overlap between streams is possible only with
//!   probability on the order of 2^-192.
//! - [`Partition::Deterministic`]: `fast_loop` and `mix` come from the
//!   stream's splitter, `slow_loop` is assigned per stream as
//!   `1 + index * floor(2^64 / count)`.
//!   Since `slow_loop` only moves once every 2^64 steps, streams never share
//!   a counter position within any realistic run.
//!
//! Each stream owns its state, so streams can be advanced on separate
//! threads with no synchronization.

use crate::error::SeedError;
use crate::generator::Biski64;
use crate::seed::{mix64, SplitMix64};
use crate::state::State;
use log::trace;
use serde::{Deserialize, Serialize};

/// Stream construction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    /// Seed all three fields independently per stream
    Independent,
    /// Seed `fast_loop` and `mix`, space `slow_loop` evenly across streams
    #[default]
    Deterministic,
}

/// Distance between consecutive `slow_loop` values for `count` streams
///
/// `floor(2^64 / count)`. For `count == 1` the true spacing (2^64) does not
/// fit in a `u64`; only stream 0 exists and this returns 0.
///
/// # Errors
/// Returns [`SeedError::ZeroStreamCount`] if `count == 0`.
pub fn stream_spacing(count: u64) -> Result<u64, SeedError> {
    if count == 0 {
        return Err(SeedError::ZeroStreamCount);
    }
    Ok(spacing_for(count))
}

fn spacing_for(count: u64) -> u64 {
    match count {
        // Zero has no streams; one stream only ever uses index 0.
        0 | 1 => 0,
        // 2^64 = u64::MAX + 1, so the quotient gains one exactly when
        // count divides 2^64.
        _ => u64::MAX / count + u64::from(u64::MAX % count == count - 1),
    }
}

fn check_index(index: u64, count: u64) -> Result<(), SeedError> {
    if count == 0 {
        return Err(SeedError::ZeroStreamCount);
    }
    if index >= count {
        return Err(SeedError::StreamIndexOutOfRange { index, count });
    }
    Ok(())
}

/// Initialize a deterministically partitioned stream
///
/// `fast_loop` and `mix` are drawn as in [`init_independent_stream`];
/// `slow_loop` is `1 + index * floor(2^64 / count)`. The offset of one
/// keeps stream 0 away from zero and the product never wraps for
/// `index < count`.
///
/// # Errors
/// Returns an error if `count == 0` or `index >= count`.
///
/// # Example
/// ```
/// use biski64::init_stream;
///
/// let a = init_stream(7, 0, 4).unwrap();
/// let b = init_stream(7, 1, 4).unwrap();
/// assert_eq!(a.slow_loop, 1);
/// assert_eq!(b.slow_loop - a.slow_loop, 1 << 62);
/// assert!(init_stream(7, 4, 4).is_err());
/// ```
pub fn init_stream(seed: u64, index: u64, count: u64) -> Result<State, SeedError> {
    check_index(index, count)?;
    Ok(deterministic_stream(seed, index, count))
}

/// `index < count` and `count > 0` are the caller's responsibility
fn deterministic_stream(seed: u64, index: u64, count: u64) -> State {
    let base = init_independent_stream(seed, index);
    let spacing = spacing_for(count);
    // index * spacing <= 2^64 - spacing, and spacing >= 1 for count >= 2.
    let slow_loop = index * spacing + 1;

    trace!(
        "deterministic stream {}/{}: slow_loop={:#018x}",
        index,
        count,
        slow_loop
    );

    State::from_raw(base.fast_loop, slow_loop, base.mix)
}

/// Initialize an independently seeded stream
///
/// The stream's splitter is keyed by `mix64(seed ^ mix64(index))`, so
/// distinct indices start from unrelated splitter positions.
///
/// # Example
/// ```
/// use biski64::init_independent_stream;
///
/// let a = init_independent_stream(7, 0);
/// let b = init_independent_stream(7, 1);
/// assert_ne!(a, b);
/// ```
pub fn init_independent_stream(seed: u64, index: u64) -> State {
    let key = mix64(seed ^ mix64(index));
    let mut splitter = SplitMix64::new(key);

    let mix = splitter.next_nonzero();
    let slow_loop = splitter.next_nonzero();
    let fast_loop = splitter.next_nonzero();

    trace!("independent stream {}: key={:#018x}", index, key);

    State::from_raw(fast_loop, slow_loop, mix)
}

/// Builds the streams of one seed under one partitioning mode
///
/// # Example
/// ```
/// use biski64::{Partition, StreamPartitioner};
///
/// let partitioner = StreamPartitioner::new(42, 8, Partition::Deterministic).unwrap();
/// let mut streams = partitioner.streams();
/// assert_eq!(streams.len(), 8);
///
/// let first = streams[0].next_u64();
/// let second = streams[1].next_u64();
/// assert_ne!(first, second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamPartitioner {
    seed: u64,
    count: u64,
    partition: Partition,
}

impl StreamPartitioner {
    /// # Errors
    /// Returns [`SeedError::ZeroStreamCount`] if `count == 0`.
    pub fn new(seed: u64, count: u64, partition: Partition) -> Result<Self, SeedError> {
        if count == 0 {
            return Err(SeedError::ZeroStreamCount);
        }
        Ok(Self {
            seed,
            count,
            partition,
        })
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn partition(&self) -> Partition {
        self.partition
    }

    /// Initial state of stream `index`
    pub fn state(&self, index: u64) -> Result<State, SeedError> {
        check_index(index, self.count)?;
        Ok(self.state_in_range(index))
    }

    fn state_in_range(&self, index: u64) -> State {
        match self.partition {
            Partition::Deterministic => deterministic_stream(self.seed, index, self.count),
            Partition::Independent => init_independent_stream(self.seed, index),
        }
    }

    /// Generator for stream `index`
    pub fn stream(&self, index: u64) -> Result<Biski64, SeedError> {
        self.state(index).map(Biski64::from_state)
    }

    /// Generators for every stream, in index order
    pub fn streams(&self) -> Vec<Biski64> {
        (0..self.count)
            .map(|index| Biski64::from_state(self.state_in_range(index)))
            .collect()
    }
}
