//! biski64 - Generator Core
//!
//! Fast, non-cryptographic pseudo-random number generator with a 192-bit
//! state and deterministic, replayable output streams.
//!
//! # Architecture
//!
//! - **state**: The owned `(fast_loop, slow_loop, mix)` record
//! - **step**: Pure state transition and output function
//! - **seed**: SplitMix64 expansion of external entropy into a valid state
//! - **stream**: Parallel stream partitioning (independent / deterministic)
//! - **generator**: Owning `Biski64` handle and `rand_core` interop
//! - **config**: Serde-loadable generator configuration
//! - **checkpoint**: Save/restore of generator position
//!
//! # Critical Invariants
//!
//! 1. All arithmetic is wrapping modulo 2^64
//! 2. Same state produces the same output sequence, bit for bit
//! 3. Seeding never yields a state with a zero field
//! 4. No global state: every stream owns its `State`

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod error;
pub mod generator;
pub mod seed;
pub mod state;
pub mod step;
pub mod stream;

// Re-exports for convenience
pub use checkpoint::{compute_config_hash, CheckpointError, GeneratorSnapshot};
pub use config::GeneratorConfig;
pub use error::SeedError;
pub use generator::{next, next_n, Biski64};
pub use seed::{init, init_from_entropy, SplitMix64};
pub use state::{State, GR};
pub use step::{rotate_left, step};
pub use stream::{
    init_independent_stream, init_stream, stream_spacing, Partition, StreamPartitioner,
};
