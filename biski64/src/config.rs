//! Generator configuration
//!
//! Serde-loadable description of a set of generator streams. Hashing this
//! config (see [`crate::checkpoint::compute_config_hash`]) ties snapshots
//! to the configuration that produced them.

use crate::error::SeedError;
use crate::generator::Biski64;
use crate::stream::{Partition, StreamPartitioner};
use serde::{Deserialize, Serialize};

fn default_streams() -> u64 {
    1
}

/// Configuration for one or more generator streams
///
/// # Example
/// ```
/// use biski64::{GeneratorConfig, Partition};
///
/// let config = GeneratorConfig::from_json(r#"{ "seed": 42, "streams": 4 }"#).unwrap();
/// assert_eq!(config.partition, Partition::Deterministic);
///
/// let generators = config.build().unwrap();
/// assert_eq!(generators.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seed material shared by every stream
    pub seed: u64,

    /// Number of streams to build
    #[serde(default = "default_streams")]
    pub streams: u64,

    /// How streams are separated
    #[serde(default)]
    pub partition: Partition,
}

impl GeneratorConfig {
    /// Single deterministic stream for `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            streams: default_streams(),
            partition: Partition::default(),
        }
    }

    pub fn with_streams(mut self, streams: u64, partition: Partition) -> Self {
        self.streams = streams;
        self.partition = partition;
        self
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn partitioner(&self) -> Result<StreamPartitioner, SeedError> {
        StreamPartitioner::new(self.seed, self.streams, self.partition)
    }

    /// Build every configured stream, in index order
    ///
    /// # Errors
    /// Returns [`SeedError::ZeroStreamCount`] if `streams == 0`.
    pub fn build(&self) -> Result<Vec<Biski64>, SeedError> {
        Ok(self.partitioner()?.streams())
    }
}
