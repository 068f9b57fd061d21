//! Checkpoint - Save/Restore Generator Position
//!
//! A generator's position is its [`State`]; saving it and restoring later
//! continues the exact same output sequence.
//!
//! The JSON snapshot is a convenience format layered on top of the
//! generator; the generator itself has no persisted representation and
//! nothing in `state`, `step`, `seed` or `stream` depends on it.
//!
//! # Critical Invariants
//!
//! - **Determinism**: A restored generator yields the outputs the original
//!   would have yielded next
//! - **Reachability**: Any state a running generator can hold is accepted,
//!   including ones with `fast_loop`, `slow_loop` or `mix` at zero
//! - **Non-degeneracy**: Only the all-zero vector with no draws recorded is
//!   rejected, since seeding never produces it
//! - **Config Matching**: A snapshot can only be restored with the config
//!   that produced it

use crate::config::GeneratorConfig;
use crate::generator::Biski64;
use crate::state::State;
use log::warn;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors raised while saving or restoring a snapshot
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config mismatch: snapshot was taken with config {expected}, restoring with {actual}")]
    ConfigMismatch { expected: String, actual: String },

    #[error("Snapshot holds the all-zero state with no draws recorded")]
    DegenerateState,
}

/// Generator position snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// Full generator state at time of snapshot
    pub state: State,

    /// Outputs drawn before the snapshot
    pub draws: u64,

    /// SHA256 hash of the config (for validation)
    pub config_hash: String,
}

impl GeneratorSnapshot {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Compute deterministic SHA256 hash of config
///
/// Uses canonical JSON serialization with sorted keys, so field order never
/// affects the hash.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, CheckpointError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let canonical_value = canonicalize(serde_json::to_value(config)?);
    let json = serde_json::to_string(&canonical_value)?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}

impl Biski64 {
    /// Capture the current position
    ///
    /// # Example
    /// ```
    /// use biski64::{Biski64, GeneratorConfig};
    ///
    /// let config = GeneratorConfig::new(12345);
    /// let mut rng = Biski64::new(config.seed);
    /// rng.next_n(100);
    ///
    /// let snapshot = rng.snapshot(&config).unwrap();
    /// let mut restored = Biski64::restore(&snapshot, &config).unwrap();
    /// assert_eq!(rng.next_u64(), restored.next_u64());
    /// ```
    pub fn snapshot(&self, config: &GeneratorConfig) -> Result<GeneratorSnapshot, CheckpointError> {
        Ok(GeneratorSnapshot {
            state: *self.state(),
            draws: self.draws(),
            config_hash: compute_config_hash(config)?,
        })
    }

    /// Rebuild a generator from a snapshot
    ///
    /// # Errors
    /// Returns [`CheckpointError::ConfigMismatch`] if `config` does not hash
    /// to the snapshot's config hash, and
    /// [`CheckpointError::DegenerateState`] for the all-zero vector when no
    /// draws were recorded. Zero fields reached mid-run are accepted.
    pub fn restore(
        snapshot: &GeneratorSnapshot,
        config: &GeneratorConfig,
    ) -> Result<Self, CheckpointError> {
        let actual = compute_config_hash(config)?;
        if actual != snapshot.config_hash {
            warn!(
                "rejecting snapshot: config hash {} does not match {}",
                actual, snapshot.config_hash
            );
            return Err(CheckpointError::ConfigMismatch {
                expected: snapshot.config_hash.clone(),
                actual,
            });
        }

        if snapshot.draws == 0 && snapshot.state.is_zero() {
            warn!("rejecting snapshot: all-zero state with no draws recorded");
            return Err(CheckpointError::DegenerateState);
        }

        Ok(Biski64::with_draws(snapshot.state, snapshot.draws))
    }
}
