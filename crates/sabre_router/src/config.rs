//! Tunable routing parameters, loadable from JSON the way a transpiler
//! pass would read them off a pipeline configuration file.

use crate::extended_set::EXTENDED_SET_SIZE;
use crate::scorer::{Heuristic, LOOKAHEAD_WEIGHT};
use serde::{Deserialize, Serialize};

/// Per-swap decay increment applied on a non-reset step.
pub const DECAY_RATE: f64 = 0.001;

/// Number of SWAP steps between unconditional decay resets.
pub const DECAY_RESET_INTERVAL: u32 = 5;

/// Configuration for a [`crate::router::Router`].
///
/// Defaults reproduce the constants fixed by the routing spec exactly;
/// fields exist so a host pipeline can tune them per device without
/// recompiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Which of the three scoring variants to use.
    pub heuristic: Heuristic,
    /// Extended-set capacity.
    pub extended_set_size: usize,
    /// Weight of the extended-set term in the lookahead heuristic.
    pub lookahead_weight: f64,
    /// Per-swap decay increment.
    pub decay_rate: f64,
    /// Steps between unconditional decay resets.
    pub decay_reset_interval: u32,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Decay,
            extended_set_size: EXTENDED_SET_SIZE,
            lookahead_weight: LOOKAHEAD_WEIGHT,
            decay_rate: DECAY_RATE,
            decay_reset_interval: DECAY_RESET_INTERVAL,
        }
    }
}

impl RouterConfig {
    /// Loads a `RouterConfig` from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serializes this configuration to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_spec_constants() {
        let config = RouterConfig::default();
        assert_eq!(config.extended_set_size, 20);
        assert_eq!(config.decay_rate, 0.001);
        assert_eq!(config.decay_reset_interval, 5);
        assert_eq!(config.heuristic, Heuristic::Decay);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = RouterConfig {
            heuristic: Heuristic::Basic,
            ..RouterConfig::default()
        };
        let json = config.to_json().unwrap();
        let parsed = RouterConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
