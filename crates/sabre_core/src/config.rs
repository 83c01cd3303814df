//! Configuration for building circuit and device inputs from JSON.

use crate::types::Topology;
use serde::{Deserialize, Serialize};

/// Describes a hardware device to build a [`crate::types::CouplingGraph`] from,
/// the way a transpiler frontend would read it off a backend descriptor file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Device name, carried into the built `CouplingGraph`.
    pub name: String,
    /// Number of physical qubits.
    pub num_qubits: usize,
    /// Topology to generate the coupling edges from.
    pub topology: Topology,
    /// Explicit edge list, used only when `topology` is `Topology::Custom`.
    #[serde(default)]
    pub edges: Vec<(usize, usize)>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            num_qubits: 5,
            topology: Topology::Linear,
            edges: Vec::new(),
        }
    }
}

impl DeviceConfig {
    /// Loads a `DeviceConfig` from a JSON string.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Serializes this configuration to a JSON string.
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}
