//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust
//! use sabre_core::prelude::*;
//! ```

pub use crate::config::DeviceConfig;
pub use crate::error::{CoreError, Result};
pub use crate::types::{
    BfsSuccessors, Circuit, CircuitMetadata, ClassicalCondition, CouplingGraph, Dag, DagNode,
    Gate, NodeId, RegisterTable, Topology,
};
