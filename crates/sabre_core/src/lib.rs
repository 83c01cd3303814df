//! # sabre-core
//!
//! The circuit-IR and topology layer that a SABRE-style routing pass treats
//! as an external collaborator: gate/circuit representation, a dependency
//! DAG built from a circuit, and a hardware coupling graph with precomputed
//! all-pairs shortest-path distances.
//!
//! This crate provides:
//! - `Gate`: the operation descriptor routed by `sabre_router`.
//! - `Circuit`: an ordered gate sequence plus name/register metadata.
//! - `Dag`: a node arena with predecessor/successor adjacency and a
//!   BFS-successor cursor, built once from a `Circuit`.
//! - `CouplingGraph`: adjacency plus distance matrix for a physical device.
//! - `CoreError`: construction-time failures for the above.
//!
//! ## Example
//!
//! ```rust
//! use sabre_core::prelude::*;
//!
//! let mut circuit = Circuit::new("bell", 2);
//! circuit.add_gate(Gate::H(0)).unwrap();
//! circuit.add_gate(Gate::CNOT(0, 1)).unwrap();
//!
//! let dag = Dag::build(&circuit);
//! assert_eq!(dag.num_nodes(), 2);
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{Circuit, CircuitMetadata, CouplingGraph, Dag, Gate, Topology};
