//! Core type definitions: gates, circuits, the dependency DAG, and coupling
//! graphs.

mod circuit;
mod coupling_graph;
mod dag;
mod gate;

pub use circuit::{Circuit, CircuitMetadata, ClassicalCondition, RegisterTable};
pub use coupling_graph::{CouplingGraph, Topology};
pub use dag::{BfsSuccessors, Dag, DagNode, NodeId};
pub use gate::Gate;
