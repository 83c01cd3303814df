//! Errors the routing core can raise.

use thiserror::Error;

/// Failures the router surfaces to its caller. All are fatal — the core
/// never retries internally.
#[derive(Error, Debug)]
pub enum RouterError {
    /// A front-layer node has more than two logical qargs.
    #[error("node {node} has arity {arity}, routing supports at most 2 logical qargs")]
    InvalidArity {
        /// Offending node id.
        node: usize,
        /// Its arity.
        arity: usize,
    },

    /// No SWAP can reduce the distance between two logical qubits because
    /// they live in disconnected components of the coupling graph.
    #[error(
        "logical qubits {logical_a} and {logical_b} are in disconnected \
         components of the coupling graph"
    )]
    DisconnectedCoupling {
        /// First logical qubit.
        logical_a: usize,
        /// Second logical qubit.
        logical_b: usize,
    },

    /// The front layer is nonempty, no gate is executable, and no SWAP
    /// candidate was generated.
    #[error("front layer is nonempty but no swap candidates were generated")]
    EmptySwapCandidates,

    /// The bidirectional logical/physical mapping failed its own
    /// consistency check. Indicates a bug in the router, not bad input.
    #[error("layout invariant violated: {0}")]
    LayoutInvariantViolation(String),
}

/// Result type alias for `sabre-router` operations.
pub type Result<T> = std::result::Result<T, RouterError>;
