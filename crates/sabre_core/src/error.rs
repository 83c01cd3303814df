//! Error types for the circuit-IR and topology modules.

use thiserror::Error;

/// Errors raised while constructing or validating a [`crate::types::Circuit`]
/// or [`crate::types::CouplingGraph`].
///
/// These are construction-time failures only. Once a `Circuit` and
/// `CouplingGraph` are well-formed, routing itself reports failures through
/// `sabre_router::RouterError` instead.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A gate was added whose qubit index exceeds the circuit's qubit count.
    #[error("invalid qubit index {0}, circuit has {1} qubits")]
    InvalidQubit(usize, usize),

    /// A coupling-graph edge referenced a qubit index outside `[0, num_qubits)`.
    #[error("invalid physical qubit index {0}, device has {1} qubits")]
    InvalidPhysicalQubit(usize, usize),

    /// IO error while loading a coupling graph or config from disk.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for `sabre-core` operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidQubit(5, 3);
        assert!(err.to_string().contains('5'));
        assert!(err.to_string().contains('3'));
    }
}
