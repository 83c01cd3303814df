//! Quantum gate definitions.
//!
//! The routing core only cares about a gate's qubit arity and identity —
//! never its unitary semantics — so this type carries no matrix
//! representation, commutativity analysis, or inverse computation.

use serde::{Deserialize, Serialize};

/// Quantum gate enumeration.
///
/// Supports 12 gate types:
/// - Single-qubit: H, X, Y, Z, S, T, Rx, Ry, Rz
/// - Two-qubit: CNOT, CZ, SWAP
/// - Measurement: Measure
///
/// # Example
///
/// ```
/// use sabre_core::prelude::*;
///
/// let h = Gate::H(0);
/// let cnot = Gate::CNOT(0, 1);
/// assert_eq!(h.qubits(), vec![0]);
/// assert_eq!(cnot.qubits(), vec![0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    // Single-qubit gates (Clifford)
    /// Hadamard gate
    H(usize),
    /// Pauli-X (NOT) gate
    X(usize),
    /// Pauli-Y gate
    Y(usize),
    /// Pauli-Z gate
    Z(usize),
    /// S gate (√Z, phase gate)
    S(usize),
    /// T gate (π/8 gate)
    T(usize),

    // Single-qubit rotation gates
    /// Rotation around X-axis by angle θ
    Rx(usize, f64),
    /// Rotation around Y-axis by angle θ
    Ry(usize, f64),
    /// Rotation around Z-axis by angle θ
    Rz(usize, f64),

    // Two-qubit gates
    /// Controlled-NOT gate (control, target)
    CNOT(usize, usize),
    /// Controlled-Z gate
    CZ(usize, usize),
    /// SWAP gate
    SWAP(usize, usize),

    // Measurement
    /// Measurement in computational basis
    Measure(usize),
}

impl Gate {
    /// Returns the qubit indices this gate operates on.
    ///
    /// For single-qubit gates, returns a single-element vector.
    /// For two-qubit gates, returns [control, target] or [qubit1, qubit2].
    pub fn qubits(&self) -> Vec<usize> {
        match self {
            Gate::H(q)
            | Gate::X(q)
            | Gate::Y(q)
            | Gate::Z(q)
            | Gate::S(q)
            | Gate::T(q)
            | Gate::Rx(q, _)
            | Gate::Ry(q, _)
            | Gate::Rz(q, _)
            | Gate::Measure(q) => vec![*q],
            Gate::CNOT(c, t) | Gate::CZ(c, t) | Gate::SWAP(c, t) => vec![*c, *t],
        }
    }

    /// Returns true if this is a single-qubit gate.
    pub fn is_single_qubit(&self) -> bool {
        matches!(
            self,
            Gate::H(_)
                | Gate::X(_)
                | Gate::Y(_)
                | Gate::Z(_)
                | Gate::S(_)
                | Gate::T(_)
                | Gate::Rx(_, _)
                | Gate::Ry(_, _)
                | Gate::Rz(_, _)
        )
    }

    /// Returns true if this is a two-qubit gate.
    pub fn is_two_qubit(&self) -> bool {
        matches!(self, Gate::CNOT(_, _) | Gate::CZ(_, _) | Gate::SWAP(_, _))
    }

    /// Returns true if this is a measurement operation.
    pub fn is_measurement(&self) -> bool {
        matches!(self, Gate::Measure(_))
    }

    /// Remaps the qubits of the gate using the provided mapping.
    /// mapping[old_qubit_index] = new_qubit_index
    pub fn map_qubits(&self, mapping: &[usize]) -> Gate {
        match self {
            Gate::H(q) => Gate::H(mapping[*q]),
            Gate::X(q) => Gate::X(mapping[*q]),
            Gate::Y(q) => Gate::Y(mapping[*q]),
            Gate::Z(q) => Gate::Z(mapping[*q]),
            Gate::S(q) => Gate::S(mapping[*q]),
            Gate::T(q) => Gate::T(mapping[*q]),
            Gate::Rx(q, theta) => Gate::Rx(mapping[*q], *theta),
            Gate::Ry(q, theta) => Gate::Ry(mapping[*q], *theta),
            Gate::Rz(q, theta) => Gate::Rz(mapping[*q], *theta),
            Gate::CNOT(c, t) => Gate::CNOT(mapping[*c], mapping[*t]),
            Gate::CZ(c, t) => Gate::CZ(mapping[*c], mapping[*t]),
            Gate::SWAP(a, b) => Gate::SWAP(mapping[*a], mapping[*b]),
            Gate::Measure(q) => Gate::Measure(mapping[*q]),
        }
    }
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gate::H(q) => write!(f, "H({})", q),
            Gate::X(q) => write!(f, "X({})", q),
            Gate::Y(q) => write!(f, "Y({})", q),
            Gate::Z(q) => write!(f, "Z({})", q),
            Gate::S(q) => write!(f, "S({})", q),
            Gate::T(q) => write!(f, "T({})", q),
            Gate::Rx(q, theta) => write!(f, "Rx({}, {:.4})", q, theta),
            Gate::Ry(q, theta) => write!(f, "Ry({}, {:.4})", q, theta),
            Gate::Rz(q, theta) => write!(f, "Rz({}, {:.4})", q, theta),
            Gate::CNOT(c, t) => write!(f, "CNOT({}, {})", c, t),
            Gate::CZ(c, t) => write!(f, "CZ({}, {})", c, t),
            Gate::SWAP(a, b) => write!(f, "SWAP({}, {})", a, b),
            Gate::Measure(q) => write!(f, "Measure({})", q),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_qubits() {
        assert_eq!(Gate::H(0).qubits(), vec![0]);
        assert_eq!(Gate::CNOT(0, 1).qubits(), vec![0, 1]);
        assert_eq!(Gate::SWAP(2, 5).qubits(), vec![2, 5]);
    }

    #[test]
    fn test_single_vs_two_qubit() {
        assert!(Gate::H(0).is_single_qubit());
        assert!(!Gate::H(0).is_two_qubit());
        assert!(Gate::CNOT(0, 1).is_two_qubit());
        assert!(!Gate::CNOT(0, 1).is_single_qubit());
        assert!(Gate::Measure(0).is_measurement());
    }

    #[test]
    fn test_map_qubits() {
        let mapping = vec![2, 0, 1];
        assert_eq!(Gate::H(0).map_qubits(&mapping), Gate::H(2));
        assert_eq!(Gate::CNOT(0, 1).map_qubits(&mapping), Gate::CNOT(2, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Gate::H(0).to_string(), "H(0)");
        assert_eq!(Gate::CNOT(0, 1).to_string(), "CNOT(0, 1)");
    }
}
