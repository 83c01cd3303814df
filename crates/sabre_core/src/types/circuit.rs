//! Circuit representation: an ordered gate sequence plus the metadata a
//! routing pass must carry through to its output unchanged.

use super::Gate;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// A named span of a classical or quantum register, e.g. a 5-qubit register
/// `q` occupying logical indices `0..5`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterSpan {
    /// Register name.
    pub name: String,
    /// First index the register occupies in the circuit's flat qubit space.
    pub start: usize,
    /// Number of indices the register occupies.
    pub len: usize,
}

/// Quantum and classical register layout of a circuit, carried through
/// routing unchanged so downstream emission can reconstruct register-scoped
/// qubit/clbit names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterTable {
    /// Quantum register spans.
    pub quantum: Vec<RegisterSpan>,
    /// Classical register spans.
    pub classical: Vec<RegisterSpan>,
}

/// A classical condition gating a gate's execution (e.g. `if (c == 1)`).
/// Opaque to the router: passed through unchanged, never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicalCondition {
    /// Name of the classical register or bit being tested.
    pub register: String,
    /// Value the register must equal for the gate to execute.
    pub value: u64,
}

/// Metadata for a circuit, carried through routing unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CircuitMetadata {
    /// Circuit name.
    pub name: String,
    /// Register layout.
    pub registers: RegisterTable,
}

/// Quantum circuit representation: an ordered gate sequence over logical
/// qubits, plus the per-gate classical condition (if any) and circuit-level
/// metadata the routing pass must preserve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of logical qubits in the circuit.
    pub num_qubits: usize,
    /// Sequence of quantum gates.
    pub gates: Vec<Gate>,
    /// Per-gate classical condition, indexed in parallel with `gates`.
    /// `None` means the gate is unconditional.
    pub conditions: Vec<Option<ClassicalCondition>>,
    /// Circuit metadata (name, registers).
    pub metadata: CircuitMetadata,
}

impl Circuit {
    /// Creates a new empty circuit with the given name and qubit count.
    pub fn new(name: impl Into<String>, num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            conditions: Vec::new(),
            metadata: CircuitMetadata {
                name: name.into(),
                registers: RegisterTable::default(),
            },
        }
    }

    /// Creates a circuit with pre-allocated gate capacity.
    pub fn with_capacity(
        name: impl Into<String>,
        num_qubits: usize,
        gate_capacity: usize,
    ) -> Self {
        Self {
            num_qubits,
            gates: Vec::with_capacity(gate_capacity),
            conditions: Vec::with_capacity(gate_capacity),
            metadata: CircuitMetadata {
                name: name.into(),
                registers: RegisterTable::default(),
            },
        }
    }

    /// Adds an unconditional gate to the circuit.
    ///
    /// Returns an error if the gate operates on an invalid qubit index.
    pub fn add_gate(&mut self, gate: Gate) -> Result<()> {
        self.add_conditional_gate(gate, None)
    }

    /// Adds a gate with an optional classical condition.
    pub fn add_conditional_gate(
        &mut self,
        gate: Gate,
        condition: Option<ClassicalCondition>,
    ) -> Result<()> {
        for q in gate.qubits() {
            if q >= self.num_qubits {
                return Err(CoreError::InvalidQubit(q, self.num_qubits));
            }
        }
        self.gates.push(gate);
        self.conditions.push(condition);
        Ok(())
    }

    /// Adds multiple unconditional gates to the circuit.
    pub fn add_gates(&mut self, gates: impl IntoIterator<Item = Gate>) -> Result<()> {
        for gate in gates {
            self.add_gate(gate)?;
        }
        Ok(())
    }

    /// Returns the circuit depth (critical path length).
    ///
    /// The depth is the maximum number of gates that must be executed
    /// sequentially on any qubit.
    pub fn depth(&self) -> usize {
        if self.gates.is_empty() {
            return 0;
        }

        let mut qubit_depths = vec![0usize; self.num_qubits];

        for gate in &self.gates {
            let qs = gate.qubits();
            let max_depth = qs.iter().map(|&q| qubit_depths[q]).max().unwrap_or(0);
            for &q in &qs {
                qubit_depths[q] = max_depth + 1;
            }
        }

        qubit_depths.into_iter().max().unwrap_or(0)
    }

    /// Returns the total gate count.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Returns the number of two-qubit gates.
    pub fn two_qubit_gate_count(&self) -> usize {
        self.gates.iter().filter(|g| g.is_two_qubit()).count()
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new("", 1)
    }
}
