//! Bidirectional logical/physical qubit mapping.

use crate::error::RouterError;

/// A bijection between logical qubit indices and physical qubit indices.
///
/// Both directions are backed by a flat `Vec<usize>` so `phys_of`/
/// `logical_of` are O(1) and `swap` touches exactly four array slots with
/// no allocation. Every physical qubit has a logical counterpart — real
/// circuit qubits and, past the circuit's own qubit count, synthetic
/// padding logicals — so the mapping always covers the full device width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    logic_to_phys: Vec<usize>,
    phys_to_logic: Vec<usize>,
}

impl Layout {
    /// The trivial layout: logical qubit `i` maps to physical qubit `i`,
    /// for a device of `num_qubits` physical qubits.
    pub fn identity(num_qubits: usize) -> Self {
        Self {
            logic_to_phys: (0..num_qubits).collect(),
            phys_to_logic: (0..num_qubits).collect(),
        }
    }

    /// Number of qubits covered by this layout.
    pub fn num_qubits(&self) -> usize {
        self.phys_to_logic.len()
    }

    /// Physical qubit currently holding logical qubit `logical`.
    pub fn phys_of(&self, logical: usize) -> usize {
        self.logic_to_phys[logical]
    }

    /// Logical qubit currently held at physical qubit `physical`.
    pub fn logical_of(&self, physical: usize) -> usize {
        self.phys_to_logic[physical]
    }

    /// Exchanges the logical qubits held at two physical slots.
    pub fn swap(&mut self, phys_a: usize, phys_b: usize) {
        let logical_a = self.phys_to_logic[phys_a];
        let logical_b = self.phys_to_logic[phys_b];
        self.phys_to_logic.swap(phys_a, phys_b);
        self.logic_to_phys[logical_a] = phys_b;
        self.logic_to_phys[logical_b] = phys_a;
    }

    /// Exchanges the physical slots of two logical qubits. A SWAP gate
    /// candidate is expressed as a logical pair (§4.5); this resolves it to
    /// the physical-indexed [`Layout::swap`].
    pub fn apply_logical_swap(&mut self, logical_a: usize, logical_b: usize) {
        self.swap(self.phys_of(logical_a), self.phys_of(logical_b));
    }

    /// Overwrites `self` with `other`'s contents without reallocating,
    /// for reuse as a scratch trial layout across swap candidates.
    pub fn clone_from_layout(&mut self, other: &Layout) {
        self.logic_to_phys.copy_from_slice(&other.logic_to_phys);
        self.phys_to_logic.copy_from_slice(&other.phys_to_logic);
    }

    /// Checks the bijection invariant: every physical/logical round trip
    /// returns to its starting index.
    pub fn check_invariant(&self) -> Result<(), RouterError> {
        for (logical, &physical) in self.logic_to_phys.iter().enumerate() {
            if self.phys_to_logic[physical] != logical {
                return Err(RouterError::LayoutInvariantViolation(format!(
                    "logical {logical} maps to physical {physical}, \
                     which maps back to logical {}",
                    self.phys_to_logic[physical]
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let layout = Layout::identity(4);
        for q in 0..4 {
            assert_eq!(layout.phys_of(q), q);
            assert_eq!(layout.logical_of(q), q);
        }
    }

    #[test]
    fn test_swap() {
        let mut layout = Layout::identity(4);
        layout.swap(0, 1);
        assert_eq!(layout.logical_of(0), 1);
        assert_eq!(layout.logical_of(1), 0);
        assert_eq!(layout.phys_of(0), 1);
        assert_eq!(layout.phys_of(1), 0);
    }

    #[test]
    fn test_apply_logical_swap() {
        let mut layout = Layout::identity(4);
        layout.apply_logical_swap(0, 2);
        assert_eq!(layout.phys_of(0), 2);
        assert_eq!(layout.phys_of(2), 0);
    }

    #[test]
    fn test_clone_from_layout_reuses_allocation() {
        let source = Layout::identity(4);
        let mut scratch = Layout::identity(4);
        scratch.swap(0, 3);
        scratch.clone_from_layout(&source);
        assert_eq!(scratch, source);
    }

    #[test]
    fn test_invariant_holds_after_random_swaps() {
        let mut layout = Layout::identity(6);
        let swaps = [(0, 1), (2, 4), (1, 5), (0, 3), (4, 5)];
        for (a, b) in swaps {
            layout.swap(a, b);
            assert!(layout.check_invariant().is_ok());
        }
    }
}
