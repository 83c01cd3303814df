//! Narrow read-only view the router needs over a device's coupling graph.

/// Read-only interface over a device's physical connectivity.
pub trait CouplingView {
    /// Number of physical qubits.
    fn num_qubits(&self) -> usize;

    /// Physical neighbors of `p`.
    fn neighbors(&self, p: usize) -> &[usize];

    /// Whether `p` and `q` are directly connected.
    fn is_edge(&self, p: usize, q: usize) -> bool;

    /// Shortest-path distance between `p` and `q`, or `f64::INFINITY` if
    /// they are in disconnected components.
    fn distance(&self, p: usize, q: usize) -> f64;
}

impl CouplingView for sabre_core::types::CouplingGraph {
    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn neighbors(&self, p: usize) -> &[usize] {
        sabre_core::types::CouplingGraph::neighbors(self, p)
    }

    fn is_edge(&self, p: usize, q: usize) -> bool {
        self.are_connected(p, q)
    }

    fn distance(&self, p: usize, q: usize) -> f64 {
        self.distance(p, q).map(|d| d as f64).unwrap_or(f64::INFINITY)
    }
}
