//! Coupling graph: the physical connectivity of a quantum device.
//!
//! A [`CouplingGraph`] is an undirected adjacency relation over physical
//! qubits plus an all-pairs shortest-path distance matrix, computed once at
//! construction time so the routing pass never recomputes a BFS per lookup.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Topology types for common quantum hardware layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topology {
    /// All qubits connected to all others.
    AllToAll,
    /// Linear chain: qubit i connected to i±1.
    Linear,
    /// Ring: linear with wrap-around.
    Ring,
    /// 2D grid/lattice (e.g., Google Sycamore).
    Grid { rows: usize, cols: usize },
    /// Heavy-hex lattice (e.g., IBM).
    HeavyHex,
    /// Custom topology, defined by an explicit edge list.
    Custom,
}

/// A quantum device's physical connectivity: an undirected edge set over
/// physical qubits plus a precomputed all-pairs distance matrix.
///
/// Distances use `usize::MAX` to represent unreachable pairs, so a
/// disconnected graph is representable without an `Option` layer at every
/// lookup site; [`CouplingGraph::is_connected`] checks for that case once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouplingGraph {
    /// Device name.
    pub name: String,
    /// Number of physical qubits.
    pub num_qubits: usize,
    /// Topology this graph was generated from.
    pub topology: Topology,
    /// Undirected edges, each stored once as `(min, max)`.
    pub edges: Vec<(usize, usize)>,
    #[serde(skip)]
    adjacency: Vec<Vec<usize>>,
    #[serde(skip)]
    distance: Vec<Vec<usize>>,
}

impl CouplingGraph {
    /// Builds a coupling graph from an explicit edge list.
    pub fn from_edges(
        name: impl Into<String>,
        num_qubits: usize,
        topology: Topology,
        edges: Vec<(usize, usize)>,
    ) -> Self {
        let edges: Vec<(usize, usize)> = edges
            .into_iter()
            .map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
            .collect();
        let adjacency = build_adjacency(num_qubits, &edges);
        let distance = build_distance_matrix(num_qubits, &adjacency);

        Self {
            name: name.into(),
            num_qubits,
            topology,
            edges,
            adjacency,
            distance,
        }
    }

    /// Creates a linear chain topology: qubit i connected to i+1.
    pub fn linear(name: impl Into<String>, num_qubits: usize) -> Self {
        let edges = (0..num_qubits.saturating_sub(1)).map(|i| (i, i + 1)).collect();
        Self::from_edges(name, num_qubits, Topology::Linear, edges)
    }

    /// Creates a ring topology: linear with wrap-around.
    pub fn ring(name: impl Into<String>, num_qubits: usize) -> Self {
        let edges = if num_qubits < 2 {
            Vec::new()
        } else {
            (0..num_qubits).map(|i| (i, (i + 1) % num_qubits)).collect()
        };
        Self::from_edges(name, num_qubits, Topology::Ring, edges)
    }

    /// Creates an all-to-all connected topology.
    pub fn all_to_all(name: impl Into<String>, num_qubits: usize) -> Self {
        let mut edges = Vec::new();
        for i in 0..num_qubits {
            for j in (i + 1)..num_qubits {
                edges.push((i, j));
            }
        }
        Self::from_edges(name, num_qubits, Topology::AllToAll, edges)
    }

    /// Creates a 2D grid topology with `rows * cols` qubits.
    pub fn grid(name: impl Into<String>, rows: usize, cols: usize) -> Self {
        let mut edges = Vec::new();
        for r in 0..rows {
            for c in 0..cols {
                let idx = r * cols + c;
                if c + 1 < cols {
                    edges.push((idx, idx + 1));
                }
                if r + 1 < rows {
                    edges.push((idx, idx + cols));
                }
            }
        }
        Self::from_edges(name, rows * cols, Topology::Grid { rows, cols }, edges)
    }

    /// Creates an IBM-style heavy-hex topology.
    ///
    /// Heavy-hex consists of hexagonal cells with bridge qubits on
    /// alternating edges between rows of main qubits.
    ///
    /// # Example
    /// ```
    /// use sabre_core::types::CouplingGraph;
    /// let falcon = CouplingGraph::heavy_hex("ibm_falcon", 3, 3);
    /// ```
    pub fn heavy_hex(name: impl Into<String>, rows: usize, cols: usize) -> Self {
        let qubits_per_row = cols;
        let bridges_per_gap = cols.div_ceil(2);

        let main_qubits = rows * qubits_per_row;
        let bridge_rows = rows.saturating_sub(1);
        let bridge_qubits = bridge_rows * bridges_per_gap;
        let num_qubits = main_qubits + bridge_qubits;

        let edges = heavy_hex_edges(rows, cols);
        Self::from_edges(name, num_qubits, Topology::HeavyHex, edges)
    }

    /// Whether qubits `q1` and `q2` are directly connected.
    pub fn are_connected(&self, q1: usize, q2: usize) -> bool {
        q1 < self.num_qubits && q2 < self.num_qubits && self.adjacency[q1].contains(&q2)
    }

    /// Physical neighbors of `qubit`.
    pub fn neighbors(&self, qubit: usize) -> &[usize] {
        &self.adjacency[qubit]
    }

    /// Shortest-path distance between two physical qubits, or `None` if
    /// unreachable.
    pub fn distance(&self, q1: usize, q2: usize) -> Option<usize> {
        let d = self.distance[q1][q2];
        if d == usize::MAX {
            None
        } else {
            Some(d)
        }
    }

    /// Whether the graph is connected (every pair of qubits has a finite
    /// distance).
    pub fn is_connected(&self) -> bool {
        self.distance
            .iter()
            .all(|row| row.iter().all(|&d| d != usize::MAX))
    }

    /// Validates that `qubit` is a legal physical index.
    pub fn validate_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits {
            Err(CoreError::InvalidPhysicalQubit(qubit, self.num_qubits))
        } else {
            Ok(())
        }
    }

    /// Loads a coupling graph from a [`crate::config::DeviceConfig`].
    pub fn from_config(config: &crate::config::DeviceConfig) -> Self {
        match config.topology {
            Topology::Linear => Self::linear(&config.name, config.num_qubits),
            Topology::Ring => Self::ring(&config.name, config.num_qubits),
            Topology::AllToAll => Self::all_to_all(&config.name, config.num_qubits),
            Topology::Grid { rows, cols } => Self::grid(&config.name, rows, cols),
            Topology::HeavyHex => {
                // rows/cols aren't recoverable from num_qubits alone for a
                // loaded config; fall back to the custom edge list if
                // present, else a single-row heavy-hex of the right width.
                if config.edges.is_empty() {
                    Self::heavy_hex(&config.name, 1, config.num_qubits)
                } else {
                    Self::from_edges(
                        &config.name,
                        config.num_qubits,
                        Topology::Custom,
                        config.edges.clone(),
                    )
                }
            }
            Topology::Custom => Self::from_edges(
                &config.name,
                config.num_qubits,
                Topology::Custom,
                config.edges.clone(),
            ),
        }
    }

    /// Parses a coupling graph from a JSON-encoded [`crate::config::DeviceConfig`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config = crate::config::DeviceConfig::from_json(json)?;
        Ok(Self::from_config(&config))
    }
}

fn build_adjacency(num_qubits: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); num_qubits];
    for &(a, b) in edges {
        adjacency[a].push(b);
        adjacency[b].push(a);
    }
    adjacency
}

fn build_distance_matrix(num_qubits: usize, adjacency: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut distance = vec![vec![usize::MAX; num_qubits]; num_qubits];

    for source in 0..num_qubits {
        distance[source][source] = 0;
        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(node) = queue.pop_front() {
            let d = distance[source][node];
            for &neighbor in &adjacency[node] {
                if distance[source][neighbor] == usize::MAX {
                    distance[source][neighbor] = d + 1;
                    queue.push_back(neighbor);
                }
            }
        }
    }

    distance
}

fn heavy_hex_edges(rows: usize, cols: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    let bridges_per_gap = cols.div_ceil(2);

    for row in 0..rows {
        let main_row_offset: usize = (0..row)
            .map(|r| cols + if r < rows - 1 { bridges_per_gap } else { 0 })
            .sum();

        for c in 0..(cols.saturating_sub(1)) {
            edges.push((main_row_offset + c, main_row_offset + c + 1));
        }

        if row < rows - 1 {
            let bridge_row_offset = main_row_offset + cols;
            for b in 0..bridges_per_gap {
                let bridge_col = b * 2;
                if bridge_col < cols {
                    let bridge_idx = bridge_row_offset + b;
                    let top_qubit = main_row_offset + bridge_col;
                    let next_main_offset = main_row_offset + cols + bridges_per_gap;
                    let bottom_qubit = next_main_offset + bridge_col;

                    edges.push((top_qubit, bridge_idx));
                    edges.push((bridge_idx, bottom_qubit));
                }
            }
        }
    }

    edges = edges
        .into_iter()
        .map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
        .filter(|&(a, b)| a != b)
        .collect();
    edges.sort_unstable();
    edges.dedup();
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_topology() {
        let g = CouplingGraph::linear("test", 5);
        assert_eq!(g.num_qubits, 5);
        assert_eq!(g.edges.len(), 4);

        assert!(g.are_connected(0, 1));
        assert!(g.are_connected(1, 2));
        assert!(!g.are_connected(0, 2));
        assert!(!g.are_connected(0, 4));
    }

    #[test]
    fn test_ring_topology() {
        let g = CouplingGraph::ring("test", 4);
        assert_eq!(g.edges.len(), 4);
        assert!(g.are_connected(0, 3));
    }

    #[test]
    fn test_all_to_all_topology() {
        let g = CouplingGraph::all_to_all("test", 4);
        assert_eq!(g.edges.len(), 6);
        assert!(g.are_connected(0, 3));
        assert_eq!(g.distance(0, 3), Some(1));
    }

    #[test]
    fn test_grid_topology() {
        let g = CouplingGraph::grid("test", 2, 3);
        assert_eq!(g.num_qubits, 6);
        assert_eq!(g.edges.len(), 7);

        assert!(g.are_connected(0, 1));
        assert!(g.are_connected(0, 3));
        assert!(!g.are_connected(0, 4));
    }

    #[test]
    fn test_neighbors() {
        let g = CouplingGraph::linear("test", 5);
        assert_eq!(g.neighbors(0), &[1]);
        assert_eq!(g.neighbors(2).len(), 2);
        assert_eq!(g.neighbors(4), &[3]);
    }

    #[test]
    fn test_distance_matrix_linear() {
        let g = CouplingGraph::linear("test", 5);
        assert_eq!(g.distance(0, 0), Some(0));
        assert_eq!(g.distance(0, 4), Some(4));
        assert_eq!(g.distance(2, 3), Some(1));
        assert!(g.is_connected());
    }

    #[test]
    fn test_disconnected_graph() {
        let g = CouplingGraph::from_edges("split", 4, Topology::Custom, vec![(0, 1), (2, 3)]);
        assert!(!g.is_connected());
        assert_eq!(g.distance(0, 1), Some(1));
        assert_eq!(g.distance(0, 2), None);
    }

    #[test]
    fn test_validate_qubit() {
        let g = CouplingGraph::linear("test", 3);
        assert!(g.validate_qubit(2).is_ok());
        assert!(g.validate_qubit(3).is_err());
    }

    #[test]
    fn test_heavy_hex_topology() {
        let g = CouplingGraph::heavy_hex("test_heavy_hex", 3, 5);
        assert!(g.num_qubits > 0);
        assert!(!g.edges.is_empty());
        assert!(g.are_connected(0, 1));
        assert!(g.are_connected(1, 2));
        assert_eq!(g.topology, Topology::HeavyHex);
    }

    #[test]
    fn test_heavy_hex_small() {
        let g = CouplingGraph::heavy_hex("mini", 2, 3);
        assert_eq!(g.num_qubits, 8);
        assert!(g.edges.len() >= 4);
    }

    #[test]
    fn test_from_config_roundtrip() {
        use crate::config::DeviceConfig;

        let config = DeviceConfig {
            name: "falcon".to_string(),
            num_qubits: 27,
            topology: Topology::HeavyHex,
            edges: Vec::new(),
        };
        let g = CouplingGraph::from_config(&config);
        assert_eq!(g.num_qubits, 27);
    }
}
