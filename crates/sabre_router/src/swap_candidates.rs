//! SWAP candidate generation.

use crate::coupling_view::CouplingView;
use crate::dag_view::DagView;
use crate::front_layer::FrontLayer;
use crate::layout::Layout;

/// Generates candidate SWAPs for the current front layer and layout.
///
/// For each front-layer node's logical qargs, for each physical neighbor of
/// that qarg's current physical slot, emits the normalized logical pair
/// `(min, max)` of the qarg and the logical qubit currently occupying the
/// neighboring slot. The result may contain duplicates — scoring does not
/// depend on swap identity and ties are resolved deterministically by the
/// caller, so duplicates are harmless and this does not dedupe them.
pub fn swap_candidates<D: DagView, C: CouplingView>(
    front_layer: &FrontLayer,
    layout: &Layout,
    dag: &D,
    coupling: &C,
) -> Vec<(usize, usize)> {
    let mut candidates = Vec::new();

    for node in front_layer.iter() {
        for &v in dag.qargs(node) {
            let p = layout.phys_of(v);
            for &n in coupling.neighbors(p) {
                let v_prime = layout.logical_of(n);
                debug_assert_ne!(v, v_prime, "a physical neighbor cannot hold the same logical qubit");
                let pair = if v < v_prime { (v, v_prime) } else { (v_prime, v) };
                candidates.push(pair);
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use sabre_core::types::{Circuit, CouplingGraph, Dag, Gate};

    #[test]
    fn test_generates_candidates_for_linear_chain() {
        let mut circuit = Circuit::new("c", 3);
        circuit.add_gate(Gate::CNOT(0, 2)).unwrap();
        let dag = Dag::build(&circuit);
        let coupling = CouplingGraph::linear("t", 3);
        let layout = Layout::identity(3);
        let front = FrontLayer::from_roots(dag.initial_front_layer());

        let candidates = swap_candidates(&front, &layout, &dag, &coupling);

        // qubit 0's only physical neighbor is 1, qubit 2's only neighbor is 1.
        assert!(candidates.contains(&(0, 1)));
        assert!(candidates.contains(&(1, 2)));
    }

    #[test]
    fn test_pairs_are_normalized_ascending() {
        let mut circuit = Circuit::new("c", 3);
        circuit.add_gate(Gate::CNOT(2, 0)).unwrap();
        let dag = Dag::build(&circuit);
        let coupling = CouplingGraph::linear("t", 3);
        let layout = Layout::identity(3);
        let front = FrontLayer::from_roots(dag.initial_front_layer());

        let candidates = swap_candidates(&front, &layout, &dag, &coupling);
        for (a, b) in candidates {
            assert!(a < b);
        }
    }
}
