//! Heuristic scoring of trial layouts.

use crate::coupling_view::CouplingView;
use crate::dag_view::{DagView, NodeId};
use crate::front_layer::FrontLayer;
use crate::layout::Layout;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Weight of the extended-set term in the lookahead heuristic.
pub const LOOKAHEAD_WEIGHT: f64 = 0.5;

/// Selects which of the three scoring variants [`score`] computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Heuristic {
    /// H1: sum of front-layer pairwise distances.
    Basic = 1,
    /// H2: front-layer average plus a weighted extended-set average.
    Lookahead = 2,
    /// H3: H2 scaled by the swap candidate's decay penalty.
    Decay = 3,
}

/// Scores a trial layout under `mode` for the swap candidate `(a, b)`
/// (logical indices) that produced it.
///
/// Distances are summed in front-layer iteration order, then extended-set
/// iteration order, matching the left-to-right accumulation the tie-break
/// contract (§4.7) depends on for reproducible floating-point sums.
/// `lookahead_weight` is the caller's configured `W` (§4.7 fixes it at 0.5;
/// [`crate::config::RouterConfig`] exposes it as a tunable, so the value
/// used here always comes from the caller rather than the bare constant).
#[allow(clippy::too_many_arguments)]
pub fn score<D: DagView, C: CouplingView>(
    mode: Heuristic,
    layout: &Layout,
    front_layer: &FrontLayer,
    extended_set: &HashSet<NodeId>,
    decay: &[f64],
    dag: &D,
    coupling: &C,
    candidate: (usize, usize),
    lookahead_weight: f64,
) -> f64 {
    let front_count = front_layer.len().max(1);
    let h1_front = sum_pairwise_distance(layout, front_layer.iter(), dag, coupling);

    if mode == Heuristic::Basic {
        return h1_front;
    }

    let lookahead_term = if extended_set.is_empty() {
        0.0
    } else {
        let h1_extended = sum_pairwise_distance(layout, extended_set.iter().copied(), dag, coupling);
        lookahead_weight * (h1_extended / extended_set.len() as f64)
    };
    let h2 = h1_front / front_count as f64 + lookahead_term;

    match mode {
        Heuristic::Decay => {
            let (a, b) = candidate;
            decay[a].max(decay[b]) * h2
        }
        _ => h2,
    }
}

fn sum_pairwise_distance<D: DagView, C: CouplingView>(
    layout: &Layout,
    nodes: impl Iterator<Item = NodeId>,
    dag: &D,
    coupling: &C,
) -> f64 {
    let mut sum = 0.0;
    for node in nodes {
        let qargs = dag.qargs(node);
        let (p0, p1) = (layout.phys_of(qargs[0]), layout.phys_of(qargs[1]));
        sum += coupling.distance(p0, p1);
    }
    sum
}
