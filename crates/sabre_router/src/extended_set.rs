//! Bounded, round-robin lookahead past the front layer.

use crate::dag_view::{DagView, NodeId};
use crate::front_layer::FrontLayer;
use std::collections::HashSet;

/// Maximum number of lookahead nodes the extended set holds.
pub const EXTENDED_SET_SIZE: usize = 20;

/// Builds the extended (lookahead) set: up to `capacity` distinct two-qubit
/// operation node ids drawn from the BFS successors of the front layer.
///
/// One cursor is opened per front-layer node and the cursors are advanced
/// in round-robin, each visit pulling from its cursor until it yields a
/// two-qubit operation node (single-qubit nodes along the way are skipped,
/// not counted) or the cursor is exhausted. An exhausted cursor drops out
/// of the rotation; the pass ends when every cursor is exhausted or the set
/// reaches capacity. Contents are order-independent — the set only ever
/// contributes an averaged distance sum (§4.7) — so an unordered `HashSet`
/// is sufficient; the ring discipline from the source design is preserved
/// in the traversal, not in the output's storage shape.
pub fn build_extended_set<D: DagView>(
    front_layer: &FrontLayer,
    dag: &D,
    capacity: usize,
) -> HashSet<NodeId> {
    let mut cursors: Vec<_> = front_layer
        .iter()
        .map(|id| dag.bfs_successors(id))
        .collect();
    let mut exhausted = vec![false; cursors.len()];
    let mut extended = HashSet::new();

    if cursors.is_empty() {
        return extended;
    }

    while extended.len() < capacity && exhausted.iter().any(|&done| !done) {
        for (cursor, done) in cursors.iter_mut().zip(exhausted.iter_mut()) {
            if extended.len() >= capacity {
                break;
            }
            if *done {
                continue;
            }
            loop {
                match cursor.next() {
                    Some(node) if dag.arity(node) == 2 => {
                        extended.insert(node);
                        break;
                    }
                    Some(_) => continue,
                    None => {
                        *done = true;
                        break;
                    }
                }
            }
        }
    }

    extended
}
