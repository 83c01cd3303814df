//! Narrow read-only view the router needs over a circuit's dependency DAG.
//!
//! The router never constructs or mutates a DAG; it only asks one of these
//! questions about it. Keeping the interface this narrow means the router
//! is indifferent to how the DAG was built, as long as the answers are
//! consistent.

/// Node identifier, equal to a gate's index in its originating circuit.
pub type NodeId = usize;

/// An operation type usable as a [`DagView::Op`].
///
/// The router needs to synthesize inserted SWAP operations without a
/// caller-supplied template value, so the operation type must say how to
/// build one. The SWAP's own encoded qargs are never read back — physical
/// qargs are always carried separately in [`crate::router::RoutedOutput`].
pub trait SwapLike: Clone {
    /// Constructs a SWAP operation.
    fn swap() -> Self;
}

impl SwapLike for sabre_core::types::Gate {
    fn swap() -> Self {
        sabre_core::types::Gate::SWAP(0, 0)
    }
}

/// Read-only interface over a circuit's dependency DAG.
pub trait DagView {
    /// The operation type carried by each node (opaque to the router beyond
    /// being passed through into the routed output).
    type Op: SwapLike;

    /// Logical qubit arguments of `node`.
    fn qargs(&self, node: NodeId) -> &[usize];

    /// Number of logical qubit arguments of `node`.
    fn arity(&self, node: NodeId) -> usize {
        self.qargs(node).len()
    }

    /// The operation carried by `node`.
    fn op(&self, node: NodeId) -> &Self::Op;

    /// Operation-node successors of `node` (non-operation nodes skipped).
    fn operation_successors(&self, node: NodeId) -> &[NodeId];

    /// Operation-node predecessors of `node` (non-operation nodes skipped).
    fn operation_predecessors(&self, node: NodeId) -> &[NodeId];

    /// Lazy breadth-first cursor over `node`'s successors, used by the
    /// extended-set builder to pull lookahead nodes on demand.
    fn bfs_successors(&self, node: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// The DAG's operation roots: nodes with no predecessors.
    fn initial_front_layer(&self) -> Vec<NodeId>;
}

impl DagView for sabre_core::types::Dag {
    type Op = sabre_core::types::Gate;

    fn qargs(&self, node: NodeId) -> &[usize] {
        &self.node(node).qargs
    }

    fn op(&self, node: NodeId) -> &Self::Op {
        &self.node(node).op
    }

    fn operation_successors(&self, node: NodeId) -> &[NodeId] {
        self.successors(node)
    }

    fn operation_predecessors(&self, node: NodeId) -> &[NodeId] {
        self.predecessors(node)
    }

    fn bfs_successors(&self, node: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(sabre_core::types::Dag::bfs_successors(self, node))
    }

    fn initial_front_layer(&self) -> Vec<NodeId> {
        sabre_core::types::Dag::initial_front_layer(self)
    }
}
