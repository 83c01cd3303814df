//! The driver loop: drains executable gates, and when none are ready,
//! scores SWAP candidates and applies the best one.

use crate::config::RouterConfig;
use crate::coupling_view::CouplingView;
use crate::dag_view::{DagView, NodeId, SwapLike};
use crate::error::{Result, RouterError};
use crate::extended_set::build_extended_set;
use crate::front_layer::FrontLayer;
use crate::layout::Layout;
use crate::rng::ChoiceRng;
use crate::scorer::score;
use crate::swap_candidates::swap_candidates;
use sabre_core::types::RegisterTable;
use tracing::{debug, trace};

/// A routed operation: the original op plus its qargs rewritten from
/// logical to physical indices. Inserted SWAPs carry the gate type the
/// caller's `DagView::Op` uses to represent a SWAP; [`Router::run`]'s
/// convenience wrapper supplies `sabre_core::types::Gate::SWAP` for that.
pub struct RoutedOutput<Op> {
    /// Emitted operations in program order, physical-qarg-rewritten.
    pub gates: Vec<(Op, Vec<usize>)>,
    /// The layout in effect after the last emitted operation.
    pub final_layout: Layout,
    /// The decay vector in effect after the last emitted operation, exposed
    /// for the decay-reset-cadence tests of §8 (property 4, scenario S4).
    pub final_decay: Vec<f64>,
    /// Circuit name, passed through unchanged.
    pub name: String,
    /// The input circuit's register table, passed through unchanged so a
    /// caller can reconstruct register-scoped qubit/clbit names from the
    /// physical-qarg-rewritten output (§6).
    pub registers: RegisterTable,
}

/// The SABRE routing driver.
#[derive(Debug, Clone, Copy)]
pub struct Router {
    config: RouterConfig,
}

impl Router {
    /// Builds a router with the given configuration.
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Routes a circuit whose DAG and device coupling graph are already
    /// built, starting from the DAG's initial operation roots and a
    /// trivial (identity) layout. `registers` is the source circuit's
    /// register table, passed through unchanged into the output (§6).
    pub fn run<D, C>(
        &self,
        name: impl Into<String>,
        registers: RegisterTable,
        dag: &D,
        coupling: &C,
        rng: &mut dyn ChoiceRng,
    ) -> Result<RoutedOutput<D::Op>>
    where
        D: DagView,
        C: CouplingView,
    {
        let num_qubits = coupling.num_qubits();
        let front_layer = FrontLayer::from_roots(dag.initial_front_layer());
        let layout = Layout::identity(num_qubits);
        let decay = vec![1.0; num_qubits];

        self.route(name, registers, front_layer, dag, decay, coupling, layout, rng)
    }

    /// Runs the core driver loop to completion: the single entry point of
    /// §6, generalized over `DagView`/`CouplingView` implementors.
    #[allow(clippy::too_many_arguments)]
    pub fn route<D, C>(
        &self,
        name: impl Into<String>,
        registers: RegisterTable,
        mut front_layer: FrontLayer,
        dag: &D,
        mut decay: Vec<f64>,
        coupling: &C,
        mut layout: Layout,
        rng: &mut dyn ChoiceRng,
    ) -> Result<RoutedOutput<D::Op>>
    where
        D: DagView,
        C: CouplingView,
    {
        let num_qubits = layout.num_qubits();
        let mut scratch = layout.clone();
        let mut output: Vec<(D::Op, Vec<usize>)> = Vec::new();
        let mut applied = std::collections::HashSet::new();
        let mut step: u32 = 0;
        let mut stall_steps: usize = 0;
        let mut best_progress = f64::INFINITY;

        while !front_layer.is_empty() {
            let ready = self.drain_ready(&front_layer, dag, coupling, &layout)?;

            if !ready.is_empty() {
                let mut drained_with_qargs = false;
                for node in ready {
                    let physical_qargs: Vec<usize> = dag
                        .qargs(node)
                        .iter()
                        .map(|&logical| layout.phys_of(logical))
                        .collect();
                    if !physical_qargs.is_empty() {
                        drained_with_qargs = true;
                    }
                    output.push((dag.op(node).clone(), physical_qargs));
                    front_layer.remove(node);
                    applied.insert(node);

                    for &successor in dag.operation_successors(node) {
                        let ready_now = dag
                            .operation_predecessors(successor)
                            .iter()
                            .all(|p| applied.contains(p));
                        if ready_now && !front_layer.contains(successor) {
                            front_layer.push_back(successor);
                        }
                    }
                }
                if drained_with_qargs {
                    reset_decay(&mut decay);
                }
                trace!(drained = true, remaining = front_layer.len(), "drain step");
                continue;
            }

            if front_layer.is_empty() {
                break;
            }

            let extended_set = build_extended_set(&front_layer, dag, self.config.extended_set_size);
            let candidates = swap_candidates(&front_layer, &layout, dag, coupling);
            if candidates.is_empty() {
                return Err(RouterError::EmptySwapCandidates);
            }

            let mut scored = Vec::with_capacity(candidates.len());
            let mut best_score = f64::INFINITY;
            for &candidate in &candidates {
                scratch.clone_from_layout(&layout);
                scratch.apply_logical_swap(candidate.0, candidate.1);
                let candidate_score = score(
                    self.config.heuristic,
                    &scratch,
                    &front_layer,
                    &extended_set,
                    &decay,
                    dag,
                    coupling,
                    candidate,
                    self.config.lookahead_weight,
                );
                if candidate_score < best_score {
                    best_score = candidate_score;
                }
                scored.push((candidate, candidate_score));
            }

            self.check_progress(
                &layout,
                &front_layer,
                dag,
                coupling,
                &mut best_progress,
                &mut stall_steps,
                num_qubits,
            )?;

            let mut tied: Vec<(usize, usize)> = scored
                .into_iter()
                .filter(|&(_, s)| s == best_score)
                .map(|(candidate, _)| candidate)
                .collect();
            tied.sort_unstable();
            let chosen = tied[rng.choice(tied.len())];

            let physical = (layout.phys_of(chosen.0), layout.phys_of(chosen.1));
            output.push((D::Op::swap(), vec![physical.0, physical.1]));
            layout.apply_logical_swap(chosen.0, chosen.1);
            layout.check_invariant()?;

            step += 1;
            apply_decay_step(
                &mut decay,
                step,
                self.config.decay_reset_interval,
                self.config.decay_rate,
                chosen,
            );

            debug!(step, ?chosen, score = best_score, "applied swap");
        }

        Ok(RoutedOutput {
            gates: output,
            final_layout: layout,
            final_decay: decay,
            name: name.into(),
            registers,
        })
    }

    fn drain_ready<D: DagView, C: CouplingView>(
        &self,
        front_layer: &FrontLayer,
        dag: &D,
        coupling: &C,
        layout: &Layout,
    ) -> Result<Vec<NodeId>> {
        let mut ready = Vec::new();
        for node in front_layer.iter() {
            let arity = dag.arity(node);
            if arity > 2 {
                return Err(RouterError::InvalidArity { node, arity });
            }
            let executable = match arity {
                0 | 1 => true,
                2 => {
                    let qargs = dag.qargs(node);
                    let (p0, p1) = (layout.phys_of(qargs[0]), layout.phys_of(qargs[1]));
                    coupling.is_edge(p0, p1)
                }
                _ => unreachable!("arity > 2 already rejected above"),
            };
            if executable {
                ready.push(node);
            }
        }
        Ok(ready)
    }

    #[allow(clippy::too_many_arguments)]
    fn check_progress<D: DagView, C: CouplingView>(
        &self,
        layout: &Layout,
        front_layer: &FrontLayer,
        dag: &D,
        coupling: &C,
        best_progress: &mut f64,
        stall_steps: &mut usize,
        num_qubits: usize,
    ) -> Result<()> {
        let current: f64 = front_layer
            .iter()
            .map(|node| {
                let qargs = dag.qargs(node);
                let (p0, p1) = (layout.phys_of(qargs[0]), layout.phys_of(qargs[1]));
                coupling.distance(p0, p1)
            })
            .sum();

        if current < *best_progress {
            *best_progress = current;
            *stall_steps = 0;
            return Ok(());
        }

        *stall_steps += 1;
        if *stall_steps >= num_qubits.max(1) {
            let node = front_layer.iter().next().expect("front layer nonempty");
            let qargs = dag.qargs(node);
            return Err(RouterError::DisconnectedCoupling {
                logical_a: qargs[0],
                logical_b: qargs[1],
            });
        }
        Ok(())
    }
}

fn reset_decay(decay: &mut [f64]) {
    decay.iter_mut().for_each(|d| *d = 1.0);
}

/// Applies one step's decay update (§4.8 step 5): an unconditional reset on
/// every multiple of `interval`, otherwise a `rate` bump to the two qubits
/// just swapped.
fn apply_decay_step(decay: &mut [f64], step: u32, interval: u32, rate: f64, chosen: (usize, usize)) {
    if step % interval == 0 {
        reset_decay(decay);
    } else {
        decay[chosen.0] += rate;
        decay[chosen.1] += rate;
    }
}
