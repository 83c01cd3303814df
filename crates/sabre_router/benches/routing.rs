//! Routing benchmark.
//!
//! Target: sub-linear-looking growth in wall time as circuit depth and
//! device width scale, since each step only scores the local swap
//! candidate set rather than re-scanning the whole circuit.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sabre_core::types::{Circuit, CouplingGraph, Dag, Gate};
use sabre_router::{Heuristic, Router, RouterConfig, StdChoiceRng};

fn create_circuit(num_qubits: usize, num_gates: usize) -> Circuit {
    let mut circuit = Circuit::new("bench", num_qubits);
    for i in 0..num_gates {
        match i % 4 {
            0 => circuit.add_gate(Gate::H(i % num_qubits)).unwrap(),
            1 => circuit.add_gate(Gate::X((i + 1) % num_qubits)).unwrap(),
            2 => circuit
                .add_gate(Gate::CNOT(i % num_qubits, (i + 1) % num_qubits))
                .unwrap(),
            _ => circuit
                .add_gate(Gate::CNOT(i % num_qubits, (i + 3) % num_qubits))
                .unwrap(),
        }
    }
    circuit
}

fn bench_route_linear_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_linear_chain");

    for num_gates in [20, 50, 100, 200] {
        let circuit = create_circuit(10, num_gates);
        let dag = Dag::build(&circuit);
        let coupling = CouplingGraph::linear("t", 10);
        let router = Router::new(RouterConfig::default());

        group.bench_with_input(BenchmarkId::new("gates", num_gates), &dag, |b, dag| {
            b.iter(|| {
                let mut rng = StdChoiceRng::seed_from_u64(0);
                router
                    .run("bench", circuit.metadata.registers.clone(), dag, &coupling, &mut rng)
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_route_growing_device(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_growing_device");

    for num_qubits in [5, 10, 20, 40] {
        let circuit = create_circuit(num_qubits, 100);
        let dag = Dag::build(&circuit);
        let coupling = CouplingGraph::ring("t", num_qubits);
        let router = Router::new(RouterConfig::default());

        group.bench_with_input(
            BenchmarkId::new("qubits", num_qubits),
            &dag,
            |b, dag| {
                b.iter(|| {
                    let mut rng = StdChoiceRng::seed_from_u64(0);
                    router
                        .run("bench", circuit.metadata.registers.clone(), dag, &coupling, &mut rng)
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

fn bench_heuristic_modes(c: &mut Criterion) {
    let circuit = create_circuit(12, 150);
    let dag = Dag::build(&circuit);
    let coupling = CouplingGraph::heavy_hex("bench_device", 3, 3);

    for heuristic in [Heuristic::Basic, Heuristic::Lookahead, Heuristic::Decay] {
        let router = Router::new(RouterConfig {
            heuristic,
            ..RouterConfig::default()
        });

        c.bench_function(&format!("heuristic_{heuristic:?}"), |b| {
            b.iter(|| {
                let mut rng = StdChoiceRng::seed_from_u64(0);
                router
                    .run("bench", circuit.metadata.registers.clone(), &dag, &coupling, &mut rng)
                    .unwrap()
            })
        });
    }
}

criterion_group!(
    benches,
    bench_route_linear_chain,
    bench_route_growing_device,
    bench_heuristic_modes,
);
criterion_main!(benches);
