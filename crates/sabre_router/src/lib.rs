//! SABRE-style swap-based qubit routing.
//!
//! This crate implements the driver loop, heuristic scoring, and layout
//! bookkeeping of a SABRE (Swap-Based BidiREctional search) router. It
//! consumes circuit and topology data only through the [`DagView`] and
//! [`CouplingView`] traits, so it has no hard dependency on any single
//! circuit representation beyond `sabre_core`'s, for which both traits
//! ship a ready-made implementation.
//!
//! ```
//! use sabre_core::types::{Circuit, CouplingGraph, Dag, Gate};
//! use sabre_router::{Router, RouterConfig, StdChoiceRng};
//!
//! let mut circuit = Circuit::new("bell", 3);
//! circuit.add_gate(Gate::CNOT(0, 2)).unwrap();
//! let dag = Dag::build(&circuit);
//! let coupling = CouplingGraph::linear("line3", 3);
//!
//! let router = Router::new(RouterConfig::default());
//! let mut rng = StdChoiceRng::seed_from_u64(0);
//! let routed = router
//!     .run("bell", circuit.metadata.registers.clone(), &dag, &coupling, &mut rng)
//!     .unwrap();
//! routed.final_layout.check_invariant().unwrap();
//! ```

pub mod config;
pub mod coupling_view;
pub mod dag_view;
pub mod error;
pub mod extended_set;
pub mod front_layer;
pub mod layout;
pub mod rng;
pub mod router;
pub mod scorer;
pub mod swap_candidates;

pub use config::{RouterConfig, DECAY_RATE, DECAY_RESET_INTERVAL};
pub use coupling_view::CouplingView;
pub use dag_view::{DagView, NodeId, SwapLike};
pub use error::{Result, RouterError};
pub use extended_set::{build_extended_set, EXTENDED_SET_SIZE};
pub use front_layer::FrontLayer;
pub use layout::Layout;
pub use rng::{ChoiceRng, StdChoiceRng};
pub use router::{RoutedOutput, Router};
pub use scorer::{score, Heuristic, LOOKAHEAD_WEIGHT};
pub use swap_candidates::swap_candidates;
