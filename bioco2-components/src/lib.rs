//! Components of the BioCO2 TSA capture model
//!
//! Each physical sub-process of the skid is a component with its own
//! calculation methods, extracted for testability. The [`engine`] wires them
//! into a single forward pass:
//!
//! ```text
//! heat exchanger ─┐
//! bed geometry ───┼─► isotherm ─► regeneration ─┐
//! CO2 partition ──┘   cooling ──────────────────┼─► cycle timing ─► performance
//!                     pressure drop ────────────┘                  closure
//! ```
//!
//! # Example
//!
//! ```rust
//! use bioco2_components::compute;
//! use bioco2_core::parameters::ModelInputs;
//!
//! let outputs = compute(&ModelInputs::default()).unwrap();
//! println!("{} t/day", outputs.performance.co2_tpd);
//! println!("bound by {}", outputs.timing.binding_constraint);
//!
//! // The isotherm stays callable after the computation returns
//! let q = outputs.isotherm.loading(323.0, 10_000.0);
//! assert!(q > 0.0);
//! ```

pub mod components;
pub mod diagnostics;
pub mod engine;
pub mod outputs;

pub use engine::{compute, CachedEngine, Engine};
pub use outputs::ModelOutputs;
