//! Steady-cycle performance model for a waste-heat driven TSA CO2 capture skid
//!
//! A biomass CHP unit supplies hot exhaust. A gas-to-gas heat exchanger
//! recovers heat from it to regenerate a bank of zeolite beds, which capture
//! CO2 from the same exhaust by temperature-swing adsorption. Given a design
//! and operating point the model answers how much CO2 the skid captures, at
//! what specific energy, and which phase of the cycle limits it.
//!
//! The work is split across crates:
//! - [`bioco2_core`]: physical constants, gas properties, input parameters and
//!   their configuration layer
//! - [`bioco2_components`]: the skid components, the engine and diagnostics
//!
//! ```rust
//! use bioco2::prelude::*;
//!
//! let inputs = ModelInputs::default().with_overrides(&["operating.m_dot_cool=0.3"])?;
//! let outputs = compute(&inputs)?;
//! let assessment = assess(&inputs, &outputs);
//! assert_eq!(assessment.capture, Status::Ok);
//! # Ok::<(), bioco2::errors::TSAError>(())
//! ```

pub use bioco2_components::{components, diagnostics, engine, outputs};
pub use bioco2_core::{constants, errors, parameters, thermo, FloatValue};

#[cfg(feature = "python")]
mod python;

pub mod prelude {
    pub use bioco2_components::components::BindingConstraint;
    pub use bioco2_components::diagnostics::{assess, Advisory, Assessment, Status};
    pub use bioco2_components::{compute, CachedEngine, Engine, ModelOutputs};
    pub use bioco2_core::constants::PhysicalConstants;
    pub use bioco2_core::errors::{TSAError, TSAResult};
    pub use bioco2_core::parameters::ModelInputs;
    pub use bioco2_core::FloatValue;
}
