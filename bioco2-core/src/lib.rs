//! Core types for the BioCO2 temperature-swing adsorption (TSA) capture model
//!
//! This crate holds the vocabulary shared by every component of the model:
//!
//! - [`constants`]: physical constants injected into the engine
//! - [`thermo`]: gas property correlations for CO2/N2 mixtures
//! - [`parameters`]: the grouped design and operating inputs ([`parameters::ModelInputs`])
//! - [`errors`]: the error type used across the workspace
//!
//! The calculation chain itself lives in the `bioco2-components` crate.

pub mod constants;
pub mod errors;
pub mod parameters;
pub mod thermo;

/// Floating point type used for all physical quantities
pub type FloatValue = f64;
