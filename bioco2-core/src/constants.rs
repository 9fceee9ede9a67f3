//! Physical constants
//!
//! The constants are bundled in [`PhysicalConstants`] so that the engine stays a
//! pure function of its explicit inputs: callers inject the set they want and
//! nothing is read from ambient globals.

use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Offset between the adsorption temperature and the conditioned exhaust
/// entering the TSA beds downstream of the heat exchanger
/// unit: K
pub const TSA_INLET_OFFSET: FloatValue = 30.0;

/// unit: s / h
pub const SECONDS_PER_HOUR: FloatValue = 3600.0;

/// unit: J / kWh
pub const JOULES_PER_KWH: FloatValue = 3.6e6;

/// Immutable set of physical constants used by the model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Universal gas constant
    /// unit: J / (mol K)
    /// default: 8.314
    pub gas_constant: FloatValue,

    /// Molar mass of CO2
    /// unit: kg / mol
    /// default: 0.04401
    pub molar_mass_co2: FloatValue,

    /// Molar mass of N2, used for the inert balance of the exhaust
    /// unit: kg / mol
    /// default: 0.02802
    pub molar_mass_n2: FloatValue,

    /// Dynamic viscosity of the exhaust in the packed bed.
    ///
    /// Near-N2 gas at process temperature. Not a design input.
    /// unit: Pa s
    /// default: 1.8e-5
    pub gas_viscosity: FloatValue,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gas_constant: 8.314,
            molar_mass_co2: 0.04401,
            molar_mass_n2: 0.02802,
            gas_viscosity: 1.8e-5,
        }
    }
}
