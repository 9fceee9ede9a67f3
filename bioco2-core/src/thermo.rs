//! Gas property correlations
//!
//! Heat capacities and densities of the CO2/N2 mixtures that flow through the
//! skid. These replace a full equation-of-state package: the exhaust and purge
//! streams are treated as ideal binary mixtures of CO2 and an N2-like inert.
//!
//! # Heat capacity
//!
//! Molar heat capacity of a pure species follows the NIST Shomate polynomial
//! (valid for roughly 298-1200 K):
//!
//! $$ C_p = A + B t + C t^2 + D t^3 + \frac{E}{t^2}, \quad t = \frac{T}{1000} $$
//!
//! Mixture heat capacity is the mole-fraction weighted sum of the species values.
//!
//! # Density
//!
//! $$ \rho = \frac{P M}{R T} $$

use crate::constants::PhysicalConstants;
use crate::errors::{TSAError, TSAResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gas species with tabulated Shomate coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    CO2,
    N2,
}

/// Coefficients of the Shomate heat capacity polynomial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShomateCoefficients {
    pub a: FloatValue,
    pub b: FloatValue,
    pub c: FloatValue,
    pub d: FloatValue,
    pub e: FloatValue,
}

const SHOMATE_CO2: ShomateCoefficients = ShomateCoefficients {
    a: 24.99735,
    b: 55.18696,
    c: -33.69137,
    d: 7.948387,
    e: -0.136638,
};

const SHOMATE_N2: ShomateCoefficients = ShomateCoefficients {
    a: 28.98641,
    b: 1.853978,
    c: -9.647459,
    d: 16.63537,
    e: 0.000117,
};

impl Species {
    /// NIST Shomate coefficients for this species
    pub fn shomate(&self) -> ShomateCoefficients {
        match self {
            Species::CO2 => SHOMATE_CO2,
            Species::N2 => SHOMATE_N2,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::CO2 => write!(f, "CO2"),
            Species::N2 => write!(f, "N2"),
        }
    }
}

impl FromStr for Species {
    type Err = TSAError;

    fn from_str(s: &str) -> TSAResult<Self> {
        match s.trim() {
            "CO2" | "co2" => Ok(Species::CO2),
            "N2" | "n2" => Ok(Species::N2),
            other => Err(TSAError::UnsupportedSpecies(other.to_string())),
        }
    }
}

/// Molar heat capacity of a pure species
///
/// unit: J / (mol K)
pub fn shomate_cp(temperature: FloatValue, species: Species) -> FloatValue {
    let c = species.shomate();
    let t = temperature / 1000.0;
    c.a + c.b * t + c.c * t * t + c.d * t * t * t + c.e / (t * t)
}

/// Gas property correlations bound to a set of physical constants
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GasProperties {
    constants: PhysicalConstants,
}

impl GasProperties {
    pub fn new(constants: PhysicalConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Molar heat capacity of a CO2/N2 mixture
    ///
    /// unit: J / (mol K)
    pub fn cp_mix(&self, temperature: FloatValue, y_co2: FloatValue) -> FloatValue {
        y_co2 * shomate_cp(temperature, Species::CO2)
            + (1.0 - y_co2) * shomate_cp(temperature, Species::N2)
    }

    /// Mean of the mixture heat capacity evaluated at two temperatures
    ///
    /// unit: J / (mol K)
    pub fn cp_mix_avg(
        &self,
        temperature_1: FloatValue,
        temperature_2: FloatValue,
        y_co2: FloatValue,
    ) -> FloatValue {
        (self.cp_mix(temperature_1, y_co2) + self.cp_mix(temperature_2, y_co2)) / 2.0
    }

    /// Ideal gas density
    ///
    /// Infinite as the temperature approaches zero; NaN propagates from the inputs.
    ///
    /// unit: kg / m^3
    pub fn ideal_gas_density(
        &self,
        temperature: FloatValue,
        pressure: FloatValue,
        molar_mass: FloatValue,
    ) -> FloatValue {
        (pressure * molar_mass) / (self.constants.gas_constant * temperature)
    }

    /// Molar mass of a CO2/N2 mixture
    ///
    /// unit: kg / mol
    pub fn mixture_molar_mass(&self, y_co2: FloatValue) -> FloatValue {
        y_co2 * self.constants.molar_mass_co2 + (1.0 - y_co2) * self.constants.molar_mass_n2
    }
}
