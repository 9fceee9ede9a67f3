//! Adsorbent parameters
//!
//! Thermal properties of the zeolite and the constants of its CO2 Langmuir
//! isotherm.

use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Adsorbent thermal and isotherm parameters
///
/// The isotherm affinity is
///
/// $$ b(T) = b_0 \exp\left(\frac{\Delta H_{ads}}{R T}\right) $$
///
/// with `b0` in kPa^-1. Constants reported per Pa, bar or atm must be
/// converted before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdsorbentParameters {
    /// Adsorbent heat capacity
    /// unit: J / (kg K)
    /// default: 920.0
    pub cp_ads: FloatValue,

    /// Fraction of the regeneration heat lost to the surroundings
    /// unit: dimensionless
    /// default: 0.10
    pub f_loss: FloatValue,

    /// Langmuir saturation capacity
    /// unit: mmol / g (numerically mol / kg)
    /// default: 5.5
    pub q_m: FloatValue,

    /// Heat of adsorption, stored as a positive magnitude
    /// unit: kJ / mol
    /// default: 38.0
    pub delta_h_ads: FloatValue,

    /// Langmuir pre-exponential affinity constant
    /// unit: kPa^-1
    /// default: 6.0e-7
    pub b0: FloatValue,

    /// Working capacity derating for competitive water adsorption
    /// unit: dimensionless
    /// default: 0.85
    pub f_moisture: FloatValue,
}

impl Default for AdsorbentParameters {
    fn default() -> Self {
        Self {
            cp_ads: 920.0,
            f_loss: 0.10,
            q_m: 5.5,
            delta_h_ads: 38.0,
            b0: 6.0e-7,
            f_moisture: 0.85,
        }
    }
}

impl AdsorbentParameters {
    /// Heat of adsorption in J/mol
    pub fn delta_h_ads_j(&self) -> FloatValue {
        self.delta_h_ads * 1000.0
    }

    pub(crate) fn numeric_fields(&self) -> Vec<(&'static str, FloatValue)> {
        vec![
            ("adsorbent.cp_ads", self.cp_ads),
            ("adsorbent.f_loss", self.f_loss),
            ("adsorbent.q_m", self.q_m),
            ("adsorbent.delta_h_ads", self.delta_h_ads),
            ("adsorbent.b0", self.b0),
            ("adsorbent.f_moisture", self.f_moisture),
        ]
    }
}
