//! Operating condition parameters

use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Temperatures, compositions and auxiliary flows of the TSA cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperatingParameters {
    /// Adsorption temperature
    /// unit: K
    /// default: 323.0
    pub t_ads: FloatValue,

    /// Regeneration temperature
    /// unit: K
    /// default: 473.0
    pub t_reg: FloatValue,

    /// CO2 mole fraction of the gas around the bed during regeneration
    /// unit: dimensionless
    /// default: 0.90
    pub y_co2_reg: FloatValue,

    /// Purge gas mass flow during regeneration
    /// unit: kg / s
    /// default: 0.05
    pub m_dot_purge: FloatValue,

    /// Cooling fluid mass flow
    /// unit: kg / s
    /// default: 0.15
    pub m_dot_cool: FloatValue,

    /// Blower isentropic efficiency
    /// unit: dimensionless
    /// default: 0.72
    pub eta_blower: FloatValue,
}

impl Default for OperatingParameters {
    fn default() -> Self {
        Self {
            t_ads: 323.0,
            t_reg: 473.0,
            y_co2_reg: 0.90,
            m_dot_purge: 0.05,
            m_dot_cool: 0.15,
            eta_blower: 0.72,
        }
    }
}

impl OperatingParameters {
    /// Temperature rise of the bed between adsorption and regeneration
    ///
    /// unit: K
    pub fn delta_t_reg(&self) -> FloatValue {
        self.t_reg - self.t_ads
    }

    pub(crate) fn numeric_fields(&self) -> Vec<(&'static str, FloatValue)> {
        vec![
            ("operating.t_ads", self.t_ads),
            ("operating.t_reg", self.t_reg),
            ("operating.y_co2_reg", self.y_co2_reg),
            ("operating.m_dot_purge", self.m_dot_purge),
            ("operating.m_dot_cool", self.m_dot_cool),
            ("operating.eta_blower", self.eta_blower),
        ]
    }
}
