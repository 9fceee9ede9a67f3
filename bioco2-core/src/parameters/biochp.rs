//! BioCHP boundary parameters
//!
//! Conditions of the biomass combined-heat-and-power exhaust that feeds the
//! skid, and of the gas-to-gas heat exchanger that recovers regeneration heat
//! from it.

use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Exhaust stream and heat-recovery parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BioCHPParameters {
    /// Total exhaust mass flow treated by the skid
    /// unit: kg / s
    /// default: 0.85
    pub m_dot_exh: FloatValue,

    /// CO2 volume (mole) fraction of the exhaust
    /// unit: dimensionless
    /// default: 0.12
    pub y_co2: FloatValue,

    /// Raw BioCHP exhaust temperature upstream of the heat exchanger
    /// unit: K
    /// default: 773.0
    pub t_exh_biochp: FloatValue,

    /// Exhaust pressure
    /// unit: Pa
    /// default: 101325.0
    pub p_exh: FloatValue,

    /// Ambient air temperature at the cold-side inlet of the heat exchanger
    /// unit: K
    /// default: 303.0
    pub t_ambient: FloatValue,

    /// Minimum approach temperature difference of the heat exchanger
    /// unit: K
    /// default: 15.0
    pub delta_t_approach: FloatValue,

    /// Use `q_dot_manual` instead of the heat-exchanger energy balance
    /// default: false
    pub use_q_override: bool,

    /// Manually specified thermal power available for regeneration
    /// unit: kW
    /// default: 120.0
    pub q_dot_manual: FloatValue,
}

impl Default for BioCHPParameters {
    fn default() -> Self {
        Self {
            m_dot_exh: 0.85,
            y_co2: 0.12,
            t_exh_biochp: 773.0,
            p_exh: 101325.0,
            t_ambient: 303.0,
            delta_t_approach: 15.0,
            use_q_override: false,
            q_dot_manual: 120.0,
        }
    }
}

impl BioCHPParameters {
    pub(crate) fn numeric_fields(&self) -> Vec<(&'static str, FloatValue)> {
        vec![
            ("biochp.m_dot_exh", self.m_dot_exh),
            ("biochp.y_co2", self.y_co2),
            ("biochp.t_exh_biochp", self.t_exh_biochp),
            ("biochp.p_exh", self.p_exh),
            ("biochp.t_ambient", self.t_ambient),
            ("biochp.delta_t_approach", self.delta_t_approach),
            ("biochp.q_dot_manual", self.q_dot_manual),
        ]
    }
}
