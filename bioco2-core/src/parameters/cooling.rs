//! Cooling parameters

use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Cooling fluid parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoolingParameters {
    /// Cooling fluid inlet temperature
    /// unit: K
    /// default: 303.0
    pub t_cool_in: FloatValue,

    /// Cooling fluid heat capacity
    /// unit: J / (kg K)
    /// default: 1010.0
    pub cp_cool: FloatValue,
}

impl Default for CoolingParameters {
    fn default() -> Self {
        Self {
            t_cool_in: 303.0,
            cp_cool: 1010.0,
        }
    }
}

impl CoolingParameters {
    pub(crate) fn numeric_fields(&self) -> Vec<(&'static str, FloatValue)> {
        vec![
            ("cooling.t_cool_in", self.t_cool_in),
            ("cooling.cp_cool", self.cp_cool),
        ]
    }
}
