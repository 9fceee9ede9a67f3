//! Bed design parameters

use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Packed-bed and pressure-vessel design parameters
///
/// A single representative bed is modelled; plant-level quantities are scaled
/// by `n_bed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BedParameters {
    /// Number of beds sharing the exhaust flow
    /// default: 4
    pub n_bed: u32,

    /// Adsorbent mass per bed
    /// unit: kg
    /// default: 500.0
    pub m_ads: FloatValue,

    /// Bulk density of the packed adsorbent
    /// unit: kg / m^3
    /// default: 650.0
    pub rho_bulk: FloatValue,

    /// Pellet diameter
    /// unit: m
    /// default: 0.003
    pub d_p: FloatValue,

    /// Bed void fraction
    /// unit: dimensionless
    /// default: 0.37
    pub epsilon: FloatValue,

    /// Bed length to diameter ratio
    /// unit: dimensionless
    /// default: 2.5
    pub l_over_d: FloatValue,

    /// Shell wall thickness
    /// unit: m
    /// default: 0.006
    pub t_wall: FloatValue,

    /// Shell steel density
    /// unit: kg / m^3
    /// default: 7850.0
    pub rho_steel: FloatValue,

    /// Shell steel heat capacity
    /// unit: J / (kg K)
    /// default: 500.0
    pub cp_steel: FloatValue,
}

impl Default for BedParameters {
    fn default() -> Self {
        Self {
            n_bed: 4,
            m_ads: 500.0,
            rho_bulk: 650.0,
            d_p: 0.003,
            epsilon: 0.37,
            l_over_d: 2.5,
            t_wall: 0.006,
            rho_steel: 7850.0,
            cp_steel: 500.0,
        }
    }
}

impl BedParameters {
    pub(crate) fn numeric_fields(&self) -> Vec<(&'static str, FloatValue)> {
        vec![
            ("bed.n_bed", FloatValue::from(self.n_bed)),
            ("bed.m_ads", self.m_ads),
            ("bed.rho_bulk", self.rho_bulk),
            ("bed.d_p", self.d_p),
            ("bed.epsilon", self.epsilon),
            ("bed.l_over_d", self.l_over_d),
            ("bed.t_wall", self.t_wall),
            ("bed.rho_steel", self.rho_steel),
            ("bed.cp_steel", self.cp_steel),
        ]
    }
}
