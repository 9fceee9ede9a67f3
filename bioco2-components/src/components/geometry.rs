//! Bed geometry
//!
//! A cylindrical bed of fixed length-to-diameter ratio $r = L/D$ holding
//! $m_{ads}$ of adsorbent at bulk density $\rho_{bulk}$:
//!
//! $$V_{bed} = \frac{m_{ads}}{\rho_{bulk}}, \quad D = \left(\frac{4 V_{bed}}{\pi r}\right)^{1/3}, \quad L = r D$$
//!
//! The shell is a thin cylindrical wall, $V_{steel} = \pi D L t_{wall}$.
//! End caps are ignored.

use bioco2_core::parameters::BedParameters;
use bioco2_core::FloatValue;
use serde::Serialize;
use std::f64::consts::PI;

/// Dimensions and shell mass of one bed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BedGeometry {
    /// unit: m^3
    pub v_bed: FloatValue,
    /// Diameter
    /// unit: m
    pub d: FloatValue,
    /// Length
    /// unit: m
    pub l: FloatValue,
    /// Cross-sectional flow area
    /// unit: m^2
    pub a_cross: FloatValue,
    /// unit: m^3
    pub v_steel: FloatValue,
    /// unit: kg
    pub m_steel: FloatValue,
}

impl BedGeometry {
    pub fn from_parameters(parameters: &BedParameters) -> Self {
        let v_bed = parameters.m_ads / parameters.rho_bulk;
        let d = (4.0 * v_bed / (PI * parameters.l_over_d)).powf(1.0 / 3.0);
        let l = d * parameters.l_over_d;
        let a_cross = PI * d * d / 4.0;
        let v_steel = PI * d * l * parameters.t_wall;
        let m_steel = v_steel * parameters.rho_steel;

        Self {
            v_bed,
            d,
            l,
            a_cross,
            v_steel,
            m_steel,
        }
    }

    /// Cylinder volume recomputed from the solved dimensions
    pub fn cylinder_volume(&self) -> FloatValue {
        PI / 4.0 * self.d * self.d * self.l
    }
}
