//! Packed-bed pressure drop and blower power
//!
//! The exhaust is pushed through one bed at a time. Pressure drop follows the
//! Ergun equation with a viscous and an inertial term:
//!
//! $$ \frac{\Delta P}{L} = \frac{150 (1-\varepsilon)^2 \mu v}{\varepsilon^3 d_p^2} + \frac{1.75 (1-\varepsilon) \rho v^2}{\varepsilon^3 d_p} $$
//!
//! where $v$ is the superficial velocity over the empty-bed cross section.
//! Blower shaft power is $W = \Delta P \dot{V} / \eta$.

use bioco2_core::FloatValue;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureDrop {
    /// Exhaust density at bed inlet
    /// unit: kg / m^3
    pub rho_exh: FloatValue,
    /// unit: m^3 / s
    pub volumetric_flow: FloatValue,
    /// Superficial velocity
    /// unit: m / s
    pub v_sup: FloatValue,
    /// unit: Pa / m
    pub dp_per_length: FloatValue,
    /// unit: Pa
    pub delta_p: FloatValue,
    /// Blower shaft power
    /// unit: W
    pub w_blower: FloatValue,
}

/// A packed bed seen by the flowing exhaust
#[derive(Debug, Clone)]
pub struct PackedBed {
    /// Void fraction
    pub epsilon: FloatValue,
    /// Particle diameter
    /// unit: m
    pub d_p: FloatValue,
    /// Gas dynamic viscosity
    /// unit: Pa s
    pub viscosity: FloatValue,
    /// Bed length
    /// unit: m
    pub length: FloatValue,
    /// Cross-sectional area
    /// unit: m^2
    pub a_cross: FloatValue,
}

impl PackedBed {
    /// Ergun pressure gradient at a superficial velocity
    ///
    /// unit: Pa / m
    pub fn ergun_gradient(&self, v_sup: FloatValue, rho: FloatValue) -> FloatValue {
        let eps3 = self.epsilon.powi(3);
        let viscous = (150.0 * (1.0 - self.epsilon).powi(2) * self.viscosity * v_sup)
            / (eps3 * self.d_p * self.d_p);
        let inertial = (1.75 * (1.0 - self.epsilon) * rho * v_sup * v_sup) / (eps3 * self.d_p);
        viscous + inertial
    }

    pub fn solve(
        &self,
        m_dot_exh: FloatValue,
        rho_exh: FloatValue,
        eta_blower: FloatValue,
    ) -> PressureDrop {
        let volumetric_flow = m_dot_exh / rho_exh;
        let v_sup = volumetric_flow / self.a_cross;
        let dp_per_length = self.ergun_gradient(v_sup, rho_exh);
        let delta_p = dp_per_length * self.length;

        PressureDrop {
            rho_exh,
            volumetric_flow,
            v_sup,
            dp_per_length,
            delta_p,
            w_blower: delta_p * volumetric_flow / eta_blower,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn baseline_bed() -> PackedBed {
        PackedBed {
            epsilon: 0.37,
            d_p: 0.003,
            viscosity: 1.8e-5,
            length: 1.829289,
            a_cross: std::f64::consts::PI * 0.731715 * 0.731715 / 4.0,
        }
    }

    // 0.12 CO2 / 0.88 N2 at 353 K and 1 atm
    const RHO_EXH: FloatValue = 1.03362;

    #[test]
    fn test_baseline_velocity() {
        let drop = baseline_bed().solve(0.85, RHO_EXH, 0.72);
        assert_relative_eq!(drop.v_sup, 1.9556, max_relative = 1e-3);
    }

    #[test]
    fn test_baseline_pressure_drop_and_blower() {
        let drop = baseline_bed().solve(0.85, RHO_EXH, 0.72);
        assert_relative_eq!(drop.delta_p, 60_872.8, max_relative = 2e-3);
        assert_relative_eq!(drop.w_blower, 69_525.3, max_relative = 2e-3);
    }

    #[test]
    fn test_blower_power_definition() {
        let drop = baseline_bed().solve(0.85, RHO_EXH, 0.72);
        assert_relative_eq!(
            drop.w_blower,
            drop.delta_p * drop.volumetric_flow / 0.72,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_viscous_regime_is_linear() {
        // With zero density only the viscous term remains
        let bed = baseline_bed();
        let g1 = bed.ergun_gradient(0.01, 0.0);
        let g2 = bed.ergun_gradient(0.02, 0.0);
        assert_relative_eq!(g2, 2.0 * g1, max_relative = 1e-12);
    }

    #[test]
    fn test_no_flow_no_drop() {
        let drop = baseline_bed().solve(0.0, RHO_EXH, 0.72);
        assert_eq!(drop.delta_p, 0.0);
        assert_eq!(drop.w_blower, 0.0);
    }
}
