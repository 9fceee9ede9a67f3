//! Post-regeneration cooling
//!
//! After desorption the bed and shell are cooled back to adsorption
//! temperature by a stream of cooling air. The heat removed mirrors the
//! sensible heat added during regeneration (desorption and purge effects are
//! ignored during cooling):
//!
//! $$ Q_{cool} = (m_{ads} c_{p,ads} + m_{steel} c_{p,steel}) \Delta T_{reg} $$
//!
//! Cooling power uses the mean bed temperature as the driving temperature:
//!
//! $$ \dot{Q}_{cool} = \dot{m}_{cool} c_{p,cool} \left(\frac{T_{reg} + T_{ads}}{2} - T_{cool,in}\right) $$

use bioco2_core::parameters::ModelInputs;
use bioco2_core::FloatValue;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoolingEstimate {
    /// Sensible heat to remove
    /// unit: J
    pub q_cool: FloatValue,
    /// unit: K
    pub t_bed_avg: FloatValue,
    /// unit: W
    pub q_dot_cool: FloatValue,
    /// Infinite when the cooling stream cannot remove heat
    /// unit: s
    pub t_cool_required: FloatValue,
}

/// Cooling-time estimator for one bed
#[derive(Debug, Clone)]
pub struct CoolingEstimator {
    heat_capacity: FloatValue,
    m_dot_cool: FloatValue,
    cp_cool: FloatValue,
    t_cool_in: FloatValue,
}

impl CoolingEstimator {
    pub fn new(inputs: &ModelInputs, m_steel: FloatValue) -> Self {
        Self {
            heat_capacity: inputs.bed.m_ads * inputs.adsorbent.cp_ads
                + m_steel * inputs.bed.cp_steel,
            m_dot_cool: inputs.operating.m_dot_cool,
            cp_cool: inputs.cooling.cp_cool,
            t_cool_in: inputs.cooling.t_cool_in,
        }
    }

    /// Lumped heat capacity of adsorbent and shell
    ///
    /// unit: J / K
    pub fn heat_capacity(&self) -> FloatValue {
        self.heat_capacity
    }

    pub fn solve(&self, t_ads: FloatValue, t_reg: FloatValue) -> CoolingEstimate {
        let q_cool = self.heat_capacity * (t_reg - t_ads);
        let t_bed_avg = (t_reg + t_ads) / 2.0;
        let q_dot_cool = self.m_dot_cool * self.cp_cool * (t_bed_avg - self.t_cool_in);
        let t_cool_required = if q_dot_cool > 0.0 {
            q_cool / q_dot_cool
        } else {
            FloatValue::INFINITY
        };

        CoolingEstimate {
            q_cool,
            t_bed_avg,
            q_dot_cool,
            t_cool_required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const M_STEEL: FloatValue = 198.059;

    #[test]
    fn test_baseline_cooling() {
        let estimate = CoolingEstimator::new(&ModelInputs::default(), M_STEEL).solve(323.0, 473.0);
        assert_relative_eq!(
            estimate.q_cool,
            (460_000.0 + M_STEEL * 500.0) * 150.0,
            max_relative = 1e-12
        );
        assert_eq!(estimate.t_bed_avg, 398.0);
        // 0.15 kg/s * 1010 J/(kg K) * 95 K
        assert_relative_eq!(estimate.q_dot_cool, 14_392.5, max_relative = 1e-12);
        assert_relative_eq!(estimate.t_cool_required, 5826.26, max_relative = 1e-4);
    }

    #[test]
    fn test_doubling_flow_halves_time() {
        let mut inputs = ModelInputs::default();
        let slow = CoolingEstimator::new(&inputs, M_STEEL).solve(323.0, 473.0);
        inputs.operating.m_dot_cool *= 2.0;
        let fast = CoolingEstimator::new(&inputs, M_STEEL).solve(323.0, 473.0);
        assert_relative_eq!(fast.t_cool_required, slow.t_cool_required / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_warm_coolant_gives_infinite_time() {
        let mut inputs = ModelInputs::default();
        inputs.cooling.t_cool_in = 400.0;
        let estimate = CoolingEstimator::new(&inputs, M_STEEL).solve(323.0, 473.0);
        assert!(estimate.q_dot_cool < 0.0);
        assert!(estimate.t_cool_required.is_infinite());
    }

    #[test]
    fn test_no_cooling_flow_gives_infinite_time() {
        let mut inputs = ModelInputs::default();
        inputs.operating.m_dot_cool = 0.0;
        let estimate = CoolingEstimator::new(&inputs, M_STEEL).solve(323.0, 473.0);
        assert!(estimate.t_cool_required.is_infinite());
    }
}
