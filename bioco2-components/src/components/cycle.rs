//! Cycle timing
//!
//! Every bed runs through adsorption, regeneration and cooling. The slowest of
//! the three phase durations sets the effective cycle time, and that phase is
//! reported as the binding constraint.
//!
//! Ties are resolved with a fixed priority: cooling beats regeneration, which
//! beats adsorption ([`BINDING_PRIORITY`]). If no phase matches the cycle time
//! (a NaN duration makes the maximum NaN) the constraint is adsorption.

use bioco2_core::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase that sets the effective cycle time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingConstraint {
    Adsorption,
    Regeneration,
    Cooling,
}

impl BindingConstraint {
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingConstraint::Adsorption => "adsorption",
            BindingConstraint::Regeneration => "regeneration",
            BindingConstraint::Cooling => "cooling",
        }
    }
}

impl fmt::Display for BindingConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tie-break order, highest priority first
pub const BINDING_PRIORITY: [BindingConstraint; 3] = [
    BindingConstraint::Cooling,
    BindingConstraint::Regeneration,
    BindingConstraint::Adsorption,
];

/// Maximum of a set of values where any NaN makes the result NaN
pub fn max_propagating_nan(values: &[FloatValue]) -> FloatValue {
    if values.iter().any(|v| v.is_nan()) {
        return FloatValue::NAN;
    }
    values.iter().copied().fold(FloatValue::NEG_INFINITY, FloatValue::max)
}

/// Time for one bed to load its working capacity
///
/// The exhaust CO2 flow is shared equally between `n_bed` beds. Infinite
/// unless both the bed capacity and the CO2 flow are positive.
///
/// unit: s
pub fn adsorption_time(m_co2_bed: FloatValue, m_dot_co2: FloatValue, n_bed: u32) -> FloatValue {
    if m_co2_bed > 0.0 && m_dot_co2 > 0.0 {
        m_co2_bed / (m_dot_co2 / n_bed as FloatValue)
    } else {
        FloatValue::INFINITY
    }
}

/// Phase durations and the resulting cycle time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleTiming {
    /// unit: s
    pub t_ads: FloatValue,
    /// unit: s
    pub t_reg_required: FloatValue,
    /// unit: s
    pub t_cool_required: FloatValue,
    /// unit: s
    pub t_cycle_effective: FloatValue,
    pub binding_constraint: BindingConstraint,
}

impl CycleTiming {
    pub fn resolve(
        t_ads: FloatValue,
        t_reg_required: FloatValue,
        t_cool_required: FloatValue,
    ) -> Self {
        let t_cycle_effective = max_propagating_nan(&[t_ads, t_reg_required, t_cool_required]);

        let mut timing = Self {
            t_ads,
            t_reg_required,
            t_cool_required,
            t_cycle_effective,
            binding_constraint: BindingConstraint::Adsorption,
        };
        timing.binding_constraint = BINDING_PRIORITY
            .iter()
            .copied()
            .find(|phase| timing.duration(*phase) == t_cycle_effective)
            .unwrap_or(BindingConstraint::Adsorption);
        timing
    }

    /// Duration of a single phase
    ///
    /// unit: s
    pub fn duration(&self, phase: BindingConstraint) -> FloatValue {
        match phase {
            BindingConstraint::Adsorption => self.t_ads,
            BindingConstraint::Regeneration => self.t_reg_required,
            BindingConstraint::Cooling => self.t_cool_required,
        }
    }

    /// Phase durations in process order
    pub fn phases(&self) -> [(BindingConstraint, FloatValue); 3] {
        [
            (BindingConstraint::Adsorption, self.t_ads),
            (BindingConstraint::Regeneration, self.t_reg_required),
            (BindingConstraint::Cooling, self.t_cool_required),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Adsorption Time Tests =====

    #[test]
    fn test_adsorption_time_shares_flow_between_beds() {
        let t = adsorption_time(46.1096, 0.149940, 4);
        assert!((t - 1230.08).abs() < 0.1, "Got {:.2} s", t);
    }

    #[test]
    fn test_adsorption_time_degenerate() {
        assert!(adsorption_time(0.0, 0.15, 4).is_infinite());
        assert!(adsorption_time(-1.0, 0.15, 4).is_infinite());
        assert!(adsorption_time(46.0, 0.0, 4).is_infinite());
        // Zero beds means infinite per-bed flow
        assert_eq!(adsorption_time(46.0, 0.15, 0), 0.0);
    }

    // ===== Max Tests =====

    #[test]
    fn test_max_propagates_nan() {
        assert!(max_propagating_nan(&[1.0, FloatValue::NAN, 3.0]).is_nan());
        assert_eq!(max_propagating_nan(&[1.0, 5.0, 3.0]), 5.0);
        assert!(max_propagating_nan(&[1.0, FloatValue::INFINITY]).is_infinite());
    }

    // ===== Binding Constraint Tests =====

    #[test]
    fn test_each_phase_can_bind() {
        assert_eq!(
            CycleTiming::resolve(900.0, 300.0, 500.0).binding_constraint,
            BindingConstraint::Adsorption
        );
        assert_eq!(
            CycleTiming::resolve(300.0, 900.0, 500.0).binding_constraint,
            BindingConstraint::Regeneration
        );
        let timing = CycleTiming::resolve(1230.08, 365.42, 5826.26);
        assert_eq!(timing.binding_constraint, BindingConstraint::Cooling);
        assert_eq!(timing.t_cycle_effective, 5826.26);
    }

    #[test]
    fn test_tie_break_order() {
        assert_eq!(
            CycleTiming::resolve(100.0, 500.0, 500.0).binding_constraint,
            BindingConstraint::Cooling
        );
        assert_eq!(
            CycleTiming::resolve(500.0, 500.0, 100.0).binding_constraint,
            BindingConstraint::Regeneration
        );
        assert_eq!(
            CycleTiming::resolve(500.0, 100.0, 500.0).binding_constraint,
            BindingConstraint::Cooling
        );
        assert_eq!(
            CycleTiming::resolve(500.0, 500.0, 500.0).binding_constraint,
            BindingConstraint::Cooling
        );
    }

    #[test]
    fn test_infinite_ties() {
        let timing = CycleTiming::resolve(FloatValue::INFINITY, FloatValue::INFINITY, 10.0);
        assert!(timing.t_cycle_effective.is_infinite());
        assert_eq!(timing.binding_constraint, BindingConstraint::Regeneration);
    }

    #[test]
    fn test_nan_falls_back_to_adsorption() {
        let timing = CycleTiming::resolve(100.0, FloatValue::NAN, 500.0);
        assert!(timing.t_cycle_effective.is_nan());
        assert_eq!(timing.binding_constraint, BindingConstraint::Adsorption);
    }

    #[test]
    fn test_phases_in_process_order() {
        let timing = CycleTiming::resolve(1.0, 2.0, 3.0);
        let phases = timing.phases();
        assert_eq!(phases[0], (BindingConstraint::Adsorption, 1.0));
        assert_eq!(phases[2], (BindingConstraint::Cooling, 3.0));
        for (phase, duration) in phases {
            assert_eq!(timing.duration(phase), duration);
        }
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(BindingConstraint::Cooling.to_string(), "cooling");
        let json = serde_json::to_string(&BindingConstraint::Regeneration).unwrap();
        assert_eq!(json, "\"regeneration\"");
    }
}
