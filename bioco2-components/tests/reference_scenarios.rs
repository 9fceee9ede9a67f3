//! Reference scenarios for the full engine.
//!
//! The baseline design is a 0.85 kg/s BioCHP exhaust at 773 K treated by four
//! 500 kg zeolite beds. Expected values are independent hand calculations of
//! the same correlations.

use approx::assert_relative_eq;
use bioco2_components::components::BindingConstraint;
use bioco2_components::{compute, ModelOutputs};
use bioco2_core::parameters::ModelInputs;
use is_close::is_close;

fn baseline() -> ModelOutputs {
    compute(&ModelInputs::default()).unwrap()
}

mod baseline_design {
    use super::*;

    #[test]
    fn test_heat_recovery() {
        let outputs = baseline();
        assert_eq!(outputs.heat_recovery.t_regen_air_max, 758.0);
        assert_eq!(outputs.heat_recovery.t_exh, 353.0);
        assert_relative_eq!(outputs.heat_recovery.cp_exh_avg, 1065.955, max_relative = 1e-4);
        assert_relative_eq!(outputs.heat_recovery.q_dot_avail, 380.546, max_relative = 1e-4);
    }

    #[test]
    fn test_geometry() {
        let outputs = baseline();
        assert_relative_eq!(outputs.geometry.v_bed, 0.76923, max_relative = 1e-3);
        assert_relative_eq!(outputs.geometry.d, 0.7317, max_relative = 1e-3);
        assert_relative_eq!(outputs.geometry.l, 1.8293, max_relative = 1e-3);
    }

    #[test]
    fn test_isotherm() {
        let outputs = baseline();
        assert_relative_eq!(outputs.capacity.q_ads, 5.0, max_relative = 0.02);
        assert_relative_eq!(outputs.capacity.q_reg, 2.55, max_relative = 0.02);
        assert_relative_eq!(outputs.capacity.delta_q, 2.09, max_relative = 0.02);
    }

    #[test]
    fn test_regeneration() {
        let outputs = baseline();
        let r = &outputs.regeneration;
        assert_relative_eq!(r.m_co2_bed, 46.1096, max_relative = 1e-4);
        assert_relative_eq!(r.q_purge, 2.75012e6, max_relative = 1e-3);
        assert_relative_eq!(r.q_total, 1.390592e8, max_relative = 1e-4);
        assert_relative_eq!(r.t_reg_required, 365.420, max_relative = 1e-4);
    }

    #[test]
    fn test_cycle_is_bound_by_cooling() {
        let outputs = baseline();
        assert_relative_eq!(outputs.timing.t_ads, 1230.08, max_relative = 1e-4);
        assert_relative_eq!(outputs.timing.t_cool_required, 5826.26, max_relative = 1e-4);
        assert_eq!(outputs.timing.t_cycle_effective, outputs.timing.t_cool_required);
        assert_eq!(outputs.binding_constraint(), BindingConstraint::Cooling);
    }

    #[test]
    fn test_plant_performance() {
        let outputs = baseline();
        let p = &outputs.performance;
        assert_relative_eq!(p.cycles_per_hour, 0.617892, max_relative = 1e-4);
        assert_relative_eq!(p.co2_tpd, 2.73512, max_relative = 1e-3);
        assert_relative_eq!(p.kwh_per_ton, 819.50, max_relative = 1e-3);
        assert_relative_eq!(outputs.pressure_drop.delta_p, 60_872.8, max_relative = 1e-3);
        assert_relative_eq!(outputs.pressure_drop.w_blower, 69_525.3, max_relative = 1e-3);
    }

    #[test]
    fn test_constraints_and_closure() {
        let outputs = baseline();
        assert!(outputs.constraints.thermal.ok);
        assert_eq!(outputs.constraints.thermal.margin, 285.0);
        assert!(outputs.constraints.cooling.ok);
        assert_relative_eq!(outputs.closure.relative_gap, 0.110686, max_relative = 1e-3);
    }
}

mod derived_views {
    use super::*;

    #[test]
    fn test_energy_breakdown_sums_to_total() {
        let outputs = baseline();
        let total_mj: f64 = outputs.energy_breakdown().iter().map(|(_, mj)| mj).sum();
        assert!(
            is_close!(total_mj, outputs.regeneration.q_total / 1.0e6),
            "Breakdown {} MJ vs total {} MJ",
            total_mj,
            outputs.regeneration.q_total / 1.0e6
        );
    }

    #[test]
    fn test_cycle_phases() {
        let outputs = baseline();
        let phases = outputs.cycle_phases();
        assert_eq!(phases[1], (BindingConstraint::Regeneration, outputs.timing.t_reg_required));
    }

    #[test]
    fn test_isotherm_curve_from_outputs() {
        let outputs = baseline();
        let curve = outputs.isotherm_curve(30.0, 0.5);
        assert_eq!(curve.len(), 61);
        assert_eq!(curve.operating_points.len(), 2);
        assert_eq!(curve.operating_points[0].loading, outputs.capacity.q_ads);
        // Callable again after the first use
        assert_eq!(outputs.isotherm_curve(30.0, 0.5), curve);
    }

    #[test]
    fn test_outputs_serialise() {
        let json = serde_json::to_value(baseline()).unwrap();
        assert_eq!(json["timing"]["binding_constraint"], "cooling");
        assert!(json["performance"]["co2_tpd"].as_f64().unwrap() > 2.7);
    }
}

mod degenerate_designs {
    use super::*;

    #[test]
    fn test_zero_affinity_captures_nothing() {
        let mut inputs = ModelInputs::default();
        inputs.adsorbent.b0 = 0.0;
        let outputs = compute(&inputs).unwrap();

        assert_eq!(outputs.capacity.delta_q, 0.0);
        assert_eq!(outputs.performance.co2_tpd, 0.0);
        assert!(outputs.performance.kwh_per_ton.is_infinite());
        assert!(outputs.timing.t_ads.is_infinite());
        assert_eq!(outputs.binding_constraint(), BindingConstraint::Adsorption);
    }

    #[test]
    fn test_override_precedence() {
        let mut inputs = ModelInputs::default();
        inputs.biochp.use_q_override = true;
        inputs.biochp.q_dot_manual = 120.0;
        let outputs = compute(&inputs).unwrap();

        assert_eq!(outputs.heat_recovery.q_dot_avail, 120.0);
        assert!(outputs.heat_recovery.q_dot_calc > 300.0);
        // Less heat means a longer regeneration
        assert!(outputs.timing.t_reg_required > baseline().timing.t_reg_required);
    }

    #[test]
    fn test_no_available_heat() {
        let mut inputs = ModelInputs::default();
        inputs.biochp.use_q_override = true;
        inputs.biochp.q_dot_manual = 0.0;
        let outputs = compute(&inputs).unwrap();

        assert!(outputs.regeneration.t_reg_required.is_infinite());
        assert!(outputs.timing.t_cycle_effective.is_infinite());
        assert_eq!(outputs.binding_constraint(), BindingConstraint::Regeneration);
        assert_eq!(outputs.performance.cycles_per_hour, 0.0);
        assert!(outputs.performance.kwh_per_ton.is_infinite());
    }

    #[test]
    fn test_reversed_swing_is_reported() {
        let mut inputs = ModelInputs::default();
        inputs.operating.t_reg = 330.0;
        inputs.operating.y_co2_reg = 0.9;
        let outputs = compute(&inputs).unwrap();

        assert!(outputs.capacity.delta_q < 0.0);
        assert!(outputs.regeneration.m_co2_bed < 0.0);
        assert!(outputs.timing.t_ads.is_infinite());
        assert_eq!(outputs.performance.cycles_per_hour, 0.0);
    }

    #[test]
    fn test_regeneration_binds_with_fast_cooling() {
        let mut inputs = ModelInputs::default();
        inputs.operating.m_dot_cool = 5.0;
        inputs.biochp.use_q_override = true;
        inputs.biochp.q_dot_manual = 30.0;
        let outputs = compute(&inputs).unwrap();
        assert_eq!(outputs.binding_constraint(), BindingConstraint::Regeneration);
    }

    #[test]
    fn test_adsorption_binds_with_fast_regeneration() {
        let mut inputs = ModelInputs::default();
        inputs.operating.m_dot_cool = 5.0;
        let outputs = compute(&inputs).unwrap();
        assert_eq!(outputs.binding_constraint(), BindingConstraint::Adsorption);
        assert!(outputs.constraints.cooling.ok);
    }
}

mod determinism {
    use super::*;

    #[test]
    fn test_repeated_calls_are_identical() {
        let a = baseline();
        let b = baseline();
        assert_eq!(a, b);
        assert_eq!(
            a.performance.kwh_per_ton.to_bits(),
            b.performance.kwh_per_ton.to_bits()
        );
    }

    #[test]
    fn test_parallel_evaluations_agree() {
        let expected = baseline();
        let handles: Vec<_> = (0..4).map(|_| std::thread::spawn(baseline)).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
