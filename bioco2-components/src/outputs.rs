//! Output record of one engine evaluation
//!
//! [`ModelOutputs`] groups the results by component, in the order they are
//! computed. It is plain data: it holds no reference to the inputs or the
//! engine and can be cloned, compared and serialised freely.

use crate::components::{
    BedGeometry, BindingConstraint, CapturePerformance, Co2Partition, CoolingEstimate, CycleTiming,
    EnergyClosure, HeatRecovery, IsothermCurve, LangmuirIsotherm, PressureDrop, RegenerationEnergy,
    WorkingCapacity,
};
use bioco2_core::FloatValue;
use serde::Serialize;

/// Regeneration temperature against the heat-exchanger ceiling
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThermalConstraint {
    pub ok: bool,
    /// unit: K
    pub t_reg: FloatValue,
    /// unit: K
    pub t_max: FloatValue,
    /// Positive when regeneration stays below the ceiling
    /// unit: K
    pub margin: FloatValue,
}

impl ThermalConstraint {
    pub fn check(t_reg: FloatValue, t_max: FloatValue) -> Self {
        Self {
            ok: t_reg <= t_max,
            t_reg,
            t_max,
            margin: t_max - t_reg,
        }
    }
}

/// Cooling time against the effective cycle time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoolingConstraint {
    pub ok: bool,
    /// unit: s
    pub t_cool: FloatValue,
    /// unit: s
    pub t_available: FloatValue,
}

impl CoolingConstraint {
    pub fn check(t_cool: FloatValue, t_cycle_effective: FloatValue) -> Self {
        Self {
            ok: t_cool <= t_cycle_effective,
            t_cool,
            t_available: t_cycle_effective,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constraints {
    pub thermal: ThermalConstraint,
    pub cooling: CoolingConstraint,
}

/// Complete result of one steady-cycle evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelOutputs {
    pub heat_recovery: HeatRecovery,
    pub geometry: BedGeometry,
    pub co2_flow: Co2Partition,
    pub capacity: WorkingCapacity,
    pub regeneration: RegenerationEnergy,
    pub cooling: CoolingEstimate,
    pub pressure_drop: PressureDrop,
    pub timing: CycleTiming,
    pub performance: CapturePerformance,
    pub closure: EnergyClosure,
    pub constraints: Constraints,
    /// The isotherm the working capacity was evaluated with
    pub isotherm: LangmuirIsotherm,
}

impl ModelOutputs {
    pub fn binding_constraint(&self) -> BindingConstraint {
        self.timing.binding_constraint
    }

    pub fn thermal_feasible(&self) -> bool {
        self.constraints.thermal.ok
    }

    /// Hourly thermal demand
    ///
    /// unit: kW
    pub fn q_thermal_hourly_kw(&self) -> FloatValue {
        self.performance.thermal_kwh_hr
    }

    /// Regeneration heat per bed per cycle split by sink
    ///
    /// unit: MJ
    pub fn energy_breakdown(&self) -> [(&'static str, FloatValue); 5] {
        let r = &self.regeneration;
        [
            ("adsorbent", r.q_zeolite / 1.0e6),
            ("steel", r.q_steel / 1.0e6),
            ("desorption", r.q_des / 1.0e6),
            ("purge", r.q_purge / 1.0e6),
            ("losses", r.q_losses / 1.0e6),
        ]
    }

    /// Phase durations in process order
    ///
    /// unit: s
    pub fn cycle_phases(&self) -> [(BindingConstraint, FloatValue); 3] {
        self.timing.phases()
    }

    /// Sample both isotherms and mark this design's operating points
    pub fn isotherm_curve(&self, max_kpa: FloatValue, step_kpa: FloatValue) -> IsothermCurve {
        self.isotherm
            .curve(self.capacity.t_ads, self.capacity.t_reg, max_kpa, step_kpa)
            .with_operating_points(&self.capacity)
    }
}
