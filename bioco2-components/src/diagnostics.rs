//! Design diagnostics
//!
//! Grades the headline results of an evaluation and produces plain-language
//! advisories for the designer. Nothing here changes the outputs: a design
//! graded [`Status::Error`] is still a valid evaluation.

use crate::components::BindingConstraint;
use crate::outputs::ModelOutputs;
use bioco2_core::parameters::ModelInputs;
use bioco2_core::FloatValue;
use serde::Serialize;
use std::fmt;

/// Capture rate below which the design is not viable
/// unit: t / day
const MIN_CAPTURE_TPD: FloatValue = 0.1;

/// unit: kWh / t
const SPECIFIC_ENERGY_OK: FloatValue = 2000.0;
/// unit: kWh / t
const SPECIFIC_ENERGY_WARN: FloatValue = 3000.0;

/// unit: mol / kg
const WORKING_CAPACITY_OK: FloatValue = 0.5;

/// unit: %
const UTILISATION_OK: FloatValue = 75.0;
/// unit: %
const UTILISATION_WARN: FloatValue = 95.0;

const CLOSURE_OK: FloatValue = 0.05;

/// Cooling must exceed regeneration by this factor to be flagged
const COOLING_BOTTLENECK_RATIO: FloatValue = 1.2;

/// Upper bound on the suggested cooling flow
/// unit: kg / s
const MAX_RECOMMENDED_COOLING_FLOW: FloatValue = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Warn,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Warn => write!(f, "warn"),
            Status::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    NoWorkingCapacity {
        delta_q: FloatValue,
    },
    UnderDesignedBed,
    ThermalLimitExceeded {
        t_reg: FloatValue,
        t_max: FloatValue,
    },
    CoolingBottleneck {
        t_cool: FloatValue,
        t_reg: FloatValue,
        recommended_m_dot_cool: FloatValue,
    },
    ManualHeatOverride {
        q_dot_manual: FloatValue,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::NoWorkingCapacity { delta_q } => write!(
                f,
                "No working capacity ({:.3} mol/kg): regeneration does not release the \
                 adsorbed CO2. Raise T_reg or lower the CO2 fraction of the regeneration gas",
                delta_q
            ),
            Advisory::UnderDesignedBed => write!(
                f,
                "The beds have working capacity but no CO2 is captured. Check the cycle times"
            ),
            Advisory::ThermalLimitExceeded { t_reg, t_max } => write!(
                f,
                "Regeneration at {:.0} K is above the {:.0} K the heat exchanger can deliver",
                t_reg, t_max
            ),
            Advisory::CoolingBottleneck {
                t_cool,
                t_reg,
                recommended_m_dot_cool,
            } => write!(
                f,
                "Cooling ({:.0} s) is much slower than regeneration ({:.0} s). \
                 Consider a cooling flow of {:.2} kg/s",
                t_cool, t_reg, recommended_m_dot_cool
            ),
            Advisory::ManualHeatOverride { q_dot_manual } => write!(
                f,
                "Available heat is set manually to {:.1} kW",
                q_dot_manual
            ),
        }
    }
}

/// Graded summary of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub capture: Status,
    pub specific_energy: Status,
    pub working_capacity: Status,
    /// Hourly thermal demand as a share of the available heat
    /// unit: %
    pub thermal_utilisation: FloatValue,
    pub utilisation: Status,
    pub closure: Status,
    pub advisories: Vec<Advisory>,
}

impl Assessment {
    /// Worst status over all graded quantities
    pub fn overall(&self) -> Status {
        [
            self.capture,
            self.specific_energy,
            self.working_capacity,
            self.utilisation,
        ]
        .into_iter()
        .fold(Status::Ok, |worst, s| match (worst, s) {
            (Status::Error, _) | (_, Status::Error) => Status::Error,
            (Status::Warn, _) | (_, Status::Warn) => Status::Warn,
            _ => Status::Ok,
        })
    }
}

pub fn capture_status(co2_tpd: FloatValue) -> Status {
    if co2_tpd > MIN_CAPTURE_TPD {
        Status::Ok
    } else {
        Status::Error
    }
}

pub fn specific_energy_status(kwh_per_ton: FloatValue) -> Status {
    if !kwh_per_ton.is_finite() {
        Status::Error
    } else if kwh_per_ton < SPECIFIC_ENERGY_OK {
        Status::Ok
    } else if kwh_per_ton < SPECIFIC_ENERGY_WARN {
        Status::Warn
    } else {
        Status::Error
    }
}

pub fn working_capacity_status(delta_q: FloatValue) -> Status {
    if delta_q > WORKING_CAPACITY_OK {
        Status::Ok
    } else if delta_q > 0.0 {
        Status::Warn
    } else {
        Status::Error
    }
}

/// Hourly thermal demand as a percentage of the available heat
///
/// Zero when no heat is available.
pub fn thermal_utilisation(q_thermal_hourly_kw: FloatValue, q_dot_avail: FloatValue) -> FloatValue {
    if q_dot_avail > 0.0 {
        q_thermal_hourly_kw / q_dot_avail * 100.0
    } else {
        0.0
    }
}

pub fn utilisation_status(percent: FloatValue) -> Status {
    if percent <= UTILISATION_OK {
        Status::Ok
    } else if percent <= UTILISATION_WARN {
        Status::Warn
    } else {
        Status::Error
    }
}

pub fn closure_status(relative_gap: FloatValue) -> Status {
    if relative_gap < CLOSURE_OK {
        Status::Ok
    } else {
        Status::Warn
    }
}

/// Grade an evaluation and collect advisories
pub fn assess(inputs: &ModelInputs, outputs: &ModelOutputs) -> Assessment {
    let delta_q = outputs.capacity.delta_q;
    let timing = &outputs.timing;
    let utilisation = thermal_utilisation(
        outputs.q_thermal_hourly_kw(),
        outputs.heat_recovery.q_dot_avail,
    );

    let mut advisories = Vec::new();
    if delta_q <= 0.0 {
        advisories.push(Advisory::NoWorkingCapacity { delta_q });
    } else if outputs.performance.co2_tpd <= 0.0 {
        advisories.push(Advisory::UnderDesignedBed);
    }

    if timing.binding_constraint == BindingConstraint::Regeneration && !outputs.thermal_feasible() {
        advisories.push(Advisory::ThermalLimitExceeded {
            t_reg: outputs.constraints.thermal.t_reg,
            t_max: outputs.constraints.thermal.t_max,
        });
    }

    if timing.binding_constraint == BindingConstraint::Cooling
        && timing.t_cool_required > COOLING_BOTTLENECK_RATIO * timing.t_reg_required
    {
        let scaled = inputs.operating.m_dot_cool * timing.t_cool_required / timing.t_reg_required;
        advisories.push(Advisory::CoolingBottleneck {
            t_cool: timing.t_cool_required,
            t_reg: timing.t_reg_required,
            recommended_m_dot_cool: scaled.min(MAX_RECOMMENDED_COOLING_FLOW),
        });
    }

    if inputs.biochp.use_q_override {
        advisories.push(Advisory::ManualHeatOverride {
            q_dot_manual: inputs.biochp.q_dot_manual,
        });
    }

    Assessment {
        capture: capture_status(outputs.performance.co2_tpd),
        specific_energy: specific_energy_status(outputs.performance.kwh_per_ton),
        working_capacity: working_capacity_status(delta_q),
        thermal_utilisation: utilisation,
        utilisation: utilisation_status(utilisation),
        closure: closure_status(outputs.closure.relative_gap),
        advisories,
    }
}
