//! Skid components
//!
//! Components are organised by physical sub-process:
//! - `heat_exchanger`: thermal power recovered from the BioCHP exhaust
//! - `geometry`: bed dimensions and shell steel mass
//! - `co2_flow`: CO2 share of the exhaust mass flow
//! - `isotherm`: Langmuir isotherm and working capacity
//! - `regeneration`: regeneration energy balance
//! - `cooling`: post-regeneration cooling time
//! - `pressure_drop`: Ergun pressure drop and blower power
//! - `cycle`: cycle timing and binding constraint
//! - `performance`: plant-level capture rate and specific energy
//! - `closure`: energy closure diagnostic

mod closure;
mod co2_flow;
mod cooling;
mod cycle;
mod geometry;
mod heat_exchanger;
mod isotherm;
mod performance;
mod pressure_drop;
mod regeneration;

pub use closure::EnergyClosure;
pub use co2_flow::Co2Partition;
pub use cooling::{CoolingEstimate, CoolingEstimator};
pub use cycle::{
    adsorption_time, max_propagating_nan, BindingConstraint, CycleTiming, BINDING_PRIORITY,
};
pub use geometry::BedGeometry;
pub use heat_exchanger::{HeatExchanger, HeatRecovery};
pub use isotherm::{
    IsothermCurve, LangmuirIsotherm, OperatingPoint, WorkingCapacity, DEFAULT_CURVE_MAX_KPA,
    DEFAULT_CURVE_STEP_KPA, MAX_CURVE_POINTS,
};
pub use performance::CapturePerformance;
pub use pressure_drop::{PackedBed, PressureDrop};
pub use regeneration::{time_at_power, RegenerationBalance, RegenerationEnergy};
