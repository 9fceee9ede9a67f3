//! Plant-level capture rate and specific energy
//!
//! Converts per-bed, per-cycle quantities into hourly and daily figures.
//! A cycle time that is not a positive finite number means the plant never
//! completes a cycle, so the cycle frequency is zero and the specific energy
//! is infinite.

use bioco2_core::constants::{JOULES_PER_KWH, SECONDS_PER_HOUR};
use bioco2_core::FloatValue;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapturePerformance {
    /// unit: 1 / h
    pub cycles_per_hour: FloatValue,
    /// unit: kg / h
    pub co2_per_hour: FloatValue,
    /// unit: t / day
    pub co2_tpd: FloatValue,
    /// unit: t / h
    pub co2_tph: FloatValue,
    /// Regeneration heat per bed per cycle
    /// unit: kWh
    pub thermal_kwh: FloatValue,
    /// Hourly thermal demand
    /// unit: kWh / h
    pub thermal_kwh_hr: FloatValue,
    /// unit: kW
    pub electrical_kw: FloatValue,
    /// unit: kWh / h
    pub e_total_kwh_hr: FloatValue,
    /// unit: kWh / t CO2
    pub kwh_per_ton: FloatValue,
    /// Mean heat demand while regenerating
    /// unit: kW
    pub q_dot_demand: FloatValue,
}

impl CapturePerformance {
    /// Aggregate the plant performance
    ///
    /// `w_blower` is in W, `q_total` in J and all times in s.
    pub fn aggregate(
        m_co2_bed: FloatValue,
        n_bed: u32,
        t_cycle_effective: FloatValue,
        q_total: FloatValue,
        t_reg_required: FloatValue,
        w_blower: FloatValue,
    ) -> Self {
        let cycles_per_hour = if t_cycle_effective.is_finite() && t_cycle_effective > 0.0 {
            SECONDS_PER_HOUR / t_cycle_effective
        } else {
            0.0
        };

        let co2_per_hour = m_co2_bed * n_bed as FloatValue * cycles_per_hour;
        let co2_tpd = co2_per_hour * 24.0 / 1000.0;
        let co2_tph = co2_per_hour / 1000.0;

        let thermal_kwh = q_total / JOULES_PER_KWH;
        let thermal_kwh_hr = thermal_kwh * cycles_per_hour;
        let electrical_kw = w_blower / 1000.0;
        let e_total_kwh_hr = thermal_kwh_hr + electrical_kw;
        let kwh_per_ton = if co2_tph > 0.0 {
            e_total_kwh_hr / co2_tph
        } else {
            FloatValue::INFINITY
        };

        let q_dot_demand = if t_reg_required > 0.0 {
            q_total / t_reg_required / 1000.0
        } else {
            0.0
        };

        Self {
            cycles_per_hour,
            co2_per_hour,
            co2_tpd,
            co2_tph,
            thermal_kwh,
            thermal_kwh_hr,
            electrical_kw,
            e_total_kwh_hr,
            kwh_per_ton,
            q_dot_demand,
        }
    }
}
