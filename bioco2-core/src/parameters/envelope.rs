//! Recommended operating envelope
//!
//! Ranges over which the correlations in the model have been exercised. A
//! design outside these ranges is still evaluated, but the result deserves
//! more scrutiny.

use crate::FloatValue;
use serde::Serialize;

/// Recommended range of a single input field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeRange {
    pub field: &'static str,
    pub min: FloatValue,
    pub max: FloatValue,
}

/// An input value found outside its recommended range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvelopeViolation {
    pub field: &'static str,
    pub value: FloatValue,
    pub min: FloatValue,
    pub max: FloatValue,
}

impl EnvelopeRange {
    const fn new(field: &'static str, min: FloatValue, max: FloatValue) -> Self {
        Self { field, min, max }
    }

    pub(crate) fn check(&self, value: FloatValue) -> Option<EnvelopeViolation> {
        if (self.min..=self.max).contains(&value) {
            None
        } else {
            Some(EnvelopeViolation {
                field: self.field,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

pub const OPERATING_ENVELOPE: [EnvelopeRange; 27] = [
    EnvelopeRange::new("biochp.m_dot_exh", 0.1, 3.0),
    EnvelopeRange::new("biochp.y_co2", 0.04, 0.20),
    EnvelopeRange::new("biochp.t_exh_biochp", 473.0, 773.0),
    EnvelopeRange::new("biochp.p_exh", 95000.0, 110000.0),
    EnvelopeRange::new("biochp.t_ambient", 273.0, 323.0),
    EnvelopeRange::new("biochp.delta_t_approach", 5.0, 50.0),
    EnvelopeRange::new("biochp.q_dot_manual", 10.0, 500.0),
    EnvelopeRange::new("bed.n_bed", 1.0, 8.0),
    EnvelopeRange::new("bed.m_ads", 50.0, 2000.0),
    EnvelopeRange::new("bed.rho_bulk", 500.0, 800.0),
    EnvelopeRange::new("bed.d_p", 0.001, 0.010),
    EnvelopeRange::new("bed.epsilon", 0.30, 0.45),
    EnvelopeRange::new("bed.l_over_d", 1.0, 5.0),
    EnvelopeRange::new("bed.t_wall", 0.003, 0.012),
    EnvelopeRange::new("operating.t_ads", 293.0, 373.0),
    EnvelopeRange::new("operating.t_reg", 393.0, 573.0),
    EnvelopeRange::new("operating.y_co2_reg", 0.5, 1.0),
    EnvelopeRange::new("operating.m_dot_purge", 0.01, 0.20),
    EnvelopeRange::new("operating.m_dot_cool", 0.05, 0.50),
    EnvelopeRange::new("operating.eta_blower", 0.50, 0.90),
    EnvelopeRange::new("adsorbent.cp_ads", 700.0, 1100.0),
    EnvelopeRange::new("adsorbent.f_loss", 0.0, 0.25),
    EnvelopeRange::new("adsorbent.q_m", 3.0, 8.0),
    EnvelopeRange::new("adsorbent.delta_h_ads", 30.0, 50.0),
    EnvelopeRange::new("adsorbent.b0", 0.5e-7, 20.0e-7),
    EnvelopeRange::new("adsorbent.f_moisture", 0.50, 1.00),
    EnvelopeRange::new("cooling.t_cool_in", 288.0, 323.0),
];
