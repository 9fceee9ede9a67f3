//! Energy closure diagnostic
//!
//! Compares the regeneration heat supplied with the heat accounted for in
//! desorption and cooling. The gap is expected to be non-zero since the
//! supplied heat also covers sensible, purge and loss terms. It is reported,
//! never enforced.

use bioco2_core::FloatValue;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyClosure {
    /// unit: J
    pub q_in: FloatValue,
    /// unit: J
    pub q_out: FloatValue,
    /// `|q_in - q_out| / q_in`, zero when nothing is supplied
    /// unit: dimensionless
    pub relative_gap: FloatValue,
}

impl EnergyClosure {
    pub fn check(q_total: FloatValue, q_des: FloatValue, q_cool: FloatValue) -> Self {
        let q_in = q_total;
        let q_out = q_des + q_cool;
        let relative_gap = if q_in > 0.0 {
            (q_in - q_out).abs() / q_in
        } else {
            0.0
        };

        Self {
            q_in,
            q_out,
            relative_gap,
        }
    }
}
