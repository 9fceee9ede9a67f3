//! Model input parameters
//!
//! [`ModelInputs`] is the complete, immutable description of one skid design
//! and its operating point. It is grouped by subsystem, and every group
//! provides defaults matching the baseline design (a 0.85 kg/s BioCHP exhaust
//! treated by four 500 kg zeolite beds).
//!
//! Input files are strict: every field of every group must be present and
//! unknown fields are rejected. A partially populated design is a caller error,
//! not something the model tries to repair.
//!
//! ```toml
//! [biochp]
//! m_dot_exh = 0.85
//! y_co2 = 0.12
//! # ...
//!
//! [bed]
//! n_bed = 4
//! # ...
//! ```

mod adsorbent;
mod bed;
mod biochp;
mod cooling;
mod envelope;
mod operating;

pub use adsorbent::AdsorbentParameters;
pub use bed::BedParameters;
pub use biochp::BioCHPParameters;
pub use cooling::CoolingParameters;
pub use envelope::{EnvelopeRange, EnvelopeViolation, OPERATING_ENVELOPE};
pub use operating::OperatingParameters;

use crate::errors::{TSAError, TSAResult};
use crate::FloatValue;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete set of design and operating inputs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelInputs {
    pub biochp: BioCHPParameters,
    pub bed: BedParameters,
    pub operating: OperatingParameters,
    pub adsorbent: AdsorbentParameters,
    pub cooling: CoolingParameters,
}

impl ModelInputs {
    /// Parse a complete design from a TOML document
    pub fn from_toml_str(contents: &str) -> TSAResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse a complete design from a JSON document
    pub fn from_json_str(contents: &str) -> TSAResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Load a design file, choosing the format from the file extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> TSAResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&contents),
            Some("json") => Self::from_json_str(&contents),
            other => Err(TSAError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    pub fn to_toml_string(&self) -> TSAResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// All numeric fields with their dotted path
    pub fn numeric_fields(&self) -> Vec<(&'static str, FloatValue)> {
        let mut fields = self.biochp.numeric_fields();
        fields.extend(self.bed.numeric_fields());
        fields.extend(self.operating.numeric_fields());
        fields.extend(self.adsorbent.numeric_fields());
        fields.extend(self.cooling.numeric_fields());
        fields
    }

    /// Bit-for-bit equality of every field
    ///
    /// Unlike `==`, this tells `0.0` from `-0.0`, which can flip the sign of an
    /// infinite result.
    pub fn is_identical(&self, other: &Self) -> bool {
        self.biochp.use_q_override == other.biochp.use_q_override
            && self
                .numeric_fields()
                .iter()
                .zip(other.numeric_fields().iter())
                .all(|((_, a), (_, b))| a.to_bits() == b.to_bits())
    }

    /// Reject NaN inputs
    ///
    /// Out-of-range but numeric values (including infinities) are accepted and
    /// propagate through the calculation.
    pub fn check_numeric(&self) -> TSAResult<()> {
        match self.numeric_fields().into_iter().find(|(_, v)| v.is_nan()) {
            Some((field, _)) => Err(TSAError::NonNumericInput {
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Fields that fall outside the recommended operating envelope
    ///
    /// Advisory only. The model evaluates any numeric design.
    pub fn envelope_violations(&self) -> Vec<EnvelopeViolation> {
        let fields = self.numeric_fields();
        OPERATING_ENVELOPE
            .iter()
            .filter_map(|range| {
                fields
                    .iter()
                    .find(|(name, _)| *name == range.field)
                    .and_then(|(_, value)| range.check(*value))
            })
            .collect()
    }

    /// Apply a `<group>.<field>=<value>` assignment
    ///
    /// The value is parsed according to the type of the field it replaces.
    pub fn apply_override(&mut self, assignment: &str) -> TSAResult<()> {
        let (path, raw) = assignment
            .split_once('=')
            .ok_or_else(|| TSAError::InvalidOverride(assignment.to_string()))?;
        let (group, field) = path
            .trim()
            .split_once('.')
            .ok_or_else(|| TSAError::InvalidOverride(assignment.to_string()))?;
        let raw = raw.trim();

        let mut document = toml::Value::try_from(&*self)?;
        let slot = document
            .get_mut(group)
            .and_then(|g| g.get_mut(field))
            .ok_or_else(|| TSAError::UnknownParameter(path.trim().to_string()))?;

        let invalid = || TSAError::InvalidOverride(assignment.to_string());
        let replacement = match &*slot {
            toml::Value::Float(_) => toml::Value::Float(raw.parse().map_err(|_| invalid())?),
            toml::Value::Integer(_) => toml::Value::Integer(raw.parse().map_err(|_| invalid())?),
            toml::Value::Boolean(_) => toml::Value::Boolean(raw.parse().map_err(|_| invalid())?),
            _ => return Err(invalid()),
        };
        *slot = replacement;
        debug!("Override {} = {}", path.trim(), raw);

        *self = document.try_into()?;
        Ok(())
    }

    /// Apply several assignments in order
    pub fn with_overrides<S: AsRef<str>>(mut self, assignments: &[S]) -> TSAResult<Self> {
        for assignment in assignments {
            self.apply_override(assignment.as_ref())?;
        }
        Ok(self)
    }
}
