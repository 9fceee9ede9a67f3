use thiserror::Error;

/// Error type for invalid operations.
///
/// Arithmetic degeneracies (division by a non-positive rate, zero working
/// capacity, ...) are not errors. They surface as non-finite values in the
/// affected output fields.
#[derive(Error, Debug)]
pub enum TSAError {
    #[error("Unsupported species '{0}'. Shomate coefficients are only available for CO2 and N2")]
    UnsupportedSpecies(String),
    #[error("Input '{field}' is not a number")]
    NonNumericInput { field: String },
    #[error("Unknown parameter '{0}'")]
    UnknownParameter(String),
    #[error("Invalid override '{0}'. Expected <group>.<field>=<value>")]
    InvalidOverride(String),
    #[error("Unsupported input file format '{0}'. Use .toml or .json")]
    UnsupportedFormat(String),
    #[error("Cannot sample an isotherm from 0 to {max_kpa} kPa in steps of {step_kpa} kPa")]
    InvalidCurveGrid { max_kpa: f64, step_kpa: f64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("TOML serialisation error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type for `Result<T, TSAError>`.
pub type TSAResult<T> = Result<T, TSAError>;
