//! Langmuir isotherm and working capacity
//!
//! Equilibrium CO2 loading on the zeolite follows a single-site Langmuir
//! isotherm with a van 't Hoff temperature dependence:
//!
//! $$ q(T, P) = q_m \frac{b(T) P}{1 + b(T) P}, \quad b(T) = b_0 \exp\left(\frac{\Delta H_{ads}}{R T}\right) $$
//!
//! # Units
//!
//! `b0` is in kPa^-1 and the partial pressure is converted from Pa to kPa
//! before it is used. A constant calibrated per Pa, bar or atm gives loadings
//! that are off by three to six orders of magnitude, so the conversion is part
//! of the contract of [`LangmuirIsotherm::loading`].
//!
//! `q_m` is in mmol/g, which is numerically equal to mol/kg.
//!
//! # Sign convention
//!
//! $\Delta H_{ads}$ is stored as a positive magnitude and enters the exponent
//! with a positive sign, so the affinity rises as the bed cools.
//!
//! # Working capacity
//!
//! The swing between adsorption at $(T_{ads}, y_{CO2} P_{exh})$ and
//! regeneration at $(T_{reg}, y_{CO2,reg} P_{exh})$, derated for competitive
//! water adsorption:
//!
//! $$ \Delta q = (q_{ads} - q_{reg}) f_{moisture} $$
//!
//! A non-positive swing is a legal state. It means regeneration does not undo
//! adsorption and the design captures nothing.

use bioco2_core::parameters::AdsorbentParameters;
use bioco2_core::FloatValue;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Upper end of the default pressure grid
/// unit: kPa
pub const DEFAULT_CURVE_MAX_KPA: FloatValue = 30.0;

/// Spacing of the default pressure grid
/// unit: kPa
pub const DEFAULT_CURVE_STEP_KPA: FloatValue = 0.5;

/// Largest pressure grid [`LangmuirIsotherm::curve`] will sample
pub const MAX_CURVE_POINTS: usize = 100_000;

/// Number of grid points from 0 to `max_kpa` in steps of `step_kpa`
fn curve_points(max_kpa: FloatValue, step_kpa: FloatValue) -> usize {
    let valid = step_kpa > 0.0 && step_kpa.is_finite() && max_kpa >= 0.0 && max_kpa.is_finite();
    if !valid {
        return 0;
    }
    let intervals = (max_kpa / step_kpa + 1e-9).floor();
    if intervals >= MAX_CURVE_POINTS as FloatValue {
        return 0;
    }
    intervals as usize + 1
}

/// A Langmuir isotherm with resolved parameters
///
/// Plain data: evaluating it has no side effects and it can be copied out of
/// the output record and called any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LangmuirIsotherm {
    /// Saturation capacity
    /// unit: mol / kg
    pub q_m: FloatValue,
    /// Pre-exponential affinity
    /// unit: kPa^-1
    pub b0: FloatValue,
    /// Heat of adsorption (positive magnitude)
    /// unit: J / mol
    pub delta_h_j: FloatValue,
    /// unit: J / (mol K)
    pub gas_constant: FloatValue,
}

/// Loadings at the adsorption and regeneration operating points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkingCapacity {
    /// unit: K
    pub t_ads: FloatValue,
    /// unit: K
    pub t_reg: FloatValue,
    /// CO2 partial pressure during adsorption
    /// unit: Pa
    pub p_co2_ads: FloatValue,
    /// CO2 partial pressure during regeneration
    /// unit: Pa
    pub p_co2_reg: FloatValue,
    /// unit: mol / kg
    pub q_ads: FloatValue,
    /// unit: mol / kg
    pub q_reg: FloatValue,
    /// Swing before the moisture derating
    /// unit: mol / kg
    pub delta_q_raw: FloatValue,
    /// unit: mol / kg
    pub delta_q: FloatValue,
}

/// A marked point on a sampled isotherm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatingPoint {
    pub label: &'static str,
    /// unit: kPa
    pub p_kpa: FloatValue,
    /// unit: mol / kg
    pub loading: FloatValue,
}

/// Both isotherms sampled on a shared pressure grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsothermCurve {
    /// unit: K
    pub t_ads: FloatValue,
    /// unit: K
    pub t_reg: FloatValue,
    /// unit: kPa
    pub pressure_kpa: Array1<FloatValue>,
    /// unit: mol / kg
    pub loading_ads: Array1<FloatValue>,
    /// unit: mol / kg
    pub loading_reg: Array1<FloatValue>,
    pub operating_points: Vec<OperatingPoint>,
}

impl LangmuirIsotherm {
    pub fn from_parameters(parameters: &AdsorbentParameters, gas_constant: FloatValue) -> Self {
        Self {
            q_m: parameters.q_m,
            b0: parameters.b0,
            delta_h_j: parameters.delta_h_ads_j(),
            gas_constant,
        }
    }

    /// Temperature-dependent affinity
    ///
    /// unit: kPa^-1
    pub fn affinity(&self, temperature: FloatValue) -> FloatValue {
        if self.b0 == 0.0 {
            return 0.0;
        }
        self.b0 * (self.delta_h_j / (self.gas_constant * temperature)).exp()
    }

    /// Equilibrium loading at a CO2 partial pressure given in Pa
    ///
    /// Near absolute zero the affinity overflows. The loading then saturates
    /// at `q_m` for any positive pressure and stays zero at zero pressure.
    ///
    /// unit: mol / kg
    pub fn loading(&self, temperature: FloatValue, p_co2_pa: FloatValue) -> FloatValue {
        let p_kpa = p_co2_pa / 1000.0;
        if p_kpa == 0.0 {
            return 0.0;
        }
        let bp = self.affinity(temperature) * p_kpa;
        if bp == FloatValue::INFINITY {
            return self.q_m;
        }
        self.q_m * (bp / (1.0 + bp))
    }

    /// Loading swing between adsorption and regeneration conditions
    pub fn working_capacity(
        &self,
        t_ads: FloatValue,
        p_co2_ads: FloatValue,
        t_reg: FloatValue,
        p_co2_reg: FloatValue,
        f_moisture: FloatValue,
    ) -> WorkingCapacity {
        let q_ads = self.loading(t_ads, p_co2_ads);
        let q_reg = self.loading(t_reg, p_co2_reg);
        let delta_q_raw = q_ads - q_reg;

        WorkingCapacity {
            t_ads,
            t_reg,
            p_co2_ads,
            p_co2_reg,
            q_ads,
            q_reg,
            delta_q_raw,
            delta_q: delta_q_raw * f_moisture,
        }
    }

    /// Sample the adsorption and regeneration isotherms from 0 to `max_kpa`
    ///
    /// The grid is empty if the step is not a positive finite number, or if it
    /// would need more than [`MAX_CURVE_POINTS`] points.
    pub fn curve(
        &self,
        t_ads: FloatValue,
        t_reg: FloatValue,
        max_kpa: FloatValue,
        step_kpa: FloatValue,
    ) -> IsothermCurve {
        let n_points = curve_points(max_kpa, step_kpa);
        let pressure_kpa = Array1::from_iter((0..n_points).map(|i| i as FloatValue * step_kpa));
        let loading_ads = pressure_kpa.mapv(|p| self.loading(t_ads, p * 1000.0));
        let loading_reg = pressure_kpa.mapv(|p| self.loading(t_reg, p * 1000.0));

        IsothermCurve {
            t_ads,
            t_reg,
            pressure_kpa,
            loading_ads,
            loading_reg,
            operating_points: Vec::new(),
        }
    }
}

impl IsothermCurve {
    /// Mark the adsorption and regeneration operating points
    pub fn with_operating_points(mut self, capacity: &WorkingCapacity) -> Self {
        self.operating_points = vec![
            OperatingPoint {
                label: "adsorption",
                p_kpa: capacity.p_co2_ads / 1000.0,
                loading: capacity.q_ads,
            },
            OperatingPoint {
                label: "regeneration",
                p_kpa: capacity.p_co2_reg / 1000.0,
                loading: capacity.q_reg,
            },
        ];
        self
    }

    pub fn len(&self) -> usize {
        self.pressure_kpa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressure_kpa.is_empty()
    }
}
