//! CO2 mass-flow partition
//!
//! Splits the exhaust mass flow into CO2 and inert components using
//! density-weighted mole fractions at the TSA inlet:
//!
//! $$\dot{m}_{CO2} = \dot{m}_{exh} \frac{y \rho_{CO2}}{y \rho_{CO2} + (1 - y) \rho_{N2}}$$

use bioco2_core::thermo::GasProperties;
use bioco2_core::FloatValue;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Co2Partition {
    /// Pure CO2 density at inlet conditions
    /// unit: kg / m^3
    pub rho_co2: FloatValue,
    /// Pure N2 density at inlet conditions
    /// unit: kg / m^3
    pub rho_n2: FloatValue,
    /// CO2 mass fraction of the exhaust
    /// unit: dimensionless
    pub mass_fraction_co2: FloatValue,
    /// CO2 mass flow
    /// unit: kg / s
    pub m_dot_co2: FloatValue,
    /// Inert mass flow
    /// unit: kg / s
    pub m_dot_inert: FloatValue,
}

impl Co2Partition {
    pub fn calculate(
        gas: &GasProperties,
        m_dot_exh: FloatValue,
        y_co2: FloatValue,
        t_exh: FloatValue,
        p_exh: FloatValue,
    ) -> Self {
        let constants = gas.constants();
        let rho_co2 = gas.ideal_gas_density(t_exh, p_exh, constants.molar_mass_co2);
        let rho_n2 = gas.ideal_gas_density(t_exh, p_exh, constants.molar_mass_n2);

        let mass_fraction_co2 = (y_co2 * rho_co2) / (y_co2 * rho_co2 + (1.0 - y_co2) * rho_n2);
        let m_dot_co2 = m_dot_exh * (y_co2 * rho_co2) / (y_co2 * rho_co2 + (1.0 - y_co2) * rho_n2);

        Self {
            rho_co2,
            rho_n2,
            mass_fraction_co2,
            m_dot_co2,
            m_dot_inert: m_dot_exh - m_dot_co2,
        }
    }
}
