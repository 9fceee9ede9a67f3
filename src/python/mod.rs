use bioco2_components::components::LangmuirIsotherm;
use bioco2_components::diagnostics::assess;
use bioco2_components::{Engine, ModelOutputs};
use bioco2_core::errors::TSAResult;
use bioco2_core::parameters::ModelInputs;
use bioco2_core::FloatValue;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pythonize::{depythonize_bound, pythonize};

fn value_error<E: std::fmt::Display>(e: E) -> PyErr {
    PyValueError::new_err(format!("{}", e))
}

fn inputs_from_dict(inputs: Bound<'_, PyAny>) -> PyResult<ModelInputs> {
    depythonize_bound::<ModelInputs>(inputs).map_err(value_error)
}

/// Evaluate a complete design given as a nested dict
#[pyfunction]
fn compute(py: Python<'_>, inputs: Bound<'_, PyAny>) -> PyResult<PyObject> {
    let inputs = inputs_from_dict(inputs)?;
    let outputs = Engine::default().compute(&inputs).map_err(value_error)?;
    pythonize(py, &outputs).map_err(value_error)
}

fn evaluate_design(inputs: &ModelInputs) -> TSAResult<(ModelOutputs, PyIsotherm)> {
    let outputs = Engine::default().compute(inputs)?;
    let isotherm = PyIsotherm(outputs.isotherm);
    Ok((outputs, isotherm))
}

/// Evaluate a design and also return its isotherm, ready to call
#[pyfunction]
fn evaluate(py: Python<'_>, inputs: Bound<'_, PyAny>) -> PyResult<(PyObject, PyIsotherm)> {
    let inputs = inputs_from_dict(inputs)?;
    let (outputs, isotherm) = evaluate_design(&inputs).map_err(value_error)?;
    Ok((pythonize(py, &outputs).map_err(value_error)?, isotherm))
}

/// Grade a design and list advisories
#[pyfunction]
fn diagnose(py: Python<'_>, inputs: Bound<'_, PyAny>) -> PyResult<PyObject> {
    let inputs = inputs_from_dict(inputs)?;
    let outputs = Engine::default().compute(&inputs).map_err(value_error)?;
    pythonize(py, &assess(&inputs, &outputs)).map_err(value_error)
}

/// The baseline design as a nested dict
#[pyfunction]
fn default_inputs(py: Python<'_>) -> PyResult<PyObject> {
    pythonize(py, &ModelInputs::default()).map_err(value_error)
}

/// Langmuir isotherm of a design, callable after the evaluation
#[pyclass(name = "Isotherm")]
#[derive(Clone)]
pub struct PyIsotherm(LangmuirIsotherm);

#[pymethods]
impl PyIsotherm {
    #[new]
    fn new(inputs: Bound<'_, PyAny>) -> PyResult<Self> {
        let inputs = inputs_from_dict(inputs)?;
        let engine = Engine::default();
        Ok(Self(LangmuirIsotherm::from_parameters(
            &inputs.adsorbent,
            engine.constants().gas_constant,
        )))
    }

    /// The isotherm stored in the dict returned by `compute`
    #[staticmethod]
    fn from_outputs(outputs: Bound<'_, PyAny>) -> PyResult<Self> {
        let isotherm = outputs.get_item("isotherm")?;
        Ok(Self(depythonize_bound::<LangmuirIsotherm>(isotherm).map_err(value_error)?))
    }

    /// Loading in mol/kg at a temperature in K and CO2 partial pressure in Pa
    fn loading(&self, temperature: FloatValue, p_co2_pa: FloatValue) -> FloatValue {
        self.0.loading(temperature, p_co2_pa)
    }

    fn __repr__(&self) -> String {
        format!(
            "Isotherm(q_m={}, b0={}, delta_h_j={})",
            self.0.q_m, self.0.b0, self.0.delta_h_j
        )
    }
}

#[pymodule]
#[pyo3(name = "_lib")]
fn bioco2(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(compute, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    m.add_function(wrap_pyfunction!(diagnose, m)?)?;
    m.add_function(wrap_pyfunction!(default_inputs, m)?)?;
    m.add_class::<PyIsotherm>()?;
    Ok(())
}
