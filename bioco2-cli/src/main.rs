//! BioCO2 command-line front end
//!
//! Evaluates a TSA capture design from a TOML or JSON file, with optional
//! dotted-path overrides for quick what-if runs.
//!
//! # Usage
//!
//! ```bash
//! bioco2 defaults > design.toml
//! bioco2 run --input design.toml --set operating.t_reg=480 --set bed.n_bed=6
//! bioco2 run --format json
//! bioco2 isotherm --max-kpa 20 --step-kpa 1
//! ```

use bioco2_components::components::{IsothermCurve, DEFAULT_CURVE_MAX_KPA, DEFAULT_CURVE_STEP_KPA};
use bioco2_components::diagnostics::{assess, Assessment};
use bioco2_components::{compute, ModelOutputs};
use bioco2_core::errors::{TSAError, TSAResult};
use bioco2_core::parameters::ModelInputs;
use bioco2_core::FloatValue;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Steady-cycle model of a waste-heat driven TSA CO2 capture skid
#[derive(Parser, Debug)]
#[command(name = "bioco2", version)]
#[command(about = "Evaluate a BioCHP exhaust TSA CO2 capture design")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the baseline design as TOML
    Defaults,
    /// Evaluate a design and print results and diagnostics
    Run {
        #[command(flatten)]
        design: DesignArgs,

        /// Output format. In JSON, non-finite numbers are written as the
        /// strings "inf", "-inf" and "NaN"
        #[arg(long, value_enum, default_value_t = Format::Summary)]
        format: Format,
    },
    /// Print the adsorption and regeneration isotherms as CSV
    Isotherm {
        #[command(flatten)]
        design: DesignArgs,

        /// Upper end of the pressure grid in kPa
        #[arg(long, default_value_t = DEFAULT_CURVE_MAX_KPA)]
        max_kpa: FloatValue,

        /// Pressure grid spacing in kPa
        #[arg(long, default_value_t = DEFAULT_CURVE_STEP_KPA)]
        step_kpa: FloatValue,
    },
}

#[derive(Args, Debug)]
struct DesignArgs {
    /// Design file (.toml or .json). The baseline design is used if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Override a parameter, e.g. `operating.t_reg=480`. May be repeated
    #[arg(short = 's', long = "set", value_name = "GROUP.FIELD=VALUE")]
    overrides: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Summary,
    Json,
}

impl DesignArgs {
    fn load(&self) -> TSAResult<ModelInputs> {
        let inputs = match &self.input {
            Some(path) => ModelInputs::from_file(path)?,
            None => ModelInputs::default(),
        };
        inputs.with_overrides(&self.overrides)
    }
}

fn print_summary(inputs: &ModelInputs, outputs: &ModelOutputs, assessment: &Assessment) {
    let p = &outputs.performance;
    let t = &outputs.timing;

    println!("Heat recovery");
    println!(
        "  available heat        {:>10.1} kW{}",
        outputs.heat_recovery.q_dot_avail,
        if outputs.heat_recovery.overridden { " (manual)" } else { "" }
    );
    println!("  regen air ceiling     {:>10.1} K", outputs.heat_recovery.t_regen_air_max);
    println!("Beds ({} x {:.0} kg)", inputs.bed.n_bed, inputs.bed.m_ads);
    println!(
        "  D x L                 {:>6.3} x {:.3} m",
        outputs.geometry.d, outputs.geometry.l
    );
    println!(
        "  working capacity      {:>10.3} mol/kg [{}]",
        outputs.capacity.delta_q, assessment.working_capacity
    );
    println!("  CO2 per bed per cycle {:>10.2} kg", outputs.regeneration.m_co2_bed);
    println!("Cycle");
    for (phase, duration) in outputs.cycle_phases() {
        println!("  {:<21} {:>10.0} s", phase.to_string(), duration);
    }
    println!(
        "  effective             {:>10.0} s (bound by {})",
        t.t_cycle_effective, t.binding_constraint
    );
    println!("Regeneration energy per bed per cycle");
    for (sink, mj) in outputs.energy_breakdown() {
        println!("  {:<21} {:>10.2} MJ", sink, mj);
    }
    println!("Performance");
    println!("  capture rate          {:>10.3} t/day [{}]", p.co2_tpd, assessment.capture);
    println!(
        "  specific energy       {:>10.1} kWh/t [{}]",
        p.kwh_per_ton, assessment.specific_energy
    );
    println!("  blower power          {:>10.2} kW", p.electrical_kw);
    println!(
        "  thermal utilisation   {:>10.1} % [{}]",
        assessment.thermal_utilisation, assessment.utilisation
    );
    println!(
        "  energy closure gap    {:>10.3} [{}]",
        outputs.closure.relative_gap, assessment.closure
    );

    if !assessment.advisories.is_empty() {
        println!("Advisories");
        for advisory in &assessment.advisories {
            println!("  - {}", advisory);
        }
    }
}

/// Convert to JSON, keeping infinities and NaN distinguishable
///
/// `serde_json` writes every non-finite float as `null`. TOML values carry
/// them through, so the document is built as TOML first.
fn to_json(value: toml::Value) -> serde_json::Value {
    use serde_json::Value as Json;
    match value {
        toml::Value::String(s) => Json::String(s),
        toml::Value::Integer(i) => Json::from(i),
        toml::Value::Float(f) => match serde_json::Number::from_f64(f) {
            Some(n) => Json::Number(n),
            None if f.is_nan() => Json::String("NaN".to_string()),
            None if f > 0.0 => Json::String("inf".to_string()),
            None => Json::String("-inf".to_string()),
        },
        toml::Value::Boolean(b) => Json::Bool(b),
        toml::Value::Datetime(d) => Json::String(d.to_string()),
        toml::Value::Array(items) => Json::Array(items.into_iter().map(to_json).collect()),
        toml::Value::Table(table) => {
            Json::Object(table.into_iter().map(|(k, v)| (k, to_json(v))).collect())
        }
    }
}

fn json_document(
    inputs: &ModelInputs,
    outputs: &ModelOutputs,
    assessment: &Assessment,
) -> TSAResult<serde_json::Value> {
    let mut document = toml::Table::new();
    document.insert("inputs".to_string(), toml::Value::try_from(inputs)?);
    document.insert("outputs".to_string(), toml::Value::try_from(outputs)?);
    document.insert("assessment".to_string(), toml::Value::try_from(assessment)?);
    Ok(to_json(toml::Value::Table(document)))
}

fn sample_isotherm(
    outputs: &ModelOutputs,
    max_kpa: FloatValue,
    step_kpa: FloatValue,
) -> TSAResult<IsothermCurve> {
    let curve = outputs.isotherm_curve(max_kpa, step_kpa);
    if curve.is_empty() {
        return Err(TSAError::InvalidCurveGrid { max_kpa, step_kpa });
    }
    Ok(curve)
}

fn run(cli: Cli) -> TSAResult<()> {
    match cli.command {
        Command::Defaults => {
            print!("{}", ModelInputs::default().to_toml_string()?);
        }
        Command::Run { design, format } => {
            let inputs = design.load()?;
            let outputs = compute(&inputs)?;
            let assessment = assess(&inputs, &outputs);
            match format {
                Format::Summary => print_summary(&inputs, &outputs, &assessment),
                Format::Json => {
                    let document = json_document(&inputs, &outputs, &assessment)?;
                    println!("{}", serde_json::to_string_pretty(&document)?);
                }
            }
        }
        Command::Isotherm {
            design,
            max_kpa,
            step_kpa,
        } => {
            let inputs = design.load()?;
            let outputs = compute(&inputs)?;
            let curve = sample_isotherm(&outputs, max_kpa, step_kpa)?;
            println!("pressure_kpa,loading_ads,loading_reg");
            for i in 0..curve.len() {
                println!(
                    "{},{},{}",
                    curve.pressure_kpa[i], curve.loading_ads[i], curve.loading_reg[i]
                );
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
