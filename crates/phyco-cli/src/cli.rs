use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "PhycoSim CLI - Model CO₂ sequestration by algae photobioreactor fleets under named or custom scenarios.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate one scenario (or a custom parameter set) at fleet scale.
    Run(RunArgs),
    /// List the registered scenarios with their parameters and pipelines.
    Scenarios(ScenariosArgs),
    /// Run every registered scenario at a common fleet size and compare.
    Compare(CompareArgs),
}

/// Energy augmentation modules selectable from the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleArg {
    /// Wave-power buffering that raises effective uptime.
    Wave,
    /// Solar-powered LED lighting extending productive hours into the night.
    SolarLed,
    /// Lifted net arrays multiplying the effective growing area.
    Lift,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    // --- Scenario Selection ---
    /// Use a predefined scenario (see `phyco scenarios`). Without this, a
    /// custom run starts from the reference reactor.
    #[arg(short, long, value_name = "NAME")]
    pub scenario: Option<String>,

    /// Merge additional scenario definitions from a TOML file.
    #[arg(long, value_name = "PATH")]
    pub scenario_file: Option<PathBuf>,

    /// Number of households / reactors in the fleet.
    #[arg(long, default_value_t = 1, value_name = "COUNT")]
    pub households: u64,

    // --- Parameter Overrides ---
    /// Override the reactor area in square meters.
    #[arg(long, value_name = "FLOAT")]
    pub area_m2: Option<f64>,

    /// Override the biomass productivity in g/m²/day.
    #[arg(long, value_name = "FLOAT")]
    pub productivity: Option<f64>,

    /// Override the uptime fraction (0.0-1.0).
    #[arg(long, value_name = "FLOAT")]
    pub uptime: Option<f64>,

    /// Override the CO₂ fixed per gram of dry biomass.
    #[arg(long, value_name = "FLOAT")]
    pub co2_per_gram: Option<f64>,

    /// Energy augmentation modules for a custom run, applied in the given
    /// order. Cannot be combined with --scenario.
    #[arg(long = "augment", value_enum, value_name = "MODULE")]
    pub augment: Vec<ModuleArg>,

    // --- Reporting ---
    /// Average household annual emissions in tons CO₂, for the offset share.
    #[arg(long, default_value_t = 48.0, value_name = "TONS")]
    pub household_emissions: f64,

    // --- Fuel Mode ---
    /// Enable fuel mode: convert biomass into fuel and estimate avoided CO₂.
    #[arg(long)]
    pub use_fuel: bool,

    /// Fraction of biomass that is lipid/oil (0-1).
    #[arg(long, default_value_t = 0.30, value_name = "FLOAT")]
    pub lipid_fraction: f64,

    /// Fraction of lipids converted into usable fuel (0-1).
    #[arg(long, default_value_t = 0.80, value_name = "FLOAT")]
    pub fuel_conversion_efficiency: f64,

    /// Fuel density in kg/L.
    #[arg(long, default_value_t = 0.88, value_name = "FLOAT")]
    pub fuel_density_kg_per_l: f64,

    /// CO₂ emitted by burning 1 L of fossil diesel (kg CO₂/L).
    #[arg(long, default_value_t = 2.6, value_name = "FLOAT")]
    pub fossil_co2_per_liter: f64,

    /// Processing energy needed per liter of algal fuel (kWh/L).
    #[arg(long, default_value_t = 0.0, value_name = "FLOAT")]
    pub process_energy_kwh_per_liter: f64,

    /// CO₂ intensity of the processing energy (kg CO₂/kWh).
    #[arg(long, default_value_t = 0.0, value_name = "FLOAT")]
    pub process_co2_kg_per_kwh: f64,
}

/// Arguments for the `scenarios` subcommand.
#[derive(Args, Debug)]
pub struct ScenariosArgs {
    /// Merge additional scenario definitions from a TOML file.
    #[arg(long, value_name = "PATH")]
    pub scenario_file: Option<PathBuf>,
}

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Merge additional scenario definitions from a TOML file.
    #[arg(long, value_name = "PATH")]
    pub scenario_file: Option<PathBuf>,

    /// Number of households / reactors in each fleet.
    #[arg(long, default_value_t = 1, value_name = "COUNT")]
    pub households: u64,

    /// Write the comparison as CSV to this path instead of printing a table.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}
