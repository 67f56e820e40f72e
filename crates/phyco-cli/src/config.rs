use crate::cli::{ModuleArg, RunArgs};
use crate::error::{CliError, Result};
use phycosim::core::augment::EnergyModule;
use phycosim::core::fuel::FuelParams;
use phycosim::engine::config::{
    ParameterOverrides, ScenarioSelector, SimulationConfig, SimulationConfigBuilder,
};
use phycosim::engine::error::EngineError;
use phycosim::engine::registry::ScenarioRegistry;
use phycosim::workflows::simulate::ReportOptions;
use std::path::Path;

impl From<ModuleArg> for EnergyModule {
    fn from(arg: ModuleArg) -> Self {
        match arg {
            ModuleArg::Wave => EnergyModule::wave(),
            ModuleArg::SolarLed => EnergyModule::solar_led(),
            ModuleArg::Lift => EnergyModule::lift(),
        }
    }
}

/// Builds the scenario registry: the built-in table, plus any definitions
/// merged from a user-supplied TOML file.
pub fn build_registry(scenario_file: Option<&Path>) -> Result<ScenarioRegistry> {
    let mut registry = ScenarioRegistry::builtin();
    if let Some(path) = scenario_file {
        registry.load_file(path)?;
    }
    Ok(registry)
}

pub fn build_simulation_config(args: &RunArgs) -> Result<SimulationConfig> {
    let selector = match &args.scenario {
        Some(name) => ScenarioSelector::Named { name: name.clone() },
        None => ScenarioSelector::Custom,
    };
    let overrides = ParameterOverrides {
        area_m2: args.area_m2,
        productivity_g_per_m2_day: args.productivity,
        co2_per_gram_biomass: args.co2_per_gram,
        uptime_fraction: args.uptime,
    };
    let modules = args.augment.iter().map(|&arg| arg.into()).collect();

    SimulationConfigBuilder::new()
        .selector(selector)
        .overrides(overrides)
        .modules(modules)
        .unit_count(args.households)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

pub fn build_report_options(args: &RunArgs) -> Result<ReportOptions> {
    let fuel = if args.use_fuel {
        Some(
            FuelParams::new(
                args.lipid_fraction,
                args.fuel_conversion_efficiency,
                args.fuel_density_kg_per_l,
                args.fossil_co2_per_liter,
                args.process_energy_kwh_per_liter,
                args.process_co2_kg_per_kwh,
            )
            .map_err(EngineError::from)?,
        )
    } else {
        None
    };
    Ok(ReportOptions {
        household_emissions_tons: Some(args.household_emissions),
        fuel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_args() -> RunArgs {
        RunArgs {
            scenario: None,
            scenario_file: None,
            households: 1,
            area_m2: None,
            productivity: None,
            uptime: None,
            co2_per_gram: None,
            augment: Vec::new(),
            household_emissions: 48.0,
            use_fuel: false,
            lipid_fraction: 0.30,
            fuel_conversion_efficiency: 0.80,
            fuel_density_kg_per_l: 0.88,
            fossil_co2_per_liter: 2.6,
            process_energy_kwh_per_liter: 0.0,
            process_co2_kg_per_kwh: 0.0,
        }
    }

    #[test]
    fn scenario_flag_selects_a_named_run() {
        let mut args = default_args();
        args.scenario = Some("realistic_medium".to_string());
        args.households = 1_000_000;
        let config = build_simulation_config(&args).unwrap();
        assert_eq!(
            config.selector,
            ScenarioSelector::Named {
                name: "realistic_medium".to_string()
            }
        );
        assert_eq!(config.unit_count, 1_000_000);
    }

    #[test]
    fn override_flags_map_onto_parameter_overrides() {
        let mut args = default_args();
        args.area_m2 = Some(6.0);
        args.uptime = Some(0.9);
        let config = build_simulation_config(&args).unwrap();
        assert_eq!(config.selector, ScenarioSelector::Custom);
        assert_eq!(config.overrides.area_m2, Some(6.0));
        assert_eq!(config.overrides.uptime_fraction, Some(0.9));
        assert_eq!(config.overrides.productivity_g_per_m2_day, None);
    }

    #[test]
    fn augment_flags_become_modules_in_order() {
        let mut args = default_args();
        args.augment = vec![ModuleArg::Wave, ModuleArg::Lift];
        let config = build_simulation_config(&args).unwrap();
        assert_eq!(
            config.modules,
            vec![EnergyModule::wave(), EnergyModule::lift()]
        );
    }

    #[test]
    fn fuel_params_are_only_built_when_fuel_mode_is_on() {
        let args = default_args();
        let options = build_report_options(&args).unwrap();
        assert!(options.fuel.is_none());
        assert_eq!(options.household_emissions_tons, Some(48.0));

        let mut args = default_args();
        args.use_fuel = true;
        let options = build_report_options(&args).unwrap();
        assert_eq!(options.fuel, Some(FuelParams::default()));
    }

    #[test]
    fn invalid_fuel_flags_surface_as_core_errors() {
        let mut args = default_args();
        args.use_fuel = true;
        args.lipid_fraction = 1.5;
        assert!(matches!(
            build_report_options(&args),
            Err(CliError::Core(_))
        ));
    }

    #[test]
    fn registry_without_a_file_is_the_builtin_table() {
        let registry = build_registry(None).unwrap();
        assert_eq!(registry.len(), 6);
    }
}
