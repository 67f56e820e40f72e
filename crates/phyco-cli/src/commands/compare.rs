use crate::cli::CompareArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::report;
use phycosim::core::io::report::{ReportRow, write_csv};
use phycosim::engine::config::{ScenarioSelector, SimulationConfigBuilder};
use phycosim::engine::simulation::SimulationEngine;
use tracing::info;

pub fn run(args: CompareArgs) -> Result<()> {
    let registry = config::build_registry(args.scenario_file.as_deref())?;
    let engine = SimulationEngine::new(&registry);

    let mut rows = Vec::with_capacity(registry.len());
    for scenario in registry.iter() {
        let sim_config = SimulationConfigBuilder::new()
            .selector(ScenarioSelector::Named {
                name: scenario.name.clone(),
            })
            .unit_count(args.households)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;
        let fleet = engine.run(&sim_config)?;
        rows.push(ReportRow::new(&scenario.name, &fleet));
    }
    info!("Compared {} scenario(s).", rows.len());

    match &args.csv {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            write_csv(file, &rows)?;
            println!("Comparison written to {}", path.display());
        }
        None => print!("{}", report::format_compare_table(&rows)),
    }
    Ok(())
}
