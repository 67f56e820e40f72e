use crate::cli::RunArgs;
use crate::config;
use crate::error::Result;
use crate::report;
use phycosim::workflows::simulate;
use tracing::info;

pub fn run(args: RunArgs) -> Result<()> {
    let registry = config::build_registry(args.scenario_file.as_deref())?;
    let sim_config = config::build_simulation_config(&args)?;
    let options = config::build_report_options(&args)?;

    info!("Invoking the simulation workflow...");
    let simulation = simulate::run(&registry, &sim_config, &options)?;

    print!("{}", report::format_run_report(&simulation, &options));
    Ok(())
}
