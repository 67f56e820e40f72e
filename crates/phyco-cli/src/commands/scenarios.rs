use crate::cli::ScenariosArgs;
use crate::config;
use crate::error::Result;
use crate::report;

pub fn run(args: ScenariosArgs) -> Result<()> {
    let registry = config::build_registry(args.scenario_file.as_deref())?;
    print!("{}", report::format_scenario_list(&registry));
    Ok(())
}
