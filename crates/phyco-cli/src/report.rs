use phycosim::core::io::report::ReportRow;
use phycosim::core::production::KILOGRAMS_PER_TON;
use phycosim::engine::registry::ScenarioRegistry;
use phycosim::workflows::simulate::{ReportOptions, SimulationReport};

/// Renders the `run` report in the classic layout: reactor parameters,
/// per-reactor performance, fleet totals, and the optional fuel section.
pub fn format_run_report(report: &SimulationReport, options: &ReportOptions) -> String {
    let params = &report.fleet.params;
    let per_reactor = &report.fleet.per_reactor;
    let mut out = String::new();

    out.push_str("=== PhycoSim CO₂ Sequestration Model ===\n\n");
    out.push_str("Reactor parameters:\n");
    out.push_str(&format!("  Area:              {:.2} m²\n", params.area_m2()));
    out.push_str(&format!(
        "  Productivity:      {:.1} g/m²/day\n",
        params.productivity_g_per_m2_day()
    ));
    out.push_str(&format!(
        "  CO₂ per biomass:   {:.2} g CO₂ / g biomass\n",
        params.co2_per_gram_biomass()
    ));
    out.push_str(&format!(
        "  Uptime:            {:.1} %\n\n",
        params.uptime_fraction() * 100.0
    ));

    out.push_str("Per reactor:\n");
    out.push_str(&format!(
        "  Daily biomass:     {:.1} g/day\n",
        per_reactor.daily_biomass_g
    ));
    out.push_str(&format!(
        "  Annual CO₂ fixed:  {:.2} kg/year\n",
        per_reactor.annual_co2_kg
    ));
    if let (Some(percent), Some(tons)) = (report.offset_percent, options.household_emissions_tons)
    {
        out.push_str(&format!(
            "  Offset vs household emissions ({tons:.1} t/yr): {percent:.3} %\n"
        ));
    }

    out.push_str(&format!("\nFleet ({} reactors):\n", report.fleet.unit_count));
    out.push_str(&format!(
        "  Annual biomass:    {:.2} kg/year\n",
        report.fleet.total_annual_biomass_kg
    ));
    out.push_str(&format!(
        "  Annual CO₂ fixed:  {:.3} tons/year\n",
        report.fleet.total_annual_co2_tons
    ));

    if let Some(fuel) = &report.fuel {
        let fleet_net_tons =
            fuel.net_climate_effect_kg * report.fleet.unit_count as f64 / KILOGRAMS_PER_TON;
        out.push_str("\nFuel mode (biomass → fuel → avoided CO₂):\n");
        out.push_str(&format!(
            "  Biomass produced:      {:.2} kg/year\n",
            fuel.biomass_kg
        ));
        out.push_str(&format!(
            "  Fuel produced:         {:.2} L/year\n",
            fuel.fuel_liters
        ));
        out.push_str(&format!(
            "  Avoided fossil CO₂:    {:.2} kg/year\n",
            fuel.avoided_co2_kg
        ));
        out.push_str(&format!(
            "  Processing emissions:  {:.2} kg/year\n",
            fuel.process_emissions_kg
        ));
        out.push_str(&format!(
            "  Net climate effect:    {:.2} kg/year\n",
            fuel.net_climate_effect_kg
        ));
        out.push_str(&format!(
            "  Fleet net effect:      {fleet_net_tons:.3} tons/year\n"
        ));
    }

    out
}

/// Renders the ordered scenario listing with parameters and pipelines.
pub fn format_scenario_list(registry: &ScenarioRegistry) -> String {
    let mut out = String::from("Available scenarios:\n\n");
    for scenario in registry.iter() {
        let params = &scenario.params;
        out.push_str(&format!(
            "  {:<22} {:.2} m² × {:.1} g/m²/day, uptime {:.1} %, CO₂/g {:.2}",
            scenario.name,
            params.area_m2(),
            params.productivity_g_per_m2_day(),
            params.uptime_fraction() * 100.0,
            params.co2_per_gram_biomass(),
        ));
        if !scenario.modules.is_empty() {
            let pipeline: Vec<&str> = scenario.modules.iter().map(|m| m.name()).collect();
            out.push_str(&format!("  [{}]", pipeline.join(" → ")));
        }
        out.push('\n');
    }
    out
}

/// Renders the comparison rows as an aligned text table.
pub fn format_compare_table(rows: &[ReportRow]) -> String {
    let mut out = format!(
        "{:<22} {:>12} {:>20} {:>20}\n",
        "scenario", "reactors", "kg CO₂/yr per unit", "total tons CO₂/yr"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<22} {:>12} {:>20.2} {:>20.3}\n",
            row.scenario, row.unit_count, row.annual_co2_kg_per_reactor, row.total_annual_co2_tons
        ));
    }
    out
}
