use crate::core::fuel::{self, FuelParams, FuelYield};
use crate::core::production::household_offset_percent;
use crate::core::results::FleetResult;
use crate::engine::config::SimulationConfig;
use crate::engine::error::EngineError;
use crate::engine::registry::ScenarioRegistry;
use crate::engine::simulation::SimulationEngine;
use tracing::{info, instrument};

/// Optional extensions computed on top of the fleet result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReportOptions {
    /// Average household annual emissions (tons CO₂/year) to express the
    /// per-reactor result against.
    pub household_emissions_tons: Option<f64>,
    /// Enables the biomass → fuel → avoided-CO₂ accounting chain.
    pub fuel: Option<FuelParams>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub fleet: FleetResult,
    pub offset_percent: Option<f64>,
    pub fuel: Option<FuelYield>,
}

#[instrument(skip_all, name = "simulation_workflow")]
pub fn run(
    registry: &ScenarioRegistry,
    config: &SimulationConfig,
    options: &ReportOptions,
) -> Result<SimulationReport, EngineError> {
    info!("Resolving scenario and computing fleet performance.");
    let engine = SimulationEngine::new(registry);
    let fleet = engine.run(config)?;

    let offset_percent = options
        .household_emissions_tons
        .map(|tons| household_offset_percent(fleet.per_reactor.annual_co2_kg, tons));
    let fuel = options.fuel.as_ref().map(|params| {
        fuel::yield_for_reactor(
            fleet.per_reactor.annual_co2_kg,
            fleet.params.co2_per_gram_biomass(),
            params,
        )
    });

    info!(
        unit_count = fleet.unit_count,
        total_annual_co2_kg = fleet.total_annual_co2_kg,
        "Workflow complete."
    );
    Ok(SimulationReport {
        fleet,
        offset_percent,
        fuel,
    })
}
