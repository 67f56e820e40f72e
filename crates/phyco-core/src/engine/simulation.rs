use super::aggregator::BatchAggregator;
use super::config::{ScenarioSelector, SimulationConfig};
use super::error::EngineError;
use super::registry::ScenarioRegistry;
use crate::core::augment::{self, EnergyModule};
use crate::core::params::ReactorParameters;
use crate::core::production::ReactorModel;
use crate::core::results::FleetResult;
use tracing::debug;

/// Orchestrates one simulation run: resolve the scenario, fold the energy
/// modules over its base parameters, compute the per-reactor result, and
/// scale it to the requested fleet size.
pub struct SimulationEngine<'a> {
    registry: &'a ScenarioRegistry,
}

impl<'a> SimulationEngine<'a> {
    pub fn new(registry: &'a ScenarioRegistry) -> Self {
        Self { registry }
    }

    pub fn run(&self, config: &SimulationConfig) -> Result<FleetResult, EngineError> {
        let (base, modules) = self.resolve(config)?;
        let effective = augment::apply_all(&modules, base)?;
        debug!(
            area_m2 = effective.area_m2(),
            productivity = effective.productivity_g_per_m2_day(),
            uptime = effective.uptime_fraction(),
            "Resolved effective reactor parameters."
        );
        let per_reactor = ReactorModel::compute(&effective);
        Ok(BatchAggregator::scale(
            &per_reactor,
            &effective,
            config.unit_count,
        ))
    }

    /// Resolves the selector into a base parameter set (with overrides
    /// already substituted) and the augmentation pipeline to fold over it.
    ///
    /// A named scenario fixes its own pipeline; supplying modules alongside
    /// one is a configuration conflict.
    fn resolve(
        &self,
        config: &SimulationConfig,
    ) -> Result<(ReactorParameters, Vec<EnergyModule>), EngineError> {
        match &config.selector {
            ScenarioSelector::Named { name } => {
                if !config.modules.is_empty() {
                    return Err(EngineError::ConfigurationConflict {
                        reason: format!(
                            "scenario '{name}' declares its own augmentation pipeline; \
                             energy modules cannot be combined with a named scenario"
                        ),
                    });
                }
                let scenario = self.registry.resolve(name)?;
                let base = config.overrides.apply_to(&scenario.params)?;
                Ok((base, scenario.modules.clone()))
            }
            ScenarioSelector::Custom => {
                let base = config.overrides.apply_to(&ReactorParameters::default())?;
                Ok((base, config.modules.clone()))
            }
        }
    }
}
