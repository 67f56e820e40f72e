use crate::core::augment::EnergyModule;
use crate::core::params::{ParameterError, ReactorParameters};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Optional field-by-field substitutions applied over a base parameter set
/// before any energy modules run. Every recognized field is enumerated here;
/// the substituted result is revalidated as a whole.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParameterOverrides {
    pub area_m2: Option<f64>,
    pub productivity_g_per_m2_day: Option<f64>,
    pub co2_per_gram_biomass: Option<f64>,
    pub uptime_fraction: Option<f64>,
}

impl ParameterOverrides {
    pub fn is_empty(&self) -> bool {
        self.area_m2.is_none()
            && self.productivity_g_per_m2_day.is_none()
            && self.co2_per_gram_biomass.is_none()
            && self.uptime_fraction.is_none()
    }

    pub fn apply_to(&self, base: &ReactorParameters) -> Result<ReactorParameters, ParameterError> {
        ReactorParameters::new(
            self.area_m2.unwrap_or(base.area_m2()),
            self.productivity_g_per_m2_day
                .unwrap_or(base.productivity_g_per_m2_day()),
            self.co2_per_gram_biomass
                .unwrap_or(base.co2_per_gram_biomass()),
            self.uptime_fraction.unwrap_or(base.uptime_fraction()),
        )
    }
}

/// What the simulation should run against: a registered scenario, or an ad
/// hoc parameter set built from overrides over the reference reactor.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioSelector {
    Named { name: String },
    Custom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub selector: ScenarioSelector,
    pub overrides: ParameterOverrides,
    /// Explicitly requested augmentation pipeline. Only valid for custom
    /// runs; a named scenario declares its own pipeline.
    pub modules: Vec<EnergyModule>,
    pub unit_count: u64,
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    selector: Option<ScenarioSelector>,
    overrides: ParameterOverrides,
    modules: Vec<EnergyModule>,
    unit_count: Option<u64>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selector(mut self, selector: ScenarioSelector) -> Self {
        self.selector = Some(selector);
        self
    }

    pub fn overrides(mut self, overrides: ParameterOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn modules(mut self, modules: Vec<EnergyModule>) -> Self {
        self.modules = modules;
        self
    }

    pub fn unit_count(mut self, count: u64) -> Self {
        self.unit_count = Some(count);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        Ok(SimulationConfig {
            selector: self
                .selector
                .ok_or(ConfigError::MissingParameter("selector"))?,
            overrides: self.overrides,
            modules: self.modules,
            unit_count: self
                .unit_count
                .ok_or(ConfigError::MissingParameter("unit_count"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_selector_and_unit_count() {
        let result = SimulationConfigBuilder::new().build();
        assert_eq!(result, Err(ConfigError::MissingParameter("selector")));

        let result = SimulationConfigBuilder::new()
            .selector(ScenarioSelector::Custom)
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("unit_count")));
    }

    #[test]
    fn builder_defaults_overrides_and_modules_to_empty() {
        let config = SimulationConfigBuilder::new()
            .selector(ScenarioSelector::Custom)
            .unit_count(1)
            .build()
            .unwrap();
        assert!(config.overrides.is_empty());
        assert!(config.modules.is_empty());
    }

    #[test]
    fn apply_to_substitutes_only_the_supplied_fields() {
        let base = ReactorParameters::new(4.0, 20.0, 1.8, 0.7).unwrap();
        let overrides = ParameterOverrides {
            uptime_fraction: Some(0.8),
            ..Default::default()
        };
        let merged = overrides.apply_to(&base).unwrap();
        assert_eq!(merged.area_m2(), 4.0);
        assert_eq!(merged.productivity_g_per_m2_day(), 20.0);
        assert_eq!(merged.uptime_fraction(), 0.8);
    }

    #[test]
    fn apply_to_revalidates_the_merged_result() {
        let base = ReactorParameters::new(4.0, 20.0, 1.8, 0.7).unwrap();
        let overrides = ParameterOverrides {
            area_m2: Some(-2.0),
            ..Default::default()
        };
        assert!(overrides.apply_to(&base).is_err());
    }

    #[test]
    fn empty_overrides_reproduce_the_base() {
        let base = ReactorParameters::new(4.0, 20.0, 1.8, 0.7).unwrap();
        let overrides = ParameterOverrides::default();
        assert!(overrides.is_empty());
        assert_eq!(overrides.apply_to(&base).unwrap(), base);
    }
}
