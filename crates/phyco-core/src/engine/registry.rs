use super::error::EngineError;
use crate::core::augment::{EnergyModule, LiftConfig, SolarLedConfig, WaveConfig};
use crate::core::io::scenario_file::{FileScenario, ScenarioFile, ScenarioFileError};
use crate::core::params::ReactorParameters;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// A named, immutable bundle of base reactor parameters and an ordered
/// energy-augmentation pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub params: ReactorParameters,
    pub modules: Vec<EnergyModule>,
}

impl TryFrom<&FileScenario> for Scenario {
    type Error = ScenarioFileError;

    fn try_from(entry: &FileScenario) -> Result<Self, Self::Error> {
        let params = ReactorParameters::new(
            entry.area_m2,
            entry.productivity_g_per_m2_day,
            entry.co2_per_gram_biomass,
            entry.uptime_fraction,
        )
        .map_err(|source| ScenarioFileError::Parameter {
            scenario: entry.name.clone(),
            source,
        })?;
        let modules = entry
            .modules
            .iter()
            .map(|name| {
                name.parse::<EnergyModule>()
                    .map_err(|source| ScenarioFileError::UnknownModule {
                        scenario: entry.name.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: entry.name.clone(),
            params,
            modules,
        })
    }
}

struct BuiltinScenario {
    name: &'static str,
    params: ReactorParameters,
    modules: &'static [EnergyModule],
}

static BUILTIN_SCENARIOS: &[BuiltinScenario] = &[
    BuiltinScenario {
        name: "conservative_small",
        params: ReactorParameters::preset(2.0, 10.0, 1.8, 0.70),
        modules: &[],
    },
    BuiltinScenario {
        name: "realistic_medium",
        params: ReactorParameters::preset(4.0, 20.0, 1.8, 0.80),
        modules: &[],
    },
    BuiltinScenario {
        name: "optimized_large",
        params: ReactorParameters::preset(8.0, 27.0, 1.8, 0.85),
        modules: &[],
    },
    BuiltinScenario {
        name: "wave_buffered_medium",
        params: ReactorParameters::preset(4.0, 20.0, 1.8, 0.80),
        modules: &[EnergyModule::Wave(WaveConfig::DEFAULT)],
    },
    BuiltinScenario {
        name: "led_continuous_medium",
        params: ReactorParameters::preset(4.0, 20.0, 1.8, 0.80),
        modules: &[EnergyModule::SolarLed(SolarLedConfig::DEFAULT)],
    },
    BuiltinScenario {
        name: "lifted_led_wave",
        params: ReactorParameters::preset(8.0, 27.0, 1.8, 0.85),
        modules: &[
            EnergyModule::Wave(WaveConfig::DEFAULT),
            EnergyModule::SolarLed(SolarLedConfig::DEFAULT),
            EnergyModule::Lift(LiftConfig::DEFAULT),
        ],
    },
];

/// An ordered, read-only lookup of scenarios, built explicitly at startup
/// and passed by reference into the engine.
#[derive(Debug, Clone, Default)]
pub struct ScenarioRegistry {
    entries: Vec<Scenario>,
    index: HashMap<String, usize>,
}

impl ScenarioRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a registry with the built-in scenario table. Table names are
    /// unique by construction, so this cannot conflict.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for def in BUILTIN_SCENARIOS {
            registry.insert(Scenario {
                name: def.name.to_string(),
                params: def.params,
                modules: def.modules.to_vec(),
            });
        }
        registry
    }

    fn insert(&mut self, scenario: Scenario) {
        self.index.insert(scenario.name.clone(), self.entries.len());
        self.entries.push(scenario);
    }

    pub fn register(&mut self, scenario: Scenario) -> Result<(), EngineError> {
        if self.index.contains_key(&scenario.name) {
            return Err(EngineError::ConfigurationConflict {
                reason: format!("scenario '{}' is already registered", scenario.name),
            });
        }
        self.insert(scenario);
        Ok(())
    }

    /// Merges every scenario defined in a TOML file, in file order. Returns
    /// the number of scenarios added; a name collision with an existing
    /// entry is a configuration conflict.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, EngineError> {
        let file = ScenarioFile::load(path)?;
        let mut added = 0;
        for entry in &file.scenarios {
            let scenario = Scenario::try_from(entry)?;
            self.register(scenario)?;
            added += 1;
        }
        debug!("Loaded {} scenario(s) from {:?}", added, path);
        Ok(added)
    }

    pub fn resolve(&self, name: &str) -> Result<&Scenario, EngineError> {
        self.index
            .get(name)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| EngineError::UnknownScenario {
                name: name.to_string(),
            })
    }

    /// Scenario names in registration order.
    pub fn list(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|scenario| scenario.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
