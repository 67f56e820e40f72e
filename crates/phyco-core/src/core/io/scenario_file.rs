use crate::core::augment::UnknownModuleError;
use crate::core::params::ParameterError;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioFileError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("scenario '{scenario}': {source}")]
    Parameter {
        scenario: String,
        source: ParameterError,
    },
    #[error("scenario '{scenario}': {source}")]
    UnknownModule {
        scenario: String,
        source: UnknownModuleError,
    },
}

/// One `[[scenario]]` entry of a definition file. The `[[scenario]]` array
/// keeps file order, which becomes registration order.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileScenario {
    pub name: String,
    #[serde(rename = "area-m2")]
    pub area_m2: f64,
    #[serde(rename = "productivity")]
    pub productivity_g_per_m2_day: f64,
    #[serde(rename = "co2-per-gram", default = "default_co2_per_gram")]
    pub co2_per_gram_biomass: f64,
    #[serde(rename = "uptime", default = "default_uptime")]
    pub uptime_fraction: f64,
    #[serde(default)]
    pub modules: Vec<String>,
}

fn default_co2_per_gram() -> f64 {
    1.8
}

fn default_uptime() -> f64 {
    0.7
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    #[serde(rename = "scenario", default)]
    pub scenarios: Vec<FileScenario>,
}

impl ScenarioFile {
    pub fn load(path: &Path) -> Result<Self, ScenarioFileError> {
        let content = std::fs::read_to_string(path).map_err(|e| ScenarioFileError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ScenarioFileError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_parses_scenarios_in_file_order() {
        let file = write_temp_file(
            r#"
            [[scenario]]
            name = "rooftop_pilot"
            area-m2 = 3.0
            productivity = 15.0
            uptime = 0.75
            modules = ["wave", "solar-led"]

            [[scenario]]
            name = "pond_farm"
            area-m2 = 50.0
            productivity = 22.0
            co2-per-gram = 1.9
            "#,
        );

        let parsed = ScenarioFile::load(file.path()).unwrap();
        assert_eq!(parsed.scenarios.len(), 2);
        assert_eq!(parsed.scenarios[0].name, "rooftop_pilot");
        assert_eq!(parsed.scenarios[0].modules, vec!["wave", "solar-led"]);
        assert_eq!(parsed.scenarios[1].name, "pond_farm");
    }

    #[test]
    fn load_applies_documented_defaults() {
        let file = write_temp_file(
            r#"
            [[scenario]]
            name = "minimal"
            area-m2 = 2.0
            productivity = 10.0
            "#,
        );

        let parsed = ScenarioFile::load(file.path()).unwrap();
        let scenario = &parsed.scenarios[0];
        assert_eq!(scenario.co2_per_gram_biomass, 1.8);
        assert_eq!(scenario.uptime_fraction, 0.7);
        assert!(scenario.modules.is_empty());
    }

    #[test]
    fn load_rejects_unknown_fields() {
        let file = write_temp_file(
            r#"
            [[scenario]]
            name = "typo"
            area-m2 = 2.0
            productivity = 10.0
            uptme = 0.7
            "#,
        );

        let result = ScenarioFile::load(file.path());
        assert!(matches!(result, Err(ScenarioFileError::Toml { .. })));
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let result = ScenarioFile::load(Path::new("/nonexistent/scenarios.toml"));
        assert!(matches!(result, Err(ScenarioFileError::Io { .. })));
    }
}
