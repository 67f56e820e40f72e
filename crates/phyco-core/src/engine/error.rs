use thiserror::Error;

use crate::core::io::scenario_file::ScenarioFileError;
use crate::core::params::ParameterError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid parameter: {source}")]
    Parameter {
        #[from]
        source: ParameterError,
    },

    #[error("unknown scenario '{name}'")]
    UnknownScenario { name: String },

    #[error("configuration conflict: {reason}")]
    ConfigurationConflict { reason: String },

    #[error("scenario file error: {source}")]
    ScenarioFile {
        #[from]
        source: ScenarioFileError,
    },
}
