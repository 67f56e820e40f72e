use super::params::{ParameterError, ReactorParameters, check_non_negative, check_positive, check_unit_range};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown energy module '{0}' (expected one of: wave, solar-led, lift)")]
pub struct UnknownModuleError(pub String);

/// Wave-power buffering: raises effective uptime by a fixed delta.
///
/// Outcomes above the configured ceiling are *clamped* to it, never
/// rejected; the ceiling itself must lie within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveConfig {
    uptime_delta: f64,
    uptime_ceiling: f64,
}

impl WaveConfig {
    pub const DEFAULT: Self = Self {
        uptime_delta: 0.10,
        uptime_ceiling: 1.0,
    };

    pub fn new(uptime_delta: f64, uptime_ceiling: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            uptime_delta: check_non_negative("uptime_delta", uptime_delta)?,
            uptime_ceiling: check_unit_range("uptime_ceiling", uptime_ceiling)?,
        })
    }

    pub fn uptime_delta(&self) -> f64 {
        self.uptime_delta
    }

    pub fn uptime_ceiling(&self) -> f64 {
        self.uptime_ceiling
    }
}

/// Solar-powered LED lighting: extends effective productive hours into the
/// night, modeled as a multiplicative productivity factor.
///
/// A factor that is not strictly positive is *rejected* at construction;
/// with a valid factor the derived parameters cannot leave their ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarLedConfig {
    productivity_factor: f64,
}

impl SolarLedConfig {
    pub const DEFAULT: Self = Self {
        productivity_factor: 1.45,
    };

    pub fn new(productivity_factor: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            productivity_factor: check_positive("productivity_factor", productivity_factor)?,
        })
    }

    pub fn productivity_factor(&self) -> f64 {
        self.productivity_factor
    }
}

/// Lifted net arrays: multiplies effective growing area, with a productivity
/// adjustment for the changed light exposure of lifted nets.
///
/// Factors that are not strictly positive are *rejected* at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftConfig {
    area_factor: f64,
    productivity_factor: f64,
}

impl LiftConfig {
    pub const DEFAULT: Self = Self {
        area_factor: 1.6,
        productivity_factor: 0.9,
    };

    pub fn new(area_factor: f64, productivity_factor: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            area_factor: check_positive("area_factor", area_factor)?,
            productivity_factor: check_positive("productivity_factor", productivity_factor)?,
        })
    }

    pub fn area_factor(&self) -> f64 {
        self.area_factor
    }

    pub fn productivity_factor(&self) -> f64 {
        self.productivity_factor
    }
}

/// An energy augmentation applied to a reactor's effective parameters.
///
/// Each variant is a deterministic numeric transform producing a new,
/// revalidated [`ReactorParameters`]. Modules compose left to right in the
/// order a scenario declares them; additive and multiplicative adjustments
/// do not commute in general.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnergyModule {
    Wave(WaveConfig),
    SolarLed(SolarLedConfig),
    Lift(LiftConfig),
}

static MODULES_BY_NAME: phf::Map<&'static str, fn() -> EnergyModule> = phf::phf_map! {
    "wave" => EnergyModule::wave as fn() -> EnergyModule,
    "solar-led" => EnergyModule::solar_led as fn() -> EnergyModule,
    "lift" => EnergyModule::lift as fn() -> EnergyModule,
};

impl EnergyModule {
    pub fn wave() -> Self {
        Self::Wave(WaveConfig::DEFAULT)
    }

    pub fn solar_led() -> Self {
        Self::SolarLed(SolarLedConfig::DEFAULT)
    }

    pub fn lift() -> Self {
        Self::Lift(LiftConfig::DEFAULT)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Wave(_) => "wave",
            Self::SolarLed(_) => "solar-led",
            Self::Lift(_) => "lift",
        }
    }

    pub fn apply(&self, params: &ReactorParameters) -> Result<ReactorParameters, ParameterError> {
        match self {
            Self::Wave(cfg) => params.with_uptime_raised(cfg.uptime_delta, cfg.uptime_ceiling),
            Self::SolarLed(cfg) => params.with_productivity_scaled(cfg.productivity_factor),
            Self::Lift(cfg) => params
                .with_area_scaled(cfg.area_factor)?
                .with_productivity_scaled(cfg.productivity_factor),
        }
    }
}

impl FromStr for EnergyModule {
    type Err = UnknownModuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MODULES_BY_NAME
            .get(s)
            .map(|build| build())
            .ok_or_else(|| UnknownModuleError(s.to_string()))
    }
}

/// Folds `modules` over `base` in declared order, each module consuming the
/// output of the previous one.
pub fn apply_all(
    modules: &[EnergyModule],
    base: ReactorParameters,
) -> Result<ReactorParameters, ParameterError> {
    modules.iter().try_fold(base, |params, module| module.apply(&params))
}
