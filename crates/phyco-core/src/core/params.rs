use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must lie within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },
}

pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<f64, ParameterError> {
    // `!(value > 0.0)` also rejects NaN.
    if !(value > 0.0) {
        return Err(ParameterError::NotPositive { field, value });
    }
    Ok(value)
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<f64, ParameterError> {
    if !(value >= 0.0) {
        return Err(ParameterError::Negative { field, value });
    }
    Ok(value)
}

pub(crate) fn check_unit_range(field: &'static str, value: f64) -> Result<f64, ParameterError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ParameterError::OutOfUnitRange { field, value });
    }
    Ok(value)
}

/// The physical and operational description of a single photobioreactor unit.
///
/// Values are validated at construction, so an existing `ReactorParameters`
/// is always within its legal ranges: `area_m2 > 0`,
/// `productivity_g_per_m2_day >= 0`, `co2_per_gram_biomass >= 0`, and
/// `uptime_fraction` in `[0, 1]`. Derivation helpers return a *new* value and
/// revalidate it; the original is never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactorParameters {
    area_m2: f64,
    productivity_g_per_m2_day: f64,
    co2_per_gram_biomass: f64,
    uptime_fraction: f64,
}

impl ReactorParameters {
    pub fn new(
        area_m2: f64,
        productivity_g_per_m2_day: f64,
        co2_per_gram_biomass: f64,
        uptime_fraction: f64,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            area_m2: check_positive("area_m2", area_m2)?,
            productivity_g_per_m2_day: check_non_negative(
                "productivity_g_per_m2_day",
                productivity_g_per_m2_day,
            )?,
            co2_per_gram_biomass: check_non_negative(
                "co2_per_gram_biomass",
                co2_per_gram_biomass,
            )?,
            uptime_fraction: check_unit_range("uptime_fraction", uptime_fraction)?,
        })
    }

    /// Constructor for built-in tables with known-valid constants. Values
    /// must satisfy the same ranges [`ReactorParameters::new`] enforces.
    pub(crate) const fn preset(
        area_m2: f64,
        productivity_g_per_m2_day: f64,
        co2_per_gram_biomass: f64,
        uptime_fraction: f64,
    ) -> Self {
        Self {
            area_m2,
            productivity_g_per_m2_day,
            co2_per_gram_biomass,
            uptime_fraction,
        }
    }

    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    pub fn productivity_g_per_m2_day(&self) -> f64 {
        self.productivity_g_per_m2_day
    }

    pub fn co2_per_gram_biomass(&self) -> f64 {
        self.co2_per_gram_biomass
    }

    pub fn uptime_fraction(&self) -> f64 {
        self.uptime_fraction
    }

    /// Returns a copy with uptime raised by `delta`, clamped at `ceiling`.
    /// A ceiling below the current uptime never lowers it.
    pub fn with_uptime_raised(&self, delta: f64, ceiling: f64) -> Result<Self, ParameterError> {
        let raised = (self.uptime_fraction + delta)
            .min(ceiling)
            .max(self.uptime_fraction);
        Self::new(
            self.area_m2,
            self.productivity_g_per_m2_day,
            self.co2_per_gram_biomass,
            raised,
        )
    }

    pub fn with_area_scaled(&self, factor: f64) -> Result<Self, ParameterError> {
        Self::new(
            self.area_m2 * factor,
            self.productivity_g_per_m2_day,
            self.co2_per_gram_biomass,
            self.uptime_fraction,
        )
    }

    pub fn with_productivity_scaled(&self, factor: f64) -> Result<Self, ParameterError> {
        Self::new(
            self.area_m2,
            self.productivity_g_per_m2_day * factor,
            self.co2_per_gram_biomass,
            self.uptime_fraction,
        )
    }
}

impl Default for ReactorParameters {
    /// The reference backyard reactor assumed when no scenario is selected:
    /// 4 m², 20 g/m²/day, 1.8 g CO₂ per g biomass, 70 % uptime.
    fn default() -> Self {
        Self::preset(4.0, 20.0, 1.8, 0.7)
    }
}
