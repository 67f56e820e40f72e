use super::params::ReactorParameters;
use super::results::PerReactorResult;

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;
pub const KILOGRAMS_PER_TON: f64 = 1000.0;

#[inline]
pub fn daily_biomass_g(area_m2: f64, productivity_g_per_m2_day: f64) -> f64 {
    area_m2 * productivity_g_per_m2_day
}

#[inline]
pub fn annual_biomass_g(daily_biomass_g: f64, uptime_fraction: f64) -> f64 {
    daily_biomass_g * DAYS_PER_YEAR * uptime_fraction
}

#[inline]
pub fn annual_co2_kg(annual_biomass_g: f64, co2_per_gram_biomass: f64) -> f64 {
    annual_biomass_g * co2_per_gram_biomass / GRAMS_PER_KILOGRAM
}

/// Share (%) of an average household's annual emissions offset by a single
/// reactor. A non-positive emissions figure yields 0 rather than an error.
#[inline]
pub fn household_offset_percent(annual_co2_kg: f64, household_emissions_tons: f64) -> f64 {
    if household_emissions_tons <= 0.0 {
        return 0.0;
    }
    100.0 * (annual_co2_kg / KILOGRAMS_PER_TON) / household_emissions_tons
}

pub struct ReactorModel;

impl ReactorModel {
    /// Computes the daily and annual performance of a single reactor.
    ///
    /// Pure function of its input; invariants are enforced when the
    /// `ReactorParameters` is constructed, so this cannot fail.
    pub fn compute(params: &ReactorParameters) -> PerReactorResult {
        let daily = daily_biomass_g(params.area_m2(), params.productivity_g_per_m2_day());
        let annual = annual_biomass_g(daily, params.uptime_fraction());
        PerReactorResult {
            daily_biomass_g: daily,
            annual_biomass_g: annual,
            annual_co2_kg: annual_co2_kg(annual, params.co2_per_gram_biomass()),
        }
    }
}
