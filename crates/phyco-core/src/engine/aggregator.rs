use crate::core::params::ReactorParameters;
use crate::core::production::KILOGRAMS_PER_TON;
use crate::core::results::{FleetResult, PerReactorResult};

pub struct BatchAggregator;

impl BatchAggregator {
    /// Scales a per-reactor result to a fleet of identical units.
    ///
    /// Pure multiplication in double precision, with no rounding: counts are
    /// represented exactly up to 2^53, far beyond the 10^9-unit fleets this
    /// model is specified for. A zero count is valid and yields zero totals.
    pub fn scale(
        result: &PerReactorResult,
        params: &ReactorParameters,
        unit_count: u64,
    ) -> FleetResult {
        let count = unit_count as f64;
        FleetResult {
            params: *params,
            per_reactor: *result,
            unit_count,
            total_annual_biomass_kg: result.annual_biomass_g * count / KILOGRAMS_PER_TON,
            total_annual_co2_kg: result.annual_co2_kg * count,
            total_annual_co2_tons: result.annual_co2_kg * count / KILOGRAMS_PER_TON,
        }
    }
}
