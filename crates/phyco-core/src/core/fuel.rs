use super::params::{ParameterError, check_non_negative, check_positive, check_unit_range};

/// Parameters for converting algal biomass into liquid fuel and estimating
/// avoided fossil CO₂ emissions.
///
/// Fractions must lie within `[0, 1]`, the fuel density must be strictly
/// positive, and the emission figures must not be negative; violations are
/// rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelParams {
    lipid_fraction: f64,
    conversion_efficiency: f64,
    fuel_density_kg_per_l: f64,
    co2_kg_per_liter_fossil: f64,
    process_energy_kwh_per_liter: f64,
    process_co2_kg_per_kwh: f64,
}

impl FuelParams {
    pub fn new(
        lipid_fraction: f64,
        conversion_efficiency: f64,
        fuel_density_kg_per_l: f64,
        co2_kg_per_liter_fossil: f64,
        process_energy_kwh_per_liter: f64,
        process_co2_kg_per_kwh: f64,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            lipid_fraction: check_unit_range("lipid_fraction", lipid_fraction)?,
            conversion_efficiency: check_unit_range("conversion_efficiency", conversion_efficiency)?,
            fuel_density_kg_per_l: check_positive("fuel_density_kg_per_l", fuel_density_kg_per_l)?,
            co2_kg_per_liter_fossil: check_non_negative(
                "co2_kg_per_liter_fossil",
                co2_kg_per_liter_fossil,
            )?,
            process_energy_kwh_per_liter: check_non_negative(
                "process_energy_kwh_per_liter",
                process_energy_kwh_per_liter,
            )?,
            process_co2_kg_per_kwh: check_non_negative(
                "process_co2_kg_per_kwh",
                process_co2_kg_per_kwh,
            )?,
        })
    }

    pub fn lipid_fraction(&self) -> f64 {
        self.lipid_fraction
    }

    pub fn conversion_efficiency(&self) -> f64 {
        self.conversion_efficiency
    }

    pub fn fuel_density_kg_per_l(&self) -> f64 {
        self.fuel_density_kg_per_l
    }

    pub fn co2_kg_per_liter_fossil(&self) -> f64 {
        self.co2_kg_per_liter_fossil
    }

    pub fn process_energy_kwh_per_liter(&self) -> f64 {
        self.process_energy_kwh_per_liter
    }

    pub fn process_co2_kg_per_kwh(&self) -> f64 {
        self.process_co2_kg_per_kwh
    }
}

impl Default for FuelParams {
    /// Biodiesel-like reference figures: 30 % lipids, 80 % conversion,
    /// 0.88 kg/L density, 2.6 kg fossil CO₂ avoided per liter, no
    /// processing energy.
    fn default() -> Self {
        Self {
            lipid_fraction: 0.30,
            conversion_efficiency: 0.80,
            fuel_density_kg_per_l: 0.88,
            co2_kg_per_liter_fossil: 2.6,
            process_energy_kwh_per_liter: 0.0,
            process_co2_kg_per_kwh: 0.0,
        }
    }
}

/// Yearly fuel-mode accounting for one reactor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelYield {
    pub co2_fixed_kg: f64,
    pub biomass_kg: f64,
    pub fuel_liters: f64,
    pub avoided_co2_kg: f64,
    pub process_emissions_kg: f64,
    pub net_climate_effect_kg: f64,
}

/// Converts fixed CO₂ (kg) back to dry biomass (kg) through the fixation
/// ratio. A zero ratio yields zero biomass rather than a division error.
#[inline]
pub fn biomass_kg_from_co2(co2_kg: f64, co2_per_kg_biomass: f64) -> f64 {
    if co2_per_kg_biomass <= 0.0 {
        return 0.0;
    }
    co2_kg / co2_per_kg_biomass
}

#[inline]
pub fn fuel_liters_from_biomass(biomass_kg: f64, params: &FuelParams) -> f64 {
    let lipids_kg = biomass_kg * params.lipid_fraction * params.conversion_efficiency;
    lipids_kg / params.fuel_density_kg_per_l
}

#[inline]
pub fn avoided_co2_kg(fuel_liters: f64, params: &FuelParams) -> f64 {
    fuel_liters * params.co2_kg_per_liter_fossil
}

#[inline]
pub fn process_emissions_kg(fuel_liters: f64, params: &FuelParams) -> f64 {
    fuel_liters * params.process_energy_kwh_per_liter * params.process_co2_kg_per_kwh
}

/// Full biomass → fuel → avoided-CO₂ chain for one reactor-year.
///
/// `net_climate_effect_kg = co2_fixed + avoided_fossil - process_emissions`.
pub fn yield_for_reactor(
    co2_fixed_kg: f64,
    co2_per_gram_biomass: f64,
    params: &FuelParams,
) -> FuelYield {
    // g CO₂ / g biomass is the same ratio as kg CO₂ / kg biomass.
    let biomass_kg = biomass_kg_from_co2(co2_fixed_kg, co2_per_gram_biomass);
    let fuel_liters = fuel_liters_from_biomass(biomass_kg, params);
    let avoided = avoided_co2_kg(fuel_liters, params);
    let process = process_emissions_kg(fuel_liters, params);
    FuelYield {
        co2_fixed_kg,
        biomass_kg,
        fuel_liters,
        avoided_co2_kg: avoided,
        process_emissions_kg: process,
        net_climate_effect_kg: co2_fixed_kg + avoided - process,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn yield_for_reference_reactor_follows_the_conversion_chain() {
        let params = FuelParams::default();
        let result = yield_for_reactor(42.048, 1.8, &params);

        let biomass = 42.048 / 1.8;
        let liters = biomass * 0.30 * 0.80 / 0.88;
        assert!(f64_approx_equal(result.biomass_kg, biomass));
        assert!(f64_approx_equal(result.fuel_liters, liters));
        assert!(f64_approx_equal(result.avoided_co2_kg, liters * 2.6));
        assert_eq!(result.process_emissions_kg, 0.0);
        assert!(f64_approx_equal(
            result.net_climate_effect_kg,
            42.048 + liters * 2.6
        ));
    }

    #[test]
    fn processing_emissions_reduce_the_net_effect() {
        let params = FuelParams::new(0.30, 0.80, 0.88, 2.6, 1.5, 0.4).unwrap();
        let result = yield_for_reactor(42.048, 1.8, &params);
        assert!(f64_approx_equal(
            result.process_emissions_kg,
            result.fuel_liters * 1.5 * 0.4
        ));
        assert!(f64_approx_equal(
            result.net_climate_effect_kg,
            result.co2_fixed_kg + result.avoided_co2_kg - result.process_emissions_kg
        ));
    }

    #[test]
    fn zero_fixation_ratio_yields_no_biomass() {
        assert_eq!(biomass_kg_from_co2(42.048, 0.0), 0.0);
        let result = yield_for_reactor(42.048, 0.0, &FuelParams::default());
        assert_eq!(result.biomass_kg, 0.0);
        assert_eq!(result.fuel_liters, 0.0);
    }

    #[test]
    fn out_of_range_fuel_params_are_rejected_with_the_field_named() {
        use crate::core::params::ParameterError;

        assert!(matches!(
            FuelParams::new(1.2, 0.8, 0.88, 2.6, 0.0, 0.0),
            Err(ParameterError::OutOfUnitRange {
                field: "lipid_fraction",
                ..
            })
        ));
        assert!(matches!(
            FuelParams::new(0.3, 0.8, 0.0, 2.6, 0.0, 0.0),
            Err(ParameterError::NotPositive {
                field: "fuel_density_kg_per_l",
                ..
            })
        ));
        assert!(FuelParams::new(0.3, 0.8, 0.88, -1.0, 0.0, 0.0).is_err());
    }
}
