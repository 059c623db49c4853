//! # Energy Calculator
//!
//! Annual household energy emissions from a housing-baseline consumption
//! table, scaled by occupancy, costed at the local grid intensity, with
//! heating handled per source on the heating share of consumption.

use cfe_core::{
    AppliedFactors, CategoryResult, EnergyAssessment, HeatingSource, LocationContext, Uncertainty,
};
use cfe_registry::tables::{adjustments, energy, housing, GLOBAL_AVERAGE_GRID_INTENSITY};
use cfe_registry::uncertainty_range;

/// Share of household consumption that goes to heating.
const HEATING_PORTION: f64 = 0.6;
/// kWh to GJ.
const KWH_TO_GJ: f64 = 0.0036;
/// Rated coefficient of performance assumed for heat pumps.
const HEAT_PUMP_COP: f64 = 3.5;
/// Flat heuristic rate for heating sources without a dedicated model
/// (oil, wood, district), kg CO2 per kWh of heat.
const OTHER_HEATING_KG_PER_KWH: f64 = 0.2;
/// Renewable contracts can credit at most 80% of the footprint.
const RENEWABLE_MAX_CREDIT: f64 = 0.8;
/// Fixed category uncertainty; unlike food and transport there is no
/// factor-level aggregation here.
const UNCERTAINTY_PCT: f64 = 35.0;

/// Calculate annual household energy emissions in kg CO2e.
pub fn calculate_energy(
    assessment: &EnergyAssessment,
    location: &LocationContext,
) -> CategoryResult {
    let grid = location.grid_intensity;

    let baseline = housing::baseline(assessment.housing_type(), assessment.housing_size());

    // Consumption grows with the square root of occupancy, not
    // linearly: each additional occupant adds less than the last.
    let occupant_adjustment = (assessment.number_of_occupants() / 2.0).sqrt();
    let daily_kwh = baseline.value * occupant_adjustment;

    let electricity_kg = daily_kwh * 365.0 * grid / 1000.0;

    let heating_kg = match assessment.heating_source {
        Some(HeatingSource::NaturalGas) => {
            let gas_gj = daily_kwh * HEATING_PORTION * 365.0 * KWH_TO_GJ;
            gas_gj * energy::NATURAL_GAS.value
        }
        Some(HeatingSource::HeatPump) => {
            // The heating share is re-costed as extra electricity at
            // one COP's worth of efficiency.
            let pump_daily_kwh = daily_kwh * HEATING_PORTION / HEAT_PUMP_COP;
            pump_daily_kwh * 365.0 * grid / 1000.0
        }
        // Resistive electric heating is already inside the household
        // electricity baseline.
        Some(HeatingSource::Electricity) => 0.0,
        // Oil, wood, district, or an unanswered step: flat heuristic.
        Some(HeatingSource::Oil) | Some(HeatingSource::Wood) | Some(HeatingSource::District)
        | None => daily_kwh * HEATING_PORTION * 365.0 * OTHER_HEATING_KG_PER_KWH,
    };

    let mut total = electricity_kg + heating_kg;

    total *= assessment.energy_efficiency_rating().multiplier();

    // Renewable contracts never zero out the footprint entirely.
    let renewable_share = assessment.renewable_energy_percentage() / 100.0;
    total *= 1.0 - renewable_share * RENEWABLE_MAX_CREDIT;

    total *= adjustments::BUILDING_ENERGY_MODELS;

    let (low, high) = uncertainty_range(total, UNCERTAINTY_PCT);

    tracing::debug!(
        daily_kwh,
        electricity_kg,
        heating_kg,
        total_kg = total,
        "energy emissions computed"
    );

    CategoryResult {
        emissions_kg_per_year: total,
        uncertainty: Uncertainty {
            low,
            high,
            confidence_pct: 100.0 - UNCERTAINTY_PCT,
        },
        factors: AppliedFactors {
            base_factor: grid,
            regional_adjustment: grid / GLOBAL_AVERAGE_GRID_INTENSITY,
            real_world_adjustment: adjustments::BUILDING_ENERGY_MODELS,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfe_core::{EfficiencyRating, HousingSize, HousingType};

    fn location(grid: f64) -> LocationContext {
        LocationContext::manual("Testland", "Test", grid)
    }

    #[test]
    fn test_defaults_use_medium_apartment() {
        // Defaults: apartment/medium (30 kWh/day), 2 occupants (no
        // scaling), no heating answer (flat heuristic), average rating,
        // no renewables. Electricity at grid 480 plus heuristic heating,
        // times the 1.2 building correction.
        let result = calculate_energy(&EnergyAssessment::default(), &location(480.0));
        let electricity = 30.0 * 365.0 * 480.0 / 1000.0;
        let heating = 30.0 * 0.6 * 365.0 * 0.2;
        let expected = (electricity + heating) * 1.2;
        assert!((result.emissions_kg_per_year - expected).abs() < 1e-6);
        assert_eq!(result.uncertainty.confidence_pct, 65.0);
    }

    #[test]
    fn test_occupancy_scales_with_square_root() {
        let two = calculate_energy(&EnergyAssessment::default(), &location(480.0));
        let eight = calculate_energy(
            &EnergyAssessment {
                number_of_occupants: Some(8.0),
                ..Default::default()
            },
            &location(480.0),
        );
        // sqrt(8/2) = 2: four times the occupants, twice the emissions.
        assert!(
            (eight.emissions_kg_per_year - 2.0 * two.emissions_kg_per_year).abs() < 1e-6
        );
    }

    #[test]
    fn test_heat_pump_beats_gas_on_clean_grid() {
        let gas = calculate_energy(
            &EnergyAssessment {
                heating_source: Some(HeatingSource::NaturalGas),
                ..Default::default()
            },
            &location(20.0),
        );
        let pump = calculate_energy(
            &EnergyAssessment {
                heating_source: Some(HeatingSource::HeatPump),
                ..Default::default()
            },
            &location(20.0),
        );
        assert!(pump.emissions_kg_per_year < gas.emissions_kg_per_year);
    }

    #[test]
    fn test_electric_heating_adds_nothing() {
        // Electric heating is inside the baseline already; its total is
        // the pure electricity branch.
        let result = calculate_energy(
            &EnergyAssessment {
                heating_source: Some(HeatingSource::Electricity),
                ..Default::default()
            },
            &location(480.0),
        );
        let expected = 30.0 * 365.0 * 480.0 / 1000.0 * 1.2;
        assert!((result.emissions_kg_per_year - expected).abs() < 1e-6);
    }

    #[test]
    fn test_natural_gas_branch() {
        let result = calculate_energy(
            &EnergyAssessment {
                heating_source: Some(HeatingSource::NaturalGas),
                ..Default::default()
            },
            &location(480.0),
        );
        let electricity = 30.0 * 365.0 * 480.0 / 1000.0;
        let gas = 30.0 * 0.6 * 365.0 * 0.0036 * 53.06;
        let expected = (electricity + gas) * 1.2;
        assert!((result.emissions_kg_per_year - expected).abs() < 1e-6);
    }

    #[test]
    fn test_efficiency_rating_ordering() {
        let make = |rating| {
            calculate_energy(
                &EnergyAssessment {
                    energy_efficiency_rating: Some(rating),
                    ..Default::default()
                },
                &location(480.0),
            )
            .emissions_kg_per_year
        };
        assert!(make(EfficiencyRating::Excellent) < make(EfficiencyRating::Good));
        assert!(make(EfficiencyRating::Good) < make(EfficiencyRating::Average));
        assert!(make(EfficiencyRating::Average) < make(EfficiencyRating::Poor));
    }

    #[test]
    fn test_renewable_credit_capped_at_80_pct() {
        let none = calculate_energy(&EnergyAssessment::default(), &location(480.0));
        let full = calculate_energy(
            &EnergyAssessment {
                renewable_energy_percentage: Some(100.0),
                ..Default::default()
            },
            &location(480.0),
        );
        let ratio = full.emissions_kg_per_year / none.emissions_kg_per_year;
        assert!((ratio - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_largest_house_dominates_smallest_apartment() {
        let small = calculate_energy(
            &EnergyAssessment {
                housing_type: Some(HousingType::Apartment),
                housing_size: Some(HousingSize::Small),
                ..Default::default()
            },
            &location(480.0),
        );
        let large = calculate_energy(
            &EnergyAssessment {
                housing_type: Some(HousingType::House),
                housing_size: Some(HousingSize::Large),
                ..Default::default()
            },
            &location(480.0),
        );
        assert!(large.emissions_kg_per_year > small.emissions_kg_per_year * 4.0);
    }

    #[test]
    fn test_purity() {
        let a = EnergyAssessment {
            heating_source: Some(HeatingSource::HeatPump),
            ..Default::default()
        };
        let loc = location(115.0);
        assert_eq!(calculate_energy(&a, &loc), calculate_energy(&a, &loc));
    }
}
