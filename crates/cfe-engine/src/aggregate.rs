//! # Footprint Aggregator
//!
//! Combines the six category results into one composite verdict: unit
//! conversion to tCO2e, summation, uncertainty aggregation over the
//! implemented categories, and classification against fixed climate
//! targets.
//!
//! The aggregator works purely through the [`CategoryResult`] contract;
//! replacing a placeholder calculator with a real one requires no change
//! here.

use serde::{Deserialize, Serialize};

use cfe_core::{
    CategoryResult, ClimateCompatibility, ComparisonBaselines, DigitalAssessment,
    EmissionBreakdown, EnergyAssessment, FoodAssessment, FootprintResult, LocationContext,
    TransportAssessment, Uncertainty, WasteAssessment, WaterAssessment,
};
use cfe_registry::tables::targets;
use cfe_registry::uncertainty_range;

use crate::{
    calculate_digital, calculate_energy, calculate_food, calculate_transport, calculate_waste,
    calculate_water,
};

/// One (possibly partial) assessment record per survey category, as
/// accumulated by the caller across wizard steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentBundle {
    pub food: FoodAssessment,
    pub transport: TransportAssessment,
    pub energy: EnergyAssessment,
    pub digital: DigitalAssessment,
    pub water: WaterAssessment,
    pub waste: WasteAssessment,
}

/// Compute the composite annual footprint for one survey.
pub fn aggregate(location: &LocationContext, assessments: &AssessmentBundle) -> FootprintResult {
    let food = calculate_food(&assessments.food, location);
    let transport = calculate_transport(&assessments.transport, location);
    let energy = calculate_energy(&assessments.energy, location);
    let digital = calculate_digital(&assessments.digital, location);
    let water = calculate_water(&assessments.water, location);
    let waste = calculate_waste(&assessments.waste, location);

    let mut breakdown = EmissionBreakdown {
        food: food.emissions_kg_per_year / 1000.0,
        transport: transport.emissions_kg_per_year / 1000.0,
        energy: energy.emissions_kg_per_year / 1000.0,
        digital: digital.emissions_kg_per_year / 1000.0,
        water: water.emissions_kg_per_year / 1000.0,
        waste: waste.emissions_kg_per_year / 1000.0,
        total: 0.0,
    };
    breakdown.total = breakdown.category_sum();

    // Root-sum-of-squares over the relative uncertainties of the four
    // implemented categories. The placeholders report no real
    // uncertainty and are excluded until their calculators exist.
    let implemented = [&food, &transport, &energy, &digital];
    let mean_sq = implemented
        .iter()
        .map(|result| relative_uncertainty(result).powi(2))
        .sum::<f64>()
        / implemented.len() as f64;
    let aggregate_pct = mean_sq.sqrt() * 100.0;

    let (low, high) = uncertainty_range(breakdown.total, aggregate_pct);

    let compatibility = ClimateCompatibility::classify(breakdown.total);

    tracing::debug!(
        total_t = breakdown.total,
        aggregate_pct,
        %compatibility,
        "footprint aggregated"
    );

    FootprintResult {
        total_t_per_year: breakdown.total,
        breakdown,
        uncertainty: Uncertainty {
            low,
            high,
            confidence_pct: 100.0 - aggregate_pct,
        },
        baselines: ComparisonBaselines {
            global_average: targets::GLOBAL_AVERAGE,
            // Fixed middle-income tier; not derived from the location.
            country_average: targets::MIDDLE_INCOME,
            target_2030: targets::TARGET_2030,
            target_2050: targets::TARGET_2050,
        },
        compatibility,
    }
}

/// Half-width of the uncertainty band relative to the estimate. The
/// divisor is floored at 1 kg so a zero-emission category (an empty
/// transport survey, say) contributes zero rather than a division by
/// zero.
fn relative_uncertainty(result: &CategoryResult) -> f64 {
    (result.uncertainty.high - result.uncertainty.low)
        / (2.0 * result.emissions_kg_per_year.max(1.0))
}
