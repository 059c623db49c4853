//! # Food Calculator
//!
//! Annual diet emissions from weekly serving counts and consumption
//! levels. Meat and fish are mass-based (servings × a fixed serving
//! mass × 52 weeks × the per-kg factor); dairy and vegetables are daily
//! baselines scaled by the reported level; local sourcing earns a
//! transport credit capped at 30%; food waste inflates the total.

use cfe_core::{AppliedFactors, CategoryResult, FoodAssessment, LocationContext, Uncertainty};
use cfe_registry::tables::food;
use cfe_registry::uncertainty_range;

/// Assumed mass of one red-meat serving, kg.
const RED_MEAT_SERVING_KG: f64 = 0.15;
/// Assumed mass of one white-meat serving, kg.
const WHITE_MEAT_SERVING_KG: f64 = 0.12;
/// Assumed mass of one fish serving, kg.
const FISH_SERVING_KG: f64 = 0.10;
/// Dairy baseline, litres of milk per day.
const DAIRY_BASELINE_L_PER_DAY: f64 = 0.4;
/// Vegetable baseline, kg per day.
const VEGETABLE_BASELINE_KG_PER_DAY: f64 = 0.5;
/// Maximum share of food emissions attributable to transport and thus
/// creditable through local sourcing.
const LOCAL_SOURCING_MAX_CREDIT: f64 = 0.3;

/// Calculate annual food emissions in kg CO2e.
///
/// The location context is part of the uniform calculator contract but
/// carries no food-specific adjustment today.
pub fn calculate_food(assessment: &FoodAssessment, _location: &LocationContext) -> CategoryResult {
    let meat_fish = assessment.red_meat_servings_per_week() * RED_MEAT_SERVING_KG * 52.0 * food::BEEF.value
        + assessment.white_meat_servings_per_week() * WHITE_MEAT_SERVING_KG * 52.0 * food::CHICKEN.value
        + assessment.fish_servings_per_week() * FISH_SERVING_KG * 52.0 * food::FISH_SMALL.value;

    let dairy = 365.0
        * DAIRY_BASELINE_L_PER_DAY
        * food::MILK.value
        * assessment.dairy_consumption().dairy_multiplier();

    let vegetables = 365.0
        * VEGETABLE_BASELINE_KG_PER_DAY
        * food::VEGETABLES_ROOT.value
        * assessment.vegetable_consumption().vegetable_multiplier();

    let mut total = meat_fish + dairy + vegetables;

    // Local sourcing reduces the transport share of the total, capped at
    // a 30% credit when everything is sourced locally.
    let local_reduction = assessment.local_food_percentage() / 100.0 * LOCAL_SOURCING_MAX_CREDIT;
    total *= 1.0 - local_reduction;

    let waste_multiplier = assessment.food_waste_level().multiplier();
    total *= waste_multiplier;

    // Unweighted root-mean-square of the five factor uncertainties. An
    // approximation: the shares of each factor in the total are ignored.
    let uncertainties = [
        food::BEEF.uncertainty_pct,
        food::CHICKEN.uncertainty_pct,
        food::FISH_SMALL.uncertainty_pct,
        food::MILK.uncertainty_pct,
        food::VEGETABLES_ROOT.uncertainty_pct,
    ];
    let uncertainty_pct = (uncertainties.iter().map(|u| u * u).sum::<f64>()
        / uncertainties.len() as f64)
        .sqrt();

    let (low, high) = uncertainty_range(total, uncertainty_pct);

    tracing::debug!(
        total_kg = total,
        uncertainty_pct,
        local_reduction,
        waste_multiplier,
        "food emissions computed"
    );

    CategoryResult {
        emissions_kg_per_year: total,
        uncertainty: Uncertainty {
            low,
            high,
            confidence_pct: 100.0 - uncertainty_pct,
        },
        factors: AppliedFactors {
            // Per-serving intensity; the divisor is floored at one
            // serving so a meat-free diet still yields a defined number.
            base_factor: total / assessment.red_meat_servings_per_week().max(1.0),
            regional_adjustment: 1.0 - local_reduction,
            real_world_adjustment: waste_multiplier,
        },
    }
}
