//! # Food Reference Scenario
//!
//! Walks the documented reference diet through the calculator and the
//! full aggregation pipeline: 2 red-meat, 3 white-meat, and 1 fish
//! serving per week, medium dairy and vegetables, 50% local sourcing,
//! average waste. Expected: pre-credit 1595.8 kg, after the 15% local
//! credit 1356.43 kg, final ~1559.9 kg CO2e/year (~1.56 t) with ~43%
//! aggregate uncertainty giving roughly (890, 2230) kg.

use cfe_core::{ConsumptionLevel, FoodWasteLevel, FoodAssessment, LocationContext};
use cfe_engine::{aggregate, calculate_food, AssessmentBundle};

fn reference_food() -> FoodAssessment {
    FoodAssessment {
        red_meat_servings_per_week: Some(2.0),
        white_meat_servings_per_week: Some(3.0),
        fish_servings_per_week: Some(1.0),
        dairy_consumption: Some(ConsumptionLevel::Medium),
        vegetable_consumption: Some(ConsumptionLevel::Medium),
        local_food_percentage: Some(50.0),
        food_waste_level: Some(FoodWasteLevel::Average),
        ..Default::default()
    }
}

fn location() -> LocationContext {
    LocationContext::manual("Germany", "Europe", 420.0)
}

#[test]
fn reference_diet_annual_emissions() {
    let result = calculate_food(&reference_food(), &location());

    // 936 (beef) + 112.32 (chicken) + 7.28 (fish) + 467.2 (dairy)
    // + 73.0 (vegetables) = 1595.8, then * 0.85 * 1.15.
    let expected = 1595.8 * 0.85 * 1.15;
    assert!((result.emissions_kg_per_year - expected).abs() < 1e-6);
    assert!((result.emissions_kg_per_year - 1559.9).abs() < 0.1);
}

#[test]
fn reference_diet_uncertainty_band() {
    let result = calculate_food(&reference_food(), &location());

    // RMS of the five factor uncertainties [50, 25, 40, 30, 60].
    let rms = (9225.0f64 / 5.0).sqrt();
    assert!((rms - 42.953).abs() < 0.001);
    assert!((result.uncertainty.confidence_pct - (100.0 - rms)).abs() < 1e-9);
    assert!((result.uncertainty.low - 890.0).abs() < 1.0);
    assert!((result.uncertainty.high - 2230.0).abs() < 1.0);
}

#[test]
fn reference_diet_through_aggregator() {
    let bundle = AssessmentBundle {
        food: reference_food(),
        ..Default::default()
    };
    let footprint = aggregate(&location(), &bundle);

    // The food slice of the breakdown is the calculator result in t.
    assert!((footprint.breakdown.food - 1.5599).abs() < 0.001);
    assert!(
        (footprint.total_t_per_year - footprint.breakdown.category_sum()).abs() < 1e-6
    );
}
