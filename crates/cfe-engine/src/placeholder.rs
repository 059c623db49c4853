//! # Water and Waste Placeholders
//!
//! These two categories have no calculator yet. The functions here
//! match the category-calculator contract so the aggregator (and any
//! future caller) needs no special casing, but they return fixed
//! placeholder values: no formula is modeled. The registry's water and
//! waste factor tables exist; wiring them up is the open follow-up.
//!
//! Placeholder results report a zero-width uncertainty band with 0%
//! confidence, and the aggregator excludes them from uncertainty
//! aggregation.

use cfe_core::{
    AppliedFactors, CategoryResult, LocationContext, Uncertainty, WasteAssessment, WaterAssessment,
};

/// Fixed placeholder for annual water emissions, kg CO2e (0.5 tCO2e).
pub const WATER_PLACEHOLDER_KG: f64 = 500.0;
/// Fixed placeholder for annual waste emissions, kg CO2e (0.3 tCO2e).
pub const WASTE_PLACEHOLDER_KG: f64 = 300.0;

fn placeholder_result(emissions_kg: f64) -> CategoryResult {
    CategoryResult {
        emissions_kg_per_year: emissions_kg,
        uncertainty: Uncertainty {
            low: emissions_kg,
            high: emissions_kg,
            confidence_pct: 0.0,
        },
        factors: AppliedFactors {
            base_factor: emissions_kg,
            regional_adjustment: 1.0,
            real_world_adjustment: 1.0,
        },
    }
}

/// Water calculator placeholder. The assessment and location are
/// accepted per the contract and currently ignored.
pub fn calculate_water(
    _assessment: &WaterAssessment,
    _location: &LocationContext,
) -> CategoryResult {
    placeholder_result(WATER_PLACEHOLDER_KG)
}

/// Waste calculator placeholder. The assessment and location are
/// accepted per the contract and currently ignored.
pub fn calculate_waste(
    _assessment: &WasteAssessment,
    _location: &LocationContext,
) -> CategoryResult {
    placeholder_result(WASTE_PLACEHOLDER_KG)
}
