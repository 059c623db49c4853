//! # Registry Surface
//!
//! Exercises the string-keyed registry surface the way external
//! collaborators use it: category identifiers arriving as data, exact
//! key matching, and the documented failure mode for unknown pairs.

use cfe_core::{EngineError, FactorCategory};
use cfe_registry::{lookup_factor, uncertainty_range};

#[test]
fn lookup_via_string_category() {
    let category: FactorCategory = "transportation".parse().unwrap();
    let factor = lookup_factor(category, "car_hybrid").unwrap();
    assert_eq!(factor.value, 88.0);
    assert_eq!(factor.unit, "g CO2e/km");
}

#[test]
fn unknown_category_string_rejected() {
    let err = "transportations".parse::<FactorCategory>().unwrap_err();
    assert!(matches!(err, EngineError::UnknownVariant { .. }));
}

#[test]
fn unknown_item_propagates_immediately() {
    let err = lookup_factor(FactorCategory::Digital, "streaming_8k").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("digital"));
    assert!(message.contains("streaming_8k"));
}

#[test]
fn factor_range_and_uncertainty_agree_in_direction() {
    for category in FactorCategory::all() {
        // Spot-check one known entry per category through the public
        // surface.
        let item = match category {
            FactorCategory::Transportation => "subway",
            FactorCategory::Food => "lamb",
            FactorCategory::Energy => "heating_oil",
            FactorCategory::Housing => "house_large",
            FactorCategory::Digital => "cloud_storage",
            FactorCategory::Devices => "tablet",
            FactorCategory::Water => "dishwasher",
            FactorCategory::Waste => "composting",
        };
        let factor = lookup_factor(*category, item).unwrap();
        assert!(factor.low_estimate <= factor.value);
        assert!(factor.value <= factor.high_estimate);

        let (low, high) = uncertainty_range(factor.value, factor.uncertainty_pct);
        assert!(low <= factor.value && factor.value <= high);
    }
}
