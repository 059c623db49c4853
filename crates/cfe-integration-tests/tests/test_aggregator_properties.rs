//! # Aggregator Properties
//!
//! Property-style checks over randomized surveys: additivity of the
//! breakdown, determinism of repeat calls, and the band bracketing the
//! total, for arbitrary answer combinations.

use cfe_core::{
    DigitalAssessment, EnergyAssessment, FoodAssessment, LocationContext, TransportAssessment,
    VehicleType,
};
use cfe_engine::{aggregate, AssessmentBundle};
use proptest::prelude::*;

fn vehicle_strategy() -> impl Strategy<Value = Option<VehicleType>> {
    prop_oneof![
        Just(None),
        Just(Some(VehicleType::NoCar)),
        Just(Some(VehicleType::SmallGasoline)),
        Just(Some(VehicleType::MediumGasoline)),
        Just(Some(VehicleType::LargeGasoline)),
        Just(Some(VehicleType::Hybrid)),
        Just(Some(VehicleType::Electric)),
    ]
}

prop_compose! {
    fn bundle_strategy()(
        red in 0.0f64..20.0,
        white in 0.0f64..20.0,
        fish in 0.0f64..10.0,
        local in 0.0f64..100.0,
        vehicle in vehicle_strategy(),
        weekly_km in 0.0f64..1000.0,
        transit_h in 0.0f64..30.0,
        long_haul in 0.0f64..10.0,
        occupants in 1.0f64..8.0,
        renewables in 0.0f64..100.0,
        streaming_h in 0.0f64..12.0,
    ) -> AssessmentBundle {
        AssessmentBundle {
            food: FoodAssessment {
                red_meat_servings_per_week: Some(red),
                white_meat_servings_per_week: Some(white),
                fish_servings_per_week: Some(fish),
                local_food_percentage: Some(local),
                ..Default::default()
            },
            transport: TransportAssessment {
                vehicle_type: vehicle,
                weekly_driving_distance: Some(weekly_km),
                public_transport_hours_per_week: Some(transit_h),
                long_haul_flights_per_year: Some(long_haul),
                ..Default::default()
            },
            energy: EnergyAssessment {
                number_of_occupants: Some(occupants),
                renewable_energy_percentage: Some(renewables),
                ..Default::default()
            },
            digital: DigitalAssessment {
                streaming_hours_per_day: Some(streaming_h),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

proptest! {
    #[test]
    fn total_is_additive(bundle in bundle_strategy(), grid in 0.0f64..800.0) {
        let location = LocationContext::manual("X", "", grid);
        let result = aggregate(&location, &bundle);
        prop_assert!(
            (result.total_t_per_year - result.breakdown.category_sum()).abs() < 1e-6
        );
    }

    #[test]
    fn aggregation_is_deterministic(bundle in bundle_strategy(), grid in 0.0f64..800.0) {
        let location = LocationContext::manual("X", "", grid);
        prop_assert_eq!(aggregate(&location, &bundle), aggregate(&location, &bundle));
    }

    #[test]
    fn band_brackets_total(bundle in bundle_strategy(), grid in 0.0f64..800.0) {
        let location = LocationContext::manual("X", "", grid);
        let result = aggregate(&location, &bundle);
        prop_assert!(result.uncertainty.low <= result.total_t_per_year);
        prop_assert!(result.total_t_per_year <= result.uncertainty.high);
    }
}
