//! # Transport Calculator
//!
//! Annual mobility emissions from driving, public transit, and flying.
//! Electric vehicles are costed by local grid cleanliness: the per-km
//! factor is selected from clean/mixed/dirty tiers on the caller's grid
//! intensity, so the same car scores very differently in Norway and in
//! Poland.

use cfe_core::{
    AppliedFactors, CategoryResult, LocationContext, TransportAssessment, Uncertainty, VehicleType,
};
use cfe_registry::tables::{adjustments, transportation, GLOBAL_AVERAGE_GRID_INTENSITY};
use cfe_registry::{uncertainty_range, EmissionFactor};

/// Grid intensity below which an EV is costed at the clean-grid factor.
const EV_CLEAN_GRID_THRESHOLD: f64 = 150.0;
/// Grid intensity below which an EV is costed at the mixed-grid factor;
/// at or above it, the dirty-grid factor applies.
const EV_MIXED_GRID_THRESHOLD: f64 = 400.0;
/// Assumed average speed for public transit, km/h.
const TRANSIT_AVG_SPEED_KMH: f64 = 25.0;
/// Assumed average trip distances per flight range, km.
const DOMESTIC_FLIGHT_KM: f64 = 800.0;
const SHORT_HAUL_FLIGHT_KM: f64 = 1200.0;
const LONG_HAUL_FLIGHT_KM: f64 = 8000.0;
/// Minimum reported uncertainty for the transport category.
const UNCERTAINTY_FLOOR_PCT: f64 = 30.0;

/// The per-km factor for the household vehicle, if there is one.
fn vehicle_factor(vehicle: VehicleType, grid_intensity: f64) -> Option<&'static EmissionFactor> {
    match vehicle {
        VehicleType::NoCar => None,
        VehicleType::SmallGasoline => Some(&transportation::CAR_SMALL_GASOLINE),
        // The registry has no dedicated diesel entry; diesel cars are
        // costed at the medium-gasoline factor.
        VehicleType::MediumGasoline | VehicleType::Diesel => {
            Some(&transportation::CAR_MEDIUM_GASOLINE)
        }
        VehicleType::LargeGasoline => Some(&transportation::CAR_LARGE_GASOLINE),
        VehicleType::Hybrid => Some(&transportation::CAR_HYBRID),
        VehicleType::Electric => {
            if grid_intensity < EV_CLEAN_GRID_THRESHOLD {
                Some(&transportation::CAR_ELECTRIC_CLEAN)
            } else if grid_intensity < EV_MIXED_GRID_THRESHOLD {
                Some(&transportation::CAR_ELECTRIC_MIXED)
            } else {
                Some(&transportation::CAR_ELECTRIC_DIRTY)
            }
        }
    }
}

/// Calculate annual transport emissions in kg CO2e.
pub fn calculate_transport(
    assessment: &TransportAssessment,
    location: &LocationContext,
) -> CategoryResult {
    let mut total = 0.0;
    let mut vehicle_uncertainty = 0.0;

    if let Some(factor) = vehicle_factor(assessment.vehicle_type(), location.grid_intensity) {
        // g/km -> kg over a year of weekly driving.
        let vehicle_kg = assessment.weekly_driving_distance() * 52.0 * factor.value / 1000.0;
        total += vehicle_kg;
        vehicle_uncertainty = factor.uncertainty_pct;
        tracing::debug!(
            vehicle = ?assessment.vehicle_type(),
            factor_g_per_km = factor.value,
            vehicle_kg,
            "vehicle emissions computed"
        );
    }

    // Transit hours are turned into distance at one average speed and
    // costed at the urban-bus factor; no finer mode split at this
    // resolution.
    let transit_km =
        assessment.public_transport_hours_per_week() * TRANSIT_AVG_SPEED_KMH * 52.0;
    total += transit_km * transportation::BUS_URBAN.value / 1000.0;

    let flight_kg = assessment.domestic_flights_per_year()
        * DOMESTIC_FLIGHT_KM
        * transportation::FLIGHT_DOMESTIC.value
        / 1000.0
        + assessment.short_haul_flights_per_year()
            * SHORT_HAUL_FLIGHT_KM
            * transportation::FLIGHT_SHORT_HAUL.value
            / 1000.0
        + assessment.long_haul_flights_per_year()
            * LONG_HAUL_FLIGHT_KM
            * transportation::FLIGHT_LONG_HAUL_ECONOMY.value
            / 1000.0;

    // Linear approximation of the ~2x premium-cabin footprint: flying
    // business on every trip doubles the flight total.
    let business_adjustment = 1.0 + assessment.business_class_percentage() / 100.0;
    total += flight_kg * business_adjustment;

    // The fuel-economy gap correction is applied to the whole category,
    // driving being the dominant mode it is meant for.
    total *= adjustments::VEHICLE_FUEL_ECONOMY;

    // Deliberately crude aggregate: halve the vehicle factor's own
    // uncertainty, then floor at 30%.
    let uncertainty_pct =
        (vehicle_uncertainty * vehicle_uncertainty / 4.0).sqrt().max(UNCERTAINTY_FLOOR_PCT);
    let (low, high) = uncertainty_range(total, uncertainty_pct);

    tracing::debug!(total_kg = total, uncertainty_pct, "transport emissions computed");

    CategoryResult {
        emissions_kg_per_year: total,
        uncertainty: Uncertainty {
            low,
            high,
            confidence_pct: 100.0 - uncertainty_pct,
        },
        factors: AppliedFactors {
            base_factor: total,
            regional_adjustment: location.grid_intensity / GLOBAL_AVERAGE_GRID_INTENSITY,
            real_world_adjustment: adjustments::VEHICLE_FUEL_ECONOMY,
        },
    }
}
