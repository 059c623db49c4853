//! # Digital Calculator
//!
//! Annual digital-life emissions: streaming, video calls, social media,
//! gaming, and the manufacturing footprint of phone and laptop amortized
//! over their replacement intervals.

use cfe_core::{
    AppliedFactors, CategoryResult, DigitalAssessment, LocationContext, StreamingQuality,
    Uncertainty,
};
use cfe_registry::tables::{devices, digital};
use cfe_registry::uncertainty_range;

/// Fixed category uncertainty for digital activities.
const UNCERTAINTY_PCT: f64 = 40.0;

/// Calculate annual digital emissions in kg CO2e.
///
/// The location context is part of the uniform calculator contract;
/// network and data-center intensity are not regionalized at this
/// resolution.
pub fn calculate_digital(
    assessment: &DigitalAssessment,
    _location: &LocationContext,
) -> CategoryResult {
    let streaming_factor = match assessment.streaming_quality() {
        StreamingQuality::FourK => &digital::STREAMING_4K,
        // SD is costed at the HD rate; the registry has no SD entry.
        StreamingQuality::Sd | StreamingQuality::Hd => &digital::STREAMING_HD,
    };
    let streaming_kg = assessment.streaming_hours_per_day() * 365.0 * streaming_factor.value;

    let video_call_kg =
        assessment.video_call_hours_per_day() * 365.0 * digital::VIDEO_CALLS.value;
    // The social-media factor is per minute.
    let social_media_kg =
        assessment.social_media_hours_per_day() * 60.0 * 365.0 * digital::SOCIAL_MEDIA.value;
    let gaming_kg = assessment.gaming_hours_per_day() * 365.0 * digital::ONLINE_GAMING.value;

    // Manufacturing footprint per year of ownership.
    let device_kg = devices::SMARTPHONE.value
        / assessment.phone_replacement_frequency().phone_interval_years()
        + devices::LAPTOP.value
            / assessment.laptop_replacement_frequency().laptop_interval_years();

    let total = streaming_kg + video_call_kg + social_media_kg + gaming_kg + device_kg;

    let (low, high) = uncertainty_range(total, UNCERTAINTY_PCT);

    tracing::debug!(
        streaming_kg,
        device_kg,
        total_kg = total,
        "digital emissions computed"
    );

    CategoryResult {
        emissions_kg_per_year: total,
        uncertainty: Uncertainty {
            low,
            high,
            confidence_pct: 100.0 - UNCERTAINTY_PCT,
        },
        factors: AppliedFactors {
            base_factor: streaming_factor.value,
            regional_adjustment: 1.0,
            real_world_adjustment: 1.0,
        },
    }
}
