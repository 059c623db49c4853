//! # Survey Assessment Records
//!
//! One record per survey category, filled in incrementally by the caller
//! as the user completes wizard steps. Every field is an `Option<_>`:
//! absence is a valid state (the step was not completed yet), never an
//! error. Each record exposes accessor methods that apply the documented
//! neutral default, so calculators read defaults explicitly instead of
//! through scattered `unwrap_or` calls.
//!
//! Level enums carry their multiplier tables as exhaustive matches —
//! every variant has an explicit value, no implicit fallthrough.
//!
//! Some fields are collected by the survey but not consumed by the
//! current calculators (diet type, organic percentage, cooling type and
//! similar); they are carried here because the records are the survey's
//! data model, and a future calculator revision consumes them without a
//! schema change.

use serde::{Deserialize, Serialize};

/// A low/medium/high consumption level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumptionLevel {
    Low,
    Medium,
    High,
}

impl ConsumptionLevel {
    /// Multiplier on the dairy baseline (0.4 L/day of milk).
    pub fn dairy_multiplier(&self) -> f64 {
        match self {
            Self::Low => 0.7,
            Self::Medium => 1.0,
            Self::High => 1.4,
        }
    }

    /// Multiplier on the vegetable baseline (0.5 kg/day).
    pub fn vegetable_multiplier(&self) -> f64 {
        match self {
            Self::Low => 0.8,
            Self::Medium => 1.0,
            Self::High => 1.3,
        }
    }
}

/// How much purchased food ends up wasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodWasteLevel {
    Minimal,
    Average,
    High,
}

impl FoodWasteLevel {
    /// Multiplier on total food emissions. Even minimal waste carries a
    /// 5% overhead; high waste inflates the total by 30%.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Minimal => 1.05,
            Self::Average => 1.15,
            Self::High => 1.3,
        }
    }
}

/// Broad dietary pattern. Collected by the survey; the food calculator
/// works from the serving counts instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    Omnivorous,
    Vegetarian,
    Vegan,
    Pescatarian,
}

/// The household's primary vehicle, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    NoCar,
    SmallGasoline,
    MediumGasoline,
    LargeGasoline,
    Hybrid,
    /// Costed at the medium-gasoline factor; the registry has no
    /// dedicated diesel car entry.
    Diesel,
    /// Per-km factor depends on local grid intensity (clean/mixed/dirty
    /// tiers).
    Electric,
}

/// Housing archetype, keyed against the baseline consumption table
/// together with [`HousingSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingType {
    Apartment,
    Townhouse,
    House,
}

/// Housing size bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingSize {
    Small,
    Medium,
    Large,
}

/// Primary heating source for the household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingSource {
    NaturalGas,
    /// Resistive electric heating; already covered by the household
    /// electricity baseline, so the energy calculator adds nothing.
    Electricity,
    Oil,
    HeatPump,
    Wood,
    District,
}

/// Self-reported building energy efficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyRating {
    Poor,
    Average,
    Good,
    Excellent,
}

impl EfficiencyRating {
    /// Multiplier on total household energy emissions.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Poor => 1.3,
            Self::Average => 1.0,
            Self::Good => 0.8,
            Self::Excellent => 0.6,
        }
    }
}

/// Video streaming quality. Only the 4K tier selects a different
/// emission factor; SD is costed at the HD rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamingQuality {
    Sd,
    Hd,
    #[serde(rename = "4k")]
    FourK,
}

/// How often a device is replaced. Manufacturing emissions are amortized
/// over the replacement interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementFrequency {
    Yearly,
    #[serde(rename = "every_2_years")]
    Every2Years,
    #[serde(rename = "every_3_years")]
    Every3Years,
    #[serde(rename = "every_4_plus_years")]
    Every4PlusYears,
}

impl ReplacementFrequency {
    /// Amortization interval in years for a smartphone.
    pub fn phone_interval_years(&self) -> f64 {
        match self {
            Self::Yearly => 1.0,
            Self::Every2Years => 2.0,
            Self::Every3Years => 3.0,
            Self::Every4PlusYears => 4.0,
        }
    }

    /// Amortization interval in years for a laptop. The open-ended
    /// bucket assumes five years rather than four: laptops are kept
    /// longer than phones.
    pub fn laptop_interval_years(&self) -> f64 {
        match self {
            Self::Yearly => 1.0,
            Self::Every2Years => 2.0,
            Self::Every3Years => 3.0,
            Self::Every4PlusYears => 5.0,
        }
    }
}

/// Shower water temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterTemperature {
    Cold,
    Warm,
    Hot,
}

/// Water heating source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterHeatingSource {
    Gas,
    Electric,
    Solar,
    HeatPump,
}

/// Food survey answers.
///
/// Defaults: zero servings of meat and fish, medium dairy and vegetable
/// consumption, 50% locally sourced food, average waste.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoodAssessment {
    /// Collected but not consumed by the calculator.
    pub diet_type: Option<DietType>,
    pub red_meat_servings_per_week: Option<f64>,
    pub white_meat_servings_per_week: Option<f64>,
    pub fish_servings_per_week: Option<f64>,
    pub dairy_consumption: Option<ConsumptionLevel>,
    pub vegetable_consumption: Option<ConsumptionLevel>,
    /// 0–100; capped at 100 when read.
    pub local_food_percentage: Option<f64>,
    pub food_waste_level: Option<FoodWasteLevel>,
    /// Collected but not consumed by the calculator.
    pub organic_food_percentage: Option<f64>,
}

impl FoodAssessment {
    pub fn red_meat_servings_per_week(&self) -> f64 {
        self.red_meat_servings_per_week.unwrap_or(0.0)
    }

    pub fn white_meat_servings_per_week(&self) -> f64 {
        self.white_meat_servings_per_week.unwrap_or(0.0)
    }

    pub fn fish_servings_per_week(&self) -> f64 {
        self.fish_servings_per_week.unwrap_or(0.0)
    }

    pub fn dairy_consumption(&self) -> ConsumptionLevel {
        self.dairy_consumption.unwrap_or(ConsumptionLevel::Medium)
    }

    pub fn vegetable_consumption(&self) -> ConsumptionLevel {
        self.vegetable_consumption
            .unwrap_or(ConsumptionLevel::Medium)
    }

    /// Defaults to 50%, clamped to [0, 100].
    pub fn local_food_percentage(&self) -> f64 {
        self.local_food_percentage.unwrap_or(50.0).clamp(0.0, 100.0)
    }

    pub fn food_waste_level(&self) -> FoodWasteLevel {
        self.food_waste_level.unwrap_or(FoodWasteLevel::Average)
    }
}

/// Transport survey answers.
///
/// Defaults: no car, zero driving, zero public transit, zero flights,
/// economy class only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransportAssessment {
    pub vehicle_type: Option<VehicleType>,
    /// km driven per week.
    pub weekly_driving_distance: Option<f64>,
    pub public_transport_hours_per_week: Option<f64>,
    /// Collected but not consumed: walking and cycling are treated as
    /// effectively zero-emission at this resolution.
    pub walking_cycling_hours_per_week: Option<f64>,
    pub domestic_flights_per_year: Option<f64>,
    pub short_haul_flights_per_year: Option<f64>,
    pub long_haul_flights_per_year: Option<f64>,
    /// Share of flights taken in business class, 0–100.
    pub business_class_percentage: Option<f64>,
    /// Collected but not consumed by the calculator.
    pub car_sharing_usage: Option<bool>,
}

impl TransportAssessment {
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type.unwrap_or(VehicleType::NoCar)
    }

    pub fn weekly_driving_distance(&self) -> f64 {
        self.weekly_driving_distance.unwrap_or(0.0)
    }

    pub fn public_transport_hours_per_week(&self) -> f64 {
        self.public_transport_hours_per_week.unwrap_or(0.0)
    }

    pub fn domestic_flights_per_year(&self) -> f64 {
        self.domestic_flights_per_year.unwrap_or(0.0)
    }

    pub fn short_haul_flights_per_year(&self) -> f64 {
        self.short_haul_flights_per_year.unwrap_or(0.0)
    }

    pub fn long_haul_flights_per_year(&self) -> f64 {
        self.long_haul_flights_per_year.unwrap_or(0.0)
    }

    pub fn business_class_percentage(&self) -> f64 {
        self.business_class_percentage
            .unwrap_or(0.0)
            .clamp(0.0, 100.0)
    }
}

/// Home energy survey answers.
///
/// Defaults: medium apartment, two occupants, average efficiency, no
/// renewable share. A missing heating source falls to the generic
/// heating heuristic (the calculator's "other sources" arm).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnergyAssessment {
    pub housing_type: Option<HousingType>,
    pub housing_size: Option<HousingSize>,
    pub number_of_occupants: Option<f64>,
    pub heating_source: Option<HeatingSource>,
    pub energy_efficiency_rating: Option<EfficiencyRating>,
    /// Share of household electricity from renewable contracts, 0–100.
    pub renewable_energy_percentage: Option<f64>,
    /// Collected but not consumed by the calculator.
    pub solar_panels: Option<bool>,
    /// Collected but not consumed by the calculator.
    pub smart_thermostat: Option<bool>,
}

impl EnergyAssessment {
    pub fn housing_type(&self) -> HousingType {
        self.housing_type.unwrap_or(HousingType::Apartment)
    }

    pub fn housing_size(&self) -> HousingSize {
        self.housing_size.unwrap_or(HousingSize::Medium)
    }

    /// Defaults to 2; floored at 1 so the occupancy scaling never takes
    /// the square root of zero.
    pub fn number_of_occupants(&self) -> f64 {
        self.number_of_occupants.unwrap_or(2.0).max(1.0)
    }

    pub fn energy_efficiency_rating(&self) -> EfficiencyRating {
        self.energy_efficiency_rating
            .unwrap_or(EfficiencyRating::Average)
    }

    /// Defaults to 0%, clamped to [0, 100].
    pub fn renewable_energy_percentage(&self) -> f64 {
        self.renewable_energy_percentage
            .unwrap_or(0.0)
            .clamp(0.0, 100.0)
    }
}

/// Digital activity survey answers.
///
/// Defaults: zero hours everywhere, HD streaming, phone replaced every
/// three years, laptop every four-plus years.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DigitalAssessment {
    pub streaming_hours_per_day: Option<f64>,
    pub streaming_quality: Option<StreamingQuality>,
    pub video_call_hours_per_day: Option<f64>,
    pub social_media_hours_per_day: Option<f64>,
    pub gaming_hours_per_day: Option<f64>,
    pub phone_replacement_frequency: Option<ReplacementFrequency>,
    pub laptop_replacement_frequency: Option<ReplacementFrequency>,
}

impl DigitalAssessment {
    pub fn streaming_hours_per_day(&self) -> f64 {
        self.streaming_hours_per_day.unwrap_or(0.0)
    }

    pub fn streaming_quality(&self) -> StreamingQuality {
        self.streaming_quality.unwrap_or(StreamingQuality::Hd)
    }

    pub fn video_call_hours_per_day(&self) -> f64 {
        self.video_call_hours_per_day.unwrap_or(0.0)
    }

    pub fn social_media_hours_per_day(&self) -> f64 {
        self.social_media_hours_per_day.unwrap_or(0.0)
    }

    pub fn gaming_hours_per_day(&self) -> f64 {
        self.gaming_hours_per_day.unwrap_or(0.0)
    }

    pub fn phone_replacement_frequency(&self) -> ReplacementFrequency {
        self.phone_replacement_frequency
            .unwrap_or(ReplacementFrequency::Every3Years)
    }

    pub fn laptop_replacement_frequency(&self) -> ReplacementFrequency {
        self.laptop_replacement_frequency
            .unwrap_or(ReplacementFrequency::Every4PlusYears)
    }
}

/// Water survey answers. The water calculator is not implemented yet;
/// the record exists so the survey can collect answers against a stable
/// schema and so the placeholder calculator matches the category
/// contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaterAssessment {
    pub shower_minutes_per_day: Option<f64>,
    pub shower_temperature: Option<WaterTemperature>,
    pub baths_per_week: Option<f64>,
    pub dishwasher_loads_per_week: Option<f64>,
    pub washing_machine_loads_per_week: Option<f64>,
    pub water_heating_source: Option<WaterHeatingSource>,
    pub low_flow_fixtures: Option<bool>,
}

/// Waste survey answers. Same status as [`WaterAssessment`]: schema
/// only, consumed by the placeholder calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WasteAssessment {
    /// Percentage of household waste that is recycled, 0–100.
    pub recycling_rate: Option<f64>,
    /// Percentage of organic waste that is composted, 0–100.
    pub composting_rate: Option<f64>,
    pub single_use_plastic_usage: Option<ConsumptionLevel>,
    pub clothing_purchases_per_month: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_defaults() {
        let a = FoodAssessment::default();
        assert_eq!(a.red_meat_servings_per_week(), 0.0);
        assert_eq!(a.white_meat_servings_per_week(), 0.0);
        assert_eq!(a.fish_servings_per_week(), 0.0);
        assert_eq!(a.dairy_consumption(), ConsumptionLevel::Medium);
        assert_eq!(a.vegetable_consumption(), ConsumptionLevel::Medium);
        assert_eq!(a.local_food_percentage(), 50.0);
        assert_eq!(a.food_waste_level(), FoodWasteLevel::Average);
    }

    #[test]
    fn test_local_food_percentage_clamped() {
        let a = FoodAssessment {
            local_food_percentage: Some(250.0),
            ..Default::default()
        };
        assert_eq!(a.local_food_percentage(), 100.0);
        let b = FoodAssessment {
            local_food_percentage: Some(-10.0),
            ..Default::default()
        };
        assert_eq!(b.local_food_percentage(), 0.0);
    }

    #[test]
    fn test_transport_defaults() {
        let a = TransportAssessment::default();
        assert_eq!(a.vehicle_type(), VehicleType::NoCar);
        assert_eq!(a.weekly_driving_distance(), 0.0);
        assert_eq!(a.business_class_percentage(), 0.0);
    }

    #[test]
    fn test_energy_defaults() {
        let a = EnergyAssessment::default();
        assert_eq!(a.housing_type(), HousingType::Apartment);
        assert_eq!(a.housing_size(), HousingSize::Medium);
        assert_eq!(a.number_of_occupants(), 2.0);
        assert_eq!(a.energy_efficiency_rating(), EfficiencyRating::Average);
        assert_eq!(a.renewable_energy_percentage(), 0.0);
        assert!(a.heating_source.is_none());
    }

    #[test]
    fn test_occupants_floored_at_one() {
        let a = EnergyAssessment {
            number_of_occupants: Some(0.0),
            ..Default::default()
        };
        assert_eq!(a.number_of_occupants(), 1.0);
    }

    #[test]
    fn test_digital_defaults() {
        let a = DigitalAssessment::default();
        assert_eq!(a.streaming_quality(), StreamingQuality::Hd);
        assert_eq!(
            a.phone_replacement_frequency(),
            ReplacementFrequency::Every3Years
        );
        assert_eq!(
            a.laptop_replacement_frequency(),
            ReplacementFrequency::Every4PlusYears
        );
    }

    #[test]
    fn test_replacement_intervals() {
        assert_eq!(ReplacementFrequency::Yearly.phone_interval_years(), 1.0);
        assert_eq!(
            ReplacementFrequency::Every4PlusYears.phone_interval_years(),
            4.0
        );
        assert_eq!(
            ReplacementFrequency::Every4PlusYears.laptop_interval_years(),
            5.0
        );
    }

    #[test]
    fn test_streaming_quality_serde_format() {
        assert_eq!(
            serde_json::to_string(&StreamingQuality::FourK).unwrap(),
            "\"4k\""
        );
        assert_eq!(serde_json::to_string(&StreamingQuality::Hd).unwrap(), "\"hd\"");
    }

    #[test]
    fn test_assessment_serde_roundtrip() {
        let a = FoodAssessment {
            red_meat_servings_per_week: Some(2.0),
            dairy_consumption: Some(ConsumptionLevel::High),
            ..Default::default()
        };
        let json = serde_json::to_string(&a).unwrap();
        let parsed: FoodAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(a, parsed);
    }

    #[test]
    fn test_partial_json_deserializes() {
        // A record from a half-completed wizard step: unknown fields
        // absent, present fields in camelCase as the survey stores them.
        let json = r#"{"redMeatServingsPerWeek": 3.0, "foodWasteLevel": "minimal"}"#;
        let a: FoodAssessment = serde_json::from_str(json).unwrap();
        assert_eq!(a.red_meat_servings_per_week(), 3.0);
        assert_eq!(a.food_waste_level(), FoodWasteLevel::Minimal);
        assert_eq!(a.dairy_consumption(), ConsumptionLevel::Medium);
    }
}
