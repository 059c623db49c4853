//! # cfe-core — Foundational Types for the Carbon Footprint Engine
//!
//! This crate is the bedrock of the footprint engine workspace. It defines
//! the data model shared by the factor registry and the category
//! calculators: the registry taxonomy, the per-category survey records,
//! the location context, and the result records handed back to callers.
//! Every other crate in the workspace depends on `cfe-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Single `FactorCategory` enum.** One definition, 8 variants,
//!    exhaustive `match` everywhere. Adding a registry category forces
//!    every consumer to handle it at compile time.
//!
//! 2. **Explicit partial surveys.** Every assessment field is an
//!    `Option<_>` with a documented default applied through an accessor.
//!    A half-completed survey is a valid input, never an error.
//!
//! 3. **Values, not shared state.** Results are freshly constructed on
//!    every call; nothing in this crate is mutated after construction.
//!
//! 4. **Level enums carry their own multipliers.** Tables like
//!    `{low, medium, high} → multiplier` are exhaustive matches on the
//!    enum, so no variant can be silently skipped.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cfe-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone` and serialize with serde.

pub mod assessment;
pub mod category;
pub mod error;
pub mod location;
pub mod result;

// Re-export primary types for ergonomic imports.
pub use assessment::{
    ConsumptionLevel, DigitalAssessment, EfficiencyRating, EnergyAssessment, FoodAssessment,
    FoodWasteLevel, HeatingSource, HousingSize, HousingType, ReplacementFrequency,
    StreamingQuality, TransportAssessment, VehicleType, WasteAssessment, WaterAssessment,
};
pub use category::{FactorCategory, FACTOR_CATEGORY_COUNT};
pub use error::EngineError;
pub use location::{Coordinates, LocationContext};
pub use result::{
    AppliedFactors, CategoryResult, ClimateCompatibility, ComparisonBaselines, EmissionBreakdown,
    FootprintResult, Uncertainty,
};
