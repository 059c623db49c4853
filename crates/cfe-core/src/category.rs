//! # Factor Category — Single Source of Truth
//!
//! Defines the `FactorCategory` enum with the 8 registry categories.
//! This is the ONE taxonomy used across the workspace. Every `match` on
//! `FactorCategory` must be exhaustive — adding a category forces every
//! consumer (registry tables, lookup, calculators) to handle it at
//! compile time, so no factor table can be silently unreachable.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

/// The registry categories under which emission factors are filed.
///
/// Note this is the *registry* taxonomy, not the survey taxonomy: the
/// survey has six assessment categories (food, transport, energy,
/// digital, water, waste), while the registry additionally separates
/// housing baseline consumption and device manufacturing into their own
/// tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorCategory {
    /// Per-km factors for every travel mode, walking through first class.
    Transportation,
    /// Per-kg factors for food items.
    Food,
    /// Per-energy-unit factors for electricity and heating fuels.
    Energy,
    /// Baseline daily household consumption by housing type and size.
    Housing,
    /// Per-activity factors for streaming, calls, browsing, gaming.
    Digital,
    /// Manufacturing footprints per device, amortized over replacement.
    Devices,
    /// Per-use factors for showers, baths, and appliance loads.
    Water,
    /// Per-kg factors for landfill, recycling credits, composting.
    Waste,
}

/// Total number of registry categories. Used for compile-time assertions.
pub const FACTOR_CATEGORY_COUNT: usize = 8;

impl FactorCategory {
    /// Returns all registry categories in canonical order.
    pub fn all() -> &'static [FactorCategory] {
        &[
            Self::Transportation,
            Self::Food,
            Self::Energy,
            Self::Housing,
            Self::Digital,
            Self::Devices,
            Self::Water,
            Self::Waste,
        ]
    }

    /// Returns the snake_case string identifier for this category.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transportation => "transportation",
            Self::Food => "food",
            Self::Energy => "energy",
            Self::Housing => "housing",
            Self::Digital => "digital",
            Self::Devices => "devices",
            Self::Water => "water",
            Self::Waste => "waste",
        }
    }
}

impl std::fmt::Display for FactorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FactorCategory {
    type Err = EngineError;

    /// Parse a category from its snake_case string identifier.
    ///
    /// Accepts the same identifiers produced by [`FactorCategory::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transportation" => Ok(Self::Transportation),
            "food" => Ok(Self::Food),
            "energy" => Ok(Self::Energy),
            "housing" => Ok(Self::Housing),
            "digital" => Ok(Self::Digital),
            "devices" => Ok(Self::Devices),
            "water" => Ok(Self::Water),
            "waste" => Ok(Self::Waste),
            other => Err(EngineError::UnknownVariant {
                kind: "FactorCategory",
                value: other.to_string(),
            }),
        }
    }
}
