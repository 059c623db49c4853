//! # Result Records
//!
//! The values handed back to callers: one [`CategoryResult`] per
//! calculator invocation and one [`FootprintResult`] per aggregation.
//! Both are freshly constructed on every call — the engine caches
//! nothing and never mutates a result after returning it.

use serde::{Deserialize, Serialize};

/// A symmetric uncertainty band around an emission estimate.
///
/// `confidence_pct` is `100 − uncertainty_pct`, matching the symmetric
/// range construction in the registry. This is a simplification of true
/// Monte-Carlo propagation; the band carries no distribution shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Uncertainty {
    /// Lower bound, same unit as the estimate it annotates.
    pub low: f64,
    /// Upper bound.
    pub high: f64,
    /// 100 minus the aggregate uncertainty percentage.
    pub confidence_pct: f64,
}

/// The adjustment factors a calculator applied, reported for
/// transparency in the results view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFactors {
    /// The dominant base emission factor (category-specific meaning).
    pub base_factor: f64,
    /// Multiplier applied for the local grid or local sourcing.
    pub regional_adjustment: f64,
    /// Lab-versus-field correction multiplier.
    pub real_world_adjustment: f64,
}

/// The result of one category calculator invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    /// Annual emissions in kg CO2e.
    pub emissions_kg_per_year: f64,
    /// Uncertainty band around `emissions_kg_per_year`, in kg.
    pub uncertainty: Uncertainty,
    /// The factors that shaped the estimate.
    pub factors: AppliedFactors,
}

/// Per-category annual emissions in tCO2e.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub food: f64,
    pub transport: f64,
    pub energy: f64,
    pub digital: f64,
    pub water: f64,
    pub waste: f64,
    /// Sum of the six categories.
    pub total: f64,
}

impl EmissionBreakdown {
    /// Sum of the six category values, independent of the stored total.
    pub fn category_sum(&self) -> f64 {
        self.food + self.transport + self.energy + self.digital + self.water + self.waste
    }
}

/// Fixed reference points the footprint is compared against, in tCO2e
/// per capita per year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonBaselines {
    /// Current global per-capita average.
    pub global_average: f64,
    /// Fixed middle-income tier constant; not derived from the selected
    /// location.
    pub country_average: f64,
    /// Per-capita budget compatible with the 2030 trajectory.
    pub target_2030: f64,
    /// Per-capita budget compatible with the 2050 trajectory.
    pub target_2050: f64,
}

/// Coarse classification of an annual footprint against climate targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateCompatibility {
    /// At or below 2.0 tCO2e/year.
    Excellent,
    /// At or below the 2030 target of 2.9 tCO2e/year.
    Good,
    /// At or below the current global average of 6.3 tCO2e/year.
    Medium,
    /// Above the global average.
    HighImpact,
}

impl ClimateCompatibility {
    /// Classify an annual total in tCO2e. Boundaries are inclusive on
    /// the lower class: a total of exactly 2.9 is still `Good`.
    pub fn classify(total_t_per_year: f64) -> Self {
        if total_t_per_year <= 2.0 {
            Self::Excellent
        } else if total_t_per_year <= 2.9 {
            Self::Good
        } else if total_t_per_year <= 6.3 {
            Self::Medium
        } else {
            Self::HighImpact
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Medium => "medium",
            Self::HighImpact => "high_impact",
        }
    }
}

impl std::fmt::Display for ClimateCompatibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The composite footprint verdict produced by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResult {
    /// Annual total in tCO2e.
    pub total_t_per_year: f64,
    /// Per-category breakdown in tCO2e.
    pub breakdown: EmissionBreakdown,
    /// Uncertainty band around the total, in tCO2e.
    pub uncertainty: Uncertainty,
    /// Fixed comparison baselines.
    pub baselines: ComparisonBaselines,
    /// Classification of the total against climate targets.
    pub compatibility: ClimateCompatibility,
}
