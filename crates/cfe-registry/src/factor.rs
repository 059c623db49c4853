//! # Emission Factor Value Types
//!
//! The record types the static tables are built from, plus the
//! uncertainty-range utility every calculator uses.
//!
//! These types are `Serialize`-only: their string fields are
//! `&'static str` because every instance lives in a const table, and
//! nothing deserializes registry entries.

use serde::Serialize;

/// A coefficient converting one unit of activity into mass of
/// CO2-equivalent, with its published uncertainty.
///
/// Invariant: `low_estimate <= value <= high_estimate`. The inequality
/// holds algebraically for negative credit factors too (recycling
/// credits are simply negative throughout).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionFactor {
    /// Central estimate.
    pub value: f64,
    /// Unit of the central estimate, e.g. `"g CO2e/km"`.
    pub unit: &'static str,
    /// Low end of the published range.
    pub low_estimate: f64,
    /// High end of the published range.
    pub high_estimate: f64,
    /// Relative uncertainty, 0–100.
    pub uncertainty_pct: f64,
    /// Optional sourcing note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static str>,
}

impl EmissionFactor {
    /// Const constructor used by the static tables.
    pub const fn new(
        value: f64,
        unit: &'static str,
        low_estimate: f64,
        high_estimate: f64,
        uncertainty_pct: f64,
    ) -> Self {
        Self {
            value,
            unit,
            low_estimate,
            high_estimate,
            uncertainty_pct,
            notes: None,
        }
    }
}

/// Direction a grid's carbon intensity is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GridTrend {
    Stable,
    Declining,
}

/// One national entry in the grid carbon-intensity table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalGridFactor {
    /// Country name; [`crate::grid_intensity_for`] matches it exactly.
    pub country: &'static str,
    /// Grouping label for the results view.
    pub region: &'static str,
    /// g CO2 per kWh generated; never negative.
    pub grid_intensity: f64,
    pub trend: GridTrend,
}

/// Compute the symmetric uncertainty band around a value.
///
/// `low = value × (1 − pct/100)`, `high = value × (1 + pct/100)`.
///
/// Symmetric by construction. This is a deliberate simplification of
/// true Monte-Carlo uncertainty propagation; do not substitute a
/// different distribution without cause.
pub fn uncertainty_range(value: f64, uncertainty_pct: f64) -> (f64, f64) {
    let range = value * uncertainty_pct / 100.0;
    (value - range, value + range)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The band is symmetric around the value for any inputs.
        #[test]
        fn uncertainty_range_symmetric(
            value in -1e6f64..1e6,
            pct in 0.0f64..100.0,
        ) {
            let (low, high) = uncertainty_range(value, pct);
            prop_assert!(((value - low) - (high - value)).abs() < 1e-6);
        }

        /// The band matches the defining formula exactly.
        #[test]
        fn uncertainty_range_formula(
            value in -1e6f64..1e6,
            pct in 0.0f64..100.0,
        ) {
            let (low, high) = uncertainty_range(value, pct);
            let tol = 1e-9 * value.abs().max(1.0);
            prop_assert!((low - value * (1.0 - pct / 100.0)).abs() <= tol);
            prop_assert!((high - value * (1.0 + pct / 100.0)).abs() <= tol);
        }
    }
}
