//! # Registry Lookup
//!
//! The two lookup operations external collaborators use. Calculators
//! reference the named statics in [`crate::tables`] directly; this
//! string-keyed surface exists for callers that carry category/item
//! identifiers as data (the results view, scenario tooling).

use cfe_core::{EngineError, FactorCategory};

use crate::factor::EmissionFactor;
use crate::tables::{
    self, devices, digital, energy, food, housing, transportation, waste, water,
    GLOBAL_AVERAGE_GRID_INTENSITY,
};

/// Look up an emission factor by exact category and item key.
///
/// A miss is a programming error (registry/caller mismatch), not a
/// user-data gap: it fails with [`EngineError::FactorNotFound`] and is
/// never silently defaulted.
pub fn lookup_factor(
    category: FactorCategory,
    item: &str,
) -> Result<&'static EmissionFactor, EngineError> {
    let entries: &[(&str, &EmissionFactor)] = match category {
        FactorCategory::Transportation => transportation::ENTRIES,
        FactorCategory::Food => food::ENTRIES,
        FactorCategory::Energy => energy::ENTRIES,
        FactorCategory::Housing => housing::ENTRIES,
        FactorCategory::Digital => digital::ENTRIES,
        FactorCategory::Devices => devices::ENTRIES,
        FactorCategory::Water => water::ENTRIES,
        FactorCategory::Waste => waste::ENTRIES,
    };
    entries
        .iter()
        .find(|(key, _)| *key == item)
        .map(|(_, factor)| *factor)
        .ok_or_else(|| EngineError::FactorNotFound {
            category,
            item: item.to_string(),
        })
}

/// Grid carbon intensity for a country in g CO2/kWh.
///
/// Never fails: a country absent from the table gets the global-average
/// fallback of 480, degrading gracefully rather than erroring on a
/// user-data gap.
pub fn grid_intensity_for(country: &str) -> f64 {
    tables::GRID_FACTORS
        .iter()
        .find(|entry| entry.country == country)
        .map(|entry| entry.grid_intensity)
        .unwrap_or(GLOBAL_AVERAGE_GRID_INTENSITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_factor() {
        let beef = lookup_factor(FactorCategory::Food, "beef").unwrap();
        assert_eq!(beef.value, 60.0);
        assert_eq!(beef.unit, "kg CO2e/kg");
    }

    #[test]
    fn test_lookup_every_entry_reachable() {
        // Every (category, key) pair in the tables resolves through the
        // public lookup path.
        let all: &[(FactorCategory, &[(&str, &EmissionFactor)])] = &[
            (FactorCategory::Transportation, transportation::ENTRIES),
            (FactorCategory::Food, food::ENTRIES),
            (FactorCategory::Energy, energy::ENTRIES),
            (FactorCategory::Housing, housing::ENTRIES),
            (FactorCategory::Digital, digital::ENTRIES),
            (FactorCategory::Devices, devices::ENTRIES),
            (FactorCategory::Water, water::ENTRIES),
            (FactorCategory::Waste, waste::ENTRIES),
        ];
        for (category, entries) in all {
            for (key, factor) in *entries {
                let found = lookup_factor(*category, key)
                    .unwrap_or_else(|e| panic!("lookup failed: {e}"));
                assert_eq!(found.value, factor.value, "{category}:{key}");
            }
        }
    }

    #[test]
    fn test_lookup_miss_is_error() {
        let err = lookup_factor(FactorCategory::Food, "unobtainium").unwrap_err();
        match err {
            EngineError::FactorNotFound { category, item } => {
                assert_eq!(category, FactorCategory::Food);
                assert_eq!(item, "unobtainium");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lookup_is_exact_match() {
        // No fuzzy matching: near-misses fail.
        assert!(lookup_factor(FactorCategory::Food, "Beef").is_err());
        assert!(lookup_factor(FactorCategory::Food, "beef ").is_err());
        // Right item under the wrong category fails too.
        assert!(lookup_factor(FactorCategory::Energy, "beef").is_err());
    }

    #[test]
    fn test_grid_intensity_known_countries() {
        assert_eq!(grid_intensity_for("Iceland"), 0.0);
        assert_eq!(grid_intensity_for("Norway"), 20.0);
        assert_eq!(grid_intensity_for("South Africa"), 783.0);
    }

    #[test]
    fn test_grid_intensity_unknown_country_falls_back() {
        assert_eq!(grid_intensity_for("Atlantis"), 480.0);
        assert_eq!(grid_intensity_for(""), 480.0);
        // Exact match only: case differences fall back too.
        assert_eq!(grid_intensity_for("norway"), 480.0);
    }
}
