//! # Location Context
//!
//! The caller-supplied location used for grid-dependent calculations.
//! The context is resolved by the outer surfaces (manual selection or
//! auto-detection); the engine only reads it. When the country is not in
//! the grid table the caller is expected to fill `grid_intensity` with
//! the global-average fallback the registry provides.

use serde::{Deserialize, Serialize};

/// Geographic coordinates, present only for auto-detected locations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// The location context handed to every calculator invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationContext {
    /// Country name, matched exactly against the grid table.
    pub country: String,
    /// Free-form region label (e.g. "Nordic", "Europe").
    pub region: String,
    /// Grid carbon intensity in g CO2/kWh.
    pub grid_intensity: f64,
    /// Whether the location came from auto-detection rather than manual
    /// selection.
    pub is_auto_detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl LocationContext {
    /// A manually selected location with a known grid intensity.
    pub fn manual(country: impl Into<String>, region: impl Into<String>, grid_intensity: f64) -> Self {
        Self {
            country: country.into(),
            region: region.into(),
            grid_intensity,
            is_auto_detected: false,
            coordinates: None,
        }
    }
}
