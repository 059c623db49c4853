//! # cfe-registry — Emission Factor Registry
//!
//! Static tables of per-activity emission factors (central value,
//! low/high estimate, uncertainty percentage) keyed by category and
//! item, the national grid carbon-intensity table, real-world
//! adjustment constants, and climate target baselines.
//!
//! All tables are `'static` immutable data, built once into the binary.
//! There is no write path: the registry holds no resources, needs no
//! teardown, and can be read from any number of threads without
//! synchronization.
//!
//! ## Lookup Discipline
//!
//! - [`lookup_factor`] is an exact key match and **fails** on a miss
//!   with [`EngineError::FactorNotFound`] — a miss means a calculator or
//!   caller asked for an item the tables do not define, which is a
//!   programming error, never a user-data gap.
//! - [`grid_intensity_for`] **never fails** — an unknown country falls
//!   back to [`GLOBAL_AVERAGE_GRID_INTENSITY`], because an unusual
//!   location is a user-data gap and must degrade gracefully.
//!
//! [`EngineError::FactorNotFound`]: cfe_core::EngineError::FactorNotFound

pub mod factor;
pub mod lookup;
pub mod tables;

pub use factor::{uncertainty_range, EmissionFactor, GridTrend, RegionalGridFactor};
pub use lookup::{grid_intensity_for, lookup_factor};
pub use tables::GLOBAL_AVERAGE_GRID_INTENSITY;
