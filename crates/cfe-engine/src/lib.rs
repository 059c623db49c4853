//! # cfe-engine — Category Calculators and Aggregator
//!
//! The domain logic of the footprint engine: one pure calculator per
//! survey category, turning an assessment record and a location context
//! into a [`CategoryResult`], plus the aggregator that combines the six
//! category results into a single classified [`FootprintResult`].
//!
//! ## Purity
//!
//! Every function here is pure and synchronous: no I/O, no shared
//! mutable state, no caching. Identical inputs produce bit-identical
//! outputs, and any number of threads may call in parallel without
//! synchronization. Data flows one way — registry tables into
//! calculators, calculator results into the aggregator — with no
//! back-calls.
//!
//! ## Partial Surveys
//!
//! Calculators never fail: absent assessment fields take the documented
//! defaults from `cfe-core`, so a half-completed survey yields a result
//! (at reduced accuracy) rather than an error.
//!
//! [`CategoryResult`]: cfe_core::CategoryResult
//! [`FootprintResult`]: cfe_core::FootprintResult

pub mod aggregate;
pub mod digital;
pub mod energy;
pub mod food;
pub mod placeholder;
pub mod transport;

pub use aggregate::{aggregate, AssessmentBundle};
pub use digital::calculate_digital;
pub use energy::calculate_energy;
pub use food::calculate_food;
pub use placeholder::{calculate_waste, calculate_water};
pub use transport::calculate_transport;
