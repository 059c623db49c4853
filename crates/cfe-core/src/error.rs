//! # Error Types
//!
//! The engine's error surface is deliberately narrow. A missing emission
//! factor indicates a registry/calculator mismatch (a programming error)
//! and fails loudly with full context. User-data gaps — an unknown grid
//! country, an absent survey field — never surface as errors; those paths
//! degrade to documented defaults instead.

use thiserror::Error;

use crate::category::FactorCategory;

/// Top-level error type for the footprint engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// No emission factor exists for the given category/item pair.
    ///
    /// This is never silently defaulted: the registry keys are static and
    /// a miss means a calculator (or external caller) asked for an item
    /// the tables do not define.
    #[error("no emission factor registered for {category}:{item}")]
    FactorNotFound {
        /// The registry category that was searched.
        category: FactorCategory,
        /// The item key that was not found.
        item: String,
    },

    /// A string did not parse as a known enum variant.
    #[error("unknown {kind} variant: {value:?}")]
    UnknownVariant {
        /// The enum the string was parsed against.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}
