//! Central engine constants.
//!
//! Crate-wide identifiers and capacities only. Component thresholds and
//! weights live in each module's `rules.rs` so the rule set stays
//! auditable per component.

/// Engine name
pub const ENGINE_NAME: &str = "veracity-core";

/// Engine version
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// How many recent analysis results each session retains.
pub const RESULT_HISTORY_CAP: usize = 32;
