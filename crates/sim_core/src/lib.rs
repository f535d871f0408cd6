//! # sim_core: Foundation for the levsim Workspace
//!
//! Bottom layer of the levsim workspace, providing:
//! - Scenario parameter bundles (`types::scenario`)
//! - Structured error types (`types::error`)
//! - Summary statistics used by sweep aggregation (`stats`)
//!
//! ## Zero Dependency Principle
//!
//! sim_core has no dependencies on other sim_* crates, with minimal external
//! dependencies:
//! - thiserror: structured error derivation
//! - serde: serialisation of scenarios and sweep results
//!
//! ## Usage Examples
//!
//! ```rust
//! use sim_core::{stats, Scenario, DAYS_PER_YEAR};
//!
//! let scenario = Scenario::new(0.15, 0.08).unwrap();
//! assert!(scenario.drift() > 0.0);
//!
//! let mid = stats::median(&[3.0, 1.0, 2.0]).unwrap();
//! assert_eq!(mid, 2.0);
//! assert_eq!(DAYS_PER_YEAR, 365.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod stats;
pub mod types;

pub use types::{Scenario, SimError};

/// Calendar-day convention shared by every generator and sweep.
///
/// Time steps are daily and a year is 365 calendar days, so the daily time
/// increment is `1.0 / DAYS_PER_YEAR`.
pub const DAYS_PER_YEAR: f64 = 365.0;
