//! # sim_sweep: Monte Carlo Sweep Drivers
//!
//! Parameter sweeps over the path generation kernel, each answering one
//! question about leveraged compounding:
//!
//! - [`median_paths()`]: what does the typical (median) leveraged path look
//!   like for a set of scenario/lever pairs?
//! - [`lever_scan()`]: which constant leverage maximises the median terminal
//!   value for a scenario?
//! - [`heatmap()`]: how does the leveraged/unleveraged median-outcome ratio
//!   vary over a volatility × expected-return grid?
//! - [`path_dependence()`]: how far apart do leveraged outcomes land when
//!   the underlying paths share identical endpoints?
//!
//! # Determinism Under Parallelism
//!
//! Sweeps parallelise across independent paths and grid cells with rayon.
//! Every path derives its own generator from the configured base seed and
//! its stable index, so results are identical for a given seed regardless
//! of thread count or scheduling.
//!
//! # Usage Example
//!
//! ```rust
//! use sim_core::Scenario;
//! use sim_sweep::{lever_scan, AxisRange, SweepConfig};
//!
//! let config = SweepConfig::builder()
//!     .n_paths(200)
//!     .n_steps(365)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let levers = AxisRange::new(0.0, 3.0, 0.5).unwrap().values();
//! let scenario = Scenario::new(0.15, 0.08).unwrap();
//! let result = lever_scan(&config, scenario, &levers).unwrap();
//!
//! assert_eq!(result.levers.len(), result.median_finals.len());
//! let (best_lever, _best_median) = result.optimal().unwrap();
//! assert!(best_lever >= 0.0 && best_lever < 3.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod grid;
pub mod heatmap;
pub mod lever_scan;
pub mod median_paths;
pub mod path_dependence;

pub use config::{SweepConfig, SweepConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use grid::AxisRange;
pub use heatmap::{heatmap, HeatmapResult};
pub use lever_scan::{lever_scan, LeverScanResult};
pub use median_paths::{median_paths, LeveredScenario, MedianPathResult};
pub use path_dependence::{path_dependence, PathDependenceResult};
