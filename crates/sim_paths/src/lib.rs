//! # sim_paths: Path Generation Kernel
//!
//! The numeric heart of the levsim workspace: stochastic price path
//! generation and the constant-leverage rebalancing transform.
//!
//! This crate provides:
//! - [`SimRng`]: seeded random number generation for reproducible simulations
//! - [`PathParams`] / [`PricePath`]: validated inputs and positive price paths
//! - [`gbm::generate_gbm_path`]: free geometric Brownian motion
//! - [`bridge::generate_bridge_path`]: Brownian bridge with drift
//!   (deterministic endpoints)
//! - [`leverage::apply_leverage`]: daily-rebalanced leveraged exposure
//!
//! # Architecture
//!
//! ```text
//! PathParams ──► generate_gbm_path    ──► PricePath ──► apply_leverage ──► Vec<f64>
//!            └─► generate_bridge_path ──►    ▲
//!                                   SimRng ──┘ (injected entropy)
//! ```
//!
//! Every function is a pure function of its inputs and the injected RNG; the
//! crate holds no global state, so callers can run independent simulations
//! in parallel without coordination.
//!
//! # Usage Example
//!
//! ```rust
//! use sim_core::Scenario;
//! use sim_paths::{generate_gbm_path, apply_leverage, PathParams, SimRng};
//!
//! let scenario = Scenario::new(0.15, 0.08).unwrap();
//! let params = PathParams::new(365, 100.0, scenario).unwrap();
//! let mut rng = SimRng::from_seed(42);
//!
//! let path = generate_gbm_path(&params, &mut rng).unwrap();
//! assert_eq!(path.len(), 366);
//!
//! let levered = apply_leverage(path.values(), 2.0).unwrap();
//! assert_eq!(levered.len(), path.len());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod bridge;
pub mod gbm;
pub mod leverage;
pub mod path;
pub mod rng;

pub use bridge::generate_bridge_path;
pub use gbm::generate_gbm_path;
pub use leverage::apply_leverage;
pub use path::{PathParams, PricePath};
pub use rng::SimRng;
