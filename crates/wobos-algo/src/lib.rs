//! # wobos-algo: Offshore Wind BOS Cost Evaluation
//!
//! Turns one [`wobos_core::PlantConfig`] into a fully itemized
//! balance-of-system cost breakdown.
//!
//! ## Evaluation Graph
//!
//! Each stage is a free function that takes the configuration and the typed
//! outputs of the stages it depends on. [`evaluate`] runs them in order:
//!
//! | Stage | Module | Produces |
//! |-------|--------|----------|
//! | 1 | [`dimensions`] | Nacelle, rotor and tower geometry and mass |
//! | 2 | [`substructure`] | Foundation, mooring and secondary steel |
//! | 3 | [`electrical`] | Cable layout, export/array selection, substations |
//! | 4 | [`installation`] | Phase durations and vessel ledgers |
//! | 5 | [`port`] | Port fees, laydown and cranes |
//! | 6 | [`development`] | E&M, permits, decommissioning, commissioning |
//! | 7 | [`soft_costs`] | Insurance, contingency, financing, totals |
//!
//! Degenerate intermediate values (empty deck capacity, skipped cable
//! candidates, snapped mooring diameters) are recovered locally, logged with
//! `tracing`, and recorded in the [`BosResult::diagnostics`] collection.
//!
//! ## Example
//!
//! ```rust
//! use wobos_core::{PlantConfig, SubstructureKind};
//!
//! let mut config = PlantConfig::default();
//! config.variants.substructure = SubstructureKind::Jacket;
//!
//! let result = wobos_algo::evaluate(&config).unwrap();
//! assert!(result.total_bos_cost() > 0.0);
//! println!("BOS: ${:.0}", result.total_bos_cost());
//! ```

pub mod development;
pub mod dimensions;
pub mod electrical;
pub mod installation;
pub mod orchestrator;
pub mod port;
pub mod result;
pub mod soft_costs;
pub mod substructure;

pub use orchestrator::evaluate;
pub use result::BosResult;
