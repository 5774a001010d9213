//! # wobos-core: Offshore Wind BOS Input Model
//!
//! Provides the configuration records, categorical variants, vessel and cable
//! catalogs that describe one offshore wind plant, together with the shared
//! error and diagnostics types used across the workspace.
//!
//! ## Design Philosophy
//!
//! The input model holds no formulas. A [`PlantConfig`] is built once
//! (usually deserialized from TOML or JSON), checked by [`validate`], and then
//! handed read-only to the evaluation in `wobos-algo`.
//!
//! - **Variants** are closed enums ([`SubstructureKind`], [`AnchorKind`],
//!   [`InstallStrategy`], [`TurbineAssembly`], [`TowerAssembly`])
//! - **Vessels** are named-field records ([`VesselSpec`]) grouped by role in a
//!   [`VesselFleet`]
//! - **Cables** are ordered catalogs of gauges per voltage ([`CableCatalogs`])
//!
//! ## Quick Start
//!
//! ```rust
//! use wobos_core::*;
//!
//! let mut config = PlantConfig::default();
//! config.turbine.rating_mw = 8.0;
//! config.variants.substructure = SubstructureKind::Jacket;
//!
//! validate(&config).unwrap();
//! assert_eq!(config.fleet().turbine_install.id, 1);
//! ```

pub mod cable;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod validate;
pub mod variants;
pub mod vessel;

pub use cable::{
    ArrayCableSelection, ArrayCableSpec, ArrayVoltageOption, CableCatalogs, ExportCableSelection,
    ExportCableSpec, ExportVoltageOption,
};
pub use config::{
    DevelopmentConfig, ElectricalConfig, FinancialConfig, InstallationConfig, InstallationCosts,
    PermitCosts, PlantConfig, PortConfig, SiteConfig, SubstructureConfig, SubstructureRates,
    TurbineConfig, VariantConfig,
};
pub use diagnostics::{Category, DiagnosticIssue, Diagnostics};
pub use error::{WobosError, WobosResult};
pub use validate::{transfer_capacity_mw, validate};
pub use variants::{AnchorKind, InstallStrategy, SubstructureKind, TowerAssembly, TurbineAssembly};
pub use vessel::{VesselFleet, VesselSpec};
