//! # Electrical infrastructure
//!
//! Sizes and prices the array cables, export cables, offshore substations and
//! onshore transmission.
//!
//! ```text
//!   ┌────────┐   ┌─────────────────┐   ┌────────────────┐   ┌──────────────┐
//!   │ layout │──▶│ export cable    │──▶│ array cables   │──▶│ substations  │
//!   │        │   │ (n substations) │   │ (per substation│   │ + onshore    │
//!   └────────┘   └─────────────────┘   │  string fan-in)│   └──────────────┘
//!                                      └────────────────┘
//! ```
//!
//! The export cable is settled first because the number of offshore
//! substations depends on the export cable count, and the array layout fans
//! strings into those substations. With `variants.optimize_cables` set, both
//! cable choices come from [`optimizer`]; otherwise the selections in
//! `electrical` are used as given.

pub mod array;
pub mod export;
pub mod layout;
pub mod optimizer;
pub mod substation;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wobos_core::{Diagnostics, PlantConfig, VesselFleet, WobosResult};

pub use array::{ArraySizing, ArrayTopology};
pub use export::ExportSizing;
pub use layout::CableLayout;
pub use optimizer::{ArrayChoice, CandidateIndex, ExportChoice};
pub use substation::{OnshoreOutputs, SubstationOutputs};

use crate::substructure::SubstructureOutputs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricalOutputs {
    pub layout: CableLayout,
    pub export: ExportSizing,
    pub array: ArraySizing,
    /// Catalog positions chosen by the optimizer, when it ran.
    pub export_index: Option<CandidateIndex>,
    pub array_index: Option<CandidateIndex>,
    pub substation: SubstationOutputs,
    pub onshore: OnshoreOutputs,
    pub subsea_cable_cost: f64,
    pub offshore_substation_cost: f64,
    pub onshore_transmission_cost: f64,
    pub total_cost: f64,
}

impl ElectricalOutputs {
    pub fn n_substations(&self) -> f64 {
        self.substation.n_substations
    }
}

pub fn evaluate(
    config: &PlantConfig,
    substructure: &SubstructureOutputs,
    fleet: &VesselFleet,
    diag: &mut Diagnostics,
) -> WobosResult<ElectricalOutputs> {
    let layout = layout::evaluate(config);
    let optimize = config.variants.optimize_cables;

    let (export, export_index) = if optimize {
        let choice = optimizer::optimize_export(config, &layout, &fleet.export_cable)?;
        (choice.sizing, Some(choice.index))
    } else {
        let sizing = export::size(
            config,
            &layout,
            &config.electrical.export_cable,
            &fleet.export_cable,
        );
        (sizing, None)
    };
    let n_substations = export::substation_count(export.n_cables);

    let (array, array_index) = if optimize {
        let choice =
            optimizer::optimize_array(config, &layout, n_substations, &fleet.array_cable, diag)?;
        // Re-size so the final pass records its own clamp warnings.
        let sizing = array::size(
            config,
            &layout,
            &choice.sizing.selection,
            n_substations,
            &fleet.array_cable,
            diag,
        );
        (sizing, Some(choice.index))
    } else {
        let sizing = array::size(
            config,
            &layout,
            &config.electrical.array_cables,
            n_substations,
            &fleet.array_cable,
            diag,
        );
        (sizing, None)
    };

    let substation = substation::offshore(config, substructure, n_substations);
    let onshore = substation::onshore(config);

    let subsea_cable_cost = array.cable1_cost + array.cable2_cost + export.cost;
    let offshore_substation_cost = substation.total_cost;
    let onshore_transmission_cost = onshore.total_cost;
    let total_cost = subsea_cable_cost + offshore_substation_cost + onshore_transmission_cost;

    debug!(
        export = %export.selection.label(),
        array = %array.selection.label(),
        n_substations,
        total_cost,
        "electrical sized"
    );

    Ok(ElectricalOutputs {
        layout,
        export,
        array,
        export_index,
        array_index,
        substation,
        onshore,
        subsea_cable_cost,
        offshore_substation_cost,
        onshore_transmission_cost,
        total_cost,
    })
}
