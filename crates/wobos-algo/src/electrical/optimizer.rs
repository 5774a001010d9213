//! Cable catalog search.
//!
//! Each candidate is priced with the same sizing functions used for the final
//! selection. The objective is procurement plus installation plus route
//! survey:
//!
//! ```text
//! export: cost + install_days · export vessel day rate + length · survey rate
//! array:  cost1 + cost2 + install_days · array vessel day rate
//!         + (length1 + length2) · survey rate
//! ```
//!
//! Candidates are visited in catalog order (voltage, then gauge; in array
//! pairs cable 1 is listed before cable 2) and the first minimum wins.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use wobos_core::{
    ArrayCableSelection, Category, Diagnostics, ExportCableSelection, PlantConfig, VesselSpec,
    WobosError, WobosResult,
};

use super::array::{self, ArraySizing};
use super::export::{self, ExportSizing};
use super::layout::CableLayout;

/// Catalog position of the winning candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateIndex {
    pub voltage: usize,
    pub cable1: usize,
    /// Cable 2 gauge for array searches; equal to `cable1` for export.
    pub cable2: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportChoice {
    pub index: CandidateIndex,
    pub objective: f64,
    pub candidates: usize,
    pub sizing: ExportSizing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayChoice {
    pub index: CandidateIndex,
    pub objective: f64,
    pub candidates: usize,
    pub skipped: usize,
    pub sizing: ArraySizing,
}

pub fn export_objective(config: &PlantConfig, sizing: &ExportSizing, vessel: &VesselSpec) -> f64 {
    sizing.install_days * vessel.day_rate
        + sizing.cost
        + sizing.length_m * config.installation.costs.cable_survey_rate
}

pub fn array_objective(config: &PlantConfig, sizing: &ArraySizing, vessel: &VesselSpec) -> f64 {
    sizing.cable1_cost
        + sizing.cable2_cost
        + sizing.install_days * vessel.day_rate
        + (sizing.cable1_length_m + sizing.cable2_length_m)
            * config.installation.costs.cable_survey_rate
}

/// Cheapest export cable in the catalog.
pub fn optimize_export(
    config: &PlantConfig,
    layout: &CableLayout,
    vessel: &VesselSpec,
) -> WobosResult<ExportChoice> {
    let mut candidates = 0;
    let best = config
        .catalogs
        .export
        .iter()
        .enumerate()
        .flat_map(|(v, option)| {
            option.cables.iter().enumerate().map(move |(g, cable)| {
                let selection = ExportCableSelection {
                    voltage_kv: option.voltage_kv,
                    cable: *cable,
                };
                (v, g, selection)
            })
        })
        .map(|(v, g, selection)| {
            candidates += 1;
            let sizing = export::size(config, layout, &selection, vessel);
            let objective = export_objective(config, &sizing, vessel);
            ExportChoice {
                index: CandidateIndex {
                    voltage: v,
                    cable1: g,
                    cable2: g,
                },
                objective,
                candidates: 0,
                sizing,
            }
        })
        .min_by(|a, b| a.objective.total_cmp(&b.objective));

    let mut choice = best.ok_or_else(|| {
        WobosError::validation("catalogs.export", "no export cable candidates to search")
    })?;
    choice.candidates = candidates;
    info!(
        cable = %choice.sizing.selection.label(),
        objective = choice.objective,
        candidates,
        "export cable selected"
    );
    Ok(choice)
}

/// Cheapest array cable pair in the catalog.
///
/// Pairs where either gauge cannot carry a single turbine are skipped and
/// recorded in `diag`.
pub fn optimize_array(
    config: &PlantConfig,
    layout: &CableLayout,
    n_substations: f64,
    vessel: &VesselSpec,
    diag: &mut Diagnostics,
) -> WobosResult<ArrayChoice> {
    let mut candidates = 0;
    let mut skipped = 0;
    let mut best: Option<ArrayChoice> = None;

    for (v, option) in config.catalogs.array.iter().enumerate() {
        for (i, cable1) in option.cables.iter().enumerate() {
            for (j, cable2) in option.cables.iter().enumerate().skip(i + 1) {
                candidates += 1;
                let selection = ArrayCableSelection {
                    voltage_kv: option.voltage_kv,
                    cable1: *cable1,
                    cable2: *cable2,
                };

                let cab1 =
                    array::turbines_per_cable(config, cable1.current_rating_a, option.voltage_kv);
                let cab2 =
                    array::turbines_per_cable(config, cable2.current_rating_a, option.voltage_kv);
                if cab1 < 1.0 || cab2 < 1.0 {
                    skipped += 1;
                    warn!(
                        cable = %selection.label(),
                        "array candidate cannot carry one turbine, skipped"
                    );
                    diag.record(
                        Category::Optimizer,
                        format!("catalogs.array[{v}]"),
                        format!(
                            "{} skipped: a cable carries less than one turbine",
                            selection.label()
                        ),
                    );
                    continue;
                }

                // Clamp warnings belong to the final pass only.
                let mut scratch = Diagnostics::new();
                let sizing =
                    array::size(config, layout, &selection, n_substations, vessel, &mut scratch);
                let objective = array_objective(config, &sizing, vessel);

                let better = best
                    .as_ref()
                    .map_or(true, |current| objective < current.objective);
                if better {
                    best = Some(ArrayChoice {
                        index: CandidateIndex {
                            voltage: v,
                            cable1: i,
                            cable2: j,
                        },
                        objective,
                        candidates: 0,
                        skipped: 0,
                        sizing,
                    });
                }
            }
        }
    }

    let mut choice = best.ok_or_else(|| {
        WobosError::validation(
            "catalogs.array",
            "no array cable pair can carry a single turbine",
        )
    })?;
    choice.candidates = candidates;
    choice.skipped = skipped;
    info!(
        cables = %choice.sizing.selection.label(),
        objective = choice.objective,
        candidates,
        skipped,
        "array cables selected"
    );
    Ok(choice)
}
