//! # Assembly and installation
//!
//! Schedules every installation phase and prices the vessels that carry it
//! out.
//!
//! ## Phases
//!
//! ```text
//!   turbine ──┐
//!   substructure (fixed: piling; floating: mooring + float prep) ──┼─▶ total days
//!   array cable ─ export cable ─ substation ──┘
//! ```
//!
//! Each phase keeps a [`Ledger`] of vessel charges (day rate × quantity ×
//! days on hire). Every vessel that appears in a phase ledger is mobilized
//! once per install season; vessels shared between phases (same id) are
//! mobilized once.
//!
//! Installation cost adds spreads, landfall works, route survey and fixed
//! civil and electrical works on top of the ledgers.

pub mod durations;
pub mod vessels;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wobos_core::{AnchorKind, Diagnostics, PlantConfig, SubstructureKind, VesselFleet};

pub use durations::Schedule;
pub use vessels::{Ledger, VesselCharge};

use crate::dimensions::TurbineDimensions;
use crate::electrical::ElectricalOutputs;
use crate::substructure::SubstructureOutputs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallationOutputs {
    pub schedule: Schedule,
    pub turbine_ledger: Ledger,
    pub substructure_ledger: Ledger,
    pub electrical_ledger: Ledger,
    pub mobilization_ledger: Ledger,
    pub turbine_install_cost: f64,
    pub substructure_install_cost: f64,
    pub electrical_install_cost: f64,
    pub array_cable_install_cost: f64,
    pub export_cable_install_cost: f64,
    /// Substation vessel plus tugs.
    pub substation_install_cost: f64,
    pub mobilization_cost: f64,
    pub cable_survey_cost: f64,
    /// Horizontal drilling, support spread and winches at landfall.
    pub landfall_cost: f64,
    /// Pile, grout and sea-fastening spreads, racks and scour material.
    pub spread_cost: f64,
    pub total_cost: f64,
}

pub fn evaluate(
    config: &PlantConfig,
    dims: &TurbineDimensions,
    sub: &SubstructureOutputs,
    elec: &ElectricalOutputs,
    fleet: &VesselFleet,
    diag: &mut Diagnostics,
) -> InstallationOutputs {
    let schedule = durations::schedule(config, dims, sub, elec, fleet, diag);

    let turbine_ledger = vessels::turbine_ledger(config, fleet, &schedule);
    let substructure_ledger = vessels::substructure_ledger(config, fleet, &schedule);
    let electrical_ledger = vessels::electrical_ledger(config, fleet, &schedule);
    let mobilization_ledger = vessels::mobilization_ledger(config, fleet);

    let costs = &config.installation.costs;
    let cable_survey_cost = (elec.export.length_m
        + elec.array.cable1_length_m
        + elec.array.cable2_length_m)
        * costs.cable_survey_rate;
    let landfall_cost = costs.cable_drill_distance_m * costs.cable_drill_rate
        + (costs.mpv_rental_day_rate + costs.dive_team_day_rate + costs.winch_day_rate)
            * config.installation.landfall_construction_days;
    let spread_cost = spread_cost(config, &schedule);

    let turbine_install_cost = turbine_ledger.total();
    let substructure_install_cost = substructure_ledger.total();
    let electrical_install_cost = electrical_ledger.total();
    let mobilization_cost = mobilization_ledger.total();

    let total_cost = turbine_install_cost
        + substructure_install_cost
        + electrical_install_cost
        + mobilization_cost
        + cable_survey_cost
        + landfall_cost
        + costs.civil_works
        + costs.electrical_works
        + spread_cost;

    debug!(
        total_days = schedule.total_days,
        mobilized = mobilization_ledger.entries.len(),
        total_cost,
        "installation scheduled"
    );

    InstallationOutputs {
        array_cable_install_cost: electrical_ledger.role_total("array_cable"),
        export_cable_install_cost: electrical_ledger.role_total("export_cable"),
        substation_install_cost: electrical_ledger.role_total("substation_install")
            + electrical_ledger.role_total("tugs"),
        schedule,
        turbine_ledger,
        substructure_ledger,
        electrical_ledger,
        mobilization_ledger,
        turbine_install_cost,
        substructure_install_cost,
        electrical_install_cost,
        mobilization_cost,
        cable_survey_cost,
        landfall_cost,
        spread_cost,
        total_cost,
    }
}

fn spread_cost(config: &PlantConfig, sched: &Schedule) -> f64 {
    let costs = &config.installation.costs;
    match config.variants.substructure {
        SubstructureKind::Monopile | SubstructureKind::Jacket => {
            let mut cost = sched.substructure_days
                * (costs.pile_spread_day_rate + costs.grout_spread_day_rate)
                + costs.grout_spread_mobilization
                + costs.pile_spread_mobilization
                + costs.compensated_racks;
            if config.variants.substructure == SubstructureKind::Monopile {
                cost += costs.scour_material * config.n_turbines();
            }
            cost
        }
        SubstructureKind::Spar | SubstructureKind::Semisubmersible => {
            let mut cost = 0.0;
            if config.variants.anchor == AnchorKind::SuctionPile {
                cost += costs.sea_spread_day_rate * sched.mooring_days
                    + costs.sea_spread_mobilization;
            }
            if config.variants.substructure == SubstructureKind::Spar {
                cost += costs.compensated_racks;
            }
            cost
        }
    }
}
