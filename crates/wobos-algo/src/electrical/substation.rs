//! Offshore substation and onshore transmission costs.
//!
//! Transformers are sized in 250 MW blocks with a 15% margin and rounded to
//! the nearest 10 MVA. The topside mass follows the installed transformer
//! rating; fixed plants sit the topside on a piled jacket, floating plants on
//! a pair of semisubmersible hulls with their own moorings.

use serde::{Deserialize, Serialize};
use wobos_core::PlantConfig;

use crate::substructure::SubstructureOutputs;

/// Per-substation quantities and costs. Plant totals multiply by the
/// substation count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstationOutputs {
    pub n_substations: f64,
    pub n_transformers: f64,
    /// Rating of a single main power transformer (MVA).
    pub transformer_rating_mva: f64,
    pub transformer_cost: f64,
    pub topside_mass_t: f64,
    pub topside_cost: f64,
    pub substructure_mass_t: f64,
    pub pile_mass_t: f64,
    pub substructure_cost: f64,
    pub switchgear_cost: f64,
    pub shunt_reactor_cost: f64,
    pub ancillary_cost: f64,
    pub land_assembly_cost: f64,
    /// All offshore substations.
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnshoreOutputs {
    pub substation_cost: f64,
    pub misc_cost: f64,
    pub transmission_line_cost: f64,
    pub switchyard_cost: f64,
    pub total_cost: f64,
}

/// Round a rating to the nearest 10 MVA, halves rounding up.
fn round_rating(mva: f64) -> f64 {
    if (mva % 10.0).ceil() >= 5.0 {
        (mva / 10.0).ceil() * 10.0
    } else {
        (mva / 10.0).floor() * 10.0
    }
}

pub fn offshore(
    config: &PlantConfig,
    substructure: &SubstructureOutputs,
    n_substations: f64,
) -> SubstationOutputs {
    let e = &config.electrical;
    let capacity = config.plant_capacity_mw();
    let floating = config.is_floating();

    let n_transformers = (capacity / 250.0).ceil();
    let transformer_rating_mva = round_rating(capacity * 1.15 / n_transformers);
    let installed_mva = transformer_rating_mva * n_transformers;
    let transformer_cost = installed_mva * e.mpt_rate;

    let topside_mass_t = 3.85 * installed_mva + 285.0;
    let topside_cost = topside_mass_t * e.topside_fabrication_rate + e.topside_design_cost;

    let hull = &substructure.semisubmersible;
    let (substructure_mass_t, pile_mass_t, substructure_cost) = if floating {
        let mass = 2.0
            * (hull.stiffened_column_mass_t
                + hull.truss_mass_t
                + hull.heave_plate_mass_t
                + substructure.secondary_steel_mass_t);
        let cost = 2.0
            * (hull.truss_cost
                + hull.stiffened_column_cost
                + hull.heave_plate_cost
                + substructure.mooring_cost());
        (mass, 0.0, cost)
    } else {
        let mass = 0.4 * topside_mass_t;
        let piles = 8.0 * mass.powf(0.5574);
        let cost = mass * e.substation_jacket_rate + e.substation_pile_rate * piles;
        (mass, piles, cost)
    };

    let switchgear_cost = n_transformers * (e.hv_switchgear_cost + e.mv_switchgear_cost);
    let shunt_reactor_cost = installed_mva * e.shunt_reactor_rate * 0.5;
    let ancillary_cost = e.backup_generator_cost + e.workspace_cost + e.other_ancillary_cost;
    let land_assembly_cost =
        (switchgear_cost + shunt_reactor_cost + transformer_cost) * e.topside_assembly_factor;

    let total_cost = (topside_cost
        + switchgear_cost
        + shunt_reactor_cost
        + ancillary_cost
        + transformer_cost
        + land_assembly_cost
        + substructure_cost)
        * n_substations;

    SubstationOutputs {
        n_substations,
        n_transformers,
        transformer_rating_mva,
        transformer_cost,
        topside_mass_t,
        topside_cost,
        substructure_mass_t,
        pile_mass_t,
        substructure_cost,
        switchgear_cost,
        shunt_reactor_cost,
        ancillary_cost,
        land_assembly_cost,
        total_cost,
    }
}

pub fn onshore(config: &PlantConfig) -> OnshoreOutputs {
    let voltage = config.site.interconnect_voltage_kv;
    let distance = config.site.interconnect_distance_km;
    let capacity = config.plant_capacity_mw();

    let substation_cost = 11652.0 * (voltage + capacity) + 1_200_000.0;
    let misc_cost = 11795.0 * capacity.powf(0.3549) + 350_000.0;
    let transmission_line_cost = if distance == 0.0 {
        0.0
    } else {
        (1176.0 * voltage + 218_257.0) * distance.powf(-0.1063) * distance
    };
    let switchyard_cost = 18115.0 * voltage + 165_944.0;

    OnshoreOutputs {
        substation_cost,
        misc_cost,
        transmission_line_cost,
        switchyard_cost,
        total_cost: substation_cost + misc_cost + transmission_line_cost + switchyard_cost,
    }
}
