//! Deck loading and phase durations.
//!
//! All durations are whole days with the phase contingency applied. Transit
//! legs convert knots to km/h (×1.852) or m/h (×1852) depending on whether
//! the distance is in kilometres or metres.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::warn;
use wobos_core::{
    AnchorKind, Category, Diagnostics, InstallStrategy, PlantConfig, SubstructureKind,
    TowerAssembly, TurbineAssembly, VesselFleet,
};

use crate::dimensions::TurbineDimensions;
use crate::electrical::ElectricalOutputs;
use crate::substructure::SubstructureOutputs;

/// Installation schedule for the whole plant (days unless noted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub mooring_days: f64,
    pub float_prep_days: f64,
    /// Deck area occupied by one turbine's components (m²).
    pub turbine_deck_area_m2: f64,
    /// Turbines per trip before clamping to at least one.
    pub turbines_per_trip_raw: f64,
    pub turbines_per_trip: f64,
    pub substructure_deck_area_m2: f64,
    pub substructures_per_trip_raw: f64,
    pub substructures_per_trip: f64,
    pub turbine_days: f64,
    pub substructure_days: f64,
    pub array_cable_days: f64,
    pub export_cable_days: f64,
    pub substation_days: f64,
    pub total_days: f64,
}

pub fn schedule(
    config: &PlantConfig,
    dims: &TurbineDimensions,
    sub: &SubstructureOutputs,
    elec: &ElectricalOutputs,
    fleet: &VesselFleet,
    diag: &mut Diagnostics,
) -> Schedule {
    let floating = config.is_floating();

    let mooring_days = if floating {
        mooring_days(config, fleet)
    } else {
        0.0
    };
    let float_prep_days = if floating {
        float_prep_days(config, fleet)
    } else {
        0.0
    };

    let turbine_deck_area_m2 = turbine_deck_area(config, dims);
    let turbines_per_trip_raw = turbines_per_trip(config, dims, fleet, turbine_deck_area_m2);
    let turbines_per_trip = clamp_per_trip(turbines_per_trip_raw, "turbines_per_trip", diag);

    let substructure_deck_area_m2 = substructure_deck_area(config, sub);
    let substructures_per_trip_raw =
        substructures_per_trip(config, sub, fleet, substructure_deck_area_m2);
    let substructures_per_trip = if floating {
        substructures_per_trip_raw.max(1.0)
    } else {
        clamp_per_trip(substructures_per_trip_raw, "substructures_per_trip", diag)
    };

    let turbine_days = turbine_days(config, fleet, turbines_per_trip);
    let substructure_days = if floating {
        mooring_days + float_prep_days
    } else {
        fixed_substructure_days(config, fleet, substructures_per_trip)
    };
    let array_cable_days = elec.array.install_days;
    let export_cable_days = elec.export.install_days;
    let substation_days = substation_days(config, fleet);

    let total_days = if floating {
        mooring_days
            + float_prep_days
            + turbine_days
            + array_cable_days
            + export_cable_days
            + substation_days
    } else {
        turbine_days + substructure_days + array_cable_days + export_cable_days + substation_days
    };

    Schedule {
        mooring_days,
        float_prep_days,
        turbine_deck_area_m2,
        turbines_per_trip_raw,
        turbines_per_trip,
        substructure_deck_area_m2,
        substructures_per_trip_raw,
        substructures_per_trip,
        turbine_days,
        substructure_days,
        array_cable_days,
        export_cable_days,
        substation_days,
        total_days,
    }
}

fn clamp_per_trip(raw: f64, entity: &str, diag: &mut Diagnostics) -> f64 {
    if raw >= 1.0 {
        return raw;
    }
    warn!(entity, raw, "vessel cannot carry one unit, assuming one per trip");
    diag.record(Category::Clamp, entity, format!("{raw} units per trip clamped to 1"));
    1.0
}

fn mooring_days(config: &PlantConfig, fleet: &VesselFleet) -> f64 {
    let inst = &config.installation;
    let depth = config.site.water_depth_m;
    let lines = f64::from(config.variants.mooring_lines);
    let anchor_hours = match config.variants.anchor {
        AnchorKind::DragEmbedment => 5.0 + depth * inst.mooring_depth_factor,
        AnchorKind::SuctionPile => 11.0 + depth * inst.mooring_depth_factor,
    };
    let transit_hours = config.site.distance_to_port_km * 1000.0 * 2.0
        / (fleet.substructure_install.transit_speed_knots * 1852.0);

    ((((inst.mooring_loadout + inst.mooring_survey + anchor_hours) * lines
        + (depth * inst.mooring_depth_factor) * lines
        + transit_hours)
        * config.n_turbines()
        / 24.0)
        * (1.0 / (1.0 - inst.substructure_contingency)))
        .ceil()
}

fn float_prep_days(config: &PlantConfig, fleet: &VesselFleet) -> f64 {
    let inst = &config.installation;
    let n = config.n_turbines();
    if config.variants.substructure == SubstructureKind::Spar {
        ((((inst.prep_spar + inst.upend_spar)
            + config.site.port_to_assembly_km / fleet.substructure_install.tow_speed_knots)
            * n)
            / 24.0
            + inst.prep_assembly_area / 24.0)
            .ceil()
    } else {
        ((inst.prep_semi * n) / 24.0).ceil()
    }
}

/// Deck area taken by one turbine's blades, nacelle and tower sections.
pub fn turbine_deck_area(config: &PlantConfig, dims: &TurbineDimensions) -> f64 {
    let ic = config.installation.inspection_clearance_m;
    let blades = (dims.blade_length_m + ic) * (dims.chord_m + ic);
    let nacelle_length = dims.nacelle_length_m + ic;

    let rna = match config.variants.turbine_assembly {
        TurbineAssembly::RotorAssembled => {
            blades
                + (PI * (dims.hub_diameter_m / 2.0).powi(2)) / 2.0
                + nacelle_length * (dims.nacelle_width_m + ic)
        }
        TurbineAssembly::BunnyEars => {
            blades
                + nacelle_length
                    * (dims.nacelle_width_m / 2.0 + dims.blade_length_m / 2.0 * 1.73 + ic)
        }
        TurbineAssembly::Individual => blades + nacelle_length * (dims.nacelle_width_m + ic),
    };

    let tower = (dims.tower_diameter_m + ic).powi(2);
    match config.variants.tower_assembly {
        TowerAssembly::OnePiece => rna + tower,
        TowerAssembly::TwoPiece => rna + tower * 2.0,
    }
}

fn turbines_per_trip(
    config: &PlantConfig,
    dims: &TurbineDimensions,
    fleet: &VesselFleet,
    deck_area: f64,
) -> f64 {
    let carrier = match config.variants.substructure {
        SubstructureKind::Semisubmersible => return 1.0,
        SubstructureKind::Spar => &fleet.turbine_feeder,
        SubstructureKind::Monopile | SubstructureKind::Jacket => {
            match config.variants.install_strategy {
                InstallStrategy::PrimaryVessel => &fleet.turbine_install,
                InstallStrategy::FeederBarge => &fleet.turbine_feeder,
            }
        }
    };
    (carrier.deck_area_m2 / deck_area)
        .min(carrier.max_payload_t / (dims.rna_mass_t + dims.tower_mass_t))
        .floor()
}

/// Deck area taken by one fixed substructure; zero for floating units, which
/// are towed rather than carried.
pub fn substructure_deck_area(config: &PlantConfig, sub: &SubstructureOutputs) -> f64 {
    let ic = config.installation.inspection_clearance_m;
    match config.variants.substructure {
        SubstructureKind::Monopile => {
            let mp = &sub.monopile;
            (mp.length_m + ic) * (mp.diameter_m + ic) + (mp.diameter_m + ic + 1.0).powi(2)
        }
        SubstructureKind::Jacket => {
            let s = &config.substructure;
            (s.jacket_lattice_width_m + ic).powi(2)
                + (s.jacket_pile_diameter_m + ic) * (s.jacket_pile_length_m + ic)
        }
        SubstructureKind::Spar | SubstructureKind::Semisubmersible => 0.0,
    }
}

fn substructures_per_trip(
    config: &PlantConfig,
    sub: &SubstructureOutputs,
    fleet: &VesselFleet,
    deck_area: f64,
) -> f64 {
    if config.is_floating() {
        return 0.0;
    }
    let carrier = match config.variants.install_strategy {
        InstallStrategy::PrimaryVessel => &fleet.substructure_install,
        InstallStrategy::FeederBarge => &fleet.substructure_feeder,
    };
    (carrier.deck_area_m2 / deck_area)
        .min(carrier.max_payload_t / sub.unit_mass_t)
        .floor()
}

fn turbine_days(config: &PlantConfig, fleet: &VesselFleet, per_trip: f64) -> f64 {
    let inst = &config.installation;
    let site = &config.site;
    let n = config.n_turbines();
    let vessel = &fleet.turbine_install;
    let kind = config.variants.substructure;

    let mut sum = match config.variants.turbine_assembly {
        TurbineAssembly::RotorAssembled => {
            inst.position_turbine
                + inst.bolt_tower
                + inst.bolt_nacelle_rotor_assembled
                + inst.bolt_rotor
        }
        TurbineAssembly::BunnyEars => {
            inst.position_turbine
                + inst.bolt_tower
                + inst.bolt_nacelle_bunny_ears
                + inst.bolt_blade_bunny_ears
        }
        TurbineAssembly::Individual => {
            inst.position_turbine
                + inst.bolt_tower
                + inst.bolt_nacelle_individual
                + 3.0 * inst.bolt_blade_individual
        }
    };
    if config.variants.tower_assembly == TowerAssembly::TwoPiece {
        sum += inst.bolt_tower;
    }
    if kind.is_floating() {
        sum -= inst.position_turbine + inst.turbine_fasten;
    }

    let round_trips = if config.variants.install_strategy == InstallStrategy::PrimaryVessel {
        (n / per_trip).ceil()
            * (site.distance_to_port_km / ((vessel.transit_speed_knots * 1852.0) / 1000.0))
            * 2.0
            + inst.turbine_fasten * n
    } else {
        0.0
    };

    let tc = 1.0 / (1.0 - inst.turbine_contingency);
    let sc = 1.0 / (1.0 - inst.substructure_contingency);
    let tow = vessel.tow_speed_knots;

    match kind {
        SubstructureKind::Spar => (1.5
            * (((site.port_to_assembly_km / tow) * (n / per_trip)) / 24.0 + sum * tc * n / 24.0)
            + sc * (n / 24.0)
                * (site.assembly_to_site_km / tow
                    + (inst.spar_mooring_connect + inst.spar_mooring_check + inst.prep_tow)))
            .ceil(),
        SubstructureKind::Semisubmersible => (sum * tc * n / 24.0
            + ((n / 24.0)
                * sc
                * ((inst.prep_tow
                    + inst.semi_ballast
                    + inst.semi_mooring_check
                    + inst.semi_mooring_connect)
                    + site.distance_to_port_km / tow)))
            .ceil(),
        SubstructureKind::Monopile | SubstructureKind::Jacket => {
            let jacking =
                ((site.water_depth_m + 10.0) / (vessel.jacking_speed_m_per_min * 60.0)) * 2.0;
            let moves = (n - (n / per_trip).ceil()) * (site.turbine_spacing_rd
                * config.turbine.rotor_diameter_m)
                / (vessel.transit_speed_knots * 1852.0);
            ((((sum + jacking) * n + moves + round_trips) / 24.0) * tc).ceil()
        }
    }
}

fn fixed_substructure_days(
    config: &PlantConfig,
    fleet: &VesselFleet,
    per_trip: f64,
) -> f64 {
    let inst = &config.installation;
    let site = &config.site;
    let n = config.n_turbines();
    let vessel = &fleet.substructure_install;
    let trips = (n / per_trip).ceil();
    let transit = site.distance_to_port_km / (vessel.transit_speed_knots * 1.852);
    let jacking = (site.water_depth_m + 10.0) / (vessel.jacking_speed_m_per_min * 60.0);
    let primary = config.variants.install_strategy == InstallStrategy::PrimaryVessel;
    let jacket = config.variants.substructure == SubstructureKind::Jacket;

    let round_trips = match (primary, jacket) {
        (false, _) => 0.0,
        (true, true) => trips * transit * 2.0 * 2.0 + 2.0 * inst.jacket_fasten * n,
        (true, false) => trips * transit * 2.0 + inst.monopile_fasten * n,
    };

    let per_unit = if jacket {
        inst.position_jacket * 2.0
            + inst.place_template
            + inst.prep_gripper_jacket
            + inst.place_piles
            + inst.prep_hammer_jacket
            + inst.remove_hammer_jacket
            + inst.place_jacket
            + inst.level_jacket
            + ((config.substructure.jacket_pile_length_m - 5.0) / inst.hammer_rate) * 4.0
            + jacking * 2.0 * 2.0
    } else {
        inst.position_monopile
            + inst.prep_gripper_monopile
            + inst.place_monopile
            + inst.prep_hammer_monopile
            + inst.remove_hammer_monopile
            + inst.place_transition_piece
            + inst.grout_transition_piece
            + inst.transition_piece_cover
            + (config.substructure.monopile_embedment_m / inst.hammer_rate)
            + jacking * 2.0
    };

    let moves = (n - trips) * (config.turbine.rotor_diameter_m * site.row_spacing_rd)
        / (vessel.transit_speed_knots * 1852.0);
    (((1.0 / (1.0 - inst.substructure_contingency)) * ((per_unit * n + moves) + round_trips))
        / 24.0)
        .ceil()
}

fn substation_days(config: &PlantConfig, fleet: &VesselFleet) -> f64 {
    let inst = &config.installation;
    let vessel = &fleet.substation_install;
    let ec = 1.0 / (1.0 - inst.electrical_contingency);
    let base = inst.substation_loadout + inst.position_substation + inst.place_topside;
    let distance = config.site.distance_to_port_km;

    if config.is_floating() {
        (((base + inst.semi_mooring_connect + inst.semi_mooring_check)
            + distance / (vessel.tow_speed_knots * 1.852))
            / 24.0
            * ec)
            .ceil()
    } else {
        ((base + distance / (vessel.transit_speed_knots * 1.852)) / 24.0 * ec).ceil()
    }
}
