//! Substructure and foundation model.
//!
//! Every variant's component set is sized for every run (the offshore
//! substation of a floating plant reuses the semisubmersible components), but
//! only the configured variant contributes to the plant totals:
//!
//! ```text
//! ┌──────────────────┬─────────────────────────────────────────┬──────────┐
//! │ variant          │ unit mass                               │ mooring  │
//! ├──────────────────┼─────────────────────────────────────────┼──────────┤
//! │ monopile         │ pile + transition piece                 │    no    │
//! │ jacket           │ lattice + transition piece + piles      │    no    │
//! │ spar             │ stiffened + tapered column + ballast    │   yes    │
//! │ semisubmersible  │ stiffened column + truss + heave plate  │   yes    │
//! └──────────────────┴─────────────────────────────────────────┴──────────┘
//!   + secondary steel for every variant
//! ```
//!
//! Plant cost = (components + mooring + secondary steel) × number of turbines.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wobos_core::{AnchorKind, Category, Diagnostics, PlantConfig, SubstructureKind};

use crate::dimensions::TurbineDimensions;

/// Standard mooring line diameters (m), smallest first.
pub const MOORING_DIAMETERS: [f64; 3] = [0.09, 0.12, 0.15];

/// Rating at which the mooring diameter regression peaks.
const MOORING_REGRESSION_VERTEX_MW: f64 = 16.5;

/// Per-unit masses and costs of one variant's primary components.
pub trait ComponentSet {
    /// Primary steel mass of one unit (t), excluding secondary steel.
    fn mass_t(&self) -> f64;
    /// Procurement cost of one unit, excluding secondary steel and mooring.
    fn cost(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonopileComponents {
    pub length_m: f64,
    pub diameter_m: f64,
    pub pile_mass_t: f64,
    pub pile_cost: f64,
    pub transition_mass_t: f64,
    pub transition_cost: f64,
}

impl ComponentSet for MonopileComponents {
    fn mass_t(&self) -> f64 {
        self.pile_mass_t + self.transition_mass_t
    }

    fn cost(&self) -> f64 {
        self.pile_cost + self.transition_cost
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JacketComponents {
    pub lattice_mass_t: f64,
    pub lattice_cost: f64,
    pub transition_mass_t: f64,
    pub transition_cost: f64,
    /// Mass of all four piles.
    pub pile_mass_t: f64,
    pub pile_cost: f64,
}

impl ComponentSet for JacketComponents {
    fn mass_t(&self) -> f64 {
        self.lattice_mass_t + self.transition_mass_t + self.pile_mass_t
    }

    fn cost(&self) -> f64 {
        self.lattice_cost + self.transition_cost + self.pile_cost
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparComponents {
    pub stiffened_column_mass_t: f64,
    pub stiffened_column_cost: f64,
    pub tapered_column_mass_t: f64,
    pub tapered_column_cost: f64,
    pub ballast_mass_t: f64,
    pub ballast_cost: f64,
}

impl ComponentSet for SparComponents {
    fn mass_t(&self) -> f64 {
        self.tapered_column_mass_t + self.stiffened_column_mass_t + self.ballast_mass_t
    }

    fn cost(&self) -> f64 {
        self.stiffened_column_cost + self.tapered_column_cost + self.ballast_cost
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemisubComponents {
    pub stiffened_column_mass_t: f64,
    pub stiffened_column_cost: f64,
    pub truss_mass_t: f64,
    pub truss_cost: f64,
    pub heave_plate_mass_t: f64,
    pub heave_plate_cost: f64,
}

impl ComponentSet for SemisubComponents {
    fn mass_t(&self) -> f64 {
        self.stiffened_column_mass_t + self.heave_plate_mass_t + self.truss_mass_t
    }

    fn cost(&self) -> f64 {
        self.stiffened_column_cost + self.heave_plate_cost + self.truss_cost
    }
}

/// Mooring lines and anchors for one floating unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MooringSystem {
    pub diameter_m: f64,
    /// Total line length over all lines (m).
    pub line_length_m: f64,
    pub breaking_load_kn: f64,
    pub anchor_cost: f64,
    /// Line cost ($/m) for the selected diameter.
    pub line_cost_rate: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstructureOutputs {
    pub monopile: MonopileComponents,
    pub jacket: JacketComponents,
    pub spar: SparComponents,
    pub semisubmersible: SemisubComponents,
    /// Present for floating plants only.
    pub mooring: Option<MooringSystem>,
    pub secondary_steel_mass_t: f64,
    pub secondary_steel_cost: f64,
    /// Mass of one substructure of the configured variant (t).
    pub unit_mass_t: f64,
    /// Procurement cost of every substructure in the plant.
    pub total_cost: f64,
}

impl SubstructureOutputs {
    /// The component set of the configured variant.
    pub fn components(&self, kind: SubstructureKind) -> &dyn ComponentSet {
        match kind {
            SubstructureKind::Monopile => &self.monopile,
            SubstructureKind::Jacket => &self.jacket,
            SubstructureKind::Spar => &self.spar,
            SubstructureKind::Semisubmersible => &self.semisubmersible,
        }
    }

    pub fn mooring_cost(&self) -> f64 {
        self.mooring.as_ref().map_or(0.0, |m| m.total_cost)
    }
}

pub fn evaluate(
    config: &PlantConfig,
    dims: &TurbineDimensions,
    diag: &mut Diagnostics,
) -> SubstructureOutputs {
    let kind = config.variants.substructure;
    let rating = config.turbine.rating_mw;
    let depth = config.site.water_depth_m;

    let monopile = monopile(config, dims);
    let jacket = jacket(config);
    let spar = spar(config);
    let semisubmersible = semisubmersible(config);
    let mooring = kind.is_floating().then(|| mooring_system(config, diag));

    let secondary_steel_mass_t = secondary_steel_mass(kind, rating, depth);
    let secondary_steel_cost =
        secondary_steel_mass_t * config.substructure.rates.secondary_steel;

    let mut outputs = SubstructureOutputs {
        monopile,
        jacket,
        spar,
        semisubmersible,
        mooring,
        secondary_steel_mass_t,
        secondary_steel_cost,
        unit_mass_t: 0.0,
        total_cost: 0.0,
    };

    let set = outputs.components(kind);
    let unit_mass_t = set.mass_t() + secondary_steel_mass_t;
    let unit_cost = set.cost() + outputs.mooring_cost() + secondary_steel_cost;
    outputs.unit_mass_t = unit_mass_t;
    outputs.total_cost = unit_cost * config.n_turbines();

    debug!(
        substructure = %kind,
        unit_mass_t = outputs.unit_mass_t,
        total_cost = outputs.total_cost,
        "substructure sized"
    );
    outputs
}

fn monopile(config: &PlantConfig, dims: &TurbineDimensions) -> MonopileComponents {
    let sub = &config.substructure;
    let rating = config.turbine.rating_mw;
    let depth = config.site.water_depth_m;

    let pile_mass_t = ((rating * 1000.0).powf(1.5)
        + config.turbine.hub_height_m.powf(3.7) / 10.0
        + 2100.0 * depth.powf(2.25)
        + (dims.rna_mass_t * 1000.0).powf(1.13))
        / 10000.0;
    let transition_mass_t = (2.77 + 1.04 * rating.sqrt() + 0.00127 * depth.powf(1.5)).exp();

    MonopileComponents {
        length_m: sub
            .monopile_length_m
            .unwrap_or(depth + sub.monopile_embedment_m + 5.0),
        diameter_m: sub.monopile_diameter_m.unwrap_or(rating),
        pile_mass_t,
        pile_cost: pile_mass_t * sub.rates.monopile,
        transition_mass_t,
        transition_cost: transition_mass_t * sub.rates.monopile_transition,
    }
}

fn jacket(config: &PlantConfig) -> JacketComponents {
    let rates = &config.substructure.rates;
    let rating = config.turbine.rating_mw;
    let depth = config.site.water_depth_m;

    let lattice_mass_t = (3.71 + 0.00176 * rating.powf(2.5) + 0.645 * depth.ln()).exp();
    let transition_mass_t = 1.0 / (-0.0131 + 0.0381 / rating.ln() - 0.00000000227 * depth.powi(3));
    let pile_mass_t = 8.0 * lattice_mass_t.powf(0.5574);

    JacketComponents {
        lattice_mass_t,
        lattice_cost: lattice_mass_t * rates.jacket_lattice,
        transition_mass_t,
        transition_cost: transition_mass_t * rates.jacket_transition,
        pile_mass_t,
        pile_cost: pile_mass_t * rates.jacket_piles,
    }
}

fn spar(config: &PlantConfig) -> SparComponents {
    let rates = &config.substructure.rates;
    let rating = config.turbine.rating_mw;
    let depth = config.site.water_depth_m;

    let stiffened_column_mass_t = 535.93 + 17.664 * rating.powi(2) + 0.02328 * depth * depth.ln();
    let tapered_column_mass_t = 125.81 * rating.ln() + 58.712;
    let ballast_mass_t = -16.536 * rating.powi(2) + 1261.8 * rating - 1554.6;

    SparComponents {
        stiffened_column_mass_t,
        stiffened_column_cost: stiffened_column_mass_t * rates.spar_stiffened_column,
        tapered_column_mass_t,
        tapered_column_cost: tapered_column_mass_t * rates.spar_tapered_column,
        ballast_mass_t,
        ballast_cost: ballast_mass_t * rates.ballast,
    }
}

fn semisubmersible(config: &PlantConfig) -> SemisubComponents {
    let rates = &config.substructure.rates;
    let rating = config.turbine.rating_mw;

    let stiffened_column_mass_t = -0.9571 * rating.powi(2) + 40.89 * rating + 802.09;
    let truss_mass_t = 2.7894 * rating.powi(2) + 15.591 * rating + 266.03;
    let heave_plate_mass_t = -0.4397 * rating.powi(2) + 21.545 * rating + 177.42;

    SemisubComponents {
        stiffened_column_mass_t,
        stiffened_column_cost: stiffened_column_mass_t * rates.semi_stiffened_column,
        truss_mass_t,
        truss_cost: truss_mass_t * rates.semi_truss,
        heave_plate_mass_t,
        heave_plate_cost: heave_plate_mass_t * rates.semi_heave_plate,
    }
}

/// Secondary steel (boat landings, ladders, platforms) for one unit (t).
pub fn secondary_steel_mass(kind: SubstructureKind, rating: f64, depth: f64) -> f64 {
    match kind {
        SubstructureKind::Monopile | SubstructureKind::Jacket => {
            let base = if rating <= 4.0 { 35.0 } else { 40.0 };
            base + 0.8 * (18.0 + depth)
        }
        SubstructureKind::Spar => {
            (3.58 + 0.196 * rating.sqrt() * rating.ln() + 0.00001 * depth * depth.ln()).exp()
        }
        SubstructureKind::Semisubmersible => -0.153 * rating.powi(2) + 6.54 * rating + 128.34,
    }
}

/// Standard mooring diameter selected from turbine rating alone.
///
/// The regression is held at its vertex beyond 16.5 MW so the selection never
/// shrinks as rating grows.
pub fn auto_mooring_diameter(rating: f64) -> f64 {
    let r = rating.min(MOORING_REGRESSION_VERTEX_MW);
    let fit = -0.0004 * r.powi(2) + 0.0132 * r + 0.0536;
    if fit <= MOORING_DIAMETERS[0] {
        MOORING_DIAMETERS[0]
    } else if fit <= MOORING_DIAMETERS[1] {
        MOORING_DIAMETERS[1]
    } else {
        MOORING_DIAMETERS[2]
    }
}

/// Smallest standard diameter that is at least `requested`, capped at the largest.
pub fn snap_mooring_diameter(requested: f64) -> f64 {
    MOORING_DIAMETERS
        .iter()
        .copied()
        .find(|&d| requested <= d)
        .unwrap_or(MOORING_DIAMETERS[2])
}

/// Line cost ($/m) for a standard diameter.
pub fn mooring_line_cost_rate(diameter_m: f64) -> f64 {
    if diameter_m == MOORING_DIAMETERS[1] {
        721.0
    } else if diameter_m == MOORING_DIAMETERS[2] {
        1088.0
    } else {
        399.0
    }
}

fn mooring_system(config: &PlantConfig, diag: &mut Diagnostics) -> MooringSystem {
    let depth = config.site.water_depth_m;
    let lines = f64::from(config.variants.mooring_lines);
    let anchor = config.variants.anchor;

    let diameter_m = match config.substructure.mooring_diameter_m {
        Some(requested) => {
            let snapped = snap_mooring_diameter(requested);
            if snapped != requested {
                warn!(requested, snapped, "mooring diameter snapped to standard size");
                diag.record(
                    Category::Mooring,
                    "substructure.mooring_diameter_m",
                    format!("diameter {requested} m snapped to standard size {snapped} m"),
                );
            }
            snapped
        }
        None => auto_mooring_diameter(config.turbine.rating_mw),
    };

    let catenary = 0.0002 * depth.powi(2) + 1.264 * depth + 47.776;
    let line_length_m = match anchor {
        AnchorKind::DragEmbedment => {
            lines * (catenary + config.substructure.drag_anchor_fixed_length_m)
        }
        AnchorKind::SuctionPile => lines * catenary,
    };

    let breaking_load_kn = 419449.0 * diameter_m.powi(2) + 93415.0 * diameter_m - 3577.9;
    let anchor_cost = match anchor {
        AnchorKind::SuctionPile => lines * ((breaking_load_kn / 9.806 / 1250.0).sqrt() * 150000.0),
        AnchorKind::DragEmbedment => lines * (breaking_load_kn / 9.806 / 20.0 * 2000.0),
    };
    let line_cost_rate = mooring_line_cost_rate(diameter_m);

    MooringSystem {
        diameter_m,
        line_length_m,
        breaking_load_kn,
        anchor_cost,
        line_cost_rate,
        total_cost: anchor_cost + line_length_m * line_cost_rate,
    }
}
