//! Export cable count, length, cost and installation time.

use serde::{Deserialize, Serialize};
use wobos_core::{transfer_capacity_mw, ExportCableSelection, PlantConfig, VesselSpec};

use super::layout::CableLayout;

/// Length of dynamic cable at the floating substation end, beyond the
/// free-hanging catenary (m).
const DYNAMIC_TAIL_M: f64 = 500.0;

/// Export sizing for one cable choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSizing {
    pub selection: ExportCableSelection,
    pub n_cables: f64,
    pub length_m: f64,
    pub cost: f64,
    /// Mass of one full cable run (t).
    pub section_mass_t: f64,
    pub sections_per_trip: f64,
    pub install_days: f64,
}

/// Cables needed to carry the plant's full capacity.
pub fn cable_count(config: &PlantConfig, selection: &ExportCableSelection) -> f64 {
    let capacity = transfer_capacity_mw(
        config,
        selection.cable.current_rating_a,
        selection.voltage_kv,
    );
    (config.plant_capacity_mw() / capacity).ceil()
}

/// One offshore substation per pair of export cables.
pub fn substation_count(n_cables: f64) -> f64 {
    if n_cables >= 2.0 {
        (n_cables / 2.0).ceil()
    } else {
        1.0
    }
}

pub fn size(
    config: &PlantConfig,
    layout: &CableLayout,
    selection: &ExportCableSelection,
    vessel: &VesselSpec,
) -> ExportSizing {
    let n_cables = cable_count(config, selection);
    let shore_m = config.site.distance_to_shore_km * 1000.0;
    let floating = config.is_floating();

    let length_m = if floating {
        (shore_m + layout.free_hanging_m + DYNAMIC_TAIL_M) * n_cables * 1.1
    } else {
        (shore_m + config.site.water_depth_m) * n_cables * 1.1
    };

    let cable = &selection.cable;
    let cost = if floating {
        let dynamic_m = DYNAMIC_TAIL_M + layout.free_hanging_m;
        cable.cost_per_m
            * ((length_m - dynamic_m) + config.electrical.dynamic_cost_factor * dynamic_m)
            + cable.substation_interface_cost * n_cables
    } else {
        cable.cost_per_m * length_m + cable.substation_interface_cost * n_cables
    };

    let section_mass_t = cable.mass_kg_per_m * length_m / n_cables / 1000.0;
    let sections_per_trip = vessel.cable_capacity_t / section_mass_t;

    let inst = &config.installation;
    let burial = if config.electrical.burial_depth_m > 0.0 {
        1.0 / inst.burial_rate
    } else {
        0.0
    };
    let hours = (n_cables / sections_per_trip).ceil()
        * (config.site.distance_to_port_km / (vessel.transit_speed_knots * 1.852)
            + inst.export_cable_loadout)
        + (1.0 + config.electrical.excess_cable_factor)
            * shore_m
            * (1.0 / inst.surface_lay_rate + burial)
        + (inst.substation_pull_in + inst.shore_pull_in + inst.cable_termination) * n_cables;
    let install_days = ((hours / 24.0 + inst.landfall_construction_days).ceil()
        * (1.0 / (1.0 - inst.electrical_contingency)))
        .ceil();

    ExportSizing {
        selection: *selection,
        n_cables,
        length_m,
        cost,
        section_mass_t,
        sections_per_trip,
        install_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::electrical::layout;
    use wobos_core::{CableCatalogs, SubstructureKind, VesselFleet};

    #[test]
    fn test_cable_and_substation_counts() {
        let mut config = PlantConfig::default();
        config.turbine.rating_mw = 8.0;
        config.site.n_turbines = 600;
        let selection =
            ExportCableSelection::from_catalog(&CableCatalogs::reference(), 220.0, 1000.0)
                .unwrap();
        // 220 kV / 1000 mm² carries about 268.8 MW after derating
        assert_eq!(cable_count(&config, &selection), 18.0);
        assert_eq!(substation_count(18.0), 9.0);
        assert_eq!(substation_count(3.0), 2.0);
        assert_eq!(substation_count(1.0), 1.0);
    }

    #[test]
    fn test_fixed_length_and_cost() {
        let config = PlantConfig::default();
        let layout = layout::evaluate(&config);
        let fleet = VesselFleet::default();
        let sizing = size(
            &config,
            &layout,
            &config.electrical.export_cable,
            &fleet.export_cable,
        );
        // 500 MW over 220 kV / 300 mm² (about 172.7 MW each)
        assert_eq!(sizing.n_cables, 3.0);
        assert!((sizing.length_m - 90_030.0 * 3.0 * 1.1).abs() < 1e-6);
        let expected = 495.411 * sizing.length_m + 57_500.0 * 3.0;
        assert!((sizing.cost - expected).abs() < 1e-6);
        assert!(sizing.install_days >= 10.0);
    }

    #[test]
    fn test_floating_prices_dynamic_tail() {
        let mut config = PlantConfig::default();
        config.variants.substructure = SubstructureKind::Semisubmersible;
        config.site.water_depth_m = 200.0;
        let layout = layout::evaluate(&config);
        let fleet = config.fleet();
        let floating = size(
            &config,
            &layout,
            &config.electrical.export_cable,
            &fleet.export_cable,
        );

        config.electrical.dynamic_cost_factor = 1.0;
        let static_only = size(
            &config,
            &layout,
            &config.electrical.export_cable,
            &fleet.export_cable,
        );
        let tail = 500.0 + layout.free_hanging_m;
        assert!((floating.cost - static_only.cost - 495.411 * tail).abs() < 1e-6);
    }
}
