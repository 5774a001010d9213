//! Array cable topology, lengths, costs and installation time.
//!
//! Two gauges share the array. Cable 1 links turbines along a string until
//! the accumulated load reaches its capacity; cable 2 carries the rest of the
//! string back to a substation. Strings are sized by cable 2's capacity:
//!
//! ```text
//!   T──T──T──T──T══T══T══▶ substation
//!   └─ cable 1 ─┘ └ cable 2 ┘
//! ```
//!
//! [`size`] is used both for every optimizer candidate and for the final
//! selected pair, so the selection is priced exactly as it is reported.

use serde::{Deserialize, Serialize};
use tracing::warn;
use wobos_core::{
    transfer_capacity_mw, ArrayCableSelection, Category, Diagnostics, PlantConfig, VesselSpec,
};

use super::layout::CableLayout;

/// String and interface counts for one cable pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayTopology {
    pub full_strings: f64,
    /// Turbines on the partial string (0 when every string is full).
    pub partial_string_turbines: f64,
    pub turbines_per_cable1: f64,
    pub turbines_per_cable2: f64,
    pub interfaces_cable1: f64,
    pub interfaces_cable2: f64,
    pub substation_interfaces: f64,
}

impl ArrayTopology {
    pub fn total_interfaces(&self) -> f64 {
        self.interfaces_cable1 + self.interfaces_cable2 + self.substation_interfaces
    }

    /// Strings including the partial one.
    fn string_count(&self) -> f64 {
        if self.partial_string_turbines == 0.0 {
            self.full_strings
        } else {
            self.full_strings + 1.0
        }
    }

    fn cable2_spans(&self) -> (f64, f64) {
        let max1 = (self.turbines_per_cable2 - self.turbines_per_cable1 - 1.0).max(0.0);
        let max2 = (self.partial_string_turbines - self.turbines_per_cable1 - 1.0).max(0.0);
        (max1, max2)
    }
}

/// Array sizing for one cable pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArraySizing {
    pub selection: ArrayCableSelection,
    pub topology: ArrayTopology,
    pub cable1_length_m: f64,
    pub cable2_length_m: f64,
    pub cable1_cost: f64,
    pub cable2_cost: f64,
    /// Mass of one cable 1 section between turbines (t).
    pub cable1_section_mass_t: f64,
    pub cable2_section_mass_t: f64,
    /// Sections per vessel trip before clamping.
    pub cable1_sections_per_trip_raw: f64,
    pub cable2_sections_per_trip_raw: f64,
    pub cable1_sections_per_trip: f64,
    pub cable2_sections_per_trip: f64,
    pub install_days: f64,
}

impl ArraySizing {
    pub fn total_cost(&self) -> f64 {
        self.cable1_cost + self.cable2_cost
    }

    pub fn total_length_m(&self) -> f64 {
        self.cable1_length_m + self.cable2_length_m
    }
}

/// Whole turbines one cable can carry.
pub fn turbines_per_cable(config: &PlantConfig, current_a: f64, voltage_kv: f64) -> f64 {
    (transfer_capacity_mw(config, current_a, voltage_kv) / config.turbine.rating_mw).floor()
}

pub fn topology(config: &PlantConfig, selection: &ArrayCableSelection) -> ArrayTopology {
    let n = config.n_turbines();
    let cab1 = turbines_per_cable(config, selection.cable1.current_rating_a, selection.voltage_kv);
    let cab2 = turbines_per_cable(config, selection.cable2.current_rating_a, selection.voltage_kv);

    let full_strings = (n / cab2).floor();
    let partial = n % cab2;

    let interfaces_cable1 = if partial == 0.0 {
        (cab1 * full_strings) * 2.0
    } else {
        (cab1 * full_strings + (partial - 1.0).min(cab1)) * 2.0
    };

    let max1 = (cab2 - cab1).max(0.0);
    let max2 = (partial - cab1 - 1.0).max(0.0);
    let interfaces_cable2 = if partial == 0.0 {
        (max1 * full_strings + max2) * 2.0
    } else {
        (max1 * full_strings + max2) * 2.0 + 1.0
    };

    let substation_interfaces = if partial == 0.0 {
        full_strings
    } else {
        full_strings + 1.0
    };

    ArrayTopology {
        full_strings,
        partial_string_turbines: partial,
        turbines_per_cable1: cab1,
        turbines_per_cable2: cab2,
        interfaces_cable1,
        interfaces_cable2,
        substation_interfaces,
    }
}

fn cable1_length(config: &PlantConfig, layout: &CableLayout, topo: &ArrayTopology) -> f64 {
    layout.section_route_m
        * (topo.interfaces_cable1 / 2.0)
        * (1.0 + config.electrical.excess_cable_factor)
}

fn cable2_length(
    config: &PlantConfig,
    layout: &CableLayout,
    topo: &ArrayTopology,
    n_substations: f64,
) -> f64 {
    let (max1, max2) = topo.cable2_spans();
    let fs = topo.full_strings;
    let depth = config.site.water_depth_m;
    let rotor = config.turbine.rotor_diameter_m;
    let spacing_y = config.site.turbine_spacing_rd;
    let spacing_x = config.site.row_spacing_rd;
    let excess = config.electrical.excess_cable_factor;

    let string_factor = if n_substations > 0.0 {
        topo.string_count() / n_substations
    } else {
        topo.string_count()
    };

    if config.is_floating() {
        let route = layout.section_route_m;
        let row_step = 2.0 * layout.free_hanging_m + spacing_x * rotor - layout.catenary_offset(depth);
        ((route * max1 * fs + max2)
            + n_substations
                * (string_factor
                    * (route + (((string_factor - 1.0) * row_step).powi(2) + route.powi(2)).sqrt()))
                / 2.0)
            * (excess + 1.0)
    } else {
        (((spacing_y * rotor + depth * 2.0) * (max1 * fs + max2))
            + n_substations
                * ((string_factor
                    * ((rotor * spacing_y)
                        + ((rotor * spacing_x * (string_factor - 1.0)).powi(2)
                            + (rotor * spacing_y).powi(2))
                        .sqrt()))
                    / 2.0
                    + string_factor * depth))
            * (excess + 1.0)
    }
}

fn sections_per_trip(
    capacity_t: f64,
    section_mass_t: f64,
    entity: &str,
    diag: &mut Diagnostics,
) -> (f64, f64) {
    let raw = (capacity_t / section_mass_t).floor();
    if raw >= 1.0 {
        return (raw, raw);
    }
    warn!(
        entity,
        capacity_t, section_mass_t, "cable section exceeds vessel capacity, assuming one per trip"
    );
    diag.record(
        Category::Clamp,
        entity,
        format!(
            "{section_mass_t:.1} t section exceeds {capacity_t:.1} t vessel capacity, clamped to 1 per trip"
        ),
    );
    (raw, 1.0)
}

/// Size, price and schedule the array for one cable pair.
pub fn size(
    config: &PlantConfig,
    layout: &CableLayout,
    selection: &ArrayCableSelection,
    n_substations: f64,
    vessel: &VesselSpec,
    diag: &mut Diagnostics,
) -> ArraySizing {
    let topo = topology(config, selection);
    let cable1_length_m = cable1_length(config, layout, &topo);
    let cable2_length_m = cable2_length(config, layout, &topo, n_substations);

    let e = &config.electrical;
    let dynamic = if config.is_floating() {
        e.dynamic_cost_factor
    } else {
        1.0
    };
    let c1 = &selection.cable1;
    let c2 = &selection.cable2;
    let cable1_cost =
        dynamic * cable1_length_m * c1.cost_per_m + c1.turbine_interface_cost * topo.interfaces_cable1;
    let cable2_cost = dynamic * cable2_length_m * c2.cost_per_m
        + topo.interfaces_cable2 * c2.turbine_interface_cost
        + topo.substation_interfaces * c2.substation_interface_cost;

    let section_factor = layout.section_route_m * (1.0 + e.excess_cable_factor) / 1000.0;
    let cable1_section_mass_t = c1.mass_kg_per_m * section_factor;
    let cable2_section_mass_t = c2.mass_kg_per_m * section_factor;
    let (cable1_sections_per_trip_raw, cable1_sections_per_trip) = sections_per_trip(
        vessel.cable_capacity_t,
        cable1_section_mass_t,
        "cable1_sections_per_trip",
        diag,
    );
    let (cable2_sections_per_trip_raw, cable2_sections_per_trip) = sections_per_trip(
        vessel.cable_capacity_t,
        cable2_section_mass_t,
        "cable2_sections_per_trip",
        diag,
    );

    let mut sizing = ArraySizing {
        selection: *selection,
        topology: topo,
        cable1_length_m,
        cable2_length_m,
        cable1_cost,
        cable2_cost,
        cable1_section_mass_t,
        cable2_section_mass_t,
        cable1_sections_per_trip_raw,
        cable2_sections_per_trip_raw,
        cable1_sections_per_trip,
        cable2_sections_per_trip,
        install_days: 0.0,
    };
    sizing.install_days = install_days(config, &sizing, vessel);
    sizing
}

/// Days to lay, bury and terminate the array, including contingency.
fn install_days(config: &PlantConfig, sizing: &ArraySizing, vessel: &VesselSpec) -> f64 {
    let inst = &config.installation;
    let topo = &sizing.topology;
    let depth = config.site.water_depth_m;
    let fs = topo.full_strings;

    let max1 = (topo.turbines_per_cable2 - topo.turbines_per_cable1).max(0.0);
    let max2 = (topo.partial_string_turbines - topo.turbines_per_cable1 - 1.0).max(0.0);
    let burial = if config.electrical.burial_depth_m > 0.0 {
        1.0 / inst.burial_rate
    } else {
        0.0
    };
    let triangular = if topo.partial_string_turbines == 0.0 {
        (fs * (fs + 1.0)) / 2.0
    } else {
        ((fs + 1.0) * ((fs + 1.0) + 1.0)) / 2.0
    };
    let interfaces = topo.total_interfaces();

    let lay_hours = (sizing.cable1_length_m + sizing.cable2_length_m
        - (depth * interfaces) * (1.0 + config.electrical.excess_cable_factor))
        * (burial + 1.0 / inst.surface_lay_rate)
        + (inst.cable_pull_in + inst.cable_termination) * interfaces;
    let trips = ((topo.interfaces_cable1 * 0.5) / sizing.cable1_sections_per_trip).ceil()
        + ((max1 * fs + max2 + triangular) / sizing.cable2_sections_per_trip).ceil();
    let trip_hours = trips
        * (inst.cable_loadout
            + config.site.distance_to_port_km / (vessel.transit_speed_knots * 1.852));

    (1.0 + (lay_hours + trip_hours) * (1.0 / (1.0 - inst.electrical_contingency)) / 24.0).ceil()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::electrical::layout;
    use wobos_core::{CableCatalogs, VesselFleet};

    fn selection(voltage: f64, size1: f64, size2: f64) -> ArrayCableSelection {
        ArrayCableSelection::from_catalog(&CableCatalogs::reference(), voltage, size1, size2)
            .unwrap()
    }

    #[test]
    fn test_topology_with_partial_string() {
        let mut config = PlantConfig::default();
        config.turbine.rating_mw = 8.0;
        config.site.n_turbines = 600;
        // 66 kV / 300 mm² carries floor(51.8 / 8) = 6 turbines
        let topo = topology(&config, &selection(66.0, 300.0, 300.0));
        assert_eq!(topo.turbines_per_cable1, 6.0);
        assert_eq!(topo.turbines_per_cable2, 6.0);
        assert_eq!(topo.full_strings, 100.0);
        assert_eq!(topo.partial_string_turbines, 0.0);
        assert_eq!(topo.interfaces_cable1, 1200.0);
        assert_eq!(topo.interfaces_cable2, 0.0);
        assert_eq!(topo.substation_interfaces, 100.0);
    }

    #[test]
    fn test_topology_partial_string_adds_interfaces() {
        let mut config = PlantConfig::default();
        config.site.n_turbines = 7;
        // 33 kV: 95 mm² carries 2 turbines, 240 mm² carries 4
        let topo = topology(&config, &selection(33.0, 95.0, 240.0));
        assert_eq!(topo.turbines_per_cable1, 2.0);
        assert_eq!(topo.turbines_per_cable2, 4.0);
        assert_eq!(topo.full_strings, 1.0);
        assert_eq!(topo.partial_string_turbines, 3.0);
        assert_eq!(topo.interfaces_cable1, (2.0 + 2.0) * 2.0);
        assert_eq!(topo.interfaces_cable2, (2.0 * 1.0 + 0.0) * 2.0 + 1.0);
        assert_eq!(topo.substation_interfaces, 2.0);
    }

    #[test]
    fn test_sizing_is_finite_and_positive() {
        let config = PlantConfig::default();
        let layout = layout::evaluate(&config);
        let fleet = VesselFleet::default();
        let mut diag = Diagnostics::new();
        let sizing = size(
            &config,
            &layout,
            &config.electrical.array_cables,
            1.0,
            &fleet.array_cable,
            &mut diag,
        );
        assert!(sizing.cable1_length_m > 0.0);
        assert!(sizing.cable2_length_m > 0.0);
        assert!(sizing.install_days.is_finite() && sizing.install_days >= 1.0);
        assert!(!diag.has_issues());
    }

    #[test]
    fn test_undersized_carousel_is_clamped() {
        let config = PlantConfig::default();
        let layout = layout::evaluate(&config);
        let mut vessel = VesselFleet::default().array_cable;
        vessel.cable_capacity_t = 1.0;
        let mut diag = Diagnostics::new();
        let sizing = size(
            &config,
            &layout,
            &config.electrical.array_cables,
            1.0,
            &vessel,
            &mut diag,
        );
        assert_eq!(sizing.cable1_sections_per_trip_raw, 0.0);
        assert_eq!(sizing.cable1_sections_per_trip, 1.0);
        assert!(sizing.install_days.is_finite());
        assert_eq!(diag.count(Category::Clamp), 2);
    }
}
