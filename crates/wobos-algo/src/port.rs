//! Port and staging costs.
//!
//! Port costs cover vessel entrance fees, docking and wharf handling; staging
//! covers laydown areas for turbine and substructure components and the
//! crawler cranes used to load them.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wobos_core::{InstallStrategy, PlantConfig, SubstructureKind, VesselFleet};

use crate::dimensions::TurbineDimensions;
use crate::electrical::ElectricalOutputs;
use crate::installation::Schedule;
use crate::substructure::SubstructureOutputs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortOutputs {
    pub entrance_exit_cost: f64,
    pub docking_cost: f64,
    pub wharf_cost: f64,
    pub turbine_laydown_area_m2: f64,
    pub turbine_laydown_cost: f64,
    pub substructure_laydown_area_m2: f64,
    pub substructure_laydown_cost: f64,
    pub cranes_600t: u32,
    pub cranes_1000t: u32,
    pub crane_cost: f64,
    pub port_cost: f64,
    pub staging_cost: f64,
    pub total_cost: f64,
}

/// Crane counts, filling unset (zero) counts with the defaults for the
/// substructure: spars need three 600 t cranes, everything else one, and one
/// 1000 t crane in all cases.
pub fn crane_counts(config: &PlantConfig) -> (u32, u32) {
    let port = &config.port;
    let n600 = match (port.cranes_600t, config.variants.substructure) {
        (0, SubstructureKind::Spar) => 3,
        (0, _) => 1,
        (n, _) => n,
    };
    let n1000 = if port.cranes_1000t == 0 {
        1
    } else {
        port.cranes_1000t
    };
    (n600, n1000)
}

pub fn evaluate(
    config: &PlantConfig,
    dims: &TurbineDimensions,
    sub: &SubstructureOutputs,
    elec: &ElectricalOutputs,
    sched: &Schedule,
    fleet: &VesselFleet,
) -> PortOutputs {
    let port = &config.port;
    let n = config.n_turbines();
    let kind = config.variants.substructure;
    let floating = kind.is_floating();
    let feeder = config.variants.install_strategy == InstallStrategy::FeederBarge;
    let subs = &elec.substation;

    let turbine_trips = (n / sched.turbines_per_trip).ceil();
    let substructure_trips = (n / sched.substructures_per_trip).ceil();
    let entrance_exit_cost = match kind {
        SubstructureKind::Semisubmersible => {
            (n * fleet.turbine_install.footprint_m2() + 1.0) * port.entrance_exit_rate
        }
        SubstructureKind::Spar => {
            (turbine_trips
                * (fleet.turbine_install.footprint_m2() + fleet.turbine_feeder.footprint_m2())
                + 1.0)
                * port.entrance_exit_rate
        }
        SubstructureKind::Monopile | SubstructureKind::Jacket => {
            let (turbine_carrier, substructure_carrier) = if feeder {
                (&fleet.turbine_feeder, &fleet.substructure_feeder)
            } else {
                (&fleet.turbine_install, &fleet.substructure_install)
            };
            (turbine_trips * turbine_carrier.footprint_m2()
                + substructure_trips * substructure_carrier.footprint_m2()
                + fleet.substation_install.footprint_m2())
                * port.entrance_exit_rate
        }
    };

    let docking_cost = if floating {
        (sched.mooring_days + sched.float_prep_days + sched.turbine_days + sched.substation_days)
            * port.dock_rate
    } else {
        (sched.turbine_days + sched.substructure_days + sched.substation_days) * port.dock_rate
    };

    let turbine_mass = dims.rna_mass_t + dims.tower_mass_t;
    let wharf_cost = if floating {
        (turbine_mass * n + subs.topside_mass_t) * port.wharf_rate
    } else {
        ((turbine_mass + sub.unit_mass_t) * n
            + subs.topside_mass_t
            + subs.substructure_mass_t
            + subs.pile_mass_t)
            * port.wharf_rate
    };

    let substructure_laydown_area_m2 = if feeder {
        (sched.substructure_deck_area_m2
            * sched.substructures_per_trip
            * f64::from(fleet.substructure_feeder.quantity))
            * 2.0
    } else if !floating {
        (sched.substructure_deck_area_m2 * sched.substructures_per_trip) * 2.0
    } else {
        0.0
    };
    let substructure_laydown_cost =
        sched.substructure_days * port.laydown_rate * substructure_laydown_area_m2;

    let turbine_laydown_area_m2 = if feeder {
        sched.turbine_deck_area_m2
            * sched.turbines_per_trip
            * f64::from(fleet.turbine_feeder.quantity)
            * 2.0
    } else {
        sched.turbine_deck_area_m2 * sched.turbines_per_trip * 2.0
    };
    let turbine_laydown_cost = sched.turbine_days * turbine_laydown_area_m2 * port.laydown_rate;

    let (cranes_600t, cranes_1000t) = crane_counts(config);
    let crane_day_rate = f64::from(cranes_600t) * port.crane_600t_day_rate
        + f64::from(cranes_1000t) * port.crane_1000t_day_rate;
    let crane_cost = if floating {
        crane_day_rate * (sched.turbine_days + sched.float_prep_days + sched.mooring_days)
            + (port.crane_1000t_day_rate
                * (subs.topside_mass_t / 1000.0).ceil()
                * (config.installation.place_topside / 24.0))
            + port.crane_mobilization
    } else {
        crane_day_rate * (sched.turbine_days + sched.substructure_days) + port.crane_mobilization
    };

    let port_cost = entrance_exit_cost + docking_cost + wharf_cost;
    let staging_cost = turbine_laydown_cost + substructure_laydown_cost + crane_cost;
    let total_cost = port_cost + staging_cost;

    debug!(port_cost, staging_cost, "port and staging priced");

    PortOutputs {
        entrance_exit_cost,
        docking_cost,
        wharf_cost,
        turbine_laydown_area_m2,
        turbine_laydown_cost,
        substructure_laydown_area_m2,
        substructure_laydown_cost,
        cranes_600t,
        cranes_1000t,
        crane_cost,
        port_cost,
        staging_cost,
        total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dimensions, electrical, installation, substructure};
    use wobos_core::Diagnostics;

    fn run(config: &PlantConfig) -> (PortOutputs, Schedule) {
        let mut diag = Diagnostics::new();
        let fleet = config.fleet();
        let dims = dimensions::evaluate(config);
        let sub = substructure::evaluate(config, &dims, &mut diag);
        let elec = electrical::evaluate(config, &sub, &fleet, &mut diag).unwrap();
        let inst = installation::evaluate(config, &dims, &sub, &elec, &fleet, &mut diag);
        let port = evaluate(config, &dims, &sub, &elec, &inst.schedule, &fleet);
        (port, inst.schedule)
    }

    #[test]
    fn test_crane_defaults() {
        let mut config = PlantConfig::default();
        assert_eq!(crane_counts(&config), (1, 1));
        config.variants.substructure = SubstructureKind::Spar;
        assert_eq!(crane_counts(&config), (3, 1));
        config.port.cranes_600t = 2;
        config.port.cranes_1000t = 4;
        assert_eq!(crane_counts(&config), (2, 4));
    }

    #[test]
    fn test_fixed_port_components() {
        let config = PlantConfig::default();
        let (port, sched) = run(&config);
        assert_eq!(
            port.docking_cost,
            (sched.turbine_days + sched.substructure_days + sched.substation_days) * 3000.0
        );
        assert!(port.substructure_laydown_area_m2 > 0.0);
        assert_eq!(port.port_cost, port.entrance_exit_cost + port.docking_cost + port.wharf_cost);
        assert_eq!(port.total_cost, port.port_cost + port.staging_cost);
    }

    #[test]
    fn test_floating_has_no_substructure_laydown() {
        let mut config = PlantConfig::default();
        config.variants.substructure = SubstructureKind::Semisubmersible;
        config.site.water_depth_m = 200.0;
        let (port, _) = run(&config);
        assert_eq!(port.substructure_laydown_area_m2, 0.0);
        assert_eq!(port.substructure_laydown_cost, 0.0);
        // one entrance per towed unit, plus one
        let footprint = config.fleet().turbine_install.footprint_m2();
        assert_eq!(port.entrance_exit_cost, (100.0 * footprint + 1.0) * 0.525);
    }

    #[test]
    fn test_feeder_laydown_scales_with_barges() {
        let mut config = PlantConfig::default();
        let (primary, primary_sched) = run(&config);
        config.variants.install_strategy = InstallStrategy::FeederBarge;
        let (feeder, feeder_sched) = run(&config);
        let per_trip_ratio = feeder_sched.turbines_per_trip / primary_sched.turbines_per_trip;
        let expected = primary.turbine_laydown_area_m2 * per_trip_ratio * 2.0;
        assert!((feeder.turbine_laydown_area_m2 - expected).abs() < 1e-6);
    }
}
