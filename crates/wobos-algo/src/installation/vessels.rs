//! Per-phase vessel ledgers and the pooled mobilization ledger.

use serde::{Deserialize, Serialize};
use wobos_core::{InstallStrategy, PlantConfig, SubstructureKind, VesselFleet, VesselSpec};

use super::durations::Schedule;

/// One vessel's charge within a phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselCharge {
    pub vessel_id: u32,
    pub name: String,
    /// Role the vessel plays in this phase.
    pub role: String,
    /// Days on hire (0 for mobilization entries).
    pub days: f64,
    pub cost: f64,
}

impl VesselCharge {
    fn hire(vessel: &VesselSpec, role: &str, days: f64) -> Self {
        Self {
            vessel_id: vessel.id,
            name: vessel.name.clone(),
            role: role.to_string(),
            days,
            cost: vessel.hire_cost(days),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub entries: Vec<VesselCharge>,
}

impl Ledger {
    fn hire(&mut self, vessel: &VesselSpec, role: &str, days: f64) {
        self.entries.push(VesselCharge::hire(vessel, role, days));
    }

    fn hire_all(&mut self, vessels: &[VesselSpec], role: &str, days: f64) {
        for (idx, vessel) in vessels.iter().enumerate() {
            self.hire(vessel, &format!("{role}[{idx}]"), days);
        }
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.cost).sum()
    }

    /// Sum of the entries whose role starts with `prefix`.
    pub fn role_total(&self, prefix: &str) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.role.starts_with(prefix))
            .map(|e| e.cost)
            .sum()
    }
}

fn uses_turbine_feeder(config: &PlantConfig) -> bool {
    config.variants.install_strategy == InstallStrategy::FeederBarge
        || config.variants.substructure == SubstructureKind::Spar
}

pub(crate) fn turbine_ledger(
    config: &PlantConfig,
    fleet: &VesselFleet,
    sched: &Schedule,
) -> Ledger {
    let days = sched.turbine_days;
    let mut ledger = Ledger::default();
    ledger.hire(&fleet.turbine_install, "turbine_install", days);
    if uses_turbine_feeder(config) {
        ledger.hire(&fleet.turbine_feeder, "turbine_feeder", days);
    }
    ledger.hire_all(&fleet.turbine_support, "turbine_support", days);
    ledger
}

pub(crate) fn substructure_ledger(
    config: &PlantConfig,
    fleet: &VesselFleet,
    sched: &Schedule,
) -> Ledger {
    let kind = config.variants.substructure;
    let sub_days = sched.substructure_days;
    let mut ledger = Ledger::default();

    let (install_days, support_days) = if kind == SubstructureKind::Spar {
        (sched.mooring_days, sub_days - sched.mooring_days)
    } else {
        (sub_days, sub_days)
    };
    ledger.hire(&fleet.substructure_install, "substructure_install", install_days);

    if uses_turbine_feeder(config) {
        ledger.hire(&fleet.substructure_feeder, "substructure_feeder", support_days);
    }

    if kind == SubstructureKind::Monopile {
        let scour_days = (config.installation.install_scour / 24.0) * config.n_turbines();
        ledger.hire(&fleet.scour_protection, "scour_protection", scour_days);
    }

    ledger.hire_all(&fleet.substructure_support, "substructure_support", support_days);
    ledger
}

pub(crate) fn electrical_ledger(
    config: &PlantConfig,
    fleet: &VesselFleet,
    sched: &Schedule,
) -> Ledger {
    let mut ledger = Ledger::default();
    ledger.hire(&fleet.array_cable, "array_cable", sched.array_cable_days);
    ledger.hire(&fleet.export_cable, "export_cable", sched.export_cable_days);

    if !config.is_floating() {
        ledger.hire(
            &fleet.substation_install,
            "substation_install",
            sched.substation_days,
        );
    }
    ledger.hire_all(&fleet.tugs, "tugs", sched.substation_days);

    let support_days = sched.array_cable_days + sched.export_cable_days + sched.substation_days;
    ledger.hire_all(&fleet.electrical_support, "electrical_support", support_days);
    ledger
}

fn indexed<'a>(vessels: &'a [VesselSpec], role: &str) -> Vec<(&'a VesselSpec, String)> {
    vessels
        .iter()
        .enumerate()
        .map(|(idx, v)| (v, format!("{role}[{idx}]")))
        .collect()
}

/// One mobilization per distinct vessel id, charged once per install season.
///
/// The primary vessels, the scour vessel, the substation vessel and the tugs
/// are always mobilized, whichever phases hire them. Feeder barges follow
/// the turbine strategy; support vessels come last. The first occurrence of
/// an id wins.
pub(crate) fn mobilization_ledger(config: &PlantConfig, fleet: &VesselFleet) -> Ledger {
    let mut pool: Vec<(&VesselSpec, String)> = vec![
        (&fleet.turbine_install, "turbine_install".to_string()),
        (&fleet.substructure_install, "substructure_install".to_string()),
        (&fleet.array_cable, "array_cable".to_string()),
        (&fleet.export_cable, "export_cable".to_string()),
        (&fleet.substation_install, "substation_install".to_string()),
        (&fleet.scour_protection, "scour_protection".to_string()),
    ];
    pool.extend(indexed(&fleet.tugs, "tugs"));
    if uses_turbine_feeder(config) {
        pool.push((&fleet.turbine_feeder, "turbine_feeder".to_string()));
        pool.push((&fleet.substructure_feeder, "substructure_feeder".to_string()));
    }
    pool.extend(indexed(&fleet.turbine_support, "turbine_support"));
    pool.extend(indexed(&fleet.substructure_support, "substructure_support"));
    pool.extend(indexed(&fleet.electrical_support, "electrical_support"));

    let seasons = f64::from(config.variants.install_seasons);
    let mut seen = Vec::new();
    let mut ledger = Ledger::default();
    for (vessel, role) in pool {
        if seen.contains(&vessel.id) {
            continue;
        }
        seen.push(vessel.id);
        ledger.entries.push(VesselCharge {
            vessel_id: vessel.id,
            name: vessel.name.clone(),
            role,
            days: 0.0,
            cost: vessel.mobilization_cost() * seasons,
        });
    }
    ledger
}
