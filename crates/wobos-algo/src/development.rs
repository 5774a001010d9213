//! Engineering & management, development, decommissioning and commissioning.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wobos_core::PlantConfig;

use crate::installation::Schedule;

/// Hard-cost totals from the upstream stages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardCosts {
    pub substructure: f64,
    pub electrical: f64,
    pub installation: f64,
    pub port_and_staging: f64,
}

impl HardCosts {
    pub fn total(&self) -> f64 {
        self.substructure + self.port_and_staging + self.electrical + self.installation
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentOutputs {
    pub enm_cost: f64,
    pub feed_cost: f64,
    pub permits_cost: f64,
    pub met_tower_cost: f64,
    pub development_cost: f64,
    /// Present value of decommissioning at end of life.
    pub decommissioning_cost: f64,
    pub commissioning_cost: f64,
}

pub fn evaluate(config: &PlantConfig, hard: &HardCosts, sched: &Schedule) -> DevelopmentOutputs {
    let dev = &config.development;

    let enm_cost = dev.enm_factor * hard.total();
    let feed_cost = dev.pre_feed_study + dev.feed_study;
    let permits_cost = dev.permits.total();
    let met_tower_cost = config.n_turbines() * config.turbine.rating_mw * dev.met_tower_rate;
    let development_cost = met_tower_cost + permits_cost + feed_cost;

    let decommissioning_cost = decommissioning(config, sched, hard.installation);
    let commissioning_cost = config.financial.commissioning_rate
        * (hard.installation
            + development_cost
            + hard.electrical
            + enm_cost
            + hard.substructure
            + hard.port_and_staging
            + config.turbine_capital_cost());

    debug!(
        enm_cost,
        development_cost, decommissioning_cost, commissioning_cost, "development priced"
    );

    DevelopmentOutputs {
        enm_cost,
        feed_cost,
        permits_cost,
        met_tower_cost,
        development_cost,
        decommissioning_cost,
        commissioning_cost,
    }
}

/// Present value of removing the plant.
///
/// Removal is priced as a share of the installation cost, weighting each
/// phase by its share of the installation schedule. Floating plants tow
/// units away, so turbine and substructure removal weigh less than for
/// fixed plants.
pub fn decommissioning(config: &PlantConfig, sched: &Schedule, installation_cost: f64) -> f64 {
    let fin = &config.financial;
    let tot = sched.total_days;
    let share = if config.is_floating() {
        0.2 * (sched.mooring_days / tot)
            + 0.6 * (sched.turbine_days / tot)
            + 0.1 * (sched.array_cable_days / tot)
            + 0.1 * (sched.export_cable_days / tot)
            + 0.4 * (sched.substation_days / tot)
    } else {
        0.9 * (sched.substructure_days / tot)
            + 0.7 * (sched.turbine_days / tot)
            + 0.2 * (sched.array_cable_days / tot)
            + 0.2 * (sched.export_cable_days / tot)
            + 0.8 * (sched.substation_days / tot)
    };
    ((share * installation_cost) - fin.scrap_value)
        / (1.0 + fin.decommissioning_discount_rate).powf(fin.project_life_years)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> Schedule {
        Schedule {
            mooring_days: 40.0,
            float_prep_days: 10.0,
            turbine_deck_area_m2: 400.0,
            turbines_per_trip_raw: 6.0,
            turbines_per_trip: 6.0,
            substructure_deck_area_m2: 300.0,
            substructures_per_trip_raw: 4.0,
            substructures_per_trip: 4.0,
            turbine_days: 100.0,
            substructure_days: 80.0,
            array_cable_days: 50.0,
            export_cable_days: 30.0,
            substation_days: 5.0,
            total_days: 265.0,
        }
    }

    fn hard() -> HardCosts {
        HardCosts {
            substructure: 4.0e8,
            electrical: 3.0e8,
            installation: 2.0e8,
            port_and_staging: 2.0e7,
        }
    }

    #[test]
    fn test_development_components() {
        let config = PlantConfig::default();
        let dev = evaluate(&config, &hard(), &schedule());
        assert!((dev.enm_cost - 0.04 * 9.2e8).abs() < 1e-3);
        assert_eq!(dev.feed_cost, 15_000_000.0);
        assert_eq!(dev.permits_cost, 17_560_000.0);
        assert_eq!(dev.met_tower_cost, 100.0 * 5.0 * 11_518.0);
        assert_eq!(
            dev.development_cost,
            dev.met_tower_cost + dev.permits_cost + dev.feed_cost
        );
    }

    #[test]
    fn test_decommissioning_weights_fixed_phases() {
        let config = PlantConfig::default();
        let sched = schedule();
        let share = (0.9 * 80.0 + 0.7 * 100.0 + 0.2 * 50.0 + 0.2 * 30.0 + 0.8 * 5.0) / 265.0;
        let expected = share * 2.0e8 / 1.03f64.powf(20.0);
        let got = decommissioning(&config, &sched, 2.0e8);
        assert!((got - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_decommissioning_falls_with_discount_rate() {
        let mut config = PlantConfig::default();
        let sched = schedule();
        let mut previous = f64::INFINITY;
        for rate in [0.0, 0.02, 0.05, 0.1, 0.2] {
            config.financial.decommissioning_discount_rate = rate;
            let pv = decommissioning(&config, &sched, 2.0e8);
            assert!(pv < previous);
            previous = pv;
        }
    }

    #[test]
    fn test_scrap_value_offsets_removal() {
        let mut config = PlantConfig::default();
        let sched = schedule();
        let gross = decommissioning(&config, &sched, 2.0e8);
        config.financial.scrap_value = 1.0e6;
        let net = decommissioning(&config, &sched, 2.0e8);
        let pv_scrap = 1.0e6 / 1.03f64.powf(20.0);
        assert!((gross - net - pv_scrap).abs() < 1e-6);
    }
}
