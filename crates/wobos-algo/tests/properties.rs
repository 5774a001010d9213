//! Structural properties that hold for any valid plant.

use wobos_algo::evaluate;
use wobos_algo::substructure::{auto_mooring_diameter, MOORING_DIAMETERS};
use wobos_core::{Category, PlantConfig, SubstructureKind};

fn plant(kind: SubstructureKind) -> PlantConfig {
    let mut config = PlantConfig::default();
    config.variants.substructure = kind;
    if kind.is_floating() {
        config.site.water_depth_m = 250.0;
    }
    config
}

#[test]
fn evaluation_is_deterministic() {
    for kind in SubstructureKind::ALL {
        let config = plant(kind);
        let first = evaluate(&config).unwrap();
        let second = evaluate(&config).unwrap();
        assert_eq!(first, second, "{kind}");
    }
}

#[test]
fn every_variant_produces_finite_positive_totals() {
    for kind in SubstructureKind::ALL {
        let result = evaluate(&plant(kind)).unwrap();
        for (name, value) in result.breakdown() {
            assert!(value.is_finite(), "{kind} {name} = {value}");
        }
        assert!(result.total_bos_cost() > 0.0, "{kind}");
        assert!(result.installation.schedule.total_days > 0.0, "{kind}");
        assert_eq!(result.substructure.mooring.is_some(), kind.is_floating());
    }
}

#[test]
fn empty_deck_is_clamped_to_one_unit_per_trip() {
    let mut config = PlantConfig::default();
    let mut fleet = config.fleet();
    fleet.turbine_install.deck_area_m2 = 0.0;
    fleet.substructure_install.deck_area_m2 = 0.0;
    config.vessels = Some(fleet);

    let result = evaluate(&config).unwrap();
    let sched = &result.installation.schedule;
    assert_eq!(sched.turbines_per_trip_raw, 0.0);
    assert_eq!(sched.turbines_per_trip, 1.0);
    assert_eq!(sched.substructures_per_trip, 1.0);
    assert!(sched.total_days.is_finite());
    assert!(result.total_bos_cost().is_finite());
    let clamped: Vec<&str> = result
        .diagnostics
        .issues_by_category(Category::Clamp)
        .map(|issue| issue.entity.as_str())
        .collect();
    assert!(clamped.contains(&"turbines_per_trip"));
    assert!(clamped.contains(&"substructures_per_trip"));
}

#[test]
fn mooring_diameter_never_shrinks_with_rating() {
    let mut previous = 0.0;
    for step in 1..=100 {
        let rating = f64::from(step) * 0.25;
        let diameter = auto_mooring_diameter(rating);
        assert!(MOORING_DIAMETERS.contains(&diameter));
        assert!(diameter >= previous, "{rating} MW: {diameter} < {previous}");
        previous = diameter;
    }
}

#[test]
fn decommissioning_falls_as_discount_rate_rises() {
    let costs: Vec<f64> = [0.0, 0.03, 0.08, 0.15]
        .iter()
        .map(|&rate| {
            let mut config = PlantConfig::default();
            config.financial.decommissioning_discount_rate = rate;
            evaluate(&config).unwrap().development.decommissioning_cost
        })
        .collect();
    assert!(costs[0] > 0.0);
    for pair in costs.windows(2) {
        assert!(pair[1] < pair[0], "{costs:?}");
    }
}

#[test]
fn more_turbines_cost_more() {
    let mut small = PlantConfig::default();
    small.site.n_turbines = 50;
    let mut large = small.clone();
    large.site.n_turbines = 200;

    let small = evaluate(&small).unwrap();
    let large = evaluate(&large).unwrap();
    assert!(large.total_bos_cost() > small.total_bos_cost());
    assert!(large.substructure.total_cost > small.substructure.total_cost);
}
