//! Cable catalog search through the full evaluation.

use wobos_algo::evaluate;
use wobos_core::{ArrayCableSpec, ArrayVoltageOption, PlantConfig};

const CHEAP: f64 = 1.0;
const DEAR: f64 = 10_000.0;

fn cable(size_mm2: f64, cost_per_m: f64) -> ArrayCableSpec {
    ArrayCableSpec {
        size_mm2,
        cost_per_m,
        mass_kg_per_m: 25.0,
        turbine_interface_cost: 8_000.0,
        substation_interface_cost: 20_000.0,
        current_rating_a: 500.0,
    }
}

fn optimized_plant(array: Vec<ArrayVoltageOption>) -> PlantConfig {
    let mut config = PlantConfig::default();
    config.variants.optimize_cables = true;
    config.catalogs.array = array;
    config
}

/// Every ordering of `items` that keeps `first` ahead of `second`.
fn orderings(items: &[ArrayCableSpec], first: f64, second: f64) -> Vec<Vec<ArrayCableSpec>> {
    fn permute(rest: &mut Vec<ArrayCableSpec>, k: usize, out: &mut Vec<Vec<ArrayCableSpec>>) {
        if k == rest.len() {
            out.push(rest.clone());
            return;
        }
        for i in k..rest.len() {
            rest.swap(k, i);
            permute(rest, k + 1, out);
            rest.swap(k, i);
        }
    }

    let mut all = Vec::new();
    permute(&mut items.to_vec(), 0, &mut all);
    all.retain(|order| {
        let pos = |size| order.iter().position(|c| c.size_mm2 == size).unwrap();
        pos(first) < pos(second)
    });
    all
}

#[test]
fn dominant_pair_wins_in_any_catalog_order() {
    let cables = [
        cable(95.0, DEAR),
        cable(150.0, CHEAP),
        cable(240.0, DEAR),
        cable(400.0, CHEAP),
    ];
    let orders = orderings(&cables, 150.0, 400.0);
    assert_eq!(orders.len(), 12);

    for order in orders {
        let config = optimized_plant(vec![ArrayVoltageOption {
            voltage_kv: 33.0,
            cables: order.clone(),
        }]);
        let result = evaluate(&config).unwrap();
        let selection = &result.electrical.array.selection;
        let sizes: Vec<f64> = order.iter().map(|c| c.size_mm2).collect();
        assert_eq!(selection.cable1.size_mm2, 150.0, "order {sizes:?}");
        assert_eq!(selection.cable2.size_mm2, 400.0, "order {sizes:?}");
    }
}

#[test]
fn dominant_pair_wins_regardless_of_voltage_order() {
    let cheap = ArrayVoltageOption {
        voltage_kv: 66.0,
        cables: vec![cable(150.0, CHEAP), cable(400.0, CHEAP)],
    };
    let dear = ArrayVoltageOption {
        voltage_kv: 33.0,
        cables: vec![cable(150.0, DEAR), cable(400.0, DEAR)],
    };

    for (array, expected_index) in [
        (vec![cheap.clone(), dear.clone()], 0),
        (vec![dear, cheap], 1),
    ] {
        let result = evaluate(&optimized_plant(array)).unwrap();
        let elec = &result.electrical;
        assert_eq!(elec.array.selection.voltage_kv, 66.0);
        assert_eq!(elec.array_index.unwrap().voltage, expected_index);
    }
}

#[test]
fn single_pair_catalog_is_deterministic() {
    let config = optimized_plant(vec![ArrayVoltageOption {
        voltage_kv: 33.0,
        cables: vec![cable(95.0, 185.889), cable(120.0, 202.788)],
    }]);

    let first = evaluate(&config).unwrap();
    let second = evaluate(&config).unwrap();
    assert_eq!(first, second);

    let index = first.electrical.array_index.unwrap();
    assert_eq!((index.voltage, index.cable1, index.cable2), (0, 0, 1));
    assert_eq!(first.electrical.array.selection.cable1.size_mm2, 95.0);
}

#[test]
fn fixed_selection_reports_no_search_index() {
    let result = evaluate(&PlantConfig::default()).unwrap();
    assert!(result.electrical.array_index.is_none());
    assert!(result.electrical.export_index.is_none());
}
