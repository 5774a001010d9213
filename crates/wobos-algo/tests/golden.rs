//! End-to-end regression scenarios against recorded baselines.
//!
//! One plant per substructure branch. Baselines were recorded from a
//! reference run and are compared with a 1e-9 relative tolerance.

use wobos_algo::{evaluate, BosResult};
use wobos_core::{
    AnchorKind, ArrayCableSelection, CableCatalogs, ExportCableSelection, InstallStrategy,
    PlantConfig, SubstructureKind, TowerAssembly, TurbineAssembly,
};

const REL_TOL: f64 = 1e-9;

fn assert_close(label: &str, actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= REL_TOL * scale,
        "{label}: got {actual}, expected {expected}"
    );
}

fn array_66kv_300_500() -> ArrayCableSelection {
    ArrayCableSelection::from_catalog(&CableCatalogs::reference(), 66.0, 300.0, 500.0).unwrap()
}

struct Baseline {
    total_bos_cost: f64,
    total_capital_cost: f64,
    substructure: f64,
    electrical: f64,
    installation: f64,
    port: f64,
    development: f64,
    enm: f64,
    soft: f64,
    decommissioning: f64,
    mobilization: f64,
    array_cable1_length_m: f64,
    array_cable2_length_m: f64,
    export_length_m: f64,
    export_cables: f64,
    substations: f64,
    total_days: f64,
    turbine_days: f64,
    substructure_days: f64,
    array_days: f64,
    export_days: f64,
    mobilized: &'static [u32],
}

fn check(result: &BosResult, base: &Baseline) {
    let elec = &result.electrical;
    let inst = &result.installation;
    let sched = &inst.schedule;

    assert_close("total_bos_cost", result.total_bos_cost(), base.total_bos_cost);
    assert_close(
        "total_capital_cost",
        result.total_capital_cost(),
        base.total_capital_cost,
    );
    assert_close("substructure", result.substructure.total_cost, base.substructure);
    assert_close("electrical", elec.total_cost, base.electrical);
    assert_close("installation", inst.total_cost, base.installation);
    assert_close("port", result.port.total_cost, base.port);
    assert_close(
        "development",
        result.development.development_cost,
        base.development,
    );
    assert_close("enm", result.development.enm_cost, base.enm);
    assert_close("soft", result.soft_costs.soft_cost, base.soft);
    assert_close(
        "decommissioning",
        result.development.decommissioning_cost,
        base.decommissioning,
    );
    assert_close("mobilization", inst.mobilization_cost, base.mobilization);
    assert_close(
        "array cable 1 length",
        elec.array.cable1_length_m,
        base.array_cable1_length_m,
    );
    assert_close(
        "array cable 2 length",
        elec.array.cable2_length_m,
        base.array_cable2_length_m,
    );
    assert_close("export length", elec.export.length_m, base.export_length_m);

    assert_eq!(elec.export.n_cables, base.export_cables);
    assert_eq!(elec.n_substations(), base.substations);
    assert_eq!(sched.total_days, base.total_days);
    assert_eq!(sched.turbine_days, base.turbine_days);
    assert_eq!(sched.substructure_days, base.substructure_days);
    assert_eq!(sched.array_cable_days, base.array_days);
    assert_eq!(sched.export_cable_days, base.export_days);

    let mobilized: Vec<u32> = inst
        .mobilization_ledger
        .entries
        .iter()
        .map(|e| e.vessel_id)
        .collect();
    assert_eq!(mobilized, base.mobilized);
    assert!(!result.diagnostics.has_issues());
}

#[test]
fn monopile_8mw_600_turbines_40m() {
    let mut config = PlantConfig::default();
    config.turbine.rating_mw = 8.0;
    config.site.n_turbines = 600;
    config.site.water_depth_m = 40.0;
    config.electrical.array_cables = array_66kv_300_500();
    config.electrical.export_cable =
        ExportCableSelection::from_catalog(&CableCatalogs::reference(), 220.0, 1000.0).unwrap();

    let result = evaluate(&config).unwrap();
    check(
        &result,
        &Baseline {
            total_bos_cost: 17_264_541_413.024357,
            total_capital_cost: 24_968_541_413.024357,
            substructure: 3_032_923_136.718203,
            electrical: 7_980_992_518.793526,
            installation: 1_918_617_622.201026,
            port: 57_978_197.31061065,
            development: 87_846_400.0,
            enm: 519_620_459.0009346,
            soft: 3_666_563_079.000058,
            decommissioning: 608_824_475.0799708,
            mobilization: 9_926_000.0,
            array_cable1_length_m: 574_200.0,
            array_cable2_length_m: 473_273.5091709417,
            export_length_m: 1_782_792.0,
            export_cables: 18.0,
            substations: 9.0,
            total_days: 4796.0,
            turbine_days: 1406.0,
            substructure_days: 1547.0,
            array_days: 1551.0,
            export_days: 286.0,
            mobilized: &[1, 2, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14],
        },
    );
}

#[test]
fn semisubmersible_suction_pile_200m() {
    let mut config = PlantConfig::default();
    config.turbine.rating_mw = 6.0;
    config.site.water_depth_m = 200.0;
    config.variants.substructure = SubstructureKind::Semisubmersible;
    config.variants.anchor = AnchorKind::SuctionPile;
    config.electrical.array_cables = array_66kv_300_500();

    let result = evaluate(&config).unwrap();
    assert!(result.substructure.mooring.is_some());
    check(
        &result,
        &Baseline {
            total_bos_cost: 3_017_071_612.3673105,
            total_capital_cost: 3_980_071_612.3673105,
            substructure: 1_017_105_239.5377412,
            electrical: 592_646_861.5501361,
            installation: 600_682_822.7237173,
            port: 17_069_427.37467394,
            development: 39_470_800.0,
            enm: 89_100_174.04745074,
            soft: 660_996_287.1335919,
            decommissioning: 105_342_213.30584076,
            mobilization: 10_516_000.0,
            array_cable1_length_m: 143_305.68542048943,
            array_cable2_length_m: 63_798.8458751052,
            export_length_m: 399_997.2300532275,
            export_cables: 4.0,
            substations: 2.0,
            total_days: 1380.0,
            turbine_days: 515.0,
            substructure_days: 492.0,
            array_days: 247.0,
            export_days: 118.0,
            mobilized: &[20, 21, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14],
        },
    );
}

#[test]
fn jacket_feeder_barges_with_cable_search() {
    let mut config = PlantConfig::default();
    config.turbine.rating_mw = 6.0;
    config.site.n_turbines = 150;
    config.site.water_depth_m = 50.0;
    config.variants.substructure = SubstructureKind::Jacket;
    config.variants.install_strategy = InstallStrategy::FeederBarge;
    config.variants.optimize_cables = true;

    let result = evaluate(&config).unwrap();
    let elec = &result.electrical;
    // 220 kV / 400 mm² export, 66 kV / 150 + 400 mm² array
    assert_eq!(elec.export.selection.voltage_kv, 220.0);
    assert_eq!(elec.export.selection.cable.size_mm2, 400.0);
    assert_eq!(elec.array.selection.voltage_kv, 66.0);
    assert_eq!(elec.array.selection.cable1.size_mm2, 150.0);
    assert_eq!(elec.array.selection.cable2.size_mm2, 400.0);
    let index = elec.array_index.unwrap();
    assert_eq!((index.voltage, index.cable1, index.cable2), (1, 2, 6));

    check(
        &result,
        &Baseline {
            total_bos_cost: 3_525_573_836.592717,
            total_capital_cost: 4_970_073_836.592717,
            substructure: 700_990_821.4649833,
            electrical: 764_247_094.4571652,
            installation: 872_252_988.5677571,
            port: 21_822_638.811004404,
            development: 42_926_200.0,
            enm: 94_372_541.7320364,
            soft: 1_028_961_551.5597708,
            decommissioning: 319_108_849.91711897,
            mobilization: 11_926_000.0,
            array_cable1_length_m: 131_098.0,
            array_cable2_length_m: 100_762.78569898823,
            export_length_m: 495_275.0,
            export_cables: 5.0,
            substations: 3.0,
            total_days: 1641.0,
            turbine_days: 273.0,
            substructure_days: 880.0,
            array_days: 352.0,
            export_days: 130.0,
            mobilized: &[1, 2, 5, 6, 7, 8, 9, 10, 3, 4, 11, 12, 13, 14],
        },
    );
}

#[test]
fn spar_bunny_ears_two_piece_tower_300m() {
    let mut config = PlantConfig::default();
    config.turbine.rating_mw = 6.0;
    config.site.water_depth_m = 300.0;
    config.variants.substructure = SubstructureKind::Spar;
    config.variants.turbine_assembly = TurbineAssembly::BunnyEars;
    config.variants.tower_assembly = TowerAssembly::TwoPiece;
    config.electrical.array_cables = array_66kv_300_500();

    let result = evaluate(&config).unwrap();
    assert_eq!(result.port.cranes_600t, 3);
    check(
        &result,
        &Baseline {
            total_bos_cost: 3_037_118_673.8877554,
            total_capital_cost: 4_000_118_673.8877554,
            substructure: 860_916_292.0131719,
            electrical: 615_137_838.0468892,
            installation: 701_324_367.4799826,
            port: 35_475_242.07717394,
            development: 39_470_800.0,
            enm: 88_514_149.58468872,
            soft: 696_279_984.685849,
            decommissioning: 115_707_898.089926,
            mobilization: 11_636_000.0,
            array_cable1_length_m: 157_205.47547350245,
            array_cable2_length_m: 69_986.95042020027,
            export_length_m: 400_474.1052728915,
            export_cables: 4.0,
            substations: 2.0,
            total_days: 1684.0,
            turbine_days: 653.0,
            substructure_days: 659.0,
            array_days: 246.0,
            export_days: 118.0,
            mobilized: &[20, 21, 5, 6, 7, 8, 9, 10, 22, 23, 11, 12, 13, 14],
        },
    );
}
