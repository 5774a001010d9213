//! Precondition checks run before any stage executes.
//!
//! Validation fails fast on the first offending field and reports its path
//! (`turbine.rating_mw`, `catalogs.array[1].cables[0].current_rating_a`, ...).

use crate::cable::{ArrayCableSpec, ExportCableSpec};
use crate::config::PlantConfig;
use crate::vessel::VesselSpec;
use crate::{WobosError, WobosResult};

/// Reject configurations the evaluation cannot produce a finite answer for.
pub fn validate(config: &PlantConfig) -> WobosResult<()> {
    validate_turbine(config)?;
    validate_site(config)?;
    validate_variants(config)?;
    validate_electrical(config)?;
    validate_installation(config)?;
    validate_financial(config)?;
    validate_catalogs(config)?;
    validate_fleet(config)?;
    Ok(())
}

fn positive(field: &str, value: f64) -> WobosResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(WobosError::validation(
            field,
            format!("must be positive and finite (got {value})"),
        ));
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> WobosResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(WobosError::validation(
            field,
            format!("must be non-negative and finite (got {value})"),
        ));
    }
    Ok(())
}

fn fraction_below_one(field: &str, value: f64) -> WobosResult<()> {
    if !(0.0..1.0).contains(&value) {
        return Err(WobosError::validation(
            field,
            format!("must lie in [0, 1) (got {value})"),
        ));
    }
    Ok(())
}

fn validate_turbine(config: &PlantConfig) -> WobosResult<()> {
    let t = &config.turbine;
    positive("turbine.rating_mw", t.rating_mw)?;
    positive("turbine.rotor_diameter_m", t.rotor_diameter_m)?;
    positive("turbine.hub_height_m", t.hub_height_m)?;
    non_negative("turbine.capex_per_kw", t.capex_per_kw)?;
    Ok(())
}

fn validate_site(config: &PlantConfig) -> WobosResult<()> {
    let s = &config.site;
    if s.n_turbines < 1 {
        return Err(WobosError::validation(
            "site.n_turbines",
            "at least one turbine is required",
        ));
    }
    positive("site.water_depth_m", s.water_depth_m)?;
    non_negative("site.distance_to_shore_km", s.distance_to_shore_km)?;
    non_negative("site.distance_to_port_km", s.distance_to_port_km)?;
    non_negative("site.port_to_assembly_km", s.port_to_assembly_km)?;
    non_negative("site.assembly_to_site_km", s.assembly_to_site_km)?;
    positive("site.interconnect_voltage_kv", s.interconnect_voltage_kv)?;
    non_negative("site.interconnect_distance_km", s.interconnect_distance_km)?;
    positive("site.turbine_spacing_rd", s.turbine_spacing_rd)?;
    positive("site.row_spacing_rd", s.row_spacing_rd)?;
    Ok(())
}

fn validate_variants(config: &PlantConfig) -> WobosResult<()> {
    let v = &config.variants;
    if v.substructure.is_floating() && v.mooring_lines < 1 {
        return Err(WobosError::validation(
            "variants.mooring_lines",
            "floating substructures need at least one mooring line",
        ));
    }
    if let Some(d) = config.substructure.mooring_diameter_m {
        positive("substructure.mooring_diameter_m", d)?;
    }
    if let Some(l) = config.substructure.monopile_length_m {
        positive("substructure.monopile_length_m", l)?;
    }
    if let Some(d) = config.substructure.monopile_diameter_m {
        positive("substructure.monopile_diameter_m", d)?;
    }
    Ok(())
}

fn validate_electrical(config: &PlantConfig) -> WobosResult<()> {
    let e = &config.electrical;
    if !(e.power_factor > 0.0 && e.power_factor <= 1.0) {
        return Err(WobosError::validation(
            "electrical.power_factor",
            format!("must lie in (0, 1] (got {})", e.power_factor),
        ));
    }
    non_negative("electrical.burial_depth_m", e.burial_depth_m)?;
    let derate = 1.0 - (e.burial_depth_m - 1.0) * e.burial_factor;
    if derate <= 0.0 {
        return Err(WobosError::validation(
            "electrical.burial_factor",
            "burial derating leaves no cable capacity",
        ));
    }

    if config.variants.optimize_cables {
        return Ok(());
    }

    let rating = config.turbine.rating_mw;
    let array = &e.array_cables;
    positive("electrical.array_cables.voltage_kv", array.voltage_kv)?;
    check_array_cable("electrical.array_cables.cable1", &array.cable1)?;
    check_array_cable("electrical.array_cables.cable2", &array.cable2)?;
    for (label, cable) in [("cable1", &array.cable1), ("cable2", &array.cable2)] {
        let capacity = transfer_capacity_mw(config, cable.current_rating_a, array.voltage_kv);
        if (capacity / rating).floor() < 1.0 {
            return Err(WobosError::validation(
                format!("electrical.array_cables.{label}"),
                format!("{capacity:.2} MW capacity cannot carry one {rating} MW turbine"),
            ));
        }
    }

    let export = &e.export_cable;
    positive("electrical.export_cable.voltage_kv", export.voltage_kv)?;
    check_export_cable("electrical.export_cable.cable", &export.cable)?;
    Ok(())
}

fn validate_installation(config: &PlantConfig) -> WobosResult<()> {
    let i = &config.installation;
    fraction_below_one("installation.turbine_contingency", i.turbine_contingency)?;
    fraction_below_one(
        "installation.substructure_contingency",
        i.substructure_contingency,
    )?;
    fraction_below_one("installation.electrical_contingency", i.electrical_contingency)?;
    positive("installation.hammer_rate", i.hammer_rate)?;
    positive("installation.surface_lay_rate", i.surface_lay_rate)?;
    if config.electrical.burial_depth_m > 0.0 {
        positive("installation.burial_rate", i.burial_rate)?;
    }
    Ok(())
}

fn validate_financial(config: &PlantConfig) -> WobosResult<()> {
    let f = &config.financial;
    if f.decommissioning_discount_rate.is_nan() || f.decommissioning_discount_rate <= -1.0 {
        return Err(WobosError::validation(
            "financial.decommissioning_discount_rate",
            "must be greater than -1",
        ));
    }
    if f.interest_during_construction.is_nan() || f.interest_during_construction <= -1.0 {
        return Err(WobosError::validation(
            "financial.interest_during_construction",
            "must be greater than -1",
        ));
    }
    fraction_below_one(
        "financial.procurement_contingency",
        f.procurement_contingency,
    )?;
    fraction_below_one("financial.install_contingency", f.install_contingency)?;
    non_negative("financial.project_life_years", f.project_life_years)?;
    for (year, draw) in f.capital_draws.iter().enumerate() {
        non_negative(&format!("financial.capital_draws[{year}]"), *draw)?;
    }
    Ok(())
}

fn validate_catalogs(config: &PlantConfig) -> WobosResult<()> {
    if !config.variants.optimize_cables {
        return Ok(());
    }
    let catalogs = &config.catalogs;

    if catalogs.array.is_empty() {
        return Err(WobosError::validation(
            "catalogs.array",
            "cable optimizer needs at least one array voltage option",
        ));
    }
    for (v, option) in catalogs.array.iter().enumerate() {
        let path = format!("catalogs.array[{v}]");
        positive(&format!("{path}.voltage_kv"), option.voltage_kv)?;
        if option.cables.is_empty() {
            return Err(WobosError::validation(path, "voltage option has no cables"));
        }
        for (g, cable) in option.cables.iter().enumerate() {
            check_array_cable(&format!("{path}.cables[{g}]"), cable)?;
        }
    }
    if catalogs.array.iter().all(|option| option.cables.len() < 2) {
        return Err(WobosError::validation(
            "catalogs.array",
            "no voltage option offers two gauges to pair",
        ));
    }

    if catalogs.export.is_empty() {
        return Err(WobosError::validation(
            "catalogs.export",
            "cable optimizer needs at least one export voltage option",
        ));
    }
    for (v, option) in catalogs.export.iter().enumerate() {
        let path = format!("catalogs.export[{v}]");
        positive(&format!("{path}.voltage_kv"), option.voltage_kv)?;
        if option.cables.is_empty() {
            return Err(WobosError::validation(path, "voltage option has no cables"));
        }
        for (g, cable) in option.cables.iter().enumerate() {
            check_export_cable(&format!("{path}.cables[{g}]"), cable)?;
        }
    }
    Ok(())
}

fn validate_fleet(config: &PlantConfig) -> WobosResult<()> {
    let fleet = config.fleet();
    for (role, vessel) in fleet.roles() {
        check_vessel(&format!("vessels.{role}"), vessel)?;
    }
    if config.is_floating() {
        positive(
            "vessels.substructure_install.tow_speed_knots",
            fleet.substructure_install.tow_speed_knots,
        )?;
        positive(
            "vessels.turbine_install.tow_speed_knots",
            fleet.turbine_install.tow_speed_knots,
        )?;
    } else {
        positive(
            "vessels.turbine_install.jacking_speed_m_per_min",
            fleet.turbine_install.jacking_speed_m_per_min,
        )?;
        positive(
            "vessels.substructure_install.jacking_speed_m_per_min",
            fleet.substructure_install.jacking_speed_m_per_min,
        )?;
    }
    positive(
        "vessels.array_cable.cable_capacity_t",
        fleet.array_cable.cable_capacity_t,
    )?;
    positive(
        "vessels.export_cable.cable_capacity_t",
        fleet.export_cable.cable_capacity_t,
    )?;
    Ok(())
}

fn check_vessel(path: &str, vessel: &VesselSpec) -> WobosResult<()> {
    positive(&format!("{path}.transit_speed_knots"), vessel.transit_speed_knots)?;
    non_negative(&format!("{path}.day_rate"), vessel.day_rate)?;
    non_negative(&format!("{path}.mobilization_days"), vessel.mobilization_days)?;
    Ok(())
}

fn check_array_cable(path: &str, cable: &ArrayCableSpec) -> WobosResult<()> {
    positive(&format!("{path}.current_rating_a"), cable.current_rating_a)?;
    non_negative(&format!("{path}.cost_per_m"), cable.cost_per_m)?;
    non_negative(&format!("{path}.mass_kg_per_m"), cable.mass_kg_per_m)?;
    Ok(())
}

fn check_export_cable(path: &str, cable: &ExportCableSpec) -> WobosResult<()> {
    positive(&format!("{path}.current_rating_a"), cable.current_rating_a)?;
    non_negative(&format!("{path}.cost_per_m"), cable.cost_per_m)?;
    positive(&format!("{path}.mass_kg_per_m"), cable.mass_kg_per_m)?;
    Ok(())
}

/// Three-phase transfer capacity (MW) of one cable after burial derating.
pub fn transfer_capacity_mw(config: &PlantConfig, current_a: f64, voltage_kv: f64) -> f64 {
    let e = &config.electrical;
    (3f64.sqrt() * current_a * voltage_kv * e.power_factor
        * (1.0 - (e.burial_depth_m - 1.0) * e.burial_factor))
        / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::SubstructureKind;

    fn field_of(config: &PlantConfig) -> String {
        validate(config)
            .unwrap_err()
            .field()
            .map(str::to_string)
            .unwrap_or_default()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&PlantConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_rating() {
        let mut config = PlantConfig::default();
        config.turbine.rating_mw = 0.0;
        assert_eq!(field_of(&config), "turbine.rating_mw");

        config.turbine.rating_mw = f64::NAN;
        assert_eq!(field_of(&config), "turbine.rating_mw");
    }

    #[test]
    fn test_rejects_zero_turbines() {
        let mut config = PlantConfig::default();
        config.site.n_turbines = 0;
        assert_eq!(field_of(&config), "site.n_turbines");
    }

    #[test]
    fn test_rejects_empty_catalog_when_optimizing() {
        let mut config = PlantConfig::default();
        config.variants.optimize_cables = true;
        config.catalogs.array.clear();
        assert_eq!(field_of(&config), "catalogs.array");

        let mut config = PlantConfig::default();
        config.variants.optimize_cables = true;
        config.catalogs.export[1].cables.clear();
        assert_eq!(field_of(&config), "catalogs.export[1]");
    }

    #[test]
    fn test_empty_catalog_ignored_without_optimizer() {
        let mut config = PlantConfig::default();
        config.catalogs.array.clear();
        config.catalogs.export.clear();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_single_gauge_array_catalog() {
        let mut config = PlantConfig::default();
        config.variants.optimize_cables = true;
        for option in &mut config.catalogs.array {
            option.cables.truncate(1);
        }
        assert_eq!(field_of(&config), "catalogs.array");
    }

    #[test]
    fn test_rejects_array_cable_that_cannot_carry_a_turbine() {
        let mut config = PlantConfig::default();
        config.turbine.rating_mw = 40.0;
        assert_eq!(field_of(&config), "electrical.array_cables.cable1");
    }

    #[test]
    fn test_rejects_contingency_of_one() {
        let mut config = PlantConfig::default();
        config.installation.electrical_contingency = 1.0;
        assert_eq!(field_of(&config), "installation.electrical_contingency");
    }

    #[test]
    fn test_floating_requires_mooring_lines() {
        let mut config = PlantConfig::default();
        config.variants.substructure = SubstructureKind::Spar;
        config.variants.mooring_lines = 0;
        assert_eq!(field_of(&config), "variants.mooring_lines");

        config.variants.substructure = SubstructureKind::Jacket;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_stationary_vessel() {
        let mut config = PlantConfig::default();
        let mut fleet = config.fleet();
        fleet.export_cable.transit_speed_knots = 0.0;
        config.vessels = Some(fleet);
        assert_eq!(field_of(&config), "vessels.export_cable.transit_speed_knots");
    }

    #[test]
    fn test_fixed_plant_rejects_missing_jacking_speed() {
        let mut config = PlantConfig::default();
        let mut fleet = config.fleet();
        fleet.turbine_install.jacking_speed_m_per_min = 0.0;
        config.vessels = Some(fleet);
        assert_eq!(
            field_of(&config),
            "vessels.turbine_install.jacking_speed_m_per_min"
        );

        let mut config = PlantConfig::default();
        config.variants.substructure = SubstructureKind::Jacket;
        let mut fleet = config.fleet();
        fleet.substructure_install.jacking_speed_m_per_min = -0.5;
        config.vessels = Some(fleet);
        assert_eq!(
            field_of(&config),
            "vessels.substructure_install.jacking_speed_m_per_min"
        );
    }

    #[test]
    fn test_floating_plant_ignores_jacking_speed() {
        let mut config = PlantConfig::default();
        config.variants.substructure = SubstructureKind::Semisubmersible;
        config.site.water_depth_m = 200.0;
        let mut fleet = config.fleet();
        fleet.turbine_install.jacking_speed_m_per_min = 0.0;
        fleet.substructure_install.jacking_speed_m_per_min = 0.0;
        config.vessels = Some(fleet);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_financial_contingency_out_of_range() {
        let mut config = PlantConfig::default();
        config.financial.procurement_contingency = -5.0;
        assert_eq!(field_of(&config), "financial.procurement_contingency");

        let mut config = PlantConfig::default();
        config.financial.install_contingency = 1.0;
        assert_eq!(field_of(&config), "financial.install_contingency");
    }

    #[test]
    fn test_rejects_discount_rate_at_minus_one() {
        let mut config = PlantConfig::default();
        config.financial.decommissioning_discount_rate = -1.0;
        assert_eq!(field_of(&config), "financial.decommissioning_discount_rate");
    }
}
