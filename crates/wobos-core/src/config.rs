//! Plant configuration.
//!
//! [`PlantConfig`] is the single immutable input to an evaluation. Every
//! section derives `Deserialize` with `#[serde(default)]`, so a TOML or JSON
//! file only needs the fields it overrides:
//!
//! ```toml
//! [turbine]
//! rating_mw = 8.0
//!
//! [variants]
//! substructure = "semisubmersible"
//! anchor = "suction_pile"
//! ```
//!
//! Units follow the section docs: lengths in metres, site distances in
//! kilometres, durations in hours unless the field name says otherwise, and
//! costs in dollars.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cable::{ArrayCableSelection, CableCatalogs, ExportCableSelection};
use crate::variants::{
    AnchorKind, InstallStrategy, SubstructureKind, TowerAssembly, TurbineAssembly,
};
use crate::vessel::VesselFleet;
use crate::{WobosError, WobosResult};

/// Complete input to one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlantConfig {
    pub turbine: TurbineConfig,
    pub site: SiteConfig,
    pub variants: VariantConfig,
    pub substructure: SubstructureConfig,
    pub electrical: ElectricalConfig,
    pub installation: InstallationConfig,
    pub port: PortConfig,
    pub development: DevelopmentConfig,
    pub financial: FinancialConfig,
    pub catalogs: CableCatalogs,
    /// Vessel fleet. When absent the reference fleet for the configured
    /// substructure is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vessels: Option<VesselFleet>,
}

impl PlantConfig {
    /// Load a configuration from a `.toml` or `.json` file.
    pub fn from_path(path: &Path) -> WobosResult<Self> {
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&text),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str(&text),
            _ => Err(WobosError::Config(format!(
                "unsupported configuration format '{}' (expected .toml or .json)",
                path.display()
            ))),
        }
    }

    pub fn from_toml_str(text: &str) -> WobosResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> WobosResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The vessel fleet in effect for this plant.
    pub fn fleet(&self) -> VesselFleet {
        self.vessels
            .clone()
            .unwrap_or_else(|| VesselFleet::for_substructure(self.variants.substructure))
    }

    /// Turbine capital cost for the whole plant ($).
    pub fn turbine_capital_cost(&self) -> f64 {
        self.turbine.capex_per_kw * self.turbine.rating_mw * 1000.0 * self.n_turbines()
    }

    /// Installed capacity (MW).
    pub fn plant_capacity_mw(&self) -> f64 {
        self.turbine.rating_mw * self.n_turbines()
    }

    pub fn n_turbines(&self) -> f64 {
        f64::from(self.site.n_turbines)
    }

    pub fn is_floating(&self) -> bool {
        self.variants.substructure.is_floating()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurbineConfig {
    pub rating_mw: f64,
    pub rotor_diameter_m: f64,
    pub hub_height_m: f64,
    /// Turbine capital cost ($/kW).
    pub capex_per_kw: f64,
}

impl Default for TurbineConfig {
    fn default() -> Self {
        Self {
            rating_mw: 5.0,
            rotor_diameter_m: 120.0,
            hub_height_m: 90.0,
            capex_per_kw: 1605.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub n_turbines: u32,
    pub water_depth_m: f64,
    pub distance_to_shore_km: f64,
    pub distance_to_port_km: f64,
    /// Port to quayside assembly area (floating plants).
    pub port_to_assembly_km: f64,
    /// Assembly area to site (floating plants).
    pub assembly_to_site_km: f64,
    pub interconnect_voltage_kv: f64,
    pub interconnect_distance_km: f64,
    /// Spacing between turbines in a string (rotor diameters).
    pub turbine_spacing_rd: f64,
    /// Spacing between strings (rotor diameters).
    pub row_spacing_rd: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            n_turbines: 100,
            water_depth_m: 30.0,
            distance_to_shore_km: 90.0,
            distance_to_port_km: 90.0,
            port_to_assembly_km: 90.0,
            assembly_to_site_km: 90.0,
            interconnect_voltage_kv: 345.0,
            interconnect_distance_km: 3.0,
            turbine_spacing_rd: 9.0,
            row_spacing_rd: 9.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    pub substructure: SubstructureKind,
    pub anchor: AnchorKind,
    pub turbine_assembly: TurbineAssembly,
    pub tower_assembly: TowerAssembly,
    pub install_strategy: InstallStrategy,
    /// Search the cable catalogs instead of using the fixed selections.
    pub optimize_cables: bool,
    pub mooring_lines: u32,
    pub install_seasons: u32,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            substructure: SubstructureKind::default(),
            anchor: AnchorKind::default(),
            turbine_assembly: TurbineAssembly::default(),
            tower_assembly: TowerAssembly::default(),
            install_strategy: InstallStrategy::default(),
            optimize_cables: false,
            mooring_lines: 3,
            install_seasons: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubstructureConfig {
    pub monopile_embedment_m: f64,
    /// Overrides the depth-derived monopile length.
    pub monopile_length_m: Option<f64>,
    /// Overrides the rating-derived monopile diameter.
    pub monopile_diameter_m: Option<f64>,
    /// Side of the jacket lattice footprint.
    pub jacket_lattice_width_m: f64,
    pub jacket_pile_length_m: f64,
    pub jacket_pile_diameter_m: f64,
    /// Fixed chain length added per line for drag-embedment anchors.
    pub drag_anchor_fixed_length_m: f64,
    /// Mooring line diameter. Auto-selected from turbine rating when absent.
    pub mooring_diameter_m: Option<f64>,
    pub rates: SubstructureRates,
}

impl Default for SubstructureConfig {
    fn default() -> Self {
        Self {
            monopile_embedment_m: 30.0,
            monopile_length_m: None,
            monopile_diameter_m: None,
            jacket_lattice_width_m: 26.0,
            jacket_pile_length_m: 47.5,
            jacket_pile_diameter_m: 1.6,
            drag_anchor_fixed_length_m: 500.0,
            mooring_diameter_m: None,
            rates: SubstructureRates::default(),
        }
    }
}

/// Steel cost rates ($/t).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubstructureRates {
    pub monopile: f64,
    pub monopile_transition: f64,
    pub jacket_lattice: f64,
    pub jacket_transition: f64,
    pub jacket_piles: f64,
    pub spar_stiffened_column: f64,
    pub spar_tapered_column: f64,
    pub ballast: f64,
    pub semi_stiffened_column: f64,
    pub semi_truss: f64,
    pub semi_heave_plate: f64,
    pub secondary_steel: f64,
}

impl Default for SubstructureRates {
    fn default() -> Self {
        Self {
            monopile: 2250.0,
            monopile_transition: 3230.0,
            jacket_lattice: 4680.0,
            jacket_transition: 4500.0,
            jacket_piles: 2250.0,
            spar_stiffened_column: 3120.0,
            spar_tapered_column: 4220.0,
            ballast: 100.0,
            semi_stiffened_column: 3120.0,
            semi_truss: 6250.0,
            semi_heave_plate: 6250.0,
            secondary_steel: 7250.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectricalConfig {
    pub power_factor: f64,
    pub burial_depth_m: f64,
    /// Capacity derating per metre of burial beyond the first.
    pub burial_factor: f64,
    /// Extra free-hanging length for floating catenaries, as a fraction.
    pub catenary_length_factor: f64,
    /// Extra cable ordered beyond the route length, as a fraction.
    pub excess_cable_factor: f64,
    /// Cost multiplier for dynamic (floating) cable sections.
    pub dynamic_cost_factor: f64,
    /// Topside fabrication ($/t).
    pub topside_fabrication_rate: f64,
    pub topside_design_cost: f64,
    pub topside_assembly_factor: f64,
    /// Substation jacket ($/t).
    pub substation_jacket_rate: f64,
    /// Substation piles ($/t).
    pub substation_pile_rate: f64,
    /// Shunt reactors ($/MVA).
    pub shunt_reactor_rate: f64,
    pub hv_switchgear_cost: f64,
    pub mv_switchgear_cost: f64,
    pub backup_generator_cost: f64,
    pub workspace_cost: f64,
    pub other_ancillary_cost: f64,
    /// Main power transformers ($/MVA).
    pub mpt_rate: f64,
    /// Array cables used when the optimizer is off.
    pub array_cables: ArrayCableSelection,
    /// Export cable used when the optimizer is off.
    pub export_cable: ExportCableSelection,
}

impl Default for ElectricalConfig {
    fn default() -> Self {
        Self {
            power_factor: 0.95,
            burial_depth_m: 2.0,
            burial_factor: 0.1,
            catenary_length_factor: 0.04,
            excess_cable_factor: 0.1,
            dynamic_cost_factor: 2.0,
            topside_fabrication_rate: 14_500.0,
            topside_design_cost: 4_500_000.0,
            topside_assembly_factor: 0.075,
            substation_jacket_rate: 6250.0,
            substation_pile_rate: 2250.0,
            shunt_reactor_rate: 35_000.0,
            hv_switchgear_cost: 950_000.0,
            mv_switchgear_cost: 500_000.0,
            backup_generator_cost: 1_000_000.0,
            workspace_cost: 2_000_000.0,
            other_ancillary_cost: 3_000_000.0,
            mpt_rate: 12_500.0,
            array_cables: ArrayCableSelection::default(),
            export_cable: ExportCableSelection::default(),
        }
    }
}

/// Task durations (hours unless noted), contingencies and spread costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallationConfig {
    // mooring
    /// Anchor setting time per metre of depth.
    pub mooring_depth_factor: f64,
    pub mooring_loadout: f64,
    pub mooring_survey: f64,

    // floating preparation
    pub prep_assembly_area: f64,
    pub prep_spar: f64,
    pub upend_spar: f64,
    pub prep_semi: f64,

    // turbine
    pub turbine_fasten: f64,
    pub bolt_tower: f64,
    pub bolt_nacelle_individual: f64,
    pub bolt_nacelle_bunny_ears: f64,
    pub bolt_nacelle_rotor_assembled: f64,
    pub bolt_blade_individual: f64,
    pub bolt_blade_bunny_ears: f64,
    pub bolt_rotor: f64,

    // vessel positioning
    pub position_turbine: f64,
    pub position_jacket: f64,
    pub position_monopile: f64,
    pub position_substation: f64,

    // sea fastening
    pub monopile_fasten: f64,
    pub jacket_fasten: f64,
    pub prep_gripper_monopile: f64,
    pub prep_gripper_jacket: f64,

    // piling
    pub place_piles: f64,
    pub prep_hammer_monopile: f64,
    pub prep_hammer_jacket: f64,
    pub remove_hammer_monopile: f64,
    pub remove_hammer_jacket: f64,
    pub place_template: f64,
    pub place_jacket: f64,
    pub level_jacket: f64,
    /// Pile driving rate (m/h).
    pub hammer_rate: f64,

    // monopile and transition piece
    pub place_monopile: f64,
    pub install_scour: f64,
    pub place_transition_piece: f64,
    pub grout_transition_piece: f64,
    pub transition_piece_cover: f64,

    // floating hook-up
    pub prep_tow: f64,
    pub spar_mooring_connect: f64,
    pub semi_mooring_connect: f64,
    pub spar_mooring_check: f64,
    pub semi_mooring_check: f64,
    pub semi_ballast: f64,

    // array cable
    /// Surface lay rate (m/h).
    pub surface_lay_rate: f64,
    pub cable_pull_in: f64,
    pub cable_termination: f64,
    pub cable_loadout: f64,
    /// Burial rate (m/h).
    pub burial_rate: f64,

    // export cable and substation
    pub substation_pull_in: f64,
    pub shore_pull_in: f64,
    /// Landfall construction (days).
    pub landfall_construction_days: f64,
    pub export_cable_loadout: f64,
    pub substation_loadout: f64,
    pub place_topside: f64,

    /// Clearance added around each item on deck (m).
    pub inspection_clearance_m: f64,

    pub turbine_contingency: f64,
    pub substructure_contingency: f64,
    pub electrical_contingency: f64,

    pub costs: InstallationCosts,
}

impl Default for InstallationConfig {
    fn default() -> Self {
        Self {
            mooring_depth_factor: 0.005,
            mooring_loadout: 5.0,
            mooring_survey: 4.0,
            prep_assembly_area: 168.0,
            prep_spar: 18.0,
            upend_spar: 36.0,
            prep_semi: 12.0,
            turbine_fasten: 8.0,
            bolt_tower: 7.0,
            bolt_nacelle_individual: 7.0,
            bolt_nacelle_bunny_ears: 7.0,
            bolt_nacelle_rotor_assembled: 7.0,
            bolt_blade_individual: 3.5,
            bolt_blade_bunny_ears: 3.5,
            bolt_rotor: 7.0,
            position_turbine: 2.0,
            position_jacket: 8.0,
            position_monopile: 3.0,
            position_substation: 6.0,
            monopile_fasten: 12.0,
            jacket_fasten: 20.0,
            prep_gripper_monopile: 1.5,
            prep_gripper_jacket: 8.0,
            place_piles: 12.0,
            prep_hammer_monopile: 2.0,
            prep_hammer_jacket: 2.0,
            remove_hammer_monopile: 2.0,
            remove_hammer_jacket: 4.0,
            place_template: 4.0,
            place_jacket: 12.0,
            level_jacket: 24.0,
            hammer_rate: 20.0,
            place_monopile: 3.0,
            install_scour: 6.0,
            place_transition_piece: 3.0,
            grout_transition_piece: 8.0,
            transition_piece_cover: 1.5,
            prep_tow: 12.0,
            spar_mooring_connect: 20.0,
            semi_mooring_connect: 22.0,
            spar_mooring_check: 16.0,
            semi_mooring_check: 12.0,
            semi_ballast: 6.0,
            surface_lay_rate: 375.0,
            cable_pull_in: 5.5,
            cable_termination: 5.5,
            cable_loadout: 14.0,
            burial_rate: 125.0,
            substation_pull_in: 48.0,
            shore_pull_in: 96.0,
            landfall_construction_days: 7.0,
            export_cable_loadout: 24.0,
            substation_loadout: 60.0,
            place_topside: 24.0,
            inspection_clearance_m: 2.0,
            turbine_contingency: 0.3,
            substructure_contingency: 0.3,
            electrical_contingency: 0.3,
            costs: InstallationCosts::default(),
        }
    }
}

/// Spreads, fixed works and survey costs added to the vessel ledgers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallationCosts {
    pub pile_spread_day_rate: f64,
    pub pile_spread_mobilization: f64,
    pub grout_spread_day_rate: f64,
    pub grout_spread_mobilization: f64,
    pub sea_spread_day_rate: f64,
    pub sea_spread_mobilization: f64,
    pub compensated_racks: f64,
    /// Scour protection material per turbine.
    pub scour_material: f64,
    /// Cable route survey ($/m).
    pub cable_survey_rate: f64,
    pub cable_drill_distance_m: f64,
    /// Horizontal directional drilling at landfall ($/m).
    pub cable_drill_rate: f64,
    pub mpv_rental_day_rate: f64,
    pub dive_team_day_rate: f64,
    pub winch_day_rate: f64,
    pub civil_works: f64,
    pub electrical_works: f64,
}

impl Default for InstallationCosts {
    fn default() -> Self {
        Self {
            pile_spread_day_rate: 2500.0,
            pile_spread_mobilization: 750_000.0,
            grout_spread_day_rate: 3000.0,
            grout_spread_mobilization: 1_000_000.0,
            sea_spread_day_rate: 165_000.0,
            sea_spread_mobilization: 4_500_000.0,
            compensated_racks: 1_000_000.0,
            scour_material: 250_000.0,
            cable_survey_rate: 240.0,
            cable_drill_distance_m: 500.0,
            cable_drill_rate: 3200.0,
            mpv_rental_day_rate: 72_000.0,
            dive_team_day_rate: 3200.0,
            winch_day_rate: 1000.0,
            civil_works: 40_000_000.0,
            electrical_works: 25_000_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortConfig {
    /// 600 t crawler cranes. Auto-selected when zero.
    pub cranes_600t: u32,
    /// 1000 t crawler cranes. Auto-selected when zero.
    pub cranes_1000t: u32,
    pub crane_600t_day_rate: f64,
    pub crane_1000t_day_rate: f64,
    pub crane_mobilization: f64,
    /// Entrance and exit fee ($/m² of vessel footprint).
    pub entrance_exit_rate: f64,
    /// Docking ($/day).
    pub dock_rate: f64,
    /// Wharf ($/t).
    pub wharf_rate: f64,
    /// Laydown area ($/m²/day).
    pub laydown_rate: f64,
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            cranes_600t: 0,
            cranes_1000t: 0,
            crane_600t_day_rate: 5000.0,
            crane_1000t_day_rate: 8000.0,
            crane_mobilization: 150_000.0,
            entrance_exit_rate: 0.525,
            dock_rate: 3000.0,
            wharf_rate: 2.75,
            laydown_rate: 0.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevelopmentConfig {
    /// Engineering and management as a fraction of hard costs.
    pub enm_factor: f64,
    pub pre_feed_study: f64,
    pub feed_study: f64,
    /// Met tower fabrication and installation ($/MW).
    pub met_tower_rate: f64,
    pub permits: PermitCosts,
}

impl Default for DevelopmentConfig {
    fn default() -> Self {
        Self {
            enm_factor: 0.04,
            pre_feed_study: 5_000_000.0,
            feed_study: 10_000_000.0,
            met_tower_rate: 11_518.0,
            permits: PermitCosts::default(),
        }
    }
}

/// Leases, plans, studies and compliance line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermitCosts {
    pub state_lease: f64,
    pub outer_continental_shelf_lease: f64,
    pub site_assessment_plan: f64,
    pub construction_operations_plan: f64,
    pub nepa_eis_met_tower: f64,
    pub physical_resource_study_met_tower: f64,
    pub biological_resource_study_met_tower: f64,
    pub socioeconomic_study_met_tower: f64,
    pub navigation_study_met_tower: f64,
    pub nepa_eis_project: f64,
    pub physical_resource_study_project: f64,
    pub biological_resource_study_project: f64,
    pub socioeconomic_study_project: f64,
    pub navigation_study_project: f64,
    pub coastal_zone_management_act: f64,
    pub rivers_harbors_act: f64,
    pub clean_water_act_402: f64,
    pub clean_water_act_404: f64,
    pub faa_plan: f64,
    pub endangered_species_act: f64,
    pub marine_mammal_protection_act: f64,
    pub migratory_bird_treaty_act: f64,
    pub national_historic_preservation_act: f64,
    pub additional_local_permits: f64,
}

impl PermitCosts {
    pub fn total(&self) -> f64 {
        self.state_lease
            + self.outer_continental_shelf_lease
            + self.site_assessment_plan
            + self.construction_operations_plan
            + self.nepa_eis_met_tower
            + self.physical_resource_study_met_tower
            + self.biological_resource_study_met_tower
            + self.socioeconomic_study_met_tower
            + self.navigation_study_met_tower
            + self.nepa_eis_project
            + self.physical_resource_study_project
            + self.biological_resource_study_project
            + self.socioeconomic_study_project
            + self.navigation_study_project
            + self.coastal_zone_management_act
            + self.rivers_harbors_act
            + self.clean_water_act_402
            + self.clean_water_act_404
            + self.faa_plan
            + self.endangered_species_act
            + self.marine_mammal_protection_act
            + self.migratory_bird_treaty_act
            + self.national_historic_preservation_act
            + self.additional_local_permits
    }
}

impl Default for PermitCosts {
    fn default() -> Self {
        Self {
            state_lease: 250_000.0,
            outer_continental_shelf_lease: 1_000_000.0,
            site_assessment_plan: 500_000.0,
            construction_operations_plan: 1_000_000.0,
            nepa_eis_met_tower: 2_000_000.0,
            physical_resource_study_met_tower: 1_500_000.0,
            biological_resource_study_met_tower: 1_500_000.0,
            socioeconomic_study_met_tower: 500_000.0,
            navigation_study_met_tower: 500_000.0,
            nepa_eis_project: 5_000_000.0,
            physical_resource_study_project: 500_000.0,
            biological_resource_study_project: 500_000.0,
            socioeconomic_study_project: 200_000.0,
            navigation_study_project: 250_000.0,
            coastal_zone_management_act: 100_000.0,
            rivers_harbors_act: 100_000.0,
            clean_water_act_402: 100_000.0,
            clean_water_act_404: 100_000.0,
            faa_plan: 10_000.0,
            endangered_species_act: 500_000.0,
            marine_mammal_protection_act: 500_000.0,
            migratory_bird_treaty_act: 500_000.0,
            national_historic_preservation_act: 250_000.0,
            additional_local_permits: 200_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialConfig {
    pub decommissioning_discount_rate: f64,
    pub project_life_years: f64,
    pub scrap_value: f64,
    pub commissioning_rate: f64,
    pub procurement_contingency: f64,
    pub install_contingency: f64,
    pub construction_insurance: f64,
    /// Fraction of capital drawn in each construction year, year 0 first.
    pub capital_draws: [f64; 6],
    pub tax_rate: f64,
    pub interest_during_construction: f64,
}

impl Default for FinancialConfig {
    fn default() -> Self {
        Self {
            decommissioning_discount_rate: 0.03,
            project_life_years: 20.0,
            scrap_value: 0.0,
            commissioning_rate: 0.01,
            procurement_contingency: 0.05,
            install_contingency: 0.3,
            construction_insurance: 0.0115,
            capital_draws: [0.2, 0.6, 0.1, 0.1, 0.0, 0.0],
            tax_rate: 0.4,
            interest_during_construction: 0.08,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_overrides_only_named_fields() {
        let config = PlantConfig::from_toml_str(
            r#"
            [turbine]
            rating_mw = 8.0

            [variants]
            substructure = "semisubmersible"
            anchor = "suction_pile"
            "#,
        )
        .unwrap();

        assert_eq!(config.turbine.rating_mw, 8.0);
        assert_eq!(config.turbine.rotor_diameter_m, 120.0);
        assert_eq!(config.variants.substructure, SubstructureKind::Semisubmersible);
        assert_eq!(config.variants.anchor, AnchorKind::SuctionPile);
        assert_eq!(config.site, SiteConfig::default());
    }

    #[test]
    fn test_unknown_variant_tag_is_parse_error() {
        let err = PlantConfig::from_toml_str(
            r#"
            [variants]
            substructure = "tripod"
            "#,
        )
        .unwrap_err();
        let text = err.to_string();
        assert!(matches!(err, WobosError::Parse(_)));
        assert!(text.contains("tripod"));
    }

    #[test]
    fn test_from_path_reports_io_and_format_errors() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));

        let missing = PlantConfig::from_path(&dir.join("no_such_plant.toml")).unwrap_err();
        assert!(matches!(missing, WobosError::Io(_)));

        let source = PlantConfig::from_path(&dir.join("src/lib.rs")).unwrap_err();
        assert!(matches!(source, WobosError::Config(_)));
        assert!(source.to_string().contains("expected .toml or .json"));
    }

    #[test]
    fn test_fleet_follows_substructure_when_absent() {
        let mut config = PlantConfig::default();
        assert_eq!(config.fleet().turbine_install.id, 1);
        config.variants.substructure = SubstructureKind::Spar;
        assert_eq!(config.fleet().turbine_install.id, 20);

        config.vessels = Some(VesselFleet::for_substructure(SubstructureKind::Monopile));
        assert_eq!(config.fleet().turbine_install.id, 1);
    }

    #[test]
    fn test_turbine_capital_cost_uses_kw() {
        let config = PlantConfig::default();
        assert_eq!(config.turbine_capital_cost(), 1605.0 * 5.0 * 1000.0 * 100.0);
        assert_eq!(config.plant_capacity_mw(), 500.0);
    }

    #[test]
    fn test_json_and_toml_agree_on_defaults() {
        let toml_config = PlantConfig::from_toml_str("").unwrap();
        let json_config = PlantConfig::from_json_str("{}").unwrap();
        assert_eq!(toml_config, json_config);
        assert_eq!(toml_config, PlantConfig::default());
    }

    #[test]
    fn test_default_permits_total() {
        assert_eq!(PermitCosts::default().total(), 17_560_000.0);
    }
}
