//! Turbine dimensions and masses.
//!
//! Empirical curve fits in turbine rating `R` (MW), rotor diameter and hub
//! height. Everything downstream that needs a deck footprint or a lifted mass
//! reads it from here.
//!
//! ```text
//! hub diameter    = R/4 + 2
//! blade length    = (rotor - hub)/2
//! nacelle width   = hub + 1.5        nacelle length = 2 · width
//! RNA mass        = 2.082R² + 44.59R + 22.48
//! tower diameter  = R/2 + 4
//! tower mass      = (0.4π(rotor/2)²·hub height - 1500)/1000
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;
use wobos_core::PlantConfig;

/// Turbine geometry derived from rating and rotor size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurbineDimensions {
    pub hub_diameter_m: f64,
    pub blade_length_m: f64,
    /// Blade chord used for deck layout (taken equal to the hub diameter).
    pub chord_m: f64,
    pub nacelle_width_m: f64,
    pub nacelle_length_m: f64,
    /// Rotor-nacelle assembly mass (t).
    pub rna_mass_t: f64,
    pub tower_diameter_m: f64,
    pub tower_mass_t: f64,
}

pub fn evaluate(config: &PlantConfig) -> TurbineDimensions {
    let rating = config.turbine.rating_mw;
    let rotor = config.turbine.rotor_diameter_m;

    let hub_diameter_m = rating / 4.0 + 2.0;
    let nacelle_width_m = hub_diameter_m + 1.5;

    let dims = TurbineDimensions {
        hub_diameter_m,
        blade_length_m: (rotor - hub_diameter_m) / 2.0,
        chord_m: hub_diameter_m,
        nacelle_width_m,
        nacelle_length_m: 2.0 * nacelle_width_m,
        rna_mass_t: 2.082 * rating.powi(2) + 44.59 * rating + 22.48,
        tower_diameter_m: rating / 2.0 + 4.0,
        tower_mass_t: (0.4 * PI * (rotor / 2.0).powi(2) * config.turbine.hub_height_m - 1500.0)
            / 1000.0,
    };
    debug!(
        rna_mass_t = dims.rna_mass_t,
        tower_mass_t = dims.tower_mass_t,
        "turbine dimensions"
    );
    dims
}
