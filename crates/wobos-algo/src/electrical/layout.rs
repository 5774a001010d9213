//! Cable route geometry between adjacent turbines.
//!
//! Fixed-bottom cables run straight down each foundation and along the sea
//! floor. Floating cables hang in a catenary from each unit (the free-hanging
//! length `F`) and rest on the sea floor in between (the fixed length `C`):
//!
//! ```text
//!   unit            unit
//!    │╲             ╱│
//!    │ ╲ F       F ╱ │
//!    │  ╲_________╱  │
//!          C
//! ```

use serde::{Deserialize, Serialize};
use wobos_core::PlantConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableLayout {
    /// Catenary departure angle from vertical (degrees).
    pub system_angle_deg: f64,
    /// Free-hanging length at each floating unit (m).
    pub free_hanging_m: f64,
    /// Sea-floor length between two floating units (m).
    pub sea_floor_m: f64,
    /// Route length of one section between adjacent turbines (m).
    pub section_route_m: f64,
}

pub fn evaluate(config: &PlantConfig) -> CableLayout {
    let depth = config.site.water_depth_m;
    let rotor = config.turbine.rotor_diameter_m;

    let system_angle_deg = -0.0047 * depth + 18.743;
    let angle = system_angle_deg.to_radians();
    let free_hanging_m =
        (depth / angle.cos()) * (config.electrical.catenary_length_factor + 1.0) + 190.0;
    let sea_floor_m = config.site.turbine_spacing_rd * rotor - 2.0 * (angle.tan() * depth + 70.0);

    let section_route_m = if config.is_floating() {
        2.0 * free_hanging_m + sea_floor_m
    } else {
        config.site.turbine_spacing_rd * rotor + depth * 2.0
    };

    CableLayout {
        system_angle_deg,
        free_hanging_m,
        sea_floor_m,
        section_route_m,
    }
}

impl CableLayout {
    /// Horizontal offset lost to the catenaries when stepping between rows.
    pub(crate) fn catenary_offset(&self, depth: f64) -> f64 {
        2.0 * (self.system_angle_deg.to_radians().tan() * depth + 70.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wobos_core::SubstructureKind;

    #[test]
    fn test_fixed_route_is_spacing_plus_two_risers() {
        let config = PlantConfig::default();
        let layout = evaluate(&config);
        assert_eq!(layout.section_route_m, 9.0 * 120.0 + 60.0);
        assert!((layout.system_angle_deg - (18.743 - 0.141)).abs() < 1e-12);
    }

    #[test]
    fn test_floating_route_uses_catenaries() {
        let mut config = PlantConfig::default();
        config.variants.substructure = SubstructureKind::Semisubmersible;
        config.site.water_depth_m = 200.0;
        let layout = evaluate(&config);

        assert!(layout.free_hanging_m > 200.0 * 1.04 + 190.0);
        assert_eq!(
            layout.section_route_m,
            2.0 * layout.free_hanging_m + layout.sea_floor_m
        );
        let offset = layout.catenary_offset(200.0);
        assert!((layout.sea_floor_m - (1080.0 - offset)).abs() < 1e-9);
    }
}
