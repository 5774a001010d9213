//! Vessel specifications and the reference fleets.
//!
//! Every vessel taking part in installation is described by one [`VesselSpec`].
//! The fleet groups them by role; the installation model reads the role it
//! needs and the mobilization ledger pools them by [`VesselSpec::id`], so a
//! vessel listed under several roles with the same id is mobilized once.

use serde::{Deserialize, Serialize};

use crate::variants::SubstructureKind;

/// Named attributes of a single vessel type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselSpec {
    /// Identifier used to deduplicate mobilization across phases.
    pub id: u32,
    pub name: String,
    pub length_m: f64,
    pub breadth_m: f64,
    /// Leg jacking speed (m/min). Only meaningful for jack-ups.
    pub jacking_speed_m_per_min: f64,
    pub deck_area_m2: f64,
    pub max_payload_t: f64,
    pub transit_speed_knots: f64,
    /// Operating cost ($/day).
    pub day_rate: f64,
    /// Days charged for mobilization plus demobilization.
    pub mobilization_days: f64,
    /// Number of identical vessels deployed.
    pub quantity: u32,
    /// Speed when towing a floating substructure (knots).
    pub tow_speed_knots: f64,
    /// Cable carousel capacity (t).
    pub cable_capacity_t: f64,
}

impl Default for VesselSpec {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            length_m: 0.0,
            breadth_m: 0.0,
            jacking_speed_m_per_min: 0.0,
            deck_area_m2: 0.0,
            max_payload_t: 0.0,
            transit_speed_knots: 10.0,
            day_rate: 0.0,
            mobilization_days: 0.0,
            quantity: 1,
            tow_speed_knots: 0.0,
            cable_capacity_t: 0.0,
        }
    }
}

impl VesselSpec {
    fn named(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Plan-view footprint (m²), used for port entrance fees.
    pub fn footprint_m2(&self) -> f64 {
        self.length_m * self.breadth_m
    }

    /// One mobilization/demobilization of every unit of this vessel.
    pub fn mobilization_cost(&self) -> f64 {
        self.day_rate * self.mobilization_days * f64::from(self.quantity)
    }

    /// Cost of keeping every unit of this vessel on hire for `days`.
    pub fn hire_cost(&self, days: f64) -> f64 {
        self.day_rate * f64::from(self.quantity) * days
    }
}

/// All vessels used to build one plant, grouped by role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselFleet {
    pub turbine_install: VesselSpec,
    pub substructure_install: VesselSpec,
    pub turbine_feeder: VesselSpec,
    pub substructure_feeder: VesselSpec,
    pub array_cable: VesselSpec,
    pub export_cable: VesselSpec,
    pub substation_install: VesselSpec,
    pub scour_protection: VesselSpec,
    pub tugs: Vec<VesselSpec>,
    pub turbine_support: Vec<VesselSpec>,
    pub substructure_support: Vec<VesselSpec>,
    pub electrical_support: Vec<VesselSpec>,
}

impl Default for VesselFleet {
    fn default() -> Self {
        Self::fixed_bottom()
    }
}

impl VesselFleet {
    /// Reference fleet for the given substructure.
    ///
    /// Fixed-bottom plants are built from jack-ups; floating plants swap the
    /// turbine and substructure roles for heavy-lift and anchor-handling
    /// vessels that tow units to site.
    pub fn for_substructure(kind: SubstructureKind) -> Self {
        if kind.is_floating() {
            Self::floating()
        } else {
            Self::fixed_bottom()
        }
    }

    fn fixed_bottom() -> Self {
        Self {
            turbine_install: VesselSpec {
                length_m: 132.0,
                breadth_m: 39.0,
                jacking_speed_m_per_min: 0.5,
                deck_area_m2: 3600.0,
                max_payload_t: 8000.0,
                transit_speed_knots: 11.0,
                day_rate: 180_000.0,
                mobilization_days: 7.0,
                tow_speed_knots: 6.0,
                ..VesselSpec::named(1, "turbine installation jack-up")
            },
            substructure_install: VesselSpec {
                length_m: 147.0,
                breadth_m: 42.0,
                jacking_speed_m_per_min: 0.5,
                deck_area_m2: 4000.0,
                max_payload_t: 8000.0,
                transit_speed_knots: 10.0,
                day_rate: 250_000.0,
                mobilization_days: 7.0,
                tow_speed_knots: 6.0,
                ..VesselSpec::named(2, "heavy-lift jack-up")
            },
            turbine_feeder: Self::feeder_barge(3, "turbine feeder barge"),
            substructure_feeder: Self::feeder_barge(4, "substructure feeder barge"),
            array_cable: VesselSpec {
                length_m: 100.0,
                breadth_m: 24.0,
                transit_speed_knots: 11.0,
                day_rate: 110_000.0,
                mobilization_days: 5.0,
                cable_capacity_t: 2500.0,
                ..VesselSpec::named(5, "array cable lay vessel")
            },
            export_cable: VesselSpec {
                length_m: 120.0,
                breadth_m: 28.0,
                transit_speed_knots: 11.0,
                day_rate: 140_000.0,
                mobilization_days: 7.0,
                cable_capacity_t: 6000.0,
                ..VesselSpec::named(6, "export cable lay vessel")
            },
            substation_install: Self::substation_vessel(),
            scour_protection: VesselSpec {
                length_m: 90.0,
                breadth_m: 20.0,
                transit_speed_knots: 11.0,
                day_rate: 60_000.0,
                mobilization_days: 3.0,
                ..VesselSpec::named(8, "scour protection vessel")
            },
            tugs: Self::tugs(),
            turbine_support: vec![
                Self::crew_transfer(),
                Self::support(12, "turbine support vessel", 30_000.0, 2.0),
            ],
            substructure_support: vec![
                Self::crew_transfer(),
                Self::support(13, "survey vessel", 35_000.0, 2.0),
            ],
            electrical_support: vec![
                Self::crew_transfer(),
                Self::support(14, "guard vessel", 15_000.0, 1.0),
            ],
        }
    }

    fn floating() -> Self {
        Self {
            turbine_install: VesselSpec {
                length_m: 160.0,
                breadth_m: 49.0,
                deck_area_m2: 4300.0,
                max_payload_t: 10_000.0,
                transit_speed_knots: 10.0,
                day_rate: 300_000.0,
                mobilization_days: 10.0,
                tow_speed_knots: 5.0,
                ..VesselSpec::named(20, "heavy-lift turbine vessel")
            },
            substructure_install: VesselSpec {
                length_m: 90.0,
                breadth_m: 22.0,
                deck_area_m2: 800.0,
                max_payload_t: 2500.0,
                transit_speed_knots: 12.0,
                day_rate: 120_000.0,
                mobilization_days: 5.0,
                tow_speed_knots: 5.0,
                ..VesselSpec::named(21, "anchor handling tug supply vessel")
            },
            turbine_feeder: Self::feeder_barge(22, "turbine feeder barge"),
            substructure_feeder: VesselSpec {
                length_m: 40.0,
                breadth_m: 12.0,
                transit_speed_knots: 10.0,
                day_rate: 30_000.0,
                mobilization_days: 2.0,
                quantity: 2,
                tow_speed_knots: 5.0,
                ..VesselSpec::named(23, "towing tug")
            },
            ..Self::fixed_bottom()
        }
    }

    fn feeder_barge(id: u32, name: &str) -> VesselSpec {
        VesselSpec {
            length_m: 100.0,
            breadth_m: 30.0,
            deck_area_m2: 2000.0,
            max_payload_t: 4000.0,
            transit_speed_knots: 8.0,
            day_rate: 100_000.0,
            mobilization_days: 5.0,
            quantity: 2,
            tow_speed_knots: 6.0,
            ..VesselSpec::named(id, name)
        }
    }

    fn substation_vessel() -> VesselSpec {
        VesselSpec {
            length_m: 183.0,
            breadth_m: 47.0,
            deck_area_m2: 4000.0,
            max_payload_t: 14_000.0,
            transit_speed_knots: 8.0,
            day_rate: 500_000.0,
            mobilization_days: 10.0,
            tow_speed_knots: 5.0,
            ..VesselSpec::named(7, "substation heavy-lift vessel")
        }
    }

    fn tugs() -> Vec<VesselSpec> {
        vec![
            VesselSpec {
                transit_speed_knots: 12.0,
                day_rate: 25_000.0,
                mobilization_days: 2.0,
                tow_speed_knots: 5.0,
                ..VesselSpec::named(9, "ocean-going tug")
            },
            VesselSpec {
                transit_speed_knots: 10.0,
                day_rate: 8_000.0,
                mobilization_days: 1.0,
                tow_speed_knots: 4.0,
                ..VesselSpec::named(10, "line handling tug")
            },
        ]
    }

    fn crew_transfer() -> VesselSpec {
        Self::support(11, "crew transfer vessel", 3_000.0, 1.0)
    }

    fn support(id: u32, name: &str, day_rate: f64, mobilization_days: f64) -> VesselSpec {
        VesselSpec {
            transit_speed_knots: 20.0,
            day_rate,
            mobilization_days,
            ..VesselSpec::named(id, name)
        }
    }

    /// Iterate over every vessel role with a label, in a fixed order.
    pub fn roles(&self) -> Vec<(String, &VesselSpec)> {
        let mut roles = vec![
            ("turbine_install".to_string(), &self.turbine_install),
            ("substructure_install".to_string(), &self.substructure_install),
            ("turbine_feeder".to_string(), &self.turbine_feeder),
            ("substructure_feeder".to_string(), &self.substructure_feeder),
            ("array_cable".to_string(), &self.array_cable),
            ("export_cable".to_string(), &self.export_cable),
            ("substation_install".to_string(), &self.substation_install),
            ("scour_protection".to_string(), &self.scour_protection),
        ];
        let lists = [
            ("tugs", &self.tugs),
            ("turbine_support", &self.turbine_support),
            ("substructure_support", &self.substructure_support),
            ("electrical_support", &self.electrical_support),
        ];
        for (label, list) in lists {
            for (idx, vessel) in list.iter().enumerate() {
                roles.push((format!("{label}[{idx}]"), vessel));
            }
        }
        roles
    }
}
