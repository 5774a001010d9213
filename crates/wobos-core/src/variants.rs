//! Categorical configuration axes.
//!
//! Each axis is a closed enumeration. Formulas that branch on an axis match on
//! these types directly, so adding a variant is a compile error everywhere a
//! branch is missing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::WobosError;

/// Foundation type supporting each turbine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstructureKind {
    #[default]
    Monopile,
    Jacket,
    Spar,
    Semisubmersible,
}

impl SubstructureKind {
    pub const ALL: [SubstructureKind; 4] = [
        SubstructureKind::Monopile,
        SubstructureKind::Jacket,
        SubstructureKind::Spar,
        SubstructureKind::Semisubmersible,
    ];

    /// Spar and semisubmersible plants float and are moored.
    pub fn is_floating(self) -> bool {
        matches!(self, SubstructureKind::Spar | SubstructureKind::Semisubmersible)
    }

    /// Monopile and jacket plants sit on the sea floor.
    pub fn is_fixed(self) -> bool {
        !self.is_floating()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SubstructureKind::Monopile => "monopile",
            SubstructureKind::Jacket => "jacket",
            SubstructureKind::Spar => "spar",
            SubstructureKind::Semisubmersible => "semisubmersible",
        }
    }
}

/// Mooring anchor type. Only consulted for floating substructures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    #[default]
    DragEmbedment,
    SuctionPile,
}

impl AnchorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AnchorKind::DragEmbedment => "drag_embedment",
            AnchorKind::SuctionPile => "suction_pile",
        }
    }
}

/// How turbines and substructures reach the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallStrategy {
    /// The installation vessel shuttles its own cargo from port.
    #[default]
    PrimaryVessel,
    /// Feeder barges shuttle cargo while the installation vessel stays on site.
    FeederBarge,
}

impl InstallStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            InstallStrategy::PrimaryVessel => "primary_vessel",
            InstallStrategy::FeederBarge => "feeder_barge",
        }
    }
}

/// Rotor assembly method used offshore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurbineAssembly {
    /// Nacelle and three blades lifted separately.
    #[default]
    Individual,
    /// Nacelle pre-fitted with two blades, third blade lifted separately.
    BunnyEars,
    /// Rotor assembled onshore and lifted in one piece.
    RotorAssembled,
}

impl TurbineAssembly {
    pub fn as_str(self) -> &'static str {
        match self {
            TurbineAssembly::Individual => "individual",
            TurbineAssembly::BunnyEars => "bunny_ears",
            TurbineAssembly::RotorAssembled => "rotor_assembled",
        }
    }
}

/// Tower assembly method used offshore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TowerAssembly {
    #[default]
    OnePiece,
    TwoPiece,
}

impl TowerAssembly {
    pub fn as_str(self) -> &'static str {
        match self {
            TowerAssembly::OnePiece => "one_piece",
            TowerAssembly::TwoPiece => "two_piece",
        }
    }
}

macro_rules! impl_tag_parsing {
    ($type:ty, $field:literal) => {
        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $type {
            type Err = WobosError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
                serde_json::from_value(serde_json::Value::String(normalized)).map_err(|_| {
                    WobosError::validation($field, format!("unrecognized variant tag '{s}'"))
                })
            }
        }
    };
}

impl_tag_parsing!(SubstructureKind, "variants.substructure");
impl_tag_parsing!(AnchorKind, "variants.anchor");
impl_tag_parsing!(InstallStrategy, "variants.install_strategy");
impl_tag_parsing!(TurbineAssembly, "variants.turbine_assembly");
impl_tag_parsing!(TowerAssembly, "variants.tower_assembly");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floating_split() {
        assert!(SubstructureKind::Spar.is_floating());
        assert!(SubstructureKind::Semisubmersible.is_floating());
        assert!(SubstructureKind::Monopile.is_fixed());
        assert!(SubstructureKind::Jacket.is_fixed());
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            "Semisubmersible".parse::<SubstructureKind>().unwrap(),
            SubstructureKind::Semisubmersible
        );
        assert_eq!(
            "suction-pile".parse::<AnchorKind>().unwrap(),
            AnchorKind::SuctionPile
        );
        assert_eq!(
            "feeder_barge".parse::<InstallStrategy>().unwrap(),
            InstallStrategy::FeederBarge
        );
    }

    #[test]
    fn test_unrecognized_tag_names_field() {
        let err = "tripod".parse::<SubstructureKind>().unwrap_err();
        assert_eq!(err.field(), Some("variants.substructure"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for kind in SubstructureKind::ALL {
            assert_eq!(kind.to_string().parse::<SubstructureKind>().unwrap(), kind);
        }
    }
}
