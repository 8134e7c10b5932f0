use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// The three elemental kinds a combatant can be. The set is closed: battle
/// dispatch pattern-matches on it and never extends at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum ElementKind {
    Fire,
    Water,
    Grass,
}

/// Fixed construction-time stats for one elemental kind.
///
/// `tertiary_power` is the kind-specific stat: burn damage for Fire, splash
/// resistance for Water, entangle for Grass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindStats {
    pub attack_power: i32,
    pub defend_power: i32,
    pub tertiary_power: i32,
}

/// Names a freshly generated Fire combatant can receive.
pub const FIRE_NAMES: [&str; 5] = ["Charmander", "Vulpix", "Flareon", "Torchic", "Ponyta"];

/// Names a freshly generated Water combatant can receive.
pub const WATER_NAMES: [&str; 5] = ["Squirtle", "Psyduck", "Lapras", "Vaporeon", "Totodile"];

/// Names a freshly generated Grass combatant can receive.
pub const GRASS_NAMES: [&str; 5] = ["Bulbasaur", "Chikorita", "Leafeon", "Turtwig", "Oddish"];

impl ElementKind {
    /// Base stat table, fixed at construction for every combatant of a kind.
    pub const fn base_stats(self) -> KindStats {
        match self {
            ElementKind::Fire => KindStats {
                attack_power: 50,
                defend_power: 30,
                tertiary_power: 15,
            },
            ElementKind::Water => KindStats {
                attack_power: 40,
                defend_power: 35,
                tertiary_power: 20,
            },
            ElementKind::Grass => KindStats {
                attack_power: 45,
                defend_power: 25,
                tertiary_power: 15,
            },
        }
    }

    /// The fixed five-entry pool names are drawn from at generation time.
    pub const fn name_pool(self) -> &'static [&'static str; 5] {
        match self {
            ElementKind::Fire => &FIRE_NAMES,
            ElementKind::Water => &WATER_NAMES,
            ElementKind::Grass => &GRASS_NAMES,
        }
    }

    /// Human-readable label for the kind-specific stat.
    pub const fn tertiary_label(self) -> &'static str {
        match self {
            ElementKind::Fire => "Burn Damage",
            ElementKind::Water => "Splash Resistance",
            ElementKind::Grass => "Entangle Power",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
