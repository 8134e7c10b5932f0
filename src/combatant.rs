use crate::battle::state::StadiumRng;
use crate::errors::{CombatantError, CombatantResult};
use schema::{ElementKind, KindStats};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tracing::warn;

/// Every combatant enters play with this much health. Healing may push
/// health past it; damage never takes it below zero.
pub const STARTING_HEALTH: i32 = 100;

/// Kind-specific combat stats, fixed at construction.
///
/// The set of kinds is closed, so battle math dispatches by pattern match
/// instead of an open trait hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementStats {
    Fire {
        attack_power: i32,
        defend_power: i32,
        burn_damage: i32,
    },
    Water {
        attack_power: i32,
        defend_power: i32,
        splash_resistance: i32,
    },
    Grass {
        attack_power: i32,
        defend_power: i32,
        entangle: i32,
    },
}

impl ElementStats {
    /// Build the stat block for a kind from the shared base-stat table.
    pub fn from_kind(kind: ElementKind) -> Self {
        let KindStats {
            attack_power,
            defend_power,
            tertiary_power,
        } = kind.base_stats();
        match kind {
            ElementKind::Fire => ElementStats::Fire {
                attack_power,
                defend_power,
                burn_damage: tertiary_power,
            },
            ElementKind::Water => ElementStats::Water {
                attack_power,
                defend_power,
                splash_resistance: tertiary_power,
            },
            ElementKind::Grass => ElementStats::Grass {
                attack_power,
                defend_power,
                entangle: tertiary_power,
            },
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            ElementStats::Fire { .. } => ElementKind::Fire,
            ElementStats::Water { .. } => ElementKind::Water,
            ElementStats::Grass { .. } => ElementKind::Grass,
        }
    }

    pub fn attack_power(&self) -> i32 {
        match *self {
            ElementStats::Fire { attack_power, .. }
            | ElementStats::Water { attack_power, .. }
            | ElementStats::Grass { attack_power, .. } => attack_power,
        }
    }

    pub fn defend_power(&self) -> i32 {
        match *self {
            ElementStats::Fire { defend_power, .. }
            | ElementStats::Water { defend_power, .. }
            | ElementStats::Grass { defend_power, .. } => defend_power,
        }
    }

    /// The kind-specific stat: burn damage, splash resistance, or entangle.
    pub fn tertiary_power(&self) -> i32 {
        match *self {
            ElementStats::Fire { burn_damage, .. } => burn_damage,
            ElementStats::Water {
                splash_resistance, ..
            } => splash_resistance,
            ElementStats::Grass { entangle, .. } => entangle,
        }
    }
}

/// A named creature with mutable health and fixed kind-specific stats.
///
/// Name and stats are immutable after construction; health changes only
/// through [`Combatant::heal`] and [`Combatant::reduce_health`]. Ordering
/// and equality are by name alone, which is what the roster sorts on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    name: String,
    health: i32,
    stats: ElementStats,
}

impl Combatant {
    /// Create a combatant with an explicit name and the given kind's stats.
    pub fn with_name(name: impl Into<String>, kind: ElementKind) -> CombatantResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CombatantError::EmptyName);
        }
        Ok(Combatant {
            name,
            health: STARTING_HEALTH,
            stats: ElementStats::from_kind(kind),
        })
    }

    /// Create a combatant of the given kind with a name drawn from the
    /// kind's fixed pool. Repeats across a roster are allowed.
    pub fn generate(kind: ElementKind, rng: &mut StadiumRng) -> Self {
        let pool = kind.name_pool();
        let index = rng.next_index(pool.len(), "combatant name");
        Combatant {
            name: pool[index].to_string(),
            health: STARTING_HEALTH,
            stats: ElementStats::from_kind(kind),
        }
    }

    /// Create a combatant of a uniformly random kind.
    pub fn random(rng: &mut StadiumRng) -> Self {
        let kind = match rng.next_index(3, "element kind") {
            0 => ElementKind::Fire,
            1 => ElementKind::Water,
            _ => ElementKind::Grass,
        };
        Self::generate(kind, rng)
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_health(&self) -> i32 {
        self.health
    }

    pub fn kind(&self) -> ElementKind {
        self.stats.kind()
    }

    pub fn stats(&self) -> &ElementStats {
        &self.stats
    }

    /// Offensive output for a plain attack. Fire adds burn damage on top of
    /// its attack power; the other kinds attack with attack power alone.
    ///
    /// A non-positive stat can't occur after construction but is still
    /// checked: the fault is logged and the attack degrades to zero so the
    /// match keeps going.
    pub fn attack(&self) -> i32 {
        let result = match self.stats {
            ElementStats::Fire {
                attack_power,
                burn_damage,
                ..
            } => self
                .guard_stat("attack power", attack_power)
                .and_then(|attack| {
                    self.guard_stat("burn damage", burn_damage)
                        .map(|burn| attack + burn)
                }),
            ElementStats::Water { attack_power, .. } | ElementStats::Grass { attack_power, .. } => {
                self.guard_stat("attack power", attack_power)
            }
        };
        self.degrade_on_fault(result, "attack")
    }

    /// Mitigation value subtracted from incoming offense.
    pub fn defend(&self) -> i32 {
        let result = self.guard_stat("defend power", self.stats.defend_power());
        self.degrade_on_fault(result, "defend")
    }

    /// Kind-specific secondary value: double burn damage for Fire, splash
    /// resistance for Water, entangle for Grass. The resolver feeds it into
    /// the same damage formula as [`Combatant::attack`].
    pub fn special_ability(&self) -> i32 {
        let result = match self.stats {
            ElementStats::Fire { burn_damage, .. } => self
                .guard_stat("burn damage", burn_damage)
                .map(|burn| burn * 2),
            ElementStats::Water {
                splash_resistance, ..
            } => self.guard_stat("splash resistance", splash_resistance),
            ElementStats::Grass { entangle, .. } => self.guard_stat("entangle power", entangle),
        };
        self.degrade_on_fault(result, "special ability")
    }

    /// Restore a random amount of health in `[10, 20]`. There is no upper
    /// clamp, so healing can push health past the starting value. Returns
    /// the new health.
    pub fn heal(&mut self, rng: &mut StadiumRng) -> i32 {
        let amount = rng.next_in_range(10, 20, "heal amount");
        self.health += amount;
        self.health
    }

    /// Subtract damage from health, clamping at zero.
    pub fn reduce_health(&mut self, damage: i32) {
        self.health -= damage;
        if self.health < 0 {
            self.health = 0;
        }
    }

    pub fn is_fainted(&self) -> bool {
        self.health == 0
    }

    fn guard_stat(&self, stat: &'static str, value: i32) -> CombatantResult<i32> {
        if value <= 0 {
            return Err(CombatantError::InvalidStat {
                combatant: self.name.clone(),
                stat,
                value,
            });
        }
        Ok(value)
    }

    fn degrade_on_fault(&self, result: CombatantResult<i32>, action: &str) -> i32 {
        match result {
            Ok(value) => value,
            Err(err) => {
                warn!(combatant = %self.name, action, %err, "action degraded to zero");
                0
            }
        }
    }
}

// Roster ordering is by name alone, independent of kind and stats.
impl PartialEq for Combatant {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Combatant {}

impl PartialOrd for Combatant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Combatant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Pokemon: {}", self.kind(), self.name)?;
        writeln!(f, "Health: {}", self.health)?;
        writeln!(f, "Attack Power: {}", self.stats.attack_power())?;
        writeln!(f, "Defend Power: {}", self.stats.defend_power())?;
        write!(
            f,
            "{}: {}",
            self.kind().tertiary_label(),
            self.stats.tertiary_power()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(ElementKind::Fire, 50, 30, 15)]
    #[case(ElementKind::Water, 40, 35, 20)]
    #[case(ElementKind::Grass, 45, 25, 15)]
    fn stat_table_per_kind(
        #[case] kind: ElementKind,
        #[case] attack: i32,
        #[case] defend: i32,
        #[case] tertiary: i32,
    ) {
        let combatant = Combatant::with_name("Test", kind).unwrap();
        assert_eq!(combatant.stats().attack_power(), attack);
        assert_eq!(combatant.stats().defend_power(), defend);
        assert_eq!(combatant.stats().tertiary_power(), tertiary);
        assert_eq!(combatant.get_health(), STARTING_HEALTH);
    }

    #[rstest]
    #[case(ElementKind::Fire, 65, 30, 30)] // attack + burn, defend, 2x burn
    #[case(ElementKind::Water, 40, 35, 20)]
    #[case(ElementKind::Grass, 45, 25, 15)]
    fn action_values_per_kind(
        #[case] kind: ElementKind,
        #[case] attack: i32,
        #[case] defend: i32,
        #[case] special: i32,
    ) {
        let combatant = Combatant::with_name("Test", kind).unwrap();
        assert_eq!(combatant.attack(), attack);
        assert_eq!(combatant.defend(), defend);
        assert_eq!(combatant.special_ability(), special);
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(
            Combatant::with_name("", ElementKind::Fire),
            Err(CombatantError::EmptyName)
        );
    }

    #[test]
    fn reduce_health_clamps_at_zero() {
        let mut combatant = Combatant::with_name("Flareon", ElementKind::Fire).unwrap();
        combatant.reduce_health(40);
        assert_eq!(combatant.get_health(), 60);
        combatant.reduce_health(1000);
        assert_eq!(combatant.get_health(), 0);
        assert!(combatant.is_fainted());
        combatant.reduce_health(0);
        assert_eq!(combatant.get_health(), 0);
    }

    #[test]
    fn heal_adds_between_ten_and_twenty() {
        // Scripted rolls hit both ends of the percentile range.
        let mut rng = StadiumRng::new_for_test(vec![1, 100, 50]);
        let mut combatant = Combatant::with_name("Lapras", ElementKind::Water).unwrap();
        for _ in 0..3 {
            let before = combatant.get_health();
            let after = combatant.heal(&mut rng);
            assert_eq!(after, combatant.get_health());
            let gained = after - before;
            assert!((10..=20).contains(&gained), "healed by {gained}");
        }
    }

    #[test]
    fn heal_has_no_upper_clamp() {
        let mut rng = StadiumRng::new_for_test(vec![100]);
        let mut combatant = Combatant::with_name("Oddish", ElementKind::Grass).unwrap();
        let after = combatant.heal(&mut rng);
        assert!(after > STARTING_HEALTH);
    }

    #[test]
    fn ordering_and_equality_use_name_only() {
        let aqua = Combatant::with_name("Aqua", ElementKind::Water).unwrap();
        let ember = Combatant::with_name("Ember", ElementKind::Fire).unwrap();
        let ember_grass = Combatant::with_name("Ember", ElementKind::Grass).unwrap();
        assert!(aqua < ember);
        assert!(ember > aqua);
        assert_eq!(ember, ember_grass);
    }

    #[test]
    fn generate_draws_from_the_kind_pool() {
        let mut rng = StadiumRng::new_for_test(vec![1, 33, 66, 99, 100]);
        for _ in 0..5 {
            let combatant = Combatant::generate(ElementKind::Water, &mut rng);
            assert!(schema::WATER_NAMES.contains(&combatant.get_name()));
            assert_eq!(combatant.kind(), ElementKind::Water);
        }
    }

    #[test]
    fn random_covers_all_kinds() {
        // Rolls chosen to land on each third of the percentile range.
        let mut rng = StadiumRng::new_for_test(vec![1, 1, 40, 1, 80, 1]);
        let kinds: Vec<ElementKind> = (0..3).map(|_| Combatant::random(&mut rng).kind()).collect();
        assert_eq!(
            kinds,
            vec![ElementKind::Fire, ElementKind::Water, ElementKind::Grass]
        );
    }

    #[test]
    fn corrupted_stat_degrades_action_to_zero() {
        let combatant = Combatant {
            name: "Glitch".to_string(),
            health: STARTING_HEALTH,
            stats: ElementStats::Fire {
                attack_power: 0,
                defend_power: 30,
                burn_damage: 15,
            },
        };
        assert_eq!(combatant.attack(), 0);
        assert_eq!(combatant.defend(), 30);
    }
}
