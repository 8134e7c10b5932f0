use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress of a single battle. `Ongoing` until one side faints, then the
/// matching terminal state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Ongoing,
    FirstWins,
    SecondWins,
}

impl GameState {
    /// The terminal outcome, if the battle has reached one.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameState::Ongoing => None,
            GameState::FirstWins => Some(Outcome::FirstWins),
            GameState::SecondWins => Some(Outcome::SecondWins),
        }
    }
}

/// Terminal result of a resolved battle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    FirstWins,
    SecondWins,
}

/// Which of the two combatants is acting.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleSide {
    First,
    Second,
}

impl fmt::Display for BattleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleSide::First => write!(f, "first"),
            BattleSide::Second => write!(f, "second"),
        }
    }
}

/// The two actions a side can take on its turn. Both produce an offensive
/// value fed through the same damage formula.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleAction {
    Attack,
    SpecialAbility,
}

/// Everything observable that happens during battle resolution, in order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    BattleStarted {
        first: String,
        first_health: i32,
        second: String,
        second_health: i32,
    },
    RoundStarted {
        round: u32,
    },
    ActionTaken {
        side: BattleSide,
        combatant: String,
        action: BattleAction,
        power: i32,
    },
    DamageDealt {
        target: String,
        damage: i32,
        remaining_health: i32,
    },
    Fainted {
        combatant: String,
    },
    BattleEnded {
        outcome: Outcome,
        winner: String,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable battle-log line.
    pub fn format(&self) -> String {
        match self {
            BattleEvent::BattleStarted {
                first,
                first_health,
                second,
                second_health,
            } => format!(
                "{} (Health: {}) vs. {} (Health: {})",
                first, first_health, second, second_health
            ),
            BattleEvent::RoundStarted { round } => format!("--- Round {} ---", round),
            BattleEvent::ActionTaken {
                combatant, action, ..
            } => match action {
                BattleAction::Attack => format!("{} attacks!", combatant),
                BattleAction::SpecialAbility => {
                    format!("{} uses its special ability!", combatant)
                }
            },
            BattleEvent::DamageDealt {
                target,
                damage,
                remaining_health,
            } => format!(
                "{} took {} damage! (Remaining Health: {})",
                target, damage, remaining_health
            ),
            BattleEvent::Fainted { combatant } => format!("{} fainted!", combatant),
            BattleEvent::BattleEnded { winner, .. } => {
                format!("{} wins the battle!", winner)
            }
        }
    }
}

/// Ordered collector for the events a battle produces.
#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }
}

/// Source of every random decision in the system: element kinds, pool
/// names, and heal amounts all consume percentile rolls from here.
///
/// Tests script the rolls with [`StadiumRng::new_for_test`]; production
/// code uses [`StadiumRng::new_random`], which refills itself when a batch
/// of rolls runs out.
#[derive(Debug, Clone)]
pub struct StadiumRng {
    outcomes: Vec<u8>,
    index: usize,
    refill: bool,
}

impl StadiumRng {
    /// A scripted source that yields exactly `outcomes` (each in 1..=100)
    /// and panics when exhausted, so a test never silently consumes more
    /// randomness than it accounted for.
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self {
            outcomes,
            index: 0,
            refill: false,
        }
    }

    pub fn new_random() -> Self {
        Self {
            outcomes: Self::random_batch(),
            index: 0,
            refill: true,
        }
    }

    fn random_batch() -> Vec<u8> {
        use rand::Rng;
        let mut rng = rand::rng();
        (0..100).map(|_| rng.random_range(1..=100)).collect()
    }

    /// The next percentile roll in 1..=100.
    pub fn next_outcome(&mut self, reason: &str) -> u8 {
        if self.index >= self.outcomes.len() {
            if !self.refill {
                panic!(
                    "StadiumRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                    reason
                );
            }
            self.outcomes = Self::random_batch();
            self.index = 0;
        }
        let outcome = self.outcomes[self.index];

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);

        self.index += 1;
        outcome
    }

    /// Map the next roll onto `[min, max]` inclusive.
    pub fn next_in_range(&mut self, min: i32, max: i32, reason: &str) -> i32 {
        assert!(min <= max, "empty range {}..={} for '{}'", min, max, reason);
        let span = (max - min + 1) as i64;
        let roll = (self.next_outcome(reason) - 1) as i64;
        min + (roll * span / 100) as i32
    }

    /// Map the next roll onto an index in `0..len`.
    pub fn next_index(&mut self, len: usize, reason: &str) -> usize {
        assert!(len > 0, "empty choice for '{}'", reason);
        let roll = (self.next_outcome(reason) - 1) as usize;
        roll * len / 100
    }
}
