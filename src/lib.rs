//! Pokemon Stadium Battle Simulator
//!
//! A turn-based battle simulator in which two trainers each own a roster of
//! combatants stored in a binary search tree keyed by name. A stadium pits
//! one combatant from each roster against the other and resolves combat
//! round-by-round until one faints.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod combatant;
pub mod errors;
pub mod roster;
pub mod stadium;
pub mod trainer;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokemon-stadium`
// crate, making it easy for users to import the most important types
// directly.

// --- From the `schema` crate ---
// Re-export the closed elemental-kind enum and its static data tables.
pub use schema::{ElementKind, KindStats, FIRE_NAMES, GRASS_NAMES, WATER_NAMES};

// --- From this crate's modules (`src/`) ---

// Core battle resolution and its observable state.
pub use battle::resolver::{resolve, ActionProvider, BattleReport};
pub use battle::state::{
    BattleAction, BattleEvent, BattleSide, EventBus, GameState, Outcome, StadiumRng,
};

// Core runtime types.
pub use combatant::{Combatant, ElementStats, STARTING_HEALTH};
pub use roster::Roster;
pub use stadium::Stadium;
pub use trainer::{Trainer, MAX_TEAM_SIZE};

// Crate-specific error and result types.
pub use errors::{
    BattleError, BattleResult, CombatantError, CombatantResult, RosterError, RosterResult,
    StadiumError, StadiumResult, TrainerError,
};
