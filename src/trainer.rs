use crate::battle::state::StadiumRng;
use crate::combatant::Combatant;
use crate::errors::{RosterResult, StadiumResult, TrainerError};
use crate::roster::Roster;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The largest team a trainer can build in one go.
pub const MAX_TEAM_SIZE: usize = 50;

/// One trainer: a display name and the roster of combatants they own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainer {
    name: String,
    roster: Roster,
}

impl Trainer {
    pub fn new(name: impl Into<String>) -> Self {
        Trainer {
            name: name.into(),
            roster: Roster::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Fill the roster with `size` randomly generated combatants (random
    /// kind, random pool name; repeats allowed).
    pub fn build_team(&mut self, size: usize, rng: &mut StadiumRng) -> StadiumResult<()> {
        if size == 0 || size > MAX_TEAM_SIZE {
            return Err(TrainerError::InvalidTeamSize(size).into());
        }
        for _ in 0..size {
            let combatant = Combatant::random(rng);
            info!(trainer = %self.name, combatant = %combatant.get_name(), kind = %combatant.kind(), "recruited");
            self.add_combatant(combatant)?;
        }
        Ok(())
    }

    pub fn add_combatant(&mut self, combatant: Combatant) -> RosterResult<()> {
        self.roster.insert(combatant)
    }

    /// Print the whole team. Returns `false` when the roster is empty.
    pub fn display_team(&self) -> bool {
        println!("{}'s Pokemon Team:", self.name);
        self.roster.display_all()
    }

    /// Release every combatant on the team. Benign when already empty.
    pub fn clear_team(&mut self) {
        self.roster.remove_all();
    }

    /// Fetch a combatant by name for battle. The combatant stays owned by
    /// the roster; the caller mutates it in place through the handle.
    pub fn send_to_battle(&mut self, name: &str) -> RosterResult<&mut Combatant> {
        self.roster.retrieve(name)
    }
}
