use crate::battle::resolver::{resolve, ActionProvider, BattleReport};
use crate::battle::state::Outcome;
use crate::errors::StadiumResult;
use crate::trainer::Trainer;
use tracing::debug;

/// The arena: two trainers and the running score between them.
#[derive(Debug)]
pub struct Stadium {
    trainers: [Trainer; 2],
    wins: [u32; 2],
}

impl Stadium {
    pub fn new(trainer1: Trainer, trainer2: Trainer) -> Self {
        Stadium {
            trainers: [trainer1, trainer2],
            wins: [0, 0],
        }
    }

    pub fn trainer(&self, index: usize) -> &Trainer {
        &self.trainers[index]
    }

    pub fn trainer_mut(&mut self, index: usize) -> &mut Trainer {
        &mut self.trainers[index]
    }

    /// Battles won so far, in trainer order.
    pub fn score(&self) -> [u32; 2] {
        self.wins
    }

    /// Pit one named combatant from each trainer's roster against the
    /// other and record the winner. Both combatants stay rostered; the
    /// loser just comes back with zero health.
    pub fn battle<P: ActionProvider + ?Sized>(
        &mut self,
        name1: &str,
        name2: &str,
        provider: &mut P,
    ) -> StadiumResult<BattleReport> {
        let [trainer1, trainer2] = &mut self.trainers;
        let first = trainer1.send_to_battle(name1)?;
        let second = trainer2.send_to_battle(name2)?;

        let report = resolve(first, second, provider)?;

        match report.outcome {
            Outcome::FirstWins => self.wins[0] += 1,
            Outcome::SecondWins => self.wins[1] += 1,
        }
        if let Ok(json) = serde_json::to_string(&report) {
            debug!(report = %json, "battle resolved");
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::state::{BattleAction, BattleSide};
    use crate::combatant::Combatant;
    use crate::errors::{RosterError, StadiumError};
    use pretty_assertions::assert_eq;
    use schema::ElementKind;

    fn stadium_with_single_combatants() -> Stadium {
        let mut red = Trainer::new("Red");
        red.add_combatant(Combatant::with_name("Flareon", ElementKind::Fire).unwrap())
            .unwrap();
        let mut blue = Trainer::new("Blue");
        blue.add_combatant(Combatant::with_name("Lapras", ElementKind::Water).unwrap())
            .unwrap();
        Stadium::new(red, blue)
    }

    #[test]
    fn battle_updates_the_winning_trainers_score() {
        let mut stadium = stadium_with_single_combatants();
        let mut provider = |_: BattleSide, _: &Combatant| BattleAction::Attack;

        let report = stadium.battle("Flareon", "Lapras", &mut provider).unwrap();

        assert_eq!(report.outcome, Outcome::FirstWins);
        assert_eq!(stadium.score(), [1, 0]);
        // The fainted combatant is still rostered.
        assert_eq!(
            stadium
                .trainer_mut(1)
                .send_to_battle("Lapras")
                .unwrap()
                .get_health(),
            0
        );
    }

    #[test]
    fn battle_with_an_unknown_name_leaves_the_score_alone() {
        let mut stadium = stadium_with_single_combatants();
        let mut provider = |_: BattleSide, _: &Combatant| BattleAction::Attack;

        let err = stadium
            .battle("Missingno", "Lapras", &mut provider)
            .unwrap_err();
        assert_eq!(
            err,
            StadiumError::Roster(RosterError::NotFound("Missingno".to_string()))
        );
        assert_eq!(stadium.score(), [0, 0]);
    }
}
