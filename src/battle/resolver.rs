use crate::battle::state::{
    BattleAction, BattleEvent, BattleSide, EventBus, GameState, Outcome,
};
use crate::combatant::Combatant;
use crate::errors::{BattleError, BattleResult};
use serde::Serialize;

/// Capability the caller supplies to pick each side's action for the
/// current turn. The console menu implements this by prompting; tests
/// implement it with closures (any `FnMut(BattleSide, &Combatant) ->
/// BattleAction` works).
pub trait ActionProvider {
    fn choose_action(&mut self, side: BattleSide, combatant: &Combatant) -> BattleAction;
}

impl<F> ActionProvider for F
where
    F: FnMut(BattleSide, &Combatant) -> BattleAction,
{
    fn choose_action(&mut self, side: BattleSide, combatant: &Combatant) -> BattleAction {
        self(side, combatant)
    }
}

/// What a resolved battle produced: the winner, how many rounds it took,
/// and the ordered event log.
#[derive(Debug, Clone, Serialize)]
pub struct BattleReport {
    pub outcome: Outcome,
    pub rounds: u32,
    pub events: Vec<BattleEvent>,
}

/// Run a battle between two combatants until one faints.
///
/// Each round the first combatant acts, then the second. If the first
/// combatant's turn fainted the defender, the round ends immediately and
/// the second side never gets its turn. Damage each turn is
/// `max(0, offensive value - defender's defend())`; the offensive value
/// comes from the attacker's chosen action. Both combatants must enter
/// with positive health or the battle aborts with no winner.
///
/// The loop has no round cap: it ends only when someone faints, so a
/// pairing whose net damage is zero every round will not terminate.
pub fn resolve<P: ActionProvider + ?Sized>(
    first: &mut Combatant,
    second: &mut Combatant,
    provider: &mut P,
) -> BattleResult<BattleReport> {
    if first.get_health() <= 0 {
        return Err(BattleError::CombatantNotReady(first.get_name().to_string()));
    }
    if second.get_health() <= 0 {
        return Err(BattleError::CombatantNotReady(second.get_name().to_string()));
    }

    let mut bus = EventBus::new();
    bus.push(BattleEvent::BattleStarted {
        first: first.get_name().to_string(),
        first_health: first.get_health(),
        second: second.get_name().to_string(),
        second_health: second.get_health(),
    });

    let mut state = GameState::Ongoing;
    let mut rounds = 0;
    let outcome = loop {
        if let Some(outcome) = state.outcome() {
            break outcome;
        }
        rounds += 1;
        bus.push(BattleEvent::RoundStarted { round: rounds });

        if take_turn(BattleSide::First, first, second, provider, &mut bus) {
            state = GameState::FirstWins;
            continue;
        }
        if take_turn(BattleSide::Second, second, first, provider, &mut bus) {
            state = GameState::SecondWins;
        }
    };

    let winner = match outcome {
        Outcome::FirstWins => first.get_name(),
        Outcome::SecondWins => second.get_name(),
    };
    bus.push(BattleEvent::BattleEnded {
        outcome,
        winner: winner.to_string(),
    });

    Ok(BattleReport {
        outcome,
        rounds,
        events: bus.into_events(),
    })
}

/// One side's turn. Returns true when the defender faints from it.
fn take_turn<P: ActionProvider + ?Sized>(
    side: BattleSide,
    attacker: &Combatant,
    defender: &mut Combatant,
    provider: &mut P,
    bus: &mut EventBus,
) -> bool {
    let action = provider.choose_action(side, attacker);
    let power = match action {
        BattleAction::Attack => attacker.attack(),
        BattleAction::SpecialAbility => attacker.special_ability(),
    };
    bus.push(BattleEvent::ActionTaken {
        side,
        combatant: attacker.get_name().to_string(),
        action,
        power,
    });

    let damage = (power - defender.defend()).max(0);
    defender.reduce_health(damage);
    bus.push(BattleEvent::DamageDealt {
        target: defender.get_name().to_string(),
        damage,
        remaining_health: defender.get_health(),
    });

    if defender.is_fainted() {
        bus.push(BattleEvent::Fainted {
            combatant: defender.get_name().to_string(),
        });
        return true;
    }
    false
}
