use crate::battle::resolver::resolve;
use crate::battle::state::{BattleAction, BattleEvent, BattleSide, Outcome};
use crate::battle::tests::common::combatant;
use crate::combatant::Combatant;
use pretty_assertions::assert_eq;
use schema::ElementKind;

/// The round loop has no cap, so a pairing where every action bounces off
/// the defender's guard would spin forever. This pins down that the loop
/// does run through such dead rounds and still terminates the moment the
/// provider starts forcing net damage.
#[test]
fn stalemate_rounds_end_once_net_damage_returns() {
    let mut fire = combatant("Vulpix", ElementKind::Fire);
    let mut water = combatant("Squirtle", ElementKind::Water);

    // Specials deal nothing in this pairing: Fire's 30 meets defend 35 and
    // Water's 20 meets defend 30. After three scripted stalemate rounds the
    // provider switches both sides to plain attacks.
    let mut turns = 0;
    let mut provider = |_: BattleSide, _: &Combatant| {
        turns += 1;
        if turns <= 6 {
            BattleAction::SpecialAbility
        } else {
            BattleAction::Attack
        }
    };

    let report = resolve(&mut fire, &mut water, &mut provider).unwrap();

    // Three wasted rounds, then four rounds of 30 damage fell Squirtle.
    assert_eq!(report.outcome, Outcome::FirstWins);
    assert_eq!(report.rounds, 7);

    let zero_damage_turns = report
        .events
        .iter()
        .filter(|event| matches!(event, BattleEvent::DamageDealt { damage: 0, .. }))
        .count();
    assert_eq!(zero_damage_turns, 6, "both sides whiffed for three rounds");

    // Health only ever moved during the attack rounds.
    assert_eq!(water.get_health(), 0);
    assert_eq!(fire.get_health(), 100 - 3 * 10);
}
