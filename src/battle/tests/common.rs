use crate::combatant::{Combatant, STARTING_HEALTH};
use schema::ElementKind;

/// Build a named combatant for battle tests.
pub fn combatant(name: &str, kind: ElementKind) -> Combatant {
    Combatant::with_name(name, kind).expect("test combatant name is non-empty")
}

/// Build a named combatant and knock its health down to `health`. Health
/// only moves through the public mutators, so the builder damages the
/// fresh combatant instead of poking fields.
pub fn combatant_with_health(name: &str, kind: ElementKind, health: i32) -> Combatant {
    let mut combatant = combatant(name, kind);
    combatant.reduce_health(STARTING_HEALTH - health);
    combatant
}
