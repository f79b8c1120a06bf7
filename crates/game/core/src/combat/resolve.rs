//! Half-round resolution from the mover's point of view.

use crate::action::Action;
use crate::state::ActorState;

/// What a single [`resolve`] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Offense connected; `other` lost `damage` vitality.
    Landed { damage: i32 },
    /// Offense met a defense; the mover lost `damage` vitality.
    Reflected { damage: i32 },
    /// Mover spent a guard.
    Guarded,
    /// Nothing happened.
    Idle,
}

impl Effect {
    /// Vitality lost by the mover in this half.
    pub const fn mover_loss(self) -> i32 {
        match self {
            Effect::Reflected { damage } => damage,
            _ => 0,
        }
    }

    /// Vitality lost by the other side in this half.
    pub const fn other_loss(self) -> i32 {
        match self {
            Effect::Landed { damage } => damage,
            _ => 0,
        }
    }
}

/// Resolves `mover_action` against `other_action`.
///
/// Only the mover's resources are spent, and exactly one side can lose
/// vitality:
///
/// - Offense against defense reflects the damage onto the mover.
/// - Offense against anything else lands on `other`.
/// - Either way the mover's counter for that tier drops by one.
/// - Defense spends one of the mover's guards.
/// - No-op changes nothing.
///
/// A full round needs a second call with the roles swapped against the same
/// pair of actions; see [`resolve_round`](super::resolve_round).
///
/// Actions are expected to be legal for `mover`. Counters saturate at zero
/// rather than wrap if they are not.
pub fn resolve(
    mover: &mut ActorState,
    other: &mut ActorState,
    mover_action: Action,
    other_action: Action,
) -> Effect {
    match mover_action {
        Action::Offense(tier) => {
            let damage = tier.damage();
            let slot = &mut mover.offense_uses[tier.index()];
            *slot = slot.saturating_sub(1);

            if other_action.is_defense() {
                mover.vitality -= damage;
                Effect::Reflected { damage }
            } else {
                other.vitality -= damage;
                Effect::Landed { damage }
            }
        }
        Action::Defense => {
            mover.guards = mover.guards.saturating_sub(1);
            Effect::Guarded
        }
        Action::NoOp => Effect::Idle,
    }
}
