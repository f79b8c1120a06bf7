//! Full-round application for the live (non-search) states.

use crate::action::Action;
use crate::state::ActorState;

use super::resolve::{Effect, resolve};

/// Both halves of a resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResolution {
    pub player_action: Action,
    pub engine_action: Action,
    /// Effect of the player's action (player as mover).
    pub player_effect: Effect,
    /// Effect of the engine's action (engine as mover).
    pub engine_effect: Effect,
}

impl RoundResolution {
    /// True if the engine's offense bounced off the player's guard.
    pub const fn engine_reflected(&self) -> bool {
        matches!(self.engine_effect, Effect::Reflected { .. })
    }

    /// True if the player's offense bounced off the engine's guard.
    pub const fn player_reflected(&self) -> bool {
        matches!(self.player_effect, Effect::Reflected { .. })
    }
}

/// Resolves one round for both sides against the same pair of actions.
///
/// The player half is applied first, then the engine half. The halves touch
/// disjoint counters and only subtract vitality, so the order does not change
/// the result.
pub fn resolve_round(
    player: &mut ActorState,
    engine: &mut ActorState,
    player_action: Action,
    engine_action: Action,
) -> RoundResolution {
    let player_effect = resolve(player, engine, player_action, engine_action);
    let engine_effect = resolve(engine, player, engine_action, player_action);

    RoundResolution {
        player_action,
        engine_action,
        player_effect,
        engine_effect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Tier;

    #[test]
    fn trading_blows_charges_both_sides() {
        let mut player = ActorState::player();
        let mut engine = ActorState::engine();

        let round = resolve_round(
            &mut player,
            &mut engine,
            Action::Offense(Tier::One),
            Action::Offense(Tier::Three),
        );

        assert_eq!(player.vitality, 7);
        assert_eq!(engine.vitality, 9);
        assert_eq!(player.remaining_uses(Tier::One), 2);
        assert_eq!(engine.remaining_uses(Tier::Three), 2);
        assert_eq!(round.player_effect, Effect::Landed { damage: 1 });
        assert_eq!(round.engine_effect, Effect::Landed { damage: 3 });
    }

    #[test]
    fn guard_reflects_engine_offense() {
        let mut player = ActorState::player();
        let mut engine = ActorState::engine();

        let round = resolve_round(
            &mut player,
            &mut engine,
            Action::Defense,
            Action::Offense(Tier::Two),
        );

        assert!(round.engine_reflected());
        assert!(!round.player_reflected());
        assert_eq!(player.vitality, 10);
        assert_eq!(player.guards, 1);
        assert_eq!(engine.vitality, 8);
    }

    #[test]
    fn halves_commute() {
        for player_action in Action::CANDIDATES {
            for engine_action in Action::CANDIDATES {
                let (mut p1, mut e1) = (ActorState::player(), ActorState::engine());
                resolve_round(&mut p1, &mut e1, player_action, engine_action);

                let (mut p2, mut e2) = (ActorState::player(), ActorState::engine());
                resolve(&mut e2, &mut p2, engine_action, player_action);
                resolve(&mut p2, &mut e2, player_action, engine_action);

                assert_eq!((p1, e1), (p2, e2));
            }
        }
    }
}
