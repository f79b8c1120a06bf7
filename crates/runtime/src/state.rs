//! Live match state and terminal detection.

use std::fmt;

use duel_core::{ActorState, Side};

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    /// Neither side can change the score any more, or the round limit hit.
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{side} wins"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// Both sides' persistent state between rounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelState {
    pub player: ActorState,
    pub engine: ActorState,
    /// Rounds resolved so far.
    pub round: u32,
}

impl DuelState {
    pub fn new(player: ActorState, engine: ActorState) -> Self {
        Self {
            player,
            engine,
            round: 0,
        }
    }

    pub fn actor(&self, side: Side) -> &ActorState {
        match side {
            Side::Player => &self.player,
            Side::Engine => &self.engine,
        }
    }

    pub fn opponent(&self, side: Side) -> &ActorState {
        self.actor(side.opponent())
    }

    /// Terminal check, run before every round.
    ///
    /// The player is checked first, so a double knockout goes to the engine.
    /// Once neither side has an offense left, vitality is frozen and the match
    /// is a draw.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.player.is_defeated() {
            Some(Outcome::Winner(Side::Engine))
        } else if self.engine.is_defeated() {
            Some(Outcome::Winner(Side::Player))
        } else if !self.player.can_attack() && !self.engine.can_attack() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }
}

impl Default for DuelState {
    fn default() -> Self {
        Self::new(ActorState::player(), ActorState::engine())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_match_is_undecided() {
        let state = DuelState::default();
        assert_eq!(state.outcome(), None);
        assert_eq!(state.actor(Side::Engine).guards, 3);
        assert_eq!(state.opponent(Side::Engine).guards, 2);
    }

    #[test]
    fn double_knockout_goes_to_the_engine() {
        let state = DuelState::new(
            ActorState::player().with_vitality(0),
            ActorState::engine().with_vitality(-1),
        );
        assert_eq!(state.outcome(), Some(Outcome::Winner(Side::Engine)));
    }

    #[test]
    fn engine_knockout_goes_to_the_player() {
        let state = DuelState::new(ActorState::player(), ActorState::engine().with_vitality(0));
        assert_eq!(state.outcome(), Some(Outcome::Winner(Side::Player)));
        assert_eq!(Outcome::Winner(Side::Player).to_string(), "player wins");
    }

    #[test]
    fn spent_offense_on_both_sides_is_a_draw() {
        let spent = ActorState::new(4, [0, 0, 0], 1);
        let state = DuelState::new(spent, spent.with_vitality(6));
        assert_eq!(state.outcome(), Some(Outcome::Draw));

        let one_left = DuelState::new(spent, ActorState::new(6, [0, 0, 1], 0));
        assert_eq!(one_left.outcome(), None);
    }
}
