//! Actor state and the legality predicate.
//!
//! [`ActorState`] is a small `Copy` value. Every search node and every round
//! works on its own copies; nothing is shared.

use arrayvec::ArrayVec;
use core::fmt;

use crate::action::{Action, Tier};
use crate::config::GameConfig;
use crate::error::IllegalActionError;

/// Bounded list of actions, sized for one ply of candidates.
pub type ActionList = ArrayVec<Action, { GameConfig::MAX_CANDIDATES }>;

/// One of the two participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    /// Human-controlled.
    Player,
    /// Search-controlled.
    Engine,
}

impl Side {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Engine,
            Side::Engine => Side::Player,
        }
    }
}

/// Vitality and remaining resources for one side.
///
/// Vitality may go negative internally; use [`ActorState::displayed_vitality`]
/// for anything user-facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActorState {
    pub vitality: i32,
    /// Remaining uses per offense tier, indexed by [`Tier::index`].
    pub offense_uses: [u8; GameConfig::TIERS],
    pub guards: u8,
}

impl ActorState {
    pub const fn new(vitality: i32, offense_uses: [u8; GameConfig::TIERS], guards: u8) -> Self {
        Self {
            vitality,
            offense_uses,
            guards,
        }
    }

    /// Fresh state with the given guard allowance.
    pub const fn fresh(guards: u8) -> Self {
        Self::new(
            GameConfig::STARTING_VITALITY,
            [GameConfig::OFFENSE_USES; GameConfig::TIERS],
            guards,
        )
    }

    /// Starting state for the human side.
    pub const fn player() -> Self {
        Self::fresh(GameConfig::PLAYER_GUARDS)
    }

    /// Starting state for the engine side.
    pub const fn engine() -> Self {
        Self::fresh(GameConfig::ENGINE_GUARDS)
    }

    /// Starting state for `side`.
    pub const fn for_side(side: Side) -> Self {
        match side {
            Side::Player => Self::player(),
            Side::Engine => Self::engine(),
        }
    }

    pub fn with_vitality(mut self, vitality: i32) -> Self {
        self.vitality = vitality;
        self
    }

    pub fn with_guards(mut self, guards: u8) -> Self {
        self.guards = guards;
        self
    }

    pub fn with_uses(mut self, tier: Tier, uses: u8) -> Self {
        self.offense_uses[tier.index()] = uses;
        self
    }

    #[inline]
    pub const fn remaining_uses(&self, tier: Tier) -> u8 {
        self.offense_uses[tier.index()]
    }

    /// Vitality floored at zero.
    #[inline]
    pub fn displayed_vitality(&self) -> i32 {
        self.vitality.max(0)
    }

    #[inline]
    pub const fn is_defeated(&self) -> bool {
        self.vitality <= 0
    }

    /// True while at least one offense tier has uses left.
    pub fn can_attack(&self) -> bool {
        self.offense_uses.iter().any(|&uses| uses > 0)
    }

    // ========================================================================
    // Legality
    // ========================================================================

    /// The legality predicate.
    ///
    /// Offense needs a remaining use for its tier, defense needs a guard,
    /// no-op is always legal.
    pub fn check(&self, action: Action) -> Result<(), IllegalActionError> {
        match action {
            Action::Offense(tier) if self.remaining_uses(tier) == 0 => {
                Err(IllegalActionError::OffenseExhausted { tier })
            }
            Action::Defense if self.guards == 0 => Err(IllegalActionError::GuardsExhausted),
            _ => Ok(()),
        }
    }

    #[inline]
    pub fn is_legal(&self, action: Action) -> bool {
        self.check(action).is_ok()
    }

    /// Legal actions in canonical enumeration order. Never empty.
    pub fn legal_actions(&self) -> ActionList {
        Action::CANDIDATES
            .into_iter()
            .filter(|&action| self.is_legal(action))
            .collect()
    }
}

impl Default for ActorState {
    fn default() -> Self {
        Self::player()
    }
}

impl fmt::Display for ActorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [one, two, three] = self.offense_uses;
        write!(
            f,
            "hp = {}, attack = [{}, {}, {}], guard = {}.",
            self.displayed_vitality(),
            one,
            two,
            three,
            self.guards
        )
    }
}
