//! Actions an actor can commit to for one round.
//!
//! An [`Action`] is a plain value: two actions are equal iff their kind and
//! tier are equal. Candidate enumeration always follows
//! [`Action::CANDIDATES`], which fixes the order tie-breaks depend on.

use core::fmt;

/// Offense tier. The tier value doubles as the damage dealt.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
)]
pub enum Tier {
    One,
    Two,
    Three,
}

impl Tier {
    /// All tiers in ascending order.
    pub const ALL: [Tier; 3] = [Tier::One, Tier::Two, Tier::Three];

    /// Damage dealt (or reflected) by an offense at this tier.
    #[inline]
    pub const fn damage(self) -> i32 {
        match self {
            Tier::One => 1,
            Tier::Two => 2,
            Tier::Three => 3,
        }
    }

    /// Index into per-tier counters.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Tier::One => 0,
            Tier::Two => 1,
            Tier::Three => 2,
        }
    }

    /// Tier for a damage value in `1..=3`.
    pub const fn from_damage(damage: u8) -> Option<Self> {
        match damage {
            1 => Some(Tier::One),
            2 => Some(Tier::Two),
            3 => Some(Tier::Three),
            _ => None,
        }
    }
}

/// Kind of an action with the tier stripped.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    Offense,
    Defense,
    NoOp,
}

/// One actor's choice for a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Action {
    /// Strike for `tier` damage. Reflected onto the attacker if the opponent defends.
    Offense(Tier),
    /// Spend a guard to reflect any offense this round.
    Defense,
    /// Do nothing.
    #[default]
    NoOp,
}

impl Action {
    /// Every action in canonical enumeration order.
    pub const CANDIDATES: [Action; 5] = [
        Action::Offense(Tier::One),
        Action::Offense(Tier::Two),
        Action::Offense(Tier::Three),
        Action::Defense,
        Action::NoOp,
    ];

    pub const fn kind(self) -> ActionKind {
        match self {
            Action::Offense(_) => ActionKind::Offense,
            Action::Defense => ActionKind::Defense,
            Action::NoOp => ActionKind::NoOp,
        }
    }

    pub const fn tier(self) -> Option<Tier> {
        match self {
            Action::Offense(tier) => Some(tier),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_defense(self) -> bool {
        matches!(self, Action::Defense)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Offense(tier) => write!(f, "attack = {}", tier.damage()),
            Action::Defense => f.write_str("guard"),
            Action::NoOp => f.write_str("pass"),
        }
    }
}
