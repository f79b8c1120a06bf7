//! Search tuning.

use crate::node::Score;

/// How to choose among children that share the minimum score.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TieBreak {
    /// Earliest candidate in canonical order wins.
    #[default]
    #[strum(to_string = "first", serialize = "first_generated")]
    FirstGenerated,
    /// Latest candidate in canonical order wins. Matches a score-keyed map
    /// where later inserts overwrite earlier ones.
    #[strum(to_string = "last", serialize = "last_generated")]
    LastGenerated,
}

impl TieBreak {
    /// Whether `candidate` displaces the current best `incumbent`.
    #[inline]
    pub fn replaces(self, candidate: Score, incumbent: Score) -> bool {
        match self {
            TieBreak::FirstGenerated => candidate < incumbent,
            TieBreak::LastGenerated => candidate <= incumbent,
        }
    }
}

/// Search configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Full rounds to look ahead. Each round is two plies.
    pub lookahead_rounds: u32,
    pub tie_break: TieBreak,
    /// Reuse results for repeated `(mover, other, incoming, depth)` tuples
    /// within one decision.
    pub transposition: bool,
}

impl SearchConfig {
    pub const DEFAULT_LOOKAHEAD_ROUNDS: u32 = 4;

    pub fn new(lookahead_rounds: u32) -> Self {
        Self {
            lookahead_rounds: lookahead_rounds.max(1),
            ..Self::default()
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_transposition(mut self, transposition: bool) -> Self {
        self.transposition = transposition;
        self
    }

    /// Plies searched per decision.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.lookahead_rounds.max(1) * 2
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lookahead_rounds: Self::DEFAULT_LOOKAHEAD_ROUNDS,
            tie_break: TieBreak::default(),
            transposition: false,
        }
    }
}
