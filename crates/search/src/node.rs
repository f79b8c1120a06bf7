//! Search node stored in the arena.

use core::ops::Range;

use duel_core::{Action, ActorState};

pub type NodeId = u32;

/// Integer score from the point of view of a node's mover.
pub type Score = i32;

/// Static evaluation: mover vitality minus other vitality.
///
/// No floor is applied; negative vitality counts in full.
#[inline]
pub fn static_score(mover: &ActorState, other: &ActorState) -> Score {
    mover.vitality - other.vitality
}

/// One position in the lookahead tree.
///
/// `mover` is the side about to choose; `other` already committed to
/// `incoming` one ply above.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub mover: ActorState,
    pub other: ActorState,
    pub incoming: Action,
    pub score: Score,
    pub best: Option<Action>,
    /// Contiguous child range in the arena. Empty for leaves and cache hits.
    pub children: Range<NodeId>,
}

impl SearchNode {
    pub fn new(mover: ActorState, other: ActorState, incoming: Action) -> Self {
        Self {
            mover,
            other,
            incoming,
            score: 0,
            best: None,
            children: 0..0,
        }
    }

    /// Score of this node's position re-stated for the parent's mover.
    #[inline]
    pub fn flipped_score(&self) -> Score {
        static_score(&self.other, &self.mover)
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }
}
