//! Exhaustive negamax over one-sided plies.
//!
//! Each ply resolves only the mover's candidate against the action the other
//! side committed to one level up, so two plies make one full round. Scores
//! are always stated for the side about to move: a parent minimizes its
//! children's scores, which is the same as maximizing its own.

use duel_core::{Action, ActorState, resolve};

use crate::arena::Arena;
use crate::config::SearchConfig;
use crate::node::{NodeId, Score, SearchNode, static_score};
use crate::transposition::{PositionKey, TranspositionTable};

/// Result of searching one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Evaluation {
    pub score: Score,
    /// Selected action for the node's mover. `None` at a leaf.
    pub best: Option<Action>,
}

impl Evaluation {
    pub const fn leaf(score: Score) -> Self {
        Self { score, best: None }
    }
}

/// Outcome of a top-level decision for the engine side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
    pub score: Score,
    /// Plies searched.
    pub depth: u32,
    /// Nodes allocated in the arena.
    pub nodes: usize,
    pub cache_hits: usize,
}

/// Owns the arena and cache so repeated decisions reuse their allocations.
pub struct Searcher {
    config: SearchConfig,
    arena: Arena,
    table: TranspositionTable,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        let table = TranspositionTable::new(config.transposition);
        Self {
            config,
            arena: Arena::new(),
            table,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Tree built by the most recent search. Root is node 0.
    pub fn tree(&self) -> &Arena {
        &self.arena
    }

    /// Chooses the engine's action for this round.
    ///
    /// The root has the engine as mover and the player's action fixed to
    /// no-op, since nothing is known about it yet.
    pub fn decide(&mut self, engine: &ActorState, player: &ActorState) -> Decision {
        let depth = self.config.depth();
        let evaluation = self.search(*engine, *player, Action::NoOp, depth);

        let decision = Decision {
            action: evaluation.best.unwrap_or_default(),
            score: evaluation.score,
            depth,
            nodes: self.arena.len(),
            cache_hits: self.table.hits(),
        };

        tracing::debug!(
            "search selected {:?} (score: {}, depth: {}, nodes: {}, cache hits: {})",
            decision.action,
            decision.score,
            decision.depth,
            decision.nodes,
            decision.cache_hits
        );

        decision
    }

    /// Searches `depth` plies below a fresh root.
    ///
    /// `depth == 0` evaluates the root statically without expanding it.
    pub fn search(
        &mut self,
        mover: ActorState,
        other: ActorState,
        incoming: Action,
        depth: u32,
    ) -> Evaluation {
        self.arena.clear();
        self.table.clear();

        let root = self.arena.push(SearchNode::new(mover, other, incoming));
        self.negamax(root, mover, other, incoming, depth)
    }

    fn negamax(
        &mut self,
        id: NodeId,
        mover: ActorState,
        other: ActorState,
        incoming: Action,
        depth: u32,
    ) -> Evaluation {
        let evaluation = if depth == 0 {
            Evaluation::leaf(static_score(&mover, &other))
        } else {
            let key = PositionKey {
                mover,
                other,
                incoming,
                depth,
            };
            match self.table.probe(&key) {
                Some(cached) => cached,
                None => {
                    let evaluation = self.expand(id, mover, other, incoming, depth);
                    self.table.store(key, evaluation);
                    evaluation
                }
            }
        };

        let node = self.arena.get_mut(id);
        node.score = evaluation.score;
        node.best = evaluation.best;
        evaluation
    }

    fn expand(
        &mut self,
        id: NodeId,
        mover: ActorState,
        other: ActorState,
        incoming: Action,
        depth: u32,
    ) -> Evaluation {
        let first = self.arena.len() as NodeId;
        for action in mover.legal_actions() {
            // Roles swap: the opponent moves next, and this ply's effect is
            // charged to the side that just chose.
            let mut next_mover = other;
            let mut next_other = mover;
            resolve(&mut next_other, &mut next_mover, action, incoming);
            self.arena
                .push(SearchNode::new(next_mover, next_other, action));
        }
        let children = first..self.arena.len() as NodeId;
        self.arena.get_mut(id).children = children.clone();

        let tie_break = self.config.tie_break;
        let mut best: Option<(NodeId, Score)> = None;
        for child in children {
            let node = self.arena.get(child);
            let (child_mover, child_other, child_incoming) =
                (node.mover, node.other, node.incoming);
            let score = self
                .negamax(child, child_mover, child_other, child_incoming, depth - 1)
                .score;

            best = match best {
                Some((_, incumbent)) if !tie_break.replaces(score, incumbent) => best,
                _ => Some((child, score)),
            };
        }

        // No-op is always legal, so there is at least one child.
        let Some((best_id, _)) = best else {
            return Evaluation::leaf(static_score(&mover, &other));
        };

        let chosen = self.arena.get(best_id);
        Evaluation {
            score: chosen.flipped_score(),
            best: Some(chosen.incoming),
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
