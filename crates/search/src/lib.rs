//! Exhaustive lookahead search for the duel engine.
//!
//! The search enumerates every legal action sequence up to a fixed number of
//! plies and scores leaves by vitality difference. There is no pruning: the
//! tree is built in full, scored bottom-up, then discarded when the next
//! decision starts.
//!
//! # Architecture
//!
//! - [`Searcher`]: owns the arena and cache, exposes [`Searcher::decide`]
//! - [`Arena`]: flat node storage; each expansion writes a contiguous child range
//! - [`TieBreak`]: explicit policy for equal-score children
//! - [`TranspositionTable`]: optional per-decision result cache

pub mod arena;
pub mod config;
pub mod node;
pub mod search;
pub mod transposition;

pub use arena::Arena;
pub use config::{SearchConfig, TieBreak};
pub use node::{NodeId, Score, SearchNode, static_score};
pub use search::{Decision, Evaluation, Searcher};
pub use transposition::{PositionKey, TranspositionTable};
