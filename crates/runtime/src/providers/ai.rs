//! Search-backed action provider.

use async_trait::async_trait;
use duel_core::{Action, Side};
use duel_search::{Decision, SearchConfig, Searcher};
use tokio::sync::Mutex;

use crate::api::{ActionProvider, Result};
use crate::state::DuelState;

/// Picks actions by exhaustive lookahead.
///
/// The provider searches from the perspective of whichever side it is asked
/// to play, with that side as the root mover and the opponent's action fixed
/// to no-op. The searcher (and its arena) is reused across rounds.
pub struct SearchAiProvider {
    searcher: Mutex<Searcher>,
}

impl SearchAiProvider {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            searcher: Mutex::new(Searcher::new(config)),
        }
    }

    /// Runs a full decision and returns its statistics.
    pub async fn decide(&self, side: Side, state: &DuelState) -> Decision {
        let mut searcher = self.searcher.lock().await;
        searcher.decide(state.actor(side), state.opponent(side))
    }
}

impl Default for SearchAiProvider {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

#[async_trait]
impl ActionProvider for SearchAiProvider {
    async fn provide_action(&self, side: Side, state: &DuelState) -> Result<Action> {
        let decision = self.decide(side, state).await;

        tracing::debug!(
            "{} selected {:?} in round {} (score: {}, nodes: {})",
            side,
            decision.action,
            state.round + 1,
            decision.score,
            decision.nodes
        );

        Ok(decision.action)
    }
}
