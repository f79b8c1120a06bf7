//! Asynchronous abstraction for sourcing each side's action.
//!
//! Runtime users plug in [`ActionProvider`] implementations so a match can
//! run with human input, the search engine, or scripted fixtures.
use async_trait::async_trait;
use duel_core::{Action, Side};

use super::errors::Result;
use crate::state::DuelState;

/// Trait for providing actions based on the current match state.
///
/// Different implementations can handle:
/// - Player input (from the CLI)
/// - Engine decisions (search)
/// - Scripted actions for tests
///
/// Implementations should only return actions that are legal for `side`;
/// the runtime rejects anything else with
/// [`RuntimeError::IllegalAction`](super::RuntimeError::IllegalAction).
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Provide an action for `side` given a read-only snapshot of the match.
    async fn provide_action(&self, side: Side, state: &DuelState) -> Result<Action>;
}

/// A simple action provider that always passes.
/// Useful for testing or as a fallback.
pub struct PassActionProvider;

#[async_trait]
impl ActionProvider for PassActionProvider {
    async fn provide_action(&self, _side: Side, _state: &DuelState) -> Result<Action> {
        Ok(Action::NoOp)
    }
}
