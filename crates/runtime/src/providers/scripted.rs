//! Replays a fixed sequence of actions.

use std::collections::VecDeque;

use async_trait::async_trait;
use duel_core::{Action, Side};
use tokio::sync::Mutex;

use crate::api::{ActionProvider, Result};
use crate::state::DuelState;

/// Returns queued actions in order, then passes forever.
pub struct ScriptedActionProvider {
    script: Mutex<VecDeque<Action>>,
}

impl ScriptedActionProvider {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: Mutex::new(actions.into_iter().collect()),
        }
    }

    pub async fn remaining(&self) -> usize {
        self.script.lock().await.len()
    }
}

#[async_trait]
impl ActionProvider for ScriptedActionProvider {
    async fn provide_action(&self, _side: Side, _state: &DuelState) -> Result<Action> {
        Ok(self.script.lock().await.pop_front().unwrap_or_default())
    }
}
