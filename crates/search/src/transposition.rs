//! Per-decision cache of searched positions.

use std::collections::HashMap;

use duel_core::{Action, ActorState};

use crate::search::Evaluation;

/// Everything a subtree's result depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PositionKey {
    pub mover: ActorState,
    pub other: ActorState,
    pub incoming: Action,
    pub depth: u32,
}

/// Maps positions to the evaluation a full expansion produced.
///
/// Disabled tables never store, so probing them always misses.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    enabled: bool,
    entries: HashMap<PositionKey, Evaluation>,
    hits: usize,
}

impl TranspositionTable {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn probe(&mut self, key: &PositionKey) -> Option<Evaluation> {
        let hit = self.entries.get(key).copied();
        if hit.is_some() {
            self.hits += 1;
        }
        hit
    }

    pub fn store(&mut self, key: PositionKey, evaluation: Evaluation) {
        if self.enabled {
            self.entries.insert(key, evaluation);
        }
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
    }
}
