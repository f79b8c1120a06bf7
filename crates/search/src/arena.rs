//! Arena-backed node storage.

use crate::node::{NodeId, SearchNode};

/// Flat node storage for one decision.
///
/// A parent's expansion pushes all of its children before any of them is
/// expanded, so every child set occupies a contiguous id range.
pub struct Arena {
    nodes: Vec<SearchNode>,
}

impl Arena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node but keeps the allocation for the next decision.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn push(&mut self, n: SearchNode) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(n);
        id
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id as usize]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id as usize]
    }

    /// The root of the last search, if any.
    pub fn root(&self) -> Option<&SearchNode> {
        self.nodes.first()
    }

    /// Children of `id` paired with their ids.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        self.get(id).children.clone().map(move |child| (child, self.get(child)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(id, node)| (id as NodeId, node))
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
