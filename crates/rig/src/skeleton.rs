//! Arena of nodes and world-matrix composition.

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::error::SkeletonError;
use crate::node::{Node, NodeDesc, NodeId};
use crate::transform;

/// Owns every node of an articulated figure.
///
/// Nodes are stored in insertion order. Because a parent has to be inserted
/// before its children, walking the arena front to back always visits a
/// parent before any of its descendants. Deserializing re-runs the same
/// checks as [`Skeleton::add`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "SkeletonData")]
pub struct Skeleton {
    nodes: Vec<Node>,
}

/// Unchecked serialized form of a [`Skeleton`].
#[derive(Deserialize)]
struct SkeletonData {
    nodes: Vec<Node>,
}

impl TryFrom<SkeletonData> for Skeleton {
    type Error = SkeletonError;

    fn try_from(data: SkeletonData) -> Result<Self, Self::Error> {
        let mut skeleton = Skeleton::new();
        for node in data.nodes {
            skeleton.insert(node)?;
        }
        Ok(skeleton)
    }
}

impl Skeleton {
    /// Create an empty skeleton.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its id.
    ///
    /// Fails if the parent has not been added yet or the name is taken.
    pub fn add(&mut self, desc: NodeDesc) -> Result<NodeId, SkeletonError> {
        self.insert(Node::from_desc(desc))
    }

    fn insert(&mut self, node: Node) -> Result<NodeId, SkeletonError> {
        if let Some(parent) = node.parent() {
            if parent.index() >= self.nodes.len() {
                return Err(SkeletonError::UnknownParent {
                    child: node.name().to_string(),
                    parent,
                });
            }
        }
        if self.nodes.iter().any(|n| n.name() == node.name()) {
            return Err(SkeletonError::DuplicateName(node.name().to_string()));
        }

        let id = NodeId(self.nodes.len());
        log::trace!("Added node {} as {:?}", node.name(), id);
        self.nodes.push(node);
        Ok(id)
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Look up a node id by name.
    pub fn find(&self, name: &str) -> Result<NodeId, SkeletonError> {
        self.nodes
            .iter()
            .position(|n| n.name() == name)
            .map(NodeId)
            .ok_or_else(|| SkeletonError::NotFound(name.to_string()))
    }

    /// Iterate over `(id, node)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Restore every node to its initial pose.
    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
    }

    /// World transform of a node, excluding its own mesh scale.
    ///
    /// Walks from the node up to the root, left-multiplying each ancestor's
    /// local transform. Returns identity for an unknown id.
    pub fn world_transform(&self, id: NodeId) -> Mat4 {
        let mut accumulated = Mat4::IDENTITY;
        let mut current = self.get(id);

        while let Some(node) = current {
            accumulated = node.local_transform() * accumulated;
            current = node.parent().and_then(|p| self.get(p));
        }

        accumulated
    }

    /// Matrix that places the node's mesh in scene space.
    ///
    /// `parent_world * local * scale`
    pub fn model_matrix(&self, id: NodeId) -> Mat4 {
        let scale = self
            .get(id)
            .map_or(Mat4::IDENTITY, |n| transform::mesh_scale(n.scale()));
        self.world_transform(id) * scale
    }

    /// World transforms of all nodes, computed parent first in one pass.
    ///
    /// Index `i` of the result belongs to `NodeId(i)`.
    pub fn world_transforms(&self) -> Vec<Mat4> {
        let mut worlds: Vec<Mat4> = Vec::with_capacity(self.nodes.len());

        for node in &self.nodes {
            let parent_world = node
                .parent()
                .map_or(Mat4::IDENTITY, |p| worlds[p.index()]);
            worlds.push(parent_world * node.local_transform());
        }

        worlds
    }

    /// Model matrices of all nodes, computed parent first in one pass.
    pub fn model_matrices(&self) -> Vec<Mat4> {
        self.world_transforms()
            .into_iter()
            .zip(&self.nodes)
            .map(|(world, node)| world * transform::mesh_scale(node.scale()))
            .collect()
    }
}

impl std::ops::Index<NodeId> for Skeleton {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl std::ops::IndexMut<NodeId> for Skeleton {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
}

// ============================================================================
// Tests
// ============================================================================
