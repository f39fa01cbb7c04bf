//! Explicit per-node object data storage
//!
//! The scene layer owns a plain map from node identifiers to the geographic
//! data attached to each placed object. Nothing here reaches into the scene
//! graph itself; renderers hold the `NodeId` next to their node handle and
//! look the data up when needed.

use crate::core::types::GeoCoordinate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier for a placed scene node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Geographic data attached to a placed object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectData {
    /// The coordinate the object is anchored at
    pub coordinate: GeoCoordinate,
    /// Which model the node displays
    pub model: String,
    /// Who placed the object
    pub user_id: String,
}

/// Registry mapping node identifiers to their object data
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    next_id: u64,
    objects: HashMap<NodeId, ObjectData>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a placed object, returning its fresh identifier
    pub fn insert(&mut self, data: ObjectData) -> NodeId {
        self.next_id += 1;
        let id = NodeId(self.next_id);
        self.objects.insert(id, data);
        id
    }

    /// Look up the data for a node
    pub fn get(&self, id: NodeId) -> Option<&ObjectData> {
        self.objects.get(&id)
    }

    /// Replace the data for an existing node
    pub fn update(&mut self, id: NodeId, data: ObjectData) -> bool {
        if let Some(existing) = self.objects.get_mut(&id) {
            *existing = data;
            true
        } else {
            false
        }
    }

    /// Remove a node's data, returning it if the node was registered
    pub fn remove(&mut self, id: NodeId) -> Option<ObjectData> {
        self.objects.remove(&id)
    }

    /// Iterate over all registered objects
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ObjectData)> {
        self.objects.iter().map(|(id, data)| (*id, data))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
