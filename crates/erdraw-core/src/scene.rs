//! Retained scene graph of committed entities.

use crate::shapes::{ShapeEntity, ShapeId};
use kurbo::{Affine, Point};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The ordered collection of committed shape entities.
///
/// Insertion order is z-order: later entities draw, and hit, on top.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    /// All entities, keyed by ID.
    entities: HashMap<ShapeId, ShapeEntity>,
    /// Z-order of entities (back to front).
    z_order: Vec<ShapeId>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity on top of the scene. Returns its ID.
    pub fn insert(&mut self, entity: ShapeEntity) -> ShapeId {
        let id = entity.id();
        debug!("scene: insert {} {}", entity.geometry.kind_name(), id);
        self.z_order.push(id);
        self.entities.insert(id, entity);
        id
    }

    /// Get an entity by ID.
    pub fn get(&self, id: ShapeId) -> Option<&ShapeEntity> {
        self.entities.get(&id)
    }

    /// Entities in z-order (back to front).
    pub fn entities_ordered(&self) -> impl Iterator<Item = &ShapeEntity> {
        self.z_order.iter().filter_map(|id| self.entities.get(id))
    }

    /// Compose a movement delta onto an entity's accumulated transform.
    /// Unknown IDs are ignored.
    pub fn apply_transform(&mut self, id: ShapeId, delta: Affine) {
        if let Some(entity) = self.entities.get_mut(&id) {
            trace!("scene: transform {} by {:?}", id, delta);
            entity.apply_transform(delta);
        }
    }

    /// Find the topmost entity whose bounding box contains `point`.
    ///
    /// Walks the z-order front to back and tests each entity's transformed
    /// bounding box. `None` means the point hit empty surface, which callers
    /// treat as a deselect.
    pub fn topmost_at(&self, point: Point) -> Option<ShapeId> {
        self.z_order
            .iter()
            .rev()
            .copied()
            .find(|id| self.entities.get(id).is_some_and(|e| e.contains(point)))
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Get the number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Serialize the scene to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a scene from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
