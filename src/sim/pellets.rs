//! Pellet storage
//!
//! Pellets live in a flat `Vec` with O(1) swap-removal. Removal moves the last
//! live pellet into the vacated slot, so order is not stable across removals.
//! Callers that remove while scanning must walk indices from high to low.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Body, VisualScale};
use super::error::AllocationError;
use crate::consts::PELLET_SCALE;

/// A collectible pellet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pellet {
    pub pos: Vec2,
    /// Stored radius (full visual size before the class scale)
    pub radius: f32,
}

impl Pellet {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius,
        }
    }

    /// Effective radius used for pellet-to-pellet spacing (x scale only)
    #[inline]
    pub fn spacing_radius(&self) -> f32 {
        spacing_radius(self.radius)
    }
}

/// Effective pellet radius along x for a stored radius
#[inline]
pub fn spacing_radius(radius: f32) -> f32 {
    radius * PELLET_SCALE.x * 0.5
}

impl Body for Pellet {
    const SCALE: VisualScale = PELLET_SCALE;

    fn center(&self) -> Vec2 {
        self.pos
    }

    fn stored_half(&self) -> Vec2 {
        Vec2::splat(self.radius)
    }
}

/// Growable, order-unstable pellet collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PelletStore {
    items: Vec<Pellet>,
    /// Optional hard cap; inserting past it reports `LimitReached`
    #[serde(default)]
    limit: Option<usize>,
}

impl PelletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that refuses to grow past `limit` pellets
    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Append a pellet.
    ///
    /// Storage is reserved fallibly; on failure nothing already stored is lost.
    pub fn insert(&mut self, x: f32, y: f32, radius: f32) -> Result<(), AllocationError> {
        let len = self.items.len();
        if let Some(limit) = self.limit.filter(|&limit| len >= limit) {
            return Err(AllocationError::LimitReached { limit });
        }
        self.items
            .try_reserve(1)
            .map_err(|source| AllocationError::Reserve { len, source })?;
        self.items.push(Pellet::new(x, y, radius));
        Ok(())
    }

    /// Remove the pellet at `index` by moving the last pellet into its slot.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. Indices must come from a live iteration.
    pub fn remove_at(&mut self, index: usize) -> Pellet {
        let removed = self.items.swap_remove(index);
        if self.items.is_empty() {
            // Give the buffer back; the next insert reacquires it.
            self.items = Vec::new();
        }
        removed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&Pellet> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[Pellet] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pellet> {
        self.items.iter()
    }
}
