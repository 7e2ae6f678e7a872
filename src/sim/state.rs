//! Game state and core simulation types
//!
//! `GameState` is the single aggregate owned by the frame loop. It is passed
//! by `&mut` into every simulation call and never shared.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Body, VisualScale};
use super::error::AllocationError;
use super::field::{self, FieldParams};
use super::pellets::{Pellet, PelletStore};
use super::rect::Rect;
use crate::consts::*;

/// The player-controlled token
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Stored half-size, also the border clearance
    pub half_size: f32,
    /// Movement speed (field units per second)
    pub speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            half_size: PLAYER_HALF_SIZE,
            speed: PLAYER_SPEED,
        }
    }
}

impl Player {
    pub fn new(pos: Vec2, half_size: f32, speed: f32) -> Self {
        Self {
            pos,
            half_size,
            speed,
        }
    }

    /// Furthest the center may sit from the origin on either axis
    #[inline]
    pub fn field_limit(&self) -> f32 {
        FIELD_EXTENT - self.half_size
    }

    /// Keep the player inside the field, axis by axis
    pub fn clamp_to_field(&mut self) {
        let limit = self.field_limit().max(0.0);
        self.pos = self.pos.clamp(Vec2::splat(-limit), Vec2::splat(limit));
    }
}

impl Body for Player {
    const SCALE: VisualScale = PLAYER_SCALE;

    fn center(&self) -> Vec2 {
        self.pos
    }

    fn stored_half(&self) -> Vec2 {
        Vec2::splat(self.half_size)
    }
}

/// Complete simulation state for one scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Static obstacles, fixed for the run
    pub(super) obstacles: Vec<Rect>,
    /// Live pellets
    pub pellets: PelletStore,
    /// The player
    pub player: Player,
}

impl GameState {
    /// Create a state with the given obstacle layout and an empty field
    pub fn new(player: Player, obstacles: Vec<Rect>) -> Self {
        Self {
            obstacles,
            pellets: PelletStore::new(),
            player,
        }
    }

    /// Same as `new`, but the pellet store refuses to grow past `limit`
    pub fn with_pellet_limit(player: Player, obstacles: Vec<Rect>, limit: usize) -> Self {
        Self {
            obstacles,
            pellets: PelletStore::with_limit(limit),
            player,
        }
    }

    #[inline]
    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    #[inline]
    pub fn pellet_count(&self) -> usize {
        self.pellets.len()
    }

    /// Seed the pellet field. See [`field::generate`].
    pub fn generate_field(&mut self, params: &FieldParams) -> Result<usize, AllocationError> {
        field::generate(&mut self.pellets, &self.obstacles, params)
    }

    /// Read-only view for the render collaborator
    pub fn view(&self) -> SceneView<'_> {
        SceneView {
            obstacles: &self.obstacles,
            obstacle_scale: OBSTACLE_SCALE,
            pellets: self.pellets.as_slice(),
            pellet_scale: PELLET_SCALE,
            player: &self.player,
            player_scale: PLAYER_SCALE,
        }
    }
}

/// Everything a renderer needs, tagged with the class visual scales
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub obstacles: &'a [Rect],
    pub obstacle_scale: VisualScale,
    pub pellets: &'a [Pellet],
    pub pellet_scale: VisualScale,
    pub player: &'a Player,
    pub player_scale: VisualScale,
}
