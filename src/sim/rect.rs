//! Axis-aligned static obstacles
//!
//! A rect is stored as a center and a half-extent, both in normalized field
//! coordinates. Obstacles never move once a scenario is built.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Body, VisualScale};
use crate::consts::{FIELD_EXTENT, OBSTACLE_SCALE};

/// A static axis-aligned obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Center position
    pub center: Vec2,
    /// Stored half-extent (half width, half height)
    pub half: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, half_w: f32, half_h: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            half: Vec2::new(half_w, half_h),
        }
    }

    /// True if the center lies inside the field and the extents are usable
    pub fn is_well_formed(&self) -> bool {
        self.center.is_finite()
            && self.half.is_finite()
            && self.half.cmpge(Vec2::ZERO).all()
            && self.center.abs().cmple(Vec2::splat(FIELD_EXTENT)).all()
    }
}

impl Body for Rect {
    const SCALE: VisualScale = OBSTACLE_SCALE;

    fn center(&self) -> Vec2 {
        self.center
    }

    fn stored_half(&self) -> Vec2 {
        self.half
    }
}
