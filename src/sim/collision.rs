//! Overlap tests between axis-aligned entities
//!
//! Every entity class (obstacle, pellet, player) is drawn at a size that
//! differs from its stored geometry. Collision uses the drawn size, so each
//! test takes the stored half-extent together with the class visual scale.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Per-class multiplier pair applied to stored extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualScale {
    pub x: f32,
    pub y: f32,
}

impl VisualScale {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Effective (visual) half-extent of a stored extent under a class scale
#[inline]
pub fn effective_half(stored_half: Vec2, scale: VisualScale) -> Vec2 {
    stored_half * scale.as_vec2() * 0.5
}

/// Strict axis-aligned overlap test.
///
/// Touching boxes (distance exactly equal to the combined half-extents on an
/// axis) do not overlap.
#[inline]
pub fn overlaps(
    center_a: Vec2,
    half_a: Vec2,
    scale_a: VisualScale,
    center_b: Vec2,
    half_b: Vec2,
    scale_b: VisualScale,
) -> bool {
    let reach = effective_half(half_a, scale_a) + effective_half(half_b, scale_b);
    let dist = (center_a - center_b).abs();
    dist.x < reach.x && dist.y < reach.y
}

/// An entity that takes part in overlap tests
pub trait Body {
    /// Visual scale of the entity's class
    const SCALE: VisualScale;

    fn center(&self) -> Vec2;

    fn stored_half(&self) -> Vec2;

    fn effective_half(&self) -> Vec2 {
        effective_half(self.stored_half(), Self::SCALE)
    }
}

/// Overlap test between two bodies using their class scales
#[inline]
pub fn bodies_overlap<A: Body, B: Body>(a: &A, b: &B) -> bool {
    overlaps(
        a.center(),
        a.stored_half(),
        A::SCALE,
        b.center(),
        b.stored_half(),
        B::SCALE,
    )
}
