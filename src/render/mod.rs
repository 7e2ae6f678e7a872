//! Render-ready geometry
//!
//! Turns a read-only `SceneView` into a triangle list in normalized field
//! coordinates. Sizes are the effective (visual) extents, the same ones the
//! simulation collides with. No GPU code lives here.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::sim::{SceneView, effective_half};
use glam::Vec2;

/// Segments per pellet fan
pub const PELLET_SEGMENTS: u32 = 12;

/// Build the full frame: obstacles, then pellets, then the player on top
pub fn scene_vertices(view: &SceneView) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(vertex_count(view));

    for rect in view.obstacles {
        let half = effective_half(rect.half, view.obstacle_scale);
        shapes::quad(&mut out, rect.center, half, colors::OBSTACLE);
    }

    for pellet in view.pellets {
        let radii = effective_half(Vec2::splat(pellet.radius), view.pellet_scale);
        shapes::ellipse(&mut out, pellet.pos, radii, colors::PELLET, PELLET_SEGMENTS);
    }

    let player = view.player;
    let half = effective_half(Vec2::splat(player.half_size), view.player_scale);
    shapes::quad(&mut out, player.pos, half, colors::PLAYER);

    out
}

/// Exact vertex count `scene_vertices` produces for `view`
pub fn vertex_count(view: &SceneView) -> usize {
    view.obstacles.len() * 6 + view.pellets.len() * (PELLET_SEGMENTS as usize * 3) + 6
}
