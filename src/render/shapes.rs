//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Append an axis-aligned quad (two triangles)
pub fn quad(out: &mut Vec<Vertex>, center: Vec2, half: Vec2, color: [f32; 4]) {
    let min = center - half;
    let max = center + half;

    out.push(Vertex::new(min.x, min.y, color));
    out.push(Vertex::new(max.x, min.y, color));
    out.push(Vertex::new(max.x, max.y, color));

    out.push(Vertex::new(max.x, max.y, color));
    out.push(Vertex::new(min.x, max.y, color));
    out.push(Vertex::new(min.x, min.y, color));
}

/// Append a filled ellipse as a triangle fan.
///
/// Per-axis radii let a non-uniform visual scale show up on screen.
pub fn ellipse(out: &mut Vec<Vertex>, center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) {
    let segments = segments.max(3);
    out.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }
}
