//! Pellet field generation
//!
//! Scans a regular grid of cell centers over the field and places a pellet at
//! every candidate that is clear of the player's start zone, the obstacles and
//! the pellets already placed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::overlaps;
use super::error::AllocationError;
use super::pellets::{PelletStore, spacing_radius};
use super::rect::Rect;
use crate::consts::*;

/// Field generation parameters (fixed per scenario)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    /// Stored radius of every generated pellet
    pub radius: f32,
    /// Distance between neighbouring grid cell centers
    pub spacing: f32,
    /// Band along the field border left empty
    pub margin: f32,
    /// Center of the clearance bubble (usually the player start)
    pub avoid_center: Vec2,
    /// Radius of the clearance bubble
    pub avoid_radius: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            radius: PELLET_RADIUS,
            spacing: PELLET_SPACING,
            margin: PELLET_MARGIN,
            avoid_center: Vec2::ZERO,
            avoid_radius: PLAYER_CLEARANCE,
        }
    }
}

impl FieldParams {
    /// Number of cell centers along one axis.
    ///
    /// Zero when the spacing is unusable or the margin swallows the field.
    pub fn axis_count(&self) -> usize {
        let lo = -FIELD_EXTENT + self.margin;
        let hi = FIELD_EXTENT - self.margin;
        if !(self.spacing.is_finite() && self.spacing > 0.0 && hi > lo) {
            return 0;
        }
        // Last center k satisfies lo + spacing * (k + 0.5) <= hi. The small
        // bias keeps a center sitting exactly on `hi` from rounding away.
        ((hi - lo) / self.spacing + 0.5 + 1e-4).floor() as usize
    }

    /// Cell-center coordinates along one axis: `lo + spacing/2`, stepping by
    /// `spacing`, for every center that stays within `[lo, hi]`.
    pub fn axis_samples(&self) -> impl Iterator<Item = f32> + Clone {
        let lo = -FIELD_EXTENT + self.margin;
        let spacing = self.spacing;
        (0..self.axis_count()).map(move |i| lo + spacing * (i as f32 + 0.5))
    }

    /// Number of grid candidates the scan will evaluate
    pub fn candidate_count(&self) -> usize {
        let n = self.axis_count();
        n.saturating_mul(n)
    }

    fn in_avoid_zone(&self, candidate: Vec2) -> bool {
        let reach = self.avoid_radius + self.radius;
        candidate.distance_squared(self.avoid_center) < reach * reach
    }
}

/// Populate `store` with pellets on the grid described by `params`.
///
/// Returns the number of pellets placed. Rejected candidates are normal and
/// silent. If the store cannot grow the scan stops and the error is returned;
/// pellets placed before the failure stay in the store.
pub fn generate(
    store: &mut PelletStore,
    obstacles: &[Rect],
    params: &FieldParams,
) -> Result<usize, AllocationError> {
    let mut placed = 0;
    let samples = params.axis_samples();
    let half = Vec2::splat(params.radius);
    let own_spacing = spacing_radius(params.radius);

    for y in samples.clone() {
        for x in samples.clone() {
            let candidate = Vec2::new(x, y);

            if params.in_avoid_zone(candidate) {
                continue;
            }

            if obstacles.iter().any(|o| {
                overlaps(candidate, half, PELLET_SCALE, o.center, o.half, OBSTACLE_SCALE)
            }) {
                continue;
            }

            if store.iter().any(|p| {
                let reach = own_spacing + p.spacing_radius();
                candidate.distance_squared(p.pos) < reach * reach
            }) {
                continue;
            }

            store.insert(x, y, params.radius)?;
            placed += 1;
        }
    }

    log::info!(
        "Field generated: {} pellets from {} candidates",
        placed,
        params.candidate_count()
    );
    Ok(placed)
}
