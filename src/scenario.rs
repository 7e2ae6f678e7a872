//! Scenario layout and field parameters
//!
//! Loaded once at startup from JSON (or the built-in maze) and never changed
//! during a run.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{FieldParams, GameState, Player, Rect};

/// Scenario loading and validation failures
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to read scenario {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid scenario: {0}")]
    Invalid(String),
}

/// Obstacle layout, player setup and pellet field parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: String,
    pub player_start: Vec2,
    pub player_half_size: f32,
    pub player_speed: f32,
    pub obstacles: Vec<Rect>,
    pub field: FieldParams,
    /// Optional hard cap on the number of pellets
    pub max_pellets: Option<usize>,
}

impl Default for Scenario {
    fn default() -> Self {
        let player_start = Vec2::new(0.0, -0.75);
        Self {
            name: "Classic".to_string(),
            player_start,
            player_half_size: PLAYER_HALF_SIZE,
            player_speed: PLAYER_SPEED,
            obstacles: classic_maze(),
            field: FieldParams {
                avoid_center: player_start,
                ..FieldParams::default()
            },
            max_pellets: None,
        }
    }
}

/// Border walls plus a symmetric set of inner blocks
fn classic_maze() -> Vec<Rect> {
    const WALL: f32 = 0.025;
    let mut walls = vec![
        // Border, flush with the field edge
        Rect::new(0.0, 1.0 - WALL, 1.0, WALL),
        Rect::new(0.0, -1.0 + WALL, 1.0, WALL),
        Rect::new(-1.0 + WALL, 0.0, WALL, 1.0),
        Rect::new(1.0 - WALL, 0.0, WALL, 1.0),
        // Center box
        Rect::new(0.0, 0.1, 0.2, 0.1),
        // Spine above and below the box
        Rect::new(0.0, 0.55, WALL, 0.2),
        Rect::new(0.0, -0.4, 0.3, WALL),
    ];
    // Mirrored side bars
    for side in [-1.0, 1.0] {
        walls.push(Rect::new(side * 0.55, 0.55, 0.2, WALL));
        walls.push(Rect::new(side * 0.55, 0.1, WALL, 0.25));
        walls.push(Rect::new(side * 0.55, -0.6, 0.2, WALL));
        walls.push(Rect::new(side * 0.3, -0.15, 0.1, WALL));
    }
    walls
}

impl Scenario {
    /// Parse and validate a scenario from JSON
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load and validate a scenario file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario = Self::from_json(&json)?;
        log::info!(
            "Loaded scenario '{}' from {} ({} obstacles)",
            scenario.name,
            path.display(),
            scenario.obstacles.len()
        );
        Ok(scenario)
    }

    pub fn to_json_pretty(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject layouts the simulation cannot run meaningfully
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let invalid = |msg: String| -> Result<(), ScenarioError> { Err(ScenarioError::Invalid(msg)) };

        if !(self.player_half_size > 0.0 && self.player_half_size < FIELD_EXTENT) {
            return invalid(format!(
                "player_half_size must be in (0, {FIELD_EXTENT}), got {}",
                self.player_half_size
            ));
        }
        if !(self.player_speed.is_finite() && self.player_speed >= 0.0) {
            return invalid(format!("player_speed must be >= 0, got {}", self.player_speed));
        }
        if !(self.player_start.is_finite()
            && self.player_start.abs().cmple(Vec2::splat(FIELD_EXTENT)).all())
        {
            return invalid(format!("player_start {} is outside the field", self.player_start));
        }
        if let Some((i, rect)) = self
            .obstacles
            .iter()
            .enumerate()
            .find(|(_, r)| !r.is_well_formed())
        {
            return invalid(format!("obstacle {i} is malformed: {rect:?}"));
        }

        let field = &self.field;
        if !(field.spacing.is_finite() && field.spacing >= MIN_PELLET_SPACING) {
            return invalid(format!(
                "field.spacing must be >= {MIN_PELLET_SPACING}, got {}",
                field.spacing
            ));
        }
        if !(field.margin >= 0.0 && field.margin < FIELD_EXTENT) {
            return invalid(format!(
                "field.margin must be in [0, {FIELD_EXTENT}), got {}",
                field.margin
            ));
        }
        if !(field.radius.is_finite() && field.radius >= 0.0) {
            return invalid(format!("field.radius must be >= 0, got {}", field.radius));
        }
        if !(field.avoid_radius.is_finite() && field.avoid_radius >= 0.0) {
            return invalid(format!(
                "field.avoid_radius must be >= 0, got {}",
                field.avoid_radius
            ));
        }
        if !field.avoid_center.is_finite() {
            return invalid("field.avoid_center must be finite".to_string());
        }
        Ok(())
    }

    pub fn player(&self) -> Player {
        Player::new(self.player_start, self.player_half_size, self.player_speed)
    }

    /// Build the initial state (empty pellet field)
    pub fn build_state(&self) -> GameState {
        let player = self.player();
        let obstacles = self.obstacles.clone();
        match self.max_pellets {
            Some(limit) => GameState::with_pellet_limit(player, obstacles, limit),
            None => GameState::new(player, obstacles),
        }
    }
}
