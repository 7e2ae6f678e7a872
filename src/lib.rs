//! Pellet Arena - a maze arena where a player token eats pellets
//!
//! Core modules:
//! - `sim`: Simulation core (overlap tests, pellet store, field generation, step)
//! - `render`: Render-ready geometry built from a read-only scene view
//! - `scenario`: Data-driven scenario layout (JSON)
//! - `session`: Frame-loop collaborator (substeps, score, clear detection)
//! - `autopilot`: Demo intent source for headless runs

pub mod autopilot;
pub mod render;
pub mod scenario;
pub mod session;
pub mod sim;

pub use scenario::{Scenario, ScenarioError};
pub use session::{FrameInput, FrameReport, Session};

/// Game configuration constants
pub mod consts {
    use crate::sim::VisualScale;

    /// Fixed simulation substep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta accepted from the caller (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Field spans [-FIELD_EXTENT, FIELD_EXTENT] on both axes
    pub const FIELD_EXTENT: f32 = 1.0;

    /// Player defaults
    pub const PLAYER_HALF_SIZE: f32 = 0.05;
    pub const PLAYER_SPEED: f32 = 1.2; // field units per second

    /// Pellet field defaults
    pub const PELLET_RADIUS: f32 = 0.02;
    pub const PELLET_SPACING: f32 = 0.1;
    /// Finest grid a scenario may ask for (2000 cells per axis)
    pub const MIN_PELLET_SPACING: f32 = 1e-3;
    pub const PELLET_MARGIN: f32 = 0.05;
    pub const PLAYER_CLEARANCE: f32 = 0.15;

    /// Score awarded per pellet eaten
    pub const POINTS_PER_PELLET: u64 = 10;

    /// Per-class visual scale. Effective half-extent is `stored * scale * 0.5`,
    /// so a scale of 2.0 means the stored value already is a half-extent and
    /// 1.0 means the stored value is the full visual size.
    pub const OBSTACLE_SCALE: VisualScale = VisualScale::splat(2.0);
    pub const PELLET_SCALE: VisualScale = VisualScale::splat(1.0);
    pub const PLAYER_SCALE: VisualScale = VisualScale::splat(2.0);
}
