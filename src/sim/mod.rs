//! Simulation core
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No rendering or device access
//! - Intent and elapsed time are passed in per call
//! - Single owner (`GameState`), no interior mutability

pub mod collision;
pub mod error;
pub mod field;
pub mod pellets;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Body, VisualScale, bodies_overlap, effective_half, overlaps};
pub use error::AllocationError;
pub use field::{FieldParams, generate};
pub use pellets::{Pellet, PelletStore};
pub use rect::Rect;
pub use state::{GameState, Player, SceneView};
pub use tick::{Intent, step};
