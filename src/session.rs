//! Frame-loop collaborator
//!
//! Owns the `GameState`, turns wall-clock frame deltas into fixed simulation
//! substeps, and keeps score by diffing the pellet count around each update.

use crate::consts::*;
use crate::scenario::{Scenario, ScenarioError};
use crate::sim::{GameState, Intent, SceneView, step};

/// Input for one rendered frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub intent: Intent,
    /// Stop the frame loop; never reaches the simulation
    pub quit: bool,
}

/// What happened during one `Session::update`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Pellets eaten this frame
    pub eaten: usize,
    /// Simulation substeps run
    pub substeps: u32,
    /// The last pellet was eaten this frame
    pub cleared: bool,
    /// Quit was requested; nothing was simulated
    pub quit: bool,
}

/// A running scenario
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    accumulator: f32,
    score: u64,
    pellets_eaten: usize,
    frames: u64,
}

impl Session {
    /// Validate the scenario, build the state and seed the pellet field.
    ///
    /// A store growth failure during seeding is not fatal: the run continues
    /// with the pellets placed so far.
    pub fn new(scenario: &Scenario) -> Result<Self, ScenarioError> {
        scenario.validate()?;
        let mut state = scenario.build_state();
        if let Err(e) = state.generate_field(&scenario.field) {
            log::warn!(
                "Field generation stopped early ({}), continuing with {} pellets",
                e,
                state.pellet_count()
            );
        }
        log::info!(
            "Session '{}' ready: {} obstacles, {} pellets",
            scenario.name,
            state.obstacles().len(),
            state.pellet_count()
        );
        Ok(Self::from_state(state))
    }

    /// Wrap an already-built state
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            accumulator: 0.0,
            score: 0,
            pellets_eaten: 0,
            frames: 0,
        }
    }

    /// Advance by one rendered frame of `frame_dt` seconds
    pub fn update(&mut self, frame_dt: f32, input: &FrameInput) -> FrameReport {
        if input.quit {
            return FrameReport {
                quit: true,
                ..Default::default()
            };
        }

        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;
        self.frames += 1;

        let before = self.state.pellet_count();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            step(&mut self.state, &input.intent, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog instead of trying to catch up next frame
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        let eaten = before - self.state.pellet_count();
        self.pellets_eaten += eaten;
        self.score += eaten as u64 * POINTS_PER_PELLET;

        let cleared = eaten > 0 && self.state.pellet_count() == 0;
        if cleared {
            log::info!(
                "Field cleared after {} frames, score {}",
                self.frames,
                self.score
            );
        }

        FrameReport {
            eaten,
            substeps,
            cleared,
            quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self) -> SceneView<'_> {
        self.state.view()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn pellets_eaten(&self) -> usize {
        self.pellets_eaten
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_cleared(&self) -> bool {
        self.state.pellet_count() == 0
    }
}
