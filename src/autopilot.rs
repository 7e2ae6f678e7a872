//! Demo intent source
//!
//! Steers toward the nearest pellet. When the player stops making progress
//! (usually pinned against a wall) it commits to a random detour for a few
//! frames. Seeded, so a given seed replays the same run.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Body, Intent, SceneView};

/// Frames a detour lasts (inclusive range)
const DETOUR_MIN_FRAMES: u32 = 10;
const DETOUR_MAX_FRAMES: u32 = 40;
/// Movement below this per frame counts as stuck
const STUCK_EPSILON: f32 = 1e-5;

/// Eight compass directions, in a fixed order for seeded picks
const DIRECTIONS: [Intent; 8] = [
    Intent { up: true, down: false, left: false, right: false },
    Intent { up: true, down: false, left: false, right: true },
    Intent { up: false, down: false, left: false, right: true },
    Intent { up: false, down: true, left: false, right: true },
    Intent { up: false, down: true, left: false, right: false },
    Intent { up: false, down: true, left: true, right: false },
    Intent { up: false, down: false, left: true, right: false },
    Intent { up: true, down: false, left: true, right: false },
];

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    last_pos: Option<Vec2>,
    detour: Option<(Intent, u32)>,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            last_pos: None,
            detour: None,
        }
    }

    /// Choose the intent for the next frame
    pub fn next_intent(&mut self, view: &SceneView) -> Intent {
        let pos = view.player.pos;
        let stuck = self
            .last_pos
            .is_some_and(|last| last.distance_squared(pos) < STUCK_EPSILON * STUCK_EPSILON);
        self.last_pos = Some(pos);

        if let Some((intent, frames)) = self.detour.take() {
            if frames > 1 {
                self.detour = Some((intent, frames - 1));
            }
            return intent;
        }

        let Some(target) = nearest_pellet(view) else {
            return Intent::IDLE;
        };

        if stuck {
            let intent = DIRECTIONS[self.rng.random_range(0..DIRECTIONS.len())];
            let frames = self.rng.random_range(DETOUR_MIN_FRAMES..=DETOUR_MAX_FRAMES);
            log::debug!("Autopilot stuck at ({:.3}, {:.3}), detour for {} frames", pos.x, pos.y, frames);
            self.detour = Some((intent, frames - 1));
            return intent;
        }

        // Dead band keeps the token from jittering across the target axis
        let dead_band = view.player.effective_half().x * 0.25;
        steer(pos, target, dead_band)
    }
}

fn nearest_pellet(view: &SceneView) -> Option<Vec2> {
    let pos = view.player.pos;
    view.pellets
        .iter()
        .map(|p| p.pos)
        .min_by(|a, b| {
            a.distance_squared(pos)
                .partial_cmp(&b.distance_squared(pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

fn steer(from: Vec2, to: Vec2, dead_band: f32) -> Intent {
    let d = to - from;
    Intent {
        up: d.y > dead_band,
        down: d.y < -dead_band,
        left: d.x < -dead_band,
        right: d.x > dead_band,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Player, Rect, step};

    fn state_with_pellet(player: Vec2, pellet: Vec2, obstacles: Vec<Rect>) -> GameState {
        let mut state = GameState::new(Player::new(player, 0.05, 1.2), obstacles);
        state.pellets.insert(pellet.x, pellet.y, 0.02).unwrap();
        state
    }

    #[test]
    fn test_steers_toward_nearest() {
        let mut state = state_with_pellet(Vec2::ZERO, Vec2::new(0.5, 0.5), Vec::new());
        state.pellets.insert(-0.2, 0.0, 0.02).unwrap();
        let mut pilot = Autopilot::new(1);
        let intent = pilot.next_intent(&state.view());
        assert_eq!(
            intent,
            Intent {
                left: true,
                ..Intent::IDLE
            }
        );
    }

    #[test]
    fn test_idle_without_pellets() {
        let state = GameState::new(Player::default(), Vec::new());
        let mut pilot = Autopilot::new(1);
        assert!(pilot.next_intent(&state.view()).is_idle());
    }

    #[test]
    fn test_reaches_open_pellet() {
        let mut state = state_with_pellet(Vec2::new(-0.6, -0.4), Vec2::new(0.3, 0.2), Vec::new());
        let mut pilot = Autopilot::new(7);
        for _ in 0..240 {
            let intent = pilot.next_intent(&state.view());
            step(&mut state, &intent, 1.0 / 60.0);
            if state.pellet_count() == 0 {
                break;
            }
        }
        assert_eq!(state.pellet_count(), 0);
    }

    #[test]
    fn test_detours_when_pinned() {
        // Pellet straight behind a wall: pure steering would push forever
        let wall = Rect::new(0.0, 0.0, 0.05, 0.3);
        let state = state_with_pellet(Vec2::new(-0.15, 0.0), Vec2::new(0.3, 0.0), vec![wall]);
        let mut pilot = Autopilot::new(42);

        let first = pilot.next_intent(&state.view());
        assert!(first.right);
        // Same position again: the pilot commits to a compass detour
        let second = pilot.next_intent(&state.view());
        assert!(DIRECTIONS.contains(&second));
        let (detour, frames) = pilot.detour.expect("detour should be active");
        assert_eq!(detour, second);
        assert!((DETOUR_MIN_FRAMES - 1..DETOUR_MAX_FRAMES).contains(&frames));

        // The detour is replayed on the next frame regardless of steering
        assert_eq!(pilot.next_intent(&state.view()), second);
    }

    #[test]
    fn test_same_seed_same_run() {
        let wall = Rect::new(0.0, 0.0, 0.05, 0.3);
        let run = |seed: u64| {
            let mut state =
                state_with_pellet(Vec2::new(-0.15, 0.0), Vec2::new(0.3, 0.0), vec![wall]);
            let mut pilot = Autopilot::new(seed);
            let mut intents = Vec::new();
            for _ in 0..120 {
                let intent = pilot.next_intent(&state.view());
                step(&mut state, &intent, 1.0 / 60.0);
                intents.push(intent);
            }
            (intents, state.player.pos)
        };
        assert_eq!(run(9), run(9));
    }
}
