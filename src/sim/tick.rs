//! Per-frame simulation step
//!
//! Moves the player with axis-separated collision against the obstacles,
//! clamps to the field and eats every pellet under the player.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::bodies_overlap;
use super::rect::Rect;
use super::state::{GameState, Player};

/// Directional intent for a single step.
///
/// Flags are independent; opposite flags cancel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Intent {
    pub const IDLE: Intent = Intent {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Raw displacement for `speed * dt` (up is +y)
    pub fn displacement(&self, speed: f32, dt: f32) -> Vec2 {
        if !dt.is_finite() || dt <= 0.0 {
            return Vec2::ZERO;
        }
        let step = speed * dt;
        let mut d = Vec2::ZERO;
        if self.left {
            d.x -= step;
        }
        if self.right {
            d.x += step;
        }
        if self.up {
            d.y += step;
        }
        if self.down {
            d.y -= step;
        }
        d
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

/// Advance the simulation by `dt` seconds.
///
/// Non-positive or non-finite `dt` moves nothing, but the clamp and the
/// consumption pass still run.
pub fn step(state: &mut GameState, intent: &Intent, dt: f32) {
    let delta = intent.displacement(state.player.speed, dt);
    let before = state.pellets.len();

    move_player(&mut state.player, &state.obstacles, delta);
    state.player.clamp_to_field();
    let eaten = consume_pellets(state);

    if eaten > 0 {
        log::debug!(
            "Ate {} pellets at ({:.3}, {:.3}), {} -> {}",
            eaten,
            state.player.pos.x,
            state.player.pos.y,
            before,
            state.pellets.len()
        );
    }
}

/// Try x alone, then y on the (possibly updated) x. A blocked axis keeps its
/// old coordinate, which lets the player slide along walls.
fn move_player(player: &mut Player, obstacles: &[Rect], delta: Vec2) {
    if delta.x != 0.0 {
        let mut probe = *player;
        probe.pos.x += delta.x;
        if !blocked(&probe, obstacles) {
            player.pos.x = probe.pos.x;
        }
    }

    if delta.y != 0.0 {
        let mut probe = *player;
        probe.pos.y += delta.y;
        if !blocked(&probe, obstacles) {
            player.pos.y = probe.pos.y;
        }
    }
}

#[inline]
fn blocked(player: &Player, obstacles: &[Rect]) -> bool {
    obstacles.iter().any(|o| bodies_overlap(player, o))
}

/// Remove every pellet overlapping the player. Walks from the highest index
/// down so a swap-removed pellet never lands in a slot still to be visited.
fn consume_pellets(state: &mut GameState) -> usize {
    let mut eaten = 0;
    for i in (0..state.pellets.len()).rev() {
        let pellet = state.pellets.as_slice()[i];
        if bodies_overlap(&state.player, &pellet) {
            state.pellets.remove_at(i);
            eaten += 1;
        }
    }
    eaten
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::{Body, Pellet};
    use proptest::prelude::*;

    fn state_with(player_pos: Vec2, obstacles: Vec<Rect>) -> GameState {
        GameState::new(Player::new(player_pos, 0.05, 1.2), obstacles)
    }

    const RIGHT: Intent = Intent {
        right: true,
        ..Intent::IDLE
    };

    #[test]
    fn test_intent_displacement() {
        let all = Intent {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        assert_eq!(all.displacement(1.0, 0.5), Vec2::ZERO);

        let diag = Intent {
            up: true,
            left: true,
            ..Intent::IDLE
        };
        assert_eq!(diag.displacement(2.0, 0.25), Vec2::new(-0.5, 0.5));

        assert_eq!(RIGHT.displacement(1.0, -1.0), Vec2::ZERO);
        assert_eq!(RIGHT.displacement(1.0, f32::NAN), Vec2::ZERO);
        assert!(Intent::default().is_idle());
    }

    #[test]
    fn test_free_movement() {
        let mut state = state_with(Vec2::ZERO, Vec::new());
        let up = Intent {
            up: true,
            ..Intent::IDLE
        };
        step(&mut state, &up, 0.25);
        assert!((state.player.pos - Vec2::new(0.0, 0.3)).length() < 1e-6);
    }

    #[test]
    fn test_blocked_x_keeps_old_x() {
        // Obstacle just right of the player: reach 0.05 + 0.05 = 0.1, gap 0.11
        let obstacle = Rect::new(0.11, 0.0, 0.05, 0.05);
        let mut state = state_with(Vec2::ZERO, vec![obstacle]);

        step(&mut state, &RIGHT, SIM_DT * 2.0);

        assert_eq!(state.player.pos.x, 0.0);
        assert_eq!(state.player.pos.y, 0.0);
    }

    #[test]
    fn test_slides_along_wall() {
        let wall = Rect::new(0.11, 0.0, 0.05, 1.0);
        let mut state = state_with(Vec2::ZERO, vec![wall]);
        let up_right = Intent {
            up: true,
            right: true,
            ..Intent::IDLE
        };

        step(&mut state, &up_right, 0.1);

        assert_eq!(state.player.pos.x, 0.0);
        assert!((state.player.pos.y - 0.12).abs() < 1e-6);
    }

    #[test]
    fn test_y_uses_committed_x() {
        // Moving right clears the ledge above, so the y move succeeds
        let ledge = Rect::new(-0.06, 0.15, 0.05, 0.05);
        let mut state = state_with(Vec2::ZERO, vec![ledge]);
        let up_right = Intent {
            up: true,
            right: true,
            ..Intent::IDLE
        };

        step(&mut state, &up_right, 0.05);

        assert!((state.player.pos.x - 0.06).abs() < 1e-6);
        assert!((state.player.pos.y - 0.06).abs() < 1e-6);
    }

    #[test]
    fn test_clamped_at_border() {
        let mut state = state_with(Vec2::new(0.9, 0.0), Vec::new());
        step(&mut state, &RIGHT, 1.0);
        assert_eq!(state.player.pos.x, 1.0 - 0.05);
    }

    #[test]
    fn test_eats_exactly_overlapping_pellets() {
        let mut state = state_with(Vec2::ZERO, Vec::new());
        // Reach along x: 0.05 (player) + 0.01 (pellet)
        let positions = [
            (0.0, 0.0),
            (0.05, 0.0),
            (0.2, 0.0),
            (-0.03, 0.03),
            (0.0, 0.08), // just out of reach
            (0.5, 0.5),
        ];
        for (x, y) in positions {
            state.pellets.insert(x, y, 0.02).unwrap();
        }

        let expected = state
            .pellets
            .iter()
            .filter(|p| bodies_overlap(&state.player, *p))
            .count();
        assert_eq!(expected, 3);

        step(&mut state, &Intent::IDLE, SIM_DT);

        assert_eq!(state.pellet_count(), positions.len() - expected);
        assert!(state.pellets.iter().all(|p| !bodies_overlap(&state.player, p)));
    }

    #[test]
    fn test_eats_every_pellet_when_all_overlap() {
        // Swap-removal must not skip a pellet moved into a visited slot
        let mut state = state_with(Vec2::ZERO, Vec::new());
        for i in 0..7 {
            state.pellets.insert(i as f32 * 0.005, 0.0, 0.02).unwrap();
        }
        step(&mut state, &Intent::IDLE, SIM_DT);
        assert_eq!(state.pellet_count(), 0);
    }

    #[test]
    fn test_wall_stall_end_to_end() {
        // Solid right half of the field
        let wall = Rect::new(0.5, 0.0, 0.5, 1.0);
        let mut state = state_with(Vec2::new(-0.5, 0.0), vec![wall]);
        state.pellets.insert(-0.3, 0.0, 0.02).unwrap();
        state.pellets.insert(-0.3, 0.5, 0.02).unwrap();

        let step_len = state.player.speed * SIM_DT;
        // Far more frames than needed to reach the wall
        for _ in 0..240 {
            step(&mut state, &RIGHT, SIM_DT);
        }

        let stop = wall.center.x - wall.half.x - state.player.effective_half().x;
        let x = state.player.pos.x;
        assert!(x <= stop + 1e-5, "passed through wall: x = {x}");
        assert!(x > stop - step_len - 1e-5, "stalled too early: x = {x}");
        assert_eq!(state.player.pos.y, 0.0);

        // The pellet on the path was eaten, the one off-path was not
        assert_eq!(state.pellet_count(), 1);
        assert_eq!(state.pellets.get(0).map(|p| p.pos), Some(Vec2::new(-0.3, 0.5)));
    }

    #[test]
    fn test_count_never_grows() {
        let mut state = state_with(Vec2::new(-0.9, -0.9), Vec::new());
        for i in 0..20 {
            let t = i as f32 * 0.1 - 0.95;
            state.pellets.insert(t, t, 0.02).unwrap();
        }
        let diag = Intent {
            up: true,
            right: true,
            ..Intent::IDLE
        };
        let mut last = state.pellet_count();
        for _ in 0..300 {
            step(&mut state, &diag, SIM_DT);
            assert!(state.pellet_count() <= last);
            last = state.pellet_count();
        }
        assert_eq!(last, 0);
    }

    fn intent_strategy() -> impl Strategy<Value = Intent> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(up, down, left, right)| Intent {
                up,
                down,
                left,
                right,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_field(
            start_x in -1.0f32..1.0,
            start_y in -1.0f32..1.0,
            frames in prop::collection::vec((intent_strategy(), 0.0001f32..0.5), 1..60),
        ) {
            let mut state = state_with(Vec2::new(start_x, start_y), vec![Rect::new(0.3, 0.3, 0.1, 0.2)]);
            let limit = state.player.field_limit();
            for (intent, dt) in &frames {
                step(&mut state, intent, *dt);
                prop_assert!(state.player.pos.x.abs() <= limit);
                prop_assert!(state.player.pos.y.abs() <= limit);
            }
        }

        #[test]
        fn prop_consumption_matches_overlap_count(
            px in -0.9f32..0.9,
            py in -0.9f32..0.9,
            pellets in prop::collection::vec((-1.0f32..1.0, -1.0f32..1.0), 0..40),
        ) {
            let mut state = state_with(Vec2::new(px, py), Vec::new());
            for (x, y) in &pellets {
                state.pellets.insert(*x, *y, 0.05).unwrap();
            }
            let expected = state
                .pellets
                .iter()
                .filter(|p| bodies_overlap(&state.player, *p))
                .count();
            let before = state.pellet_count();

            step(&mut state, &Intent::IDLE, SIM_DT);

            prop_assert_eq!(before - state.pellet_count(), expected);
            let player = state.player;
            prop_assert!(state.pellets.iter().all(|p: &Pellet| !bodies_overlap(&player, p)));
        }
    }
}
