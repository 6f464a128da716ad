use crate::game::animation::{AnimationSet, Playback};
use crate::game::constants::*;

/// The direction the player walks this tick, if any.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveDir {
    Left,
    Right,
    Up,
    Down,
}

/// Which arrow keys are currently held down.
#[derive(Copy, Clone, Debug, Default)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

#[derive(Clone, Debug)]
pub struct Player {
    // Position (center, in world pixels):
    pub x: f32,
    pub y: f32,

    // Velocity (pixels per second):
    pub dx: f32,
    pub dy: f32,

    // Sprite state:
    pub flip_x: bool,
    pub playback: Playback,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            dx: 0.,
            dy: 0.,
            flip_x: false,
            playback: Playback::new(),
        }
    }
}

/// Reduce the held arrow keys to at most one direction. Left wins over
/// right, and any horizontal wins over vertical; up wins over down.
pub fn resolve_direction(keys: &HeldKeys) -> Option<MoveDir> {
    if keys.left {
        Some(MoveDir::Left)
    } else if keys.right {
        Some(MoveDir::Right)
    } else if keys.up {
        Some(MoveDir::Up)
    } else if keys.down {
        Some(MoveDir::Down)
    } else {
        None
    }
}

/// Apply one tick's resolved direction: set the velocity for this tick
/// and drive the run animation (or fall back to the idle frame).
pub fn apply_move(player: &mut Player, animations: &AnimationSet, dir: Option<MoveDir>) {
    // Velocity never carries over between ticks.
    player.dx = 0.;
    player.dy = 0.;

    match dir {
        Some(MoveDir::Left) => {
            player.dx = -PLAYER_SPEED;
            player.playback.play(animations, RUN_ANIMATION);
            player.flip_x = true;
        }
        Some(MoveDir::Right) => {
            player.dx = PLAYER_SPEED;
            player.playback.play(animations, RUN_ANIMATION);
            player.flip_x = false;
        }
        Some(MoveDir::Up) => {
            player.dy = -PLAYER_SPEED;
            player.playback.play(animations, RUN_ANIMATION);
        }
        Some(MoveDir::Down) => {
            player.dy = PLAYER_SPEED;
            player.playback.play(animations, RUN_ANIMATION);
        }
        None => {
            player.playback.stop();
            player.playback.set_frame(IDLE_FRAME);
        }
    }
}

/// Integrate the player's velocity over dt seconds.
pub fn integrate_player(player: &mut Player, dt: f32) {
    player.x += player.dx * dt;
    player.y += player.dy * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::animation::Animation;

    fn animations() -> AnimationSet {
        let mut animations = AnimationSet::new();
        animations.insert(
            RUN_ANIMATION,
            Animation {
                first: RUN_FIRST_FRAME,
                last: RUN_LAST_FRAME,
                frame_rate: RUN_FRAME_RATE,
                looped: true,
            },
        );
        animations
    }

    fn held(left: bool, right: bool, up: bool, down: bool) -> HeldKeys {
        HeldKeys {
            left,
            right,
            up,
            down,
        }
    }

    #[test]
    fn test_resolve_single_keys() {
        assert_eq!(
            resolve_direction(&held(true, false, false, false)),
            Some(MoveDir::Left)
        );
        assert_eq!(
            resolve_direction(&held(false, true, false, false)),
            Some(MoveDir::Right)
        );
        assert_eq!(
            resolve_direction(&held(false, false, true, false)),
            Some(MoveDir::Up)
        );
        assert_eq!(
            resolve_direction(&held(false, false, false, true)),
            Some(MoveDir::Down)
        );
        assert_eq!(resolve_direction(&held(false, false, false, false)), None);
    }

    #[test]
    fn test_resolve_priority_order() {
        // Left beats everything.
        assert_eq!(
            resolve_direction(&held(true, true, true, true)),
            Some(MoveDir::Left)
        );
        // Right beats vertical.
        assert_eq!(
            resolve_direction(&held(false, true, true, true)),
            Some(MoveDir::Right)
        );
        // Up beats down.
        assert_eq!(
            resolve_direction(&held(false, false, true, true)),
            Some(MoveDir::Up)
        );
    }

    #[test]
    fn test_move_left_sets_velocity_and_flips() {
        let animations = animations();
        let mut player = Player::new(400., 300.);

        apply_move(&mut player, &animations, Some(MoveDir::Left));
        assert_eq!(player.dx, -PLAYER_SPEED);
        assert_eq!(player.dy, 0.);
        assert!(player.flip_x);
        assert_eq!(player.playback.current(), Some(RUN_ANIMATION));
        assert!(player.playback.is_running());
    }

    #[test]
    fn test_move_right_unflips() {
        let animations = animations();
        let mut player = Player::new(400., 300.);

        apply_move(&mut player, &animations, Some(MoveDir::Left));
        apply_move(&mut player, &animations, Some(MoveDir::Right));
        assert_eq!(player.dx, PLAYER_SPEED);
        assert_eq!(player.dy, 0.);
        assert!(!player.flip_x);
    }

    #[test]
    fn test_vertical_moves_keep_facing() {
        let animations = animations();
        let mut player = Player::new(400., 300.);

        apply_move(&mut player, &animations, Some(MoveDir::Left));
        apply_move(&mut player, &animations, Some(MoveDir::Up));
        assert_eq!(player.dx, 0.);
        assert_eq!(player.dy, -PLAYER_SPEED);
        assert!(player.flip_x); // Facing survives vertical movement.

        apply_move(&mut player, &animations, Some(MoveDir::Down));
        assert_eq!(player.dx, 0.);
        assert_eq!(player.dy, PLAYER_SPEED);
        assert!(player.flip_x);
    }

    #[test]
    fn test_no_keys_idles_on_frame_zero() {
        let animations = animations();
        let mut player = Player::new(400., 300.);

        apply_move(&mut player, &animations, Some(MoveDir::Right));
        player.playback.advance(&animations, 0.25);
        assert_ne!(player.playback.frame(), IDLE_FRAME);

        apply_move(&mut player, &animations, None);
        assert_eq!(player.dx, 0.);
        assert_eq!(player.dy, 0.);
        assert!(!player.playback.is_running());
        assert_eq!(player.playback.frame(), IDLE_FRAME);
    }

    #[test]
    fn test_run_does_not_restart_midway() {
        let animations = animations();
        let mut player = Player::new(400., 300.);

        apply_move(&mut player, &animations, Some(MoveDir::Right));
        player.playback.advance(&animations, 0.25);
        let frame = player.playback.frame();

        // Holding a new direction keeps the run cycle where it was.
        apply_move(&mut player, &animations, Some(MoveDir::Up));
        assert_eq!(player.playback.frame(), frame);
    }

    #[test]
    fn test_integration_step_distance() {
        let animations = animations();
        let mut player = Player::new(400., 300.);

        apply_move(&mut player, &animations, Some(MoveDir::Right));
        integrate_player(&mut player, 1. / 60.);
        assert!((player.x - (400. + PLAYER_SPEED / 60.)).abs() < 1e-4);
        assert_eq!(player.y, 300.);
    }
}
