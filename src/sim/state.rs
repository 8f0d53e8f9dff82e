//! Game state and core simulation types
//!
//! A single owned aggregate holds everything the physics step and renderer
//! read or write. The control surface (buttons, pointer) mutates it only
//! through the methods below.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// A paddle, identified by which wall it defends. Only the top-edge Y
/// coordinate moves; width, height and the wall X are fixed constants.
///
/// Y is never clamped to the canvas: both the pointer and the tracking
/// heuristic can push a paddle past the top or bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    /// Top edge Y coordinate
    pub y: f32,
}

impl Paddle {
    /// A paddle vertically centered for the given canvas height
    pub fn centered(canvas_height: f32) -> Self {
        Self {
            y: (canvas_height - PADDLE_HEIGHT) / 2.0,
        }
    }

    /// Vertical center of the paddle
    pub fn center(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }
}

/// The ball: a moving point with a constant per-tick velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Ball centered in the canvas with the fixed initial velocity
    pub fn serve(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            pos: Vec2::new(canvas_width / 2.0, canvas_height / 2.0),
            vel: Vec2::new(BALL_START_SPEED_X, BALL_START_SPEED_Y),
        }
    }
}

/// Human and computer scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    pub player: u32,
    pub ai: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Canvas width in game units (updated on responsive resize)
    pub width: f32,
    /// Canvas height in game units
    pub height: f32,
    /// Human paddle, left wall
    pub player: Paddle,
    /// Computer paddle, right wall
    pub ai: Paddle,
    pub ball: Ball,
    pub scores: ScoreBoard,
    /// Set once by Start; never reverts (there is no stop path)
    pub running: bool,
    /// Toggled by Pause/Resume while running
    pub paused: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seeded RNG for serve spin
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given canvas size and seed
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            width,
            height,
            player: Paddle::centered(height),
            ai: Paddle::centered(height),
            ball: Ball::serve(width, height),
            scores: ScoreBoard::default(),
            running: false,
            paused: false,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Pointer-move input: center the human paddle on the pointer.
    /// Applied whenever the event arrives, even before Start or while
    /// paused, and never clamped to the canvas.
    pub fn apply_pointer(&mut self, pointer_y: f32) {
        self.player.y = pointer_y - PADDLE_HEIGHT / 2.0;
    }

    /// Start action. Returns true when this call actually started the game
    /// (the caller begins the frame loop); a no-op once running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.paused = false;
        true
    }

    /// Pause/Resume action. Returns the new paused flag, or `None` when the
    /// game has not been started yet.
    pub fn toggle_pause(&mut self) -> Option<bool> {
        if !self.running {
            return None;
        }
        self.paused = !self.paused;
        Some(self.paused)
    }

    /// Reset action: zero both scores and re-serve the ball. Paddle
    /// positions and the running/paused flags are left alone.
    pub fn reset(&mut self) {
        self.scores = ScoreBoard::default();
        self.reset_ball();
    }

    /// Serve reset, run after every point and on Reset: re-center the ball,
    /// reverse whatever horizontal direction was in effect and redraw the
    /// vertical speed from [-SERVE_SPIN, SERVE_SPIN).
    pub fn reset_ball(&mut self) {
        self.ball.pos = Vec2::new(self.width / 2.0, self.height / 2.0);
        self.ball.vel.x = -self.ball.vel.x;
        self.ball.vel.y = self.rng.random_range(-SERVE_SPIN..SERVE_SPIN);
    }

    /// Responsive resize: fit the container width up to the cap, keeping
    /// the design aspect ratio. Entity positions are not rescaled.
    pub fn resize(&mut self, container_width: f32) {
        self.width = container_width.min(MAX_CANVAS_WIDTH);
        self.height = BASE_HEIGHT * (self.width / BASE_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn state() -> GameState {
        GameState::new(BASE_WIDTH, BASE_HEIGHT, 7)
    }

    #[test]
    fn new_state_is_centered_and_idle() {
        let s = state();
        assert_eq!(s.player.y, (BASE_HEIGHT - PADDLE_HEIGHT) / 2.0);
        assert_eq!(s.ai.y, s.player.y);
        assert_eq!(s.ball.pos, Vec2::new(BASE_WIDTH / 2.0, BASE_HEIGHT / 2.0));
        assert_eq!(s.ball.vel, Vec2::new(BALL_START_SPEED_X, BALL_START_SPEED_Y));
        assert!(!s.running);
        assert!(!s.paused);
    }

    #[test]
    fn pointer_maps_to_top_edge_unclamped() {
        let mut s = state();
        s.apply_pointer(100.0);
        assert_eq!(s.player.y, 100.0 - PADDLE_HEIGHT / 2.0);

        // Above the canvas: no clamp
        s.apply_pointer(-50.0);
        assert_eq!(s.player.y, -50.0 - PADDLE_HEIGHT / 2.0);

        // Below the canvas: no clamp either
        s.apply_pointer(BASE_HEIGHT + 200.0);
        assert_eq!(s.player.y, BASE_HEIGHT + 200.0 - PADDLE_HEIGHT / 2.0);
    }

    #[test]
    fn start_is_idempotent() {
        let mut s = state();
        assert!(s.start());
        assert!(s.running);
        assert!(!s.paused);

        // Second start does nothing
        assert!(!s.start());
        assert!(s.running);
    }

    #[test]
    fn start_clears_a_pending_pause() {
        let mut s = state();
        s.paused = true;
        assert!(s.start());
        assert!(!s.paused);
    }

    #[test]
    fn pause_requires_running() {
        let mut s = state();
        assert_eq!(s.toggle_pause(), None);

        s.start();
        assert_eq!(s.toggle_pause(), Some(true));
        assert_eq!(s.toggle_pause(), Some(false));
    }

    #[test]
    fn reset_zeroes_scores_and_recenters_ball_only() {
        let mut s = state();
        s.start();
        s.scores = ScoreBoard { player: 3, ai: 5 };
        s.player.y = 12.0;
        s.ai.y = 300.0;
        s.ball.pos = Vec2::new(17.0, 29.0);

        s.reset();

        assert_eq!(s.scores, ScoreBoard::default());
        assert_eq!(s.ball.pos, Vec2::new(BASE_WIDTH / 2.0, BASE_HEIGHT / 2.0));
        // Paddles and flags untouched
        assert_eq!(s.player.y, 12.0);
        assert_eq!(s.ai.y, 300.0);
        assert!(s.running);
        assert!(!s.paused);
    }

    #[test]
    fn serve_reverses_current_horizontal_direction() {
        let mut s = state();
        s.ball.vel.x = -5.0;
        s.reset_ball();
        assert_eq!(s.ball.vel.x, 5.0);
        s.reset_ball();
        assert_eq!(s.ball.vel.x, -5.0);
    }

    #[test]
    fn serve_spin_stays_in_range() {
        let mut s = state();
        for _ in 0..200 {
            s.reset_ball();
            assert!((-SERVE_SPIN..SERVE_SPIN).contains(&s.ball.vel.y));
        }
    }

    #[test]
    fn resize_caps_width_and_keeps_aspect() {
        let mut s = state();
        s.resize(900.0);
        assert_eq!(s.width, MAX_CANVAS_WIDTH);
        assert_eq!(s.height, BASE_HEIGHT);

        s.resize(300.0);
        assert_eq!(s.width, 300.0);
        assert_eq!(s.height, 200.0);
    }
}
