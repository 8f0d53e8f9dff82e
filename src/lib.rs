//! Retro Pong - a classic two-paddle canvas game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics step, collisions, game state)
//! - `renderer`: 2D canvas rendering
//! - `settings`: UI preferences persisted to LocalStorage

#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Design-size canvas (resize keeps this aspect ratio)
    pub const BASE_WIDTH: f32 = 600.0;
    pub const BASE_HEIGHT: f32 = 400.0;
    /// Responsive resize never grows past this width
    pub const MAX_CANVAS_WIDTH: f32 = 600.0;

    /// Paddle dimensions (both sides)
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 70.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_START_SPEED_X: f32 = 5.0;
    pub const BALL_START_SPEED_Y: f32 = 4.0;
    /// Serve vertical speed is drawn uniformly from [-SERVE_SPIN, SERVE_SPIN)
    pub const SERVE_SPIN: f32 = 2.0;

    /// Computer paddle holds while its center is within this band of the ball
    pub const AI_DEAD_ZONE: f32 = 10.0;
    /// Computer paddle's fixed vertical step per tick when chasing
    pub const AI_STEP: f32 = 6.0;

    /// Center net dashes (width x height, repeated every spacing)
    pub const NET_SEGMENT_WIDTH: f32 = 2.0;
    pub const NET_SEGMENT_HEIGHT: f32 = 10.0;
    pub const NET_SEGMENT_SPACING: f32 = 15.0;
}
