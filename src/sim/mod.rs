//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One conceptual tick per animation frame (frame-count-based motion)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{ball_in_span, crossed_left_wall, crossed_right_wall, out_of_vertical_bounds};
pub use state::{Ball, GameState, Paddle, ScoreBoard};
pub use tick::tick;
