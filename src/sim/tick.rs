//! Per-frame physics step
//!
//! One call advances the simulation by one conceptual tick. Motion is
//! frame-count-based: positions move by one whole velocity per tick, with
//! no delta-time scaling.

use super::collision::{
    at_left_paddle, at_right_paddle, ball_in_span, crossed_left_wall, crossed_right_wall,
    out_of_vertical_bounds,
};
use super::state::{GameState, Paddle};
use crate::consts::{AI_DEAD_ZONE, AI_STEP};

/// Move a paddle one step toward the ball: a fixed-step proportional-band
/// controller with a dead zone, nothing smarter. Near-unbeatable anyway.
pub fn track_ball(paddle: &mut Paddle, ball_y: f32) {
    let center = paddle.center();
    if center < ball_y - AI_DEAD_ZONE {
        paddle.y += AI_STEP;
    } else if center > ball_y + AI_DEAD_ZONE {
        paddle.y -= AI_STEP;
    }
}

/// Advance the game by one tick. A no-op unless the game is running and
/// not paused; rendering happens regardless, outside this function.
pub fn tick(state: &mut GameState) {
    if !state.running || state.paused {
        return;
    }
    state.time_ticks += 1;

    // Integrate: unit-timestep Euler step
    state.ball.pos += state.ball.vel;

    // Top/bottom bounce. The position is left where it is, so the ball can
    // visually overshoot the edge before turning around.
    if out_of_vertical_bounds(state.ball.pos.y, state.height) {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Human paddle, left wall
    if at_left_paddle(state.ball.pos.x) && ball_in_span(state.ball.pos.y, state.player.y) {
        state.ball.vel.x = -state.ball.vel.x;
    }

    // Computer paddle, right wall
    if at_right_paddle(state.ball.pos.x, state.width) && ball_in_span(state.ball.pos.y, state.ai.y)
    {
        state.ball.vel.x = -state.ball.vel.x;
    }

    let ball_y = state.ball.pos.y;
    track_ball(&mut state.ai, ball_y);

    // Scoring. Both walls are checked independently each tick; with
    // continuous motion only one can fire.
    if crossed_left_wall(state.ball.pos.x) {
        state.scores.ai += 1;
        state.reset_ball();
    }
    if crossed_right_wall(state.ball.pos.x, state.width) {
        state.scores.player += 1;
        state.reset_ball();
    }
}
