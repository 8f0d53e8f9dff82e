//! Collision predicates for the physics step
//!
//! Everything here is a current-frame point check against axis-aligned
//! geometry. There is no swept collision: a fast enough ball can tunnel
//! through a paddle.

use crate::consts::{PADDLE_HEIGHT, PADDLE_WIDTH};

/// True when the ball Y lies strictly inside a paddle's vertical span
/// `(paddle_y, paddle_y + PADDLE_HEIGHT)`. The edges themselves miss.
#[inline]
pub fn ball_in_span(ball_y: f32, paddle_y: f32) -> bool {
    ball_y > paddle_y && ball_y < paddle_y + PADDLE_HEIGHT
}

/// True when the ball has reached the left paddle's depth
#[inline]
pub fn at_left_paddle(ball_x: f32) -> bool {
    ball_x < PADDLE_WIDTH
}

/// True when the ball has reached the right paddle's depth
#[inline]
pub fn at_right_paddle(ball_x: f32, canvas_width: f32) -> bool {
    ball_x > canvas_width - PADDLE_WIDTH
}

/// True when the ball Y has left the playfield vertically. The position is
/// not corrected afterwards; the step only flips the vertical velocity.
#[inline]
pub fn out_of_vertical_bounds(ball_y: f32, canvas_height: f32) -> bool {
    ball_y < 0.0 || ball_y > canvas_height
}

/// True when the ball has crossed the left wall (point for the computer)
#[inline]
pub fn crossed_left_wall(ball_x: f32) -> bool {
    ball_x < 0.0
}

/// True when the ball has crossed the right wall (point for the human)
#[inline]
pub fn crossed_right_wall(ball_x: f32, canvas_width: f32) -> bool {
    ball_x > canvas_width
}
