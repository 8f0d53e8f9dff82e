//! 2D canvas rendering module
//!
//! Draws the whole scene immediate-mode from the current game state:
//! background, dashed center net, two paddles, ball. The canvas palette is
//! fixed black-on-white regardless of the page's dark-mode styling.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::sim::GameState;

const BACKGROUND: &str = "black";
const FOREGROUND: &str = "white";

/// Renderer over a 2D canvas context. Reads game state, never writes it.
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Acquire the 2D context of the given canvas
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Draw one full frame
    pub fn draw(&self, state: &GameState) -> Result<(), JsValue> {
        self.fill_rect(0.0, 0.0, state.width, state.height, BACKGROUND);
        self.draw_net(state);

        self.fill_rect(0.0, state.player.y, PADDLE_WIDTH, PADDLE_HEIGHT, FOREGROUND);
        self.fill_rect(
            state.width - PADDLE_WIDTH,
            state.ai.y,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
            FOREGROUND,
        );

        self.fill_circle(state.ball.pos.x, state.ball.pos.y, BALL_RADIUS, FOREGROUND)
    }

    /// Dashed vertical net down the canvas center
    fn draw_net(&self, state: &GameState) {
        let x = state.width / 2.0 - NET_SEGMENT_WIDTH / 2.0;
        let mut y = 0.0;
        while y < state.height {
            self.fill_rect(x, y, NET_SEGMENT_WIDTH, NET_SEGMENT_HEIGHT, FOREGROUND);
            y += NET_SEGMENT_SPACING;
        }
    }

    fn fill_rect(&self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&self, x: f32, y: f32, r: f32, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx
            .arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU)?;
        self.ctx.fill();
        Ok(())
    }
}
