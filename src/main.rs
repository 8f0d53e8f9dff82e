//! Retro Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent};

    use retro_pong::renderer::CanvasRenderer;
    use retro_pong::settings::Settings;
    use retro_pong::sim::{GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        settings: Settings,
    }

    impl Game {
        /// Render the current frame
        fn render(&self) {
            if let Err(e) = self.renderer.draw(&self.state) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Synchronize the two score text elements with the state
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("playerScore") {
                el.set_text_content(Some(&self.state.scores.player.to_string()));
            }
            if let Some(el) = document.get_element_by_id("aiScore") {
                el.set_text_content(Some(&self.state.scores.ai.to_string()));
            }
        }

        /// Apply the dark-mode preference to the page and toggle button
        fn apply_dark_mode(&self, document: &Document) {
            if let Some(body) = document.body() {
                let class_list = body.class_list();
                let _ = if self.settings.dark_mode {
                    class_list.add_1("dark-mode")
                } else {
                    class_list.remove_1("dark-mode")
                };
            }
            if let Some(btn) = document.get_element_by_id("darkModeToggle") {
                btn.set_text_content(Some(self.settings.dark_mode_label()));
            }
        }
    }

    /// Size the canvas element to its container, capped at the design width
    /// and preserving the aspect ratio, and mirror the size into the state.
    fn resize_canvas(document: &Document, canvas: &HtmlCanvasElement, state: &mut GameState) {
        let container_width = document
            .get_element_by_id("pongContainer")
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| el.offset_width() as f32)
            .unwrap_or(retro_pong::consts::BASE_WIDTH);

        state.resize(container_width);
        canvas.set_width(state.width as u32);
        canvas.set_height(state.height as u32);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Retro Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let seed = js_sys::Date::now() as u64;
        let mut state = GameState::new(
            retro_pong::consts::BASE_WIDTH,
            retro_pong::consts::BASE_HEIGHT,
            seed,
        );
        resize_canvas(&document, &canvas, &mut state);

        let renderer = CanvasRenderer::new(&canvas).expect("no 2d context");
        let settings = Settings::load();

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer,
            settings,
        }));

        log::info!("Game initialized with seed: {}", seed);

        game.borrow().apply_dark_mode(&document);

        setup_pointer_input(&canvas, game.clone());
        setup_buttons(&document, game.clone());
        setup_dark_mode_toggle(&document, game.clone());
        setup_resize(&canvas, game.clone());

        // Initial frame before any Start
        game.borrow().render();

        log::info!("Retro Pong ready");
    }

    /// Mouse control: the human paddle follows the pointer over the canvas
    fn setup_pointer_input(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let pointer_y = event.client_y() as f32 - rect.top() as f32;
            game.borrow_mut().state.apply_pointer(pointer_y);
        });
        let _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        // Start: begin the frame loop exactly once
        if let Some(btn) = document.get_element_by_id("startBtn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let started = game.borrow_mut().state.start();
                if started {
                    set_pause_label(false);
                    log::info!("Game started");
                    request_animation_frame(game.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pause/Resume: flips the paused flag; the loop keeps scheduling
        if let Some(btn) = document.get_element_by_id("pauseBtn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if let Some(paused) = game.borrow_mut().state.toggle_pause() {
                    set_pause_label(paused);
                    log::info!("Paused: {}", paused);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Reset: scores and ball only; paddles and flags stay
        if let Some(btn) = document.get_element_by_id("resetBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.state.reset();
                g.update_hud();
                log::info!("Scores reset");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn set_pause_label(paused: bool) {
        let label = if paused { "Resume" } else { "Pause" };
        if let Some(btn) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("pauseBtn"))
        {
            btn.set_text_content(Some(label));
        }
    }

    fn setup_dark_mode_toggle(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(btn) = document.get_element_by_id("darkModeToggle") else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut g = game.borrow_mut();
            g.settings.dark_mode = !g.settings.dark_mode;
            g.settings.save();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.apply_dark_mode(&document);
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Responsive resize on window resize (initial sizing happens in run)
    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                resize_canvas(&document, &canvas_clone, &mut game.borrow_mut().state);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let running = {
            let mut g = game.borrow_mut();
            tick(&mut g.state);
            g.render();
            g.update_hud();
            g.state.running
        };

        // Once started, running never reverts; the recursion is permanent
        if running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use retro_pong::consts::{BASE_HEIGHT, BASE_WIDTH};
    use retro_pong::sim::{GameState, tick};
    use retro_pong::sim::tick::track_ball;
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();
    log::info!("Retro Pong (native) starting...");
    log::info!("The playable version targets the browser; running a headless demo.");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(BASE_WIDTH, BASE_HEIGHT, seed);
    state.start();

    // Let the tracking heuristic drive both paddles for a while
    for _ in 0..2000 {
        let ball_y = state.ball.pos.y;
        track_ball(&mut state.player, ball_y);
        tick(&mut state);
    }

    log::info!(
        "After {} ticks: player {} - {} ai",
        state.time_ticks,
        state.scores.player,
        state.scores.ai
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
