//! Dodge Drop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use dodge_drop::renderer::{CanvasSurface, ElementLabel};
    use dodge_drop::sim::{Arena, InputEvent};
    use dodge_drop::{FrameOutcome, Game, GameConfig};

    /// Game instance plus the page elements it draws to
    struct Host {
        game: Game,
        surface: CanvasSurface,
        score: Option<ElementLabel>,
    }

    impl Host {
        fn frame(&mut self) -> FrameOutcome {
            let Host {
                game,
                surface,
                score,
            } = self;
            game.frame(surface, score)
        }
    }

    fn js_error(msg: &str) -> JsValue {
        JsValue::from_str(msg)
    }

    /// Read the optional JSON config from the canvas, falling back to defaults
    fn load_config(canvas: &HtmlCanvasElement) -> GameConfig {
        match canvas.get_attribute("data-config") {
            Some(json) => match GameConfig::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from data-config");
                    config
                }
                Err(e) => {
                    log::warn!("Invalid data-config ({}), using defaults", e);
                    GameConfig::default()
                }
            },
            None => GameConfig::default(),
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| js_error(&format!("Failed to init logger: {e}")))?;

        log::info!("Dodge Drop starting...");

        let window = web_sys::window().ok_or_else(|| js_error("no window"))?;
        let document = window.document().ok_or_else(|| js_error("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| js_error("no canvas"))?
            .dyn_into()
            .map_err(|_| js_error("not a canvas"))?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| js_error("no 2d context"))?
            .dyn_into()
            .map_err(|_| js_error("not a 2d context"))?;

        // Canvas size is read once; everything else derives from it
        let arena = Arena::new(canvas.width() as i32, canvas.height() as i32);
        let config = load_config(&canvas);
        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);

        let score = document.get_element_by_id("score").map(ElementLabel);
        if score.is_none() {
            log::warn!("No #score element, score label disabled");
        }

        let host = Rc::new(RefCell::new(Host {
            game: Game::new(config, arena, seed),
            surface: CanvasSurface::new(ctx),
            score,
        }));

        log::info!(
            "Game initialized with seed {} on {}x{} canvas",
            seed,
            arena.width,
            arena.height
        );

        setup_input_handlers(&document, host.clone())?;

        // Start game loop
        request_animation_frame(host);

        log::info!("Dodge Drop running!");
        Ok(())
    }

    fn setup_input_handlers(
        document: &web_sys::Document,
        host: Rc<RefCell<Host>>,
    ) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(input) = InputEvent::from_key(&event.key()) {
                host.borrow_mut().game.handle_input(input);
            }
        });
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, cannot schedule frame");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(host);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>) {
        let outcome = host.borrow_mut().frame();

        match outcome {
            FrameOutcome::Continue => request_animation_frame(host),
            FrameOutcome::Halt => {
                let score = host.borrow().game.state().score;
                log::info!("Loop stopped, final score {}", score);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Dodge Drop (native) starting...");
    log::info!("Native mode has no canvas - running a headless game");

    headless::run(0x5eed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use dodge_drop::renderer::{Color, Font, ScoreDisplay, Surface};
    use dodge_drop::sim::{Aabb, Arena, InputEvent};
    use dodge_drop::{FrameOutcome, Game, GameConfig};

    /// Frame cap so an unlucky bot still terminates
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    /// Discards drawing
    struct NullSurface;

    impl Surface for NullSurface {
        fn clear(&mut self, _region: Aabb) {}
        fn fill_rect(&mut self, _rect: Aabb, _color: Color) {}
        fn fill_text(&mut self, text: &str, _x: i32, _y: i32, _font: Font, _color: Color) {
            println!("{text}");
        }
    }

    struct LogLabel;

    impl ScoreDisplay for LogLabel {
        fn set_text(&mut self, label: &str) {
            log::trace!("{}", label);
        }
    }

    /// Pick a key press that steers away from the lowest obstacle above the player
    fn dodge(game: &Game) -> Option<InputEvent> {
        let state = game.state();
        let player = &state.player;
        let left = player.pos.x;
        let right = left + player.size.x;

        let threat = state
            .obstacles
            .iter()
            .filter(|o| o.pos.y < player.pos.y + player.size.y)
            .filter(|o| o.pos.x < right && o.pos.x + o.size.x > left)
            .max_by_key(|o| o.pos.y)?;

        let room_left = threat.pos.x;
        let room_right = state.arena.width - (threat.pos.x + threat.size.x);
        if room_left > room_right {
            Some(InputEvent::Left)
        } else {
            Some(InputEvent::Right)
        }
    }

    pub fn run(seed: u64) {
        let mut game = Game::new(GameConfig::default(), Arena::default(), seed);
        let mut surface = NullSurface;
        let mut label = LogLabel;

        let mut frames = 0;
        while frames < MAX_FRAMES {
            if let Some(input) = dodge(&game) {
                game.handle_input(input);
            }
            if game.frame(&mut surface, &mut label) == FrameOutcome::Halt {
                break;
            }
            frames += 1;
        }

        log::info!(
            "Headless run finished after {} frames: score {}",
            game.state().frames,
            game.state().score
        );
    }
}
