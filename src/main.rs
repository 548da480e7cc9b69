//! Snack Run entry point
//!
//! On the web: wires the canvas, input events and requestAnimationFrame loop.
//! Natively: runs a headless attract-mode session driven by the autopilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent, PointerEvent,
    };

    use snack_run::BestScore;
    use snack_run::config::{SimConfig, Variant};
    use snack_run::hud::Hud;
    use snack_run::platform::{FrameClock, InputMapper, RawInput};
    use snack_run::renderer::{Theme, build_scene};
    use snack_run::sim;

    /// Game instance holding all state
    struct App {
        game: sim::Game,
        clock: FrameClock,
        input: InputMapper,
        hud: Hud,
        best: BestScore,
        theme: Theme,
        ctx: CanvasRenderingContext2d,
        document: Document,
        persist_best: bool,
    }

    impl App {
        /// Run one simulation step
        fn update(&mut self, time: f64) {
            let dt = self.clock.advance(time);
            self.game.tick(dt);

            let events = self.game.drain_events();
            self.hud.observe(&events);
            if self.best.observe(&events) && self.persist_best {
                self.best.save();
            }
        }

        fn render(&self) {
            for quad in build_scene(&self.game, &self.theme) {
                self.ctx.set_fill_style_str(&css_color(quad.color));
                self.ctx.fill_rect(
                    quad.pos.x as f64,
                    quad.pos.y as f64,
                    quad.size.x as f64,
                    quad.size.y as f64,
                );
            }
        }

        fn update_hud(&self) {
            let snap = self.hud.snapshot(&self.game);
            let best = snap.best.max(self.best.best);
            for (id, text) in [
                ("score", snap.score.to_string()),
                ("best", best.to_string()),
                ("status", snap.status.to_string()),
            ] {
                if let Some(el) = self.document.get_element_by_id(id) {
                    el.set_text_content(Some(&text));
                }
            }
        }

        fn handle(&mut self, raw: RawInput, time: f64) {
            self.input.apply(&raw, &mut self.game, time);
        }
    }

    fn css_color(c: [f32; 4]) -> String {
        format!(
            "rgb({}, {}, {})",
            (c[0] * 255.0).round() as u8,
            (c[1] * 255.0).round() as u8,
            (c[2] * 255.0).round() as u8
        )
    }

    /// Variant from the page URL (`?variant=night`)
    fn variant_from_location(window: &web_sys::Window) -> Variant {
        window
            .location()
            .search()
            .ok()
            .and_then(|query| {
                query
                    .trim_start_matches('?')
                    .split('&')
                    .find_map(|pair| pair.strip_prefix("variant="))
                    .and_then(Variant::from_str)
            })
            .unwrap_or_default()
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Snack Run starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let variant = variant_from_location(&window);
        let config = SimConfig {
            view_width: canvas.width() as f32,
            view_height: canvas.height() as f32,
            ground_y: canvas.height() as f32 - 72.0,
            ..variant.config()
        };
        let persist_best = config.persist_best;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = match sim::Game::with_seed(config, seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Invalid configuration: {}", e);
                return;
            }
        };
        log::info!("Game initialized with seed: {} ({})", seed, variant.as_str());

        let best = if persist_best {
            BestScore::load()
        } else {
            BestScore::new()
        };

        let app = Rc::new(RefCell::new(App {
            game,
            clock: FrameClock::new(0.0),
            input: InputMapper::new(),
            hud: Hud::new(),
            best,
            theme: Theme::for_variant(variant),
            ctx,
            document,
            persist_best,
        }));

        setup_input_handlers(&window, app.clone());
        request_animation_frame(app);

        log::info!("Snack Run running!");
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if InputMapper::is_primary_key(&code) {
                    event.prevent_default();
                }
                let raw = RawInput::KeyDown {
                    code,
                    repeat: event.repeat(),
                };
                app.borrow_mut().handle(raw, event.time_stamp());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let raw = RawInput::KeyUp { code: event.code() };
                app.borrow_mut().handle(raw, event.time_stamp());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer down/up (mouse and touch)
        for (name, down) in [("pointerdown", true), ("pointerup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let raw = if down {
                    RawInput::PointerDown
                } else {
                    RawInput::PointerUp
                };
                app.borrow_mut().handle(raw, event.time_stamp());
            });
            let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.update(time);
            a.render();
            a.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::process::ExitCode;

    use snack_run::config::{SimConfig, Variant};
    use snack_run::consts::NOMINAL_FRAME_MS;
    use snack_run::hud::Hud;
    use snack_run::platform::FrameClock;
    use snack_run::renderer::{Theme, build_scene, quads_to_vertices, vertex_bytes};
    use snack_run::sim::{Autopilot, Game};
    use snack_run::BestScore;

    /// Command line options
    #[derive(Debug)]
    struct Options {
        variant: Variant,
        seed: Option<u64>,
        frames: u32,
        config_path: Option<String>,
    }

    impl Options {
        fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
            let mut options = Options {
                variant: Variant::default(),
                seed: None,
                frames: 3600,
                config_path: None,
            };
            while let Some(arg) = args.next() {
                let mut value = |name: &str| args.next().ok_or(format!("{} needs a value", name));
                match arg.as_str() {
                    "--variant" => {
                        let name = value("--variant")?;
                        options.variant = Variant::from_str(&name)
                            .ok_or_else(|| format!("unknown variant '{}'", name))?;
                    }
                    "--seed" => {
                        let seed = value("--seed")?;
                        let seed = seed
                            .parse()
                            .map_err(|_| format!("bad seed '{}'", seed))?;
                        options.seed = Some(seed);
                    }
                    "--frames" => {
                        let frames = value("--frames")?;
                        options.frames = frames
                            .parse()
                            .map_err(|_| format!("bad frame count '{}'", frames))?;
                    }
                    "--config" => options.config_path = Some(value("--config")?),
                    other => return Err(format!("unknown argument '{}'", other)),
                }
            }
            Ok(options)
        }
    }

    fn load_config(options: &Options) -> Result<SimConfig, String> {
        match &options.config_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .map_err(|e| format!("cannot read {}: {}", path, e))?;
                SimConfig::from_json(&json).map_err(|e| e.to_string())
            }
            None => Ok(options.variant.config()),
        }
    }

    pub fn run() -> ExitCode {
        let options = match Options::parse(std::env::args().skip(1)) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("error: {}", e);
                eprintln!("usage: snack-run [--variant NAME] [--seed N] [--frames N] [--config FILE]");
                return ExitCode::from(2);
            }
        };

        let config = match load_config(&options) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid configuration: {}", e);
                return ExitCode::FAILURE;
            }
        };
        let seed = options.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
        let theme = Theme::for_variant(config.variant);

        let mut game = match Game::with_seed(config, seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Invalid configuration: {}", e);
                return ExitCode::FAILURE;
            }
        };
        log::info!("Headless run: seed {} for {} frames", seed, options.frames);

        let pilot = Autopilot::new(true);
        let mut clock = FrameClock::new(0.0);
        let mut hud = Hud::new();
        let mut best = BestScore::new();
        let mut upload_bytes = 0usize;

        for frame in 1..=options.frames {
            let now = frame as f64 * NOMINAL_FRAME_MS;
            pilot.drive(&mut game, now);
            game.tick(clock.advance(now));

            let events = game.drain_events();
            hud.observe(&events);
            if best.observe(&events) {
                log::info!("New best {} on frame {}", best.best, frame);
            }

            let vertices = quads_to_vertices(&build_scene(&game, &theme));
            upload_bytes = vertex_bytes(&vertices).len();
        }

        let snap = hud.snapshot(&game);
        println!(
            "runs: {}  best: {}  current: {}  status: {}  last frame: {} vertex bytes",
            best.runs, snap.best, snap.score, snap.status, upload_bytes
        );
        ExitCode::SUCCESS
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Snack Run (native) starting...");
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
