//! Starfield entry point
//!
//! On the web this drives the demo from `requestAnimationFrame` and renders
//! with WebGPU. Natively it runs the same frame loop headless against a
//! synthetic clock and logs what each second looked like.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent};

    use starfield::input::{InputEvent, MouseButton, MouseEvent as Mouse};
    use starfield::renderer::{RenderState, Tessellator, TextLabel};
    use starfield::{Game, Settings};

    /// Demo instance plus everything needed to put it on screen
    struct App {
        game: Game,
        render_state: Option<RenderState>,
        tessellator: Tessellator,
        /// One absolutely positioned element per text label
        label_elements: Vec<Element>,
    }

    impl App {
        fn new(game: Game) -> Self {
            Self {
                game,
                render_state: None,
                tessellator: Tessellator::new(),
                label_elements: Vec::new(),
            }
        }

        /// Match the backing store to the canvas' CSS box and move the
        /// screen space (walls, camera, vertex mapping) along with it
        fn fit_canvas(&mut self, canvas: &HtmlCanvasElement) {
            let (css_w, css_h) = canvas_css_size(canvas);
            let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
            let width = (css_w as f64 * dpr) as u32;
            let height = (css_h as f64 * dpr) as u32;
            canvas.set_width(width);
            canvas.set_height(height);

            self.game.resize(css_w, css_h);
            if let Some(ref mut render_state) = self.render_state {
                render_state.set_view_size((css_w as f32, css_h as f32));
                render_state.resize(width, height);
            }
        }

        fn frame(&mut self, time_ms: f64) {
            self.tessellator.begin_frame();
            self.game.go(time_ms / 1000.0, &mut self.tessellator);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(self.tessellator.vertices()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            self.update_labels();
        }

        /// Mirror this frame's text labels into the DOM
        fn update_labels(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(container) = document.get_element_by_id("labels") else {
                return;
            };

            let labels = self.tessellator.labels();
            while self.label_elements.len() < labels.len() {
                match document.create_element("div") {
                    Ok(el) => {
                        let _ = container.append_child(&el);
                        self.label_elements.push(el);
                    }
                    Err(_) => return,
                }
            }

            for (i, el) in self.label_elements.iter().enumerate() {
                match labels.get(i) {
                    Some(label) => {
                        el.set_text_content(Some(&label.text));
                        let _ = el.set_attribute("style", &label_style(label));
                    }
                    None => {
                        let _ = el.set_attribute("style", "display: none");
                    }
                }
            }
        }
    }

    fn label_style(label: &TextLabel) -> String {
        let (_, glyph_h) = label.font.glyph_size();
        format!(
            "position: absolute; left: {:.1}px; top: {:.1}px; font: {:.1}px/{:.1}px monospace; \
             color: {}; white-space: pre; pointer-events: none",
            label.pos.x,
            label.pos.y,
            glyph_h as f32 * 0.8,
            glyph_h as f32,
            label.color.to_css(),
        )
    }

    /// Canvas size in CSS pixels, never zero
    fn canvas_css_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
        (
            canvas.client_width().max(1) as u32,
            canvas.client_height().max(1) as u32,
        )
    }

    fn mouse_pos(event: &MouseEvent) -> Vec2 {
        Vec2::new(event.offset_x() as f32, event.offset_y() as f32)
    }

    fn mouse_button(button: i16) -> Option<MouseButton> {
        match button {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Middle),
            2 => Some(MouseButton::Right),
            _ => None,
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Starfield starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = match Game::new(settings, seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Failed to build scene: {}", e);
                return;
            }
        };

        // Screen units are the canvas' CSS pixels
        let app = Rc::new(RefCell::new(App::new(game)));
        app.borrow_mut().fit_canvas(&canvas);
        let (css_w, css_h) = canvas_css_size(&canvas);
        let (width, height) = (canvas.width(), canvas.height());

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(
            surface,
            &adapter,
            width,
            height,
            (css_w as f32, css_h as f32),
        )
        .await
        {
            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to initialize renderer: {}", e);
                return;
            }
        }

        setup_input_handlers(&canvas, app.clone());
        setup_resize_handler(canvas, app.clone());

        request_animation_frame(app);

        log::info!("Starfield running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse down - start drags
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                if let Some(button) = mouse_button(event.button()) {
                    let pos = mouse_pos(&event);
                    a.game.input_mut().push_mouse(Mouse::Press { button, pos });
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up on the window so drags end even outside the canvas
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                if let Some(button) = mouse_button(event.button()) {
                    let pos = a.game.input_mut().pointer();
                    a.game.input_mut().push_mouse(Mouse::Release { button, pos });
                }
            });
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }

        // Mouse move
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = mouse_pos(&event);
                app.borrow_mut().game.input_mut().push_mouse(Mouse::Move { pos });
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Wheel - zoom
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: WheelEvent| {
                event.prevent_default();
                let pos = mouse_pos(&event);
                let mouse = if event.delta_y() < 0.0 {
                    Mouse::WheelUp { pos }
                } else {
                    Mouse::WheelDown { pos }
                };
                app.borrow_mut().game.input_mut().push_mouse(mouse);
            });
            let _ = canvas
                .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                let key = event.key();
                let mut chars = key.chars();
                let single = match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                };
                a.game.input_mut().push(InputEvent::KeyPress { key });
                if let Some(c) = single {
                    a.game.input_mut().push(InputEvent::Char(c));
                }
            });
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut()
                    .game
                    .input_mut()
                    .push(InputEvent::KeyRelease { key: event.key() });
            });
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut()>::new(move || {
            app.borrow_mut().fit_canvas(&canvas);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;

    use starfield::draw::DrawList;
    use starfield::{Game, Settings};

    /// Run the star field frame loop headless and log per-second statistics
    #[derive(Parser, Debug)]
    #[command(name = "starfield", version)]
    struct Cli {
        /// JSON settings file; defaults are used for anything it omits
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Star field seed (overrides the settings file)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of stars (overrides the settings file)
        #[arg(long)]
        stars: Option<usize>,
        /// Frames to simulate
        #[arg(long, default_value_t = 600)]
        frames: u64,
        /// Synthetic display rate in Hz
        #[arg(long, default_value_t = 60.0)]
        rate: f64,
    }

    fn load_settings(cli: &Cli) -> Settings {
        let mut settings = match &cli.settings {
            Some(path) => Settings::load_from_path(path).unwrap_or_else(|e| {
                log::warn!("{}; using defaults", e);
                Settings::default()
            }),
            None => Settings::default(),
        };
        if let Some(seed) = cli.seed {
            settings.seed = Some(seed);
        }
        if let Some(stars) = cli.stars {
            settings.stars.count = stars;
        }
        settings
    }

    pub fn run() -> ExitCode {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let cli = Cli::parse();

        if !(cli.rate > 0.0) {
            log::error!("--rate must be positive, got {}", cli.rate);
            return ExitCode::FAILURE;
        }

        let settings = load_settings(&cli);
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Starfield (headless) starting with seed {}", seed);

        let mut game = match Game::new(settings, seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Failed to build scene: {}", e);
                return ExitCode::FAILURE;
            }
        };

        let mut canvas = DrawList::new();
        let mut last_fps = game.fps();
        let mut drawn_total = 0usize;

        for frame in 0..cli.frames {
            canvas.clear();
            let stats = game.go(frame as f64 / cli.rate, &mut canvas);
            drawn_total += stats.stars_drawn;

            if stats.fps != last_fps {
                let text_box = &game.state().text_box;
                log::info!(
                    "frame {}: {} fps, {} stars on screen, box at ({:.1}, {:.1})",
                    frame,
                    stats.fps,
                    stats.stars_drawn,
                    text_box.pos.x,
                    text_box.pos.y
                );
                last_fps = stats.fps;
            }
        }

        let state = game.state();
        log::info!(
            "Done: {} frames, {:.2}s simulated in {} sub-steps, {:.1} stars drawn per frame",
            game.frames(),
            state.elapsed,
            state.steps,
            drawn_total as f64 / cli.frames.max(1) as f64
        );
        ExitCode::SUCCESS
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::run()
}
