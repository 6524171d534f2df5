//! The per-frame loop: input → fixed-step simulation → composition

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::camera::{Camera, CameraController};
use crate::color::palette;
use crate::consts::FPS_LABEL_POS;
use crate::draw::Canvas;
use crate::frame::{FpsCounter, FrameTimer};
use crate::input::{InputEvent, InputQueue};
use crate::settings::Settings;
use crate::sim::{DemoState, Rect, SpawnError, advance};

/// What happened during one `Game::go`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Seconds since the previous frame
    pub elapsed: f32,
    /// Simulation sub-steps taken
    pub steps: u32,
    /// Stars that survived viewport culling
    pub stars_drawn: usize,
    pub fps: u32,
}

pub struct Game {
    settings: Settings,
    seed: u64,
    state: DemoState,
    camera: Camera,
    camera_ctrl: CameraController,
    input: InputQueue,
    timer: FrameTimer,
    fps: FpsCounter,
    frames: u64,
}

impl Game {
    /// Build the scene; spawning the star field is the slow part
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SpawnError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let (w, h) = (settings.screen_width as f32, settings.screen_height as f32);
        let walls = Rect::new(0.0, w, 0.0, h);
        let box_size = settings.message_font.text_size(&settings.message);
        let state = DemoState::new(
            &settings.stars,
            walls,
            box_size,
            settings.box_speed,
            &mut rng,
        )?;
        log::info!(
            "Scene ready: seed {}, {} stars, {}x{} screen",
            seed,
            state.stars.len(),
            settings.screen_width,
            settings.screen_height
        );

        Ok(Self {
            camera: Camera::new(w, h),
            camera_ctrl: CameraController::new(settings.zoom_factor),
            input: InputQueue::new(),
            timer: FrameTimer::new(),
            fps: FpsCounter::new(),
            frames: 0,
            seed,
            state,
            settings,
        })
    }

    /// Run one displayed frame at wall-clock time `now` (seconds)
    pub fn go<C: Canvas + ?Sized>(&mut self, now: f64, canvas: &mut C) -> FrameStats {
        self.process_input();

        let elapsed = self.timer.mark(now);
        let steps = advance(&mut self.state, elapsed, self.settings.precision);
        self.fps.frame(elapsed);
        self.frames += 1;

        let stars_drawn = self.compose_frame(canvas);
        FrameStats {
            elapsed,
            steps,
            stars_drawn,
            fps: self.fps.fps(),
        }
    }

    fn process_input(&mut self) {
        for event in self.input.drain() {
            match event {
                InputEvent::KeyPress { key } => log::trace!("key down: {}", key),
                InputEvent::KeyRelease { key } => log::trace!("key up: {}", key),
                InputEvent::Char(c) => log::trace!("char: {:?}", c),
                InputEvent::Mouse(mouse) => self.camera_ctrl.handle(&mouse, &mut self.camera),
            }
        }
    }

    /// Draw the current state; returns how many stars were drawn
    pub fn compose_frame<C: Canvas + ?Sized>(&self, canvas: &mut C) -> usize {
        let text_box = &self.state.text_box;
        canvas.draw_rect_outline(
            text_box.rect().expanded(self.settings.box_padding),
            palette::BLUE,
        );
        canvas.draw_text(
            &self.settings.message,
            text_box.pos,
            self.settings.message_font,
            palette::WHITE,
        );
        if self.settings.show_fps {
            canvas.draw_text(
                &format!("FPS: {}", self.fps.fps()),
                Vec2::from(FPS_LABEL_POS),
                self.settings.fps_font,
                palette::WHITE,
            );
        }

        let viewport = self.camera.viewport_rect();
        let mut drawn = 0;
        for star in self.state.stars.visible(&viewport) {
            let outline: Vec<Vec2> = star
                .outline()
                .into_iter()
                .map(|p| self.camera.world_to_screen(p))
                .collect();
            canvas.draw_polygon(&outline, star.color());
            drawn += 1;
        }
        drawn
    }

    /// Follow a window resize; the box keeps bouncing inside the new screen
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.resize(width as f32, height as f32);
        self.state.walls = Rect::new(0.0, width as f32, 0.0, height as f32);
        log::debug!("Resized to {}x{}", width, height);
    }

    pub fn input_mut(&mut self) -> &mut InputQueue {
        &mut self.input
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn state(&self) -> &DemoState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
