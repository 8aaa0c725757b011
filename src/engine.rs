//! Frame loop
//!
//! The engine owns the screen and the input state. Each frame it runs the
//! game's update closure, converts the screen to RGBA and hands it to a
//! [`Presenter`]. Scheduling the next frame is the host's job (see
//! `platform`), so this module has no notion of time.

use crate::gfx::{self, Screen, Sprite};
use crate::input::{Button, InputState};
use crate::settings::EngineOptions;
use crate::Result;

/// Receives each finished frame
///
/// `rgba` is `width * height * 4` bytes, row-major. The presenter is expected
/// to upscale it with nearest-neighbor filtering.
pub trait Presenter {
    fn present(&mut self, rgba: &[u8], width: usize, height: usize) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct Engine {
    screen: Screen,
    input: InputState,
    frame_count: u64,
    scale: u32,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            screen: Screen::new(),
            input: InputState::new(),
            frame_count: 0,
            scale: 1,
        }
    }
}

impl Engine {
    pub fn new(options: &EngineOptions) -> Result<Self> {
        options.validate()?;
        log::debug!("Engine created with scale {}", options.scale);
        Ok(Self {
            scale: options.scale,
            ..Self::default()
        })
    }

    /// Frames started so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn flood_screen(&mut self, color_idx: u8) {
        self.screen.flood_screen(color_idx);
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color_idx: u8) {
        self.screen.set_pixel(x, y, color_idx);
    }

    pub fn set_sprite(&mut self, sprite: &Sprite) {
        self.screen.set_sprite(sprite);
    }

    pub fn put_text(&mut self, text: &str, x: i32, y: i32) -> i32 {
        gfx::put_text(&mut self.screen, text, x, y)
    }

    pub fn key_pressed(&self, button: Button) -> bool {
        self.input.key_pressed(button)
    }

    pub fn key_press(&mut self, button: Button) -> bool {
        self.input.key_press(button)
    }

    /// Present the current screen contents
    pub fn repaint(&self, presenter: &mut dyn Presenter) -> Result<()> {
        let rgba = self.screen.to_rgba_buffer()?;
        presenter.present(&rgba, self.screen.width(), self.screen.height())
    }
}

/// An engine paired with the game's per-frame update closure
pub struct FrameLoop<U> {
    engine: Engine,
    update: U,
}

impl<U> FrameLoop<U>
where
    U: FnMut(&mut Engine),
{
    pub fn new(engine: Engine, update: U) -> Self {
        Self { engine, update }
    }

    /// Run one frame: count it, update the game, then present
    ///
    /// The update closure finishes before the snapshot is taken, so a frame
    /// is never presented half drawn.
    pub fn frame(&mut self, presenter: &mut dyn Presenter) -> Result<()> {
        self.engine.frame_count += 1;
        (self.update)(&mut self.engine);
        self.engine.repaint(presenter)
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn into_engine(self) -> Engine {
        self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Default)]
    struct Capture {
        frames: Vec<Vec<u8>>,
        size: (usize, usize),
    }

    impl Presenter for Capture {
        fn present(&mut self, rgba: &[u8], width: usize, height: usize) -> Result<()> {
            self.frames.push(rgba.to_vec());
            self.size = (width, height);
            Ok(())
        }
    }

    #[test]
    fn test_rejects_zero_scale() {
        let options = EngineOptions::with_scale(0);
        assert!(matches!(Engine::new(&options), Err(Error::InvalidScale(0))));
    }

    #[test]
    fn test_frame_counts_updates_and_presents() {
        let engine = Engine::new(&EngineOptions::with_scale(2)).unwrap();
        let mut calls = 0;
        let mut frame_loop = FrameLoop::new(engine, |engine: &mut Engine| {
            calls += 1;
            engine.flood_screen(1);
        });

        let mut capture = Capture::default();
        frame_loop.frame(&mut capture).unwrap();
        frame_loop.frame(&mut capture).unwrap();

        assert_eq!(frame_loop.engine().frame_count(), 2);
        assert_eq!(frame_loop.engine().scale(), 2);
        assert_eq!(capture.frames.len(), 2);
        assert_eq!(capture.size, (160, 144));
        assert!(
            capture.frames[0]
                .chunks_exact(4)
                .all(|px| px == [0x30, 0x62, 0x30, 0xFF])
        );
        drop(frame_loop);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_update_sees_frame_counter_already_incremented() {
        let mut seen = Vec::new();
        let mut frame_loop = FrameLoop::new(Engine::default(), |engine: &mut Engine| {
            seen.push(engine.frame_count());
        });
        let mut capture = Capture::default();
        for _ in 0..3 {
            frame_loop.frame(&mut capture).unwrap();
        }
        drop(frame_loop);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_update_reads_input() {
        let mut frame_loop = FrameLoop::new(Engine::default(), |engine: &mut Engine| {
            if engine.key_press(Button::Button1) {
                engine.put_text("A", 0, 0);
            }
        });
        let mut capture = Capture::default();

        frame_loop.engine_mut().input_mut().key_down(Button::Button1);
        frame_loop.frame(&mut capture).unwrap();
        assert_eq!(frame_loop.engine().screen().pixel(1, 0), Some(0));

        // Consumed: the next frame must not draw again
        frame_loop.engine_mut().flood_screen(3);
        frame_loop.frame(&mut capture).unwrap();
        assert_eq!(frame_loop.engine().screen().pixel(1, 0), Some(3));
        assert!(frame_loop.engine().key_pressed(Button::Button1));
    }

    #[test]
    fn test_invalid_color_aborts_presentation() {
        let mut frame_loop = FrameLoop::new(Engine::default(), |engine: &mut Engine| {
            engine.set_pixel(0, 0, 9);
        });
        let mut capture = Capture::default();
        assert!(matches!(
            frame_loop.frame(&mut capture),
            Err(Error::InvalidColorIndex { index: 9, offset: 0 })
        ));
        assert!(capture.frames.is_empty());
        assert_eq!(frame_loop.engine().frame_count(), 1);
    }

    #[test]
    fn test_sprite_passthrough() {
        let mut engine = Engine::default();
        engine.set_sprite(&Sprite::at(vec![vec![2]], 7, 8));
        assert_eq!(engine.screen().pixel(7, 8), Some(2));
    }
}
