//! In-memory host for native runs and tests

use crate::engine::{Engine, FrameLoop, Presenter};
use crate::Result;

/// Keeps the most recent frame instead of drawing it
#[derive(Debug, Clone, Default)]
pub struct HeadlessPresenter {
    last_frame: Vec<u8>,
    frames_presented: u64,
}

impl HeadlessPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// RGBA bytes of the last presented frame (empty before the first one)
    pub fn last_frame(&self) -> &[u8] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Presenter for HeadlessPresenter {
    fn present(&mut self, rgba: &[u8], width: usize, height: usize) -> Result<()> {
        debug_assert_eq!(rgba.len(), width * height * 4);
        self.last_frame.clear();
        self.last_frame.extend_from_slice(rgba);
        self.frames_presented += 1;
        Ok(())
    }
}

/// Drives a frame loop back to back, standing in for a display refresh callback
pub struct HeadlessHost<U> {
    frame_loop: FrameLoop<U>,
    presenter: HeadlessPresenter,
}

impl<U> HeadlessHost<U>
where
    U: FnMut(&mut Engine),
{
    pub fn new(frame_loop: FrameLoop<U>) -> Self {
        Self {
            frame_loop,
            presenter: HeadlessPresenter::new(),
        }
    }

    /// Run `frames` ticks; stops at the first presentation error
    pub fn run(&mut self, frames: u64) -> Result<()> {
        for _ in 0..frames {
            self.frame_loop.frame(&mut self.presenter)?;
        }
        log::debug!(
            "Headless run finished at frame {}",
            self.frame_loop.engine().frame_count()
        );
        Ok(())
    }

    pub fn engine(&self) -> &Engine {
        self.frame_loop.engine()
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        self.frame_loop.engine_mut()
    }

    pub fn presenter(&self) -> &HeadlessPresenter {
        &self.presenter
    }

    /// Release every button, as the web host does when its listeners go away
    pub fn release_keys(&mut self) {
        self.frame_loop.engine_mut().input_mut().reset();
        log::debug!("Headless input released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Button;

    #[test]
    fn test_run_presents_every_frame() {
        let frame_loop = FrameLoop::new(Engine::default(), |engine: &mut Engine| {
            engine.flood_screen(0);
        });
        let mut host = HeadlessHost::new(frame_loop);
        host.run(5).unwrap();

        assert_eq!(host.engine().frame_count(), 5);
        assert_eq!(host.presenter().frames_presented(), 5);
        assert_eq!(host.presenter().last_frame().len(), 160 * 144 * 4);
        assert_eq!(&host.presenter().last_frame()[0..4], &[0x0F, 0x38, 0x0F, 0xFF]);
    }

    #[test]
    fn test_input_between_frames() {
        let frame_loop = FrameLoop::new(Engine::default(), |engine: &mut Engine| {
            let color = if engine.key_pressed(Button::Down) { 0 } else { 3 };
            engine.flood_screen(color);
        });
        let mut host = HeadlessHost::new(frame_loop);

        host.run(1).unwrap();
        assert_eq!(host.engine().screen().pixel(0, 0), Some(3));

        host.engine_mut().input_mut().handle_key_down("ArrowDown");
        host.run(1).unwrap();
        assert_eq!(host.engine().screen().pixel(0, 0), Some(0));

        host.engine_mut().input_mut().handle_key_up("ArrowDown");
        host.run(1).unwrap();
        assert_eq!(host.engine().screen().pixel(0, 0), Some(3));
    }

    #[test]
    fn test_release_keys_clears_held_buttons() {
        let frame_loop = FrameLoop::new(Engine::default(), |engine: &mut Engine| {
            let color = if engine.key_pressed(Button::Left) { 0 } else { 3 };
            engine.flood_screen(color);
        });
        let mut host = HeadlessHost::new(frame_loop);

        host.engine_mut().input_mut().handle_key_down("ArrowLeft");
        host.engine_mut().input_mut().handle_key_down("a");
        host.run(1).unwrap();
        assert_eq!(host.engine().screen().pixel(0, 0), Some(0));

        host.release_keys();
        assert_eq!(host.engine().input().counter(Button::Left), 0);
        assert_eq!(host.engine().input().counter(Button::Button1), 0);
        host.run(1).unwrap();
        assert_eq!(host.engine().screen().pixel(0, 0), Some(3));
    }

    #[test]
    fn test_run_stops_on_error() {
        let frame_loop = FrameLoop::new(Engine::default(), |engine: &mut Engine| {
            if engine.frame_count() == 2 {
                engine.flood_screen(4);
            }
        });
        let mut host = HeadlessHost::new(frame_loop);
        assert!(host.run(10).is_err());
        assert_eq!(host.engine().frame_count(), 2);
        assert_eq!(host.presenter().frames_presented(), 1);
    }
}
