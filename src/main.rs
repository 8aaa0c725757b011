//! Stumge demo entry point
//!
//! A small sprite you can move, rotate and flip around the screen. Runs in
//! the browser on wasm32; natively it plays a scripted session headlessly.

use stumge::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use stumge::{Button, Engine, Sprite};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

const T: i8 = stumge::consts::TRANSPARENT;

/// Demo game state
struct Demo {
    player: Sprite,
    block: Sprite,
    rotation: u32,
    hits: u32,
}

impl Demo {
    fn new() -> Self {
        let player = Sprite::at(
            vec![
                vec![T, T, 0, 0, T, T],
                vec![T, 0, 0, 0, 0, T],
                vec![0, 0, 1, 1, 0, 0],
                vec![T, T, 1, 1, T, T],
                vec![T, T, 1, 1, T, T],
                vec![T, T, 1, 1, T, T],
            ],
            20,
            60,
        );
        let block = Sprite::at(vec![vec![1; 8]; 8], 110, 60);
        Self {
            player,
            block,
            rotation: 0,
            hits: 0,
        }
    }

    fn update(&mut self, engine: &mut Engine) {
        self.handle_input(engine);

        let was_touching = self.player.collides_with(&self.block);
        engine.flood_screen(3);
        engine.put_text("Stumge demo", 4, 4);
        engine.set_sprite(&self.block);
        engine.set_sprite(&self.player);

        if was_touching {
            engine.put_text("Hit!", 4, SCREEN_HEIGHT as i32 - 10);
            self.hits += 1;
        }
        engine.put_text(&format!("{}", engine.frame_count()), 4, 14);
    }

    fn handle_input(&mut self, engine: &mut Engine) {
        let max_x = (SCREEN_WIDTH - self.player.width()) as i32;
        let max_y = (SCREEN_HEIGHT - self.player.height()) as i32;

        if engine.key_pressed(Button::Left) {
            self.player.x = (self.player.x - 1).max(0);
        }
        if engine.key_pressed(Button::Right) {
            self.player.x = (self.player.x + 1).min(max_x);
        }
        if engine.key_pressed(Button::Up) {
            self.player.y = (self.player.y - 1).max(0);
        }
        if engine.key_pressed(Button::Down) {
            self.player.y = (self.player.y + 1).min(max_y);
        }

        if engine.key_press(Button::Button1) {
            self.rotation = (self.rotation + 1) % 4;
            self.player.rotate(self.rotation);
        }
        if engine.key_press(Button::Button2) {
            self.player.horizontal_flip();
        }
        if engine.key_press(Button::Select) {
            self.player.vertical_flip();
        }
        if engine.key_press(Button::Start) {
            self.rotation = 0;
            self.player.rotate(0);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    let options = stumge::EngineOptions::load();

    console_error_panic_hook::set_once();
    if console_log::init_with_level(options.level()).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Stumge starting...");

    let mut demo = Demo::new();
    match stumge::platform::web::start(move |engine| demo.update(engine), &options) {
        Ok(handle) => {
            handle.detach();
            // Write back so a first visit leaves an editable record
            options.save();
            log::info!("Stumge running!");
        }
        Err(e) => log::error!("Failed to start engine: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> stumge::Result<()> {
    use stumge::platform::HeadlessHost;
    use stumge::{EngineOptions, FrameLoop};

    env_logger::init();
    log::info!("Stumge (native) starting...");
    log::info!("Native mode renders headlessly - build for wasm32 to play in a browser");

    let options = EngineOptions::load();
    let mut demo = Demo::new();
    let frame_loop = FrameLoop::new(Engine::new(&options)?, move |engine: &mut Engine| {
        demo.update(engine)
    });
    let mut host = HeadlessHost::new(frame_loop);

    // Walk right into the block, spinning once on the way
    host.engine_mut().input_mut().handle_key_down("ArrowRight");
    host.run(30)?;
    host.engine_mut().input_mut().handle_key_down("a");
    host.run(60)?;
    host.release_keys();
    host.run(10)?;

    let lit = host
        .presenter()
        .last_frame()
        .chunks_exact(4)
        .filter(|px| px[..3] != [0x9B, 0xBC, 0x0F])
        .count();
    log::info!(
        "Ran {} frames, {} non-background pixels in the last frame",
        host.engine().frame_count(),
        lit
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_player_stays_on_screen() {
        let mut demo = Demo::new();
        let mut engine = Engine::default();
        engine.input_mut().key_down(Button::Left);
        engine.input_mut().key_down(Button::Up);
        for _ in 0..200 {
            demo.update(&mut engine);
        }
        assert_eq!((demo.player.x, demo.player.y), (0, 0));
    }

    #[test]
    fn test_demo_rotates_once_per_press() {
        let mut demo = Demo::new();
        let mut engine = Engine::default();
        engine.input_mut().key_down(Button::Button1);
        demo.update(&mut engine);
        demo.update(&mut engine);
        assert_eq!(demo.rotation, 1);
    }

    #[test]
    fn test_demo_detects_hit() {
        let mut demo = Demo::new();
        let mut engine = Engine::default();
        demo.player.set_position(108, 60);
        demo.update(&mut engine);
        assert_eq!(demo.hits, 1);
    }
}
