//! Browser host
//!
//! Presents frames on a `<canvas>` through an off-screen backing canvas of
//! native resolution, schedules frames with `requestAnimationFrame` and feeds
//! document key events into the engine's input state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, ImageData, KeyboardEvent};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::engine::{Engine, FrameLoop, Presenter};
use crate::settings::EngineOptions;
use crate::{Error, Result};

fn host_error(context: &str, err: JsValue) -> Error {
    Error::Host(format!("{context}: {err:?}"))
}

/// 2D context with an opaque backbuffer
fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    let attrs = js_sys::Object::new();
    js_sys::Reflect::set(&attrs, &"alpha".into(), &JsValue::FALSE)
        .map_err(|e| host_error("context options", e))?;

    canvas
        .get_context_with_context_options("2d", &attrs)
        .map_err(|e| host_error("getContext", e))?
        .ok_or_else(|| Error::Host("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| Error::Host("not a 2d context".to_string()))
}

/// Draws frames to a page canvas, upscaled without smoothing
pub struct CanvasPresenter {
    display: CanvasRenderingContext2d,
    backing_canvas: HtmlCanvasElement,
    backing: CanvasRenderingContext2d,
    scale: u32,
}

impl CanvasPresenter {
    pub fn new(document: &Document, options: &EngineOptions) -> Result<Self> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(&options.canvas_id)
            .ok_or_else(|| Error::Host(format!("no canvas with id '{}'", options.canvas_id)))?
            .dyn_into()
            .map_err(|_| Error::Host(format!("element '{}' is not a canvas", options.canvas_id)))?;

        let (display_w, display_h) = options.display_size();
        canvas.set_width(display_w);
        canvas.set_height(display_h);
        let display = context_2d(&canvas)?;
        display.set_image_smoothing_enabled(false);

        let backing_canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| host_error("createElement", e))?
            .dyn_into()
            .map_err(|_| Error::Host("created element is not a canvas".to_string()))?;
        backing_canvas.set_width(SCREEN_WIDTH as u32);
        backing_canvas.set_height(SCREEN_HEIGHT as u32);
        let backing = context_2d(&backing_canvas)?;

        log::debug!("Canvas '{}' sized {}x{}", options.canvas_id, display_w, display_h);

        Ok(Self {
            display,
            backing_canvas,
            backing,
            scale: options.scale,
        })
    }
}

impl Presenter for CanvasPresenter {
    fn present(&mut self, rgba: &[u8], width: usize, height: usize) -> Result<()> {
        let image = ImageData::new_with_u8_clamped_array_and_sh(Clamped(rgba), width as u32, height as u32)
            .map_err(|e| host_error("ImageData", e))?;
        self.backing
            .put_image_data(&image, 0.0, 0.0)
            .map_err(|e| host_error("putImageData", e))?;

        let scale = self.scale as f64;
        self.display
            .draw_image_with_html_canvas_element_and_dw_and_dh(
                &self.backing_canvas,
                0.0,
                0.0,
                width as f64 * scale,
                height as f64 * scale,
            )
            .map_err(|e| host_error("drawImage", e))
    }
}

struct Runner<U> {
    frame_loop: FrameLoop<U>,
    presenter: CanvasPresenter,
}

type KeyListener = Closure<dyn FnMut(KeyboardEvent)>;

/// Document keydown/keyup listeners, removed again on drop
///
/// Dropping also releases every button.
pub struct KeyboardBinding {
    document: Document,
    key_down: KeyListener,
    key_up: KeyListener,
    release: Box<dyn Fn()>,
}

impl KeyboardBinding {
    fn attach<U>(document: &Document, runner: Rc<RefCell<Runner<U>>>) -> Result<Self>
    where
        U: FnMut(&mut Engine) + 'static,
    {
        let key_down = {
            let runner = runner.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Ok(mut r) = runner.try_borrow_mut() else {
                    log::warn!("Dropped keydown '{}' during a frame", event.key());
                    return;
                };
                if r.frame_loop.engine_mut().input_mut().handle_key_down(&event.key()) {
                    event.prevent_default();
                }
            })
        };

        let key_up = {
            let runner = runner.clone();
            Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Ok(mut r) = runner.try_borrow_mut() else {
                    log::warn!("Dropped keyup '{}' during a frame", event.key());
                    return;
                };
                if r.frame_loop.engine_mut().input_mut().handle_key_up(&event.key()) {
                    event.prevent_default();
                }
            })
        };

        let release = Box::new(move || match runner.try_borrow_mut() {
            Ok(mut r) => r.frame_loop.engine_mut().input_mut().reset(),
            Err(_) => log::warn!("Input not released, engine busy"),
        });

        document
            .add_event_listener_with_callback("keydown", key_down.as_ref().unchecked_ref())
            .map_err(|e| host_error("addEventListener(keydown)", e))?;
        document
            .add_event_listener_with_callback("keyup", key_up.as_ref().unchecked_ref())
            .map_err(|e| host_error("addEventListener(keyup)", e))?;

        log::info!("Keyboard listeners attached");
        Ok(Self {
            document: document.clone(),
            key_down,
            key_up,
            release,
        })
    }
}

impl Drop for KeyboardBinding {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.key_down.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("keyup", self.key_up.as_ref().unchecked_ref());
        (self.release)();
        log::info!("Keyboard listeners removed");
    }
}

/// A running engine; stopping it (or dropping the handle) ends the frame
/// loop and unsubscribes from key events
pub struct WebHandle {
    running: Rc<Cell<bool>>,
    keyboard: Option<KeyboardBinding>,
}

impl WebHandle {
    pub fn stop(self) {
        drop(self);
    }

    /// Keep the engine running until the page goes away
    pub fn detach(self) {
        std::mem::forget(self);
    }
}

impl Drop for WebHandle {
    fn drop(&mut self) {
        if self.running.replace(false) {
            log::info!("Engine stopping");
        }
        self.keyboard.take();
    }
}

/// Start the engine on the page's canvas
///
/// `update` runs once per display refresh before the frame is presented.
pub fn start<U>(update: U, options: &EngineOptions) -> Result<WebHandle>
where
    U: FnMut(&mut Engine) + 'static,
{
    let window = web_sys::window().ok_or_else(|| Error::Host("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| Error::Host("no document".to_string()))?;

    let engine = Engine::new(options)?;
    let presenter = CanvasPresenter::new(&document, options)?;
    let runner = Rc::new(RefCell::new(Runner {
        frame_loop: FrameLoop::new(engine, update),
        presenter,
    }));

    let keyboard = KeyboardBinding::attach(&document, runner.clone())?;
    let running = Rc::new(Cell::new(true));
    request_animation_frame(runner, running.clone());

    log::info!("Engine started at scale {}", options.scale);
    Ok(WebHandle {
        running,
        keyboard: Some(keyboard),
    })
}

fn request_animation_frame<U>(runner: Rc<RefCell<Runner<U>>>, running: Rc<Cell<bool>>)
where
    U: FnMut(&mut Engine) + 'static,
{
    let Some(window) = web_sys::window() else {
        log::error!("No window, frame loop halted");
        return;
    };
    let callback = Closure::once_into_js(move |_time: f64| {
        frame(runner, running);
    });
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
}

fn frame<U>(runner: Rc<RefCell<Runner<U>>>, running: Rc<Cell<bool>>)
where
    U: FnMut(&mut Engine) + 'static,
{
    if !running.get() {
        log::info!("Frame loop stopped");
        return;
    }

    {
        let mut r = runner.borrow_mut();
        let Runner {
            frame_loop,
            presenter,
        } = &mut *r;
        if let Err(e) = frame_loop.frame(presenter) {
            log::warn!(
                "Frame {} not presented: {}",
                frame_loop.engine().frame_count(),
                e
            );
        }
    }

    request_animation_frame(runner, running);
}
