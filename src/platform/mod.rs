//! Host collaborators
//!
//! The engine only knows how to run one frame. A host supplies the rest:
//! - presentation surface (canvas on the web, memory when headless)
//! - per-frame scheduling (`requestAnimationFrame`, or a plain loop)
//! - raw key events

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::{HeadlessHost, HeadlessPresenter};
