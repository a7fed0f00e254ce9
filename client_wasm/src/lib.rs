//! Browser client for canvas Pong
//!
//! Looks up the page elements, builds a `game_core::Game` around a canvas 2D
//! surface and a DOM HUD, and runs it from `requestAnimationFrame`.
//! Only `input` and `error` build off the wasm32 target.

pub mod error;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod hud;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }

    app::run().map_err(|err| {
        log::error!("pong failed to start: {}", err);
        JsValue::from(err)
    })
}
