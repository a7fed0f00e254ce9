//! Browser wiring: builds the game from the page and drives it from
//! `requestAnimationFrame`, button clicks and key events.

use crate::canvas::CanvasSurface;
use crate::dom::Elements;
use crate::error::ClientError;
use crate::hud::DomHud;
use crate::input::key_from_name;
use game_core::{Config, FrameOutcome, Game, LoopControl};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, KeyboardEvent};

type WebGame = Game<CanvasSurface, DomHud>;

pub fn run() -> Result<(), ClientError> {
    let window = web_sys::window().ok_or(ClientError::MissingWindow)?;
    let document = window.document().ok_or(ClientError::MissingDocument)?;
    let elements = Elements::lookup(&document)?;

    let config = load_config(&elements.canvas)?;
    let ctx = elements
        .canvas
        .get_context("2d")
        .map_err(ClientError::js)?
        .ok_or(ClientError::MissingContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ClientError::MissingContext)?;

    log::info!(
        "pong: {}x{} canvas, first to {}, {:?} input",
        config.canvas_width,
        config.canvas_height,
        config.win_score,
        config.input_mode
    );

    let game = Rc::new(RefCell::new(Game::new(
        config,
        CanvasSurface::new(ctx),
        DomHud::new(&elements),
    )));

    setup_button(&elements.start_button, game.clone(), WebGame::on_start)?;
    setup_button(&elements.restart_button, game.clone(), WebGame::on_restart)?;
    setup_keyboard(&document, game)?;

    Ok(())
}

/// Optional JSON overrides from the canvas's `data-config` attribute; the
/// canvas size always comes from the element itself
fn load_config(canvas: &HtmlCanvasElement) -> Result<Config, ClientError> {
    let config = match canvas.get_attribute("data-config") {
        Some(json) => Config::from_json(&json)?,
        None => Config::default(),
    }
    .with_canvas_size(canvas.width() as f32, canvas.height() as f32);
    config.validate()?;
    Ok(config)
}

fn setup_button(
    button: &HtmlElement,
    game: Rc<RefCell<WebGame>>,
    command: fn(&mut WebGame) -> Result<LoopControl, game_core::SurfaceError>,
) -> Result<(), ClientError> {
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
        let control = command(&mut game.borrow_mut());
        match control {
            Ok(LoopControl::Begin) => request_animation_frame(game.clone()),
            Ok(LoopControl::Ignore) => log::debug!("click ignored in current state"),
            Err(err) => log::error!("could not begin round: {}", err),
        }
    });
    button
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(ClientError::js)?;
    closure.forget();
    Ok(())
}

fn setup_keyboard(document: &Document, game: Rc<RefCell<WebGame>>) -> Result<(), ClientError> {
    // Key down
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(key) = key_from_name(&event.key()) {
                event.prevent_default();
                game.borrow_mut().on_key_down(key);
            }
        });
        document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(ClientError::js)?;
        closure.forget();
    }

    // Key up
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(key) = key_from_name(&event.key()) {
                game.borrow_mut().on_key_up(key);
            }
        });
        document
            .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
            .map_err(ClientError::js)?;
        closure.forget();
    }

    Ok(())
}

fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
    let Some(window) = web_sys::window() else {
        log::error!("no window, cannot schedule frame");
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(game);
    });
    if let Err(err) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", err);
        return;
    }
    closure.forget();
}

fn game_loop(game: Rc<RefCell<WebGame>>) {
    let outcome = game.borrow_mut().frame();
    match outcome {
        Ok(FrameOutcome::Continue) => request_animation_frame(game),
        Ok(FrameOutcome::Halt) => log::debug!("frame loop halted"),
        Err(err) => log::error!("frame failed, loop stopped: {}", err),
    }
}
