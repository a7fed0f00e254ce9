//! Page element lookup. Every element the game touches must exist up front.

use crate::error::ClientError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement};

pub const CANVAS_ID: &str = "pong";
pub const START_BUTTON_ID: &str = "startButton";
pub const RESTART_BUTTON_ID: &str = "restartButton";
pub const PLAYER_SCORE_ID: &str = "playerScore";
pub const COMPUTER_SCORE_ID: &str = "computerScore";
pub const WINNER_MESSAGE_ID: &str = "winnerMessage";
pub const WINNING_PLAYER_ID: &str = "winningPlayer";

pub struct Elements {
    pub canvas: HtmlCanvasElement,
    pub start_button: HtmlElement,
    pub restart_button: HtmlElement,
    pub player_score: Element,
    pub computer_score: Element,
    pub winner_message: HtmlElement,
    pub winning_player: Element,
}

impl Elements {
    pub fn lookup(document: &Document) -> Result<Self, ClientError> {
        Ok(Self {
            canvas: typed(document, CANVAS_ID, "canvas")?,
            start_button: typed(document, START_BUTTON_ID, "html element")?,
            restart_button: typed(document, RESTART_BUTTON_ID, "html element")?,
            player_score: by_id(document, PLAYER_SCORE_ID)?,
            computer_score: by_id(document, COMPUTER_SCORE_ID)?,
            winner_message: typed(document, WINNER_MESSAGE_ID, "html element")?,
            winning_player: by_id(document, WINNING_PLAYER_ID)?,
        })
    }
}

fn by_id(document: &Document, id: &str) -> Result<Element, ClientError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ClientError::MissingElement(id.to_string()))
}

fn typed<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, ClientError> {
    by_id(document, id)?
        .dyn_into::<T>()
        .map_err(|_| ClientError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}
