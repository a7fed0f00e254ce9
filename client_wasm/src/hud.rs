//! `Hud` backed by the page's score labels, start button and winner overlay.

use crate::dom::Elements;
use game_core::{Hud, Side, SurfaceError};
use web_sys::{Element, HtmlElement};

pub struct DomHud {
    player_score: Element,
    computer_score: Element,
    start_button: HtmlElement,
    winner_message: HtmlElement,
    winning_player: Element,
}

impl DomHud {
    pub fn new(elements: &Elements) -> Self {
        Self {
            player_score: elements.player_score.clone(),
            computer_score: elements.computer_score.clone(),
            start_button: elements.start_button.clone(),
            winner_message: elements.winner_message.clone(),
            winning_player: elements.winning_player.clone(),
        }
    }
}

/// An empty value drops the inline style so the stylesheet decides
fn set_display(element: &HtmlElement, display: &str) -> Result<(), SurfaceError> {
    element
        .style()
        .set_property("display", display)
        .map_err(|e| SurfaceError::new("set display", format!("{e:?}")))
}

impl Hud for DomHud {
    fn set_scores(&mut self, player: u8, computer: u8) -> Result<(), SurfaceError> {
        self.player_score
            .set_text_content(Some(&player.to_string()));
        self.computer_score
            .set_text_content(Some(&computer.to_string()));
        Ok(())
    }

    fn set_start_visible(&mut self, visible: bool) -> Result<(), SurfaceError> {
        set_display(&self.start_button, if visible { "" } else { "none" })
    }

    fn show_winner(&mut self, winner: Side) -> Result<(), SurfaceError> {
        self.winning_player
            .set_text_content(Some(&winner.to_string()));
        set_display(&self.winner_message, "block")
    }

    fn hide_winner(&mut self) -> Result<(), SurfaceError> {
        set_display(&self.winner_message, "none")
    }
}
