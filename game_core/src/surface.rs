//! Host-facing seams: the 2D drawing surface and the score/overlay HUD.

use crate::Side;
use derive_more::{Display, Error};
use glam::Vec2;

/// A drawing or HUD call the host could not complete
#[derive(Debug, Clone, PartialEq, Display, Error)]
#[display("{operation} failed: {message}")]
pub struct SurfaceError {
    pub operation: &'static str,
    pub message: String,
}

impl SurfaceError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

/// 2D drawing surface with a fixed size (an HTML canvas in the browser)
pub trait Surface {
    fn clear_rect(&mut self, min: Vec2, size: Vec2) -> Result<(), SurfaceError>;
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: &str) -> Result<(), SurfaceError>;
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str)
        -> Result<(), SurfaceError>;
    fn stroke_dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        dash: &[f32],
        color: &str,
    ) -> Result<(), SurfaceError>;
    fn fill_text(
        &mut self,
        text: &str,
        pos: Vec2,
        font_px: f32,
        color: &str,
    ) -> Result<(), SurfaceError>;
}

/// Page elements around the court: score labels, start control, winner overlay
pub trait Hud {
    fn set_scores(&mut self, player: u8, computer: u8) -> Result<(), SurfaceError>;
    fn set_start_visible(&mut self, visible: bool) -> Result<(), SurfaceError>;
    fn show_winner(&mut self, winner: Side) -> Result<(), SurfaceError>;
    fn hide_winner(&mut self) -> Result<(), SurfaceError>;
}
