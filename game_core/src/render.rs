use crate::{Config, Court, Params, Score, Side, Surface, SurfaceError};
use glam::Vec2;

/// Clear the canvas and draw the dashed centre line
pub fn draw_background<S: Surface>(surface: &mut S, config: &Config) -> Result<(), SurfaceError> {
    let size = Vec2::new(config.canvas_width, config.canvas_height);
    surface.clear_rect(Vec2::ZERO, size)?;

    let mid_x = config.canvas_width / 2.0;
    surface.stroke_dashed_line(
        Vec2::new(mid_x, 0.0),
        Vec2::new(mid_x, config.canvas_height),
        &Params::CENTER_LINE_DASH,
        Params::FOREGROUND,
    )
}

/// Draw the ball and both paddles
pub fn draw_court<S: Surface>(surface: &mut S, court: &Court) -> Result<(), SurfaceError> {
    surface.fill_circle(court.ball.pos, court.ball.radius, Params::FOREGROUND)?;
    for side in [Side::Player, Side::Computer] {
        let paddle = court.paddle(side);
        surface.fill_rect(
            Vec2::new(paddle.x, paddle.y),
            Vec2::new(paddle.width, paddle.height),
            Params::FOREGROUND,
        )?;
    }
    Ok(())
}

/// In-canvas score text along the top edge
pub fn draw_score_text<S: Surface>(
    surface: &mut S,
    score: &Score,
    config: &Config,
) -> Result<(), SurfaceError> {
    surface.fill_text(
        &format!("Player: {}", score.player),
        Vec2::new(50.0, 20.0),
        Params::SCORE_FONT_PX,
        Params::FOREGROUND,
    )?;
    surface.fill_text(
        &format!("Computer: {}", score.computer),
        Vec2::new(config.canvas_width - 110.0, 20.0),
        Params::SCORE_FONT_PX,
        Params::FOREGROUND,
    )
}
