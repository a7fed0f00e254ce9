use crate::{Config, Court, Events, Score, Side};

/// Check if the ball left the court through a side.
///
/// Past the left edge the computer scores, past the right edge the player
/// does. Either way the ball is replaced by a fresh one at the centre. At
/// most one side scores per call.
pub fn check_scoring(court: &mut Court, config: &Config, score: &mut Score, events: &mut Events) {
    let scorer = if court.ball.pos.x < 0.0 {
        Side::Computer
    } else if court.ball.pos.x > config.canvas_width {
        Side::Player
    } else {
        return;
    };

    score.increment(scorer);
    match scorer {
        Side::Player => events.player_scored = true,
        Side::Computer => events.computer_scored = true,
    }
    log::debug!(
        "{} scored at x={:.1}, now {}-{}",
        scorer,
        court.ball.pos.x,
        score.player,
        score.computer
    );

    court.respawn_ball(config);
}
