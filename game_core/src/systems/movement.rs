use crate::{Config, Court, Events};

/// Advance the ball one frame, reflecting off the top and bottom edges
pub fn move_ball(court: &mut Court, config: &Config, events: &mut Events) {
    if court.ball.update(config.canvas_height) {
        events.ball_hit_wall = true;
    }
}
