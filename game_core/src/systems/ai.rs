use crate::{Config, Court};

/// Track the ball with the computer paddle.
///
/// Compares the paddle centre with the ball's y and steps one paddle speed
/// toward it. No prediction, no reaction delay.
pub fn move_computer(court: &mut Court, config: &Config) {
    let center = court.computer.center_y();
    let ball_y = court.ball.pos.y;

    if center < ball_y {
        court.computer.move_down(config.canvas_height);
    } else if center > ball_y {
        court.computer.move_up();
    }
}
