use crate::{Court, Events, Side};

/// Flip the ball's horizontal direction when it overlaps a paddle.
///
/// Player paddle first, then computer, as two independent tests. There is no
/// push-out, so the ball can sit inside a paddle for a frame after the flip.
pub fn check_paddle_collisions(court: &mut Court, events: &mut Events) {
    for side in [Side::Player, Side::Computer] {
        let paddle = court.paddle(side).bounds();
        if court.ball.hit_box().overlaps(&paddle) {
            court.ball.vel.x = -court.ball.vel.x;
            events.ball_hit_paddle = true;
        }
    }
}
