use crate::{Aabb, Config};
use derive_more::Display;
use glam::Vec2;

/// Which end of the court a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Side {
    /// Left paddle, keyboard controlled
    Player,
    /// Right paddle, driven by the tracking heuristic
    Computer,
}

/// Paddle - a vertical rectangle that only moves along y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32, // Top edge, stays within [0, canvas_height - height]
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            speed,
        }
    }

    /// Spawn a side's paddle at its starting position
    pub fn spawn(side: Side, config: &Config) -> Self {
        Self::new(
            config.paddle_x(side),
            config.paddle_spawn_y(),
            config.paddle_width,
            config.paddle_height,
            config.paddle_speed,
        )
    }

    /// Move up by one step unless that would cross the top edge
    pub fn move_up(&mut self) {
        if self.y - self.speed >= 0.0 {
            self.y -= self.speed;
        }
    }

    /// Move down by one step unless that would cross the bottom edge
    pub fn move_down(&mut self, canvas_height: f32) {
        if self.y + self.height + self.speed <= canvas_height {
            self.y += self.speed;
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y + self.height),
        )
    }
}

/// Ball - the moving disc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // Pixels per frame
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Fresh ball at the centre of the court with the default velocity
    pub fn spawn(config: &Config) -> Self {
        Self::new(config.ball_spawn(), config.ball_velocity(), config.ball_radius)
    }

    /// Advance one frame and reflect off the top/bottom edges.
    ///
    /// The edge test runs on the post-move position, so the ball may overlap
    /// an edge by up to one frame of travel before it turns around. Leaving
    /// through the left or right side is a scoring event and is not handled
    /// here. Returns whether a reflection happened.
    pub fn update(&mut self, canvas_height: f32) -> bool {
        self.pos += self.vel;

        if self.pos.y + self.radius > canvas_height || self.pos.y - self.radius < 0.0 {
            self.vel.y = -self.vel.y;
            return true;
        }
        false
    }

    /// Region used for paddle hits: the full horizontal extent of the disc,
    /// collapsed to the centre line vertically
    pub fn hit_box(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.pos.x - self.radius, self.pos.y),
            Vec2::new(self.pos.x + self.radius, self.pos.y),
        )
    }
}

/// Everything that lives on the court
#[derive(Debug, Clone, PartialEq)]
pub struct Court {
    pub player: Paddle,
    pub computer: Paddle,
    pub ball: Ball,
}

impl Court {
    pub fn new(config: &Config) -> Self {
        Self {
            player: Paddle::spawn(Side::Player, config),
            computer: Paddle::spawn(Side::Computer, config),
            ball: Ball::spawn(config),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    /// Replace the ball with a freshly spawned one
    pub fn respawn_ball(&mut self, config: &Config) {
        self.ball = Ball::spawn(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT: f32 = 600.0;

    fn paddle_at(y: f32) -> Paddle {
        Paddle::new(10.0, y, 10.0, 75.0, 5.0)
    }

    #[test]
    fn test_move_up_steps_by_speed() {
        let mut paddle = paddle_at(100.0);
        paddle.move_up();
        assert_eq!(paddle.y, 95.0);
    }

    #[test]
    fn test_move_up_stops_at_top() {
        let mut paddle = paddle_at(3.0);
        paddle.move_up();
        assert_eq!(paddle.y, 3.0, "Move that would go above 0 is a no-op");

        let mut paddle = paddle_at(5.0);
        paddle.move_up();
        assert_eq!(paddle.y, 0.0, "Landing exactly on the edge is allowed");
        paddle.move_up();
        assert_eq!(paddle.y, 0.0);
    }

    #[test]
    fn test_move_down_stops_at_bottom() {
        let mut paddle = paddle_at(HEIGHT - 75.0 - 2.0);
        paddle.move_down(HEIGHT);
        assert_eq!(paddle.y, HEIGHT - 77.0);

        let mut paddle = paddle_at(HEIGHT - 80.0);
        paddle.move_down(HEIGHT);
        assert_eq!(paddle.y, HEIGHT - 75.0);
    }

    #[test]
    fn test_paddle_stays_in_bounds_under_repeated_moves() {
        let mut paddle = paddle_at(262.0);
        for _ in 0..500 {
            paddle.move_up();
            assert!(paddle.y >= 0.0);
        }
        for _ in 0..500 {
            paddle.move_down(HEIGHT);
            assert!(paddle.y + paddle.height <= HEIGHT);
        }
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(5.0, 5.0), 10.0);
        assert!(!ball.update(HEIGHT));
        assert_eq!(ball.pos, Vec2::new(405.0, 305.0));
        assert_eq!(ball.vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_ball_reflects_off_bottom_after_moving() {
        let mut ball = Ball::new(Vec2::new(400.0, 588.0), Vec2::new(5.0, 5.0), 10.0);
        assert!(ball.update(HEIGHT));
        assert_eq!(ball.pos.y, 593.0, "Position is not corrected");
        assert_eq!(ball.vel.y, -5.0);
    }

    #[test]
    fn test_ball_reflects_off_top_once() {
        let mut ball = Ball::new(Vec2::new(400.0, 12.0), Vec2::new(-5.0, -5.0), 10.0);
        assert!(ball.update(HEIGHT));
        assert_eq!(ball.vel.y, 5.0);
        // Heading back in, so the next frame does not flip again
        assert!(!ball.update(HEIGHT));
        assert_eq!(ball.vel.y, 5.0);
    }

    #[test]
    fn test_ball_ignores_side_edges() {
        let mut ball = Ball::new(Vec2::new(798.0, 300.0), Vec2::new(5.0, 0.0), 10.0);
        ball.update(HEIGHT);
        assert_eq!(ball.pos.x, 803.0);
        assert_eq!(ball.vel.x, 5.0);
    }

    #[test]
    fn test_court_spawns_from_config() {
        let config = Config::new();
        let court = Court::new(&config);
        assert_eq!(court.player.x, 10.0);
        assert_eq!(court.computer.x, 780.0);
        assert_eq!(court.player.y, 250.0);
        assert_eq!(court.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(court.ball.vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_court_paddle_by_side() {
        let court = Court::new(&Config::new());
        assert_eq!(court.paddle(Side::Player), &court.player);
        assert_eq!(court.paddle(Side::Computer), &court.computer);
    }
}
