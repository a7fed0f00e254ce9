use crate::{Params, Side};
use derive_more::{Display, Error};
use glam::Vec2;
use serde::Deserialize;

/// Configuration problems found while loading or validating a [`Config`]
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum ConfigError {
    #[display("config is not valid JSON: {_0}")]
    Parse(#[error(not(source))] String),
    #[display("invalid config: {_0}")]
    Invalid(#[error(not(source))] String),
}

/// How keyboard input reaches the player paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Every key-down event moves the paddle once
    #[default]
    KeyPress,
    /// Keys are tracked while held and polled once per frame
    Held,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub paddle_start_offset: f32,
    pub ball_radius: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub win_score: u8,
    pub input_mode: InputMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            paddle_start_offset: Params::PADDLE_START_OFFSET,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            win_score: Params::WIN_SCORE,
            input_mode: InputMode::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON config; missing fields keep their defaults.
    ///
    /// Not validated: the host usually still has to apply the real canvas size.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Replace the canvas dimensions with the real drawing surface size
    pub fn with_canvas_size(mut self, width: f32, height: f32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.paddle_height > self.canvas_height {
            return Err(ConfigError::Invalid(format!(
                "paddle_height {} does not fit canvas_height {}",
                self.paddle_height, self.canvas_height
            )));
        }
        if 2.0 * (self.paddle_inset + self.paddle_width) > self.canvas_width {
            return Err(ConfigError::Invalid(format!(
                "paddles do not fit canvas_width {}",
                self.canvas_width
            )));
        }
        let non_negative = [
            ("paddle_inset", self.paddle_inset),
            ("paddle_start_offset", self.paddle_start_offset),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be zero or more, got {value}"
                )));
            }
        }
        let spawn_y = self.paddle_spawn_y();
        let lowest_y = self.canvas_height - self.paddle_height;
        if !(0.0..=lowest_y).contains(&spawn_y) {
            return Err(ConfigError::Invalid(format!(
                "paddles would start at y={spawn_y}, outside 0..={lowest_y}"
            )));
        }
        if !(self.ball_speed_x.is_finite() && self.ball_speed_x != 0.0) {
            return Err(ConfigError::Invalid(format!(
                "ball_speed_x must be finite and non-zero, got {}",
                self.ball_speed_x
            )));
        }
        if !self.ball_speed_y.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "ball_speed_y must be finite, got {}",
                self.ball_speed_y
            )));
        }
        if 2.0 * self.ball_radius >= self.canvas_height {
            return Err(ConfigError::Invalid(format!(
                "ball_radius {} does not fit canvas_height {}",
                self.ball_radius, self.canvas_height
            )));
        }
        if self.win_score == 0 {
            return Err(ConfigError::Invalid("win_score must be at least 1".into()));
        }
        Ok(())
    }

    /// Get X position (left edge) for a side's paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Computer => self.canvas_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Y position (top edge) paddles start at
    pub fn paddle_spawn_y(&self) -> f32 {
        self.canvas_height / 2.0 - self.paddle_start_offset
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    pub fn ball_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_speed_x, self.ball_speed_y)
    }
}
