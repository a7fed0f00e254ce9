/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas (the host replaces these with the real element size)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 75.0;
    pub const PADDLE_SPEED: f32 = 5.0; // pixels per move
    pub const PADDLE_INSET: f32 = 10.0; // gap between paddle and side edge
    pub const PADDLE_START_OFFSET: f32 = 50.0; // start y = height / 2 - offset

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 5.0; // pixels per frame
    pub const BALL_SPEED_Y: f32 = 5.0;

    // Score
    pub const WIN_SCORE: u8 = 1; // First point wins

    // Court drawing
    pub const CENTER_LINE_DASH: [f32; 2] = [5.0, 5.0];
    pub const SCORE_FONT_PX: f32 = 16.0;
    pub const FOREGROUND: &str = "white";
}
