//! The game root: owns the court, score and state machine, and turns host
//! commands (start, restart, keys, animation frames) into state changes.

use crate::systems::press_key;
use crate::{
    render, step, Config, Court, Events, FsmState, GameAction, GameFsm, HeldKeys, Hud, InputMode,
    Key, Score, Side, Surface, SurfaceError,
};

/// Whether the host should begin scheduling frames after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// A round just started; schedule the first frame
    Begin,
    /// Command rejected in the current state; a loop is already running or
    /// must not run
    Ignore,
}

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Halt,
}

pub struct Game<S: Surface, H: Hud> {
    config: Config,
    court: Court,
    score: Score,
    events: Events,
    held: HeldKeys,
    fsm: GameFsm,
    surface: S,
    hud: H,
}

impl<S: Surface, H: Hud> Game<S, H> {
    pub fn new(config: Config, surface: S, hud: H) -> Self {
        Self {
            court: Court::new(&config),
            config,
            score: Score::new(),
            events: Events::new(),
            held: HeldKeys::new(),
            fsm: GameFsm::new(),
            surface,
            hud,
        }
    }

    /// Start control clicked (Idle only)
    pub fn on_start(&mut self) -> Result<LoopControl, SurfaceError> {
        if !self.fsm.transition(GameAction::Start).success {
            return Ok(LoopControl::Ignore);
        }
        let result = self.begin_round();
        self.abort_on_error(result)?;
        Ok(LoopControl::Begin)
    }

    /// Restart control clicked (Winner only)
    pub fn on_restart(&mut self) -> Result<LoopControl, SurfaceError> {
        if !self.fsm.transition(GameAction::Restart).success {
            return Ok(LoopControl::Ignore);
        }
        let result = self
            .hud
            .hide_winner()
            .and_then(|()| self.begin_round());
        self.abort_on_error(result)?;
        Ok(LoopControl::Begin)
    }

    pub fn on_key_down(&mut self, key: Key) {
        match self.config.input_mode {
            InputMode::KeyPress => press_key(&mut self.court, &self.config, key),
            InputMode::Held => self.set_held(key, true),
        }
    }

    pub fn on_key_up(&mut self, key: Key) {
        if self.config.input_mode == InputMode::Held {
            self.set_held(key, false);
        }
    }

    /// One animation frame. Does nothing outside `Running`.
    ///
    /// A failed draw or HUD update aborts the round back to `Idle` and
    /// returns the error; the host must not schedule another frame.
    pub fn frame(&mut self) -> Result<FrameOutcome, SurfaceError> {
        if !self.fsm.is_running() {
            return Ok(FrameOutcome::Halt);
        }
        let result = self.run_frame();
        self.abort_on_error(result)
    }

    fn run_frame(&mut self) -> Result<FrameOutcome, SurfaceError> {
        render::draw_background(&mut self.surface, &self.config)?;

        step(
            &mut self.court,
            &self.config,
            &self.held,
            &mut self.score,
            &mut self.events,
        );

        render::draw_court(&mut self.surface, &self.court)?;
        self.hud.set_scores(self.score.player, self.score.computer)?;

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            self.hud.show_winner(winner)?;
            self.fsm.transition(GameAction::GameOver);
            log::info!(
                "{} wins {}-{}",
                winner,
                self.score.player,
                self.score.computer
            );
            return Ok(FrameOutcome::Halt);
        }

        render::draw_score_text(&mut self.surface, &self.score, &self.config)?;
        Ok(FrameOutcome::Continue)
    }

    /// Shared by start and restart: zero the score, drop held keys and serve
    /// a fresh ball
    fn begin_round(&mut self) -> Result<(), SurfaceError> {
        self.score.reset();
        self.events.clear();
        self.held = HeldKeys::new();
        self.court.respawn_ball(&self.config);
        self.hud.set_scores(0, 0)?;
        self.hud.set_start_visible(false)
    }

    fn abort_on_error<T>(&mut self, result: Result<T, SurfaceError>) -> Result<T, SurfaceError> {
        if let Err(err) = &result {
            log::error!("aborting round: {}", err);
            if self.fsm.transition(GameAction::Abort).success {
                if let Err(err) = self.hud.set_start_visible(true) {
                    log::warn!("could not show start control: {}", err);
                }
            }
        }
        result
    }

    fn set_held(&mut self, key: Key, down: bool) {
        match key {
            Key::Up => self.held.up = down,
            Key::Down => self.held.down = down,
        }
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    /// The side shown on the winner overlay, while it is up
    pub fn winner(&self) -> Option<Side> {
        match self.fsm.state() {
            FsmState::Winner => Some(self.score.leader()),
            _ => None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn court(&self) -> &Court {
        &self.court
    }

    pub fn court_mut(&mut self) -> &mut Court {
        &mut self.court
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events from the most recent frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[derive(Default)]
    struct NullSurface {
        calls: usize,
        fail: bool,
    }

    impl NullSurface {
        fn record(&mut self, operation: &'static str) -> Result<(), SurfaceError> {
            self.calls += 1;
            if self.fail {
                Err(SurfaceError::new(operation, "context lost"))
            } else {
                Ok(())
            }
        }
    }

    impl Surface for NullSurface {
        fn clear_rect(&mut self, _min: Vec2, _size: Vec2) -> Result<(), SurfaceError> {
            self.record("clear_rect")
        }
        fn fill_rect(&mut self, _min: Vec2, _size: Vec2, _color: &str) -> Result<(), SurfaceError> {
            self.record("fill_rect")
        }
        fn fill_circle(&mut self, _c: Vec2, _r: f32, _color: &str) -> Result<(), SurfaceError> {
            self.record("fill_circle")
        }
        fn stroke_dashed_line(
            &mut self,
            _from: Vec2,
            _to: Vec2,
            _dash: &[f32],
            _color: &str,
        ) -> Result<(), SurfaceError> {
            self.record("stroke_dashed_line")
        }
        fn fill_text(
            &mut self,
            _text: &str,
            _pos: Vec2,
            _font_px: f32,
            _color: &str,
        ) -> Result<(), SurfaceError> {
            self.record("fill_text")
        }
    }

    #[derive(Default)]
    struct StubHud {
        scores: (u8, u8),
        start_visible: bool,
        winner: Option<Side>,
    }

    impl Hud for StubHud {
        fn set_scores(&mut self, player: u8, computer: u8) -> Result<(), SurfaceError> {
            self.scores = (player, computer);
            Ok(())
        }
        fn set_start_visible(&mut self, visible: bool) -> Result<(), SurfaceError> {
            self.start_visible = visible;
            Ok(())
        }
        fn show_winner(&mut self, winner: Side) -> Result<(), SurfaceError> {
            self.winner = Some(winner);
            Ok(())
        }
        fn hide_winner(&mut self) -> Result<(), SurfaceError> {
            self.winner = None;
            Ok(())
        }
    }

    fn new_game(config: Config) -> Game<NullSurface, StubHud> {
        Game::new(config, NullSurface::default(), StubHud::default())
    }

    #[test]
    fn test_frame_does_nothing_while_idle() {
        let mut game = new_game(Config::new());
        let before = game.court().clone();
        assert_eq!(game.frame().unwrap(), FrameOutcome::Halt);
        assert_eq!(game.court(), &before);
        assert_eq!(game.surface().calls, 0);
    }

    #[test]
    fn test_start_begins_loop_once() {
        let mut game = new_game(Config::new());
        assert_eq!(game.on_start().unwrap(), LoopControl::Begin);
        assert_eq!(game.state(), FsmState::Running);
        assert_eq!(game.on_start().unwrap(), LoopControl::Ignore);
        assert_eq!(game.on_restart().unwrap(), LoopControl::Ignore);
    }

    #[test]
    fn test_frame_advances_ball() {
        let mut game = new_game(Config::new());
        game.on_start().unwrap();
        assert_eq!(game.frame().unwrap(), FrameOutcome::Continue);
        assert_eq!(game.court().ball.pos, Vec2::new(405.0, 305.0));
        assert!(game.surface().calls > 0);
    }

    #[test]
    fn test_key_press_mode_moves_on_event() {
        let mut game = new_game(Config::new());
        game.on_key_down(Key::Up);
        assert_eq!(game.court().player.y, 245.0);
        game.on_key_up(Key::Up);
        assert_eq!(game.court().player.y, 245.0);
    }

    #[test]
    fn test_held_mode_moves_per_frame() {
        let config = Config {
            input_mode: InputMode::Held,
            ..Config::default()
        };
        let mut game = new_game(config);
        game.on_start().unwrap();

        game.on_key_down(Key::Down);
        assert_eq!(game.court().player.y, 250.0, "Key-down alone does not move");
        game.frame().unwrap();
        game.frame().unwrap();
        assert_eq!(game.court().player.y, 260.0);

        game.on_key_up(Key::Down);
        game.frame().unwrap();
        assert_eq!(game.court().player.y, 260.0);
    }

    #[test]
    fn test_failed_frame_aborts_to_idle() {
        let mut game = new_game(Config::new());
        game.on_start().unwrap();
        game.surface.fail = true;

        let err = game.frame().unwrap_err();
        assert_eq!(err.operation, "clear_rect");
        assert_eq!(game.state(), FsmState::Idle);
        assert!(game.hud().start_visible, "Start control shown again");

        game.surface.fail = false;
        assert_eq!(game.on_start().unwrap(), LoopControl::Begin);
    }

    #[test]
    fn test_winner_reported_only_in_winner_state() {
        let mut game = new_game(Config::new());
        game.on_start().unwrap();
        assert_eq!(game.winner(), None);

        game.court_mut().ball.pos = Vec2::new(-20.0, 300.0);
        game.court_mut().ball.vel = Vec2::new(-5.0, 0.0);
        assert_eq!(game.frame().unwrap(), FrameOutcome::Halt);
        assert_eq!(game.winner(), Some(Side::Computer));
        assert_eq!(game.hud().winner, Some(Side::Computer));
    }

    #[test]
    fn test_restart_forgets_keys_held_through_the_win() {
        let config = Config {
            input_mode: InputMode::Held,
            ..Config::default()
        };
        let mut game = new_game(config);
        game.on_start().unwrap();

        game.on_key_down(Key::Down);
        game.court_mut().ball.pos = Vec2::new(-20.0, 100.0);
        game.court_mut().ball.vel = Vec2::new(-5.0, 0.0);
        assert_eq!(game.frame().unwrap(), FrameOutcome::Halt);
        let resting_y = game.court().player.y;

        // Key-up is lost while the winner overlay has focus
        assert_eq!(game.on_restart().unwrap(), LoopControl::Begin);
        game.frame().unwrap();
        assert_eq!(game.court().player.y, resting_y);
    }
}
