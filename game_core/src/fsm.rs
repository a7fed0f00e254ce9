//! Game State Machine
//!
//! Tracks whether the frame loop may run. Only `Running` schedules frames.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    /// Before the first start; no loop
    Idle,
    /// Frame loop active
    Running,
    /// Loop halted, winner overlay showing
    Winner,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    GameOver,
    Restart,
    /// A frame failed; drop back to the start screen
    Abort,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Idle,
        }
    }

    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition; invalid ones leave the state untouched
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        match self.next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                log::info!("fsm: {:?} --{:?}--> {:?}", from_state, action, next_state);
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => {
                log::debug!("fsm: {:?} rejected in {:?}", action, from_state);
                TransitionResult {
                    success: false,
                    from_state,
                    to_state: from_state,
                    action,
                }
            }
        }
    }

    fn next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Idle, GameAction::Start) => Some(FsmState::Running),
            (FsmState::Running, GameAction::GameOver) => Some(FsmState::Winner),
            (FsmState::Running, GameAction::Abort) => Some(FsmState::Idle),
            (FsmState::Winner, GameAction::Restart) => Some(FsmState::Running),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == FsmState::Running
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
