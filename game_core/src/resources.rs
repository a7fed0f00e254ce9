use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub computer: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Computer => self.computer = self.computer.saturating_add(1),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The side with more points. A tie is credited to the computer.
    pub fn leader(&self) -> Side {
        if self.player > self.computer {
            Side::Player
        } else {
            Side::Computer
        }
    }

    /// Winner once either side has reached `win_score`
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score || self.computer >= win_score {
            Some(self.leader())
        } else {
            None
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub computer_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scorer(&self) -> Option<Side> {
        if self.player_scored {
            Some(Side::Player)
        } else if self.computer_scored {
            Some(Side::Computer)
        } else {
            None
        }
    }
}

/// Direction keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// -1 = up, 0 = none or both, 1 = down
    pub fn dir(&self) -> i8 {
        match (self.up, self.down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}
