pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod surface;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use surface::*;
pub use systems::Key;

use systems::*;

/// Run one frame of the Pong simulation (no drawing).
///
/// Order matters: the ball moves first, the computer reacts to the new ball
/// position, then both paddles are tested for hits before the side edges are
/// checked for a score.
pub fn step(
    court: &mut Court,
    config: &Config,
    held: &HeldKeys,
    score: &mut Score,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Held-key input (only in held mode; key-press mode moves on the event)
    if config.input_mode == InputMode::Held {
        apply_held_keys(court, config, held);
    }

    // 2. Move ball (reflects off top/bottom)
    move_ball(court, config, events);

    // 3. Computer paddle tracks the ball
    move_computer(court, config);

    // 4. Ball vs paddles
    check_paddle_collisions(court, events);

    // 5. Ball exited a side
    check_scoring(court, config, score, events);

    log::trace!("step: {:?}", events);
}
