use crate::{Config, Court, HeldKeys};

/// Directional key understood by the player paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

/// Move the player paddle one step in a key's direction
pub fn press_key(court: &mut Court, config: &Config, key: Key) {
    match key {
        Key::Up => court.player.move_up(),
        Key::Down => court.player.move_down(config.canvas_height),
    }
}

/// Apply held keys to the player paddle (once per frame)
pub fn apply_held_keys(court: &mut Court, config: &Config, keys: &HeldKeys) {
    match keys.dir() {
        -1 => press_key(court, config, Key::Up),
        1 => press_key(court, config, Key::Down),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_key_moves_player_only() {
        let config = Config::new();
        let mut court = Court::new(&config);
        let computer_y = court.computer.y;

        press_key(&mut court, &config, Key::Up);
        assert_eq!(court.player.y, 245.0);
        press_key(&mut court, &config, Key::Down);
        press_key(&mut court, &config, Key::Down);
        assert_eq!(court.player.y, 255.0);
        assert_eq!(court.computer.y, computer_y);
    }

    #[test]
    fn test_held_keys_move_one_step() {
        let config = Config::new();
        let mut court = Court::new(&config);
        let keys = HeldKeys {
            up: false,
            down: true,
        };

        apply_held_keys(&mut court, &config, &keys);
        assert_eq!(court.player.y, 255.0);

        apply_held_keys(&mut court, &config, &HeldKeys::new());
        assert_eq!(court.player.y, 255.0, "No keys held, no movement");
    }
}
