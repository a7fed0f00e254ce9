//! Keyboard input handling

use game_core::Key;

/// Map a `KeyboardEvent.key` value to a paddle key
pub fn key_from_name(key: &str) -> Option<Key> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Key::Up),
        "ArrowDown" | "s" | "S" => Some(Key::Down),
        _ => None,
    }
}
