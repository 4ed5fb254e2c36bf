use crate::types::{Command, InputState};
use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed, is_quit_requested};

/// Reads the held movement keys. Letters and arrows are interchangeable.
pub fn sample_movement() -> InputState {
    InputState {
        up: is_key_down(KeyCode::U) || is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::D) || is_key_down(KeyCode::Down),
        left: is_key_down(KeyCode::L) || is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::R) || is_key_down(KeyCode::Right),
    }
}

/// One-shot commands for keys pressed since the last frame.
pub fn sample_commands() -> Vec<Command> {
    commands_from_presses(
        is_key_pressed(KeyCode::P),
        is_key_pressed(KeyCode::R),
        is_key_pressed(KeyCode::Escape) || is_quit_requested(),
    )
}

// Quit comes first so nothing else runs on the closing frame
fn commands_from_presses(pause: bool, restart: bool, quit: bool) -> Vec<Command> {
    let mut commands = Vec::new();
    if quit {
        commands.push(Command::Quit);
    }
    if pause {
        commands.push(Command::TogglePause);
    }
    if restart {
        commands.push(Command::Restart);
    }
    commands
}
