use crate::audio::AudioManager;
use crate::config::MAX_TICK_DT;
use crate::input;
use crate::render::Renderer;
use crate::session::Session;
use crate::types::{Command, GameEvent};
use log::info;
use macroquad::prelude::{get_frame_time, get_time, next_frame};

/// What the frame loop should do after applying the frame's commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Owns the session and the output devices, and drives one tick per frame
pub struct Game {
    pub session: Session,
    audio: AudioManager,
}

impl Game {
    pub fn new(seed: u64, audio: AudioManager) -> Self {
        info!("Creating session with seed {}", seed);
        Game {
            session: Session::with_seed(seed),
            audio,
        }
    }

    /// Run the main game loop using the provided renderer
    pub async fn run(&mut self, renderer: &mut Renderer) {
        info!("Starting main loop...");
        loop {
            if self.apply_commands(&input::sample_commands()) == LoopControl::Exit {
                break;
            }

            let dt = get_frame_time().min(MAX_TICK_DT);
            let movement = input::sample_movement();
            let events = self.session.tick(dt, &movement);
            self.handle_events(&events);

            renderer.draw_frame(&self.session, get_time() as f32);
            next_frame().await;
        }
        info!("Exiting Oxygen Maze.");
    }

    pub fn apply_commands(&mut self, commands: &[Command]) -> LoopControl {
        for command in commands {
            crate::debug_input!(self.session.tick_count(), "Command {:?}", command);
            match command {
                Command::Quit => {
                    info!("Quit requested");
                    return LoopControl::Exit;
                }
                Command::TogglePause => self.session.toggle_pause(),
                Command::Restart => {
                    self.session.restart();
                }
            }
        }
        LoopControl::Continue
    }

    fn handle_events(&self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::LowTimeAlarm = event {
                self.audio.play_alarm();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InputState, Phase};

    fn game() -> Game {
        Game::new(5, AudioManager::new(true))
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut game = game();
        assert_eq!(game.apply_commands(&[]), LoopControl::Continue);
        assert_eq!(
            game.apply_commands(&[Command::Quit, Command::TogglePause]),
            LoopControl::Exit
        );
        // Nothing after the quit was applied
        assert_eq!(game.session.phase, Phase::Playing);
    }

    #[test]
    fn test_pause_and_restart_commands() {
        let mut game = game();
        game.apply_commands(&[Command::TogglePause]);
        assert_eq!(game.session.phase, Phase::Paused);

        // Restart is ignored until the session ends
        game.apply_commands(&[Command::Restart]);
        assert_eq!(game.session.phase, Phase::Paused);

        game.apply_commands(&[Command::TogglePause]);
        game.session.time_remaining = 0.01;
        game.session.tick(0.1, &InputState::default());
        assert!(game.session.is_game_over());

        game.apply_commands(&[Command::Restart]);
        assert_eq!(game.session.phase, Phase::Playing);
    }

    #[test]
    fn test_alarm_events_with_muted_audio() {
        let game = game();
        game.handle_events(&[GameEvent::LowTimeAlarm, GameEvent::Won]);
    }
}
