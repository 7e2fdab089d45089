use crate::command::Command;
use crate::view::GameView;
use boxsnake::game::{Direction, Game, Status};
use boxsnake::{ConfigError, GameConfig};
use crossterm::event::{poll, read, Event};
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::Instant;

/// The terminal front end: owns the timing loop and feeds key presses to the
/// game
#[derive(Clone, Debug)]
pub(crate) struct App {
    config: GameConfig,
    rng: StdRng,
    game: Game<StdRng>,
    next_tick: Option<Instant>,
    quitting: bool,
}

impl App {
    pub(crate) fn new(config: GameConfig, mut rng: StdRng) -> Result<App, ConfigError> {
        let game = Game::new_with_rng(config, StdRng::from_rng(&mut rng))?;
        Ok(App {
            config,
            rng,
            game,
            next_tick: None,
            quitting: false,
        })
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| self.draw(frame))?;
            self.process_input()?;
        }
        let state = self.game.state();
        info!(
            "Quitting at level {} with score {}",
            state.level, state.score
        );
        Ok(())
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(
            GameView::new(self.game.state(), self.game.wall()),
            frame.area(),
        );
    }

    /// Wait for either the next tick to come due or for an input event,
    /// whichever comes first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        if self.game.status() == Status::Running {
            let game = &self.game;
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + game.tick_interval());
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                let report = self.game.tick();
                if let Some(cause) = report.game_over {
                    info!("Game ended: {cause}");
                }
                self.next_tick = None;
            } else {
                self.handle_event(read()?);
            }
        } else {
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if event == Event::FocusLost {
            self.game.pause();
            return;
        }
        let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        else {
            return;
        };
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Up => self.game.set_direction(Direction::Up),
            Command::Down => self.game.set_direction(Direction::Down),
            Command::Left => self.game.set_direction(Direction::Left),
            Command::Right => self.game.set_direction(Direction::Right),
            Command::Pause => self.game.pause(),
            Command::Resume => self.resume(),
            Command::TogglePause => {
                if self.game.status() == Status::Paused {
                    self.resume();
                } else {
                    self.game.pause();
                }
            }
            Command::NewGame => {
                if self.game.status() == Status::GameOver {
                    self.new_game();
                }
            }
        }
    }

    fn resume(&mut self) {
        self.game.resume();
        // Give the player a full tick to get their bearings
        self.next_tick = None;
    }

    fn new_game(&mut self) {
        match Game::new_with_rng(self.config, StdRng::from_rng(&mut self.rng)) {
            Ok(game) => {
                self.game = game;
                self.next_tick = None;
            }
            // The configuration was already accepted once, so this cannot
            // happen.
            Err(e) => error!("Could not start new game: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(GameConfig::default(), StdRng::seed_from_u64(42)).unwrap()
    }

    #[test]
    fn keys_steer_snake() {
        let mut app = app();
        app.handle_event(key(KeyCode::Left));
        assert_eq!(app.game.state().direction, Direction::Left);
        app.handle_event(key(KeyCode::Right));
        assert_eq!(app.game.state().direction, Direction::Left);
    }

    #[test]
    fn pause_keys() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('p')));
        assert_eq!(app.game.status(), Status::Paused);
        app.handle_event(key(KeyCode::Char('r')));
        assert_eq!(app.game.status(), Status::Running);
        app.handle_event(key(KeyCode::Esc));
        assert_eq!(app.game.status(), Status::Paused);
        app.handle_event(key(KeyCode::Esc));
        assert_eq!(app.game.status(), Status::Running);
        app.handle_event(Event::FocusLost);
        assert_eq!(app.game.status(), Status::Paused);
    }

    #[test]
    fn new_game_only_when_over() {
        let mut app = app();
        app.game.tick();
        app.handle_event(key(KeyCode::Char('n')));
        assert_eq!(app.game.state().ticks_since_level_up, 1);
        app.handle_event(key(KeyCode::Left));
        while app.game.status() == Status::Running {
            app.game.tick();
        }
        app.handle_event(key(KeyCode::Char('n')));
        assert_eq!(app.game.status(), Status::Running);
        assert_eq!(app.game.state().ticks_since_level_up, 0);
        assert_eq!(app.game.state().score, 0);
    }

    #[test]
    fn quit() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.quitting);
    }
}
