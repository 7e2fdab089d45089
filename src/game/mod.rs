mod direction;
mod point;
mod progression;
mod snake;
mod treat;
mod wall;
pub use self::direction::Direction;
pub use self::point::Point;
pub use self::progression::{Advance, Progression};
pub use self::snake::Snake;
pub use self::treat::{Placement, PlacementError, TreatSpawner};
pub use self::wall::Wall;
use crate::config::{ConfigError, GameConfig};
use log::{debug, info};
use rand::Rng;
use std::fmt;
use std::time::Duration;

/// A game in progress.
///
/// The game never waits on its own.  Whoever is driving it is expected to
/// call [`Game::tick()`] once every [`Game::tick_interval()`], never while a
/// previous tick is still running, and to stop calling it when the game
/// should stop.
#[derive(Clone, Debug)]
pub struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    config: GameConfig,
    wall: Wall,
    spawner: TreatSpawner,
    progression: Progression,
    state: GameState,

    /// Whether a turn has already been accepted since the last tick
    turned: bool,
}

impl Game<rand::rngs::ThreadRng> {
    /// Start a new game using the thread-local random number generator
    ///
    /// # Errors
    ///
    /// Returns `Err` if `config` does not describe a playable game.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Game::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    /// Start a new game whose treats are placed using `rng`
    ///
    /// # Errors
    ///
    /// Returns `Err` if `config` does not describe a playable game.
    pub fn new_with_rng(config: GameConfig, rng: R) -> Result<Game<R>, ConfigError> {
        config.validate()?;
        info!(
            "Starting new game in a {0}x{0} box with a snake of length {1}",
            config.box_size, config.snake_length
        );
        Ok(Game {
            rng,
            wall: Wall::new(config.box_size),
            spawner: TreatSpawner::new(&config),
            progression: Progression::new(&config),
            state: GameState::initial(&config),
            config,
            turned: false,
        })
    }

    /// Advance the game by one step.
    ///
    /// Does nothing if the game is paused or over.  Otherwise the snake moves
    /// one cell in its current direction, eating the treat if it lands on it,
    /// and the game ends if it runs into the wall or itself.  If the snake
    /// survives, the treat is placed or moved as needed and the level
    /// progresses.
    pub fn tick(&mut self) -> TickReport {
        if self.state.paused || self.state.is_game_over() {
            return TickReport::default();
        }
        self.turned = false;
        let (next, report) = self.next_state();
        self.state = next;
        report
    }

    fn next_state(&mut self) -> (GameState, TickReport) {
        let state = &self.state;
        let mut report = TickReport::default();
        let head = state.snake.head() + state.direction.shift();
        let mut treat = state.treat;
        let mut score = state.score;
        if head.collides_with_any(treat) {
            report.ate_treat = true;
            score = score.saturating_add(state.level);
            treat = None;
            debug!("Ate treat at {head}; score is now {score}");
        }
        let body = state.snake.trailing_body(report.ate_treat);
        let cause = if self.wall.contains(head) {
            Some(GameOverCause::Wall)
        } else if body.contains(head) {
            Some(GameOverCause::SelfBite)
        } else {
            None
        };
        if let Some(cause) = cause {
            info!(
                "Game over at {head} ({cause}) on level {} with score {score}",
                state.level
            );
            report.game_over = Some(cause);
            let next = GameState {
                treat,
                score,
                game_over: Some(cause),
                collision: Some(head),
                ..state.clone()
            };
            return (next, report);
        }
        let snake = body.with_head(head);

        let mut treat_age_millis = 0;
        if treat.is_some() {
            treat_age_millis = state
                .treat_age_millis
                .saturating_add(state.tick_interval_millis);
        }
        let treat = match self.spawner.ensure_treat(
            treat,
            treat_age_millis,
            &self.wall,
            &snake,
            &mut self.rng,
        ) {
            Ok(placement) => {
                if placement.is_fresh() {
                    treat_age_millis = 0;
                }
                report.treat_relocated = matches!(placement, Placement::Relocated(_));
                placement.point()
            }
            Err(PlacementError::ArenaFull) => {
                info!(
                    "No room left for a treat; game over on level {} with score {score}",
                    state.level
                );
                report.game_over = Some(GameOverCause::ArenaFull);
                let next = GameState {
                    snake,
                    treat: None,
                    score,
                    treat_age_millis: 0,
                    game_over: Some(GameOverCause::ArenaFull),
                    ..state.clone()
                };
                return (next, report);
            }
        };

        let advance = self.progression.advance(
            state.level,
            state.ticks_since_level_up,
            state.tick_interval_millis,
        );
        if advance.leveled_up {
            report.leveled_up = true;
            info!(
                "Reached level {}; ticking every {}ms",
                advance.level, advance.tick_interval_millis
            );
        }
        let next = GameState {
            snake,
            treat: Some(treat),
            direction: state.direction,
            level: advance.level,
            score,
            ticks_since_level_up: advance.ticks_since_level_up,
            treat_age_millis,
            game_over: None,
            paused: false,
            tick_interval_millis: advance.tick_interval_millis,
            collision: None,
        };
        (next, report)
    }
}

impl<R> Game<R> {
    /// Turn the snake to face `direction` as of the next tick.
    ///
    /// The request is ignored if it would turn the snake around on itself, if
    /// another turn has already been accepted since the last tick, or if the
    /// game is paused or over.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.state.paused
            || self.state.is_game_over()
            || self.turned
            || direction == self.state.direction
        {
            return;
        }
        if direction.is_opposite(self.state.direction) {
            debug!(
                "Ignoring reversal from {} to {direction}",
                self.state.direction
            );
            return;
        }
        self.state.direction = direction;
        self.turned = true;
    }

    pub fn pause(&mut self) {
        if !self.state.is_game_over() {
            self.state.paused = true;
        }
    }

    pub fn resume(&mut self) {
        if !self.state.is_game_over() {
            self.state.paused = false;
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.state.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Return a snapshot of the game's current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Return how long the driver should wait before the next tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.state.tick_interval_millis)
    }

    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// Everything there is to know about a game at a given moment.
///
/// A new value replaces the old one on every tick.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,

    /// The treat's position, or `None` if no treat is currently placed
    pub treat: Option<Point>,

    pub direction: Direction,
    pub level: u32,
    pub score: u32,

    /// Number of ticks completed since the level last increased
    pub ticks_since_level_up: u32,

    /// Game time, in milliseconds, for which the treat has been in place
    pub treat_age_millis: u64,

    /// Why the game ended, or `None` if it is still going
    pub game_over: Option<GameOverCause>,

    pub paused: bool,

    /// Time between ticks at the current level
    pub tick_interval_millis: u64,

    /// The cell that the snake's head ran into, if the game ended in a
    /// collision
    pub collision: Option<Point>,
}

impl GameState {
    fn initial(config: &GameConfig) -> GameState {
        GameState {
            snake: Snake::starting(config.box_size, config.snake_length),
            treat: None,
            direction: Direction::Up,
            level: 1,
            score: 0,
            ticks_since_level_up: 0,
            treat_age_millis: 0,
            game_over: None,
            paused: false,
            tick_interval_millis: config.start_interval_millis,
            collision: None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn status(&self) -> Status {
        if self.is_game_over() {
            Status::GameOver
        } else if self.paused {
            Status::Paused
        } else {
            Status::Running
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    Running,
    Paused,
    GameOver,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Running => "",
            Status::Paused => "PAUSED",
            Status::GameOver => "GAME OVER",
        };
        f.pad(s)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GameOverCause {
    /// The snake ran into the wall
    Wall,

    /// The snake ran into its own body
    SelfBite,

    /// The snake has filled the arena and there is nowhere left to place a
    /// treat
    ArenaFull,
}

impl fmt::Display for GameOverCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameOverCause::Wall => "hit the wall",
            GameOverCause::SelfBite => "bit itself",
            GameOverCause::ArenaFull => "arena full",
        };
        f.pad(s)
    }
}

/// What happened during a call to [`Game::tick()`]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TickReport {
    pub ate_treat: bool,
    pub treat_relocated: bool,
    pub leveled_up: bool,
    pub game_over: Option<GameOverCause>,
}
