//! Tick-driven snake game engine.
//!
//! A [`Game`] owns the arena and the current [`GameState`] snapshot.  It
//! never schedules anything itself: a driver calls [`Game::tick()`] whenever
//! [`Game::tick_interval()`] has elapsed, forwards player input through
//! [`Game::set_direction()`], [`Game::pause()`] and [`Game::resume()`], and
//! reads [`Game::state()`] to draw the result.
pub mod config;
pub mod game;
pub use crate::config::{ConfigError, GameConfig};
pub use crate::game::{Direction, Game, GameOverCause, GameState, Point, Status, TickReport};
