use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Config {
    /// Gameplay parameters
    #[serde(default)]
    pub game: GameConfig,
}

impl Config {
    /// Return the default configuration file path
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("boxsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if the resulting game parameters are
    /// inconsistent.
    pub fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        let config = toml::from_str::<Config>(&content)?;
        config.game.validate()?;
        Ok(config)
    }
}

/// Parameters of a single game, fixed for its whole lifetime
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GameConfig {
    /// Side length of the square arena in cells, wall included
    pub box_size: u16,

    /// Size of a cell on screen.  Only meaningful to renderers.
    pub pixel_size: u16,

    /// Number of cells in the snake at the start of a game
    pub snake_length: usize,

    /// Time between ticks at level 1
    pub start_interval_millis: u64,

    /// How much shorter the time between ticks becomes on each level-up
    pub level_increase_millis: u64,

    /// The time between ticks never drops below this
    pub minimum_interval_millis: u64,

    /// Number of ticks between level-ups
    pub level_interval_ticks: u32,

    /// A treat that has not been eaten after this much game time is moved
    /// elsewhere
    pub treat_timeout_millis: u64,
}

impl GameConfig {
    /// Check that the parameters describe a playable game
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first inconsistency
    /// found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.box_size < 5 {
            return Err(ConfigError::Invalid(format!(
                "box-size must be at least 5, got {}",
                self.box_size
            )));
        }
        let max_length = usize::from(self.box_size) - 3;
        if !(1..=max_length).contains(&self.snake_length) {
            return Err(ConfigError::Invalid(format!(
                "snake-length must be between 1 and {max_length} for box-size {}, got {}",
                self.box_size, self.snake_length
            )));
        }
        if self.level_interval_ticks == 0 {
            return Err(ConfigError::Invalid(String::from(
                "level-interval-ticks must be positive",
            )));
        }
        if self.minimum_interval_millis == 0 {
            return Err(ConfigError::Invalid(String::from(
                "minimum-interval-millis must be positive",
            )));
        }
        if self.minimum_interval_millis > self.start_interval_millis {
            return Err(ConfigError::Invalid(format!(
                "minimum-interval-millis ({}) exceeds start-interval-millis ({})",
                self.minimum_interval_millis, self.start_interval_millis
            )));
        }
        if self.treat_timeout_millis == 0 {
            return Err(ConfigError::Invalid(String::from(
                "treat-timeout-millis must be positive",
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            box_size: 20,
            pixel_size: 20,
            snake_length: 3,
            start_interval_millis: 500,
            level_increase_millis: 100,
            minimum_interval_millis: 300,
            level_interval_ticks: 20,
            treat_timeout_millis: 30_000,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid game configuration: {0}")]
    Invalid(String),
}
