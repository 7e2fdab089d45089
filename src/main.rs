mod app;
mod command;
mod consts;
mod util;
mod view;
use crate::app::App;
use anyhow::Context;
use boxsnake::config::{Config, ConfigError};
use lexopt::{Arg, Parser, ValueExt};
use log::{info, warn, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    seed: Option<u64>,
    log_file: PathBuf,
    log_level: LevelFilter,
}

impl Default for Arguments {
    fn default() -> Arguments {
        Arguments {
            config: None,
            seed: None,
            log_file: PathBuf::from(consts::DEFAULT_LOG_FILE),
            log_level: LevelFilter::Info,
        }
    }
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Arg::Long("log-file") => args.log_file = PathBuf::from(parser.value()?),
                Arg::Long("log-level") => args.log_level = parser.value()?.parse()?,
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Cli::Run(args) => args.run(),
            Cli::Help => {
                println!("Usage: boxsnake [-c|--config <FILE>] [--seed <N>] [--log-file <FILE>] [--log-level <LEVEL>]");
                println!();
                println!("Play snake in a box in the terminal.");
                println!();
                println!("Keys: arrows, wasd, or hjkl to steer; p to pause; r to resume;");
                println!("      Esc to toggle pause; n for a new game once over; q to quit");
                Ok(())
            }
            Cli::Version => {
                println!("boxsnake {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

impl Arguments {
    fn run(self) -> anyhow::Result<()> {
        let logfile = fs_err::File::create(&self.log_file)?;
        WriteLogger::init(self.log_level, simplelog::Config::default(), logfile)
            .context("failed to initialize logger")?;
        info!("Starting boxsnake");
        let config = self.load_config()?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let app = App::new(config.game, rng).context("invalid game configuration")?;
        let terminal = ratatui::init();
        let r = app.run(terminal);
        ratatui::restore();
        r.map_err(Into::into)
    }

    /// Load the configuration file given on the command line, or else the
    /// default configuration file if there is one
    fn load_config(&self) -> anyhow::Result<Config> {
        if let Some(ref path) = self.config {
            return Config::load(path, false)
                .with_context(|| format!("failed to load configuration from {}", path.display()));
        }
        match Config::default_path() {
            Ok(path) => Config::load(&path, true)
                .with_context(|| format!("failed to load configuration from {}", path.display())),
            Err(ConfigError::NoPath) => {
                warn!("Could not determine configuration directory; using default configuration");
                Ok(Config::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn main() -> ExitCode {
    let r = match Cli::from_parser(Parser::from_env()) {
        Ok(cli) => cli.run(),
        Err(e) => Err(e.into()),
    };
    anyhow_exit(r)
}

fn anyhow_exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("boxsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_iter(
            std::iter::once("boxsnake").chain(args.iter().copied()),
        ))
    }

    #[test]
    fn no_arguments() {
        assert_eq!(parse(&[]).unwrap(), Cli::Run(Arguments::default()));
    }

    #[test]
    fn all_arguments() {
        assert_eq!(
            parse(&[
                "--config",
                "snake.toml",
                "--seed",
                "42",
                "--log-file",
                "/tmp/snake.log",
                "--log-level",
                "debug",
            ])
            .unwrap(),
            Cli::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                seed: Some(42),
                log_file: PathBuf::from("/tmp/snake.log"),
                log_level: LevelFilter::Debug,
            })
        );
    }

    #[test]
    fn short_config() {
        let Cli::Run(args) = parse(&["-c", "snake.toml"]).unwrap() else {
            panic!("expected to run the game");
        };
        assert_eq!(args.config, Some(PathBuf::from("snake.toml")));
    }

    #[test]
    fn help() {
        assert_eq!(parse(&["--seed", "1", "--help"]).unwrap(), Cli::Help);
    }

    #[test]
    fn bad_seed() {
        assert!(parse(&["--seed", "lots"]).is_err());
    }

    #[test]
    fn unexpected_argument() {
        assert!(parse(&["--wraparound"]).is_err());
    }
}
