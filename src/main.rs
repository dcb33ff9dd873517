//! Play a game in the terminal against two bots.
//!
//! ```text
//! kingdom [-s seed] [-c config.json] [-l logfile] name
//! ```

use std::io;
use std::process::ExitCode;

use log::{info, LevelFilter};

use kingdom_engine::agents::{BigSpender, CliStrategy, ConsoleObserver, RandomStrategy, SilentObserver};
use kingdom_engine::core::GameConfig;
use kingdom_engine::game::{load_config, GameBuilder, SetupError};

struct Options {
    name: String,
    seed: u64,
    config: Option<String>,
    log_file: Option<String>,
}

fn usage(program: &str) -> ExitCode {
    eprintln!("Usage: {program} [-s seed] [-c config.json] [-l logfile] player");
    ExitCode::FAILURE
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Option<Options> {
    let mut name = None;
    let mut seed: Option<u64> = None;
    let mut config = None;
    let mut log_file = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-s" => seed = Some(args.next()?.parse().ok()?),
            "-c" => config = Some(args.next()?),
            "-l" => log_file = Some(args.next()?),
            flag if flag.starts_with('-') => return None,
            _ if name.is_none() => name = Some(arg),
            _ => return None,
        }
    }

    Some(Options {
        name: name?,
        seed: seed.unwrap_or_else(rand::random),
        config,
        log_file,
    })
}

fn play(options: Options) -> Result<(), SetupError> {
    let config = match &options.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };

    println!("Random seed: {}", options.seed);
    let mut builder = GameBuilder::new(options.seed).with_config(config);
    let greedy = BigSpender::new(builder.fork_rng());
    let random = RandomStrategy::new(builder.fork_rng());
    let cli = CliStrategy::new(io::stdin().lock(), io::stdout());

    let mut game = builder
        .with_player(options.name, cli, ConsoleObserver::new(io::stdout()))
        .with_player("Mr Greedy", greedy, SilentObserver)
        .with_player("Lord Random", random, SilentObserver)
        .build()?;

    let result = game.run();
    info!("final result: {result:?}");
    Ok(())
}

fn main() -> ExitCode {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "kingdom".to_string());
    let Some(options) = parse_args(args) else {
        return usage(&program);
    };

    if let Some(path) = &options.log_file {
        if let Err(e) = simple_logging::log_to_file(path, LevelFilter::Debug) {
            eprintln!("{program}: cannot log to {path}: {e}");
            return ExitCode::FAILURE;
        }
    }

    match play(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{program}: {e}");
            ExitCode::FAILURE
        }
    }
}
