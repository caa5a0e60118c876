use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{self, stdout},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::mpsc::channel,
    time::{Duration, Instant},
};

use clap::Parser;
use engine::{
    config::{STARTING_LIVES, TICK_RATE},
    Canvas, ConfigError, Game, GameConfig, Outcome, Phase,
};
use env_logger::{Env, Target};
use keys::{spawn_event_listener, HoldTimer, TerminalEvent};
use log::{info, SetLoggerError};
use terminal::{TerminalSession, TerminalSurface};
use ticker::Ticker;

mod keys;
mod terminal;
mod ticker;

/// Play paddle duel against the computer. Arrow keys move, space serves.
#[derive(Parser)]
struct Cli {
    /// Lives each side starts with
    #[arg(long, default_value_t = STARTING_LIVES)]
    lives: u32,
    /// Game ticks per second
    #[arg(long, default_value_t = TICK_RATE)]
    tick_rate: u32,
    /// Milliseconds a key stays held on terminals that cannot report key releases
    #[arg(long, default_value_t = 600)]
    hold_timeout: u64,
    /// Write logs to this file. Filtered with RUST_LOG, `info` by default
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match start(cli) {
        Ok(quit) => {
            match quit {
                Quit::CtrlC => println!("^C"),
                Quit::YouWon => println!("you won"),
                Quit::YouLost => println!("you lost"),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}

fn start(cli: Cli) -> Result<Quit, ClientError> {
    init_logging(cli.log_file.as_deref())?;
    let config = GameConfig::default()
        .with_starting_lives(cli.lives)
        .with_tick_rate(cli.tick_rate);
    let game = Game::new(config)?;
    run(game, Duration::from_millis(cli.hold_timeout))
}

fn init_logging(log_file: Option<&Path>) -> Result<(), ClientError> {
    // the terminal belongs to the game, so logs only ever go to a file.
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn run(mut game: Game, hold_timeout: Duration) -> Result<Quit, ClientError> {
    let session = TerminalSession::enter()?;
    let mut stdout = stdout();
    let mut surface = TerminalSurface::new(game.config());
    surface.refresh()?;
    let (event_tx, event_rx) = channel();
    spawn_event_listener(event_tx)?;
    let mut hold_timer = HoldTimer::new(hold_timeout);
    let mut ticker = Ticker::new(game.config().tick_period());
    info!("game started at {} ticks per second", game.config().tick_rate);

    let outcome = loop {
        for event in event_rx.try_iter() {
            match event {
                TerminalEvent::Quit => return Ok(Quit::CtrlC),
                TerminalEvent::KeyDown(key) => {
                    game.key_down(key);
                    if !session.reports_releases() {
                        hold_timer.pressed(key, Instant::now());
                    }
                }
                TerminalEvent::KeyUp(key) => {
                    game.key_up(key);
                    hold_timer.released();
                }
                TerminalEvent::Resize(columns, rows) => surface.resize(columns, rows),
            }
        }
        if let Some(key) = hold_timer.expired(Instant::now()) {
            game.key_up(key);
        }

        let phase = game.tick(surface.context().map(|canvas| canvas as &mut dyn Canvas));
        surface.present(&mut stdout)?;
        if let Phase::Ended(outcome) = phase {
            break outcome;
        }
        ticker.wait();
    };

    // leave the end message up until a key is pressed.
    for event in event_rx.iter() {
        match event {
            TerminalEvent::Quit | TerminalEvent::KeyDown(_) => break,
            TerminalEvent::KeyUp(_) => {}
            TerminalEvent::Resize(columns, rows) => {
                surface.resize(columns, rows);
                if let Some(canvas) = surface.context() {
                    game.redraw(canvas);
                }
                surface.present(&mut stdout)?;
            }
        }
    }
    drop(session);
    Ok(match outcome {
        Outcome::PlayerWon => Quit::YouWon,
        Outcome::PlayerLost => Quit::YouLost,
    })
}

enum Quit {
    CtrlC,
    YouWon,
    YouLost,
}

#[derive(Debug)]
enum ClientError {
    Config(ConfigError),
    IOError(io::Error),
    Logger(SetLoggerError),
}

impl From<ConfigError> for ClientError {
    fn from(err: ConfigError) -> Self {
        ClientError::Config(err)
    }
}

impl From<io::Error> for ClientError {
    fn from(err: io::Error) -> Self {
        ClientError::IOError(err)
    }
}

impl From<SetLoggerError> for ClientError {
    fn from(err: SetLoggerError) -> Self {
        ClientError::Logger(err)
    }
}

impl Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Config(err) => write!(f, "invalid configuration: {err}"),
            ClientError::IOError(err) => Display::fmt(err, f),
            ClientError::Logger(err) => write!(f, "failed to set up logging: {err}"),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClientError::Config(err) => Some(err),
            ClientError::IOError(err) => Some(err),
            ClientError::Logger(err) => Some(err),
        }
    }
}
