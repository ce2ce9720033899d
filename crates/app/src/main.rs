use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{parse_count, parse_seed};
use services::{ConfigError, QuestionLoader, QuestionSource, QuizConfig, QuizController};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ui::{App, UiApp, build_app_context};

mod terminal;

use terminal::{TerminalRenderer, play};

const LOG_VAR: &str = "QUIZ_LOG";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCount { raw: String },
    InvalidSeed { raw: String },
    Config(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCount { raw } => write!(f, "invalid --count value: {raw}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ConfigError> for ArgsError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Failure the user has already seen on screen.
#[derive(Debug)]
struct AlreadyShown;

impl fmt::Display for AlreadyShown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("quiz could not start")
    }
}

impl std::error::Error for AlreadyShown {}

/// What to print before exiting, if anything.
fn exit_message(err: &(dyn std::error::Error + 'static)) -> Option<String> {
    if err.is::<AlreadyShown>() {
        None
    } else {
        Some(err.to_string())
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    config: QuizConfig,
    loader: Arc<QuestionLoader>,
}

impl UiApp for DesktopApp {
    fn config(&self) -> QuizConfig {
        self.config.clone()
    }

    fn loader(&self) -> Arc<QuestionLoader> {
        Arc::clone(&self.loader)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--source <path|url>] [--count <n>] [--seed <u64>]");
    eprintln!("  cargo run -p app -- play [--source <path|url>] [--count <n>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --source {}", QuizConfig::DEFAULT_SOURCE);
    eprintln!("  --count 20");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_SOURCE, QUIZ_COUNT, QUIZ_SEED, QUIZ_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Play,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "play" => Some(Self::Play),
            _ => None,
        }
    }
}

struct Args {
    config: QuizConfig,
}

impl Args {
    /// Environment first, then flags on top.
    fn parse(
        base: QuizConfig,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut config = base;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--source" => {
                    let value = require_value(args, "--source")?;
                    config.source = QuestionSource::parse(&value)?;
                }
                "--count" => {
                    let value = require_value(args, "--count")?;
                    config.sample_size =
                        parse_count(&value).map_err(|_| ArgsError::InvalidCount { raw: value })?;
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    config.seed =
                        Some(parse_seed(&value).map_err(|_| ArgsError::InvalidSeed { raw: value })?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { config })
    }
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var(LOG_VAR)
                .from_env_lossy(),
        )
        .try_init()?;
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            AlreadyShown
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = QuizConfig::from_env()
        .map_err(ArgsError::from)
        .and_then(|base| Args::parse(base, &mut argv.into_iter()))
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            AlreadyShown
        })?;
    let config = parsed.config;
    info!(?cmd, source = %config.source, sample_size = config.sample_size, "starting");

    let loader = Arc::new(QuestionLoader::new());

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { config, loader });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Play => {
            let renderer = TerminalRenderer::new(std::io::stdout());
            let mut controller = match config.seed {
                Some(seed) => QuizController::with_seed(renderer, config.sample_size, seed),
                None => QuizController::new(renderer, config.sample_size),
            };

            // The renderer prints load errors itself.
            match loader.load(&config.source).await {
                Ok(payload) => {
                    if controller.on_data_loaded(&payload).is_err() {
                        return Err(AlreadyShown.into());
                    }
                }
                Err(err) => {
                    controller.on_load_failed(&err);
                    return Err(AlreadyShown.into());
                }
            }

            let stdin = std::io::stdin();
            play(&mut controller, stdin.lock())?;
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = init_tracing() {
        eprintln!("{err}");
    }

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        if let Some(message) = exit_message(err.as_ref()) {
            eprintln!("{message}");
        }
        std::process::exit(2);
    }
}
