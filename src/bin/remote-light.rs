use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};
use remote_light_composer::{
    AppConfig, Animation, Command, ConfigLayer, Deliver, Delay, Duration, HexColor, HttpClient,
    PatternId, RecordingClient, Routine, RunLimit, Script, Session, SessionConfig, Show, ShowId,
    ShowSettings, Step, StopSignal,
};

/// 128 + SIGINT
const EXIT_INTERRUPTED: i32 = 130;

#[derive(Parser)]
#[command(name = "remote-light")]
#[command(about = "Drive a remote LED strip controller with procedural animations")]
struct Cli {
    /// TOML file with base_url, cookie, strip_length, request_timeout_ms, seed
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true, env = "LIGHT_BASE_URL")]
    base_url: Option<String>,
    /// Session cookie sent with every request
    #[arg(long, global = true, env = "LIGHT_SESSION_COOKIE", hide_env_values = true)]
    cookie: Option<String>,
    #[arg(long, global = true, env = "LIGHT_STRIP_LENGTH")]
    strip_length: Option<usize>,
    /// Per request timeout, none by default
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,
    /// Seed for every random choice, entropy by default
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Stop after this many steps
    #[arg(long, global = true)]
    steps: Option<u64>,
    /// Log commands instead of sending them
    #[arg(long, global = true, default_value_t = false)]
    dry_run: bool,
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a named show
    Show {
        show: ShowId,
        /// Time each toggle color stays on
        #[arg(long, default_value_t = 250)]
        speed_ms: u64,
        /// Total toggle time
        #[arg(long, default_value_t = 10_000)]
        duration_ms: u64,
        /// Play repeating shows a single time
        #[arg(long, default_value_t = false)]
        once: bool,
    },
    /// Stream one pattern as explicit frames
    Pattern {
        pattern: PatternId,
        /// Unbounded when omitted
        #[arg(long)]
        frames: Option<u32>,
        #[arg(long, default_value_t = 50)]
        delay_ms: u64,
    },
    /// Set the whole strip to one color
    Solid { r: u8, g: u8, b: u8 },
    Strobe {
        color: HexColor,
        #[arg(long, default_value_t = 80)]
        speed: u32,
        #[arg(long, default_value_t = 3000)]
        duration: u32,
    },
    Breathe {
        color: HexColor,
        #[arg(long, default_value_t = 100)]
        speed: u32,
    },
    Rainbow {
        #[arg(long, default_value_t = 2)]
        num_rainbows: u32,
        #[arg(long, default_value_t = 10_000)]
        value: u32,
        #[arg(long, default_value_t = 180)]
        speed: u32,
    },
    /// List pattern and show names
    List,
}

fn init_logging(cli: &Cli) {
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[allow(clippy::print_stdout)]
fn print_catalog() {
    println!("patterns:");
    for id in PatternId::ALL {
        let kind = if id.is_stateful() { " (stateful)" } else { "" };
        println!("  {}{}", id, kind);
    }
    println!("shows:");
    for id in ShowId::ALL {
        println!("  {}", id);
    }
}

fn single(command: Command) -> Box<dyn Routine> {
    let name = command.kind().as_str();
    Box::new(Script::new(name, [Step::send(command, Delay::ZERO)]))
}

fn build_routine(command: &Commands, config: &AppConfig) -> Option<Box<dyn Routine>> {
    let routine: Box<dyn Routine> = match command {
        Commands::Show {
            show,
            speed_ms,
            duration_ms,
            once,
        } => {
            let settings = ShowSettings::new(config.strip).with_toggle(
                Duration::from_millis(*speed_ms),
                Duration::from_millis(*duration_ms),
            );
            let show = Show::new(*show, settings);
            let repeat = show.id().repeats() && !once;
            Box::new(show.with_repeat(repeat))
        }
        Commands::Pattern {
            pattern,
            frames,
            delay_ms,
        } => {
            let mut rng = config
                .seed
                .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
            let animation = Animation::sample(*pattern, &mut rng, config.strip)
                .with_delay(Delay::millis(*delay_ms));
            match frames {
                Some(frames) => Box::new(animation.with_frames(*frames)),
                None => Box::new(animation),
            }
        }
        Commands::Solid { r, g, b } => single(Command::solid(*r, *g, *b)),
        Commands::Strobe {
            color,
            speed,
            duration,
        } => single(Command::Strobe {
            color: *color,
            speed: *speed,
            duration: *duration,
        }),
        Commands::Breathe { color, speed } => single(Command::Breathe {
            color: *color,
            speed: *speed,
        }),
        Commands::Rainbow {
            num_rainbows,
            value,
            speed,
        } => single(Command::Rainbow {
            num_rainbows: *num_rainbows,
            value: *value,
            speed: *speed,
        }),
        Commands::List => return None,
    };
    Some(routine)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    if matches!(cli.command, Commands::List) {
        print_catalog();
        return Ok(());
    }

    let file = match &cli.config {
        Some(path) => Some(
            ConfigLayer::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
        ),
        None => None,
    };
    let overrides = ConfigLayer {
        base_url: cli.base_url.clone(),
        cookie: cli.cookie.clone(),
        strip_length: cli.strip_length,
        request_timeout_ms: cli.timeout_ms,
        seed: cli.seed,
    };
    let config =
        AppConfig::resolve(file, overrides, !cli.dry_run).context("invalid configuration")?;

    let client: Box<dyn Deliver> = if cli.dry_run {
        info!("remote-light: dry run, nothing is sent");
        Box::new(RecordingClient::bounded(config.strip, 0))
    } else {
        let client_config = config.client_config()?;
        Box::new(HttpClient::new(&client_config).context("failed to build http client")?)
    };

    let Some(routine) = build_routine(&cli.command, &config) else {
        return Ok(());
    };
    let session_config = SessionConfig {
        limit: cli.steps.map_or(RunLimit::Forever, RunLimit::Steps),
        seed: config.seed,
    };
    let mut session = Session::new(client, routine, session_config);

    let stop = StopSignal::new();
    let ctrl_c = stop.clone();
    // Listening for ctrl-c replaces the default handler, so keep listening
    // and exit on the second one: a hung request never reaches a step boundary.
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if ctrl_c.stop() > 1 {
                warn!("remote-light: interrupted again, exiting");
                std::process::exit(EXIT_INTERRUPTED);
            }
            info!(
                "remote-light: interrupted, stopping after the current step \
                 (ctrl-c again to exit now)"
            );
        }
    });

    let report = session.run(&stop).await.context("session failed")?;
    info!("remote-light: done, {}", report);
    Ok(())
}
