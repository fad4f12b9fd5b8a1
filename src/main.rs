//! # Tallgrass Headless Runner
//!
//! Builds a game from the command line, feeds it a command script and prints
//! the resulting screen snapshots as JSON.

use clap::Parser;
use log::{error, info, LevelFilter};
use tallgrass::{
    parse_script, GameConfig, GameEvent, GameState, InputHandler, RenderFrame, SceneManager,
    TallgrassResult,
};

/// Command line arguments for the Tallgrass runner.
#[derive(Parser, Debug)]
#[command(name = "tallgrass")]
#[command(about = "Headless runner for a handheld creature-catching adventure")]
#[command(version)]
struct Args {
    /// Random seed, overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON game configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Whitespace separated commands: up down left right ok back tick tick*N
    #[arg(long, default_value = "")]
    script: String,

    /// Raw key presses run after the script: wasd/hjkl move, z or space confirm, x back
    #[arg(long, default_value = "")]
    keys: String,

    /// Disable hjkl movement keys in --keys
    #[arg(long)]
    no_vi_keys: bool,

    /// Species index of the starter creature
    #[arg(long)]
    starter: Option<u8>,

    /// Print a frame after every event instead of only the last
    #[arg(long)]
    frames: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Initializes env_logger from a level name, falling back to info.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();
}

fn build_config(args: &Args) -> TallgrassResult<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(starter) = args.starter {
        config.starter_species = starter;
    }
    Ok(config)
}

/// Script commands first, then the mapped key presses.
fn collect_events(args: &Args) -> TallgrassResult<Vec<GameEvent>> {
    let mut events = parse_script(&args.script)?;
    let input_handler = InputHandler {
        vi_keys_enabled: !args.no_vi_keys,
    };
    events.extend(input_handler.map_keys(&args.keys));
    Ok(events)
}

fn run(args: &Args) -> TallgrassResult<()> {
    info!("Starting Tallgrass v{}", tallgrass::VERSION);

    let config = build_config(args)?;
    let events = collect_events(args)?;
    let mut scenes = SceneManager::new(GameState::new(config)?);

    if args.frames {
        print_frame(&scenes.render_frame()?)?;
    }
    for event in events {
        scenes.handle_event(event);
        if args.frames {
            print_frame(&scenes.render_frame()?)?;
        }
    }
    if !args.frames {
        print_frame(&scenes.render_frame()?)?;
    }

    info!("Finished in scene {:?}", scenes.scene());
    Ok(())
}

fn print_frame(frame: &RenderFrame) -> TallgrassResult<()> {
    println!("{}", serde_json::to_string_pretty(frame)?);
    Ok(())
}
