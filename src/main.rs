use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;
use oxygen_maze::assets::{AssetSource, Textures};
use oxygen_maze::audio::AudioManager;
use oxygen_maze::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use oxygen_maze::error::GameError;
use oxygen_maze::game::Game;
use oxygen_maze::logging;
use oxygen_maze::render::Renderer;
use std::path::PathBuf;
use std::process;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for placement and spawning. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Debug filter to specify log topics (e.g., "sim,collision")
    /// Available topics: sim, spawn, collision, input
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Load textures from this directory instead of the built-in set
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Disable the low-time alarm
    #[arg(long)]
    mute: bool,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Oxygen Survival Maze Simulator".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

fn clock_seed() -> u64 {
    chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64
}

async fn start(args: Args) -> Result<(), GameError> {
    let seed = args.seed.unwrap_or_else(clock_seed);
    info!("Initializing Oxygen Maze (seed {})...", seed);

    let textures = Textures::load(&AssetSource::from_dir(args.assets_dir))?;
    let mut renderer = Renderer::new(textures);
    info!("Renderer initialized.");

    let mut audio = AudioManager::new(args.mute);
    audio.load_assets().await;

    let mut game = Game::new(seed, audio);
    game.run(&mut renderer).await;
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    let log_level = logging::parse_level(&args.log_level);
    if let Err(e) = logging::init_logger(log_level, args.debug_filter.clone()) {
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = start(args).await {
        error!("{}", e);
        process::exit(1);
    }
}
