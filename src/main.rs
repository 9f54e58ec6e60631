use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use video_player::library::load_library;
use video_player::playback::StdRandom;
use video_player::{Shell, ShellConfig, VideoPlayer};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Interactive in-memory video player", long_about = None)]
struct Args {
    /// Path to the video catalog (one `title | id | tags` per line)
    #[arg(short = 'c', long, default_value = "data/videos.txt")]
    catalog: String,

    /// Seed for PLAY_RANDOM (random each run if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Prompt shown before each command
    #[arg(long, default_value = "YT> ")]
    prompt: String,

    /// Skip the greeting
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (stderr, so it stays out of the shell output)
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let catalog_path = shellexpand::tilde(&args.catalog);
    let library = load_library(PathBuf::from(catalog_path.as_ref()).as_path())?;

    let random = match args.seed {
        Some(seed) => {
            log::info!("Using random seed {}", seed);
            StdRandom::seeded(seed)
        }
        None => StdRandom::new(),
    };

    let player = VideoPlayer::new(&library, random);
    let config = ShellConfig::new()
        .with_prompt(args.prompt)
        .with_greeting(!args.quiet);

    let mut shell = Shell::new(player, config);
    shell.run(&mut io::stdin().lock(), &mut io::stdout().lock())?;

    Ok(())
}
