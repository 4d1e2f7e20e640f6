use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lifeline::{FsSource, HashedWorld, Loader, Sim, World};

use config::Args;
mod config;

use view::Player;
mod view;

pub fn main() -> io::Result<()> {
    let args = Args::parse();

    // stdout belongs to the viewer
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lifeline=info")),
        )
        .with_writer(io::stderr)
        .init();

    let loader = Loader::new(FsSource);
    let seed: HashedWorld = loader.load_all(&args.patterns);
    tracing::info!(
        files = args.patterns.len(),
        cells = seed.len(),
        "initial generation loaded"
    );

    let sim = Sim::new(seed);
    let player = Player::new(args.speed, args.fps, args.play);
    view::run(sim, player)
}
