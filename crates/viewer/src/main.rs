//! Falling sand in an SDL2 window
//!
//! Left mouse paints sand, right mouse paints walls, `C` clears everything
//! above the floor. Close the window to quit.

mod error;
mod sdl;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simulation::config::{
    CELL_SIZE, GRID_HEIGHT, GRID_WIDTH, SEED_WALL_COUNT, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};
use simulation::{FrameLoop, World};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::sdl::SdlSurface;

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        width = WINDOW_WIDTH,
        height = WINDOW_HEIGHT,
        cell_size = CELL_SIZE,
        "falling sand starting"
    );

    // Exits with status 1 before the loop when the window cannot be created
    let mut surface = SdlSurface::new(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .inspect_err(|e| error!(error = %e, "presentation initialization failed"))
        .context("failed to open the simulation window")?;

    let mut rng = StdRng::from_entropy();
    let world = World::seeded(GRID_WIDTH, GRID_HEIGHT, SEED_WALL_COUNT, &mut rng);
    let mut frames = FrameLoop::new(world, rng, CELL_SIZE);
    frames.run(&mut surface);

    info!(frames = frames.frames(), "falling sand exiting");
    Ok(())
}
