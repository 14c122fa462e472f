//! Compile-time window and simulation constants.

use std::time::Duration;

pub const WINDOW_TITLE: &str = "Sand Simulation";
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

/// Side of one cell in pixels.
pub const CELL_SIZE: u32 = 4;

pub const GRID_WIDTH: usize = (WINDOW_WIDTH / CELL_SIZE) as usize;
pub const GRID_HEIGHT: usize = (WINDOW_HEIGHT / CELL_SIZE) as usize;

/// Random walls scattered over the lower half at startup.
pub const SEED_WALL_COUNT: usize = 50;

/// Fixed sleep after every frame (~60 FPS). No adaptive timing.
pub const FRAME_PERIOD: Duration = Duration::from_millis(16);
