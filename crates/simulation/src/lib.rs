//! Falling sand simulation engine.

pub mod api;
pub mod cell;
pub mod config;
pub mod elements;
pub mod frame;
pub mod input;
pub mod surface;
pub mod universe;

use cell::Cell;
use rand::Rng;
use tracing::{debug, info};

pub use frame::FrameLoop;
pub use input::{InputMapper, PaintMode};
pub use universe::Universe;

/// 2D grid of cells. Out-of-bounds reads return Wall, writes are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if self.in_bounds(x, y) {
            self.cells[y as usize * self.width + x as usize]
        } else {
            Cell::Wall
        }
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if self.in_bounds(x, y) {
            self.cells[y as usize * self.width + x as usize] = cell;
        }
    }
}

/// The authoritative grid plus the scratch buffer for the next generation.
///
/// The bottom row is a fixed floor of walls: it is laid down on creation and
/// survives [`World::clear_above_floor`].
#[derive(Debug, Clone)]
pub struct World {
    current: Grid,
    next: Grid,
}

impl World {
    /// An empty world with only the floor row.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let mut current = Grid::new(width, height);
        let floor = height as i32 - 1;
        for x in 0..width as i32 {
            current.set(x, floor, Cell::Wall);
        }
        Self {
            current,
            next: Grid::new(width, height),
        }
    }

    /// A world with the floor and `wall_count` walls scattered over the lower half.
    ///
    /// Walls may land on each other or on the floor, so fewer distinct wall
    /// cells than `wall_count` can result.
    pub fn seeded<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        wall_count: usize,
        rng: &mut R,
    ) -> Self {
        let mut world = Self::new(width, height);
        if width == 0 || height == 0 {
            return world;
        }
        let half = height / 2;
        for _ in 0..wall_count {
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(half..height);
            world.set_wall(x as i32, y as i32);
        }
        info!(width, height, wall_count, "seeded world");
        world
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.current.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.current.height
    }

    /// Row-major view of the current generation.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.current.cells
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.current.get(x, y)
    }

    /// Place a grain only on an in-bounds Empty cell.
    pub fn set_sand(&mut self, x: i32, y: i32) {
        // Out-of-bounds reads as Wall, so this also rejects invalid coordinates.
        if self.current.get(x, y).is_empty() {
            self.current.set(x, y, Cell::Sand);
        }
    }

    /// Place a wall on any in-bounds cell, overwriting sand.
    pub fn set_wall(&mut self, x: i32, y: i32) {
        self.current.set(x, y, Cell::Wall);
    }

    pub fn clear_above_floor(&mut self) {
        let floor_start = self.width() * self.height().saturating_sub(1);
        self.current.cells[..floor_start].fill(Cell::Empty);
        debug!("cleared grid above floor");
    }

    /// Drop one grain at a uniformly random column of the top row.
    pub fn spawn_ambient<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.width() == 0 {
            return;
        }
        let x = rng.gen_range(0..self.width());
        self.set_sand(x as i32, 0);
    }

    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.current.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Advance the simulation by one generation.
    ///
    /// Scans the current grid bottom-to-top, left-to-right. Every write goes to
    /// the scratch buffer, so a grain is moved at most once per pass.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for (next, &cell) in self.next.cells.iter_mut().zip(&self.current.cells) {
            *next = if cell == Cell::Wall { Cell::Wall } else { Cell::Empty };
        }

        let w = self.current.width as i32;
        let h = self.current.height as i32;
        for y in (0..h).rev() {
            for x in 0..w {
                let cell = self.current.get(x, y);
                if cell != Cell::Sand {
                    continue;
                }
                let mut sand_api = api::SandApi::new(&mut self.next, x, y);
                elements::update_cell(cell, &mut sand_api, rng);
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.current
    }
}
