//! WASM-facing handle: lets a browser host paint, tick and read the grid.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::cell::Cell;
use crate::World;

/// World plus its RNG, seeded by the host so runs are reproducible.
///
/// `cells_ptr` exposes the current generation as `width * height` bytes
/// (one `Cell` discriminant each), valid until the next `tick` or paint.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    world: World,
    rng: SmallRng,
}

#[wasm_bindgen]
impl Universe {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let world = World::seeded(width, height, crate::config::SEED_WALL_COUNT, &mut rng);
        Self { world, rng }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.world.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.world.height()
    }

    /// Ambient spawn followed by one update pass.
    pub fn tick(&mut self) {
        self.world.spawn_ambient(&mut self.rng);
        self.world.tick(&mut self.rng);
    }

    pub fn paint_sand(&mut self, x: i32, y: i32) {
        self.world.set_sand(x, y);
    }

    pub fn paint_wall(&mut self, x: i32, y: i32) {
        self.world.set_wall(x, y);
    }

    pub fn clear(&mut self) {
        self.world.clear_above_floor();
    }

    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> u8 {
        self.world.get(x, y) as u8
    }

    #[must_use]
    pub fn cells_ptr(&self) -> *const u8 {
        self.world.cells().as_ptr().cast::<u8>()
    }
}

impl Universe {
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.world.count(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_run() {
        let mut a = Universe::new(40, 30, 123);
        let mut b = Universe::new(40, 30, 123);
        for _ in 0..50 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.world().cells(), b.world().cells());
        assert!(a.count(Cell::Sand) > 0);
    }

    #[test]
    fn paint_and_clear_round_through_the_world() {
        let mut universe = Universe::new(20, 10, 1);
        universe.clear();
        universe.paint_wall(4, 4);
        universe.paint_sand(5, 5);
        assert_eq!(universe.cell(4, 4), Cell::Wall as u8);
        assert_eq!(universe.cell(5, 5), Cell::Sand as u8);
        assert_eq!(universe.cell(-1, 0), Cell::Wall as u8);

        universe.clear();
        assert_eq!(universe.cell(4, 4), Cell::Empty as u8);
        assert_eq!(universe.cell(5, 9), Cell::Wall as u8);
    }

    #[test]
    fn cells_ptr_exposes_row_major_bytes() {
        let mut universe = Universe::new(8, 6, 2);
        universe.clear();
        universe.paint_sand(3, 2);
        let bytes =
            unsafe { std::slice::from_raw_parts(universe.cells_ptr(), universe.width() * universe.height()) };
        assert_eq!(bytes[2 * 8 + 3], Cell::Sand as u8);
        assert_eq!(bytes[5 * 8], Cell::Wall as u8);
        assert_eq!(bytes[0], Cell::Empty as u8);
    }
}
