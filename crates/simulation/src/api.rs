//! Relative-offset API over the next-generation buffer.

use crate::cell::Cell;
use crate::Grid;

/// Write-side view of one grain during an update pass.
///
/// Reads and writes target the scratch buffer, never the grid being scanned.
/// Out-of-bounds reads return Wall, writes are no-ops.
#[derive(Debug)]
pub struct SandApi<'a> {
    pub next: &'a mut Grid,
    pub x: i32,
    pub y: i32,
}

impl<'a> SandApi<'a> {
    pub fn new(next: &'a mut Grid, x: i32, y: i32) -> Self {
        Self { next, x, y }
    }

    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Cell {
        self.next.get(self.x + dx, self.y + dy)
    }

    pub fn set(&mut self, dx: i32, dy: i32, cell: Cell) {
        self.next.set(self.x + dx, self.y + dy, cell);
    }
}
