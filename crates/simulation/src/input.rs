//! Pointer-to-grid mapping and the held paint mode.

use tracing::debug;

use crate::surface::PointerButton;
use crate::World;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum PaintMode {
    #[default]
    Sand,
    Wall,
}

/// Tracks whether a button is held and what it paints.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct InputMapper {
    held: bool,
    mode: PaintMode,
}

/// Map a pixel position to the grid cell under it.
///
/// Uses floor division so pixels left of or above the surface map to
/// negative, out-of-bounds cells instead of folding onto row/column 0.
#[must_use]
pub fn pixel_to_cell(px: i32, py: i32, cell_size: u32) -> (i32, i32) {
    let size = cell_size.max(1) as i32;
    (px.div_euclid(size), py.div_euclid(size))
}

impl InputMapper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    #[must_use]
    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    /// Any button starts painting. Buttons other than primary and secondary
    /// keep whatever mode was last selected.
    pub fn press(&mut self, button: PointerButton) {
        self.held = true;
        match button {
            PointerButton::Primary => self.mode = PaintMode::Sand,
            PointerButton::Secondary => self.mode = PaintMode::Wall,
            PointerButton::Other => {}
        }
        debug!(?button, mode = ?self.mode, "paint started");
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    /// Paint the active mode into the single cell under the pointer.
    ///
    /// No-op while no button is held. Consecutive frames are not
    /// interpolated, so a fast pointer can skip cells.
    pub fn apply(&self, world: &mut World, px: i32, py: i32, cell_size: u32) {
        if !self.held {
            return;
        }
        let (x, y) = pixel_to_cell(px, py, cell_size);
        match self.mode {
            PaintMode::Sand => world.set_sand(x, y),
            PaintMode::Wall => world.set_wall(x, y),
        }
    }
}
