//! Per-element update functions dispatched from the tick loop.

mod sand;

use rand::Rng;

use crate::api::SandApi;
use crate::cell::Cell;

/// Dispatch to the appropriate element update function.
///
/// Wall and Empty never move: walls are carried over when the scratch buffer
/// is reset and empty cells have nothing to write.
pub fn update_cell<R: Rng + ?Sized>(cell: Cell, api: &mut SandApi, rng: &mut R) {
    match cell {
        Cell::Sand => sand::update_sand(api, rng),
        Cell::Empty | Cell::Wall => {}
    }
}
