//! Sand element: falls down, otherwise tries one randomly chosen diagonal.

use rand::Rng;

use crate::api::SandApi;
use crate::cell::Cell;

/// Only one diagonal is drawn per grain per pass. If it is blocked the grain
/// stays, even when the opposite diagonal is free.
pub fn update_sand<R: Rng + ?Sized>(api: &mut SandApi, rng: &mut R) {
    if api.get(0, 1).is_empty() {
        api.set(0, 1, Cell::Sand);
        return;
    }

    let dx = if rng.gen::<bool>() { 1 } else { -1 };
    if api.get(dx, 1).is_empty() {
        api.set(dx, 1, Cell::Sand);
        return;
    }

    api.set(0, 0, Cell::Sand);
}
