//! Contract between the frame loop and whatever owns the window.

/// Mouse buttons the frame loop distinguishes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Key {
    /// Erase everything above the floor.
    Clear,
    Other,
}

/// Input events in pixel space.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Event {
    Quit,
    ButtonDown { button: PointerButton, x: i32, y: i32 },
    ButtonUp { button: PointerButton },
    KeyDown { key: Key },
}

/// Axis-aligned rectangle in pixels.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// The on-screen square covering grid cell `(x, y)`.
    #[must_use]
    pub fn for_cell(x: usize, y: usize, cell_size: u32) -> Self {
        Self {
            x: (x as u32 * cell_size) as i32,
            y: (y as u32 * cell_size) as i32,
            width: cell_size,
            height: cell_size,
        }
    }
}

pub type Rgba = [u8; 4];

/// A window the frame loop can poll, query and draw into.
///
/// Implementations release their resources on drop.
pub trait Surface {
    /// Next pending event, or `None` once the queue is drained.
    fn poll_event(&mut self) -> Option<Event>;

    fn pointer_position(&self) -> (i32, i32);

    fn draw_cell(&mut self, rect: PixelRect, color: Rgba);

    /// Flush everything drawn since the last call to the screen.
    fn present(&mut self);
}
