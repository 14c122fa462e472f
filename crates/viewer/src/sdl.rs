//! SDL2 window implementing the simulation's `Surface`.

use sdl2::event::Event as SdlEvent;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;
use sdl2::{EventPump, Sdl};
use simulation::surface::{Event, Key, PixelRect, PointerButton, Rgba, Surface};
use tracing::{debug, info};

use crate::error::ViewerError;

/// Window, accelerated renderer and event queue. Dropping it tears all three down.
pub struct SdlSurface {
    canvas: WindowCanvas,
    events: EventPump,
    _sdl: Sdl,
}

impl std::fmt::Debug for SdlSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (width, height) = self.canvas.window().size();
        f.debug_struct("SdlSurface")
            .field("width", &width)
            .field("height", &height)
            .finish_non_exhaustive()
    }
}

impl SdlSurface {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, ViewerError> {
        let sdl = sdl2::init().map_err(ViewerError::SdlInit)?;
        let video = sdl.video().map_err(ViewerError::Video)?;

        let window = video.window(title, width, height).position_centered().build()?;
        let mut canvas = window.into_canvas().accelerated().build()?;

        // Present an initial frame immediately to commit the surface
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        canvas.present();

        let events = sdl.event_pump().map_err(ViewerError::EventPump)?;
        info!(width, height, "window created");

        Ok(Self {
            canvas,
            events,
            _sdl: sdl,
        })
    }
}

fn map_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        _ => PointerButton::Other,
    }
}

fn map_event(event: SdlEvent) -> Option<Event> {
    match event {
        SdlEvent::Quit { .. } => Some(Event::Quit),
        SdlEvent::MouseButtonDown { mouse_btn, x, y, .. } => Some(Event::ButtonDown {
            button: map_button(mouse_btn),
            x,
            y,
        }),
        SdlEvent::MouseButtonUp { mouse_btn, .. } => Some(Event::ButtonUp {
            button: map_button(mouse_btn),
        }),
        SdlEvent::KeyDown { keycode, .. } => {
            let key = if keycode == Some(Keycode::C) {
                Key::Clear
            } else {
                Key::Other
            };
            Some(Event::KeyDown { key })
        }
        _ => None,
    }
}

impl Surface for SdlSurface {
    fn poll_event(&mut self) -> Option<Event> {
        // Skip events the frame loop has no use for
        while let Some(event) = self.events.poll_event() {
            if let Some(mapped) = map_event(event) {
                return Some(mapped);
            }
        }
        None
    }

    fn pointer_position(&self) -> (i32, i32) {
        let state = self.events.mouse_state();
        (state.x(), state.y())
    }

    fn draw_cell(&mut self, rect: PixelRect, color: Rgba) {
        let [r, g, b, a] = color;
        self.canvas.set_draw_color(Color::RGBA(r, g, b, a));
        if let Err(e) = self
            .canvas
            .fill_rect(Rect::new(rect.x, rect.y, rect.width, rect.height))
        {
            debug!(error = %e, "fill_rect failed");
        }
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
