//! The top-level per-frame cycle.

use std::thread;

use rand::Rng;
use tracing::{debug, info, trace};

use crate::config::FRAME_PERIOD;
use crate::input::InputMapper;
use crate::surface::{Event, Key, PixelRect, Surface};
use crate::World;

/// Simulation context: owns the world, the held-button state and the RNG.
#[derive(Debug)]
pub struct FrameLoop<R> {
    world: World,
    input: InputMapper,
    rng: R,
    cell_size: u32,
    running: bool,
    frames: u64,
}

impl<R: Rng> FrameLoop<R> {
    #[must_use]
    pub fn new(world: World, rng: R, cell_size: u32) -> Self {
        Self {
            world,
            input: InputMapper::new(),
            rng,
            cell_size,
            running: true,
            frames: 0,
        }
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[must_use]
    pub fn input(&self) -> &InputMapper {
        &self.input
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Completed iterations.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run frames until a quit event arrives, sleeping `FRAME_PERIOD` after each.
    pub fn run<S: Surface>(&mut self, surface: &mut S) {
        info!(
            width = self.world.width(),
            height = self.world.height(),
            "frame loop started"
        );
        while self.run_frame(surface) {
            thread::sleep(FRAME_PERIOD);
        }
        info!(frames = self.frames, "frame loop stopped");
    }

    /// One full iteration. Returns whether the loop should keep going.
    ///
    /// A quit event still lets the rest of this iteration run.
    pub fn run_frame<S: Surface>(&mut self, surface: &mut S) -> bool {
        while let Some(event) = surface.poll_event() {
            self.handle_event(event);
        }

        if self.input.is_held() {
            let (px, py) = surface.pointer_position();
            self.input.apply(&mut self.world, px, py, self.cell_size);
        }

        self.world.spawn_ambient(&mut self.rng);
        self.world.tick(&mut self.rng);
        self.draw(surface);

        self.frames += 1;
        trace!(frame = self.frames, "frame done");
        self.running
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Quit => {
                debug!("quit requested");
                self.running = false;
            }
            Event::KeyDown { key: Key::Clear } => self.world.clear_above_floor(),
            Event::KeyDown { key: Key::Other } => {}
            Event::ButtonDown { button, .. } => self.input.press(button),
            Event::ButtonUp { .. } => self.input.release(),
        }
    }

    fn draw<S: Surface>(&self, surface: &mut S) {
        let width = self.world.width();
        for (i, cell) in self.world.cells().iter().enumerate() {
            let rect = PixelRect::for_cell(i % width, i / width, self.cell_size);
            surface.draw_cell(rect, cell.rgba());
        }
        surface.present();
    }
}
