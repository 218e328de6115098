//! Fixed timestep frame driver
//!
//! Turns variable frame deltas into whole simulation ticks. Hosts write the
//! latest pointer and button presses into [`FrameDriver::input`] and call
//! [`FrameDriver::update`] once per frame.

use crate::consts::MAX_SUBSTEPS;
use crate::sim::{GameState, TickInput, tick};

/// Longest frame delta honored; a stall beyond this is dropped
const MAX_FRAME_DT: f32 = 0.25;

pub struct FrameDriver {
    pub state: GameState,
    /// Input for upcoming ticks; presses are consumed by the first tick
    pub input: TickInput,
    accumulator: f32,
    tick_dt: f32,
}

impl FrameDriver {
    pub fn new(state: GameState, tick_rate_hz: u32) -> Self {
        Self {
            state,
            input: TickInput::default(),
            accumulator: 0.0,
            tick_dt: 1.0 / tick_rate_hz.max(1) as f32,
        }
    }

    /// Seconds per tick
    pub fn tick_dt(&self) -> f32 {
        self.tick_dt
    }

    /// Run as many ticks as `frame_dt` seconds cover. Returns ticks run.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= self.tick_dt && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= self.tick_dt;
            substeps += 1;
        }
        substeps
    }

    /// Run exactly one tick, then clear one-shot inputs
    pub fn step(&mut self) {
        tick(&mut self.state, &self.input);
        self.input.clear_presses();
    }

    /// Start over with a fresh state
    pub fn restart(&mut self, state: GameState) {
        self.state = state;
        self.accumulator = 0.0;
        self.input = TickInput::default();
    }
}
