//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation one tick at a time.

use glam::IVec2;

use super::collision::{check_game_over, decay_explosions, resolve_missile_hits};
use super::projectile::{advance_missiles, advance_shots, fire_shot, spawn_missile};
use super::state::{Battery, GamePhase, GameState};

/// Input for a single tick. Button fields are "just pressed" events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Pointer position in screen space (None keeps the previous aim)
    pub pointer: Option<IVec2>,
    pub fire_left: bool,
    pub fire_center: bool,
    pub fire_right: bool,
    /// Start the game / restart after game over
    pub confirm: bool,
}

impl TickInput {
    /// Press the fire button for one battery
    pub fn fire(battery: Battery) -> Self {
        let mut input = Self::default();
        input.press_fire(battery);
        input
    }

    pub fn press_fire(&mut self, battery: Battery) {
        match battery {
            Battery::Left => self.fire_left = true,
            Battery::Center => self.fire_center = true,
            Battery::Right => self.fire_right = true,
        }
    }

    pub fn fire_pressed(&self, battery: Battery) -> bool {
        match battery {
            Battery::Left => self.fire_left,
            Battery::Center => self.fire_center,
            Battery::Right => self.fire_right,
        }
    }

    /// Clear one-shot button events, keeping the pointer
    pub fn clear_presses(&mut self) {
        self.fire_left = false;
        self.fire_center = false;
        self.fire_right = false;
        self.confirm = false;
    }
}

impl GamePhase {
    /// Phase after the player presses confirm
    pub fn on_confirm(self) -> Self {
        match self {
            GamePhase::Opening => GamePhase::Playing,
            GamePhase::Playing => GamePhase::Playing,
            GamePhase::GameOver => GamePhase::Opening,
        }
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::GameOver => {
            if input.confirm {
                state.reset();
                log::info!("Game reset");
            }
        }

        GamePhase::Opening => {
            state.time_ticks += 1;
            update_aim(state, input);
            decay_explosions(state);
            update_shots(state, input);

            if input.confirm {
                state.phase = state.phase.on_confirm();
                log::info!("Game started (seed {})", state.seed);
            }
        }

        GamePhase::Playing => {
            state.time_ticks += 1;
            update_aim(state, input);

            spawn_missile(state);
            let landings = advance_missiles(state);

            // Decay before shots so fresh explosions start at full radius
            decay_explosions(state);
            update_shots(state, input);
            resolve_missile_hits(state);

            check_game_over(state, &landings);
        }
    }
}

fn update_aim(state: &mut GameState, input: &TickInput) {
    if let Some(pointer) = input.pointer {
        state.aim = pointer;
    }
}

fn update_shots(state: &mut GameState, input: &TickInput) {
    for battery in Battery::ALL {
        if input.fire_pressed(battery) {
            fire_shot(state, battery);
        }
    }
    advance_shots(state);
}
