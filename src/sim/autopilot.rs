//! Demo mode: a simple player that drives [`TickInput`] from the game state
//!
//! Aims where the lowest unhandled missile will be when an interceptor
//! launched now arrives, and fires from the closest live battery.

use glam::{IVec2, Vec2};

use super::state::{Battery, Explosion, GamePhase, GameState, Missile};
use super::tick::TickInput;

/// Ticks between launches
const RELOAD_TICKS: u32 = 4;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    cooldown: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide this tick's input
    pub fn input(&mut self, state: &GameState) -> TickInput {
        match state.phase {
            GamePhase::Opening => TickInput {
                confirm: true,
                ..Default::default()
            },
            // Leave restarting to whoever runs the autopilot
            GamePhase::GameOver => TickInput::default(),
            GamePhase::Playing => self.play(state),
        }
    }

    fn play(&mut self, state: &GameState) -> TickInput {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return TickInput::default();
        }

        let Some(target) = pick_target(state) else {
            return TickInput::default();
        };
        let Some(battery) = closest_battery(state, target.x) else {
            return TickInput::default();
        };

        let rules = &state.rules;
        let pointer = IVec2::new(
            (target.x.round() as i32).clamp(0, rules.screen_width),
            (target.y.round() as i32).clamp(0, rules.screen_height),
        );
        self.cooldown = RELOAD_TICKS;
        log::trace!("Autopilot firing {:?} at {}", battery, pointer);

        TickInput {
            pointer: Some(pointer),
            ..TickInput::fire(battery)
        }
    }
}

/// Where `missile` will be after `ticks` more advances
pub fn predict(missile: &Missile, ticks: u32, ease_divisor: f32, fall_speed: f32) -> Vec2 {
    let keep = (1.0 - 1.0 / ease_divisor).powi(ticks as i32);
    Vec2::new(
        missile.target.x - (missile.target.x - missile.pos.x) * keep,
        missile.pos.y + fall_speed * ticks as f32,
    )
}

/// Intercept point of the lowest missile nothing is already handling
fn pick_target(state: &GameState) -> Option<Vec2> {
    let rules = &state.rules;
    let ground = rules.ground_y();

    state
        .missiles
        .iter()
        .filter(|m| !is_handled(state, m))
        .map(|m| {
            predict(
                m,
                rules.shot_travel_ticks,
                rules.missile_ease_divisor,
                rules.missile_fall_speed,
            )
        })
        .filter(|p| p.y < ground)
        .max_by(|a, b| a.y.total_cmp(&b.y))
}

/// True if a shot in flight will catch the missile when it detonates, or a
/// live explosion catches it next tick
fn is_handled(state: &GameState, missile: &Missile) -> bool {
    let rules = &state.rules;
    let ahead = |ticks: u32| {
        predict(
            missile,
            ticks,
            rules.missile_ease_divisor,
            rules.missile_fall_speed,
        )
    };

    let by_shot = state.shots.iter().any(|shot| {
        let remaining = rules.shot_travel_ticks.saturating_sub(shot.progress);
        Explosion::new(shot.target, rules.explosion_radius)
            .covers(ahead(remaining), rules.blast_half_extent)
    });
    let next = ahead(1);
    by_shot
        || state
            .explosions
            .iter()
            .any(|e| e.radius > 1 && e.covers(next, rules.blast_half_extent))
}

fn closest_battery(state: &GameState, x: f32) -> Option<Battery> {
    Battery::ALL
        .into_iter()
        .filter(|b| state.base(*b).active)
        .min_by(|a, b| {
            let da = (state.base(*a).pos.x - x).abs();
            let db = (state.base(*b).pos.x - x).abs();
            da.total_cmp(&db)
        })
}
