//! Collision detection and resolution
//!
//! All checks are positional: explosions do not know which shot made them
//! and missiles do not know which base they were aimed at.

use super::projectile::Landings;
use super::state::{Base, GamePhase, GameState};

/// Shrink every explosion by one and drop the spent ones
pub fn decay_explosions(state: &mut GameState) {
    state.explosions.retain_mut(|explosion| explosion.decay());
}

/// Destroy missiles inside a live explosion's hit box and award points.
///
/// A missile is credited to at most one explosion, however many overlap it.
/// The hit box is an axis-aligned square, not the drawn circle.
/// Returns the number of missiles destroyed.
pub fn resolve_missile_hits(state: &mut GameState) -> u32 {
    let half_extent = state.rules.blast_half_extent;
    let explosions = &state.explosions;
    let mut kills = 0;

    state.missiles.retain(|missile| {
        let hit = explosions
            .iter()
            .any(|explosion| explosion.covers(missile.pos, half_extent));
        if hit {
            kills += 1;
        }
        !hit
    });

    state.score += u64::from(kills) * state.rules.kill_reward;
    kills
}

/// Destroy the first active base (left to right) within `range` of a landing
/// missile. Returns the index of the destroyed base.
pub fn strike_base(bases: &mut [Base], x: f32, range: f32) -> Option<usize> {
    let (index, base) = bases
        .iter_mut()
        .enumerate()
        .find(|(_, base)| base.active && (x - base.pos.x).abs() < range)?;
    base.active = false;
    log::debug!("Base {} destroyed at x={}", index, base.pos.x);
    Some(index)
}

/// End the game once a missile reaches bare ground with no base left.
/// Returns true on the transition to game over.
pub fn check_game_over(state: &mut GameState, landings: &Landings) -> bool {
    if state.phase != GamePhase::Playing || landings.ground_misses == 0 {
        return false;
    }
    if !state.all_bases_lost() {
        return false;
    }
    state.phase = GamePhase::GameOver;
    log::info!(
        "Game over at tick {} with score {}",
        state.time_ticks,
        state.score
    );
    true
}
