//! Incoming missiles and outgoing interceptors
//!
//! Spawning and motion only; what happens when things meet lives in
//! [`super::collision`].

use rand::Rng;

use super::collision::strike_base;
use super::state::{Battery, Explosion, GameState, Missile, Shot};
use crate::consts::BASE_COUNT;

/// What happened to missiles that reached the ground this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Landings {
    /// Missiles that destroyed a base
    pub bases_hit: u32,
    /// Missiles that struck bare ground
    pub ground_misses: u32,
}

/// Roll for a new missile; returns true if one spawned
pub fn spawn_missile(state: &mut GameState) -> bool {
    let rules = state.rules;
    let rng = state.rng_mut();
    if rng.random::<f64>() >= rules.spawn_probability {
        return false;
    }

    let origin_x = rng.random_range(0..=rules.screen_width) as f32;
    let target = rng.random_range(0..BASE_COUNT);
    // Inactive bases stay valid targets
    let target_x = state.bases[target].pos.x;

    log::trace!("Missile spawned at x={} aiming for base {}", origin_x, target);
    state
        .missiles
        .push(Missile::new(origin_x, target_x, rules.ground_y()));
    true
}

/// Move every missile one tick and resolve those that reached the ground
pub fn advance_missiles(state: &mut GameState) -> Landings {
    let rules = state.rules;
    let bases = &mut state.bases;
    let mut landings = Landings::default();

    state.missiles.retain_mut(|missile| {
        missile.advance(rules.missile_ease_divisor, rules.missile_fall_speed);
        if !missile.has_landed() {
            return true;
        }
        match strike_base(&mut bases[..], missile.pos.x, rules.base_hit_range) {
            Some(_) => landings.bases_hit += 1,
            None => landings.ground_misses += 1,
        }
        false
    });

    landings
}

/// Launch an interceptor from `battery` toward the current aim.
/// Destroyed bases cannot fire.
pub fn fire_shot(state: &mut GameState, battery: Battery) -> bool {
    let base = *state.base(battery);
    if !base.active {
        return false;
    }
    state.shots.push(Shot::new(base.pos, state.aim.as_vec2()));
    true
}

/// Move every shot one tick; arrived shots become explosions.
/// Returns the number of detonations.
pub fn advance_shots(state: &mut GameState) -> usize {
    let travel = state.rules.shot_travel_ticks;
    let radius = state.rules.explosion_radius;
    let explosions = &mut state.explosions;
    let before = explosions.len();

    state.shots.retain_mut(|shot| {
        if shot.advance(travel) {
            log::debug!("Interceptor detonated at ({}, {})", shot.target.x, shot.target.y);
            explosions.push(Explosion::new(shot.target, radius));
            false
        } else {
            true
        }
    });

    explosions.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Rules;
    use glam::{IVec2, Vec2};
    use proptest::prelude::*;

    fn quiet_state() -> GameState {
        GameState::with_rules(
            7,
            Rules {
                spawn_probability: 0.0,
                ..Rules::default()
            },
        )
    }

    #[test]
    fn test_spawn_never_with_zero_probability() {
        let mut state = quiet_state();
        for _ in 0..1000 {
            assert!(!spawn_missile(&mut state));
        }
        assert!(state.missiles.is_empty());
    }

    #[test]
    fn test_spawn_always_with_certain_probability() {
        let mut state = GameState::with_rules(
            3,
            Rules {
                spawn_probability: 1.0,
                ..Rules::default()
            },
        );
        let base_xs: Vec<f32> = state.bases.iter().map(|b| b.pos.x).collect();
        for _ in 0..200 {
            assert!(spawn_missile(&mut state));
        }
        for missile in &state.missiles {
            assert_eq!(missile.origin.y, 0.0);
            assert_eq!(missile.pos, missile.origin);
            assert!((0.0..=160.0).contains(&missile.origin.x));
            assert!(base_xs.contains(&missile.target.x));
            assert_eq!(missile.target.y, 110.0);
        }
    }

    #[test]
    fn test_spawn_rate_near_reference() {
        let mut state = GameState::new(42);
        let spawned = (0..50_000).filter(|_| spawn_missile(&mut state)).count();
        // 2% of 50k = 1000
        assert!((800..1200).contains(&spawned), "spawned {spawned}");
    }

    #[test]
    fn test_missile_lands_on_active_base() {
        let mut state = quiet_state();
        let mut missile = Missile::new(80.0, 80.0, 110.0);
        missile.pos.y = 109.0;
        state.missiles.push(missile);

        let landings = advance_missiles(&mut state);
        assert_eq!(landings.bases_hit, 1);
        assert!(state.missiles.is_empty());
        assert!(!state.base(Battery::Center).active);
        assert!(state.base(Battery::Left).active);
    }

    #[test]
    fn test_missile_lands_on_dead_base() {
        let mut state = quiet_state();
        state.bases[1].active = false;
        let mut missile = Missile::new(80.0, 80.0, 110.0);
        missile.pos.y = 109.0;
        state.missiles.push(missile);

        let landings = advance_missiles(&mut state);
        assert_eq!(landings.ground_misses, 1);
        assert_eq!(landings.bases_hit, 0);
        assert!(state.missiles.is_empty());
        assert_eq!(state.active_bases(), 2);
    }

    #[test]
    fn test_missile_still_falling() {
        let mut state = quiet_state();
        state.missiles.push(Missile::new(10.0, 110.0, 110.0));
        let landings = advance_missiles(&mut state);
        assert_eq!(landings, Landings::default());
        assert_eq!(state.missiles[0].pos, Vec2::new(12.0, 1.0));
    }

    #[test]
    fn test_fire_requires_active_base() {
        let mut state = quiet_state();
        state.aim = IVec2::new(80, 60);
        assert!(fire_shot(&mut state, Battery::Left));
        state.bases[2].active = false;
        assert!(!fire_shot(&mut state, Battery::Right));

        assert_eq!(state.shots.len(), 1);
        let shot = &state.shots[0];
        assert_eq!(shot.origin, Vec2::new(20.0, 110.0));
        assert_eq!(shot.target, Vec2::new(80.0, 60.0));
        assert_eq!(shot.progress, 0);
    }

    #[test]
    fn test_multiple_shots_per_base() {
        let mut state = quiet_state();
        for _ in 0..5 {
            assert!(fire_shot(&mut state, Battery::Center));
        }
        assert_eq!(state.shots.len(), 5);
    }

    #[test]
    fn test_shot_becomes_explosion() {
        let mut state = quiet_state();
        state.aim = IVec2::new(80, 60);
        fire_shot(&mut state, Battery::Left);

        for _ in 0..29 {
            assert_eq!(advance_shots(&mut state), 0);
        }
        assert_eq!(state.shots[0].progress, 29);
        assert_eq!(state.shots[0].trail.len(), 29);

        assert_eq!(advance_shots(&mut state), 1);
        assert!(state.shots.is_empty());
        assert_eq!(state.explosions, vec![Explosion::new(Vec2::new(80.0, 60.0), 9)]);
    }

    proptest! {
        #[test]
        fn prop_shot_arrives_after_travel_ticks(
            ox in 0.0f32..160.0, oy in 0.0f32..120.0,
            tx in -50.0f32..250.0, ty in -50.0f32..200.0,
        ) {
            let mut shot = Shot::new(Vec2::new(ox, oy), Vec2::new(tx, ty));
            for _ in 0..29 {
                prop_assert!(!shot.advance(30));
                prop_assert!(shot.fraction(30) < 1.0);
            }
            prop_assert!(shot.advance(30));
            prop_assert_eq!(shot.fraction(30), 1.0);
        }

        #[test]
        fn prop_missile_converges_without_overshoot(
            origin in 0i32..=160, target_idx in 0usize..3,
        ) {
            let target_x = [20.0f32, 80.0, 140.0][target_idx];
            let mut missile = Missile::new(origin as f32, target_x, 110.0);
            let mut gap = (target_x - missile.pos.x).abs();
            let side = (target_x - missile.pos.x).signum();
            for _ in 0..110 {
                let before = missile.pos.x;
                missile.advance(50.0, 1.0);
                prop_assert_eq!(missile.pos.x, before + (target_x - before) / 50.0);
                let new_gap = (target_x - missile.pos.x).abs();
                prop_assert!(new_gap <= gap);
                if gap > 0.0 {
                    prop_assert!((target_x - missile.pos.x).signum() == side || new_gap == 0.0);
                }
                gap = new_gap;
            }
            prop_assert_eq!(missile.pos.y, 110.0);
        }
    }
}
