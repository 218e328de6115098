//! Deterministic simulation module
//!
//! Fixed tick, seeded RNG, no I/O. Same seed + same inputs = same result.

pub mod autopilot;
pub mod collision;
pub mod projectile;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{check_game_over, decay_explosions, resolve_missile_hits, strike_base};
pub use projectile::{Landings, advance_missiles, advance_shots, fire_shot, spawn_missile};
pub use snapshot::{MissileView, ShotView, Snapshot};
pub use state::{Base, Battery, Explosion, GamePhase, GameState, Missile, Shot};
pub use tick::{TickInput, tick};
