//! Missile Command - deterministic arcade defense simulation
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (projectiles, collisions, game state machine)
//! - `settings`: Data-driven rules and driver options
//! - `driver`: Fixed timestep frame driver for hosts without their own clock
//!
//! Rendering and input are left to the host: it feeds a [`sim::TickInput`]
//! per tick and reads a [`sim::Snapshot`] afterwards.

pub mod driver;
pub mod settings;
pub mod sim;

pub use driver::FrameDriver;
pub use settings::{Rules, Settings, SettingsError};

/// Game configuration constants (reference behavior, in tick units)
pub mod consts {
    /// Logical tick rate the constants below are tuned for
    pub const TICK_RATE_HZ: u32 = 30;
    /// Maximum ticks per driver frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: i32 = 160;
    pub const SCREEN_HEIGHT: i32 = 120;
    /// Ground line sits this far above the bottom edge
    pub const GROUND_OFFSET: f32 = 10.0;
    /// Horizontal distance of the outer bases from the screen edges
    pub const BASE_INSET: f32 = 20.0;
    /// Number of batteries (left, center, right)
    pub const BASE_COUNT: usize = 3;

    /// Chance per playing tick that a missile spawns
    pub const SPAWN_PROBABILITY: f64 = 0.02;
    /// Missiles close 1/50 of the remaining horizontal gap per tick
    pub const MISSILE_EASE_DIVISOR: f32 = 50.0;
    /// Vertical missile speed (units per tick)
    pub const MISSILE_FALL_SPEED: f32 = 1.0;
    /// A landing missile destroys a base within this horizontal range
    pub const BASE_HIT_RANGE: f32 = 8.0;

    /// Ticks an interceptor needs to reach its target
    pub const SHOT_TRAVEL_TICKS: u32 = 30;
    /// Starting explosion radius, shrinks by 1 per tick
    pub const EXPLOSION_RADIUS: u32 = 9;
    /// Half-width of the square missile hit box around an explosion center
    pub const BLAST_HALF_EXTENT: f32 = 8.0;
    /// Points per missile destroyed
    pub const KILL_REWARD: u64 = 10;
}
