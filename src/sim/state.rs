//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`].

use glam::{IVec2, Vec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::BASE_COUNT;
use crate::settings::Rules;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen; shots can be test-fired but nothing attacks
    #[default]
    Opening,
    /// Missiles falling
    Playing,
    /// All bases lost, waiting for confirm
    GameOver,
}

/// One of the three batteries, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Battery {
    Left,
    Center,
    Right,
}

impl Battery {
    pub const ALL: [Battery; BASE_COUNT] = [Battery::Left, Battery::Center, Battery::Right];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Battery::Left => 0,
            Battery::Center => 1,
            Battery::Right => 2,
        }
    }
}

/// A ground installation that fires interceptors while active
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Base {
    pub pos: Vec2,
    pub active: bool,
}

impl Base {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, active: true }
    }
}

/// An incoming enemy missile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    /// Launch point (y is always 0)
    pub origin: Vec2,
    pub pos: Vec2,
    /// Target column on the ground line
    pub target: Vec2,
}

impl Missile {
    pub fn new(origin_x: f32, target_x: f32, ground_y: f32) -> Self {
        let origin = Vec2::new(origin_x, 0.0);
        Self {
            origin,
            pos: origin,
            target: Vec2::new(target_x, ground_y),
        }
    }

    /// Ease toward the target column while falling at a constant rate
    pub fn advance(&mut self, ease_divisor: f32, fall_speed: f32) {
        self.pos.x += (self.target.x - self.pos.x) / ease_divisor;
        self.pos.y += fall_speed;
    }

    #[inline]
    pub fn has_landed(&self) -> bool {
        self.pos.y >= self.target.y
    }
}

/// An interceptor in flight from a base to the aim point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub origin: Vec2,
    pub target: Vec2,
    /// Ticks since firing
    pub progress: u32,
    /// Interpolated positions, one per tick (origin excluded)
    pub trail: Vec<Vec2>,
}

impl Shot {
    pub fn new(origin: Vec2, target: Vec2) -> Self {
        Self {
            origin,
            target,
            progress: 0,
            trail: Vec::new(),
        }
    }

    /// Travel completion in `[0, 1]`
    #[inline]
    pub fn fraction(&self, travel_ticks: u32) -> f32 {
        (self.progress as f32 / travel_ticks as f32).min(1.0)
    }

    /// Current head position
    pub fn head(&self) -> Vec2 {
        self.trail.last().copied().unwrap_or(self.origin)
    }

    /// Step one tick and record the new position; returns true on arrival
    pub fn advance(&mut self, travel_ticks: u32) -> bool {
        self.progress += 1;
        let fraction = self.fraction(travel_ticks);
        self.trail.push(self.origin.lerp(self.target, fraction));
        self.progress >= travel_ticks
    }
}

/// A shrinking blast left by an arrived interceptor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub center: Vec2,
    pub radius: u32,
}

impl Explosion {
    pub fn new(center: Vec2, radius: u32) -> Self {
        Self { center, radius }
    }

    /// Shrink by one; returns false once spent
    pub fn decay(&mut self) -> bool {
        self.radius = self.radius.saturating_sub(1);
        self.radius > 0
    }

    /// Axis-aligned square hit test
    #[inline]
    pub fn covers(&self, point: Vec2, half_extent: f32) -> bool {
        (point.x - self.center.x).abs() < half_extent
            && (point.y - self.center.y).abs() < half_extent
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Rules in effect for this run
    pub rules: Rules,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Score
    pub score: u64,
    /// Pointer position
    pub aim: IVec2,
    /// Batteries, left to right
    pub bases: [Base; BASE_COUNT],
    pub missiles: Vec<Missile>,
    pub shots: Vec<Shot>,
    pub explosions: Vec<Explosion>,
}

impl GameState {
    /// Create a new game state with the reference rules
    pub fn new(seed: u64) -> Self {
        Self::with_rules(seed, Rules::default())
    }

    pub fn with_rules(seed: u64, rules: Rules) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            rules,
            phase: GamePhase::Opening,
            time_ticks: 0,
            score: 0,
            aim: IVec2::new(rules.screen_width / 2, rules.screen_height / 2),
            bases: rules.base_positions().map(Base::new),
            missiles: Vec::new(),
            shots: Vec::new(),
            explosions: Vec::new(),
        }
    }

    /// Back to the opening screen: clear transient entities, restore bases
    /// and score. Aim, rules and the RNG stream carry over.
    pub fn reset(&mut self) {
        self.missiles.clear();
        self.shots.clear();
        self.explosions.clear();
        self.bases = self.rules.base_positions().map(Base::new);
        self.score = 0;
        self.phase = GamePhase::Opening;
    }

    #[inline]
    pub fn base(&self, battery: Battery) -> &Base {
        &self.bases[battery.index()]
    }

    pub fn active_bases(&self) -> usize {
        self.bases.iter().filter(|b| b.active).count()
    }

    #[inline]
    pub fn all_bases_lost(&self) -> bool {
        self.bases.iter().all(|b| !b.active)
    }

    pub fn is_opening(&self) -> bool {
        self.phase == GamePhase::Opening
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}
