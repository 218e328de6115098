//! Read-only view of the game for renderers
//!
//! Taken after a tick completes; nothing in here feeds back into the
//! simulation.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::state::{Base, Explosion, GameState};
use crate::consts::BASE_COUNT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissileView {
    pub origin: Vec2,
    pub pos: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotView {
    /// Origin followed by every position reached so far
    pub trail: Vec<Vec2>,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub bases: [Base; BASE_COUNT],
    pub missiles: Vec<MissileView>,
    pub shots: Vec<ShotView>,
    pub explosions: Vec<Explosion>,
    pub aim: IVec2,
    pub score: u64,
    pub opening: bool,
    pub game_over: bool,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            bases: self.bases,
            missiles: self
                .missiles
                .iter()
                .map(|m| MissileView {
                    origin: m.origin,
                    pos: m.pos,
                })
                .collect(),
            shots: self
                .shots
                .iter()
                .map(|s| ShotView {
                    trail: std::iter::once(s.origin)
                        .chain(s.trail.iter().copied())
                        .collect(),
                })
                .collect(),
            explosions: self.explosions.clone(),
            aim: self.aim,
            score: self.score,
            opening: self.is_opening(),
            game_over: self.is_game_over(),
        }
    }
}
