//! Session state and road geometry
//!
//! Everything a running race needs lives here. A session is fully
//! determined by its seed, the screen size, and the sprite dimensions.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::obstacle::{Obstacle, spawn_pool};
use super::player::{Player, StuntKind};
use crate::consts::*;

/// Current phase of a race
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RacePhase {
    /// Active gameplay
    Riding,
    /// Hit a hazard; terminal until restart
    Wrecked,
    /// Crossed the finish distance; terminal until restart
    Finished,
}

impl RacePhase {
    /// True for either terminal phase
    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self, RacePhase::Wrecked | RacePhase::Finished)
    }
}

/// Playable area of the screen, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadBounds {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl RoadBounds {
    pub fn from_screen(screen_w: i32, screen_h: i32) -> Self {
        Self {
            left: ROAD_LEFT,
            right: screen_w - ROAD_RIGHT_MARGIN,
            top: ROAD_TOP,
            bottom: screen_h - ROAD_BOTTOM_MARGIN,
        }
    }

    /// Clamp an entity's x so the whole width stays on the road
    #[inline]
    pub fn clamp_x(&self, x: i32, width: i32) -> i32 {
        x.clamp(self.left, self.right - width)
    }

    /// Clamp an entity's y so the whole height stays on the road
    #[inline]
    pub fn clamp_y(&self, y: i32, height: i32) -> i32 {
        y.clamp(self.top, self.bottom - height)
    }
}

/// Pixel footprints of the gameplay sprites; collision boxes use these.
///
/// Captured from the host's sprite bank at session start. Style swaps
/// recolor the bike but never resize it, so these stay fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteDims {
    pub bike: (i32, i32),
    pub car: (i32, i32),
    pub rock: (i32, i32),
    pub oil: (i32, i32),
    pub cone: (i32, i32),
}

impl Default for SpriteDims {
    fn default() -> Self {
        Self {
            bike: (100, 60),
            car: (100, 60),
            rock: (50, 50),
            oil: (60, 30),
            cone: (40, 60),
        }
    }
}

/// Crash burst latched at the wreck position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrashEffect {
    pub x: i32,
    pub y: i32,
    pub ticks_left: u32,
}

/// Floating score banner latched when a stunt completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StuntBanner {
    pub kind: StuntKind,
    pub points: u32,
    pub ticks_left: u32,
}

/// Complete race state, deterministic given the seed
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub screen_w: i32,
    pub screen_h: i32,
    pub road: RoadBounds,
    pub dims: SpriteDims,
    pub phase: RacePhase,
    /// +1 per tick, plus stunt bonuses
    pub score: u32,
    /// Traveled distance; the race is won at `-FINISH_LINE_OFFSET`
    pub distance: i32,
    /// Background scroll offset, wraps at the screen height
    pub road_offset: i32,
    /// Simulation tick counter
    pub tick_count: u64,
    pub player: Player,
    /// Fixed-size pool, recycled in place
    pub obstacles: Vec<Obstacle>,
    pub crash_effect: Option<CrashEffect>,
    pub stunt_banner: Option<StuntBanner>,
}

impl GameState {
    /// Create a fresh session
    pub fn new(screen_w: i32, screen_h: i32, dims: SpriteDims, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let road = RoadBounds::from_screen(screen_w, screen_h);
        let player = Player::new(road, dims.bike, screen_h);
        let obstacles = spawn_pool(&mut rng, &road, &dims);
        Self {
            seed,
            rng,
            screen_w,
            screen_h,
            road,
            dims,
            phase: RacePhase::Riding,
            score: 0,
            distance: 0,
            road_offset: 0,
            tick_count: 0,
            player,
            obstacles,
            crash_effect: None,
            stunt_banner: None,
        }
    }

    /// Rebuild the session from scratch with a new seed
    pub fn restart(&mut self, seed: u64) {
        log::info!("restarting race, seed {seed}");
        *self = GameState::new(self.screen_w, self.screen_h, self.dims, seed);
    }

    #[inline]
    pub fn game_over(&self) -> bool {
        self.phase == RacePhase::Wrecked
    }

    #[inline]
    pub fn game_won(&self) -> bool {
        self.phase == RacePhase::Finished
    }

    /// Distance at which the finish line is reached
    #[inline]
    pub fn finish_distance(&self) -> i32 {
        -FINISH_LINE_OFFSET
    }
}
