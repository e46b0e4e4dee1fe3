//! Scrolling obstacle pool
//!
//! The pool is allocated once per session and recycled in place: an
//! obstacle that scrolls past the bottom of the screen teleports back
//! above the top at a fresh x, keeping its kind and speed. Nothing is
//! ever spawned or despawned mid-race.

use rand::Rng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::state::{RoadBounds, SpriteDims};
use crate::consts::*;

/// What is lying on the road
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Car,
    Rock,
    Oil,
    Cone,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Car,
        ObstacleKind::Rock,
        ObstacleKind::Oil,
        ObstacleKind::Cone,
    ];

    /// Hazards end the race on contact; oil only slows the bike
    #[inline]
    pub fn is_hazard(&self) -> bool {
        !matches!(self, ObstacleKind::Oil)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Car => "car",
            ObstacleKind::Rock => "rock",
            ObstacleKind::Oil => "oil",
            ObstacleKind::Cone => "cone",
        }
    }

    /// Sprite footprint for this kind
    pub fn footprint(&self, dims: &SpriteDims) -> (i32, i32) {
        match self {
            ObstacleKind::Car => dims.car,
            ObstacleKind::Rock => dims.rock,
            ObstacleKind::Oil => dims.oil,
            ObstacleKind::Cone => dims.cone,
        }
    }
}

/// One pooled obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Top-left corner in screen pixels
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Downward scroll per tick, fixed at spawn
    pub speed: i32,
}

impl Obstacle {
    /// Scroll down one tick, recycling once fully past the screen bottom
    pub fn advance(&mut self, rng: &mut Pcg32, road: &RoadBounds, screen_h: i32) {
        self.y += self.speed;
        if self.y > screen_h {
            self.recycle(rng, road);
        }
    }

    fn recycle(&mut self, rng: &mut Pcg32, road: &RoadBounds) {
        self.y = rng.random_range(RECYCLE_Y_MIN..RECYCLE_Y_MAX);
        self.x = rng.random_range(road.left..road.right - self.width);
    }

    pub fn collision_rect(&self) -> Rect {
        Rect::from_xywh(self.x, self.y, self.width, self.height)
    }
}

/// Build the session's obstacle pool, staggered well above the screen so
/// they trickle in rather than arriving at once
pub fn spawn_pool(rng: &mut Pcg32, road: &RoadBounds, dims: &SpriteDims) -> Vec<Obstacle> {
    (0..OBSTACLE_COUNT)
        .map(|_| {
            let kind = ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())];
            let (width, height) = kind.footprint(dims);
            Obstacle {
                kind,
                x: rng.random_range(road.left..road.right - width),
                y: rng.random_range(SPAWN_Y_MIN..SPAWN_Y_MAX),
                width,
                height,
                speed: rng.random_range(OBSTACLE_MIN_SPEED..=OBSTACLE_MAX_SPEED),
            }
        })
        .collect()
}
