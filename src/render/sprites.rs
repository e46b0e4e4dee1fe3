//! Sprite bank: every image the scene draws, keyed by role
//!
//! Hosts load one bank per bike style; a style change swaps the whole
//! bank. Bike variants within a style are recolors of the same base, so
//! swapping never changes collision footprints.

use super::surface::Sprite;
use crate::sim::{ObstacleKind, SpriteDims, StuntKind};

#[derive(Debug, Clone)]
pub struct SpriteBank<I> {
    pub bike_normal: I,
    pub bike_wheelie: I,
    pub bike_jump: I,
    pub car: I,
    pub rock: I,
    pub oil: I,
    pub cone: I,
    pub background: I,
    pub finish_line: I,
    pub speed_lines: I,
    pub dust: I,
    pub crash: I,
    pub stunt_stars: I,
}

impl<I: Sprite> SpriteBank<I> {
    /// Bike sprite for the current stunt, resolved purely from state
    pub fn bike(&self, stunt: Option<StuntKind>) -> &I {
        match stunt {
            None => &self.bike_normal,
            Some(StuntKind::Wheelie) => &self.bike_wheelie,
            Some(StuntKind::Jump) => &self.bike_jump,
        }
    }

    pub fn obstacle(&self, kind: ObstacleKind) -> &I {
        match kind {
            ObstacleKind::Car => &self.car,
            ObstacleKind::Rock => &self.rock,
            ObstacleKind::Oil => &self.oil,
            ObstacleKind::Cone => &self.cone,
        }
    }

    /// Capture the collision footprints the simulation runs with
    pub fn dims(&self) -> SpriteDims {
        let size = |i: &I| (i.width() as i32, i.height() as i32);
        SpriteDims {
            bike: size(&self.bike_normal),
            car: size(&self.car),
            rock: size(&self.rock),
            oil: size(&self.oil),
            cone: size(&self.cone),
        }
    }
}

/// Minimal sprite carrying only its dimensions, for headless hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainSprite {
    pub width: u32,
    pub height: u32,
}

impl PlainSprite {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Sprite for PlainSprite {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl SpriteBank<PlainSprite> {
    /// Bank using the stock footprint for every role
    pub fn placeholder(screen_w: u32, screen_h: u32) -> Self {
        Self {
            bike_normal: PlainSprite::new(100, 60),
            bike_wheelie: PlainSprite::new(100, 60),
            bike_jump: PlainSprite::new(100, 60),
            car: PlainSprite::new(100, 60),
            rock: PlainSprite::new(50, 50),
            oil: PlainSprite::new(60, 30),
            cone: PlainSprite::new(40, 60),
            background: PlainSprite::new(screen_w, screen_h),
            finish_line: PlainSprite::new(screen_w, 50),
            speed_lines: PlainSprite::new(200, 120),
            dust: PlainSprite::new(150, 100),
            crash: PlainSprite::new(200, 200),
            stunt_stars: PlainSprite::new(200, 120),
        }
    }
}
