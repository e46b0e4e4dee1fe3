//! Player/obstacle contact detection
//!
//! Detection is split from response: the sweep reports what the bike
//! overlaps this tick, and the session tick applies the consequences
//! (wreck on a hazard, slowdown on oil).

use super::obstacle::{Obstacle, ObstacleKind};
use super::rect::Rect;

/// One overlap between the bike and a pooled obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    /// Index into the obstacle pool
    pub index: usize,
    pub kind: ObstacleKind,
}

impl Contact {
    #[inline]
    pub fn is_hazard(&self) -> bool {
        self.kind.is_hazard()
    }
}

/// Sweep the pool against the bike's hit box, in pool order
pub fn detect_contacts(player_rect: &Rect, obstacles: &[Obstacle]) -> Vec<Contact> {
    obstacles
        .iter()
        .enumerate()
        .filter(|(_, o)| player_rect.intersects(&o.collision_rect()))
        .map(|(index, o)| Contact {
            index,
            kind: o.kind,
        })
        .collect()
}
