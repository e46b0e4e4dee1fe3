//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacle;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Contact, detect_contacts};
pub use obstacle::{Obstacle, ObstacleKind, spawn_pool};
pub use player::{Direction, Player, StuntKind, StuntPhase};
pub use rect::Rect;
pub use state::{CrashEffect, GameState, RacePhase, RoadBounds, SpriteDims, StuntBanner};
pub use tick::{TickInput, tick};
