//! Moto Rush - a vertically scrolling stunt-bike arcade racer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, stunts, obstacles, scoring)
//! - `input`: Virtual joystick, touch buttons, pointer dispatcher
//! - `render`: Draw-surface abstraction and per-frame scene composition
//! - `engine`: Fixed-rate simulation thread with a host-facing API
//! - `settings`: Persisted preferences (bike style, debug overlay)

pub mod engine;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use engine::{Engine, RaceSummary};
pub use settings::{BikeStyle, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Simulation steps per second
    pub const TICK_RATE: u32 = 60;
    /// Wall-clock budget for one step; the loop sleeps the remainder
    pub const STEP_BUDGET: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

    /// Road box margins relative to the screen
    pub const ROAD_LEFT: i32 = 150;
    pub const ROAD_RIGHT_MARGIN: i32 = 50;
    pub const ROAD_TOP: i32 = 50;
    pub const ROAD_BOTTOM_MARGIN: i32 = 50;
    /// Road/background scroll per tick; also the distance gained per tick
    pub const ROAD_SCROLL_SPEED: i32 = 5;

    /// Finish line starts this far above the viewport and approaches as
    /// distance accrues
    pub const FINISH_LINE_OFFSET: i32 = -5000;

    /// Player movement
    pub const PLAYER_BASE_SPEED: i32 = 5;
    /// Oil slicks can never push the speed below this
    pub const PLAYER_MIN_SPEED: i32 = 2;
    /// Session start position: fixed x, y measured up from the screen bottom
    pub const PLAYER_START_X: i32 = 200;
    pub const PLAYER_START_Y_INSET: i32 = 150;
    /// Reset-position offset from the road box's bottom-left corner
    pub const PLAYER_SPAWN_INSET: i32 = 50;

    /// Lean physics (degrees)
    pub const MAX_LEAN_ANGLE: f32 = 20.0;
    pub const LEAN_SPEED: f32 = 2.0;
    /// Within this of the target the lean snaps instead of easing
    pub const LEAN_SNAP: f32 = 0.1;

    /// Suspension travel (pixels)
    pub const MAX_SUSPENSION_COMPRESS: f32 = 10.0;
    pub const SUSPENSION_SPEED: f32 = 0.8;
    /// Upward pop applied when a jump starts
    pub const JUMP_TAKEOFF_OFFSET: f32 = -5.0;

    /// Low-pass factor for analog input smoothing
    pub const INPUT_SMOOTHING: f32 = 0.2;

    /// Stunt state machine (ticks)
    pub const STUNT_DURATION: u32 = 60;
    pub const STUNT_COOLDOWN: u32 = 90;
    /// Visual effect window armed when a stunt starts
    pub const STUNT_EFFECT_TICKS: u32 = 20;
    /// A jump counts as landing once this many ticks remain
    pub const JUMP_LANDING_WINDOW: u32 = 5;

    pub const WHEELIE_POINTS: u32 = 100;
    pub const JUMP_POINTS: u32 = 200;

    /// Obstacle pool
    pub const OBSTACLE_COUNT: usize = 5;
    pub const OBSTACLE_MIN_SPEED: i32 = 2;
    pub const OBSTACLE_MAX_SPEED: i32 = 3;
    /// Recycled obstacles respawn with y in this half-open range
    pub const RECYCLE_Y_MIN: i32 = -250;
    pub const RECYCLE_Y_MAX: i32 = -50;
    /// First-spawn staggering range, further off-screen than recycling
    pub const SPAWN_Y_MIN: i32 = -1000;
    pub const SPAWN_Y_MAX: i32 = -200;

    /// Latched effect timers (ticks)
    pub const CRASH_EFFECT_TICKS: u32 = 60;
    pub const STUNT_BANNER_TICKS: u32 = 60;

    /// Joystick deadzone as a fraction of the base radius
    pub const JOYSTICK_DEADZONE: f32 = 0.1;

    /// Touch control layout
    pub const JOYSTICK_RADIUS: f32 = 120.0;
    pub const BUTTON_SIZE: i32 = 80;
    pub const BUTTON_MARGIN: i32 = 20;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
