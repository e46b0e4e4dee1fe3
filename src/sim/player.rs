//! Player bike: movement, lean, suspension, and the stunt state machine
//!
//! Two movement modes share the same clamping and lean rules:
//! - discrete direction steps (one axis per tick)
//! - analog joystick displacement with low-pass input smoothing
//!
//! Stunts run a fixed cycle: 60 ticks performing, then 90 ticks cooldown
//! before the next one can start.

use glam::Vec2;

use super::rect::Rect;
use super::state::RoadBounds;
use crate::consts::*;

/// Discrete movement direction from the joystick's dominant axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// The two scoring stunts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StuntKind {
    Wheelie,
    Jump,
}

impl StuntKind {
    /// Score awarded when the stunt completes
    #[inline]
    pub fn points(&self) -> u32 {
        match self {
            StuntKind::Wheelie => WHEELIE_POINTS,
            StuntKind::Jump => JUMP_POINTS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StuntKind::Wheelie => "wheelie",
            StuntKind::Jump => "jump",
        }
    }
}

/// Stunt machine: Idle -> Performing -> Cooldown -> Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StuntPhase {
    Idle,
    Performing { kind: StuntKind, ticks_left: u32 },
    Cooldown { ticks_left: u32 },
}

/// The player's bike
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner in screen pixels
    pub x: i32,
    pub y: i32,
    /// Footprint of the normal bike sprite; stunt sprites share it
    pub width: i32,
    pub height: i32,
    /// Pixels moved per tick on a full input; oil slicks lower this
    pub speed: i32,
    pub road: RoadBounds,
    pub stunt: StuntPhase,
    /// Visual tilt in degrees, eased toward `target_lean`
    pub lean_angle: f32,
    pub target_lean: f32,
    /// Vertical sprite/collision shift; positive is compressed downward
    pub suspension_offset: f32,
    /// True while the tail end of a jump is compressing the suspension
    pub landing: bool,
    /// Low-passed horizontal joystick input, carried across ticks; the
    /// vertical axis is applied raw
    pub smoothed: f32,
    pub show_speed_lines: bool,
    pub show_dust: bool,
    pub show_stars: bool,
    /// Ticks until all effect flags clear
    pub effect_ticks: u32,
}

impl Player {
    pub fn new(road: RoadBounds, size: (i32, i32), screen_h: i32) -> Self {
        Self {
            x: PLAYER_START_X,
            y: screen_h - PLAYER_START_Y_INSET,
            width: size.0,
            height: size.1,
            speed: PLAYER_BASE_SPEED,
            road,
            stunt: StuntPhase::Idle,
            lean_angle: 0.0,
            target_lean: 0.0,
            suspension_offset: 0.0,
            landing: false,
            smoothed: 0.0,
            show_speed_lines: false,
            show_dust: false,
            show_stars: false,
            effect_ticks: 0,
        }
    }

    /// Step one tick in a discrete direction; `None` levels the bike out
    pub fn move_with_direction(&mut self, dir: Option<Direction>) {
        match dir {
            Some(Direction::Left) => {
                self.x = self.road.clamp_x(self.x - self.speed, self.width);
                self.target_lean = -MAX_LEAN_ANGLE;
            }
            Some(Direction::Right) => {
                self.x = self.road.clamp_x(self.x + self.speed, self.width);
                self.target_lean = MAX_LEAN_ANGLE;
            }
            Some(Direction::Up) => {
                self.y = self.road.clamp_y(self.y - self.speed, self.height);
                self.target_lean = 0.0;
            }
            Some(Direction::Down) => {
                self.y = self.road.clamp_y(self.y + self.speed, self.height);
                self.target_lean = 0.0;
            }
            None => self.target_lean = 0.0,
        }
    }

    /// Analog displacement from a normalized joystick vector.
    ///
    /// The horizontal axis feeds a low-pass filter; displacement and lean
    /// both come from the filtered value, so steering stays smooth across
    /// jittery touches. The vertical axis scales by speed raw.
    pub fn move_with_joystick(&mut self, input: Vec2) {
        self.smoothed += (input.x - self.smoothed) * (1.0 - INPUT_SMOOTHING);
        let dx = (self.smoothed * self.speed as f32) as i32;
        let dy = (input.y * self.speed as f32) as i32;
        self.x = self.road.clamp_x(self.x + dx, self.width);
        self.y = self.road.clamp_y(self.y + dy, self.height);
        self.target_lean = (self.smoothed * MAX_LEAN_ANGLE).clamp(-MAX_LEAN_ANGLE, MAX_LEAN_ANGLE);
    }

    /// Try to start a stunt. Rejected while one is running or cooling down.
    pub fn start_stunt(&mut self, kind: StuntKind) -> bool {
        if self.stunt != StuntPhase::Idle {
            return false;
        }
        self.stunt = StuntPhase::Performing {
            kind,
            ticks_left: STUNT_DURATION,
        };
        self.show_dust = true;
        match kind {
            StuntKind::Wheelie => self.show_speed_lines = true,
            StuntKind::Jump => {
                self.show_stars = true;
                self.landing = false;
                self.suspension_offset = JUMP_TAKEOFF_OFFSET;
            }
        }
        self.effect_ticks = STUNT_EFFECT_TICKS;
        log::debug!("stunt started: {}", kind.as_str());
        true
    }

    /// Advance timers and physics one tick.
    ///
    /// Returns the stunt kind on the exact tick a stunt completes, so the
    /// session can award its points once.
    pub fn advance(&mut self) -> Option<StuntKind> {
        let mut completed = None;
        match self.stunt {
            StuntPhase::Performing { kind, ticks_left } => {
                let ticks_left = ticks_left - 1;
                if ticks_left == 0 {
                    self.stunt = StuntPhase::Cooldown {
                        ticks_left: STUNT_COOLDOWN,
                    };
                    completed = Some(kind);
                } else {
                    self.stunt = StuntPhase::Performing { kind, ticks_left };
                }
            }
            StuntPhase::Cooldown { ticks_left } => {
                let ticks_left = ticks_left - 1;
                self.stunt = if ticks_left == 0 {
                    StuntPhase::Idle
                } else {
                    StuntPhase::Cooldown { ticks_left }
                };
            }
            StuntPhase::Idle => {}
        }

        if self.effect_ticks > 0 {
            self.effect_ticks -= 1;
            if self.effect_ticks == 0 {
                self.show_speed_lines = false;
                self.show_dust = false;
                self.show_stars = false;
            }
        }

        // Ease the lean toward its target, snapping once close enough
        if (self.lean_angle - self.target_lean).abs() > LEAN_SNAP {
            self.lean_angle += (self.target_lean - self.lean_angle) * LEAN_SPEED * 0.1;
        } else {
            self.lean_angle = self.target_lean;
        }

        if self.landing {
            self.suspension_offset += SUSPENSION_SPEED;
            if self.suspension_offset >= MAX_SUSPENSION_COMPRESS {
                self.suspension_offset = MAX_SUSPENSION_COMPRESS;
                self.landing = false;
            }
        } else if self.suspension_offset > 0.0 {
            self.suspension_offset = (self.suspension_offset - SUSPENSION_SPEED).max(0.0);
        }

        // A jump starts compressing once only a few ticks remain
        if let StuntPhase::Performing {
            kind: StuntKind::Jump,
            ticks_left,
        } = self.stunt
        {
            if ticks_left <= JUMP_LANDING_WINDOW {
                self.landing = true;
            }
        }

        completed
    }

    /// The stunt currently being performed, if any
    #[inline]
    pub fn active_stunt(&self) -> Option<StuntKind> {
        match self.stunt {
            StuntPhase::Performing { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Hit box, shifted vertically with the suspension
    pub fn collision_rect(&self) -> Rect {
        Rect::new(
            self.x,
            (self.y as f32 + self.suspension_offset) as i32,
            self.x + self.width,
            (self.y as f32 + self.height as f32 + self.suspension_offset) as i32,
        )
    }

    /// Put the bike back at the road's bottom-left start spot, leveled,
    /// with the suspension settled and input smoothing cleared
    pub fn reset_position(&mut self) {
        self.x = self.road.left + PLAYER_SPAWN_INSET;
        self.y = self.road.bottom - self.height - PLAYER_SPAWN_INSET;
        self.lean_angle = 0.0;
        self.target_lean = 0.0;
        self.suspension_offset = 0.0;
        self.landing = false;
        self.smoothed = 0.0;
    }
}
