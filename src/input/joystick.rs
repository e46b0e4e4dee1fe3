//! Radial virtual joystick
//!
//! The stick follows the owning pointer inside the base circle and is
//! projected onto the perimeter beyond it, so the normalized delta never
//! exceeds magnitude 1. A small deadzone keeps resting thumbs from
//! steering.

use glam::Vec2;

use crate::consts::JOYSTICK_DEADZONE;
use crate::sim::Direction;
use crate::{cartesian_to_polar, polar_to_cartesian};

/// One-pointer analog stick
#[derive(Debug, Clone)]
pub struct VirtualJoystick {
    /// Center of the base circle
    pub base: Vec2,
    pub base_radius: f32,
    /// Current stick position, equal to `base` when idle
    pub stick: Vec2,
    /// Pointer that grabbed the stick, if any
    pub active_pointer: Option<i32>,
}

impl VirtualJoystick {
    pub fn new(base: Vec2, base_radius: f32) -> Self {
        Self {
            base,
            base_radius,
            stick: base,
            active_pointer: None,
        }
    }

    /// Try to grab the stick. Only touches inside the base circle count.
    pub fn begin(&mut self, pointer: i32, pos: Vec2) -> bool {
        if pos.distance(self.base) > self.base_radius {
            return false;
        }
        self.active_pointer = Some(pointer);
        self.place_stick(pos);
        true
    }

    /// Follow the owning pointer; other pointers are ignored
    pub fn update(&mut self, pointer: i32, pos: Vec2) -> bool {
        if self.active_pointer != Some(pointer) {
            return false;
        }
        self.place_stick(pos);
        true
    }

    /// Release if `pointer` owns the stick
    pub fn end(&mut self, pointer: i32) -> bool {
        if self.active_pointer != Some(pointer) {
            return false;
        }
        self.cancel();
        true
    }

    /// Release unconditionally and recenter
    pub fn cancel(&mut self) {
        self.active_pointer = None;
        self.stick = self.base;
    }

    fn place_stick(&mut self, pos: Vec2) {
        let offset = pos - self.base;
        if offset.length() <= self.base_radius {
            self.stick = pos;
        } else {
            // Clamp to the perimeter along the touch angle
            let (_, theta) = cartesian_to_polar(offset);
            self.stick = self.base + polar_to_cartesian(self.base_radius, theta);
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active_pointer.is_some()
    }

    /// Normalized displacement, each component in [-1, 1]
    #[inline]
    pub fn delta(&self) -> Vec2 {
        (self.stick - self.base) / self.base_radius
    }

    /// True once the stick has left the deadzone
    pub fn is_moving(&self) -> bool {
        self.is_active() && self.stick.distance(self.base) > self.base_radius * JOYSTICK_DEADZONE
    }

    /// Dominant-axis reading; ties go to the vertical axis
    pub fn direction(&self) -> Option<Direction> {
        if !self.is_moving() {
            return None;
        }
        let d = self.delta();
        Some(if d.x.abs() > d.y.abs() {
            if d.x > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if d.y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        })
    }
}
