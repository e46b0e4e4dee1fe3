//! Pointer classification and per-tick input snapshots
//!
//! Each pointer is classified exactly once, where it first lands: it owns
//! that control until it lifts or input is cancelled, and movement routes
//! only to the owner. A finger that slides off a button keeps it held; a
//! finger that starts elsewhere can never grab the stick mid-drag.

use std::collections::HashMap;

use glam::Vec2;

use super::button::TouchButton;
use super::joystick::VirtualJoystick;
use crate::consts::*;
use crate::render::Color;
use crate::sim::{StuntKind, TickInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerTarget {
    Joystick,
    Wheelie,
    Jump,
    Restart,
    Reset,
}

/// Touch control layout plus the pointer ownership map
#[derive(Debug, Clone)]
pub struct InputDispatcher {
    pub joystick: VirtualJoystick,
    pub wheelie: TouchButton,
    pub jump: TouchButton,
    /// Live only while the race is over
    pub restart: TouchButton,
    pub reset: TouchButton,
    owners: HashMap<i32, PointerTarget>,
    restart_requested: bool,
    reset_requested: bool,
}

impl InputDispatcher {
    /// Lay out the controls for a screen size
    pub fn new(screen_w: i32, screen_h: i32) -> Self {
        let base = Vec2::new(
            JOYSTICK_RADIUS + BUTTON_MARGIN as f32,
            screen_h as f32 - JOYSTICK_RADIUS - BUTTON_MARGIN as f32,
        );
        Self {
            joystick: VirtualJoystick::new(base, JOYSTICK_RADIUS),
            wheelie: TouchButton::new(
                screen_w - BUTTON_SIZE - BUTTON_MARGIN,
                screen_h - BUTTON_SIZE - BUTTON_MARGIN,
                BUTTON_SIZE,
                BUTTON_SIZE,
                "W",
                Color::argb(150, 255, 200, 0),
                Color::BLACK,
            ),
            jump: TouchButton::new(
                screen_w - BUTTON_SIZE * 2 - BUTTON_MARGIN * 2,
                screen_h - BUTTON_SIZE - BUTTON_MARGIN,
                BUTTON_SIZE,
                BUTTON_SIZE,
                "J",
                Color::argb(150, 0, 200, 255),
                Color::BLACK,
            ),
            restart: TouchButton::new(
                screen_w / 2 - BUTTON_SIZE,
                screen_h / 2 + 100,
                BUTTON_SIZE * 2,
                BUTTON_SIZE,
                "Restart",
                Color::argb(150, 0, 255, 0),
                Color::BLACK,
            ),
            reset: TouchButton::new(
                screen_w - BUTTON_SIZE * 2 - BUTTON_MARGIN,
                BUTTON_MARGIN,
                BUTTON_SIZE * 2,
                BUTTON_SIZE,
                "Reset",
                Color::argb(150, 255, 0, 0),
                Color::WHITE,
            ),
            owners: HashMap::new(),
            restart_requested: false,
            reset_requested: false,
        }
    }

    /// Classify a new pointer. `race_over` switches the restart button in
    /// and the riding controls out.
    pub fn pointer_down(&mut self, pointer: i32, pos: Vec2, race_over: bool) {
        if !race_over && self.joystick.begin(pointer, pos) {
            self.owners.insert(pointer, PointerTarget::Joystick);
        } else if !race_over && self.wheelie.contains(pos) {
            self.wheelie.pressed = true;
            self.owners.insert(pointer, PointerTarget::Wheelie);
        } else if !race_over && self.jump.contains(pos) {
            self.jump.pressed = true;
            self.owners.insert(pointer, PointerTarget::Jump);
        } else if race_over && self.restart.contains(pos) {
            self.restart.pressed = true;
            self.restart_requested = true;
            self.owners.insert(pointer, PointerTarget::Restart);
        } else if !race_over && self.reset.contains(pos) {
            self.reset.pressed = true;
            self.reset_requested = true;
            self.owners.insert(pointer, PointerTarget::Reset);
        }
    }

    /// Route movement to the pointer's control. Buttons stay held even when
    /// the finger slides off them.
    pub fn pointer_move(&mut self, pointer: i32, pos: Vec2) {
        if self.owners.get(&pointer) == Some(&PointerTarget::Joystick) {
            self.joystick.update(pointer, pos);
        }
    }

    pub fn pointer_up(&mut self, pointer: i32) {
        let Some(target) = self.owners.remove(&pointer) else {
            return;
        };
        // Another finger on the same button keeps it held
        let still_held = self.owners.values().any(|&t| t == target);
        match target {
            PointerTarget::Joystick => {
                self.joystick.end(pointer);
            }
            PointerTarget::Wheelie if !still_held => self.wheelie.pressed = false,
            PointerTarget::Jump if !still_held => self.jump.pressed = false,
            PointerTarget::Restart if !still_held => self.restart.pressed = false,
            PointerTarget::Reset if !still_held => self.reset.pressed = false,
            _ => {}
        }
    }

    /// Drop every pointer and release all controls
    pub fn cancel_all(&mut self) {
        self.owners.clear();
        self.joystick.cancel();
        self.wheelie.pressed = false;
        self.jump.pressed = false;
        self.restart.pressed = false;
        self.reset.pressed = false;
    }

    /// Consume a pending restart press
    pub fn take_restart_request(&mut self) -> bool {
        std::mem::take(&mut self.restart_requested)
    }

    /// Consume a pending reset-position press
    pub fn take_reset_request(&mut self) -> bool {
        std::mem::take(&mut self.reset_requested)
    }

    /// Snapshot the held controls for the next simulation step. The analog
    /// vector wins over the discrete direction; wheelie wins over jump when
    /// both stunt buttons are held.
    pub fn tick_input(&self) -> TickInput {
        let joystick = if self.joystick.is_moving() {
            Some(self.joystick.delta())
        } else {
            None
        };
        let stunt = if self.wheelie.pressed {
            Some(StuntKind::Wheelie)
        } else if self.jump.pressed {
            Some(StuntKind::Jump)
        } else {
            None
        };
        TickInput {
            joystick,
            direction: self.joystick.direction(),
            stunt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Direction;

    fn pad() -> InputDispatcher {
        InputDispatcher::new(1080, 1920)
    }

    fn center(b: &TouchButton) -> Vec2 {
        Vec2::new(
            b.rect.left as f32 + b.rect.width() as f32 / 2.0,
            b.rect.top as f32 + b.rect.height() as f32 / 2.0,
        )
    }

    #[test]
    fn test_layout_matches_screen() {
        let pad = pad();
        assert_eq!(pad.joystick.base, Vec2::new(140.0, 1780.0));
        assert_eq!(pad.joystick.base_radius, 120.0);
        assert_eq!(pad.wheelie.rect.left, 980);
        assert_eq!(pad.wheelie.rect.top, 1820);
        assert_eq!(pad.jump.rect.left, 880);
        assert_eq!(pad.reset.rect.left, 900);
        assert_eq!(pad.reset.rect.top, 20);
        assert_eq!(pad.restart.rect.left, 460);
        assert_eq!(pad.restart.rect.top, 1060);
    }

    #[test]
    fn test_joystick_grab_and_release() {
        let mut pad = pad();
        let base = pad.joystick.base;
        pad.pointer_down(0, base, false);
        pad.pointer_move(0, base + Vec2::new(90.0, 0.0));
        let input = pad.tick_input();
        assert_eq!(input.direction, Some(Direction::Right));
        assert!((input.joystick.unwrap().x - 0.75).abs() < 1e-5);
        pad.pointer_up(0);
        let input = pad.tick_input();
        assert_eq!(input.joystick, None);
        assert_eq!(input.direction, None);
    }

    #[test]
    fn test_classification_is_sticky() {
        let mut pad = pad();
        pad.pointer_down(0, center(&pad.wheelie), false);
        assert!(pad.wheelie.pressed);
        // Sliding onto the joystick does not re-target the pointer
        pad.pointer_move(0, pad.joystick.base);
        assert!(!pad.joystick.is_active());
        assert!(pad.wheelie.pressed);
        pad.pointer_up(0);
        assert!(!pad.wheelie.pressed);
    }

    #[test]
    fn test_moves_only_reach_the_owner() {
        let mut pad = pad();
        pad.pointer_down(1, pad.joystick.base, false);
        // A different pointer moving across the stick is ignored
        pad.pointer_move(2, pad.joystick.base + Vec2::new(100.0, 0.0));
        assert_eq!(pad.tick_input().joystick, None);
    }

    #[test]
    fn test_stunt_priority_wheelie_over_jump() {
        let mut pad = pad();
        pad.pointer_down(0, center(&pad.jump), false);
        assert_eq!(pad.tick_input().stunt, Some(StuntKind::Jump));
        pad.pointer_down(1, center(&pad.wheelie), false);
        assert_eq!(pad.tick_input().stunt, Some(StuntKind::Wheelie));
        pad.pointer_up(1);
        assert_eq!(pad.tick_input().stunt, Some(StuntKind::Jump));
    }

    #[test]
    fn test_two_fingers_on_one_button() {
        let mut pad = pad();
        let w = center(&pad.wheelie);
        pad.pointer_down(0, w, false);
        pad.pointer_down(1, w + Vec2::new(5.0, 5.0), false);
        pad.pointer_up(0);
        assert!(pad.wheelie.pressed);
        pad.pointer_up(1);
        assert!(!pad.wheelie.pressed);
    }

    #[test]
    fn test_restart_gated_by_race_over() {
        let mut pad = pad();
        let r = center(&pad.restart);
        pad.pointer_down(0, r, false);
        assert!(!pad.take_restart_request());
        pad.pointer_up(0);
        pad.pointer_down(0, r, true);
        assert!(pad.take_restart_request());
        // One press, one request
        assert!(!pad.take_restart_request());
    }

    #[test]
    fn test_riding_controls_dead_when_over() {
        let mut pad = pad();
        pad.pointer_down(0, center(&pad.wheelie), true);
        pad.pointer_down(1, pad.joystick.base, true);
        pad.pointer_down(2, center(&pad.reset), true);
        assert!(!pad.wheelie.pressed);
        assert!(!pad.joystick.is_active());
        assert!(!pad.take_reset_request());
    }

    #[test]
    fn test_reset_requests_position() {
        let mut pad = pad();
        pad.pointer_down(0, center(&pad.reset), false);
        assert!(pad.take_reset_request());
        assert!(!pad.take_reset_request());
    }

    #[test]
    fn test_cancel_all_releases_everything() {
        let mut pad = pad();
        pad.pointer_down(0, pad.joystick.base, false);
        pad.pointer_down(1, center(&pad.wheelie), false);
        pad.cancel_all();
        assert!(!pad.joystick.is_active());
        assert!(!pad.wheelie.pressed);
        let input = pad.tick_input();
        assert_eq!(input.joystick, None);
        assert_eq!(input.stunt, None);
        // Cancelled pointers no longer route anywhere
        pad.pointer_move(0, pad.joystick.base + Vec2::new(80.0, 0.0));
        assert_eq!(pad.tick_input().joystick, None);
    }
}
