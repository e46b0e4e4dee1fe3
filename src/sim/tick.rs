//! Fixed timestep simulation tick
//!
//! One call advances the race by exactly one step. All host input arrives
//! through [`TickInput`], snapshotted once per tick.

use glam::Vec2;

use super::collision::detect_contacts;
use super::player::{Direction, StuntKind};
use super::state::{CrashEffect, GameState, RacePhase, StuntBanner};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Normalized joystick vector, present only while the stick is active
    /// and outside its deadzone; takes precedence over `direction`
    pub joystick: Option<Vec2>,
    /// Discrete movement fallback when no joystick vector is live
    pub direction: Option<Direction>,
    /// Stunt request on its own channel, independent of movement
    pub stunt: Option<StuntKind>,
}

/// Advance the race by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.tick_count += 1;

    if state.phase == RacePhase::Riding {
        state.road_offset = (state.road_offset + ROAD_SCROLL_SPEED) % state.screen_h;

        // Timers and physics first; a stunt finishing this tick pays out
        if let Some(kind) = state.player.advance() {
            let points = kind.points();
            state.score += points;
            state.stunt_banner = Some(StuntBanner {
                kind,
                points,
                ticks_left: STUNT_BANNER_TICKS,
            });
            log::debug!("stunt bonus: +{points} ({})", kind.as_str());
        }

        // Joystick wins over the discrete direction when both are live
        if let Some(v) = input.joystick {
            state.player.move_with_joystick(v);
        } else {
            state.player.move_with_direction(input.direction);
        }

        if let Some(kind) = input.stunt {
            // Rejection (mid-stunt or cooldown) is silent
            state.player.start_stunt(kind);
        }

        let road = state.road;
        let screen_h = state.screen_h;
        for o in &mut state.obstacles {
            o.advance(&mut state.rng, &road, screen_h);
        }

        let player_rect = state.player.collision_rect();
        for contact in detect_contacts(&player_rect, &state.obstacles) {
            if contact.is_hazard() {
                // First hazard wins; later overlaps in the same tick are moot
                if state.phase == RacePhase::Riding {
                    state.phase = RacePhase::Wrecked;
                    state.crash_effect = Some(CrashEffect {
                        x: state.player.x,
                        y: state.player.y,
                        ticks_left: CRASH_EFFECT_TICKS,
                    });
                    log::info!(
                        "wrecked on a {} at distance {}",
                        contact.kind.as_str(),
                        state.distance
                    );
                }
            } else {
                state.player.speed = (state.player.speed - 1).max(PLAYER_MIN_SPEED);
                log::debug!("oil slick, speed now {}", state.player.speed);
            }
        }

        state.score += 1;
        state.distance += ROAD_SCROLL_SPEED;
        if state.phase == RacePhase::Riding && state.distance >= state.finish_distance() {
            state.phase = RacePhase::Finished;
            log::info!("finish line crossed, final score {}", state.score);
        }
    }

    // Latched visual timers run even when the race is over
    if let Some(effect) = &mut state.crash_effect {
        effect.ticks_left -= 1;
    }
    if matches!(state.crash_effect, Some(CrashEffect { ticks_left: 0, .. })) {
        state.crash_effect = None;
    }
    if let Some(banner) = &mut state.stunt_banner {
        banner.ticks_left -= 1;
    }
    if matches!(state.stunt_banner, Some(StuntBanner { ticks_left: 0, .. })) {
        state.stunt_banner = None;
    }
}
