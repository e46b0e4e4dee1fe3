//! Per-frame scene composition
//!
//! A pure pass from simulation + control state to surface calls, in a
//! fixed paint order: world, entities, effects, HUD, controls, terminal
//! overlays. Nothing here mutates state.

use glam::Vec2;

use super::sprites::SpriteBank;
use super::surface::{Color, DrawSurface, SpriteTransform, TextStyle};
use crate::consts::*;
use crate::input::{InputDispatcher, TouchButton, VirtualJoystick};
use crate::settings::Settings;
use crate::sim::{GameState, Player, RacePhase};

const HUD_TEXT: TextStyle = TextStyle::new(36.0, Color::WHITE);
const STUNT_CALLOUT: TextStyle = TextStyle::new(36.0, Color::YELLOW);
const BANNER_TEXT: TextStyle = TextStyle::new(48.0, Color::YELLOW);
const HINT_TEXT: TextStyle = TextStyle::new(18.0, Color::WHITE);
const FINAL_SCORE_TEXT: TextStyle = TextStyle::centered(48.0, Color::WHITE);
const GAME_OVER_TEXT: TextStyle = TextStyle::centered(72.0, Color::RED);
const WIN_TEXT: TextStyle = TextStyle::centered(72.0, Color::GREEN);
const CONTROL_BORDER: Color = Color::argb(100, 255, 255, 255);

/// Compose one frame
pub fn draw_frame<S: DrawSurface>(
    surface: &mut S,
    bank: &SpriteBank<S::Image>,
    state: &GameState,
    controls: &InputDispatcher,
    settings: &Settings,
) {
    surface.clear(Color::BLACK);

    // Two background tiles make a seamless vertical scroll
    surface.draw_image(&bank.background, 0, state.road_offset - state.screen_h);
    surface.draw_image(&bank.background, 0, state.road_offset);

    let finish_screen_y = FINISH_LINE_OFFSET + state.distance;
    if (-50..=state.screen_h).contains(&finish_screen_y) {
        surface.draw_image(&bank.finish_line, state.road.left, finish_screen_y);
    }

    for o in &state.obstacles {
        surface.draw_image(bank.obstacle(o.kind), o.x, o.y);
    }

    draw_player(surface, bank, &state.player);

    if let Some(e) = &state.crash_effect {
        surface.draw_image(&bank.crash, e.x - 30, e.y - 30);
    }

    surface.draw_text(&format!("Score: {}", state.score), 10.0, 50.0, &HUD_TEXT);
    surface.draw_text(
        &format!("Distance: {}m", state.distance),
        10.0,
        100.0,
        &HUD_TEXT,
    );

    if settings.debug_overlay {
        draw_debug_rows(surface, state, controls);
    }

    if let Some(kind) = state.player.active_stunt() {
        surface.draw_text(
            &format!("PERFORMING: {}", kind.as_str().to_uppercase()),
            (state.screen_w - 300) as f32,
            50.0,
            &STUNT_CALLOUT,
        );
    }

    if let Some(banner) = &state.stunt_banner {
        // Floats up and fades out over its lifetime
        let t = banner.ticks_left as f32 / STUNT_BANNER_TICKS as f32;
        let rise = 20.0 * (1.0 - t);
        let style = TextStyle {
            color: BANNER_TEXT.color.with_alpha((255.0 * t) as u8),
            ..BANNER_TEXT
        };
        surface.draw_text(
            &format!("+{} STUNT!", banner.points),
            state.player.x as f32,
            state.player.y as f32 - 50.0 - rise,
            &style,
        );
    }

    if state.phase.is_over() {
        let center_x = state.screen_w as f32 / 2.0;
        let center_y = state.screen_h as f32 / 2.0;
        let headline = match state.phase {
            RacePhase::Wrecked => ("GAME OVER", &GAME_OVER_TEXT),
            _ => ("YOU WIN!", &WIN_TEXT),
        };
        surface.draw_text(headline.0, center_x, center_y, headline.1);
        surface.draw_text(
            &format!("Final Score: {}", state.score),
            center_x,
            center_y + 50.0,
            &FINAL_SCORE_TEXT,
        );
        draw_button(surface, &controls.restart);
    } else {
        draw_joystick(surface, &controls.joystick);
        draw_button(surface, &controls.wheelie);
        draw_button(surface, &controls.jump);
        draw_button(surface, &controls.reset);
        draw_control_hints(surface, controls);
    }
}

fn draw_player<S: DrawSurface>(surface: &mut S, bank: &SpriteBank<S::Image>, p: &Player) {
    if p.show_speed_lines {
        surface.draw_image(&bank.speed_lines, p.x - 80, p.y + 20);
    }
    if p.show_dust {
        let scale = if p.landing { 1.5 } else { 1.0 };
        let t = SpriteTransform::at(
            (p.x - 10) as f32,
            (p.y + p.height - 20) as f32 + p.suspension_offset,
        )
        .scaled(scale);
        surface.draw_image_transformed(&bank.dust, &t);
    }

    // Bike rotates about its center by the lean angle
    let bike = bank.bike(p.active_stunt());
    let t = SpriteTransform::at(p.x as f32, p.y as f32 + p.suspension_offset).rotated(
        p.lean_angle,
        Vec2::new(p.width as f32 / 2.0, p.height as f32 / 2.0),
    );
    surface.draw_image_transformed(bike, &t);

    if p.show_stars {
        surface.draw_image(
            &bank.stunt_stars,
            p.x - 25,
            (p.y as f32 - 60.0 + p.suspension_offset) as i32,
        );
    }
}

fn draw_joystick<S: DrawSurface>(surface: &mut S, j: &VirtualJoystick) {
    const BASE_FILL: Color = Color::argb(100, 100, 100, 100);
    const STICK_FILL: Color = Color::argb(180, 200, 200, 200);
    surface.fill_circle(j.base, j.base_radius, BASE_FILL);
    surface.stroke_circle(j.base, j.base_radius, CONTROL_BORDER, 2.0);
    let stick_radius = j.base_radius / 2.0;
    surface.fill_circle(j.stick, stick_radius, STICK_FILL);
    surface.stroke_circle(j.stick, stick_radius, CONTROL_BORDER, 2.0);
}

fn draw_button<S: DrawSurface>(surface: &mut S, b: &TouchButton) {
    let fill = if b.pressed {
        b.color.with_alpha(200)
    } else {
        b.color
    };
    surface.fill_rect(&b.rect, fill);
    surface.stroke_rect(&b.rect, CONTROL_BORDER, 2.0);
    let size = b.rect.width().min(b.rect.height()) as f32 * 0.4;
    let style = TextStyle::centered(size, b.text_color);
    let x = b.rect.left as f32 + b.rect.width() as f32 / 2.0;
    // Baseline sits a third of the text size below the box center
    let y = b.rect.top as f32 + b.rect.height() as f32 / 2.0 + size / 3.0;
    surface.draw_text(b.label, x, y, &style);
}

fn draw_control_hints<S: DrawSurface>(surface: &mut S, controls: &InputDispatcher) {
    let above = |b: &TouchButton, nudge: f32| {
        (
            b.rect.left as f32 + b.rect.width() as f32 / 2.0 - nudge,
            b.rect.top as f32 - 10.0,
        )
    };
    let (x, y) = above(&controls.wheelie, 30.0);
    surface.draw_text("Wheelie", x, y, &HINT_TEXT);
    let (x, y) = above(&controls.jump, 20.0);
    surface.draw_text("Jump", x, y, &HINT_TEXT);
    let (x, y) = above(&controls.reset, 50.0);
    surface.draw_text("Reset Position", x, y, &HINT_TEXT);
    let j = &controls.joystick;
    surface.draw_text(
        "Move",
        j.base.x,
        j.base.y - j.base_radius - 10.0,
        &HINT_TEXT,
    );
}

fn draw_debug_rows<S: DrawSurface>(
    surface: &mut S,
    state: &GameState,
    controls: &InputDispatcher,
) {
    let p = &state.player;
    surface.draw_text(
        &format!(
            "Bike X: {}, Width: {}, Right: {}",
            p.x,
            p.width,
            p.x + p.width
        ),
        10.0,
        150.0,
        &HUD_TEXT,
    );
    surface.draw_text(
        &format!("Road: {}-{}", state.road.left, state.road.right),
        10.0,
        200.0,
        &HUD_TEXT,
    );
    let dir = controls
        .joystick
        .direction()
        .map_or("none", |d| d.as_str());
    surface.draw_text(&format!("Direction: {dir}"), 10.0, 250.0, &HUD_TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sprites::PlainSprite;
    use crate::sim::{SpriteDims, StuntBanner, StuntKind};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Image { w: u32, h: u32, x: i32, y: i32 },
        Transformed { rotate: f32, scale: f32 },
        Text { s: String, alpha: u8 },
        FillRect,
        StrokeRect,
        FillCircle,
        StrokeCircle,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl DrawSurface for Recorder {
        type Image = PlainSprite;

        fn clear(&mut self, _color: Color) {
            self.calls.push(Call::Clear);
        }

        fn draw_image(&mut self, image: &PlainSprite, x: i32, y: i32) {
            self.calls.push(Call::Image {
                w: image.width,
                h: image.height,
                x,
                y,
            });
        }

        fn draw_image_transformed(&mut self, _image: &PlainSprite, t: &SpriteTransform) {
            self.calls.push(Call::Transformed {
                rotate: t.rotate_deg,
                scale: t.scale,
            });
        }

        fn draw_text(&mut self, text: &str, _x: f32, _y: f32, style: &TextStyle) {
            self.calls.push(Call::Text {
                s: text.to_string(),
                alpha: style.color.a,
            });
        }

        fn fill_rect(&mut self, _rect: &crate::sim::Rect, _color: Color) {
            self.calls.push(Call::FillRect);
        }

        fn stroke_rect(&mut self, _rect: &crate::sim::Rect, _color: Color, _w: f32) {
            self.calls.push(Call::StrokeRect);
        }

        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {
            self.calls.push(Call::FillCircle);
        }

        fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _color: Color, _w: f32) {
            self.calls.push(Call::StrokeCircle);
        }
    }

    fn setup() -> (Recorder, SpriteBank<PlainSprite>, GameState, InputDispatcher) {
        let bank = SpriteBank::placeholder(1080, 1920);
        let state = GameState::new(1080, 1920, SpriteDims::default(), 11);
        let controls = InputDispatcher::new(1080, 1920);
        (Recorder::default(), bank, state, controls)
    }

    fn texts(calls: &[Call]) -> Vec<&str> {
        calls
            .iter()
            .filter_map(|c| match c {
                Call::Text { s, .. } => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_riding_frame_order_and_contents() {
        let (mut rec, bank, state, controls) = setup();
        draw_frame(&mut rec, &bank, &state, &controls, &Settings::default());
        assert_eq!(rec.calls[0], Call::Clear);
        // Two background tiles
        let backgrounds = rec
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Image { w: 1080, h: 1920, .. }))
            .count();
        assert_eq!(backgrounds, 2);
        // Finish line starts far off screen
        assert!(
            !rec.calls
                .iter()
                .any(|c| matches!(c, Call::Image { w: 1080, h: 50, .. }))
        );
        assert!(texts(&rec.calls).contains(&"Score: 0"));
        // Joystick base + stick while riding
        let circles = rec
            .calls
            .iter()
            .filter(|c| matches!(c, Call::FillCircle))
            .count();
        assert_eq!(circles, 2);
        assert!(!texts(&rec.calls).contains(&"GAME OVER"));
    }

    #[test]
    fn test_finish_line_appears_near_the_end() {
        let (mut rec, bank, mut state, controls) = setup();
        state.distance = 4980;
        draw_frame(&mut rec, &bank, &state, &controls, &Settings::default());
        let found = rec.calls.iter().any(|c| {
            matches!(c, Call::Image { w: 1080, h: 50, x, y } if *x == state.road.left && *y == -20)
        });
        assert!(found);
    }

    #[test]
    fn test_wrecked_overlay_replaces_controls() {
        let (mut rec, bank, mut state, controls) = setup();
        state.phase = RacePhase::Wrecked;
        draw_frame(&mut rec, &bank, &state, &controls, &Settings::default());
        let t = texts(&rec.calls);
        assert!(t.contains(&"GAME OVER"));
        assert!(t.contains(&"Final Score: 0"));
        // Restart button, no joystick
        assert!(rec.calls.iter().any(|c| matches!(c, Call::FillRect)));
        assert!(!rec.calls.iter().any(|c| matches!(c, Call::FillCircle)));
    }

    #[test]
    fn test_win_overlay() {
        let (mut rec, bank, mut state, controls) = setup();
        state.phase = RacePhase::Finished;
        state.score = 1234;
        draw_frame(&mut rec, &bank, &state, &controls, &Settings::default());
        let t = texts(&rec.calls);
        assert!(t.contains(&"YOU WIN!"));
        assert!(t.contains(&"Final Score: 1234"));
    }

    #[test]
    fn test_banner_fades_with_ticks_left() {
        let (mut rec, bank, mut state, controls) = setup();
        state.stunt_banner = Some(StuntBanner {
            kind: StuntKind::Jump,
            points: 200,
            ticks_left: 30,
        });
        draw_frame(&mut rec, &bank, &state, &controls, &Settings::default());
        let banner = rec.calls.iter().find_map(|c| match c {
            Call::Text { s, alpha } if s == "+200 STUNT!" => Some(*alpha),
            _ => None,
        });
        assert_eq!(banner, Some(127));
    }

    #[test]
    fn test_debug_rows_gated_by_settings() {
        let (mut rec, bank, state, controls) = setup();
        draw_frame(&mut rec, &bank, &state, &controls, &Settings::default());
        assert!(!texts(&rec.calls).iter().any(|s| s.starts_with("Road:")));

        let mut rec = Recorder::default();
        let settings = Settings {
            debug_overlay: true,
            ..Default::default()
        };
        draw_frame(&mut rec, &bank, &state, &controls, &settings);
        assert!(texts(&rec.calls).iter().any(|s| s.starts_with("Road:")));
    }

    #[test]
    fn test_bike_rotates_by_lean_angle() {
        let (mut rec, bank, mut state, controls) = setup();
        state.player.lean_angle = 15.0;
        draw_frame(&mut rec, &bank, &state, &controls, &Settings::default());
        assert!(
            rec.calls
                .iter()
                .any(|c| matches!(c, Call::Transformed { rotate, .. } if *rotate == 15.0))
        );
    }

    #[test]
    fn test_stunt_callout_while_performing() {
        let (mut rec, bank, mut state, controls) = setup();
        state.player.start_stunt(StuntKind::Wheelie);
        draw_frame(&mut rec, &bank, &state, &controls, &Settings::default());
        assert!(texts(&rec.calls).contains(&"PERFORMING: WHEELIE"));
    }
}
