//! Moto Rush entry point
//!
//! Drives a short scripted session on a headless surface: steer right,
//! pop a wheelie, then a jump. Useful for exercising the engine and the
//! logging without a real host; platform front ends embed [`Engine`]
//! directly instead.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use glam::Vec2;

use moto_rush::render::{Color, DrawSurface, PlainSprite, SpriteBank, SpriteTransform, TextStyle};
use moto_rush::sim::Rect;
use moto_rush::{Engine, Settings};

const SCREEN_W: i32 = 1080;
const SCREEN_H: i32 = 1920;

/// Headless surface that only counts composed frames
struct CountingSurface {
    frames: Arc<AtomicU64>,
}

impl DrawSurface for CountingSurface {
    type Image = PlainSprite;

    fn clear(&mut self, _color: Color) {
        self.frames.fetch_add(1, Ordering::Relaxed);
    }

    fn draw_image(&mut self, _image: &PlainSprite, _x: i32, _y: i32) {}
    fn draw_image_transformed(&mut self, _image: &PlainSprite, _t: &SpriteTransform) {}
    fn draw_text(&mut self, _text: &str, _x: f32, _y: f32, _style: &TextStyle) {}
    fn fill_rect(&mut self, _rect: &Rect, _color: Color) {}
    fn stroke_rect(&mut self, _rect: &Rect, _color: Color, _w: f32) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}
    fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _color: Color, _w: f32) {}
}

fn main() {
    env_logger::init();
    log::info!("Moto Rush (native) starting...");

    let settings = Settings::load();
    let seed: u64 = rand::random();
    log::info!("session seed: {seed}");

    let bank = SpriteBank::placeholder(SCREEN_W as u32, SCREEN_H as u32);
    let mut engine = Engine::new(SCREEN_W, SCREEN_H, bank, settings, seed);

    let frames = Arc::new(AtomicU64::new(0));
    engine.start(CountingSurface {
        frames: Arc::clone(&frames),
    });

    println!("\nRunning scripted session...");

    // Steer right for a second
    let stick = Vec2::new(140.0, (SCREEN_H - 140) as f32);
    engine.pointer_down(0, stick);
    engine.pointer_move(0, stick + Vec2::new(100.0, 0.0));
    thread::sleep(Duration::from_secs(1));
    engine.pointer_up(0);

    // Tap the wheelie button, then wait out the stunt and its cooldown
    let wheelie = Vec2::new((SCREEN_W - 60) as f32, (SCREEN_H - 60) as f32);
    engine.pointer_down(1, wheelie);
    thread::sleep(Duration::from_millis(50));
    engine.pointer_up(1);
    thread::sleep(Duration::from_millis(2600));

    // Tap the jump button and let it land
    let jump = Vec2::new((SCREEN_W - 160) as f32, (SCREEN_H - 60) as f32);
    engine.pointer_down(2, jump);
    thread::sleep(Duration::from_millis(50));
    engine.pointer_up(2);
    thread::sleep(Duration::from_millis(1500));

    engine.stop();

    let summary = engine.summary();
    println!("frames composed: {}", frames.load(Ordering::Relaxed));
    println!(
        "phase: {:?}, score: {}, distance: {}m over {} ticks",
        summary.phase, summary.score, summary.distance, summary.ticks
    );
}
