//! Fixed-rate simulation thread with a host-facing API
//!
//! The engine owns the session: game state, touch controls, sprite bank
//! and settings live behind one mutex, and a background thread steps the
//! simulation and composes a frame 60 times per second. Hosts feed
//! pointer events and commands from any thread; each step snapshots the
//! held controls, so the last writer before a tick wins.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Instant;

use glam::Vec2;

use crate::consts::STEP_BUDGET;
use crate::input::InputDispatcher;
use crate::render::{DrawSurface, Sprite, SpriteBank, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameState, RacePhase, tick};

/// Host-visible snapshot of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceSummary {
    pub phase: RacePhase,
    pub score: u32,
    pub distance: i32,
    pub ticks: u64,
    pub seed: u64,
}

struct Shared<I> {
    state: GameState,
    controls: InputDispatcher,
    bank: SpriteBank<I>,
    settings: Settings,
}

impl<I> Shared<I> {
    /// One-shot button commands are applied between ticks, never mid-step
    fn apply_commands(&mut self) {
        if self.controls.take_restart_request() {
            self.state.restart(rand::random());
            // The finger is still down on a control that no longer exists
            self.controls.cancel_all();
        }
        if self.controls.take_reset_request() {
            self.state.player.reset_position();
        }
    }
}

/// A panic elsewhere poisons the mutex but leaves the session state
/// intact, so host calls keep working on the inner value
fn lock_shared<I>(shared: &Mutex<Shared<I>>) -> MutexGuard<'_, Shared<I>> {
    shared.lock().unwrap_or_else(|poisoned| {
        log::warn!("shared state mutex poisoned, continuing with the inner state");
        poisoned.into_inner()
    })
}

/// Simulation loop handle, generic over the host's sprite handle type
pub struct Engine<I: Sprite + Send + 'static> {
    shared: Arc<Mutex<Shared<I>>>,
    running: Arc<AtomicBool>,
    thread: Option<thread::JoinHandle<()>>,
}

impl<I: Sprite + Send + 'static> Engine<I> {
    pub fn new(
        screen_w: i32,
        screen_h: i32,
        bank: SpriteBank<I>,
        settings: Settings,
        seed: u64,
    ) -> Self {
        let state = GameState::new(screen_w, screen_h, bank.dims(), seed);
        let controls = InputDispatcher::new(screen_w, screen_h);
        Self {
            shared: Arc::new(Mutex::new(Shared {
                state,
                controls,
                bank,
                settings,
            })),
            running: Arc::new(AtomicBool::new(false)),
            thread: None,
        }
    }

    /// Spawn the loop thread drawing onto `surface`. A running engine
    /// ignores the call and drops the surface.
    pub fn start<S>(&mut self, mut surface: S)
    where
        S: DrawSurface<Image = I> + Send + 'static,
    {
        if self.running.swap(true, Ordering::SeqCst) {
            log::warn!("engine already running");
            return;
        }
        log::info!("engine starting");
        let shared = Arc::clone(&self.shared);
        let running = Arc::clone(&self.running);
        self.thread = Some(thread::spawn(move || {
            while running.load(Ordering::SeqCst) {
                let started = Instant::now();
                {
                    let mut shared = lock_shared(&shared);
                    shared.apply_commands();
                    let input = shared.controls.tick_input();
                    tick(&mut shared.state, &input);
                    draw_frame(
                        &mut surface,
                        &shared.bank,
                        &shared.state,
                        &shared.controls,
                        &shared.settings,
                    );
                }
                let elapsed = started.elapsed();
                match STEP_BUDGET.checked_sub(elapsed) {
                    Some(remaining) => thread::sleep(remaining),
                    // No catch-up steps; a slow frame just lands late
                    None => log::trace!("step over budget: {elapsed:?}"),
                }
            }
        }));
    }

    /// Stop the loop and join the thread. Safe to call when not running.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
            log::info!("engine stopped");
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn pointer_down(&self, pointer: i32, pos: Vec2) {
        let mut shared = lock_shared(&self.shared);
        let race_over = shared.state.phase.is_over();
        shared.controls.pointer_down(pointer, pos, race_over);
    }

    pub fn pointer_move(&self, pointer: i32, pos: Vec2) {
        lock_shared(&self.shared).controls.pointer_move(pointer, pos);
    }

    pub fn pointer_up(&self, pointer: i32) {
        lock_shared(&self.shared).controls.pointer_up(pointer);
    }

    /// Drop all pointers, e.g. when the host loses input focus
    pub fn cancel_input(&self) {
        lock_shared(&self.shared).controls.cancel_all();
    }

    /// Start a fresh race with a new random seed
    pub fn restart(&self) {
        let mut shared = lock_shared(&self.shared);
        shared.state.restart(rand::random());
        shared.controls.cancel_all();
    }

    /// Put the bike back at the spawn point
    pub fn reset_position(&self) {
        lock_shared(&self.shared).state.player.reset_position();
    }

    /// Swap in a restyled sprite bank. Collision boxes keep the sizes the
    /// session started with.
    pub fn swap_sprites(&self, bank: SpriteBank<I>) {
        lock_shared(&self.shared).bank = bank;
    }

    pub fn set_settings(&self, settings: Settings) {
        lock_shared(&self.shared).settings = settings;
    }

    pub fn summary(&self) -> RaceSummary {
        let shared = lock_shared(&self.shared);
        RaceSummary {
            phase: shared.state.phase,
            score: shared.state.score,
            distance: shared.state.distance,
            ticks: shared.state.tick_count,
            seed: shared.state.seed,
        }
    }
}

impl<I: Sprite + Send + 'static> Drop for Engine<I> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Color, PlainSprite, SpriteTransform, TextStyle};
    use crate::sim::Rect;
    use std::time::Duration;

    /// Surface that swallows every draw call
    struct NullSurface;

    impl DrawSurface for NullSurface {
        type Image = PlainSprite;

        fn clear(&mut self, _color: Color) {}
        fn draw_image(&mut self, _image: &PlainSprite, _x: i32, _y: i32) {}
        fn draw_image_transformed(&mut self, _image: &PlainSprite, _t: &SpriteTransform) {}
        fn draw_text(&mut self, _text: &str, _x: f32, _y: f32, _style: &TextStyle) {}
        fn fill_rect(&mut self, _rect: &Rect, _color: Color) {}
        fn stroke_rect(&mut self, _rect: &Rect, _color: Color, _w: f32) {}
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}
        fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _color: Color, _w: f32) {}
    }

    fn engine() -> Engine<PlainSprite> {
        Engine::new(
            1080,
            1920,
            SpriteBank::placeholder(1080, 1920),
            Settings::default(),
            7,
        )
    }

    #[test]
    fn test_runs_and_stops() {
        let mut engine = engine();
        assert!(!engine.is_running());
        engine.start(NullSurface);
        assert!(engine.is_running());
        thread::sleep(Duration::from_millis(100));
        engine.stop();
        assert!(!engine.is_running());
        let summary = engine.summary();
        assert!(summary.ticks > 0);
        assert_eq!(summary.distance, summary.ticks as i32 * 5);
    }

    #[test]
    fn test_stop_without_start_is_a_noop() {
        let mut engine = engine();
        engine.stop();
        assert_eq!(engine.summary().ticks, 0);
    }

    #[test]
    fn test_second_start_is_ignored() {
        let mut engine = engine();
        engine.start(NullSurface);
        engine.start(NullSurface);
        thread::sleep(Duration::from_millis(50));
        engine.stop();
        assert!(engine.summary().ticks > 0);
    }

    #[test]
    fn test_restart_resets_the_session() {
        let mut engine = engine();
        engine.start(NullSurface);
        thread::sleep(Duration::from_millis(100));
        engine.stop();
        assert!(engine.summary().ticks > 0);
        engine.restart();
        let summary = engine.summary();
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.score, 0);
        assert_eq!(summary.phase, RacePhase::Riding);
    }

    #[test]
    fn test_host_calls_survive_a_poisoned_lock() {
        let engine = engine();
        let shared = Arc::clone(&engine.shared);
        let _ = thread::spawn(move || {
            let _guard = shared.lock().unwrap();
            panic!("poison the shared state");
        })
        .join();
        // Host calls keep working on the inner state
        engine.pointer_down(0, Vec2::new(140.0, 1780.0));
        engine.reset_position();
        let summary = engine.summary();
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.phase, RacePhase::Riding);
    }

    #[test]
    fn test_pointer_input_reaches_the_sim() {
        let mut engine = engine();
        // Hold the stick hard right before starting
        let base = Vec2::new(140.0, 1780.0);
        engine.pointer_down(0, base);
        engine.pointer_move(0, base + Vec2::new(120.0, 0.0));
        engine.start(NullSurface);
        thread::sleep(Duration::from_millis(200));
        engine.stop();
        engine.pointer_up(0);
        assert!(engine.summary().ticks > 0);
    }
}
