//! Press-and-hold roll session state machine.
//!
//! [`SessionController`] is the authoritative reducer for a roll session. It
//! is pure and synchronous: the surrounding runtime feeds it input and
//! frame-clock signals and supplies the collaborators it paints and
//! announces through, bundled in a [`SessionEnv`]. A fake clock driven by a
//! test exercises the full transition table deterministically.
//!
//! Two behaviors are deliberate and fixed here:
//! - roll cadence is throttled (`GameConfig::frame_wait` frames between
//!   rolls) rather than once per tick;
//! - regaining focus after a focus-loss settle does nothing; only a fresh
//!   press starts a new session.

use crate::config::GameConfig;
use crate::die::{DieValue, format_sum};
use crate::engine::{DICE_COUNT, RollEngine};
use crate::rng::RngSource;

/// One-shot frame scheduling capability.
///
/// Each granted tick must be re-requested; the controller re-arms the clock
/// on every tick it intends to stay rolling through, and stops re-arming
/// once the session settles. An in-flight tick that arrives after settling
/// is dropped by [`SessionController::on_tick`].
pub trait FrameClock {
    fn request_tick(&mut self);
}

/// Draws the four die faces onto the render surface.
pub trait Painter {
    fn paint(&mut self, values: &[DieValue; DICE_COUNT]);
}

/// Receives the finalized result text (the accessibility surface).
pub trait ResultSink {
    fn announce(&mut self, text: &str);
}

/// Collaborators the controller drives during a transition.
pub struct SessionEnv<'a> {
    pub clock: &'a mut dyn FrameClock,
    pub painter: &'a mut dyn Painter,
    pub sink: &'a mut dyn ResultSink,
    pub rng: &'a mut dyn RngSource,
}

/// Where a session currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Settled; values on display are final and announced.
    Idle,
    /// Input held; the frame clock is armed and rolls fire on cadence.
    Rolling,
}

/// State machine driven by input start/stop events and the frame clock.
pub struct SessionController {
    engine: RollEngine,
    phase: SessionPhase,
    /// Frames remaining before the next roll is allowed, in
    /// `[0, frame_wait]`. Reset to 0 whenever rolling restarts.
    wait_frames: u32,
    frame_wait: u32,
}

impl SessionController {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            engine: RollEngine::new(),
            phase: SessionPhase::Idle,
            wait_frames: 0,
            frame_wait: config.frame_wait,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Read access to the engine for renderers and tests.
    pub fn engine(&self) -> &RollEngine {
        &self.engine
    }

    /// Input pressed: enter `Rolling` and arm the frame clock.
    ///
    /// Idempotent while rolling. Duplicate start signals (mouse and touch
    /// firing for the same gesture, key auto-repeat) neither reset the
    /// throttle nor request a second tick.
    pub fn on_input_start(&mut self, env: &mut SessionEnv<'_>) {
        if self.phase == SessionPhase::Rolling {
            return;
        }
        self.phase = SessionPhase::Rolling;
        self.wait_frames = 0;
        env.clock.request_tick();
    }

    /// One frame-clock signal arriving while a tick was armed.
    ///
    /// A tick that arrives after the session settled is dropped without
    /// re-arming, which is the implicit cancellation path for the in-flight
    /// request. While rolling, a roll fires only when the throttle has burnt
    /// down to zero; the surface repaints on rolls and ticks in between
    /// merely decrement the counter.
    pub fn on_tick(&mut self, env: &mut SessionEnv<'_>) {
        if self.phase != SessionPhase::Rolling {
            return;
        }

        if self.wait_frames == 0 {
            self.engine.roll(env.rng);
            env.painter.paint(self.engine.values());
            self.wait_frames = self.frame_wait;
        } else {
            self.wait_frames -= 1;
        }

        env.clock.request_tick();
    }

    /// Input released (or focus lost): settle and announce.
    ///
    /// Short-circuits straight to `Idle` regardless of the throttle state —
    /// no roll fires on the way out, so the values announced are exactly the
    /// values on display.
    pub fn on_input_end(&mut self, env: &mut SessionEnv<'_>) {
        self.phase = SessionPhase::Idle;
        self.wait_frames = 0;
        env.sink.announce(&format_sum(self.engine.sum()));
    }

    /// Roll, paint, and settle in one synchronous step.
    ///
    /// Bypasses the frame clock entirely; usable from any phase. Startup
    /// issues one of these to show an initial, fully settled state.
    pub fn on_full_roll(&mut self, env: &mut SessionEnv<'_>) {
        self.engine.roll(env.rng);
        env.painter.paint(self.engine.values());
        self.on_input_end(env);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedRng {
        samples: Vec<f64>,
        next: usize,
    }

    impl ScriptedRng {
        fn new(samples: &[f64]) -> Self {
            Self {
                samples: samples.to_vec(),
                next: 0,
            }
        }
    }

    impl RngSource for ScriptedRng {
        fn next_unit(&mut self) -> f64 {
            let sample = self.samples[self.next % self.samples.len()];
            self.next += 1;
            sample
        }
    }

    #[derive(Default)]
    struct CountingClock {
        requests: usize,
    }

    impl FrameClock for CountingClock {
        fn request_tick(&mut self) {
            self.requests += 1;
        }
    }

    #[derive(Default)]
    struct RecordingPainter {
        frames: Vec<[DieValue; DICE_COUNT]>,
    }

    impl Painter for RecordingPainter {
        fn paint(&mut self, values: &[DieValue; DICE_COUNT]) {
            self.frames.push(*values);
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        announcements: Vec<String>,
    }

    impl ResultSink for RecordingSink {
        fn announce(&mut self, text: &str) {
            self.announcements.push(text.to_owned());
        }
    }

    struct Harness {
        controller: SessionController,
        clock: CountingClock,
        painter: RecordingPainter,
        sink: RecordingSink,
        rng: ScriptedRng,
    }

    impl Harness {
        fn new(samples: &[f64]) -> Self {
            Self {
                controller: SessionController::new(&GameConfig::default()),
                clock: CountingClock::default(),
                painter: RecordingPainter::default(),
                sink: RecordingSink::default(),
                rng: ScriptedRng::new(samples),
            }
        }

        fn start(&mut self) {
            let mut env = SessionEnv {
                clock: &mut self.clock,
                painter: &mut self.painter,
                sink: &mut self.sink,
                rng: &mut self.rng,
            };
            self.controller.on_input_start(&mut env);
        }

        fn tick(&mut self) {
            let mut env = SessionEnv {
                clock: &mut self.clock,
                painter: &mut self.painter,
                sink: &mut self.sink,
                rng: &mut self.rng,
            };
            self.controller.on_tick(&mut env);
        }

        fn end(&mut self) {
            let mut env = SessionEnv {
                clock: &mut self.clock,
                painter: &mut self.painter,
                sink: &mut self.sink,
                rng: &mut self.rng,
            };
            self.controller.on_input_end(&mut env);
        }

        fn full_roll(&mut self) {
            let mut env = SessionEnv {
                clock: &mut self.clock,
                painter: &mut self.painter,
                sink: &mut self.sink,
                rng: &mut self.rng,
            };
            self.controller.on_full_roll(&mut env);
        }
    }

    #[test]
    fn duplicate_start_does_not_double_arm_the_clock() {
        let mut h = Harness::new(&[0.5]);
        h.start();
        h.start();
        assert_eq!(h.clock.requests, 1);
        assert_eq!(h.controller.phase(), SessionPhase::Rolling);
    }

    #[test]
    fn duplicate_start_does_not_reset_the_throttle() {
        let mut h = Harness::new(&[0.5]);
        h.start();
        h.tick(); // rolls, throttle now at frame_wait
        h.start(); // gesture echo mid-session
        h.tick(); // must decrement, not roll again
        assert_eq!(h.painter.frames.len(), 1);
    }

    #[test]
    fn held_for_a_full_throttle_window_rolls_exactly_once() {
        let mut h = Harness::new(&[0.5, 0.1, 0.9, 0.0]);
        h.start();
        for _ in 0..(GameConfig::DEFAULT_FRAME_WAIT + 1) {
            h.tick();
        }
        assert_eq!(h.painter.frames.len(), 1);

        h.end();
        let expected = format_sum(h.controller.engine().sum());
        assert_eq!(h.sink.announcements, vec![expected]);
    }

    #[test]
    fn sixth_tick_starts_the_next_roll() {
        let mut h = Harness::new(&[0.5]);
        h.start();
        for _ in 0..(GameConfig::DEFAULT_FRAME_WAIT + 2) {
            h.tick();
        }
        assert_eq!(h.painter.frames.len(), 2);
    }

    #[test]
    fn every_rolling_tick_rearms_the_clock() {
        let mut h = Harness::new(&[0.5]);
        h.start();
        h.tick();
        h.tick();
        // One arm from start plus one per delivered tick.
        assert_eq!(h.clock.requests, 3);
    }

    #[test]
    fn tap_without_ticks_announces_the_prior_values() {
        let mut h = Harness::new(&[0.5]);
        h.start();
        h.end();
        assert!(h.painter.frames.is_empty());
        // Fresh engine holds four zeros.
        assert_eq!(h.sink.announcements, vec!["0".to_owned()]);
        assert_eq!(h.controller.phase(), SessionPhase::Idle);
    }

    #[test]
    fn tick_after_settling_is_dropped_without_rearm() {
        let mut h = Harness::new(&[0.5]);
        h.start();
        h.end();
        let armed_before = h.clock.requests;
        h.tick(); // in-flight tick arriving late
        assert_eq!(h.clock.requests, armed_before);
        assert!(h.painter.frames.is_empty());
    }

    #[test]
    fn restart_resets_the_throttle() {
        let mut h = Harness::new(&[0.5]);
        h.start();
        h.tick(); // throttle charged to frame_wait
        h.end();
        h.start();
        h.tick(); // must roll immediately, not burn the stale counter
        assert_eq!(h.painter.frames.len(), 2);
    }

    #[test]
    fn full_roll_announces_the_scripted_total() {
        // Two plus, two zero: announced total is +2.
        let mut h = Harness::new(&[0.5, 0.4, 0.1, 0.2]);
        h.full_roll();
        assert_eq!(h.painter.frames.len(), 1);
        assert_eq!(h.sink.announcements, vec!["+2".to_owned()]);
        assert_eq!(h.controller.phase(), SessionPhase::Idle);
        // No scheduler involvement.
        assert_eq!(h.clock.requests, 0);
    }

    #[test]
    fn end_mid_throttle_skips_the_pending_roll() {
        let mut h = Harness::new(&[0.5, 0.4, 0.1, 0.2]);
        h.start();
        h.tick(); // rolls: [Plus, Plus, Zero, Zero]
        h.tick(); // throttle burns, no roll
        h.end();
        assert_eq!(h.painter.frames.len(), 1);
        assert_eq!(h.sink.announcements, vec!["+2".to_owned()]);
    }
}
