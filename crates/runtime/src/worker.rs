//! Session worker: the single thread of control for all session state.
//!
//! One task owns the controller, the RNG, and the frame clock. Input signals
//! and frame ticks are serialized through one `select!` loop, so die values
//! and session phase never need locking.

use std::sync::Arc;

use dice_core::{
    DICE_COUNT, DieValue, FrameClock, Painter, PcgRng, ResultSink, SessionController, SessionEnv,
    SessionPhase,
};
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use crate::events::{Event, EventBus, SessionEvent, SurfaceEvent};
use crate::runtime::{InputSignal, RuntimeConfig};

/// Armed flag standing in for one-shot frame scheduling.
///
/// The controller requests a tick; the select loop delivers at most one
/// interval tick per request and disarms before dispatching it.
struct TickArm {
    armed: bool,
}

impl FrameClock for TickArm {
    fn request_tick(&mut self) {
        self.armed = true;
    }
}

/// Painter publishing repaints on the surface topic.
struct BusPainter {
    bus: Arc<EventBus>,
}

impl Painter for BusPainter {
    fn paint(&mut self, values: &[DieValue; DICE_COUNT]) {
        self.bus
            .publish(Event::Surface(SurfaceEvent::Painted { values: *values }));
    }
}

/// Result sink publishing the settled text on the session topic.
struct BusSink {
    bus: Arc<EventBus>,
}

impl ResultSink for BusSink {
    fn announce(&mut self, text: &str) {
        self.bus.publish(Event::Session(SessionEvent::Settled {
            text: text.to_owned(),
        }));
    }
}

pub(crate) async fn run(
    mut rx_input: mpsc::Receiver<InputSignal>,
    bus: Arc<EventBus>,
    config: RuntimeConfig,
    seed: u64,
) {
    let mut controller = SessionController::new(&config.game);
    let mut rng = PcgRng::seeded(seed);
    let mut clock = TickArm { armed: false };
    let mut painter = BusPainter {
        bus: Arc::clone(&bus),
    };
    let mut sink = BusSink {
        bus: Arc::clone(&bus),
    };

    let mut frames = time::interval(config.frame_interval);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            signal = rx_input.recv() => {
                let Some(signal) = signal else {
                    // Handle dropped; nothing can feed the session anymore.
                    break;
                };
                let mut env = SessionEnv {
                    clock: &mut clock,
                    painter: &mut painter,
                    sink: &mut sink,
                    rng: &mut rng,
                };
                match signal {
                    InputSignal::Start => {
                        let was_idle = controller.phase() == SessionPhase::Idle;
                        controller.on_input_start(&mut env);
                        if was_idle {
                            // First tick lands a full frame after the press.
                            frames.reset();
                            bus.publish(Event::Session(SessionEvent::Started));
                            tracing::debug!("session started");
                        }
                    }
                    InputSignal::End => {
                        controller.on_input_end(&mut env);
                        tracing::debug!(sum = controller.engine().sum(), "session settled");
                    }
                    InputSignal::FullRoll => {
                        controller.on_full_roll(&mut env);
                        tracing::debug!(sum = controller.engine().sum(), "full roll");
                    }
                }
            }
            _ = frames.tick(), if clock.armed => {
                clock.armed = false;
                let mut env = SessionEnv {
                    clock: &mut clock,
                    painter: &mut painter,
                    sink: &mut sink,
                    rng: &mut rng,
                };
                controller.on_tick(&mut env);
            }
        }
    }

    tracing::debug!("session worker stopped");
}
