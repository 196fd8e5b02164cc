//! Orchestrator: spawns the session worker and hands out the handle.

use std::sync::Arc;
use std::time::Duration;

use dice_core::GameConfig;
use rand::Rng;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::worker;

/// Discrete input signals feeding the session.
///
/// Press-like sources map to `Start`; release-like sources, focus loss
/// included, map to `End`. `FullRoll` rolls and settles synchronously,
/// bypassing the frame clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    Start,
    End,
    FullRoll,
}

/// Runtime construction parameters.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Frame clock period; one tick is delivered per period while armed.
    pub frame_interval: Duration,
    /// Session tunables.
    pub game: GameConfig,
    /// Fixed RNG seed; entropy-seeded when unset.
    pub seed: Option<u64>,
    /// Event bus capacity per topic.
    pub event_capacity: usize,
}

impl RuntimeConfig {
    /// Display-refresh-shaped default (60 Hz, ~16 ms).
    pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            frame_interval: Self::DEFAULT_FRAME_INTERVAL,
            game: GameConfig::default(),
            seed: None,
            event_capacity: 64,
        }
    }
}

/// Entry point for starting a session runtime.
pub struct Runtime;

impl Runtime {
    /// Spawns the session worker and returns the handle that drives it.
    pub fn start(config: RuntimeConfig) -> RuntimeHandle {
        let (tx_input, rx_input) = mpsc::channel(16);
        let bus = Arc::new(EventBus::with_capacity(config.event_capacity));
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        tracing::debug!(seed, "starting session worker");

        let worker = tokio::spawn(worker::run(rx_input, Arc::clone(&bus), config, seed));

        RuntimeHandle {
            tx_input,
            bus,
            worker,
        }
    }
}

/// Handle for feeding input signals and subscribing to runtime events.
pub struct RuntimeHandle {
    tx_input: mpsc::Sender<InputSignal>,
    bus: Arc<EventBus>,
    worker: JoinHandle<()>,
}

impl RuntimeHandle {
    /// Forwards an input signal to the session worker.
    pub async fn send(&self, signal: InputSignal) -> Result<()> {
        self.tx_input
            .send(signal)
            .await
            .map_err(|_| RuntimeError::InputChannelClosed)
    }

    /// Subscribes to a topic on the event bus.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    /// Closes the input channel and waits for the worker to finish.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.tx_input);
        self.worker
            .await
            .map_err(|e| RuntimeError::WorkerJoin(e.to_string()))
    }
}
