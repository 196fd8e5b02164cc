//! Topic-based event bus for session and surface notifications.

use dice_core::{DICE_COUNT, DieValue};
use tokio::sync::broadcast;

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Topic {
    /// Session lifecycle (started, settled).
    Session,
    /// Render surface updates (repaints).
    Surface,
}

/// Event wrapper that carries the topic and typed event.
#[derive(Debug, Clone)]
pub enum Event {
    Session(SessionEvent),
    Surface(SurfaceEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Session(_) => Topic::Session,
            Event::Surface(_) => Topic::Surface,
        }
    }
}

/// Session lifecycle events.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A press was accepted and the dice started tumbling.
    Started,
    /// The roll settled; `text` is the accessible form of the total
    /// (`+3`, `0`, `-2`).
    Settled { text: String },
}

/// Render surface events.
#[derive(Debug, Clone)]
pub enum SurfaceEvent {
    /// The die faces changed and the surface should repaint.
    Painted { values: [DieValue; DICE_COUNT] },
}

/// Topic-based event bus.
///
/// Consumers subscribe to the topics they care about; publishing to a topic
/// nobody listens on is normal and silently dropped.
pub struct EventBus {
    session: broadcast::Sender<Event>,
    surface: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a bus with default capacity per topic.
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Creates a bus with the given capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            session: broadcast::channel(capacity).0,
            surface: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Session => &self.session,
            Topic::Surface => &self.surface,
        }
    }

    /// Publishes an event to its corresponding topic.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            tracing::trace!(?topic, "no subscribers for topic");
        }
    }

    /// Subscribes to a topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
