//! Runtime orchestration for roll sessions.
//!
//! This crate wires the pure [`dice_core::SessionController`] into tokio:
//! input signals arrive over a channel, the frame clock is an armed interval
//! inside a single worker task, and paint/settle notifications fan out over
//! a topic-based event bus. Consumers hold a [`RuntimeHandle`] to feed input
//! and subscribe to events.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and handle
//! - [`events`] provides the topic-based event bus
//! - `worker` keeps the session task internal to the crate
pub mod error;
pub mod events;
pub mod runtime;

mod worker;

pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, SessionEvent, SurfaceEvent, Topic};
pub use runtime::{InputSignal, Runtime, RuntimeConfig, RuntimeHandle};
