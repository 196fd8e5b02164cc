//! Deterministic dice logic shared across clients.
//!
//! `dice-core` defines the canonical rules of the plus/minus/zero dice toy:
//! the [`engine::RollEngine`] that owns the four die values, and the
//! [`session::SessionController`] state machine that decides when the engine
//! rolls, when the surface repaints, and when the result is announced. All
//! collaborators (frame clock, painter, result sink, random source) are
//! injected as capabilities, so the crate stays pure and testable with fakes.
pub mod config;
pub mod die;
pub mod engine;
pub mod rng;
pub mod session;
pub mod surface;

pub use config::GameConfig;
pub use die::{DieValue, format_sum};
pub use engine::{DICE_COUNT, RollEngine};
pub use rng::{PcgRng, RngSource};
pub use session::{
    FrameClock, Painter, ResultSink, SessionController, SessionEnv, SessionPhase,
};
pub use surface::{LOGICAL_SIZE, SLOT_ORIGINS, TILE_SIZE, scale_factor};
