//! Runtime error surface.

use thiserror::Error;

/// Failures crossing the runtime boundary.
///
/// The session itself has no failure states; errors only arise from the
/// plumbing around it.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The session worker is gone and can no longer accept input.
    #[error("input channel closed; session worker has shut down")]
    InputChannelClosed,

    /// The session worker task did not shut down cleanly.
    #[error("session worker failed to join: {0}")]
    WorkerJoin(String),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
