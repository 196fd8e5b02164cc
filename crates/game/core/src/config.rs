/// Tunable session parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Frames skipped between rolls while the input is held.
    ///
    /// The frame clock runs at display refresh rate, which is far faster
    /// than the intended visual roll cadence; a roll fires on the first tick
    /// of a session and then once every `frame_wait + 1` ticks.
    pub frame_wait: u32,
}

impl GameConfig {
    /// Default throttle: one roll per five ticks (~12 rolls/s at 60 Hz).
    pub const DEFAULT_FRAME_WAIT: u32 = 4;

    pub fn new() -> Self {
        Self {
            frame_wait: Self::DEFAULT_FRAME_WAIT,
        }
    }

    pub fn with_frame_wait(frame_wait: u32) -> Self {
        Self { frame_wait }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
