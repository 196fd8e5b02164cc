//! Environment-driven client configuration.

use std::path::PathBuf;
use std::time::Duration;

use runtime::RuntimeConfig;

/// CLI configuration, read from the environment (a `.env` file is honored).
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding tile sprites; embedded defaults when unset.
    pub asset_dir: Option<PathBuf>,
    /// Fixed RNG seed for reproducible sessions.
    pub seed: Option<u64>,
    /// Frame clock period.
    pub frame_interval: Duration,
}

impl CliConfig {
    /// - `TUMBLE_ASSET_DIR`: sprite directory override
    /// - `TUMBLE_SEED`: fixed u64 seed
    /// - `TUMBLE_FRAME_MS`: frame clock period in milliseconds
    pub fn from_env() -> Self {
        let asset_dir = std::env::var_os("TUMBLE_ASSET_DIR").map(PathBuf::from);
        let seed = std::env::var("TUMBLE_SEED")
            .ok()
            .and_then(|raw| raw.parse().ok());
        let frame_interval = std::env::var("TUMBLE_FRAME_MS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(RuntimeConfig::DEFAULT_FRAME_INTERVAL);

        Self {
            asset_dir,
            seed,
            frame_interval,
        }
    }
}
