use std::path::Path;

use serde::Deserialize;

// Sized for interactive chat: a client that falls 256 messages behind has
// effectively disconnected and should backfill from history instead.
const DEFAULT_LISTENER_QUEUE_CAPACITY: usize = 256;
const DEFAULT_PROFILE_CACHE_SIZE: usize = 1024;

/// Tunables for the core. Loaded from `duplex_config.json` when present,
/// otherwise defaulted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Queue capacity between the notifier and each subscription session.
    pub listener_queue_capacity: usize,
    /// Entries in the read-through profile cache.
    pub profile_cache_size: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            listener_queue_capacity: DEFAULT_LISTENER_QUEUE_CAPACITY,
            profile_cache_size: DEFAULT_PROFILE_CACHE_SIZE,
        }
    }
}

/// Load `duplex_config.json` from `data_dir`, falling back to defaults when
/// the file is missing or malformed.
pub fn load_config(data_dir: &str) -> CoreConfig {
    let path = Path::new(data_dir).join("duplex_config.json");
    let Ok(bytes) = std::fs::read(&path) else {
        return CoreConfig::default();
    };
    serde_json::from_slice::<CoreConfig>(&bytes).unwrap_or_default()
}
