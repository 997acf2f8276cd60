use leptos::logging::warn;
use web_sys::Storage;

use super::extract_error;
use crate::config::{ChantConfig, STORAGE_KEY};
use crate::error::ConfigError;

fn local_storage() -> Result<Storage, ConfigError> {
    web_sys::window()
        .ok_or(ConfigError::StorageUnavailable)?
        .local_storage()
        .map_err(|e| ConfigError::Storage(extract_error(e)))?
        .ok_or(ConfigError::StorageUnavailable)
}

fn read_config() -> Result<Option<ChantConfig>, ConfigError> {
    let raw = local_storage()?
        .get_item(STORAGE_KEY)
        .map_err(|e| ConfigError::Storage(extract_error(e)))?;
    raw.as_deref().map(ChantConfig::from_json).transpose()
}

/// Saved settings, or defaults when nothing usable is stored.
pub fn load_config() -> ChantConfig {
    match read_config() {
        Ok(Some(config)) => config,
        Ok(None) => ChantConfig::default(),
        Err(e) => {
            warn!("Failed to load settings: {e}");
            ChantConfig::default()
        }
    }
}

pub fn save_config(config: &ChantConfig) -> Result<(), ConfigError> {
    let raw = config.to_json()?;
    local_storage()?
        .set_item(STORAGE_KEY, &raw)
        .map_err(|e| ConfigError::Storage(extract_error(e)))
}
