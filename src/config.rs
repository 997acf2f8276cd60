use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;

pub const STORAGE_KEY: &str = "japa-mala.settings";
pub const DEFAULT_VOICE_LOCALE: &str = "en-IN";

/// Web Speech accepts rates in this range.
pub const MIN_RATE: f32 = 0.1;
pub const MAX_RATE: f32 = 10.0;
pub const MAX_GAP_MS: u32 = 10_000;

/// User-tunable chanting settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChantConfig {
    pub rate: f32,
    pub gap_ms: u32,
    pub voice_locale: String,
    pub default_rounds: u32,
}

impl Default for ChantConfig {
    fn default() -> Self {
        Self {
            rate: 1.0,
            gap_ms: 600,
            voice_locale: DEFAULT_VOICE_LOCALE.to_string(),
            default_rounds: 1,
        }
    }
}

impl ChantConfig {
    /// Pull every field back into its accepted range.
    pub fn sanitized(mut self) -> Self {
        self.rate = if self.rate.is_finite() {
            self.rate.clamp(MIN_RATE, MAX_RATE)
        } else {
            1.0
        };
        self.gap_ms = self.gap_ms.min(MAX_GAP_MS);
        if self.voice_locale.trim().is_empty() {
            self.voice_locale = DEFAULT_VOICE_LOCALE.to_string();
        }
        self.default_rounds = self.default_rounds.max(1);
        self
    }

    pub fn gap(&self) -> Duration {
        Duration::from_millis(u64::from(self.gap_ms))
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.sanitized())
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}
