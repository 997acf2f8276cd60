use thiserror::Error;

/// Unified app errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Narration: {0}")]
    Narration(#[from] NarrationError),

    #[error("Audio: {0}")]
    Audio(#[from] AudioError),

    #[error("Settings: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Narration(e) => e.user_message(),
            Self::Audio(e) => e.user_message(),
            Self::Config(e) => e.user_message(),
        }
    }
}

/// Failures reported by a narrator while speaking one chant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NarrationError {
    #[error("Narration was interrupted")]
    Interrupted,
    #[error("Speech synthesis is not available")]
    Unavailable,
    #[error("Speech engine error: {0}")]
    Engine(String),
}

impl NarrationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Interrupted => "Chanting was stopped.",
            Self::Unavailable => "This browser cannot speak. Try another browser.",
            Self::Engine(_) => "The voice stopped unexpectedly. Press start to try again.",
        }
    }
}

/// Background track errors. Never fatal to a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("Background track is not loaded yet")]
    NotReady,
    #[error("Playback failed: {0}")]
    Playback(String),
}

impl AudioError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotReady => "Background music is still loading.",
            Self::Playback(_) => "Background music could not be played.",
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Local storage is not available")]
    StorageUnavailable,
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Invalid settings: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::StorageUnavailable | Self::Storage(_) => "Settings could not be saved.",
            Self::Serialization(_) => "Saved settings were unreadable and have been reset.",
        }
    }
}
