use japa_mala::config::ChantConfig;
use japa_mala::error::{AppError, AudioError, ConfigError, NarrationError};

#[test]
fn every_error_has_a_user_message() {
    assert!(!NarrationError::Interrupted.user_message().is_empty());
    assert!(!NarrationError::Unavailable.user_message().is_empty());
    assert!(!NarrationError::Engine("x".to_string())
        .user_message()
        .is_empty());
    assert!(!AudioError::NotReady.user_message().is_empty());
    assert!(!AudioError::Playback("x".to_string())
        .user_message()
        .is_empty());
    assert!(!ConfigError::StorageUnavailable.user_message().is_empty());
}

#[test]
fn app_error_wraps_sources() {
    let err: AppError = NarrationError::Engine("synthesis-failed".to_string()).into();
    assert_eq!(err.to_string(), "Narration: Speech engine error: synthesis-failed");
    assert_eq!(
        err.user_message(),
        NarrationError::Engine(String::new()).user_message()
    );

    let err: AppError = ChantConfig::from_json("{").unwrap_err().into();
    assert!(matches!(err, AppError::Config(ConfigError::Serialization(_))));
}

#[test]
fn config_survives_a_json_round_trip_with_clamping() {
    let saved = ChantConfig {
        rate: 0.05,
        gap_ms: 250,
        ..Default::default()
    };
    let restored = ChantConfig::from_json(&saved.to_json().unwrap()).unwrap();
    assert_eq!(restored.rate, 0.1);
    assert_eq!(restored.gap_ms, 250);
}
