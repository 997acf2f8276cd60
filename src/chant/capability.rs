//! Outside services the sequencer drives: speech, the background track and
//! the pause between chants.

use std::time::Duration;

use super::voice::Voice;
use crate::error::{AudioError, NarrationError};

/// One utterance of the mantra.
#[derive(Clone, Debug, PartialEq)]
pub struct NarrationRequest {
    pub text: &'static str,
    pub voice: Option<Voice>,
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

/// Text-to-speech engine.
///
/// After [`Narrator::cancel`] every pending [`Narrator::speak`] must resolve
/// promptly with [`NarrationError::Interrupted`]; a cancelled utterance is
/// never reported as spoken.
#[allow(async_fn_in_trait)]
pub trait Narrator {
    async fn speak(&self, request: &NarrationRequest) -> Result<(), NarrationError>;

    fn cancel(&self);

    fn voices(&self) -> Vec<Voice>;
}

/// Looping background track.
pub trait BackgroundAudio {
    /// True once enough of the track is buffered to start playing.
    fn is_ready(&self) -> bool;

    /// Best effort. Late failures are reported by the implementation itself.
    fn play(&self) -> Result<(), AudioError>;

    fn pause(&self);
}

/// Cooperative sleep between chants.
#[allow(async_fn_in_trait)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}
