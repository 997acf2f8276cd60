use leptos::logging::{error, warn};
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use super::extract_error;
use crate::chant::BackgroundAudio;
use crate::error::AudioError;

pub const BACKGROUND_TRACK: &str = "./background-music.mp3";

/// `HAVE_CURRENT_DATA`: enough is buffered to start.
const READY_STATE_CURRENT_DATA: u16 = 2;

/// Looping background track in a detached `<audio>` element.
pub struct WebAudio {
    element: Option<HtmlAudioElement>,
}

impl WebAudio {
    pub fn new(src: &str) -> Self {
        let element = match HtmlAudioElement::new_with_src(src) {
            Ok(element) => {
                element.set_loop(true);
                element.set_preload("auto");
                Some(element)
            }
            Err(e) => {
                warn!("Could not create background audio: {}", extract_error(e));
                None
            }
        };
        Self { element }
    }
}

impl BackgroundAudio for WebAudio {
    fn is_ready(&self) -> bool {
        self.element
            .as_ref()
            .is_some_and(|el| el.ready_state() >= READY_STATE_CURRENT_DATA)
    }

    fn play(&self) -> Result<(), AudioError> {
        let element = self.element.as_ref().ok_or(AudioError::NotReady)?;
        let pending = element
            .play()
            .map_err(|e| AudioError::Playback(extract_error(e)))?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(pending).await {
                error!("Playback error: {}", AudioError::Playback(extract_error(e)));
            }
        });
        Ok(())
    }

    fn pause(&self) {
        if let Some(element) = &self.element {
            if let Err(e) = element.pause() {
                warn!("Could not pause background audio: {}", extract_error(e));
            }
        }
    }
}
