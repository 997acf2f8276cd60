use std::cell::RefCell;

use js_sys::{Function, Promise};
use leptos::logging::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance, SpeechSynthesisVoice};

use super::extract_error;
use crate::chant::{NarrationRequest, Narrator, Voice};
use crate::error::NarrationError;

/// Narrator backed by `window.speechSynthesis`.
pub struct WebNarrator {
    synth: Option<SpeechSynthesis>,
    voices: RefCell<Vec<SpeechSynthesisVoice>>,
}

impl WebNarrator {
    pub fn new() -> Self {
        let synth = web_sys::window().and_then(|w| w.speech_synthesis().ok());
        if synth.is_none() {
            warn!("Speech synthesis is not available in this browser");
        }
        Self {
            synth,
            voices: RefCell::new(Vec::new()),
        }
    }

    /// Run `on_change` whenever the browser's voice list changes, until the
    /// returned guard is dropped.
    pub fn watch_voices(&self, on_change: impl Fn() + 'static) -> VoiceWatch {
        let callback = Closure::wrap(Box::new(move || on_change()) as Box<dyn Fn()>);
        if let Some(synth) = &self.synth {
            synth.set_onvoiceschanged(Some(callback.as_ref().unchecked_ref()));
        }
        VoiceWatch {
            synth: self.synth.clone(),
            _callback: callback,
        }
    }

    fn find_voice(&self, voice: &Voice) -> Option<SpeechSynthesisVoice> {
        self.voices
            .borrow()
            .iter()
            .find(|v| v.name() == voice.name && v.lang() == voice.lang)
            .cloned()
    }
}

impl Default for WebNarrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Narrator for WebNarrator {
    async fn speak(&self, request: &NarrationRequest) -> Result<(), NarrationError> {
        let synth = self.synth.as_ref().ok_or(NarrationError::Unavailable)?;
        let utterance = SpeechSynthesisUtterance::new_with_text(request.text)
            .map_err(|e| NarrationError::Engine(extract_error(e)))?;

        if let Some(voice) = request.voice.as_ref().and_then(|v| self.find_voice(v)) {
            utterance.set_voice(Some(&voice));
        }
        utterance.set_lang(&request.lang);
        utterance.set_rate(request.rate);
        utterance.set_pitch(request.pitch);
        utterance.set_volume(request.volume);

        let finished = Promise::new(&mut |resolve: Function, reject: Function| {
            utterance.set_onend(Some(&resolve));
            utterance.set_onerror(Some(&reject));
        });
        synth.speak(&utterance);
        let result = JsFuture::from(finished).await;

        utterance.set_onend(None);
        utterance.set_onerror(None);
        result.map(|_| ()).map_err(narration_error)
    }

    fn cancel(&self) {
        if let Some(synth) = &self.synth {
            synth.cancel();
        }
    }

    fn voices(&self) -> Vec<Voice> {
        let Some(synth) = &self.synth else {
            return Vec::new();
        };
        let listed: Vec<SpeechSynthesisVoice> = synth
            .get_voices()
            .iter()
            .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
            .collect();
        let voices = listed.iter().map(|v| Voice::new(v.name(), v.lang())).collect();
        *self.voices.borrow_mut() = listed;
        voices
    }
}

/// Maps a `SpeechSynthesisErrorEvent` to a narration error.
fn narration_error(event: JsValue) -> NarrationError {
    let code = js_sys::Reflect::get(&event, &"error".into())
        .ok()
        .and_then(|v| v.as_string());
    match code.as_deref() {
        Some("interrupted") | Some("canceled") => NarrationError::Interrupted,
        Some(code) => NarrationError::Engine(code.to_string()),
        None => NarrationError::Engine(extract_error(event)),
    }
}

/// Keeps the voices-changed handler installed; detaches it on drop.
pub struct VoiceWatch {
    synth: Option<SpeechSynthesis>,
    _callback: Closure<dyn Fn()>,
}

impl Drop for VoiceWatch {
    fn drop(&mut self) {
        if let Some(synth) = &self.synth {
            synth.set_onvoiceschanged(None);
        }
    }
}
