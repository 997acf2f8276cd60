//! Browser-backed implementations of the chanting capabilities.

mod audio;
mod frame;
mod speech;
mod storage;
mod timer;

pub use audio::{WebAudio, BACKGROUND_TRACK};
pub use frame::FrameLoop;
pub use speech::{VoiceWatch, WebNarrator};
pub use storage::{load_config, save_config};
pub use timer::TimerDelay;

use wasm_bindgen::JsValue;

pub fn extract_error(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(&err, &"message".into())
                .ok()
                .and_then(|v| v.as_string())
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}
