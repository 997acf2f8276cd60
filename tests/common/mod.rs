//! Scripted stand-ins for the speech engine, background track and timer.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use japa_mala::chant::{
    BackgroundAudio, ChantSequencer, Delay, NarrationRequest, Narrator, Voice,
};
use japa_mala::config::ChantConfig;
use japa_mala::error::{AudioError, NarrationError};
use tokio::sync::Notify;

type SpeakHook = Box<dyn Fn(usize)>;
type SleepHook = Box<dyn Fn(usize)>;

/// What the fake narrator does and what it has been asked to do.
#[derive(Default)]
pub struct Script {
    /// Number of `speak` calls so far.
    pub spoken: Cell<usize>,
    pub cancels: Cell<usize>,
    /// 1-based call that reports an engine error.
    pub fail_on: Cell<Option<usize>>,
    pub requests: RefCell<Vec<NarrationRequest>>,
    pub voices: RefCell<Vec<Voice>>,
    /// Runs inside `speak`, with the call number, before it resolves.
    pub during_speak: RefCell<Option<SpeakHook>>,
    /// Call number that waits on the notify before resolving.
    pub gate: RefCell<Option<(usize, Rc<Notify>)>>,
}

/// Honors the cancel contract: any `cancel` while a call is pending turns
/// that call into `Interrupted`.
#[derive(Clone)]
pub struct ScriptedNarrator(pub Rc<Script>);

impl Narrator for ScriptedNarrator {
    async fn speak(&self, request: &NarrationRequest) -> Result<(), NarrationError> {
        let script = &self.0;
        let call = script.spoken.get() + 1;
        script.spoken.set(call);
        script.requests.borrow_mut().push(request.clone());
        let cancels_before = script.cancels.get();

        if let Some(hook) = script.during_speak.borrow().as_ref() {
            hook(call);
        }
        let gate = script.gate.borrow().clone();
        if let Some((at, notify)) = gate {
            if at == call {
                notify.notified().await;
            }
        }

        if script.cancels.get() != cancels_before {
            return Err(NarrationError::Interrupted);
        }
        if script.fail_on.get() == Some(call) {
            return Err(NarrationError::Engine("synthesis-failed".to_string()));
        }
        Ok(())
    }

    fn cancel(&self) {
        self.0.cancels.set(self.0.cancels.get() + 1);
    }

    fn voices(&self) -> Vec<Voice> {
        self.0.voices.borrow().clone()
    }
}

pub struct AudioLog {
    pub ready: Cell<bool>,
    pub fail: Cell<bool>,
    pub plays: Cell<usize>,
    pub pauses: Cell<usize>,
    pub playing: Cell<bool>,
}

impl Default for AudioLog {
    fn default() -> Self {
        Self {
            ready: Cell::new(true),
            fail: Cell::new(false),
            plays: Cell::new(0),
            pauses: Cell::new(0),
            playing: Cell::new(false),
        }
    }
}

#[derive(Clone)]
pub struct FakeAudio(pub Rc<AudioLog>);

impl BackgroundAudio for FakeAudio {
    fn is_ready(&self) -> bool {
        self.0.ready.get()
    }

    fn play(&self) -> Result<(), AudioError> {
        self.0.plays.set(self.0.plays.get() + 1);
        if self.0.fail.get() {
            return Err(AudioError::Playback("NotAllowedError".to_string()));
        }
        self.0.playing.set(true);
        Ok(())
    }

    fn pause(&self) {
        self.0.pauses.set(self.0.pauses.get() + 1);
        self.0.playing.set(false);
    }
}

/// Records requested pauses and returns at once.
#[derive(Clone, Default)]
pub struct RecordingDelay {
    pub log: Rc<RefCell<Vec<Duration>>>,
    /// Runs inside `sleep`, with the 1-based pause number.
    pub during_sleep: Rc<RefCell<Option<SleepHook>>>,
}

impl Delay for RecordingDelay {
    async fn sleep(&self, duration: Duration) {
        let pause = {
            let mut log = self.log.borrow_mut();
            log.push(duration);
            log.len()
        };
        if let Some(hook) = self.during_sleep.borrow().as_ref() {
            hook(pause);
        }
    }
}

pub type TestSequencer = ChantSequencer<ScriptedNarrator, FakeAudio, RecordingDelay>;

pub struct Harness {
    pub script: Rc<Script>,
    pub audio: Rc<AudioLog>,
    pub delays: Rc<RefCell<Vec<Duration>>>,
    pub during_sleep: Rc<RefCell<Option<SleepHook>>>,
    pub sequencer: TestSequencer,
}

pub fn no_gap() -> ChantConfig {
    ChantConfig {
        gap_ms: 0,
        ..Default::default()
    }
}

pub fn harness(config: ChantConfig) -> Harness {
    harness_with_voices(config, Vec::new())
}

pub fn harness_with_voices(config: ChantConfig, voices: Vec<Voice>) -> Harness {
    let script = Rc::new(Script::default());
    *script.voices.borrow_mut() = voices;
    let audio = Rc::new(AudioLog::default());
    let delay = RecordingDelay::default();
    let delays = Rc::clone(&delay.log);
    let during_sleep = Rc::clone(&delay.during_sleep);
    let sequencer = ChantSequencer::new(
        ScriptedNarrator(Rc::clone(&script)),
        FakeAudio(Rc::clone(&audio)),
        delay,
        config,
    );
    Harness {
        script,
        audio,
        delays,
        during_sleep,
        sequencer,
    }
}

pub fn voices(langs: &[&str]) -> Vec<Voice> {
    langs
        .iter()
        .map(|lang| Voice::new(format!("Voice {lang}"), *lang))
        .collect()
}
