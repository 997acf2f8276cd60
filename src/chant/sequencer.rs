use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::logging::{error, log, warn};

use super::capability::{BackgroundAudio, Delay, NarrationRequest, Narrator};
use super::session::{Rounds, Session};
use super::voice::{Voice, VoiceSelection};
use super::{MANTRA, NARRATION_PITCH, NARRATION_VOLUME};
use crate::config::ChantConfig;
use crate::error::NarrationError;

/// How a call to [`ChantSequencer::start`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChantOutcome {
    Completed,
    Cancelled,
    Failed(NarrationError),
}

type Observer = Rc<dyn Fn(&Session)>;

struct Shared<N, A, D> {
    narrator: N,
    audio: A,
    delay: D,
    config: RefCell<ChantConfig>,
    session: RefCell<Session>,
    voice: RefCell<VoiceSelection>,
    cancelled: Cell<bool>,
    epoch: Cell<u64>,
    observers: RefCell<Vec<Observer>>,
}

/// Narrates the mantra one chant at a time and keeps the session counter in
/// step with it.
///
/// Handles are cheap clones of one shared instance, meant for a single UI
/// thread: a running [`start`](Self::start) future and the stop/reset
/// controls all work on the same state.
pub struct ChantSequencer<N, A, D> {
    shared: Rc<Shared<N, A, D>>,
}

impl<N, A, D> Clone for ChantSequencer<N, A, D> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<N, A, D> ChantSequencer<N, A, D>
where
    N: Narrator,
    A: BackgroundAudio,
    D: Delay,
{
    pub fn new(narrator: N, audio: A, delay: D, config: ChantConfig) -> Self {
        let config = config.sanitized();
        let voice = VoiceSelection::new(config.voice_locale.clone());
        let sequencer = Self {
            shared: Rc::new(Shared {
                narrator,
                audio,
                delay,
                config: RefCell::new(config),
                session: RefCell::new(Session::default()),
                voice: RefCell::new(voice),
                cancelled: Cell::new(false),
                epoch: Cell::new(0),
                observers: RefCell::new(Vec::new()),
            }),
        };
        sequencer.refresh_voices();
        sequencer
    }

    pub fn session(&self) -> Session {
        *self.shared.session.borrow()
    }

    pub fn config(&self) -> ChantConfig {
        self.shared.config.borrow().clone()
    }

    /// Applies to the next chant, including one of a running session.
    pub fn set_config(&self, config: ChantConfig) {
        let config = config.sanitized();
        let locale_changed = self.shared.config.borrow().voice_locale != config.voice_locale;
        if locale_changed {
            *self.shared.voice.borrow_mut() = VoiceSelection::new(config.voice_locale.clone());
        }
        *self.shared.config.borrow_mut() = config;
        if locale_changed {
            self.refresh_voices();
        }
    }

    pub fn selected_voice(&self) -> Option<Voice> {
        self.shared.voice.borrow().voice().cloned()
    }

    pub fn narrator(&self) -> &N {
        &self.shared.narrator
    }

    /// Called with a copy of the session after every change.
    pub fn on_change(&self, observer: impl Fn(&Session) + 'static) {
        self.shared.observers.borrow_mut().push(Rc::new(observer));
    }

    /// Re-pick the narration voice from the narrator's current list.
    pub fn refresh_voices(&self) {
        let voices = self.shared.narrator.voices();
        let mut selection = self.shared.voice.borrow_mut();
        selection.choose(&voices);
        match selection.voice() {
            Some(voice) => log!("Narration voice: {} ({})", voice.name, voice.lang),
            None => log!("No voices listed; using engine default for {}", selection.lang()),
        }
    }

    /// Run a full session of `rounds`. Resolves once every chant is spoken,
    /// the session is stopped, or narration fails.
    pub async fn start(&self, rounds: Rounds) -> ChantOutcome {
        let epoch = self.begin(rounds);
        self.play_background();

        let outcome = self.narrate(epoch).await;
        let session = self.session();
        match &outcome {
            ChantOutcome::Completed => log!(
                "Completed {} round(s), {} chants",
                rounds.get(),
                session.completed_units()
            ),
            ChantOutcome::Cancelled => log!(
                "Chanting stopped after {} of {} chants",
                session.completed_units(),
                session.total_units()
            ),
            ChantOutcome::Failed(err) => warn!(
                "Chanting aborted after {} chants: {}",
                session.completed_units(),
                err
            ),
        }
        outcome
    }

    /// Cancel the running session, if any, and return to `Idle` right away.
    pub fn stop(&self) {
        self.shared.cancelled.set(true);
        self.shared.narrator.cancel();
        self.shared.audio.pause();
        self.update(Session::halt);
    }

    pub fn reset(&self) {
        self.stop();
        self.update(Session::reset);
    }

    /// Stop and drop every observer. Used when the owning view goes away.
    pub fn teardown(&self) {
        self.stop();
        self.shared.observers.borrow_mut().clear();
    }

    fn begin(&self, rounds: Rounds) -> u64 {
        let epoch = self.shared.epoch.get().wrapping_add(1);
        self.shared.epoch.set(epoch);
        self.shared.cancelled.set(false);
        self.update(|session| session.begin(rounds));
        log!(
            "Starting {} round(s), {} chants",
            rounds.get(),
            rounds.total_units()
        );
        epoch
    }

    async fn narrate(&self, epoch: u64) -> ChantOutcome {
        let total = self.session().total_units();

        for unit in 0..total {
            if self.is_cancelled(epoch) {
                return ChantOutcome::Cancelled;
            }

            let request = self.request();
            let result = self.shared.narrator.speak(&request).await;

            // A stale or stopped session must not count or touch state.
            if self.is_cancelled(epoch) {
                return ChantOutcome::Cancelled;
            }
            if let Err(err) = result {
                warn!("Narration failed on chant {} of {}: {}", unit + 1, total, err);
                self.update(Session::halt);
                self.shared.audio.pause();
                return ChantOutcome::Failed(err);
            }
            self.update(|session| {
                session.record_unit();
            });

            let gap = self.shared.config.borrow().gap();
            if unit + 1 < total && !gap.is_zero() {
                self.shared.delay.sleep(gap).await;
            }
        }

        if self.is_cancelled(epoch) {
            return ChantOutcome::Cancelled;
        }
        self.update(Session::complete);
        self.shared.audio.pause();
        ChantOutcome::Completed
    }

    fn request(&self) -> NarrationRequest {
        let config = self.shared.config.borrow();
        let voice = self.shared.voice.borrow();
        NarrationRequest {
            text: MANTRA,
            voice: voice.voice().cloned(),
            lang: voice.lang().to_string(),
            rate: config.rate,
            pitch: NARRATION_PITCH,
            volume: NARRATION_VOLUME,
        }
    }

    fn play_background(&self) {
        let audio = &self.shared.audio;
        if !audio.is_ready() {
            log!("Background track not ready; chanting without it");
            return;
        }
        if let Err(err) = audio.play() {
            error!("Playback error: {}", err);
        }
    }

    fn is_cancelled(&self, epoch: u64) -> bool {
        self.shared.cancelled.get() || self.shared.epoch.get() != epoch
    }

    fn update(&self, change: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut session = self.shared.session.borrow_mut();
            change(&mut session);
            *session
        };
        // Observers may stop, tear down or subscribe while being notified.
        let observers = self.shared.observers.borrow().clone();
        for observer in &observers {
            observer(&snapshot);
        }
    }
}
