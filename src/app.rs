use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::chant::{ChantOutcome, ChantSequencer, ChantState, Rounds};
use crate::components::controls::{ChantingSection, CompletionBanner, StartSection};
use crate::components::settings::SettingsSection;
use crate::config::ChantConfig;
use crate::error::AppError;
use crate::web::{
    load_config, save_config, TimerDelay, VoiceWatch, WebAudio, WebNarrator, BACKGROUND_TRACK,
};

pub type WebSequencer = ChantSequencer<WebNarrator, WebAudio, TimerDelay>;

/// The sequencer as owned by the mounted app. Dropping it (when the owner is
/// disposed) stops narration and detaches the voice watch.
pub struct MountedSequencer {
    sequencer: WebSequencer,
    _voices: VoiceWatch,
}

impl MountedSequencer {
    fn new(config: ChantConfig) -> Self {
        let sequencer = ChantSequencer::new(
            WebNarrator::new(),
            WebAudio::new(BACKGROUND_TRACK),
            TimerDelay,
            config,
        );
        let watched = sequencer.clone();
        let voices = sequencer
            .narrator()
            .watch_voices(move || watched.refresh_voices());
        Self {
            sequencer,
            _voices: voices,
        }
    }

    pub fn sequencer(&self) -> &WebSequencer {
        &self.sequencer
    }
}

impl Drop for MountedSequencer {
    fn drop(&mut self) {
        self.sequencer.teardown();
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let (rounds_input, set_rounds_input) = signal(config.default_rounds.to_string());
    let (settings, set_settings) = signal(config.clone());
    let (status, set_status) = signal(String::new());

    let mounted = MountedSequencer::new(config);
    let (session, set_session) = signal(mounted.sequencer().session());
    mounted
        .sequencer()
        .on_change(move |current| set_session.set(*current));
    let mounted = StoredValue::new_local(mounted);

    let start = Callback::new(move |_: ()| {
        let rounds = Rounds::parse(&rounds_input.get_untracked());
        set_rounds_input.set(rounds.get().to_string());
        let sequencer = mounted.with_value(|m| m.sequencer().clone());
        set_status.set(String::new());
        spawn_local(async move {
            if let ChantOutcome::Failed(err) = sequencer.start(rounds).await {
                set_status.set(AppError::from(err).user_message().to_string());
            }
        });
    });
    let stop = Callback::new(move |_: ()| mounted.with_value(|m| m.sequencer().stop()));
    let reset = Callback::new(move |_: ()| mounted.with_value(|m| m.sequencer().reset()));

    let apply_settings = Callback::new(move |next: ChantConfig| {
        let applied = mounted.with_value(move |m| {
            m.sequencer().set_config(next);
            m.sequencer().config()
        });
        if let Err(e) = save_config(&applied) {
            warn!("Failed to save settings: {e}");
            set_status.set(AppError::from(e).user_message().to_string());
        }
        set_settings.set(applied);
    });

    let state = Memo::new(move |_| session.get().state());

    view! {
        <main class="shell">
            <header class="hero">
                <p class="eyebrow">"Japa meditation"</p>
                <h1>"Hare Krishna Japa"</h1>
            </header>

            {move || match state.get() {
                ChantState::Idle => view! {
                    <StartSection rounds_input set_rounds_input status on_start=start />
                    <SettingsSection settings on_change=apply_settings />
                }.into_any(),
                ChantState::Chanting => view! {
                    <ChantingSection session on_stop=stop />
                }.into_any(),
                ChantState::Done => view! {
                    <CompletionBanner session on_reset=reset />
                }.into_any(),
            }}
        </main>
    }
}
