use leptos::prelude::*;

use crate::chant::{Session, BEADS_PER_ROUND, MANTRA_LINES};
use crate::components::mala::Mala;
use crate::mala::DEFAULT_RING_SIZE;
use crate::utils::input_value;

#[component]
pub fn StartSection(
    rounds_input: ReadSignal<String>,
    set_rounds_input: WriteSignal<String>,
    status: ReadSignal<String>,
    on_start: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="card control-card">
            <div class="control-row">
                <label for="rounds">"Rounds: "</label>
                <input
                    id="rounds"
                    type="number"
                    min="1"
                    class="rounds-input"
                    prop:value=move || rounds_input.get()
                    on:input=move |ev| set_rounds_input.set(input_value(&ev))
                />
                <button on:click=move |_| on_start.run(())>"Start Chanting"</button>
            </div>
            <Show when=move || !status.get().is_empty()>
                <p class="inline-status">{move || status.get()}</p>
            </Show>
        </section>
    }
}

#[component]
pub fn ChantingSection(session: ReadSignal<Session>, on_stop: Callback<()>) -> impl IntoView {
    let current_bead = Signal::derive(move || session.get().current_bead_index());

    view! {
        <section class="card chanting-card">
            <h2 class="mantra">
                {MANTRA_LINES[0]}<br />{MANTRA_LINES[1]}
            </h2>
            <h3 class="counter">
                {move || {
                    let current = session.get();
                    format!("Chant {} / {}", current.completed_units(), current.total_units())
                }}
            </h3>

            <Mala
                total_beads={BEADS_PER_ROUND as usize}
                current_bead
                size=DEFAULT_RING_SIZE
            />

            <button class="stop" on:click=move |_| on_stop.run(())>"Stop"</button>
        </section>
    }
}

#[component]
pub fn CompletionBanner(session: ReadSignal<Session>, on_reset: Callback<()>) -> impl IntoView {
    let message = move || {
        let rounds = session.get().rounds().map(|r| r.get()).unwrap_or(1);
        let plural = if rounds > 1 { "s" } else { "" };
        format!("Haribol! You completed {rounds} round{plural}!")
    };

    view! {
        <section class="card done-card">
            <h2>{message}</h2>
            <button on:click=move |_| on_reset.run(())>"Start Again"</button>
        </section>
    }
}
