use leptos::prelude::*;

use crate::config::{ChantConfig, MAX_GAP_MS, MAX_RATE, MIN_RATE};
use crate::utils::input_value;

#[component]
pub fn SettingsSection(
    settings: ReadSignal<ChantConfig>,
    on_change: Callback<ChantConfig>,
) -> impl IntoView {
    let update_rate = move |ev: leptos::ev::Event| {
        if let Ok(rate) = input_value(&ev).trim().parse::<f32>() {
            let mut next = settings.get_untracked();
            next.rate = rate;
            on_change.run(next);
        }
    };

    let update_gap = move |ev: leptos::ev::Event| {
        if let Ok(gap_ms) = input_value(&ev).trim().parse::<u32>() {
            let mut next = settings.get_untracked();
            next.gap_ms = gap_ms;
            on_change.run(next);
        }
    };

    view! {
        <section class="card settings-card">
            <div class="card-header"><p class="eyebrow">"Settings"</p></div>
            <div class="settings-section">
                <div class="settings-row">
                    <div class="settings-label">
                        <span class="settings-title">"Speaking rate"</span>
                        <span class="settings-hint">{move || format!("{:.1}x", settings.get().rate)}</span>
                    </div>
                    <input
                        type="range"
                        class="settings-input"
                        min=MIN_RATE.to_string()
                        max=MAX_RATE.to_string()
                        step="0.1"
                        prop:value=move || settings.get().rate.to_string()
                        on:change=update_rate
                    />
                </div>
                <div class="settings-row">
                    <div class="settings-label">
                        <span class="settings-title">"Pause between chants"</span>
                        <span class="settings-hint">"Milliseconds"</span>
                    </div>
                    <input
                        type="number"
                        class="settings-input"
                        min="0"
                        max=MAX_GAP_MS.to_string()
                        step="100"
                        prop:value=move || settings.get().gap_ms.to_string()
                        on:change=update_gap
                    />
                </div>
                <div class="settings-divider"></div>
                <div class="settings-footer">
                    <button
                        class="ghost compact"
                        on:click=move |_| on_change.run(ChantConfig::default())
                    >
                        "Reset Settings"
                    </button>
                </div>
            </div>
        </section>
    }
}
