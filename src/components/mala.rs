use leptos::prelude::*;

use crate::mala::{
    layout, BeadStatus, Wobble, DEFAULT_BEAD_SPACING, THREAD_COLOR, THREAD_THICKNESS,
};
use crate::web::FrameLoop;

const BEAD_BORDER: &str = "1px solid #9c7a58";
const CURRENT_GLOW: &str = "0 0 12px 4px #ffb347, inset 0 0 5px rgba(255,255,255,0.3)";
const RESTING_SHADOW: &str = "0 2px 4px rgba(0,0,0,0.3)";

/// Bead ring with the current bead glowing and a gentle idle sway.
#[component]
pub fn Mala(
    total_beads: usize,
    #[prop(into)] current_bead: Signal<usize>,
    size: f64,
    #[prop(optional)] spacing: Option<f64>,
) -> impl IntoView {
    let spacing = spacing.unwrap_or(DEFAULT_BEAD_SPACING);
    let ring = Memo::new(move |_| layout(total_beads, current_bead.get(), size, spacing));

    let (rotation, set_rotation) = signal(0.0_f64);
    let (now_ms, set_now_ms) = signal(js_sys::Date::now());
    let mut wobble = Wobble::default();
    let frames = FrameLoop::start(move |_| {
        set_rotation.set(wobble.step());
        set_now_ms.set(js_sys::Date::now());
    });
    // Dropped, and so cancelled, together with this component.
    let _frames = StoredValue::new_local(frames);

    let threads = move || {
        ring.get()
            .threads
            .into_iter()
            .map(|thread| {
                view! {
                    <div
                        class="mala-thread"
                        style:position="absolute"
                        style:left=format!("{}px", thread.x)
                        style:top=format!("{}px", thread.y)
                        style:width=format!("{}px", thread.length)
                        style:height=format!("{THREAD_THICKNESS}px")
                        style:background=THREAD_COLOR
                        style:transform-origin="0 0"
                        style:transform=format!("rotate({}rad)", thread.angle)
                        style:border-radius="2px"
                        style:z-index="0"
                    ></div>
                }
            })
            .collect_view()
    };

    let beads = move || {
        ring.get()
            .beads
            .into_iter()
            .map(|bead| {
                let pulsing = bead.status == BeadStatus::Current;
                let sized = bead.clone();
                // Only the current bead tracks the clock.
                let scale = move || {
                    let now = if pulsing { now_ms.get() } else { 0.0 };
                    format!("scale({:.3})", sized.scale(now))
                };
                view! {
                    <div
                        class="mala-bead"
                        class:guru=bead.is_guru()
                        style:position="absolute"
                        style:left=format!("{}px", bead.left())
                        style:top=format!("{}px", bead.top())
                        style:width=format!("{}px", bead.diameter())
                        style:height=format!("{}px", bead.diameter())
                        style:border-radius="50%"
                        style:background=format!(
                            "radial-gradient(circle at 30% 30%, #fff, {})",
                            bead.color()
                        )
                        style:border=BEAD_BORDER
                        style:box-shadow={if pulsing { CURRENT_GLOW } else { RESTING_SHADOW }}
                        style:transform=scale
                        style:transition="all 200ms ease"
                        style:z-index="1"
                    ></div>
                }
            })
            .collect_view()
    };

    view! {
        <div
            class="mala"
            style:position="relative"
            style:width=format!("{size}px")
            style:height=format!("{size}px")
            style:margin="40px auto"
            style:transform=move || format!("rotate({:.2}deg)", rotation.get())
            style:transition="transform 0.1s linear"
        >
            {threads}
            {beads}
        </div>
    }
}
