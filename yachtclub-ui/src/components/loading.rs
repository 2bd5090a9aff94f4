//! Loading Component
//!
//! Full-page overlay with a progress ring. Progress is simulated; when it
//! reaches 100% the overlay fades out, the page content is revealed and the
//! background starts, then the navigation and home content fade in.

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use std::time::Duration;

use crate::state::loading::{
    random_step, ring_circumference, LoadingPhase, LoadingProgress, OverlayPhase, FADE_OUT_MS,
    REVEAL_DELAY_MS, RING_RADIUS, TICK_MS,
};
use crate::state::{use_page_state, PageState};

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let page = use_page_state();
    let progress = create_rw_signal(LoadingProgress::default());
    let phase = create_rw_signal(OverlayPhase::Visible);
    let ticker = store_value(None::<IntervalHandle>);

    let tick = move || {
        if progress.get_untracked().is_complete() {
            return;
        }
        let mut next = progress.get_untracked();
        let step = next.advance(random_step(js_sys::Math::random()));
        progress.set(next);

        if step == LoadingPhase::Complete {
            ticker.with_value(|handle| {
                if let Some(handle) = handle {
                    handle.clear();
                }
            });
            finish(page, phase);
        }
    };

    match set_interval_with_handle(tick, Duration::from_millis(u64::from(TICK_MS))) {
        Ok(handle) => {
            ticker.set_value(Some(handle));
            on_cleanup(move || handle.clear());
        }
        Err(e) => {
            web_sys::console::error_1(&e);
            finish(page, phase);
        }
    }

    let circumference = ring_circumference();

    view! {
        <Show when=move || phase.get() != OverlayPhase::Removed>
            <div
                id="loading-overlay"
                class="loading-overlay"
                class:fade-out=move || phase.get() == OverlayPhase::FadingOut
            >
                <svg class="loading-ring" viewBox="0 0 100 100">
                    <circle class="loading-ring-track" cx="50" cy="50" r=RING_RADIUS />
                    <circle
                        id="loading-circle"
                        class="loading-ring-progress"
                        cx="50"
                        cy="50"
                        r=RING_RADIUS
                        stroke-dasharray=circumference
                        stroke-dashoffset=move || progress.get().ring_offset()
                    />
                </svg>
                <div id="loading-text" class="loading-text">{move || progress.get().label()}</div>
            </div>
        </Show>
    }
}

/// Fade out, reveal the page, then bring in the navigation and home content
fn finish(page: PageState, phase: RwSignal<OverlayPhase>) {
    phase.set(OverlayPhase::FadingOut);

    gloo_timers::callback::Timeout::new(FADE_OUT_MS, move || {
        phase.set(OverlayPhase::Removed);
        page.content_visible.set(true);
        page.scene_started.set(true);

        gloo_timers::callback::Timeout::new(REVEAL_DELAY_MS, move || {
            page.chrome_visible.set(true);
            page.refresh_particles();
        })
        .forget();
    })
    .forget();
}
