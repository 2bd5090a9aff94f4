//! Widget Components
//!
//! Dashboard cards for the weather feeds, the local clock and the embedded
//! warnings frame. Each card owns its refresh interval and clears it on cleanup.

use leptos::*;
use std::time::Duration;

use crate::api::client::WARNINGS_FRAME_SRC;
use crate::widgets::{self, render, WidgetContent, WidgetKind, CLOCK_TICK_MS, FRAME_REFRESH_MS};

/// Sea & weather dashboard
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="dashboard-grid">
            <div class="widget">
                <h3>"Local Time"</h3>
                <LocalClock />
            </div>
            {WidgetKind::ALL
                .into_iter()
                .map(|kind| view! { <Widget kind=kind /> })
                .collect_view()}
            <div class="widget widget-wide">
                <h3>"Phuket Weather Warnings"</h3>
                <RefreshingFrame src=WARNINGS_FRAME_SRC title="Phuket weather warnings" />
            </div>
        </div>
    }
}

/// Run `f` now and every `period`, until the owner is cleaned up
fn every(period: u64, f: impl Fn() + 'static) {
    f();
    match set_interval_with_handle(f, Duration::from_millis(period)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => web_sys::console::error_1(&e),
    }
}

#[component]
pub fn Widget(kind: WidgetKind) -> impl IntoView {
    let content = create_rw_signal(WidgetContent::Loading);

    every(kind.refresh_ms(), move || {
        spawn_local(async move {
            let loaded = widgets::load(kind).await;
            // the card may have been removed while the request was in flight
            let _ = content.try_set(loaded);
        });
    });

    view! {
        <div class="widget">
            <h3>{kind.title()}</h3>
            <div id=kind.element_id() class="widget-content">
                {move || content_view(content.get())}
            </div>
        </div>
    }
}

fn content_view(content: WidgetContent) -> View {
    match content {
        WidgetContent::Loading => view! { <p class="widget-loading">"Loading..."</p> }.into_view(),
        WidgetContent::Message(text) => view! { <p>{text}</p> }.into_view(),
        WidgetContent::Alerts(alerts) => alerts
            .into_iter()
            .map(|alert| view! { <p class="warning">{alert}</p> })
            .collect_view(),
        WidgetContent::Reading { value, caption } => view! {
            <p class="widget-reading">{value}</p>
            {caption.map(|c| view! { <p>{c}</p> })}
        }
        .into_view(),
        WidgetContent::Detail { headline, lines } => view! {
            {headline.map(|h| view! { <p><strong>{h}</strong></p> })}
            {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
        }
        .into_view(),
    }
}

/// "Current Local Time: HH:MM:SS" in Bangkok time
#[component]
pub fn LocalClock() -> impl IntoView {
    let (text, set_text) = create_signal(String::new());

    every(CLOCK_TICK_MS, move || {
        set_text.set(render::local_time(chrono::Utc::now()));
    });

    view! { <div id="localTime" class="local-time">{text}</div> }
}

/// Same-origin iframe reloaded on a fixed period
#[component]
pub fn RefreshingFrame(src: &'static str, title: &'static str) -> impl IntoView {
    let frame_ref = create_node_ref::<html::Iframe>();

    let reload = move || {
        if let Some(frame) = frame_ref.get_untracked() {
            let reloaded = frame
                .content_window()
                .map(|w| w.location().reload())
                .unwrap_or(Ok(()));
            if let Err(e) = reloaded {
                web_sys::console::warn_1(&e);
                frame.set_src(src);
            }
        }
    };
    match set_interval_with_handle(reload, Duration::from_millis(FRAME_REFRESH_MS)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => web_sys::console::error_1(&e),
    }

    view! { <iframe node_ref=frame_ref src=src title=title loading="lazy" /> }
}
