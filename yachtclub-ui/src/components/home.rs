//! Home content: title, water particles and the main call to action.

use leptos::*;

use crate::components::WaterParticles;
use crate::state::{use_page_state, NavEvent};

#[component]
pub fn Home() -> impl IntoView {
    let page = use_page_state();
    let home_ref = create_node_ref::<html::Div>();
    let title_ref = create_node_ref::<html::H1>();
    let visible = move || page.chrome_visible.get() && page.snapshot.with(|s| s.home_visible);

    view! {
        <div id="home" class="home-content" class:visible=visible node_ref=home_ref>
            <h1 class="home-title" node_ref=title_ref>"Phuket Yacht Club"</h1>
            <WaterParticles home_ref=home_ref title_ref=title_ref />
            <p class="home-subtitle">"Sailing, moorings and sundowners on the Andaman Sea"</p>
            <button
                class="premium-button"
                on:click=move |_| page.dispatch(NavEvent::InquireClicked)
            >
                "Plan Your Stay"
            </button>
        </div>
    }
}
