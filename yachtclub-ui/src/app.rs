//! App Root Component
//!
//! Provides page state and lays out the overlay, background and page content.

use leptos::*;

use crate::components::{Background, Home, LoadingScreen, Nav, Sections};
use crate::state::page::SCROLL_WRAPPER_ID;
use crate::state::{provide_page_state, use_page_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_page_state();
    let page = use_page_state();

    view! {
        <LoadingScreen />
        <Background />

        <div
            id="page-content"
            class="page-content"
            class:visible=move || page.content_visible.get()
            aria-hidden=move || (!page.content_visible.get()).to_string()
        >
            <Nav />

            <main id=SCROLL_WRAPPER_ID class="scroll-wrapper">
                <Home />
                <Sections />
                <Footer />
            </main>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"Phuket Yacht Club · Ao Chalong, Phuket, Thailand"</p>
        </footer>
    }
}
