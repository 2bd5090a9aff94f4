//! Navigation Component
//!
//! Fixed navigation bar with the logo, section links and the mobile menu toggle.

use leptos::*;

use crate::state::view::NAV_LINKS;
use crate::state::{use_page_state, NavEvent, NavTarget};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let page = use_page_state();
    let menu_open = move || page.snapshot.with(|s| s.menu_open);

    view! {
        <nav class="nav-container" class:visible=move || page.chrome_visible.get()>
            // Logo returns home
            <a
                href="#home"
                class="logo"
                on:click=move |ev| {
                    ev.prevent_default();
                    page.dispatch(NavEvent::LinkClicked(NavTarget::Home));
                }
            >
                "Phuket Yacht Club"
            </a>

            <button
                class="mobile-menu-btn"
                aria-label="Toggle menu"
                aria-expanded=move || menu_open().to_string()
                on:click=move |_| page.dispatch(NavEvent::MenuToggled)
            >
                "☰"
            </button>

            <ul class="nav-links" class:open=menu_open>
                {NAV_LINKS
                    .into_iter()
                    .map(|target| view! { <NavLink target=target /> })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(target: NavTarget) -> impl IntoView {
    let page = use_page_state();
    let active = move || page.snapshot.with(|s| s.link_active(target));

    view! {
        <li>
            <a
                href=target.href()
                class="nav-link"
                class:active=active
                on:click=move |ev| {
                    ev.prevent_default();
                    page.dispatch(NavEvent::LinkClicked(target));
                }
            >
                {target.label()}
            </a>
        </li>
    }
}
