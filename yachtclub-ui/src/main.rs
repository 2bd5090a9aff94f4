//! Phuket Yacht Club
//!
//! Single-page site built with Leptos (WASM).
//!
//! # Features
//!
//! - Home view with one overlay section shown at a time
//! - Animated sea and sky background
//! - Gallery with lightbox
//! - Sea & weather dashboard fed by the server's weather proxy
//! - Locally validated contact form
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It is served by the `yachtclub` server, which also proxies
//! the weather providers and scrapes the warnings page.

use leptos::*;

mod api;
mod app;
mod components;
mod scene;
mod state;
mod widgets;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
