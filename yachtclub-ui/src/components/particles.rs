//! Water Particles
//!
//! Droplets scattered over the home title. They are regenerated from live
//! layout whenever the particle epoch changes or the window is resized
//! while the home content is showing.

use leptos::*;

use crate::state::particles::{scatter, Particle, Rect};
use crate::state::use_page_state;

#[component]
pub fn WaterParticles(home_ref: NodeRef<html::Div>, title_ref: NodeRef<html::H1>) -> impl IntoView {
    let page = use_page_state();
    let particles = create_rw_signal(Vec::<Particle>::new());

    create_effect(move |_| {
        page.particles_epoch.track();
        if let (Some(home), Some(title)) = (home_ref.get(), title_ref.get()) {
            let home_rect = home.get_bounding_client_rect();
            let title_rect = title.get_bounding_client_rect();
            particles.set(scatter(
                rect_of(&title_rect),
                rect_of(&home_rect),
                js_sys::Math::random,
            ));
        }
    });

    let resize = window_event_listener(ev::resize, move |_| {
        if page.snapshot.with_untracked(|s| s.home_visible) {
            page.refresh_particles();
        }
    });
    on_cleanup(move || resize.remove());

    view! {
        <div class="water-particles" aria-hidden="true">
            <For
                each=move || particles.get().into_iter().enumerate()
                key=|(idx, particle)| (*idx, particle.x.to_bits(), particle.y.to_bits())
                children=|(_, particle)| {
                    view! { <span class="water-particle" style=particle.style() /> }
                }
            />
        </div>
    }
}

fn rect_of(rect: &web_sys::DomRect) -> Rect {
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}
