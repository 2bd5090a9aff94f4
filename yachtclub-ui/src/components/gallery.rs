//! Gallery Component
//!
//! Image grid with a lightbox. Tiles open on click, Enter or Space; the
//! lightbox closes on click or Escape. Broken images fall back to a placeholder.

use leptos::*;

use crate::state::gallery::{
    is_activation_key, GalleryImage, Lightbox, GALLERY_IMAGES, PLACEHOLDER_SRC,
};

#[component]
pub fn GalleryGrid() -> impl IntoView {
    let lightbox = create_rw_signal(Lightbox::default());

    let escape = window_event_listener(ev::keydown, move |ev| {
        if lightbox.with_untracked(Lightbox::is_open) {
            lightbox.update(|l| {
                l.on_key(&ev.key());
            });
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div class="gallery-grid">
            {GALLERY_IMAGES
                .into_iter()
                .enumerate()
                .map(|(index, image)| {
                    view! { <GalleryTile index=index image=image lightbox=lightbox /> }
                })
                .collect_view()}
        </div>

        {move || {
            lightbox.get().image().map(|image| {
                view! {
                    <div
                        class="lightbox"
                        role="dialog"
                        aria-modal="true"
                        aria-label=image.alt
                        on:click=move |_| lightbox.update(Lightbox::dismiss)
                    >
                        <FallbackImage image=image />
                    </div>
                }
            })
        }}
    }
}

#[component]
fn GalleryTile(index: usize, image: GalleryImage, lightbox: RwSignal<Lightbox>) -> impl IntoView {
    let open = move || {
        lightbox.update(|l| {
            l.activate(index);
        })
    };

    view! {
        <div
            class="gallery-item"
            tabindex="0"
            role="button"
            aria-label=format!("View image: {}", image.alt)
            on:click=move |_| open()
            on:keydown=move |ev| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    open();
                }
            }
        >
            <FallbackImage image=image />
        </div>
    }
}

/// Image that swaps to the placeholder if it fails to load
#[component]
fn FallbackImage(image: GalleryImage) -> impl IntoView {
    let failed = create_rw_signal(false);

    view! {
        <img
            src=move || if failed.get() { PLACEHOLDER_SRC } else { image.src }
            alt=image.alt
            loading="lazy"
            on:error=move |_| failed.set(true)
        />
    }
}
