//! Content Sections
//!
//! Each section is an overlay panel shown on its own; the close button
//! returns to the home view.

use leptos::*;

use crate::components::{ContactFormPanel, Dashboard, GalleryGrid};
use crate::state::{use_page_state, NavEvent, Section};

/// Wrapper shared by every section
#[component]
pub fn ContentSection(section: Section, children: Children) -> impl IntoView {
    let page = use_page_state();
    let active = move || page.snapshot.with(|s| s.section(section).active);

    view! {
        <section
            id=section.id()
            class="content-section"
            class:active=active
            aria-hidden=move || (!active()).to_string()
        >
            <button
                class="close-btn"
                data-target=section.id()
                aria-label="Close section"
                on:click=move |_| page.dispatch(NavEvent::CloseClicked(section))
            >
                "×"
            </button>
            <h2 class="section-title">{section.title()}</h2>
            {children()}
        </section>
    }
}

/// Call-to-action that opens the contact form with the inquiry subject
#[component]
pub fn InquireButton(#[prop(default = "Book Now")] label: &'static str) -> impl IntoView {
    let page = use_page_state();

    view! {
        <button class="book-btn" on:click=move |_| page.dispatch(NavEvent::InquireClicked)>
            {label}
        </button>
    }
}

#[component]
pub fn Sections() -> impl IntoView {
    view! {
        <ContentSection section=Section::About>
            <p>
                "Tucked into Ao Chalong bay on Phuket's sheltered east coast, the club has welcomed "
                "cruising sailors, racing crews and weekend skippers for decades. Moorings, a "
                "slipway and a shaded clubhouse make it an easy place to step ashore."
            </p>
            <p>
                "Members and visiting yachts share the bar, the kitchen and the view of the bay at sunset."
            </p>
        </ContentSection>

        <ContentSection section=Section::Accommodation>
            <div class="room-grid">
                <div class="room-card">
                    <h3>"Harbour Room"</h3>
                    <p>"Double room above the clubhouse with views across the moorings."</p>
                    <InquireButton />
                </div>
                <div class="room-card">
                    <h3>"Garden Bungalow"</h3>
                    <p>"Quiet bungalow a short walk from the pier, suited to crews between passages."</p>
                    <InquireButton />
                </div>
            </div>
        </ContentSection>

        <ContentSection section=Section::YachtClub>
            <p>
                "Weekly club races run through the dry season, with regattas around the "
                "southern islands and help on hand for visiting crews arranging clearance."
            </p>
            <ul class="feature-list">
                <li>"Swing moorings and dinghy landing"</li>
                <li>"Race calendar and crew board"</li>
                <li>"Clubhouse restaurant and bar"</li>
            </ul>
            <InquireButton label="Enquire About Membership" />
        </ContentSection>

        <ContentSection section=Section::Gallery>
            <GalleryGrid />
        </ContentSection>

        <ContentSection section=Section::Weather>
            <Dashboard />
        </ContentSection>

        <ContentSection section=Section::Contact>
            <ContactFormPanel />
        </ContentSection>
    }
}
