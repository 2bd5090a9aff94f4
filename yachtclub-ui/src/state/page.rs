//! Page State
//!
//! Reactive wrapper around [`NavState`] shared with every component, plus the
//! DOM side of navigation: body scroll lock, smooth scrolling and focus.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use super::contact::ContactForm;
use super::view::{Effect, NavEvent, NavState, PageSnapshot, Section};

/// Scroll container holding the home content and every section
pub const SCROLL_WRAPPER_ID: &str = "main-scrollable-content-wrapper";
/// Body class suppressing background scroll
pub const BODY_LOCK_CLASS: &str = "overlay-open";
/// Delay before scrolling, so the section has become visible and has layout
pub const SCROLL_SETTLE_MS: u32 = 100;
/// Id of the contact form subject field
pub const SUBJECT_FIELD_ID: &str = "subject";

/// Page-wide state provided to all components
#[derive(Clone, Copy)]
pub struct PageState {
    /// Navigation controller
    pub nav: RwSignal<NavState>,
    /// Rendered navigation flags
    pub snapshot: Memo<PageSnapshot>,
    /// Contact form fields
    pub contact: RwSignal<ContactForm>,
    /// Bumped whenever the water particles should be regenerated
    pub particles_epoch: RwSignal<u32>,
    /// Page content revealed after the loading overlay is removed
    pub content_visible: RwSignal<bool>,
    /// Navigation bar and home content faded in
    pub chrome_visible: RwSignal<bool>,
    /// Background renderer started
    pub scene_started: RwSignal<bool>,
}

impl PageState {
    pub fn new() -> Self {
        let nav = create_rw_signal(NavState::new());
        let snapshot = create_memo(move |_| nav.with(NavState::render));

        Self {
            nav,
            snapshot,
            contact: create_rw_signal(ContactForm::default()),
            particles_epoch: create_rw_signal(0),
            content_visible: create_rw_signal(false),
            chrome_visible: create_rw_signal(false),
            scene_started: create_rw_signal(false),
        }
    }

    /// Route a user action through the controller and perform its effects
    pub fn dispatch(&self, event: NavEvent) {
        let mut effects = Vec::new();
        self.nav.update(|nav| effects = nav.handle(event));

        set_body_locked(self.nav.with_untracked(NavState::body_locked));

        for effect in effects {
            self.perform(effect);
        }
    }

    pub fn refresh_particles(&self) {
        self.particles_epoch.update(|epoch| *epoch = epoch.wrapping_add(1));
    }

    fn perform(&self, effect: Effect) {
        match effect {
            Effect::ScrollToTop => scroll_wrapper_to(0.0),
            Effect::ScrollToSection(section) => {
                gloo_timers::callback::Timeout::new(SCROLL_SETTLE_MS, move || {
                    if let Some(top) = section_scroll_top(section) {
                        scroll_wrapper_to(top);
                    }
                })
                .forget();
            }
            Effect::RefreshParticles => self.refresh_particles(),
            Effect::PrefillSubject(subject) => {
                self.contact.update(|form| form.subject = subject.to_string());
            }
            Effect::FocusSubject => {
                gloo_timers::callback::Timeout::new(SCROLL_SETTLE_MS, || {
                    if let Some(field) = element_by_id(SUBJECT_FIELD_ID) {
                        if let Err(e) = field.focus() {
                            web_sys::console::error_1(&e);
                        }
                    }
                })
                .forget();
            }
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create and provide page state
pub fn provide_page_state() {
    provide_context(PageState::new());
}

pub fn use_page_state() -> PageState {
    use_context::<PageState>().expect("PageState not found")
}

fn element_by_id(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn set_body_locked(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let result = if locked {
        classes.add_1(BODY_LOCK_CLASS)
    } else {
        classes.remove_1(BODY_LOCK_CLASS)
    };
    if let Err(e) = result {
        web_sys::console::error_1(&e);
    }
}

/// Offset of a section inside the wrapper, less the navigation bar height
fn section_scroll_top(section: Section) -> Option<f64> {
    let element = element_by_id(section.id())?;
    let document = web_sys::window()?.document()?;
    let nav_height = document
        .query_selector(".nav-container")
        .ok()
        .flatten()
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| nav.offset_height())
        .unwrap_or(0);

    Some(f64::from(element.offset_top() - nav_height))
}

fn scroll_wrapper_to(top: f64) {
    let Some(wrapper) = element_by_id(SCROLL_WRAPPER_ID) else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    wrapper.scroll_to_with_scroll_to_options(&options);
}
