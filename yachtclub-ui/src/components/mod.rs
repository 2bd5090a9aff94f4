//! UI Components
//!
//! Leptos components for the single-page site.

pub mod background;
pub mod contact_form;
pub mod gallery;
pub mod home;
pub mod loading;
pub mod nav;
pub mod particles;
pub mod section;
pub mod widget;

pub use background::Background;
pub use contact_form::ContactFormPanel;
pub use gallery::GalleryGrid;
pub use home::Home;
pub use loading::LoadingScreen;
pub use nav::Nav;
pub use particles::WaterParticles;
pub use section::Sections;
pub use widget::Dashboard;
