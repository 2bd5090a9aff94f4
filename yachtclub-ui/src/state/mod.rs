//! State Management
//!
//! Pure page models plus the reactive page state that ties them to the DOM.

pub mod contact;
pub mod gallery;
pub mod loading;
pub mod page;
pub mod particles;
pub mod view;

pub use page::{provide_page_state, use_page_state, PageState};
pub use view::{NavEvent, NavTarget, Section};
