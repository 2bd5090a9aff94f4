//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod site;
pub mod warnings;
pub mod weather;
