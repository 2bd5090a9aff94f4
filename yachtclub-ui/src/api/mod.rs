//! API Client
//!
//! Same-origin requests to the site server.

pub mod client;
