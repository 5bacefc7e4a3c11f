//! Backend and browser services.
//!
//! # Services
//!
//! - [`api`] - Embed and decode calls to the fingerprint backend
//! - [`request`] - Timeout and cancellation for in-flight requests
//! - [`browser`] - File reading, object URLs and downloads

pub mod api;
pub mod browser;
pub mod request;

pub use api::*;
pub use browser::*;
pub use request::*;
