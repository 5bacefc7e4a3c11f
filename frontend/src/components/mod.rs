//! UI Components for the fingerprint application.
//!
//! # Layout Components
//! - [`PageHeader`] - Back button and title of the workflow pages
//! - [`Hero`] - Landing headline
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadZone`] - Image selection with drag & drop and preview
//! - [`LoadingSpinner`] - Progress indicator while a request is pending

mod footer;
mod header;
mod hero;
mod spinner;
mod upload_zone;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use spinner::*;
pub use upload_zone::*;
