//! Digital Fingerprint - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for embedding digital fingerprints into images and
//! decoding them back. The fingerprinting itself runs in an external HTTP
//! service; this crate owns the pages, the upload flow and the request
//! lifecycle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (Router)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /        LandingPage   (Hero, links, feature cards)         │
//! │  /embed   EmbedPage     (UploadZone → LoadingSpinner → image)│
//! │  /decode  DecodePage    (UploadZone → LoadingSpinner → data) │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoints, timeout and progress cadence
//! - [`types`] - Common types (FileInfo, results, AppError)
//! - [`workflow`] - Upload / processing / complete state machine
//! - [`selection`] - File selection and preview bookkeeping
//! - [`components`] - UI components (UploadZone, LoadingSpinner, etc.)
//! - [`pages`] - Routed pages and the workflow driver
//! - [`services`] - Backend calls, request guards, browser helpers

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod pages;
pub mod selection;
pub mod services;
pub mod types;
pub mod workflow;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    FileInfo, FileLike,
    // Results
    DecodedMetadata, EmbeddedOwner, EmbeddedResult, MetadataField,
    // Errors
    AppError, AppResult,
};

// State machines
pub use selection::Selection;
pub use workflow::{Phase, SubmissionProgress, Workflow};

// Components
pub use components::*;

// Pages
pub use pages::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Mount the application; called from the trunk binary.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Digital Fingerprint - Starting Leptos App");
    log::info!("   embed service:  {}", EMBED_API_URL);
    log::info!("   decode service: {}", DECODE_API_URL);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <main class="page">
                <Routes>
                    <Route path="/" view=LandingPage/>
                    <Route path="/embed" view=EmbedPage/>
                    <Route path="/decode" view=DecodePage/>
                    // Unknown paths land on the home page
                    <Route path="/*any" view=LandingPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
