//! Routed pages.
//!
//! - [`LandingPage`] - `/`, navigation hub
//! - [`EmbedPage`] - `/embed`, embed a fingerprint into an image
//! - [`DecodePage`] - `/decode`, extract and verify a fingerprint
//!
//! Both workflow pages drive a [`crate::workflow::Workflow`] through a
//! [`WorkflowDriver`].

mod decode;
mod driver;
mod embed;
mod landing;

pub use decode::*;
pub use driver::*;
pub use embed::*;
pub use landing::*;
