//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - Selected file projection
//! - **Result Types** - Embed and decode results
//! - **Error Types** - Frontend error handling

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// File Types
// =============================================================================

/// Plain-data view of a user-selected file.
#[derive(Clone, Debug, PartialEq)]
pub struct FileInfo {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type, empty when unknown
    pub mime: String,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Whether a local preview can be rendered.
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// Human readable size, in megabytes with two decimals.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }
}

/// Anything that can describe itself as a [`FileInfo`].
///
/// Implemented for the browser `File` handle and for `FileInfo` itself, so
/// selection logic runs the same in the browser and in native tests.
pub trait FileLike: Clone {
    fn info(&self) -> FileInfo;
}

impl FileLike for FileInfo {
    fn info(&self) -> FileInfo {
        self.clone()
    }
}

impl FileLike for web_sys::File {
    fn info(&self) -> FileInfo {
        FileInfo::new(self.name(), self.size() as u64, self.type_())
    }
}

/// Local filename used when downloading a fingerprinted image.
pub fn download_name(original: Option<&str>) -> String {
    match original.filter(|n| !n.is_empty()) {
        Some(name) => format!("fingerprinted_{}", name),
        None => "fingerprinted_image".to_string(),
    }
}

// =============================================================================
// Result Types
// =============================================================================

/// Result of a successful embed request.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddedResult {
    /// Absolute URL of the fingerprinted image
    pub image_url: String,
    /// Metadata text echoed by the backend
    pub metadata: Option<String>,
}

impl EmbeddedResult {
    /// Owner and time of embedding, when the metadata has the
    /// `username|YYYY-MM-DD HH:MM:SS` shape.
    pub fn owner(&self) -> Option<EmbeddedOwner> {
        self.metadata.as_deref().and_then(EmbeddedOwner::parse)
    }
}

/// Structured form of the embedded metadata text.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddedOwner {
    pub username: String,
    pub embedded_at: NaiveDateTime,
}

impl EmbeddedOwner {
    pub fn parse(text: &str) -> Option<Self> {
        let (username, timestamp) = text.split_once('|')?;
        let embedded_at =
            NaiveDateTime::parse_from_str(timestamp.trim(), "%Y-%m-%d %H:%M:%S").ok()?;
        Some(Self {
            username: username.to_string(),
            embedded_at,
        })
    }
}

/// Fields the decoder is known to return, in display order.
pub const KNOWN_FIELDS: [&str; 6] = [
    "fingerprint",
    "timestamp",
    "algorithm",
    "security_level",
    "origin",
    "checksum",
];

/// Metadata extracted from a fingerprinted image.
///
/// The backend returns an open object; values that are not strings are kept
/// as their JSON text instead of failing the whole response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct DecodedMetadata {
    entries: BTreeMap<String, String>,
}

impl From<BTreeMap<String, Value>> for DecodedMetadata {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let entries = raw
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect();
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DecodedMetadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl DecodedMetadata {
    /// Fields in display order: known fields first, then extras by key.
    pub fn fields(&self) -> Vec<MetadataField> {
        let known = KNOWN_FIELDS
            .iter()
            .filter_map(|key| self.entries.get_key_value(*key))
            .map(|(k, v)| MetadataField::new(k, v, true));
        let extra = self
            .entries
            .iter()
            .filter(|(k, _)| !KNOWN_FIELDS.contains(&k.as_str()))
            .map(|(k, v)| MetadataField::new(k, v, false));
        known.chain(extra).collect()
    }
}

/// One row of the decoded metadata panel.
#[derive(Clone, Debug, PartialEq)]
pub struct MetadataField {
    pub key: String,
    /// Key with underscores turned into spaces
    pub label: String,
    pub value: String,
    /// False for fields the decoder is not known to produce
    pub known: bool,
}

impl MetadataField {
    fn new(key: &str, value: &str, known: bool) -> Self {
        Self {
            key: key.to_string(),
            label: key.replace('_', " "),
            value: value.to_string(),
            known,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Every variant sends the workflow back to the upload screen with the
/// message displayed.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Submission refused before any request was made.
    Validation(String),
    /// Transport failure (service unreachable, CORS, interrupted transfer).
    Network(String),
    /// The backend answered with a non-success status.
    Server { status: u16, message: String },
    /// The backend answered 2xx with an unexpected body.
    Parse(String),
    /// The request exceeded the configured timeout (milliseconds).
    Timeout(u32),
    /// A browser API call failed.
    Browser(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "{}", msg),
            AppError::Network(msg) => write!(f, "Could not reach the service: {}", msg),
            AppError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            AppError::Parse(msg) => write!(f, "Unexpected response: {}", msg),
            AppError::Timeout(ms) => {
                write!(f, "The service did not answer within {}", duration_label(*ms))
            }
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

fn duration_label(ms: u32) -> String {
    match ms {
        ms if ms < 1000 => format!("{} ms", ms),
        ms if ms % 1000 == 0 => format!("{} seconds", ms / 1000),
        ms => format!("{:.1} seconds", ms as f64 / 1000.0),
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
