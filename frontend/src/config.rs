//! Application configuration.
//!
//! Centralized configuration for the fingerprint frontend. Defaults target a
//! local backend; every endpoint and the request timeout can be overridden at
//! build time through environment variables read with `option_env!`.

/// Base URL of the embedding service.
///
/// Override with `FINGERPRINT_EMBED_URL`.
pub const EMBED_API_URL: &str = match option_env!("FINGERPRINT_EMBED_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:5000",
};

/// Base URL of the decoding service.
///
/// Override with `FINGERPRINT_DECODE_URL`.
pub const DECODE_API_URL: &str = match option_env!("FINGERPRINT_DECODE_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:5001",
};

/// Default request timeout in milliseconds (2 minutes).
///
/// Model inference on the backend can be slow on CPU, so this is generous.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 120_000;

/// Application name, used for page titles.
pub const APP_NAME: &str = "Digital Fingerprint";

/// Advisory MIME filter for the file picker.
pub const ACCEPTED_FILES: &str = "image/*";

/// Upper bound for synthetic progress while a request is pending.
pub const PROGRESS_CAP: f64 = 90.0;

/// Cadence of the synthetic progress animation for one workflow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cadence {
    /// Interval between ticks.
    pub tick_ms: u32,
    /// Largest random step added per tick.
    pub max_step: f64,
}

/// Embed ticks faster with smaller steps.
pub const EMBED_CADENCE: Cadence = Cadence {
    tick_ms: 200,
    max_step: 10.0,
};

pub const DECODE_CADENCE: Cadence = Cadence {
    tick_ms: 250,
    max_step: 12.0,
};

/// Request timeout, `FINGERPRINT_REQUEST_TIMEOUT_MS` or the default.
///
/// `0` disables the timeout.
pub fn request_timeout_ms() -> u32 {
    parse_timeout(option_env!("FINGERPRINT_REQUEST_TIMEOUT_MS"))
}

fn parse_timeout(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
}

/// Join a base URL and a path, tolerating slashes on either side.
pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Public URL of a fingerprinted image served by the embedding service.
///
/// Absolute URLs returned by the backend are used as-is.
pub fn fingerprinted_image_url(base: &str, name: &str) -> String {
    if name.starts_with("http://") || name.starts_with("https://") {
        return name.to_string();
    }
    endpoint(base, &format!("fingerprinted/{}", name.trim_start_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_slashes() {
        assert_eq!(endpoint("http://h:5000", "/api/embed"), "http://h:5000/api/embed");
        assert_eq!(endpoint("http://h:5000/", "api/embed"), "http://h:5000/api/embed");
        assert_eq!(endpoint("http://h:5000//", "//api/decode"), "http://h:5000/api/decode");
    }

    #[test]
    fn test_fingerprinted_url() {
        assert_eq!(
            fingerprinted_image_url("http://127.0.0.1:5000", "abc123.png"),
            "http://127.0.0.1:5000/fingerprinted/abc123.png"
        );
        assert_eq!(
            fingerprinted_image_url("http://127.0.0.1:5000/", "https://cdn.example/x.png"),
            "https://cdn.example/x.png"
        );
    }

    #[test]
    fn test_timeout_parsing() {
        assert_eq!(parse_timeout(None), DEFAULT_REQUEST_TIMEOUT_MS);
        assert_eq!(parse_timeout(Some(" 5000 ")), 5000);
        assert_eq!(parse_timeout(Some("0")), 0);
        assert_eq!(parse_timeout(Some("soon")), DEFAULT_REQUEST_TIMEOUT_MS);
    }

    #[test]
    fn test_cadences_stay_below_cap() {
        assert!(EMBED_CADENCE.max_step < PROGRESS_CAP);
        assert!(DECODE_CADENCE.max_step < PROGRESS_CAP);
        assert_eq!(PROGRESS_CAP, 90.0);
    }

    #[test]
    fn test_cadence_values() {
        assert_eq!(EMBED_CADENCE, Cadence { tick_ms: 200, max_step: 10.0 });
        assert_eq!(DECODE_CADENCE, Cadence { tick_ms: 250, max_step: 12.0 });
    }
}
