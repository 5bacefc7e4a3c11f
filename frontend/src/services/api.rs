//! HTTP client for the fingerprint embedding and decoding services.
//!
//! Both endpoints take a multipart form and answer JSON. Non-success statuses
//! are never treated as partial success: they become [`AppError::Server`]
//! carrying the backend's `error` message when it sent one.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use web_sys::{AbortSignal, File, FormData};

use crate::config::{endpoint, fingerprinted_image_url};
use crate::types::{AppError, AppResult, DecodedMetadata, EmbeddedResult};

/// Body of a successful `/api/embed` call.
#[derive(Debug, Clone, Deserialize)]
struct EmbedResponse {
    /// File name under `/fingerprinted/`
    fingerprinted_image: String,
    #[serde(default, alias = "metadata")]
    embedded_metadata: Option<String>,
}

/// Body of a successful `/api/decode` call.
#[derive(Debug, Clone, Deserialize)]
struct DecodeResponse {
    decoded_data: DecodedMetadata,
}

/// Embed a fingerprint for `username` into `image`.
pub async fn embed_fingerprint(
    image: File,
    username: String,
    base_url: &str,
    signal: AbortSignal,
) -> AppResult<EmbeddedResult> {
    let form = FormData::new().map_err(|e| AppError::Browser(format!("{:?}", e)))?;
    form.append_with_blob("image", &image)
        .map_err(|e| AppError::Browser(format!("Failed to append image: {:?}", e)))?;
    form.append_with_str("username", &username)
        .map_err(|e| AppError::Browser(format!("Failed to append username: {:?}", e)))?;

    let reply = post_form(&endpoint(base_url, "/api/embed"), form, &signal).await?;
    let response: EmbedResponse = reply.into_json()?;
    Ok(embedded_result(response, base_url))
}

/// Extract the fingerprint metadata carried by `image`.
pub async fn decode_fingerprint(
    image: File,
    base_url: &str,
    signal: AbortSignal,
) -> AppResult<DecodedMetadata> {
    let form = FormData::new().map_err(|e| AppError::Browser(format!("{:?}", e)))?;
    form.append_with_blob("image", &image)
        .map_err(|e| AppError::Browser(format!("Failed to append image: {:?}", e)))?;

    let reply = post_form(&endpoint(base_url, "/api/decode"), form, &signal).await?;
    let response: DecodeResponse = reply.into_json()?;
    Ok(response.decoded_data)
}

fn embedded_result(response: EmbedResponse, base_url: &str) -> EmbeddedResult {
    EmbeddedResult {
        image_url: fingerprinted_image_url(base_url, &response.fingerprinted_image),
        metadata: response.embedded_metadata.filter(|m| !m.is_empty()),
    }
}

/// Raw HTTP reply, read fully before interpretation.
struct Reply {
    status: u16,
    status_text: String,
    body: String,
}

impl Reply {
    fn into_json<T: DeserializeOwned>(self) -> AppResult<T> {
        if !(200..300).contains(&self.status) {
            return Err(AppError::Server {
                status: self.status,
                message: server_message(&self.body, &self.status_text),
            });
        }
        serde_json::from_str(&self.body).map_err(|e| AppError::Parse(e.to_string()))
    }
}

async fn post_form(url: &str, form: FormData, signal: &AbortSignal) -> AppResult<Reply> {
    log::debug!("📤 POST {}", url);

    let request = Request::post(url)
        .abort_signal(Some(signal))
        .body(form)
        .map_err(|e| AppError::Browser(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    let status = response.status();
    let status_text = response.status_text();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    log::debug!("📥 {} answered {}", url, status);
    Ok(Reply {
        status,
        status_text,
        body,
    })
}

/// Best message for a failed response: the JSON `error` field, the raw body,
/// then the status text.
fn server_message(body: &str, status_text: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(msg)) = map.get("error") {
            return msg.clone();
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() <= 200 {
        return trimmed.to_string();
    }
    if status_text.is_empty() {
        "Request failed".to_string()
    } else {
        status_text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16, body: &str) -> Reply {
        Reply {
            status,
            status_text: "Internal Server Error".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_embed_response() {
        let json = r#"{
            "fingerprinted_image": "abc123.png",
            "embedded_metadata": "user:alice;ts:2024"
        }"#;
        let response: EmbedResponse = reply(200, json).into_json().unwrap();
        let result = embedded_result(response, "http://127.0.0.1:5000");

        assert_eq!(result.image_url, "http://127.0.0.1:5000/fingerprinted/abc123.png");
        assert_eq!(result.metadata.as_deref(), Some("user:alice;ts:2024"));
    }

    #[test]
    fn test_embed_response_metadata_alias() {
        let json = r#"{
            "fingerprinted_image": "fingerprinted_photo.png",
            "metadata": "alice|2024-01-01 00:00:00"
        }"#;
        let response: EmbedResponse = reply(200, json).into_json().unwrap();
        let result = embedded_result(response, "http://127.0.0.1:5000/");
        assert_eq!(result.metadata.as_deref(), Some("alice|2024-01-01 00:00:00"));
        assert_eq!(result.owner().unwrap().username, "alice");
    }

    #[test]
    fn test_embed_response_without_metadata() {
        let json = r#"{"fingerprinted_image": "x.png", "embedded_metadata": ""}"#;
        let response: EmbedResponse = reply(200, json).into_json().unwrap();
        assert!(embedded_result(response, "http://h").metadata.is_none());
    }

    #[test]
    fn test_decode_response() {
        let json = r#"{
            "decoded_data": {
                "fingerprint": "F-991",
                "timestamp": "2024-01-01T00:00:00Z",
                "algorithm": "SHA256-LSB",
                "security_level": "high",
                "origin": "embed-service",
                "checksum": "9f8a"
            }
        }"#;
        let response: DecodeResponse = reply(200, json).into_json().unwrap();
        let fields = response.decoded_data.fields();

        assert_eq!(fields.len(), 6);
        assert!(fields.iter().all(|f| f.known));
        assert_eq!(fields[0].value, "F-991");
        assert_eq!(fields[3].label, "security level");
        assert_eq!(fields[5].value, "9f8a");
    }

    #[test]
    fn test_server_error_uses_backend_message() {
        let err = reply(400, r#"{"error": "No image uploaded"}"#)
            .into_json::<DecodeResponse>()
            .unwrap_err();
        assert_eq!(
            err,
            AppError::Server {
                status: 400,
                message: "No image uploaded".to_string()
            }
        );
    }

    #[test]
    fn test_server_error_with_json_success_shape() {
        // A well-formed body does not rescue an error status.
        let err = reply(500, r#"{"fingerprinted_image": "x.png"}"#)
            .into_json::<EmbedResponse>()
            .unwrap_err();
        assert!(matches!(err, AppError::Server { status: 500, .. }));
    }

    #[test]
    fn test_server_error_falls_back_to_status_text() {
        let err = reply(502, "   ").into_json::<DecodeResponse>().unwrap_err();
        assert_eq!(
            err,
            AppError::Server {
                status: 502,
                message: "Internal Server Error".to_string()
            }
        );
    }

    #[test]
    fn test_non_json_body_is_parse_error() {
        let err = reply(200, "<html>proxy page</html>")
            .into_json::<DecodeResponse>()
            .unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));

        let err = reply(200, r#"{"unexpected": true}"#)
            .into_json::<EmbedResponse>()
            .unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
