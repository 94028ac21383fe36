//! Reqwest-based webhook chat transport.
//!
//! Production implementation of [`ChatTransport`] speaking the webhook chat
//! contract: one JSON POST per user message, one JSON reply per POST.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::TransportError;
use crate::traits::{ChatReply, ChatTransport};

/// Request body for the webhook chat endpoint.
#[derive(Debug, Serialize)]
struct WebhookRequest<'a> {
    #[serde(rename = "chatInput")]
    chat_input: &'a str,
    #[serde(rename = "sessionId")]
    session_id: &'a str,
}

/// Chat transport posting to a webhook endpoint via reqwest.
///
/// The reply body is JSON; the assistant text is read from the first of
/// `output`, `text`, or `message`, matching what webhook chat backends
/// commonly emit.
#[derive(Debug, Clone)]
pub struct WebhookTransport {
    endpoint: String,
    client: reqwest::Client,
}

impl WebhookTransport {
    /// Create a transport for the given endpoint URL with default settings.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a transport with a custom `reqwest::Client`.
    ///
    /// This allows for advanced configuration like custom timeouts or
    /// connection pools.
    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Convert a reqwest error to a TransportError.
    fn convert_error(err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Connection(err.to_string())
        }
    }

    /// Pull the assistant text out of a webhook reply body.
    fn extract_reply(value: &serde_json::Value) -> Option<String> {
        ["output", "text", "message"]
            .into_iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
            .map(str::to_string)
    }
}

#[async_trait]
impl ChatTransport for WebhookTransport {
    async fn send(&self, text: &str, session_id: &str) -> Result<ChatReply, TransportError> {
        let body = WebhookRequest {
            chat_input: text,
            session_id,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(Self::convert_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                code: status.as_u16(),
            });
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        Self::extract_reply(&value)
            .map(|text| ChatReply { text })
            .ok_or_else(|| TransportError::Decode("reply contains no output text".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_reply_prefers_output() {
        let value = json!({"output": "from output", "text": "from text"});
        assert_eq!(
            WebhookTransport::extract_reply(&value),
            Some("from output".to_string())
        );
    }

    #[test]
    fn test_extract_reply_falls_back() {
        let value = json!({"text": "from text"});
        assert_eq!(
            WebhookTransport::extract_reply(&value),
            Some("from text".to_string())
        );

        let value = json!({"message": "from message"});
        assert_eq!(
            WebhookTransport::extract_reply(&value),
            Some("from message".to_string())
        );
    }

    #[test]
    fn test_extract_reply_missing() {
        let value = json!({"status": "ok"});
        assert_eq!(WebhookTransport::extract_reply(&value), None);

        // Non-string values don't count
        let value = json!({"output": 42});
        assert_eq!(WebhookTransport::extract_reply(&value), None);
    }

    #[test]
    fn test_request_body_field_names() {
        let body = WebhookRequest {
            chat_input: "hi",
            session_id: "s-1",
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""chatInput":"hi""#));
        assert!(json.contains(r#""sessionId":"s-1""#));
    }
}
