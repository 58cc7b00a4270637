//! Chat proxy - forwards `POST /api/chat` to the upstream LLM API.
//!
//! The one wire boundary in the repo. A single non-retried upstream call
//! per request: any upstream failure maps to a fixed 500 response. No
//! authentication, no rate limiting, no streaming.
//!
//! Routing and body handling are pure functions over an injected
//! [`UpstreamChat`], so the component is testable without a WASM host.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// System prompt sent with every upstream call.
const SYSTEM_PROMPT: &str = "You are a friendly sustainable-fashion stylist. \
Suggest outfits from ethical, low-impact materials and explain the \
sustainability story behind each recommendation in one short paragraph.";

/// Fixed body returned for any upstream failure.
const UPSTREAM_FAILURE_BODY: &str = r#"{"error":"Failed to connect to AI"}"#;

/// Incoming chat request body.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
}

/// Outgoing reply body.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    /// The assistant's reply.
    pub reply: String,
}

/// The upstream LLM call, injected so the handler is testable.
#[async_trait(?Send)]
pub trait UpstreamChat {
    /// Send one completion request. Errors are terminal; the proxy never
    /// retries.
    async fn complete(&self, system_prompt: &str, message: &str) -> Result<String>;
}

/// An HTTP response the host adapter writes out.
#[derive(Debug, PartialEq, Eq)]
pub struct ProxyResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ProxyResponse {
    fn json(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Handle one request to the proxy.
pub async fn handle_request(
    method: &str,
    path: &str,
    body: &[u8],
    upstream: &impl UpstreamChat,
) -> ProxyResponse {
    if path != "/api/chat" {
        return ProxyResponse::json(404, r#"{"error":"Not found"}"#);
    }
    if method != "POST" {
        return ProxyResponse::json(405, r#"{"error":"Method not allowed"}"#);
    }

    let request: ChatRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(_) => return ProxyResponse::json(400, r#"{"error":"Invalid request body"}"#),
    };

    match upstream.complete(SYSTEM_PROMPT, &request.message).await {
        Ok(reply) => {
            let body = serde_json::to_vec(&ChatReply { reply })
                .unwrap_or_else(|_| UPSTREAM_FAILURE_BODY.as_bytes().to_vec());
            ProxyResponse::json(200, body)
        }
        Err(_) => ProxyResponse::json(500, UPSTREAM_FAILURE_BODY),
    }
}

/// Spin HTTP component wiring (wasm32 only).
#[cfg(target_arch = "wasm32")]
mod component {
    use super::*;
    use spin_sdk::http::{IntoResponse, Method, Request, Response};
    use spin_sdk::http_component;

    /// Upstream call over Spin's outbound HTTP host.
    struct LlmUpstream {
        endpoint: String,
    }

    #[async_trait(?Send)]
    impl UpstreamChat for LlmUpstream {
        async fn complete(&self, system_prompt: &str, message: &str) -> Result<String> {
            #[derive(Serialize)]
            struct UpstreamRequest<'a> {
                system: &'a str,
                prompt: &'a str,
            }

            #[derive(Deserialize)]
            struct UpstreamReply {
                completion: String,
            }

            let body = serde_json::to_vec(&UpstreamRequest {
                system: system_prompt,
                prompt: message,
            })?;

            let request = Request::builder()
                .method(Method::Post)
                .uri(&self.endpoint)
                .header("content-type", "application/json")
                .body(body)
                .build();

            let response: Response = spin_sdk::http::send(request)
                .await
                .map_err(|e| anyhow::anyhow!("upstream send failed: {e}"))?;

            if !(200..300).contains(response.status()) {
                anyhow::bail!("upstream returned status {}", response.status());
            }

            let reply: UpstreamReply = serde_json::from_slice(response.body())?;
            Ok(reply.completion)
        }
    }

    fn method_name(method: &Method) -> &'static str {
        match method {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            _ => "OTHER",
        }
    }

    #[http_component]
    async fn handle_chat(req: Request) -> impl IntoResponse {
        let upstream = LlmUpstream {
            endpoint: std::env::var("LLM_API_URL")
                .unwrap_or_else(|_| "https://api.anthropic.com/v1/complete".to_string()),
        };

        let result = handle_request(
            method_name(req.method()),
            req.path(),
            req.body(),
            &upstream,
        )
        .await;

        Response::builder()
            .status(result.status)
            .header("content-type", "application/json")
            .body(result.body)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeUpstream {
        reply: Result<String, ()>,
    }

    #[async_trait(?Send)]
    impl UpstreamChat for FakeUpstream {
        async fn complete(&self, system_prompt: &str, message: &str) -> Result<String> {
            assert!(!system_prompt.is_empty());
            assert!(!message.is_empty());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(()) => anyhow::bail!("upstream down"),
            }
        }
    }

    #[tokio::test]
    async fn test_success_returns_reply() {
        let upstream = FakeUpstream {
            reply: Ok("Try the linen wrap dress.".to_string()),
        };
        let response = handle_request(
            "POST",
            "/api/chat",
            br#"{"message":"what should I wear?"}"#,
            &upstream,
        )
        .await;
        assert_eq!(response.status, 200);
        let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(body["reply"], "Try the linen wrap dress.");
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_fixed_500() {
        let upstream = FakeUpstream { reply: Err(()) };
        let response =
            handle_request("POST", "/api/chat", br#"{"message":"hi"}"#, &upstream).await;
        assert_eq!(response.status, 500);
        assert_eq!(response.body, br#"{"error":"Failed to connect to AI"}"#);
    }

    #[tokio::test]
    async fn test_non_post_rejected() {
        let upstream = FakeUpstream {
            reply: Ok("unused".to_string()),
        };
        let response = handle_request("GET", "/api/chat", b"", &upstream).await;
        assert_eq!(response.status, 405);
    }

    #[tokio::test]
    async fn test_bad_body_rejected() {
        let upstream = FakeUpstream {
            reply: Ok("unused".to_string()),
        };
        let response = handle_request("POST", "/api/chat", b"not json", &upstream).await;
        assert_eq!(response.status, 400);
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let upstream = FakeUpstream {
            reply: Ok("unused".to_string()),
        };
        let response = handle_request("POST", "/api/other", b"{}", &upstream).await;
        assert_eq!(response.status, 404);
    }
}
