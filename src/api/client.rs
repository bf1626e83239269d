//! Provider-bound completion client.

use super::completions;
use super::CompletionClient;
use crate::config::ProviderConfig;
use crate::error::ProviderCallError;
use crate::types::{ChatRequest, ChatResponse, Message};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for OpenAI-compatible chat-completion APIs.
///
/// One instance is built per session; the inner `reqwest::Client` pools
/// connections across turns.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ApiClient {
    /// Build a client from resolved provider configuration.
    pub fn new(provider: &ProviderConfig, timeout: Duration) -> Self {
        Self {
            http: build_http_client(timeout),
            base_url: provider.base_url.trim_end_matches('/').to_string(),
            api_key: provider.api_key.trim().to_string(),
            model: provider.model.clone(),
        }
    }

    /// Send one chat completion request and return the raw response.
    pub async fn chat(&self, messages: &[Message]) -> Result<ChatResponse, ProviderCallError> {
        let request = ChatRequest {
            model: &self.model,
            messages,
        };
        debug!(
            model = %self.model,
            messages = messages.len(),
            base_url = %self.base_url,
            "dispatching chat completion"
        );
        completions::request(&self.http, &self.base_url, &request, Some(&self.api_key)).await
    }
}

#[async_trait]
impl CompletionClient for ApiClient {
    async fn complete(&self, transcript: &[Message]) -> Result<String, ProviderCallError> {
        let result = self.chat(transcript).await.and_then(extract_reply);
        if let Err(err) = &result {
            warn!(model = %self.model, error = %err, "completion call failed");
        }
        result
    }
}

/// Build an HTTP client with timeout applied.
fn build_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Pull the first choice's text out of a decoded response.
fn extract_reply(response: ChatResponse) -> Result<String, ProviderCallError> {
    if let Some(usage) = &response.usage {
        debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "completion usage"
        );
    }
    if let Some(reason) = response
        .choices
        .first()
        .and_then(|choice| choice.finish_reason.as_deref())
    {
        debug!(finish_reason = reason, "completion finished");
    }
    if response.choices.is_empty() {
        return Err(ProviderCallError::new(
            "provider response contained no choices",
        ));
    }
    response
        .first_content()
        .map(str::to_string)
        .ok_or_else(|| ProviderCallError::new("provider response carried no message content"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Provider;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    fn provider_at(base_url: String, api_key: &str) -> ProviderConfig {
        ProviderConfig {
            provider: Provider::OpenAi,
            api_key: api_key.to_string(),
            base_url,
            model: "gpt-3.5-turbo".to_string(),
        }
    }

    /// Read one HTTP/1.1 request (headers plus Content-Length body).
    async fn read_http_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream.read(&mut chunk).await.expect("read request");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            let Some(header_end) = text.find("\r\n\r\n") else {
                continue;
            };
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        )
    }

    /// Serve exactly one canned response and hand back the raw request.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let request = read_http_request(&mut stream).await;
            let _ = stream
                .write_all(http_response(status_line, body).as_bytes())
                .await;
            request
        });
        (format!("http://{addr}/v1/"), server)
    }

    #[tokio::test]
    async fn complete_returns_first_choice_and_sends_transcript() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"id":"ok","choices":[{"index":0,"message":{"role":"assistant","content":"Overfitting is..."},"finish_reason":"stop"},{"index":1,"message":{"role":"assistant","content":"ignored"}}]}"#,
        )
        .await;

        let client = ApiClient::new(&provider_at(base_url, "sk-test"), Duration::from_secs(3));
        let transcript = vec![Message::system("S"), Message::user("What is overfitting?")];
        let reply = client.complete(&transcript).await.expect("reply");
        assert_eq!(reply, "Overfitting is...");

        let request = server.await.expect("server task");
        assert!(
            request.starts_with("POST /v1/chat/completions "),
            "unexpected request line: {request}"
        );
        assert!(
            request
                .to_ascii_lowercase()
                .contains("authorization: bearer sk-test"),
            "missing bearer header: {request}"
        );
        let body = request.split("\r\n\r\n").nth(1).expect("body");
        let json: serde_json::Value = serde_json::from_str(body).expect("json body");
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "S");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "What is overfitting?");
    }

    #[tokio::test]
    async fn empty_api_key_omits_authorization_header() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":"hi"}}]}"#,
        )
        .await;
        let client = ApiClient::new(&provider_at(base_url, ""), Duration::from_secs(3));
        client
            .complete(&[Message::system("S"), Message::user("hello")])
            .await
            .expect("reply");
        let request = server.await.expect("server task");
        assert!(
            !request.to_ascii_lowercase().contains("authorization:"),
            "unexpected auth header: {request}"
        );
    }

    #[tokio::test]
    async fn auth_rejection_surfaces_status_and_body() {
        let (base_url, _server) = serve_once(
            "401 Unauthorized",
            r#"{"error":{"message":"Incorrect API key provided"}}"#,
        )
        .await;
        let client = ApiClient::new(&provider_at(base_url, "bad"), Duration::from_secs(3));
        let err = client
            .complete(&[Message::system("S"), Message::user("hello")])
            .await
            .expect_err("401 should fail");
        let text = err.to_string();
        assert!(text.contains("401"), "got: {text}");
        assert!(text.contains("Incorrect API key"), "got: {text}");
    }

    #[tokio::test]
    async fn rate_limit_is_not_retried() {
        let (base_url, _server) = serve_once("429 Too Many Requests", r#"{"error":"rate"}"#).await;
        let client = ApiClient::new(&provider_at(base_url, "k"), Duration::from_secs(3));
        let err = client
            .complete(&[Message::system("S"), Message::user("hello")])
            .await
            .expect_err("429 should fail without retry");
        assert!(err.to_string().contains("429"), "got: {err}");
    }

    #[tokio::test]
    async fn empty_choices_is_an_error() {
        let (base_url, _server) = serve_once("200 OK", r#"{"id":"x","choices":[]}"#).await;
        let client = ApiClient::new(&provider_at(base_url, "k"), Duration::from_secs(3));
        let err = client
            .complete(&[Message::system("S")])
            .await
            .expect_err("no choices should fail");
        assert!(err.to_string().contains("no choices"), "got: {err}");
    }

    #[tokio::test]
    async fn partial_usage_still_returns_reply() {
        let (base_url, _server) = serve_once(
            "200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":"Overfitting is..."},"finish_reason":"stop"}],"usage":{"prompt_tokens":10,"completion_tokens":5}}"#,
        )
        .await;
        let client = ApiClient::new(&provider_at(base_url, "k"), Duration::from_secs(3));
        let reply = client
            .complete(&[Message::system("S"), Message::user("What is overfitting?")])
            .await
            .expect("reply despite partial usage");
        assert_eq!(reply, "Overfitting is...");
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let (base_url, _server) = serve_once("200 OK", "not json at all").await;
        let client = ApiClient::new(&provider_at(base_url, "k"), Duration::from_secs(3));
        let err = client
            .complete(&[Message::system("S")])
            .await
            .expect_err("bad json should fail");
        assert!(!err.message().is_empty());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(
            &provider_at(format!("http://{addr}"), "k"),
            Duration::from_secs(3),
        );
        let err = client
            .complete(&[Message::system("S")])
            .await
            .expect_err("connection refused expected");
        assert!(err.to_string().starts_with("http:"), "got: {err}");
    }

    #[tokio::test]
    async fn api_client_respects_timeout_policy() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Accept one connection and keep it open so the client must time out.
        let _accept = tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.expect("accept");
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let client = ApiClient::new(
            &provider_at(format!("http://{addr}"), "k"),
            Duration::from_millis(50),
        );
        let err = client
            .complete(&[Message::user("hello")])
            .await
            .expect_err("timeout expected");
        assert!(err.to_string().contains("timed out"), "got: {err}");
    }
}
