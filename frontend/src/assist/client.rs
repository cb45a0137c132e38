use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

pub const NO_CANDIDATES_FALLBACK: &str = "Sorry, I couldn't generate a response. Please try again.";
pub const ERROR_FALLBACK: &str =
    "An error occurred while contacting the AI. Please check the console for details.";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("API call failed with status: {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("first candidate carried no text")]
    MissingText,
}

#[derive(Serialize, Debug)]
pub struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize, Debug)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize, Debug)]
struct RequestPart {
    text: String,
}

impl GenerateRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt.to_string() }],
            }],
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct GenerateResponse {
    // Missing and `null` both mean no candidates.
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// `Ok(None)` when there are no candidates at all. A first candidate
    /// without text is treated as a malformed body.
    pub fn into_first_text(self) -> Result<Option<String>, GenerateError> {
        let Some(candidate) = self.candidates.unwrap_or_default().into_iter().next() else {
            return Ok(None);
        };
        candidate
            .content
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .map(Some)
            .ok_or(GenerateError::MissingText)
    }
}

pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

pub trait Transport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> LocalBoxFuture<'a, Result<RawResponse, GenerateError>>;
}

pub struct HttpTransport;

impl Transport for HttpTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> LocalBoxFuture<'a, Result<RawResponse, GenerateError>> {
        async move {
            let response = Request::post(url)
                .header("Content-Type", "application/json")
                .body(body)
                .send()
                .await?;
            let status = response.status();
            let body = response.text().await?;
            Ok(RawResponse { status, body })
        }
        .boxed_local()
    }
}

/// Thin wrapper around the generateContent endpoint. Shared with the page
/// through a yew context, so clones are cheap and compare by transport.
#[derive(Clone)]
pub struct GeminiClient {
    endpoint: String,
    transport: Rc<dyn Transport>,
}

impl PartialEq for GeminiClient {
    fn eq(&self, other: &Self) -> bool {
        self.endpoint == other.endpoint && Rc::ptr_eq(&self.transport, &other.transport)
    }
}

impl GeminiClient {
    pub fn new(endpoint: String, transport: Rc<dyn Transport>) -> Self {
        Self { endpoint, transport }
    }

    pub fn from_config() -> Self {
        Self::new(
            config::generate_content_url(config::api_key()),
            Rc::new(HttpTransport),
        )
    }

    pub async fn try_generate(&self, prompt: &str) -> Result<Option<String>, GenerateError> {
        let body = serde_json::to_string(&GenerateRequest::from_prompt(prompt))?;
        let raw = self.transport.post_json(&self.endpoint, body).await?;
        if !(200..300).contains(&raw.status) {
            return Err(GenerateError::Status(raw.status));
        }
        let response: GenerateResponse = serde_json::from_str(&raw.body)?;
        response.into_first_text()
    }

    /// Never fails: every error is logged and replaced by a fixed message.
    pub async fn generate(&self, prompt: &str) -> String {
        match self.try_generate(prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!("Gemini returned no candidates");
                NO_CANDIDATES_FALLBACK.to_string()
            }
            Err(e) => {
                error!("Gemini API call error: {}", e);
                ERROR_FALLBACK.to_string()
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::mock::{MockTransport, Reply};
    use super::*;
    use futures::executor::block_on;

    fn client_with(reply: Reply) -> (GeminiClient, Rc<MockTransport>) {
        let transport = MockTransport::new(reply);
        let client = GeminiClient::new("https://example.test/generate".to_string(), transport.clone());
        (client, transport)
    }

    #[test]
    fn request_body_has_contents_parts_text_shape() {
        let body = serde_json::to_value(GenerateRequest::from_prompt("hello")).unwrap();
        assert_eq!(body, serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]}));
    }

    #[test]
    fn returns_first_candidate_text() {
        let (client, transport) = client_with(Reply::Respond(
            200,
            r#"{"candidates":[{"content":{"parts":[{"text":"X"}]}},{"content":{"parts":[{"text":"Y"}]}}]}"#,
        ));
        assert_eq!(block_on(client.generate("p")), "X");

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://example.test/generate");
        assert!(calls[0].1.contains(r#""text":"p""#));
    }

    #[test]
    fn extra_response_fields_are_ignored() {
        let (client, _) = client_with(Reply::Respond(
            200,
            r#"{"candidates":[{"content":{"parts":[{"text":"X"}],"role":"model"},"finishReason":"STOP"}],"usageMetadata":{}}"#,
        ));
        assert_eq!(block_on(client.generate("p")), "X");
    }

    #[test]
    fn empty_candidates_give_no_candidates_fallback() {
        let (client, _) = client_with(Reply::Respond(200, r#"{"candidates":[]}"#));
        assert_eq!(block_on(client.generate("p")), NO_CANDIDATES_FALLBACK);
    }

    #[test]
    fn missing_candidates_give_no_candidates_fallback() {
        let (client, _) = client_with(Reply::Respond(200, r#"{"promptFeedback":{}}"#));
        assert_eq!(block_on(client.generate("p")), NO_CANDIDATES_FALLBACK);
    }

    #[test]
    fn null_candidates_give_no_candidates_fallback() {
        let (client, _) = client_with(Reply::Respond(200, r#"{"candidates":null}"#));
        assert!(matches!(block_on(client.try_generate("p")), Ok(None)));
        assert_eq!(block_on(client.generate("p")), NO_CANDIDATES_FALLBACK);
    }

    #[test]
    fn non_success_status_gives_error_fallback() {
        let (client, _) = client_with(Reply::Respond(503, r#"{"error":{"code":503}}"#));
        assert!(matches!(block_on(client.try_generate("p")), Err(GenerateError::Status(503))));
        assert_eq!(block_on(client.generate("p")), ERROR_FALLBACK);
    }

    #[test]
    fn transport_failure_gives_error_fallback() {
        let (client, _) = client_with(Reply::Fail);
        assert_eq!(block_on(client.generate("p")), ERROR_FALLBACK);
    }

    #[test]
    fn malformed_json_gives_error_fallback() {
        let (client, _) = client_with(Reply::Respond(200, "<html>oops</html>"));
        assert!(matches!(block_on(client.try_generate("p")), Err(GenerateError::Malformed(_))));
        assert_eq!(block_on(client.generate("p")), ERROR_FALLBACK);
    }

    #[test]
    fn candidate_without_parts_is_an_error() {
        let (client, _) = client_with(Reply::Respond(200, r#"{"candidates":[{"content":{"parts":[]}}]}"#));
        assert!(matches!(block_on(client.try_generate("p")), Err(GenerateError::MissingText)));
        assert_eq!(block_on(client.generate("p")), ERROR_FALLBACK);
    }

    #[test]
    fn clients_compare_by_shared_transport() {
        let (client, _) = client_with(Reply::Fail);
        let (other, _) = client_with(Reply::Fail);
        assert!(client == client.clone());
        assert!(client != other);
    }
}
