use serde_json::Value;

use crate::errors::Result;
use crate::simli::structs::text_to_video_stream_request::TextToVideoStreamRequest;

const API_URL: &str = "https://api.simli.ai/textToVideoStream";

#[derive(Clone, Debug)]
pub struct Simli {
    api_url: String,
    client: reqwest::Client,
}

/// API response with the body kept both raw and decoded. The body is decoded
/// whatever the status, since the caller prints it before branching.
#[derive(Debug, Clone)]
pub struct StreamResponse {
    pub status: u16,
    pub text: String,
    pub body: Value,
}

impl StreamResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    pub fn hls_url(&self) -> Option<&str> {
        self.body.get("hls_url").and_then(Value::as_str)
    }
}

impl Simli {
    pub fn new() -> Self {
        Self::with_api_url(API_URL.to_string())
    }

    /// Endpoint override, used by tests to point at a local mock server.
    pub fn with_api_url(api_url: String) -> Self {
        Self {
            api_url,
            client: reqwest::Client::new(),
        }
    }

    /// Issue the one `textToVideoStream` POST. Blocks until the remote
    /// responds; no timeout and no retries, matching the upstream contract.
    #[tracing::instrument(skip(self, request))]
    pub async fn text_to_video_stream(
        &self,
        request: &TextToVideoStreamRequest,
    ) -> Result<StreamResponse> {
        let response = self
            .client
            .post(&self.api_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(request)?)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)?;

        tracing::info!(status, "textToVideoStream response received");

        Ok(StreamResponse { status, text, body })
    }
}

impl Default for Simli {
    fn default() -> Self {
        Self::new()
    }
}
