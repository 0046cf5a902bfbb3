//! Gemini image API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::domain::{AppError, DEFAULT_IMAGE_MIME, GeminiApiConfig, InlineImage};
use crate::ports::{GenerationRequest, ImageGenerator, ImageGeneratorFactory};

const X_GOOG_API_KEY: &str = "x-goog-api-key";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// HTTP client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: Url,
    aspect_ratio: String,
    image_size: String,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("aspect_ratio", &self.aspect_ratio)
            .field("image_size", &self.image_size)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiApiConfig) -> Result<Self, AppError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            endpoint: config.endpoint()?,
            aspect_ratio: config.aspect_ratio.clone(),
            image_size: config.image_size.clone(),
            client,
        })
    }

    /// Create from environment variable with custom configuration.
    pub fn from_env_with_config(config: &GeminiApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Configuration(format!("{} environment variable not set", API_KEY_ENV))
            })?;

        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataPayload,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineDataPayload {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
    image_size: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    inline_data: Option<InlineDataPayload>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

impl HttpGeminiClient {
    fn build_request(&self, request: GenerationRequest) -> ApiRequest {
        let mut parts = vec![RequestPart::Text { text: request.prompt }];
        if let Some(image) = request.reference_image {
            parts.push(RequestPart::InlineData {
                inline_data: InlineDataPayload {
                    mime_type: Some(image.mime_type().to_string()),
                    data: image.data().to_string(),
                },
            });
        }

        ApiRequest {
            contents: vec![RequestContent { parts }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
                image_config: ImageConfig {
                    aspect_ratio: self.aspect_ratio.clone(),
                    image_size: self.image_size.clone(),
                },
            },
        }
    }

    fn send_request(&self, request: &ApiRequest) -> Result<InlineImage, AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::Http(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "image API responded");

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let details = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .ok()
                .filter(|message| !message.is_empty())
                .unwrap_or(body);
            return Err(AppError::Api { status: status.as_u16(), details });
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| AppError::Http(format!("Failed to parse response: {}", e)))?;

        extract_image(api_response)
    }
}

fn extract_image(response: ApiResponse) -> Result<InlineImage, AppError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .into_iter()
        .flat_map(|content| content.parts)
        .find_map(|part| part.inline_data)
        .map(|payload| {
            InlineImage::new(
                payload.mime_type.unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string()),
                payload.data,
            )
        })
        .ok_or(AppError::NoImageGenerated)
}

impl ImageGenerator for HttpGeminiClient {
    fn generate(&self, request: GenerationRequest) -> Result<InlineImage, AppError> {
        info!(
            endpoint = %self.endpoint,
            prompt_chars = request.prompt.chars().count(),
            with_reference = request.reference_image.is_some(),
            "requesting poster image"
        );
        let api_request = self.build_request(request);
        self.send_request(&api_request)
    }
}

/// Builds an [`HttpGeminiClient`] from the environment for each attempt.
#[derive(Debug, Clone)]
pub struct GeminiClientFactory {
    config: GeminiApiConfig,
}

impl GeminiClientFactory {
    pub fn new(config: GeminiApiConfig) -> Self {
        Self { config }
    }
}

impl ImageGeneratorFactory for GeminiClientFactory {
    fn create(&self) -> Result<Box<dyn ImageGenerator>, AppError> {
        Ok(Box::new(HttpGeminiClient::from_env_with_config(&self.config)?))
    }
}
