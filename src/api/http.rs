//! HTTP implementation of the Remindr API.
//!
//! Thin reqwest-based client for the Remindr REST backend. Error payloads are
//! decoded into [`ApiError::Rejected`] so the backend's human-readable message
//! reaches the UI; everything transport-level becomes [`ApiError::Network`].

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::{
    ApiError, Channel, ChannelCreateRequest, RemindrApi, Reminder, ReminderCreateRequest,
    ValidateCodeResponse,
};

/// Error payload shape returned by the backend on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

/// Paginated channel list response.
#[derive(Debug, Deserialize)]
struct ChannelListBody {
    outputs: Vec<Channel>,
}

/// Paginated reminder list response.
#[derive(Debug, Deserialize)]
struct ReminderListBody {
    reminders: Vec<Reminder>,
}

/// HTTP client for the Remindr service.
#[derive(Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl HttpApi {
    /// Create a new client for the given base URL and bearer token.
    pub fn new(base_url: &str, api_token: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.url(path))
            .bearer_auth(&self.api_token)
    }

    /// Turn a non-2xx response into an [`ApiError`], preferring the backend's
    /// own message/detail fields when the body decodes.
    async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return ApiError::Auth("Invalid or expired API token".to_string());
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message.or(body.detail));

        match message {
            Some(message) if !message.trim().is_empty() => ApiError::Rejected { message },
            _ => ApiError::Rejected {
                message: format!("Request failed with status {status}"),
            },
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        Self::check(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidData(e.to_string()))
    }
}

#[async_trait]
impl RemindrApi for HttpApi {
    async fn list_channels(&self) -> Result<Vec<Channel>, ApiError> {
        let response = self
            .request(reqwest::Method::GET, "/outputs/")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: ChannelListBody = Self::decode(response).await?;
        Ok(body.outputs)
    }

    async fn create_channel(&self, request: ChannelCreateRequest) -> Result<Channel, ApiError> {
        let response = self
            .request(reqwest::Method::POST, "/outputs/")
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn validate_code(&self, channel_ref: &str, code: &str) -> Result<ValidateCodeResponse, ApiError> {
        let response = self
            .request(reqwest::Method::POST, &format!("/outputs/{channel_ref}/validate"))
            .json(&serde_json::json!({ "code": code }))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn resend_code(&self, channel_ref: &str) -> Result<(), ApiError> {
        let response = self
            .request(reqwest::Method::POST, &format!("/outputs/{channel_ref}/resend-code"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete_channel(&self, channel_ref: &str) -> Result<(), ApiError> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("/outputs/{channel_ref}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }

    async fn list_reminders(&self) -> Result<Vec<Reminder>, ApiError> {
        let response = self
            .request(reqwest::Method::GET, "/reminders/")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: ReminderListBody = Self::decode(response).await?;
        Ok(body.reminders)
    }

    async fn create_reminder(&self, request: ReminderCreateRequest) -> Result<Reminder, ApiError> {
        let response = self
            .request(reqwest::Method::POST, "/reminders/")
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn delete_reminder(&self, reminder_id: &str) -> Result<(), ApiError> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("/reminders/{reminder_id}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }
}
